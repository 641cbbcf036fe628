use smallvec::SmallVec;

/// The structural edit a hook records against the node it was invoked on.
///
/// A hook receives a fresh `Action` for its node and may call any of the
/// edit methods; [`replace`](Action::replace), [`delete`](Action::delete),
/// and [`expand`](Action::expand) are mutually exclusive outcomes, so the
/// last one called wins. [`insert_before`](Action::insert_before) and
/// [`insert_after`](Action::insert_after) accumulate independently of the
/// outcome.
///
/// In single-slot positions (an argument's value, a variable definition's
/// default, an object entry's value) only `replace` can take effect; the
/// other edits are ignored there because the slot has no sibling list to
/// splice into.
#[derive(Debug)]
pub struct Action<T> {
    outcome: Option<Outcome<T>>,
    before: SmallVec<[T; 1]>,
    after: SmallVec<[T; 1]>,
}

#[derive(Debug)]
pub(super) enum Outcome<T> {
    Replace(T),
    Delete,
    Expand(Vec<T>),
}

impl<T> Action<T> {
    pub(super) fn new() -> Self {
        Self {
            outcome: None,
            before: SmallVec::new(),
            after: SmallVec::new(),
        }
    }

    /// Substitutes `node` for the current node.
    pub fn replace(&mut self, node: T) {
        self.outcome = Some(Outcome::Replace(node));
    }

    /// Splices `node` in as a sibling immediately before the current node.
    pub fn insert_before(&mut self, node: T) {
        self.before.push(node);
    }

    /// Splices `node` in as a sibling immediately after the current node.
    pub fn insert_after(&mut self, node: T) {
        self.after.push(node);
    }

    /// Removes the current node from its parent's list.
    ///
    /// The removal is applied exactly at this node's own edit frame; it
    /// never disturbs siblings or ancestors.
    pub fn delete(&mut self) {
        self.outcome = Some(Outcome::Delete);
    }

    /// Replaces the current node with an ordered sequence of nodes.
    ///
    /// Expanded nodes are walked in full (hook and children), so expansion
    /// that produces further expandable nodes converges in one pass.
    pub fn expand(&mut self, nodes: impl IntoIterator<Item = T>) {
        self.outcome = Some(Outcome::Expand(nodes.into_iter().collect()));
    }

    pub(super) fn into_parts(self) -> (SmallVec<[T; 1]>, Option<Outcome<T>>, SmallVec<[T; 1]>) {
        (self.before, self.outcome, self.after)
    }

    /// The replacement value, for single-slot positions where the other
    /// edits cannot apply.
    pub(super) fn into_slot_replacement(self) -> Option<T> {
        match self.outcome {
            Some(Outcome::Replace(node)) => Some(node),
            _ => None,
        }
    }
}
