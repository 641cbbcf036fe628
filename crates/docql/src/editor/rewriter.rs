use crate::ast::Argument;
use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::Field;
use crate::ast::Fragment;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::Operation;
use crate::ast::Selection;
use crate::ast::Value;
use crate::ast::VariableDefinition;
use crate::editor::Action;
use crate::editor::Context;

/// A rewrite pass: one hook per node kind, each a no-op by default.
///
/// Hooks mutate their node in place and/or record a structural edit on the
/// [`Action`]. The `Action`'s type parameter is the kind of the node's
/// *siblings*: a field hook edits a selection list, so its replacement and
/// splice values are [`Selection`]s.
///
/// Returning an error aborts the walk immediately. Mutations already
/// applied stand; the engine is not transactional.
pub trait Rewriter {
    type Error;

    fn operation(
        &mut self,
        _operation: &mut Operation,
        _action: &mut Action<Definition>,
        _context: &Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn fragment(
        &mut self,
        _fragment: &mut Fragment,
        _action: &mut Action<Definition>,
        _context: &Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn field(
        &mut self,
        _field: &mut Field,
        _action: &mut Action<Selection>,
        _context: &Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn fragment_spread(
        &mut self,
        _spread: &mut FragmentSpread,
        _action: &mut Action<Selection>,
        _context: &Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn inline_fragment(
        &mut self,
        _inline: &mut InlineFragment,
        _action: &mut Action<Selection>,
        _context: &Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn argument(
        &mut self,
        _argument: &mut Argument,
        _action: &mut Action<Argument>,
        _context: &Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn directive(
        &mut self,
        _directive: &mut Directive,
        _action: &mut Action<Directive>,
        _context: &Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn variable_definition(
        &mut self,
        _definition: &mut VariableDefinition,
        _action: &mut Action<VariableDefinition>,
        _context: &Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Invoked for every value, including each element of a list and each
    /// entry value of an input object. In single-slot positions (an
    /// argument's value, a default value, an object entry) only
    /// [`Action::replace`] takes effect.
    fn value(
        &mut self,
        _value: &mut Value,
        _action: &mut Action<Value>,
        _context: &Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}
