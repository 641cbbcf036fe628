use crate::NumericLiteral;
use crate::ast::VariableReference;
use crate::print::Printer;
use crate::print::Render;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

/// Tolerance for numeric equality when either operand is floating.
const FLOAT_EQ_EPSILON: f64 = 1e-8;

/// An input value literal.
///
/// Numeric variants keep the decomposed [`NumericLiteral`] so a document
/// renders its numbers exactly as they were written. Object values keep
/// insertion order and permit duplicate keys; duplicates are a validation
/// concern, not a construction error.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub enum Value {
    Int(NumericLiteral),
    Float(NumericLiteral),
    String(String),
    Boolean(bool),
    Null,
    Enum(String),
    List(Vec<Value>),
    Object(Vec<(String, Value)>),
    Variable(VariableReference),
}

impl Value {
    /// Shorthand for a variable reference value.
    pub fn variable(name: impl Into<String>) -> Self {
        Value::Variable(VariableReference::new(name))
    }

    /// The built-in scalar type name matching this literal's kind, if any.
    ///
    /// Used by validation's fallback rule: a literal of kind `Float` only
    /// satisfies a custom scalar that is itself named `Float`.
    pub fn scalar_kind_name(&self) -> Option<&'static str> {
        match self {
            Value::Int(_) => Some("Int"),
            Value::Float(_) => Some("Float"),
            Value::String(_) => Some("String"),
            Value::Boolean(_) => Some("Boolean"),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl PartialEq for Value {
    /// Exact equality for non-numeric kinds. Numeric comparisons go through
    /// `f64` with an absolute-value epsilon when either operand is floating,
    /// and integer equality otherwise, so `1.0` equals `1` but `"1"` does
    /// not.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Value::Int(a) | Value::Float(a),
                Value::Int(b) | Value::Float(b),
            ) => {
                if a.is_float() || b.is_float() {
                    (a.as_f64() - b.as_f64()).abs() < FLOAT_EQ_EPSILON
                } else {
                    a.as_i64() == b.as_i64()
                }
            }
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Enum(a), Value::Enum(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Variable(a), Value::Variable(b)) => a == b,
            _ => false,
        }
    }
}

#[inherent]
impl Render for Value {
    pub fn render(&self, out: &mut Printer) {
        match self {
            Value::Int(literal) | Value::Float(literal) => {
                out.push_str(&literal.to_string());
            }
            Value::String(text) => out.push_quoted(text),
            Value::Boolean(true) => out.push_str("true"),
            Value::Boolean(false) => out.push_str("false"),
            Value::Null => out.push_str("null"),
            Value::Enum(name) => out.push_str(name),
            Value::List(items) => {
                out.push_str("[");
                crate::print::render_comma_separated(items, out);
                out.push_str("]");
            }
            Value::Object(entries) => {
                out.push_str("{");
                for (i, (name, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(name);
                    out.push_str(": ");
                    value.render(out);
                }
                out.push_str("}");
            }
            Value::Variable(reference) => reference.render(out),
        }
    }
}
