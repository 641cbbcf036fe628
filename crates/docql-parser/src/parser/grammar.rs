//! The document grammar, expressed over the combinator substrate.
//!
//! ```text
//! document        := definition* EOF
//! definition      := fragment | operation
//! operation       := implicit_query | named_operation
//! implicit_query  := selection_set
//! named_operation := KIND NAME? variable_defs? directive* selection_set
//! selection_set   := '{' (inline_fragment | fragment_spread | field)+ '}'
//! fragment_spread := '...' NAME directive*
//! inline_fragment := '...' ('on' NAME)? directive* selection_set
//! field           := (NAME ':')? NAME arguments? directive* selection_set?
//! arguments       := '(' argument+ ')'
//! argument        := NAME ':' value
//! value           := STRING | NUMBER | NAME | '$' NAME
//!                  | '{' (NAME ':' value)* '}' | '[' value* ']'
//! directive       := '@' NAME arguments?
//! variable_defs   := '(' ('$' NAME ':' type ('=' value)? directive*)+ ')'
//! type            := NAME '!'? | '[' type ']' '!'?
//! fragment        := 'fragment' NAME 'on' NAME directive* selection_set
//! ```
//!
//! Every production that can legally fail locally (an operation keyword vs.
//! an implicit anonymous query, an alias vs. a field name) goes through a
//! rewinding combinator rather than lookahead.

use crate::ParseError;
use crate::ast::Argument;
use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::Fragment;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::Operation;
use crate::ast::OperationKind;
use crate::ast::Selection;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::ast::VariableDefinition;
use crate::parser::Parser;
use crate::token::Punct;
use crate::token::TokenKind;

impl Parser {
    // =========================================================================
    // Top-level definitions
    // =========================================================================

    pub(crate) fn document(&mut self) -> Result<Document, ParseError> {
        let definitions = self.many(|p| p.definition(), None);
        self.expect_eof()?;
        Ok(Document::new(definitions))
    }

    fn definition(&mut self) -> Result<Definition, ParseError> {
        self.one_of(&[
            ("fragment", fragment_definition),
            ("operation", operation_definition),
        ])
    }

    fn operation(&mut self) -> Result<Operation, ParseError> {
        self.one_of(&[
            ("selection set", implicit_query),
            ("named operation", named_operation),
        ])
    }

    fn implicit_query(&mut self) -> Result<Operation, ParseError> {
        let selection_set = self.selection_set()?;
        let mut operation = Operation::new(OperationKind::Query);
        operation.selection_set = selection_set;
        Ok(operation)
    }

    fn named_operation(&mut self) -> Result<Operation, ParseError> {
        let kind = self.operation_kind()?;
        let name = self.optional(|p| p.expect_name());
        let variable_definitions = self
            .optional(|p| p.variable_definitions())
            .unwrap_or_default();
        let directives = self.many(|p| p.directive(), None);
        let selection_set = self.selection_set()?;
        Ok(Operation {
            kind,
            name,
            variable_definitions,
            directives,
            selection_set,
        })
    }

    fn operation_kind(&mut self) -> Result<OperationKind, ParseError> {
        if let TokenKind::Name(name) = &self.current().kind
            && let Some(kind) = OperationKind::from_keyword(name)
        {
            self.expect_name()?;
            return Ok(kind);
        }
        Err(ParseError::Expected {
            wanted: "`query`, `mutation`, or `subscription`".to_string(),
            found: self.current().clone(),
        })
    }

    fn fragment(&mut self) -> Result<Fragment, ParseError> {
        self.expect_keyword("fragment")?;
        let name_span = self.current_span();
        let name = self.expect_name()?;
        if name == "on" {
            return Err(ParseError::Illegal {
                message: "invalid fragment name `on`".to_string(),
                span: name_span,
            });
        }
        self.expect_keyword("on")?;
        let type_condition = self.expect_name()?;
        let directives = self.many(|p| p.directive(), None);
        let selection_set = self.selection_set()?;
        Ok(Fragment {
            name,
            type_condition,
            directives,
            selection_set,
        })
    }

    // =========================================================================
    // Selections
    // =========================================================================

    pub(crate) fn selection_set(&mut self) -> Result<Vec<Selection>, ParseError> {
        self.bracket(Punct::CurlyOpen, Punct::CurlyClose, |p| {
            p.some(|p| p.selection())
        })
    }

    fn selection(&mut self) -> Result<Selection, ParseError> {
        self.one_of(&[
            ("inline fragment", inline_fragment_selection),
            ("fragment spread", fragment_spread_selection),
            ("field", field_selection),
        ])
    }

    fn inline_fragment(&mut self) -> Result<InlineFragment, ParseError> {
        self.expect_punct(Punct::Ellipsis)?;
        let type_condition = self.optional(|p| {
            p.expect_keyword("on")?;
            p.expect_name()
        });
        let directives = self.many(|p| p.directive(), None);
        let selection_set = self.selection_set()?;
        Ok(InlineFragment {
            type_condition,
            directives,
            selection_set,
        })
    }

    fn fragment_spread(&mut self) -> Result<FragmentSpread, ParseError> {
        self.expect_punct(Punct::Ellipsis)?;
        let name_span = self.current_span();
        let name = self.expect_name()?;
        if name == "on" {
            return Err(ParseError::Illegal {
                message: "invalid fragment name `on`".to_string(),
                span: name_span,
            });
        }
        let directives = self.many(|p| p.directive(), None);
        Ok(FragmentSpread { name, directives })
    }

    fn field(&mut self) -> Result<Field, ParseError> {
        let alias = self.optional(|p| {
            let alias = p.expect_name()?;
            p.expect_punct(Punct::Colon)?;
            Ok(alias)
        });
        let name = self.expect_name()?;
        let arguments = self.optional(|p| p.arguments()).unwrap_or_default();
        let directives = self.many(|p| p.directive(), None);
        let selection_set = self.optional(|p| p.selection_set()).unwrap_or_default();
        Ok(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            resolved_type: None,
        })
    }

    // =========================================================================
    // Arguments, directives, values
    // =========================================================================

    fn arguments(&mut self) -> Result<Vec<Argument>, ParseError> {
        self.bracket(Punct::ParenOpen, Punct::ParenClose, |p| {
            p.some(|p| p.argument())
        })
    }

    fn argument(&mut self) -> Result<Argument, ParseError> {
        let name = self.expect_name()?;
        self.expect_punct(Punct::Colon)?;
        let value = self.value()?;
        Ok(Argument { name, value })
    }

    pub(crate) fn directive(&mut self) -> Result<Directive, ParseError> {
        self.expect_punct(Punct::At)?;
        let name = self.expect_name()?;
        let arguments = self.optional(|p| p.arguments()).unwrap_or_default();
        Ok(Directive { name, arguments })
    }

    fn value(&mut self) -> Result<Value, ParseError> {
        match &self.current().kind {
            TokenKind::String(_) => match self.consume_kind() {
                TokenKind::String(text) => Ok(Value::String(text)),
                _ => unreachable!("matched a string token"),
            },
            TokenKind::Number(_) => match self.consume_kind() {
                TokenKind::Number(literal) => Ok(if literal.is_float() {
                    Value::Float(literal)
                } else {
                    Value::Int(literal)
                }),
                _ => unreachable!("matched a number token"),
            },
            TokenKind::Name(_) => {
                let name = self.expect_name()?;
                Ok(match name.as_str() {
                    "true" => Value::Boolean(true),
                    "false" => Value::Boolean(false),
                    "null" => Value::Null,
                    _ => Value::Enum(name),
                })
            }
            TokenKind::Punct(Punct::Dollar) => {
                self.expect_punct(Punct::Dollar)?;
                let name = self.expect_name()?;
                Ok(Value::variable(name))
            }
            TokenKind::Punct(Punct::CurlyOpen) => {
                let entries = self.bracket(Punct::CurlyOpen, Punct::CurlyClose, |p| {
                    Ok(p.many(|p| p.object_entry(), None))
                })?;
                Ok(Value::Object(entries))
            }
            TokenKind::Punct(Punct::SquareOpen) => {
                let items = self.bracket(Punct::SquareOpen, Punct::SquareClose, |p| {
                    Ok(p.many(|p| p.value(), None))
                })?;
                Ok(Value::List(items))
            }
            _ => Err(ParseError::Unexpected {
                found: self.current().clone(),
            }),
        }
    }

    fn object_entry(&mut self) -> Result<(String, Value), ParseError> {
        let name = self.expect_name()?;
        self.expect_punct(Punct::Colon)?;
        let value = self.value()?;
        Ok((name, value))
    }

    // =========================================================================
    // Variables and types
    // =========================================================================

    fn variable_definitions(&mut self) -> Result<Vec<VariableDefinition>, ParseError> {
        self.bracket(Punct::ParenOpen, Punct::ParenClose, |p| {
            p.some(|p| p.variable_definition())
        })
    }

    fn variable_definition(&mut self) -> Result<VariableDefinition, ParseError> {
        self.expect_punct(Punct::Dollar)?;
        let name = self.expect_name()?;
        self.expect_punct(Punct::Colon)?;
        let annotation = self.type_annotation()?;
        let default_value = self.optional(|p| {
            p.expect_punct(Punct::Equals)?;
            p.value()
        });
        let directives = self.many(|p| p.directive(), None);
        Ok(VariableDefinition {
            name,
            annotation,
            default_value,
            directives,
        })
    }

    pub(crate) fn type_annotation(&mut self) -> Result<TypeAnnotation, ParseError> {
        if matches!(self.current().kind, TokenKind::Punct(Punct::SquareOpen)) {
            let of_type = self.bracket(Punct::SquareOpen, Punct::SquareClose, |p| {
                p.type_annotation()
            })?;
            let mut annotation = TypeAnnotation::list_of(of_type);
            if self.optional(|p| p.expect_punct(Punct::Bang)).is_some() {
                annotation = annotation.non_null();
            }
            Ok(annotation)
        } else {
            let name = self.expect_name()?;
            let mut annotation = TypeAnnotation::named(name);
            if self.optional(|p| p.expect_punct(Punct::Bang)).is_some() {
                annotation = annotation.non_null();
            }
            Ok(annotation)
        }
    }
}

// =============================================================================
// Named alternatives for `one_of`
// =============================================================================

fn fragment_definition(parser: &mut Parser) -> Result<Definition, ParseError> {
    parser.fragment().map(Definition::Fragment)
}

fn operation_definition(parser: &mut Parser) -> Result<Definition, ParseError> {
    parser.operation().map(Definition::Operation)
}

fn implicit_query(parser: &mut Parser) -> Result<Operation, ParseError> {
    parser.implicit_query()
}

fn named_operation(parser: &mut Parser) -> Result<Operation, ParseError> {
    parser.named_operation()
}

fn inline_fragment_selection(parser: &mut Parser) -> Result<Selection, ParseError> {
    parser.inline_fragment().map(Selection::InlineFragment)
}

fn fragment_spread_selection(parser: &mut Parser) -> Result<Selection, ParseError> {
    parser.fragment_spread().map(Selection::FragmentSpread)
}

fn field_selection(parser: &mut Parser) -> Result<Selection, ParseError> {
    parser.field().map(Selection::Field)
}
