use crate::value::Arguments;
use crate::value::InputType;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, InputValueError>;

/// A shared, type-erased [`InputValue`].
///
/// This is how heterogeneous values are stored side by side (for example in
/// [`Arguments`] or in a `Vec<InputValueRef>` list literal). A type-erased
/// value keeps its literal encoding but has no declared type.
pub type InputValueRef = Arc<dyn InputValue>;

/// A host value that can be written as a GraphQL input value.
pub trait InputValue: std::fmt::Debug + Send + Sync {
    /// Append the GraphQL literal for this value to `sink`.
    fn append_input_value(&self, sink: &mut String) -> Result<()>;

    /// The GraphQL literal for this value.
    ///
    /// Convenience wrapper around
    /// [`append_input_value`](InputValue::append_input_value).
    fn graphql_input_value(&self) -> Result<String> {
        let mut literal = String::new();
        self.append_input_value(&mut literal)?;
        Ok(literal)
    }

    /// The GraphQL type that a variable of this host type is declared with.
    ///
    /// Fails with [`InputValueError::UninferableInputType`] for categories of
    /// values that carry no well-known type name.
    fn input_type() -> Result<InputType> where Self: Sized;

    /// Whether this value is a reference to a variable (`$name`).
    fn is_variable(&self) -> bool {
        false
    }

    /// Whether this value is, or anywhere within its list items or object
    /// fields holds, a reference to a variable.
    fn contains_variable(&self) -> bool {
        self.is_variable()
    }

    /// Move this value behind a shared [`InputValueRef`].
    fn into_input_value_ref(self) -> InputValueRef where Self: Sized + 'static {
        Arc::new(self)
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum InputValueError {
    #[error(
        "`{case_name}` is a reserved GraphQL literal and cannot be used as an \
        enum value"
    )]
    InvalidEnumCase {
        case_name: String,
    },

    #[error(
        "The default value of the `${variable_name}` variable refers to a \
        variable. A variable's default value must be a constant."
    )]
    InvalidVariableDefault {
        variable_name: String,
    },

    #[error("`{value}` is not a finite number and has no GraphQL literal form")]
    NonFiniteFloat {
        value: f64,
    },

    #[error("A {value_kind} does not have a declared GraphQL input type")]
    UninferableInputType {
        value_kind: String,
    },
}

impl InputValue for InputValueRef {
    fn append_input_value(&self, sink: &mut String) -> Result<()> {
        self.as_ref().append_input_value(sink)
    }

    fn input_type() -> Result<InputType> {
        Err(InputValueError::UninferableInputType {
            value_kind: "type-erased input value".to_string(),
        })
    }

    fn is_variable(&self) -> bool {
        self.as_ref().is_variable()
    }

    fn contains_variable(&self) -> bool {
        self.as_ref().contains_variable()
    }
}

/// Append `(name1: value1, name2: value2)` to `sink`. Nothing is written when
/// there are no arguments.
pub(crate) fn append_arguments(
    sink: &mut String,
    arguments: &Arguments,
) -> Result<()> {
    if arguments.is_empty() {
        return Ok(());
    }

    sink.push('(');
    for (idx, (arg_name, arg_value)) in arguments.iter().enumerate() {
        if idx > 0 {
            sink.push_str(", ");
        }
        sink.push_str(arg_name);
        sink.push_str(": ");
        arg_value.append_input_value(sink)?;
    }
    sink.push(')');
    Ok(())
}
