use crate::value::InputType;
use crate::value::InputValue;
use crate::value::InputValueError;

type Result<T> = std::result::Result<T, InputValueError>;

/// An untyped reference to a variable, written as `$name`.
///
/// Because nothing is known about the referenced variable's type, asking a
/// [`Variable`] for its declared type fails. Use a
/// [`VariableDefinition`](crate::value::VariableDefinition) where a type is
/// needed.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Variable {
    name: String,
}
impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl InputValue for Variable {
    fn append_input_value(&self, sink: &mut String) -> Result<()> {
        sink.push('$');
        sink.push_str(&self.name);
        Ok(())
    }

    fn input_type() -> Result<InputType> {
        Err(InputValueError::UninferableInputType {
            value_kind: "bare variable reference".to_string(),
        })
    }

    fn is_variable(&self) -> bool {
        true
    }
}
