use crate::value::InputType;
use crate::value::InputValue;
use crate::value::InputValueError;

type Result<T> = std::result::Result<T, InputValueError>;

/// A variable whose declared type is derived from the host type `T`, with an
/// optional default value of that same type.
///
/// Used as an input value, a [`VariableDefinition`] is written as `$name`
/// and reports `T`'s declared type as its own. Operations hold the
/// type-erased form produced by
/// [`type_erase`](VariableDefinition::type_erase).
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition<T: InputValue> {
    default_value: Option<T>,
    name: String,
}
impl<T: InputValue> VariableDefinition<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            default_value: None,
            name: name.into(),
        }
    }

    pub fn with_default_value(name: impl Into<String>, default_value: T) -> Self {
        Self {
            default_value: Some(default_value),
            name: name.into(),
        }
    }

    pub fn default_value(&self) -> Option<&T> {
        self.default_value.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Resolve the declared type and encode the default value, producing an
    /// [`AnyVariableDefinition`] that no longer depends on `T`.
    ///
    /// Fails with [`InputValueError::InvalidVariableDefault`] if the default
    /// value is or contains a variable, or with
    /// [`InputValueError::UninferableInputType`] if `T` has no declared type.
    pub fn type_erase(&self) -> Result<AnyVariableDefinition> {
        let default_value = match &self.default_value {
            Some(default_value) if default_value.contains_variable() => {
                return Err(InputValueError::InvalidVariableDefault {
                    variable_name: self.name.to_owned(),
                });
            },
            Some(default_value) => Some(default_value.graphql_input_value()?),
            None => None,
        };
        let input_type = T::input_type()?;

        log::debug!(
            "Declared variable `${}` with type `{input_type}`.",
            self.name,
        );

        Ok(AnyVariableDefinition {
            default_value,
            input_type,
            name: self.name.to_owned(),
        })
    }
}

impl<T: InputValue> InputValue for VariableDefinition<T> {
    fn append_input_value(&self, sink: &mut String) -> Result<()> {
        sink.push('$');
        sink.push_str(&self.name);
        Ok(())
    }

    fn input_type() -> Result<InputType> {
        T::input_type()
    }

    fn is_variable(&self) -> bool {
        true
    }
}

/// A type-erased variable definition: the variable's name, its resolved
/// [`InputType`] and its pre-encoded default value (if any).
///
/// Its [`Display`](std::fmt::Display) form is the variable definition as it
/// appears in an operation header: `$name: Type = default`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct AnyVariableDefinition {
    default_value: Option<String>,
    input_type: InputType,
    name: String,
}
impl AnyVariableDefinition {
    /// The GraphQL literal of the default value, if one was given.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn input_type(&self) -> &InputType {
        &self.input_type
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
impl std::fmt::Display for AnyVariableDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}: {}", self.name, self.input_type)?;
        if let Some(default_value) = &self.default_value {
            write!(f, " = {default_value}")?;
        }
        Ok(())
    }
}

/// A type-erased definition can still be referenced as `$name`, but its type
/// is only known per-instance, so it has no static declared type.
impl InputValue for AnyVariableDefinition {
    fn append_input_value(&self, sink: &mut String) -> Result<()> {
        sink.push('$');
        sink.push_str(&self.name);
        Ok(())
    }

    fn input_type() -> Result<InputType> {
        Err(InputValueError::UninferableInputType {
            value_kind: "type-erased variable definition".to_string(),
        })
    }

    fn is_variable(&self) -> bool {
        true
    }
}
