use crate::value::builtin_values::append_object;
use crate::value::InputType;
use crate::value::InputValue;
use crate::value::InputValueError;

/// A value of a named GraphQL input object type.
///
/// Implementors get an [`InputValue`] implementation for free: the literal is
/// `{field1: value1, field2: value2}` in the order returned by
/// [`fields`](InputObjectValue::fields), and the declared type is
/// [`OBJECT_TYPE_NAME`](InputObjectValue::OBJECT_TYPE_NAME).
///
/// ```rust
/// use libgraphql_query_builder::value::InputObjectValue;
/// use libgraphql_query_builder::value::InputValue;
///
/// #[derive(Debug)]
/// struct UserInput {
///     id: i32,
///     name: String,
/// }
/// impl InputObjectValue for UserInput {
///     const OBJECT_TYPE_NAME: &'static str = "UserInput";
///
///     fn fields(&self) -> Vec<(&str, &dyn InputValue)> {
///         vec![("id", &self.id as &dyn InputValue), ("name", &self.name)]
///     }
/// }
///
/// let user = UserInput { id: 1234, name: "cool_user".to_string() };
/// assert_eq!(
///     user.graphql_input_value().unwrap(),
///     "{id: 1234, name: \"cool_user\"}",
/// );
/// assert_eq!(UserInput::input_type().unwrap().type_name(), "UserInput");
/// ```
pub trait InputObjectValue: std::fmt::Debug + Send + Sync {
    const OBJECT_TYPE_NAME: &'static str;

    /// The object's fields, in the order they should be written.
    fn fields(&self) -> Vec<(&str, &dyn InputValue)>;
}

impl<T: InputObjectValue> InputValue for T {
    fn append_input_value(
        &self,
        sink: &mut String,
    ) -> Result<(), InputValueError> {
        append_object(sink, self.fields().into_iter())
    }

    fn input_type() -> Result<InputType, InputValueError> {
        Ok(InputType::InputObject(T::OBJECT_TYPE_NAME.to_string()))
    }

    fn contains_variable(&self) -> bool {
        self.fields().into_iter().any(|(_, value)| value.contains_variable())
    }
}
