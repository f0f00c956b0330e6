use crate::value::InputType;
use crate::value::InputValue;
use crate::value::InputValueError;

type Result<T> = std::result::Result<T, InputValueError>;

/// Marks the wrapped value's type as non-null (`T!`).
///
/// The wrapper only affects the declared type; the literal is the wrapped
/// value's literal.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct NonNull<T: InputValue>(T);
impl<T: InputValue> NonNull<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    pub fn inner(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}
impl<T: InputValue> std::convert::From<T> for NonNull<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T: InputValue> InputValue for NonNull<T> {
    fn append_input_value(&self, sink: &mut String) -> Result<()> {
        self.0.append_input_value(sink)
    }

    fn input_type() -> Result<InputType> {
        Ok(InputType::non_null(T::input_type()?))
    }

    fn is_variable(&self) -> bool {
        self.0.is_variable()
    }

    fn contains_variable(&self) -> bool {
        self.0.contains_variable()
    }
}
