use crate::value::append_quoted_string;
use crate::value::InputType;
use crate::value::InputValue;
use crate::value::InputValueError;
use crate::value::ScalarType;

type Result<T> = std::result::Result<T, InputValueError>;

/// A value of the built-in `ID` scalar.
///
/// IDs are always written as quoted strings, including IDs built from
/// integers.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct IdValue(String);
impl IdValue {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}
impl std::convert::From<&str> for IdValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
impl std::convert::From<String> for IdValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

macro_rules! id_from_int {
    ($($int_t:ty),+ $(,)?) => {$(
        impl std::convert::From<$int_t> for IdValue {
            fn from(value: $int_t) -> Self {
                Self(value.to_string())
            }
        }
    )+};
}
id_from_int!(i32, i64, u32, u64, usize);

impl InputValue for IdValue {
    fn append_input_value(&self, sink: &mut String) -> Result<()> {
        append_quoted_string(sink, &self.0);
        Ok(())
    }

    fn input_type() -> Result<InputType> {
        Ok(ScalarType::Id.into())
    }
}
