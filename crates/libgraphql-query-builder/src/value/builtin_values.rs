use crate::value::InputType;
use crate::value::InputValue;
use crate::value::InputValueError;
use crate::value::ScalarType;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, InputValueError>;

/// The explicit GraphQL `null` literal.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Null;

impl InputValue for Null {
    fn append_input_value(&self, sink: &mut String) -> Result<()> {
        sink.push_str("null");
        Ok(())
    }

    fn input_type() -> Result<InputType> {
        Ok(ScalarType::Null.into())
    }
}

impl InputValue for bool {
    fn append_input_value(&self, sink: &mut String) -> Result<()> {
        sink.push_str(if *self { "true" } else { "false" });
        Ok(())
    }

    fn input_type() -> Result<InputType> {
        Ok(ScalarType::Boolean.into())
    }
}

macro_rules! int_input_value {
    ($($int_t:ty),+ $(,)?) => {$(
        impl InputValue for $int_t {
            fn append_input_value(&self, sink: &mut String) -> Result<()> {
                sink.push_str(&self.to_string());
                Ok(())
            }

            fn input_type() -> Result<InputType> {
                Ok(ScalarType::Int.into())
            }
        }
    )+};
}
int_input_value!(i8, i16, i32, i64, isize, u8, u16, u32);

macro_rules! float_input_value {
    ($($float_t:ty),+ $(,)?) => {$(
        impl InputValue for $float_t {
            fn append_input_value(&self, sink: &mut String) -> Result<()> {
                if !self.is_finite() {
                    return Err(InputValueError::NonFiniteFloat {
                        value: f64::from(*self),
                    });
                }
                // `Debug` is the shortest round-trip form and always keeps a
                // fraction or exponent (`1.0`, `1e300`).
                sink.push_str(&format!("{self:?}"));
                Ok(())
            }

            fn input_type() -> Result<InputType> {
                Ok(ScalarType::Float.into())
            }
        }
    )+};
}
float_input_value!(f32, f64);

impl InputValue for String {
    fn append_input_value(&self, sink: &mut String) -> Result<()> {
        append_quoted_string(sink, self);
        Ok(())
    }

    fn input_type() -> Result<InputType> {
        Ok(ScalarType::String.into())
    }
}

impl InputValue for &'static str {
    fn append_input_value(&self, sink: &mut String) -> Result<()> {
        append_quoted_string(sink, self);
        Ok(())
    }

    fn input_type() -> Result<InputType> {
        Ok(ScalarType::String.into())
    }
}

/// `None` is written as `null`. The declared type is the wrapped type's:
/// GraphQL types are nullable unless wrapped in
/// [`NonNull`](crate::value::NonNull).
impl<T: InputValue> InputValue for Option<T> {
    fn append_input_value(&self, sink: &mut String) -> Result<()> {
        match self {
            Some(value) => value.append_input_value(sink),
            None => Null.append_input_value(sink),
        }
    }

    fn input_type() -> Result<InputType> {
        T::input_type()
    }

    fn is_variable(&self) -> bool {
        self.as_ref().is_some_and(|value| value.is_variable())
    }

    fn contains_variable(&self) -> bool {
        self.as_ref().is_some_and(|value| value.contains_variable())
    }
}

impl<T: InputValue> InputValue for Vec<T> {
    fn append_input_value(&self, sink: &mut String) -> Result<()> {
        append_list(sink, self.iter())
    }

    fn input_type() -> Result<InputType> {
        Ok(InputType::list_of(T::input_type()?))
    }

    fn contains_variable(&self) -> bool {
        self.iter().any(T::contains_variable)
    }
}

impl<T: InputValue, const N: usize> InputValue for [T; N] {
    fn append_input_value(&self, sink: &mut String) -> Result<()> {
        append_list(sink, self.iter())
    }

    fn input_type() -> Result<InputType> {
        Ok(InputType::list_of(T::input_type()?))
    }

    fn contains_variable(&self) -> bool {
        self.iter().any(T::contains_variable)
    }
}

/// A raw object literal. Its entries are written in insertion order, but a
/// bare map has no GraphQL type name; declare variables with an
/// [`InputObjectValue`](crate::value::InputObjectValue) instead.
impl<T: InputValue> InputValue for IndexMap<String, T> {
    fn append_input_value(&self, sink: &mut String) -> Result<()> {
        append_object(
            sink,
            self.iter().map(|(key, value)| (key.as_str(), value as &dyn InputValue)),
        )
    }

    fn input_type() -> Result<InputType> {
        Err(InputValueError::UninferableInputType {
            value_kind: "raw object literal".to_string(),
        })
    }

    fn contains_variable(&self) -> bool {
        self.values().any(T::contains_variable)
    }
}

fn append_list<'a, T: InputValue + 'a>(
    sink: &mut String,
    items: impl Iterator<Item = &'a T>,
) -> Result<()> {
    sink.push('[');
    for (idx, item) in items.enumerate() {
        if idx > 0 {
            sink.push_str(", ");
        }
        item.append_input_value(sink)?;
    }
    sink.push(']');
    Ok(())
}

pub(super) fn append_object<'a>(
    sink: &mut String,
    fields: impl Iterator<Item = (&'a str, &'a dyn InputValue)>,
) -> Result<()> {
    sink.push('{');
    for (idx, (field_name, field_value)) in fields.enumerate() {
        if idx > 0 {
            sink.push_str(", ");
        }
        sink.push_str(field_name);
        sink.push_str(": ");
        field_value.append_input_value(sink)?;
    }
    sink.push('}');
    Ok(())
}

/// Append `value` as a quoted GraphQL `StringValue`, escaping the characters
/// the grammar does not allow to appear raw.
pub(crate) fn append_quoted_string(sink: &mut String, value: &str) {
    sink.push('"');
    for ch in value.chars() {
        match ch {
            '"' => sink.push_str("\\\""),
            '\\' => sink.push_str("\\\\"),
            '\n' => sink.push_str("\\n"),
            '\r' => sink.push_str("\\r"),
            '\t' => sink.push_str("\\t"),
            '\u{8}' => sink.push_str("\\b"),
            '\u{c}' => sink.push_str("\\f"),
            ch if ch.is_control() => {
                sink.push_str(&format!("\\u{:04X}", ch as u32));
            },
            ch => sink.push(ch),
        }
    }
    sink.push('"');
}
