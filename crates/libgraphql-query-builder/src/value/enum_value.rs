use crate::value::InputType;
use crate::value::InputValue;
use crate::value::InputValueError;
use std::marker::PhantomData;

type Result<T> = std::result::Result<T, InputValueError>;

/// Literals that would be read back as a boolean or null rather than as an
/// enum value.
const RESERVED_CASE_NAMES: [&str; 3] = ["false", "null", "true"];

fn validate_case_name(case_name: &str) -> Result<()> {
    if RESERVED_CASE_NAMES.contains(&case_name) {
        return Err(InputValueError::InvalidEnumCase {
            case_name: case_name.to_string(),
        });
    }
    Ok(())
}

/// Implemented by host types that stand for a GraphQL enum type, supplying
/// the enum's declared type name.
pub trait EnumTypeName: Send + Sync + 'static {
    const ENUM_TYPE_NAME: &'static str;
}

/// A single case of the GraphQL enum identified by `E`.
///
/// ```rust
/// use libgraphql_query_builder::value::EnumTypeName;
/// use libgraphql_query_builder::value::EnumValue;
/// use libgraphql_query_builder::value::InputValue;
///
/// struct Color;
/// impl EnumTypeName for Color {
///     const ENUM_TYPE_NAME: &'static str = "Color";
/// }
///
/// let red = EnumValue::<Color>::new("RED").unwrap();
/// assert_eq!(red.graphql_input_value().unwrap(), "RED");
/// assert_eq!(EnumValue::<Color>::input_type().unwrap().type_name(), "Color");
/// assert!(EnumValue::<Color>::new("null").is_err());
/// ```
pub struct EnumValue<E: EnumTypeName> {
    case_name: String,
    phantom: PhantomData<fn() -> E>,
}
impl<E: EnumTypeName> EnumValue<E> {
    /// Fails with [`InputValueError::InvalidEnumCase`] if `case_name` is
    /// `null`, `true` or `false`.
    pub fn new(case_name: impl Into<String>) -> Result<Self> {
        let case_name = case_name.into();
        validate_case_name(&case_name)?;
        Ok(Self {
            case_name,
            phantom: PhantomData,
        })
    }

    pub fn case_name(&self) -> &str {
        self.case_name.as_str()
    }
}
impl<E: EnumTypeName> Clone for EnumValue<E> {
    fn clone(&self) -> Self {
        Self {
            case_name: self.case_name.clone(),
            phantom: PhantomData,
        }
    }
}
impl<E: EnumTypeName> std::fmt::Debug for EnumValue<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnumValue")
            .field("enum_type_name", &E::ENUM_TYPE_NAME)
            .field("case_name", &self.case_name)
            .finish()
    }
}
impl<E: EnumTypeName> PartialEq for EnumValue<E> {
    fn eq(&self, other: &Self) -> bool {
        self.case_name == other.case_name
    }
}

impl<E: EnumTypeName> InputValue for EnumValue<E> {
    fn append_input_value(&self, sink: &mut String) -> Result<()> {
        sink.push_str(&self.case_name);
        Ok(())
    }

    fn input_type() -> Result<InputType> {
        Ok(InputType::Enum(E::ENUM_TYPE_NAME.to_string()))
    }
}

/// An enum value that is not tied to any particular GraphQL enum type.
///
/// It can be used anywhere a literal is needed (e.g. an argument), but it
/// cannot declare a variable's type.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct AnyEnumValue {
    case_name: String,
}
impl AnyEnumValue {
    /// Fails with [`InputValueError::InvalidEnumCase`] if `case_name` is
    /// `null`, `true` or `false`.
    pub fn new(case_name: impl Into<String>) -> Result<Self> {
        let case_name = case_name.into();
        validate_case_name(&case_name)?;
        Ok(Self { case_name })
    }

    pub fn case_name(&self) -> &str {
        self.case_name.as_str()
    }
}
impl<E: EnumTypeName> std::convert::From<EnumValue<E>> for AnyEnumValue {
    fn from(value: EnumValue<E>) -> Self {
        Self {
            case_name: value.case_name,
        }
    }
}

impl InputValue for AnyEnumValue {
    fn append_input_value(&self, sink: &mut String) -> Result<()> {
        sink.push_str(&self.case_name);
        Ok(())
    }

    fn input_type() -> Result<InputType> {
        Err(InputValueError::UninferableInputType {
            value_kind: "type-erased enum value".to_string(),
        })
    }
}
