/// The built-in GraphQL scalar types an [`InputValue`](crate::value::InputValue)
/// can be declared as.
///
/// `Null` is not a GraphQL scalar; it is the declared type of the explicit
/// [`Null`](crate::value::Null) sentinel value.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ScalarType {
    Boolean,
    Float,
    Id,
    Int,
    Null,
    String,
}
impl ScalarType {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Float => "Float",
            Self::Id => "ID",
            Self::Int => "Int",
            Self::Null => "Null",
            Self::String => "String",
        }
    }
}

/// Describes the declared GraphQL type of an input value, as it would appear
/// in a variable definition (`$var: [Int!]!`).
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum InputType {
    Enum(String),
    InputObject(String),
    List(Box<InputType>),
    NonNull(Box<InputType>),
    Scalar(ScalarType),
}
impl InputType {
    pub fn list_of(inner: InputType) -> Self {
        Self::List(Box::new(inner))
    }

    /// Wrap `inner` as non-null. Wrapping a type that is already non-null
    /// returns it unchanged (GraphQL has no `T!!`).
    pub fn non_null(inner: InputType) -> Self {
        match inner {
            non_null @ Self::NonNull(_) => non_null,
            nullable => Self::NonNull(Box::new(nullable)),
        }
    }

    /// Recursively unwrap list and non-null wrappers and return the name of
    /// the inner-most named type.
    pub fn innermost_type_name(&self) -> &str {
        match self {
            Self::Enum(name) | Self::InputObject(name) => name.as_str(),
            Self::List(inner) | Self::NonNull(inner) => inner.innermost_type_name(),
            Self::Scalar(scalar) => scalar.type_name(),
        }
    }

    pub fn nullable(&self) -> bool {
        !matches!(self, Self::NonNull(_))
    }

    /// The type as written in GraphQL syntax (e.g. `[UserInput!]`).
    pub fn type_name(&self) -> String {
        self.to_string()
    }
}
impl std::fmt::Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enum(name) | Self::InputObject(name) => f.write_str(name),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
            Self::Scalar(scalar) => f.write_str(scalar.type_name()),
        }
    }
}
impl std::convert::From<ScalarType> for InputType {
    fn from(value: ScalarType) -> Self {
        Self::Scalar(value)
    }
}
