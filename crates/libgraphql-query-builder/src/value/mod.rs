//! Encoding of host values as GraphQL input values.
//!
//! Every value that can appear as a field argument, a directive argument, or
//! a variable's default value implements [`InputValue`]. The trait exposes two
//! independent capabilities:
//!
//! - **Literal encoding** ([`InputValue::graphql_input_value`]): the value
//!   written in GraphQL syntax (`true`, `"text"`, `[1, 2]`, `{a: 1}`,
//!   `$variable`, ...).
//!
//! - **Declared type** ([`InputValue::input_type`]): the GraphQL type name a
//!   variable of this host type is declared with (`Boolean`, `[Int!]!`,
//!   `UserInput`, ...). This is a property of the host *type*, not of any one
//!   value, and some categories of value have none (raw object literals,
//!   type-erased enum values, bare variable references).
//!
//! Wrappers such as [`NonNull`], [`EnumValue`] and [`VariableDefinition`] are
//! generic over the value they wrap, so declared types compose structurally:
//! `NonNull<Vec<NonNull<i32>>>` declares `[Int!]!`.

mod builtin_values;
mod enum_value;
mod id_value;
mod input_object_value;
mod input_type;
mod input_value;
mod non_null;
mod variable;
mod variable_definition;

pub use builtin_values::Null;
pub use enum_value::AnyEnumValue;
pub use enum_value::EnumTypeName;
pub use enum_value::EnumValue;
pub use id_value::IdValue;
pub use input_object_value::InputObjectValue;
pub use input_type::InputType;
pub use input_type::ScalarType;
pub use input_value::InputValue;
pub use input_value::InputValueError;
pub use input_value::InputValueRef;
pub use non_null::NonNull;
pub use variable::Variable;
pub use variable_definition::AnyVariableDefinition;
pub use variable_definition::VariableDefinition;

pub(crate) use builtin_values::append_quoted_string;
pub(crate) use input_value::append_arguments;

use indexmap::IndexMap;

/// Ordered `name -> value` arguments of a field or directive annotation.
///
/// Arguments are rendered in insertion order.
pub type Arguments = IndexMap<String, InputValueRef>;
