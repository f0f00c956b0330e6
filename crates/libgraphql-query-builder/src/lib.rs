//! A library for assembling GraphQL executable documents (operations,
//! fragments, selection sets and directives) from typed Rust values and
//! serializing them to GraphQL text.
//!
//! Sibling selections that share an identity key are merged as documents are
//! built, and argument values carry their declared GraphQL input type so that
//! variable definitions can be derived from host types.
//!
//! ```rust
//! use libgraphql_query_builder::operation::Document;
//! use libgraphql_query_builder::operation::FragmentDefinition;
//! use libgraphql_query_builder::operation::Operation;
//! use libgraphql_query_builder::operation::OperationKind;
//! use libgraphql_query_builder::selection::FieldSelection;
//! use libgraphql_query_builder::selection::FragmentSpread;
//! use libgraphql_query_builder::selection::Selection;
//!
//! let user_fields = FragmentDefinition::new(
//!     "UserFields",
//!     "User",
//!     vec![],
//!     vec!["id".into(), "name".into()],
//! ).unwrap();
//!
//! let query = Operation::new(
//!     OperationKind::Query,
//!     "Viewer",
//!     [Selection::from(FieldSelection::object(
//!         "viewer",
//!         [Selection::from(FragmentSpread::from_fragment(&user_fields))],
//!     ))],
//! ).unwrap();
//!
//! let document = Document::new(vec![query], vec![user_fields]);
//! assert_eq!(
//!     document.to_graphql_string().unwrap(),
//!     "query Viewer {\nviewer {\n...UserFields\n}\n}\n\
//!      fragment UserFields on User {\nid\nname\n}",
//! );
//! ```

mod directive;
mod graphql_serialize;
pub mod operation;
pub mod selection;
pub mod value;

pub use directive::Directive;
pub use graphql_serialize::GraphQLSerialize;
pub use graphql_serialize::SerializationError;

#[cfg(test)]
mod tests;
