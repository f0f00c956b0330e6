//! Operations, fragment definitions and the documents that hold them.

mod document;
mod fragment_definition;
#[allow(clippy::module_inception)]
mod operation;
mod operation_builder;
mod operation_kind;

pub use document::Document;
pub use fragment_definition::FragmentDefinition;
pub use operation::Operation;
pub use operation_builder::OperationBuildError;
pub use operation_builder::OperationBuilder;
pub use operation_kind::OperationKind;
