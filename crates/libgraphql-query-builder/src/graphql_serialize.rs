use crate::selection::SelectionSetBuildError;
use crate::value::InputValueError;
use thiserror::Error;

/// Trait implemented by every entity that can be rendered as GraphQL
/// document text.
///
/// All implementing types implement this trait via
/// `#[inherent] impl GraphQLSerialize`, so both methods can be called without
/// importing the trait.
///
/// Output is canonical and whitespace-stable: every selection is written on
/// its own line, opening braces close their line, closing braces sit on a
/// line of their own, and no trailing newline is written.
pub trait GraphQLSerialize {
    /// Append this entity's GraphQL text to `sink`.
    ///
    /// On error, `sink` may hold a partially written entity and should be
    /// discarded.
    fn append_graphql(
        &self,
        sink: &mut String,
    ) -> Result<(), SerializationError>;

    /// Return this entity as a GraphQL string.
    ///
    /// Convenience wrapper around
    /// [`append_graphql`](GraphQLSerialize::append_graphql).
    fn to_graphql_string(&self) -> Result<String, SerializationError> {
        let mut s = String::new();
        self.append_graphql(&mut s)?;
        Ok(s)
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SerializationError {
    #[error(
        "`{selection_name}` must select at least one field or fragment, but \
        its selection set is empty"
    )]
    EmptySelectionSet {
        selection_name: String,
    },

    #[error("Failure to encode an input value: {0}")]
    InputValue(#[from] InputValueError),

    #[error("Failure to merge a selection set: {0}")]
    SelectionSetBuild(#[from] SelectionSetBuildError),
}
