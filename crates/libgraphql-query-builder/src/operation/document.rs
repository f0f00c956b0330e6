use crate::GraphQLSerialize;
use crate::SerializationError;
use crate::operation::FragmentDefinition;
use crate::operation::Operation;
use inherent::inherent;

/// An executable document: a list of [`Operation`]s followed by a list of
/// [`FragmentDefinition`]s.
///
/// No validation is performed; spreads of undefined fragments, unused
/// fragments and duplicate names are all written as given.
#[derive(Clone, Debug, Default)]
pub struct Document {
    fragments: Vec<FragmentDefinition>,
    operations: Vec<Operation>,
}
impl Document {
    pub fn new(
        operations: Vec<Operation>,
        fragments: Vec<FragmentDefinition>,
    ) -> Self {
        Self {
            fragments,
            operations,
        }
    }

    pub fn fragments(&self) -> &Vec<FragmentDefinition> {
        &self.fragments
    }

    pub fn operations(&self) -> &Vec<Operation> {
        &self.operations
    }
}

#[inherent]
impl GraphQLSerialize for Document {
    /// Writes every operation, then every fragment definition, separated by
    /// a newline.
    pub fn append_graphql(
        &self,
        sink: &mut String,
    ) -> Result<(), SerializationError> {
        let mut first = true;
        for operation in &self.operations {
            if !first {
                sink.push('\n');
            }
            operation.append_graphql(sink)?;
            first = false;
        }
        for fragment in &self.fragments {
            if !first {
                sink.push('\n');
            }
            fragment.append_graphql(sink)?;
            first = false;
        }
        Ok(())
    }

    pub fn to_graphql_string(&self) -> Result<String, SerializationError>;
}
