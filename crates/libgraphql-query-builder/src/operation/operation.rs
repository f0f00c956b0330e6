use crate::Directive;
use crate::GraphQLSerialize;
use crate::SerializationError;
use crate::directive::append_directives;
use crate::operation::OperationBuildError;
use crate::operation::OperationBuilder;
use crate::operation::OperationKind;
use crate::selection::Selection;
use crate::selection::SelectionSet;
use crate::value::AnyVariableDefinition;
use indexmap::IndexMap;
use inherent::inherent;

/// A named query, mutation or subscription with its variable definitions,
/// directives and (merged) root [`SelectionSet`].
///
/// ```rust
/// use libgraphql_query_builder::operation::Operation;
/// use libgraphql_query_builder::operation::OperationKind;
/// use libgraphql_query_builder::selection::Selection;
///
/// let query = Operation::new(
///     OperationKind::Query,
///     "Viewer",
///     [Selection::from("viewer"), Selection::from("viewer")],
/// ).unwrap();
///
/// assert_eq!(query.to_graphql_string().unwrap(), "query Viewer {\nviewer\n}");
/// ```
#[derive(Clone, Debug)]
pub struct Operation {
    pub(super) directives: Vec<Directive>,
    pub(super) kind: OperationKind,
    pub(super) name: String,
    pub(super) selection_set: SelectionSet,
    pub(super) variables: IndexMap<String, AnyVariableDefinition>,
}
impl Operation {
    /// An operation without variables or directives. `selections` are merged
    /// immediately.
    pub fn new(
        kind: OperationKind,
        name: impl Into<String>,
        selections: impl IntoIterator<Item = Selection>,
    ) -> Result<Self, OperationBuildError> {
        Ok(Self {
            directives: vec![],
            kind,
            name: name.into(),
            selection_set: SelectionSet::from_selections(selections)?,
            variables: IndexMap::new(),
        })
    }

    pub fn builder(
        kind: OperationKind,
        name: impl Into<String>,
    ) -> OperationBuilder {
        OperationBuilder::new(kind, name)
    }

    pub fn directives(&self) -> &Vec<Directive> {
        &self.directives
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    /// A map from variable name -> definition, in the order the variables
    /// were added.
    pub fn variables(&self) -> &IndexMap<String, AnyVariableDefinition> {
        &self.variables
    }
}

#[inherent]
impl GraphQLSerialize for Operation {
    pub fn append_graphql(
        &self,
        sink: &mut String,
    ) -> Result<(), SerializationError> {
        sink.push_str(self.kind.keyword());
        sink.push(' ');
        sink.push_str(&self.name);
        if !self.variables.is_empty() {
            let variables = self.variables
                .values()
                .map(AnyVariableDefinition::to_string)
                .collect::<Vec<_>>();
            sink.push('(');
            sink.push_str(&variables.join(", "));
            sink.push(')');
        }
        append_directives(sink, &self.directives)?;
        self.selection_set.append_block(sink, &self.name)
    }

    pub fn to_graphql_string(&self) -> Result<String, SerializationError>;
}
