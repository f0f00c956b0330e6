use crate::Directive;
use crate::operation::Operation;
use crate::operation::OperationKind;
use crate::selection::Selection;
use crate::selection::SelectionSet;
use crate::selection::SelectionSetBuildError;
use crate::value::AnyVariableDefinition;
use indexmap::IndexMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, OperationBuildError>;

/// Incrementally assembles an [`Operation`].
///
/// Selections are merged as they are added, so a conflicting selection fails
/// at the [`add_selection`](OperationBuilder::add_selection) call that
/// introduces it.
///
/// ```rust
/// use libgraphql_query_builder::Directive;
/// use libgraphql_query_builder::operation::Operation;
/// use libgraphql_query_builder::operation::OperationKind;
/// use libgraphql_query_builder::selection::FieldSelection;
/// use libgraphql_query_builder::selection::Selection;
/// use libgraphql_query_builder::value::Variable;
/// use libgraphql_query_builder::value::VariableDefinition;
///
/// let user_id = VariableDefinition::<i32>::new("userId");
/// let query = Operation::builder(OperationKind::Query, "UserName")
///     .add_variable(user_id.type_erase().unwrap()).unwrap()
///     .add_directive(Directive::new("live")).unwrap()
///     .add_selection(
///         FieldSelection::object("user", [Selection::from("name")])
///             .add_argument("id", Variable::new("userId"))
///             .into(),
///     ).unwrap()
///     .build();
///
/// assert_eq!(
///     query.to_graphql_string().unwrap(),
///     "query UserName($userId: Int) @live {\nuser(id: $userId) {\nname\n}\n}",
/// );
/// ```
#[derive(Clone, Debug)]
pub struct OperationBuilder {
    directives: Vec<Directive>,
    kind: OperationKind,
    name: String,
    selection_set: SelectionSet,
    variables: IndexMap<String, AnyVariableDefinition>,
}
impl OperationBuilder {
    pub fn new(kind: OperationKind, name: impl Into<String>) -> Self {
        Self {
            directives: vec![],
            kind,
            name: name.into(),
            selection_set: SelectionSet::new(),
            variables: IndexMap::new(),
        }
    }

    /// Add a [`Directive`] after any previously added `Directive`s.
    pub fn add_directive(mut self, directive: Directive) -> Result<Self> {
        self.directives.push(directive);
        Ok(self)
    }

    /// Merge a [`Selection`] into the operation's root selection set.
    pub fn add_selection(mut self, selection: Selection) -> Result<Self> {
        self.selection_set.insert(selection)?;
        Ok(self)
    }

    /// Add a variable definition after any previously added definitions.
    pub fn add_variable(
        mut self,
        variable: AnyVariableDefinition,
    ) -> Result<Self> {
        if self.variables.contains_key(variable.name()) {
            return Err(OperationBuildError::DuplicateVariableName {
                variable_name: variable.name().to_string(),
            });
        }
        self.variables.insert(variable.name().to_string(), variable);
        Ok(self)
    }

    /// Consume this [`OperationBuilder`] to produce an [`Operation`].
    pub fn build(self) -> Operation {
        Operation {
            directives: self.directives,
            kind: self.kind,
            name: self.name,
            selection_set: self.selection_set,
            variables: self.variables,
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum OperationBuildError {
    #[error("Multiple variables defined with the same name: `${variable_name}`")]
    DuplicateVariableName {
        variable_name: String,
    },

    #[error("Failure to build the selection set for this operation: {0}")]
    SelectionSetBuild(#[from] SelectionSetBuildError),
}
