use crate::Directive;
use crate::GraphQLSerialize;
use crate::SerializationError;
use crate::directive::append_directives;
use crate::selection::FragmentSpread;
use crate::selection::Selection;
use crate::selection::SelectionSet;
use crate::selection::SelectionSetBuildError;
use inherent::inherent;

/// A named fragment definition:
/// `fragment name on Type @directives { children }`.
#[derive(Clone, Debug)]
pub struct FragmentDefinition {
    directives: Vec<Directive>,
    name: String,
    selections: Vec<Selection>,
    type_condition: String,
}
impl FragmentDefinition {
    /// Returns `None` when `name` is `on` (which the GraphQL grammar reserves
    /// in this position) or when `selections` is empty.
    ///
    /// `selections` may contain duplicates; they are merged when the
    /// definition is serialized.
    pub fn new(
        name: impl Into<String>,
        type_condition: impl Into<String>,
        directives: Vec<Directive>,
        selections: Vec<Selection>,
    ) -> Option<Self> {
        let name = name.into();
        if name == "on" || selections.is_empty() {
            return None;
        }
        Some(Self {
            directives,
            name,
            selections,
            type_condition: type_condition.into(),
        })
    }

    pub fn debug_name(&self) -> &str {
        self.name.as_str()
    }

    pub fn directives(&self) -> &Vec<Directive> {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The merged selection set of this fragment.
    pub fn selection_set(&self) -> Result<SelectionSet, SelectionSetBuildError> {
        SelectionSet::from_selections(self.selections.iter().cloned())
    }

    /// The (unmerged) selections this fragment was defined with.
    pub fn selections(&self) -> &[Selection] {
        self.selections.as_slice()
    }

    /// A [`FragmentSpread`] referring to this fragment.
    pub fn spread(&self) -> FragmentSpread {
        FragmentSpread::from_fragment(self)
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}

#[inherent]
impl GraphQLSerialize for FragmentDefinition {
    pub fn append_graphql(
        &self,
        sink: &mut String,
    ) -> Result<(), SerializationError> {
        sink.push_str("fragment ");
        sink.push_str(&self.name);
        sink.push_str(" on ");
        sink.push_str(&self.type_condition);
        append_directives(sink, &self.directives)?;
        self.selection_set()?.append_block(sink, &self.name)
    }

    pub fn to_graphql_string(&self) -> Result<String, SerializationError>;
}

impl std::convert::From<&FragmentDefinition> for FragmentSpread {
    fn from(value: &FragmentDefinition) -> Self {
        value.spread()
    }
}
