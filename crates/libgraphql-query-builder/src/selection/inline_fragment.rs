use crate::Directive;
use crate::GraphQLSerialize;
use crate::SerializationError;
use crate::directive::append_directives;
use crate::selection::Selection;
use crate::selection::SelectionSet;
use crate::value::InputValueError;
use inherent::inherent;

/// An inline fragment (`... on Type @directives { children }`).
///
/// The type condition may be omitted, in which case the fragment applies to
/// whatever type encloses it (`... @include(if: $x) { children }`).
#[derive(Clone, Debug)]
pub struct InlineFragment {
    directives: Vec<Directive>,
    pub(super) selections: Vec<Selection>,
    type_condition: Option<String>,
}
impl InlineFragment {
    pub fn new(
        type_condition: Option<String>,
        selections: impl IntoIterator<Item = Selection>,
    ) -> Self {
        Self {
            directives: vec![],
            selections: selections.into_iter().collect(),
            type_condition,
        }
    }

    /// An inline fragment conditioned on `type_name`.
    pub fn on(
        type_name: impl Into<String>,
        selections: impl IntoIterator<Item = Selection>,
    ) -> Self {
        Self::new(Some(type_name.into()), selections)
    }

    /// An inline fragment without a type condition.
    pub fn untyped(selections: impl IntoIterator<Item = Selection>) -> Self {
        Self::new(None, selections)
    }

    /// Add a [`Directive`] after any previously added `Directive`s.
    pub fn add_directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn directives(&self) -> &Vec<Directive> {
        &self.directives
    }

    /// The (unmerged) children of this inline fragment.
    pub fn selections(&self) -> &[Selection] {
        self.selections.as_slice()
    }

    pub fn type_condition(&self) -> Option<&str> {
        self.type_condition.as_deref()
    }

    pub(super) fn debug_name(&self) -> String {
        match &self.type_condition {
            Some(type_name) => format!("... on {type_name}"),
            None => "...".to_string(),
        }
    }

    /// The identity key. An untyped fragment keys as `... on ` so that it can
    /// never equal a spread's `...name` key.
    pub(super) fn append_lexeme_key(
        &self,
        sink: &mut String,
    ) -> Result<(), InputValueError> {
        sink.push_str("... on ");
        if let Some(type_name) = &self.type_condition {
            sink.push_str(type_name);
        }
        append_directives(sink, &self.directives)
    }

    fn append_head(&self, sink: &mut String) -> Result<(), InputValueError> {
        sink.push_str("...");
        if let Some(type_name) = &self.type_condition {
            sink.push_str(" on ");
            sink.push_str(type_name);
        }
        append_directives(sink, &self.directives)
    }
}

#[inherent]
impl GraphQLSerialize for InlineFragment {
    pub fn append_graphql(
        &self,
        sink: &mut String,
    ) -> Result<(), SerializationError> {
        self.append_head(sink)?;
        SelectionSet::from_selections(self.selections.iter().cloned())?
            .append_block(sink, &self.debug_name())
    }

    pub fn to_graphql_string(&self) -> Result<String, SerializationError>;
}
