use crate::GraphQLSerialize;
use crate::SerializationError;
use crate::selection::Selection;
use crate::selection::SelectionKind;
use crate::value::InputValueError;
use indexmap::IndexMap;
use inherent::inherent;
use thiserror::Error;

type Result<T> = std::result::Result<T, SelectionSetBuildError>;

/// An ordered set of [`Selection`]s keyed by their identity key
/// ([`Selection::lexeme_key`]).
///
/// Inserting a selection whose key is already present merges the two: object
/// fields and inline fragments union their children (recursively), while
/// scalar fields and fragment spreads collapse into one. Keys keep the
/// position at which they were first inserted.
///
/// ```rust
/// use libgraphql_query_builder::selection::FieldSelection;
/// use libgraphql_query_builder::selection::Selection;
/// use libgraphql_query_builder::selection::SelectionSet;
///
/// let set = SelectionSet::from_selections([
///     Selection::from(FieldSelection::object("user", [Selection::from("id")])),
///     Selection::from("name"),
///     Selection::from(FieldSelection::object("user", [Selection::from("email")])),
/// ]).unwrap();
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(
///     set.to_graphql_string().unwrap(),
///     " {\nuser {\nid\nemail\n}\nname\n}",
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct SelectionSet {
    selections: IndexMap<String, Selection>,
}
impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold every selection in `selections` into a new [`SelectionSet`], in
    /// iteration order.
    pub fn from_selections(
        selections: impl IntoIterator<Item = Selection>,
    ) -> Result<Self> {
        let mut set = Self::new();
        for selection in selections {
            set.insert(selection)?;
        }
        Ok(set)
    }

    /// Insert `selection`, merging it into an existing selection with the
    /// same identity key if there is one.
    ///
    /// On error this [`SelectionSet`] is left unchanged.
    pub fn insert(&mut self, selection: Selection) -> Result<()> {
        let key = selection.lexeme_key()?;
        match self.selections.get_mut(&key) {
            Some(existing) => {
                log::trace!("merging duplicate selection `{key}`");
                existing.absorb(&key, selection)
            },
            None => {
                self.selections.insert(key, selection);
                Ok(())
            },
        }
    }

    pub fn get(&self, key: &str) -> Option<&Selection> {
        self.selections.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Selection> {
        self.selections.values()
    }

    /// Identity keys in first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.selections.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    /// The merged selections, in first-insertion order.
    pub fn selections(&self) -> Vec<&Selection> {
        self.selections.values().collect()
    }

    pub fn into_selections(self) -> Vec<Selection> {
        self.selections.into_values().collect()
    }

    /// The debug names of every selection, joined with `", "`.
    pub fn debug_name(&self) -> String {
        self.iter()
            .map(Selection::debug_name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Append ` {`, each selection on its own line, then `}`.
    ///
    /// `owner_name` names the entity owning this set in the
    /// [`SerializationError::EmptySelectionSet`] raised when the set is empty.
    pub(crate) fn append_block(
        &self,
        sink: &mut String,
        owner_name: &str,
    ) -> std::result::Result<(), SerializationError> {
        if self.is_empty() {
            return Err(SerializationError::EmptySelectionSet {
                selection_name: owner_name.to_string(),
            });
        }

        sink.push_str(" {\n");
        for (idx, selection) in self.iter().enumerate() {
            if idx > 0 {
                sink.push('\n');
            }
            selection.append_graphql(sink)?;
        }
        sink.push_str("\n}");
        Ok(())
    }
}

#[inherent]
impl GraphQLSerialize for SelectionSet {
    pub fn append_graphql(
        &self,
        sink: &mut String,
    ) -> std::result::Result<(), SerializationError> {
        self.append_block(sink, "selection set")
    }

    pub fn to_graphql_string(&self) -> std::result::Result<String, SerializationError>;
}

impl std::convert::TryFrom<Vec<Selection>> for SelectionSet {
    type Error = SelectionSetBuildError;

    fn try_from(value: Vec<Selection>) -> Result<Self> {
        Self::from_selections(value)
    }
}

impl std::iter::IntoIterator for SelectionSet {
    type Item = Selection;
    type IntoIter = indexmap::map::IntoValues<String, Selection>;

    fn into_iter(self) -> Self::IntoIter {
        self.selections.into_values()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SelectionSetBuildError {
    #[error("Failure to encode a selection's identity key: {0}")]
    InputValue(#[from] InputValueError),

    #[error(
        "Conflicting selections for `{key}`: cannot merge the {incoming_kind} \
        into the existing {existing_kind}"
    )]
    MergeConflict {
        existing_kind: SelectionKind,
        incoming_kind: SelectionKind,
        key: String,
    },
}
