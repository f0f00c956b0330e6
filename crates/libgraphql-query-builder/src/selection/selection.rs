use crate::GraphQLSerialize;
use crate::SerializationError;
use crate::selection::FieldKind;
use crate::selection::FieldSelection;
use crate::selection::FragmentSpread;
use crate::selection::InlineFragment;
use crate::selection::SelectionSet;
use crate::selection::SelectionSetBuildError;
use crate::value::InputValueError;
use inherent::inherent;

/// Similar to [`Selection`], except without the corresponding data. Two
/// selections can only be merged when they are of the same kind.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum SelectionKind {
    FragmentSpread,
    InlineFragment,
    Object,
    Scalar,
}
impl std::fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::FragmentSpread => "fragment spread",
            Self::InlineFragment => "inline fragment",
            Self::Object => "object field",
            Self::Scalar => "scalar field",
        })
    }
}

#[derive(Clone, Debug)]
pub enum Selection {
    Field(FieldSelection),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}
impl Selection {
    /// A short, human-readable label for this selection: `alias: name` for
    /// fields, `...name` for fragment spreads and `... on Type` for inline
    /// fragments.
    pub fn debug_name(&self) -> String {
        match self {
            Self::Field(field) => field.debug_name(),
            Self::FragmentSpread(spread) => format!("...{}", spread.name()),
            Self::InlineFragment(inline) => inline.debug_name(),
        }
    }

    pub fn kind(&self) -> SelectionKind {
        match self {
            Self::Field(FieldSelection { kind: FieldKind::Object(_), .. })
                => SelectionKind::Object,
            Self::Field(FieldSelection { kind: FieldKind::Scalar, .. })
                => SelectionKind::Scalar,
            Self::FragmentSpread(_) => SelectionKind::FragmentSpread,
            Self::InlineFragment(_) => SelectionKind::InlineFragment,
        }
    }

    /// The identity key of this selection. Selections with equal keys are
    /// merged into one when they are folded into a [`SelectionSet`].
    ///
    /// The key never depends on a selection's children.
    pub fn lexeme_key(&self) -> Result<String, InputValueError> {
        let mut key = String::new();
        match self {
            Self::Field(field) => field.append_lexeme_key(&mut key)?,
            Self::FragmentSpread(spread) => spread.append_lexeme_key(&mut key)?,
            Self::InlineFragment(inline) => inline.append_lexeme_key(&mut key)?,
        }
        Ok(key)
    }

    /// Merge `other` with this selection.
    ///
    /// The result holds a single selection when both share a key, and both
    /// selections (in order) otherwise. Fails with
    /// [`SelectionSetBuildError::MergeConflict`] when the keys are equal but
    /// the kinds are not.
    pub fn merge(
        self,
        other: Selection,
    ) -> Result<SelectionSet, SelectionSetBuildError> {
        SelectionSet::from_selections([self, other])
    }

    /// The rendered (merged) children of an object field or inline fragment.
    /// Scalar fields and fragment spreads have no children.
    pub fn serialized_selections(&self) -> Result<Vec<String>, SerializationError> {
        let Some(children) = self.children() else {
            return Ok(vec![]);
        };
        SelectionSet::from_selections(children.iter().cloned())?
            .iter()
            .map(|child| child.to_graphql_string())
            .collect()
    }

    pub(super) fn children(&self) -> Option<&[Selection]> {
        match self {
            Self::Field(field) => field.selections(),
            Self::FragmentSpread(_) => None,
            Self::InlineFragment(inline) => Some(inline.selections()),
        }
    }

    fn children_mut(&mut self) -> Option<&mut Vec<Selection>> {
        match self {
            Self::Field(FieldSelection { kind: FieldKind::Object(children), .. })
                => Some(children),
            Self::Field(FieldSelection { kind: FieldKind::Scalar, .. })
                => None,
            Self::FragmentSpread(_) => None,
            Self::InlineFragment(inline) => Some(&mut inline.selections),
        }
    }

    fn into_children(self) -> Vec<Selection> {
        match self {
            Self::Field(FieldSelection { kind: FieldKind::Object(children), .. })
                => children,
            Self::Field(FieldSelection { kind: FieldKind::Scalar, .. })
                => vec![],
            Self::FragmentSpread(_) => vec![],
            Self::InlineFragment(inline) => inline.selections,
        }
    }

    /// Fold `incoming` (which has the same identity `key`) into this
    /// selection. On error this selection is left untouched.
    pub(super) fn absorb(
        &mut self,
        key: &str,
        incoming: Selection,
    ) -> Result<(), SelectionSetBuildError> {
        let existing_kind = self.kind();
        let incoming_kind = incoming.kind();
        if existing_kind != incoming_kind {
            return Err(SelectionSetBuildError::MergeConflict {
                existing_kind,
                incoming_kind,
                key: key.to_string(),
            });
        }

        if let Some(children) = self.children_mut() {
            let merged = SelectionSet::from_selections(
                children.iter().cloned().chain(incoming.into_children()),
            )?;
            *children = merged.into_selections();
        }
        Ok(())
    }
}

#[inherent]
impl GraphQLSerialize for Selection {
    pub fn append_graphql(
        &self,
        sink: &mut String,
    ) -> Result<(), SerializationError> {
        match self {
            Self::Field(field) => field.append_graphql(sink),
            Self::FragmentSpread(spread) => spread.append_graphql(sink),
            Self::InlineFragment(inline) => inline.append_graphql(sink),
        }
    }

    pub fn to_graphql_string(&self) -> Result<String, SerializationError>;
}

impl std::convert::From<FieldSelection> for Selection {
    fn from(value: FieldSelection) -> Self {
        Self::Field(value)
    }
}
impl std::convert::From<FragmentSpread> for Selection {
    fn from(value: FragmentSpread) -> Self {
        Self::FragmentSpread(value)
    }
}
impl std::convert::From<InlineFragment> for Selection {
    fn from(value: InlineFragment) -> Self {
        Self::InlineFragment(value)
    }
}
/// A bare field name selects an unaliased scalar field.
impl std::convert::From<&str> for Selection {
    fn from(value: &str) -> Self {
        Self::Field(FieldSelection::scalar(value))
    }
}
impl std::convert::From<String> for Selection {
    fn from(value: String) -> Self {
        Self::Field(FieldSelection::scalar(value))
    }
}
