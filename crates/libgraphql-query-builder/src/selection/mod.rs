//! The selection model and its merge engine.
//!
//! A [`Selection`] is one node of a requested field/fragment tree. Every
//! selection has an *identity key* ([`Selection::lexeme_key`]) built from its
//! own alias, name, arguments and directives (never from its children). A
//! [`SelectionSet`] folds selections that share a key into one, merging the
//! children of object fields and inline fragments recursively, and keeps the
//! order in which keys were first seen.

mod field_selection;
mod fragment_spread;
mod inline_fragment;
#[allow(clippy::module_inception)]
mod selection;
mod selection_set;

pub use field_selection::FieldKind;
pub use field_selection::FieldSelection;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use selection::Selection;
pub use selection::SelectionKind;
pub use selection_set::SelectionSet;
pub use selection_set::SelectionSetBuildError;
