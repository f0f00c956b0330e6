use crate::Directive;
use crate::GraphQLSerialize;
use crate::SerializationError;
use crate::directive::append_directives;
use crate::selection::Selection;
use crate::selection::SelectionSet;
use crate::value::append_arguments;
use crate::value::Arguments;
use crate::value::InputValue;
use crate::value::InputValueError;
use inherent::inherent;
use std::sync::Arc;

/// Whether a field is a leaf (`Scalar`) or selects sub-fields (`Object`).
#[derive(Clone, Debug)]
pub enum FieldKind {
    Object(Vec<Selection>),
    Scalar,
}

/// A field selection: `alias: name(arguments) @directives { children }`.
///
/// ```rust
/// use libgraphql_query_builder::selection::FieldSelection;
/// use libgraphql_query_builder::selection::Selection;
///
/// let field = FieldSelection::object("user", [Selection::from("id"), Selection::from("name")])
///     .with_alias("me")
///     .add_argument("id", 4);
/// assert_eq!(
///     field.to_graphql_string().unwrap(),
///     "me: user(id: 4) {\nid\nname\n}",
/// );
/// ```
#[derive(Clone, Debug)]
pub struct FieldSelection {
    pub(super) alias: Option<String>,
    pub(super) arguments: Arguments,
    pub(super) directives: Vec<Directive>,
    pub(super) kind: FieldKind,
    pub(super) name: String,
}
impl FieldSelection {
    /// A field with a nested selection set. `selections` may contain
    /// duplicates; they are merged when the field is serialized.
    pub fn object(
        name: impl Into<String>,
        selections: impl IntoIterator<Item = Selection>,
    ) -> Self {
        Self::new(name, FieldKind::Object(selections.into_iter().collect()))
    }

    /// A leaf field.
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Scalar)
    }

    fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            alias: None,
            arguments: Arguments::new(),
            directives: vec![],
            kind,
            name: name.into(),
        }
    }

    /// Add an argument after any previously added arguments. Re-adding an
    /// argument name replaces its value in place.
    pub fn add_argument(
        mut self,
        name: impl Into<String>,
        value: impl InputValue + 'static,
    ) -> Self {
        self.arguments.insert(name.into(), Arc::new(value));
        self
    }

    /// Add a [`Directive`] after any previously added `Directive`s.
    pub fn add_directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    pub fn directives(&self) -> &Vec<Directive> {
        &self.directives
    }

    pub fn field_kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /**
     * If an alias was specified for this selection, return the alias.
     * Otherwise return the name of the field.
     */
    pub fn selected_name(&self) -> &str {
        self.alias().unwrap_or(self.name.as_str())
    }

    /// The (unmerged) children of an object field. `None` for scalar fields.
    pub fn selections(&self) -> Option<&[Selection]> {
        match &self.kind {
            FieldKind::Object(selections) => Some(selections.as_slice()),
            FieldKind::Scalar => None,
        }
    }

    pub(super) fn debug_name(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{alias}: {}", self.name),
            None => self.name.to_owned(),
        }
    }

    pub(super) fn append_lexeme_key(
        &self,
        sink: &mut String,
    ) -> Result<(), InputValueError> {
        if let Some(alias) = &self.alias {
            sink.push_str(alias);
            sink.push_str(": ");
        }
        sink.push_str(&self.name);
        append_arguments(sink, &self.arguments)?;
        append_directives(sink, &self.directives)
    }
}

#[inherent]
impl GraphQLSerialize for FieldSelection {
    pub fn append_graphql(
        &self,
        sink: &mut String,
    ) -> Result<(), SerializationError> {
        self.append_lexeme_key(sink)?;
        if let FieldKind::Object(children) = &self.kind {
            SelectionSet::from_selections(children.iter().cloned())?
                .append_block(sink, &self.debug_name())?;
        }
        Ok(())
    }

    pub fn to_graphql_string(&self) -> Result<String, SerializationError>;
}
