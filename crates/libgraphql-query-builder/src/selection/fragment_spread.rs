use crate::Directive;
use crate::GraphQLSerialize;
use crate::SerializationError;
use crate::directive::append_directives;
use crate::operation::FragmentDefinition;
use crate::value::InputValueError;
use inherent::inherent;

/// A named fragment spread (`...FragmentName @directives`).
#[derive(Clone, Debug)]
pub struct FragmentSpread {
    directives: Vec<Directive>,
    name: String,
}
impl FragmentSpread {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            directives: vec![],
            name: name.into(),
        }
    }

    /// A spread of `fragment`, without directives.
    pub fn from_fragment(fragment: &FragmentDefinition) -> Self {
        Self::new(fragment.name())
    }

    /// Add a [`Directive`] after any previously added `Directive`s.
    pub fn add_directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn directives(&self) -> &Vec<Directive> {
        &self.directives
    }

    /// The name of the fragment this spread refers to.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(super) fn append_lexeme_key(
        &self,
        sink: &mut String,
    ) -> Result<(), InputValueError> {
        sink.push_str("...");
        sink.push_str(&self.name);
        append_directives(sink, &self.directives)
    }
}

#[inherent]
impl GraphQLSerialize for FragmentSpread {
    pub fn append_graphql(
        &self,
        sink: &mut String,
    ) -> Result<(), SerializationError> {
        Ok(self.append_lexeme_key(sink)?)
    }

    pub fn to_graphql_string(&self) -> Result<String, SerializationError>;
}
