use crate::GraphQLSerialize;
use crate::SerializationError;
use crate::value::append_arguments;
use crate::value::Arguments;
use crate::value::InputValue;
use crate::value::InputValueError;
use inherent::inherent;
use std::sync::Arc;

/// Represents a
/// [directive annotation](https://spec.graphql.org/October2021/#sec-Language.Directives)
/// (`@name(arg: value)`) placed on an operation, a fragment definition or a
/// selection.
#[derive(Clone, Debug)]
pub struct Directive {
    arguments: Arguments,
    name: String,
}
impl Directive {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            arguments: Arguments::new(),
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

    /// A map from argument name -> value for all arguments passed to this
    /// [`Directive`], in the order they were added.
    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn append_annotation(
        &self,
        sink: &mut String,
    ) -> Result<(), InputValueError> {
        sink.push('@');
        sink.push_str(&self.name);
        append_arguments(sink, &self.arguments)
    }
}

#[inherent]
impl GraphQLSerialize for Directive {
    pub fn append_graphql(
        &self,
        sink: &mut String,
    ) -> Result<(), SerializationError> {
        Ok(self.append_annotation(sink)?)
    }

    pub fn to_graphql_string(&self) -> Result<String, SerializationError>;
}

/// Append each directive preceded by a single space (` @a @b(x: 1)`).
pub(crate) fn append_directives(
    sink: &mut String,
    directives: &[Directive],
) -> Result<(), InputValueError> {
    for directive in directives {
        sink.push(' ');
        directive.append_annotation(sink)?;
    }
    Ok(())
}
