use crate::Directive;
use crate::SerializationError;
use crate::operation::Operation;
use crate::operation::OperationBuildError;
use crate::operation::OperationKind;
use crate::selection::FieldSelection;
use crate::selection::Selection;
use crate::selection::SelectionSetBuildError;
use crate::value::VariableDefinition;

fn derp_variable() -> crate::value::AnyVariableDefinition {
    VariableDefinition::<String>::new("derp").type_erase().unwrap()
}

#[test]
fn query_form() {
    let subject = Operation::new(OperationKind::Query, "Query", ["name".into()]).unwrap();

    assert_eq!(subject.kind(), OperationKind::Query);
    assert_eq!(subject.name(), "Query");
    assert!(subject.variables().is_empty());
    assert_eq!(subject.to_graphql_string().unwrap(), "query Query {\nname\n}");
}

#[test]
fn mutation_form() {
    let subject = Operation::builder(OperationKind::Mutation, "Mutation")
        .add_variable(derp_variable()).unwrap()
        .add_selection("name".into()).unwrap()
        .build();

    assert_eq!(
        subject.to_graphql_string().unwrap(),
        "mutation Mutation($derp: String) {\nname\n}",
    );
}

#[test]
fn subscription_form() {
    let subject = Operation::builder(OperationKind::Subscription, "Subscription")
        .add_variable(derp_variable()).unwrap()
        .add_selection("name".into()).unwrap()
        .build();

    assert_eq!(
        subject.to_graphql_string().unwrap(),
        "subscription Subscription($derp: String) {\nname\n}",
    );
}

#[test]
fn operation_with_directives() {
    let subject = Operation::builder(OperationKind::Mutation, "Mutation")
        .add_variable(derp_variable()).unwrap()
        .add_directive(Directive::new("cool").add_argument("best", "directive")).unwrap()
        .add_selection("name".into()).unwrap()
        .build();

    assert_eq!(subject.directives().len(), 1);
    assert_eq!(
        subject.to_graphql_string().unwrap(),
        "mutation Mutation($derp: String) @cool(best: \"directive\") {\nname\n}",
    );
}

#[test]
fn duplicate_variable_name_fails() {
    let result = Operation::builder(OperationKind::Query, "Query")
        .add_variable(derp_variable()).unwrap()
        .add_variable(VariableDefinition::<i32>::new("derp").type_erase().unwrap());

    assert_eq!(
        result.unwrap_err(),
        OperationBuildError::DuplicateVariableName {
            variable_name: "derp".to_string(),
        },
    );
}

#[test]
fn conflicting_root_selections_fail() {
    let result = Operation::new(
        OperationKind::Query,
        "Query",
        ["viewer".into(), FieldSelection::object("viewer", ["id".into()]).into()],
    );
    assert!(matches!(
        result,
        Err(OperationBuildError::SelectionSetBuild(
            SelectionSetBuildError::MergeConflict { .. }
        )),
    ));

    let result = Operation::builder(OperationKind::Query, "Query")
        .add_selection("viewer".into()).unwrap()
        .add_selection(FieldSelection::object("viewer", ["id".into()]).into());
    assert!(matches!(result, Err(OperationBuildError::SelectionSetBuild(_))));
}

#[test]
fn operation_without_selections_fails_to_serialize() {
    let subject = Operation::builder(OperationKind::Query, "Empty").build();

    assert_eq!(
        subject.to_graphql_string(),
        Err(SerializationError::EmptySelectionSet {
            selection_name: "Empty".to_string(),
        }),
    );
}

#[test]
fn operation_selection_set() {
    let subobj = FieldSelection::object(
        "object1",
        [FieldSelection::scalar("scalar1").with_alias("cool_scalar").into()],
    ).with_alias("cool_obj");
    let object2 = FieldSelection::object(
        "object2",
        [
            "scalar".into(),
            FieldSelection::scalar("scalar").with_alias("cool").into(),
            FieldSelection::object("object", ["objectScalar".into()]).into(),
        ],
    ).add_argument("key", "val");

    let subject = Operation::new(
        OperationKind::Mutation,
        "Mutation",
        [subobj.into(), "scalar2".into(), Selection::from(object2)],
    ).unwrap();

    assert_eq!(subject.selection_set().len(), 3);
    assert_eq!(
        subject.to_graphql_string().unwrap(),
        concat!(
            "mutation Mutation {\n",
            "cool_obj: object1 {\n",
            "cool_scalar: scalar1\n",
            "}\n",
            "scalar2\n",
            "object2(key: \"val\") {\n",
            "scalar\n",
            "cool: scalar\n",
            "object {\n",
            "objectScalar\n",
            "}\n",
            "}\n",
            "}",
        ),
    );
}

#[test]
fn operation_kind_keywords() {
    assert_eq!(OperationKind::Query.to_string(), "query");
    assert_eq!(OperationKind::Mutation.keyword(), "mutation");
    assert_eq!(OperationKind::Subscription.to_string(), "subscription");
}
