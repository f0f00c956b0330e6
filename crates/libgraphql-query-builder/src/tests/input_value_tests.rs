use crate::value::AnyEnumValue;
use crate::value::EnumTypeName;
use crate::value::EnumValue;
use crate::value::IdValue;
use crate::value::InputType;
use crate::value::InputValue;
use crate::value::InputValueError;
use crate::value::InputValueRef;
use crate::value::NonNull;
use crate::value::Null;
use crate::value::ScalarType;
use crate::value::Variable;
use crate::value::VariableDefinition;
use indexmap::IndexMap;

struct Color;
impl EnumTypeName for Color {
    const ENUM_TYPE_NAME: &'static str = "Color";
}

#[test]
fn list_input_value() {
    assert_eq!(Vec::<String>::input_type().unwrap().type_name(), "[String]");

    let mixed: Vec<InputValueRef> = vec![
        1_i32.into_input_value_ref(),
        "derp".into_input_value_ref(),
    ];
    assert_eq!(mixed.graphql_input_value().unwrap(), "[1, \"derp\"]");
    assert!(Vec::<InputValueRef>::input_type().is_err());

    assert_eq!([true, false].graphql_input_value().unwrap(), "[true, false]");
    assert_eq!(<[i32; 2]>::input_type().unwrap().type_name(), "[Int]");
}

#[test]
fn empty_list_input_value() {
    assert_eq!(Vec::<i32>::new().graphql_input_value().unwrap(), "[]");
}

#[test]
fn map_input_value() {
    assert!(matches!(
        IndexMap::<String, String>::input_type(),
        Err(InputValueError::UninferableInputType { .. }),
    ));

    let mut map: IndexMap<String, InputValueRef> = IndexMap::new();
    map.insert("number".to_string(), 1_i32.into_input_value_ref());
    map.insert("string".to_string(), "derp".into_input_value_ref());
    assert_eq!(map.graphql_input_value().unwrap(), "{number: 1, string: \"derp\"}");
}

#[test]
fn empty_map_input_value() {
    assert_eq!(IndexMap::<String, i32>::new().graphql_input_value().unwrap(), "{}");
}

#[test]
fn bool_input_value() {
    assert_eq!(bool::input_type().unwrap().type_name(), "Boolean");
    assert_eq!(true.graphql_input_value().unwrap(), "true");
    assert_eq!(false.graphql_input_value().unwrap(), "false");
}

#[test]
fn int_input_value() {
    assert_eq!(i32::input_type().unwrap().type_name(), "Int");
    assert_eq!(1_i32.graphql_input_value().unwrap(), "1");
    assert_eq!((-42_i64).graphql_input_value().unwrap(), "-42");
    assert_eq!(u8::input_type().unwrap(), InputType::Scalar(ScalarType::Int));
}

#[test]
fn float_input_value() {
    assert_eq!(f64::input_type().unwrap().type_name(), "Float");
    assert_eq!(1.2_f64.graphql_input_value().unwrap(), "1.2");
    assert_eq!(1.1_f64.graphql_input_value().unwrap(), "1.1");
    assert_eq!(0.5_f32.graphql_input_value().unwrap(), "0.5");
}

#[test]
fn float_input_value_stays_a_float_literal() {
    assert_eq!(1.0_f64.graphql_input_value().unwrap(), "1.0");
    assert_eq!((-3.0_f32).graphql_input_value().unwrap(), "-3.0");
    assert_eq!(1e300_f64.graphql_input_value().unwrap(), "1e300");
    assert_eq!(1e-7_f64.graphql_input_value().unwrap(), "1e-7");

    let literal = 1e300_f64.graphql_input_value().unwrap();
    assert_eq!(literal.parse::<f64>().unwrap(), 1e300);
}

#[test]
fn non_finite_float_input_value_fails() {
    assert!(matches!(
        f64::NAN.graphql_input_value(),
        Err(InputValueError::NonFiniteFloat { .. }),
    ));
    assert_eq!(
        f64::NEG_INFINITY.graphql_input_value(),
        Err(InputValueError::NonFiniteFloat { value: f64::NEG_INFINITY }),
    );
}

#[test]
fn string_input_value_escapes() {
    assert_eq!("plain".graphql_input_value().unwrap(), "\"plain\"");
    assert_eq!(
        "say \"hi\"\\\n".to_string().graphql_input_value().unwrap(),
        "\"say \\\"hi\\\"\\\\\\n\"",
    );
    assert_eq!("tab\there".graphql_input_value().unwrap(), "\"tab\\there\"");
    assert_eq!("\u{1}".graphql_input_value().unwrap(), "\"\\u0001\"");
    assert_eq!("héllo".graphql_input_value().unwrap(), "\"héllo\"");
}

#[test]
fn null_input_value() {
    assert_eq!(Null::input_type().unwrap().type_name(), "Null");
    assert_eq!(Null.graphql_input_value().unwrap(), "null");
}

#[test]
fn option_input_value() {
    assert_eq!(Option::<String>::input_type().unwrap().type_name(), "String");
    assert_eq!(None::<i32>.graphql_input_value().unwrap(), "null");
    assert_eq!(Some(3_i32).graphql_input_value().unwrap(), "3");
    assert!(Some(Variable::new("v")).is_variable());
    assert!(!None::<Variable>.is_variable());
}

#[test]
fn variable_definition_input_value() {
    let variable = VariableDefinition::<String>::new("variable");
    assert_eq!(VariableDefinition::<String>::input_type().unwrap().type_name(), "String");
    assert_eq!(variable.graphql_input_value().unwrap(), "$variable");
    assert!(variable.is_variable());
}

#[test]
fn non_null_input_value() {
    let non_null = NonNull::new("val".to_string());
    assert_eq!(non_null.graphql_input_value().unwrap(), "\"val\"");
    assert_eq!(NonNull::<String>::input_type().unwrap().type_name(), "String!");
    assert_eq!(non_null.inner(), "val");
}

#[test]
fn nested_non_null_is_not_doubled() {
    assert_eq!(
        NonNull::<NonNull<i32>>::input_type().unwrap().type_name(),
        "Int!",
    );
    assert_eq!(
        NonNull::<Vec<NonNull<i32>>>::input_type().unwrap().type_name(),
        "[Int!]!",
    );
}

#[test]
fn input_type_helpers() {
    let list = NonNull::<Vec<Color2>>::input_type().unwrap();
    assert!(!list.nullable());
    assert_eq!(list.innermost_type_name(), "Color2");
    assert!(InputType::list_of(ScalarType::Int.into()).nullable());
}

#[derive(Debug)]
struct Color2;
impl InputValue for Color2 {
    fn append_input_value(&self, sink: &mut String) -> Result<(), InputValueError> {
        sink.push_str("BLUE");
        Ok(())
    }

    fn input_type() -> Result<InputType, InputValueError> {
        Ok(InputType::Enum("Color2".to_string()))
    }
}

#[test]
fn id_input_value() {
    let id = IdValue::new("blah");
    assert_eq!(id.graphql_input_value().unwrap(), "\"blah\"");

    let id = IdValue::from(1_i32);
    assert_eq!(id.graphql_input_value().unwrap(), "\"1\"");
    assert_eq!(id.as_str(), "1");

    assert_eq!(IdValue::input_type().unwrap(), InputType::Scalar(ScalarType::Id));
    assert_eq!(IdValue::input_type().unwrap().type_name(), "ID");
}

#[test]
fn enum_input_value() {
    for reserved in ["null", "true", "false"] {
        assert_eq!(
            EnumValue::<Color>::new(reserved).unwrap_err(),
            InputValueError::InvalidEnumCase {
                case_name: reserved.to_string(),
            },
        );
        assert!(AnyEnumValue::new(reserved).is_err());
    }

    let red = EnumValue::<Color>::new("RED").unwrap();
    assert_eq!(red.graphql_input_value().unwrap(), "RED");
    assert_eq!(red.case_name(), "RED");
    assert_eq!(
        EnumValue::<Color>::input_type().unwrap(),
        InputType::Enum("Color".to_string()),
    );

    let any_enum_val = AnyEnumValue::new("any").unwrap();
    assert!(AnyEnumValue::input_type().is_err());
    assert_eq!(any_enum_val.graphql_input_value().unwrap(), "any");
    assert_eq!(AnyEnumValue::from(red).case_name(), "RED");
}

#[test]
fn variable_reference() {
    let variable = Variable::new("myVar");
    assert_eq!(variable.graphql_input_value().unwrap(), "$myVar");
    assert_eq!(variable.name(), "myVar");
    assert!(Variable::input_type().is_err());
}

#[test]
fn input_type_display() {
    let input_type = InputType::non_null(InputType::list_of(
        InputType::non_null(InputType::InputObject("UserInput".to_string())),
    ));
    assert_eq!(input_type.to_string(), "[UserInput!]!");
    assert_eq!(InputType::non_null(input_type.clone()), input_type);
}
