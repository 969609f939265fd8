//! Property-based tests for snygg using proptest.

use proptest::prelude::*;
use snygg::{Color, Command, Rule, Selector, Shape, StylesheetEditor, Value, ValueError};

// ============================================================================
// Strategies
// ============================================================================

fn number_strategy() -> impl Strategy<Value = f32> {
    prop_oneof![
        -1000.0f32..1000.0,
        (0i32..500).prop_map(|n| n as f32),
        any::<f32>(),
        Just(f32::INFINITY),
        Just(f32::NEG_INFINITY),
        Just(f32::NAN),
        Just(-0.0f32),
    ]
}

/// Shapes from arbitrary radii; out of range radii fail to build.
fn shape_strategy() -> impl Strategy<Value = Result<Shape, ValueError>> {
    prop_oneof![
        Just(Ok::<Shape, ValueError>(Shape::rectangle())),
        number_strategy().prop_map(Shape::rounded_corner_dp),
        number_strategy().prop_map(Shape::rounded_corner_percent),
        number_strategy().prop_map(Shape::cut_corner_dp),
        number_strategy().prop_map(Shape::cut_corner_percent),
    ]
}

fn variable_key_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["--[a-z][a-z0-9_-]{0,12}", "[a-z-]{0,6}", "\\PC{0,8}"]
}

/// Values as callers build them: checked constructors may fail, while size
/// payloads and raw references are taken as given.
fn candidate_strategy() -> impl Strategy<Value = Result<Value, ValueError>> {
    prop_oneof![
        Just(built(Value::ImplicitInherit)),
        Just(built(Value::ExplicitInherit)),
        any::<u32>().prop_map(|argb| built(Value::SolidColor(Color::from_argb(argb)))),
        shape_strategy().prop_map(|shape| shape.map(Value::Shape)),
        number_strategy().prop_map(|n| built(Value::SizeDp(n))),
        number_strategy().prop_map(|n| built(Value::SizeSp(n))),
        number_strategy().prop_map(|n| built(Value::SizePercent(n))),
        variable_key_strategy().prop_map(Value::variable),
        variable_key_strategy().prop_map(|key| built(Value::VariableReference(key))),
    ]
}

fn built(value: Value) -> Result<Value, ValueError> {
    Ok(value)
}

/// Every value that could be built, readable or not.
fn built_value_strategy() -> impl Strategy<Value = Value> {
    candidate_strategy().prop_filter_map("constructor rejected the contents", Result::ok)
}

fn value_strategy() -> impl Strategy<Value = Value> {
    built_value_strategy().prop_filter("unreadable value", |value| value.validate().is_ok())
}

fn rule_strategy() -> impl Strategy<Value = Rule> {
    (
        "[a-z][a-z0-9-]{0,10}",
        any::<[bool; 3]>(),
        prop::collection::vec(-5i32..300, 0..4),
        prop::collection::vec(0i32..8, 0..3),
    )
        .prop_map(|(element, flags, codes, modes)| {
            let mut builder = Rule::builder(element).codes(codes).modes(modes);
            for (selector, enabled) in Selector::ALL.into_iter().zip(flags) {
                builder = builder.selector(selector, enabled);
            }
            builder.build().unwrap()
        })
}

fn command_strategy() -> impl Strategy<Value = Command> {
    let name = "[a-z]{1,6}";
    prop_oneof![
        rule_strategy().prop_map(|rule| Command::AddRule { rule }),
        (rule_strategy(), rule_strategy()).prop_map(|(from, to)| Command::RenameRule { from, to }),
        rule_strategy().prop_map(|rule| Command::RemoveRule { rule }),
        (rule_strategy(), name, built_value_strategy())
            .prop_map(|(rule, name, value)| Command::AddProperty { rule, name, value }),
        (rule_strategy(), name, built_value_strategy())
            .prop_map(|(rule, name, value)| Command::SetProperty { rule, name, value }),
        (rule_strategy(), name).prop_map(|(rule, name)| Command::RemoveProperty { rule, name }),
    ]
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// A built value validates exactly when its encoding decodes back to it.
    #[test]
    fn validation_matches_round_trip(value in built_value_strategy()) {
        let decoded = Value::decode(&value.encode());
        let round_trips = matches!(&decoded, Ok(decoded) if *decoded == value);
        prop_assert_eq!(value.validate().is_ok(), round_trips, "{:?}", value);
    }

    /// Shape constructors accept exactly the radii their encoding can carry.
    #[test]
    fn shape_constructors_check_range(radius in number_strategy()) {
        let readable = radius.is_finite() && radius >= 0.0;
        let readable_percent = readable && radius <= 100.0;
        prop_assert_eq!(Shape::rounded_corner_dp(radius).is_ok(), readable);
        prop_assert_eq!(Shape::cut_corner_dp(radius).is_ok(), readable);
        prop_assert_eq!(Shape::rounded_corner_percent(radius).is_ok(), readable_percent);
        prop_assert_eq!(Shape::cut_corner_percent(radius).is_ok(), readable_percent);
    }

    /// Every value decodes back from its own encoding.
    #[test]
    fn value_encoding_round_trips(value in value_strategy()) {
        let encoded = value.encode();
        let decoded = Value::decode(&encoded).unwrap();
        prop_assert_eq!(&decoded, &value);
        prop_assert_eq!(decoded.encoder(), value.encoder());
    }

    /// The encoder reported by a value accepts it, and no other encoder does.
    #[test]
    fn only_own_encoder_encodes(value in value_strategy()) {
        for encoder in snygg::ValueEncoder::ALL {
            prop_assert_eq!(encoder.encode(&value).is_ok(), encoder == value.encoder());
        }
    }

    /// Rules print canonically and parse back to an equal rule.
    #[test]
    fn rule_syntax_round_trips(rule in rule_strategy()) {
        let printed = rule.to_string();
        let parsed: Rule = printed.parse().unwrap();
        prop_assert_eq!(&parsed, &rule);
        prop_assert_eq!(parsed.to_string(), printed);
    }

    /// Arbitrary command sequences keep exactly one @defines rule, and
    /// rejected commands never change the editor.
    #[test]
    fn commands_preserve_invariants(commands in prop::collection::vec(command_strategy(), 0..30)) {
        let mut editor = StylesheetEditor::new();
        for command in commands {
            let before = editor.clone();
            if editor.apply(command).is_err() {
                prop_assert_eq!(&editor, &before);
            }
            let defines = editor
                .rules()
                .filter(|(rule, _)| rule.is_defined_variables_rule())
                .count();
            prop_assert_eq!(defines, 1);
        }
    }

    /// Any editor state survives a JSON round trip, order included, even
    /// when some commands carried unreadable values.
    #[test]
    fn editor_json_round_trips(commands in prop::collection::vec(command_strategy(), 0..20)) {
        let mut editor = StylesheetEditor::new();
        for command in commands {
            let _ = editor.apply(command);
        }
        for (_, set) in editor.rules() {
            for (_, value) in set.iter() {
                prop_assert!(value.validate().is_ok());
            }
        }
        let json = editor.to_json().unwrap();
        let decoded = StylesheetEditor::from_json(&json).unwrap();
        prop_assert_eq!(decoded, editor);
    }
}
