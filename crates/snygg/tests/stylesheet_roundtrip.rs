//! End-to-end behaviour of the stylesheet editor through the public API.

use snygg::projection::{self, NoTranslations};
use snygg::{
    Color, Command, EditError, Level, PropertySetSpec, PropertySpec, Rule, Shape, SpecCatalog,
    StaticCatalog, StylesheetEditor, Value, ValueEncoder, ValueError, ValuePreview,
};

fn rule(s: &str) -> Rule {
    s.parse().unwrap()
}

fn rule_order(editor: &StylesheetEditor) -> Vec<String> {
    editor.rules().map(|(rule, _)| rule.to_string()).collect()
}

// ============================================================================
// Full editing session
// ============================================================================

#[test]
fn empty_editor_round_trips_through_json() {
    let mut editor = StylesheetEditor::new();
    assert_eq!(rule_order(&editor), vec!["@defines"]);

    let key = Rule::builder("key").pressed().build().unwrap();
    editor.add_rule(key.clone()).unwrap();
    editor
        .add_property(
            &key,
            "background",
            Value::SolidColor(Color::from_argb(0xFF112233)),
        )
        .unwrap();

    let json = editor.to_json().unwrap();
    let decoded = StylesheetEditor::from_json(&json).unwrap();

    assert_eq!(decoded.len(), 2);
    assert_eq!(
        decoded.get(&key).unwrap().get("background"),
        Some(&Value::SolidColor(Color::from_argb(0xFF112233)))
    );
    assert_eq!(decoded, editor);
}

#[test]
fn command_session_matches_direct_calls() {
    let commands: Vec<Command> = serde_json::from_str(
        r##"[
            {"op": "add-rule", "rule": "keyboard"},
            {"op": "add-rule", "rule": "key"},
            {"op": "add-property", "rule": "key", "name": "shape", "value": "rounded-corner(20%)"},
            {"op": "set-property", "rule": "@defines", "name": "--accent", "value": "#ff9800"},
            {"op": "add-property", "rule": "key", "name": "foreground", "value": "var(--accent)"},
            {"op": "rename-rule", "from": "keyboard", "to": "keyboard[mode=1]"},
            {"op": "remove-property", "rule": "key", "name": "shape"}
        ]"##,
    )
    .unwrap();

    let mut editor = StylesheetEditor::new();
    for command in commands {
        editor.apply(command).unwrap();
    }

    assert_eq!(rule_order(&editor), vec!["@defines", "key", "keyboard[mode=1]"]);
    let key = editor.get(&rule("key")).unwrap();
    assert_eq!(key.len(), 1);
    assert_eq!(
        editor.resolve(key.get("foreground").unwrap()),
        ValuePreview::Linked {
            key: "--accent",
            target: &Value::SolidColor(Color::from_rgb(0xFF, 0x98, 0x00)),
        }
    );
}

// ============================================================================
// Invariants
// ============================================================================

#[test]
fn every_decode_path_has_one_defines_rule() {
    let inputs = [
        "{}",
        r#"{"keyboard": {}}"#,
        r#"{"@defines": {"--a": "1dp"}, "keyboard": {}}"#,
    ];
    for input in inputs {
        let editor = StylesheetEditor::from_json(input).unwrap();
        let count = editor
            .rules()
            .filter(|(rule, _)| rule.is_defined_variables_rule())
            .count();
        assert_eq!(count, 1, "input: {}", input);
    }

    let fallback = StylesheetEditor::load_or_default("not a stylesheet");
    assert!(fallback.defined_variables().is_some());
}

#[test]
fn rename_onto_existing_rule_changes_nothing() {
    let mut editor = StylesheetEditor::new();
    editor.add_rule(rule("key")).unwrap();
    editor.add_rule(rule("key:focus")).unwrap();
    editor
        .set_property(&rule("key"), "width", Value::SizeDp(10.0))
        .unwrap();
    let before = editor.clone();

    let result = editor.add_or_replace_rule(Some(&rule("key")), rule("key:focus"));
    assert_eq!(
        result,
        Err(EditError::RuleConflict {
            rule: rule("key:focus")
        })
    );
    assert_eq!(editor, before);
}

#[test]
fn add_mode_rejects_existing_property() {
    let mut editor = StylesheetEditor::new();
    editor.add_rule(rule("key")).unwrap();
    editor
        .add_property(&rule("key"), "shape", Value::Shape(Shape::rectangle()))
        .unwrap();
    let cut = Value::Shape(Shape::cut_corner_dp(4.0).unwrap());
    let result = editor.add_property(&rule("key"), "shape", cut);
    assert!(matches!(result, Err(EditError::PropertyConflict { .. })));
    assert_eq!(
        editor.get(&rule("key")).unwrap().get("shape"),
        Some(&Value::Shape(Shape::rectangle()))
    );
}

#[test]
fn saved_stylesheet_always_loads_again() {
    let mut editor = StylesheetEditor::new();
    let key = rule("key");
    editor.add_rule(key.clone()).unwrap();
    editor
        .add_property(&key, "background", Value::SolidColor(Color::from_argb(0xFF112233)))
        .unwrap();

    assert_eq!(
        Shape::rounded_corner_percent(150.0),
        Err(ValueError::RadiusOverflow)
    );
    assert_eq!(Shape::cut_corner_dp(-3.0), Err(ValueError::NegativeRadius));
    assert!(Value::variable("primary").is_err());

    let unreadable = [
        Value::SizeDp(f32::INFINITY),
        Value::SizePercent(f32::NAN),
        Value::VariableReference("primary".to_string()),
    ];
    for value in unreadable {
        let command = Command::SetProperty {
            rule: key.clone(),
            name: "width".to_string(),
            value,
        };
        assert!(matches!(
            editor.apply(command),
            Err(EditError::InvalidValue { .. })
        ));
    }

    let json = editor.to_json().unwrap();
    assert_eq!(StylesheetEditor::from_json(&json).unwrap(), editor);
    let reloaded = StylesheetEditor::load_or_default(&json);
    assert!(reloaded.has_user_rules());
    assert_eq!(
        reloaded.get(&key).unwrap().get("background"),
        Some(&Value::SolidColor(Color::from_argb(0xFF112233)))
    );
}

#[test]
fn rename_moves_rule_to_end() {
    let mut editor = StylesheetEditor::new();
    for name in ["keyboard", "key", "smartbar"] {
        editor.add_rule(rule(name)).unwrap();
    }
    let applied = editor.rename_rule(&rule("keyboard"), rule("keyboard:disabled")).unwrap();
    assert_eq!(applied.rule_index, Some(3));
    assert_eq!(
        rule_order(&editor),
        vec!["@defines", "key", "smartbar", "keyboard:disabled"]
    );
}

#[test]
fn variable_chain_stops_after_one_hop() {
    let mut editor = StylesheetEditor::new();
    let defines = Rule::defined_variables();
    editor
        .add_property(&defines, "--base", Value::SizeDp(8.0))
        .unwrap();
    editor
        .add_property(&defines, "--corner", Value::variable("--base").unwrap())
        .unwrap();

    let reference = Value::variable("--corner").unwrap();
    let preview = editor.resolve(&reference);
    assert_eq!(preview.depth(), 1);
    assert_eq!(preview.displayed(), Some(&Value::variable("--base").unwrap()));
    assert_eq!(editor.check_variables().len(), 1);
}

// ============================================================================
// Level projection
// ============================================================================

#[test]
fn developer_property_is_filtered_by_level() {
    let catalog = StaticCatalog::new().with(
        "key",
        PropertySetSpec::new()
            .property("background", PropertySpec::new(Level::Basic, [ValueEncoder::SolidColor]))
            .property("font-size", PropertySpec::new(Level::Advanced, [ValueEncoder::SpSize]))
            .property("width", PropertySpec::new(Level::Developer, [ValueEncoder::DpSize])),
    );

    let mut editor = StylesheetEditor::new();
    let key = rule("key");
    editor.add_rule(key.clone()).unwrap();
    editor.add_property(&key, "width", Value::SizeDp(40.0)).unwrap();
    editor.add_property(&key, "font-size", Value::SizeSp(16.0)).unwrap();
    editor
        .add_property(&key, "background", Value::SolidColor(Color::BLACK))
        .unwrap();
    editor
        .add_property(&Rule::defined_variables(), "--anything", Value::SizeDp(1.0))
        .unwrap();

    let visible = |rule: &Rule, level: Level| -> Vec<String> {
        let set = editor.get(rule).unwrap();
        projection::visible_properties(rule, set, &catalog, level)
            .map(|(name, _)| name.clone())
            .collect()
    };

    assert_eq!(visible(&key, Level::Basic), vec!["background"]);
    assert_eq!(visible(&key, Level::Advanced), vec!["font-size", "background"]);
    assert_eq!(
        visible(&key, Level::Developer),
        vec!["width", "font-size", "background"]
    );
    for level in Level::ALL {
        assert_eq!(visible(&Rule::defined_variables(), level), vec!["--anything"]);
    }
    assert!(catalog.property_set_spec("@defines").is_none());
    assert_eq!(
        projection::element_name(&key, Level::Advanced, &NoTranslations),
        "key"
    );
}
