//! English display strings for the built-in keyboard catalog.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use snygg::projection::Translations;
use snygg::{Selector, ValueEncoder};

use crate::ime_ui::{element, property};

static ELEMENT_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("@defines", "Defined variables"),
        (element::KEYBOARD, "Keyboard"),
        (element::KEY, "Key"),
        (element::KEY_HINT, "Key hint"),
        (element::KEY_POPUP, "Key popup"),
        (element::CLIPBOARD_HEADER, "Clipboard header"),
        (element::CLIPBOARD_ITEM, "Clipboard item"),
        (element::CLIPBOARD_ITEM_POPUP, "Clipboard item popup"),
        (element::ONE_HANDED_PANEL, "One-handed panel"),
        (element::SMARTBAR_PRIMARY_ROW, "Smartbar primary row"),
        (element::SMARTBAR_PRIMARY_ACTION_ROW_TOGGLE, "Smartbar action row toggle"),
        (element::SMARTBAR_PRIMARY_SECONDARY_ROW_TOGGLE, "Smartbar secondary row toggle"),
        (element::SMARTBAR_SECONDARY_ROW, "Smartbar secondary row"),
        (element::SMARTBAR_ACTION_ROW, "Smartbar action row"),
        (element::SMARTBAR_ACTION_BUTTON, "Smartbar action button"),
        (element::SMARTBAR_CANDIDATE_ROW, "Smartbar candidate row"),
        (element::SMARTBAR_CANDIDATE_WORD, "Smartbar candidate word"),
        (element::SMARTBAR_CANDIDATE_CLIP, "Smartbar candidate clip"),
        (element::SMARTBAR_CANDIDATE_SPACER, "Smartbar candidate spacer"),
        (element::SMARTBAR_KEY, "Smartbar key"),
        (element::SYSTEM_NAV_BAR, "System navigation bar"),
    ])
});

static PROPERTY_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (property::WIDTH, "Width"),
        (property::HEIGHT, "Height"),
        (property::BACKGROUND, "Background"),
        (property::FOREGROUND, "Foreground"),
        (property::BORDER_COLOR, "Border color"),
        (property::BORDER_WIDTH, "Border width"),
        (property::FONT_SIZE, "Font size"),
        (property::SHADOW_ELEVATION, "Shadow elevation"),
        (property::SHAPE, "Shape"),
        ("--primary", "Primary color"),
        ("--primary-variant", "Primary color (variant)"),
        ("--secondary", "Secondary color"),
        ("--secondary-variant", "Secondary color (variant)"),
        ("--background", "Background color"),
        ("--surface", "Surface color"),
        ("--surface-variant", "Surface color (variant)"),
        ("--on-primary", "Foreground on primary"),
        ("--on-secondary", "Foreground on secondary"),
        ("--on-background", "Foreground on background"),
        ("--on-surface", "Foreground on surface"),
    ])
});

/// Built-in English [`Translations`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishTranslations;

impl Translations for EnglishTranslations {
    fn element(&self, element: &str) -> Option<&str> {
        ELEMENT_NAMES.get(element).copied()
    }

    fn selector(&self, selector: Selector) -> Option<&str> {
        Some(match selector {
            Selector::Pressed => "pressed",
            Selector::Focus => "focus",
            Selector::Disabled => "disabled",
        })
    }

    fn property(&self, name: &str) -> Option<&str> {
        PROPERTY_NAMES.get(name).copied()
    }

    fn encoder(&self, encoder: ValueEncoder) -> Option<&str> {
        match encoder {
            ValueEncoder::ImplicitInherit => self.placeholder(),
            ValueEncoder::ExplicitInherit => Some("Inherit"),
            ValueEncoder::SolidColor => Some("Solid color"),
            ValueEncoder::RectangleShape => Some("Rectangle shape"),
            ValueEncoder::RoundedCornerShapeDp => Some("Rounded corner shape (dp)"),
            ValueEncoder::RoundedCornerShapePercent => Some("Rounded corner shape (%)"),
            ValueEncoder::CutCornerShapeDp => Some("Cut corner shape (dp)"),
            ValueEncoder::CutCornerShapePercent => Some("Cut corner shape (%)"),
            ValueEncoder::DpSize => Some("Size in dp"),
            ValueEncoder::SpSize => Some("Size in sp"),
            ValueEncoder::PercentageSize => Some("Size in percent"),
            ValueEncoder::DefinedVariable => Some("Reference to a variable"),
        }
    }

    fn placeholder(&self) -> Option<&str> {
        Some("- select -")
    }

    fn defined_variables_description(&self) -> Option<&str> {
        Some("Variables defined here can be referenced from any rule with var(--name).")
    }
}
