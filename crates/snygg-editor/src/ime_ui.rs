//! The built-in catalog of keyboard UI elements and the properties they accept.

use once_cell::sync::Lazy;
use snygg::{Level, PropertySetSpec, PropertySpec, SpecCatalog, StaticCatalog, ValueEncoder};

/// Element names styled by the keyboard.
pub mod element {
    pub const DEFINES: &str = snygg::DEFINES_ELEMENT;
    pub const KEYBOARD: &str = "keyboard";
    pub const KEY: &str = "key";
    pub const KEY_HINT: &str = "key-hint";
    pub const KEY_POPUP: &str = "key-popup";
    pub const CLIPBOARD_HEADER: &str = "clipboard-header";
    pub const CLIPBOARD_ITEM: &str = "clipboard-item";
    pub const CLIPBOARD_ITEM_POPUP: &str = "clipboard-item-popup";
    pub const ONE_HANDED_PANEL: &str = "one-handed-panel";
    pub const SMARTBAR_PRIMARY_ROW: &str = "smartbar-primary-row";
    pub const SMARTBAR_PRIMARY_ACTION_ROW_TOGGLE: &str = "smartbar-primary-action-row-toggle";
    pub const SMARTBAR_PRIMARY_SECONDARY_ROW_TOGGLE: &str =
        "smartbar-primary-secondary-row-toggle";
    pub const SMARTBAR_SECONDARY_ROW: &str = "smartbar-secondary-row";
    pub const SMARTBAR_ACTION_ROW: &str = "smartbar-action-row";
    pub const SMARTBAR_ACTION_BUTTON: &str = "smartbar-action-button";
    pub const SMARTBAR_CANDIDATE_ROW: &str = "smartbar-candidate-row";
    pub const SMARTBAR_CANDIDATE_WORD: &str = "smartbar-candidate-word";
    pub const SMARTBAR_CANDIDATE_CLIP: &str = "smartbar-candidate-clip";
    pub const SMARTBAR_CANDIDATE_SPACER: &str = "smartbar-candidate-spacer";
    pub const SMARTBAR_KEY: &str = "smartbar-key";
    pub const SYSTEM_NAV_BAR: &str = "system-nav-bar";
}

/// Property names understood by the keyboard renderer.
pub mod property {
    pub const WIDTH: &str = "width";
    pub const HEIGHT: &str = "height";
    pub const BACKGROUND: &str = "background";
    pub const FOREGROUND: &str = "foreground";
    pub const BORDER_COLOR: &str = "border-color";
    pub const BORDER_WIDTH: &str = "border-width";
    pub const FONT_SIZE: &str = "font-size";
    pub const SHADOW_ELEVATION: &str = "shadow-elevation";
    pub const SHAPE: &str = "shape";
}

/// Styleable elements in the order an "add rule" picker lists them.
///
/// `@defines` is not listed; it is managed by the editor itself.
pub const ELEMENTS: [&str; 20] = [
    element::KEYBOARD,
    element::KEY,
    element::KEY_HINT,
    element::KEY_POPUP,
    element::CLIPBOARD_HEADER,
    element::CLIPBOARD_ITEM,
    element::CLIPBOARD_ITEM_POPUP,
    element::ONE_HANDED_PANEL,
    element::SMARTBAR_PRIMARY_ROW,
    element::SMARTBAR_PRIMARY_ACTION_ROW_TOGGLE,
    element::SMARTBAR_PRIMARY_SECONDARY_ROW_TOGGLE,
    element::SMARTBAR_SECONDARY_ROW,
    element::SMARTBAR_ACTION_ROW,
    element::SMARTBAR_ACTION_BUTTON,
    element::SMARTBAR_CANDIDATE_ROW,
    element::SMARTBAR_CANDIDATE_WORD,
    element::SMARTBAR_CANDIDATE_CLIP,
    element::SMARTBAR_CANDIDATE_SPACER,
    element::SMARTBAR_KEY,
    element::SYSTEM_NAV_BAR,
];

const COLOR: [ValueEncoder; 3] = [
    ValueEncoder::ExplicitInherit,
    ValueEncoder::SolidColor,
    ValueEncoder::DefinedVariable,
];

const DP_SIZE: [ValueEncoder; 3] = [
    ValueEncoder::ExplicitInherit,
    ValueEncoder::DpSize,
    ValueEncoder::DefinedVariable,
];

const SP_SIZE: [ValueEncoder; 3] = [
    ValueEncoder::ExplicitInherit,
    ValueEncoder::SpSize,
    ValueEncoder::DefinedVariable,
];

const DIMENSION: [ValueEncoder; 4] = [
    ValueEncoder::ExplicitInherit,
    ValueEncoder::DpSize,
    ValueEncoder::PercentageSize,
    ValueEncoder::DefinedVariable,
];

const SHAPE: [ValueEncoder; 7] = [
    ValueEncoder::ExplicitInherit,
    ValueEncoder::RectangleShape,
    ValueEncoder::RoundedCornerShapeDp,
    ValueEncoder::RoundedCornerShapePercent,
    ValueEncoder::CutCornerShapeDp,
    ValueEncoder::CutCornerShapePercent,
    ValueEncoder::DefinedVariable,
];

fn spec(level: Level, encoders: &[ValueEncoder]) -> PropertySpec {
    PropertySpec::new(level, encoders.iter().copied())
}

/// Background only, for plain containers.
fn panel() -> PropertySetSpec {
    PropertySetSpec::new().property(property::BACKGROUND, spec(Level::Basic, &COLOR))
}

/// Background and foreground, for containers that draw icons.
fn colored() -> PropertySetSpec {
    panel().property(property::FOREGROUND, spec(Level::Basic, &COLOR))
}

/// Text-bearing surfaces with a shape and border.
fn surface() -> PropertySetSpec {
    colored()
        .property(property::FONT_SIZE, spec(Level::Advanced, &SP_SIZE))
        .property(property::SHAPE, spec(Level::Advanced, &SHAPE))
        .property(property::BORDER_COLOR, spec(Level::Advanced, &COLOR))
        .property(property::BORDER_WIDTH, spec(Level::Advanced, &DP_SIZE))
        .property(property::SHADOW_ELEVATION, spec(Level::Advanced, &DP_SIZE))
}

/// Surfaces whose size can be overridden.
fn sized_surface() -> PropertySetSpec {
    surface()
        .property(property::WIDTH, spec(Level::Developer, &DIMENSION))
        .property(property::HEIGHT, spec(Level::Developer, &DIMENSION))
}

static CATALOG: Lazy<StaticCatalog> = Lazy::new(|| {
    StaticCatalog::new()
        .with(
            element::DEFINES,
            PropertySetSpec::new().prefixed(
                snygg::VARIABLE_PREFIX,
                PropertySpec::new(
                    Level::Basic,
                    ValueEncoder::ALL
                        .into_iter()
                        .filter(|e| *e != ValueEncoder::DefinedVariable),
                ),
            ),
        )
        .with(
            element::KEYBOARD,
            panel().property(property::HEIGHT, spec(Level::Developer, &DIMENSION)),
        )
        .with(element::KEY, sized_surface())
        .with(element::KEY_HINT, surface())
        .with(element::KEY_POPUP, sized_surface())
        .with(
            element::CLIPBOARD_HEADER,
            colored().property(property::FONT_SIZE, spec(Level::Advanced, &SP_SIZE)),
        )
        .with(element::CLIPBOARD_ITEM, surface())
        .with(element::CLIPBOARD_ITEM_POPUP, surface())
        .with(element::ONE_HANDED_PANEL, colored())
        .with(element::SMARTBAR_PRIMARY_ROW, panel())
        .with(element::SMARTBAR_PRIMARY_ACTION_ROW_TOGGLE, surface())
        .with(element::SMARTBAR_PRIMARY_SECONDARY_ROW_TOGGLE, surface())
        .with(element::SMARTBAR_SECONDARY_ROW, panel())
        .with(element::SMARTBAR_ACTION_ROW, panel())
        .with(element::SMARTBAR_ACTION_BUTTON, surface())
        .with(element::SMARTBAR_CANDIDATE_ROW, panel())
        .with(element::SMARTBAR_CANDIDATE_WORD, surface())
        .with(element::SMARTBAR_CANDIDATE_CLIP, surface())
        .with(
            element::SMARTBAR_CANDIDATE_SPACER,
            PropertySetSpec::new().property(property::FOREGROUND, spec(Level::Advanced, &COLOR)),
        )
        .with(element::SMARTBAR_KEY, surface())
        .with(element::SYSTEM_NAV_BAR, panel())
});

/// [`SpecCatalog`] for the keyboard UI.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImeUiCatalog;

impl ImeUiCatalog {
    /// Element names, in picker order.
    pub fn elements(&self) -> &'static [&'static str] {
        &ELEMENTS
    }

    /// Encoders offered for `property` of `element`, if the property is known.
    pub fn encoders(&self, element: &str, property: &str) -> Option<&'static [ValueEncoder]> {
        CATALOG
            .property_set_spec(element)
            .and_then(|spec| spec.property_spec(property))
            .map(PropertySpec::encoders)
    }
}

impl SpecCatalog for ImeUiCatalog {
    fn property_set_spec(&self, element: &str) -> Option<&PropertySetSpec> {
        CATALOG.property_set_spec(element)
    }
}
