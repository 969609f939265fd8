//! Typed property values.
//!
//! A [`Value`] is a closed tagged union: every variant has exactly one
//! [`ValueEncoder`] that can write it to its canonical string form and read it
//! back. Adding a new kind of value means extending [`Value`] and
//! [`ValueEncoder`]; every `match` in the crate is exhaustive, so a forgotten
//! consumer fails to build.
//!
//! # Canonical Encodings
//!
//! | Variant | Example |
//! |---------|---------|
//! | `ImplicitInherit` | `""` |
//! | `ExplicitInherit` | `inherit` |
//! | `SolidColor` | `#112233`, `#11223380` |
//! | `Shape` | `rectangle()`, `rounded-corner(8dp)`, `cut-corner(10%)` |
//! | `SizeDp` | `12dp` |
//! | `SizeSp` | `14sp` |
//! | `SizePercent` | `50%` |
//! | `VariableReference` | `var(--primary)` |
//!
//! # Example
//!
//! ```rust
//! use snygg::{Color, Value, ValueEncoder};
//!
//! let value = Value::decode("#112233").unwrap();
//! assert_eq!(value, Value::SolidColor(Color::from_argb(0xFF112233)));
//! assert_eq!(value.encoder(), ValueEncoder::SolidColor);
//! assert_eq!(value.encode(), "#112233");
//!
//! let reference: Value = "var(--primary)".parse().unwrap();
//! assert_eq!(reference.variable_key(), Some("--primary"));
//! ```
//!
//! # Valid Contents
//!
//! Sizes and corner radii must be finite, corner radii must not be negative,
//! percent radii must not exceed 100 and references must name a `--` variable.
//! [`Shape`] constructors and [`Value::variable`] check this up front; the
//! size variants carry a plain `f32` and are checked by [`Value::validate`].

mod color;
mod encoder;

pub use color::Color;
pub use encoder::{is_variable_name, ValueEncoder};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DecodeError, ValueError};

/// Prefix every variable name in the defined-variables rule starts with.
pub const VARIABLE_PREFIX: &str = "--";

/// A typed property value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No value set; inherit from the parent element.
    ImplicitInherit,
    /// Explicit `inherit` keyword.
    ExplicitInherit,
    /// A solid ARGB color.
    SolidColor(Color),
    /// A shape outline.
    Shape(Shape),
    /// Size in density-independent pixels.
    SizeDp(f32),
    /// Size in scale-independent pixels (font sizes).
    SizeSp(f32),
    /// Size relative to the parent, in percent.
    SizePercent(f32),
    /// Reference to an entry of the defined-variables rule, e.g. `--primary`.
    VariableReference(String),
}

impl Value {
    /// Writes the value in its canonical string form.
    ///
    /// Total and deterministic for every variant.
    pub fn encode(&self) -> String {
        match self {
            Value::ImplicitInherit => String::new(),
            Value::ExplicitInherit => encoder::INHERIT_KEYWORD.to_string(),
            Value::SolidColor(color) => color.to_string(),
            Value::Shape(shape) => shape.to_string(),
            Value::SizeDp(size) => format!("{}dp", size),
            Value::SizeSp(size) => format!("{}sp", size),
            Value::SizePercent(size) => format!("{}%", size),
            Value::VariableReference(key) => format!("var({})", key),
        }
    }

    /// Returns the encoder responsible for this value.
    pub fn encoder(&self) -> ValueEncoder {
        match self {
            Value::ImplicitInherit => ValueEncoder::ImplicitInherit,
            Value::ExplicitInherit => ValueEncoder::ExplicitInherit,
            Value::SolidColor(_) => ValueEncoder::SolidColor,
            Value::Shape(shape) => match (shape.kind(), shape.unit()) {
                (ShapeKind::Rectangle, _) => ValueEncoder::RectangleShape,
                (ShapeKind::RoundedCorner, ShapeUnit::Dp) => ValueEncoder::RoundedCornerShapeDp,
                (ShapeKind::RoundedCorner, ShapeUnit::Percent) => {
                    ValueEncoder::RoundedCornerShapePercent
                }
                (ShapeKind::CutCorner, ShapeUnit::Dp) => ValueEncoder::CutCornerShapeDp,
                (ShapeKind::CutCorner, ShapeUnit::Percent) => ValueEncoder::CutCornerShapePercent,
            },
            Value::SizeDp(_) => ValueEncoder::DpSize,
            Value::SizeSp(_) => ValueEncoder::SpSize,
            Value::SizePercent(_) => ValueEncoder::PercentageSize,
            Value::VariableReference(_) => ValueEncoder::DefinedVariable,
        }
    }

    /// Decodes a value by trying every encoder in [`ValueEncoder::ALL`] order.
    ///
    /// When an encoder recognises the syntax but rejects the contents (for
    /// example `#12345`), that error is reported instead of a generic
    /// [`DecodeError::UnknownValue`].
    pub fn decode(input: &str) -> Result<Value, DecodeError> {
        let mut first_invalid = None;

        for encoder in ValueEncoder::ALL {
            match encoder.decode(input) {
                Ok(value) => return Ok(value),
                Err(err @ DecodeError::InvalidValue { .. }) => {
                    first_invalid.get_or_insert(err);
                }
                Err(_) => {}
            }
        }

        Err(first_invalid.unwrap_or_else(|| DecodeError::UnknownValue {
            input: input.to_string(),
        }))
    }

    /// Creates a reference to the variable `key`, e.g. `--primary`.
    pub fn variable(key: impl Into<String>) -> Result<Self, ValueError> {
        let key = key.into();
        check_variable_name(&key)?;
        Ok(Value::VariableReference(key))
    }

    /// Checks that [`Value::encode`] produces text that decodes back to this
    /// value.
    pub fn validate(&self) -> Result<(), ValueError> {
        match self {
            Value::ImplicitInherit | Value::ExplicitInherit | Value::SolidColor(_) => Ok(()),
            Value::Shape(shape) => check_radius(shape.unit, shape.radius).map(drop),
            Value::SizeDp(size) | Value::SizeSp(size) | Value::SizePercent(size) => {
                check_finite(*size).map(drop)
            }
            Value::VariableReference(key) => check_variable_name(key),
        }
    }

    /// Returns true for [`Value::VariableReference`].
    pub fn is_variable_reference(&self) -> bool {
        matches!(self, Value::VariableReference(_))
    }

    /// Returns the referenced variable name, if this is a reference.
    pub fn variable_key(&self) -> Option<&str> {
        match self {
            Value::VariableReference(key) => Some(key),
            _ => None,
        }
    }

    /// Returns true for both inherit markers.
    pub fn is_inherit(&self) -> bool {
        matches!(self, Value::ImplicitInherit | Value::ExplicitInherit)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for Value {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Value::decode(s)
    }
}

impl From<Color> for Value {
    fn from(color: Color) -> Self {
        Value::SolidColor(color)
    }
}

impl From<Shape> for Value {
    fn from(shape: Shape) -> Self {
        Value::Shape(shape)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Value::decode(&raw).map_err(serde::de::Error::custom)
    }
}

/// Outline kind of a [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    RoundedCorner,
    CutCorner,
}

/// Unit of a corner radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeUnit {
    Dp,
    Percent,
}

/// A shape with a uniform corner radius.
///
/// Fields are private: a rectangle always carries `Dp` and a zero radius, and
/// corner radii are range checked on construction, so every constructible
/// shape has exactly one encoding and it decodes back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    unit: ShapeUnit,
    radius: f32,
}

impl Shape {
    pub const fn rectangle() -> Self {
        Shape {
            kind: ShapeKind::Rectangle,
            unit: ShapeUnit::Dp,
            radius: 0.0,
        }
    }

    pub fn rounded_corner_dp(radius: f32) -> Result<Self, ValueError> {
        Shape::corner(ShapeKind::RoundedCorner, ShapeUnit::Dp, radius)
    }

    pub fn rounded_corner_percent(radius: f32) -> Result<Self, ValueError> {
        Shape::corner(ShapeKind::RoundedCorner, ShapeUnit::Percent, radius)
    }

    pub fn cut_corner_dp(radius: f32) -> Result<Self, ValueError> {
        Shape::corner(ShapeKind::CutCorner, ShapeUnit::Dp, radius)
    }

    pub fn cut_corner_percent(radius: f32) -> Result<Self, ValueError> {
        Shape::corner(ShapeKind::CutCorner, ShapeUnit::Percent, radius)
    }

    fn corner(kind: ShapeKind, unit: ShapeUnit, radius: f32) -> Result<Self, ValueError> {
        Ok(Shape {
            kind,
            unit,
            radius: check_radius(unit, radius)?,
        })
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn unit(&self) -> ShapeUnit {
        self.unit
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.kind {
            ShapeKind::Rectangle => return f.write_str("rectangle()"),
            ShapeKind::RoundedCorner => "rounded-corner",
            ShapeKind::CutCorner => "cut-corner",
        };
        let unit = match self.unit {
            ShapeUnit::Dp => "dp",
            ShapeUnit::Percent => "%",
        };
        write!(f, "{}({}{})", name, self.radius, unit)
    }
}

pub(crate) fn check_finite(n: f32) -> Result<f32, ValueError> {
    if n.is_finite() {
        Ok(n)
    } else {
        Err(ValueError::NotFinite)
    }
}

fn check_radius(unit: ShapeUnit, radius: f32) -> Result<f32, ValueError> {
    let radius = check_finite(radius)?;
    if radius < 0.0 {
        return Err(ValueError::NegativeRadius);
    }
    if unit == ShapeUnit::Percent && radius > 100.0 {
        return Err(ValueError::RadiusOverflow);
    }
    Ok(radius)
}

fn check_variable_name(key: &str) -> Result<(), ValueError> {
    if is_variable_name(key) {
        Ok(())
    } else {
        Err(ValueError::InvalidVariableName {
            key: key.to_string(),
        })
    }
}
