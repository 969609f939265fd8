//! Value encoders: the serialize/deserialize pair bound to each value kind.

use super::color::{function_args, Color};
use super::{check_finite, Shape, Value, VARIABLE_PREFIX};
use crate::error::{DecodeError, EncodeError, ValueError};

pub(super) const INHERIT_KEYWORD: &str = "inherit";

/// The closed set of value encoders.
///
/// Each [`Value`] maps to exactly one encoder via [`Value::encoder`]. Shapes
/// have one encoder per kind and unit so that a property spec can accept, for
/// example, rounded corners in dp but not in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueEncoder {
    ImplicitInherit,
    ExplicitInherit,
    SolidColor,
    RectangleShape,
    RoundedCornerShapeDp,
    RoundedCornerShapePercent,
    CutCornerShapeDp,
    CutCornerShapePercent,
    DpSize,
    SpSize,
    PercentageSize,
    DefinedVariable,
}

impl ValueEncoder {
    /// Every encoder, in the order [`Value::decode`] tries them.
    pub const ALL: [ValueEncoder; 12] = [
        ValueEncoder::ImplicitInherit,
        ValueEncoder::ExplicitInherit,
        ValueEncoder::DefinedVariable,
        ValueEncoder::SolidColor,
        ValueEncoder::RectangleShape,
        ValueEncoder::RoundedCornerShapeDp,
        ValueEncoder::RoundedCornerShapePercent,
        ValueEncoder::CutCornerShapeDp,
        ValueEncoder::CutCornerShapePercent,
        ValueEncoder::DpSize,
        ValueEncoder::SpSize,
        ValueEncoder::PercentageSize,
    ];

    /// Stable identifier, used in error messages and translation lookups.
    pub fn id(self) -> &'static str {
        match self {
            ValueEncoder::ImplicitInherit => "implicit-inherit",
            ValueEncoder::ExplicitInherit => "explicit-inherit",
            ValueEncoder::SolidColor => "solid-color",
            ValueEncoder::RectangleShape => "rectangle-shape",
            ValueEncoder::RoundedCornerShapeDp => "rounded-corner-shape-dp",
            ValueEncoder::RoundedCornerShapePercent => "rounded-corner-shape-percent",
            ValueEncoder::CutCornerShapeDp => "cut-corner-shape-dp",
            ValueEncoder::CutCornerShapePercent => "cut-corner-shape-percent",
            ValueEncoder::DpSize => "dp-size",
            ValueEncoder::SpSize => "sp-size",
            ValueEncoder::PercentageSize => "percentage-size",
            ValueEncoder::DefinedVariable => "defined-variable",
        }
    }

    /// Human readable category name for grouping values in a picker.
    pub fn category_name(self) -> &'static str {
        match self {
            ValueEncoder::ImplicitInherit => "Not set",
            ValueEncoder::ExplicitInherit => "Inherit",
            ValueEncoder::SolidColor => "Solid color",
            ValueEncoder::RectangleShape => "Rectangle shape",
            ValueEncoder::RoundedCornerShapeDp => "Rounded corner shape (dp)",
            ValueEncoder::RoundedCornerShapePercent => "Rounded corner shape (%)",
            ValueEncoder::CutCornerShapeDp => "Cut corner shape (dp)",
            ValueEncoder::CutCornerShapePercent => "Cut corner shape (%)",
            ValueEncoder::DpSize => "Size (dp)",
            ValueEncoder::SpSize => "Size (sp)",
            ValueEncoder::PercentageSize => "Size (%)",
            ValueEncoder::DefinedVariable => "Defined variable",
        }
    }

    /// Serializes `value`, failing if it belongs to a different encoder.
    pub fn encode(self, value: &Value) -> Result<String, EncodeError> {
        let actual = value.encoder();
        if actual != self {
            return Err(EncodeError::EncoderMismatch {
                encoder: self.id(),
                actual: actual.id(),
            });
        }
        Ok(value.encode())
    }

    /// Parses `input` with this encoder.
    ///
    /// Returns [`DecodeError::UnknownValue`] when the input does not have this
    /// encoder's syntax at all, and [`DecodeError::InvalidValue`] when it does
    /// but the contents are out of range or malformed.
    pub fn decode(self, input: &str) -> Result<Value, DecodeError> {
        let s = input.trim();
        let unknown = || DecodeError::UnknownValue {
            input: input.to_string(),
        };

        match self {
            ValueEncoder::ImplicitInherit => {
                if s.is_empty() {
                    Ok(Value::ImplicitInherit)
                } else {
                    Err(unknown())
                }
            }
            ValueEncoder::ExplicitInherit => {
                if s.eq_ignore_ascii_case(INHERIT_KEYWORD) {
                    Ok(Value::ExplicitInherit)
                } else {
                    Err(unknown())
                }
            }
            ValueEncoder::SolidColor => {
                let looks_like_color = s.starts_with('#')
                    || function_args(s, "rgb").is_some()
                    || function_args(s, "rgba").is_some();
                if !looks_like_color {
                    return Err(unknown());
                }
                Color::parse(s)
                    .map(Value::SolidColor)
                    .map_err(|reason| self.invalid(input, reason))
            }
            ValueEncoder::RectangleShape => match function_args(s, "rectangle") {
                Some("") => Ok(Value::Shape(Shape::rectangle())),
                Some(_) => Err(self.invalid(input, "rectangle() takes no arguments")),
                None => Err(unknown()),
            },
            ValueEncoder::RoundedCornerShapeDp => {
                self.corner(input, "rounded-corner", "dp", Shape::rounded_corner_dp)
            }
            ValueEncoder::RoundedCornerShapePercent => {
                self.corner(input, "rounded-corner", "%", Shape::rounded_corner_percent)
            }
            ValueEncoder::CutCornerShapeDp => {
                self.corner(input, "cut-corner", "dp", Shape::cut_corner_dp)
            }
            ValueEncoder::CutCornerShapePercent => {
                self.corner(input, "cut-corner", "%", Shape::cut_corner_percent)
            }
            ValueEncoder::DpSize => self.size(input, "dp").map(Value::SizeDp),
            ValueEncoder::SpSize => self.size(input, "sp").map(Value::SizeSp),
            ValueEncoder::PercentageSize => self.size(input, "%").map(Value::SizePercent),
            ValueEncoder::DefinedVariable => {
                let key = function_args(s, "var").ok_or_else(unknown)?;
                Value::variable(key).map_err(|err| self.invalid(input, err.to_string()))
            }
        }
    }

    fn invalid(self, input: &str, reason: impl Into<String>) -> DecodeError {
        DecodeError::InvalidValue {
            encoder: self.id(),
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Parses `<number><suffix>`.
    fn size(self, input: &str, suffix: &str) -> Result<f32, DecodeError> {
        let number = input
            .trim()
            .strip_suffix(suffix)
            .ok_or_else(|| DecodeError::UnknownValue {
                input: input.to_string(),
            })?;
        self.number(input, number)
    }

    /// Parses `<function>(<number><unit>)` into a shape built by `shape`,
    /// which checks the radius range.
    fn corner(
        self,
        input: &str,
        function: &str,
        unit: &str,
        shape: fn(f32) -> Result<Shape, ValueError>,
    ) -> Result<Value, DecodeError> {
        let unknown = || DecodeError::UnknownValue {
            input: input.to_string(),
        };
        let args = function_args(input, function).ok_or_else(unknown)?;
        let number = args.strip_suffix(unit).ok_or_else(unknown)?;
        let radius = self.number(input, number)?;
        shape(radius)
            .map(Value::Shape)
            .map_err(|err| self.invalid(input, err.to_string()))
    }

    fn number(self, input: &str, text: &str) -> Result<f32, DecodeError> {
        let n = text
            .trim()
            .parse::<f32>()
            .map_err(|_| self.invalid(input, format!("'{}' is not a number", text.trim())))?;
        check_finite(n).map_err(|err| self.invalid(input, err.to_string()))
    }
}

/// Returns true if `name` is a valid variable name such as `--primary`.
pub fn is_variable_name(name: &str) -> bool {
    name.strip_prefix(VARIABLE_PREFIX).is_some_and(|rest| {
        !rest.is_empty()
            && rest
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    })
}
