//! Solid color values.
//!
//! Colors are stored as a packed ARGB `u32`. Parsing accepts several formats:
//!
//! - **Hex**: `"#rgb"`, `"#rrggbb"` or `"#rrggbbaa"` (case-insensitive)
//! - **Functional**: `"rgb(255, 107, 53)"` or `"rgba(255, 107, 53, 0.5)"`
//!
//! Formatting is canonical: `#rrggbb` for opaque colors, `#rrggbbaa` otherwise,
//! always lowercase.
//!
//! # Example
//!
//! ```rust
//! use snygg::Color;
//!
//! let brand = Color::parse("#FF6B35").unwrap();
//! assert_eq!(brand.argb(), 0xFFFF6B35);
//! assert_eq!(brand.to_string(), "#ff6b35");
//!
//! let glass = Color::parse("rgba(255, 255, 255, 0.5)").unwrap();
//! assert_eq!(glass.alpha(), 128);
//! assert_eq!(glass.to_string(), "#ffffff80");
//! ```

use std::fmt;

/// A 32-bit ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    /// Creates a color from a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Color(argb)
    }

    /// Creates a color from its four channels.
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Creates an opaque color.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r, g, b, 0xFF)
    }

    /// Returns the packed `0xAARRGGBB` value.
    pub const fn argb(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    pub const fn is_opaque(self) -> bool {
        self.alpha() == 0xFF
    }

    /// Parses a color from a string.
    ///
    /// Returns a human readable reason on failure.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        if let Some(args) = function_args(s, "rgba") {
            return Self::parse_channels(args, true);
        }

        if let Some(args) = function_args(s, "rgb") {
            return Self::parse_channels(args, false);
        }

        Err(format!("unknown color format: {}", s))
    }

    /// Parses a hex color code (without the # prefix).
    fn parse_hex(hex: &str) -> Result<Self, String> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("invalid hex digits in #{}", hex));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| format!("Invalid hex: {}", hex))
        };

        match hex.len() {
            // #rgb -> #rrggbb
            3 => {
                let r = channel(0..1)? * 17;
                let g = channel(1..2)? * 17;
                let b = channel(2..3)? * 17;
                Ok(Color::from_rgb(r, g, b))
            }
            6 => Ok(Color::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::from_rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!(
                "invalid hex color #{} (must be 3, 6 or 8 digits)",
                hex
            )),
        }
    }

    /// Parses the argument list of `rgb(...)` / `rgba(...)`.
    fn parse_channels(args: &str, with_alpha: bool) -> Result<Self, String> {
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        let expected = if with_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(format!(
                "expected {} components, got {}",
                expected,
                parts.len()
            ));
        }

        let mut rgb = [0u8; 3];
        for (i, part) in parts.iter().take(3).enumerate() {
            rgb[i] = part
                .parse::<u8>()
                .map_err(|_| format!("color component {} out of range (0-255): {}", i, part))?;
        }

        let alpha = if with_alpha {
            let a = parts[3]
                .parse::<f32>()
                .map_err(|_| format!("alpha is not a number: {}", parts[3]))?;
            if !(0.0..=1.0).contains(&a) {
                return Err(format!("alpha out of range (0.0-1.0): {}", a));
            }
            (a * 255.0).round() as u8
        } else {
            0xFF
        };

        Ok(Color::from_rgba(rgb[0], rgb[1], rgb[2], alpha))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red(), self.green(), self.blue())?;
        if !self.is_opaque() {
            write!(f, "{:02x}", self.alpha())?;
        }
        Ok(())
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Color(argb)
    }
}

/// Returns the inner argument text of `name(...)`, if `s` has that shape.
pub(crate) fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    let rest = s.trim().strip_prefix(name)?;
    let inner = rest.trim_start().strip_prefix('(')?.strip_suffix(')')?;
    Some(inner.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Hex parsing
    // =========================================================================

    #[test]
    fn test_parse_hex_6_digit() {
        assert_eq!(
            Color::parse("#ff6b35").unwrap(),
            Color::from_argb(0xFFFF6B35)
        );
    }

    #[test]
    fn test_parse_hex_8_digit_keeps_alpha() {
        let c = Color::parse("#11223344").unwrap();
        assert_eq!(c.argb(), 0x44112233);
        assert_eq!(c.alpha(), 0x44);
    }

    #[test]
    fn test_parse_hex_3_digit() {
        assert_eq!(Color::parse("#fff").unwrap(), Color::WHITE);
        assert_eq!(Color::parse("#000").unwrap(), Color::BLACK);
    }

    #[test]
    fn test_parse_hex_uppercase() {
        assert_eq!(
            Color::parse("#FF6B35").unwrap(),
            Color::parse("#ff6b35").unwrap()
        );
    }

    #[test]
    fn test_parse_hex_invalid_length() {
        assert!(Color::parse("#ff6b3").is_err());
        assert!(Color::parse("#").is_err());
    }

    #[test]
    fn test_parse_hex_invalid_digits() {
        assert!(Color::parse("#gggggg").is_err());
        // multi-byte characters must not panic on slicing
        assert!(Color::parse("#ééé").is_err());
    }

    // =========================================================================
    // Functional notation
    // =========================================================================

    #[test]
    fn test_parse_rgb_function() {
        assert_eq!(
            Color::parse("rgb(255, 107, 53)").unwrap(),
            Color::from_rgb(255, 107, 53)
        );
    }

    #[test]
    fn test_parse_rgba_function() {
        let c = Color::parse("rgba(0,0,0,0.5)").unwrap();
        assert_eq!(c, Color::from_rgba(0, 0, 0, 128));
    }

    #[test]
    fn test_parse_rgba_alpha_out_of_range() {
        assert!(Color::parse("rgba(0, 0, 0, 1.5)").is_err());
    }

    #[test]
    fn test_parse_rgb_component_out_of_range() {
        assert!(Color::parse("rgb(256, 0, 0)").is_err());
    }

    #[test]
    fn test_parse_rgb_wrong_arity() {
        assert!(Color::parse("rgb(1, 2)").is_err());
        assert!(Color::parse("rgba(1, 2, 3)").is_err());
    }

    #[test]
    fn test_parse_unknown_format() {
        assert!(Color::parse("red").is_err());
        assert!(Color::parse("").is_err());
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    #[test]
    fn test_display_opaque_omits_alpha() {
        assert_eq!(Color::from_argb(0xFF112233).to_string(), "#112233");
    }

    #[test]
    fn test_display_translucent_appends_alpha() {
        assert_eq!(Color::from_argb(0x80112233).to_string(), "#11223380");
    }

    #[test]
    fn test_channel_accessors() {
        let c = Color::from_argb(0x11223344);
        assert_eq!(c.alpha(), 0x11);
        assert_eq!(c.red(), 0x22);
        assert_eq!(c.green(), 0x33);
        assert_eq!(c.blue(), 0x44);
    }
}
