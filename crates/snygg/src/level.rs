//! Verbosity levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Verbosity tier controlling which properties are shown and how.
///
/// Levels are ordered: `Basic < Advanced < Developer`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Basic,
    #[default]
    Advanced,
    Developer,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Basic, Level::Advanced, Level::Developer];

    /// The next level in the Basic → Advanced → Developer → Basic cycle.
    pub fn next(self) -> Level {
        match self {
            Level::Basic => Level::Advanced,
            Level::Advanced => Level::Developer,
            Level::Developer => Level::Basic,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Basic => "basic",
            Level::Advanced => "advanced",
            Level::Developer => "developer",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown level '{}' (expected basic, advanced or developer)", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Level::Basic < Level::Advanced);
        assert!(Level::Advanced < Level::Developer);
    }

    #[test]
    fn test_default_is_advanced() {
        assert_eq!(Level::default(), Level::Advanced);
    }

    #[test]
    fn test_next_cycles() {
        assert_eq!(Level::Basic.next(), Level::Advanced);
        assert_eq!(Level::Advanced.next(), Level::Developer);
        assert_eq!(Level::Developer.next(), Level::Basic);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("developer".parse::<Level>().unwrap(), Level::Developer);
        assert_eq!("Basic".parse::<Level>().unwrap(), Level::Basic);
        assert!("expert".parse::<Level>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Level::Basic).unwrap(), "\"basic\"");
        let level: Level = serde_json::from_str("\"developer\"").unwrap();
        assert_eq!(level, Level::Developer);
    }
}
