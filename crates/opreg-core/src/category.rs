//! Operator categories.

use crate::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Themed partition an operator is imported from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Array,
    Image,
    Math,
    Nn,
    Comm,
    Debug,
    Control,
    Inner,
    Random,
    Other,
    Quant,
    Thor,
}

impl Category {
    /// All categories, in import order.
    pub const ALL: [Category; 12] = [
        Category::Image,
        Category::Array,
        Category::Comm,
        Category::Debug,
        Category::Control,
        Category::Inner,
        Category::Math,
        Category::Random,
        Category::Nn,
        Category::Other,
        Category::Quant,
        Category::Thor,
    ];

    /// Lowercase identifier used in diagnostics and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Array => "array",
            Category::Image => "image",
            Category::Math => "math",
            Category::Nn => "nn",
            Category::Comm => "comm",
            Category::Debug => "debug",
            Category::Control => "control",
            Category::Inner => "inner",
            Category::Random => "random",
            Category::Other => "other",
            Category::Quant => "quant",
            Category::Thor => "thor",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_category() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("NN".parse::<Category>().unwrap(), Category::Nn);
        assert_eq!("Quant".parse::<Category>().unwrap(), Category::Quant);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "sparse".parse::<Category>().unwrap_err();
        assert!(matches!(err, Error::UnknownCategory(ref s) if s == "sparse"));
    }
}
