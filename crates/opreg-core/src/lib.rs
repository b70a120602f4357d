//! Core registry, manifest, and operator traits for opreg.
//!
//! This crate provides the foundational abstractions the operator tables are
//! built on:
//! - Operator descriptors and schemas (`OpDescriptor`, `OpSchema`)
//! - Category groups (`CategoryGroup`) authored independently per category
//! - The name → descriptor registry (`OperatorRegistry`)
//! - The sorted export manifest (`Manifest`, `ManifestBuilder`)
//! - Catalog assembly merging groups into one immutable view (`Catalog`)
//! - Attribute schemas and validation (`AttrSpec`, `Attributes`)

pub mod attr;
pub mod catalog;
pub mod category;
pub mod descriptor;
pub mod group;
pub mod manifest;
pub mod operator;
pub mod registry;
pub mod types;

// Re-export commonly used types
pub use attr::{AttrDefault, AttrKind, AttrSpec, AttrValue, Attributes};
pub use catalog::{Catalog, CatalogBuilder};
pub use category::Category;
pub use descriptor::{OpDescriptor, OpSchema, OperatorFactory, Visibility};
pub use group::CategoryGroup;
pub use manifest::{Manifest, ManifestBuilder};
pub use operator::Operator;
pub use registry::OperatorRegistry;
pub use types::{DataType, TensorData, TensorSpec};

/// Result type using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for opreg operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Operator not found: {0}")]
    NotFound(String),

    #[error("Operator '{name}' is defined by both the {first} and {second} groups")]
    DuplicateOperator {
        name: String,
        first: Category,
        second: Category,
    },

    #[error("Invalid operator name: {0}")]
    InvalidName(String),

    #[error("Exported name '{0}' does not resolve to a registered operator")]
    UnresolvedExport(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Attribute error: {0}")]
    Attribute(String),

    #[error("Shape error: {0}")]
    Shape(String),

    #[error("Data type error: {0}")]
    DataType(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

/// Check that `name` is usable as an operator identifier.
///
/// Names are non-empty, ASCII alphanumeric or `_`, and do not start with a digit.
pub fn validate_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(Error::InvalidName(format!("'{name}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Abs").is_ok());
        assert!(validate_name("_AlltoAll").is_ok());
        assert!(validate_name("BatchNormFold2_D").is_ok());
        assert!(validate_name("Conv2D").is_ok());

        assert!(matches!(validate_name(""), Err(Error::InvalidName(_))));
        assert!(matches!(validate_name("2D"), Err(Error::InvalidName(_))));
        assert!(matches!(validate_name("Add-N"), Err(Error::InvalidName(_))));
        assert!(matches!(validate_name("Mat Mul"), Err(Error::InvalidName(_))));
    }

    #[test]
    fn test_duplicate_error_message() {
        let err = Error::DuplicateOperator {
            name: "Abs".to_string(),
            first: Category::Math,
            second: Category::Nn,
        };
        assert_eq!(
            err.to_string(),
            "Operator 'Abs' is defined by both the math and nn groups"
        );
    }
}
