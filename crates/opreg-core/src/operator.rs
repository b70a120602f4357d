//! Operator trait for constructed operator instances.

use crate::attr::Attributes;
use crate::descriptor::OpSchema;
use crate::types::TensorSpec;
use crate::{Error, Result};
use std::fmt;

/// An operator instance with validated attributes.
///
/// Instances are produced by an [`OpDescriptor`](crate::OpDescriptor)'s
/// factory. They describe one computation primitive; executing it is the
/// business of a backend, not of this trait.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug)]
/// struct AbsOperator {
///     attrs: Attributes,
/// }
///
/// impl Operator for AbsOperator {
///     fn schema(&self) -> &OpSchema {
///         &ABS_SCHEMA
///     }
///
///     fn attributes(&self) -> &Attributes {
///         &self.attrs
///     }
/// }
/// ```
pub trait Operator: Send + Sync + fmt::Debug {
    /// Schema this instance was built from.
    fn schema(&self) -> &OpSchema;

    /// Resolved attributes, including defaults.
    fn attributes(&self) -> &Attributes;

    /// Operator name (e.g., "Abs", "Conv2D", "AllReduce").
    fn name(&self) -> &str {
        self.schema().name
    }

    /// Infer output tensor specs from input specs.
    ///
    /// Operators without static inference return `Error::Unsupported`.
    fn infer(&self, inputs: &[TensorSpec]) -> Result<Vec<TensorSpec>> {
        let _ = inputs;
        Err(Error::Unsupported(format!(
            "{} does not implement shape inference",
            self.name()
        )))
    }
}
