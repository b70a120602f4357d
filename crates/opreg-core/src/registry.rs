//! Operator registry for lookup by name.

use crate::attr::Attributes;
use crate::category::Category;
use crate::descriptor::OpDescriptor;
use crate::operator::Operator;
use crate::{Error, Result};
use std::collections::HashMap;

/// Registry of operator descriptors.
///
/// Maps operator names (e.g., "Abs", "Conv2D") to the descriptor that
/// constructs them. Registration refuses names that are already present, so
/// a registry never silently shadows an operator.
///
/// # Example
///
/// ```ignore
/// let mut registry = OperatorRegistry::new();
/// registry.register(abs)?.register(conv2d)?;
///
/// let op = registry.lookup("Abs")?.instantiate(&Attributes::new())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct OperatorRegistry {
    /// Map from operator name to descriptor.
    operators: HashMap<String, OpDescriptor>,
}

impl OperatorRegistry {
    /// Create a new empty operator registry.
    pub fn new() -> Self {
        Self {
            operators: HashMap::new(),
        }
    }

    /// Register a descriptor.
    ///
    /// Returns `self` for method chaining. Fails with
    /// [`Error::DuplicateOperator`] if the name is taken.
    pub fn register(&mut self, descriptor: OpDescriptor) -> Result<&mut Self> {
        if let Some(existing) = self.operators.get(descriptor.name()) {
            return Err(Error::DuplicateOperator {
                name: descriptor.name().to_string(),
                first: existing.category(),
                second: descriptor.category(),
            });
        }

        self.operators
            .insert(descriptor.name().to_string(), descriptor);
        Ok(self)
    }

    /// Look up a descriptor by name.
    ///
    /// Returns `None` if no operator is registered with the given name.
    pub fn get(&self, name: &str) -> Option<&OpDescriptor> {
        self.operators.get(name)
    }

    /// Look up a descriptor by name, failing with [`Error::NotFound`].
    pub fn lookup(&self, name: &str) -> Result<&OpDescriptor> {
        self.get(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Construct an operator instance by name.
    pub fn instantiate(&self, name: &str, attrs: &Attributes) -> Result<Box<dyn Operator>> {
        self.lookup(name)?.instantiate(attrs)
    }

    /// Check if an operator is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.operators.contains_key(name)
    }

    /// Get the number of registered operators.
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Iterate over all registered operator names, in no particular order.
    pub fn operator_names(&self) -> impl Iterator<Item = &str> {
        self.operators.keys().map(|s| s.as_str())
    }

    /// Iterate over all registered descriptors, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &OpDescriptor> {
        self.operators.values()
    }

    /// Descriptors of one category, sorted by name.
    pub fn by_category(&self, category: Category) -> Vec<&OpDescriptor> {
        let mut descriptors: Vec<_> = self
            .operators
            .values()
            .filter(|desc| desc.category() == category)
            .collect();
        descriptors.sort_by_key(|desc| desc.name());
        descriptors
    }
}
