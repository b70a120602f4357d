//! Category groups: independently authored operator tables.

use crate::category::Category;
use crate::descriptor::{OpDescriptor, OpSchema, OperatorFactory, Visibility};
use crate::{validate_name, Error, Result};
use std::collections::HashSet;

/// An ordered, duplicate-free set of operators from one category.
///
/// Each category module builds one of these; [`CatalogBuilder`](crate::CatalogBuilder)
/// merges them.
///
/// # Example
///
/// ```ignore
/// let mut group = CategoryGroup::new(Category::Math);
/// group
///     .public(&ABS, Primitive::create)?
///     .public(&ACOS, Primitive::create)?;
/// ```
#[derive(Debug, Clone)]
pub struct CategoryGroup {
    category: Category,
    entries: Vec<OpDescriptor>,
    names: HashSet<&'static str>,
}

impl CategoryGroup {
    /// Create a new empty group.
    pub fn new(category: Category) -> Self {
        Self {
            category,
            entries: Vec::new(),
            names: HashSet::new(),
        }
    }

    /// Add an exported operator.
    pub fn public(
        &mut self,
        schema: &'static OpSchema,
        factory: OperatorFactory,
    ) -> Result<&mut Self> {
        self.add(schema, Visibility::Public, factory)
    }

    /// Add an operator that is registered but not exported.
    pub fn internal(
        &mut self,
        schema: &'static OpSchema,
        factory: OperatorFactory,
    ) -> Result<&mut Self> {
        self.add(schema, Visibility::Internal, factory)
    }

    /// Add every schema in a table with the same visibility and factory.
    pub fn extend(
        &mut self,
        schemas: &'static [OpSchema],
        visibility: Visibility,
        factory: OperatorFactory,
    ) -> Result<&mut Self> {
        for schema in schemas {
            self.add(schema, visibility, factory)?;
        }
        Ok(self)
    }

    fn add(
        &mut self,
        schema: &'static OpSchema,
        visibility: Visibility,
        factory: OperatorFactory,
    ) -> Result<&mut Self> {
        validate_name(schema.name)?;

        if visibility == Visibility::Public && schema.name.starts_with('_') {
            return Err(Error::InvalidName(format!(
                "'{}' is private and cannot be exported",
                schema.name
            )));
        }

        if !self.names.insert(schema.name) {
            return Err(Error::DuplicateOperator {
                name: schema.name.to_string(),
                first: self.category,
                second: self.category,
            });
        }

        self.entries
            .push(OpDescriptor::new(schema, self.category, visibility, factory));
        Ok(self)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Descriptors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &OpDescriptor> {
        self.entries.iter()
    }

    /// Names this group wants exported, in insertion order.
    pub fn public_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries
            .iter()
            .filter(|desc| desc.is_public())
            .map(|desc| desc.name())
    }
}

impl IntoIterator for CategoryGroup {
    type Item = OpDescriptor;
    type IntoIter = std::vec::IntoIter<OpDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
