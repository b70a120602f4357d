//! Operator descriptors: identity, schema and constructor of one operator.

use crate::attr::{AttrSpec, Attributes};
use crate::category::Category;
use crate::operator::Operator;
use crate::Result;
use serde::Serialize;

/// Static signature of an operator: io names and constructor attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpSchema {
    pub name: &'static str,
    pub inputs: &'static [&'static str],
    pub outputs: &'static [&'static str],
    pub attrs: &'static [AttrSpec],
}

impl OpSchema {
    pub const fn new(
        name: &'static str,
        inputs: &'static [&'static str],
        outputs: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            inputs,
            outputs,
            attrs: &[],
        }
    }

    /// Attach constructor attributes.
    pub const fn with_attrs(self, attrs: &'static [AttrSpec]) -> Self {
        Self { attrs, ..self }
    }

    /// Look up an attribute spec by name.
    pub fn attr(&self, name: &str) -> Option<&AttrSpec> {
        self.attrs.iter().find(|spec| spec.name == name)
    }
}

/// Whether a registered operator is part of the export manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Exported.
    Public,
    /// Resolvable by lookup but not exported.
    Internal,
}

/// Constructs an operator instance from its schema and caller attributes.
pub type OperatorFactory = fn(&'static OpSchema, &Attributes) -> Result<Box<dyn Operator>>;

/// A registered operator.
#[derive(Debug, Clone, Copy)]
pub struct OpDescriptor {
    schema: &'static OpSchema,
    category: Category,
    visibility: Visibility,
    factory: OperatorFactory,
}

impl OpDescriptor {
    pub fn new(
        schema: &'static OpSchema,
        category: Category,
        visibility: Visibility,
        factory: OperatorFactory,
    ) -> Self {
        Self {
            schema,
            category,
            visibility,
            factory,
        }
    }

    pub fn name(&self) -> &'static str {
        self.schema.name
    }

    pub fn schema(&self) -> &'static OpSchema {
        self.schema
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    /// Construct an operator instance with the given attributes.
    pub fn instantiate(&self, attrs: &Attributes) -> Result<Box<dyn Operator>> {
        (self.factory)(self.schema, attrs)
    }
}

impl PartialEq for OpDescriptor {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.schema, other.schema)
            && self.category == other.category
            && self.visibility == other.visibility
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::AttrKind;
    use crate::Error;

    const TOPK_ATTRS: &[AttrSpec] = &[AttrSpec::bool("sorted", false)];
    const SPLIT_ATTRS: &[AttrSpec] = &[AttrSpec::required("output_num", AttrKind::Int)];

    static TOPK: OpSchema =
        OpSchema::new("TopK", &["input", "k"], &["values", "indices"]).with_attrs(TOPK_ATTRS);
    static SPLIT: OpSchema = OpSchema::new("Split", &["x"], &["output"]).with_attrs(SPLIT_ATTRS);

    fn refuse(schema: &'static OpSchema, _attrs: &Attributes) -> Result<Box<dyn Operator>> {
        Err(Error::Unsupported(schema.name.to_string()))
    }

    #[test]
    fn test_schema_attr_lookup() {
        assert!(TOPK.attr("sorted").is_some());
        assert!(TOPK.attr("largest").is_none());
        assert_eq!(TOPK.outputs, &["values", "indices"]);
    }

    #[test]
    fn test_descriptor_accessors() {
        let desc = OpDescriptor::new(&TOPK, Category::Nn, Visibility::Public, refuse);
        assert_eq!(desc.name(), "TopK");
        assert_eq!(desc.category(), Category::Nn);
        assert!(desc.is_public());
        assert!(matches!(
            desc.instantiate(&Attributes::new()),
            Err(Error::Unsupported(_))
        ));
    }

    #[test]
    fn test_descriptor_equality_is_schema_identity() {
        let a = OpDescriptor::new(&TOPK, Category::Nn, Visibility::Public, refuse);
        let b = OpDescriptor::new(&TOPK, Category::Nn, Visibility::Public, refuse);
        let c = OpDescriptor::new(&SPLIT, Category::Array, Visibility::Public, refuse);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
