//! Schema-driven operator instance shared by every table-defined operator.

use opreg_core::{Attributes, OpSchema, Operator, Result};

/// An operator whose behavior is fully described by its schema.
///
/// Construction resolves the caller's attributes against the schema, so an
/// instance always carries a complete, validated attribute set.
#[derive(Debug, Clone)]
pub struct Primitive {
    schema: &'static OpSchema,
    attrs: Attributes,
}

impl Primitive {
    pub fn new(schema: &'static OpSchema, attrs: &Attributes) -> Result<Self> {
        let attrs = Attributes::resolve(schema.name, schema.attrs, attrs)?;
        Ok(Self { schema, attrs })
    }

    /// Factory registered for table-defined operators.
    pub fn create(schema: &'static OpSchema, attrs: &Attributes) -> Result<Box<dyn Operator>> {
        Ok(Box::new(Self::new(schema, attrs)?))
    }
}

impl Operator for Primitive {
    fn schema(&self) -> &OpSchema {
        self.schema
    }

    fn attributes(&self) -> &Attributes {
        &self.attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opreg_core::{AttrKind, AttrSpec, Error};

    const SPLIT_ATTRS: &[AttrSpec] = &[
        AttrSpec::int("axis", 0),
        AttrSpec::required("output_num", AttrKind::Int),
    ];
    static SPLIT: OpSchema = OpSchema::new("Split", &["x"], &["output"]).with_attrs(SPLIT_ATTRS);

    #[test]
    fn test_create_resolves_attributes() {
        let op = Primitive::create(&SPLIT, &Attributes::new().with("output_num", 2i64)).unwrap();

        assert_eq!(op.name(), "Split");
        assert_eq!(op.attributes().i64("axis").unwrap(), 0);
        assert_eq!(op.attributes().i64("output_num").unwrap(), 2);
    }

    #[test]
    fn test_create_propagates_attribute_errors() {
        let err = Primitive::create(&SPLIT, &Attributes::new()).unwrap_err();
        assert!(matches!(err, Error::Attribute(_)));
        assert!(err.to_string().contains("Split"));
    }

    #[test]
    fn test_no_shape_inference() {
        let op = Primitive::new(&SPLIT, &Attributes::new().with("output_num", 1i64)).unwrap();
        assert!(matches!(op.infer(&[]), Err(Error::Unsupported(_))));
    }
}
