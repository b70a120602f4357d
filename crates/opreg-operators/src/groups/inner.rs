//! Inner operators: scalar casts.

use opreg_core::{Category, CategoryGroup, OpSchema, Result, Visibility};

use crate::primitive::Primitive;

static OPS: &[OpSchema] = &[OpSchema::new("ScalarCast", &["input_x", "input_t"], &["output_data"])];

pub fn group() -> Result<CategoryGroup> {
    let mut group = CategoryGroup::new(Category::Inner);
    group.extend(OPS, Visibility::Public, Primitive::create)?;
    Ok(group)
}
