//! Control-flow operators.

use opreg_core::{AttrSpec, Category, CategoryGroup, OpSchema, Result, Visibility};

use crate::primitive::Primitive;

const CONTROL_DEPEND: &[AttrSpec] = &[AttrSpec::int("depend_mode", 0)];

static OPS: &[OpSchema] = &[
    OpSchema::new("ControlDepend", &["src", "dst"], &["output"]).with_attrs(CONTROL_DEPEND),
    OpSchema::new("GeSwitch", &["data", "pred"], &["false_output", "true_output"]),
    OpSchema::new("Merge", &["inputs"], &["output", "value_index"]),
];

pub fn group() -> Result<CategoryGroup> {
    let mut group = CategoryGroup::new(Category::Control);
    group.extend(OPS, Visibility::Public, Primitive::create)?;
    Ok(group)
}
