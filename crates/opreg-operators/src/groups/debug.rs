//! Debug operators: summaries, printing, and gradient hooks.

use opreg_core::{Category, CategoryGroup, OpSchema, Result, Visibility};

use crate::families::summary;
use crate::primitive::Primitive;

static OPS: &[OpSchema] = &[
    summary("ImageSummary"),
    OpSchema::new("InsertGradientOf", &["input_x"], &["output"]),
    OpSchema::new("HookBackward", &["input_x"], &["output"]),
    summary("ScalarSummary"),
    summary("TensorSummary"),
    summary("HistogramSummary"),
    OpSchema::new("Print", &["input_x"], &["output"]),
];

pub fn group() -> Result<CategoryGroup> {
    let mut group = CategoryGroup::new(Category::Debug);
    group.extend(OPS, Visibility::Public, Primitive::create)?;
    Ok(group)
}
