//! Random sampling operators.

use opreg_core::{AttrSpec, Category, CategoryGroup, OpSchema, Result, Visibility};

use crate::primitive::Primitive;

const CHOICE_WITH_MASK: &[AttrSpec] = &[
    AttrSpec::int("count", 256),
    AttrSpec::int("seed", 0),
    AttrSpec::int("seed2", 0),
];
const CATEGORICAL: &[AttrSpec] = &[AttrSpec::string("dtype", "int64").one_of(&["int16", "int32", "int64"])];

static OPS: &[OpSchema] = &[
    OpSchema::new("RandomChoiceWithMask", &["input_x"], &["index", "mask"])
        .with_attrs(CHOICE_WITH_MASK),
    OpSchema::new("RandomCategorical", &["logits", "num_samples", "seed"], &["output"])
        .with_attrs(CATEGORICAL),
];

pub fn group() -> Result<CategoryGroup> {
    let mut group = CategoryGroup::new(Category::Random);
    group.extend(OPS, Visibility::Public, Primitive::create)?;
    Ok(group)
}
