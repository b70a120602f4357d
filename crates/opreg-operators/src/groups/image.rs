//! Image operators.

use opreg_core::{Category, CategoryGroup, Result};

use crate::operators::{crop_and_resize, CropAndResizeOp};

pub fn group() -> Result<CategoryGroup> {
    let mut group = CategoryGroup::new(Category::Image);
    group.public(&crop_and_resize::SCHEMA, CropAndResizeOp::create)?;
    Ok(group)
}
