//! Miscellaneous operators: assignment, box geometry, reference keys.

use opreg_core::{AttrKind, AttrSpec, Category, CategoryGroup, OpSchema, Result, Visibility};

use crate::primitive::Primitive;

const IOU: &[AttrSpec] = &[AttrSpec::string("mode", "iou").one_of(&["iou", "iof"])];
const BOX_ENCODE: &[AttrSpec] = &[
    AttrSpec::floats("means", &[0.0, 0.0, 0.0, 0.0]),
    AttrSpec::floats("stds", &[1.0, 1.0, 1.0, 1.0]),
];
const BOX_DECODE: &[AttrSpec] = &[
    AttrSpec::required("max_shape", AttrKind::Ints),
    AttrSpec::floats("means", &[0.0, 0.0, 0.0, 0.0]),
    AttrSpec::floats("stds", &[1.0, 1.0, 1.0, 1.0]),
    AttrSpec::float("wh_ratio_clip", 0.016),
];
const MAKE_REF_KEY: &[AttrSpec] = &[AttrSpec::required("tag", AttrKind::String)];

static OPS: &[OpSchema] = &[
    OpSchema::new("Assign", &["variable", "value"], &["output"]),
    OpSchema::new("IOU", &["x", "y"], &["overlap"]).with_attrs(IOU),
    OpSchema::new("BoundingBoxDecode", &["anchor_box", "deltas"], &["bboxes"]).with_attrs(BOX_DECODE),
    OpSchema::new("BoundingBoxEncode", &["anchor_box", "groundtruth_box"], &["output"])
        .with_attrs(BOX_ENCODE),
    OpSchema::new("CheckValid", &["bboxes", "img_metas"], &["output"]),
    OpSchema::new("MakeRefKey", &[], &["output"]).with_attrs(MAKE_REF_KEY),
    OpSchema::new("CheckBprop", &["input_x", "input_y"], &["output"]),
];

pub fn group() -> Result<CategoryGroup> {
    let mut group = CategoryGroup::new(Category::Other);
    group.extend(OPS, Visibility::Public, Primitive::create)?;
    Ok(group)
}
