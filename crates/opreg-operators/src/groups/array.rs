//! Array operators: shape manipulation, gather/scatter, slicing, and
//! space/batch/depth rearrangement.

use opreg_core::{AttrKind, AttrSpec, Category, CategoryGroup, OpSchema, Result, Visibility};

use crate::families::unary;
use crate::primitive::Primitive;

const AXIS_LAST: &[AttrSpec] = &[AttrSpec::int("axis", -1)];
const AXIS_FIRST: &[AttrSpec] = &[AttrSpec::int("axis", 0)];
const ARG_WITH_VALUE: &[AttrSpec] = &[AttrSpec::int("axis", 0), AttrSpec::bool("keep_dims", false)];
const RESIZE_NEAREST: &[AttrSpec] = &[
    AttrSpec::required("size", AttrKind::Ints),
    AttrSpec::bool("align_corners", false),
];
const RANGE: &[AttrSpec] = &[
    AttrSpec::required("start", AttrKind::Float),
    AttrSpec::required("limit", AttrKind::Float),
    AttrSpec::float("delta", 1.0),
];
const SCATTER: &[AttrSpec] = &[AttrSpec::bool("use_locking", false)];
const SCATTER_LOCKED: &[AttrSpec] = &[AttrSpec::bool("use_locking", true)];
const SPLIT: &[AttrSpec] = &[AttrSpec::int("axis", 0), AttrSpec::int("output_num", 1)];
const SQUEEZE: &[AttrSpec] = &[AttrSpec::ints("axis", &[])];
const STRIDED_SLICE: &[AttrSpec] = &[
    AttrSpec::int("begin_mask", 0),
    AttrSpec::int("end_mask", 0),
    AttrSpec::int("ellipsis_mask", 0),
    AttrSpec::int("new_axis_mask", 0),
    AttrSpec::int("shrink_axis_mask", 0),
];
const SEED: &[AttrSpec] = &[AttrSpec::int("seed", 0)];
const BLOCK_SIZE: &[AttrSpec] = &[AttrSpec::required("block_size", AttrKind::Int)];
const SPACE_TO_BATCH: &[AttrSpec] = &[
    AttrSpec::required("block_size", AttrKind::Int),
    AttrSpec::required("paddings", AttrKind::Ints),
];
const BATCH_TO_SPACE: &[AttrSpec] = &[
    AttrSpec::required("block_size", AttrKind::Int),
    AttrSpec::required("crops", AttrKind::Ints),
];
const SPACE_TO_BATCH_ND: &[AttrSpec] = &[
    AttrSpec::required("block_shape", AttrKind::Ints),
    AttrSpec::required("paddings", AttrKind::Ints),
];
const BATCH_TO_SPACE_ND: &[AttrSpec] = &[
    AttrSpec::required("block_shape", AttrKind::Ints),
    AttrSpec::required("crops", AttrKind::Ints),
];
const REVERSE_SEQUENCE: &[AttrSpec] = &[
    AttrSpec::required("seq_dim", AttrKind::Int),
    AttrSpec::int("batch_dim", 0),
];

static OPS: &[OpSchema] = &[
    OpSchema::new("Argmax", &["x"], &["output"]).with_attrs(AXIS_LAST),
    OpSchema::new("Argmin", &["x"], &["output"]).with_attrs(AXIS_LAST),
    OpSchema::new("Cast", &["x", "dst_type"], &["output"]),
    OpSchema::new("Concat", &["x"], &["output"]).with_attrs(AXIS_FIRST),
    OpSchema::new("Pack", &["x"], &["output"]).with_attrs(AXIS_FIRST),
    OpSchema::new("Unpack", &["x"], &["output"]).with_attrs(AXIS_FIRST),
    OpSchema::new("Diag", &["x"], &["y"]),
    OpSchema::new("DiagPart", &["x"], &["y"]),
    OpSchema::new("DType", &["x"], &["output"]),
    OpSchema::new("ExpandDims", &["x", "axis"], &["output"]),
    OpSchema::new("Eye", &["n", "m", "t"], &["output"]),
    OpSchema::new("Fill", &["type", "shape", "value"], &["y"]),
    OpSchema::new("GatherNd", &["input_x", "indices"], &["y"]),
    OpSchema::new("GatherV2", &["params", "indices", "axis"], &["output"]),
    OpSchema::new("InvertPermutation", &["x"], &["output"]),
    OpSchema::new("IsInstance", &["inst", "type_"], &["output"]),
    OpSchema::new("IsSubClass", &["sub_type", "type_"], &["output"]),
    OpSchema::new("ArgMaxWithValue", &["x"], &["index", "output_x"]).with_attrs(ARG_WITH_VALUE),
    OpSchema::new("OnesLike", &["x"], &["y"]),
    OpSchema::new("ZerosLike", &["x"], &["y"]),
    unary("Rank"),
    OpSchema::new("Reshape", &["tensor", "shape"], &["output"]),
    OpSchema::new("ResizeNearestNeighbor", &["image_in"], &["image_out"])
        .with_attrs(RESIZE_NEAREST),
    OpSchema::new("ArgMinWithValue", &["x"], &["index", "output_x"]).with_attrs(ARG_WITH_VALUE),
    OpSchema::new("Range", &["input_x"], &["output"]).with_attrs(RANGE),
    OpSchema::new("SameTypeShape", &["x", "y"], &["output"]),
    OpSchema::new("ScatterAdd", &["x", "indices", "updates"], &["y"]).with_attrs(SCATTER),
    OpSchema::new("ScatterMax", &["x", "indices", "updates"], &["y"]).with_attrs(SCATTER_LOCKED),
    OpSchema::new("ScatterUpdate", &["x", "indices", "value"], &["y"]).with_attrs(SCATTER_LOCKED),
    OpSchema::new("ScalarToArray", &["input_x"], &["output"]),
    OpSchema::new("ScalarToTensor", &["input_x", "dtype"], &["output"]),
    OpSchema::new("ScatterNd", &["indices", "update", "shape"], &["output"]),
    OpSchema::new("ScatterNdUpdate", &["x", "indices", "value"], &["y"])
        .with_attrs(SCATTER_LOCKED),
    OpSchema::new("Select", &["condition", "x", "y"], &["output"]),
    unary("Shape"),
    OpSchema::new("Size", &["input_x"], &["output"]),
    OpSchema::new("Slice", &["x", "begin", "size"], &["output"]),
    OpSchema::new("Split", &["x"], &["output"]).with_attrs(SPLIT),
    OpSchema::new("EmbeddingLookup", &["params", "indices", "offset"], &["output"]),
    OpSchema::new("Squeeze", &["x"], &["output"]).with_attrs(SQUEEZE),
    OpSchema::new("StridedSlice", &["x", "begin", "end", "strides"], &["output"])
        .with_attrs(STRIDED_SLICE),
    OpSchema::new("Tile", &["x", "multiples"], &["output"]),
    OpSchema::new("Transpose", &["x", "perm"], &["output"]),
    OpSchema::new("TruncatedNormal", &["shape"], &["output"]).with_attrs(SEED),
    OpSchema::new("TupleToArray", &["input_x"], &["output"]),
    OpSchema::new("UnsortedSegmentMin", &["x", "segment_ids", "num_segments"], &["y"]),
    OpSchema::new("UnsortedSegmentSum", &["x", "segment_ids", "num_segments"], &["y"]),
    OpSchema::new("SpaceToDepth", &["x"], &["y"]).with_attrs(BLOCK_SIZE),
    OpSchema::new("DepthToSpace", &["x"], &["y"]).with_attrs(BLOCK_SIZE),
    OpSchema::new("SpaceToBatch", &["x"], &["y"]).with_attrs(SPACE_TO_BATCH),
    OpSchema::new("BatchToSpace", &["x"], &["y"]).with_attrs(BATCH_TO_SPACE),
    OpSchema::new("SpaceToBatchND", &["input_x"], &["output"]).with_attrs(SPACE_TO_BATCH_ND),
    OpSchema::new("BatchToSpaceND", &["input_x"], &["output"]).with_attrs(BATCH_TO_SPACE_ND),
    OpSchema::new("ReverseSequence", &["x", "seq_lengths"], &["y"]).with_attrs(REVERSE_SEQUENCE),
];

pub fn group() -> Result<CategoryGroup> {
    let mut group = CategoryGroup::new(Category::Array);
    group.extend(OPS, Visibility::Public, Primitive::create)?;
    Ok(group)
}
