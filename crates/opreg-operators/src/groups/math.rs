//! Math operators: elementwise math, comparisons, reductions, matrix
//! products, and floating-point status checks.

use opreg_core::{AttrSpec, Category, CategoryGroup, OpSchema, Result, Visibility};

use crate::families::{binary, reduce, unary};
use crate::primitive::Primitive;

const TRANSPOSE: &[AttrSpec] = &[
    AttrSpec::bool("transpose_a", false),
    AttrSpec::bool("transpose_b", false),
];
const CUMULATIVE: &[AttrSpec] = &[
    AttrSpec::bool("exclusive", false),
    AttrSpec::bool("reverse", false),
];
const NMS: &[AttrSpec] = &[AttrSpec::float("iou_threshold", 0.5)];

static OPS: &[OpSchema] = &[
    unary("Abs"),
    unary("ACos"),
    unary("Asin"),
    unary("Asinh"),
    OpSchema::new("AddN", &["inputs"], &["sum"]),
    OpSchema::new("AssignAdd", &["ref", "value"], &["output"]),
    OpSchema::new("AssignSub", &["ref", "value"], &["output"]),
    binary("Atan2"),
    OpSchema::new("BatchMatMul", &["x1", "x2"], &["output"]).with_attrs(TRANSPOSE),
    binary("BitwiseAnd"),
    binary("BitwiseOr"),
    binary("BitwiseXor"),
    reduce("ReduceMax"),
    reduce("ReduceMin"),
    reduce("ReduceMean"),
    reduce("ReduceSum"),
    reduce("ReduceAll"),
    reduce("ReduceProd"),
    OpSchema::new("CumProd", &["x", "axis"], &["y"]).with_attrs(CUMULATIVE),
    unary("Cos"),
    binary("Div"),
    binary("Equal"),
    OpSchema::new("EqualCount", &["x", "y"], &["output"]),
    unary("Exp"),
    unary("Erf"),
    unary("Erfc"),
    unary("Floor"),
    binary("FloorDiv"),
    binary("FloorMod"),
    unary("Acosh"),
    binary("Greater"),
    binary("GreaterEqual"),
    binary("Less"),
    binary("LessEqual"),
    unary("Log"),
    unary("Log1p"),
    binary("LogicalAnd"),
    unary("LogicalNot"),
    binary("LogicalOr"),
    OpSchema::new("MatMul", &["x1", "x2"], &["output"]).with_attrs(TRANSPOSE),
    binary("Maximum"),
    binary("Minimum"),
    binary("Mul"),
    unary("Neg"),
    OpSchema::new(
        "NMSWithMask",
        &["bboxes"],
        &["selected_boxes", "selected_idx", "selected_mask"],
    )
    .with_attrs(NMS),
    binary("NotEqual"),
    OpSchema::new("NPUAllocFloatStatus", &[], &["output"]),
    OpSchema::new("NPUClearFloatStatus", &["addr"], &["output"]),
    OpSchema::new("NPUGetFloatStatus", &["addr"], &["output"]),
    binary("Pow"),
    binary("RealDiv"),
    unary("IsNan"),
    unary("IsInf"),
    unary("IsFinite"),
    unary("FloatStatus"),
    unary("Reciprocal"),
    OpSchema::new("CumSum", &["x", "axis"], &["y"]).with_attrs(CUMULATIVE),
    unary("Sin"),
    unary("Sqrt"),
    unary("Rsqrt"),
    unary("BesselI0e"),
    unary("BesselI1e"),
    unary("Square"),
    binary("Sub"),
    binary("TensorAdd"),
    unary("Sign"),
    unary("Round"),
    OpSchema::new("SquareSumAll", &["x", "y"], &["output_x", "output_y"]),
    unary("Atan"),
    unary("Atanh"),
];

pub fn group() -> Result<CategoryGroup> {
    let mut group = CategoryGroup::new(Category::Math);
    group.extend(OPS, Visibility::Public, Primitive::create)?;
    Ok(group)
}
