//! Custom cube kernels backing the second-order (THOR) optimizer.
//!
//! Registered so graphs that reference them resolve, never exported.

use opreg_core::{Category, CategoryGroup, OpSchema, Result, Visibility};

use crate::primitive::Primitive;

static OPS: &[OpSchema] = &[
    OpSchema::new("CusBatchMatMul", &["x1", "x2"], &["y"]),
    OpSchema::new("CusCholeskyTrsm", &["x1"], &["y"]),
    OpSchema::new("CusFusedAbsMax1", &["x1"], &["y"]),
    OpSchema::new("CusImg2Col", &["x1"], &["y"]),
    OpSchema::new("CusMatMulCubeDenseLeft", &["x1", "x2"], &["y"]),
    OpSchema::new("CusMatMulCubeFraczRightMul", &["x1", "x2", "x3"], &["y"]),
    OpSchema::new("CusMatMulCube", &["x1", "x2"], &["y"]),
    OpSchema::new("CusMatrixCombine", &["x1"], &["y"]),
    OpSchema::new("CusTranspose02314", &["x1"], &["y"]),
    OpSchema::new("CusMatMulCubeDenseRight", &["x1", "x2", "x3"], &["y"]),
    OpSchema::new("CusMatMulCubeFraczLeftCast", &["x1", "x2"], &["y"]),
];

pub fn group() -> Result<CategoryGroup> {
    let mut group = CategoryGroup::new(Category::Thor);
    group.extend(OPS, Visibility::Internal, Primitive::create)?;
    Ok(group)
}
