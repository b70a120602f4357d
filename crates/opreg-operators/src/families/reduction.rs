//! Reduction operator family.
//!
//! Covers: ReduceMax, ReduceMin, ReduceMean, ReduceSum, ReduceAll, ReduceProd

use opreg_core::{AttrSpec, OpSchema};

const KEEP_DIMS: &[AttrSpec] = &[AttrSpec::bool("keep_dims", false)];

/// Inputs `input_x` and `axis`, output `y`, with a `keep_dims` flag.
pub const fn reduce(name: &'static str) -> OpSchema {
    OpSchema::new(name, &["input_x", "axis"], &["y"]).with_attrs(KEEP_DIMS)
}
