//! Communication operators: collectives over device groups and ranks, plus
//! the internal helpers inserted by automatic parallelization.

use opreg_core::{AttrKind, AttrSpec, Category, CategoryGroup, OpSchema, Result, Visibility};

use crate::families::collective::{self, WORLD_GROUP};
use crate::primitive::Primitive;

const ALL_TO_ALL: &[AttrSpec] = &[
    AttrSpec::required("split_count", AttrKind::Int),
    AttrSpec::required("split_dim", AttrKind::Int),
    AttrSpec::required("concat_dim", AttrKind::Int),
    AttrSpec::string("group", WORLD_GROUP),
];
const MIRROR: &[AttrSpec] = &[
    AttrSpec::string("group", WORLD_GROUP),
    AttrSpec::int("dev_num", 1),
    AttrSpec::bool("mean_flag", false),
];
const VIRTUAL_DIV: &[AttrSpec] = &[AttrSpec::required("divisor", AttrKind::Int)];

static PUBLIC: &[OpSchema] = &[
    collective::gathering("AllGather"),
    collective::reducing("AllReduce"),
    collective::reducing("ReduceScatter"),
    collective::broadcast("Broadcast"),
    collective::reduce_op("ReduceOp"),
    collective::host_gathering("HostAllGather"),
    collective::host_reducing("HostReduceScatter"),
];

static INTERNAL: &[OpSchema] = &[
    OpSchema::new("_AlltoAll", &["x"], &["y"]).with_attrs(ALL_TO_ALL),
    OpSchema::new("_MirrorOperator", &["x"], &["y"]).with_attrs(MIRROR),
    OpSchema::new("_VirtualDataset", &["x"], &["y"]),
    OpSchema::new("_VirtualDiv", &["x"], &["y"]).with_attrs(VIRTUAL_DIV),
    OpSchema::new("_GetTensorSlice", &["x", "dev_mat", "tensor_map"], &["y"]),
];

pub fn group() -> Result<CategoryGroup> {
    let mut group = CategoryGroup::new(Category::Comm);
    group
        .extend(PUBLIC, Visibility::Public, Primitive::create)?
        .extend(INTERNAL, Visibility::Internal, Primitive::create)?;
    Ok(group)
}
