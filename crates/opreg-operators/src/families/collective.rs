//! Collective communication family.
//!
//! Covers: AllReduce, AllGather, ReduceScatter, Broadcast and their host-side
//! variants. Device collectives address a named communication group; host
//! collectives address an explicit list of ranks.

use opreg_core::{AttrKind, AttrSpec, Error, OpSchema, Result};
use std::fmt;
use std::str::FromStr;

/// Default communication group.
pub const WORLD_GROUP: &str = "hccl_world_group";

/// Reduction applied by AllReduce and the ReduceScatter variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReduceOp {
    Sum,
    Max,
    Min,
    Prod,
}

impl ReduceOp {
    pub const ALL: [ReduceOp; 4] = [ReduceOp::Sum, ReduceOp::Max, ReduceOp::Min, ReduceOp::Prod];

    /// Values accepted by the `op` attribute.
    pub const NAMES: &'static [&'static str] = &["sum", "max", "min", "prod"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReduceOp::Sum => "sum",
            ReduceOp::Max => "max",
            ReduceOp::Min => "min",
            ReduceOp::Prod => "prod",
        }
    }
}

impl fmt::Display for ReduceOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReduceOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ReduceOp::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| {
                Error::Attribute(format!(
                    "reduce op must be one of {:?}, got \"{s}\"",
                    ReduceOp::NAMES
                ))
            })
    }
}

const REDUCE_ATTRS: &[AttrSpec] = &[
    AttrSpec::string("op", "sum").one_of(ReduceOp::NAMES),
    AttrSpec::string("group", WORLD_GROUP),
];

const GROUP_ATTRS: &[AttrSpec] = &[AttrSpec::string("group", WORLD_GROUP)];

const BROADCAST_ATTRS: &[AttrSpec] = &[
    AttrSpec::required("root_rank", AttrKind::Int),
    AttrSpec::string("group", WORLD_GROUP),
];

const HOST_REDUCE_ATTRS: &[AttrSpec] = &[
    AttrSpec::string("op", "sum").one_of(ReduceOp::NAMES),
    AttrSpec::required("group", AttrKind::Ints),
];

const HOST_GROUP_ATTRS: &[AttrSpec] = &[AttrSpec::required("group", AttrKind::Ints)];

const REDUCE_OP_ATTRS: &[AttrSpec] = &[AttrSpec::string("op", "sum").one_of(ReduceOp::NAMES)];

/// Reducing collective over a named group (AllReduce, ReduceScatter).
pub const fn reducing(name: &'static str) -> OpSchema {
    OpSchema::new(name, &["x"], &["y"]).with_attrs(REDUCE_ATTRS)
}

/// Non-reducing collective over a named group (AllGather).
pub const fn gathering(name: &'static str) -> OpSchema {
    OpSchema::new(name, &["x"], &["y"]).with_attrs(GROUP_ATTRS)
}

/// Broadcast from `root_rank` to the group.
pub const fn broadcast(name: &'static str) -> OpSchema {
    OpSchema::new(name, &["x"], &["y"]).with_attrs(BROADCAST_ATTRS)
}

/// Host-side reducing collective over explicit ranks.
pub const fn host_reducing(name: &'static str) -> OpSchema {
    OpSchema::new(name, &["x"], &["y"]).with_attrs(HOST_REDUCE_ATTRS)
}

/// Host-side gathering collective over explicit ranks.
pub const fn host_gathering(name: &'static str) -> OpSchema {
    OpSchema::new(name, &["x"], &["y"]).with_attrs(HOST_GROUP_ATTRS)
}

/// The exported `ReduceOp` descriptor: carries only the reduction choice.
pub const fn reduce_op(name: &'static str) -> OpSchema {
    OpSchema::new(name, &[], &[]).with_attrs(REDUCE_OP_ATTRS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_op_parse() {
        for op in ReduceOp::ALL {
            assert_eq!(op.as_str().parse::<ReduceOp>().unwrap(), op);
        }
        assert!("mean".parse::<ReduceOp>().is_err());
    }

    #[test]
    fn test_names_match_variants() {
        let names: Vec<_> = ReduceOp::ALL.iter().map(|op| op.as_str()).collect();
        assert_eq!(names, ReduceOp::NAMES);
    }

    #[test]
    fn test_reducing_schema() {
        const ALL_REDUCE: OpSchema = reducing("AllReduce");
        let op = ALL_REDUCE.attr("op").unwrap();
        assert_eq!(op.choices, ReduceOp::NAMES);
        assert!(ALL_REDUCE.attr("group").is_some());
    }
}
