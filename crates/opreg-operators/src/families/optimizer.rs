//! Attribute sets shared by optimizer update operators.

use opreg_core::{AttrKind, AttrSpec};

pub const USE_LOCKING: &[AttrSpec] = &[AttrSpec::bool("use_locking", false)];

pub const MOMENTUM: &[AttrSpec] = &[
    AttrSpec::bool("use_nesterov", false),
    AttrSpec::bool("use_locking", false),
    AttrSpec::float("gradient_scale", 1.0),
];

pub const ADAM: &[AttrSpec] = &[
    AttrSpec::bool("use_locking", false),
    AttrSpec::bool("use_nesterov", false),
];

pub const SGD: &[AttrSpec] = &[
    AttrSpec::float("dampening", 0.0),
    AttrSpec::float("weight_decay", 0.0),
    AttrSpec::bool("nesterov", false),
];

pub const SPARSE_ADAGRAD: &[AttrSpec] = &[
    AttrSpec::required("lr", AttrKind::Float),
    AttrSpec::bool("update_slots", true),
    AttrSpec::bool("use_locking", false),
];

pub const SPARSE_FTRL: &[AttrSpec] = &[
    AttrSpec::required("lr", AttrKind::Float),
    AttrSpec::required("l1", AttrKind::Float),
    AttrSpec::required("l2", AttrKind::Float),
    AttrSpec::required("lr_power", AttrKind::Float),
    AttrSpec::bool("use_locking", false),
];

pub const LARS: &[AttrSpec] = &[
    AttrSpec::float("epsilon", 1e-5),
    AttrSpec::float("hyperpara", 0.001),
    AttrSpec::bool("use_clip", false),
];
