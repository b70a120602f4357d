//! Quantization-aware training operators.
//!
//! This group is assembled as a manifest extension: its names are appended
//! to the base export list rather than contributing to it directly.

use opreg_core::{AttrSpec, Category, CategoryGroup, OpSchema, Result, Visibility};

use crate::primitive::Primitive;

const FAKE_QUANT_PER_LAYER: &[AttrSpec] = &[
    AttrSpec::int("num_bits", 8),
    AttrSpec::bool("ema", false),
    AttrSpec::float("ema_decay", 0.999),
    AttrSpec::int("quant_delay", 0),
    AttrSpec::bool("symmetric", false),
    AttrSpec::bool("narrow_range", false),
    AttrSpec::bool("training", true),
];
const FAKE_QUANT_PER_CHANNEL: &[AttrSpec] = &[
    AttrSpec::int("num_bits", 8),
    AttrSpec::bool("ema", false),
    AttrSpec::float("ema_decay", 0.999),
    AttrSpec::int("quant_delay", 0),
    AttrSpec::bool("symmetric", false),
    AttrSpec::bool("narrow_range", false),
    AttrSpec::bool("training", true),
    AttrSpec::int("channel_axis", 1),
];
const FAKE_QUANT_GRAD: &[AttrSpec] = &[
    AttrSpec::int("num_bits", 8),
    AttrSpec::int("quant_delay", 0),
    AttrSpec::bool("symmetric", false),
    AttrSpec::bool("narrow_range", false),
];
const FAKE_QUANT_PER_CHANNEL_GRAD: &[AttrSpec] = &[
    AttrSpec::int("num_bits", 8),
    AttrSpec::int("quant_delay", 0),
    AttrSpec::bool("symmetric", false),
    AttrSpec::bool("narrow_range", false),
    AttrSpec::int("channel_axis", 1),
];
const BN_FOLD: &[AttrSpec] = &[
    AttrSpec::float("momentum", 0.9),
    AttrSpec::float("epsilon", 1e-5),
    AttrSpec::bool("is_training", true),
    AttrSpec::int("freeze_bn", 0),
];
const BN_FOLD_GRAD: &[AttrSpec] = &[
    AttrSpec::float("epsilon", 1e-5),
    AttrSpec::bool("is_training", true),
    AttrSpec::int("freeze_bn", 0),
];
const CHANNEL_AXIS: &[AttrSpec] = &[AttrSpec::int("channel_axis", 0)];
const FREEZE_BN: &[AttrSpec] = &[AttrSpec::int("freeze_bn", 0)];

static OPS: &[OpSchema] = &[
    OpSchema::new("FakeQuantPerLayer", &["x", "min", "max"], &["out"])
        .with_attrs(FAKE_QUANT_PER_LAYER),
    OpSchema::new("FakeQuantPerLayerGrad", &["dout", "x", "min", "max"], &["dx"])
        .with_attrs(FAKE_QUANT_GRAD),
    OpSchema::new("FakeQuantPerChannel", &["x", "min", "max"], &["out"])
        .with_attrs(FAKE_QUANT_PER_CHANNEL),
    OpSchema::new("FakeQuantPerChannelGrad", &["dout", "x", "min", "max"], &["dx"])
        .with_attrs(FAKE_QUANT_PER_CHANNEL_GRAD),
    OpSchema::new(
        "BatchNormFold",
        &["x", "mean", "variance", "global_step"],
        &["batch_mean", "batch_std", "running_mean", "running_std"],
    )
    .with_attrs(BN_FOLD),
    OpSchema::new(
        "BatchNormFoldGrad",
        &["d_batch_mean", "d_batch_std", "x", "batch_mean", "batch_std", "global_step"],
        &["dx"],
    )
    .with_attrs(BN_FOLD_GRAD),
    OpSchema::new("CorrectionMul", &["x", "batch_std", "running_std"], &["out"])
        .with_attrs(CHANNEL_AXIS),
    OpSchema::new(
        "CorrectionMulGrad",
        &["dout", "x", "gamma", "running_std"],
        &["dx", "d_gamma"],
    )
    .with_attrs(CHANNEL_AXIS),
    OpSchema::new(
        "CorrectionMulGradReduce",
        &["dout", "x", "gamma", "running_std"],
        &["d_gamma"],
    )
    .with_attrs(CHANNEL_AXIS),
    OpSchema::new(
        "BatchNormFold2",
        &[
            "x",
            "beta",
            "gamma",
            "batch_std",
            "batch_mean",
            "running_std",
            "running_mean",
            "global_step",
        ],
        &["y"],
    )
    .with_attrs(FREEZE_BN),
    OpSchema::new(
        "BatchNormFold2Grad",
        &[
            "dout",
            "x",
            "gamma",
            "batch_std",
            "batch_mean",
            "running_std",
            "running_mean",
            "global_step",
        ],
        &["d_batch_std", "d_batch_mean", "d_beta", "d_gamma", "dx"],
    )
    .with_attrs(FREEZE_BN),
    OpSchema::new(
        "BatchNormFoldD",
        &["x", "x_sum", "x_square_sum", "mean", "variance"],
        &["batch_mean", "batch_std", "running_mean", "running_std", "mean_updated", "variance_updated"],
    )
    .with_attrs(BN_FOLD),
    OpSchema::new(
        "BatchNormFoldGradD",
        &["d_batch_mean", "d_batch_std", "x", "batch_mean", "batch_std"],
        &["dx"],
    )
    .with_attrs(BN_FOLD_GRAD),
    OpSchema::new(
        "BatchNormFold2_D",
        &["x", "beta", "gamma", "batch_std", "batch_mean", "running_std"],
        &["y"],
    )
    .with_attrs(FREEZE_BN),
    OpSchema::new(
        "BatchNormFold2GradD",
        &["dout", "dout_reduce", "dout_x_reduce", "gamma", "batch_std", "batch_mean", "running_std"],
        &["d_batch_std", "d_batch_mean", "d_gamma", "dx"],
    )
    .with_attrs(FREEZE_BN),
    OpSchema::new(
        "BatchNormFold2GradReduce",
        &["dout", "x"],
        &["dout_reduce", "dout_x_reduce"],
    )
    .with_attrs(FREEZE_BN),
];

pub fn group() -> Result<CategoryGroup> {
    let mut group = CategoryGroup::new(Category::Quant);
    group.extend(OPS, Visibility::Public, Primitive::create)?;
    Ok(group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use opreg_core::Attributes;

    #[test]
    fn test_fake_quant_defaults() {
        let schema = OPS.iter().find(|s| s.name == "FakeQuantPerLayer").unwrap();
        let op = Primitive::new(schema, &Attributes::new()).unwrap();
        let attrs = opreg_core::Operator::attributes(&op);
        assert_eq!(attrs.i64("num_bits").unwrap(), 8);
        assert!(!attrs.bool("ema").unwrap());
        assert!(attrs.bool("training").unwrap());
        assert!((attrs.f32("ema_decay").unwrap() - 0.999).abs() < 1e-6);
    }

    #[test]
    fn test_per_channel_axis() {
        let schema = OPS.iter().find(|s| s.name == "FakeQuantPerChannel").unwrap();
        assert_eq!(schema.inputs, &["x", "min", "max"]);
        assert!(schema.attr("channel_axis").is_some());
    }

    #[test]
    fn test_group_is_public() {
        let group = group().unwrap();
        assert_eq!(group.len(), 16);
        assert_eq!(group.public_names().count(), 16);
    }
}
