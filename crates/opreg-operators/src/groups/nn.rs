//! Neural-network operators: convolution, pooling, normalization,
//! activations, losses, recurrent cells, and optimizer updates.

use opreg_core::{AttrKind, AttrSpec, Category, CategoryGroup, OpSchema, Result, Visibility};

use crate::families::optimizer;
use crate::families::unary;
use crate::primitive::Primitive;

const PAD_MODES: &[&str] = &["valid", "same", "pad"];
const POOL_PADDING: &[&str] = &["valid", "same"];

const LSTM: &[AttrSpec] = &[
    AttrSpec::required("input_size", AttrKind::Int),
    AttrSpec::required("hidden_size", AttrKind::Int),
    AttrSpec::required("num_layers", AttrKind::Int),
    AttrSpec::bool("has_bias", true),
    AttrSpec::bool("bidirectional", false),
    AttrSpec::float("dropout", 0.0),
];
const BATCH_NORM: &[AttrSpec] = &[
    AttrSpec::bool("is_training", false),
    AttrSpec::float("epsilon", 1e-5),
];
const FUSED_BATCH_NORM: &[AttrSpec] = &[
    AttrSpec::int("mode", 0),
    AttrSpec::float("epsilon", 1e-5),
    AttrSpec::float("momentum", 0.1),
];
const CONV2D: &[AttrSpec] = &[
    AttrSpec::required("out_channel", AttrKind::Int),
    AttrSpec::required("kernel_size", AttrKind::Ints),
    AttrSpec::int("mode", 1),
    AttrSpec::string("pad_mode", "valid").one_of(PAD_MODES),
    AttrSpec::int("pad", 0),
    AttrSpec::int("stride", 1),
    AttrSpec::int("dilation", 1),
    AttrSpec::int("group", 1),
];
const DEPTHWISE_CONV2D: &[AttrSpec] = &[
    AttrSpec::required("channel_multiplier", AttrKind::Int),
    AttrSpec::required("kernel_size", AttrKind::Ints),
    AttrSpec::int("mode", 3),
    AttrSpec::string("pad_mode", "valid").one_of(PAD_MODES),
    AttrSpec::int("pad", 0),
    AttrSpec::int("stride", 1),
    AttrSpec::int("dilation", 1),
    AttrSpec::int("group", 1),
];
const CONV2D_BACKPROP_INPUT: &[AttrSpec] = &[
    AttrSpec::required("out_channel", AttrKind::Int),
    AttrSpec::required("kernel_size", AttrKind::Ints),
    AttrSpec::string("pad_mode", "valid").one_of(PAD_MODES),
    AttrSpec::int("pad", 0),
    AttrSpec::ints("pad_list", &[]),
    AttrSpec::int("mode", 1),
    AttrSpec::int("stride", 1),
    AttrSpec::int("dilation", 1),
    AttrSpec::int("group", 1),
];
const KEEP_PROB: &[AttrSpec] = &[AttrSpec::float("keep_prob", 0.5)];
const DROPOUT_GEN_MASK: &[AttrSpec] = &[AttrSpec::int("Seed0", 0), AttrSpec::int("Seed1", 0)];
const ELU: &[AttrSpec] = &[AttrSpec::float("alpha", 1.0)];
const GET_NEXT: &[AttrSpec] = &[
    AttrSpec::required("output_num", AttrKind::Int),
    AttrSpec::required("shared_name", AttrKind::String),
];
const L2_NORMALIZE: &[AttrSpec] = &[AttrSpec::int("axis", 0), AttrSpec::float("epsilon", 1e-4)];
const LAYER_NORM: &[AttrSpec] = &[
    AttrSpec::int("begin_norm_axis", 1),
    AttrSpec::int("begin_params_axis", 1),
];
const CTC_LOSS: &[AttrSpec] = &[
    AttrSpec::bool("preprocess_collapse_repeated", false),
    AttrSpec::bool("ctc_merge_repeated", true),
    AttrSpec::bool("ignore_longer_outputs_than_inputs", false),
];
const SOFTMAX_AXIS: &[AttrSpec] = &[AttrSpec::int("axis", -1)];
const POOL: &[AttrSpec] = &[
    AttrSpec::ints("ksize", &[1, 1]),
    AttrSpec::ints("strides", &[1, 1]),
    AttrSpec::string("padding", "valid").one_of(POOL_PADDING),
];
const CONFUSION_MUL_GRAD: &[AttrSpec] = &[AttrSpec::int("axis", -1), AttrSpec::bool("keep_dims", false)];
const ONE_HOT: &[AttrSpec] = &[AttrSpec::int("axis", -1)];
const PAD: &[AttrSpec] = &[AttrSpec::required("paddings", AttrKind::Ints)];
const MIRROR_PAD: &[AttrSpec] = &[AttrSpec::string("mode", "REFLECT").one_of(&["REFLECT", "SYMMETRIC"])];
const RESIZE_BILINEAR: &[AttrSpec] = &[
    AttrSpec::required("size", AttrKind::Ints),
    AttrSpec::bool("align_corners", false),
];
const SMOOTH_L1: &[AttrSpec] = &[AttrSpec::float("sigma", 1.0)];
const RNNT_LOSS: &[AttrSpec] = &[AttrSpec::int("blank_label", 0)];
const ROI_ALIGN: &[AttrSpec] = &[
    AttrSpec::required("pooled_height", AttrKind::Int),
    AttrSpec::required("pooled_width", AttrKind::Int),
    AttrSpec::required("spatial_scale", AttrKind::Float),
    AttrSpec::int("sample_num", 2),
];
const SPARSE_SOFTMAX_CE: &[AttrSpec] = &[AttrSpec::bool("is_grad", false)];
const TOPK: &[AttrSpec] = &[AttrSpec::bool("sorted", false)];
const BINARY_CROSS_ENTROPY: &[AttrSpec] = &[
    AttrSpec::string("reduction", "mean").one_of(&["none", "mean", "sum"]),
];
const BASIC_LSTM_CELL: &[AttrSpec] = &[
    AttrSpec::float("keep_prob", 1.0),
    AttrSpec::float("forget_bias", 1.0),
    AttrSpec::bool("state_is_tuple", true),
    AttrSpec::string("activation", "tanh"),
];

static OPS: &[OpSchema] = &[
    OpSchema::new("LSTM", &["x", "h", "c", "w"], &["output", "h_n", "c_n", "reserve", "state"])
        .with_attrs(LSTM),
    OpSchema::new(
        "SGD",
        &["parameters", "gradient", "learning_rate", "accum", "momentum", "stat"],
        &["output"],
    )
    .with_attrs(optimizer::SGD),
    OpSchema::new(
        "Adam",
        &["var", "m", "v", "beta1_power", "beta2_power", "lr", "beta1", "beta2", "epsilon", "gradient"],
        &["var", "m", "v"],
    )
    .with_attrs(optimizer::ADAM),
    OpSchema::new(
        "ApplyMomentum",
        &["variable", "accumulation", "learning_rate", "gradient", "momentum"],
        &["output"],
    )
    .with_attrs(optimizer::MOMENTUM),
    OpSchema::new(
        "BatchNorm",
        &["x", "scale", "offset", "mean", "variance"],
        &["y", "batch_mean", "batch_variance", "reserve_space_1", "reserve_space_2"],
    )
    .with_attrs(BATCH_NORM),
    OpSchema::new("BiasAdd", &["x", "b"], &["output"]),
    OpSchema::new("Conv2D", &["x", "w"], &["output"]).with_attrs(CONV2D),
    OpSchema::new("DepthwiseConv2dNative", &["x", "w"], &["output"]).with_attrs(DEPTHWISE_CONV2D),
    OpSchema::new("DropoutDoMask", &["x", "mask", "keep_prob"], &["output"]),
    OpSchema::new("DropoutGrad", &["dy", "mask"], &["output"]).with_attrs(KEEP_PROB),
    OpSchema::new("Dropout", &["x"], &["output", "mask"]).with_attrs(KEEP_PROB),
    OpSchema::new("DropoutGenMask", &["shape", "keep_prob"], &["output"])
        .with_attrs(DROPOUT_GEN_MASK),
    OpSchema::new("Flatten", &["input_x"], &["output"]),
    OpSchema::new(
        "FusedBatchNorm",
        &["x", "scale", "b", "mean", "variance"],
        &["y", "running_mean", "running_variance", "save_mean", "save_inv_variance"],
    )
    .with_attrs(FUSED_BATCH_NORM),
    unary("Gelu"),
    unary("Elu").with_attrs(ELU),
    OpSchema::new("GetNext", &[], &["output"]).with_attrs(GET_NEXT),
    unary("L2Normalize").with_attrs(L2_NORMALIZE),
    OpSchema::new("LayerNorm", &["x", "gamma", "beta"], &["y", "mean", "variance"])
        .with_attrs(LAYER_NORM),
    OpSchema::new("L2Loss", &["x"], &["output"]),
    OpSchema::new(
        "CTCLoss",
        &["inputs", "labels_indices", "labels_values", "sequence_length"],
        &["loss", "gradient"],
    )
    .with_attrs(CTC_LOSS),
    unary("LogSoftmax").with_attrs(SOFTMAX_AXIS),
    unary("MaxPool").with_attrs(POOL),
    unary("AvgPool").with_attrs(POOL),
    OpSchema::new("Conv2DBackpropInput", &["out_backprop", "filter", "input_sizes"], &["output"])
        .with_attrs(CONV2D_BACKPROP_INPUT),
    OpSchema::new("ConfusionMulGrad", &["input0", "input1", "input2"], &["output0", "output1"])
        .with_attrs(CONFUSION_MUL_GRAD),
    OpSchema::new("MaxPoolWithArgmax", &["x"], &["output", "mask"]).with_attrs(POOL),
    OpSchema::new("OneHot", &["indices", "depth", "on_value", "off_value"], &["output"])
        .with_attrs(ONE_HOT),
    unary("Pad").with_attrs(PAD),
    OpSchema::new("MirrorPad", &["x", "paddings"], &["y"]).with_attrs(MIRROR_PAD),
    OpSchema::new("PReLU", &["x", "weight"], &["output"]),
    unary("ReLU"),
    unary("ReLU6"),
    OpSchema::new("ReLUV2", &["x"], &["output", "mask"]),
    unary("HSwish"),
    unary("HSigmoid"),
    unary("ResizeBilinear").with_attrs(RESIZE_BILINEAR),
    unary("Sigmoid"),
    OpSchema::new("SigmoidCrossEntropyWithLogits", &["predict", "target"], &["loss"]),
    OpSchema::new("SmoothL1Loss", &["prediction", "target"], &["output"]).with_attrs(SMOOTH_L1),
    unary("Softmax").with_attrs(SOFTMAX_AXIS),
    unary("Softplus"),
    OpSchema::new(
        "RNNTLoss",
        &["acts", "labels", "input_length", "label_length"],
        &["costs", "grads"],
    )
    .with_attrs(RNNT_LOSS),
    OpSchema::new("SoftmaxCrossEntropyWithLogits", &["features", "labels"], &["loss", "dlogits"]),
    OpSchema::new("ROIAlign", &["features", "rois"], &["output"]).with_attrs(ROI_ALIGN),
    OpSchema::new("SparseSoftmaxCrossEntropyWithLogits", &["features", "labels"], &["output"])
        .with_attrs(SPARSE_SOFTMAX_CE),
    unary("Tanh"),
    OpSchema::new("TopK", &["input", "k"], &["values", "indices"]).with_attrs(TOPK),
    OpSchema::new("BinaryCrossEntropy", &["logits", "labels", "weight"], &["output"])
        .with_attrs(BINARY_CROSS_ENTROPY),
    OpSchema::new("SparseApplyAdagrad", &["var", "accum", "grad", "indices"], &["var", "accum"])
        .with_attrs(optimizer::SPARSE_ADAGRAD),
    OpSchema::new(
        "LARSUpdate",
        &["weight", "gradient", "norm_weight", "norm_gradient", "weight_decay", "learning_rate"],
        &["output"],
    )
    .with_attrs(optimizer::LARS),
    OpSchema::new(
        "ApplyFtrl",
        &["var", "accum", "linear", "grad", "lr", "l1", "l2", "lr_power"],
        &["output"],
    )
    .with_attrs(optimizer::USE_LOCKING),
    OpSchema::new(
        "SparseApplyFtrl",
        &["var", "accum", "linear", "grad", "indices"],
        &["var", "accum", "linear"],
    )
    .with_attrs(optimizer::SPARSE_FTRL),
    OpSchema::new("ApplyProximalAdagrad", &["var", "accum", "lr", "l1", "l2", "grad"], &["output"])
        .with_attrs(optimizer::USE_LOCKING),
    OpSchema::new(
        "SparseApplyProximalAdagrad",
        &["var", "accum", "lr", "l1", "l2", "grad", "indices"],
        &["output"],
    )
    .with_attrs(optimizer::USE_LOCKING),
    OpSchema::new(
        "ApplyRMSProp",
        &["var", "mean_square", "moment", "learning_rate", "grad", "decay", "momentum", "epsilon"],
        &["output"],
    )
    .with_attrs(optimizer::USE_LOCKING),
    OpSchema::new(
        "ApplyCenteredRMSProp",
        &["var", "mean_gradient", "mean_square", "moment", "grad", "learning_rate", "decay", "momentum", "epsilon"],
        &["output"],
    )
    .with_attrs(optimizer::USE_LOCKING),
    OpSchema::new(
        "BasicLSTMCell",
        &["x", "h", "c", "w", "b"],
        &["ct", "ht", "it", "jt", "ft", "ot", "tanhct"],
    )
    .with_attrs(BASIC_LSTM_CELL),
];

pub fn group() -> Result<CategoryGroup> {
    let mut group = CategoryGroup::new(Category::Nn);
    group.extend(OPS, Visibility::Public, Primitive::create)?;
    Ok(group)
}
