//! Shared fixtures for catalog integration tests.

#![allow(dead_code)]

use opreg_core::Catalog;

/// Names exported by the base category groups.
pub const BASE_EXPORTS: &[&str] = &[
    "TensorAdd", "Argmax", "Argmin", "ArgMaxWithValue", "ArgMinWithValue", "AddN", "Sub", "CumSum",
    "MatMul", "BatchMatMul", "Mul", "Pow", "Exp", "Rsqrt", "Sqrt", "Square", "Conv2D", "Flatten",
    "MaxPoolWithArgmax", "FusedBatchNorm", "BatchNorm", "MaxPool", "TopK", "Adam", "Softplus",
    "Softmax", "LogSoftmax", "SoftmaxCrossEntropyWithLogits", "ROIAlign", "ConfusionMulGrad",
    "SparseSoftmaxCrossEntropyWithLogits", "SGD", "ApplyMomentum", "ExpandDims", "Cast",
    "IsSubClass", "IsInstance", "Reshape", "Squeeze", "Transpose", "OneHot", "GatherV2", "Concat",
    "Pack", "Unpack", "Tile", "BiasAdd", "Gelu", "Minimum", "Maximum", "StridedSlice", "ReduceSum",
    "ReduceMean", "Range", "LayerNorm", "EmbeddingLookup", "Rank", "Less", "LessEqual", "RealDiv",
    "Div", "TruncatedNormal", "Fill", "OnesLike", "ZerosLike", "Select", "Split", "ReLU", "ReLU6",
    "ReLUV2", "Elu", "Erf", "Erfc", "Sigmoid", "HSwish", "HSigmoid", "Tanh", "RandomChoiceWithMask",
    "RandomCategorical", "ResizeBilinear", "ScalarSummary", "ImageSummary", "TensorSummary",
    "HistogramSummary", "Print", "InsertGradientOf", "HookBackward", "InvertPermutation", "Shape",
    "DropoutDoMask", "DropoutGenMask", "DropoutGrad", "Dropout", "Neg", "Slice", "DType",
    "NPUAllocFloatStatus", "NPUGetFloatStatus", "NPUClearFloatStatus", "IsNan", "IsFinite", "IsInf",
    "FloatStatus", "Reciprocal", "SmoothL1Loss", "L2Loss", "CTCLoss", "RNNTLoss", "ReduceAll",
    "ScalarToArray", "ScalarToTensor", "TupleToArray", "ControlDepend", "GeSwitch", "Merge",
    "SameTypeShape", "CheckBprop", "CheckValid", "BoundingBoxEncode", "BoundingBoxDecode",
    "L2Normalize", "ScatterAdd", "ScatterNd", "ScatterMax", "ResizeNearestNeighbor", "Pad",
    "MirrorPad", "GatherNd", "ScatterUpdate", "ScatterNdUpdate", "Floor", "NMSWithMask", "IOU",
    "MakeRefKey", "AvgPool", "Equal", "EqualCount", "NotEqual", "Greater", "GreaterEqual",
    "LogicalNot", "LogicalAnd", "LogicalOr", "Size", "DepthwiseConv2dNative", "UnsortedSegmentSum",
    "UnsortedSegmentMin", "AllGather", "HostAllGather", "AllReduce", "ReduceScatter",
    "HostReduceScatter", "Broadcast", "ReduceOp", "ScalarCast", "GetNext", "ReduceMax", "ReduceMin",
    "ReduceProd", "CumProd", "Log", "Log1p", "SigmoidCrossEntropyWithLogits", "FloorDiv",
    "FloorMod", "Acosh", "Asinh", "PReLU", "Cos", "ACos", "Diag", "DiagPart", "Eye", "Assign",
    "AssignAdd", "AssignSub", "Sin", "Asin", "LSTM", "Abs", "BinaryCrossEntropy",
    "SparseApplyAdagrad", "SpaceToDepth", "DepthToSpace", "Conv2DBackpropInput", "Sign",
    "LARSUpdate", "Round", "ApplyFtrl", "SpaceToBatch", "SparseApplyFtrl", "ApplyProximalAdagrad",
    "SparseApplyProximalAdagrad", "BatchToSpace", "Atan2", "ApplyRMSProp", "ApplyCenteredRMSProp",
    "SpaceToBatchND", "BatchToSpaceND", "ReverseSequence", "SquareSumAll", "BitwiseAnd",
    "BitwiseOr", "BitwiseXor", "BesselI0e", "BesselI1e", "Atan", "Atanh", "BasicLSTMCell",
    "CropAndResize",
];

/// Names appended to the manifest by the quant extension.
pub const QUANT_EXPORTS: &[&str] = &[
    "FakeQuantPerLayer", "FakeQuantPerLayerGrad", "FakeQuantPerChannel", "FakeQuantPerChannelGrad",
    "BatchNormFold", "BatchNormFoldGrad", "CorrectionMul", "CorrectionMulGrad",
    "CorrectionMulGradReduce", "BatchNormFold2", "BatchNormFold2Grad", "BatchNormFoldD",
    "BatchNormFoldGradD", "BatchNormFold2_D", "BatchNormFold2GradD", "BatchNormFold2GradReduce",
];

/// Registered but never exported.
pub const INTERNAL: &[&str] = &[
    "_AlltoAll",
    "_MirrorOperator",
    "_VirtualDataset",
    "_VirtualDiv",
    "_GetTensorSlice",
    "CusBatchMatMul",
    "CusCholeskyTrsm",
    "CusFusedAbsMax1",
    "CusImg2Col",
    "CusMatMulCubeDenseLeft",
    "CusMatMulCubeFraczRightMul",
    "CusMatMulCube",
    "CusMatrixCombine",
    "CusTranspose02314",
    "CusMatMulCubeDenseRight",
    "CusMatMulCubeFraczLeftCast",
];

/// Every exported name, sorted.
pub fn expected_manifest() -> Vec<&'static str> {
    let mut names: Vec<&str> = BASE_EXPORTS.iter().chain(QUANT_EXPORTS).copied().collect();
    names.sort_unstable();
    names
}

pub fn catalog() -> &'static Catalog {
    opreg_operators::catalog().expect("standard catalog assembles")
}
