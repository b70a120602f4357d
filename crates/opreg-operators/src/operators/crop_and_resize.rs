//! CropAndResize: extract boxes from a batch of images and resize them.

use opreg_core::{
    AttrSpec, Attributes, DataType, Error, OpSchema, Operator, Result, TensorSpec,
};

const ATTRS: &[AttrSpec] = &[
    AttrSpec::string("method", "bilinear").one_of(&["bilinear", "nearest"]),
    AttrSpec::float("extrapolation_value", 0.0),
];

pub static SCHEMA: OpSchema = OpSchema::new(
    "CropAndResize",
    &["x", "boxes", "box_index", "crop_size"],
    &["y"],
)
.with_attrs(ATTRS);

const IMAGE_TYPES: &[DataType] = &[
    DataType::Int8,
    DataType::Int16,
    DataType::Int32,
    DataType::Int64,
    DataType::Float16,
    DataType::Float32,
    DataType::Float64,
    DataType::UInt8,
    DataType::UInt16,
];

/// Crops `num_boxes` regions out of `x` and resizes each to `crop_size`.
///
/// Inputs:
/// - `x`: `[batch, image_height, image_width, depth]`
/// - `boxes`: `[num_boxes, 4]` float32, normalized `[y1, x1, y2, x2]`
/// - `box_index`: `[num_boxes]` int32, image each box is taken from
/// - `crop_size`: constant int32 `[crop_height, crop_width]`
///
/// Output `y` is `[num_boxes, crop_height, crop_width, depth]` float32.
#[derive(Debug, Clone)]
pub struct CropAndResizeOp {
    attrs: Attributes,
}

impl CropAndResizeOp {
    pub fn new(attrs: &Attributes) -> Result<Self> {
        let attrs = Attributes::resolve(SCHEMA.name, SCHEMA.attrs, attrs)?;
        Ok(Self { attrs })
    }

    pub fn create(_schema: &'static OpSchema, attrs: &Attributes) -> Result<Box<dyn Operator>> {
        Ok(Box::new(Self::new(attrs)?))
    }

    pub fn method(&self) -> Result<&str> {
        self.attrs.string("method")
    }

    pub fn extrapolation_value(&self) -> Result<f32> {
        self.attrs.f32("extrapolation_value")
    }
}

fn check_dtype(input: &str, spec: &TensorSpec, allowed: &[DataType]) -> Result<()> {
    if allowed.contains(&spec.dtype) {
        return Ok(());
    }
    let allowed: Vec<String> = allowed.iter().map(ToString::to_string).collect();
    Err(Error::DataType(format!(
        "CropAndResize: {input} must be one of [{}], got {}",
        allowed.join(", "),
        spec.dtype
    )))
}

fn check_rank(input: &str, spec: &TensorSpec, expected: usize) -> Result<()> {
    if spec.rank() == expected {
        return Ok(());
    }
    Err(Error::Shape(format!(
        "CropAndResize: {input} rank must be {expected}, got {}",
        spec.rank()
    )))
}

impl Operator for CropAndResizeOp {
    fn schema(&self) -> &OpSchema {
        &SCHEMA
    }

    fn attributes(&self) -> &Attributes {
        &self.attrs
    }

    fn infer(&self, inputs: &[TensorSpec]) -> Result<Vec<TensorSpec>> {
        let [x, boxes, box_index, crop_size] = inputs else {
            return Err(Error::Shape(format!(
                "CropAndResize expects 4 inputs, got {}",
                inputs.len()
            )));
        };

        let crop_value = crop_size
            .value
            .as_ref()
            .ok_or_else(|| Error::Shape("CropAndResize: crop_size must be const".to_string()))?;

        check_dtype("x", x, IMAGE_TYPES)?;
        check_dtype("boxes", boxes, &[DataType::Float32])?;
        check_dtype("box_index", box_index, &[DataType::Int32])?;
        check_dtype("crop_size", crop_size, &[DataType::Int32])?;
        let crop = crop_value.as_i32().ok_or_else(|| {
            Error::DataType(format!(
                "CropAndResize: crop_size value must be int32, got {}",
                crop_value.dtype()
            ))
        })?;

        check_rank("x", x, 4)?;
        check_rank("boxes", boxes, 2)?;
        check_rank("box_index", box_index, 1)?;
        check_rank("crop_size", crop_size, 1)?;

        if boxes.shape[0] != box_index.shape[0] {
            return Err(Error::Shape(format!(
                "CropAndResize: boxes dim_0 ({}) must equal box_index dim_0 ({})",
                boxes.shape[0], box_index.shape[0]
            )));
        }
        if boxes.shape[1] != 4 {
            return Err(Error::Shape(format!(
                "CropAndResize: boxes dim_1 must be 4, got {}",
                boxes.shape[1]
            )));
        }

        let &[crop_height, crop_width] = crop else {
            return Err(Error::Shape(format!(
                "CropAndResize: crop_size must hold 2 elements, got {}",
                crop.len()
            )));
        };
        if crop_height <= 0 || crop_width <= 0 {
            return Err(Error::Shape(format!(
                "CropAndResize: crop_size must be positive, got [{crop_height}, {crop_width}]"
            )));
        }

        Ok(vec![TensorSpec::new(
            DataType::Float32,
            &[
                boxes.shape[0],
                crop_height as usize,
                crop_width as usize,
                x.shape[3],
            ],
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opreg_core::TensorData;

    fn op() -> CropAndResizeOp {
        CropAndResizeOp::new(&Attributes::new()).unwrap()
    }

    fn inputs(num_boxes: usize, crop: Vec<i32>) -> Vec<TensorSpec> {
        vec![
            TensorSpec::new(DataType::Float32, &[1, 256, 256, 3]),
            TensorSpec::new(DataType::Float32, &[num_boxes, 4]),
            TensorSpec::new(DataType::Int32, &[num_boxes]),
            TensorSpec::constant(TensorData::I32(crop)),
        ]
    }

    #[test]
    fn test_defaults() {
        let op = op();
        assert_eq!(op.method().unwrap(), "bilinear");
        assert_eq!(op.extrapolation_value().unwrap(), 0.0);
    }

    #[test]
    fn test_rejects_unknown_method() {
        let err = CropAndResizeOp::new(&Attributes::new().with("method", "bicubic")).unwrap_err();
        assert!(matches!(err, Error::Attribute(_)));
    }

    #[test]
    fn test_infer_output_shape() {
        let outputs = op().infer(&inputs(5, vec![24, 24])).unwrap();
        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].dtype, DataType::Float32);
        assert_eq!(outputs[0].shape, vec![5, 24, 24, 3]);
    }

    #[test]
    fn test_infer_requires_constant_crop_size() {
        let mut specs = inputs(5, vec![24, 24]);
        specs[3].value = None;
        let err = op().infer(&specs).unwrap_err();
        assert!(err.to_string().contains("crop_size must be const"));
    }

    #[test]
    fn test_infer_checks_box_count() {
        let mut specs = inputs(5, vec![24, 24]);
        specs[2] = TensorSpec::new(DataType::Int32, &[4]);
        assert!(matches!(op().infer(&specs), Err(Error::Shape(_))));
    }

    #[test]
    fn test_infer_checks_dtypes() {
        let mut specs = inputs(5, vec![24, 24]);
        specs[0].dtype = DataType::Bool;
        assert!(matches!(op().infer(&specs), Err(Error::DataType(_))));

        let mut specs = inputs(5, vec![24, 24]);
        specs[1].dtype = DataType::Float16;
        assert!(matches!(op().infer(&specs), Err(Error::DataType(_))));
    }

    #[test]
    fn test_infer_checks_ranks() {
        let mut specs = inputs(5, vec![24, 24]);
        specs[0] = TensorSpec::new(DataType::UInt8, &[256, 256, 3]);
        let err = op().infer(&specs).unwrap_err();
        assert!(err.to_string().contains("x rank must be 4"));
    }

    #[test]
    fn test_infer_checks_crop_size() {
        assert!(op().infer(&inputs(5, vec![24])).is_err());
        assert!(op().infer(&inputs(5, vec![0, 24])).is_err());
    }

    #[test]
    fn test_infer_checks_arity() {
        let specs = inputs(5, vec![24, 24]);
        assert!(matches!(op().infer(&specs[..3]), Err(Error::Shape(_))));
    }
}
