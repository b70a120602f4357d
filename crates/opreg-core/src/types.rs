//! Tensor metadata used by shape inference.

use serde::Serialize;
use std::fmt;

/// Element types an operator may accept or produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float16,
    Float32,
    Float64,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Bool => "bool",
            DataType::Int8 => "int8",
            DataType::Int16 => "int16",
            DataType::Int32 => "int32",
            DataType::Int64 => "int64",
            DataType::UInt8 => "uint8",
            DataType::UInt16 => "uint16",
            DataType::UInt32 => "uint32",
            DataType::UInt64 => "uint64",
            DataType::Float16 => "float16",
            DataType::Float32 => "float32",
            DataType::Float64 => "float64",
        };
        f.write_str(name)
    }
}

/// Raw values of a constant tensor.
#[derive(Debug, Clone, PartialEq)]
pub enum TensorData {
    I64(Vec<i64>),
    I32(Vec<i32>),
    F32(Vec<f32>),
    Bool(Vec<bool>),
}

impl TensorData {
    /// Get the number of elements in this tensor data.
    pub fn len(&self) -> usize {
        match self {
            TensorData::I64(v) => v.len(),
            TensorData::I32(v) => v.len(),
            TensorData::F32(v) => v.len(),
            TensorData::Bool(v) => v.len(),
        }
    }

    /// Check if this tensor data is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Try to get as i32 slice.
    pub fn as_i32(&self) -> Option<&[i32]> {
        match self {
            TensorData::I32(v) => Some(v),
            _ => None,
        }
    }

    /// Get the inferred data type from this tensor data.
    pub fn dtype(&self) -> DataType {
        match self {
            TensorData::I64(_) => DataType::Int64,
            TensorData::I32(_) => DataType::Int32,
            TensorData::F32(_) => DataType::Float32,
            TensorData::Bool(_) => DataType::Bool,
        }
    }
}

/// Static description of one operator input or output.
#[derive(Debug, Clone, PartialEq)]
pub struct TensorSpec {
    pub dtype: DataType,
    pub shape: Vec<usize>,
    /// Known value, for inputs that must be constant.
    pub value: Option<TensorData>,
}

impl TensorSpec {
    pub fn new(dtype: DataType, shape: &[usize]) -> Self {
        Self {
            dtype,
            shape: shape.to_vec(),
            value: None,
        }
    }

    /// A 1-D constant tensor holding `data`.
    pub fn constant(data: TensorData) -> Self {
        Self {
            dtype: data.dtype(),
            shape: vec![data.len()],
            value: Some(data),
        }
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_spec_takes_shape_from_data() {
        let spec = TensorSpec::constant(TensorData::I32(vec![24, 24]));
        assert_eq!(spec.dtype, DataType::Int32);
        assert_eq!(spec.shape, vec![2]);
        assert_eq!(spec.value.as_ref().and_then(|v| v.as_i32()), Some(&[24, 24][..]));
    }
}
