//! Elementwise operator family.
//!
//! Covers unary math (Abs, Sin, Sqrt, ...), binary arithmetic (TensorAdd,
//! Sub, Pow, ...), comparisons and logical operators.

use opreg_core::OpSchema;

/// One input `x`, one output `output`.
pub const fn unary(name: &'static str) -> OpSchema {
    OpSchema::new(name, &["x"], &["output"])
}

/// Inputs `x` and `y`, one output `output`.
pub const fn binary(name: &'static str) -> OpSchema {
    OpSchema::new(name, &["x", "y"], &["output"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signatures() {
        const SQRT: OpSchema = unary("Sqrt");
        const POW: OpSchema = binary("Pow");

        assert_eq!(SQRT.inputs, &["x"]);
        assert_eq!(POW.inputs, &["x", "y"]);
        assert_eq!(POW.outputs, &["output"]);
        assert!(POW.attrs.is_empty());
    }
}
