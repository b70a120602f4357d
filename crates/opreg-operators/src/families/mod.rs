//! Operator families sharing one signature shape.
//!
//! Families keep the category tables short: operators that differ only by
//! name are declared through the same constructor.

pub mod collective;
pub mod elementwise;
pub mod optimizer;
pub mod reduction;
pub mod summary;

pub use collective::ReduceOp;
pub use elementwise::{binary, unary};
pub use reduction::reduce;
pub use summary::summary;
