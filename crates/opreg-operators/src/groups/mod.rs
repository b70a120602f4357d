//! Per-category operator groups.
//!
//! Each module exposes a `group()` constructor. Groups are authored
//! independently and only meet when a catalog is assembled.

pub mod array;
pub mod comm;
pub mod control;
pub mod debug;
pub mod image;
pub mod inner;
pub mod math;
pub mod nn;
pub mod other;
pub mod quant;
pub mod random;
pub mod thor;
