//! Operators with behavior beyond their schema.

pub mod crop_and_resize;

pub use crop_and_resize::CropAndResizeOp;
