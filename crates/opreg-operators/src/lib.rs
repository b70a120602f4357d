//! Standard primitive operator set for opreg.
//!
//! This crate provides the category groups that make up the standard
//! catalog and the process-wide catalog assembled from them.
//!
//! # Category Groups
//!
//! - **array**: shape manipulation, gather/scatter, slicing, space/batch/depth rearrangement
//! - **image**: CropAndResize
//! - **math**: elementwise unary and binary math, comparisons, reductions, matmul, float status
//! - **nn**: convolution, pooling, normalization, activations, losses, optimizers, LSTM
//! - **comm**: collectives (AllReduce, AllGather, ReduceScatter, Broadcast) and parallel helpers
//! - **debug**: summaries, Print, gradient hooks
//! - **control**: ControlDepend, GeSwitch, Merge
//! - **inner**: ScalarCast
//! - **random**: RandomChoiceWithMask, RandomCategorical
//! - **other**: Assign, IOU, bounding box encode/decode
//! - **quant**: fake quantization and batch-norm folding (manifest extension)
//! - **thor**: custom cube kernels for second-order optimization (registered, not exported)
//!
//! # Example
//!
//! ```no_run
//! use opreg_core::Attributes;
//!
//! let catalog = opreg_operators::catalog()?;
//! assert!(catalog.is_exported("Conv2D"));
//!
//! let conv = catalog.instantiate(
//!     "Conv2D",
//!     &Attributes::new()
//!         .with("out_channel", 64i64)
//!         .with("kernel_size", vec![3i64, 3]),
//! )?;
//! assert_eq!(conv.attributes().string("pad_mode")?, "valid");
//! # Ok::<(), opreg_core::Error>(())
//! ```

pub mod families;
pub mod groups;
pub mod operators;

mod primitive;
mod registry;

pub use families::ReduceOp;
pub use operators::CropAndResizeOp;
pub use primitive::Primitive;
pub use registry::{catalog, lookup, manifest, standard_catalog, standard_groups};
