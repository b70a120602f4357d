//! Summary operator family: record a named value, produce nothing.

use opreg_core::OpSchema;

pub const fn summary(name: &'static str) -> OpSchema {
    OpSchema::new(name, &["name", "value"], &[])
}
