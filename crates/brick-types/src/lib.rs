//! Brick variants and the externally-owned brick descriptor.
#![forbid(unsafe_code)]

pub mod descriptor;
pub mod types;

pub use descriptor::BrickDescriptor;
pub use types::BrickType;
