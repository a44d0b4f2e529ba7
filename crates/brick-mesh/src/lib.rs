//! Brick mesh emission: pure functions from a brick type plus per-brick
//! style to a sequence of colored quads and triangles in local block
//! space. Geometry is always authored at yaw 0; the caller (or the
//! [`transform`] helpers) applies the Y rotation about the block center.
#![forbid(unsafe_code)]

pub mod brick;
pub mod emit;
pub mod face;
pub mod mesh_build;
pub mod primitive;
pub mod transform;

pub use brick::{emit, emit_brick};
pub use emit::{emit_box, emit_slope_face, emit_stud};
pub use face::Face;
pub use mesh_build::MeshBuild;
pub use primitive::{BrickStyle, MeshSink, Primitive, Vertex};
