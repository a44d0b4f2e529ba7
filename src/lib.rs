//! Thin driver around the brick geometry crates: descriptor in,
//! Wavefront OBJ out. The geometry itself lives in `brick-shape` and
//! `brick-mesh`; this crate only glues them to files and the CLI.
#![forbid(unsafe_code)]

pub mod obj;

use brick_mesh::transform::rotate_mesh;
use brick_mesh::{BrickStyle, Primitive, emit_brick};
use brick_types::BrickDescriptor;

/// Emits the descriptor's brick and applies its yaw rotation, i.e. the
/// composition a renderer would perform per frame.
pub fn build_mesh(d: &BrickDescriptor) -> Vec<Primitive> {
    let style = BrickStyle::from_descriptor(d, 1.0);
    let mut mesh = Vec::new();
    emit_brick(&mut mesh, d.brick_type, &style);
    rotate_mesh(&mut mesh, d.rotation_y_deg);
    mesh
}
