//! Caller-side yaw composition: emitted geometry is authored at yaw 0,
//! and the renderer rotates it about the block's vertical center line,
//! translate(0.5,0,0.5) · rotateY(deg) · translate(-0.5,0,-0.5).

use brick_geom::{Vec3, rotate_yaw};

use crate::primitive::{Primitive, Vertex};

/// Pivot of the yaw rotation: the vertical center line of the unit
/// block. Elongated bricks swing around the same pivot.
pub const BLOCK_PIVOT: Vec3 = Vec3::new(0.5, 0.0, 0.5);

/// Rotates a point about the block pivot by `deg` around +Y.
#[inline]
pub fn rotate_y_about_center(p: Vec3, deg: f32) -> Vec3 {
    rotate_yaw(p - BLOCK_PIVOT, deg) + BLOCK_PIVOT
}

/// Rotates a vertex in place: position about the pivot, normal about
/// the origin.
#[inline]
pub fn rotate_vertex(v: &mut Vertex, deg: f32) {
    v.pos = rotate_y_about_center(v.pos, deg);
    v.normal = rotate_yaw(v.normal, deg);
}

/// Rotates every vertex of a primitive in place.
pub fn rotate_primitive(p: &mut Primitive, deg: f32) {
    for v in p.vertices_mut() {
        rotate_vertex(v, deg);
    }
}

/// Rotates an entire emitted mesh in place.
pub fn rotate_mesh(mesh: &mut [Primitive], deg: f32) {
    if deg == 0.0 {
        return;
    }
    for p in mesh {
        rotate_primitive(p, deg);
    }
}
