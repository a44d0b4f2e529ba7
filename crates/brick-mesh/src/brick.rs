use brick_geom::{Aabb, Vec3};
use brick_shape::{
    BASE_TOP, STUD_TOP, base_box, center_stud_box, corner_stud_box, slope_upper_box, stud_grid,
};
use brick_types::BrickType;
use log::trace;

use crate::emit::{emit_box, emit_slope_face, emit_stud};
use crate::primitive::{BrickStyle, MeshSink, Primitive};

/// The slope's single stud sits on the upper step, pushed toward the
/// back. Visual-only; the collision shape ignores it.
pub fn slope_stud_box() -> Aabb {
    Aabb::new(Vec3::new(0.25, BASE_TOP, 0.625), Vec3::new(0.75, STUD_TOP, 0.875))
}

/// Emits the full mesh for one brick into `sink`, authored at yaw 0 in
/// local block space. Base boxes come from `brick-shape`, so collision
/// and visual bodies can never drift apart.
pub fn emit_brick(sink: &mut impl MeshSink, ty: BrickType, style: &BrickStyle) {
    trace!("emit_brick {}", ty.name());
    match ty {
        BrickType::Brick1x1 => {
            emit_box(sink, base_box(ty), style);
            emit_stud(sink, center_stud_box(), style);
        }
        BrickType::Brick2x2 | BrickType::Brick2x4 => {
            emit_box(sink, base_box(ty), style);
            let (w, l) = ty.footprint();
            for stud in stud_grid(w, l) {
                emit_stud(sink, stud, style);
            }
        }
        BrickType::Slope => {
            emit_box(sink, base_box(ty), style);
            emit_box(sink, slope_upper_box(), style);
            emit_slope_face(sink, style);
            emit_stud(sink, slope_stud_box(), style);
        }
        BrickType::Corner => {
            emit_box(sink, base_box(ty), style);
            emit_stud(sink, corner_stud_box(), style);
        }
    }
}

/// Convenience wrapper: collect one brick's primitives into a fresh Vec.
/// `alpha` is plumbed for future translucency; current callers pass 1.0.
pub fn emit(ty: BrickType, color: u32, alpha: f32) -> Vec<Primitive> {
    let mut out = Vec::new();
    emit_brick(&mut out, ty, &BrickStyle::from_packed(color, alpha));
    out
}
