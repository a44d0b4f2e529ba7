use std::f32::consts::TAU;

use brick_geom::{Aabb, Vec3};

use crate::face::Face;
use crate::primitive::{BrickStyle, MeshSink};

/// Octagonal prisms stand in for stud cylinders.
pub const STUD_SEGMENTS: u32 = 8;

/// Direction of the slope's connecting-face normal. Kept as authored in
/// the source data; `emit_slope_face` normalizes before use.
pub const SLOPE_FACE_NORMAL_DIR: Vec3 = Vec3::new(0.0, 0.6, -0.8);

#[inline]
fn quad(sink: &mut impl MeshSink, ps: [Vec3; 4], n: Vec3, style: &BrickStyle) {
    sink.quad([
        style.vertex(ps[0], [0.0, 0.0], n),
        style.vertex(ps[1], [1.0, 0.0], n),
        style.vertex(ps[2], [1.0, 1.0], n),
        style.vertex(ps[3], [0.0, 1.0], n),
    ]);
}

/// Emits the six faces of an axis-aligned box: bottom, top, north (-z),
/// south (+z), west (-x), east (+x). Each face is a single quad with an
/// outward unit normal and UVs spanning 0..1.
pub fn emit_box(sink: &mut impl MeshSink, b: Aabb, style: &BrickStyle) {
    let (min, max) = (b.min, b.max);
    // Bottom (y = min.y)
    quad(
        sink,
        [
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(min.x, min.y, max.z),
        ],
        Face::NegY.normal(),
        style,
    );
    // Top (y = max.y)
    quad(
        sink,
        [
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(min.x, max.y, max.z),
            Vec3::new(max.x, max.y, max.z),
            Vec3::new(max.x, max.y, min.z),
        ],
        Face::PosY.normal(),
        style,
    );
    // North (z = min.z)
    quad(
        sink,
        [
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(max.x, min.y, min.z),
        ],
        Face::NegZ.normal(),
        style,
    );
    // South (z = max.z)
    quad(
        sink,
        [
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(max.x, max.y, max.z),
            Vec3::new(min.x, max.y, max.z),
        ],
        Face::PosZ.normal(),
        style,
    );
    // West (x = min.x)
    quad(
        sink,
        [
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(min.x, max.y, max.z),
            Vec3::new(min.x, max.y, min.z),
        ],
        Face::NegX.normal(),
        style,
    );
    // East (x = max.x)
    quad(
        sink,
        [
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(max.x, max.y, max.z),
            Vec3::new(max.x, min.y, max.z),
        ],
        Face::PosX.normal(),
        style,
    );
}

/// Emits a stud as an octagonal prism inscribed in the footprint of
/// `b`: 8 side quads plus an 8-triangle top fan. No bottom cap; the stud
/// rests on the brick body and its underside can never be seen.
pub fn emit_stud(sink: &mut impl MeshSink, b: Aabb, style: &BrickStyle) {
    let center = b.center();
    let radius = (b.max.x - b.min.x) / 2.0;
    let (y0, y1) = (b.min.y, b.max.y);

    let rim = |angle: f32| {
        Vec3::new(
            center.x + radius * angle.cos(),
            0.0,
            center.z + radius * angle.sin(),
        )
    };

    for i in 0..STUD_SEGMENTS {
        let a0 = TAU * i as f32 / STUD_SEGMENTS as f32;
        let a1 = TAU * (i + 1) as f32 / STUD_SEGMENTS as f32;
        let p0 = rim(a0);
        let p1 = rim(a1);

        let mid = (a0 + a1) / 2.0;
        let n = Vec3::new(mid.cos(), 0.0, mid.sin());
        quad(
            sink,
            [
                Vec3::new(p0.x, y0, p0.z),
                Vec3::new(p0.x, y1, p0.z),
                Vec3::new(p1.x, y1, p1.z),
                Vec3::new(p1.x, y0, p1.z),
            ],
            n,
            style,
        );
    }

    let up = Vec3::UP;
    for i in 0..STUD_SEGMENTS {
        let a0 = TAU * i as f32 / STUD_SEGMENTS as f32;
        let a1 = TAU * (i + 1) as f32 / STUD_SEGMENTS as f32;
        let p0 = rim(a0);
        let p1 = rim(a1);
        // Fan winds apex -> p1 -> p0 so the geometric normal matches +Y.
        sink.triangle([
            style.vertex(Vec3::new(center.x, y1, center.z), [0.5, 0.5], up),
            style.vertex(Vec3::new(p1.x, y1, p1.z), [1.0, 1.0], up),
            style.vertex(Vec3::new(p0.x, y1, p0.z), [0.0, 1.0], up),
        ]);
    }
}

/// Emits the slope's single connecting quad between the lower step's
/// front edge and the upper step's top edge. The normal direction comes
/// from the source data rather than the face plane; only the direction
/// is meaningful, so it is normalized here.
pub fn emit_slope_face(sink: &mut impl MeshSink, style: &BrickStyle) {
    let n = SLOPE_FACE_NORMAL_DIR.normalized();
    quad(
        sink,
        [
            Vec3::new(0.0, 0.3, 0.0),
            Vec3::new(0.0, 0.6, 0.5),
            Vec3::new(1.0, 0.6, 0.5),
            Vec3::new(1.0, 0.3, 0.0),
        ],
        n,
        style,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::Primitive;

    fn style() -> BrickStyle {
        BrickStyle::from_packed(0xFF0000, 1.0)
    }

    #[test]
    fn box_is_six_quads() {
        let mut out: Vec<Primitive> = Vec::new();
        emit_box(
            &mut out,
            Aabb::new(Vec3::ZERO, Vec3::new(1.0, 0.6, 1.0)),
            &style(),
        );
        assert_eq!(out.len(), 6);
        assert!(out.iter().all(|p| matches!(p, Primitive::Quad(_))));
    }

    #[test]
    fn stud_has_no_bottom_cap() {
        let mut out: Vec<Primitive> = Vec::new();
        let b = Aabb::new(Vec3::new(0.25, 0.6, 0.25), Vec3::new(0.75, 0.9, 0.75));
        emit_stud(&mut out, b, &style());
        assert_eq!(out.len(), 16);
        // Nothing faces down, and nothing touches the stud base plane
        // with a vertical normal.
        for p in &out {
            assert!(p.normal().y >= 0.0);
            if p.normal().y > 0.0 {
                assert!(p.vertices().iter().all(|v| v.pos.y == 0.9));
            }
        }
    }

    #[test]
    fn stud_rim_stays_on_radius() {
        let mut out: Vec<Primitive> = Vec::new();
        let b = Aabb::new(Vec3::new(0.25, 0.6, 0.25), Vec3::new(0.75, 0.9, 0.75));
        emit_stud(&mut out, b, &style());
        for p in &out {
            for v in p.vertices() {
                let dx = v.pos.x - 0.5;
                let dz = v.pos.z - 0.5;
                let r = (dx * dx + dz * dz).sqrt();
                // Rim vertices sit on the circle, the fan apex at its center
                assert!(r < 0.25 + 1e-5);
            }
        }
    }

    #[test]
    fn slope_face_normal_is_unit_with_source_direction() {
        let mut out: Vec<Primitive> = Vec::new();
        emit_slope_face(&mut out, &style());
        assert_eq!(out.len(), 1);
        let n = out[0].normal();
        assert!((n.length() - 1.0).abs() < 1e-6);
        // Direction proportional to (0, 0.6, -0.8)
        assert!(n.x.abs() < 1e-6);
        assert!(n.y > 0.0 && n.z < 0.0);
        assert!((n.y / -n.z - 0.75).abs() < 1e-5);
    }
}
