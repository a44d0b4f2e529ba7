//! Collision shapes for brick blocks: unions of axis-aligned boxes.
//!
//! Shapes are pure data derived from [`BrickType`]; the five variants are
//! built once behind a `OnceLock` and shared. The host engine consumes
//! them for hit-testing and placement validation.
#![forbid(unsafe_code)]

use std::sync::OnceLock;

use brick_geom::{Aabb, Vec3};
use brick_types::BrickType;

/// Top of the brick body; studs sit on this plane.
pub const BASE_TOP: f32 = 0.6;
/// Top of a stud.
pub const STUD_TOP: f32 = 0.9;
/// Stud footprint edge length.
pub const STUD_SIZE: f32 = 0.25;
/// Center-to-center stud distance.
pub const STUD_PITCH: f32 = 0.5;
/// Offset of the first stud from the base origin on each axis.
pub const STUD_INSET: f32 = 0.125;

/// Boolean union of boxes. Never empty for any brick type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Shape {
    pub boxes: Vec<Aabb>,
}

impl Shape {
    pub fn new(boxes: Vec<Aabb>) -> Self {
        Self { boxes }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Point membership: inside any member box.
    pub fn contains_point(&self, p: Vec3) -> bool {
        self.boxes.iter().any(|b| b.contains_point(p))
    }

    /// Box enclosing the whole union. Meaningless on an empty shape, so
    /// returns a degenerate box at the origin there.
    pub fn bounding(&self) -> Aabb {
        let mut it = self.boxes.iter();
        let Some(first) = it.next() else {
            return Aabb::default();
        };
        let mut min = first.min;
        let mut max = first.max;
        for b in it {
            min.x = min.x.min(b.min.x);
            min.y = min.y.min(b.min.y);
            min.z = min.z.min(b.min.z);
            max.x = max.x.max(b.max.x);
            max.y = max.y.max(b.max.y);
            max.z = max.z.max(b.max.z);
        }
        Aabb::new(min, max)
    }
}

/// Stud collision boxes for a `width` x `length` grid on the standard
/// pitch. Shared by the mesh emitter so studs land in the same place in
/// both representations.
pub fn stud_grid(width: u32, length: u32) -> impl Iterator<Item = Aabb> {
    (0..width).flat_map(move |i| {
        (0..length).map(move |j| {
            let x1 = STUD_INSET + i as f32 * STUD_PITCH;
            let z1 = STUD_INSET + j as f32 * STUD_PITCH;
            Aabb::new(
                Vec3::new(x1, BASE_TOP, z1),
                Vec3::new(x1 + STUD_SIZE, STUD_TOP, z1 + STUD_SIZE),
            )
        })
    })
}

/// Body box of the brick, shared verbatim with the mesh emitter.
pub fn base_box(ty: BrickType) -> Aabb {
    match ty {
        BrickType::Brick1x1 => Aabb::new(
            Vec3::new(0.0625, 0.0, 0.0625),
            Vec3::new(0.9375, BASE_TOP, 0.9375),
        ),
        BrickType::Brick2x2 | BrickType::Corner => {
            Aabb::new(Vec3::ZERO, Vec3::new(1.0, BASE_TOP, 1.0))
        }
        BrickType::Brick2x4 => Aabb::new(Vec3::ZERO, Vec3::new(1.0, BASE_TOP, 2.0)),
        // Lower step only; the upper half is a separate box.
        BrickType::Slope => Aabb::new(Vec3::ZERO, Vec3::new(1.0, 0.3, 1.0)),
    }
}

/// Upper step of the slope's two-box collision approximation.
pub fn slope_upper_box() -> Aabb {
    Aabb::new(Vec3::new(0.0, 0.3, 0.5), Vec3::new(1.0, BASE_TOP, 1.0))
}

/// The 1x1 brick's single centered stud, wider than the grid studs.
pub fn center_stud_box() -> Aabb {
    Aabb::new(Vec3::new(0.25, BASE_TOP, 0.25), Vec3::new(0.75, STUD_TOP, 0.75))
}

/// The corner brick's single stud, offset toward the (-x, -z) corner.
pub fn corner_stud_box() -> Aabb {
    Aabb::new(
        Vec3::new(STUD_INSET, BASE_TOP, STUD_INSET),
        Vec3::new(STUD_INSET + STUD_SIZE, STUD_TOP, STUD_INSET + STUD_SIZE),
    )
}

fn build_shape(ty: BrickType) -> Shape {
    let mut boxes = vec![base_box(ty)];
    match ty {
        BrickType::Brick1x1 => boxes.push(center_stud_box()),
        BrickType::Brick2x2 => boxes.extend(stud_grid(2, 2)),
        BrickType::Brick2x4 => boxes.extend(stud_grid(2, 4)),
        BrickType::Slope => boxes.push(slope_upper_box()),
        BrickType::Corner => boxes.push(corner_stud_box()),
    }
    Shape::new(boxes)
}

/// Collision shape lookup. Total over the closed variant set; the five
/// shapes are built on first use and shared for the process lifetime.
pub fn collision_shape(ty: BrickType) -> &'static Shape {
    static SHAPES: OnceLock<[Shape; 5]> = OnceLock::new();
    let all = SHAPES.get_or_init(|| {
        [
            build_shape(BrickType::Brick1x1),
            build_shape(BrickType::Brick2x2),
            build_shape(BrickType::Brick2x4),
            build_shape(BrickType::Slope),
            build_shape(BrickType::Corner),
        ]
    });
    let ix = match ty {
        BrickType::Brick1x1 => 0,
        BrickType::Brick2x2 => 1,
        BrickType::Brick2x4 => 2,
        BrickType::Slope => 3,
        BrickType::Corner => 4,
    };
    &all[ix]
}
