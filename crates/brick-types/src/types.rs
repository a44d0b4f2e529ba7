use brick_geom::{Aabb, Vec3};
use serde::{Deserialize, Serialize};

/// Closed set of brick variants. Both the collision shape and the visual
/// mesh are derived from this tag; there is no dynamic registry.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum BrickType {
    #[serde(rename = "brick_1x1")]
    Brick1x1,
    #[serde(rename = "brick_2x2")]
    Brick2x2,
    #[serde(rename = "brick_2x4")]
    Brick2x4,
    #[serde(rename = "slope")]
    Slope,
    #[serde(rename = "corner")]
    Corner,
}

impl BrickType {
    pub const ALL: [BrickType; 5] = [
        BrickType::Brick1x1,
        BrickType::Brick2x2,
        BrickType::Brick2x4,
        BrickType::Slope,
        BrickType::Corner,
    ];

    /// Stable name used by persisted descriptors.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            BrickType::Brick1x1 => "brick_1x1",
            BrickType::Brick2x2 => "brick_2x2",
            BrickType::Brick2x4 => "brick_2x4",
            BrickType::Slope => "slope",
            BrickType::Corner => "corner",
        }
    }

    #[inline]
    pub fn from_name(s: &str) -> Option<BrickType> {
        match s {
            "brick_1x1" => Some(BrickType::Brick1x1),
            "brick_2x2" => Some(BrickType::Brick2x2),
            "brick_2x4" => Some(BrickType::Brick2x4),
            "slope" => Some(BrickType::Slope),
            "corner" => Some(BrickType::Corner),
            _ => None,
        }
    }

    /// Stud grid (width, length) for rectangular bricks. Slope and corner
    /// carry a single off-grid stud and report (1, 1).
    #[inline]
    pub fn footprint(self) -> (u32, u32) {
        match self {
            BrickType::Brick1x1 => (1, 1),
            BrickType::Brick2x2 => (2, 2),
            BrickType::Brick2x4 => (2, 4),
            BrickType::Slope | BrickType::Corner => (1, 1),
        }
    }

    /// Logical bounding box in local block space. Everything the brick
    /// emits (collision boxes and mesh vertices) stays inside this.
    #[inline]
    pub fn bounds(self) -> Aabb {
        let depth = match self {
            BrickType::Brick2x4 => 2.0,
            _ => 1.0,
        };
        Aabb::new(Vec3::ZERO, Vec3::new(1.0, 1.0, depth))
    }
}
