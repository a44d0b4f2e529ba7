use std::error::Error;

use serde::{Deserialize, Serialize};

use crate::types::BrickType;

/// Persisted per-block brick state. Owned and mutated by the host engine;
/// the geometry crates only ever read it by value.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrickDescriptor {
    pub brick_type: BrickType,
    /// Packed 0xRRGGBB.
    #[serde(default = "default_color")]
    pub color: u32,
    /// Yaw in degrees, normalized to [0, 360) by the host.
    #[serde(default)]
    pub rotation_y_deg: f32,
    /// Persisted but not consumed by any geometry routine yet; reserved
    /// for a low-poly fallback mesh.
    #[serde(default = "default_detailed")]
    pub detailed_model: bool,
}

fn default_color() -> u32 {
    0xFF0000
}

fn default_detailed() -> bool {
    true
}

impl BrickDescriptor {
    pub fn new(brick_type: BrickType) -> Self {
        Self {
            brick_type,
            color: default_color(),
            rotation_y_deg: 0.0,
            detailed_model: default_detailed(),
        }
    }

    /// Unpacks the 0xRRGGBB color into 0..1 channel floats plus `alpha`.
    #[inline]
    pub fn rgba(&self, alpha: f32) -> [f32; 4] {
        [
            ((self.color >> 16) & 0xFF) as f32 / 255.0,
            ((self.color >> 8) & 0xFF) as f32 / 255.0,
            (self.color & 0xFF) as f32 / 255.0,
            alpha,
        ]
    }

    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        let d: BrickDescriptor = toml::from_str(s)?;
        Ok(d)
    }

    pub fn to_toml_string(&self) -> Result<String, Box<dyn Error>> {
        Ok(toml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_descriptor_defaults() {
        let d = BrickDescriptor::new(BrickType::Slope);
        assert_eq!(d.color, 0xFF0000);
        assert_eq!(d.rotation_y_deg, 0.0);
        assert!(d.detailed_model);
    }

    #[test]
    fn rgba_unpacks_channels() {
        let mut d = BrickDescriptor::new(BrickType::Brick1x1);
        d.color = 0xFF0000;
        assert_eq!(d.rgba(1.0), [1.0, 0.0, 0.0, 1.0]);

        d.color = 0x4080C0;
        let [r, g, b, a] = d.rgba(0.5);
        assert!((r - 64.0 / 255.0).abs() < 1e-6);
        assert!((g - 128.0 / 255.0).abs() < 1e-6);
        assert!((b - 192.0 / 255.0).abs() < 1e-6);
        assert_eq!(a, 0.5);
    }

    #[test]
    fn toml_round_trip() {
        let mut d = BrickDescriptor::new(BrickType::Brick2x4);
        d.color = 0x00FF7F;
        d.rotation_y_deg = 90.0;
        d.detailed_model = false;
        let s = d.to_toml_string().unwrap();
        let back = BrickDescriptor::from_toml_str(&s).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let d = BrickDescriptor::from_toml_str("brick_type = \"corner\"\n").unwrap();
        assert_eq!(d.brick_type, BrickType::Corner);
        assert_eq!(d.color, 0xFF0000);
        assert_eq!(d.rotation_y_deg, 0.0);
        assert!(d.detailed_model);
    }

    #[test]
    fn unknown_brick_type_is_an_error() {
        let err = BrickDescriptor::from_toml_str("brick_type = \"brick_9x9\"\n");
        assert!(err.is_err());
    }
}
