use brick_geom::Vec3;
use brick_types::BrickDescriptor;

/// One emitted vertex in local block space, before the caller's world
/// transform. `light` and `overlay` are opaque packed values supplied by
/// the caller and copied through to every vertex untouched.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    pub pos: Vec3,
    pub uv: [f32; 2],
    pub normal: Vec3,
    pub color: [f32; 4],
    pub light: u32,
    pub overlay: u32,
}

/// Unit of mesh output: a planar quad with consistent outward winding,
/// or a triangle (stud top caps).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Primitive {
    Quad([Vertex; 4]),
    Triangle([Vertex; 3]),
}

impl Primitive {
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        match self {
            Primitive::Quad(v) => v,
            Primitive::Triangle(v) => v,
        }
    }

    #[inline]
    pub fn vertices_mut(&mut self) -> &mut [Vertex] {
        match self {
            Primitive::Quad(v) => v,
            Primitive::Triangle(v) => v,
        }
    }

    /// Shared face normal (every vertex of a primitive carries the same one).
    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.vertices()[0].normal
    }
}

/// Uniform per-brick vertex attributes. One brick is one color; there is
/// no per-face shading variation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BrickStyle {
    pub color: [f32; 4],
    pub light: u32,
    pub overlay: u32,
}

impl BrickStyle {
    /// Style from a packed 0xRRGGBB color. Alpha is a forward-looking
    /// knob; everything today passes 1.0.
    pub fn from_packed(color: u32, alpha: f32) -> Self {
        Self {
            color: [
                ((color >> 16) & 0xFF) as f32 / 255.0,
                ((color >> 8) & 0xFF) as f32 / 255.0,
                (color & 0xFF) as f32 / 255.0,
                alpha,
            ],
            light: 0,
            overlay: 0,
        }
    }

    pub fn from_descriptor(d: &BrickDescriptor, alpha: f32) -> Self {
        Self {
            color: d.rgba(alpha),
            light: 0,
            overlay: 0,
        }
    }

    pub fn with_light(mut self, light: u32) -> Self {
        self.light = light;
        self
    }

    pub fn with_overlay(mut self, overlay: u32) -> Self {
        self.overlay = overlay;
        self
    }

    #[inline]
    pub(crate) fn vertex(&self, pos: Vec3, uv: [f32; 2], normal: Vec3) -> Vertex {
        Vertex {
            pos,
            uv,
            normal,
            color: self.color,
            light: self.light,
            overlay: self.overlay,
        }
    }
}

/// Sink for emitted primitives. The emitter retains nothing across
/// calls; implementations decide how vertices are stored.
pub trait MeshSink {
    fn quad(&mut self, v: [Vertex; 4]);
    fn triangle(&mut self, v: [Vertex; 3]);
}

impl MeshSink for Vec<Primitive> {
    #[inline]
    fn quad(&mut self, v: [Vertex; 4]) {
        self.push(Primitive::Quad(v));
    }

    #[inline]
    fn triangle(&mut self, v: [Vertex; 3]) {
        self.push(Primitive::Triangle(v));
    }
}
