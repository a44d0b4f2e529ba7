use crate::primitive::{MeshSink, Vertex};

/// Flat interleaved buffers ready for GPU upload: positions, normals,
/// UVs, byte colors, and a triangle index list. Quads become two indexed
/// triangles; light/overlay are not flattened here (renderers that need
/// them consume [`crate::Primitive`] directly).
#[derive(Default, Clone)]
pub struct MeshBuild {
    pub pos: Vec<f32>,
    pub norm: Vec<f32>,
    pub uv: Vec<f32>,
    pub idx: Vec<u16>,
    pub col: Vec<u8>,
}

impl MeshBuild {
    /// Clears all arrays but retains capacity for reuse across frames.
    #[inline]
    pub fn clear_keep_capacity(&mut self) {
        self.pos.clear();
        self.norm.clear();
        self.uv.clear();
        self.idx.clear();
        self.col.clear();
    }

    /// Pre-reserve capacity for approximately `n_quads` quads worth of data.
    #[inline]
    pub fn reserve_quads(&mut self, n_quads: usize) {
        // 4 vertices per quad
        self.pos.reserve(n_quads * 4 * 3);
        self.norm.reserve(n_quads * 4 * 3);
        self.uv.reserve(n_quads * 4 * 2);
        self.col.reserve(n_quads * 4 * 4);
        self.idx.reserve(n_quads * 6);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    /// Returns a slice of interleaved vertex positions (x,y,z per vertex).
    pub fn positions(&self) -> &[f32] {
        &self.pos
    }

    /// Returns a slice of interleaved vertex normals (x,y,z per vertex).
    pub fn normals(&self) -> &[f32] {
        &self.norm
    }

    fn push_vertex(&mut self, v: &Vertex) {
        self.pos.extend_from_slice(&[v.pos.x, v.pos.y, v.pos.z]);
        self.norm
            .extend_from_slice(&[v.normal.x, v.normal.y, v.normal.z]);
        self.uv.extend_from_slice(&[v.uv[0], v.uv[1]]);
        for c in v.color {
            self.col.push((c.clamp(0.0, 1.0) * 255.0).round() as u8);
        }
    }

    /// First index of the next primitive. The index buffer is u16, so a
    /// build caps out at 65 536 vertices; appending `add` more past that
    /// would wrap and corrupt the mesh.
    fn base_index(&self, add: usize) -> u16 {
        let n = self.vertex_count();
        debug_assert!(
            n + add <= u16::MAX as usize + 1,
            "mesh build overflows u16 index range ({} vertices)",
            n + add
        );
        n as u16
    }
}

impl MeshSink for MeshBuild {
    fn quad(&mut self, v: [Vertex; 4]) {
        let base = self.base_index(4);
        for vert in &v {
            self.push_vertex(vert);
        }
        self.idx
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    fn triangle(&mut self, v: [Vertex; 3]) {
        let base = self.base_index(3);
        for vert in &v {
            self.push_vertex(vert);
        }
        self.idx.extend_from_slice(&[base, base + 1, base + 2]);
    }
}
