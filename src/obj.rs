//! Minimal Wavefront OBJ writer for emitted brick primitives.

use std::io::{self, Write};

use brick_mesh::Primitive;

/// Writes `mesh` as OBJ: one `v`/`vt`/`vn` triple per vertex, quads as
/// 4-vertex faces and triangles as 3-vertex faces. OBJ indices are
/// 1-based and shared across the three streams here, so every face
/// references `i/i/i`.
pub fn write_obj(w: &mut impl Write, name: &str, mesh: &[Primitive]) -> io::Result<()> {
    writeln!(w, "o {}", name)?;
    for p in mesh {
        for v in p.vertices() {
            writeln!(w, "v {} {} {}", v.pos.x, v.pos.y, v.pos.z)?;
        }
    }
    for p in mesh {
        for v in p.vertices() {
            writeln!(w, "vt {} {}", v.uv[0], v.uv[1])?;
        }
    }
    for p in mesh {
        for v in p.vertices() {
            writeln!(w, "vn {} {} {}", v.normal.x, v.normal.y, v.normal.z)?;
        }
    }
    let mut next = 1usize;
    for p in mesh {
        let n = p.vertices().len();
        write!(w, "f")?;
        for i in next..next + n {
            write!(w, " {i}/{i}/{i}")?;
        }
        writeln!(w)?;
        next += n;
    }
    Ok(())
}
