use brick_types::{BrickDescriptor, BrickType};
use brickmesh::{build_mesh, obj::write_obj};

fn count_prefix(text: &str, prefix: &str) -> usize {
    text.lines().filter(|l| l.starts_with(prefix)).count()
}

#[test]
fn descriptor_to_obj_counts() {
    let d = BrickDescriptor::from_toml_str(
        "brick_type = \"brick_1x1\"\ncolor = 16711680\nrotation_y_deg = 90.0\n",
    )
    .unwrap();
    let mesh = build_mesh(&d);
    // 14 quads + 8 triangles
    assert_eq!(mesh.len(), 22);

    let mut out = Vec::new();
    write_obj(&mut out, d.brick_type.name(), &mesh).unwrap();
    let text = String::from_utf8(out).unwrap();

    let n_vertices = 14 * 4 + 8 * 3;
    assert_eq!(count_prefix(&text, "v "), n_vertices);
    assert_eq!(count_prefix(&text, "vt "), n_vertices);
    assert_eq!(count_prefix(&text, "vn "), n_vertices);
    assert_eq!(count_prefix(&text, "f "), 22);
    assert!(text.starts_with("o brick_1x1\n"));
}

#[test]
fn rotation_is_applied_by_the_driver() {
    let mut d = BrickDescriptor::new(BrickType::Slope);
    let at_zero = build_mesh(&d);
    d.rotation_y_deg = 180.0;
    let turned = build_mesh(&d);

    // The slope's connecting face flips from -z to +z under a half turn
    let n0 = at_zero[12].normal();
    let n1 = turned[12].normal();
    assert!(n0.z < 0.0 && n1.z > 0.0);
    assert!((n0.z + n1.z).abs() < 1e-5);
    assert!((n0.y - n1.y).abs() < 1e-5);
}

#[test]
fn elongated_brick_swings_outside_the_unit_cell() {
    let mut d = BrickDescriptor::new(BrickType::Brick2x4);
    d.rotation_y_deg = 90.0;
    let mesh = build_mesh(&d);
    // Rotating about (0.5, 0, 0.5) sends z in [0,2] to x in [-1, 1]
    let min_x = mesh
        .iter()
        .flat_map(|p| p.vertices())
        .map(|v| v.pos.x)
        .fold(f32::MAX, f32::min);
    assert!(min_x < -0.9);
}
