use brick_geom::{Aabb, Vec3};
use brick_shape::{BASE_TOP, STUD_TOP, stud_grid};
use proptest::prelude::*;

proptest! {
    // One stud per grid cell
    #[test]
    fn grid_count(w in 1u32..=8, l in 1u32..=8) {
        prop_assert_eq!(stud_grid(w, l).count(), (w * l) as usize);
    }

    // Every stud stays inside the footprint the grid was asked for
    #[test]
    fn grid_inside_footprint(w in 1u32..=8, l in 1u32..=8) {
        let footprint = Aabb::new(
            Vec3::new(0.0, BASE_TOP, 0.0),
            Vec3::new(w as f32 * 0.5, STUD_TOP, l as f32 * 0.5),
        );
        for b in stud_grid(w, l) {
            prop_assert!(footprint.contains_aabb(b));
        }
    }

    // Studs never overlap each other
    #[test]
    fn grid_pairwise_disjoint(w in 1u32..=6, l in 1u32..=6) {
        let boxes: Vec<Aabb> = stud_grid(w, l).collect();
        for (i, a) in boxes.iter().enumerate() {
            for b in boxes.iter().skip(i + 1) {
                let overlap_x = a.min.x < b.max.x && b.min.x < a.max.x;
                let overlap_z = a.min.z < b.max.z && b.min.z < a.max.z;
                prop_assert!(!(overlap_x && overlap_z));
            }
        }
    }

    // All studs share the standard height band
    #[test]
    fn grid_height_band(w in 1u32..=8, l in 1u32..=8) {
        for b in stud_grid(w, l) {
            prop_assert_eq!(b.min.y, BASE_TOP);
            prop_assert_eq!(b.max.y, STUD_TOP);
        }
    }
}
