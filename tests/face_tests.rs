// Host-side tests for the face table, die mesh and placeholder artwork.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod face {
    include!("../src/core/face.rs");
}
mod mesh {
    include!("../src/core/mesh.rs");
}
mod placeholder {
    include!("../src/core/placeholder.rs");
}

use constants::DIE_EDGE;
use face::*;
use glam::Vec3;
use mesh::*;
use placeholder::*;
use std::collections::HashSet;
use std::f32::consts::{FRAC_PI_2, PI};

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-5
}

#[test]
fn face_value_rejects_out_of_range() {
    assert!(FaceValue::new(0).is_none());
    assert!(FaceValue::new(7).is_none());
    for v in 1..=6 {
        assert_eq!(FaceValue::new(v).map(FaceValue::get), Some(v));
    }
}

#[test]
fn orientation_table_matches_fixed_values() {
    let expect = [
        (1, Orientation::new(0.0, 0.0, 0.0)),
        (2, Orientation::new(0.0, FRAC_PI_2, 0.0)),
        (3, Orientation::new(FRAC_PI_2, 0.0, 0.0)),
        (4, Orientation::new(-FRAC_PI_2, 0.0, 0.0)),
        (5, Orientation::new(0.0, -FRAC_PI_2, 0.0)),
        (6, Orientation::new(PI, 0.0, 0.0)),
    ];
    for (v, o) in expect {
        let face = FaceValue::new(v).expect("valid face");
        assert_eq!(face.orientation(), o, "face {v}");
    }
}

#[test]
fn orientation_table_is_bijective() {
    let distinct: HashSet<[u32; 3]> = FaceValue::ALL
        .iter()
        .map(|f| {
            let o = f.orientation();
            [o.x.to_bits(), o.y.to_bits(), o.z.to_bits()]
        })
        .collect();
    assert_eq!(distinct.len(), 6);
}

#[test]
fn each_orientation_turns_its_face_towards_the_camera() {
    for face in FaceValue::ALL {
        let turned = face.orientation().to_quat() * face.normal();
        assert!(approx(turned, Vec3::Z), "face {face} -> {turned:?}");
    }
}

#[test]
fn opposite_faces_sum_to_seven() {
    for face in FaceValue::ALL {
        let opposite = FaceValue::new(7 - face.get()).expect("valid face");
        assert!(approx(face.normal(), -opposite.normal()));
    }
}

#[test]
fn mesh_has_four_vertices_and_two_triangles_per_side() {
    let mesh = build_die_mesh();
    assert_eq!(mesh.vertices.len(), 24);
    assert_eq!(mesh.indices.len(), 36);
    assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
}

#[test]
fn mesh_sides_carry_their_face_layer_and_normal() {
    let mesh = build_die_mesh();
    let h = DIE_EDGE * 0.5;
    for face in FaceValue::ALL {
        let side: Vec<_> = mesh
            .vertices
            .iter()
            .filter(|v| v.layer == face.index() as u32)
            .collect();
        assert_eq!(side.len(), 4);
        for v in side {
            let n = Vec3::from_array(v.normal);
            let p = Vec3::from_array(v.position);
            assert!(approx(n, face.normal()));
            assert!((p.dot(n) - h).abs() < 1e-5);
            assert!(p.abs().max_element() <= h + 1e-5);
        }
    }
}

#[test]
fn mesh_triangles_wind_counter_clockwise_from_outside() {
    let mesh = build_die_mesh();
    for tri in mesh.indices.chunks(3) {
        let a = &mesh.vertices[tri[0] as usize];
        let b = &mesh.vertices[tri[1] as usize];
        let c = &mesh.vertices[tri[2] as usize];
        let pa = Vec3::from_array(a.position);
        let pb = Vec3::from_array(b.position);
        let pc = Vec3::from_array(c.position);
        let n = (pb - pa).cross(pc - pa);
        assert!(n.dot(Vec3::from_array(a.normal)) > 0.0);
    }
}

#[test]
fn settled_faces_read_upright() {
    for face in FaceValue::ALL {
        let (right, up, _) = face_basis(face);
        let q = face.orientation().to_quat();
        assert!(approx(q * right, Vec3::X), "face {face}");
        assert!(approx(q * up, Vec3::Y), "face {face}");
    }
}

#[test]
fn placeholder_pips_match_face_value() {
    for face in FaceValue::ALL {
        assert_eq!(pip_centers(face).len(), face.get() as usize);
    }
}

#[test]
fn placeholder_image_is_tightly_packed_rgba() {
    let size = 64;
    for face in FaceValue::ALL {
        assert_eq!(
            placeholder_face_rgba(face, size).len(),
            (size * size * 4) as usize
        );
    }
}

#[test]
fn placeholder_draws_pips_at_their_centers() {
    let size = 64u32;
    let pixel = |img: &[u8], u: f32, v: f32| {
        let px = (u * size as f32) as usize;
        let py = (v * size as f32) as usize;
        let i = (py * size as usize + px) * 4;
        [img[i], img[i + 1], img[i + 2]]
    };
    for face in FaceValue::ALL {
        let img = placeholder_face_rgba(face, size);
        let background = pixel(&img, 0.0, 0.0);
        for [u, v] in pip_centers(face) {
            assert_ne!(pixel(&img, *u, *v), background, "face {face} pip {u},{v}");
        }
        // the middle pip exists only on odd faces
        let center_is_pip = pixel(&img, 0.5, 0.5) != background;
        assert_eq!(center_is_pip, face.get() % 2 == 1, "face {face}");
    }
}
