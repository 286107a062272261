use super::constants::{DIE_EDGE, FACE_COUNT};
use super::face::FaceValue;
use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DieVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    pub layer: u32,
}

pub struct DieMesh {
    pub vertices: Vec<DieVertex>,
    pub indices: Vec<u16>,
}

/// Per-side basis (right, up, normal) in die-local space such that the
/// face's settled orientation maps it onto world (+X, +Y, +Z). Faces read
/// upright once the roll settles.
pub fn face_basis(face: FaceValue) -> (Vec3, Vec3, Vec3) {
    let inv = face.orientation().to_quat().inverse();
    (inv * Vec3::X, inv * Vec3::Y, inv * Vec3::Z)
}

/// 24-vertex cube, four vertices per side so each side gets its own normal and texture layer.
pub fn build_die_mesh() -> DieMesh {
    let h = DIE_EDGE * 0.5;
    let mut vertices = Vec::with_capacity(FACE_COUNT * 4);
    let mut indices = Vec::with_capacity(FACE_COUNT * 6);
    for face in FaceValue::ALL {
        let (right, up, normal) = face_basis(face);
        let center = normal * h;
        let base = vertices.len() as u16;
        // counter-clockwise when seen from outside: bl, br, tr, tl
        let corners = [
            (-1.0, -1.0, [0.0, 1.0]),
            (1.0, -1.0, [1.0, 1.0]),
            (1.0, 1.0, [1.0, 0.0]),
            (-1.0, 1.0, [0.0, 0.0]),
        ];
        for (sr, su, uv) in corners {
            let p = center + right * (sr * h) + up * (su * h);
            vertices.push(DieVertex {
                position: p.to_array(),
                normal: normal.to_array(),
                uv,
                layer: face.index() as u32,
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    DieMesh { vertices, indices }
}
