use super::face::FaceValue;

// Stand-in face artwork used when a face texture cannot be loaded.

const FACE_RGBA: [u8; 4] = [246, 243, 236, 255];
const PIP_RGBA: [u8; 4] = [28, 30, 38, 255];
const PIP_RADIUS: f32 = 0.09; // fraction of the face edge

const LO: f32 = 0.25;
const MID: f32 = 0.5;
const HI: f32 = 0.75;

/// Pip centers in unit face coordinates (u right, v down), standard die layout.
pub fn pip_centers(face: FaceValue) -> &'static [[f32; 2]] {
    match face.get() {
        1 => &[[MID, MID]],
        2 => &[[LO, LO], [HI, HI]],
        3 => &[[LO, LO], [MID, MID], [HI, HI]],
        4 => &[[LO, LO], [HI, LO], [LO, HI], [HI, HI]],
        5 => &[[LO, LO], [HI, LO], [MID, MID], [LO, HI], [HI, HI]],
        _ => &[
            [LO, LO],
            [HI, LO],
            [LO, MID],
            [HI, MID],
            [LO, HI],
            [HI, HI],
        ],
    }
}

/// Tightly packed `size * size` RGBA8 image of the face.
pub fn placeholder_face_rgba(face: FaceValue, size: u32) -> Vec<u8> {
    let size = size.max(1);
    let pips = pip_centers(face);
    let r2 = PIP_RADIUS * PIP_RADIUS;
    let inv = 1.0 / size as f32;
    let mut out = Vec::with_capacity((size * size * 4) as usize);
    for py in 0..size {
        let v = (py as f32 + 0.5) * inv;
        for px in 0..size {
            let u = (px as f32 + 0.5) * inv;
            let on_pip = pips.iter().any(|[cu, cv]| {
                let du = u - cu;
                let dv = v - cv;
                du * du + dv * dv <= r2
            });
            out.extend_from_slice(if on_pip { &PIP_RGBA } else { &FACE_RGBA });
        }
    }
    out
}
