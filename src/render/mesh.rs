use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

/// Colours for the phone's surfaces.
#[derive(Copy, Clone, Debug)]
pub struct PhonePalette {
    pub body: [f32; 3],
    pub screen: [f32; 3],
    pub bump: [f32; 3],
}

/// Indexed triangle list, counter-clockwise front faces.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

// (normal, u, v) with u x v == normal, so corners wind counter-clockwise seen from outside
const FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::NEG_Z, Vec3::Y),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::X, Vec3::NEG_Z),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
];

impl Mesh {
    /// Append an axis-aligned box. `face_color` picks a colour per outward normal.
    pub fn push_box(&mut self, center: Vec3, half: Vec3, face_color: impl Fn(Vec3) -> [f32; 3]) {
        for (n, u, v) in FACES {
            let base = self.vertices.len() as u16;
            let color = face_color(n);
            for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
                let p = center + (n + u * su + v * sv) * half;
                self.vertices.push(Vertex {
                    position: p.to_array(),
                    normal: n.to_array(),
                    color,
                });
            }
            self.indices
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
    }
}

/// Phone-proportioned slab centred at the origin: screen on +Z, camera
/// plateau on the back near the top-left corner (seen from behind).
pub fn phone_mesh(
    size: [f32; 3],
    bump_size: [f32; 3],
    bump_inset: f32,
    palette: PhonePalette,
) -> Mesh {
    let mut mesh = Mesh::default();
    let half = Vec3::from_array(size) * 0.5;
    mesh.push_box(Vec3::ZERO, half, |n| {
        if n == Vec3::Z {
            palette.screen
        } else {
            palette.body
        }
    });

    let bump_half = Vec3::from_array(bump_size) * 0.5;
    let bump_center = Vec3::new(
        half.x - bump_inset - bump_half.x,
        half.y - bump_inset - bump_half.y,
        -half.z - bump_half.z,
    );
    mesh.push_box(bump_center, bump_half, |_| palette.bump);
    mesh
}
