use super::constants::{CAMERA_FOVY_DEG, CAMERA_Z, CAMERA_ZFAR, CAMERA_ZNEAR};
use super::orbit::Orbit;
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Fixed stage camera looking down -Z at the origin.
    pub fn stage(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: sanitize_aspect(aspect),
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn set_viewport_size(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = sanitize_aspect(width as f32 / height as f32);
        }
    }

    /// Move the eye onto `orbit`, keeping its distance to the target.
    pub fn apply_orbit(&mut self, orbit: &Orbit) {
        let distance = (self.eye - self.target).length();
        self.eye = self.target + orbit.eye_direction() * distance;
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Height of the view frustum at the target plane, in scene units.
    pub fn visible_height(&self) -> f32 {
        let distance = (self.eye - self.target).length();
        2.0 * distance * (self.fovy_radians * 0.5).tan()
    }

    /// Width of the view frustum at the target plane, in scene units.
    pub fn visible_width(&self) -> f32 {
        self.visible_height() * self.aspect
    }
}

#[inline]
fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}
