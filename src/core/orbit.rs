use super::constants::{ORBIT_POLAR_MARGIN, ORBIT_ROTATE_SPEED};
use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// User-driven camera orbit around the model.
///
/// `azimuth` turns about Y and is unbounded (kept in `[-PI, PI)`); `polar` is
/// measured from +Y and clamped to `[min_polar, max_polar]`. No zoom or pan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orbit {
    azimuth: f32,
    polar: f32,
    min_polar: f32,
    max_polar: f32,
    rotate_speed: f32,
}

impl Default for Orbit {
    fn default() -> Self {
        Self::new(
            FRAC_PI_2 - ORBIT_POLAR_MARGIN,
            FRAC_PI_2 + ORBIT_POLAR_MARGIN,
            ORBIT_ROTATE_SPEED,
        )
    }
}

impl Orbit {
    /// Start on the horizon, looking down -Z.
    pub fn new(min_polar: f32, max_polar: f32, rotate_speed: f32) -> Self {
        let (min_polar, max_polar) = if min_polar <= max_polar {
            (min_polar, max_polar)
        } else {
            (max_polar, min_polar)
        };
        let mut orbit = Self {
            azimuth: 0.0,
            polar: FRAC_PI_2,
            min_polar: min_polar.clamp(0.0, PI),
            max_polar: max_polar.clamp(0.0, PI),
            rotate_speed,
        };
        orbit.set_polar(FRAC_PI_2);
        orbit
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn polar_range(&self) -> (f32, f32) {
        (self.min_polar, self.max_polar)
    }

    pub fn set_polar(&mut self, polar: f32) {
        if polar.is_nan() {
            return;
        }
        self.polar = polar.clamp(self.min_polar, self.max_polar);
    }

    pub fn set_azimuth(&mut self, azimuth: f32) {
        if azimuth.is_finite() {
            self.azimuth = (azimuth + PI).rem_euclid(TAU) - PI;
        }
    }

    /// Apply a pointer drag of `(dx, dy)` CSS pixels on an element `height` pixels
    /// tall. A drag across the full height turns a full revolution.
    pub fn rotate(&mut self, dx: f64, dy: f64, height: f64) {
        if !(height > 0.0) {
            return;
        }
        let per_px = TAU * self.rotate_speed / height as f32;
        self.set_azimuth(self.azimuth - dx as f32 * per_px);
        self.set_polar(self.polar - dy as f32 * per_px);
    }

    pub fn reset(&mut self) {
        self.azimuth = 0.0;
        self.set_polar(FRAC_PI_2);
    }

    /// Unit vector from the orbit target toward the eye.
    pub fn eye_direction(&self) -> Vec3 {
        let (sin_p, cos_p) = self.polar.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        Vec3::new(sin_p * sin_a, cos_p, sin_p * cos_a)
    }
}

/// Tracks the one pointer allowed to drive the orbit.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrbitDrag {
    pointer: Option<i32>,
    last: (f64, f64),
}

impl OrbitDrag {
    pub fn is_active(&self) -> bool {
        self.pointer.is_some()
    }

    /// Returns false when another pointer already owns the drag.
    pub fn begin(&mut self, pointer: i32, x: f64, y: f64) -> bool {
        if self.pointer.is_some_and(|p| p != pointer) {
            return false;
        }
        self.pointer = Some(pointer);
        self.last = (x, y);
        true
    }

    /// Movement since the previous position of the owning pointer.
    pub fn moved(&mut self, pointer: i32, x: f64, y: f64) -> Option<(f64, f64)> {
        if self.pointer != Some(pointer) {
            return None;
        }
        let delta = (x - self.last.0, y - self.last.1);
        self.last = (x, y);
        Some(delta)
    }

    pub fn end(&mut self, pointer: i32) -> bool {
        if self.pointer != Some(pointer) {
            return false;
        }
        self.pointer = None;
        true
    }
}
