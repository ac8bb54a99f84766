use super::error::{ConfigError, ConfigResult};
use glam::{EulerRot, Mat4, Vec3};

/// Orientation and vertical placement of the showcased model.
///
/// Angles are radians. `yaw` turns about Y, `pitch` about X and `roll` about Z;
/// `vertical_offset` is in scene units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
    pub vertical_offset: f32,
}

impl Pose {
    pub const fn new(yaw: f32, pitch: f32, roll: f32, vertical_offset: f32) -> Self {
        Self {
            yaw,
            pitch,
            roll,
            vertical_offset,
        }
    }

    /// Build from `[yaw, pitch, roll, vertical_offset]`.
    pub const fn from_array(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.yaw, self.pitch, self.roll, self.vertical_offset]
    }

    /// Component-wise linear interpolation. `t == 1.0` yields `to` exactly.
    pub fn lerp(self, to: Pose, t: f32) -> Pose {
        Pose {
            yaw: lerp(self.yaw, to.yaw, t),
            pitch: lerp(self.pitch, to.pitch, t),
            roll: lerp(self.roll, to.roll, t),
            vertical_offset: lerp(self.vertical_offset, to.vertical_offset, t),
        }
    }

    /// One step of the exponential approach: `self + (target - self) * factor`.
    pub fn approach(self, target: Pose, factor: f32) -> Pose {
        Pose {
            yaw: self.yaw + (target.yaw - self.yaw) * factor,
            pitch: self.pitch + (target.pitch - self.pitch) * factor,
            roll: self.roll + (target.roll - self.roll) * factor,
            vertical_offset: self.vertical_offset
                + (target.vertical_offset - self.vertical_offset) * factor,
        }
    }

    /// Largest absolute per-field difference.
    pub fn distance(&self, other: &Pose) -> f32 {
        (self.yaw - other.yaw)
            .abs()
            .max((self.pitch - other.pitch).abs())
            .max((self.roll - other.roll).abs())
            .max((self.vertical_offset - other.vertical_offset).abs())
    }

    /// Model matrix for the renderer: translate, then rotate (X, Y, Z order), then scale.
    pub fn model_matrix(&self, scale: f32) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, self.vertical_offset, 0.0))
            * Mat4::from_euler(EulerRot::XYZ, self.pitch, self.yaw, self.roll)
            * Mat4::from_scale(Vec3::splat(scale))
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    if t >= 1.0 {
        b
    } else {
        a + (b - a) * t
    }
}

/// Ordered poses, one per narrative section. Always holds at least two poses.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeTable {
    frames: Vec<Pose>,
}

impl KeyframeTable {
    pub fn new(frames: Vec<Pose>) -> ConfigResult<Self> {
        if frames.len() < 2 {
            return Err(ConfigError::TooFewEntries {
                table: "keyframe",
                found: frames.len(),
            });
        }
        Ok(Self { frames })
    }

    pub fn from_arrays(rows: &[[f32; 4]]) -> ConfigResult<Self> {
        Self::new(rows.iter().copied().map(Pose::from_array).collect())
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Pose> {
        self.frames.get(index)
    }

    pub fn frames(&self) -> &[Pose] {
        &self.frames
    }

    /// Piecewise-linear pose for a scroll progress. Out-of-range progress is clamped.
    pub fn target_pose(&self, progress: f32) -> Pose {
        let (segment, t) = segment_at(progress, self.frames.len());
        self.frames[segment].lerp(self.frames[segment + 1], t)
    }
}

/// Map progress onto `(segment_index, t)` for a table of `len >= 2` entries.
///
/// `segment_index` lies in `[0, len - 2]`; `t` lies in `[0, 1)` except at
/// `progress == 1`, where it is exactly `1.0`. NaN progress is treated as 0.
pub fn segment_at(progress: f32, len: usize) -> (usize, f32) {
    let segments = len.saturating_sub(1).max(1);
    let p = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    let scaled = p * segments as f32;
    let index = (scaled.floor() as usize).min(segments - 1);
    (index, scaled - index as f32)
}

/// Free-function form of [`KeyframeTable::target_pose`].
#[inline]
pub fn target_pose(progress: f32, table: &KeyframeTable) -> Pose {
    table.target_pose(progress)
}

/// Owns the live pose and smooths it toward a target once per rendered frame.
#[derive(Clone, Debug)]
pub struct PoseDamper {
    live: Pose,
    factor: f32,
    last_frame: Option<u64>,
}

impl PoseDamper {
    pub fn new(initial: Pose, factor: f32) -> ConfigResult<Self> {
        if !(factor > 0.0 && factor < 1.0) {
            return Err(ConfigError::InvalidDamping(factor));
        }
        Ok(Self {
            live: initial,
            factor,
            last_frame: None,
        })
    }

    pub fn live(&self) -> Pose {
        self.live
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    /// Advance the live pose for `frame`. Repeated calls for the same frame
    /// leave the pose untouched.
    pub fn step(&mut self, frame: u64, target: Pose) -> Pose {
        if self.last_frame != Some(frame) {
            self.last_frame = Some(frame);
            self.live = self.live.approach(target, self.factor);
        }
        self.live
    }
}

/// Frames needed for a constant-target approach to shrink `initial_distance`
/// below `epsilon`: `ceil(ln(epsilon / initial) / ln(1 - factor))`.
pub fn settle_steps(initial_distance: f32, epsilon: f32, factor: f32) -> u32 {
    if epsilon <= 0.0 {
        return u32::MAX;
    }
    if initial_distance <= epsilon {
        return 0;
    }
    let steps = (epsilon / initial_distance).ln() / (1.0 - factor).ln();
    steps.ceil().max(0.0) as u32
}
