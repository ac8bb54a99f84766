use super::placement::Anchor;

/// Easing curves understood by the placement tween.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Ease {
    Linear,
    Power2In,
    Power2Out,
    #[default]
    Power2InOut,
}

impl Ease {
    /// Map linear progress in [0, 1] to eased progress in [0, 1].
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2In => t * t,
            Ease::Power2Out => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::Power2InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Ease::Linear => "none",
            Ease::Power2In => "power2.in",
            Ease::Power2Out => "power2.out",
            Ease::Power2InOut => "power2.inOut",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" | "linear" => Some(Ease::Linear),
            "power2.in" => Some(Ease::Power2In),
            "power2.out" | "power2" => Some(Ease::Power2Out),
            "power2.inOut" => Some(Ease::Power2InOut),
            _ => None,
        }
    }
}

/// A fixed-duration move between two anchors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: Anchor,
    to: Anchor,
    started_ms: f64,
    duration_ms: f64,
    ease: Ease,
}

impl Tween {
    pub fn new(from: Anchor, to: Anchor, started_ms: f64, duration_ms: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            started_ms,
            duration_ms: duration_ms.max(0.0),
            ease,
        }
    }

    pub fn target(&self) -> Anchor {
        self.to
    }

    pub fn ease(&self) -> Ease {
        self.ease
    }

    /// Linear progress in [0, 1] at `now_ms`.
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.started_ms) / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    pub fn sample(&self, now_ms: f64) -> Anchor {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            return self.to;
        }
        self.from.lerp(self.to, self.ease.apply(t))
    }
}

/// Placement of one element with at most one tween in flight.
///
/// Starting a tween overwrites whatever tween is running; the new one departs
/// from the value the element currently shows.
#[derive(Clone, Debug)]
pub struct TweenSlot {
    current: Anchor,
    active: Option<Tween>,
}

impl TweenSlot {
    pub fn new(at: Anchor) -> Self {
        Self {
            current: at,
            active: None,
        }
    }

    pub fn current(&self) -> Anchor {
        self.current
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn target(&self) -> Option<Anchor> {
        self.active.map(|t| t.target())
    }

    /// Jump straight to `anchor`, dropping any tween in flight.
    pub fn set(&mut self, anchor: Anchor) {
        self.active = None;
        self.current = anchor;
    }

    pub fn start(&mut self, to: Anchor, duration_ms: f64, ease: Ease, now_ms: f64) {
        self.advance(now_ms);
        self.active = Some(Tween::new(self.current, to, now_ms, duration_ms, ease));
    }

    /// Sample the running tween at `now_ms`, retiring it once finished.
    pub fn advance(&mut self, now_ms: f64) -> Anchor {
        if let Some(tween) = self.active {
            self.current = tween.sample(now_ms);
            if tween.is_finished(now_ms) {
                self.active = None;
            }
        }
        self.current
    }

    pub fn kill(&mut self) {
        self.active = None;
    }
}
