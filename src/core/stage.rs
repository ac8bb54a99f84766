use super::constants::{
    DESKTOP_ANCHORS, DESKTOP_POSES, MOBILE_ANCHORS, MOBILE_POSES, PLACEMENT_TWEEN_MS,
    POSE_DAMPING_PER_FRAME,
};
use super::error::ConfigResult;
use super::placement::{check_variant_lengths, AnchorTable, ElementMover, PlacementController};
use super::pose::{KeyframeTable, Pose, PoseDamper};
use super::scroll::{Direction, ScrollListener};
use super::tween::Ease;
use super::viewport::{ByViewport, ScaleRule, ViewportClass};

/// Everything a stage needs besides its collaborators.
#[derive(Clone, Debug)]
pub struct StageConfig {
    pub keyframes: ByViewport<KeyframeTable>,
    pub anchors: ByViewport<AnchorTable>,
    pub damping: f32,
    pub scale_rule: ScaleRule,
    pub tween_duration_ms: f64,
    pub ease: Ease,
}

impl StageConfig {
    /// Tables and tuning shipped with the page.
    pub fn compiled() -> ConfigResult<Self> {
        Ok(Self {
            keyframes: ByViewport::new(
                KeyframeTable::from_arrays(&DESKTOP_POSES)?,
                KeyframeTable::from_arrays(&MOBILE_POSES)?,
            ),
            anchors: ByViewport::new(
                AnchorTable::from_arrays(&DESKTOP_ANCHORS)?,
                AnchorTable::from_arrays(&MOBILE_ANCHORS)?,
            ),
            damping: POSE_DAMPING_PER_FRAME,
            scale_rule: ScaleRule::default(),
            tween_duration_ms: PLACEMENT_TWEEN_MS,
            ease: Ease::Power2InOut,
        })
    }
}

/// What the renderer consumes each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    pub pose: Pose,
    pub scale: f32,
}

/// Scroll-driven choreography: pose interpolation plus canvas placement.
pub struct Stage<M> {
    keyframes: ByViewport<KeyframeTable>,
    scale_rule: ScaleRule,
    class: ViewportClass,
    progress: f32,
    damper: PoseDamper,
    placement: PlacementController<M>,
}

impl<M: ElementMover> Stage<M> {
    pub fn new(
        config: StageConfig,
        section_count: usize,
        class: ViewportClass,
    ) -> ConfigResult<Self> {
        let StageConfig {
            keyframes,
            anchors,
            damping,
            scale_rule,
            tween_duration_ms,
            ease,
        } = config;
        check_variant_lengths(
            "keyframe",
            keyframes.desktop.len(),
            keyframes.mobile.len(),
            section_count,
        )?;
        let placement =
            PlacementController::new(anchors, section_count, tween_duration_ms, ease)?;
        let initial = keyframes.select(class).target_pose(0.0);
        let damper = PoseDamper::new(initial, damping)?;
        Ok(Self {
            keyframes,
            scale_rule,
            class,
            progress: 0.0,
            damper,
            placement,
        })
    }

    /// Attach `mover`. Any mover from an earlier mount is cancelled and returned.
    pub fn mount(&mut self, mover: M) -> Option<M> {
        let previous = self.placement.mount(mover, self.class);
        log::info!(
            "[stage] mounted: {} sections, {} tables",
            self.keyframes.desktop.len(),
            self.class.label()
        );
        previous
    }

    pub fn unmount(&mut self) -> Option<M> {
        let mover = self.placement.unmount();
        if mover.is_some() {
            log::info!("[stage] unmounted");
        }
        mover
    }

    pub fn is_mounted(&self) -> bool {
        self.placement.is_mounted()
    }

    pub fn class(&self) -> ViewportClass {
        self.class
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn placement(&self) -> &PlacementController<M> {
        &self.placement
    }

    pub fn placement_mut(&mut self) -> &mut PlacementController<M> {
        &mut self.placement
    }

    /// Target pose for the current progress, from the active class's table only.
    pub fn target_pose(&self) -> Pose {
        self.keyframes.select(self.class).target_pose(self.progress)
    }

    /// The pose currently on screen.
    pub fn read_pose(&self) -> Pose {
        self.damper.live()
    }

    /// Per-frame update. `viewport_width` is the visible scene width in scene units.
    pub fn frame(&mut self, frame_index: u64, viewport_width: f32) -> FrameOutput {
        let target = self.target_pose();
        let pose = self.damper.step(frame_index, target);
        FrameOutput {
            pose,
            scale: self.scale_rule.scale(viewport_width, self.class),
        }
    }
}

impl<M: ElementMover> ScrollListener for Stage<M> {
    fn on_scroll_progress(&mut self, progress: f32) {
        if !self.is_mounted() {
            return;
        }
        self.progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
    }

    fn on_section_enter(&mut self, index: usize, direction: Direction) {
        if !self.is_mounted() {
            return;
        }
        self.placement.on_section_enter(index, direction);
    }

    fn on_viewport_change(&mut self, class: ViewportClass) {
        if !self.is_mounted() || class == self.class {
            return;
        }
        log::info!(
            "[stage] viewport {} -> {}",
            self.class.label(),
            class.label()
        );
        self.class = class;
        self.placement.on_viewport_change(class);
    }
}
