use super::error::{ConfigError, ConfigResult};
use super::scroll::Direction;
use super::tween::Ease;
use super::viewport::{ByViewport, ViewportClass};

/// Screen placement target for the fixed element hosting the 3D scene.
///
/// `top_percent` is a viewport-height percentage, `left_percent` a width
/// percentage, and `centering_offset_percent` a translation relative to the
/// element's own width (usually -50 to center it on `left_percent`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Anchor {
    pub top_percent: f32,
    pub left_percent: f32,
    pub centering_offset_percent: f32,
}

impl Anchor {
    pub const fn new(top_percent: f32, left_percent: f32, centering_offset_percent: f32) -> Self {
        Self {
            top_percent,
            left_percent,
            centering_offset_percent,
        }
    }

    /// Build from `[top, left, centering_offset]`.
    pub const fn from_array(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    pub fn lerp(self, to: Anchor, t: f32) -> Anchor {
        let mix = |a: f32, b: f32| if t >= 1.0 { b } else { a + (b - a) * t };
        Anchor {
            top_percent: mix(self.top_percent, to.top_percent),
            left_percent: mix(self.left_percent, to.left_percent),
            centering_offset_percent: mix(
                self.centering_offset_percent,
                to.centering_offset_percent,
            ),
        }
    }
}

/// Ordered anchors, one per narrative section. Always holds at least two.
#[derive(Clone, Debug, PartialEq)]
pub struct AnchorTable {
    anchors: Vec<Anchor>,
}

impl AnchorTable {
    pub fn new(anchors: Vec<Anchor>) -> ConfigResult<Self> {
        if anchors.len() < 2 {
            return Err(ConfigError::TooFewEntries {
                table: "anchor",
                found: anchors.len(),
            });
        }
        Ok(Self { anchors })
    }

    pub fn from_arrays(rows: &[[f32; 3]]) -> ConfigResult<Self> {
        Self::new(rows.iter().copied().map(Anchor::from_array).collect())
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Anchor> {
        self.anchors.get(index)
    }
}

/// Outbound request to move the hosting element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveRequest {
    pub anchor: Anchor,
    pub duration_ms: f64,
    pub ease: Ease,
}

/// Whatever animates the hosting element's position.
///
/// A new `request_move` must supersede any move still in flight on the same
/// element.
pub trait ElementMover {
    /// Place the element immediately, without animation.
    fn place(&mut self, anchor: Anchor);
    fn request_move(&mut self, request: MoveRequest);
    /// Drop any pending or running move.
    fn cancel(&mut self);
}

/// Check that both variants of a table have `section_count` entries.
pub fn check_variant_lengths(
    table: &'static str,
    desktop: usize,
    mobile: usize,
    section_count: usize,
) -> ConfigResult<()> {
    if desktop != mobile {
        return Err(ConfigError::VariantLengthMismatch {
            table,
            desktop,
            mobile,
        });
    }
    if desktop != section_count {
        return Err(ConfigError::SectionCountMismatch {
            table,
            expected: section_count,
            found: desktop,
        });
    }
    Ok(())
}

/// Moves the hosting element to the active section's anchor.
pub struct PlacementController<M> {
    tables: ByViewport<AnchorTable>,
    class: ViewportClass,
    duration_ms: f64,
    ease: Ease,
    mover: Option<M>,
    active: Option<usize>,
}

impl<M: ElementMover> PlacementController<M> {
    pub fn new(
        tables: ByViewport<AnchorTable>,
        section_count: usize,
        duration_ms: f64,
        ease: Ease,
    ) -> ConfigResult<Self> {
        check_variant_lengths(
            "anchor",
            tables.desktop.len(),
            tables.mobile.len(),
            section_count,
        )?;
        if !(duration_ms.is_finite() && duration_ms > 0.0) {
            return Err(ConfigError::InvalidDuration(duration_ms));
        }
        Ok(Self {
            tables,
            class: ViewportClass::default(),
            duration_ms,
            ease,
            mover: None,
            active: None,
        })
    }

    /// Attach the mover and place the element at the first section's anchor.
    /// A mover that was already attached is cancelled and handed back.
    pub fn mount(&mut self, mut mover: M, class: ViewportClass) -> Option<M> {
        let previous = self.unmount();
        self.class = class;
        let first = self.table().get(0).copied().unwrap_or_default();
        mover.place(first);
        self.mover = Some(mover);
        self.active = Some(0);
        log::debug!("[placement] mounted ({}) at section 0", class.label());
        previous
    }

    /// Cancel pending moves and hand the mover back. Later events are ignored.
    pub fn unmount(&mut self) -> Option<M> {
        self.active = None;
        let mut mover = self.mover.take()?;
        mover.cancel();
        log::debug!("[placement] unmounted");
        Some(mover)
    }

    pub fn is_mounted(&self) -> bool {
        self.mover.is_some()
    }

    pub fn class(&self) -> ViewportClass {
        self.class
    }

    pub fn active_section(&self) -> Option<usize> {
        self.active
    }

    pub fn anchor_for(&self, index: usize) -> Option<Anchor> {
        self.table().get(index).copied()
    }

    pub fn mover(&self) -> Option<&M> {
        self.mover.as_ref()
    }

    pub fn mover_mut(&mut self) -> Option<&mut M> {
        self.mover.as_mut()
    }

    pub fn on_section_enter(&mut self, index: usize, direction: Direction) {
        let Some(anchor) = self.anchor_for(index) else {
            log::warn!("[placement] section {} has no anchor; ignored", index);
            return;
        };
        if self.active == Some(index) {
            return;
        }
        let Some(mover) = self.mover.as_mut() else {
            return;
        };
        mover.request_move(MoveRequest {
            anchor,
            duration_ms: self.duration_ms,
            ease: self.ease,
        });
        self.active = Some(index);
        log::debug!(
            "[placement] section {} entered {:?} -> top={:.1} left={:.1}",
            index,
            direction,
            anchor.top_percent,
            anchor.left_percent
        );
    }

    /// Switch tables. The element jumps to the active section's anchor in the
    /// new table; nothing is tweened across classes.
    pub fn on_viewport_change(&mut self, class: ViewportClass) {
        if class == self.class {
            return;
        }
        self.class = class;
        let index = self.active.unwrap_or(0);
        let anchor = self.anchor_for(index).unwrap_or_default();
        if let Some(mover) = self.mover.as_mut() {
            mover.cancel();
            mover.place(anchor);
            log::debug!(
                "[placement] viewport -> {}, placed at section {}",
                class.label(),
                index
            );
        }
    }

    fn table(&self) -> &AnchorTable {
        self.tables.select(self.class)
    }
}
