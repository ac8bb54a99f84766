use super::constants::{
    DESKTOP_SCALE_CAP, DESKTOP_SCALE_FACTOR, DESKTOP_WRAPPER_WIDTH_VW, MOBILE_MAX_WIDTH_PX,
    MOBILE_SCALE_CAP, MOBILE_SCALE_FACTOR, MOBILE_WRAPPER_WIDTH_VW, WRAPPER_HEIGHT_VH,
};

/// Media query whose match selects the mobile tables.
pub const MOBILE_MEDIA_QUERY: &str = "(max-width: 767px)";

/// Coarse device category selecting which tables apply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    Mobile,
    #[default]
    Desktop,
}

impl ViewportClass {
    #[inline]
    pub fn from_width(css_width_px: f64) -> Self {
        if css_width_px <= MOBILE_MAX_WIDTH_PX {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }

    #[inline]
    pub fn from_media_match(mobile_matches: bool) -> Self {
        if mobile_matches {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }

    /// Size of the fixed wrapper hosting the canvas: half the screen on
    /// desktop, all of it on mobile.
    pub fn wrapper_size(self) -> WrapperSize {
        let width_vw = match self {
            ViewportClass::Mobile => MOBILE_WRAPPER_WIDTH_VW,
            ViewportClass::Desktop => DESKTOP_WRAPPER_WIDTH_VW,
        };
        WrapperSize {
            width_vw,
            height_vh: WRAPPER_HEIGHT_VH,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewportClass::Mobile => "mobile",
            ViewportClass::Desktop => "desktop",
        }
    }
}

/// Wrapper extent in viewport units (`vw` x `vh`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WrapperSize {
    pub width_vw: f32,
    pub height_vh: f32,
}

impl WrapperSize {
    /// Wrapper size in CSS pixels for a viewport of the given size.
    pub fn to_px(self, viewport_width: f64, viewport_height: f64) -> (f64, f64) {
        (
            viewport_width * self.width_vw as f64 / 100.0,
            viewport_height * self.height_vh as f64 / 100.0,
        )
    }
}

/// A pair of values, one per viewport class.
#[derive(Clone, Debug, PartialEq)]
pub struct ByViewport<T> {
    pub desktop: T,
    pub mobile: T,
}

impl<T> ByViewport<T> {
    pub fn new(desktop: T, mobile: T) -> Self {
        Self { desktop, mobile }
    }

    #[inline]
    pub fn select(&self, class: ViewportClass) -> &T {
        match class {
            ViewportClass::Desktop => &self.desktop,
            ViewportClass::Mobile => &self.mobile,
        }
    }
}

/// Render scale derived from the visible scene width: `min(width * factor, cap)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleRule {
    pub desktop_factor: f32,
    pub desktop_cap: f32,
    pub mobile_factor: f32,
    pub mobile_cap: f32,
}

impl Default for ScaleRule {
    fn default() -> Self {
        Self {
            desktop_factor: DESKTOP_SCALE_FACTOR,
            desktop_cap: DESKTOP_SCALE_CAP,
            mobile_factor: MOBILE_SCALE_FACTOR,
            mobile_cap: MOBILE_SCALE_CAP,
        }
    }
}

impl ScaleRule {
    pub fn scale(&self, viewport_width: f32, class: ViewportClass) -> f32 {
        let (factor, cap) = match class {
            ViewportClass::Desktop => (self.desktop_factor, self.desktop_cap),
            ViewportClass::Mobile => (self.mobile_factor, self.mobile_cap),
        };
        (viewport_width.max(0.0) * factor).min(cap)
    }
}
