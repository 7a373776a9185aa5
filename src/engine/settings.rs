use strum::{AsRefStr, Display, EnumIter, EnumString};

/// CSS reference pixels per millimeter (96 DPI).
pub const PIXELS_PER_MM: f64 = 3.7795275591;

/// Pixels per centimeter used for margins and ruler ticks.
pub const PX_PER_CM: f64 = 37.8;

/// Default margin on every side, in centimeters (one inch).
pub const DEFAULT_MARGIN_CM: f64 = 2.54;

/// Millimeters to CSS pixels, rounded to whole pixels the way page boxes
/// are laid out.
pub fn mm_to_px(mm: f64) -> f64 {
    (mm * PIXELS_PER_MM).round()
}

/// Centimeters to CSS pixels. Margins keep fractional pixels.
pub fn cm_to_px(cm: f64) -> f64 {
    cm * PX_PER_CM
}

/// Paper formats offered by the page setup dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, AsRefStr, EnumIter, EnumString)]
pub enum PageSize {
    #[default]
    A4,
    A5,
    Letter,
    Legal,
}

impl PageSize {
    /// Portrait dimensions in millimeters (width, height).
    pub fn dimensions_mm(self) -> (f64, f64) {
        match self {
            PageSize::A4 => (210.0, 297.0),
            PageSize::A5 => (148.0, 210.0),
            PageSize::Letter => (216.0, 279.0),
            PageSize::Legal => (216.0, 356.0),
        }
    }

    /// Human-readable label with centimeter dimensions.
    pub fn label(self) -> &'static str {
        match self {
            PageSize::A4 => "A4 (21 x 29.7 cm)",
            PageSize::A5 => "A5 (14.8 x 21 cm)",
            PageSize::Letter => "Letter (21.6 x 27.9 cm)",
            PageSize::Legal => "Legal (21.6 x 35.6 cm)",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, AsRefStr, EnumIter, EnumString)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Page margins in centimeters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub fn uniform(cm: f64) -> Self {
        Self {
            top: cm,
            right: cm,
            bottom: cm,
            left: cm,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(DEFAULT_MARGIN_CM)
    }
}

/// Geometry and chrome of every page in the document.
///
/// Settings changes are never retroactive: already laid-out pages keep
/// their content until the next pagination pass picks up the new
/// writable height.
#[derive(Clone, Debug, PartialEq)]
pub struct PageSettings {
    pub size: PageSize,
    pub orientation: Orientation,
    pub margins: Margins,
    /// Page background as a CSS hex color.
    pub background: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            size: PageSize::A4,
            orientation: Orientation::Portrait,
            margins: Margins::default(),
            background: "#ffffff".to_string(),
        }
    }
}

impl PageSettings {
    pub fn page_width_px(&self) -> f64 {
        let (w, h) = self.size.dimensions_mm();
        match self.orientation {
            Orientation::Portrait => mm_to_px(w),
            Orientation::Landscape => mm_to_px(h),
        }
    }

    pub fn page_height_px(&self) -> f64 {
        let (w, h) = self.size.dimensions_mm();
        match self.orientation {
            Orientation::Portrait => mm_to_px(h),
            Orientation::Landscape => mm_to_px(w),
        }
    }

    /// Height available to content between the vertical margins. This is
    /// the threshold the overflow detector compares rendered heights
    /// against.
    pub fn writable_height_px(&self) -> f64 {
        self.page_height_px() - cm_to_px(self.margins.top) - cm_to_px(self.margins.bottom)
    }

    /// Width available to content between the horizontal margins. Never
    /// triggers pagination; the browser wraps lines inside it.
    pub fn content_width_px(&self) -> f64 {
        self.page_width_px() - cm_to_px(self.margins.left) - cm_to_px(self.margins.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn mm_to_px_rounds_to_whole_pixels() {
        assert_eq!(mm_to_px(210.0), 794.0);
        assert_eq!(mm_to_px(297.0), 1123.0);
        assert_eq!(mm_to_px(148.0), 559.0);
        assert_eq!(mm_to_px(356.0), 1346.0);
    }

    #[test]
    fn a4_portrait_dimensions() {
        let s = PageSettings::default();
        assert_eq!(s.page_width_px(), 794.0);
        assert_eq!(s.page_height_px(), 1123.0);
    }

    #[test]
    fn landscape_swaps_width_and_height() {
        let s = PageSettings {
            orientation: Orientation::Landscape,
            ..PageSettings::default()
        };
        assert_eq!(s.page_width_px(), 1123.0);
        assert_eq!(s.page_height_px(), 794.0);
    }

    #[test]
    fn writable_height_subtracts_vertical_margins() {
        let s = PageSettings::default();
        // 1123 - 2 * (2.54cm * 37.8)
        assert!(approx(s.writable_height_px(), 1123.0 - 2.0 * 96.012));
    }

    #[test]
    fn writable_height_tracks_margin_changes() {
        let mut s = PageSettings::default();
        s.margins = Margins::uniform(1.0);
        assert!(approx(s.writable_height_px(), 1123.0 - 2.0 * 37.8));

        s.margins.top = 0.0;
        assert!(approx(s.writable_height_px(), 1123.0 - 37.8));
    }

    #[test]
    fn horizontal_margins_only_affect_content_width() {
        let mut s = PageSettings::default();
        let h = s.writable_height_px();
        s.margins.left = 5.0;
        s.margins.right = 0.5;
        assert!(approx(s.writable_height_px(), h));
        assert!(approx(s.content_width_px(), 794.0 - 5.5 * 37.8));
    }

    #[test]
    fn size_labels_include_cm_dimensions() {
        assert_eq!(PageSize::Legal.label(), "Legal (21.6 x 35.6 cm)");
        assert_eq!(PageSize::A5.dimensions_mm(), (148.0, 210.0));
    }
}
