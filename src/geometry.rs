//! Floating-menu placement.
//!
//! Pure calculators: given the anchor's bounding box and the viewport size
//! (both measured by the presentation layer), compute where a menu should
//! render. Each menu has a fixed nominal size and a placement rule relative
//! to its anchor; results are clamped to the viewport and flip to the
//! opposite side of the anchor rather than overflow the bottom edge.

use crate::model::position::{AnchorRect, AnchoredLeft, AnchoredRight, Viewport};

/// Gap kept between a menu and the viewport edge, and between a menu and
/// its anchor.
pub const EDGE_MARGIN: f64 = 8.0;

pub const LIST_OPTION_SIZE: (f64, f64) = (200.0, 228.0);
pub const THEME_PALETTE_SIZE: (f64, f64) = (282.0, 80.0);
pub const ORDERING_CRITERION_SIZE: (f64, f64) = (200.0, 270.0);
pub const DEADLINE_PICKER_SIZE: (f64, f64) = (200.0, 154.0);
pub const DEADLINE_CALENDAR_SIZE: (f64, f64) = (300.0, 360.0);

/// Top edge for a menu placed below its anchor, flipped above when the
/// bottom would overflow.
fn top_below_or_flipped(anchor: &AnchorRect, viewport: &Viewport, height: f64) -> f64 {
    let below = anchor.bottom() + EDGE_MARGIN;
    if below + height > viewport.height - EDGE_MARGIN {
        (anchor.top - EDGE_MARGIN - height).max(EDGE_MARGIN)
    } else {
        below
    }
}

fn clamp_left(left: f64, viewport: &Viewport, width: f64) -> f64 {
    left.min(viewport.width - width - EDGE_MARGIN).max(EDGE_MARGIN)
}

/// List-option menu: below the anchor, left edges aligned.
pub fn list_option_position(anchor: &AnchorRect, viewport: &Viewport) -> AnchoredLeft {
    let (w, h) = LIST_OPTION_SIZE;
    AnchoredLeft {
        top: top_below_or_flipped(anchor, viewport, h),
        left: clamp_left(anchor.left, viewport, w),
    }
}

/// Theme palette: below the anchor, horizontally centered on it.
pub fn theme_palette_position(anchor: &AnchorRect, viewport: &Viewport) -> AnchoredLeft {
    let (w, h) = THEME_PALETTE_SIZE;
    let centered = anchor.left + anchor.width / 2.0 - w / 2.0;
    AnchoredLeft {
        top: top_below_or_flipped(anchor, viewport, h),
        left: clamp_left(centered, viewport, w),
    }
}

/// Ordering-criterion menu: below the anchor, right edges aligned.
pub fn ordering_criterion_position(anchor: &AnchorRect, viewport: &Viewport) -> AnchoredLeft {
    let (w, h) = ORDERING_CRITERION_SIZE;
    AnchoredLeft {
        top: top_below_or_flipped(anchor, viewport, h),
        left: clamp_left(anchor.right() - w, viewport, w),
    }
}

/// Deadline picker: below the anchor, right edges aligned, expressed as a
/// distance from the viewport's right edge (the menu hangs off a
/// right-justified toolbar button).
pub fn deadline_picker_position(anchor: &AnchorRect, viewport: &Viewport) -> AnchoredRight {
    let (w, h) = DEADLINE_PICKER_SIZE;
    let right = (viewport.width - anchor.right())
        .min(viewport.width - w - EDGE_MARGIN)
        .max(EDGE_MARGIN);
    AnchoredRight {
        top: top_below_or_flipped(anchor, viewport, h),
        right,
    }
}

/// Deadline calendar: on the anchor's left flank, top edges aligned; when
/// there is no room to the left it drops below the anchor like the picker.
/// The top is clamped so the calendar stays fully inside the viewport.
pub fn deadline_calendar_position(anchor: &AnchorRect, viewport: &Viewport) -> AnchoredRight {
    let (w, h) = DEADLINE_CALENDAR_SIZE;
    let fits_beside = anchor.left >= w + 2.0 * EDGE_MARGIN;
    let (top, right) = if fits_beside {
        let right = viewport.width - anchor.left + EDGE_MARGIN;
        (anchor.top, right)
    } else {
        let right = (viewport.width - anchor.right())
            .min(viewport.width - w - EDGE_MARGIN)
            .max(EDGE_MARGIN);
        (anchor.bottom() + EDGE_MARGIN, right)
    };
    AnchoredRight {
        top: top.min(viewport.height - h - EDGE_MARGIN).max(EDGE_MARGIN),
        right,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 1280.0,
        height: 800.0,
    };

    fn anchor(top: f64, left: f64) -> AnchorRect {
        AnchorRect {
            top,
            left,
            width: 120.0,
            height: 32.0,
        }
    }

    #[test]
    fn list_option_below_and_aligned() {
        let pos = list_option_position(&anchor(100.0, 300.0), &VIEWPORT);
        assert_eq!(pos, AnchoredLeft { top: 140.0, left: 300.0 });
    }

    #[test]
    fn list_option_clamps_to_right_edge() {
        let pos = list_option_position(&anchor(100.0, 1200.0), &VIEWPORT);
        assert_eq!(pos.left, 1280.0 - 200.0 - EDGE_MARGIN);
    }

    #[test]
    fn list_option_flips_above_near_bottom() {
        let a = anchor(740.0, 300.0);
        let pos = list_option_position(&a, &VIEWPORT);
        assert_eq!(pos.top, 740.0 - EDGE_MARGIN - LIST_OPTION_SIZE.1);
        assert!(pos.top + LIST_OPTION_SIZE.1 <= a.top);
    }

    #[test]
    fn flip_never_goes_above_viewport() {
        // anchor near the top of a viewport too short for the menu either way
        let short = Viewport {
            width: 1280.0,
            height: 260.0,
        };
        let pos = ordering_criterion_position(&anchor(40.0, 300.0), &short);
        assert_eq!(pos.top, EDGE_MARGIN);
    }

    #[test]
    fn theme_palette_centers_on_anchor() {
        let a = anchor(100.0, 500.0);
        let pos = theme_palette_position(&a, &VIEWPORT);
        assert_eq!(pos.left, 500.0 + 60.0 - 141.0);
        assert_eq!(pos.top, a.bottom() + EDGE_MARGIN);
    }

    #[test]
    fn theme_palette_clamps_to_left_edge() {
        let pos = theme_palette_position(&anchor(100.0, 10.0), &VIEWPORT);
        assert_eq!(pos.left, EDGE_MARGIN);
    }

    #[test]
    fn ordering_right_aligns_to_anchor() {
        let a = anchor(100.0, 600.0);
        let pos = ordering_criterion_position(&a, &VIEWPORT);
        assert_eq!(pos.left, a.right() - ORDERING_CRITERION_SIZE.0);
    }

    #[test]
    fn picker_right_distance_tracks_anchor() {
        let a = anchor(100.0, 900.0);
        let pos = deadline_picker_position(&a, &VIEWPORT);
        assert_eq!(pos.right, 1280.0 - a.right());
        assert_eq!(pos.top, a.bottom() + EDGE_MARGIN);
    }

    #[test]
    fn picker_never_overflows_left() {
        // anchor hugging the left edge: right-aligning would push the menu
        // past the left viewport edge, so the distance is clamped
        let a = anchor(100.0, 0.0);
        let pos = deadline_picker_position(&a, &VIEWPORT);
        assert_eq!(pos.right, 1280.0 - DEADLINE_PICKER_SIZE.0 - EDGE_MARGIN);
    }

    #[test]
    fn calendar_prefers_left_flank() {
        let a = anchor(200.0, 800.0);
        let pos = deadline_calendar_position(&a, &VIEWPORT);
        assert_eq!(pos.right, 1280.0 - 800.0 + EDGE_MARGIN);
        assert_eq!(pos.top, 200.0);
    }

    #[test]
    fn calendar_falls_back_below_when_cramped() {
        let a = anchor(200.0, 100.0);
        let pos = deadline_calendar_position(&a, &VIEWPORT);
        assert_eq!(pos.top, a.bottom() + EDGE_MARGIN);
        assert_eq!(pos.right, 1280.0 - DEADLINE_CALENDAR_SIZE.0 - EDGE_MARGIN);
    }

    #[test]
    fn calendar_fallback_never_overflows_left() {
        // anchor hugging the left edge: right-aligning the fallback would
        // push the calendar's left edge off-screen
        let a = anchor(200.0, 0.0);
        let pos = deadline_calendar_position(&a, &VIEWPORT);
        let left_edge = 1280.0 - pos.right - DEADLINE_CALENDAR_SIZE.0;
        assert_eq!(left_edge, EDGE_MARGIN);
    }

    #[test]
    fn calendar_top_is_clamped_to_viewport_bottom() {
        let a = anchor(700.0, 800.0);
        let pos = deadline_calendar_position(&a, &VIEWPORT);
        assert_eq!(pos.top, 800.0 - DEADLINE_CALENDAR_SIZE.1 - EDGE_MARGIN);
    }
}
