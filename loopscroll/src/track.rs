use crate::math::{round_half_up, wrap};

/// Maps a physical scroll position back to the logical slide it shows.
///
/// `offset` is the [`crate::SlidePlan::offset`] the slides are currently arranged with. The
/// slide ratio is rounded rather than truncated, so sub-pixel scroll positions reported by the
/// host do not drift to the previous slide.
///
/// Returns `None` when there are no slides or the viewport has no width yet.
pub fn track(scroll_left: f64, viewport_width: f64, offset: i64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    if viewport_width.is_nan() || viewport_width <= 0.0 || !scroll_left.is_finite() {
        lwarn!(scroll_left, viewport_width, "track: unusable scroll geometry");
        return None;
    }

    let ratio = (scroll_left - offset as f64 * viewport_width) / viewport_width;
    let slide_offset = round_half_up(ratio);
    let index = wrap(slide_offset, count);
    ltrace!(scroll_left, viewport_width, offset, index, "track");
    Some(index)
}

/// The scroll position at which the slide in `physical` slot is fully in view.
pub fn scroll_left_for_slot(physical: usize, viewport_width: f64) -> f64 {
    physical as f64 * viewport_width
}
