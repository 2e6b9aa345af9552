use loopscroll::Carousel;

/// How a programmatic scroll position write should be applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    /// Jump immediately. Used when re-centring after a re-plan, so the user never sees the
    /// container slide across the newly ordered slides.
    #[default]
    Instant,
    /// Let the container animate the scroll natively.
    Smooth,
}

/// The single horizontally scrolling container the slides are laid out in.
///
/// The controller takes ownership of it on mount and hands it back on unmount; nothing else
/// should write its scroll position while it is mounted.
pub trait ScrollContainer {
    fn scroll_left(&self) -> f64;

    /// Width of one slide, i.e. the container's client width.
    fn viewport_width(&self) -> f64;

    fn set_scroll_left(&mut self, left: f64, behavior: ScrollBehavior);

    /// Whether writing the scroll position makes the container report a scroll event, like a
    /// browser does.
    fn reports_programmatic_scroll(&self) -> bool {
        true
    }
}

/// Hooks into the UI framework rendering the carousel.
///
/// Any rendering library can supply an implementation: the controller tells it when to render a
/// new physical order and when it wants to be woken up to check for scroll quiescence.
pub trait RenderHost {
    /// A container was handed to the controller.
    fn on_mount(&mut self) {}

    /// The physical order changed. The host must render the slides in
    /// `carousel.plan().order()` before the container is re-positioned and before the next
    /// paint.
    fn on_layout_commit(&mut self, carousel: &Carousel);

    /// The container was released; any scheduled effect has already been cancelled.
    fn on_unmount(&mut self) {}

    /// Asks the host to call `Controller::tick` once `delay_ms` have elapsed.
    ///
    /// Scheduling replaces any pending effect (last write wins).
    fn schedule_effect(&mut self, delay_ms: u64);

    fn cancel_effect(&mut self) {}
}
