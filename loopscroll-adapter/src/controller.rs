use loopscroll::{Carousel, CarouselOptions, Direction, ScrollEvent, Settle};

use crate::{Easing, RenderHost, ScrollBehavior, ScrollContainer, Tween};

/// How [`Controller::advance`] animates the one-viewport scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollAnimation {
    /// Write the target with [`ScrollBehavior::Smooth`] and let the container animate. The
    /// container must report the intermediate positions through [`Controller::on_scroll`].
    #[default]
    Native,
    /// Animate with a [`Tween`] sampled on [`Controller::tick`]. Meant for containers that do not
    /// animate or report programmatic writes themselves.
    Tween { duration_ms: u64, easing: Easing },
}

/// A framework-neutral controller that wraps a [`Carousel`] and owns its scroll container.
///
/// Adapters drive it by calling:
/// - `mount` / `unmount` around the container's lifetime
/// - `on_scroll` for every scroll event the container reports
/// - `tick(now_ms)` when the host's scheduled effect fires (and every frame while
///   `is_animating()`)
///
/// The controller keeps the physical slide order, the container's scroll position and the
/// resting index in sync through the [`RenderHost`] hooks.
#[derive(Debug)]
pub struct Controller<C, H> {
    carousel: Carousel,
    host: H,
    container: Option<C>,
    animation: ScrollAnimation,
    tween: Option<Tween>,
}

impl<C: ScrollContainer, H: RenderHost> Controller<C, H> {
    pub fn new(options: CarouselOptions, host: H) -> Self {
        Self::from_carousel(Carousel::new(options), host)
    }

    pub fn from_carousel(carousel: Carousel, host: H) -> Self {
        Self {
            carousel,
            host,
            container: None,
            animation: ScrollAnimation::Native,
            tween: None,
        }
    }

    pub fn with_animation(mut self, animation: ScrollAnimation) -> Self {
        self.animation = animation;
        self
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn container(&self) -> Option<&C> {
        self.container.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.container.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Takes ownership of the scroll container and lays the slides out in it.
    ///
    /// A previously mounted container is released first and returned.
    pub fn mount(&mut self, container: C) -> Option<C> {
        let prev = self.unmount();
        self.container = Some(container);
        adebug!(count = self.carousel.count(), "Controller::mount");
        self.host.on_mount();
        self.carousel.request_layout();
        self.sync_layout();
        prev
    }

    /// Releases the scroll container.
    ///
    /// Cancels the scheduled effect and drops any unsettled gesture, so nothing is committed
    /// to a detached carousel.
    pub fn unmount(&mut self) -> Option<C> {
        let container = self.container.take()?;
        self.tween = None;
        self.host.cancel_effect();
        self.carousel.abandon_gesture();
        self.host.on_unmount();
        adebug!("Controller::unmount");
        Some(container)
    }

    /// Call this when the container reports a scroll event (user drag, wheel, native smooth
    /// scroll frames).
    ///
    /// This cancels any active tween.
    pub fn on_scroll(&mut self, now_ms: u64) -> ScrollEvent {
        let Some(container) = self.container.as_ref() else {
            return ScrollEvent::Skipped;
        };
        let left = container.scroll_left();
        let width = container.viewport_width();
        self.cancel_animation();
        let event = self.carousel.on_scroll(left, width, now_ms);
        if matches!(event, ScrollEvent::Tracked(_)) {
            self.host
                .schedule_effect(self.carousel.options().settle_delay_ms);
        }
        event
    }

    /// Advances the controller.
    ///
    /// - If a tween is active, writes its next sample into the container.
    /// - Otherwise, checks whether the current gesture has settled and, if it committed a new
    ///   resting index, re-renders and re-centres.
    pub fn tick(&mut self, now_ms: u64) -> Settle {
        if self.container.is_none() {
            return Settle::Pending;
        }

        if let Some(tween) = self.tween {
            self.step_tween(tween, now_ms);
            return Settle::Pending;
        }

        let settle = self.carousel.update(now_ms);
        match settle {
            Settle::Committed(_) => self.sync_layout(),
            Settle::Pending => {
                // Woken up early; sleep until the gesture can settle.
                if let Some(deadline) = self.carousel.settle_deadline_ms() {
                    self.host.schedule_effect(deadline.saturating_sub(now_ms));
                }
            }
            Settle::Unchanged => {}
        }
        settle
    }

    fn step_tween(&mut self, tween: Tween, now_ms: u64) {
        let Some(container) = self.container.as_mut() else {
            return;
        };
        let left = tween.sample(now_ms);
        container.set_scroll_left(left, ScrollBehavior::Instant);
        let width = container.viewport_width();
        self.carousel.on_scroll(left, width, now_ms);
        atrace!(left, now_ms, "Controller: tween step");

        if tween.is_done(now_ms) {
            self.tween = None;
            self.host
                .schedule_effect(self.carousel.options().settle_delay_ms);
        }
    }

    /// Scrolls one viewport in `direction`.
    ///
    /// The resting index is not touched here: the scroll is tracked like a user gesture and
    /// committed once it settles. Returns `false` when navigation in that direction is disabled
    /// or there is nothing to scroll to.
    pub fn advance(&mut self, direction: Direction, now_ms: u64) -> bool {
        let Some(container) = self.container.as_mut() else {
            return false;
        };
        let width = container.viewport_width();
        let from = match self.tween {
            // Chain rapid presses off the pending target instead of the current frame.
            Some(tween) => tween.to,
            None => container.scroll_left(),
        };
        let Some(target) = self.carousel.advance_target(direction, from, width) else {
            return false;
        };
        adebug!(?direction, from, target, "Controller::advance");

        match self.animation {
            ScrollAnimation::Native => {
                container.set_scroll_left(target, ScrollBehavior::Smooth);
            }
            ScrollAnimation::Tween {
                duration_ms,
                easing,
            } => match self.tween.as_mut() {
                Some(tween) => tween.retarget(now_ms, target, duration_ms),
                None => {
                    let start = container.scroll_left();
                    self.tween = Some(Tween::new(start, target, now_ms, duration_ms, easing));
                }
            },
        }
        true
    }

    pub fn next(&mut self, now_ms: u64) -> bool {
        self.advance(Direction::Next, now_ms)
    }

    pub fn prev(&mut self, now_ms: u64) -> bool {
        self.advance(Direction::Prev, now_ms)
    }

    /// Jumps straight to a slide (clamped to the slide range).
    ///
    /// Returns the committed index, or `None` when there are no slides or the carousel already
    /// rests on it.
    pub fn go_to_slide(&mut self, index: usize) -> Option<usize> {
        self.cancel_animation();
        let committed = self.carousel.go_to_slide(index)?;
        self.host.cancel_effect();
        self.sync_layout();
        Some(committed)
    }

    pub fn is_disabled(&self, direction: Direction) -> bool {
        self.carousel.is_disabled(direction)
    }

    /// Applies the owner's resting index (controlled mode), or moves a locally owned one without
    /// notifying `on_slide_change`.
    pub fn set_resting_index(&mut self, index: usize) {
        self.carousel.set_resting_index(index);
        self.sync_layout();
    }

    /// Replaces the slide list with one of `count` slides.
    pub fn set_count(&mut self, count: usize) {
        self.carousel.set_count(count);
        self.sync_layout();
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.carousel.set_looping(looping);
        self.sync_layout();
    }

    pub fn set_options(&mut self, options: CarouselOptions) {
        self.carousel.set_options(options);
        self.sync_layout();
    }

    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions)) {
        self.carousel.update_options(f);
        self.sync_layout();
    }

    /// Call this when the container was resized; re-centres on the resting slide.
    pub fn on_resize(&mut self) {
        if self.container.is_none() {
            return;
        }
        self.cancel_animation();
        self.carousel.abandon_gesture();
        self.carousel.request_layout();
        self.sync_layout();
    }

    /// Renders the current physical order and re-centres the container on the resting slide,
    /// if the carousel asked for it. The upcoming scroll event is marked as programmatic before
    /// the container is touched.
    fn sync_layout(&mut self) {
        if !self.carousel.needs_layout() {
            return;
        }
        let Some(container) = self.container.as_mut() else {
            return;
        };
        self.host.on_layout_commit(&self.carousel);

        let width = container.viewport_width();
        if width.is_nan() || width <= 0.0 {
            awarn!(width, "Controller: container has no width, skipping re-centre");
            return;
        }
        let prev = container.scroll_left();
        let left = self.carousel.commit_layout(width);
        container.set_scroll_left(left, ScrollBehavior::Instant);
        if prev == left || !container.reports_programmatic_scroll() {
            // No scroll event will arrive to consume the ignore flag.
            self.carousel.acknowledge_programmatic_scroll();
        }
        atrace!(left, "Controller: re-centred");
    }
}
