use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::reconcile::{Phase, Reconciler};
use crate::track::{scroll_left_for_slot, track};
use crate::{
    CarouselOptions, CarouselState, Direction, PlannedSlide, RestingIndexMode, ScrollEvent,
    Settle, SlideKey, SlidePlan, SlotRange, pivot_index,
};

/// A headless looping carousel.
///
/// This type closes the loop between the slide order planner, the scroll position tracker and
/// the resting index reconciler. It does not hold any UI objects:
/// - the adapter renders slides in [`Carousel::plan`] order (or via [`Carousel::for_each_slide`]),
/// - reports scroll events with the container's scroll position and width,
/// - polls [`Carousel::update`] with the current time so settled gestures get committed,
/// - and re-positions the container whenever [`Carousel::needs_layout`] is set.
///
/// For a controller that owns a scroll container and a render host, see the
/// `loopscroll-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    resting_index: usize,
    pivot_index: usize,
    plan: SlidePlan,
    reconciler: Reconciler,
    needs_layout: bool,
}

impl Carousel {
    pub fn new(options: CarouselOptions) -> Self {
        let resting_index = clamp_index(options.initial_index, options.count);
        let pivot_index = pivot_index(options.count);
        let plan = SlidePlan::new(options.count, resting_index, pivot_index, options.looping);
        ldebug!(
            count = options.count,
            looping = options.looping,
            resting_index,
            "Carousel::new"
        );
        Self {
            resting_index,
            pivot_index,
            plan,
            reconciler: Reconciler::new(options.settle_delay_ms),
            needs_layout: true,
            options,
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Replaces the options, re-planning only when the slide count or looping changed.
    ///
    /// `initial_index` is only read by [`Carousel::new`].
    pub fn set_options(&mut self, options: CarouselOptions) {
        let prev_count = self.options.count;
        let prev_looping = self.options.looping;
        self.reconciler.set_settle_delay_ms(options.settle_delay_ms);
        self.options = options;
        ltrace!(
            count = self.options.count,
            looping = self.options.looping,
            "Carousel::set_options"
        );

        if self.options.count != prev_count {
            self.reconciler.abandon();
            self.resting_index = clamp_index(self.resting_index, self.options.count);
            self.pivot_index = pivot_index(self.options.count);
            self.replan();
        } else if self.options.looping != prev_looping {
            self.replan();
        }
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn looping(&self) -> bool {
        self.options.looping
    }

    pub fn resting_index(&self) -> usize {
        self.resting_index
    }

    pub fn pivot_index(&self) -> usize {
        self.pivot_index
    }

    pub fn plan(&self) -> &SlidePlan {
        &self.plan
    }

    pub fn offset(&self) -> i64 {
        self.plan.offset()
    }

    pub fn phase(&self) -> Phase {
        self.reconciler.phase()
    }

    pub fn reconciler(&self) -> &Reconciler {
        &self.reconciler
    }

    /// The logical index under the viewport while a gesture is in progress.
    pub fn current_index(&self) -> Option<usize> {
        self.reconciler.current_index()
    }

    /// Replaces the slide list with one of `count` slides.
    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.update_options(|o| o.count = count);
    }

    pub fn set_looping(&mut self, looping: bool) {
        if self.options.looping == looping {
            return;
        }
        self.update_options(|o| o.looping = looping);
    }

    pub fn set_settle_delay_ms(&mut self, delay_ms: u64) {
        self.options.settle_delay_ms = delay_ms;
        self.reconciler.set_settle_delay_ms(delay_ms);
    }

    /// Sets the resting index from the owner side (a controlled prop update).
    ///
    /// Out-of-range indexes are clamped. This does not fire `on_slide_change`.
    pub fn set_resting_index(&mut self, index: usize) {
        if self.options.count == 0 {
            return;
        }
        let index = clamp_index(index, self.options.count);
        if index == self.resting_index {
            return;
        }
        self.resting_index = index;
        self.replan();
    }

    fn replan(&mut self) {
        self.plan = SlidePlan::new(
            self.options.count,
            self.resting_index,
            self.pivot_index,
            self.options.looping,
        );
        self.needs_layout = true;
    }

    /// Whether the container must be re-positioned before the next paint.
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Forces a layout pass, e.g. after the container was (re)mounted or resized.
    pub fn request_layout(&mut self) {
        self.needs_layout = true;
    }

    /// Drops the in-progress gesture, if any, without committing it.
    pub fn abandon_gesture(&mut self) {
        self.reconciler.abandon();
    }

    /// The scroll position that puts the resting slide in view.
    pub fn layout_scroll_left(&self, viewport_width: f64) -> f64 {
        let slot = self
            .plan
            .physical_of(self.resting_index)
            .unwrap_or_default();
        scroll_left_for_slot(slot, viewport_width)
    }

    /// Call right before re-positioning the container after a re-plan.
    ///
    /// Marks the upcoming scroll event as programmatic and returns the scroll position to apply.
    pub fn commit_layout(&mut self, viewport_width: f64) -> f64 {
        self.reconciler.mark_programmatic_scroll();
        self.needs_layout = false;
        let left = self.layout_scroll_left(viewport_width);
        ltrace!(viewport_width, left, "Carousel::commit_layout");
        left
    }

    /// Call after re-positioning the container when no scroll event will follow.
    pub fn acknowledge_programmatic_scroll(&mut self) {
        self.reconciler.acknowledge_programmatic_scroll();
    }

    /// Handles a scroll event from the host.
    pub fn on_scroll(&mut self, scroll_left: f64, viewport_width: f64, now_ms: u64) -> ScrollEvent {
        let offset = self.plan.offset();
        let count = self.options.count;
        let event = self
            .reconciler
            .on_scroll_event(now_ms, || track(scroll_left, viewport_width, offset, count));
        ltrace!(scroll_left, now_ms, ?event, "Carousel::on_scroll");
        event
    }

    /// When the current gesture will settle, if one is in progress.
    pub fn settle_deadline_ms(&self) -> Option<u64> {
        self.reconciler.settle_deadline_ms()
    }

    /// Runs the quiescence check; commits the tracked slide once scrolling has settled.
    pub fn update(&mut self, now_ms: u64) -> Settle {
        let settle = self.reconciler.update(now_ms, self.resting_index);
        if let Settle::Committed(index) = settle {
            self.commit(index);
        }
        settle
    }

    fn commit(&mut self, index: usize) {
        let controlled = match &self.options.resting_index_mode {
            RestingIndexMode::Local => None,
            RestingIndexMode::Controlled(set_resting_index) => Some(Arc::clone(set_resting_index)),
        };
        match controlled {
            Some(set_resting_index) => set_resting_index(index),
            None => {
                self.resting_index = index;
                self.replan();
            }
        }
        ldebug!(index, "Carousel: resting index committed");
        if let Some(cb) = self.options.on_slide_change.clone() {
            cb(index);
        }
    }

    /// Whether navigating in `direction` is impossible (arrow buttons should be disabled).
    ///
    /// While looping this only reports an empty carousel. With two slides the resting slide is
    /// planned into the last slot, so [`Carousel::advance_target`] can still find nowhere to go
    /// towards [`Direction::Next`].
    pub fn is_disabled(&self, direction: Direction) -> bool {
        let count = self.options.count;
        if count == 0 {
            return true;
        }
        if self.options.looping {
            return false;
        }
        let next = self.resting_index as i64 + direction.sign();
        next < 0 || next >= count as i64
    }

    /// The scroll position one viewport away in `direction`, for a smooth programmatic scroll.
    ///
    /// This does not touch the resting index; the regular settle path commits it once the
    /// animated scroll stops. Returns `None` when there is nowhere to go: navigation is
    /// disabled, the width is unusable, or the target clamps to `scroll_left` at either end of
    /// the container (e.g. `Next` on a looping two-slide carousel).
    pub fn advance_target(
        &self,
        direction: Direction,
        scroll_left: f64,
        viewport_width: f64,
    ) -> Option<f64> {
        if self.is_disabled(direction) || viewport_width.is_nan() || viewport_width <= 0.0 {
            return None;
        }
        let max = scroll_left_for_slot(self.options.count - 1, viewport_width);
        let target = (scroll_left + viewport_width * direction.sign() as f64).clamp(0.0, max);
        if target == scroll_left {
            return None;
        }
        Some(target)
    }

    /// Jumps straight to a slide, bypassing the tracker.
    ///
    /// The index is clamped to the slide range. Returns the committed index, or `None` when
    /// there are no slides or the carousel already rests there.
    pub fn go_to_slide(&mut self, index: usize) -> Option<usize> {
        let count = self.options.count;
        if count == 0 {
            return None;
        }
        if index >= count {
            lwarn!(index, count, "go_to_slide: index out of range, clamping");
        }
        let index = clamp_index(index, count);
        if index == self.resting_index {
            return None;
        }
        self.reconciler.commit_programmatic();
        self.commit(index);
        Some(index)
    }

    /// Physical slots that should be fully rendered, centred on the resting slide.
    pub fn render_window(&self) -> SlotRange {
        let count = self.options.count;
        let Some(center) = self.plan.physical_of(self.resting_index) else {
            return SlotRange::default();
        };
        let len = self
            .options
            .window_factor
            .max(1)
            .saturating_mul(self.options.visible_count.max(1))
            .min(count);
        let end = center
            .saturating_sub(len / 2)
            .saturating_add(len)
            .min(count);
        SlotRange {
            start: end - len,
            end,
        }
    }

    /// Iterates over the physical order with render hints, left to right.
    pub fn for_each_slide(&self, mut f: impl FnMut(PlannedSlide)) {
        let window = self.render_window();
        for (physical, &logical) in self.plan.order().iter().enumerate() {
            let Some(segment) = self.plan.segment_of(physical) else {
                continue;
            };
            f(PlannedSlide {
                physical,
                logical,
                segment,
                renderable: window.contains(physical),
                playable: logical == self.resting_index,
            });
        }
    }

    /// Collects the physical order with render hints into `out` (clears `out` first).
    pub fn collect_slides(&self, out: &mut Vec<PlannedSlide>) {
        out.clear();
        out.reserve(self.plan.len());
        self.for_each_slide(|s| out.push(s));
    }

    pub fn slide_key(&self, logical: usize) -> Option<SlideKey> {
        (logical < self.options.count).then(|| SlideKey::for_index(logical))
    }

    /// Returns a snapshot of the resting state.
    pub fn state(&self) -> CarouselState {
        CarouselState {
            count: self.options.count,
            looping: self.options.looping,
            resting_index: self.resting_index,
            offset: self.plan.offset(),
        }
    }

    /// Restores a previously captured snapshot. Any in-progress gesture is dropped.
    pub fn restore_state(&mut self, state: CarouselState) {
        self.reconciler.abandon();
        self.update_options(|o| {
            o.count = state.count;
            o.looping = state.looping;
        });
        self.set_resting_index(state.resting_index);
    }
}

fn clamp_index(index: usize, count: usize) -> usize {
    index.min(count.saturating_sub(1))
}
