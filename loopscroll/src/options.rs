use alloc::sync::Arc;

use crate::reconcile::DEFAULT_SETTLE_DELAY_MS;

/// Called exactly once for every committed resting index change.
pub type OnSlideChangeCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// The owner's setter for a controlled resting index.
pub type SetRestingIndexCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Default number of slides visible in the viewport at once.
pub const DEFAULT_VISIBLE_COUNT: usize = 1;

/// Default size of the render window, in multiples of the visible count.
pub const DEFAULT_WINDOW_FACTOR: usize = 3;

/// Who owns the resting index.
#[derive(Clone, Default)]
pub enum RestingIndexMode {
    /// The carousel keeps the resting index itself.
    #[default]
    Local,
    /// The owner keeps it. Commits are forwarded to the setter and only take effect once the
    /// owner passes the index back via `Carousel::set_resting_index`.
    Controlled(SetRestingIndexCallback),
}

impl RestingIndexMode {
    pub fn is_controlled(&self) -> bool {
        matches!(self, Self::Controlled(_))
    }
}

impl core::fmt::Debug for RestingIndexMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Local => f.write_str("Local"),
            Self::Controlled(_) => f.write_str("Controlled(..)"),
        }
    }
}

/// Configuration for [`crate::Carousel`].
///
/// Callbacks are stored in `Arc`s, so cloning the options to tweak a field and handing them back
/// through `Carousel::set_options` is cheap.
#[derive(Clone)]
pub struct CarouselOptions {
    pub count: usize,

    /// Rotate slides around the resting index so the carousel can be scrolled endlessly.
    pub looping: bool,

    /// Resting index used when the carousel is created (clamped to the slide count).
    pub initial_index: usize,

    /// Quiescence delay after the last scroll event before the resting index is reconciled.
    pub settle_delay_ms: u64,

    /// How many slides fit in the viewport.
    pub visible_count: usize,

    /// The render window spans `window_factor * visible_count` slots around the resting slide.
    pub window_factor: usize,

    pub resting_index_mode: RestingIndexMode,

    pub on_slide_change: Option<OnSlideChangeCallback>,
}

impl CarouselOptions {
    /// Creates options for `count` slides with a locally owned resting index.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            looping: false,
            initial_index: 0,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            visible_count: DEFAULT_VISIBLE_COUNT,
            window_factor: DEFAULT_WINDOW_FACTOR,
            resting_index_mode: RestingIndexMode::Local,
            on_slide_change: None,
        }
    }

    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn with_initial_index(mut self, initial_index: usize) -> Self {
        self.initial_index = initial_index;
        self
    }

    pub fn with_settle_delay_ms(mut self, delay_ms: u64) -> Self {
        self.settle_delay_ms = delay_ms;
        self
    }

    pub fn with_visible_count(mut self, visible_count: usize) -> Self {
        self.visible_count = visible_count;
        self
    }

    pub fn with_window_factor(mut self, window_factor: usize) -> Self {
        self.window_factor = window_factor;
        self
    }

    /// Hands ownership of the resting index to the caller.
    pub fn with_controlled_resting_index(
        mut self,
        set_resting_index: impl Fn(usize) + Send + Sync + 'static,
    ) -> Self {
        self.resting_index_mode = RestingIndexMode::Controlled(Arc::new(set_resting_index));
        self
    }

    pub fn with_on_slide_change(
        mut self,
        on_slide_change: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_slide_change = on_slide_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("count", &self.count)
            .field("looping", &self.looping)
            .field("initial_index", &self.initial_index)
            .field("settle_delay_ms", &self.settle_delay_ms)
            .field("visible_count", &self.visible_count)
            .field("window_factor", &self.window_factor)
            .field("resting_index_mode", &self.resting_index_mode)
            .finish_non_exhaustive()
    }
}
