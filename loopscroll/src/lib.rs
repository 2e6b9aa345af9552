//! A headless looping carousel engine.
//!
//! For adapter-level utilities (render host hooks, scroll container ownership, tweens), see the
//! `loopscroll-adapter` crate.
//!
//! A looping carousel shows N slides in a plain, linearly laid out scroll container and still
//! lets the user scroll past either end. This crate provides the three pieces that make that
//! work without repositioning anything during a gesture:
//! - a slide order planner that rotates slides around the resting slide,
//! - a scroll position tracker that maps scroll offsets back to logical slides,
//! - a debounced reconciler that commits the slide the user stopped on as the new resting
//!   slide, which triggers a re-plan.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the container's scroll position and width on every scroll event
//! - a clock (`now_ms`) to drive settling
//! - rendering of slides in the planned physical order
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod math;
mod options;
mod plan;
mod reconcile;
mod state;
mod track;
mod types;


pub use carousel::Carousel;
pub use options::{
    CarouselOptions, DEFAULT_VISIBLE_COUNT, DEFAULT_WINDOW_FACTOR, OnSlideChangeCallback,
    RestingIndexMode, SetRestingIndexCallback,
};
pub use plan::{SlidePlan, pivot_index, plan};
pub use reconcile::{DEFAULT_SETTLE_DELAY_MS, Phase, Reconciler};
pub use state::CarouselState;
pub use track::{scroll_left_for_slot, track};
pub use types::{Direction, PlannedSlide, ScrollEvent, Segment, Settle, SlideKey, SlotRange};
