//! Adapter utilities for the `loopscroll` crate.
//!
//! The `loopscroll` crate is UI-agnostic and focuses on the core math and state. This crate
//! provides small, framework-neutral pieces commonly needed by adapters:
//!
//! - A [`Controller`] that owns the scroll container and drives the carousel through
//!   [`RenderHost`] hooks (render, re-centre, schedule the settle check)
//! - Tween-based smooth scrolling for containers that cannot animate on their own
//! - A [`GalleryContext`] linking a main carousel with a thumbnail strip
//! - Ancestor lookup helpers to resolve which slide an event target belongs to
//!
//! This crate does not bind to any UI framework.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod ancestor;
mod controller;
mod gallery;
mod host;
mod tween;

#[cfg(test)]
mod tests;

pub use ancestor::{MAX_ANCESTOR_DEPTH, ParentLookup, closest, find_ancestor_map};
pub use controller::{Controller, ScrollAnimation};
pub use gallery::GalleryContext;
pub use host::{RenderHost, ScrollBehavior, ScrollContainer};
pub use tween::{Easing, Tween};
