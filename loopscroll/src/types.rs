use alloc::format;
use alloc::string::String;

/// Navigation direction along the scroll axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    /// `-1` for [`Direction::Prev`], `+1` for [`Direction::Next`].
    pub fn sign(self) -> i64 {
        match self {
            Self::Prev => -1,
            Self::Next => 1,
        }
    }
}

/// Which part of the physical order a slot belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Segment {
    /// Slides rotated in front of the identity-ordered remainder.
    Before,
    Middle,
    /// Slides rotated behind the identity-ordered remainder.
    After,
}

/// Stable identity of a slide.
///
/// Keys are derived from the owner-supplied key when there is one, otherwise from the logical
/// position, so a slide keeps its key no matter where the planner places it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideKey(String);

impl SlideKey {
    pub fn for_index(index: usize) -> Self {
        Self(format!("slide-{index}"))
    }

    pub fn for_child(child_key: Option<&str>, index: usize) -> Self {
        match child_key {
            Some(k) if !k.is_empty() => Self(format!("slide-{k}")),
            _ => Self::for_index(index),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for SlideKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One mounted slot of the physical order, with the hints a renderer needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannedSlide {
    /// Position in the scroll container (left to right).
    pub physical: usize,
    /// Position in the owner's slide list.
    pub logical: usize,
    pub segment: Segment,
    /// Inside the render window around the resting slide.
    pub renderable: bool,
    /// The resting slide itself. Media should only play here.
    pub playable: bool,
}

/// A half-open range of physical slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotRange {
    pub start: usize,
    pub end: usize, // exclusive
}

impl SlotRange {
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn contains(&self, slot: usize) -> bool {
        slot >= self.start && slot < self.end
    }
}

/// Outcome of feeding one scroll event to the reconciler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollEvent {
    /// The event was caused by our own repositioning and was discarded.
    Ignored,
    /// The tracker mapped the event to this logical index.
    Tracked(usize),
    /// No slides, no container geometry, or the carousel is unmounted.
    Skipped,
}

/// Outcome of a quiescence check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settle {
    /// Still inside the settle delay (or nothing is being scrolled).
    Pending,
    /// Scrolling stopped on the slide we were already resting on.
    Unchanged,
    /// Scrolling stopped on a different slide, which is now the resting index.
    Committed(usize),
}
