use alloc::vec::Vec;

use crate::Segment;
use crate::math::wrap;

/// The physical slot the resting slide is anchored to while looping.
pub fn pivot_index(count: usize) -> usize {
    count / 2
}

/// Physical arrangement of the slides for one resting index.
///
/// When looping, the slides are rotated so that the resting slide sits at the pivot slot and
/// roughly half of the other slides are on either side of it. Scrolling one viewport in either
/// direction from the resting slide therefore always reveals its logical neighbour, and the
/// browser (or any linear scroll container) never hits a dead end before the user has travelled
/// half-way around the loop.
///
/// ```text
/// logical:           [0][1][2][3][4]
/// resting=0, pivot=2 [3][4][0][1][2]   offset = +2
/// resting=4, pivot=2 [2][3][4][0][1]   offset = -2
/// ```
///
/// Without looping the order is the identity and the offset is zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlidePlan {
    order: Vec<usize>,
    offset: i64,
    before: usize,
    after: usize,
}

impl SlidePlan {
    /// Plans the physical order for `count` slides.
    ///
    /// `resting_index` is clamped to the last slide if it is out of range.
    pub fn new(count: usize, resting_index: usize, pivot_index: usize, looping: bool) -> Self {
        if !looping || count == 0 {
            return Self::identity(count);
        }

        let resting = if resting_index >= count {
            lwarn!(
                resting_index,
                count,
                "SlidePlan::new: resting index out of range, clamping"
            );
            count - 1
        } else {
            resting_index
        };

        let shift = wrap(
            count as i64 - resting as i64 + pivot_index as i64,
            count,
        );

        let plan = if resting <= pivot_index {
            // Rotate right: the last `shift` slides move in front.
            let split = count - shift;
            let order = (split..count).chain(0..split).collect();
            Self {
                order,
                offset: shift as i64,
                before: shift,
                after: 0,
            }
        } else {
            // Rotate left: the first `count - shift` slides move behind.
            let moved = count - shift;
            let order = (moved..count).chain(0..moved).collect();
            Self {
                order,
                offset: -(moved as i64),
                before: 0,
                after: moved,
            }
        };

        ldebug!(
            count,
            resting,
            pivot_index,
            shift,
            offset = plan.offset,
            "SlidePlan::new"
        );
        plan
    }

    /// The unrotated order.
    pub fn identity(count: usize) -> Self {
        Self {
            order: (0..count).collect(),
            offset: 0,
            before: 0,
            after: 0,
        }
    }

    /// Logical indexes in physical (left to right) order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// `+k` when `k` slides were rotated to the front, `-k` when `k` were rotated to the back.
    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn before_len(&self) -> usize {
        self.before
    }

    pub fn after_len(&self) -> usize {
        self.after
    }

    pub fn logical_at(&self, physical: usize) -> Option<usize> {
        self.order.get(physical).copied()
    }

    pub fn physical_of(&self, logical: usize) -> Option<usize> {
        let count = self.order.len();
        if logical >= count {
            return None;
        }
        Some(wrap(logical as i64 + self.offset, count))
    }

    pub fn segment_of(&self, physical: usize) -> Option<Segment> {
        let count = self.order.len();
        if physical >= count {
            return None;
        }
        Some(if physical < self.before {
            Segment::Before
        } else if physical >= count - self.after {
            Segment::After
        } else {
            Segment::Middle
        })
    }

    /// Applies the plan to the owner's slides, borrowing them in physical order.
    ///
    /// `slides.len()` should match the planned count; extra slides are ignored and missing ones
    /// are skipped.
    pub fn arrange<'a, T>(&self, slides: &'a [T]) -> Vec<&'a T> {
        debug_assert!(
            slides.len() == self.order.len(),
            "SlidePlan::arrange: planned {} slides, got {}",
            self.order.len(),
            slides.len()
        );
        self.order.iter().filter_map(|&i| slides.get(i)).collect()
    }

    /// Same as [`Self::arrange`], but takes ownership of the slides.
    pub fn arrange_owned<T>(&self, slides: Vec<T>) -> Vec<T> {
        debug_assert!(
            slides.len() == self.order.len(),
            "SlidePlan::arrange_owned: planned {} slides, got {}",
            self.order.len(),
            slides.len()
        );
        let mut slots: Vec<Option<T>> = slides.into_iter().map(Some).collect();
        self.order
            .iter()
            .filter_map(|&i| slots.get_mut(i).and_then(Option::take))
            .collect()
    }
}

/// Plans the physical order of `count` slides. See [`SlidePlan`].
pub fn plan(count: usize, resting_index: usize, pivot_index: usize, looping: bool) -> SlidePlan {
    SlidePlan::new(count, resting_index, pivot_index, looping)
}
