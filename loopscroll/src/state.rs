/// A lightweight, serializable snapshot of a carousel.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. It is enough to
/// restore the resting slide across sessions; in-flight gestures are not captured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    pub count: usize,
    pub looping: bool,
    pub resting_index: usize,
    /// Offset of the physical order this state was rendered with.
    pub offset: i64,
}
