use loopscroll::Carousel;

use crate::{Controller, ParentLookup, RenderHost, ScrollContainer, find_ancestor_map};

/// State shared between a gallery's main carousel and its thumbnail strip.
///
/// The main carousel publishes its resting slide here; the thumbnails request a slide by
/// calling [`GalleryContext::select`], and the gallery forwards that request to the main
/// carousel with [`GalleryContext::apply`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GalleryContext {
    current_slide: usize,
    slide_count: usize,
    requested: Option<usize>,
}

impl GalleryContext {
    pub fn new(slide_count: usize) -> Self {
        Self {
            current_slide: 0,
            slide_count,
            requested: None,
        }
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// A slide selection waiting to be applied to the main carousel.
    pub fn requested(&self) -> Option<usize> {
        self.requested
    }

    pub fn take_request(&mut self) -> Option<usize> {
        self.requested.take()
    }

    pub fn set_slide_count(&mut self, slide_count: usize) {
        self.slide_count = slide_count;
        self.current_slide = self.current_slide.min(slide_count.saturating_sub(1));
        self.requested = self
            .requested
            .filter(|_| slide_count > 0)
            .map(|i| i.min(slide_count - 1));
    }

    /// Requests `index` as the current slide (clamped). Ignored without slides.
    pub fn select(&mut self, index: usize) {
        if self.slide_count == 0 {
            return;
        }
        let index = index.min(self.slide_count - 1);
        self.current_slide = index;
        self.requested = Some(index);
    }

    /// Selects the slide owning `target`, e.g. the element a click landed on inside a thumbnail.
    ///
    /// `slide_index_of` recognises slide nodes; the walk goes up from `target` through its
    /// ancestors. Returns the selected index.
    pub fn select_from_target<L: ParentLookup>(
        &mut self,
        lookup: &L,
        target: L::Node,
        slide_index_of: impl FnMut(&L::Node) -> Option<usize>,
    ) -> Option<usize> {
        let index = find_ancestor_map(lookup, target, slide_index_of)?;
        self.select(index);
        self.requested
    }

    /// Publishes the main carousel's resting slide.
    pub fn sync_from(&mut self, carousel: &Carousel) {
        self.slide_count = carousel.count();
        self.current_slide = carousel.resting_index();
    }

    /// Forwards a pending selection to the main carousel.
    ///
    /// Returns the slide the carousel moved to, if it moved. A controlled carousel only hands
    /// the index to its owner, so the selection is kept here until the owner applies it.
    pub fn apply<C: ScrollContainer, H: RenderHost>(
        &mut self,
        main: &mut Controller<C, H>,
    ) -> Option<usize> {
        let requested = self.take_request()?;
        let moved = main.go_to_slide(requested);
        let carousel = main.carousel();
        match moved {
            Some(index) if carousel.options().resting_index_mode.is_controlled() => {
                self.slide_count = carousel.count();
                self.current_slide = index;
            }
            _ => self.sync_from(carousel),
        }
        moved
    }
}
