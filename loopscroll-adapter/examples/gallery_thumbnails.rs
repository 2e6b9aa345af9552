use loopscroll::{Carousel, CarouselOptions};
use loopscroll_adapter::{
    Controller, GalleryContext, ParentLookup, RenderHost, ScrollBehavior, ScrollContainer,
};

#[derive(Debug)]
struct Container {
    left: f64,
}

impl ScrollContainer for Container {
    fn scroll_left(&self) -> f64 {
        self.left
    }

    fn viewport_width(&self) -> f64 {
        100.0
    }

    fn set_scroll_left(&mut self, left: f64, _behavior: ScrollBehavior) {
        self.left = left;
    }

    fn reports_programmatic_scroll(&self) -> bool {
        false
    }
}

#[derive(Debug)]
struct NoopHost;

impl RenderHost for NoopHost {
    fn on_layout_commit(&mut self, carousel: &Carousel) {
        println!("main order={:?}", carousel.plan().order());
    }

    fn schedule_effect(&mut self, _delay_ms: u64) {}
}

// A thumbnail strip: node 0 is the strip, nodes 1..=5 are thumbnails, 6..=10 their images.
struct Strip;

impl ParentLookup for Strip {
    type Node = u32;

    fn parent(&self, node: &u32) -> Option<u32> {
        match *node {
            0 => None,
            1..=5 => Some(0),
            n => Some(n - 5),
        }
    }
}

fn main() {
    // Example: a gallery where clicks on thumbnails move the main carousel.
    let mut main = Controller::new(CarouselOptions::new(5).with_looping(true), NoopHost);
    main.mount(Container { left: 0.0 });
    let mut gallery = GalleryContext::new(main.carousel().count());

    for clicked in [8u32, 10, 0, 6] {
        let thumb = gallery.select_from_target(&Strip, clicked, |&n| {
            (1..=5).contains(&n).then(|| n as usize - 1)
        });
        let moved = gallery.apply(&mut main);
        println!(
            "click on node {clicked}: thumbnail={thumb:?} moved={moved:?} current={}",
            gallery.current_slide()
        );
    }
}
