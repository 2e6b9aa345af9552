use loopscroll::{Carousel, CarouselOptions};

fn main() {
    let c = Carousel::new(CarouselOptions::new(5).with_looping(true));
    println!("pivot={} offset={}", c.pivot_index(), c.offset());
    println!("physical order={:?}", c.plan().order());
    c.for_each_slide(|s| {
        println!(
            "slot={} slide={} segment={:?} renderable={} playable={}",
            s.physical, s.logical, s.segment, s.renderable, s.playable
        );
    });
}
