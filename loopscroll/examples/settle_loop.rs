// Example: drive the scroll/settle feedback loop by hand, the way a UI adapter would.
use loopscroll::{Carousel, CarouselOptions, Settle};

const WIDTH: f64 = 320.0;

fn main() {
    let mut c = Carousel::new(
        CarouselOptions::new(6)
            .with_looping(true)
            .with_on_slide_change(Some(|i| println!("  on_slide_change({i})"))),
    );

    // Initial layout: re-centre the container on the resting slide.
    let mut scroll_left = c.commit_layout(WIDTH);
    c.on_scroll(scroll_left, WIDTH, 0);
    println!("order={:?} scroll_left={scroll_left}", c.plan().order());

    let mut now_ms = 0u64;
    for gesture in [2i64, -3, -1, 2] {
        // Simulate a fling: a burst of scroll events ~16ms apart.
        let target = scroll_left + gesture as f64 * WIDTH;
        let steps = 8;
        for step in 1..=steps {
            now_ms += 16;
            let left = scroll_left + (target - scroll_left) * step as f64 / steps as f64;
            c.on_scroll(left, WIDTH, now_ms);
        }
        scroll_left = target;

        // Adapter timer: keep polling until the gesture settles.
        loop {
            now_ms += 50;
            match c.update(now_ms) {
                Settle::Pending => continue,
                settle => {
                    println!("gesture {gesture:+}: {settle:?} at t={now_ms}ms");
                    break;
                }
            }
        }

        if c.needs_layout() {
            scroll_left = c.commit_layout(WIDTH);
            c.on_scroll(scroll_left, WIDTH, now_ms);
        }
        println!(
            "  resting={} order={:?} offset={} scroll_left={scroll_left}",
            c.resting_index(),
            c.plan().order(),
            c.offset()
        );
    }
}
