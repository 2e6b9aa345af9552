use loopscroll::{Carousel, CarouselOptions, Settle};
use loopscroll_adapter::{
    Controller, Easing, RenderHost, ScrollAnimation, ScrollBehavior, ScrollContainer,
};

// A container that neither animates nor reports programmatic writes, like a terminal viewport.
#[derive(Debug)]
struct Viewport {
    left: f64,
    width: f64,
}

impl ScrollContainer for Viewport {
    fn scroll_left(&self) -> f64 {
        self.left
    }

    fn viewport_width(&self) -> f64 {
        self.width
    }

    fn set_scroll_left(&mut self, left: f64, _behavior: ScrollBehavior) {
        self.left = left;
    }

    fn reports_programmatic_scroll(&self) -> bool {
        false
    }
}

#[derive(Debug, Default)]
struct PrintHost {
    wake_at: Option<u64>,
    now_ms: u64,
}

impl RenderHost for PrintHost {
    fn on_layout_commit(&mut self, carousel: &Carousel) {
        let mut line = String::new();
        carousel.for_each_slide(|s| {
            let mark = if s.playable { "*" } else if s.renderable { "+" } else { "." };
            line.push_str(&format!("[{}{mark}]", s.logical));
        });
        println!("t={:>4} render {line}", self.now_ms);
    }

    fn schedule_effect(&mut self, delay_ms: u64) {
        self.wake_at = Some(self.now_ms + delay_ms);
    }

    fn cancel_effect(&mut self) {
        self.wake_at = None;
    }
}

fn main() {
    // Example: a host-side event loop around the controller.
    //
    // The adapter:
    // - mounts the container (renders the physical order and re-centres)
    // - forwards button presses to next()/prev()
    // - ticks every frame while a tween runs, and when the scheduled settle effect is due
    let options = CarouselOptions::new(7)
        .with_looping(true)
        .with_on_slide_change(Some(|i| println!("       on_slide_change({i})")));
    let mut c = Controller::new(options, PrintHost::default()).with_animation(
        ScrollAnimation::Tween {
            duration_ms: 240,
            easing: Easing::EaseInOutCubic,
        },
    );
    c.mount(Viewport {
        left: 0.0,
        width: 80.0,
    });

    let presses = [(100u64, true), (150, true), (900, false), (1_600, false)];
    let mut now_ms = 0u64;
    while now_ms < 2_500 {
        now_ms += 16;
        c.host_mut().now_ms = now_ms;

        for &(at, forward) in &presses {
            if (now_ms - 16..now_ms).contains(&at) {
                let moved = if forward { c.next(now_ms) } else { c.prev(now_ms) };
                println!("t={now_ms:>4} press {} moved={moved}", if forward { "next" } else { "prev" });
            }
        }

        let due = c.host().wake_at.is_some_and(|at| at <= now_ms);
        if c.is_animating() || due {
            c.host_mut().wake_at = None;
            if let Settle::Committed(i) = c.tick(now_ms) {
                println!("t={now_ms:>4} rest on {i}");
            }
        }
    }
}
