use crate::*;

use loopscroll::{CarouselOptions, Direction, Phase, ScrollEvent, Settle};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::vec;
use std::vec::Vec;

const W: f64 = 400.0;

#[derive(Debug, Default)]
struct ContainerState {
    left: f64,
    width: f64,
    writes: Vec<(f64, ScrollBehavior)>,
    pending_events: usize,
}

/// A scroll container handle. Like a browser, a write that moves the container queues one scroll
/// event (unless `reports` is off); tests deliver queued events with [`pump`].
#[derive(Clone, Debug)]
struct FakeContainer {
    state: Rc<RefCell<ContainerState>>,
    reports: bool,
}

impl FakeContainer {
    fn new(width: f64) -> Self {
        Self {
            state: Rc::new(RefCell::new(ContainerState {
                width,
                ..ContainerState::default()
            })),
            reports: true,
        }
    }

    fn silent(width: f64) -> Self {
        Self {
            reports: false,
            ..Self::new(width)
        }
    }

    fn left(&self) -> f64 {
        self.state.borrow().left
    }

    fn writes(&self) -> Vec<(f64, ScrollBehavior)> {
        self.state.borrow().writes.clone()
    }

    fn pending_events(&self) -> usize {
        self.state.borrow().pending_events
    }

    fn user_scroll_to(&self, left: f64) {
        self.state.borrow_mut().left = left;
    }

    fn resize(&self, width: f64) {
        self.state.borrow_mut().width = width;
    }
}

impl ScrollContainer for FakeContainer {
    fn scroll_left(&self) -> f64 {
        self.state.borrow().left
    }

    fn viewport_width(&self) -> f64 {
        self.state.borrow().width
    }

    fn set_scroll_left(&mut self, left: f64, behavior: ScrollBehavior) {
        let mut state = self.state.borrow_mut();
        state.writes.push((left, behavior));
        if state.left != left && self.reports {
            state.pending_events += 1;
        }
        state.left = left;
    }

    fn reports_programmatic_scroll(&self) -> bool {
        self.reports
    }
}

#[derive(Clone, Debug, PartialEq)]
enum HostEvent {
    Mount,
    Layout(Vec<usize>),
    Unmount,
    Schedule(u64),
    Cancel,
}

#[derive(Debug, Default)]
struct FakeHost {
    events: Vec<HostEvent>,
}

impl FakeHost {
    fn layouts(&self) -> Vec<Vec<usize>> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::Layout(order) => Some(order.clone()),
                _ => None,
            })
            .collect()
    }

    fn last_schedule(&self) -> Option<u64> {
        self.events.iter().rev().find_map(|e| match e {
            HostEvent::Schedule(delay) => Some(*delay),
            _ => None,
        })
    }
}

impl RenderHost for FakeHost {
    fn on_mount(&mut self) {
        self.events.push(HostEvent::Mount);
    }

    fn on_layout_commit(&mut self, carousel: &loopscroll::Carousel) {
        self.events
            .push(HostEvent::Layout(carousel.plan().order().to_vec()));
    }

    fn on_unmount(&mut self) {
        self.events.push(HostEvent::Unmount);
    }

    fn schedule_effect(&mut self, delay_ms: u64) {
        self.events.push(HostEvent::Schedule(delay_ms));
    }

    fn cancel_effect(&mut self) {
        self.events.push(HostEvent::Cancel);
    }
}

type Ctrl = Controller<FakeContainer, FakeHost>;

/// Delivers the scroll events the container queued for programmatic writes.
fn pump(c: &mut Ctrl, now_ms: u64) -> Vec<ScrollEvent> {
    let mut out = Vec::new();
    loop {
        let Some(container) = c.container() else {
            break;
        };
        {
            let mut state = container.state.borrow_mut();
            if state.pending_events == 0 {
                break;
            }
            state.pending_events -= 1;
        }
        out.push(c.on_scroll(now_ms));
    }
    out
}

fn looping_controller(count: usize) -> (Ctrl, FakeContainer) {
    let mut c = Controller::new(CarouselOptions::new(count).with_looping(true), FakeHost::default());
    let container = FakeContainer::new(W);
    assert!(c.mount(container.clone()).is_none());
    assert_eq!(pump(&mut c, 0), vec![ScrollEvent::Ignored]);
    (c, container)
}

#[test]
fn mount_renders_and_centres_resting_slide() {
    let (c, container) = looping_controller(5);

    assert_eq!(
        c.host().events,
        vec![HostEvent::Mount, HostEvent::Layout(vec![3, 4, 0, 1, 2])]
    );
    assert_eq!(container.writes(), vec![(2.0 * W, ScrollBehavior::Instant)]);
    assert!(c.is_mounted());
    assert!(!c.carousel().needs_layout());
    assert!(!c.carousel().reconciler().is_ignoring_programmatic_scroll());
    assert_eq!(c.carousel().phase(), Phase::Idle);
}

#[test]
fn mount_without_movement_does_not_leave_a_stale_ignore_flag() {
    // Non-looping carousels rest at scroll position 0: nothing moves and no event arrives.
    let mut c = Controller::new(CarouselOptions::new(5), FakeHost::default());
    let container = FakeContainer::new(W);
    c.mount(container.clone());
    assert_eq!(container.pending_events(), 0);
    assert!(!c.carousel().reconciler().is_ignoring_programmatic_scroll());

    container.user_scroll_to(W);
    assert_eq!(c.on_scroll(10), ScrollEvent::Tracked(1));
}

#[test]
fn mounting_a_second_container_releases_the_first() {
    let (mut c, first) = looping_controller(5);
    let second = FakeContainer::new(W);
    let released = c.mount(second.clone()).unwrap();
    assert!(Rc::ptr_eq(&released.state, &first.state));
    assert!(c.host().events.contains(&HostEvent::Unmount));
    assert_eq!(second.left(), 2.0 * W);
}

#[test]
fn user_scroll_settles_and_recentres() {
    let (mut c, container) = looping_controller(5);

    container.user_scroll_to(3.0 * W);
    assert_eq!(c.on_scroll(1_000), ScrollEvent::Tracked(1));
    assert_eq!(c.host().last_schedule(), Some(200));

    // Woken up early: reschedules for the rest of the delay.
    assert_eq!(c.tick(1_100), Settle::Pending);
    assert_eq!(c.host().last_schedule(), Some(100));

    assert_eq!(c.tick(1_200), Settle::Committed(1));
    assert_eq!(c.carousel().resting_index(), 1);
    assert_eq!(c.host().layouts().last().unwrap(), &vec![4, 0, 1, 2, 3]);
    assert_eq!(container.left(), 2.0 * W);

    // The re-centring write is not mistaken for a gesture.
    assert_eq!(pump(&mut c, 1_201), vec![ScrollEvent::Ignored]);
    assert_eq!(c.carousel().phase(), Phase::Idle);
    assert_eq!(c.tick(5_000), Settle::Pending);
}

#[test]
fn scrolling_back_to_rest_commits_nothing() {
    let (mut c, container) = looping_controller(5);
    let layouts_before = c.host().layouts().len();

    container.user_scroll_to(2.6 * W);
    c.on_scroll(0);
    container.user_scroll_to(2.0 * W);
    c.on_scroll(50);

    assert_eq!(c.tick(250), Settle::Unchanged);
    assert_eq!(c.carousel().resting_index(), 0);
    assert_eq!(c.host().layouts().len(), layouts_before);
}

#[test]
fn native_advance_commits_after_the_smooth_scroll_settles() {
    let (mut c, container) = looping_controller(5);

    assert!(c.next(1_000));
    assert_eq!(
        container.writes().last(),
        Some(&(3.0 * W, ScrollBehavior::Smooth))
    );
    // Advancing alone never moves the resting index.
    assert_eq!(c.carousel().resting_index(), 0);

    assert_eq!(pump(&mut c, 1_050), vec![ScrollEvent::Tracked(1)]);
    assert_eq!(c.tick(1_250), Settle::Committed(1));
    assert_eq!(c.carousel().resting_index(), 1);
    assert_eq!(pump(&mut c, 1_251), vec![ScrollEvent::Ignored]);
}

#[test]
fn tween_advance_drives_a_silent_container() {
    let mut c = Controller::new(CarouselOptions::new(5).with_looping(true), FakeHost::default())
        .with_animation(ScrollAnimation::Tween {
            duration_ms: 300,
            easing: Easing::Linear,
        });
    let container = FakeContainer::silent(W);
    c.mount(container.clone());
    assert!(!c.carousel().reconciler().is_ignoring_programmatic_scroll());

    assert!(c.prev(1_000));
    assert!(c.is_animating());

    let mut last = container.left();
    for now_ms in [1_050u64, 1_100, 1_200, 1_300] {
        assert_eq!(c.tick(now_ms), Settle::Pending);
        assert!(container.left() <= last);
        last = container.left();
    }
    assert!(!c.is_animating());
    assert_eq!(container.left(), W);
    assert_eq!(c.carousel().current_index(), Some(4));
    assert_eq!(c.host().last_schedule(), Some(200));

    assert_eq!(c.tick(1_500), Settle::Committed(4));
    assert_eq!(c.carousel().resting_index(), 4);
    assert_eq!(container.left(), 2.0 * W);
    assert!(!c.carousel().reconciler().is_ignoring_programmatic_scroll());
}

#[test]
fn rapid_advances_chain_off_the_pending_target() {
    let mut c = Controller::new(CarouselOptions::new(5).with_looping(true), FakeHost::default())
        .with_animation(ScrollAnimation::Tween {
            duration_ms: 300,
            easing: Easing::SmoothStep,
        });
    let container = FakeContainer::silent(W);
    c.mount(container.clone());

    assert!(c.next(1_000));
    assert!(c.next(1_100));
    // Already two slides past the pivot: the scroll extent is exhausted.
    assert!(!c.next(1_150));

    for now_ms in [1_200u64, 1_300, 1_400] {
        c.tick(now_ms);
    }
    assert_eq!(container.left(), 4.0 * W);
    assert_eq!(c.tick(1_600), Settle::Committed(2));
    assert_eq!(c.carousel().resting_index(), 2);
}

#[test]
fn user_scroll_cancels_the_tween() {
    let mut c = Controller::new(CarouselOptions::new(5).with_looping(true), FakeHost::default())
        .with_animation(ScrollAnimation::Tween {
            duration_ms: 300,
            easing: Easing::EaseInOutCubic,
        });
    let container = FakeContainer::silent(W);
    c.mount(container.clone());

    assert!(c.next(0));
    c.tick(100);
    container.user_scroll_to(W);
    assert_eq!(c.on_scroll(120), ScrollEvent::Tracked(4));
    assert!(!c.is_animating());
    assert_eq!(c.tick(320), Settle::Committed(4));
}

#[test]
fn advance_respects_disabled_edges() {
    let mut c = Controller::new(CarouselOptions::new(3), FakeHost::default());
    let container = FakeContainer::new(W);
    assert!(!c.prev(0));
    c.mount(container.clone());

    assert!(c.is_disabled(Direction::Prev));
    assert!(!c.prev(0));
    assert_eq!(container.writes(), vec![(0.0, ScrollBehavior::Instant)]);

    assert!(!c.is_disabled(Direction::Next));
    assert!(c.next(0));
    assert_eq!(container.left(), W);
}

#[test]
fn go_to_slide_recentres_immediately() {
    let (mut c, container) = looping_controller(5);
    let notified = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&notified);
    c.update_options(move |o| {
        *o = o
            .clone()
            .with_on_slide_change(Some(move |i| sink.lock().unwrap().push(i)));
    });

    assert_eq!(c.go_to_slide(3), Some(3));
    assert_eq!(*notified.lock().unwrap(), vec![3]);
    assert_eq!(c.host().layouts().last().unwrap(), &vec![1, 2, 3, 4, 0]);
    assert!(c.host().events.contains(&HostEvent::Cancel));

    // Slide 3 lands on the pivot slot again, so the container does not move.
    assert_eq!(container.left(), 2.0 * W);
    assert_eq!(container.pending_events(), 0);
    assert!(!c.carousel().reconciler().is_ignoring_programmatic_scroll());
    assert_eq!(c.carousel().phase(), Phase::Idle);

    assert_eq!(c.go_to_slide(3), None);
    assert_eq!(c.go_to_slide(99), Some(4));
    assert_eq!(*notified.lock().unwrap(), vec![3, 4]);
}

#[test]
fn go_to_slide_drops_the_gesture_in_progress() {
    let (mut c, container) = looping_controller(5);

    container.user_scroll_to(3.0 * W);
    c.on_scroll(0);
    assert_eq!(c.go_to_slide(2), Some(2));
    assert_eq!(c.tick(1_000), Settle::Pending);
    assert_eq!(c.carousel().resting_index(), 2);
}

#[test]
fn unmount_never_commits_a_detached_gesture() {
    let (mut c, container) = looping_controller(5);

    container.user_scroll_to(3.0 * W);
    assert_eq!(c.on_scroll(0), ScrollEvent::Tracked(1));
    let released = c.unmount().unwrap();
    assert!(Rc::ptr_eq(&released.state, &container.state));

    assert_eq!(
        &c.host().events[c.host().events.len() - 2..],
        &[HostEvent::Cancel, HostEvent::Unmount]
    );
    assert_eq!(c.tick(10_000), Settle::Pending);
    assert_eq!(c.on_scroll(10_000), ScrollEvent::Skipped);
    assert_eq!(c.carousel().resting_index(), 0);
    assert!(c.unmount().is_none());
}

#[test]
fn resize_recentres_with_the_new_width() {
    let (mut c, container) = looping_controller(5);

    container.resize(500.0);
    c.on_resize();
    assert_eq!(container.left(), 1_000.0);
    assert_eq!(pump(&mut c, 10), vec![ScrollEvent::Ignored]);

    container.user_scroll_to(1_500.0);
    assert_eq!(c.on_scroll(20), ScrollEvent::Tracked(1));
}

#[test]
fn zero_width_container_defers_layout_until_resize() {
    let mut c = Controller::new(CarouselOptions::new(5).with_looping(true), FakeHost::default());
    let container = FakeContainer::new(0.0);
    c.mount(container.clone());
    assert!(container.writes().is_empty());
    assert!(c.carousel().needs_layout());

    container.resize(W);
    c.on_resize();
    assert_eq!(container.left(), 2.0 * W);
    assert!(!c.carousel().needs_layout());
}

#[test]
fn controlled_mode_waits_for_the_owner() {
    let requested = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&requested);
    let options = CarouselOptions::new(5)
        .with_looping(true)
        .with_controlled_resting_index(move |i| sink.lock().unwrap().push(i));
    let mut c = Controller::new(options, FakeHost::default());
    let container = FakeContainer::new(W);
    c.mount(container.clone());
    pump(&mut c, 0);
    let layouts = c.host().layouts().len();

    container.user_scroll_to(W);
    c.on_scroll(100);
    assert_eq!(c.tick(300), Settle::Committed(4));
    assert_eq!(*requested.lock().unwrap(), vec![4]);
    // Nothing re-plans until the owner hands the index back.
    assert_eq!(c.carousel().resting_index(), 0);
    assert_eq!(c.host().layouts().len(), layouts);

    c.set_resting_index(4);
    assert_eq!(c.carousel().resting_index(), 4);
    assert_eq!(c.host().layouts().len(), layouts + 1);
    assert_eq!(container.left(), 2.0 * W);
    assert_eq!(pump(&mut c, 301), vec![ScrollEvent::Ignored]);
}

#[test]
fn shrinking_the_slide_list_replans() {
    let (mut c, container) = looping_controller(5);
    c.go_to_slide(4);
    pump(&mut c, 0);

    c.set_count(3);
    assert_eq!(c.carousel().resting_index(), 2);
    assert_eq!(c.carousel().plan().len(), 3);
    assert_eq!(container.left(), W);

    c.set_looping(false);
    assert_eq!(c.host().layouts().last().unwrap(), &vec![0, 1, 2]);
    assert_eq!(container.left(), 2.0 * W);
}

#[test]
fn gallery_thumbnails_drive_the_main_carousel() {
    let (mut main, container) = looping_controller(5);
    let mut gallery = GalleryContext::new(5);

    gallery.select(3);
    assert_eq!(gallery.requested(), Some(3));
    assert_eq!(gallery.apply(&mut main), Some(3));
    assert_eq!(gallery.requested(), None);
    assert_eq!(gallery.current_slide(), 3);
    assert_eq!(main.carousel().resting_index(), 3);

    // The main carousel moving on its own is reflected back to the thumbnails.
    container.user_scroll_to(3.0 * W);
    main.on_scroll(1_000);
    main.tick(1_200);
    gallery.sync_from(main.carousel());
    assert_eq!(gallery.current_slide(), 4);

    gallery.select(40);
    assert_eq!(gallery.requested(), Some(4));
    assert_eq!(gallery.apply(&mut main), None);
    assert_eq!(gallery.apply(&mut main), None);
}

#[test]
fn gallery_keeps_selection_while_controlled_owner_catches_up() {
    let requested = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&requested);
    let options = CarouselOptions::new(5)
        .with_looping(true)
        .with_controlled_resting_index(move |i| sink.lock().unwrap().push(i));
    let mut main = Controller::new(options, FakeHost::default());
    main.mount(FakeContainer::new(W));
    pump(&mut main, 0);
    let mut gallery = GalleryContext::new(5);

    gallery.select(3);
    assert_eq!(gallery.apply(&mut main), Some(3));
    assert_eq!(*requested.lock().unwrap(), vec![3]);
    assert_eq!(main.carousel().resting_index(), 0);
    assert_eq!(gallery.current_slide(), 3);

    main.set_resting_index(3);
    gallery.sync_from(main.carousel());
    assert_eq!(gallery.current_slide(), 3);
    assert!(!main.carousel().reconciler().is_ignoring_programmatic_scroll());
}

#[test]
fn gallery_clamps_on_slide_count_changes() {
    let mut gallery = GalleryContext::new(0);
    gallery.select(2);
    assert_eq!(gallery.requested(), None);

    gallery.set_slide_count(6);
    gallery.select(5);
    gallery.set_slide_count(3);
    assert_eq!(gallery.current_slide(), 2);
    assert_eq!(gallery.requested(), Some(2));

    gallery.set_slide_count(0);
    assert_eq!(gallery.current_slide(), 0);
    assert_eq!(gallery.requested(), None);
}

/// Nodes are indexes into `parents`.
struct Tree {
    parents: Vec<Option<usize>>,
}

impl ParentLookup for Tree {
    type Node = usize;

    fn parent(&self, node: &usize) -> Option<usize> {
        self.parents.get(*node).copied().flatten()
    }
}

#[test]
fn closest_walks_up_from_the_start_node() {
    // 0 <- 1 <- 2 <- 3, and 0 <- 4
    let tree = Tree {
        parents: vec![None, Some(0), Some(1), Some(2), Some(0)],
    };

    assert_eq!(closest(&tree, 3, |&n| n == 1), Some(1));
    assert_eq!(closest(&tree, 3, |&n| n == 3), Some(3));
    assert_eq!(closest(&tree, 4, |&n| n == 1), None);
    assert_eq!(
        find_ancestor_map(&tree, 2, |&n| (n < 2).then_some(n * 10)),
        Some(10)
    );
}

#[test]
fn ancestor_walk_stops_on_cycles() {
    let tree = Tree {
        parents: vec![Some(1), Some(0)],
    };
    let mut visited = 0usize;
    let found = find_ancestor_map(&tree, 0, |_| {
        visited += 1;
        None::<()>
    });
    assert_eq!(found, None);
    assert_eq!(visited, MAX_ANCESTOR_DEPTH);
}

#[test]
fn click_inside_a_thumbnail_selects_its_slide() {
    // Slides are nodes 10..13 under the strip (node 0); 20 and 21 are nested inside slide 12.
    let mut parents = vec![None; 22];
    for slide in 10..13 {
        parents[slide] = Some(0);
    }
    parents[20] = Some(12);
    parents[21] = Some(20);
    let tree = Tree { parents };
    let slide_index_of = |&n: &usize| (10..13).contains(&n).then(|| n - 10);

    let mut gallery = GalleryContext::new(3);
    assert_eq!(gallery.select_from_target(&tree, 21, slide_index_of), Some(2));
    assert_eq!(gallery.current_slide(), 2);

    gallery.take_request();
    assert_eq!(gallery.select_from_target(&tree, 0, slide_index_of), None);
    assert_eq!(gallery.requested(), None);
}

#[test]
fn tween_samples_between_endpoints() {
    let t = Tween::new(100.0, 500.0, 1_000, 200, Easing::SmoothStep);
    assert_eq!(t.sample(900), 100.0);
    assert_eq!(t.sample(1_100), 300.0);
    assert_eq!(t.sample(1_200), 500.0);
    assert!(t.is_done(1_200));

    let mut r = Tween::new(0.0, 100.0, 0, 100, Easing::Linear);
    r.retarget(50, 300.0, 100);
    assert_eq!(r.from, 50.0);
    assert_eq!(r.to, 300.0);
    assert_eq!(r.sample(100), 175.0);

    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
    }
}
