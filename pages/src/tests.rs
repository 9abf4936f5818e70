use crate::*;

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Display;
use pretty_assertions::assert_eq;
use std::sync::Mutex;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start) as u64) as usize
    }

    /// Integer-valued floats keep the offset arithmetic exact.
    fn gen_range_f32(&mut self, start: i32, end_exclusive: i32) -> f32 {
        let span = (end_exclusive - start) as u64;
        (start + (self.next_u64() % span) as i32) as f32
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

fn geometry(page_count: usize, width: f32, index: usize, bounce: bool) -> PageGeometry {
    let opts = PagingOptions::new()
        .with_bounce(bounce)
        .with_initial_index(index);
    let mut g = PageGeometry::new(&opts, page_count);
    g.set_page_width(width);
    g
}

#[derive(Debug, Default)]
struct RecordingBackend {
    presented: Vec<(u32, NavigationDirection, bool)>,
}

impl PagingBackend for RecordingBackend {
    type Container = u32;

    fn present(&mut self, container: &u32, direction: NavigationDirection, animated: bool) {
        self.presented.push((*container, direction, animated));
    }
}

fn recorded_changes() -> (Arc<Mutex<Vec<usize>>>, PagingOptions) {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let opts = PagingOptions::new().with_on_page_change(Some({
        let changes = Arc::clone(&changes);
        move |i: usize| changes.lock().unwrap().push(i)
    }));
    (changes, opts)
}

#[test]
fn model_pages_have_one_page_per_item_in_source_order() {
    for n in [0usize, 1, 2, 7, 64] {
        let items: Vec<u32> = (0..n as u32).map(|i| i * 10).collect();
        let set = PageSet::from_model(&items, |i, item| (i, *item));
        assert_eq!(set.len(), n);
        for (i, page) in set.iter().enumerate() {
            assert_eq!(page.position(), i);
            assert_eq!(*page.content(), (i, i as u32 * 10));
        }
    }
}

#[test]
fn model_pages_count_matches_collection_exactly() {
    struct Car {
        model: &'static str,
    }
    let cars = [Car { model: "Ford" }, Car { model: "Ferrari" }];
    let set = PageSet::from_model(&cars, |_, car| String::from("Car model: ") + car.model);
    assert_eq!(set.len(), cars.len());
    assert_eq!(set[1].content(), "Car model: Ferrari");
}

#[test]
fn static_pages_preserve_declaration_positions() {
    for k in 1..=MAX_STATIC_PAGES {
        let set = PageSet::from_static((0..k).map(|i| i * 3)).unwrap();
        assert_eq!(set.len(), k);
        for page in &set {
            assert_eq!(*page.content(), page.position() * 3);
        }
    }
}

#[test]
fn static_pages_reject_unsupported_arity() {
    assert_eq!(
        PageSet::from_static(0..11).unwrap_err(),
        PagesError::TooManyStaticPages { count: 11, max: 10 }
    );
    assert_eq!(
        PageSet::<u8>::from_static([]).unwrap_err(),
        PagesError::NoStaticPages
    );
    assert_eq!(
        PagesError::TooManyStaticPages { count: 11, max: 10 }.to_string(),
        "a static page list supports at most 10 pages, got 11"
    );
}

#[test]
fn static_pages_macro_erases_heterogeneous_contents() {
    let set = static_pages![dyn Display; "A", 2, 'c'];
    let rendered: Vec<String> = set.contents().map(|c| c.to_string()).collect();
    assert_eq!(rendered, vec!["A", "2", "c"]);
    assert_eq!(set[2].position(), 2);
}

#[test]
fn drag_changed_within_bounds_is_not_clamped() {
    let mut g = geometry(3, 300.0, 1, false);
    assert_eq!(g.offset(), -300.0);
    assert_eq!(g.on_drag_changed(-200.0), -500.0);
    assert_eq!(g.drag_offset(), -200.0);
    assert!(g.is_dragging());
}

#[test]
fn drag_end_past_half_advances_and_snaps() {
    let mut g = geometry(3, 300.0, 1, false);
    g.on_drag_changed(-120.0);
    let snap = g.on_drag_ended(-160.0).unwrap();
    assert_eq!(
        snap,
        Snap {
            from: -420.0,
            to: -600.0,
            previous_index: 1,
            index: 2,
        }
    );
    assert_eq!(snap.direction(), Some(NavigationDirection::Forward));
    assert_eq!(g.current_index(), Some(2));
    assert_eq!(g.offset(), -600.0);
    assert_eq!(g.drag_offset(), 0.0);
    assert!(!g.is_dragging());
}

#[test]
fn drag_end_exactly_half_counts_as_page_change() {
    let mut g = geometry(3, 300.0, 1, true);
    g.on_drag_ended(150.0);
    assert_eq!(g.current_index(), Some(0));

    let mut g = geometry(3, 300.0, 1, true);
    g.on_drag_ended(-150.0);
    assert_eq!(g.current_index(), Some(2));
}

#[test]
fn drag_end_below_half_keeps_index() {
    let mut g = geometry(3, 300.0, 1, true);
    g.on_drag_changed(140.0);
    let snap = g.on_drag_ended(149.0).unwrap();
    assert!(!snap.changed_page());
    assert_eq!(snap.direction(), None);
    assert_eq!(g.current_index(), Some(1));
    assert_eq!(g.offset(), -300.0);
}

#[test]
fn drag_end_clamps_at_first_and_last_page() {
    let mut g = geometry(3, 300.0, 2, true);
    g.on_drag_ended(-1000.0);
    assert_eq!(g.current_index(), Some(2));
    assert_eq!(g.offset(), -600.0);

    let mut g = geometry(3, 300.0, 0, true);
    g.on_drag_ended(1000.0);
    assert_eq!(g.current_index(), Some(0));
    assert_eq!(g.offset(), 0.0);
}

#[test]
fn bounce_allows_overscroll_and_no_bounce_clamps() {
    let mut g = geometry(3, 300.0, 0, true);
    assert_eq!(g.on_drag_changed(80.0), 80.0);

    let mut g = geometry(3, 300.0, 0, false);
    assert_eq!(g.on_drag_changed(80.0), 0.0);

    let mut g = geometry(3, 300.0, 2, false);
    assert_eq!(g.on_drag_changed(-80.0), -600.0);
}

#[test]
fn property_drag_changed_respects_bounce_mode() {
    for seed in [1u64, 2, 3, 4, 5, 123, 999] {
        let mut rng = Lcg::new(seed);
        let count = rng.gen_range_usize(1, 12);
        let width = rng.gen_range_f32(1, 800);
        let index = rng.gen_range_usize(0, count);
        let bounce = rng.gen_bool();
        let mut g = geometry(count, width, index, bounce);
        let min = -((count - 1) as f32) * width;

        for _ in 0..64 {
            let delta = rng.gen_range_f32(-5000, 5000);
            let off = g.on_drag_changed(delta);
            if bounce {
                assert_eq!(off, -(index as f32) * width + delta);
            } else {
                assert!(off >= min && off <= 0.0, "offset {off} outside [{min}, 0]");
            }
        }
    }
}

#[test]
fn property_drag_ended_moves_at_most_one_page() {
    for seed in [7u64, 8, 9, 10, 77, 4242] {
        let mut rng = Lcg::new(seed);
        let count = rng.gen_range_usize(1, 12);
        let width = rng.gen_range_f32(2, 800);
        let mut g = geometry(count, width, rng.gen_range_usize(0, count), rng.gen_bool());

        for _ in 0..64 {
            let before = g.current_index().unwrap();
            let predicted = rng.gen_range_f32(-2000, 2000);
            let snap = g.on_drag_ended(predicted).unwrap();
            let expected = if predicted.abs() < width / 2.0 {
                before
            } else if predicted < 0.0 {
                (before + 1).min(count - 1)
            } else {
                before.saturating_sub(1)
            };
            assert_eq!(snap.index, expected);
            assert_eq!(g.offset(), -(expected as f32) * width);
            assert_eq!(g.drag_offset(), 0.0);
        }
    }
}

#[test]
fn empty_page_set_makes_drags_no_ops() {
    let mut g = geometry(0, 300.0, 0, false);
    assert_eq!(g.current_index(), None);
    assert_eq!(g.state().index_or_marker(), PagingState::EMPTY_INDEX);
    assert_eq!(g.on_drag_changed(-200.0), 0.0);
    assert_eq!(g.on_drag_ended(-200.0), None);
    assert_eq!(g.set_index(1), None);
    assert_eq!(g.current_index(), None);
    assert!(!g.is_dragging());
}

#[test]
fn unmeasured_width_degenerates_to_zero_offsets() {
    let opts = PagingOptions::new().with_bounce(false).with_initial_index(1);
    let mut g = PageGeometry::new(&opts, 3);
    assert_eq!(g.page_width(), 0.0);
    assert_eq!(g.on_drag_changed(-200.0), 0.0);
    let snap = g.on_drag_ended(-200.0).unwrap();
    assert_eq!(snap.index, 2);
    assert_eq!(g.offset(), 0.0);
    // The half-width rule still applies against a zero width, clamped at the ends.
    assert_eq!(g.on_drag_ended(-200.0).unwrap().index, 2);
    assert_eq!(g.on_drag_ended(200.0).unwrap().index, 1);
    assert_eq!(g.offset(), 0.0);

    assert!(!g.set_page_width(f32::NAN));
    assert!(!g.set_page_width(-10.0));
    assert!(g.set_page_width(200.0));
    assert_eq!(g.offset(), -200.0);
}

#[test]
fn width_change_recomputes_dependent_offsets() {
    let mut g = geometry(4, 300.0, 2, false);
    assert_eq!(g.offset(), -600.0);
    assert!(g.set_page_width(500.0));
    assert_eq!(g.offset(), -1000.0);

    g.on_drag_changed(-100.0);
    assert!(g.set_page_width(400.0));
    assert_eq!(g.offset(), -900.0);
    assert!(g.is_dragging());
}

#[test]
fn set_index_resolves_direction_and_drops_drag() {
    let mut g = geometry(5, 100.0, 2, true);
    g.on_drag_changed(-30.0);
    assert_eq!(g.set_index(4), Some(NavigationDirection::Forward));
    assert!(!g.is_dragging());
    assert_eq!(g.offset(), -400.0);
    assert_eq!(g.set_index(1), Some(NavigationDirection::Reverse));
    assert_eq!(g.set_index(1), None);
    assert_eq!(g.set_index(99), Some(NavigationDirection::Forward));
    assert_eq!(g.current_index(), Some(4));
}

#[test]
fn page_count_rebuild_clamps_index() {
    let mut g = geometry(5, 100.0, 4, true);
    assert!(g.set_page_count(3));
    assert_eq!(g.current_index(), Some(2));
    assert_eq!(g.offset(), -200.0);

    assert!(g.set_page_count(0));
    assert_eq!(g.current_index(), None);
    assert_eq!(g.offset(), 0.0);

    assert!(g.set_page_count(2));
    assert_eq!(g.current_index(), Some(0));
    assert!(!g.set_page_count(2));
}

#[test]
fn state_snapshot_can_roundtrip() {
    let mut g = geometry(4, 250.0, 1, true);
    g.on_drag_changed(-40.0);
    let state = g.state();
    assert_eq!(
        state,
        PagingState {
            current_index: Some(1),
            page_width: 250.0,
            drag_offset: -40.0,
        }
    );
    assert_eq!(state.index_or_marker(), 1);

    let mut restored = geometry(4, 0.0, 0, true);
    restored.restore_state(state);
    assert_eq!(restored.state(), state);
    assert_eq!(restored.offset(), -290.0);
}

#[test]
fn drag_gesture_waits_for_min_distance() {
    let mut d = DragGesture::new(Orientation::Horizontal);
    let p = |x: f32| Point::new(x, 0.0);
    assert_eq!(
        d.handle(PointerEvent::Down {
            id: 1,
            position: p(100.0),
            time_ms: 0
        }),
        None
    );
    assert_eq!(
        d.handle(PointerEvent::Move {
            id: 1,
            position: p(95.0),
            time_ms: 8
        }),
        None
    );
    assert!(!d.is_dragging());
    assert_eq!(
        d.handle(PointerEvent::Move {
            id: 1,
            position: p(80.0),
            time_ms: 16
        }),
        Some(DragUpdate::Changed { translation: -20.0 })
    );
    assert!(d.is_dragging());
}

#[test]
fn drag_gesture_projects_release_velocity() {
    let mut d = DragGesture::new(Orientation::Horizontal);
    let p = |x: f32| Point::new(x, 3.0);
    d.handle(PointerEvent::Down {
        id: 7,
        position: p(0.0),
        time_ms: 0,
    });
    d.handle(PointerEvent::Move {
        id: 7,
        position: p(-20.0),
        time_ms: 10,
    });
    d.handle(PointerEvent::Move {
        id: 7,
        position: p(-40.0),
        time_ms: 20,
    });
    let end = d.handle(PointerEvent::Up {
        id: 7,
        position: p(-40.0),
        time_ms: 20,
    });
    assert_eq!(
        end,
        Some(DragUpdate::Ended {
            translation: -40.0,
            predicted_end_translation: -40.0 + project(-2.0),
        })
    );
    assert!(!d.is_dragging());
}

#[test]
fn drag_gesture_release_after_pause_has_no_momentum() {
    let mut d = DragGesture::new(Orientation::Vertical);
    let p = |y: f32| Point::new(0.0, y);
    d.handle(PointerEvent::Down {
        id: 1,
        position: p(0.0),
        time_ms: 0,
    });
    d.handle(PointerEvent::Move {
        id: 1,
        position: p(60.0),
        time_ms: 10,
    });
    let end = d.handle(PointerEvent::Up {
        id: 1,
        position: p(60.0),
        time_ms: 400,
    });
    assert_eq!(
        end,
        Some(DragUpdate::Ended {
            translation: 60.0,
            predicted_end_translation: 60.0,
        })
    );
}

#[test]
fn drag_gesture_ignores_taps_secondary_pointers_and_cancels_to_snap_back() {
    let mut d = DragGesture::new(Orientation::Horizontal).with_min_distance(5.0);
    let p = |x: f32| Point::new(x, 0.0);

    d.handle(PointerEvent::Down {
        id: 1,
        position: p(0.0),
        time_ms: 0,
    });
    assert_eq!(
        d.handle(PointerEvent::Up {
            id: 1,
            position: p(2.0),
            time_ms: 50
        }),
        None
    );

    d.handle(PointerEvent::Down {
        id: 1,
        position: p(0.0),
        time_ms: 100,
    });
    d.handle(PointerEvent::Down {
        id: 2,
        position: p(500.0),
        time_ms: 101,
    });
    assert_eq!(
        d.handle(PointerEvent::Move {
            id: 2,
            position: p(400.0),
            time_ms: 110
        }),
        None
    );
    assert_eq!(
        d.handle(PointerEvent::Move {
            id: 1,
            position: p(90.0),
            time_ms: 110
        }),
        Some(DragUpdate::Changed { translation: 90.0 })
    );
    assert_eq!(
        d.handle(PointerEvent::Cancel { id: 1 }),
        Some(DragUpdate::Ended {
            translation: 90.0,
            predicted_end_translation: 0.0,
        })
    );
}

#[test]
fn drag_updates_drive_geometry() {
    let mut g = geometry(3, 300.0, 0, false);
    assert_eq!(
        DragUpdate::Changed {
            translation: -100.0
        }
        .apply(&mut g),
        None
    );
    assert_eq!(g.offset(), -100.0);
    let snap = DragUpdate::Ended {
        translation: -100.0,
        predicted_end_translation: -400.0,
    }
    .apply(&mut g)
    .unwrap();
    assert_eq!(snap.index, 1);
    assert_eq!(g.offset(), -300.0);
}

#[test]
fn bridge_neighbors_wrap_only_when_enabled() {
    let bridge = PageBridge::new(
        RecordingBackend::default(),
        vec![10, 11, 12],
        PagingOptions::new().with_wrap(true),
    );
    assert_eq!(bridge.neighbor_after(&12), Some(&10));
    assert_eq!(bridge.neighbor_before(&10), Some(&12));
    assert_eq!(bridge.neighbor_after(&10), Some(&11));

    let bridge = PageBridge::new(
        RecordingBackend::default(),
        vec![10, 11, 12],
        PagingOptions::new(),
    );
    assert_eq!(bridge.neighbor_after(&12), None);
    assert_eq!(bridge.neighbor_before(&10), None);
    assert_eq!(bridge.neighbor_before(&12), Some(&11));
}

#[test]
fn bridge_lookup_miss_is_no_neighbor() {
    let bridge = PageBridge::new(
        RecordingBackend::default(),
        vec![10, 11, 12],
        PagingOptions::new().with_wrap(true),
    );
    assert_eq!(bridge.index_of(&99), None);
    assert_eq!(bridge.neighbor_after(&99), None);
    assert_eq!(bridge.neighbor_before(&99), None);
    assert_eq!(bridge.neighbor_index_after(3), None);

    let empty = PageBridge::new(RecordingBackend::default(), vec![], PagingOptions::new());
    assert_eq!(empty.current_index(), None);
    assert_eq!(empty.neighbor_index_before(0), None);
    assert!(empty.backend().presented.is_empty());
}

#[test]
fn bridge_presents_initial_page_without_animation() {
    let bridge = PageBridge::new(
        RecordingBackend::default(),
        vec![10, 11, 12],
        PagingOptions::new().with_initial_index(7),
    );
    assert_eq!(bridge.current_index(), Some(2));
    assert_eq!(
        bridge.backend().presented,
        vec![(12, NavigationDirection::Forward, false)]
    );
}

#[test]
fn bridge_apply_index_resolves_direction_without_notifying() {
    let (changes, opts) = recorded_changes();
    let mut bridge = PageBridge::new(RecordingBackend::default(), vec![10, 11, 12, 13], opts);

    assert_eq!(bridge.apply_index(2), Some(NavigationDirection::Forward));
    assert_eq!(bridge.apply_index(1), Some(NavigationDirection::Reverse));
    assert_eq!(bridge.apply_index(1), None);
    assert_eq!(bridge.current_index(), Some(1));
    assert_eq!(
        &bridge.backend().presented[1..],
        &[
            (12, NavigationDirection::Forward, false),
            (11, NavigationDirection::Reverse, false),
        ]
    );
    assert!(changes.lock().unwrap().is_empty());
}

#[test]
fn bridge_suppresses_echo_of_programmatic_change() {
    let (changes, opts) = recorded_changes();
    let mut bridge = PageBridge::new(RecordingBackend::default(), vec![10, 11, 12], opts);

    bridge.apply_index(2);
    assert_eq!(
        bridge.on_transition_completed(&12, true),
        TransitionOutcome::Echo(2)
    );
    assert!(changes.lock().unwrap().is_empty());

    // User swipes back, then forward onto the page that was applied programmatically.
    assert_eq!(
        bridge.on_transition_completed(&11, true),
        TransitionOutcome::Committed(1)
    );
    assert_eq!(
        bridge.on_transition_completed(&12, true),
        TransitionOutcome::Committed(2)
    );
    assert_eq!(*changes.lock().unwrap(), vec![1, 2]);
}

#[test]
fn bridge_ignores_cancelled_and_unknown_transitions() {
    let (changes, opts) = recorded_changes();
    let mut bridge = PageBridge::new(RecordingBackend::default(), vec![10, 11, 12], opts);

    assert_eq!(
        bridge.on_transition_completed(&11, false),
        TransitionOutcome::Cancelled
    );
    assert_eq!(
        bridge.on_transition_completed(&42, true),
        TransitionOutcome::Unknown
    );
    assert_eq!(
        bridge.on_transition_completed(&10, true),
        TransitionOutcome::Unchanged(0)
    );
    assert_eq!(bridge.current_index(), Some(0));
    assert!(changes.lock().unwrap().is_empty());
}

#[test]
fn bridge_select_notifies_like_a_user_change() {
    let (changes, opts) = recorded_changes();
    let mut bridge = PageBridge::new(RecordingBackend::default(), vec![10, 11, 12], opts);
    assert_eq!(bridge.select(2), Some(NavigationDirection::Forward));
    assert_eq!(bridge.select(2), None);
    assert_eq!(*changes.lock().unwrap(), vec![2]);
}

#[test]
fn bridge_rebuild_clamps_and_represents_current_page() {
    let mut bridge = PageBridge::new(
        RecordingBackend::default(),
        vec![10, 11, 12],
        PagingOptions::new().with_initial_index(2),
    );
    assert!(bridge.set_containers(vec![20, 21]));
    assert_eq!(bridge.current_index(), Some(1));
    assert_eq!(
        bridge.backend().presented.last(),
        Some(&(21, NavigationDirection::Reverse, false))
    );
    assert_eq!(
        bridge.on_transition_completed(&12, true),
        TransitionOutcome::Unknown
    );

    assert!(bridge.set_containers(vec![]));
    assert_eq!(bridge.current_index(), None);
    assert_eq!(bridge.apply_index(0), None);
}

#[test]
fn bridge_suppresses_bounce_at_the_ends_only_without_bounce() {
    let bounds = Size::new(320.0, 480.0);
    let mut bridge = PageBridge::new(
        RecordingBackend::default(),
        vec![10, 11, 12],
        PagingOptions::new().with_bounce(false),
    );
    assert_eq!(
        bridge.suppress_bounce(Point::new(300.0, 0.0), bounds),
        Some(Point::new(320.0, 0.0))
    );
    assert_eq!(bridge.suppress_bounce(Point::new(340.0, 0.0), bounds), None);

    bridge.apply_index(1);
    assert_eq!(bridge.suppress_bounce(Point::new(10.0, 0.0), bounds), None);

    bridge.apply_index(2);
    assert_eq!(
        bridge.suppress_bounce(Point::new(350.0, 0.0), bounds),
        Some(Point::new(320.0, 0.0))
    );

    let vertical = PageBridge::new(
        RecordingBackend::default(),
        vec![10, 11],
        PagingOptions::new()
            .with_bounce(false)
            .with_orientation(Orientation::Vertical),
    );
    assert_eq!(
        vertical.suppress_bounce(Point::new(0.0, 400.0), bounds),
        Some(Point::new(0.0, 480.0))
    );

    let bouncy = PageBridge::new(
        RecordingBackend::default(),
        vec![10, 11],
        PagingOptions::new(),
    );
    assert_eq!(bouncy.suppress_bounce(Point::new(0.0, 0.0), bounds), None);
}

#[test]
fn dot_indicator_reflects_and_validates_taps() {
    let mut dots = DotIndicator::new(3);
    assert_eq!(dots.current_page(), Some(0));
    assert_eq!(dots.tap(3), None);
    assert_eq!(dots.tap(0), None);
    assert_eq!(dots.tap(2), Some(2));
    assert_eq!(dots.step(false), None);
    assert_eq!(dots.step(true), Some(1));

    dots.set_current_page(2);
    dots.set_current_page(9);
    assert_eq!(dots.current_page(), Some(2));
    assert_eq!(
        dots.dots().map(|d| d.active).collect::<Vec<_>>(),
        vec![false, false, true]
    );
    assert_eq!(DotIndicator::new(0).current_page(), None);
}

#[test]
fn custom_indicator_is_used_as_is() {
    #[derive(Debug)]
    struct Fixed;

    impl PageIndicator for Fixed {
        fn page_count(&self) -> usize {
            42
        }

        fn current_page(&self) -> Option<usize> {
            None
        }

        fn set_current_page(&mut self, _index: usize) {}
    }

    assert_eq!(indicator_or_default(Some(Box::new(Fixed)), 3).page_count(), 42);
    assert_eq!(indicator_or_default(None, 3).page_count(), 3);
}

#[test]
fn width_probe_reduces_by_max_and_commits_changes_once() {
    let mut w = WidthProbe::new();
    assert!(!w.is_measured());
    assert_eq!(w.commit(), None);

    w.report(200.0);
    w.report(320.0);
    w.report(f32::INFINITY);
    assert_eq!(w.commit(), Some(320.0));
    assert_eq!(w.measure(320.0), None);
    assert_eq!(w.measure(480.0), Some(480.0));
    assert_eq!(w.measure(-1.0), Some(0.0));
    assert!(!w.is_measured());
}

#[test]
fn options_default_matches_model_pager() {
    let opts = PagingOptions::default();
    assert!(opts.bounce);
    assert!(!opts.wrap);
    assert!(opts.show_indicator);
    assert_eq!(opts.indicator_alignment, Alignment::Bottom);
    assert_eq!(opts.content_alignment, Alignment::Center);
    assert_eq!(opts.orientation, Orientation::Horizontal);
    assert_eq!(opts.transition_style, TransitionStyle::Scroll);
    assert_eq!(opts.insets, EdgeInsets::ZERO);
}
