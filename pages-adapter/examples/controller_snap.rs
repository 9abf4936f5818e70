use pages::{PagingOptions, Size};
use pages_adapter::{Easing, PagerController};

fn main() {
    // Example: a framework-neutral controller animating the snap after a swipe.
    //
    // An adapter would:
    // - call on_layout when the viewport is measured
    // - forward drag translations (or raw pointer events)
    // - call tick(now_ms) in a frame loop while is_animating()
    // - render visible_range() at page_origin(i)
    let options =
        PagingOptions::new().with_on_page_change(Some(|i: usize| println!("page -> {i}")));
    let mut c = PagerController::new(options, 6).with_snap_animation(240, Easing::EaseInOutCubic);
    c.on_layout(Size::new(360.0, 640.0));

    for delta in [-30.0, -90.0, -170.0, -210.0] {
        c.on_drag_changed(delta);
    }
    let snap = c.on_drag_ended(-210.0, 0);
    println!("snap={snap:?}");

    let mut now_ms = 0u64;
    while let Some(off) = c.tick(now_ms) {
        if now_ms % 80 == 0 {
            println!("t={now_ms} off={off} visible={:?}", c.visible_range());
        }
        now_ms += 16;
    }

    println!(
        "done: index={:?} off={} origin={:?}",
        c.current_index(),
        c.visible_offset(),
        c.page_origin(1)
    );
}
