// Example: drive the drag-to-page geometry by hand.
use pages::{PageGeometry, PagingOptions};

fn main() {
    let mut g = PageGeometry::new(&PagingOptions::new().with_initial_index(3), 5);
    g.set_page_width(300.0);
    println!("index={:?} offset={}", g.current_index(), g.offset());

    // Drag one page to the right, half a page worth and a bit.
    for delta in [20.0, 80.0, 160.0] {
        println!("drag delta={delta} offset={}", g.on_drag_changed(delta));
    }
    let snap = g.on_drag_ended(160.0);
    println!("snap={snap:?}");

    // A short flick is not enough to leave the page.
    g.on_drag_changed(-40.0);
    let snap = g.on_drag_ended(-149.0);
    println!("short flick: {snap:?}");
}
