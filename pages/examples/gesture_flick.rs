// Example: turn raw pointer events into drag updates and feed them to the geometry.
use pages::{DragGesture, Orientation, PageGeometry, PagingOptions, Point, PointerEvent};

fn main() {
    let mut g = PageGeometry::new(&PagingOptions::new(), 4);
    g.set_page_width(320.0);
    let mut gesture = DragGesture::new(Orientation::Horizontal);

    let at = |x: f32| Point::new(x, 100.0);
    let id = 7;
    let events = [
        PointerEvent::Down {
            id,
            position: at(250.0),
            time_ms: 0,
        },
        PointerEvent::Move {
            id,
            position: at(230.0),
            time_ms: 16,
        },
        PointerEvent::Move {
            id,
            position: at(190.0),
            time_ms: 32,
        },
        PointerEvent::Up {
            id,
            position: at(160.0),
            time_ms: 48,
        },
    ];
    for event in events {
        if let Some(update) = gesture.handle(event) {
            println!("{update:?}");
            if let Some(snap) = update.apply(&mut g) {
                println!("snap={snap:?}");
            }
        }
    }
    println!("index={:?} offset={}", g.current_index(), g.offset());
}
