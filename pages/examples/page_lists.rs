// Example: build page lists from a fixed declaration and from a model collection.
use core::fmt::Display;

use pages::{PageSet, PagesError, static_pages};

fn main() {
    let intro = static_pages![dyn Display; "Welcome", 2024, 'x'];
    for page in &intro {
        println!("static page {} -> {}", page.position(), page.content());
    }

    let cars = ["Ford", "Ferrari", "Fiat"];
    let models = PageSet::from_model(cars, |i, model| format!("{i}: Car model: {model}"));
    for text in models.contents() {
        println!("{text}");
    }

    // The runtime builder reports unsupported arities instead of failing to compile.
    match PageSet::from_static(0..12) {
        Err(PagesError::TooManyStaticPages { count, max }) => {
            println!("rejected {count} pages (max {max})")
        }
        other => println!("unexpected: {other:?}"),
    }
}
