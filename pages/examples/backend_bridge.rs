// Example: keep a caller-visible index in sync with a native paging backend.
use pages::{NavigationDirection, PageBridge, PagingBackend, PagingOptions};

#[derive(Debug, Default)]
struct LogBackend;

impl PagingBackend for LogBackend {
    type Container = &'static str;

    fn present(
        &mut self,
        container: &&'static str,
        direction: NavigationDirection,
        animated: bool,
    ) {
        println!("present {container} {direction:?} animated={animated}");
    }
}

fn main() {
    let options = PagingOptions::new()
        .with_wrap(true)
        .with_on_page_change(Some(|i: usize| println!("on_page_change({i})")));
    let mut bridge = PageBridge::new(LogBackend, vec!["red", "green", "blue"], options);

    // The backend asks for neighbors while the user swipes.
    println!("before red: {:?}", bridge.neighbor_before(&"red"));
    println!("after blue: {:?}", bridge.neighbor_after(&"blue"));

    // A user swipe lands on "blue" (wrapping backwards from "red").
    println!("{:?}", bridge.on_transition_completed(&"blue", true));

    // The caller moves back to the first page; the backend then reports it as visible.
    println!("{:?}", bridge.apply_index(0));
    println!("{:?}", bridge.on_transition_completed(&"red", true));
}
