use pages::{NavigationDirection, PageIndicator, PageSet, PagingBackend, PagingOptions};
use pages_adapter::BackendController;

#[derive(Debug, Default)]
struct Host {
    visible: Option<usize>,
}

impl PagingBackend for Host {
    type Container = usize;

    fn present(&mut self, container: &usize, direction: NavigationDirection, _animated: bool) {
        println!("host shows page {container} ({direction:?})");
        self.visible = Some(*container);
    }
}

fn main() {
    // Example: a native backend paired with the default dot indicator.
    //
    // The host reports finished swipes with the container it ends up showing; indicator taps and
    // caller updates go the other way through the bridge.
    let pages = PageSet::from_model(["alpha", "beta", "gamma", "delta"], |i, name| (i, name));
    let options =
        PagingOptions::new().with_on_page_change(Some(|i: usize| println!("page -> {i}")));
    let mut c = BackendController::from_pages(Host::default(), &pages, |&(i, _)| i, options);

    println!("swipe: {:?}", c.on_transition_completed(&1, true));
    println!("tap: {:?}", c.tap_indicator(3));
    println!("echo: {:?}", c.on_transition_completed(&3, true));
    println!("caller: {:?}", c.set_current_page(0));

    if let Some(indicator) = c.indicator() {
        println!(
            "indicator {}/{:?}, host visible={:?}",
            indicator.page_count(),
            indicator.current_page(),
            c.bridge().backend().visible
        );
    }
}
