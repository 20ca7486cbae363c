// Example: a three-card ranking widget that autoplays once scrolled into view.
use carousel::{Carousel, CarouselOptions, PhaseChange};

fn main() {
    let courses = vec![("shave", 3), ("head-spa", 1), ("cut-spa", 2)];
    let opts = CarouselOptions::new()
        .with_on_index_change(Some(|from, to| println!("  index {from} -> {to}")))
        .with_on_phase_change(Some(|c: PhaseChange| {
            println!("  t={}ms {:?} -> {:?}", c.at_ms, c.from, c.to);
        }));
    let mut c = Carousel::new(courses, opts, 0);
    println!("order={:?}", c.items());

    // Nothing happens until the widget is at least 10% visible.
    c.tick(8_000);
    println!("t=8000 current={:?}", c.current_item());

    c.on_visibility(0.4, 8_000);

    // A host would arm one timer for `next_deadline()` instead of polling.
    let mut now_ms = 8_000;
    while now_ms < 30_000 {
        let Some(deadline) = c.next_deadline() else {
            break;
        };
        now_ms = deadline;
        c.tick(now_ms);
    }
    println!("t={now_ms} current={:?}", c.current_item());

    c.unmount();
    println!("unmounted, next_deadline={:?}", c.next_deadline());
}
