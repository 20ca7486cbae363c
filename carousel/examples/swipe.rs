// Example: swipe gestures, including a cancelled drag and a drag during a transition.
use carousel::{Carousel, CarouselOptions, PointerKind};

fn main() {
    let staff = vec![("aki", 1), ("ren", 2), ("sora", 3), ("yuu", 4)];
    let opts = CarouselOptions::new()
        .with_pointer_kind(PointerKind::Touch)
        .with_autoplay_delay_ms(None);
    let mut c = Carousel::new(staff, opts, 0);

    // Short swipe: snaps back.
    c.on_drag_start(200.0, 0);
    c.on_drag_move(180.0);
    println!("short swipe: {:?}", c.on_drag_end(170.0, 16));
    c.tick(400);

    // Long leftward swipe: next card.
    c.on_drag_start(200.0, 500);
    for x in [180.0, 150.0, 120.0] {
        println!("  drag_offset={:?}", c.on_drag_move(x));
    }
    println!("long swipe: {:?}", c.on_drag_end(110.0, 550));

    // Input during the flip is dropped.
    println!("drag mid-flip accepted={}", c.on_drag_start(50.0, 600));

    c.tick(1_300);
    println!("current={:?} snapshot={:?}", c.current_item(), c.snapshot());
}
