use carousel::CarouselOptions;
use carousel_adapter::Controller;

fn main() {
    // Example: a frame loop driving the flip animation without holding any UI objects.
    //
    // An adapter would:
    // - forward pointer, navigation and viewport events to the controller
    // - call tick(now_ms) every animation frame while wants_animation_frames() is true
    // - otherwise sleep until frame.next_deadline
    // - apply frame.pose (rotateY + scale) to the card element
    let ranking = vec![("hana", 3), ("mio", 1), ("kei", 2)];
    let mut c = Controller::new(ranking, CarouselOptions::new(), 0);

    c.on_visibility(0.4, 0);
    let mut now_ms = c.frame(0).next_deadline.unwrap_or(0);

    loop {
        let frame = c.tick(now_ms);
        if frame.changed || now_ms.is_multiple_of(96) {
            println!(
                "t={now_ms} phase={:?} current={} rotate={:.1} scale={:.3}",
                frame.snapshot.phase,
                frame.snapshot.current_index,
                frame.pose.rotate_y_deg,
                frame.pose.scale
            );
        }
        if !c.wants_animation_frames() && frame.snapshot.phase.is_idle() && now_ms > 5_000 {
            println!("idle until {:?}", frame.next_deadline);
            break;
        }
        now_ms += 16;
    }

    // A swipe released past the threshold flips on from its skewed pose.
    c.on_drag_start(300.0, now_ms);
    c.on_drag_move(220.0);
    println!("released: {:?}", c.on_drag_end(210.0, now_ms + 32));
    println!("pose: {:?}", c.frame(now_ms + 32).pose);
}
