use crate::*;

use carousel::{CarouselOptions, CarouselSnapshot, Direction, DragOutcome, Phase};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn quiet() -> CarouselOptions {
    CarouselOptions::new().with_autoplay_delay_ms(None)
}

#[test]
fn easings_hit_both_endpoints() {
    for e in [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseInOutCubic,
        Easing::Power2In,
        Easing::Power2Out,
    ] {
        assert!(approx(e.sample(0.0), 0.0), "{e:?}");
        assert!(approx(e.sample(1.0), 1.0), "{e:?}");
    }
    assert!(approx(Easing::Power2In.sample(0.5), 0.25));
    assert!(approx(Easing::Power2Out.sample(0.5), 0.75));
}

#[test]
fn tween_clamps_and_retargets() {
    let mut t = Tween::new(10.0, 20.0, Easing::Linear);
    assert!(approx(t.sample(-1.0), 10.0));
    assert!(approx(t.sample(0.5), 15.0));
    assert!(approx(t.sample(2.0), 20.0));

    t.retarget(0.5, 0.0);
    assert!(approx(t.from, 15.0));
    assert!(approx(t.sample(1.0), 0.0));
}

#[test]
fn flip_halves_mirror_each_other() {
    let poses = PoseAnimator::default();
    let mut s = CarouselSnapshot {
        count: 3,
        phase: Phase::Exiting,
        direction: Direction::Forward,
        progress: 0.0,
        ..Default::default()
    };
    assert_eq!(poses.pose(&s), CardPose::REST);

    s.progress = 1.0;
    let end = poses.pose(&s);
    assert!(approx(end.rotate_y_deg, -90.0));
    assert!(approx(end.scale, 0.95));

    s.phase = Phase::Entering;
    s.progress = 0.0;
    let start = poses.pose(&s);
    assert!(approx(start.rotate_y_deg, 90.0));
    assert!(approx(start.scale, 0.95));
    s.progress = 1.0;
    assert!(poses.pose(&s).is_at_rest());

    s.direction = Direction::Backward;
    s.phase = Phase::Exiting;
    assert!(approx(poses.pose(&s).rotate_y_deg, 90.0));
    s.phase = Phase::Entering;
    s.progress = 0.0;
    assert!(approx(poses.pose(&s).rotate_y_deg, -90.0));
}

#[test]
fn drag_skews_and_snaps_back() {
    let mut c = Controller::new(vec![("a", 1), ("b", 2)], quiet(), 0);
    assert!(c.on_drag_start(300.0, 0));
    assert_eq!(c.on_drag_move(260.0), Some(-40.0));
    let f = c.frame(16);
    assert!(approx(f.pose.rotate_y_deg, -18.0));
    assert!(c.wants_animation_frames());

    assert_eq!(
        c.on_drag_end(260.0, 32),
        Some(DragOutcome::Cancel { offset: -40.0 })
    );
    assert!(approx(c.frame(32).pose.rotate_y_deg, -18.0));
    // Power2Out at t = 0.5 covers three quarters of the way back.
    assert!(approx(c.frame(182).pose.rotate_y_deg, -4.5));

    let f = c.tick(332);
    assert!(f.changed);
    assert!(f.pose.is_at_rest());
    assert!(!c.wants_animation_frames());
}

#[test]
fn committed_drag_flips_on_from_release_pose() {
    let mut c = Controller::new(vec![("a", 1), ("b", 2), ("c", 3)], quiet(), 0);
    c.on_drag_start(400.0, 0);
    c.on_drag_move(320.0);
    let outcome = c.on_drag_end(300.0, 10);
    assert!(matches!(
        outcome,
        Some(DragOutcome::Commit {
            direction: Direction::Forward,
            target: 1,
            accepted: true,
            ..
        })
    ));

    let f = c.frame(10);
    assert_eq!(f.snapshot.phase, Phase::Exiting);
    assert!(approx(f.pose.rotate_y_deg, -45.0));

    let f = c.tick(360);
    assert_eq!(f.snapshot.phase, Phase::Entering);
    assert_eq!(f.snapshot.current_index, 1);
    assert!(approx(f.pose.rotate_y_deg, 90.0));

    let f = c.tick(760);
    assert_eq!(f.snapshot.phase, Phase::Idle);
    assert!(f.pose.is_at_rest());

    // A button flip afterwards starts from rest again.
    assert!(c.prev(800));
    assert!(c.frame(800).pose.is_at_rest());
}

#[test]
fn navigation_mid_snap_back_flips_on_from_the_current_skew() {
    let mut c = Controller::new(vec![("a", 1), ("b", 2), ("c", 3)], quiet(), 0);
    c.on_drag_start(300.0, 0);
    c.on_drag_move(260.0);
    c.on_drag_end(260.0, 32);
    assert!(approx(c.frame(182).pose.rotate_y_deg, -4.5));

    assert!(c.go_to(1, 182));
    let f = c.frame(182);
    assert_eq!(f.snapshot.phase, Phase::Exiting);
    assert_eq!(f.snapshot.drag_offset, 0.0);
    assert!(!f.snapshot.is_snapping_back);
    assert!(approx(f.pose.rotate_y_deg, -4.5));
    assert!(approx(c.poses().exit_from_deg(), -4.5));

    let f = c.tick(532);
    assert_eq!(f.snapshot.phase, Phase::Entering);
    assert!(approx(f.pose.rotate_y_deg, 90.0));
}

#[test]
fn transitions_started_on_the_inner_carousel_flip_from_rest() {
    let mut c = Controller::new(vec![("a", 1), ("b", 2), ("c", 3)], quiet(), 0);
    c.on_drag_start(400.0, 0);
    c.on_drag_end(300.0, 0);
    c.tick(750);
    assert_eq!(c.carousel().current_index(), 1);
    assert!(approx(c.poses().exit_from_deg(), -45.0));

    assert!(c.carousel_mut().request_transition(2, Direction::Forward, 800));
    assert!(c.frame(800).pose.is_at_rest());
    let f = c.tick(800);
    assert!(f.pose.is_at_rest());
    assert!(approx(c.poses().exit_from_deg(), 0.0));
}

#[test]
fn begin_exit_starts_from_the_release_skew() {
    let mut poses = PoseAnimator::new(PoseOptions::default());
    poses.begin_exit(-100.0);
    assert!(approx(poses.exit_from_deg(), -45.0));
    let s = CarouselSnapshot {
        count: 2,
        phase: Phase::Exiting,
        ..Default::default()
    };
    assert!(approx(poses.pose(&s).rotate_y_deg, -45.0));
    assert!(approx(poses.pose(&s).scale, 1.0));
}

#[test]
fn autoplay_frames_follow_deadlines() {
    let mut c = Controller::new(vec![("a", 1), ("b", 2), ("c", 3)], CarouselOptions::new(), 0);
    let f = c.tick(0);
    assert_eq!(f.next_deadline, None);
    assert!(!c.wants_animation_frames());

    c.on_visibility(1.0, 1_000);
    let f = c.frame(1_000);
    assert_eq!(f.next_deadline, Some(6_000));

    let f = c.tick(6_000);
    assert!(f.changed);
    assert_eq!(f.snapshot.phase, Phase::Exiting);
    assert!(f.pose.is_at_rest());
    assert!(c.wants_animation_frames());
    assert_eq!(f.next_deadline, Some(6_350));

    let f = c.tick(6_175);
    assert!(!f.changed);
    assert!(f.pose.rotate_y_deg < 0.0 && f.pose.rotate_y_deg > -90.0);

    c.tick(6_350);
    let f = c.tick(6_750);
    assert_eq!(f.snapshot.current_index, 1);
    assert_eq!(f.next_deadline, Some(11_750));
}

#[test]
fn unmounted_controller_stops_producing_work() {
    let mut c = Controller::new(vec![("a", 1), ("b", 2)], quiet(), 0);
    c.next(0);
    c.unmount();
    let f = c.tick(1_000);
    assert!(!f.changed);
    assert_eq!(f.next_deadline, None);
    assert_eq!(f.snapshot.current_index, 0);
    assert!(!c.carousel().is_mounted());
}
