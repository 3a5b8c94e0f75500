use physics::{apply_action, normalize_heading, Action, KinematicParams, Pose};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::f64::consts::TAU;

const EPS: f64 = 1e-9;

fn displacement(a: &Pose, b: &Pose) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

#[test]
fn every_action_moves_exactly_one_step() {
    let params = KinematicParams::default();
    for heading in [0.0, 0.3, -2.0, 17.5] {
        let start = Pose::new(400.0, 300.0, heading);
        for action in Action::ALL {
            let next = apply_action(start, action, &params);
            assert!(
                (displacement(&start, &next) - params.linear_step).abs() < EPS,
                "{action} from heading {heading}"
            );
        }
    }
}

#[test]
fn straight_actions_keep_heading_bit_identical() {
    let params = KinematicParams::default();
    let start = Pose::new(10.0, 20.0, 1.234_567_891);
    for action in [Action::FrontOnly, Action::BackOnly] {
        let next = apply_action(start, action, &params);
        assert_eq!(next.heading.to_bits(), start.heading.to_bits());
    }
}

#[test]
fn turning_actions_change_heading_by_one_step() {
    let params = KinematicParams::default();
    let start = Pose::new(0.0, 0.0, 0.5);
    for (action, sign) in [
        (Action::FrontLeft, -1.0),
        (Action::BackLeft, -1.0),
        (Action::FrontRight, 1.0),
        (Action::BackRight, 1.0),
    ] {
        let next = apply_action(start, action, &params);
        assert!((next.heading - (start.heading + sign * params.angle_step)).abs() < EPS);
    }
}

#[test]
fn forward_at_zero_heading_moves_along_x() {
    let next = apply_action(Pose::new(400.0, 300.0, 0.0), Action::FrontOnly, &KinematicParams::default());
    assert_eq!(next, Pose::new(405.0, 300.0, 0.0));
    let back = apply_action(Pose::new(400.0, 300.0, 0.0), Action::BackOnly, &KinematicParams::default());
    assert_eq!(back, Pose::new(395.0, 300.0, 0.0));
}

#[test]
fn turn_is_applied_before_translation() {
    let params = KinematicParams { linear_step: 10.0, angle_step: std::f64::consts::FRAC_PI_2 };
    let next = apply_action(Pose::new(0.0, 0.0, 0.0), Action::FrontRight, &params);
    assert!(next.x.abs() < EPS);
    assert!((next.y - 10.0).abs() < EPS);
}

#[test]
fn heading_is_not_wrapped() {
    let params = KinematicParams::default();
    let mut pose = Pose::new(400.0, 300.0, 0.0);
    for _ in 0..200 {
        pose = apply_action(pose, Action::FrontRight, &params);
    }
    assert!(pose.heading > TAU);
    let wrapped = normalize_heading(pose.heading);
    assert!((0.0..TAU).contains(&wrapped));
    assert!((wrapped.sin() - pose.heading.sin()).abs() < 1e-9);
}

#[test]
fn normalize_heading_handles_negative_angles() {
    assert!((normalize_heading(-std::f64::consts::FRAC_PI_2) - 1.5 * std::f64::consts::PI).abs() < EPS);
    assert_eq!(normalize_heading(0.0), 0.0);
    assert!(normalize_heading(-1e-300) < TAU);
}

#[test]
fn action_indices_round_trip_and_reject_out_of_range() {
    for (i, action) in Action::ALL.iter().enumerate() {
        assert_eq!(Action::try_from(i), Ok(*action));
        assert_eq!(action.index(), i);
    }
    assert_eq!(Action::try_from(6), Err(6));
    assert_eq!(Action::FrontLeft.to_string(), "front_left");
}

#[test]
fn sampled_actions_cover_the_action_set() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut seen = [false; 6];
    for _ in 0..500 {
        seen[Action::sample(&mut rng).index()] = true;
    }
    assert!(seen.iter().all(|s| *s));
}
