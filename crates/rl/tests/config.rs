use rl::{EnvConfig, EnvError, RewardOrdering, StartPose, MAX_ARENA_SIDE};
use std::io::Write;
use std::time::Duration;

#[test]
fn defaults_describe_the_standard_lot() {
    let config = EnvConfig::default();
    assert_eq!((config.width, config.height), (800, 600));
    assert_eq!(config.num_rays, 8);
    assert_eq!(config.max_ray_distance, 200);
    assert_eq!(config.min_distance, 50.0);
    assert_eq!(config.rewards.ordering, RewardOrdering::Legacy);
    assert_eq!(config.observation_size(), 13);
    assert!(config.pacing().is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn partial_json_keeps_other_defaults() {
    let config = EnvConfig::from_json(
        r#"{ "num_rays": 16, "rewards": { "ordering": "penalty_preserving" }, "start": { "heading": 90 } }"#,
    )
    .unwrap();
    assert_eq!(config.num_rays, 16);
    assert_eq!(config.observation_size(), 21);
    assert_eq!(config.rewards.ordering, RewardOrdering::PenaltyPreserving);
    assert_eq!(config.rewards.crash, -100.0);
    assert_eq!(config.start.x, 400.0);
    assert!((config.start_pose().heading - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    assert_eq!(config.width, 800);
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(EnvConfig::from_json(r#"{ "num_ray": 16 }"#).is_err());
    assert!(EnvConfig::from_json(r#"{ "rewards": { "bonus": 3 } }"#).is_err());
}

#[test]
fn invalid_values_fail_validation() {
    let err = EnvConfig::from_json(r#"{ "num_rays": 0 }"#).unwrap_err();
    assert!(matches!(err.downcast_ref::<EnvError>(), Some(EnvError::InvalidConfig(_))));

    let bad = [
        EnvConfig { width: 0, ..EnvConfig::default() },
        EnvConfig { car_width: -1.0, ..EnvConfig::default() },
        EnvConfig { lane_height: 0.0, ..EnvConfig::default() },
        EnvConfig { min_distance: f64::NAN, ..EnvConfig::default() },
        EnvConfig { linear_step: f64::INFINITY, ..EnvConfig::default() },
        EnvConfig { pacing_secs: Some(-0.5), ..EnvConfig::default() },
    ];
    for config in bad {
        assert!(matches!(config.validate(), Err(EnvError::InvalidConfig(_))), "{config:?}");
    }
}

#[test]
fn pacing_converts_to_a_duration() {
    let config = EnvConfig { pacing_secs: Some(0.25), ..EnvConfig::default() };
    assert_eq!(config.pacing(), Some(Duration::from_millis(250)));
}

#[test]
fn kinematics_use_radians() {
    let params = EnvConfig::default().kinematics();
    assert_eq!(params.linear_step, 5.0);
    assert!((params.angle_step - 5f64.to_radians()).abs() < 1e-15);
}

#[test]
fn loads_from_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "max_ray_distance": 120, "pacing_secs": 0.01 }}"#).unwrap();
    let config = EnvConfig::from_path(file.path()).unwrap();
    assert_eq!(config.max_ray_distance, 120);
    assert_eq!(config.pacing_secs, Some(0.01));
}

#[test]
fn missing_file_names_the_path() {
    let err = EnvConfig::from_path(std::path::Path::new("/nonexistent/parking.json")).unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/parking.json"));
}

#[test]
fn config_round_trips_through_json() {
    let config = EnvConfig { num_rays: 12, ..EnvConfig::default() };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(EnvConfig::from_json(&json).unwrap(), config);
}

#[test]
fn start_pose_must_be_inside_the_arena() {
    let start = |x, y, heading| EnvConfig { start: StartPose { x, y, heading }, ..EnvConfig::default() };
    for config in [
        start(1e30, 300.0, 0.0),
        start(-1.0, 300.0, 0.0),
        start(800.0, 300.0, 0.0),
        start(400.0, 600.0, 0.0),
        start(f64::NAN, 300.0, 0.0),
        start(400.0, 300.0, f64::INFINITY),
    ] {
        assert!(matches!(config.validate(), Err(EnvError::InvalidConfig(_))), "{:?}", config.start);
    }
    assert!(start(0.0, 0.0, 720.0).validate().is_ok());
    assert!(EnvConfig::from_json(r#"{ "start": { "x": 1e30 } }"#).is_err());
}

#[test]
fn arena_size_is_bounded() {
    let huge = EnvConfig { width: MAX_ARENA_SIDE + 1, ..EnvConfig::default() };
    assert!(matches!(huge.validate(), Err(EnvError::InvalidConfig(_))));
    let tall = EnvConfig { height: u32::MAX, ..EnvConfig::default() };
    assert!(matches!(tall.validate(), Err(EnvError::InvalidConfig(_))));
    let largest = EnvConfig { width: MAX_ARENA_SIDE, height: MAX_ARENA_SIDE, ..EnvConfig::default() };
    assert!(largest.validate().is_ok());
}
