use pseudo_billiards::{ClickState, Color, PhysicsConfig, ScenarioConfig, Simulation};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn partial_physics_json_keeps_defaults() {
    let config: PhysicsConfig =
        serde_json::from_str(r#"{ "sub_iterations": 8, "launch_scale": 0.25 }"#).unwrap();

    assert_eq!(config.sub_iterations, 8);
    assert_eq!(config.launch_scale, 0.25);
    assert_eq!(config.friction_on_move, 0.995);
    assert_eq!(config.collision_power, 0.12);
}

#[test]
fn physics_config_round_trips() {
    let config = PhysicsConfig::default().with_drag_threshold(5.0);
    let json = serde_json::to_string(&config).unwrap();
    let back: PhysicsConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn scenario_json_drives_seeding() {
    let scenario: ScenarioConfig = serde_json::from_str(
        r#"{
            "min_balls": 2,
            "max_balls": 2,
            "palette": [{ "r": 1, "g": 2, "b": 3 }]
        }"#,
    )
    .unwrap();

    let mut rng = StdRng::seed_from_u64(11);
    let sim = Simulation::random_with(
        800.0,
        600.0,
        PhysicsConfig::default(),
        &scenario,
        &mut rng,
    )
    .unwrap();

    let balls = sim.board().balls();
    assert_eq!(balls.len(), 2);
    assert!(balls.iter().all(|b| b.color == Color::rgb(1, 2, 3)));
}

#[test]
fn click_state_uses_lowercase_names() {
    let states: Vec<ClickState> =
        serde_json::from_str(r#"["none", "pressed", "hold", "released"]"#).unwrap();
    assert_eq!(
        states,
        vec![
            ClickState::None,
            ClickState::Pressed,
            ClickState::Hold,
            ClickState::Released
        ]
    );
}

#[test]
fn invalid_construction_fails_fast() {
    assert!(Simulation::new(0.0, 600.0).is_err());
    assert!(Simulation::new(800.0, f64::INFINITY).is_err());
    assert!(Simulation::random(100.0, 100.0).is_err());
}
