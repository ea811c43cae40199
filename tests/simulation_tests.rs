use magpend::{PhysicsError, Preset, SceneConfig, SessionSnapshot, Simulation, Vec3, MAX_FRAME_DT};
use std::cell::RefCell;
use std::rc::Rc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("magpend=debug")
        .with_test_writer()
        .try_init();
}

fn sim(preset: Preset) -> Simulation<f64> {
    init_tracing();
    Simulation::new(&SceneConfig::new(), preset).unwrap()
}

#[test]
fn starts_running_after_preset() {
    let s = sim(Preset::Triangle);
    assert!(s.session.is_running());
    assert_eq!(s.scene.magnets().len(), 3);
}

#[test]
fn stopped_simulation_does_not_move() {
    let mut s = sim(Preset::Default);
    s.toggle_running();
    let before = s.scene.mass;
    assert!(!s.tick(0.05));
    assert_eq!(s.scene.mass, before);

    s.toggle_running();
    assert!(s.tick(0.05));
    assert_ne!(s.scene.mass, before);
}

#[test]
fn long_frame_gap_is_capped() {
    let mut capped = sim(Preset::Blank);
    capped.tick(30.0);

    let mut reference = sim(Preset::Blank);
    magpend::advance(&mut reference.scene, MAX_FRAME_DT);

    assert_eq!(capped.scene.mass, reference.scene.mass);
}

#[test]
fn negative_elapsed_is_a_zero_step() {
    let mut s = sim(Preset::Blank);
    let before = s.scene.mass;
    assert!(s.tick(-1.0));
    assert_eq!(s.scene.mass, before);
}

#[test]
fn placing_a_magnet_ends_placement_mode() {
    let mut s = sim(Preset::Blank);
    assert_eq!(s.place_magnet(Vec3::new(1.0, 0.0, 1.0)), None);

    s.toggle_adding_magnet();
    assert!(s.session.is_adding_magnet());
    assert_eq!(s.place_magnet(Vec3::new(1.0, 0.0, 1.0)), Some(0));
    assert!(!s.session.is_adding_magnet());
    assert_eq!(s.scene.magnets()[0].m, 10.0);

    s.toggle_adding_magnet();
    s.toggle_adding_magnet();
    assert_eq!(s.place_magnet(Vec3::new(2.0, 0.0, 2.0)), None);
    assert_eq!(s.scene.magnets().len(), 1);
}

#[test]
fn trail_records_only_while_trace_shown() {
    let mut s = sim(Preset::Square);
    for _ in 0..5 {
        assert!(s.tick(1.0 / 60.0));
    }
    assert!(s.trail().is_empty());

    s.toggle_trace();
    assert!(s.session.is_showing_trace());
    for _ in 0..10 {
        s.tick(1.0 / 60.0);
    }
    assert_eq!(s.trail().len(), 10);
    assert_eq!(s.trail().latest(), Some(s.scene.mass.position));

    s.toggle_trace();
    assert!(!s.session.is_showing_trace());
    s.tick(1.0 / 60.0);
    assert_eq!(s.trail().len(), 10);

    s.clear_trace();
    assert!(s.trail().is_empty());
}

#[test]
fn observer_sees_preset_start() {
    let seen: Rc<RefCell<Vec<SessionSnapshot>>> = Rc::default();
    let mut s = sim(Preset::Blank);
    s.toggle_running();
    let sink = Rc::clone(&seen);
    s.session.subscribe(move |snap: &SessionSnapshot| sink.borrow_mut().push(*snap));

    s.apply_preset(Preset::Hexagons).unwrap();
    assert_eq!(seen.borrow().len(), 1);
    assert!(s.session.is_running());
}

#[test]
fn scene_setters_reject_bad_values() {
    let mut s = sim(Preset::Default);
    assert_eq!(s.scene.set_mass(0.0), Err(PhysicsError::InvalidMass));
    assert_eq!(s.scene.set_spring_constant(-5.0), Err(PhysicsError::InvalidSpringConstant));
    assert_eq!(
        s.scene.remove_magnet(3),
        Err(PhysicsError::MagnetOutOfBounds { index: 3, count: 3 })
    );
    assert_eq!(s.scene.set_magnet_strength(0, 21.0), Err(PhysicsError::InvalidMagnetStrength));

    s.scene.set_magnet_strength(0, 0.0).unwrap();
    let removed = s.scene.remove_magnet(0).unwrap();
    assert_eq!(removed.m, 0.0);
    assert_eq!(s.scene.magnets()[0].position, Vec3::new(2.0, 0.0, -7.0));
}

#[test]
fn invalid_config_is_rejected() {
    let err = Simulation::<f64>::new(&SceneConfig::new().with_spring_rest_length(0.0), Preset::Blank)
        .unwrap_err();
    assert_eq!(err, PhysicsError::InvalidRestLength);
}

#[test]
fn free_swing_stays_finite() {
    let mut s = sim(Preset::Blank);
    for _ in 0..600 {
        s.tick(1.0 / 60.0);
    }
    assert!(s.scene.mass.position.is_finite());
    assert!(s.scene.mass.velocity.is_finite());
}
