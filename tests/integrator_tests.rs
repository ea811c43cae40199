use magpend::{advance, advance_observed, Mass, SceneConfig, SceneModel, StepObserver, Vec3};

fn assert_vec_close(actual: Vec3<f64>, expected: Vec3<f64>, eps: f64) {
    assert!(
        (actual - expected).length() < eps,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

/// m = 10 at (10, 10, 0) on a rest-length rope from (0, 10, 0), at rest.
fn golden_scene() -> SceneModel<f64> {
    SceneConfig::new()
        .with_mass(10.0)
        .with_initial_position(Vec3::new(10.0, 10.0, 0.0))
        .with_initial_velocity(Vec3::zero())
        .with_fixture(Vec3::new(0.0, 10.0, 0.0))
        .with_gravity(10.0)
        .with_spring_constant(100.0)
        .with_spring_rest_length(10.0)
        .with_air_resistance(5.0)
        .build()
        .unwrap()
}

#[test]
fn golden_single_step() {
    let mut scene = golden_scene();
    advance(&mut scene, 0.01);

    // only gravity acts: a = (0, -10, 0)
    assert_vec_close(scene.mass.position, Vec3::new(10.0, 9.9995, 0.0), 1e-9);
    assert_vec_close(scene.mass.velocity, Vec3::new(0.0, -0.1, 0.0), 1e-9);
}

#[test]
fn golden_swinging_step() {
    let mut scene = SceneConfig::<f64>::new()
        .with_initial_position(Vec3::new(0.0, -5.0, 0.0))
        .with_initial_velocity(Vec3::new(3.0, 0.0, 0.0))
        .build()
        .unwrap();
    advance(&mut scene, 0.01);

    // force (-4.5, 503, 0) on m = 10
    assert_vec_close(scene.mass.position, Vec3::new(0.0299775, -4.997485, 0.0), 1e-9);
    assert_vec_close(scene.mass.velocity, Vec3::new(2.9955, 0.503, 0.0), 1e-9);
}

#[test]
fn zero_dt_is_identity() {
    let mut scene = golden_scene();
    let before = scene.mass;
    advance(&mut scene, 0.0);
    assert_eq!(scene.mass, before);
}

#[test]
fn large_dt_is_accepted() {
    let mut scene = golden_scene();
    advance(&mut scene, 5.0);
    assert!(scene.mass.position.is_finite());
    assert!(scene.mass.velocity.is_finite());
}

fn swinging_scene() -> SceneModel<f64> {
    SceneConfig::new()
        .with_initial_position(Vec3::new(8.0, 4.0, 1.0))
        .with_initial_velocity(Vec3::new(0.0, 0.0, 6.0))
        .build()
        .unwrap()
}

#[test]
fn split_steps_differ_from_one_step() {
    let mut split = swinging_scene();
    advance(&mut split, 0.02);
    advance(&mut split, 0.03);

    let mut whole = swinging_scene();
    advance(&mut whole, 0.05);

    assert_ne!(split.mass.position, whole.mass.position);
}

#[test]
fn smaller_steps_converge() {
    let horizon = 0.2;
    let run = |steps: usize| {
        let mut scene = swinging_scene();
        let dt = horizon / steps as f64;
        for _ in 0..steps {
            advance(&mut scene, dt);
        }
        scene.mass.position
    };

    let reference = run(20_000);
    let errors: Vec<f64> = [20, 200, 2_000]
        .iter()
        .map(|&n| (run(n) - reference).length())
        .collect();

    assert!(errors[0] > errors[1], "{:?}", errors);
    assert!(errors[1] > errors[2], "{:?}", errors);
    assert!(errors[2] < 1e-2, "{:?}", errors);
}

#[derive(Default)]
struct Recorder {
    positions: Vec<Vec3<f64>>,
}

impl StepObserver<f64> for Recorder {
    fn on_step_complete(&mut self, mass: &Mass<f64>) {
        self.positions.push(mass.position);
    }
}

#[test]
fn observer_sees_committed_state() {
    let mut scene = golden_scene();
    let mut recorder = Recorder::default();
    advance_observed(&mut scene, 0.01, &mut recorder);
    advance_observed(&mut scene, 0.01, &mut recorder);
    assert_eq!(recorder.positions.len(), 2);
    assert_eq!(recorder.positions[1], scene.mass.position);
}

#[test]
fn long_run_stays_finite() {
    let mut scene = SceneConfig::<f64>::new()
        .with_initial_position(Vec3::new(0.0, -2.0, 0.0))
        .build()
        .unwrap();
    for _ in 0..2_000 {
        advance(&mut scene, 1.0 / 60.0);
        assert!(scene.mass.position.is_finite());
    }
    assert!(scene.rope_length() < 50.0);
}
