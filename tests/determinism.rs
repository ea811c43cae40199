use magpend::{Preset, SceneConfig, Simulation, Vec3};

// bitwise, so a trajectory that diverges still has to diverge identically
fn bits(v: Vec3<f64>) -> [u64; 3] {
    [v.x.to_bits(), v.y.to_bits(), v.z.to_bits()]
}

fn run(preset: Preset) -> ([u64; 3], [u64; 3]) {
    let mut sim = Simulation::<f64>::new(&SceneConfig::new(), preset).unwrap();
    for _ in 0..500 {
        sim.tick(1.0 / 60.0);
    }
    (bits(sim.scene.mass.position), bits(sim.scene.mass.velocity))
}

#[test]
fn simulation_deterministic() {
    for preset in Preset::ALL {
        let results: Vec<_> = (0..5).map(|_| run(preset)).collect();
        for r in &results[1..] {
            assert_eq!(results[0], *r, "{} not reproducible", preset);
        }
    }
}

#[test]
fn drag_deterministic() {
    let results: Vec<_> = (0..5).map(|_| {
        let mut sim = Simulation::<f64>::new(&SceneConfig::new(), Preset::Default).unwrap();
        for i in 0..20 {
            let t = i as f64 * 0.016;
            sim.drag_to(Vec3::new(t * 3.0, 2.0, -t), t);
        }
        sim.release_drag();
        for _ in 0..120 {
            sim.tick(1.0 / 60.0);
        }
        bits(sim.scene.mass.position)
    }).collect();

    for r in &results[1..] {
        assert_eq!(results[0], *r);
    }
}
