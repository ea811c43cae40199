use magpend::{magnet_label, Preset, RunState, SceneConfig, Simulation, Vec3, MAX_FRAME_DT};
use wasm_bindgen::prelude::*;

// ---- Pendulum Demo ----

/// Browser-facing driver: the page calls `tick` from `requestAnimationFrame`
/// and forwards button, click and shift-drag events. Coordinates are already
/// in simulation space; projecting them onto the top and side canvases is
/// the page's job.
#[wasm_bindgen]
pub struct PendulumDemo {
    sim: Simulation<f64>,
    last_frame: Option<f64>,
}

#[wasm_bindgen]
impl PendulumDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(preset: &str) -> Result<PendulumDemo, JsValue> {
        let preset: Preset = preset.parse().map_err(to_js)?;
        let sim = Simulation::new(&SceneConfig::new(), preset).map_err(to_js)?;
        Ok(PendulumDemo { sim, last_frame: None })
    }

    /// Advance to wall-clock time `now` (seconds). The first frame only records the time.
    pub fn tick(&mut self, now: f64) -> bool {
        let stepped = match self.last_frame {
            Some(prev) => self.sim.tick(now - prev),
            None => false,
        };
        self.last_frame = Some(now);
        stepped
    }

    pub fn max_frame_dt() -> f64 {
        MAX_FRAME_DT
    }

    pub fn apply_preset(&mut self, name: &str) -> Result<(), JsValue> {
        let preset: Preset = name.parse().map_err(to_js)?;
        self.sim.apply_preset(preset).map_err(to_js)
    }

    pub fn preset_names() -> Vec<JsValue> {
        Preset::ALL.iter().map(|p| JsValue::from_str(p.name())).collect()
    }

    pub fn toggle_running(&mut self) {
        self.sim.toggle_running();
    }

    pub fn toggle_adding_magnet(&mut self) {
        self.sim.toggle_adding_magnet();
    }

    pub fn toggle_trace(&mut self) {
        self.sim.toggle_trace();
    }

    pub fn clear_trace(&mut self) {
        self.sim.clear_trace();
    }

    /// 0 = stopped, 1 = running.
    pub fn run_state(&self) -> u8 {
        self.sim.session.run_state() as u8
    }

    /// Force the run state from a code; anything but 0 or 1 is rejected.
    pub fn set_run_state(&mut self, code: u8) -> Result<(), JsValue> {
        match RunState::try_from(code).map_err(to_js)? {
            RunState::Running => self.sim.session.start(),
            RunState::Stopped => self.sim.session.stop(),
        }
        Ok(())
    }

    pub fn is_adding_magnet(&self) -> bool {
        self.sim.session.is_adding_magnet()
    }

    pub fn is_showing_trace(&self) -> bool {
        self.sim.session.is_showing_trace()
    }

    /// A click on the top-down canvas. Returns the new magnet's index, or -1.
    pub fn click(&mut self, x: f64, y: f64, z: f64) -> i32 {
        match self.sim.place_magnet(Vec3::new(x, y, z)) {
            Some(index) => index as i32,
            None => -1,
        }
    }

    pub fn remove_magnet(&mut self, index: usize) -> Result<(), JsValue> {
        self.sim.scene.remove_magnet(index).map(|_| ()).map_err(to_js)
    }

    pub fn set_magnet_strength(&mut self, index: usize, m: f64) -> Result<(), JsValue> {
        self.sim.scene.set_magnet_strength(index, m).map_err(to_js)
    }

    pub fn set_gravity(&mut self, g: f64) -> Result<(), JsValue> {
        self.sim.scene.set_gravity_magnitude(g).map_err(to_js)
    }

    pub fn set_spring_constant(&mut self, k: f64) -> Result<(), JsValue> {
        self.sim.scene.set_spring_constant(k).map_err(to_js)
    }

    pub fn set_air_resistance(&mut self, coefficient: f64) -> Result<(), JsValue> {
        self.sim.scene.set_air_resistance(coefficient).map_err(to_js)
    }

    /// Pointer moved with shift held; `t` in seconds.
    pub fn drag_to(&mut self, x: f64, y: f64, z: f64, t: f64) {
        self.sim.drag_to(Vec3::new(x, y, z), t);
    }

    /// Shift released.
    pub fn release(&mut self) -> bool {
        self.sim.release_drag()
    }

    /// Returns [fx, fy, fz, mx, my, mz] -- fixture and mass positions
    pub fn positions(&self) -> Vec<f64> {
        let f = self.sim.scene.fixture().position;
        let m = self.sim.scene.mass.position;
        vec![f.x, f.y, f.z, m.x, m.y, m.z]
    }

    /// Returns flat [x0, y0, z0, m0, x1, ...] per magnet
    pub fn magnets(&self) -> Vec<f64> {
        let magnets = self.sim.scene.magnets();
        let mut out = Vec::with_capacity(magnets.len() * 4);
        for magnet in magnets {
            out.extend_from_slice(&[magnet.position.x, magnet.position.y, magnet.position.z, magnet.m]);
        }
        out
    }

    pub fn magnet_label(index: usize) -> String {
        magnet_label(index).map(String::from).unwrap_or_default()
    }

    /// Returns flat [x0, y0, z0, x1, ...] trail points, oldest first
    pub fn trail(&self) -> Vec<f64> {
        let trail = self.sim.trail();
        let mut out = Vec::with_capacity(trail.len() * 3);
        for p in trail.points() {
            out.extend_from_slice(&[p.x, p.y, p.z]);
        }
        out
    }
}

fn to_js(err: magpend::PhysicsError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
