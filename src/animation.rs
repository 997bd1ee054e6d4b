//! Per-frame animation state and the tick function that advances it.
//!
//! The frame loop owns an [`AnimationState`] and calls [`tick`] once per
//! frame; rendering is a pure function of the state afterwards. Nothing here
//! touches the canvas.

use crate::fern::FernGenerator;
use crate::geometry::Rotation;
use crate::render_settings::RenderSettings;
use crate::scene::Scene;
use rand::Rng;

/// Rotation advance per tick for the surface scenes, in radians
pub const ROTATION_STEP: Rotation = Rotation {
    x: 0.01,
    y: 0.01,
    z: 0.005,
};
/// Tracked-particle parameter advance per tick
pub const PARTICLE_STEP: f64 = 0.01;
/// Tree rotation advance per tick, in degrees
pub const TREE_ROTATION_STEP_DEG: f64 = 1.0;

/// All state that changes between frames: accumulated rotation, the tracked
/// particle's parameter, and the fern's growing point sequence
pub struct AnimationState {
    pub rotation: Rotation,
    pub particle_pos: f64,
    pub fern: FernGenerator,
    pub frame: u64,
}

impl AnimationState {
    pub fn new() -> AnimationState {
        AnimationState {
            rotation: Rotation::default(),
            particle_pos: 0.0,
            fern: FernGenerator::new(),
            frame: 0,
        }
    }

    /// Back to the initial state, dropping all accumulated fern points
    pub fn reset(&mut self) {
        self.rotation = Rotation::default();
        self.particle_pos = 0.0;
        self.fern.reset();
        self.frame = 0;
    }
}

impl Default for AnimationState {
    fn default() -> AnimationState {
        AnimationState::new()
    }
}

/// Advance the animation by one frame. Each scene family animates a different
/// part of the state; everything else is left untouched.
pub fn tick<R: Rng>(
    state: &mut AnimationState,
    settings: &RenderSettings,
    rng: &mut R,
) {
    match settings.scene {
        Scene::Fern => {
            state.fern.generate(settings.speed, rng);
        }
        Scene::KochSnowflake => {
            // The snowflake is a pure function of depth and zoom; nothing
            // advances per frame
        }
        Scene::BinaryTree => {
            state.rotation.z =
                (state.rotation.z.to_degrees() + TREE_ROTATION_STEP_DEG).rem_euclid(360.0)
                    .to_radians();
        }
        Scene::MobiusStrip | Scene::KleinBottle => {
            state.rotation.x += ROTATION_STEP.x;
            state.rotation.y += ROTATION_STEP.y;
            state.rotation.z += ROTATION_STEP.z;
            if settings.show_particle {
                state.particle_pos = (state.particle_pos + PARTICLE_STEP) % 1.0;
            }
        }
    }
    state.frame += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_settings::DEFAULT_RENDER_SETTINGS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn settings_for(scene: Scene) -> RenderSettings {
        let mut settings = DEFAULT_RENDER_SETTINGS.clone();
        settings.scene = scene;
        settings
    }

    #[test]
    fn surface_tick_advances_rotation_by_fixed_steps() {
        let mut state = AnimationState::new();
        let mut settings = settings_for(Scene::KleinBottle);
        settings.show_particle = true;
        let mut rng = StdRng::seed_from_u64(0);

        tick(&mut state, &settings, &mut rng);
        assert!((state.rotation.x - 0.01).abs() < 1e-12);
        assert!((state.rotation.y - 0.01).abs() < 1e-12);
        assert!((state.rotation.z - 0.005).abs() < 1e-12);
        assert!((state.particle_pos - 0.01).abs() < 1e-12);
        assert_eq!(state.frame, 1);
    }

    #[test]
    fn particle_parameter_wraps_around() {
        let mut state = AnimationState::new();
        let mut settings = settings_for(Scene::MobiusStrip);
        settings.show_particle = true;
        let mut rng = StdRng::seed_from_u64(0);

        for _ in 0..150 {
            tick(&mut state, &settings, &mut rng);
        }
        assert!(state.particle_pos >= 0.0 && state.particle_pos < 1.0);
    }

    #[test]
    fn particle_stays_put_when_hidden() {
        let mut state = AnimationState::new();
        let settings = settings_for(Scene::MobiusStrip);
        let mut rng = StdRng::seed_from_u64(0);
        tick(&mut state, &settings, &mut rng);
        assert_eq!(state.particle_pos, 0.0);
    }

    #[test]
    fn fern_tick_appends_a_batch() {
        let mut state = AnimationState::new();
        let mut settings = settings_for(Scene::Fern);
        settings.speed = 75;
        let mut rng = StdRng::seed_from_u64(0);

        tick(&mut state, &settings, &mut rng);
        tick(&mut state, &settings, &mut rng);
        assert_eq!(state.fern.points().len(), 150);
        assert_eq!(state.fern.iterations(), 150);
        // Rotation is untouched by the fern
        assert_eq!(state.rotation, Rotation::default());
    }

    #[test]
    fn tree_rotation_wraps_at_a_full_turn() {
        let mut state = AnimationState::new();
        let settings = settings_for(Scene::BinaryTree);
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..400 {
            tick(&mut state, &settings, &mut rng);
        }
        let degrees = state.rotation.z.to_degrees();
        assert!((degrees - 40.0).abs() < 1e-6);
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let mut state = AnimationState::new();
        let settings = settings_for(Scene::Fern);
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..5 {
            tick(&mut state, &settings, &mut rng);
        }
        state.reset();
        assert!(state.fern.points().is_empty());
        assert_eq!(state.fern.iterations(), 0);
        assert_eq!(state.frame, 0);
        assert_eq!(state.rotation, Rotation::default());
    }

    #[test]
    fn koch_tick_only_counts_frames() {
        let mut state = AnimationState::new();
        let settings = settings_for(Scene::KochSnowflake);
        let mut rng = StdRng::seed_from_u64(0);
        tick(&mut state, &settings, &mut rng);
        assert_eq!(state.frame, 1);
        assert_eq!(state.rotation, Rotation::default());
        assert!(state.fern.points().is_empty());
    }
}
