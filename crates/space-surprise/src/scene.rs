//! Scene state and the idle/collapse transitions.

use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Frame, layout::Rect};
use surprise_config::Config;
use surprise_core::{AnimationSpeed, Mode, OneShotTimer, Viewport};
use surprise_field::{AnimatedObject, BlackHole, FieldParams, generate, render_objects};
use surprise_starfield::Starfield;

/// Everything on screen, plus the single mode that drives it.
#[derive(Debug)]
pub struct Scene {
    config: Config,
    mode: Mode,
    /// The collapse finished and the objects are gone.
    reset_available: bool,
    viewport: Viewport,
    speed: AnimationSpeed,
    starfield: Starfield,
    objects: Vec<AnimatedObject>,
    black_hole: BlackHole,
    /// Clears the objects once the collapse animation has played out.
    clear_timer: OneShotTimer,
    rng: StdRng,
}

impl Scene {
    /// Create an idle scene with a fresh starfield and object batch.
    pub fn new(config: Config, viewport: Viewport, now_ms: u64) -> Self {
        Self::with_rng(config, viewport, StdRng::from_os_rng(), now_ms)
    }

    /// Create a scene with a caller-provided random source.
    pub fn with_rng(config: Config, viewport: Viewport, mut rng: StdRng, now_ms: u64) -> Self {
        let starfield = Starfield::new(&mut rng, viewport, config.star_count);
        let mut scene = Self {
            speed: config.animation_speed,
            config,
            mode: Mode::Idle,
            reset_available: false,
            viewport,
            starfield,
            objects: Vec::new(),
            black_hole: BlackHole::new(now_ms),
            clear_timer: OneShotTimer::new(),
            rng,
        };
        scene.spawn_objects(now_ms);
        scene
    }

    fn field_params(&self) -> FieldParams {
        FieldParams {
            count: self.config.object_count,
            exclusion_radius: self.config.exclusion_radius,
            margin: self.config.object_margin,
            max_attempts: self.config.max_placement_attempts,
        }
    }

    fn spawn_objects(&mut self, now_ms: u64) {
        let params = self.field_params();
        self.objects = generate(&mut self.rng, &self.viewport, &params)
            .into_iter()
            .map(|object| AnimatedObject::new(object, now_ms))
            .collect();
    }

    fn set_mode(&mut self, mode: Mode, now_ms: u64) {
        if self.mode != mode {
            log::info!("mode {} -> {}", self.mode.name(), mode.name());
        }
        self.mode = mode;
        self.black_hole.set_mode(mode, now_ms);
    }

    /// Start sucking everything into the black hole.
    ///
    /// Returns false when a collapse is already running or has finished.
    pub fn trigger_collapse(&mut self, now_ms: u64) -> bool {
        if self.mode.is_collapsing() || self.reset_available {
            return false;
        }

        self.set_mode(Mode::Collapsing, now_ms);
        self.starfield
            .reinitialize(&mut self.rng, self.viewport, self.config.star_count);

        let center = self.viewport.center();
        for object in &mut self.objects {
            object.collapse(&mut self.rng, center, now_ms);
        }

        self.clear_timer
            .arm(now_ms, self.config.collapse_clear_delay_ms);
        log::debug!(
            "clearing {} objects at {:?} ms",
            self.objects.len(),
            self.clear_timer.deadline_ms()
        );
        true
    }

    /// Regenerate the scene after a finished collapse.
    ///
    /// Returns false unless the reset action is currently offered.
    pub fn reset(&mut self, now_ms: u64) -> bool {
        if !self.reset_available {
            return false;
        }

        if self.clear_timer.cancel() {
            log::debug!("cancelled pending clear");
        }
        self.reset_available = false;
        self.set_mode(Mode::Idle, now_ms);
        self.starfield
            .reinitialize(&mut self.rng, self.viewport, self.config.star_count);
        self.spawn_objects(now_ms);
        true
    }

    /// Rebuild the starfield and the object batch for new dimensions.
    ///
    /// The mode is left alone: resizing mid-collapse brings back a floating
    /// batch while the black hole keeps pulling the stars, and the pending
    /// clear still fires on schedule.
    pub fn resize(&mut self, viewport: Viewport, now_ms: u64) {
        log::info!(
            "resize to {}x{} ({})",
            viewport.width,
            viewport.height,
            self.mode.name()
        );
        self.viewport = viewport;
        self.starfield
            .reinitialize(&mut self.rng, viewport, self.config.star_count);
        self.spawn_objects(now_ms);
    }

    /// Advance one frame.
    pub fn tick(&mut self, now_ms: u64) {
        self.starfield.advance(&mut self.rng, self.mode, self.speed);

        if self.clear_timer.poll(now_ms) {
            log::info!("collapse finished, {} objects cleared", self.objects.len());
            self.objects.clear();
            self.reset_available = true;
        }
    }

    /// Switch to the next animation speed.
    pub fn cycle_speed(&mut self) {
        self.speed = self.speed.next();
        log::info!("animation speed {}", self.speed.name());
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn reset_available(&self) -> bool {
        self.reset_available
    }

    pub fn speed(&self) -> AnimationSpeed {
        self.speed
    }

    #[allow(dead_code)]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[allow(dead_code)]
    pub fn objects(&self) -> &[AnimatedObject] {
        &self.objects
    }

    #[allow(dead_code)]
    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    /// Draw stars, objects and the black hole, back to front.
    pub fn render(&self, frame: &mut Frame, area: Rect, now_ms: u64) {
        self.starfield.render(frame, area);
        render_objects(frame, area, &self.viewport, &self.objects, now_ms);
        self.black_hole
            .render(frame, area, &self.viewport, now_ms, self.speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        Scene::with_rng(
            Config::default(),
            Viewport::new(1920.0, 1080.0),
            StdRng::seed_from_u64(99),
            0,
        )
    }

    #[test]
    fn test_new_scene_is_idle_and_full() {
        let scene = scene();
        assert_eq!(scene.mode(), Mode::Idle);
        assert!(!scene.reset_available());
        assert_eq!(scene.objects().len(), 30);
        assert_eq!(scene.starfield().particles().len(), 200);
    }

    #[test]
    fn test_collapse_clears_after_delay() {
        let mut scene = scene();
        assert!(scene.trigger_collapse(1_000));
        assert_eq!(scene.mode(), Mode::Collapsing);
        assert!(scene.objects().iter().all(|o| o.animation.is_collapsing()));

        scene.tick(3_499);
        assert_eq!(scene.objects().len(), 30);
        assert!(!scene.reset_available());

        scene.tick(3_500);
        assert!(scene.objects().is_empty());
        assert!(scene.reset_available());
        assert_eq!(scene.mode(), Mode::Collapsing);
    }

    #[test]
    fn test_every_mode_change_refreshes_stars() {
        let mut scene = scene();
        let idle_batch = scene.starfield().particles().to_vec();

        scene.trigger_collapse(0);
        let collapse_batch = scene.starfield().particles().to_vec();
        assert_ne!(collapse_batch, idle_batch);
        assert_eq!(collapse_batch.len(), 200);

        scene.tick(2_500);
        assert!(scene.reset(3_000));
        assert_ne!(scene.starfield().particles(), collapse_batch.as_slice());
    }

    #[test]
    fn test_collapse_cannot_retrigger() {
        let mut scene = scene();
        assert!(scene.trigger_collapse(0));
        assert!(!scene.trigger_collapse(100));
        scene.tick(2_500);
        assert!(!scene.trigger_collapse(2_600));
    }

    #[test]
    fn test_reset_only_after_collapse() {
        let mut scene = scene();
        assert!(!scene.reset(0));
        scene.trigger_collapse(0);
        assert!(!scene.reset(1_000));
        assert_eq!(scene.mode(), Mode::Collapsing);
    }

    #[test]
    fn test_reset_regenerates_and_returns_to_idle() {
        let mut scene = scene();
        scene.trigger_collapse(0);
        scene.tick(2_500);
        assert!(scene.reset(3_000));

        assert_eq!(scene.mode(), Mode::Idle);
        assert!(!scene.reset_available());
        assert_eq!(scene.objects().len(), 30);
        assert!(scene.objects().iter().all(|o| !o.animation.is_collapsing()));
        assert_eq!(scene.starfield().particles().len(), 200);

        // No stale clear left over from the previous collapse.
        scene.tick(10_000);
        assert_eq!(scene.objects().len(), 30);
    }

    #[test]
    fn test_full_cycle_can_repeat() {
        let mut scene = scene();
        for round in 0..3u64 {
            let t = round * 10_000;
            assert!(scene.trigger_collapse(t));
            scene.tick(t + 2_500);
            assert!(scene.reset(t + 3_000));
        }
        assert_eq!(scene.objects().len(), 30);
    }

    #[test]
    fn test_resize_while_idle() {
        let mut scene = scene();
        let smaller = Viewport::new(1280.0, 720.0);
        scene.resize(smaller, 500);

        assert_eq!(scene.viewport(), &smaller);
        assert_eq!(scene.starfield().viewport(), &smaller);
        assert_eq!(scene.starfield().particles().len(), 200);
        assert!(
            scene
                .starfield()
                .particles()
                .iter()
                .all(|p| smaller.contains(p.position()))
        );

        assert_eq!(scene.objects().len(), 30);
        for o in scene.objects() {
            assert!(smaller.contains(o.object.position()));
            assert!(o.object.position().distance(smaller.center()) >= 200.0);
        }
        assert_eq!(scene.mode(), Mode::Idle);
    }

    #[test]
    fn test_resize_during_collapse_keeps_mode_and_timer() {
        let mut scene = scene();
        scene.trigger_collapse(0);
        scene.resize(Viewport::new(1600.0, 900.0), 1_000);

        assert_eq!(scene.mode(), Mode::Collapsing);
        assert_eq!(scene.objects().len(), 30);
        assert!(scene.objects().iter().all(|o| !o.animation.is_collapsing()));

        scene.tick(2_500);
        assert!(scene.objects().is_empty());
        assert!(scene.reset_available());
    }

    #[test]
    fn test_stars_converge_while_collapsing() {
        let mut scene = scene();
        let center = scene.viewport().center();
        let mean_distance = |scene: &Scene| {
            let particles = scene.starfield().particles();
            particles
                .iter()
                .map(|p| p.position().distance(center))
                .sum::<f32>()
                / particles.len() as f32
        };

        scene.trigger_collapse(0);
        let before = mean_distance(&scene);
        for frame in 1..=30 {
            scene.tick(frame * 16);
        }
        assert!(mean_distance(&scene) < before);
    }

    #[test]
    fn test_cycle_speed() {
        let mut scene = scene();
        assert_eq!(scene.speed(), AnimationSpeed::Medium);
        scene.cycle_speed();
        assert_eq!(scene.speed(), AnimationSpeed::Fast);
    }
}
