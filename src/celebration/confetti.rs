use eframe::egui::{self, Color32};

use super::{BurstConfig, CelebrationEffect, CelebrationError, Origin};
use crate::interaction::RandomSource;

const TICK_SECS: f32 = 1.0 / 60.0;
// Longest frame gap simulated in one go; longer stalls just slow the burst down.
const MAX_CATCH_UP_SECS: f32 = 0.25;
const TOTAL_TICKS: u32 = 200;
const START_VELOCITY: f32 = 45.0;
const DECAY: f32 = 0.9;
const GRAVITY: f32 = 3.0;
const LAUNCH_ANGLE_DEG: f32 = 90.0;
const PARTICLE_SIZE: f32 = 9.0;
const WOBBLE_RADIUS: f32 = 8.0;

const COLORS: [Color32; 7] = [
    Color32::from_rgb(0x26, 0xCC, 0xFF),
    Color32::from_rgb(0xA2, 0x5A, 0xFD),
    Color32::from_rgb(0xFF, 0x5E, 0x7E),
    Color32::from_rgb(0x88, 0xFF, 0x5A),
    Color32::from_rgb(0xFC, 0xFF, 0x42),
    Color32::from_rgb(0xFF, 0xA6, 0x2D),
    Color32::from_rgb(0xFF, 0x36, 0xFF),
];

struct Particle {
    // Relative to the burst origin, screen coordinates (y down).
    pos: egui::Vec2,
    angle: f32,
    velocity: f32,
    wobble: f32,
    wobble_speed: f32,
    tilt: f32,
    color: Color32,
    tick: u32,
}

impl Particle {
    fn step(&mut self) {
        self.pos.x += self.angle.cos() * self.velocity;
        self.pos.y += self.angle.sin() * self.velocity + GRAVITY;
        self.velocity *= DECAY;
        self.wobble += self.wobble_speed;
        self.tilt += 0.1;
        self.tick += 1;
    }

    fn expired(&self) -> bool {
        self.tick >= TOTAL_TICKS
    }

    fn opacity(&self) -> f32 {
        1.0 - self.tick as f32 / TOTAL_TICKS as f32
    }
}

/// Confetti painted over the whole window on a foreground layer.
pub struct ConfettiBurst {
    particles: Vec<Particle>,
    origin: Origin,
    rng: Box<dyn RandomSource>,
    pending_secs: f32,
}

impl ConfettiBurst {
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        Self {
            particles: Vec::new(),
            origin: Origin::default(),
            rng,
            pending_secs: 0.0,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    fn spawn(&mut self, config: &BurstConfig) {
        let spread = config.spread.to_radians();
        let up = -LAUNCH_ANGLE_DEG.to_radians();
        for _ in 0..config.particle_count {
            let r = &mut self.rng;
            let angle = up + (0.5 * spread - r.next_unit() as f32 * spread);
            let velocity = START_VELOCITY * 0.5 + r.next_unit() as f32 * START_VELOCITY;
            let wobble = r.next_unit() as f32 * 10.0;
            let wobble_speed = (r.next_unit() as f32 * 0.1 + 0.05).min(0.11);
            let tilt = r.next_unit() as f32 * std::f32::consts::PI;
            let color = COLORS[(r.next_unit() * COLORS.len() as f64) as usize % COLORS.len()];
            self.particles.push(Particle {
                pos: egui::Vec2::ZERO,
                angle,
                velocity,
                wobble,
                wobble_speed,
                tilt,
                color,
                tick: 0,
            });
        }
        self.origin = config.origin;
    }

    /// Runs the fixed 60 Hz simulation for `dt` seconds of wall time.
    pub fn advance(&mut self, dt: f32) {
        if self.particles.is_empty() {
            self.pending_secs = 0.0;
            return;
        }
        self.pending_secs += dt.clamp(0.0, MAX_CATCH_UP_SECS);
        while self.pending_secs >= TICK_SECS {
            self.pending_secs -= TICK_SECS;
            for p in &mut self.particles {
                p.step();
            }
            self.particles.retain(|p| !p.expired());
        }
    }

    pub fn paint(&mut self, ctx: &egui::Context) {
        if !self.is_active() {
            return;
        }
        let dt = ctx.input(|i| i.stable_dt);
        self.advance(dt);

        let screen = ctx.screen_rect();
        let origin = screen.min
            + egui::vec2(
                screen.width() * self.origin.x,
                screen.height() * self.origin.y,
            );
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("confetti"),
        ));
        for p in &self.particles {
            let flutter = egui::vec2(p.wobble.cos(), p.wobble.sin()) * WOBBLE_RADIUS;
            let center = origin + p.pos + flutter;
            let size = egui::vec2(
                PARTICLE_SIZE * p.tilt.cos().abs().max(0.2),
                PARTICLE_SIZE * 0.6,
            );
            painter.rect_filled(
                egui::Rect::from_center_size(center, size),
                1.0,
                p.color.gamma_multiply(p.opacity()),
            );
        }
        ctx.request_repaint();
    }
}

impl CelebrationEffect for ConfettiBurst {
    fn fire(&mut self, config: &BurstConfig) -> Result<(), CelebrationError> {
        config.validate()?;
        self.spawn(config);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::RngSource;

    fn burst() -> ConfettiBurst {
        ConfettiBurst::new(Box::new(RngSource::seeded(5)))
    }

    #[test]
    fn fire_spawns_requested_particles() {
        let mut c = burst();
        assert!(!c.is_active());
        c.fire(&BurstConfig::default()).unwrap();
        assert_eq!(c.particles.len(), 150);
    }

    #[test]
    fn invalid_burst_spawns_nothing() {
        let mut c = burst();
        let cfg = BurstConfig {
            particle_count: 0,
            ..Default::default()
        };
        assert_eq!(c.fire(&cfg), Err(CelebrationError::NoParticles));
        assert!(!c.is_active());
    }

    #[test]
    fn particles_launch_upwards() {
        let mut c = burst();
        c.fire(&BurstConfig::default()).unwrap();
        c.advance(TICK_SECS * 1.5);
        let mean_y: f32 =
            c.particles.iter().map(|p| p.pos.y).sum::<f32>() / c.particles.len() as f32;
        assert!(mean_y < 0.0, "mean_y={mean_y}");
        assert!(c.particles.iter().all(|p| p.tick == 1));
    }

    #[test]
    fn launch_angles_stay_inside_spread() {
        let mut c = burst();
        let cfg = BurstConfig {
            spread: 60.0,
            ..Default::default()
        };
        c.fire(&cfg).unwrap();
        let up = -90f32.to_radians();
        let half = 30f32.to_radians() + 1e-4;
        assert!(c.particles.iter().all(|p| (p.angle - up).abs() <= half));
    }

    #[test]
    fn burst_expires_after_lifetime() {
        let mut c = burst();
        c.fire(&BurstConfig::default()).unwrap();
        for _ in 0..(TOTAL_TICKS - 10) {
            c.advance(TICK_SECS * 1.01);
        }
        assert!(c.is_active());
        for _ in 0..60 {
            c.advance(TICK_SECS * 1.01);
        }
        assert!(!c.is_active());
    }

    #[test]
    fn long_stall_is_capped() {
        let mut c = burst();
        c.fire(&BurstConfig::default()).unwrap();
        c.advance(60.0);
        assert!(c.is_active());
        assert!(c.particles.iter().all(|p| p.tick <= 15));
    }
}
