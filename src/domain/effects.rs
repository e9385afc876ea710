//! Cosmetic particle effects emitted when ghost messages expire.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Particles spawned per expired message.
pub const ASH_PARTICLE_COUNT: usize = 20;

/// Delay before particles start drifting and fading.
const ASH_FADE_DELAY_MS: i64 = 100;

/// Fade duration after which particles are purged.
const ASH_FADE_MS: i64 = 2_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AshParticle {
    /// Horizontal position, percent of the chat area width.
    pub x_pct: f32,
    /// Vertical position, percent of the chat area height.
    pub y_pct: f32,
    /// Drift applied over the fade, in cells.
    pub drift: (u16, u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AshPhase {
    Settling,
    Fading,
    Gone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AshBurst {
    spawned_at: DateTime<Utc>,
    particles: Vec<AshParticle>,
}

impl AshBurst {
    pub fn spawn<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> Self {
        let particles = (0..ASH_PARTICLE_COUNT)
            .map(|_| AshParticle {
                x_pct: rng.random_range(0.0..100.0),
                y_pct: rng.random_range(0.0..100.0),
                drift: (rng.random_range(0..10), rng.random_range(0..5)),
            })
            .collect();

        Self {
            spawned_at: now,
            particles,
        }
    }

    pub fn particles(&self) -> &[AshParticle] {
        &self.particles
    }

    pub fn phase(&self, now: DateTime<Utc>) -> AshPhase {
        let age = now - self.spawned_at;
        if age < Duration::milliseconds(ASH_FADE_DELAY_MS) {
            AshPhase::Settling
        } else if age < Duration::milliseconds(ASH_FADE_DELAY_MS + ASH_FADE_MS) {
            AshPhase::Fading
        } else {
            AshPhase::Gone
        }
    }

    /// Fade progress in `0.0..=1.0`; zero while settling.
    pub fn fade_progress(&self, now: DateTime<Utc>) -> f32 {
        let faded_ms = (now - self.spawned_at).num_milliseconds() - ASH_FADE_DELAY_MS;
        (faded_ms.max(0) as f32 / ASH_FADE_MS as f32).min(1.0)
    }
}

/// Live ash bursts, pruned on every tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AshField {
    bursts: Vec<AshBurst>,
}

impl AshField {
    pub fn push(&mut self, burst: AshBurst) {
        self.bursts.push(burst);
    }

    pub fn bursts(&self) -> &[AshBurst] {
        &self.bursts
    }

    /// Drops bursts whose particles have finished fading. Returns how many.
    pub fn prune(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.bursts.len();
        self.bursts.retain(|burst| burst.phase(now) != AshPhase::Gone);
        before - self.bursts.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.bursts.is_empty()
    }
}
