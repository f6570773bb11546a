//! Decorative particles drifting behind the login and dashboard pages.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const PARTICLE_COUNT: usize = 22;

pub const PARTICLE_COLORS: [&str; 5] = ["#FFD700", "#4ECDC4", "#FF6B6B", "#A855F7", "#22C55E"];

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub size_px: f64,
    pub left_percent: f64,
    pub color: &'static str,
    pub duration_secs: f64,
    pub delay_secs: f64,
}

impl Particle {
    /// Inline style for the particle element.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "width: {size:.1}px; height: {size:.1}px; left: {left:.2}%; background: {color}; \
             animation-duration: {duration:.2}s; animation-delay: {delay:.2}s;",
            size = self.size_px,
            left = self.left_percent,
            color = self.color,
            duration = self.duration_secs,
            delay = self.delay_secs,
        )
    }
}

/// Generate `count` particles with random size, position, colour and timing.
pub fn scatter_particles<R: Rng>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            size_px: rng.random_range(6.0..26.0),
            left_percent: rng.random_range(0.0..100.0),
            color: PARTICLE_COLORS[rng.random_range(0..PARTICLE_COLORS.len())],
            duration_secs: rng.random_range(12.0..30.0),
            delay_secs: rng.random_range(0.0..10.0),
        })
        .collect()
}

/// The standard background field. A seed makes the layout reproducible.
#[must_use]
pub fn particle_field(seed: Option<u64>) -> Vec<Particle> {
    match seed {
        Some(seed) => scatter_particles(&mut StdRng::seed_from_u64(seed), PARTICLE_COUNT),
        None => scatter_particles(&mut rand::rng(), PARTICLE_COUNT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particles_stay_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = scatter_particles(&mut rng, PARTICLE_COUNT);
        assert_eq!(particles.len(), 22);
        for particle in &particles {
            assert!((6.0..26.0).contains(&particle.size_px));
            assert!((0.0..100.0).contains(&particle.left_percent));
            assert!((12.0..30.0).contains(&particle.duration_secs));
            assert!((0.0..10.0).contains(&particle.delay_secs));
            assert!(PARTICLE_COLORS.contains(&particle.color));
        }
    }

    #[test]
    fn same_seed_same_field() {
        assert_eq!(particle_field(Some(3)), particle_field(Some(3)));
        assert_eq!(particle_field(None).len(), PARTICLE_COUNT);
    }

    #[test]
    fn style_declares_size_and_timing() {
        let particle = Particle {
            size_px: 10.0,
            left_percent: 50.0,
            color: "#FFD700",
            duration_secs: 12.0,
            delay_secs: 1.5,
        };
        let style = particle.style();
        assert!(style.contains("width: 10.0px"));
        assert!(style.contains("left: 50.00%"));
        assert!(style.contains("animation-delay: 1.50s"));
    }
}
