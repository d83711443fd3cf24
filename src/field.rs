//! Fixed-size collection of independent particles bouncing inside a surface.

use crate::config::FieldConfig;
use crate::particle::{Particle, Reflection};
use rand::Rng;

pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Spawn `config.count` particles uniformly over a `width` x `height` surface.
    /// The collection is never grown or shrunk afterwards.
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        width: f64,
        height: f64,
        config: &FieldConfig,
    ) -> ParticleField {
        let particles = (0..config.count)
            .map(|_| Particle::spawn(rng, width, height, config))
            .collect();
        ParticleField {
            width,
            height,
            particles,
        }
    }

    pub fn from_particles(width: f64, height: f64, particles: Vec<Particle>) -> ParticleField {
        ParticleField {
            width,
            height,
            particles,
        }
    }

    /// Advance every particle by one frame against the current dimensions.
    /// Returns how many velocity components were reflected.
    pub fn step(&mut self) -> usize {
        let (width, height) = (self.width, self.height);
        self.particles
            .iter_mut()
            .map(|p| p.advance(width, height))
            .map(|Reflection { x, y }| x as usize + y as usize)
            .sum()
    }

    // Positions are left alone; out-of-range particles find their way back by reflection
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field() -> ParticleField {
        let mut rng = StdRng::seed_from_u64(42);
        ParticleField::new(&mut rng, 800.0, 600.0, &FieldConfig::default())
    }

    #[test]
    fn spawns_fixed_count() {
        let field = field();
        assert_eq!(field.len(), 50);
        assert!(field.particles().iter().all(|p| p.is_inside(800.0, 600.0)));
    }

    #[test]
    fn same_seed_same_field() {
        let a = field();
        let b = field();
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn count_is_stable_across_frames() {
        let mut field = field();
        for _ in 0..10_000 {
            field.step();
        }
        assert_eq!(field.len(), 50);
    }

    #[test]
    fn stays_contained_over_many_frames() {
        let mut field = field();
        for _ in 0..10_000 {
            field.step();
            // One frame of overshoot at most, and always heading back in
            for p in field.particles() {
                assert!(p.pos[0] >= -1.0 && p.pos[0] <= 801.0);
                assert!(p.pos[1] >= -1.0 && p.pos[1] <= 601.0);
                if p.pos[0] < 0.0 {
                    assert!(p.vel[0] >= 0.0);
                }
                if p.pos[0] > 800.0 {
                    assert!(p.vel[0] <= 0.0);
                }
                if p.pos[1] < 0.0 {
                    assert!(p.vel[1] >= 0.0);
                }
                if p.pos[1] > 600.0 {
                    assert!(p.vel[1] <= 0.0);
                }
            }
        }
    }

    #[test]
    fn velocity_only_flips_on_crossing() {
        let mut field = ParticleField::from_particles(
            800.0,
            600.0,
            vec![
                Particle::new([400.0, 300.0], [0.5, -0.5], 2.0),
                Particle::new([799.75, 300.0], [0.5, 0.25], 2.0),
            ],
        );
        assert_eq!(field.step(), 1);
        assert_eq!(field.particles()[0].vel, [0.5, -0.5]);
        assert_eq!(field.particles()[1].vel, [-0.5, 0.25]);
    }

    #[test]
    fn resize_keeps_particles() {
        let mut field = field();
        let before = field.particles().to_vec();
        field.resize(320.0, 240.0);
        assert_eq!((field.width(), field.height()), (320.0, 240.0));
        assert_eq!(field.particles(), &before[..]);
    }

    #[test]
    fn shrunk_surface_reels_particles_back_in() {
        let mut field = ParticleField::from_particles(
            800.0,
            600.0,
            vec![Particle::new([700.0, 100.0], [0.5, 0.0], 2.0)],
        );
        field.resize(400.0, 600.0);
        field.step();
        let p = field.particles()[0];
        assert_eq!(p.pos, [700.5, 100.0]);
        assert_eq!(p.vel, [-0.5, 0.0]);
        for _ in 0..1000 {
            field.step();
        }
        assert!(field.particles()[0].is_inside(400.0, 600.0));
    }

    #[test]
    fn custom_count() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = FieldConfig {
            count: 5,
            ..FieldConfig::default()
        };
        let field = ParticleField::new(&mut rng, 10.0, 10.0, &config);
        assert_eq!(field.len(), 5);
        assert!(!field.is_empty());
    }
}
