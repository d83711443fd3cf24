// Simple particle struct to keep track of individual position, velocity, and radius

use crate::config::FieldConfig;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
}

/// Which velocity components were inverted by the last `advance`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Reflection {
    pub x: bool,
    pub y: bool,
}

impl Particle {
    pub fn new(pos: [f64; 2], vel: [f64; 2], radius: f64) -> Particle {
        Particle { pos, vel, radius }
    }

    // Uniform position inside the surface, radius and per-axis velocity from the config ranges
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        width: f64,
        height: f64,
        config: &FieldConfig,
    ) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let radius = sample(rng, config.radius);
        let vel_x = sample(rng, config.velocity);
        let vel_y = sample(rng, config.velocity);
        Particle::new([pos_x, pos_y], [vel_x, vel_y], radius)
    }

    /// Move by one frame of velocity, then invert any velocity component whose
    /// coordinate left `[0, width] x [0, height]` heading outward. Position is not
    /// clamped, so the particle may sit outside the surface for a frame.
    pub fn advance(&mut self, width: f64, height: f64) -> Reflection {
        self.pos[0] += self.vel[0];
        self.pos[1] += self.vel[1];

        Reflection {
            x: reflect(self.pos[0], &mut self.vel[0], width),
            y: reflect(self.pos[1], &mut self.vel[1], height),
        }
    }

    pub fn is_inside(&self, width: f64, height: f64) -> bool {
        (0.0..=width).contains(&self.pos[0]) && (0.0..=height).contains(&self.pos[1])
    }
}

// A particle already outside but moving back in (after the surface shrank) keeps
// its heading, otherwise it would flip every frame and never return.
fn reflect(pos: f64, vel: &mut f64, bound: f64) -> bool {
    let escaping = (pos < 0.0 && *vel < 0.0) || (pos > bound && *vel > 0.0);
    if escaping {
        *vel *= -1.0;
    }
    escaping
}

fn sample<R: Rng + ?Sized>(rng: &mut R, (min, max): (f64, f64)) -> f64 {
    rng.gen::<f64>() * (max - min) + min
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn moves_without_reflection_inside_bounds() {
        let mut p = Particle::new([799.0, 300.0], [0.5, 0.0], 2.0);
        let reflection = p.advance(800.0, 600.0);
        assert_eq!(p.pos, [799.5, 300.0]);
        assert_eq!(p.vel, [0.5, 0.0]);
        assert_eq!(reflection, Reflection::default());
    }

    #[test]
    fn reflects_past_right_edge_without_clamping() {
        let mut p = Particle::new([799.75, 300.0], [0.5, 0.0], 2.0);
        let reflection = p.advance(800.0, 600.0);
        assert_eq!(p.pos, [800.25, 300.0]);
        assert_eq!(p.vel, [-0.5, 0.0]);
        assert_eq!(reflection, Reflection { x: true, y: false });
        assert!(!p.is_inside(800.0, 600.0));

        // Back on the surface the following frame, heading inward
        let reflection = p.advance(800.0, 600.0);
        assert_eq!(p.pos, [799.75, 300.0]);
        assert_eq!(p.vel, [-0.5, 0.0]);
        assert_eq!(reflection, Reflection::default());
    }

    #[test]
    fn overshoot_is_rendered_unclamped() {
        let mut p = Particle::new([799.7, 300.0], [0.5, 0.0], 2.0);
        p.advance(800.0, 600.0);
        assert!((p.pos[0] - 800.2).abs() < 1e-9);
        assert_eq!(p.vel, [-0.5, 0.0]);
    }

    #[test]
    fn reflects_past_top_and_left() {
        let mut p = Particle::new([0.25, 0.25], [-0.5, -0.5], 1.0);
        let reflection = p.advance(800.0, 600.0);
        assert_eq!(reflection, Reflection { x: true, y: true });
        assert_eq!(p.vel, [0.5, 0.5]);
    }

    #[test]
    fn heading_inward_from_outside_keeps_velocity() {
        let mut p = Particle::new([900.0, 300.0], [-0.5, 0.0], 2.0);
        let reflection = p.advance(800.0, 600.0);
        assert_eq!(p.pos, [899.5, 300.0]);
        assert_eq!(p.vel, [-0.5, 0.0]);
        assert_eq!(reflection, Reflection::default());
    }

    #[test]
    fn boundary_itself_is_inside() {
        let mut p = Particle::new([799.5, 599.5], [0.5, 0.5], 1.0);
        let reflection = p.advance(800.0, 600.0);
        assert_eq!(p.pos, [800.0, 600.0]);
        assert_eq!(reflection, Reflection::default());
        assert!(p.is_inside(800.0, 600.0));
    }

    #[test]
    fn spawn_respects_config_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = FieldConfig::default();
        for _ in 0..1000 {
            let p = Particle::spawn(&mut rng, 800.0, 600.0, &config);
            assert!(p.pos[0] >= 0.0 && p.pos[0] < 800.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] < 600.0);
            assert!(p.radius >= 1.0 && p.radius < 4.0);
            assert!(p.vel[0] >= -1.0 && p.vel[0] < 1.0);
            assert!(p.vel[1] >= -1.0 && p.vel[1] < 1.0);
        }
    }

    #[test]
    fn spawn_on_empty_surface() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = Particle::spawn(&mut rng, 0.0, 0.0, &FieldConfig::default());
        assert_eq!(p.pos, [0.0, 0.0]);
    }
}
