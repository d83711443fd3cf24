use crate::color::Color;

/// Tunables for a particle field. The defaults give the faint drifting dots
/// used behind the landing page.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// Number of particles, fixed for the lifetime of the field.
    pub count: usize,
    /// Half-open radius range `[min, max)`.
    pub radius: (f64, f64),
    /// Half-open per-axis velocity range `[min, max)`, in pixels per frame.
    pub velocity: (f64, f64),
    pub fill: Color,
}

impl FieldConfig {
    pub const PARTICLE_COUNT: usize = 50;
    pub const MIN_RADIUS: f64 = 1.0;
    pub const MAX_RADIUS: f64 = 4.0;
    pub const MAX_VELOCITY: f64 = 1.0;
    pub const FILL: Color = Color::from_u32(0xffffff1a);
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            count: Self::PARTICLE_COUNT,
            radius: (Self::MIN_RADIUS, Self::MAX_RADIUS),
            velocity: (-Self::MAX_VELOCITY, Self::MAX_VELOCITY),
            fill: Self::FILL,
        }
    }
}
