//! Per-frame driver for a particle field: clear, step, paint.
//!
//! `Animator` knows nothing about `requestAnimationFrame`; `frame_loop` calls
//! `frame` once per display refresh and stops re-arming as soon as it reports
//! `FrameStatus::Stopped`.

use crate::color::Color;
use crate::field::ParticleField;
use crate::surface::Surface;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Stopped,
}

pub struct Animator<S: Surface> {
    field: ParticleField,
    surface: S,
    fill: Color,
    running: bool,
}

impl<S: Surface> Animator<S> {
    pub fn new(field: ParticleField, surface: S, fill: Color) -> Self {
        Animator {
            field,
            surface,
            fill,
            running: true,
        }
    }

    pub fn frame(&mut self) -> FrameStatus {
        if !self.running {
            return FrameStatus::Stopped;
        }

        #[cfg(feature = "frame-timing")]
        let _timer = crate::timer::Timer::new("Animator::frame");

        self.surface.clear();
        self.field.step();
        for p in self.field.particles() {
            if let Err(err) = self
                .surface
                .fill_circle(p.pos[0], p.pos[1], p.radius, self.fill)
            {
                log::warn!("failed to draw particle: {}", err);
            }
        }
        FrameStatus::Continue
    }

    /// Match the surface and the field to new viewport dimensions.
    pub fn resize(&mut self, width: f64, height: f64) {
        if !self.running {
            return;
        }
        self.surface.set_size(width, height);
        let (width, height) = self.surface.size();
        self.field.resize(width, height);
        log::debug!("particle field resized to {}x{}", width, height);
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
