use crate::animator::Animator;
use crate::canvas::CanvasSurface;
use crate::config::FieldConfig;
use crate::error::{PageError, PageResult};
use crate::field::ParticleField;
use crate::frame_loop::{viewport_size, FrameLoop};
use crate::surface::Surface;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

/// Drifting-dot background bound to a full-viewport canvas.
///
/// Created by `mount`; the animation runs until `unmount` is called or the
/// handle is freed from JS, so a host that drops the handle loses the
/// background.
#[wasm_bindgen]
pub struct ParticleBackground {
    frame_loop: FrameLoop<CanvasSurface>,
}

#[wasm_bindgen]
impl ParticleBackground {
    /// Start animating on `canvas`. Returns `undefined`, doing nothing else,
    /// when a 2d context cannot be obtained for it.
    pub fn mount(canvas: HtmlCanvasElement) -> Result<Option<ParticleBackground>, JsValue> {
        Ok(Self::mount_with(canvas, &FieldConfig::default())?)
    }

    /// Same as `mount`, looking the canvas up by element id.
    pub fn mount_by_id(id: &str) -> Result<Option<ParticleBackground>, JsValue> {
        let document = web_sys::window()
            .ok_or(PageError::NoWindow)?
            .document()
            .ok_or(PageError::NoDocument)?;
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| PageError::ElementNotFound(id.to_owned()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| PageError::NotACanvas(id.to_owned()))?;
        Self::mount(canvas)
    }

    pub fn unmount(&mut self) {
        if self.frame_loop.is_running() {
            self.frame_loop.stop();
            log::info!("particle background unmounted");
        }
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    pub fn particle_count(&self) -> usize {
        self.frame_loop.with_animator(|a| a.field().len())
    }

    pub fn width(&self) -> f64 {
        self.frame_loop.with_animator(|a| a.surface().size().0)
    }

    pub fn height(&self) -> f64 {
        self.frame_loop.with_animator(|a| a.surface().size().1)
    }
}

impl ParticleBackground {
    pub fn mount_with(
        canvas: HtmlCanvasElement,
        config: &FieldConfig,
    ) -> PageResult<Option<ParticleBackground>> {
        let mut surface = match CanvasSurface::new(canvas) {
            Ok(surface) => surface,
            // Purely decorative, so a missing context is not worth reporting
            Err(PageError::NoContext) => return Ok(None),
            Err(err) => return Err(err),
        };
        let window = web_sys::window().ok_or(PageError::NoWindow)?;
        let (width, height) = viewport_size(&window)?;
        surface.set_size(width, height);
        let (width, height) = surface.size();

        let field = ParticleField::new(&mut rand::thread_rng(), width, height, config);
        let count = field.len();
        let animator = Animator::new(field, surface, config.fill);
        let frame_loop = FrameLoop::start(window, animator)?;
        log::info!(
            "particle background mounted: {} particles on {}x{}",
            count,
            width,
            height
        );
        Ok(Some(ParticleBackground { frame_loop }))
    }
}
