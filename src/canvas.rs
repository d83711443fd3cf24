// Surface backed by an HTML canvas and its 2d rendering context

use crate::color::Color;
use crate::error::{PageError, PageResult};
use crate::surface::Surface;
use std::f64::consts::PI;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    // Fails with `NoContext` when the canvas already holds another kind of
    // context or the browser refuses to hand out a 2d one
    pub fn new(canvas: HtmlCanvasElement) -> PageResult<Self> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or(PageError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| PageError::NoContext)?;
        Ok(CanvasSurface { canvas, context })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn set_size(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }

    fn clear(&mut self) {
        let (width, height) = self.size();
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    #[allow(deprecated)]
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) -> PageResult<()> {
        self.context.begin_path();
        self.context.arc(x, y, radius, 0.0, PI * 2.0)?;
        self.context.set_fill_style(&color.to_css().into());
        self.context.fill();
        Ok(())
    }
}
