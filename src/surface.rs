use crate::color::Color;
use crate::error::PageError;

/// Anything a particle field can be painted onto. The browser implementation
/// is `CanvasSurface`; tests record calls instead of drawing.
pub trait Surface {
    fn size(&self) -> (f64, f64);

    fn set_size(&mut self, width: f64, height: f64);

    fn clear(&mut self);

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color)
        -> Result<(), PageError>;
}
