// Simple color struct, created from an unsigned 32 representing RRGGBBAA,
// and rendered as a CSS rgba() fill style for the 2d context

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    pub fn alpha(&self) -> f64 {
        self.a as f64 / 255.0
    }

    // Alpha is rounded to two decimals so 0x1a comes out as the familiar 0.1
    pub fn to_css(&self) -> String {
        let alpha = (self.alpha() * 100.0).round() / 100.0;
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_rrggbbaa() {
        let c = Color::from_u32(0x11223344);
        assert_eq!(c, Color { r: 0x11, g: 0x22, b: 0x33, a: 0x44 });
    }

    #[test]
    fn css_faint_white() {
        assert_eq!(Color::from_u32(0xffffff1a).to_css(), "rgba(255, 255, 255, 0.1)");
    }

    #[test]
    fn css_opaque_and_transparent() {
        assert_eq!(Color::from_u32(0x000000ff).to_css(), "rgba(0, 0, 0, 1)");
        assert_eq!(Color::from_u32(0x0a141e00).to_css(), "rgba(10, 20, 30, 0)");
    }
}
