use std::fmt::Display;

use tiny_skia::{ColorU8, PremultipliedColorU8};

/// An sRGB color with an alpha channel.
///
/// Unpremultiplied by convention.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color([u8; 4]);

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(u8::MAX, u8::MAX, u8::MAX);

    /// The dark blue-gray behind the canvas and the bar.
    pub const INDIA_INK: Color = Color::rgb(35, 39, 50);
    pub const GOLD: Color = Color::rgb(255, 215, 0);

    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);

    /// Creates a color from its RGBA components.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Creates a color from RGB components with 100% alpha.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, u8::MAX)
    }

    /// Gets the red component.
    pub fn red(&self) -> u8 {
        self.0[0]
    }

    /// Gets the green component.
    pub fn green(&self) -> u8 {
        self.0[1]
    }

    /// Gets the blue component.
    pub fn blue(&self) -> u8 {
        self.0[2]
    }

    /// Gets the alpha component.
    pub fn alpha(&self) -> u8 {
        self.0[3]
    }

    /// Gets the color as an array of values in RGBA order.
    pub fn to_array(&self) -> [u8; 4] {
        self.0
    }

    /// Creates a color from an array of values in RGBA order.
    pub fn from_array(array: [u8; 4]) -> Self {
        Self(array)
    }

    /// Packs the color as `0xAARRGGBB`, the layout window surfaces expect.
    pub fn to_argb(&self) -> u32 {
        let [r, g, b, a] = self.0;
        u32::from_be_bytes([a, r, g, b])
    }

    /// Converts to a `tiny-skia` color for use with paints and fills.
    pub fn to_skia(&self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.red(), self.green(), self.blue(), self.alpha())
    }

    /// Converts to the premultiplied pixel representation stored in a `Pixmap`.
    pub fn to_pixel(&self) -> PremultipliedColorU8 {
        ColorU8::from_rgba(self.red(), self.green(), self.blue(), self.alpha()).premultiply()
    }

    /// Reads a color back from a premultiplied pixel.
    pub fn from_pixel(pixel: PremultipliedColorU8) -> Self {
        let pixel = pixel.demultiply();
        Self::rgba(pixel.red(), pixel.green(), pixel.blue(), pixel.alpha())
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rgba = self.to_array();
        write!(f, "#{:02x}{:02x}{:02x}", rgba[0], rgba[1], rgba[2])?;
        if rgba[3] != u8::MAX {
            write!(f, "{:02x}", rgba[3])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn hex_strings() {
        let color = Color::rgba(255, 254, 1, 255);
        assert_eq!(color.to_string(), "#fffe01");

        let color = Color::rgba(0, 0, 0, 128);
        assert_eq!(color.to_string(), "#00000080");

        assert_eq!(Color::GOLD.to_string(), "#ffd700");
    }

    #[test]
    fn argb_packing() {
        assert_eq!(Color::INDIA_INK.to_argb(), 0xff23_2732);
        assert_eq!(Color::rgba(1, 2, 3, 4).to_argb(), 0x0401_0203);
    }

    #[test]
    fn opaque_pixels_survive_premultiplication() {
        for color in [Color::INDIA_INK, Color::GOLD, Color::ORANGE] {
            assert_eq!(Color::from_pixel(color.to_pixel()), color);
        }
    }
}
