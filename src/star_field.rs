use tiny_skia::{Pixmap, PremultipliedColorU8};

use crate::{Color, Error};

/// A deterministic stream of canvas coordinates.
///
/// Coordinates are drawn independently and uniformly,
/// x before y, so the same seed always produces the same
/// sequence regardless of how it is consumed.
pub struct Scatter {
    rng: fastrand::Rng,
    width: u32,
    height: u32,
}

impl Scatter {
    pub fn new(seed: u64, width: u32, height: u32) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
            width,
            height,
        }
    }
}

impl Iterator for Scatter {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        let x = self.rng.u32(0..self.width);
        let y = self.rng.u32(0..self.height);
        Some((x, y))
    }
}

/// A bitmap that accumulates randomly placed stars.
///
/// Painted pixels stay painted until [`clear`](StarField::clear).
pub struct StarField {
    pixmap: Pixmap,
    scatter: Scatter,
    background: PremultipliedColorU8,
    star: PremultipliedColorU8,
    painted: u64,
}

impl StarField {
    /// Creates a field of the given size filled with `background`.
    pub fn new(
        width: u32,
        height: u32,
        seed: u64,
        background: Color,
        star: Color,
    ) -> Result<Self, Error> {
        let pixmap = Pixmap::new(width, height).ok_or(Error::EmptyCanvas { width, height })?;
        let mut field = Self {
            pixmap,
            scatter: Scatter::new(seed, width, height),
            background: background.to_pixel(),
            star: star.to_pixel(),
            painted: 0,
        };
        field.clear();
        Ok(field)
    }

    /// Resets every pixel to the background color.
    ///
    /// The coordinate stream is not rewound.
    pub fn clear(&mut self) {
        self.pixmap.pixels_mut().fill(self.background);
        self.painted = 0;
    }

    /// Paints `count` stars at the next coordinates of the stream.
    ///
    /// A coordinate may repeat; repainting a star is harmless.
    pub fn add_points(&mut self, count: u32) {
        let width = self.pixmap.width() as usize;
        let star = self.star;
        let pixels = self.pixmap.pixels_mut();
        for (x, y) in self.scatter.by_ref().take(count as usize) {
            pixels[y as usize * width + x as usize] = star;
        }
        self.painted += u64::from(count);
    }

    /// Number of paint operations issued since the last clear.
    pub fn paint_count(&self) -> u64 {
        self.painted
    }

    /// Gets the color at a pixel, or `None` if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixmap.pixel(x, y).map(Color::from_pixel)
    }

    /// Whether the pixel at `(x, y)` holds a star.
    pub fn is_star(&self, x: u32, y: u32) -> bool {
        self.pixmap.pixel(x, y) == Some(self.star)
    }

    /// Number of distinct pixels currently showing a star.
    pub fn star_pixels(&self) -> usize {
        self.pixmap
            .pixels()
            .iter()
            .filter(|&&pixel| pixel == self.star)
            .count()
    }

    /// Whether every pixel shows the background.
    pub fn is_clear(&self) -> bool {
        self.pixmap
            .pixels()
            .iter()
            .all(|&pixel| pixel == self.background)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// The underlying bitmap.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(seed: u64) -> StarField {
        StarField::new(64, 48, seed, Color::INDIA_INK, Color::GOLD).unwrap()
    }

    #[test]
    fn starts_clear() {
        let field = field(42);
        assert!(field.is_clear());
        assert_eq!(field.paint_count(), 0);
        assert_eq!(field.pixel(0, 0), Some(Color::INDIA_INK));
        assert_eq!(field.pixel(64, 0), None);
    }

    #[test]
    fn zero_points_is_a_no_op() {
        let mut field = field(42);
        field.add_points(0);
        assert!(field.is_clear());
        assert_eq!(field.paint_count(), 0);
    }

    #[test]
    fn paints_the_scattered_coordinates() {
        let mut field = field(7);
        field.add_points(25);

        for (x, y) in Scatter::new(7, 64, 48).take(25) {
            assert!(field.is_star(x, y), "({}, {}) should be a star", x, y);
        }
        assert_eq!(field.paint_count(), 25);
        assert!(field.star_pixels() <= 25);
        assert!(field.star_pixels() > 0);
    }

    #[test]
    fn scatter_is_split_invariant() {
        let whole: Vec<_> = Scatter::new(42, 400, 400).take(300).collect();

        let mut split = Scatter::new(42, 400, 400);
        let mut pieces: Vec<_> = split.by_ref().take(120).collect();
        pieces.extend(split.take(180));

        assert_eq!(whole, pieces);
        assert!(whole.iter().all(|&(x, y)| x < 400 && y < 400));
    }

    #[test]
    fn batched_and_single_paints_agree() {
        let mut batched = field(3);
        batched.add_points(40);
        batched.add_points(60);

        let mut single = field(3);
        single.add_points(100);

        assert_eq!(batched.pixmap().data(), single.pixmap().data());
        assert_eq!(batched.paint_count(), single.paint_count());
    }

    #[test]
    fn clear_erases_stars_but_keeps_the_stream_going() {
        let mut field = field(42);
        field.add_points(50);
        field.clear();
        assert!(field.is_clear());
        assert_eq!(field.paint_count(), 0);

        let mut fresh = self::field(42);
        field.add_points(50);
        fresh.add_points(50);
        assert_ne!(field.pixmap().data(), fresh.pixmap().data());
    }

    #[test]
    fn empty_canvas_is_rejected() {
        assert!(matches!(
            StarField::new(0, 10, 1, Color::BLACK, Color::WHITE),
            Err(Error::EmptyCanvas { width: 0, height: 10 })
        ));
    }
}
