use starfill::{Color, Settings, StarField, VerticalBar};
use tiny_skia::{Paint, Pixmap, PixmapPaint, Rect, Transform};

use crate::Error;

/// The window contents: the star canvas on the left,
/// the progress bar on the right.
pub struct Frame {
    pixmap: Pixmap,
    canvas_size: u32,
    bar_width: u32,
    background: Color,
    track: Color,
}

impl Frame {
    pub fn new(settings: &Settings) -> Result<Self, Error> {
        settings.validate()?;
        let (width, height) = settings.frame_size();
        if u16::try_from(width).is_err() || u16::try_from(height).is_err() {
            return Err(Error::FrameTooLarge { width, height });
        }
        let pixmap = Pixmap::new(width, height).ok_or(starfill::Error::EmptyCanvas {
            width,
            height,
        })?;

        Ok(Self {
            pixmap,
            canvas_size: settings.canvas_size,
            bar_width: settings.bar_width,
            background: settings.background,
            track: settings.track_color,
        })
    }

    /// Redraws the frame from the current star field and bar.
    pub fn compose(&mut self, stars: &StarField, bar: &VerticalBar) {
        self.pixmap.fill(self.background.to_skia());
        self.pixmap.draw_pixmap(
            0,
            0,
            stars.pixmap().as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );

        // The bar fills upwards from the bottom edge.
        let height = self.pixmap.height();
        let left = self.canvas_size;
        self.fill_rect(left, 0, self.bar_width, height, self.track);
        let filled = bar.fill_height(height);
        self.fill_rect(left, height - filled, self.bar_width, filled, bar.tier().color());
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color) {
        // Degenerate rectangles (an empty fill) have nothing to draw.
        let rect = match Rect::from_xywh(x as f32, y as f32, width as f32, height as f32) {
            Some(rect) => rect,
            None => return,
        };
        let mut paint = Paint::default();
        paint.set_color(color.to_skia());
        paint.anti_alias = false;
        self.pixmap
            .fill_rect(rect, &paint, Transform::identity(), None);
    }

    /// Gets the color at a pixel, or `None` if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixmap.pixel(x, y).map(Color::from_pixel)
    }

    /// Packs the frame as `0xAARRGGBB` pixels, row by row.
    pub fn to_argb(&self) -> Vec<u32> {
        self.pixmap
            .pixels()
            .iter()
            .map(|&pixel| Color::from_pixel(pixel).to_argb())
            .collect()
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }
}
