//! Window-to-logical coordinate mapping
//!
//! The canvas draws into a fixed logical surface (800x600). When the window is
//! resized SDL2 scales that surface uniformly and centers it, leaving black
//! bars on the long axis. Mouse positions sampled from the event pump are in
//! window pixels, so they have to go through the same transform in reverse
//! before hit testing.

use sdl2::rect::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    logical_width: u32,
    logical_height: u32,
    window_width: u32,
    window_height: u32,
}

impl Viewport {
    /// Viewport for a window that currently matches the logical size
    pub fn new(logical_width: u32, logical_height: u32) -> Self {
        Viewport {
            logical_width,
            logical_height,
            window_width: logical_width,
            window_height: logical_height,
        }
    }

    pub fn resize(&mut self, window_width: u32, window_height: u32) {
        self.window_width = window_width;
        self.window_height = window_height;
    }

    /// Uniform scale applied to the logical surface
    pub fn scale(&self) -> f32 {
        let sx = self.window_width as f32 / self.logical_width as f32;
        let sy = self.window_height as f32 / self.logical_height as f32;
        sx.min(sy)
    }

    /// Top-left corner of the scaled surface inside the window, in whole pixels.
    ///
    /// Mirrors how SDL2 places the logical viewport: the constraining axis
    /// fills the window, the other is floored and centered with integer
    /// division. Any fractional bar width must round the same way or edge
    /// pixels drift off the islands they are drawn on.
    pub fn offset(&self) -> (i32, i32) {
        let scale = self.scale();
        let window_w = self.window_width as i32;
        let window_h = self.window_height as i32;

        if self.is_width_bound() {
            let surface_h = (self.logical_height as f32 * scale).floor() as i32;
            (0, (window_h - surface_h) / 2)
        } else {
            let surface_w = (self.logical_width as f32 * scale).floor() as i32;
            ((window_w - surface_w) / 2, 0)
        }
    }

    /// True when the window width limits the scale (bars above and below)
    fn is_width_bound(&self) -> bool {
        let sx = self.window_width as f32 / self.logical_width as f32;
        let sy = self.window_height as f32 / self.logical_height as f32;
        sx <= sy
    }

    /// Convert a window pixel to logical coordinates.
    ///
    /// Pixels in the letterbox bars land outside the logical surface (negative
    /// or past its size) and simply miss every region. Returns `None` while the
    /// window has no area, e.g. when minimized.
    pub fn to_logical(&self, window_x: i32, window_y: i32) -> Option<Point> {
        if self.window_width == 0 || self.window_height == 0 {
            return None;
        }
        if self.logical_width == 0 || self.logical_height == 0 {
            return None;
        }

        let scale = self.scale();
        let (offset_x, offset_y) = self.offset();
        let x = (window_x - offset_x) as f32 / scale;
        let y = (window_y - offset_y) as f32 / scale;

        Some(Point::new(x.floor() as i32, y.floor() as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_at_logical_size() {
        let viewport = Viewport::new(800, 600);
        assert_eq!(viewport.scale(), 1.0);
        assert_eq!(viewport.to_logical(100, 100), Some(Point::new(100, 100)));
        assert_eq!(viewport.to_logical(0, 0), Some(Point::new(0, 0)));
        assert_eq!(viewport.to_logical(799, 599), Some(Point::new(799, 599)));
    }

    #[test]
    fn test_uniform_double_scale() {
        let mut viewport = Viewport::new(800, 600);
        viewport.resize(1600, 1200);

        assert_eq!(viewport.scale(), 2.0);
        assert_eq!(viewport.offset(), (0, 0));
        assert_eq!(viewport.to_logical(200, 200), Some(Point::new(100, 100)));
        // Odd pixels round down into the same logical pixel
        assert_eq!(viewport.to_logical(201, 201), Some(Point::new(100, 100)));
    }

    #[test]
    fn test_pillarbox_on_wide_window() {
        let mut viewport = Viewport::new(800, 600);
        viewport.resize(1200, 600);

        // Height limits the scale, 200px bars on each side
        assert_eq!(viewport.scale(), 1.0);
        assert_eq!(viewport.offset(), (200, 0));
        assert_eq!(viewport.to_logical(300, 100), Some(Point::new(100, 100)));

        // Inside the left bar
        let bar = viewport.to_logical(50, 100).unwrap();
        assert!(bar.x() < 0);
    }

    #[test]
    fn test_letterbox_on_tall_window() {
        let mut viewport = Viewport::new(800, 600);
        viewport.resize(400, 600);

        // Width limits the scale to 0.5, surface is 400x300 centered vertically
        assert_eq!(viewport.scale(), 0.5);
        assert_eq!(viewport.offset(), (0, 150));
        assert_eq!(viewport.to_logical(50, 200), Some(Point::new(100, 100)));

        // Below the surface
        let bar = viewport.to_logical(50, 590).unwrap();
        assert!(bar.y() >= 600);
    }

    #[test]
    fn test_odd_bar_width_rounds_like_sdl() {
        let mut viewport = Viewport::new(800, 600);

        // One spare column: SDL2 keeps the surface at x = 0
        viewport.resize(801, 600);
        assert_eq!(viewport.offset(), (0, 0));
        assert_eq!(viewport.to_logical(30, 100), Some(Point::new(30, 100)));

        // 401 spare columns: 200 on the left, 201 on the right
        viewport.resize(1201, 600);
        assert_eq!(viewport.offset(), (200, 0));
        assert_eq!(viewport.to_logical(230, 100), Some(Point::new(30, 100)));
        assert_eq!(viewport.to_logical(229, 100), Some(Point::new(-1, 100)));
    }

    #[test]
    fn test_odd_bar_height_rounds_like_sdl() {
        let mut viewport = Viewport::new(800, 600);
        viewport.resize(800, 601);

        assert_eq!(viewport.offset(), (0, 0));
        assert_eq!(viewport.to_logical(100, 25), Some(Point::new(100, 25)));
    }

    #[test]
    fn test_zero_sized_window() {
        let mut viewport = Viewport::new(800, 600);
        viewport.resize(0, 0);
        assert_eq!(viewport.to_logical(10, 10), None);
    }
}
