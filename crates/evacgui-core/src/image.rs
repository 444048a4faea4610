//! Off-screen image target the editor paints into.

use kurbo::Size;

/// ARGB pixel buffer with the border inset it is placed at inside the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageContainer {
    width: u32,
    height: u32,
    border: u32,
    pixels: Vec<u32>,
}

impl ImageContainer {
    /// Allocate a buffer for a panel of `panel_width` x `panel_height`;
    /// the image itself is inset by `border` on every side.
    pub fn new(panel_width: u32, panel_height: u32, border: u32) -> Self {
        let width = panel_width.saturating_sub(border * 2);
        let height = panel_height.saturating_sub(border * 2);
        Self {
            width,
            height,
            border,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn border(&self) -> u32 {
        self.border
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Size of the panel the image is placed in (image plus border).
    pub fn panel_size(&self) -> Size {
        Size::new(
            f64::from(self.width + self.border * 2),
            f64::from(self.height + self.border * 2),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_is_subtracted() {
        let image = ImageContainer::new(1024, 768, 30);
        assert_eq!(image.width(), 964);
        assert_eq!(image.height(), 708);
        assert_eq!(image.pixels().len(), 964 * 708);
        assert_eq!(image.panel_size(), Size::new(1024.0, 768.0));
    }

    #[test]
    fn test_oversized_border_saturates() {
        let image = ImageContainer::new(10, 10, 30);
        assert_eq!(image.width(), 0);
        assert!(image.pixels().is_empty());
        assert_eq!(image.panel_size(), Size::new(60.0, 60.0));
    }
}
