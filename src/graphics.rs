//! `embedded-graphics` support, behind the `graphics` feature.
//!
//! Pixels go through the same clipped [`Framebuffer::set_pixel`](crate::Framebuffer::set_pixel)
//! path as the native drawing calls, so the two can be mixed freely before a
//! [`display_update`](crate::Pcd8544::display_update).

use core::convert::Infallible;

use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{OriginDimensions, Size};
use embedded_graphics_core::pixelcolor::BinaryColor;
use embedded_graphics_core::Pixel;

use crate::display::Pcd8544;
use crate::font::Font;
use crate::framebuffer::{HEIGHT, WIDTH};
use crate::interface::DisplayInterface;

impl<I: DisplayInterface, F: Font> DrawTarget for Pcd8544<I, F> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<P>(&mut self, pixels: P) -> Result<(), Self::Error>
    where
        P: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) {
                self.set_pixel(x, y, color.is_on());
            }
        }
        Ok(())
    }
}

impl<I: DisplayInterface, F: Font> OriginDimensions for Pcd8544<I, F> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}
