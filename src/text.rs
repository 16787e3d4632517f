//! Glyph compositing and left-aligned, wrapping text.

use crate::font::{Font, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::framebuffer::{Framebuffer, HEIGHT, WIDTH};

/// Horizontal advance of one character: the glyph plus a blank spacer column.
pub const CHAR_WIDTH: usize = GLYPH_WIDTH + 1;
pub const LINE_HEIGHT: usize = GLYPH_HEIGHT;

impl Framebuffer {
    /// Draws one character cell with its top-left corner at `(x, y)`.
    ///
    /// The whole 6x8 cell is written: glyph bits take `value`, the rest of the cell
    /// (including the spacer column) takes `!value`. A cell that would not fit entirely
    /// on the display is dropped, as is a character the font has no glyph for.
    pub fn draw_char<F: Font + ?Sized>(&mut self, font: &F, x: usize, y: usize, c: char, value: bool) {
        if x > WIDTH - CHAR_WIDTH || y > HEIGHT - LINE_HEIGHT {
            return;
        }
        let Some(glyph) = font.glyph(c as u32) else {
            return;
        };

        for (i, column) in glyph.iter().enumerate() {
            for j in 0..GLYPH_HEIGHT {
                let on = (column >> j) & 0x01 != 0;
                self.set_pixel(x + i, y + j, if on { value } else { !value });
            }
        }
        for j in 0..GLYPH_HEIGHT {
            self.set_pixel(x + GLYPH_WIDTH, y + j, !value);
        }
    }

    /// Draws `text` starting at `(x, y)`, wrapping back to column `x` one text line
    /// lower when the next cell would run past the right edge. Characters that would
    /// land below the bottom edge are dropped.
    pub fn draw_string<F: Font + ?Sized>(&mut self, font: &F, x: usize, y: usize, text: &str, value: bool) {
        let mut cursor = x;
        let mut y = y;
        for c in text.chars() {
            self.draw_char(font, cursor, y, c, value);
            cursor = cursor.saturating_add(CHAR_WIDTH);
            if cursor.saturating_add(CHAR_WIDTH) > WIDTH {
                cursor = x;
                y = y.saturating_add(LINE_HEIGHT);
                if y.saturating_add(LINE_HEIGHT) > HEIGHT {
                    break;
                }
            }
        }
    }
}
