//! Page-organized 1bpp framebuffer matching the PCD8544 DDRAM layout.
//!
//! The display memory is split into `HEIGHT / 8` horizontal pages of `WIDTH` bytes.
//! Bit `b` of a page byte is the pixel on row `page * 8 + b`, so bit 0 is the top
//! row of its page.

pub const WIDTH: usize = 84;
pub const HEIGHT: usize = 48;
pub const PAGES: usize = HEIGHT / 8;
pub const BUFFER_SIZE: usize = WIDTH * HEIGHT / 8;

const _: () = assert!(HEIGHT % 8 == 0);

pub struct Framebuffer {
    data: [u8; BUFFER_SIZE],
}

impl Framebuffer {
    pub const fn new() -> Self {
        Self {
            data: [0u8; BUFFER_SIZE]
        }
    }

    /// Sets or clears a single pixel. Coordinates outside the display are ignored.
    pub fn set_pixel(&mut self, x: usize, y: usize, value: bool) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let index = x + (y / 8) * WIDTH;
        let bit = 1u8 << (y % 8);
        if value {
            self.data[index] |= bit;
        } else {
            self.data[index] &= !bit;
        }
    }

    /// Reads a single pixel. Coordinates outside the display read as off.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        self.data[x + (y / 8) * WIDTH] & (1u8 << (y % 8)) != 0
    }

    pub fn clear(&mut self) {
        self.data.fill(0u8);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The `WIDTH` bytes of one 8-row page, or `None` past the last page.
    pub fn page(&self, page: usize) -> Option<&[u8]> {
        if page >= PAGES {
            return None;
        }
        Some(&self.data[(page * WIDTH)..((page + 1) * WIDTH)])
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}
