//! Driver for the PCD8544 84x48 monochrome LCD controller (Nokia 5110 modules) on
//! [embedded-hal v1](https://github.com/rust-embedded/embedded-hal).
//!
//! All drawing happens in an in-memory framebuffer laid out like the controller's
//! DDRAM. [`Pcd8544::display_update`] sends the whole buffer in one go.
//!
//! ```rust,ignore
//! let interface = SpiInterface::new(spi, dc, ce, rst);
//! let mut lcd = Pcd8544::new(interface, Config::default());
//! lcd.init(&mut delay)?;
//! lcd.draw_string(0, 0, "Hello, RP2040!", true);
//! lcd.draw_rectangle(5, 10, 20, 15, true, false);
//! lcd.display_update()?;
//! ```
#![no_std]

pub mod command;
pub mod config;
mod display;
mod draw;
pub mod font;
pub mod framebuffer;
pub mod interface;
pub mod text;

#[cfg(feature = "graphics")]
pub mod graphics;

pub use command::{Bias, DisplayMode, TemperatureCoefficient};
pub use config::Config;
pub use display::Pcd8544;
pub use font::{Ascii5x8, Font};
pub use framebuffer::{Framebuffer, BUFFER_SIZE, HEIGHT, WIDTH};
pub use interface::{DisplayInterface, InterfaceError, SpiInterface};

// =======================
// For unit tests only!
#[cfg(test)]
#[macro_use]
extern crate std;
// =======================
