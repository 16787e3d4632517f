use embedded_hal::delay::DelayNs;
use log::{debug, trace};

use crate::command::{self, DisplayMode};
use crate::config::Config;
use crate::font::{Ascii5x8, Font};
use crate::framebuffer::Framebuffer;
use crate::interface::DisplayInterface;

/// A PCD8544 controller and the framebuffer mirrored to it.
///
/// Drawing only touches the in-memory framebuffer. Nothing reaches the panel until
/// [`display_update`](Self::display_update) sends the whole buffer.
pub struct Pcd8544<I, F = Ascii5x8> {
    interface: I,
    framebuffer: Framebuffer,
    font: F,
    config: Config,
}

impl<I: DisplayInterface> Pcd8544<I> {
    pub fn new(interface: I, config: Config) -> Self {
        Self::with_font(interface, config, Ascii5x8)
    }
}

impl<I: DisplayInterface, F: Font> Pcd8544<I, F> {
    pub fn with_font(interface: I, config: Config, font: F) -> Self {
        Self {
            interface,
            framebuffer: Framebuffer::new(),
            font,
            config,
        }
    }

    /// Resets the controller, programs the drive settings from [`Config`] and blanks
    /// the panel. Must run before the first [`display_update`](Self::display_update).
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), I::Error> {
        debug!(
            "pcd8544: init, contrast {:#04x}, bias {:?}, temperature {:?}",
            self.config.contrast, self.config.bias, self.config.temperature
        );
        self.interface.reset(delay)?;

        self.send_command(command::function_set(false, true))?;
        self.send_command(command::set_vop(self.config.contrast))?;
        if let Some(coefficient) = self.config.temperature {
            self.send_command(command::set_temperature(coefficient))?;
        }
        self.send_command(command::set_bias(self.config.bias))?;
        self.send_command(command::function_set(false, false))?;
        self.send_command(command::display_control(DisplayMode::Normal))?;

        self.framebuffer.clear();
        self.display_update()
    }

    /// Sends the whole framebuffer, page 0 column 0 first.
    pub fn display_update(&mut self) -> Result<(), I::Error> {
        trace!("pcd8544: update, {} bytes", self.framebuffer.as_bytes().len());
        self.send_command(command::set_y_address(0))?;
        self.send_command(command::set_x_address(0))?;
        self.interface.send_data(self.framebuffer.as_bytes())
    }

    pub fn send_command(&mut self, command: u8) -> Result<(), I::Error> {
        self.interface.send_command(command)
    }

    pub fn send_data(&mut self, data: &[u8]) -> Result<(), I::Error> {
        self.interface.send_data(data)
    }

    /// Changes the operating voltage. Leaves the controller in the basic instruction set.
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), I::Error> {
        self.config = self.config.contrast(contrast);
        debug!("pcd8544: contrast {:#04x}", self.config.contrast);
        self.send_command(command::function_set(false, true))?;
        self.send_command(command::set_vop(self.config.contrast))?;
        self.send_command(command::function_set(false, false))
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) -> Result<(), I::Error> {
        debug!("pcd8544: display mode {:?}", mode);
        self.send_command(command::display_control(mode))
    }

    /// Powers the controller down, or back up. DDRAM contents survive power down.
    pub fn set_power_down(&mut self, power_down: bool) -> Result<(), I::Error> {
        debug!("pcd8544: power down {}", power_down);
        self.send_command(command::function_set(power_down, false))
    }

    pub fn clear(&mut self) {
        self.framebuffer.clear();
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, value: bool) {
        self.framebuffer.set_pixel(x, y, value);
    }

    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.framebuffer.pixel(x, y)
    }

    pub fn draw_line(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, value: bool) {
        self.framebuffer.draw_line(x0, y0, x1, y1, value);
    }

    pub fn draw_rectangle(&mut self, x: usize, y: usize, w: usize, h: usize, value: bool, filled: bool) {
        self.framebuffer.draw_rectangle(x, y, w, h, value, filled);
    }

    pub fn clear_area(&mut self, x: usize, y: usize, w: usize, h: usize) {
        self.framebuffer.clear_area(x, y, w, h);
    }

    pub fn draw_char(&mut self, x: usize, y: usize, c: char, value: bool) {
        self.framebuffer.draw_char(&self.font, x, y, c, value);
    }

    pub fn draw_string(&mut self, x: usize, y: usize, text: &str, value: bool) {
        self.framebuffer.draw_string(&self.font, x, y, text, value);
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.framebuffer
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn release(self) -> I {
        self.interface
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::command::{Bias, TemperatureCoefficient};
    use crate::framebuffer::{BUFFER_SIZE, HEIGHT, WIDTH};
    use std::vec::Vec;

    #[derive(Clone, Debug, PartialEq)]
    pub(crate) enum Sent {
        Reset,
        Command(u8),
        Data(Vec<u8>),
    }

    #[derive(Default)]
    pub(crate) struct Recorder {
        pub(crate) sent: Vec<Sent>,
    }

    impl DisplayInterface for Recorder {
        type Error = core::convert::Infallible;

        fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
            self.sent.push(Sent::Command(command));
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            self.sent.push(Sent::Data(data.to_vec()));
            Ok(())
        }

        fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
            self.sent.push(Sent::Reset);
            Ok(())
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    struct Broken;

    impl DisplayInterface for Broken {
        type Error = &'static str;

        fn send_command(&mut self, _command: u8) -> Result<(), Self::Error> {
            Err("bus fault")
        }

        fn send_data(&mut self, _data: &[u8]) -> Result<(), Self::Error> {
            Err("bus fault")
        }

        fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn display() -> Pcd8544<Recorder> {
        Pcd8544::new(Recorder::default(), Config::default())
    }

    #[test]
    fn init_sequence_matches_the_datasheet_order() {
        let mut lcd = display();
        lcd.set_pixel(1, 1, true);
        lcd.init(&mut NoDelay).unwrap();
        let sent = lcd.release().sent;
        assert_eq!(
            &sent[..9],
            &[
                Sent::Reset,
                Sent::Command(0x21),
                Sent::Command(0xbf),
                Sent::Command(0x13),
                Sent::Command(0x20),
                Sent::Command(0x0c),
                Sent::Command(0x40),
                Sent::Command(0x80),
                Sent::Data(vec![0u8; BUFFER_SIZE]),
            ]
        );
        assert_eq!(sent.len(), 9);
    }

    #[test]
    fn init_sends_temperature_coefficient_in_extended_mode() {
        let config = Config::new()
            .contrast(0x38)
            .bias(Bias::OneTo40)
            .temperature_coefficient(TemperatureCoefficient::Tc3);
        let mut lcd = Pcd8544::new(Recorder::default(), config);
        lcd.init(&mut NoDelay).unwrap();
        let sent = lcd.release().sent;
        assert_eq!(
            &sent[1..6],
            &[
                Sent::Command(0x21),
                Sent::Command(0xb8),
                Sent::Command(0x07),
                Sent::Command(0x14),
                Sent::Command(0x20),
            ]
        );
    }

    #[test]
    fn update_sends_two_address_commands_then_the_buffer() {
        let mut lcd = display();
        lcd.draw_line(0, 0, 83, 0, true);
        lcd.set_pixel(83, 47, true);
        lcd.display_update().unwrap();

        let sent = lcd.release().sent;
        assert_eq!(sent.len(), 3);
        assert_eq!(sent[0], Sent::Command(0x40));
        assert_eq!(sent[1], Sent::Command(0x80));
        let Sent::Data(data) = &sent[2] else {
            panic!("expected data, got {:?}", sent[2]);
        };
        assert_eq!(data.len(), WIDTH * HEIGHT / 8);
        assert!(data[..WIDTH].iter().all(|&b| b == 0x01));
        assert!(data[WIDTH..BUFFER_SIZE - 1].iter().all(|&b| b == 0));
        assert_eq!(data[BUFFER_SIZE - 1], 0x80);
    }

    #[test]
    fn every_update_retransmits_the_full_buffer() {
        let mut lcd = display();
        lcd.display_update().unwrap();
        lcd.display_update().unwrap();
        let data: Vec<_> = lcd
            .release()
            .sent
            .into_iter()
            .filter_map(|s| match s {
                Sent::Data(d) => Some(d.len()),
                _ => None,
            })
            .collect();
        assert_eq!(data, [BUFFER_SIZE, BUFFER_SIZE]);
    }

    #[test]
    fn drawing_does_not_touch_the_bus() {
        let mut lcd = display();
        lcd.draw_string(0, 0, "Hello, RP2040!", true);
        lcd.draw_rectangle(5, 5, 20, 15, true, false);
        lcd.clear_area(0, 0, 10, 10);
        lcd.draw_char(30, 30, 'x', false);
        assert!(lcd.release().sent.is_empty());
    }

    #[test]
    fn drawing_forwards_to_the_framebuffer() {
        let mut lcd = display();
        lcd.draw_rectangle(30, 25, 30, 20, true, true);
        lcd.clear_area(35, 30, 20, 10);
        assert!(lcd.pixel(30, 25));
        assert!(!lcd.pixel(40, 35));
        lcd.draw_char(0, 0, 'A', true);
        assert_eq!(&lcd.framebuffer().page(0).unwrap()[..6], &[0x7e, 0x11, 0x11, 0x11, 0x7e, 0x00]);
        lcd.clear();
        assert!(lcd.framebuffer().as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn device_control_commands() {
        let mut lcd = display();
        lcd.set_contrast(0x90).unwrap();
        lcd.set_display_mode(DisplayMode::Inverse).unwrap();
        lcd.set_power_down(true).unwrap();
        lcd.set_power_down(false).unwrap();
        assert_eq!(lcd.config().contrast_level(), 0x7f);
        assert_eq!(
            lcd.release().sent,
            [
                Sent::Command(0x21),
                Sent::Command(0xff),
                Sent::Command(0x20),
                Sent::Command(0x0d),
                Sent::Command(0x24),
                Sent::Command(0x20),
            ]
        );
    }

    #[test]
    fn bus_errors_are_propagated() {
        let mut lcd = Pcd8544::new(Broken, Config::default());
        assert_eq!(lcd.init(&mut NoDelay), Err("bus fault"));
        assert_eq!(lcd.display_update(), Err("bus fault"));
        lcd.draw_string(0, 0, "still draws", true);
        // first column of 's' is 0x48
        assert!(lcd.pixel(0, 3));
        assert!(!lcd.pixel(0, 1));
    }
}
