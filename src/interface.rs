//! Byte transport between the driver and the controller.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

const RESET_PULSE_MS: u32 = 100;

/// Command/data transport used by [`Pcd8544`](crate::Pcd8544).
///
/// Implementations own chip-select framing: every call is one complete, blocking
/// transfer.
pub trait DisplayInterface {
    type Error;

    /// Sends one instruction byte with D/C low.
    fn send_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Sends display data with D/C high.
    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Pulses the RST line.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterfaceError<SpiE, PinE> {
    Spi(SpiE),
    Pin(PinE),
}

/// Four-wire interface: an SPI bus plus D/C, CE (active low) and RST GPIOs.
pub struct SpiInterface<SPI, DC, CE, RST> {
    spi: SPI,
    dc: DC,
    ce: CE,
    rst: RST,
}

impl<SPI, DC, CE, RST, PinE> SpiInterface<SPI, DC, CE, RST>
where
    SPI: SpiBus<u8>,
    DC: OutputPin<Error = PinE>,
    CE: OutputPin<Error = PinE>,
    RST: OutputPin<Error = PinE>,
{
    pub fn new(spi: SPI, dc: DC, ce: CE, rst: RST) -> Self {
        Self { spi, dc, ce, rst }
    }

    pub fn release(self) -> (SPI, DC, CE, RST) {
        (self.spi, self.dc, self.ce, self.rst)
    }

    fn transfer(&mut self, data_mode: bool, bytes: &[u8]) -> Result<(), InterfaceError<SPI::Error, PinE>> {
        if data_mode {
            self.dc.set_high().map_err(InterfaceError::Pin)?;
        } else {
            self.dc.set_low().map_err(InterfaceError::Pin)?;
        }
        self.ce.set_low().map_err(InterfaceError::Pin)?;
        let written = self.spi.write(bytes).and_then(|()| self.spi.flush());
        self.ce.set_high().map_err(InterfaceError::Pin)?;
        written.map_err(InterfaceError::Spi)
    }
}

impl<SPI, DC, CE, RST, PinE> DisplayInterface for SpiInterface<SPI, DC, CE, RST>
where
    SPI: SpiBus<u8>,
    DC: OutputPin<Error = PinE>,
    CE: OutputPin<Error = PinE>,
    RST: OutputPin<Error = PinE>,
{
    type Error = InterfaceError<SPI::Error, PinE>;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.transfer(false, &[command])
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.transfer(true, data)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        self.ce.set_high().map_err(InterfaceError::Pin)?;
        self.rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_PULSE_MS);
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_PULSE_MS);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use embedded_hal::digital::{self, ErrorType as PinErrorType};
    use embedded_hal::spi::{self, ErrorType as SpiErrorType};
    use std::rc::Rc;
    use std::vec::Vec;

    #[derive(Clone, Debug, PartialEq)]
    enum Event {
        Dc(bool),
        Ce(bool),
        Rst(bool),
        Write(Vec<u8>),
        Flush,
        DelayMs(u32),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    struct MockSpi {
        log: Log,
        fail: bool,
    }

    impl SpiErrorType for MockSpi {
        type Error = spi::ErrorKind;
    }

    impl SpiBus<u8> for MockSpi {
        fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
            if self.fail {
                return Err(spi::ErrorKind::Overrun);
            }
            self.log.borrow_mut().push(Event::Write(words.to_vec()));
            Ok(())
        }

        fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Event::Flush);
            Ok(())
        }
    }

    struct MockPin {
        log: Log,
        event: fn(bool) -> Event,
    }

    impl PinErrorType for MockPin {
        type Error = digital::ErrorKind;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push((self.event)(false));
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push((self.event)(true));
            Ok(())
        }
    }

    struct MockDelay {
        log: Log,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}

        fn delay_ms(&mut self, ms: u32) {
            self.log.borrow_mut().push(Event::DelayMs(ms));
        }
    }

    fn interface(log: &Log, fail: bool) -> SpiInterface<MockSpi, MockPin, MockPin, MockPin> {
        SpiInterface::new(
            MockSpi { log: log.clone(), fail },
            MockPin { log: log.clone(), event: Event::Dc },
            MockPin { log: log.clone(), event: Event::Ce },
            MockPin { log: log.clone(), event: Event::Rst },
        )
    }

    #[test]
    fn command_is_framed_with_dc_low() {
        let log = Log::default();
        interface(&log, false).send_command(0x21).unwrap();
        assert_eq!(
            *log.borrow(),
            [Event::Dc(false), Event::Ce(false), Event::Write(vec![0x21]), Event::Flush, Event::Ce(true)]
        );
    }

    #[test]
    fn data_is_sent_as_one_burst_with_dc_high() {
        let log = Log::default();
        interface(&log, false).send_data(&[1, 2, 3]).unwrap();
        assert_eq!(
            *log.borrow(),
            [Event::Dc(true), Event::Ce(false), Event::Write(vec![1, 2, 3]), Event::Flush, Event::Ce(true)]
        );
    }

    #[test]
    fn reset_pulses_rst_for_100ms() {
        let log = Log::default();
        let mut delay = MockDelay { log: log.clone() };
        interface(&log, false).reset(&mut delay).unwrap();
        assert_eq!(
            *log.borrow(),
            [Event::Ce(true), Event::Rst(false), Event::DelayMs(100), Event::Rst(true), Event::DelayMs(100)]
        );
    }

    #[test]
    fn spi_failure_is_reported_and_chip_is_deselected() {
        let log = Log::default();
        let result = interface(&log, true).send_command(0x0c);
        assert_eq!(result, Err(InterfaceError::Spi(spi::ErrorKind::Overrun)));
        assert_eq!(log.borrow().last(), Some(&Event::Ce(true)));
    }
}
