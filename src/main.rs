#![no_std]
#![no_main]

use cortex_m::asm::wfi;
use embedded_hal::delay::DelayNs;
use fugit::RateExtU32;
use panic_halt as _;

use pcd8544_rp2040::{Config, DisplayInterface, Pcd8544, SpiInterface};
use waveshare_rp2040_zero::{hal::{self as hal, gpio::{FunctionSpi, PinState}, spi::FrameFormat, Clock, Spi, Timer}, XOSC_CRYSTAL_FREQ};
use hal::pac;

const SPI_BAUD_HZ: u32 = 4_000_000;

#[hal::entry]
fn main() -> ! {
    let mut pac = pac::Peripherals::take().unwrap();
    let mut watchdog = hal::Watchdog::new(pac.WATCHDOG);
    let sio = hal::Sio::new(pac.SIO);

    let clocks = hal::clocks::init_clocks_and_plls(
        XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .unwrap();

    let pins = hal::gpio::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let ck_pin = pins.gpio2.into_function::<FunctionSpi>();
    let tx_pin = pins.gpio3.into_function::<FunctionSpi>();
    let dc_pin = pins.gpio4.into_push_pull_output_in_state(PinState::Low);
    let ce_pin = pins.gpio5.into_push_pull_output_in_state(PinState::High);
    let rst_pin = pins.gpio6.into_push_pull_output_in_state(PinState::High);

    let spi = Spi::<_, _, _, 8>::new(pac.SPI0, (tx_pin, ck_pin))
        .init(&mut pac.RESETS, clocks.peripheral_clock.freq(), SPI_BAUD_HZ.Hz(), FrameFormat::MotorolaSpi(embedded_hal::spi::MODE_0));

    let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    let mut lcd = Pcd8544::new(SpiInterface::new(spi, dc_pin, ce_pin, rst_pin), Config::default());
    if lcd.init(&mut timer).is_ok() {
        _ = demo(&mut lcd, &mut timer);
    }

    loop {
        wfi();
    }
}

fn demo<I: DisplayInterface>(lcd: &mut Pcd8544<I>, timer: &mut Timer) -> Result<(), I::Error> {
    lcd.clear();
    lcd.draw_string(0, 0, "Hello, RP2040!", true);
    lcd.draw_string(0, 8, "PCD8544 Driver", true);
    lcd.display_update()?;
    timer.delay_ms(2000);

    lcd.clear();
    lcd.set_pixel(10, 10, true);
    lcd.set_pixel(11, 10, true);
    lcd.set_pixel(10, 11, true);
    lcd.set_pixel(11, 11, true);
    lcd.display_update()?;
    timer.delay_ms(1000);

    lcd.draw_line(0, 20, 83, 40, true);
    lcd.display_update()?;
    timer.delay_ms(2000);

    lcd.draw_rectangle(5, 5, 20, 15, true, false);
    lcd.draw_rectangle(30, 25, 30, 20, true, true);
    lcd.display_update()?;
    timer.delay_ms(2000);

    // punch a hole in the filled rectangle
    lcd.clear_area(35, 30, 20, 10);
    lcd.display_update()?;
    timer.delay_ms(2000);

    lcd.clear();
    lcd.draw_string(0, 0, "ASCII Test:", true);
    lcd.draw_string(0, 8, "!\"#$%&'()*+,-./", true);
    lcd.draw_string(0, 16, "0123456789:;<=>?", true);
    lcd.draw_string(0, 24, "@ABCDEFGHIJKLMNO", true);
    lcd.draw_string(0, 32, "PQRSTUVWXYZ[\\]^_", true);
    lcd.draw_string(0, 40, "`abcdefghijklmno", true);
    lcd.display_update()
}
