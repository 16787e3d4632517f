//! PCD8544 instruction encodings.
//!
//! Instructions are single bytes sent with D/C low. `SET_VOP`, `SET_BIAS` and
//! `SET_TEMPERATURE` are only decoded in the extended instruction set (H = 1);
//! `DISPLAY_CONTROL` and the address commands only in the basic set (H = 0).
//! `SET_VOP` and `SET_X_ADDRESS` share the same bit pattern for that reason.

pub const FUNCTION_SET: u8 = 0x20;
pub const POWER_DOWN: u8 = 0x04;
pub const EXTENDED_INSTRUCTIONS: u8 = 0x01;

pub const DISPLAY_CONTROL: u8 = 0x08;
pub const SET_Y_ADDRESS: u8 = 0x40;
pub const SET_X_ADDRESS: u8 = 0x80;

pub const SET_TEMPERATURE: u8 = 0x04;
pub const SET_BIAS: u8 = 0x10;
pub const SET_VOP: u8 = 0x80;

pub const MAX_CONTRAST: u8 = 0x7f;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum DisplayMode {
    Blank = 0x00,
    Normal = 0x04,
    AllSegmentsOn = 0x01,
    Inverse = 0x05,
}

/// Bias system ratio, `BS2..BS0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Bias {
    OneTo100 = 0,
    OneTo80 = 1,
    OneTo65 = 2,
    OneTo48 = 3,
    OneTo40 = 4,
    OneTo24 = 5,
    OneTo18 = 6,
    OneTo10 = 7,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum TemperatureCoefficient {
    Tc0 = 0,
    Tc1 = 1,
    Tc2 = 2,
    Tc3 = 3,
}

pub const fn function_set(power_down: bool, extended: bool) -> u8 {
    let mut byte = FUNCTION_SET;
    if power_down {
        byte |= POWER_DOWN;
    }
    if extended {
        byte |= EXTENDED_INSTRUCTIONS;
    }
    byte
}

pub const fn display_control(mode: DisplayMode) -> u8 {
    DISPLAY_CONTROL | mode as u8
}

pub const fn set_vop(level: u8) -> u8 {
    SET_VOP | (level & MAX_CONTRAST)
}

pub const fn set_bias(bias: Bias) -> u8 {
    SET_BIAS | bias as u8
}

pub const fn set_temperature(coefficient: TemperatureCoefficient) -> u8 {
    SET_TEMPERATURE | coefficient as u8
}

/// Page (row bank) address, `0..6`.
pub const fn set_y_address(page: u8) -> u8 {
    SET_Y_ADDRESS | (page & 0x07)
}

/// Column address, `0..84`.
pub const fn set_x_address(column: u8) -> u8 {
    SET_X_ADDRESS | (column & 0x7f)
}
