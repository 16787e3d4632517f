use crate::command::{Bias, TemperatureCoefficient, MAX_CONTRAST};

/// Analog drive settings applied by [`Pcd8544::init`](crate::Pcd8544::init).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub(crate) contrast: u8,
    pub(crate) bias: Bias,
    pub(crate) temperature: Option<TemperatureCoefficient>,
}

impl Config {
    /// Contrast 0x3F, bias 1:48, no temperature coefficient command.
    pub const fn new() -> Self {
        Self {
            contrast: 0x3f,
            bias: Bias::OneTo48,
            temperature: None,
        }
    }

    /// Operating voltage (Vop) level. Values above 0x7F are clamped.
    pub const fn contrast(mut self, contrast: u8) -> Self {
        self.contrast = if contrast > MAX_CONTRAST { MAX_CONTRAST } else { contrast };
        self
    }

    pub const fn bias(mut self, bias: Bias) -> Self {
        self.bias = bias;
        self
    }

    pub const fn temperature_coefficient(mut self, coefficient: TemperatureCoefficient) -> Self {
        self.temperature = Some(coefficient);
        self
    }

    pub fn contrast_level(&self) -> u8 {
        self.contrast
    }

    pub fn bias_mode(&self) -> Bias {
        self.bias
    }

    pub fn temperature_coefficient_setting(&self) -> Option<TemperatureCoefficient> {
        self.temperature
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
