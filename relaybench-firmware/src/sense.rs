//! Analog sense line
//!
//! ADC1 channel 6 (GPIO34), 11 dB attenuation, full 12-bit width. Sampled
//! once per tick and printed raw next to the input pattern.

use esp_idf_svc::hal::adc::attenuation::DB_11;
use esp_idf_svc::hal::adc::oneshot::config::AdcChannelConfig;
use esp_idf_svc::hal::adc::oneshot::{AdcChannelDriver, AdcDriver};
use esp_idf_svc::hal::adc::ADC1;
use esp_idf_svc::hal::gpio::Gpio34;
use esp_idf_svc::hal::peripheral::Peripheral;
use esp_idf_svc::sys::EspError;
use log::warn;
use relaybench_hal::{AdcError, AnalogInput};

/// Label used in the status line
pub const SENSE_LABEL: &str = "AI34";

/// One-shot ADC channel on the AI34 sense line
pub struct SenseInput<'d> {
    channel: AdcChannelDriver<'d, Gpio34, AdcDriver<'d, ADC1>>,
}

impl<'d> SenseInput<'d> {
    /// Configure ADC1 and its GPIO34 channel
    pub fn new(
        adc: impl Peripheral<P = ADC1> + 'd,
        pin: impl Peripheral<P = Gpio34> + 'd,
    ) -> Result<Self, EspError> {
        let adc = AdcDriver::new(adc)?;
        let config = AdcChannelConfig {
            attenuation: DB_11,
            ..Default::default()
        };
        let channel = AdcChannelDriver::new(adc, pin, &config)?;
        Ok(Self { channel })
    }
}

impl AnalogInput for SenseInput<'_> {
    fn read_raw(&mut self) -> Result<u16, AdcError> {
        self.channel.read().map_err(|e| {
            warn!("{}: conversion failed: {}", SENSE_LABEL, e);
            AdcError::ConversionError
        })
    }
}
