//! Software-PWM output adapter.
//!
//! Drives an arbitrary BCM GPIO pin with software PWM — the aeration
//! pump sits behind a MOSFET on a plain GPIO, not one of the two
//! hardware PWM channels.
//!
//! ## Dual-target design
//!
//! With the `raspi` feature: real GPIO via `rppal`.
//! On host/test builds: tracks duty in-memory only.
//!
//! The output is held at 0 % duty from open until the first duty write,
//! and cleared again on release or drop.

use log::info;
#[cfg(feature = "raspi")]
use log::warn;

#[cfg(feature = "raspi")]
use rppal::gpio::{Gpio, OutputPin};

use crate::app::ports::PwmChannel;
use crate::config::BubblerConfig;
use crate::error::PwmError;

#[derive(Debug)]
pub struct SoftPwm {
    pin: u8,
    frequency_hz: f64,
    duty_percent: f64,
    #[cfg(feature = "raspi")]
    output: OutputPin,
}

impl SoftPwm {
    /// Open a software-PWM output on `pin` at `frequency_hz`, started
    /// at 0 % duty. Failure is immediate and fatal — there is no retry.
    pub fn open(pin: u8, frequency_hz: f64) -> Result<Self, PwmError> {
        if !frequency_hz.is_finite() || frequency_hz <= 0.0 {
            return Err(PwmError::OpenFailed);
        }

        #[cfg(feature = "raspi")]
        let output = {
            let gpio = Gpio::new().map_err(|e| {
                warn!("GPIO init failed: {e}");
                PwmError::OpenFailed
            })?;
            let mut output = gpio
                .get(pin)
                .map_err(|e| {
                    warn!("GPIO pin {pin} unavailable: {e}");
                    PwmError::OpenFailed
                })?
                .into_output_low();
            output.set_pwm_frequency(frequency_hz, 0.0).map_err(|e| {
                warn!("PWM start on pin {pin} failed: {e}");
                PwmError::OpenFailed
            })?;
            output
        };

        info!("PWM output open on BCM {pin} at {frequency_hz} Hz");
        Ok(Self {
            pin,
            frequency_hz,
            duty_percent: 0.0,
            #[cfg(feature = "raspi")]
            output,
        })
    }

    /// Resolve the `air_bubbler` channel from the pin map and open it.
    pub fn open_from_config(config: &BubblerConfig) -> crate::error::Result<Self> {
        let pin = config.pins.resolve(crate::PWM_CHANNEL)?;
        Ok(Self::open(pin, config.frequency_hz)?)
    }

    /// BCM pin this output drives.
    pub fn pin(&self) -> u8 {
        self.pin
    }

    /// Carrier frequency, fixed at open time.
    pub fn frequency_hz(&self) -> f64 {
        self.frequency_hz
    }

    /// Last duty cycle written, in percent.
    pub fn current_duty_percent(&self) -> f64 {
        self.duty_percent
    }
}

impl PwmChannel for SoftPwm {
    fn set_duty_percent(&mut self, percent: f64) -> Result<(), PwmError> {
        let percent = if percent.is_finite() {
            percent.clamp(0.0, 100.0)
        } else {
            0.0
        };

        #[cfg(feature = "raspi")]
        self.output
            .set_pwm_frequency(self.frequency_hz, percent / 100.0)
            .map_err(|e| {
                warn!("duty write on pin {} failed: {e}", self.pin);
                PwmError::WriteFailed
            })?;

        self.duty_percent = percent;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), PwmError> {
        self.set_duty_percent(0.0)
    }

    fn release(self) {
        info!("PWM output on BCM {} released", self.pin);
        // Drop clears the output.
    }
}

#[cfg(feature = "raspi")]
impl Drop for SoftPwm {
    fn drop(&mut self) {
        if let Err(e) = self.output.clear_pwm() {
            warn!("PWM clear on pin {} failed: {e}", self.pin);
        }
        self.output.set_low();
    }
}
