//! Blocking SPI as a byte transport
//!
//! The MAX6920 only listens, so MISO is unused; the transfer is still
//! full duplex to match the transport contract.

use embassy_rp::spi::{self, Blocking, Spi};
use filament_hal::spi::{Mode, Phase, Polarity, SpiConfig};
use filament_hal::ByteTransport;

/// Convert the shared link configuration into an embassy-rp one
pub fn to_rp_config(config: &SpiConfig) -> spi::Config {
    let (polarity, phase) = <(Polarity, Phase)>::from(config.mode);
    let mut rp = spi::Config::default();
    rp.frequency = config.frequency;
    rp.polarity = match polarity {
        Polarity::IdleLow => spi::Polarity::IdleLow,
        Polarity::IdleHigh => spi::Polarity::IdleHigh,
    };
    rp.phase = match phase {
        Phase::CaptureOnFirstTransition => spi::Phase::CaptureOnFirstTransition,
        Phase::CaptureOnSecondTransition => spi::Phase::CaptureOnSecondTransition,
    };
    rp
}

/// SPI shift link in blocking mode
pub struct ShiftLink<'d, T: spi::Instance> {
    spi: Spi<'d, T, Blocking>,
}

impl<'d, T: spi::Instance> ShiftLink<'d, T> {
    /// Wrap an SPI peripheral already created with [`to_rp_config`]
    pub fn new(spi: Spi<'d, T, Blocking>) -> Self {
        Self { spi }
    }
}

impl<T: spi::Instance> ByteTransport for ShiftLink<'_, T> {
    type Error = spi::Error;

    fn transfer_byte(&mut self, byte: u8) -> Result<u8, Self::Error> {
        let mut buf = [byte];
        self.spi.blocking_transfer_in_place(&mut buf)?;
        Ok(buf[0])
    }
}

/// Mode used by the MAX6920: data sampled on the rising edge
pub const MAX6920_MODE: Mode = Mode::Mode0;
