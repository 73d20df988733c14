//! Blocking I2C bus

use embassy_rp::i2c::{self, Blocking, I2c};
use filament_hal::i2c::I2cConfig;
use filament_hal::I2cBus;

/// Convert the shared bus configuration into an embassy-rp one
pub fn to_rp_config(config: &I2cConfig) -> i2c::Config {
    let mut rp = i2c::Config::default();
    rp.frequency = config.frequency;
    rp
}

/// I2C controller in blocking mode
pub struct RtcBus<'d, T: i2c::Instance> {
    i2c: I2c<'d, T, Blocking>,
}

impl<'d, T: i2c::Instance> RtcBus<'d, T> {
    /// Wrap an I2C peripheral already created with [`to_rp_config`]
    pub fn new(i2c: I2c<'d, T, Blocking>) -> Self {
        Self { i2c }
    }
}

impl<T: i2c::Instance> I2cBus for RtcBus<'_, T> {
    type Error = i2c::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.i2c.blocking_write(address, data)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.i2c.blocking_write_read(address, write_data, read_buf)
    }
}
