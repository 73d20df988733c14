//! DS3231 real-time clock driver
//!
//! Only the time-of-day registers are used. Hours are written in 24-hour
//! mode; a chip left in 12-hour mode by other firmware is still read
//! correctly.

use filament_core::time::RtcTime;
use filament_core::traits::TimeSource;
use filament_hal::I2cBus;

/// Fixed 7-bit bus address
pub const DS3231_ADDR: u8 = 0x68;

/// Register map (subset)
pub mod reg {
    /// Seconds, BCD 00-59
    pub const SECONDS: u8 = 0x00;
    /// Minutes, BCD 00-59
    pub const MINUTES: u8 = 0x01;
    /// Hours, BCD, bit 6 selects 12-hour mode
    pub const HOURS: u8 = 0x02;
    /// Control
    pub const CONTROL: u8 = 0x0E;
    /// Status
    pub const STATUS: u8 = 0x0F;
}

/// Register bits
pub mod bits {
    /// HOURS: 12-hour mode
    pub const HOURS_12H: u8 = 1 << 6;
    /// HOURS: PM in 12-hour mode
    pub const HOURS_PM: u8 = 1 << 5;
    /// CONTROL: INT/SQW pin is an alarm interrupt, square wave off
    pub const CONTROL_INTCN: u8 = 1 << 2;
    /// STATUS: oscillator stopped since this flag was last cleared
    pub const STATUS_OSF: u8 = 1 << 7;
    /// STATUS: 32 kHz output enabled
    pub const STATUS_EN32KHZ: u8 = 1 << 3;
}

/// DS3231 errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RtcError<E> {
    /// Bus transaction failed
    Bus(E),
    /// Register held a byte that is not packed BCD
    InvalidBcd(u8),
    /// Registers decoded to an impossible time, or a write was out of range
    InvalidTime,
}

fn bcd_to_bin<E>(b: u8) -> Result<u8, RtcError<E>> {
    let hi = b >> 4;
    let lo = b & 0x0F;
    if hi <= 9 && lo <= 9 {
        Ok(hi * 10 + lo)
    } else {
        Err(RtcError::InvalidBcd(b))
    }
}

fn bin_to_bcd(v: u8) -> u8 {
    ((v / 10) << 4) | (v % 10)
}

/// DS3231 on an I2C bus
pub struct Ds3231<I> {
    i2c: I,
}

impl<I: I2cBus> Ds3231<I> {
    /// Create a new driver; the chip is not touched
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Give the bus back
    pub fn release(self) -> I {
        self.i2c
    }

    /// Put the chip in a known, quiet state
    ///
    /// Keeps the oscillator running on battery, turns the square wave and
    /// the 32 kHz output off, masks both alarm interrupts and clears the
    /// oscillator-stopped flag.
    pub fn init(&mut self) -> Result<(), RtcError<I::Error>> {
        self.i2c
            .write(DS3231_ADDR, &[reg::CONTROL, bits::CONTROL_INTCN])
            .map_err(RtcError::Bus)?;
        self.i2c
            .write(DS3231_ADDR, &[reg::STATUS, 0])
            .map_err(RtcError::Bus)
    }

    /// Check whether timekeeping stopped since the last `init`
    ///
    /// Set after the backup battery ran flat; the time is then meaningless.
    pub fn oscillator_stopped(&mut self) -> Result<bool, RtcError<I::Error>> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(DS3231_ADDR, &[reg::STATUS], &mut buf)
            .map_err(RtcError::Bus)?;
        Ok(buf[0] & bits::STATUS_OSF != 0)
    }

    fn decode_hours(raw: u8) -> Result<u8, RtcError<I::Error>> {
        if raw & bits::HOURS_12H == 0 {
            return bcd_to_bin(raw & 0x3F);
        }
        let hour = bcd_to_bin(raw & 0x1F)?;
        if !(1..=12).contains(&hour) {
            return Err(RtcError::InvalidTime);
        }
        let pm = raw & bits::HOURS_PM != 0;
        Ok(hour % 12 + if pm { 12 } else { 0 })
    }
}

impl<I: I2cBus> TimeSource for Ds3231<I> {
    type Error = RtcError<I::Error>;

    fn now(&mut self) -> Result<RtcTime, Self::Error> {
        let mut buf = [0u8; 3];
        self.i2c
            .write_read(DS3231_ADDR, &[reg::SECONDS], &mut buf)
            .map_err(RtcError::Bus)?;

        let time = RtcTime {
            second: bcd_to_bin(buf[0] & 0x7F)?,
            minute: bcd_to_bin(buf[1] & 0x7F)?,
            hour: Self::decode_hours(buf[2])?,
        };
        if time.wall().is_none() || time.second > 59 {
            return Err(RtcError::InvalidTime);
        }
        Ok(time)
    }

    fn set(&mut self, time: RtcTime) -> Result<(), Self::Error> {
        if time.wall().is_none() || time.second > 59 {
            return Err(RtcError::InvalidTime);
        }
        let payload = [
            reg::SECONDS,
            bin_to_bcd(time.second),
            bin_to_bcd(time.minute),
            bin_to_bcd(time.hour),
        ];
        self.i2c.write(DS3231_ADDR, &payload).map_err(RtcError::Bus)
    }
}
