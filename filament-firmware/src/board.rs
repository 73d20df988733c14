//! Board wiring
//!
//! | Signal | Pin |
//! |---|---|
//! | MAX6920 CLK / DIN / DOUT | GP2 / GP3 / GP4 (SPI0) |
//! | MAX6920 LOAD | GP5 |
//! | Boost converter enable | GP6 |
//! | Filament heater enable | GP7 |
//! | Indicator LED data | GP8 |
//! | Wake button (active low, external pull-up) | GP9 |
//! | DS3231 SDA / SCL | GP12 / GP13 (I2C0) |

use defmt::*;
use embassy_rp::i2c::I2c;
use embassy_rp::peripherals::{I2C0, SPI0};
use embassy_rp::spi::Spi;
use embassy_rp::Peripherals;
use embassy_time::Delay;

use filament_core::config::{RailTiming, ShiftTiming, SingleWireTiming};
use filament_core::supervisor::Supervisor;
use filament_drivers::display::Max6920;
use filament_drivers::indicator::SingleWireLed;
use filament_drivers::power::VfdRails;
use filament_drivers::rtc::Ds3231;
use filament_hal::i2c::I2cConfig;
use filament_hal::spi::SpiConfig;
use filament_hal::CycleDelay;
use filament_hal_rp2040::delay::CortexCycles;
use filament_hal_rp2040::gpio::{ButtonLine, GpioOutput};
use filament_hal_rp2040::i2c::{self as rp_i2c, RtcBus};
use filament_hal_rp2040::spi::{self as rp_spi, ShiftLink, MAX6920_MODE};

use crate::config::CLOCK_CONFIG;

/// Cycles one pin write plus loop step costs in the LED routine
const LED_OVERHEAD_CYCLES: u32 = 6;

pub type Display = Max6920<ShiftLink<'static, SPI0>, GpioOutput<'static>, Delay>;
pub type Led = SingleWireLed<GpioOutput<'static>, CortexCycles>;
pub type Rails = VfdRails<GpioOutput<'static>, GpioOutput<'static>, Delay>;
pub type Rtc = Ds3231<RtcBus<'static, I2C0>>;

/// The supervisor with this board's drivers plugged in
pub type ClockSupervisor = Supervisor<Rtc, Led, Display, Rails>;

/// Everything the tasks take ownership of
pub struct Board {
    pub supervisor: ClockSupervisor,
    pub button: ButtonLine<'static>,
}

impl Board {
    /// Bring up every peripheral with all outputs off
    pub fn new(p: Peripherals) -> Self {
        let spi_config = rp_spi::to_rp_config(&SpiConfig {
            mode: MAX6920_MODE,
            ..SpiConfig::default()
        });
        let spi = Spi::new_blocking(p.SPI0, p.PIN_2, p.PIN_3, p.PIN_4, spi_config);
        let display = Max6920::new(
            ShiftLink::new(spi),
            GpioOutput::new(p.PIN_5, false),
            Delay,
            ShiftTiming::MAX6920,
        );
        info!("VFD shift link initialized");

        let rails = VfdRails::new(
            GpioOutput::new(p.PIN_6, false),
            GpioOutput::new(p.PIN_7, false),
            Delay,
            RailTiming::VFD_BOOST,
        );

        let cycles = CortexCycles::new();
        info!("Core clock {} Hz", cycles.cpu_hz());
        let led = SingleWireLed::new(
            GpioOutput::new(p.PIN_8, false),
            cycles,
            SingleWireTiming::WS2812B,
            LED_OVERHEAD_CYCLES,
        );

        let i2c = I2c::new_blocking(
            p.I2C0,
            p.PIN_13,
            p.PIN_12,
            rp_i2c::to_rp_config(&I2cConfig::FAST),
        );
        let mut rtc = Ds3231::new(RtcBus::new(i2c));
        match rtc.oscillator_stopped() {
            Ok(true) => warn!("RTC oscillator stopped; time is invalid until set"),
            Ok(false) => {}
            Err(e) => warn!("RTC status read failed: {}", e),
        }
        if let Err(e) = rtc.init() {
            warn!("RTC init failed: {}", e);
        }
        info!("RTC initialized");

        let button = ButtonLine::new(p.PIN_9);

        Self {
            supervisor: Supervisor::new(CLOCK_CONFIG, rtc, led, display, rails),
            button,
        }
    }
}
