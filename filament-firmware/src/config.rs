//! Build-time clock configuration
//!
//! `CLOCK_CONFIG` is generated by build.rs from clock.toml after it has
//! been validated, so it is always consistent.

#[allow(unused_imports)]
use filament_core::config::{ClockConfig, IndicatorPalette};
#[allow(unused_imports)]
use filament_core::display::Color12;
#[allow(unused_imports)]
use filament_core::time::WallTime;

include!(concat!(env!("OUT_DIR"), "/clock_config.rs"));
