//! VFD supply rails
//!
//! The tube needs two supplies: the boost converter for grid and anode
//! voltage, and the filament heater. Both are switched by plain GPIOs.
//! After switching on, the boost output needs a short settle before the
//! shift register may drive the grids.

use embedded_hal::delay::DelayNs;
use filament_core::config::RailTiming;
use filament_core::traits::PowerRails;
use filament_hal::OutputPin;

/// Boost and filament enables
pub struct VfdRails<B, H, D> {
    boost: B,
    heater: H,
    delay: D,
    timing: RailTiming,
    enabled: bool,
}

impl<B, H, D> VfdRails<B, H, D>
where
    B: OutputPin,
    H: OutputPin,
    D: DelayNs,
{
    /// Create a new driver with both rails off
    pub fn new(boost: B, heater: H, delay: D, timing: RailTiming) -> Self {
        let mut rails = Self {
            boost,
            heater,
            delay,
            timing,
            enabled: false,
        };
        rails.disable();
        rails
    }
}

impl<B, H, D> PowerRails for VfdRails<B, H, D>
where
    B: OutputPin,
    H: OutputPin,
    D: DelayNs,
{
    fn enable(&mut self) {
        self.boost.set_high();
        self.heater.set_high();
        self.delay.delay_us(self.timing.settle_us);
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.boost.set_low();
        self.heater.set_low();
        self.enabled = false;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
    }

    impl MockPin {
        fn new() -> Self {
            Self { high: true }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[derive(Default)]
    struct MockDelay {
        waited_ns: u64,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.waited_ns += u64::from(ns);
        }
    }

    fn rails() -> VfdRails<MockPin, MockPin, MockDelay> {
        VfdRails::new(
            MockPin::new(),
            MockPin::new(),
            MockDelay::default(),
            RailTiming::VFD_BOOST,
        )
    }

    #[test]
    fn test_starts_off() {
        let rails = rails();
        assert!(!rails.is_enabled());
        assert!(!rails.boost.is_set_high());
        assert!(!rails.heater.is_set_high());
        assert_eq!(rails.delay.waited_ns, 0);
    }

    #[test]
    fn test_enable_waits_for_settle() {
        let mut rails = rails();
        rails.enable();
        assert!(rails.is_enabled());
        assert!(rails.boost.is_set_high());
        assert!(rails.heater.is_set_high());
        assert_eq!(rails.delay.waited_ns, 500_000);
    }

    #[test]
    fn test_disable_is_immediate() {
        let mut rails = rails();
        rails.enable();
        let waited = rails.delay.waited_ns;
        rails.disable();
        assert!(!rails.is_enabled());
        assert!(!rails.boost.is_set_high());
        assert!(!rails.heater.is_set_high());
        assert_eq!(rails.delay.waited_ns, waited);
    }

    #[test]
    fn test_rails_trait() {
        fn cycle<R: PowerRails>(r: &mut R) {
            r.enable();
            assert!(r.is_enabled());
            r.disable();
            assert!(!r.is_enabled());
        }

        let mut rails = rails();
        cycle(&mut rails);
    }
}
