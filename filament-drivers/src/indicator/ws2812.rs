//! Single-wire addressable LED driver
//!
//! Bit-banged on a plain output pin. The 24 bit cells go out inside one
//! critical section; the receiver discriminates zeros from ones by the
//! high time alone, so an interrupt landing mid-cell would corrupt the
//! color. The latch gap is only a minimum, so it is held after interrupts
//! are restored.

use filament_core::config::SingleWireTiming;
use filament_core::display::{Color12, CycleTiming, WIRE_BITS};
use filament_core::traits::Indicator;
use filament_hal::{CycleDelay, OutputPin};

/// One WS2812-style LED on a GPIO
pub struct SingleWireLed<P, C> {
    pin: P,
    delay: C,
    cycles: CycleTiming,
}

impl<P, C> SingleWireLed<P, C>
where
    P: OutputPin,
    C: CycleDelay,
{
    /// Create a new driver
    ///
    /// `overhead_cycles` is the measured cost of one pin write plus the
    /// loop around it on the target; the pulse widths are shortened by
    /// that much.
    pub fn new(mut pin: P, delay: C, timing: SingleWireTiming, overhead_cycles: u32) -> Self {
        pin.set_low();
        let cycles = CycleTiming::from_ns(&timing, delay.cpu_hz(), overhead_cycles);
        Self { pin, delay, cycles }
    }

    /// Cycle counts in use
    pub fn cycles(&self) -> &CycleTiming {
        &self.cycles
    }

    /// Send one color and latch it
    pub fn write(&mut self, color: Color12) {
        let bits = color.wire_bits();
        let cycles = self.cycles;
        let pin = &mut self.pin;
        let delay = &mut self.delay;

        critical_section::with(|_| {
            for bit in (0..WIRE_BITS).rev() {
                let (high, low) = cycles.cell(bits & (1 << bit) != 0);
                pin.set_high();
                delay.delay_cycles(high);
                pin.set_low();
                delay.delay_cycles(low);
            }
        });

        self.delay.delay_cycles(cycles.reset);
    }
}

impl<P, C> Indicator for SingleWireLed<P, C>
where
    P: OutputPin,
    C: CycleDelay,
{
    fn set_color(&mut self, color: Color12) {
        self.write(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use filament_core::display::{pulse_train, Pulse};

    const CPU_HZ: u32 = 125_000_000;
    const TIMING: SingleWireTiming = SingleWireTiming::WS2812B;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        High,
        Low,
        Spin(u32),
    }

    type Log = RefCell<Vec<Event>>;

    struct MockPin<'a> {
        log: &'a Log,
        high: bool,
    }

    impl OutputPin for MockPin<'_> {
        fn set_high(&mut self) {
            self.high = true;
            self.log.borrow_mut().push(Event::High);
        }

        fn set_low(&mut self) {
            self.high = false;
            self.log.borrow_mut().push(Event::Low);
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    struct MockCycles<'a> {
        log: &'a Log,
    }

    impl CycleDelay for MockCycles<'_> {
        fn cpu_hz(&self) -> u32 {
            CPU_HZ
        }

        fn delay_cycles(&mut self, cycles: u32) {
            self.log.borrow_mut().push(Event::Spin(cycles));
        }
    }

    fn led(log: &Log) -> SingleWireLed<MockPin<'_>, MockCycles<'_>> {
        let led = SingleWireLed::new(
            MockPin { log, high: true },
            MockCycles { log },
            TIMING,
            0,
        );
        log.borrow_mut().clear();
        led
    }

    /// The waveform the pulse train describes, in cycles
    fn expected(color: Color12, cycles: &CycleTiming) -> Vec<Event> {
        let mut events = Vec::new();
        for pulse in pulse_train(color, TIMING) {
            match pulse {
                Pulse::Bit { high_ns, .. } => {
                    let (high, low) = cycles.cell(high_ns == TIMING.one_high_ns);
                    events.extend([Event::High, Event::Spin(high), Event::Low, Event::Spin(low)]);
                }
                Pulse::Reset { .. } => events.push(Event::Spin(cycles.reset)),
            }
        }
        events
    }

    #[test]
    fn test_starts_low() {
        let log = Log::default();
        let led = led(&log);
        assert!(!led.pin.is_set_high());
    }

    #[test]
    fn test_black_waveform() {
        let log = Log::default();
        let mut led = led(&log);
        led.set_color(Color12::BLACK);

        let events = log.borrow();
        assert_eq!(events.len(), 4 * usize::from(WIRE_BITS) + 1);
        assert_eq!(events[..4], [Event::High, Event::Spin(50), Event::Low, Event::Spin(107)]);
        assert_eq!(events.last(), Some(&Event::Spin(37_500)));
        assert!(!led.pin.is_set_high());
    }

    #[test]
    fn test_matches_pulse_train() {
        for packed in [0x000, 0x8F0, 0x00F, 0xF00, 0xA5C, 0xFFF] {
            let color = Color12::from_packed(packed);
            let log = Log::default();
            let mut led = led(&log);
            led.write(color);
            assert_eq!(*log.borrow(), expected(color, led.cycles()));
        }
    }

    #[test]
    fn test_gap_does_not_depend_on_color() {
        let log = Log::default();
        let mut led = led(&log);
        led.write(Color12::BLACK);
        let black_gap = *log.borrow().last().unwrap();
        log.borrow_mut().clear();
        led.write(Color12::from_packed(0xFFF));
        assert_eq!(log.borrow().last(), Some(&black_gap));
    }
}
