//! MAX6920 VFD driver
//!
//! The MAX6920 is a 12-output high-voltage shift register. A 16-bit word
//! is clocked in high byte first (the top four bits fall off the end),
//! then a pulse on LOAD moves it to the outputs. Each character is left
//! lit for a fixed dwell before the next word replaces it; the final
//! blank word of a frame gives the last character the same dwell.

use embedded_hal::delay::DelayNs;
use filament_core::config::ShiftTiming;
use filament_core::display::CharacterFrame;
use filament_core::traits::CharacterDisplay;
use filament_hal::{ByteTransport, OutputPin};

/// MAX6920 on a byte-serial link with a LOAD strobe
pub struct Max6920<T, L, D> {
    transport: T,
    load: L,
    delay: D,
    timing: ShiftTiming,
    /// Words dropped because the link failed
    dropped: u32,
}

impl<T, L, D> Max6920<T, L, D>
where
    T: ByteTransport,
    L: OutputPin,
    D: DelayNs,
{
    /// Create a new driver
    ///
    /// LOAD is driven low so nothing latches until the first word.
    pub fn new(transport: T, mut load: L, delay: D, timing: ShiftTiming) -> Self {
        load.set_low();
        Self {
            transport,
            load,
            delay,
            timing,
            dropped: 0,
        }
    }

    /// Shift one word out, latch it and hold it for the dwell time
    pub fn send_word(&mut self, word: u16) -> Result<(), T::Error> {
        self.transport.write_word(word)?;

        self.load.set_high();
        self.delay.delay_us(self.timing.load_pulse_us);
        self.load.set_low();

        self.delay.delay_us(self.timing.dwell_us);
        Ok(())
    }

    /// Number of words lost to transport errors since creation
    pub fn dropped_words(&self) -> u32 {
        self.dropped
    }
}

impl<T, L, D> CharacterDisplay for Max6920<T, L, D>
where
    T: ByteTransport,
    L: OutputPin,
    D: DelayNs,
{
    fn show(&mut self, frame: &CharacterFrame) {
        for &word in frame.words() {
            // A lost word leaves one character dark for a single refresh
            if self.send_word(word).is_err() {
                self.dropped = self.dropped.wrapping_add(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use filament_core::time::WallTime;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Byte(u8),
        LoadHigh,
        LoadLow,
        DelayNs(u32),
    }

    type Log = RefCell<Vec<Event>>;

    struct MockSpi<'a> {
        log: &'a Log,
        fail: bool,
    }

    impl ByteTransport for MockSpi<'_> {
        type Error = ();

        fn transfer_byte(&mut self, byte: u8) -> Result<u8, ()> {
            if self.fail {
                return Err(());
            }
            self.log.borrow_mut().push(Event::Byte(byte));
            Ok(0)
        }
    }

    /// Mock GPIO pin for testing
    struct MockPin<'a> {
        log: &'a Log,
        high: bool,
    }

    impl OutputPin for MockPin<'_> {
        fn set_high(&mut self) {
            self.high = true;
            self.log.borrow_mut().push(Event::LoadHigh);
        }

        fn set_low(&mut self) {
            self.high = false;
            self.log.borrow_mut().push(Event::LoadLow);
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    struct MockDelay<'a> {
        log: &'a Log,
    }

    impl DelayNs for MockDelay<'_> {
        fn delay_ns(&mut self, ns: u32) {
            self.log.borrow_mut().push(Event::DelayNs(ns));
        }
    }

    fn driver(log: &Log, fail: bool) -> Max6920<MockSpi<'_>, MockPin<'_>, MockDelay<'_>> {
        let mut vfd = Max6920::new(
            MockSpi { log, fail },
            MockPin { log, high: true },
            MockDelay { log },
            ShiftTiming::MAX6920,
        );
        assert!(!vfd.load.is_set_high());
        log.borrow_mut().clear();
        vfd.dropped = 0;
        vfd
    }

    #[test]
    fn test_word_sequence() {
        let log = Log::default();
        let mut vfd = driver(&log, false);
        vfd.send_word(0x0A5C).unwrap();

        assert_eq!(
            *log.borrow(),
            [
                Event::Byte(0x0A),
                Event::Byte(0x5C),
                Event::LoadHigh,
                Event::DelayNs(2_000),
                Event::LoadLow,
                Event::DelayNs(10_000),
            ]
        );
    }

    #[test]
    fn test_frame_sends_six_words() {
        let log = Log::default();
        let mut vfd = driver(&log, false);
        let frame = CharacterFrame::compose(WallTime::new(12, 34).unwrap(), true);
        vfd.show(&frame);

        let bytes: Vec<u8> = log
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Byte(b) => Some(*b),
                _ => None,
            })
            .collect();
        let expected: Vec<u8> = frame.words().iter().flat_map(|w| w.to_be_bytes()).collect();
        assert_eq!(bytes, expected);

        let loads = log.borrow().iter().filter(|e| **e == Event::LoadHigh).count();
        assert_eq!(loads, CharacterFrame::LEN);
        assert_eq!(log.borrow().last(), Some(&Event::DelayNs(10_000)));
    }

    #[test]
    fn test_repeated_frames_are_identical() {
        let log = Log::default();
        let mut vfd = driver(&log, false);
        let frame = CharacterFrame::compose(WallTime::new(8, 0).unwrap(), false);

        vfd.show(&frame);
        let first = log.borrow().clone();
        log.borrow_mut().clear();
        vfd.show(&frame);
        assert_eq!(*log.borrow(), first);
    }

    #[test]
    fn test_transport_failure_skips_latch() {
        let log = Log::default();
        let mut vfd = driver(&log, true);
        vfd.show(&CharacterFrame::blank());

        assert!(log.borrow().is_empty());
        assert_eq!(vfd.dropped_words(), CharacterFrame::LEN as u32);
    }
}
