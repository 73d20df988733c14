//! Tick & input sampler
//!
//! The periodic tick and the button edge both run in interrupt context
//! (or at interrupt priority) and write a small block of counters that
//! the supervisor loop reads. The counters never cross that boundary as
//! loose globals: they live in [`SharedSampler`], and every access, from
//! either side, is one short critical section that copies the whole block
//! in or out. A snapshot is therefore never torn, whatever the target's
//! atomic access width.
//!
//! Ownership of the fields:
//!
//! | Field | Written by | Read by |
//! |---|---|---|
//! | tick phase | tick | supervisor |
//! | press duration | tick, edge, supervisor reset | supervisor |
//! | inactivity budget | tick, edge, supervisor reset | supervisor |
//! | stale flag | tick (raise), supervisor (clear) | supervisor |
//! | indicator due | tick (raise), supervisor (take) | supervisor |
//! | button level | tick, edge | tick |
//!
//! The tick treats a level that differs from the last one seen as an edge.
//! An edge that lands while nobody is waiting for it still refills the
//! budget, one tick late.

use core::cell::Cell;

use critical_section::Mutex;

use crate::config::ClockConfig;

/// The counter block shared between tick, edge and supervisor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Counters {
    /// Sub-second phase, wraps at `ticks_per_second`
    tick: u8,
    /// Consecutive ticks with the button held
    press: u8,
    /// Ticks left before sleep
    budget: u16,
    /// Raised on every wrap of `tick`
    stale: bool,
    /// Raised on every tick
    indicator_due: bool,
    /// Button level at the last tick or edge
    level: bool,
}

impl Counters {
    /// Fresh counters with a full inactivity budget
    pub const fn new(config: &ClockConfig) -> Self {
        Self {
            tick: 0,
            press: 0,
            budget: config.sleep_timeout_ticks,
            stale: false,
            indicator_due: false,
            level: false,
        }
    }

    /// Periodic tick
    ///
    /// `pressed` is the button level sampled in the same tick.
    pub fn tick(&mut self, config: &ClockConfig, pressed: bool) {
        if pressed != self.level {
            self.edge(config, pressed);
        }

        self.tick = (self.tick + 1) % config.ticks_per_second;
        if self.tick == 0 {
            self.stale = true;
        }
        self.indicator_due = true;
        self.budget = self.budget.saturating_sub(1);

        if pressed {
            if self.press < config.press_ceiling {
                self.press += 1;
            }
        } else {
            self.press = 0;
        }
    }

    /// Button level changed; `pressed` is the level after the change
    pub fn edge(&mut self, config: &ClockConfig, pressed: bool) {
        self.level = pressed;
        self.press = 0;
        self.budget = config.sleep_timeout_ticks;
    }

    /// The supervisor acted on input; start counting from scratch
    pub fn action(&mut self, config: &ClockConfig) {
        self.press = 0;
        self.budget = config.sleep_timeout_ticks;
    }

    /// Copy out the fields the state machine consumes
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.tick,
            press_ticks: self.press,
            budget: self.budget,
            stale: self.stale,
        }
    }
}

/// A consistent read of the counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    /// Sub-second tick phase
    pub phase: u8,
    /// Consecutive ticks the button has been held
    pub press_ticks: u8,
    /// Ticks left before sleep
    pub budget: u16,
    /// Wall time needs re-reading from the RTC
    pub stale: bool,
}

/// Counters shared with interrupt context
///
/// Designed to sit in a `static`:
///
/// ```
/// use filament_core::config::ClockConfig;
/// use filament_core::sampler::SharedSampler;
///
/// static SAMPLER: SharedSampler = SharedSampler::new(ClockConfig::DEFAULT);
/// ```
pub struct SharedSampler {
    counters: Mutex<Cell<Counters>>,
    config: ClockConfig,
}

impl SharedSampler {
    /// Create a sampler with a full inactivity budget
    pub const fn new(config: ClockConfig) -> Self {
        Self {
            counters: Mutex::new(Cell::new(Counters::new(&config))),
            config,
        }
    }

    /// Configuration the counters run against
    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    fn update<R>(&self, f: impl FnOnce(&mut Counters, &ClockConfig) -> R) -> R {
        critical_section::with(|cs| {
            let cell = self.counters.borrow(cs);
            let mut counters = cell.get();
            let result = f(&mut counters, &self.config);
            cell.set(counters);
            result
        })
    }

    /// Periodic tick handler
    pub fn on_tick(&self, pressed: bool) {
        self.update(|c, config| c.tick(config, pressed));
    }

    /// Button edge handler
    pub fn on_edge(&self, pressed: bool) {
        self.update(|c, config| c.edge(config, pressed));
    }

    /// Read everything the state machine needs in one critical section
    pub fn snapshot(&self) -> Snapshot {
        self.update(|c, _| c.snapshot())
    }

    /// Ticks left before sleep
    pub fn inactivity_budget(&self) -> u16 {
        self.update(|c, _| c.budget)
    }

    /// Reset press duration and inactivity budget after a user action
    pub fn action_happened(&self) {
        self.update(|c, config| c.action(config));
    }

    /// Wall time has been re-read
    pub fn clear_stale(&self) {
        self.update(|c, _| c.stale = false);
    }

    /// Consume the once-per-tick indicator flag
    pub fn take_indicator_due(&self) -> bool {
        self.update(|c, _| core::mem::take(&mut c.indicator_due))
    }

    /// Start over, as at power-on or after waking
    ///
    /// The button level is carried over; it still describes the pin.
    pub fn restart(&self) {
        self.update(|c, config| {
            *c = Counters {
                level: c.level,
                ..Counters::new(config)
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CONFIG: ClockConfig = ClockConfig::DEFAULT;

    #[test]
    fn test_stale_raised_once_per_second() {
        let mut c = Counters::new(&CONFIG);
        for _ in 0..CONFIG.ticks_per_second - 1 {
            c.tick(&CONFIG, false);
            assert!(!c.snapshot().stale);
        }
        c.tick(&CONFIG, false);
        let snap = c.snapshot();
        assert!(snap.stale);
        assert_eq!(snap.phase, 0);
    }

    #[test]
    fn test_release_resets_press() {
        let mut c = Counters::new(&CONFIG);
        for _ in 0..5 {
            c.tick(&CONFIG, true);
        }
        assert_eq!(c.snapshot().press_ticks, 5);
        c.tick(&CONFIG, false);
        assert_eq!(c.snapshot().press_ticks, 0);
    }

    #[test]
    fn test_budget_clamps_at_zero() {
        let mut c = Counters::new(&CONFIG);
        for _ in 0..CONFIG.sleep_timeout_ticks + 10 {
            c.tick(&CONFIG, false);
        }
        assert_eq!(c.snapshot().budget, 0);
    }

    #[test]
    fn test_edge_resets_press_and_budget() {
        let mut c = Counters::new(&CONFIG);
        for _ in 0..30 {
            c.tick(&CONFIG, true);
        }
        c.edge(&CONFIG, false);
        let snap = c.snapshot();
        assert_eq!(snap.press_ticks, 0);
        assert_eq!(snap.budget, CONFIG.sleep_timeout_ticks);
    }

    #[test]
    fn test_unseen_edge_is_caught_by_tick() {
        let mut c = Counters::new(&CONFIG);
        for _ in 0..100 {
            c.tick(&CONFIG, false);
        }
        assert_eq!(c.snapshot().budget, CONFIG.sleep_timeout_ticks - 100);

        // Pressed without an edge reported
        c.tick(&CONFIG, true);
        let snap = c.snapshot();
        assert_eq!(snap.budget, CONFIG.sleep_timeout_ticks - 1);
        assert_eq!(snap.press_ticks, 1);

        // Level unchanged: no refill
        c.tick(&CONFIG, true);
        assert_eq!(c.snapshot().budget, CONFIG.sleep_timeout_ticks - 2);

        // Released without an edge reported
        for _ in 0..50 {
            c.tick(&CONFIG, true);
        }
        c.tick(&CONFIG, false);
        let snap = c.snapshot();
        assert_eq!(snap.budget, CONFIG.sleep_timeout_ticks - 1);
        assert_eq!(snap.press_ticks, 0);
    }

    #[test]
    fn test_reported_edge_is_not_counted_twice() {
        let sampler = SharedSampler::new(CONFIG);
        sampler.on_edge(true);
        sampler.on_tick(true);
        sampler.on_tick(true);
        sampler.on_tick(true);
        assert_eq!(sampler.inactivity_budget(), CONFIG.sleep_timeout_ticks - 3);
        assert_eq!(sampler.snapshot().press_ticks, 3);
    }

    #[test]
    fn test_restart_keeps_level() {
        let sampler = SharedSampler::new(CONFIG);
        // Woken by a press that is still held
        sampler.on_edge(true);
        sampler.restart();
        for _ in 0..10 {
            sampler.on_tick(true);
        }
        assert_eq!(sampler.inactivity_budget(), CONFIG.sleep_timeout_ticks - 10);
        assert_eq!(sampler.snapshot().press_ticks, 10);
    }

    #[test]
    fn test_shared_sampler_round_trip() {
        let sampler = SharedSampler::new(CONFIG);
        sampler.on_tick(true);
        sampler.on_tick(true);
        assert_eq!(sampler.snapshot().press_ticks, 2);
        assert_eq!(sampler.inactivity_budget(), CONFIG.sleep_timeout_ticks - 2);

        assert!(sampler.take_indicator_due());
        assert!(!sampler.take_indicator_due());

        sampler.action_happened();
        let snap = sampler.snapshot();
        assert_eq!(snap.press_ticks, 0);
        assert_eq!(snap.budget, CONFIG.sleep_timeout_ticks);
    }

    #[test]
    fn test_clear_stale_and_restart() {
        let sampler = SharedSampler::new(CONFIG);
        for _ in 0..CONFIG.ticks_per_second {
            sampler.on_tick(false);
        }
        assert!(sampler.snapshot().stale);
        sampler.clear_stale();
        assert!(!sampler.snapshot().stale);

        sampler.on_tick(true);
        sampler.restart();
        assert_eq!(sampler.snapshot(), Counters::new(&CONFIG).snapshot());
    }

    proptest! {
        #[test]
        fn prop_press_saturates(held in 0usize..1000) {
            let mut c = Counters::new(&CONFIG);
            for _ in 0..held {
                c.tick(&CONFIG, true);
            }
            let press = c.snapshot().press_ticks;
            prop_assert!(press <= CONFIG.press_ceiling);
            prop_assert_eq!(usize::from(press), held.min(usize::from(CONFIG.press_ceiling)));
        }

        #[test]
        fn prop_budget_drops_one_per_tick(ticks in 0u16..220) {
            let mut c = Counters::new(&CONFIG);
            let mut last = c.snapshot().budget;
            for _ in 0..ticks {
                c.tick(&CONFIG, false);
                let now = c.snapshot().budget;
                prop_assert_eq!(now, last - 1);
                last = now;
            }
        }

        #[test]
        fn prop_phase_stays_below_modulus(ticks in 0usize..500) {
            let mut c = Counters::new(&CONFIG);
            for _ in 0..ticks {
                c.tick(&CONFIG, false);
            }
            prop_assert!(c.snapshot().phase < CONFIG.ticks_per_second);
        }
    }
}
