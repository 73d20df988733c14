//! Supervisor loop body
//!
//! One call to [`Supervisor::iterate`] is one pass of the cooperative
//! main loop: read the sampler, step the state machine, apply what it
//! asked for, refresh the display and move the indicator fade along.
//! The caller owns the loop itself and decides how to sleep when the
//! returned [`Report`] says the inactivity budget is spent.

use crate::config::ClockConfig;
use crate::display::{CharacterFrame, FadeAnimation};
use crate::sampler::SharedSampler;
use crate::state::{Action, ClockMachine, EditState, Inputs};
use crate::time::{RtcTime, WallTime};
use crate::traits::{CharacterDisplay, Indicator, PowerRails, TimeSource};

/// A time source operation that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeFault<E> {
    /// Reading the time failed; wall time kept its last value
    Read(E),
    /// Writing an edited time failed; the source kept its old time, which
    /// the next resync puts back on the tube
    Write(E),
}

/// Outcome of one loop pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Report<E> {
    /// State after the pass
    pub state: EditState,
    /// The pass moved the state machine to another state
    pub changed: bool,
    /// Wall time written to the time source in this pass
    pub committed: Option<WallTime>,
    /// Inactivity budget is spent; the caller should enter low power
    pub sleep_due: bool,
    /// Time source failure, if any
    pub fault: Option<TimeFault<E>>,
}

/// Owns the state machine and every output collaborator
pub struct Supervisor<T, I, D, R> {
    machine: ClockMachine,
    fade: FadeAnimation,
    config: ClockConfig,
    time_source: T,
    indicator: I,
    display: D,
    rails: R,
}

impl<T, I, D, R> Supervisor<T, I, D, R>
where
    T: TimeSource,
    I: Indicator,
    D: CharacterDisplay,
    R: PowerRails,
{
    /// Create a supervisor; nothing is driven until [`boot`](Self::boot)
    pub fn new(config: ClockConfig, time_source: T, indicator: I, display: D, rails: R) -> Self {
        Self {
            machine: ClockMachine::new(config, config.seed_time.unwrap_or(WallTime::MIDNIGHT)),
            fade: FadeAnimation::new(config.fade_steps),
            config,
            time_source,
            indicator,
            display,
            rails,
        }
    }

    /// Power-on sequence
    ///
    /// Blanks the tube before its supplies come up, seeds the time source
    /// when configured to, reads wall time and starts the indicator fade.
    pub fn boot(&mut self, sampler: &SharedSampler) -> Option<TimeFault<T::Error>> {
        self.display.show(&CharacterFrame::blank());
        self.indicator.set_color(self.config.palette.off);
        self.rails.enable();

        let mut fault = None;
        if let Some(seed) = self.config.seed_time {
            if let Err(e) = self.time_source.set(RtcTime::from_wall(seed)) {
                fault = Some(TimeFault::Write(e));
            }
        }
        if let Err(e) = self.resync() {
            fault = fault.or(Some(TimeFault::Read(e)));
        }

        sampler.restart();
        self.fade.restart(self.config.palette.clock);
        fault
    }

    /// One pass of the main loop
    pub fn iterate(&mut self, sampler: &SharedSampler) -> Report<T::Error> {
        let snapshot = sampler.snapshot();
        let before = self.machine.state();
        let actions = self.machine.update(&Inputs::from(snapshot));

        let mut committed = None;
        let mut fault = None;
        for action in actions.iter() {
            match *action {
                Action::ResetCounters => sampler.action_happened(),
                Action::SetIndicator(color) => {
                    self.fade.cancel();
                    self.indicator.set_color(color);
                }
                Action::Commit(time) => match self.time_source.set(RtcTime::from_wall(time)) {
                    Ok(()) => committed = Some(time),
                    Err(e) => fault = Some(TimeFault::Write(e)),
                },
                Action::Resync => {
                    if let Err(e) = self.resync() {
                        fault = Some(TimeFault::Read(e));
                    }
                    // A failed read waits for the next second rather than
                    // hammering the bus every pass
                    sampler.clear_stale();
                }
            }
        }

        self.refresh(snapshot.phase);

        if sampler.take_indicator_due() {
            if let Some(color) = self.fade.step() {
                self.indicator.set_color(color);
            }
        }

        let state = self.machine.state();
        Report {
            state,
            changed: state != before,
            committed,
            sleep_due: sampler.inactivity_budget() == 0,
            fault,
        }
    }

    /// Darken everything before the CPU halts
    pub fn suspend(&mut self) {
        self.fade.cancel();
        self.indicator.set_color(self.config.palette.off);
        self.rails.disable();
    }

    /// Bring the clock back after a wake edge
    ///
    /// Real time moved on by an unknown amount while halted, so wall time
    /// is read again before anything is shown.
    pub fn resume(&mut self, sampler: &SharedSampler) -> Option<TimeFault<T::Error>> {
        let fault = self.resync().err().map(TimeFault::Read);
        self.machine.reset();
        sampler.restart();
        self.fade.restart(self.config.palette.clock);
        self.rails.enable();
        fault
    }

    /// Current wall time
    pub fn time(&self) -> WallTime {
        self.machine.time()
    }

    /// Current clock mode
    pub fn state(&self) -> EditState {
        self.machine.state()
    }

    /// Time source, for inspection
    pub fn time_source(&self) -> &T {
        &self.time_source
    }

    /// Indicator, for inspection
    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    /// Character display, for inspection
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Power rails, for inspection
    pub fn rails(&self) -> &R {
        &self.rails
    }

    fn resync(&mut self) -> Result<(), T::Error> {
        let now = self.time_source.now()?;
        if let Some(wall) = now.wall() {
            self.machine.set_time(wall);
        }
        Ok(())
    }

    fn refresh(&mut self, phase: u8) {
        let frame =
            CharacterFrame::compose(self.machine.time(), self.machine.separator_visible(phase));
        self.display.show(&frame);
    }
}
