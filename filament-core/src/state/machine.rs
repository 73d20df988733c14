//! State machine definition
//!
//! Editing is entered by a long press, values are bumped by short
//! presses, and each editing state hands over to the next once the
//! button has been left alone for a long-press worth of ticks.

use super::actions::{Action, Actions};
use super::events::Inputs;
use crate::config::ClockConfig;
use crate::time::WallTime;

/// Clock modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EditState {
    /// Showing the time
    #[default]
    Display,
    /// Short presses increment the hour
    SetHours,
    /// Short presses increment the minute
    SetMinutes,
}

/// Result of one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State after the step
    pub state: EditState,
    /// Wall time after the step
    pub time: WallTime,
    /// Side effects, in application order
    pub actions: Actions,
}

impl EditState {
    /// Check if the user is editing the time
    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::SetHours | EditState::SetMinutes)
    }

    /// Whether the separator is lit at the given tick phase
    ///
    /// Blinks once per second while showing the time, stays dark while
    /// editing hours and stays lit while editing minutes.
    pub fn separator_visible(&self, phase: u8, config: &ClockConfig) -> bool {
        match self {
            EditState::Display => phase >= config.separator_phase(),
            EditState::SetHours => false,
            EditState::SetMinutes => true,
        }
    }

    /// Process one snapshot of the inputs
    ///
    /// Long press is checked only from `Display` and independently of the
    /// short press threshold. The inactivity advance sees the budget as it
    /// is after this step's own counter reset.
    pub fn advance(self, inputs: &Inputs, time: WallTime, config: &ClockConfig) -> Transition {
        use EditState::*;

        let palette = &config.palette;
        let mut state = self;
        let mut time = time;
        let mut actions = Actions::new();
        let mut budget = inputs.budget;

        match state {
            Display => {
                if inputs.long_press(config) {
                    state = SetHours;
                    let _ = actions.push(Action::SetIndicator(palette.set_hours));
                    let _ = actions.push(Action::ResetCounters);
                    budget = config.sleep_timeout_ticks;
                } else if inputs.stale {
                    let _ = actions.push(Action::Resync);
                }
            }
            SetHours => {
                if inputs.short_press(config) {
                    time.increment_hour();
                    let _ = actions.push(Action::ResetCounters);
                    budget = config.sleep_timeout_ticks;
                }
            }
            SetMinutes => {
                if inputs.short_press(config) {
                    time.increment_minute();
                    let _ = actions.push(Action::ResetCounters);
                    budget = config.sleep_timeout_ticks;
                }
            }
        }

        if state.is_editing() && budget < config.edit_advance_below() {
            match state {
                SetHours => {
                    state = SetMinutes;
                    let _ = actions.push(Action::SetIndicator(palette.set_minutes));
                }
                SetMinutes => {
                    state = Display;
                    let _ = actions.push(Action::Commit(time));
                    let _ = actions.push(Action::SetIndicator(palette.clock));
                }
                Display => {}
            }
            let _ = actions.push(Action::ResetCounters);
        }

        Transition {
            state,
            time,
            actions,
        }
    }
}

/// The state machine together with the wall time it owns
#[derive(Debug, Clone)]
pub struct ClockMachine {
    state: EditState,
    time: WallTime,
    config: ClockConfig,
}

impl ClockMachine {
    /// Start in `Display` at the given time
    pub fn new(config: ClockConfig, time: WallTime) -> Self {
        Self {
            state: EditState::Display,
            time,
            config,
        }
    }

    /// Current mode
    pub fn state(&self) -> EditState {
        self.state
    }

    /// Wall time as currently shown
    pub fn time(&self) -> WallTime {
        self.time
    }

    /// Replace the wall time after reading the time source
    pub fn set_time(&mut self, time: WallTime) {
        self.time = time;
    }

    /// Drop any edit in progress and show the time again
    pub fn reset(&mut self) {
        self.state = EditState::Display;
    }

    /// Separator visibility for the current state
    pub fn separator_visible(&self, phase: u8) -> bool {
        self.state.separator_visible(phase, &self.config)
    }

    /// Run one step and keep its result
    pub fn update(&mut self, inputs: &Inputs) -> Actions {
        let Transition {
            state,
            time,
            actions,
        } = self.state.advance(inputs, self.time, &self.config);
        self.state = state;
        self.time = time;
        actions
    }
}
