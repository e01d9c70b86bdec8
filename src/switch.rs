use log::debug;

use crate::clock::Clock;
use crate::config::{Polarity, Strategy, SwitchConfig};
use crate::level::LevelSource;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Debouncing,
}

/// Direction of the last confirmed transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Edge {
    Engaged,
    Released,
}

/// State retained by a [`ToggleSwitch`] between two samples.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DebounceState {
    /// Last confirmed state, `true` when the switch is engaged.
    pub current: bool,
    /// Confirmed state before the most recent confirmed transition.
    pub previous: bool,
    pub transitioning: bool,
    /// Only meaningful while `transitioning` is set.
    pub transition_start_ms: u32,
}

impl DebounceState {
    pub const fn new() -> DebounceState {
        DebounceState {
            current: false,
            previous: true,
            transitioning: false,
            transition_start_ms: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.transitioning {
            Phase::Debouncing
        } else {
            Phase::Idle
        }
    }

    fn arm(&mut self, now_ms: u32) {
        self.transitioning = true;
        self.transition_start_ms = now_ms;
    }

    fn confirm(&mut self) {
        self.previous = self.current;
        self.current = !self.current;
        self.transitioning = false;
    }
}

impl Default for DebounceState {
    fn default() -> Self {
        DebounceState::new()
    }
}

/// Debounced toggle switch, polled from the main loop.
///
/// Every call to [`sample`](ToggleSwitch::sample) reads the input once and
/// returns immediately. A level that differs from the confirmed state arms
/// a timer, and the confirmed state flips once `debounce_ms` have passed
/// since then.
pub struct ToggleSwitch<PIN, CLOCK> {
    pin: PIN,
    clock: CLOCK,
    polarity: Polarity,
    strategy: Strategy,
    debounce_ms: u32,
    state: DebounceState,
    transitions: u32,
}

impl<PIN, CLOCK> ToggleSwitch<PIN, CLOCK>
where
    PIN: LevelSource,
    CLOCK: Clock,
{
    pub fn new(pin: PIN, clock: CLOCK, config: &SwitchConfig) -> ToggleSwitch<PIN, CLOCK> {
        ToggleSwitch {
            pin,
            clock,
            polarity: config.polarity,
            strategy: config.strategy,
            debounce_ms: config.debounce_ms,
            state: DebounceState::new(),
            transitions: 0,
        }
    }

    pub fn sample(&mut self) -> bool {
        let engaged = self.polarity.normalize(self.pin.read_level());

        if engaged != self.state.current && !self.state.transitioning {
            let now = self.clock.now_ms();
            debug!("Switch moved to {}, debouncing from {}ms", engaged, now);
            self.state.arm(now);
        } else if self.state.transitioning {
            match self.strategy {
                Strategy::Revalidating if engaged == self.state.current => {
                    debug!("Switch bounced back to {}", engaged);
                    self.state.transitioning = false;
                }
                // Latched never looks at the level again until the window expires.
                _ => {
                    let elapsed = self
                        .clock
                        .now_ms()
                        .wrapping_sub(self.state.transition_start_ms);
                    if elapsed >= self.debounce_ms {
                        self.state.confirm();
                        self.transitions = self.transitions.wrapping_add(1);
                        debug!(
                            "Switch confirmed {} after {}ms",
                            self.state.current, elapsed
                        );
                    }
                }
            }
        }

        self.state.current
    }

    pub fn is_engaged(&self) -> bool {
        self.state.current
    }

    pub fn was_engaged(&self) -> bool {
        self.state.previous
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn state(&self) -> &DebounceState {
        &self.state
    }

    pub fn transitions(&self) -> u32 {
        self.transitions
    }

    pub fn edge(&self) -> Option<Edge> {
        if self.transitions == 0 {
            return None;
        }
        match (self.state.previous, self.state.current) {
            (false, true) => Some(Edge::Engaged),
            (true, false) => Some(Edge::Released),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.state = DebounceState::new();
        self.transitions = 0;
    }
}
