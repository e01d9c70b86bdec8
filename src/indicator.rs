use embedded_hal::digital::v2::{OutputPin, PinState};

use crate::clock::Clock;
use crate::level::LevelSource;
use crate::switch::ToggleSwitch;

/// Mirrors the debounced switch onto an output, one poll per main loop pass.
pub struct Indicator<PIN, CLOCK, LED> {
    pub switch: ToggleSwitch<PIN, CLOCK>,
    led: LED,
}

impl<PIN, CLOCK, LED> Indicator<PIN, CLOCK, LED>
where
    PIN: LevelSource,
    CLOCK: Clock,
    LED: OutputPin,
{
    pub fn new(switch: ToggleSwitch<PIN, CLOCK>, led: LED) -> Indicator<PIN, CLOCK, LED> {
        Indicator { switch, led }
    }

    pub fn poll(&mut self) -> bool {
        let engaged = self.switch.sample();
        self.led
            .set_state(PinState::from(engaged))
            .unwrap_or_default();
        engaged
    }
}
