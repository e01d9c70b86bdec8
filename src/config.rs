/// ESP32 dev boards wire their on-board LED to GPIO 2.
pub const BUILTIN_LED_GPIO: u8 = 2;
pub const DEFAULT_SWITCH_GPIO: u8 = 5;
pub const DEFAULT_DEBOUNCE_MS: u32 = 10;

/// How the toggle switch is wired to its input pin.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Polarity {
    /// Plain input with an external pull-down resistor, a high level means engaged.
    PulledDown,
    /// Internal pull-up and no resistor, a low level means engaged.
    PulledUp,
}

/// Pin mode the input has to be configured with before the first read.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PinMode {
    Floating,
    PullUp,
}

impl Polarity {
    pub const fn input_mode(self) -> PinMode {
        match self {
            Polarity::PulledDown => PinMode::Floating,
            Polarity::PulledUp => PinMode::PullUp,
        }
    }

    /// Maps a raw pin level to "switch engaged".
    pub const fn normalize(self, raw_high: bool) -> bool {
        match self {
            Polarity::PulledDown => raw_high,
            Polarity::PulledUp => !raw_high,
        }
    }
}

/// Which debounce algorithm a [`ToggleSwitch`](crate::ToggleSwitch) runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Once a change is seen the timer runs to completion, and the confirmed
    /// state flips at expiry even if the input has bounced back meanwhile.
    Latched,
    /// A pending change is dropped as soon as the input returns to the
    /// confirmed state before the window has elapsed.
    Revalidating,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SwitchConfig {
    pub polarity: Polarity,
    pub strategy: Strategy,
    pub input_pin: u8,
    pub output_pin: u8,
    pub debounce_ms: u32,
}

impl SwitchConfig {
    pub const fn new(polarity: Polarity) -> SwitchConfig {
        SwitchConfig {
            polarity,
            strategy: Strategy::Latched,
            input_pin: DEFAULT_SWITCH_GPIO,
            output_pin: BUILTIN_LED_GPIO,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }

    pub const fn with_strategy(mut self, strategy: Strategy) -> SwitchConfig {
        self.strategy = strategy;
        self
    }

    pub const fn with_pins(mut self, input_pin: u8, output_pin: u8) -> SwitchConfig {
        self.input_pin = input_pin;
        self.output_pin = output_pin;
        self
    }

    pub const fn with_debounce_ms(mut self, debounce_ms: u32) -> SwitchConfig {
        self.debounce_ms = debounce_ms;
        self
    }
}

impl Default for SwitchConfig {
    fn default() -> Self {
        SwitchConfig::new(Polarity::PulledDown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SwitchConfig::default();
        assert_eq!(config.polarity, Polarity::PulledDown);
        assert_eq!(config.strategy, Strategy::Latched);
        assert_eq!(config.debounce_ms, 10);
        assert_eq!(config.output_pin, BUILTIN_LED_GPIO);
        assert_eq!(config.input_pin, DEFAULT_SWITCH_GPIO);
    }

    #[test]
    fn pulled_up_inverts_raw_level() {
        assert!(Polarity::PulledUp.normalize(false));
        assert!(!Polarity::PulledUp.normalize(true));
        assert!(Polarity::PulledDown.normalize(true));
        assert!(!Polarity::PulledDown.normalize(false));
    }

    #[test]
    fn modes_mirror_each_other() {
        let raw = [true, false, false, true, true, false];
        for level in raw {
            assert_eq!(
                Polarity::PulledDown.normalize(level),
                !Polarity::PulledUp.normalize(level)
            );
        }
    }

    #[test]
    fn input_mode_follows_wiring() {
        assert_eq!(Polarity::PulledDown.input_mode(), PinMode::Floating);
        assert_eq!(Polarity::PulledUp.input_mode(), PinMode::PullUp);
    }

    #[test]
    fn builder() {
        const CONFIG: SwitchConfig = SwitchConfig::new(Polarity::PulledUp)
            .with_strategy(Strategy::Revalidating)
            .with_pins(13, 4)
            .with_debounce_ms(25);
        assert_eq!(CONFIG.input_pin, 13);
        assert_eq!(CONFIG.output_pin, 4);
        assert_eq!(CONFIG.debounce_ms, 25);
        assert_eq!(CONFIG.strategy, Strategy::Revalidating);
    }
}
