#![cfg_attr(target_os = "none", no_std)]

mod clock;
mod config;
mod indicator;
mod level;
mod switch;

#[cfg(target_os = "none")]
mod board;

pub use crate::clock::Clock;
pub use crate::config::{
    PinMode, Polarity, Strategy, SwitchConfig, BUILTIN_LED_GPIO, DEFAULT_DEBOUNCE_MS,
    DEFAULT_SWITCH_GPIO,
};
pub use crate::indicator::Indicator;
pub use crate::level::LevelSource;
pub use crate::switch::{DebounceState, Edge, Phase, ToggleSwitch};
