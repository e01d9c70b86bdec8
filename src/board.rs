use core::cell::RefCell;
use core::convert::Infallible;

use critical_section::Mutex;
use embedded_hal::digital::v2::InputPin;
use esp_backtrace as _;
use hal::gpio::{Floating, GpioPin, Input, Output, PullUp, PushPull};
use hal::{clock::ClockControl, peripherals::Peripherals, prelude::*, Rtc};
use log::info;

use crate::clock::Clock;
use crate::config::{PinMode, Polarity, SwitchConfig};
use crate::indicator::Indicator;
use crate::switch::ToggleSwitch;

const SWITCH_GPIO: u8 = 5;
const LED_GPIO: u8 = 2;

const BOARD_CONFIG: SwitchConfig =
    SwitchConfig::new(Polarity::PulledUp).with_pins(SWITCH_GPIO, LED_GPIO);

/// The switch input in whichever mode the wiring asks for.
enum SwitchPin {
    Floating(GpioPin<Input<Floating>, SWITCH_GPIO>),
    PullUp(GpioPin<Input<PullUp>, SWITCH_GPIO>),
}

impl InputPin for SwitchPin {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Infallible> {
        match self {
            SwitchPin::Floating(pin) => pin.is_high(),
            SwitchPin::PullUp(pin) => pin.is_high(),
        }
    }

    fn is_low(&self) -> Result<bool, Infallible> {
        match self {
            SwitchPin::Floating(pin) => pin.is_low(),
            SwitchPin::PullUp(pin) => pin.is_low(),
        }
    }
}

struct RtcClock(Rtc<'static>);

impl Clock for RtcClock {
    fn now_ms(&self) -> u32 {
        self.0.get_time_ms() as u32
    }
}

type Board = Indicator<SwitchPin, RtcClock, GpioPin<Output<PushPull>, LED_GPIO>>;

static BOARD: Mutex<RefCell<Option<Board>>> = Mutex::new(RefCell::new(None));

#[no_mangle]
pub extern "C" fn rs_init() {
    let peripherals = Peripherals::take();
    let system = peripherals.DPORT.split();
    let _clocks = ClockControl::boot_defaults(system.clock_control).freeze();
    let rtc = Rtc::new(peripherals.RTC_CNTL);

    esp_println::logger::init_logger_from_env();

    let io = hal::IO::new(peripherals.GPIO, peripherals.IO_MUX);
    let switch_pin = match BOARD_CONFIG.polarity.input_mode() {
        PinMode::Floating => SwitchPin::Floating(io.pins.gpio5.into_floating_input()),
        PinMode::PullUp => SwitchPin::PullUp(io.pins.gpio5.into_pull_up_input()),
    };
    let led = io.pins.gpio2.into_push_pull_output();

    info!(
        "Toggle on GPIO{} ({:?}), indicator on GPIO{}, debounce {}ms",
        BOARD_CONFIG.input_pin,
        BOARD_CONFIG.polarity,
        BOARD_CONFIG.output_pin,
        BOARD_CONFIG.debounce_ms
    );

    let switch = ToggleSwitch::new(switch_pin, RtcClock(rtc), &BOARD_CONFIG);
    let indicator = Indicator::new(switch, led);
    critical_section::with(|cs| BOARD.borrow_ref_mut(cs).replace(indicator));
}

/// One pass of the C main loop. Returns 1 while the switch is engaged.
#[no_mangle]
pub extern "C" fn loop_once() -> cty::uint8_t {
    critical_section::with(|cs| match BOARD.borrow_ref_mut(cs).as_mut() {
        Some(board) => board.poll() as u8,
        None => 0,
    })
}
