use embedded_hal::digital::v2::InputPin;

/// Raw digital level of the switch input, `true` meaning high.
pub trait LevelSource {
    fn read_level(&self) -> bool;
}

impl<PIN> LevelSource for PIN
where
    PIN: InputPin,
{
    fn read_level(&self) -> bool {
        // A pin that cannot be read counts as low.
        self.is_high().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::pin::{Mock, State, Transaction};
    use embedded_hal_mock::MockError;
    use std::io::ErrorKind;

    #[test]
    fn reads_pin_level() {
        let expectations = [
            Transaction::get(State::High),
            Transaction::get(State::Low),
        ];
        let mut pin = Mock::new(&expectations);

        assert!(pin.read_level());
        assert!(!pin.read_level());

        pin.done();
    }

    #[test]
    fn read_error_is_low() {
        let err = MockError::Io(ErrorKind::NotConnected);
        let expectations = [Transaction::get(State::High).with_error(err)];
        let mut pin = Mock::new(&expectations);

        assert!(!pin.read_level());

        pin.done();
    }
}
