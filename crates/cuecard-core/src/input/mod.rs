//! Input abstraction layer.

pub mod mock;

/// Logical navigation actions. Which physical button maps to which
/// action is fixed in the board wiring.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    Advance,
    Retreat,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
