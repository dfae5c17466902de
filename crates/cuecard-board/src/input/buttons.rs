use embedded_hal::digital::InputPin;

use cuecard_core::input::{InputEvent, InputProvider};

#[derive(Debug, Clone, Copy)]
pub struct ButtonsConfig {
    active_low: bool,
    debounce_polls: u8,
}

impl Default for ButtonsConfig {
    fn default() -> Self {
        Self {
            active_low: true,
            debounce_polls: 3,
        }
    }
}

impl ButtonsConfig {
    pub const fn with_active_low(mut self, active_low: bool) -> Self {
        self.active_low = active_low;
        self
    }

    pub const fn with_debounce_polls(mut self, debounce_polls: u8) -> Self {
        self.debounce_polls = debounce_polls;
        self
    }
}

#[derive(Debug)]
pub enum ButtonPairError<AdvErr, RetErr> {
    Advance(AdvErr),
    Retreat(RetErr),
}

type PairResult<AdvErr, RetErr, T> = Result<T, ButtonPairError<AdvErr, RetErr>>;

/// Per-button debounce state: a level change must hold for the
/// configured number of polls before a press edge is reported.
#[derive(Debug, Clone, Copy)]
struct Debounce {
    raw: bool,
    stable: bool,
    stable_count: u8,
}

impl Debounce {
    const fn new(pressed: bool) -> Self {
        Self {
            raw: pressed,
            stable: pressed,
            stable_count: 0,
        }
    }

    fn update(&mut self, pressed: bool, threshold: u8) -> bool {
        if pressed == self.raw {
            self.stable_count = self.stable_count.saturating_add(1);
        } else {
            self.raw = pressed;
            self.stable_count = 0;
        }

        if self.stable_count >= threshold.max(1) && self.stable != self.raw {
            self.stable = self.raw;
            return self.stable;
        }

        false
    }
}

/// The two navigation push buttons. Which physical button advances
/// and which retreats is fixed by the wiring at construction.
#[derive(Debug)]
pub struct ButtonPair<ADV, RET> {
    advance: ADV,
    retreat: RET,
    config: ButtonsConfig,
    advance_state: Debounce,
    retreat_state: Debounce,
    pending_event: Option<InputEvent>,
}

impl<ADV, RET> ButtonPair<ADV, RET>
where
    ADV: InputPin,
    RET: InputPin,
{
    pub fn new(
        mut advance: ADV,
        mut retreat: RET,
        config: ButtonsConfig,
    ) -> PairResult<ADV::Error, RET::Error, Self> {
        let advance_high = advance.is_high().map_err(ButtonPairError::Advance)?;
        let retreat_high = retreat.is_high().map_err(ButtonPairError::Retreat)?;

        Ok(Self {
            advance,
            retreat,
            config,
            advance_state: Debounce::new(pressed_from_level(advance_high, config.active_low)),
            retreat_state: Debounce::new(pressed_from_level(retreat_high, config.active_low)),
            pending_event: None,
        })
    }
}

impl<ADV, RET> InputProvider for ButtonPair<ADV, RET>
where
    ADV: InputPin,
    RET: InputPin,
{
    type Error = ButtonPairError<ADV::Error, RET::Error>;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        if let Some(event) = self.pending_event.take() {
            return Ok(Some(event));
        }

        let advance_high = self.advance.is_high().map_err(ButtonPairError::Advance)?;
        let retreat_high = self.retreat.is_high().map_err(ButtonPairError::Retreat)?;

        let advance_edge = self.advance_state.update(
            pressed_from_level(advance_high, self.config.active_low),
            self.config.debounce_polls,
        );
        let retreat_edge = self.retreat_state.update(
            pressed_from_level(retreat_high, self.config.active_low),
            self.config.debounce_polls,
        );

        match (advance_edge, retreat_edge) {
            (true, true) => {
                self.pending_event = Some(InputEvent::Retreat);
                Ok(Some(InputEvent::Advance))
            }
            (true, false) => Ok(Some(InputEvent::Advance)),
            (false, true) => Ok(Some(InputEvent::Retreat)),
            (false, false) => Ok(None),
        }
    }
}

#[inline]
fn pressed_from_level(level_high: bool, active_low: bool) -> bool {
    if active_low { !level_high } else { level_high }
}
