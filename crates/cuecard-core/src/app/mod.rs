//! Navigation state machine: owns the committed slide index and turns
//! button events into render passes.

use log::{debug, warn};

use crate::{
    config::PresenterConfig,
    deck::Deck,
    input::{InputEvent, InputProvider},
    layout::lay_out_slide,
    render::{RenderPlan, Screen, TextLine},
    text_policy::slide_number_label,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// The sole owner and mutator of the navigation state. Runs for the
/// process lifetime; there is no terminal state.
pub struct PresenterApp<'d, IN>
where
    IN: InputProvider,
{
    deck: &'d Deck,
    input: IN,
    config: PresenterConfig,
    current_index: u16,
    pending_redraw: bool,
}

include!("view.rs");
include!("input.rs");
include!("navigation.rs");

#[cfg(test)]
mod tests;
