//! Physical input sources.

mod buttons;

pub use buttons::{ButtonPair, ButtonPairError, ButtonsConfig};
