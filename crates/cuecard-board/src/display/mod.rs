//! Framebuffer and panel adapter for the LS027B7DH01 memory LCD.

mod frame;
mod panel;

pub use frame::{Frame, HEIGHT, LINE_BYTES, WIDTH};
pub use panel::{PanelError, SharpPanel, encode_line_address};
