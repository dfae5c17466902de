//! Panel and navigation configuration.
//!
//! One navigation/layout core serves both supported panels; the
//! differences between them live entirely in these presets.

use crate::layout::WrapPolicy;

/// Horizontal anchoring for the slide-number label.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LabelAlign {
    Left,
    #[default]
    Right,
}

/// Text placement parameters for one panel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LayoutConfig {
    /// Hard character budget per display line.
    pub max_note_chars: usize,
    /// Vertical advance per emitted line, in pixels.
    pub line_step: i32,
    /// Top-left origin of the note stack.
    pub note_origin: (i32, i32),
    /// Anchor point of the slide-number label.
    pub label_origin: (i32, i32),
    pub label_align: LabelAlign,
}

impl LayoutConfig {
    /// 2.7" 400x240 Sharp memory LCD (LS027B7DH01).
    pub const fn ls027() -> Self {
        Self {
            max_note_chars: 24,
            line_step: 20,
            note_origin: (6, 28),
            label_origin: (394, 4),
            label_align: LabelAlign::Right,
        }
    }

    /// 1.28" 128x128 Sharp memory LCD (LS013B7DH03).
    pub const fn ls013() -> Self {
        Self {
            max_note_chars: 15,
            line_step: 13,
            note_origin: (2, 16),
            label_origin: (126, 2),
            label_align: LabelAlign::Right,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::ls027()
    }
}

/// Full app configuration handed to the navigation controller.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PresenterConfig {
    /// Slide index committed at boot.
    pub initial_slide: u16,
    pub wrap: WrapPolicy,
    pub layout: LayoutConfig,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            initial_slide: 1,
            wrap: WrapPolicy::default(),
            layout: LayoutConfig::default(),
        }
    }
}
