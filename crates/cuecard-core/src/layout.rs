//! Note wrapping and vertical layout for one render pass.
//!
//! Wrapping is a hard character-count split, not word wrap. The
//! default policy splits an overlong note into exactly two fragments
//! (the tail may still overflow the line budget); [`WrapPolicy::FullWrap`]
//! keeps splitting until every fragment fits.

use heapless::Vec;

use crate::{
    config::LayoutConfig,
    deck::Slide,
    render::{RenderPlan, TextLine},
};

/// Fragment cap per note under [`WrapPolicy::FullWrap`].
pub const MAX_NOTE_FRAGMENTS: usize = 4;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum WrapPolicy {
    /// One split at the character budget, two fragments total, even
    /// when the tail still overflows.
    #[default]
    SplitOnce,
    /// Repeated splitting; residue past the fragment cap stays on the
    /// final fragment.
    FullWrap,
}

/// Splits after exactly `max_chars` characters (not bytes). The tail
/// is empty when the text already fits.
pub fn split_at_chars(text: &str, max_chars: usize) -> (&str, &str) {
    match text.char_indices().nth(max_chars) {
        Some((split, _)) => text.split_at(split),
        None => (text, ""),
    }
}

/// Breaks one note into display-line fragments.
pub fn wrap(note: &str, max_chars: usize, policy: WrapPolicy) -> Vec<&str, MAX_NOTE_FRAGMENTS> {
    let max_chars = max_chars.max(1);
    let mut fragments = Vec::new();

    match policy {
        WrapPolicy::SplitOnce => {
            let (head, tail) = split_at_chars(note, max_chars);
            let _ = fragments.push(head);
            if !tail.is_empty() {
                let _ = fragments.push(tail);
            }
        }
        WrapPolicy::FullWrap => {
            let mut rest = note;
            loop {
                if fragments.len() == MAX_NOTE_FRAGMENTS - 1 {
                    let _ = fragments.push(rest);
                    break;
                }
                let (head, tail) = split_at_chars(rest, max_chars);
                let _ = fragments.push(head);
                if tail.is_empty() {
                    break;
                }
                rest = tail;
            }
        }
    }

    fragments
}

/// Stacks every note of `slide` into `plan`, advancing a local `y`
/// cursor one `line_step` per emitted fragment. A split note therefore
/// consumes one step per fragment. The cursor never outlives the pass.
pub fn lay_out_slide<'a>(
    slide: &'a Slide,
    config: &LayoutConfig,
    policy: WrapPolicy,
    plan: &mut RenderPlan<'a>,
) {
    let (x, mut y) = config.note_origin;

    for note in &slide.notes {
        for fragment in wrap(note, config.max_note_chars, policy) {
            if plan
                .lines
                .push(TextLine {
                    text: fragment,
                    x,
                    y,
                })
                .is_err()
            {
                return;
            }
            y += config.line_step;
        }
    }
}
