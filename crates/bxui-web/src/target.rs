#![forbid(unsafe_code)]

//! The editable layout surface and its dirty flag.
//!
//! ```text
//!            user_edit
//!   clean ─────────────▶ dirty
//!     ▲                    │ regenerate + confirm(yes)
//!     └────────────────────┘
//! ```
//!
//! A clean target is overwritten on every regeneration. A dirty target is only
//! overwritten after the [`Confirm`] gate says yes; a "no" leaves the text and
//! the flag untouched.

use tracing::debug;

/// Question asked before overwriting a manually edited layout.
pub const REGENERATE_PROMPT: &str =
    "You have manually updated the Layout.  Do you wish to regenerate it?";

/// A synchronous yes/no prompt.
pub trait Confirm {
    /// Ask `message`; `true` means go ahead.
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// Confirm that always answers yes.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        true
    }
}

/// Confirm that always answers no.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverConfirm;

impl Confirm for NeverConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        false
    }
}

/// Outcome of [`LayoutTarget::regenerate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regenerate {
    /// The text was replaced with the generated diagram.
    Updated,
    /// The user kept their manual edits.
    Skipped,
}

/// Layout text plus its manual-edit flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct LayoutTarget {
    text: String,
    dirty: bool,
}

impl LayoutTarget {
    /// Empty, clean target.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The user edited the text since the last regeneration.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// A direct edit by the user. Marks the target dirty.
    pub fn user_edit(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.dirty = true;
    }

    /// Replace the text with `generated`, asking first if the user edited it.
    pub fn regenerate(&mut self, generated: String, confirm: &mut dyn Confirm) -> Regenerate {
        if self.dirty {
            if !confirm.confirm(REGENERATE_PROMPT) {
                debug!("kept manually edited layout");
                return Regenerate::Skipped;
            }
            self.dirty = false;
        }
        self.text = generated;
        Regenerate::Updated
    }
}
