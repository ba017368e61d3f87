#![forbid(unsafe_code)]

//! `bxui-web` holds the interactive state of the generator pages and the
//! documentation catalog.
//!
//! Design goals:
//! - **Host-driven**: the embedding page (or a test, or the CLI) pushes field
//!   edits in and reads field values out. Nothing here touches a DOM.
//! - **Explicit state**: each page owns one form struct; handlers take it by
//!   `&mut`. There are no globals.
//! - **Synchronous prompts**: overwriting a hand-edited layout asks through a
//!   [`Confirm`] the host supplies.
//!
//! Pages are found by URL with [`resolve_page`] and built with
//! [`PageKind::init`], which also performs the initial generation.

pub mod catalog;
pub mod gridfinity;
pub mod page;
pub mod photo_frame;
pub mod preview;
#[cfg(feature = "state-persistence")]
pub mod snapshot;
pub mod target;
pub mod tray;

use std::fmt;

use bxui_layout::{DiagramError, SectionError};

pub use catalog::{Activation, Catalog, SearchItem};
pub use gridfinity::GridfinityTrayForm;
pub use page::{resolve_page, Page, PageKind, UnknownPage};
pub use photo_frame::{PhotoField, PhotoFrameForm};
pub use preview::{preview_url, Preview};
#[cfg(feature = "state-persistence")]
pub use snapshot::{Snapshot, SnapshotError};
pub use target::{
    AlwaysConfirm, Confirm, LayoutTarget, NeverConfirm, Regenerate, REGENERATE_PROMPT,
};
pub use tray::TrayLayoutForm;

/// Error from a form field update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The page has no field with this name.
    UnknownField(String),
    /// Section list rejected in strict mode.
    Sections(SectionError),
    /// The layout text could not be read back.
    Diagram(DiagramError),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownField(name) => write!(f, "unknown field: {name}"),
            Self::Sections(e) => write!(f, "{e}"),
            Self::Diagram(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for FieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownField(_) => None,
            Self::Sections(e) => Some(e),
            Self::Diagram(e) => Some(e),
        }
    }
}

impl From<SectionError> for FieldError {
    fn from(e: SectionError) -> Self {
        Self::Sections(e)
    }
}

impl From<DiagramError> for FieldError {
    fn from(e: DiagramError) -> Self {
        Self::Diagram(e)
    }
}
