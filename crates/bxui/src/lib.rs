#![forbid(unsafe_code)]

//! bxui public facade crate.
//!
//! Re-exports the layout diagram renderer, the section parser, the golden
//! matting solver and (with the `web` feature) the page state of the generator
//! pages, plus a prelude for day-to-day use.
//!
//! ```
//! use bxui::prelude::*;
//!
//! let diagram = render_layout("20:30", "15");
//! assert!(diagram.starts_with(" ,> 20.00mm\n"));
//!
//! let matting = golden_matting_width(96.0, 146.0)?;
//! assert!(matting > 0.0);
//! # Ok::<(), bxui::Error>(())
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use bxui_core::{format_fixed, form_number, parse_float, round_to, Size};

// --- Layout re-exports -----------------------------------------------------

pub use bxui_layout::{
    effective_splits, format_length, parse_sections, parse_sections_strict, render_by_grid,
    render_by_sections, render_layout, DiagramError, GridSpec, GridfinityTray, SectionError,
    SectionSpec, TrayLayout, GRIDFINITY_PITCH,
};

// --- Matting re-exports ----------------------------------------------------

pub use bxui_matting::{
    golden_matting_for_photo, golden_matting_width, mat_hole, FrameDimensions, FrameParams,
    MattingError, MattingSource, PHI,
};

// --- Web re-exports --------------------------------------------------------

#[cfg(feature = "web")]
pub use bxui_web::{
    preview_url, resolve_page, Activation, AlwaysConfirm, Catalog, Confirm, FieldError,
    GridfinityTrayForm, LayoutTarget, NeverConfirm, Page, PageKind, PhotoField, PhotoFrameForm,
    Preview, Regenerate, SearchItem, TrayLayoutForm, UnknownPage,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for bxui.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed section list.
    Sections(SectionError),
    /// Layout diagram could not be read.
    Diagram(DiagramError),
    /// Matting or frame calculation failed.
    Matting(MattingError),
    /// Form field update failed.
    #[cfg(feature = "web")]
    Field(FieldError),
    /// No such page.
    #[cfg(feature = "web")]
    Page(UnknownPage),
    /// Bad command-line or host input.
    Usage(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sections(err) => write!(f, "{err}"),
            Self::Diagram(err) => write!(f, "{err}"),
            Self::Matting(err) => write!(f, "{err}"),
            #[cfg(feature = "web")]
            Self::Field(err) => write!(f, "{err}"),
            #[cfg(feature = "web")]
            Self::Page(err) => write!(f, "{err}"),
            Self::Usage(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<SectionError> for Error {
    fn from(err: SectionError) -> Self {
        Self::Sections(err)
    }
}

impl From<DiagramError> for Error {
    fn from(err: DiagramError) -> Self {
        Self::Diagram(err)
    }
}

impl From<MattingError> for Error {
    fn from(err: MattingError) -> Self {
        Self::Matting(err)
    }
}

#[cfg(feature = "web")]
impl From<FieldError> for Error {
    fn from(err: FieldError) -> Self {
        Self::Field(err)
    }
}

#[cfg(feature = "web")]
impl From<UnknownPage> for Error {
    fn from(err: UnknownPage) -> Self {
        Self::Page(err)
    }
}

/// Standard result type for bxui APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        golden_matting_width, parse_sections, render_by_grid, render_by_sections, render_layout,
        Error, FrameDimensions, FrameParams, GridSpec, Result, SectionSpec, Size, TrayLayout,
    };

    #[cfg(feature = "web")]
    pub use crate::{Confirm, LayoutTarget, Page, PageKind, Regenerate};

    pub use crate::{core, layout, matting};

    #[cfg(feature = "web")]
    pub use crate::web;
}

pub use bxui_core as core;
pub use bxui_layout as layout;
pub use bxui_matting as matting;
#[cfg(feature = "web")]
pub use bxui_web as web;
