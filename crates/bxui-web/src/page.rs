#![forbid(unsafe_code)]

//! Page routing: the last path segment picks the page controller.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, info};

use crate::gridfinity::GridfinityTrayForm;
use crate::photo_frame::PhotoFrameForm;
use crate::target::{Confirm, LayoutTarget};
use crate::tray::TrayLayoutForm;
use crate::FieldError;

/// Pages with interactive form behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    TrayLayout,
    GridfinityTrayLayout,
    PhotoFrame,
}

impl PageKind {
    /// Route table, keyed by page name.
    pub const ROUTES: [(&'static str, Self); 3] = [
        ("TrayLayout", Self::TrayLayout),
        ("GridfinityTrayLayout", Self::GridfinityTrayLayout),
        ("PhotoFrame", Self::PhotoFrame),
    ];

    /// Page name as it appears in the URL.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TrayLayout => "TrayLayout",
            Self::GridfinityTrayLayout => "GridfinityTrayLayout",
            Self::PhotoFrame => "PhotoFrame",
        }
    }

    /// Build the page controller with its initial state.
    #[must_use]
    pub fn init(self) -> Page {
        info!(page = self.name(), "initialising page");
        match self {
            Self::TrayLayout => Page::TrayLayout(TrayLayoutForm::default()),
            Self::GridfinityTrayLayout => Page::GridfinityTrayLayout(GridfinityTrayForm::new()),
            Self::PhotoFrame => Page::PhotoFrame(PhotoFrameForm::new()),
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown page name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPage(pub String);

impl fmt::Display for UnknownPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no interactive page named {:?}", self.0)
    }
}

impl std::error::Error for UnknownPage {}

impl FromStr for PageKind {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ROUTES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|&(_, kind)| kind)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

/// Look a page up by URL path. Query and fragment are ignored; only the text
/// after the last `/` counts.
///
/// ```
/// use bxui_web::{resolve_page, PageKind};
///
/// assert_eq!(resolve_page("/boxes/PhotoFrame"), Some(PageKind::PhotoFrame));
/// assert_eq!(resolve_page("/boxes/PhotoFrame/"), None);
/// ```
#[must_use]
pub fn resolve_page(path: &str) -> Option<PageKind> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segment = path.rsplit('/').next().unwrap_or_default();
    let kind = segment.parse().ok();
    debug!(segment, ?kind, "resolved page");
    kind
}

/// A live page controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    TrayLayout(TrayLayoutForm),
    GridfinityTrayLayout(GridfinityTrayForm),
    PhotoFrame(PhotoFrameForm),
}

impl Page {
    /// Which page this is.
    #[must_use]
    pub const fn kind(&self) -> PageKind {
        match self {
            Self::TrayLayout(_) => PageKind::TrayLayout,
            Self::GridfinityTrayLayout(_) => PageKind::GridfinityTrayLayout,
            Self::PhotoFrame(_) => PageKind::PhotoFrame,
        }
    }

    /// Route a field edit to the page's handler.
    pub fn set_field(
        &mut self,
        name: &str,
        value: &str,
        confirm: &mut dyn Confirm,
    ) -> Result<(), FieldError> {
        match self {
            Self::TrayLayout(form) if name == "layout" => form.edit_layout(value),
            Self::GridfinityTrayLayout(form) if name == "layout" => form.edit_layout(value),
            Self::TrayLayout(form) => {
                form.set_field(name, value, confirm)?;
            }
            Self::GridfinityTrayLayout(form) => {
                form.set_field(name, value, confirm)?;
            }
            Self::PhotoFrame(form) => form.set_field(name, value)?,
        }
        Ok(())
    }

    /// Layout surface, on the layout pages.
    #[must_use]
    pub fn layout(&self) -> Option<&LayoutTarget> {
        match self {
            Self::TrayLayout(form) => Some(form.layout()),
            Self::GridfinityTrayLayout(form) => Some(form.layout()),
            Self::PhotoFrame(_) => None,
        }
    }

    /// Field values for form submission.
    #[must_use]
    pub fn fields(&self) -> Vec<(String, String)> {
        match self {
            Self::TrayLayout(form) => form.fields(),
            Self::GridfinityTrayLayout(form) => form.fields(),
            Self::PhotoFrame(form) => form.fields(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::NeverConfirm;

    #[test]
    fn resolves_last_segment() {
        assert_eq!(resolve_page("TrayLayout"), Some(PageKind::TrayLayout));
        assert_eq!(
            resolve_page("https://example.org/app/GridfinityTrayLayout?x=1#top"),
            Some(PageKind::GridfinityTrayLayout)
        );
        assert_eq!(resolve_page("/app/ABox"), None);
        assert_eq!(resolve_page("/app/traylayout"), None);
        assert_eq!(resolve_page(""), None);
    }

    #[test]
    fn routes_round_trip_names() {
        for (name, kind) in PageKind::ROUTES {
            assert_eq!(kind.name(), name);
            assert_eq!(name.parse::<PageKind>(), Ok(kind));
            assert_eq!(kind.init().kind(), kind);
        }
    }

    #[test]
    fn layout_edits_mark_dirty() {
        let mut page = PageKind::TrayLayout.init();
        page.set_field("layout", "mine", &mut NeverConfirm).unwrap();
        assert!(page.layout().unwrap().is_dirty());
        page.set_field("sx", "10", &mut NeverConfirm).unwrap();
        assert_eq!(page.layout().unwrap().text(), "mine");
    }

    #[test]
    fn photo_frame_has_no_layout() {
        let mut page = PageKind::PhotoFrame.init();
        assert!(page.layout().is_none());
        page.set_field("glass_w", "200", &mut NeverConfirm).unwrap();
        assert!(page
            .fields()
            .contains(&("glass_w".to_string(), "200".to_string())));
    }
}
