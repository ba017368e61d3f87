#![forbid(unsafe_code)]

//! Tray layout page: two section lists drive the layout diagram.

use bxui_layout::{GridSpec, SectionError, TrayLayout};
use tracing::{debug, info};

use crate::target::{AlwaysConfirm, Confirm, LayoutTarget, Regenerate};
use crate::FieldError;

/// Default section list for both axes.
pub const DEFAULT_SECTIONS: &str = "50*3";

/// Form state of the tray layout page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct TrayLayoutForm {
    sx: String,
    sy: String,
    strict: bool,
    layout: LayoutTarget,
}

impl Default for TrayLayoutForm {
    fn default() -> Self {
        Self::new(DEFAULT_SECTIONS, DEFAULT_SECTIONS)
    }
}

impl TrayLayoutForm {
    /// Input field names, in form order.
    pub const FIELDS: [&'static str; 2] = ["sx", "sy"];

    /// Create the form and generate the initial layout.
    #[must_use]
    pub fn new(sx: impl Into<String>, sy: impl Into<String>) -> Self {
        let mut form = Self {
            sx: sx.into(),
            sy: sy.into(),
            strict: false,
            layout: LayoutTarget::new(),
        };
        let generated = GridSpec::from_sections(&form.sx, &form.sy).render();
        form.layout.regenerate(generated, &mut AlwaysConfirm);
        info!(sx = %form.sx, sy = %form.sy, "tray layout page ready");
        form
    }

    /// Reject malformed section lists instead of truncating them.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Column section list.
    #[must_use]
    pub fn sx(&self) -> &str {
        &self.sx
    }

    /// Row section list.
    #[must_use]
    pub fn sy(&self) -> &str {
        &self.sy
    }

    /// The layout surface.
    #[must_use]
    pub const fn layout(&self) -> &LayoutTarget {
        &self.layout
    }

    /// The user typed into the layout surface.
    pub fn edit_layout(&mut self, text: impl Into<String>) {
        self.layout.user_edit(text);
    }

    /// Read the (possibly edited) layout back into walls and floors.
    pub fn tray(&self) -> Result<TrayLayout, FieldError> {
        Ok(TrayLayout::parse(self.layout.text())?)
    }

    /// The grid the current inputs describe.
    pub fn grid(&self) -> Result<GridSpec, SectionError> {
        if self.strict {
            GridSpec::from_sections_strict(&self.sx, &self.sy)
        } else {
            Ok(GridSpec::from_sections(&self.sx, &self.sy))
        }
    }

    /// Set an input field and regenerate the layout.
    ///
    /// In strict mode a malformed list is stored but leaves the layout as it
    /// was.
    pub fn set_field(
        &mut self,
        name: &str,
        value: &str,
        confirm: &mut dyn Confirm,
    ) -> Result<Regenerate, FieldError> {
        match name {
            "sx" => self.sx = value.to_string(),
            "sy" => self.sy = value.to_string(),
            _ => return Err(FieldError::UnknownField(name.to_string())),
        }
        debug!(field = name, value, "tray layout input");
        let grid = self.grid()?;
        Ok(self.layout.regenerate(grid.render(), confirm))
    }

    /// Field values for form submission.
    #[must_use]
    pub fn fields(&self) -> Vec<(String, String)> {
        vec![
            ("sx".to_string(), self.sx.clone()),
            ("sy".to_string(), self.sy.clone()),
            ("layout".to_string(), self.layout.text().to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::NeverConfirm;
    use bxui_layout::render_layout;
    use pretty_assertions::assert_eq;

    #[test]
    fn initial_layout_is_generated() {
        let form = TrayLayoutForm::default();
        assert_eq!(form.layout().text(), render_layout("50*3", "50*3"));
        assert!(!form.layout().is_dirty());
    }

    #[test]
    fn input_regenerates() {
        let mut form = TrayLayoutForm::default();
        let outcome = form.set_field("sx", "20:30", &mut NeverConfirm).unwrap();
        assert_eq!(outcome, Regenerate::Updated);
        assert_eq!(form.layout().text(), render_layout("20:30", "50*3"));
    }

    #[test]
    fn manual_edit_survives_declined_prompt() {
        let mut form = TrayLayoutForm::default();
        form.edit_layout("custom");
        let outcome = form.set_field("sy", "10", &mut NeverConfirm).unwrap();
        assert_eq!(outcome, Regenerate::Skipped);
        assert_eq!(form.layout().text(), "custom");
        assert_eq!(form.sy(), "10");
    }

    #[test]
    fn strict_mode_rejects_truncation() {
        let mut form = TrayLayoutForm::default().strict(true);
        let before = form.layout().text().to_string();
        let err = form.set_field("sx", "10/2/3", &mut NeverConfirm).unwrap_err();
        assert!(matches!(err, FieldError::Sections(_)));
        assert_eq!(form.layout().text(), before);
    }

    #[test]
    fn unknown_field() {
        let mut form = TrayLayoutForm::default();
        assert_eq!(
            form.set_field("sz", "1", &mut NeverConfirm),
            Err(FieldError::UnknownField("sz".into()))
        );
    }

    #[test]
    fn generated_layout_reads_back() {
        let form = TrayLayoutForm::new("20:30", "15");
        let tray = form.tray().unwrap();
        assert_eq!(tray.widths, vec![20.0, 30.0]);
        assert_eq!(tray.heights, vec![15.0]);
    }
}
