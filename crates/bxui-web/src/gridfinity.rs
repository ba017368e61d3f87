#![forbid(unsafe_code)]

//! Gridfinity tray layout page: grid cell counts drive the layout diagram.

use bxui_core::form_number;
use bxui_layout::{render_by_grid, repeat_count, GRIDFINITY_PITCH};
use tracing::debug;

use crate::target::{AlwaysConfirm, Confirm, LayoutTarget, Regenerate};
use crate::FieldError;

/// Form state of the gridfinity tray layout page.
///
/// Inputs are kept as typed so that the form round-trips what the user sees.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct GridfinityTrayForm {
    nx: String,
    ny: String,
    countx: String,
    county: String,
    margin: String,
    layout: LayoutTarget,
}

impl Default for GridfinityTrayForm {
    fn default() -> Self {
        let mut form = Self {
            nx: "3".into(),
            ny: "2".into(),
            countx: "5".into(),
            county: "3".into(),
            margin: "0.75".into(),
            layout: LayoutTarget::new(),
        };
        form.layout.regenerate(form.generate(), &mut AlwaysConfirm);
        form
    }
}

impl GridfinityTrayForm {
    /// Input field names, in form order.
    pub const FIELDS: [&'static str; 5] = ["nx", "ny", "countx", "county", "margin"];

    /// Form with the generator defaults and the initial layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Usable width: `nx · 42 − margin`.
    #[must_use]
    pub fn span_x(&self) -> f64 {
        form_number(&self.nx) * GRIDFINITY_PITCH - form_number(&self.margin)
    }

    /// Usable depth: `ny · 42 − margin`.
    #[must_use]
    pub fn span_y(&self) -> f64 {
        form_number(&self.ny) * GRIDFINITY_PITCH - form_number(&self.margin)
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

    /// Current value of an input field.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        match name {
            "nx" => Some(&self.nx),
            "ny" => Some(&self.ny),
            "countx" => Some(&self.countx),
            "county" => Some(&self.county),
            "margin" => Some(&self.margin),
            _ => None,
        }
    }

    /// Set an input field and regenerate the layout.
    pub fn set_field(
        &mut self,
        name: &str,
        value: &str,
        confirm: &mut dyn Confirm,
    ) -> Result<Regenerate, FieldError> {
        let slot = match name {
            "nx" => &mut self.nx,
            "ny" => &mut self.ny,
            "countx" => &mut self.countx,
            "county" => &mut self.county,
            "margin" => &mut self.margin,
            _ => return Err(FieldError::UnknownField(name.to_string())),
        };
        *slot = value.to_string();
        debug!(field = name, value, "gridfinity input");
        Ok(self.layout.regenerate(self.generate(), confirm))
    }

    /// Field values for form submission.
    #[must_use]
    pub fn fields(&self) -> Vec<(String, String)> {
        Self::FIELDS
            .iter()
            .filter_map(|&name| Some((name.to_string(), self.value(name)?.to_string())))
            .chain([("layout".to_string(), self.layout.text().to_string())])
            .collect()
    }

    fn generate(&self) -> String {
        render_by_grid(
            self.span_x(),
            self.span_y(),
            repeat_count(form_number(&self.nx)),
            repeat_count(form_number(&self.ny)),
            repeat_count(form_number(&self.countx)),
            repeat_count(form_number(&self.county)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::NeverConfirm;
    use bxui_layout::{render_by_sections, GridfinityTray};
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_tray_model() {
        let form = GridfinityTrayForm::new();
        assert_eq!(form.span_x(), 125.25);
        assert_eq!(form.span_y(), 83.25);
        assert_eq!(form.layout().text(), GridfinityTray::default().render());
    }

    #[test]
    fn zero_count_means_one_per_cell() {
        let mut form = GridfinityTrayForm::new();
        form.set_field("margin", "0", &mut NeverConfirm).unwrap();
        form.set_field("countx", "0", &mut NeverConfirm).unwrap();
        form.set_field("county", "", &mut NeverConfirm).unwrap();
        assert_eq!(
            form.layout().text(),
            render_by_sections(&[42.0, 42.0], &[42.0, 42.0, 42.0])
        );
    }

    #[test]
    fn edited_layout_prompts() {
        let mut form = GridfinityTrayForm::new();
        form.edit_layout("mine");
        let mut asked = false;
        let mut confirm = |_: &str| {
            asked = true;
            false
        };
        let outcome = form.set_field("nx", "4", &mut confirm).unwrap();
        assert!(asked);
        assert_eq!(outcome, Regenerate::Skipped);
        assert_eq!(form.layout().text(), "mine");
        assert_eq!(form.value("nx"), Some("4"));
    }

    #[test]
    fn fields_in_form_order() {
        let form = GridfinityTrayForm::new();
        let names: Vec<String> = form.fields().into_iter().map(|(k, _)| k).collect();
        assert_eq!(names, ["nx", "ny", "countx", "county", "margin", "layout"]);
    }
}
