#![forbid(unsafe_code)]

//! Photo frame page: keeps the matting, glass and golden-ratio inputs
//! consistent.
//!
//! The visible matting can come from exactly one of three sources, and the
//! handlers keep the other two switched off:
//!
//! | Event                         | Effect |
//! |-------------------------------|--------|
//! | matting input                 | remember matting, golden off, glass zeroed if matting is non-zero |
//! | glass input                   | remember glass, golden off, matting zeroed if glass is non-zero |
//! | golden on, photo/overlap edit | matting = solved width (0 on error), glass zeroed |
//! | golden off                    | restore remembered glass, else remembered matting |

use bxui_core::{form_number, parse_float, Size};
use bxui_matting::{golden_matting_for_photo, FrameDimensions, FrameParams, MattingError};
use tracing::{debug, warn};

use crate::FieldError;

/// Input fields of the photo frame page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhotoField {
    X,
    Y,
    MattingOverlap,
    MattingW,
    MattingH,
    GlassW,
    GlassH,
}

impl PhotoField {
    /// All fields, in form order.
    pub const ALL: [Self; 7] = [
        Self::X,
        Self::Y,
        Self::MattingOverlap,
        Self::MattingW,
        Self::MattingH,
        Self::GlassW,
        Self::GlassH,
    ];

    /// Form field name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::MattingOverlap => "matting_overlap",
            Self::MattingW => "matting_w",
            Self::MattingH => "matting_h",
            Self::GlassW => "glass_w",
            Self::GlassH => "glass_h",
        }
    }

    /// Look a field up by form name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

/// Format a number the way a number input shows it.
///
/// Non-numbers become empty, as a number input refuses them.
fn number_text(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

fn is_set(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}

/// Form state of the photo frame page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct PhotoFrameForm {
    x: String,
    y: String,
    matting_overlap: String,
    golden_mat: bool,
    matting_w: String,
    matting_h: String,
    glass_w: String,
    glass_h: String,
    user_matting: Option<(String, String)>,
    user_glass: Option<(String, String)>,
}

impl Default for PhotoFrameForm {
    fn default() -> Self {
        let defaults = FrameParams::default();
        let mut form = Self {
            x: number_text(defaults.x),
            y: number_text(defaults.y),
            matting_overlap: number_text(defaults.matting_overlap),
            golden_mat: defaults.golden_mat,
            matting_w: number_text(defaults.matting_w),
            matting_h: number_text(defaults.matting_h),
            glass_w: number_text(defaults.glass_w),
            glass_h: number_text(defaults.glass_h),
            user_matting: None,
            user_glass: None,
        };
        form.golden_changed();
        form
    }
}

impl PhotoFrameForm {
    /// Form with the generator defaults, matting already solved.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of a field.
    #[must_use]
    pub fn value(&self, field: PhotoField) -> &str {
        match field {
            PhotoField::X => &self.x,
            PhotoField::Y => &self.y,
            PhotoField::MattingOverlap => &self.matting_overlap,
            PhotoField::MattingW => &self.matting_w,
            PhotoField::MattingH => &self.matting_h,
            PhotoField::GlassW => &self.glass_w,
            PhotoField::GlassH => &self.glass_h,
        }
    }

    /// Golden matting checkbox.
    #[must_use]
    pub const fn golden_mat(&self) -> bool {
        self.golden_mat
    }

    fn slot(&mut self, field: PhotoField) -> &mut String {
        match field {
            PhotoField::X => &mut self.x,
            PhotoField::Y => &mut self.y,
            PhotoField::MattingOverlap => &mut self.matting_overlap,
            PhotoField::MattingW => &mut self.matting_w,
            PhotoField::MattingH => &mut self.matting_h,
            PhotoField::GlassW => &mut self.glass_w,
            PhotoField::GlassH => &mut self.glass_h,
        }
    }

    /// The user typed into a field.
    pub fn input(&mut self, field: PhotoField, value: &str) {
        *self.slot(field) = value.to_string();
        debug!(field = field.name(), value, "photo frame input");
        match field {
            PhotoField::MattingW | PhotoField::MattingH => self.matting_changed(),
            PhotoField::GlassW | PhotoField::GlassH => self.glass_changed(),
            PhotoField::X | PhotoField::Y | PhotoField::MattingOverlap => self.golden_changed(),
        }
    }

    /// The user toggled the golden matting checkbox.
    pub fn set_golden_mat(&mut self, golden_mat: bool) {
        self.golden_mat = golden_mat;
        self.golden_changed();
    }

    /// Set a field by form name. `golden_mat` takes `on`/`true`/`1` for
    /// checked.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), FieldError> {
        if name == "golden_mat" {
            self.set_golden_mat(matches!(value, "on" | "true" | "1"));
            return Ok(());
        }
        let field =
            PhotoField::from_name(name).ok_or_else(|| FieldError::UnknownField(name.to_string()))?;
        self.input(field, value);
        Ok(())
    }

    fn matting_changed(&mut self) {
        self.user_matting = Some((self.matting_w.clone(), self.matting_h.clone()));
        self.golden_mat = false;
        if is_set(form_number(&self.matting_w)) || is_set(form_number(&self.matting_h)) {
            self.set_glass(0.0, 0.0);
        }
    }

    fn glass_changed(&mut self) {
        let glass_w = parse_float(&self.glass_w);
        let glass_h = parse_float(&self.glass_h);
        self.user_glass = Some((number_text(glass_w), number_text(glass_h)));
        self.golden_mat = false;
        if is_set(glass_w) || is_set(glass_h) {
            self.set_matting(0.0, 0.0);
        }
    }

    fn golden_changed(&mut self) {
        if self.golden_mat {
            let width = match self.golden_matting_width() {
                Ok(width) => width,
                Err(err) => {
                    warn!(%err, "golden matting unavailable");
                    0.0
                }
            };
            self.set_matting(width, width);
            self.set_glass(0.0, 0.0);
        } else if let Some((glass_w, glass_h)) = self.user_glass.clone() {
            self.glass_w = glass_w;
            self.glass_h = glass_h;
            self.set_matting(0.0, 0.0);
        } else if let Some((matting_w, matting_h)) = self.user_matting.clone() {
            self.matting_w = matting_w;
            self.matting_h = matting_h;
            self.set_glass(0.0, 0.0);
        }
    }

    fn set_matting(&mut self, width: f64, height: f64) {
        self.matting_w = number_text(width);
        self.matting_h = number_text(height);
    }

    fn set_glass(&mut self, width: f64, height: f64) {
        self.glass_w = number_text(width);
        self.glass_h = number_text(height);
    }

    /// Golden matting for the current photo and overlap, at display precision.
    pub fn golden_matting_width(&self) -> Result<f64, MattingError> {
        let photo = Size::new(parse_float(&self.x), parse_float(&self.y));
        golden_matting_for_photo(photo, parse_float(&self.matting_overlap))
    }

    /// Frame parameters from the current inputs. Other parameters keep their
    /// defaults.
    #[must_use]
    pub fn params(&self) -> FrameParams {
        let number = |text: &str| {
            let value = form_number(text);
            if value.is_nan() { 0.0 } else { value }
        };
        FrameParams {
            x: number(&self.x),
            y: number(&self.y),
            golden_mat: self.golden_mat,
            matting_w: number(&self.matting_w),
            matting_h: number(&self.matting_h),
            matting_overlap: number(&self.matting_overlap),
            glass_w: number(&self.glass_w),
            glass_h: number(&self.glass_h),
            ..FrameParams::default()
        }
    }

    /// Validated frame dimensions for the current inputs.
    ///
    /// Golden matting is solved unrounded here, so the displayed matting
    /// widths are not re-checked against it.
    pub fn dimensions(&self) -> Result<FrameDimensions, MattingError> {
        let mut params = self.params();
        if params.golden_mat {
            params.matting_w = 0.0;
            params.matting_h = 0.0;
        }
        FrameDimensions::new(params)
    }

    /// Field values for form submission. The checkbox is only present when
    /// checked.
    #[must_use]
    pub fn fields(&self) -> Vec<(String, String)> {
        let mut fields: Vec<(String, String)> = PhotoField::ALL
            .into_iter()
            .map(|field| (field.name().to_string(), self.value(field).to_string()))
            .collect();
        if self.golden_mat {
            fields.insert(3, ("golden_mat".to_string(), "on".to_string()));
        }
        fields
    }
}
