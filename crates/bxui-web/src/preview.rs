#![forbid(unsafe_code)]

//! Live preview image of the generator output.
//!
//! The preview is an image whose source is the generator URL with the current
//! form fields, `format=svg` and `render=1`. What the server renders is opaque
//! here.

use tracing::trace;
use url::form_urlencoded;

/// Build the preview URL for a form action and its fields.
///
/// `format` is forced to `svg`: an existing `format` field is replaced in
/// place (later duplicates dropped), otherwise it is appended.
///
/// ```
/// use bxui_web::preview_url;
///
/// let url = preview_url("TrayLayout", &[("sx", "50*3"), ("format", "dxf")]);
/// assert_eq!(url, "TrayLayout?sx=50*3&format=svg&render=1");
/// ```
#[must_use]
pub fn preview_url<K, V>(action: &str, fields: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut query = form_urlencoded::Serializer::new(String::new());
    let mut format_set = false;
    for (key, value) in fields {
        let key = key.as_ref();
        if key == "format" {
            if !format_set {
                query.append_pair("format", "svg");
                format_set = true;
            }
            continue;
        }
        query.append_pair(key, value.as_ref());
    }
    if !format_set {
        query.append_pair("format", "svg");
    }
    format!("{action}?{}&render=1", query.finish())
}

/// Preview image state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preview {
    visible: bool,
    src: Option<String>,
}

impl Preview {
    /// A preview shown or hidden from the start.
    #[must_use]
    pub fn new(visible: bool) -> Self {
        Self { visible, src: None }
    }

    /// Whether the preview is shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current image source.
    #[must_use]
    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    /// Point the image at the current form values. A hidden preview is left
    /// alone and yields `None`.
    pub fn refresh<K, V>(&mut self, action: &str, fields: &[(K, V)]) -> Option<String>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        if !self.visible {
            return None;
        }
        let url = preview_url(action, fields);
        trace!(%url, "preview refreshed");
        self.src = Some(url.clone());
        Some(url)
    }

    /// The preview checkbox changed. Showing it refreshes immediately.
    pub fn set_visible<K, V>(
        &mut self,
        visible: bool,
        action: &str,
        fields: &[(K, V)],
    ) -> Option<String>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.visible = visible;
        self.refresh(action, fields)
    }
}
