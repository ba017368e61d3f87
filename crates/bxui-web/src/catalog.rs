#![forbid(unsafe_code)]

//! Documentation catalog page: collapsible generator groups, a search box and
//! a thumbnail panel.
//!
//! Sections start expanded; [`Catalog::init`] collapses the first `num_hide`
//! of them (all of them for `None`). Searching expands everything and shows
//! only the items whose name or text contains the query.

use tracing::{debug, warn};

/// Prefix of the element id of a searchable item.
pub const SEARCH_ID_PREFIX: &str = "search_id_";

/// A collapsible group of generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    id: String,
    expanded: bool,
}

impl Section {
    /// Section id; its header is `h-<id>`.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the body is shown.
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// CSS display value of the body.
    #[must_use]
    pub const fn display(&self) -> &'static str {
        if self.expanded { "block" } else { "none" }
    }

    /// `aria-expanded` value of the header.
    #[must_use]
    pub const fn aria_expanded(&self) -> &'static str {
        if self.expanded { "true" } else { "false" }
    }
}

/// A searchable generator entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchItem {
    name: String,
    text: String,
    thumbnail: Option<String>,
    visible: bool,
}

impl SearchItem {
    /// Item with its generator name and visible text.
    #[must_use]
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            thumbnail: None,
            visible: true,
        }
    }

    /// Attach a thumbnail image link.
    #[must_use]
    pub fn with_thumbnail(mut self, src: impl Into<String>) -> Self {
        self.thumbnail = Some(src.into());
        self
    }

    /// Generator name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Element id, `search_id_<name>`.
    #[must_use]
    pub fn element_id(&self) -> String {
        format!("{SEARCH_ID_PREFIX}{}", self.name)
    }

    /// Whether the item passes the current filter.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// CSS display value.
    #[must_use]
    pub const fn display(&self) -> &'static str {
        if self.visible { "inline-block" } else { "none" }
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.text.to_lowercase().contains(needle)
    }
}

/// How a section header was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation<'a> {
    /// Mouse click.
    Click,
    /// Key press, by key name (`"Enter"`, `" "`, ...).
    Key(&'a str),
}

/// Thumbnail preview panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Thumbnail {
    src: Option<String>,
    visible: bool,
}

impl Thumbnail {
    /// Last shown image link.
    #[must_use]
    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    /// Whether the panel is shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Catalog page state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    sections: Vec<Section>,
    items: Vec<SearchItem>,
    thumbnail: Thumbnail,
}

impl Catalog {
    /// Catalog with expanded sections and all items shown.
    #[must_use]
    pub fn new<I, S>(section_ids: I, items: Vec<SearchItem>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: section_ids
                .into_iter()
                .map(|id| Section {
                    id: id.into(),
                    expanded: true,
                })
                .collect(),
            items,
            thumbnail: Thumbnail::default(),
        }
    }

    /// Collapse the first `num_hide` sections, or all when `None`.
    pub fn init(&mut self, num_hide: Option<usize>) {
        for (i, section) in self.sections.iter_mut().enumerate() {
            if num_hide.is_none_or(|n| i < n) {
                section.expanded = false;
            }
        }
        debug!(sections = self.sections.len(), ?num_hide, "catalog ready");
    }

    /// Sections in page order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Section by id.
    #[must_use]
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Searchable items in page order.
    #[must_use]
    pub fn items(&self) -> &[SearchItem] {
        &self.items
    }

    /// The thumbnail panel.
    #[must_use]
    pub const fn thumbnail(&self) -> &Thumbnail {
        &self.thumbnail
    }

    fn set_expanded(&mut self, id: &str, expanded: bool) -> Option<bool> {
        let Some(section) = self.sections.iter_mut().find(|s| s.id == id) else {
            warn!(id, "no such catalog section");
            return None;
        };
        section.expanded = expanded;
        Some(expanded)
    }

    /// Expand one section.
    pub fn expand(&mut self, id: &str) -> Option<bool> {
        self.set_expanded(id, true)
    }

    /// Collapse one section.
    pub fn collapse(&mut self, id: &str) -> Option<bool> {
        self.set_expanded(id, false)
    }

    /// Flip one section. Returns the new state, `None` for an unknown id.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let expanded = self.section(id)?.expanded;
        self.set_expanded(id, !expanded)
    }

    /// Header activation. Clicks, Enter and Space toggle; other keys are
    /// ignored. Returns whether the event was handled (and its default
    /// action should be suppressed for keys).
    pub fn on_activate(&mut self, id: &str, activation: Activation<'_>) -> bool {
        match activation {
            Activation::Click | Activation::Key("Enter" | " ") => self.toggle(id).is_some(),
            Activation::Key(_) => false,
        }
    }

    /// Expand every section.
    pub fn expand_all(&mut self) {
        for section in &mut self.sections {
            section.expanded = true;
        }
    }

    /// Collapse every section.
    pub fn collapse_all(&mut self) {
        for section in &mut self.sections {
            section.expanded = false;
        }
    }

    /// Apply the search box. Empty: collapse everything and show all items.
    /// Otherwise: expand everything and show matching items
    /// (case-insensitive, on name or text).
    pub fn filter(&mut self, query: &str) -> usize {
        if query.is_empty() {
            self.collapse_all();
            for item in &mut self.items {
                item.visible = true;
            }
            return self.items.len();
        }
        self.expand_all();
        let needle = query.to_lowercase();
        let mut shown = 0;
        for item in &mut self.items {
            item.visible = item.matches(&needle);
            shown += usize::from(item.visible);
        }
        debug!(query, shown, "catalog filtered");
        shown
    }

    /// Show an image in the thumbnail panel.
    pub fn show_thumbnail(&mut self, src: impl Into<String>) {
        self.thumbnail.src = Some(src.into());
        self.thumbnail.visible = true;
    }

    /// Hide the thumbnail panel.
    pub fn hide_thumbnail(&mut self) {
        self.thumbnail.visible = false;
    }

    /// Pointer entered an item: show its thumbnail, if it has one.
    pub fn enter_item(&mut self, name: &str) {
        let src = self
            .items
            .iter()
            .find(|item| item.name == name)
            .and_then(|item| item.thumbnail.clone());
        if let Some(src) = src {
            self.show_thumbnail(src);
        }
    }

    /// Pointer left an item.
    pub fn leave_item(&mut self) {
        self.hide_thumbnail();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(
            ["Boxes", "Trays", "Misc"],
            vec![
                SearchItem::new("ABox", "A simple box").with_thumbnail("static/samples/ABox-thumb.jpg"),
                SearchItem::new("TrayLayout", "Generate a layout for a tray"),
                SearchItem::new("PhotoFrame", "Frame with golden matting"),
            ],
        )
    }

    fn expanded(catalog: &Catalog) -> Vec<bool> {
        catalog.sections().iter().map(Section::is_expanded).collect()
    }

    #[test]
    fn init_hides_first_sections() {
        let mut c = catalog();
        c.init(Some(2));
        assert_eq!(expanded(&c), [false, false, true]);

        let mut c = catalog();
        c.init(None);
        assert_eq!(expanded(&c), [false, false, false]);
    }

    #[test]
    fn toggle_mirrors_aria() {
        let mut c = catalog();
        c.init(None);
        assert_eq!(c.toggle("Trays"), Some(true));
        let section = c.section("Trays").unwrap();
        assert_eq!(section.display(), "block");
        assert_eq!(section.aria_expanded(), "true");
        assert_eq!(c.toggle("Trays"), Some(false));
        assert_eq!(c.section("Trays").unwrap().aria_expanded(), "false");
        assert_eq!(c.toggle("Nope"), None);
    }

    #[test]
    fn activation_keys() {
        let mut c = catalog();
        c.init(None);
        assert!(c.on_activate("Boxes", Activation::Key("Enter")));
        assert!(c.section("Boxes").unwrap().is_expanded());
        assert!(c.on_activate("Boxes", Activation::Key(" ")));
        assert!(!c.section("Boxes").unwrap().is_expanded());
        assert!(!c.on_activate("Boxes", Activation::Key("a")));
        assert!(!c.section("Boxes").unwrap().is_expanded());
        assert!(c.on_activate("Boxes", Activation::Click));
        assert!(c.section("Boxes").unwrap().is_expanded());
    }

    #[test]
    fn filter_matches_name_or_text() {
        let mut c = catalog();
        c.init(None);
        assert_eq!(c.filter("TRAY"), 1);
        assert_eq!(expanded(&c), [true, true, true]);
        let visible: Vec<&str> = c
            .items()
            .iter()
            .filter(|i| i.is_visible())
            .map(SearchItem::name)
            .collect();
        assert_eq!(visible, ["TrayLayout"]);

        assert_eq!(c.filter("golden"), 1);
        assert_eq!(c.items()[2].display(), "inline-block");
        assert_eq!(c.items()[0].display(), "none");
    }

    #[test]
    fn empty_filter_resets() {
        let mut c = catalog();
        c.filter("zzz");
        assert!(c.items().iter().all(|i| !i.is_visible()));
        assert_eq!(c.filter(""), 3);
        assert!(c.items().iter().all(SearchItem::is_visible));
        assert_eq!(expanded(&c), [false, false, false]);
    }

    #[test]
    fn thumbnails() {
        let mut c = catalog();
        c.enter_item("ABox");
        assert!(c.thumbnail().is_visible());
        assert_eq!(c.thumbnail().src(), Some("static/samples/ABox-thumb.jpg"));
        c.leave_item();
        assert!(!c.thumbnail().is_visible());

        c.enter_item("TrayLayout");
        assert!(!c.thumbnail().is_visible());
        assert_eq!(c.items()[0].element_id(), "search_id_ABox");
    }
}
