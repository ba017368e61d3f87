#![forbid(unsafe_code)]

//! End-to-end page flows driven the way the host page drives them.

use bxui_layout::{render_by_sections, render_layout};
use bxui_web::{
    resolve_page, AlwaysConfirm, NeverConfirm, Page, PageKind, PhotoField, PhotoFrameForm,
    Preview, Regenerate,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn tray_page_dirty_flag_scenario() {
    let kind = resolve_page("/static/TrayLayout").unwrap();
    let mut page = kind.init();
    assert_eq!(page.layout().unwrap().text(), render_layout("50*3", "50*3"));

    page.set_field("sx", "30:20", &mut NeverConfirm).unwrap();
    assert_eq!(page.layout().unwrap().text(), render_layout("30:20", "50*3"));

    page.set_field("layout", "edited", &mut AlwaysConfirm).unwrap();
    page.set_field("sy", "40", &mut NeverConfirm).unwrap();
    assert_eq!(page.layout().unwrap().text(), "edited");

    let mut prompts = Vec::new();
    let mut confirm = |message: &str| {
        prompts.push(message.to_string());
        true
    };
    page.set_field("sy", "40", &mut confirm).unwrap();
    assert_eq!(prompts.len(), 1);
    assert_eq!(page.layout().unwrap().text(), render_layout("30:20", "40"));
    assert!(!page.layout().unwrap().is_dirty());
}

#[test]
fn gridfinity_page_flow() {
    let Page::GridfinityTrayLayout(mut form) = PageKind::GridfinityTrayLayout.init() else {
        panic!("wrong page");
    };
    assert_eq!(
        form.set_field("margin", "0", &mut NeverConfirm),
        Ok(Regenerate::Updated)
    );
    form.set_field("countx", "2", &mut NeverConfirm).unwrap();
    form.set_field("county", "1", &mut NeverConfirm).unwrap();
    assert_eq!(form.layout().text(), render_by_sections(&[84.0], &[63.0, 63.0]));
}

#[test]
fn preview_follows_form() {
    let page = PageKind::PhotoFrame.init();
    let mut preview = Preview::new(true);
    let url = preview.refresh("PhotoFrame", &page.fields()).unwrap();
    assert!(url.starts_with("PhotoFrame?x=100&y=150&matting_overlap=2&golden_mat=on&"));
    assert!(url.ends_with("&format=svg&render=1"));
}

fn photo_event() -> impl Strategy<Value = (Option<PhotoField>, String, bool)> {
    let field = prop_oneof![
        Just(None),
        Just(Some(PhotoField::X)),
        Just(Some(PhotoField::Y)),
        Just(Some(PhotoField::MattingOverlap)),
        Just(Some(PhotoField::MattingW)),
        Just(Some(PhotoField::MattingH)),
        Just(Some(PhotoField::GlassW)),
        Just(Some(PhotoField::GlassH)),
    ];
    let value = prop_oneof![
        Just(String::new()),
        Just("0".to_string()),
        Just("abc".to_string()),
        (0u32..400).prop_map(|n| n.to_string()),
    ];
    (field, value, any::<bool>())
}

fn non_zero(form: &PhotoFrameForm, field: PhotoField) -> bool {
    let value = bxui_core::form_number(form.value(field));
    value != 0.0 && !value.is_nan()
}

proptest! {
    // At most one of the matting pair and the glass pair is non-zero after
    // any handler.
    #[test]
    fn matting_and_glass_are_exclusive(events in prop::collection::vec(photo_event(), 1..30)) {
        let mut form = PhotoFrameForm::new();
        for (field, value, golden) in events {
            match field {
                Some(field) => form.input(field, &value),
                None => form.set_golden_mat(golden),
            }
            let matting = non_zero(&form, PhotoField::MattingW) || non_zero(&form, PhotoField::MattingH);
            let glass = non_zero(&form, PhotoField::GlassW) || non_zero(&form, PhotoField::GlassH);
            prop_assert!(!(matting && glass), "matting and glass both set: {form:?}");
        }
    }
}
