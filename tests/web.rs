#![cfg(target_arch = "wasm32")]

use shader_showcase::footer::{FooterConfig, NetworkSecurityRegistration};
use shader_showcase::wasm::dom::{create_html, render_footer, SlotElement, Track};
use shader_showcase::{Motion, Mount, Transition, Viewport};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn slot_attach_and_detach() {
    let doc = document();
    let mut slot = SlotElement::new(&doc).unwrap();
    let section = doc.create_element("section").unwrap();

    slot.attach(&section).unwrap();
    assert_eq!(slot.element().child_element_count(), 1);
    slot.detach(&section);
    assert_eq!(slot.element().child_element_count(), 0);
    // Detaching twice is harmless.
    slot.detach(&section);
}

#[wasm_bindgen_test]
fn track_transform_follows_position() {
    let doc = document();
    let mut track = Track::new(create_html(&doc, "div", "pages-container").unwrap());

    track.translate(2, Motion::Animated(Transition::default()));
    let style = track.element().style();
    assert_eq!(style.get_property_value("transform").unwrap(), "translateY(-200vh)");
    assert!(style.get_property_value("transition").unwrap().contains("0.8s"));

    track.translate(1, Motion::Instant);
    assert_eq!(style.get_property_value("transform").unwrap(), "translateY(-100vh)");
    assert!(style.get_property_value("transition").unwrap().contains("none"));
}

#[wasm_bindgen_test]
fn footer_dom_matches_config() {
    let doc = document();
    let mut config = FooterConfig {
        enabled: false,
        registration_number: "A-1".into(),
        registration_url: "https://example.cn".into(),
        network_security_registration: None,
    };
    assert!(render_footer(&doc, &config).unwrap().is_none());

    config.enabled = true;
    let footer = render_footer(&doc, &config).unwrap().unwrap();
    assert_eq!(footer.query_selector_all("a").unwrap().length(), 1);

    config.network_security_registration = Some(NetworkSecurityRegistration {
        number: "B-2".into(),
        url: "https://example.cn/b".into(),
        icon_path: "/icon.png".into(),
    });
    let footer = render_footer(&doc, &config).unwrap().unwrap();
    let items = footer.query_selector_all(".icp-footer-item").unwrap();
    assert_eq!(items.length(), 2);
    assert!(footer.query_selector(".icp-footer-item img").unwrap().is_some());
    let first_link = footer.query_selector("a").unwrap().unwrap();
    assert_eq!(first_link.text_content().as_deref(), Some("B-2"));
}
