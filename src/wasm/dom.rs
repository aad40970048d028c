use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node};

use crate::error::{Result, ShowcaseError};
use crate::footer::{FooterConfig, FooterItem};
use crate::motion::{track_transform, Motion, Viewport};
use crate::page::Mount;

pub fn create_html(document: &Document, tag: &str, class: &str) -> Result<HtmlElement> {
    let el = document
        .create_element(tag)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| ShowcaseError::dom(format!("<{tag}> is not an HtmlElement")))?;
    el.set_class_name(class);
    Ok(el)
}

/// Full-viewport wrapper a page section is attached into.
pub struct SlotElement(HtmlElement);

impl SlotElement {
    pub fn new(document: &Document) -> Result<Self> {
        let wrapper = create_html(document, "div", "page-wrapper")?;
        let style = wrapper.style();
        style.set_property("height", "100vh")?;
        style.set_property("width", "100%")?;
        style.set_property("position", "relative")?;
        Ok(Self(wrapper))
    }

    pub fn element(&self) -> &HtmlElement {
        &self.0
    }
}

impl Mount for SlotElement {
    type Surface = Element;

    fn attach(&mut self, surface: &Element) -> Result<()> {
        self.0.append_child(surface)?;
        Ok(())
    }

    fn detach(&mut self, surface: &Element) {
        let wrapper: &Node = &self.0;
        if surface.parent_node().as_ref() == Some(wrapper) {
            self.0.remove_child(surface).ok();
        }
    }
}

/// The vertically translated container holding every slot.
pub struct Track(HtmlElement);

impl Track {
    pub fn new(element: HtmlElement) -> Self {
        Self(element)
    }

    pub fn element(&self) -> &HtmlElement {
        &self.0
    }
}

impl Viewport for Track {
    fn translate(&mut self, position: usize, motion: Motion) {
        let style = self.0.style();
        let transition = match motion {
            Motion::Animated(t) => t.to_css(),
            Motion::Instant => "none".to_string(),
        };
        let applied = style
            .set_property("transition", &transition)
            .and_then(|_| style.set_property("transform", &track_transform(position)));
        if let Err(e) = applied {
            warn!("track transform not applied: {e:?}");
        }
        if motion == Motion::Instant {
            // Force a synchronous reflow so the jump lands before any later
            // transition is set.
            let _ = self.0.offset_height();
        }
    }
}

/// `<footer>` with one item per registration entry, or nothing when the
/// footer is disabled.
pub fn render_footer(document: &Document, config: &FooterConfig) -> Result<Option<Element>> {
    if !config.enabled {
        return Ok(None);
    }
    let items = config.items();

    let footer = document.create_element("footer")?;
    footer.set_class_name("icp-footer");
    let content = document.create_element("div")?;
    content.set_class_name("icp-footer-content");

    for item in &items {
        let container = document.create_element("div")?;
        container.set_class_name("icp-footer-item");
        if let FooterItem::NetworkSecurity { icon, .. } = item {
            let img = document.create_element("img")?;
            img.set_attribute("src", icon)?;
            img.set_attribute("alt", "备案图标")?;
            img.set_class_name("icp-footer-icon");
            container.append_child(&img)?;
        }
        let link = document.create_element("a")?;
        link.set_attribute("href", item.href())?;
        link.set_attribute("target", "_blank")?;
        link.set_attribute("rel", "noopener noreferrer")?;
        link.set_class_name("icp-link");
        link.set_text_content(Some(item.text()));
        container.append_child(&link)?;
        content.append_child(&container)?;
    }

    footer.append_child(&content)?;
    Ok(Some(footer))
}
