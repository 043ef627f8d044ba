//! Read-only access to the server-rendered host page.
//!
//! The chat page is rendered by the server with the identity baked into a
//! few well-known elements. [`PageSource`] is the narrow seam the rest of
//! the crate reads them through, so identity and config parsing can be
//! tested without a browser.

/// Lookup of page elements by id.
pub trait PageSource {
    /// Whether an element with this id exists.
    fn has_element(&self, id: &str) -> bool;
    /// Text content of the element, if it exists.
    fn text_content(&self, id: &str) -> Option<String>;
    /// Current value of the element if it is a form input.
    fn input_value(&self, id: &str) -> Option<String>;
    /// Attribute value on the element, if both exist.
    fn attribute(&self, id: &str, name: &str) -> Option<String>;
}

/// [`PageSource`] over the live browser document.
#[cfg(feature = "hydrate")]
pub struct DocumentPage {
    document: web_sys::Document,
}

#[cfg(feature = "hydrate")]
impl DocumentPage {
    /// Wrap the current window's document, if there is one.
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    pub fn element(&self, id: &str) -> Option<web_sys::Element> {
        self.document.get_element_by_id(id)
    }
}

#[cfg(feature = "hydrate")]
impl PageSource for DocumentPage {
    fn has_element(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn text_content(&self, id: &str) -> Option<String> {
        self.element(id)?.text_content()
    }

    fn input_value(&self, id: &str) -> Option<String> {
        use wasm_bindgen::JsCast;

        let input = self.element(id)?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
        Some(input.value())
    }

    fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.element(id)?.get_attribute(name)
    }
}

/// In-memory page used by tests.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct StaticPage {
    elements: std::collections::HashMap<String, StaticElement>,
}

#[cfg(test)]
#[derive(Default)]
struct StaticElement {
    text: String,
    value: Option<String>,
    attributes: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl StaticPage {
    /// Page with just the message container, like a freshly rendered chat page.
    pub fn chat() -> Self {
        Self::default().with_text(crate::config::MESSAGES_ID, "Loading messages...")
    }

    pub fn with_text(mut self, id: &str, text: &str) -> Self {
        self.elements.entry(id.to_owned()).or_default().text = text.to_owned();
        self
    }

    pub fn with_value(mut self, id: &str, value: &str) -> Self {
        self.elements.entry(id.to_owned()).or_default().value = Some(value.to_owned());
        self
    }

    pub fn with_attribute(mut self, id: &str, name: &str, value: &str) -> Self {
        self.elements
            .entry(id.to_owned())
            .or_default()
            .attributes
            .insert(name.to_owned(), value.to_owned());
        self
    }
}

#[cfg(test)]
impl PageSource for StaticPage {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn text_content(&self, id: &str) -> Option<String> {
        self.elements.get(id).map(|e| e.text.clone())
    }

    fn input_value(&self, id: &str) -> Option<String> {
        self.elements.get(id)?.value.clone()
    }

    fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.elements.get(id)?.attributes.get(name).cloned()
    }
}
