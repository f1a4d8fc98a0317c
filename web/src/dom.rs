//! DOM-backed page.

use wasm_bindgen::prelude::*;
use web_sys::{
    console, Document, Element, FormData, HtmlFormElement, HtmlInputElement, ScrollBehavior,
    ScrollToOptions, Window,
};

use chatpage_core::{
    DomSelectors, ElementLookup, FormFields, Message, MessageElement, MessageId, Page, PageConfig,
    PageElements, PageError,
};

fn warn_js(context: &str, err: JsValue) {
    console::warn_2(&JsValue::from_str(context), &err);
}

/// Element lookups over the live document.
struct DocumentLookup<'a>(&'a Document);

impl ElementLookup for DocumentLookup<'_> {
    type Element = Element;
    type Input = HtmlInputElement;
    type Form = HtmlFormElement;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.0.get_element_by_id(id)
    }

    fn as_input(&self, element: Element) -> Option<HtmlInputElement> {
        element.dyn_into::<HtmlInputElement>().ok()
    }

    fn form(&self, selector: &str) -> Option<HtmlFormElement> {
        self.0
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    }
}

/// The chat page's required elements, looked up once at startup.
pub struct DomPage {
    window: Window,
    document: Document,
    conversation: Element,
    prompt: HtmlInputElement,
    spinner: Element,
    error: Element,
    form: HtmlFormElement,
    config: PageConfig,
}

impl DomPage {
    /// Locate every required element.
    ///
    /// Fails with [`PageError::MissingElement`] naming the first element
    /// that is absent or of the wrong kind.
    pub fn locate(selectors: &DomSelectors, config: PageConfig) -> Result<Self, PageError> {
        let window = web_sys::window().ok_or_else(|| PageError::missing("window"))?;
        let document = window
            .document()
            .ok_or_else(|| PageError::missing("document"))?;

        let PageElements {
            conversation,
            prompt,
            spinner,
            error,
            form,
        } = selectors.locate(&DocumentLookup(&document))?;

        Ok(Self {
            window,
            document,
            conversation,
            prompt,
            spinner,
            error,
            form,
            config,
        })
    }

    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }
}

impl Page for DomPage {
    fn set_spinner_active(&self, active: bool) {
        let class = &self.config.spinner_active_class;
        let result = if active {
            self.spinner.class_list().add_1(class)
        } else {
            self.spinner.class_list().remove_1(class)
        };
        if let Err(e) = result {
            warn_js("Failed to toggle spinner", e);
        }
    }

    fn show_error(&self) {
        if let Err(e) = self
            .error
            .class_list()
            .remove_1(&self.config.error_hidden_class)
        {
            warn_js("Failed to reveal error banner", e);
        }
    }

    fn set_prompt_enabled(&self, enabled: bool) {
        self.prompt.set_disabled(!enabled);
    }

    fn clear_prompt(&self) {
        self.prompt.set_value("");
    }

    fn focus_prompt(&self) {
        if let Err(e) = self.prompt.focus() {
            warn_js("Failed to focus prompt", e);
        }
    }

    fn capture_form(&self) -> FormFields {
        let mut fields = FormFields::new();

        let data = match FormData::new_with_form(&self.form) {
            Ok(data) => data,
            Err(e) => {
                warn_js("Failed to read form", e);
                return fields;
            }
        };

        let entries = match js_sys::try_iter(&data) {
            Ok(Some(entries)) => entries,
            _ => return fields,
        };

        for entry in entries.flatten() {
            let pair = js_sys::Array::from(&entry);
            // File inputs carry no string value and are not sent.
            if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
                fields.push(name, value);
            }
        }

        fields
    }

    fn has_message(&self, id: &MessageId) -> bool {
        self.document.get_element_by_id(id.as_str()).is_some()
    }

    fn append_message(&self, element: &MessageElement) {
        let div = match self.document.create_element("div") {
            Ok(div) => div,
            Err(e) => return warn_js("Failed to create message element", e),
        };

        div.set_id(element.id.as_str());
        if let Err(e) = div.set_attribute("title", &element.title) {
            warn_js("Failed to set message title", e);
        }
        for class in &element.classes {
            if let Err(e) = div.class_list().add_1(class) {
                warn_js("Failed to add message class", e);
            }
        }

        if let Err(e) = self.conversation.append_child(&div) {
            warn_js("Failed to append message element", e);
        }
    }

    fn set_message_html(&self, id: &MessageId, _message: &Message, html: &str) {
        if let Some(el) = self.document.get_element_by_id(id.as_str()) {
            el.set_inner_html(html);
        }
    }

    fn scroll_to_bottom(&self) {
        let Some(body) = self.document.body() else {
            return;
        };

        let options = ScrollToOptions::new();
        options.set_top(f64::from(body.scroll_height()));
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn log_diagnostic(&self, message: &str) {
        console::error_1(&JsValue::from_str(message));
    }
}
