//! Startup validation of the page's required elements.
//!
//! The lookup order is fixed: conversation, prompt input, spinner, error
//! banner, then the form. The first element that cannot be found is the one
//! named in the error.

use crate::config::DomSelectors;
use crate::error::PageError;

/// Element access a document offers during startup.
pub trait ElementLookup {
    type Element;
    type Input;
    type Form;

    /// Element with the given id.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// View an element as a text input. `None` when it is another kind.
    fn as_input(&self, element: Self::Element) -> Option<Self::Input>;

    /// First form matching a CSS selector.
    fn form(&self, selector: &str) -> Option<Self::Form>;
}

/// Every element the page controller needs.
pub struct PageElements<L: ElementLookup> {
    pub conversation: L::Element,
    pub prompt: L::Input,
    pub spinner: L::Element,
    pub error: L::Element,
    pub form: L::Form,
}

impl DomSelectors {
    /// Look up the required elements in order.
    ///
    /// Fails with [`PageError::MissingElement`] naming the first one that is
    /// absent: `#id` for elements, `input#id` when the prompt is not an
    /// input, and the selector itself for the form.
    pub fn locate<L: ElementLookup>(&self, lookup: &L) -> Result<PageElements<L>, PageError> {
        let by_id = |id: &str| {
            lookup
                .element_by_id(id)
                .ok_or_else(|| PageError::missing(format!("#{}", id)))
        };

        let conversation = by_id(&self.conversation)?;
        let prompt = lookup
            .as_input(by_id(&self.prompt_input)?)
            .ok_or_else(|| PageError::missing(format!("input#{}", self.prompt_input)))?;
        let spinner = by_id(&self.spinner)?;
        let error = by_id(&self.error)?;
        let form = lookup
            .form(&self.form)
            .ok_or_else(|| PageError::missing(self.form.clone()))?;

        Ok(PageElements {
            conversation,
            prompt,
            spinner,
            error,
            form,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashSet;

    use super::*;

    /// Document holding a set of ids; `prompt-input` is an input unless
    /// marked otherwise.
    struct FakeDocument {
        ids: HashSet<&'static str>,
        prompt_is_input: bool,
        has_form: bool,
        lookups: RefCell<Vec<String>>,
    }

    impl FakeDocument {
        fn complete() -> Self {
            Self {
                ids: ["conversation", "prompt-input", "spinner", "error"]
                    .into_iter()
                    .collect(),
                prompt_is_input: true,
                has_form: true,
                lookups: RefCell::new(Vec::new()),
            }
        }

        fn without(mut self, id: &str) -> Self {
            self.ids.remove(id);
            self
        }
    }

    impl ElementLookup for FakeDocument {
        type Element = String;
        type Input = String;
        type Form = String;

        fn element_by_id(&self, id: &str) -> Option<String> {
            self.lookups.borrow_mut().push(id.to_string());
            self.ids.contains(id).then(|| id.to_string())
        }

        fn as_input(&self, element: String) -> Option<String> {
            self.prompt_is_input.then_some(element)
        }

        fn form(&self, selector: &str) -> Option<String> {
            self.lookups.borrow_mut().push(selector.to_string());
            self.has_form.then(|| selector.to_string())
        }
    }

    fn missing_selector(doc: &FakeDocument) -> String {
        match DomSelectors::default().locate(doc) {
            Err(PageError::MissingElement { selector }) => selector,
            Err(other) => panic!("Expected MissingElement, got {:?}", other),
            Ok(_) => panic!("Expected a missing element"),
        }
    }

    #[test]
    fn test_locate_complete_page() {
        let doc = FakeDocument::complete();
        let elements = DomSelectors::default().locate(&doc).unwrap();

        assert_eq!(elements.conversation, "conversation");
        assert_eq!(elements.prompt, "prompt-input");
        assert_eq!(elements.spinner, "spinner");
        assert_eq!(elements.error, "error");
        assert_eq!(elements.form, "form");
        assert_eq!(
            *doc.lookups.borrow(),
            vec!["conversation", "prompt-input", "spinner", "error", "form"]
        );
    }

    #[test]
    fn test_missing_conversation() {
        let doc = FakeDocument::complete().without("conversation");
        assert_eq!(missing_selector(&doc), "#conversation");
    }

    #[test]
    fn test_missing_prompt_input() {
        let doc = FakeDocument::complete().without("prompt-input");
        assert_eq!(missing_selector(&doc), "#prompt-input");
    }

    #[test]
    fn test_prompt_not_an_input() {
        let mut doc = FakeDocument::complete();
        doc.prompt_is_input = false;
        assert_eq!(missing_selector(&doc), "input#prompt-input");
    }

    #[test]
    fn test_missing_spinner() {
        let doc = FakeDocument::complete().without("spinner");
        assert_eq!(missing_selector(&doc), "#spinner");
    }

    #[test]
    fn test_missing_error_banner() {
        let doc = FakeDocument::complete().without("error");
        assert_eq!(missing_selector(&doc), "#error");
    }

    #[test]
    fn test_missing_form() {
        let mut doc = FakeDocument::complete();
        doc.has_form = false;
        assert_eq!(missing_selector(&doc), "form");
    }

    #[test]
    fn test_first_missing_element_is_named() {
        let doc = FakeDocument::complete().without("error").without("spinner");
        assert_eq!(missing_selector(&doc), "#spinner");
        assert_eq!(
            *doc.lookups.borrow(),
            vec!["conversation", "prompt-input", "spinner"]
        );
    }

    #[test]
    fn test_missing_element_message() {
        let doc = FakeDocument::complete().without("conversation");
        let err = DomSelectors::default().locate(&doc).err().unwrap();
        assert_eq!(err.to_string(), "Required element not found: #conversation");
    }
}
