//! Page configuration.

/// What to do with a streamed line that is not a valid message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedLinePolicy {
    /// Fail the render pass; the failure reaches the error handler.
    #[default]
    Abort,
    /// Log a warning and keep rendering the remaining lines.
    Skip,
}

/// Page controller configuration.
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Chat endpoint path used for both history (GET) and prompts (POST).
    pub endpoint: String,

    /// Class toggled on the spinner while a request is in flight.
    pub spinner_active_class: String,

    /// Class that hides the error banner.
    pub error_hidden_class: String,

    /// Classes added to every message element before the role class.
    pub message_classes: Vec<String>,

    /// Handling of unparseable lines.
    pub malformed_lines: MalformedLinePolicy,
}

impl PageConfig {
    /// Classes for a message element with the given role.
    pub fn classes_for(&self, role: &str) -> Vec<String> {
        let mut classes = self.message_classes.clone();
        classes.push(role.to_string());
        classes
    }

    /// Set the endpoint path.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the malformed-line policy.
    pub fn with_malformed_lines(mut self, policy: MalformedLinePolicy) -> Self {
        self.malformed_lines = policy;
        self
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            endpoint: "/chat/".to_string(),
            spinner_active_class: "active".to_string(),
            error_hidden_class: "d-none".to_string(),
            message_classes: vec!["border-top".to_string(), "pt-2".to_string()],
            malformed_lines: MalformedLinePolicy::Abort,
        }
    }
}

/// Element lookups the page depends on.
#[derive(Debug, Clone)]
pub struct DomSelectors {
    pub conversation: String,
    pub prompt_input: String,
    pub spinner: String,
    pub error: String,
    /// CSS selector of the prompt form.
    pub form: String,
}

impl Default for DomSelectors {
    fn default() -> Self {
        Self {
            conversation: "conversation".to_string(),
            prompt_input: "prompt-input".to_string(),
            spinner: "spinner".to_string(),
            error: "error".to_string(),
            form: "form".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_for_role() {
        let config = PageConfig::default();
        assert_eq!(config.classes_for("user"), vec!["border-top", "pt-2", "user"]);
    }
}
