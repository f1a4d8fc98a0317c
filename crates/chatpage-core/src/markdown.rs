//! Markdown to HTML.

use pulldown_cmark::{html, Options, Parser};

/// Render message content to HTML markup.
pub fn render_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(content, options);
    let mut out = String::with_capacity(content.len() + content.len() / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph() {
        assert_eq!(render_markdown("hi"), "<p>hi</p>\n");
    }

    #[test]
    fn test_inline_formatting() {
        let out = render_markdown("**bold** and `code`");
        assert_eq!(out, "<p><strong>bold</strong> and <code>code</code></p>\n");
    }

    #[test]
    fn test_strikethrough() {
        assert_eq!(render_markdown("~~gone~~"), "<p><del>gone</del></p>\n");
    }
}
