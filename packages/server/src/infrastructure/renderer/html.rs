//! HTML fragment renderer.

use crate::domain::{MessageBody, MessageId, MessageRenderer};

/// Renders each message as `<div class="message" id="m{id}">{body}</div>`
/// with the body HTML-escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlMessageRenderer;

impl MessageRenderer for HtmlMessageRenderer {
    fn render(&self, id: &MessageId, body: &MessageBody) -> String {
        format!(
            r#"<div class="message" id="m{}">{}</div>"#,
            id,
            escape_html(body.as_str())
        )
    }
}

/// Escape the five characters significant in HTML text and attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_wraps_body_with_id() {
        // given:
        let id = MessageId::generate();
        let body = MessageBody::new("hi".to_string()).unwrap();

        // when:
        let html = HtmlMessageRenderer.render(&id, &body);

        // then:
        assert_eq!(html, format!(r#"<div class="message" id="m{}">hi</div>"#, id));
    }

    #[test]
    fn test_render_escapes_markup() {
        let id = MessageId::generate();
        let body = MessageBody::new(r#"<script>alert("x" & 'y')</script>"#.to_string()).unwrap();

        let html = HtmlMessageRenderer.render(&id, &body);

        assert!(html.contains(
            "&lt;script&gt;alert(&quot;x&quot; &amp; &#39;y&#39;)&lt;/script&gt;"
        ));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_render_is_pure() {
        let id = MessageId::generate();
        let body = MessageBody::new("same".to_string()).unwrap();

        assert_eq!(
            HtmlMessageRenderer.render(&id, &body),
            HtmlMessageRenderer.render(&id, &body)
        );
    }
}
