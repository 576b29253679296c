//! Rendering of the long-form `details` text.
//!
//! Listings are written in a textarea with plain line breaks, so every
//! newline becomes a `<br>`. Raw HTML in the text is escaped instead of
//! being passed through, and link or image targets outside `http`, `https`
//! and `mailto` are replaced by `#`.

use pulldown_cmark::{html, CowStr, Event, Parser, Tag};

const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Relative targets pass; absolute ones only with an allowed scheme.
fn safe_destination(dest_url: CowStr<'_>) -> CowStr<'_> {
    let trimmed = dest_url.trim();
    let scheme_end = trimmed.find(|c: char| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(end) if trimmed[end..].starts_with(':') => {
            let scheme = trimmed[..end].to_ascii_lowercase();
            if ALLOWED_SCHEMES.contains(&scheme.as_str()) {
                dest_url
            } else {
                CowStr::Borrowed("#")
            }
        }
        _ => dest_url,
    }
}

pub fn render_details(text: &str) -> String {
    let parser = Parser::new(text).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_destination(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_destination(dest_url),
            title,
            id,
        }),
        other => other,
    });

    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_newlines_are_kept() {
        let rendered = render_details("Eligibility:\nMasters students\nAny country");
        assert_eq!(
            rendered,
            "<p>Eligibility:<br />\nMasters students<br />\nAny country</p>\n"
        );
    }

    #[test]
    fn markdown_formatting_is_rendered() {
        let rendered = render_details("**Funded**\n\n- tuition\n- stipend");
        assert!(rendered.contains("<strong>Funded</strong>"));
        assert!(rendered.contains("<li>tuition</li>"));
    }

    #[test]
    fn raw_html_is_escaped() {
        let rendered = render_details("Hello <script>alert(1)</script> there");
        assert!(!rendered.contains("<script>"));
        assert!(rendered.contains("&lt;script&gt;"));
    }

    #[test]
    fn script_link_targets_are_neutralised() {
        let rendered = render_details("[Apply](javascript:alert(document.cookie))");
        assert!(!rendered.contains("javascript:"));
        assert!(rendered.contains(r##"<a href="#">Apply</a>"##));

        let rendered = render_details("![logo](JavaScript:alert(1)) [x](data:text/html,hi)");
        assert!(!rendered.to_lowercase().contains("javascript:"));
        assert!(!rendered.contains("data:"));
    }

    #[test]
    fn web_mail_and_relative_targets_are_kept() {
        let rendered = render_details(
            "[site](https://example.org/apply) [plain](http://a.b) [mail](mailto:x@y.z) [rel](detail.html?id=3)",
        );
        assert!(rendered.contains(r#"href="https://example.org/apply""#));
        assert!(rendered.contains(r#"href="http://a.b""#));
        assert!(rendered.contains(r#"href="mailto:x@y.z""#));
        assert!(rendered.contains(r#"href="detail.html?id=3""#));
    }
}
