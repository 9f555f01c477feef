//! Markdown Rendering
//!
//! Group descriptions are Markdown. Rendered with pulldown-cmark plus:
//! - Raw HTML in the source is shown as text
//! - Link and image targets are limited to http, https, mailto and relative URLs
//! - Images are constrained to the preview width

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Parse markdown with tables, strikethrough and task lists enabled
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TABLES
        | Options::ENABLE_TASKLISTS
}

enum State {
    Normal,
    /// Inside an image; alt-text events are dropped until it closes
    InImage { depth: usize },
}

fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Start(Tag::Image { dest_url, title, .. }) => {
                    let html = format!(
                        r#"<img src="{}" title="{}" style="max-width: 100%; max-height: 200px; display: block;" />"#,
                        escape_html(&safe_url(dest_url)),
                        escape_html(&title)
                    );
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::InImage { depth: 0 };
                }
                Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
                    events.push(Event::Start(Tag::Link {
                        link_type,
                        dest_url: safe_url(dest_url),
                        title,
                        id,
                    }));
                }
                Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),
                other => events.push(other),
            },

            State::InImage { ref mut depth } => match event {
                Event::Start(_) => *depth += 1,
                Event::End(TagEnd::Image) if *depth == 0 => state = State::Normal,
                Event::End(_) => *depth = depth.saturating_sub(1),
                _ => {}
            },
        }
    }

    events
}

/// Unknown or script-capable schemes become `#`
fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) {
        url
    } else {
        CowStr::Borrowed("#")
    }
}

fn is_safe_url(url: &str) -> bool {
    let url = url.trim();
    match url.find([':', '/', '?', '#']) {
        Some(end) if url[end..].starts_with(':') => {
            let scheme = url[..end].to_ascii_lowercase();
            matches!(scheme.as_str(), "http" | "https" | "mailto")
        }
        _ => true,
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markdown() {
        let html = parse_markdown("# Youth Group\n\nMeets **Fridays**.");
        assert!(html.contains("<h1>Youth Group</h1>"));
        assert!(html.contains("<strong>Fridays</strong>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = parse_markdown("<script>alert(1)</script>\n\nhi <b>there</b>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_image_is_constrained_and_alt_dropped() {
        let html = parse_markdown("![the \"alt\"](https://img.example.org/a.png)");
        assert!(html.contains(r#"<img src="https://img.example.org/a.png""#));
        assert!(html.contains("max-width: 100%"));
        assert!(!html.contains("alt"));
    }

    #[test]
    fn test_script_links_are_neutralized() {
        for source in [
            "[click](javascript:alert(document.cookie))",
            "[click](JavaScript:alert(1))",
            "[data](data:text/html;base64,PHNjcmlwdD4=)",
        ] {
            let html = parse_markdown(source);
            assert!(!html.to_lowercase().contains("javascript:"), "{}", html);
            assert!(!html.contains("data:"), "{}", html);
            assert!(html.contains(r##"href="#""##), "{}", html);
        }

        // Autolinks keep their text but lose the target
        assert!(parse_markdown("<javascript:alert(1)>").contains(r##"<a href="#">"##));

        let html = parse_markdown("![x](javascript:alert(1))");
        assert!(html.contains(r##"<img src="#""##));
    }

    #[test]
    fn test_safe_links_kept() {
        assert!(parse_markdown("[site](https://church.example.org/a?b=c)").contains(r#"href="https://church.example.org/a?b=c""#));
        assert!(parse_markdown("[mail](mailto:office@example.org)").contains(r#"href="mailto:office@example.org""#));
        assert!(parse_markdown("[groups](/groups/g1)").contains(r#"href="/groups/g1""#));
        assert!(parse_markdown("[later](notes.html#top)").contains(r#"href="notes.html#top""#));
    }

    #[test]
    fn test_strikethrough_enabled() {
        assert!(parse_markdown("~~old~~").contains("<del>old</del>"));
    }
}
