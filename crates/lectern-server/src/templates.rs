//! HTML page templates.
//!
//! Pages are assembled with plain string building: a shared document shell
//! plus one body builder per page. All dynamic text goes through
//! `escape_html`; the compiled content-block HTML is embedded verbatim since
//! the compiler already escapes its text nodes.

use std::fmt::Write;

use lectern_content::escape_html;
use lectern_site::Video;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Site title used on error pages, which render without access to state.
const DEFAULT_SITE_TITLE: &str = "Lectern";

/// Characters percent-encoded when a slug is written into a URL path
/// segment. Without this, a slug containing a space or `?` produces a
/// broken link; axum decodes the path parameter back before lookup.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Wrap a page body in the shared document shell.
fn layout(site_title: &str, page_title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{page} | {site}</title>
<link rel="stylesheet" href="/styles.css">
</head>
<body>
<header class="header">
<a class="header__home" href="/">{site}</a>
</header>
<main class="main">
{body}</main>
</body>
</html>
"#,
        page = escape_html(page_title),
        site = escape_html(site_title),
        body = body,
    )
}

/// Front page.
pub(crate) fn index_page(site_title: &str) -> String {
    let body = format!(
        "<h1>{}</h1>\n<p>Recorded lectures, one page per video.</p>\n<p><a href=\"/videos\">Browse the videos</a></p>\n",
        escape_html(site_title)
    );
    layout(site_title, "Home", &body)
}

/// Video listing page.
pub(crate) fn video_list_page(site_title: &str, videos: &[Video]) -> String {
    let mut body = String::from("<h1>Videos</h1>\n");
    if videos.is_empty() {
        body.push_str("<p>No videos yet.</p>\n");
    } else {
        body.push_str("<ul class=\"videos\">\n");
        for video in videos {
            let slug = utf8_percent_encode(&video.slug, PATH_SEGMENT).to_string();
            write!(
                body,
                "<li class=\"videos__video\"><a href=\"/videos/{slug}\">{title}</a>",
                slug = escape_html(&slug),
                title = escape_html(&video.title),
            )
            .unwrap();
            if !video.description.is_empty() {
                write!(
                    body,
                    "<p class=\"videos__description\">{}</p>",
                    escape_html(&video.description)
                )
                .unwrap();
            }
            body.push_str("</li>\n");
        }
        body.push_str("</ul>\n");
    }
    layout(site_title, "Videos", &body)
}

/// Video detail page. `content_html` is the compiled content-block markup.
pub(crate) fn video_page(site_title: &str, video: &Video, content_html: &str) -> String {
    let mut body = format!("<h1>{}</h1>\n", escape_html(&video.title));
    if let Some(created) = &video.created {
        writeln!(body, "<p class=\"video__created\">{}</p>", escape_html(created)).unwrap();
    }
    if !video.description.is_empty() {
        writeln!(body, "<p class=\"video__description\">{}</p>", escape_html(&video.description))
            .unwrap();
    }
    body.push_str(content_html);
    body.push('\n');
    layout(site_title, &video.title, &body)
}

/// 404 page, for unknown routes, missing videos, and missing static files.
pub(crate) fn not_found_page() -> String {
    layout(
        DEFAULT_SITE_TITLE,
        "Page not found",
        "<h1>Page not found</h1>\n<p>Nothing lives at this address. <a href=\"/\">Back to the front page</a>.</p>\n",
    )
}

/// 500 page, for catalog read or parse failures.
pub(crate) fn error_page() -> String {
    layout(
        DEFAULT_SITE_TITLE,
        "Something broke",
        "<h1>Something broke</h1>\n<p>The server hit an error while building this page. Try again in a moment.</p>\n",
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn video(title: &str, slug: &str) -> Video {
        serde_json::from_str(&format!(r#"{{"title": "{title}", "slug": "{slug}"}}"#)).unwrap()
    }

    #[test]
    fn test_layout_escapes_titles() {
        let html = layout("A & B", "x < y", "<p>body</p>");
        assert!(html.contains("<title>x &lt; y | A &amp; B</title>"));
        assert!(html.contains(r#"<a class="header__home" href="/">A &amp; B</a>"#));
        // Body is embedded verbatim
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn test_index_page_links_to_videos() {
        let html = index_page("Lectern");
        assert!(html.contains(r#"<a href="/videos">"#));
    }

    #[test]
    fn test_video_list_page_links_each_video() {
        let videos = vec![video("Intro", "intro"), video("Setup", "setup")];
        let html = video_list_page("Lectern", &videos);

        assert!(html.contains(r#"<a href="/videos/intro">Intro</a>"#));
        assert!(html.contains(r#"<a href="/videos/setup">Setup</a>"#));
        assert_eq!(html.matches("videos__video").count(), 2);
    }

    #[test]
    fn test_video_list_page_percent_encodes_slug_in_href() {
        let videos = vec![video("Odd one", "odd one?v2")];
        let html = video_list_page("Lectern", &videos);

        assert!(html.contains(r#"<a href="/videos/odd%20one%3Fv2">Odd one</a>"#));
    }

    #[test]
    fn test_video_list_page_empty_catalog() {
        let html = video_list_page("Lectern", &[]);
        assert!(html.contains("No videos yet."));
    }

    #[test]
    fn test_video_page_embeds_compiled_content_verbatim() {
        let compiled = r#"<div><div class="item item--heading"></div></div>"#;
        let html = video_page("Lectern", &video("Intro", "intro"), compiled);

        assert!(html.contains("<h1>Intro</h1>"));
        assert!(html.contains(compiled));
    }

    #[test]
    fn test_error_pages_render() {
        assert!(not_found_page().contains("Page not found"));
        assert!(error_page().contains("Something broke"));
    }
}
