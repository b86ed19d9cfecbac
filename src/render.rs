use once_cell::sync::Lazy;
use regex::Regex;

static H2_OPEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<h2>(.*?)").expect("h2 regex compiles"));
static H3_OPEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<h3>(.*?)").expect("h3 regex compiles"));

/// Converts the article body to HTML with a fixed substitution chain.
///
/// This is not a markdown parser. Heading markers are swapped for opening
/// tags that are never closed, blank lines become paragraph breaks, and the
/// whole result is wrapped in a single paragraph. The `## ` pass also eats
/// the tail of `### ` markers, leaving a literal `#` behind. Published pages
/// were rendered with exactly this chain, so its order and quirks stay.
pub fn markdown_to_html(markdown: &str) -> String {
    let body = markdown.replace("## ", "<h2>").replace("### ", "<h3>");
    let body = body.replace("\n\n", "</p><p>");
    let body = H2_OPEN_RE.replace_all(&body, "</p><h2>$1");
    let body = H3_OPEN_RE.replace_all(&body, "</p><h3>$1");
    format!("<p>{}</p>", body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_paragraph_boundaries() {
        let html = markdown_to_html("## 導入\n本文A\n\n## まとめ\n本文B");
        assert_eq!(
            html,
            "<p></p><h2>導入\n本文A</p><p></p><h2>まとめ\n本文B</p>"
        );
        assert_eq!(html.matches("</p><p>").count(), 1);
    }

    #[test]
    fn heading_tags_are_never_closed() {
        let html = markdown_to_html("## 見出し\n\n### 小見出し\n本文");
        assert!(!html.contains("</h2>"));
        assert!(!html.contains("</h3>"));
    }

    #[test]
    fn h3_markers_are_consumed_by_the_h2_pass() {
        let html = markdown_to_html("### 小見出し\n本文");
        assert_eq!(html, "<p>#</p><h2>小見出し\n本文</p>");
        assert!(!html.contains("<h3>"));
    }

    #[test]
    fn double_newline_becomes_paragraph_boundary() {
        assert_eq!(
            markdown_to_html("段落1\n\n段落2"),
            "<p>段落1</p><p>段落2</p>"
        );
    }

    #[test]
    fn leading_heading_produces_stray_empty_paragraph() {
        let html = markdown_to_html("## 見出し");
        assert_eq!(html, "<p></p><h2>見出し</p>");
    }

    #[test]
    fn triple_newline_leaves_a_dangling_newline() {
        assert_eq!(markdown_to_html("A\n\n\nB"), "<p>A</p><p>\nB</p>");
    }

    #[test]
    fn rendering_is_not_idempotent() {
        let once = markdown_to_html("## 導入\n本文A\n\n## まとめ\n本文B");
        let twice = markdown_to_html(&once);
        assert_ne!(once, twice);
    }
}
