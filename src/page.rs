use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::config::Config;
use crate::generator::ArticleDraft;
use crate::TARGET_PAGE_WRITE;

/// Maximum slug length in characters, not bytes.
pub const SLUG_MAX_CHARS: usize = 30;

pub const ADSENSE_CODE: &str = r#"<script async src="https://pagead2.googlesyndication.com/pagead/js/adsbygoogle.js?client=ca-pub-2130894810041111" crossorigin="anonymous"></script>"#;

pub const GSC_VERIFICATION: &str = r#"<meta name="google-site-verification" content="gQHkk6TWzD6wsQHRbbQt5o8yszlMxyKs3LgeqAzOyg4" />"#;

static NON_SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("slug regex compiles"));

/// Builds the URL slug for a keyword: lowercased, non-alphanumeric runs
/// collapsed to hyphens, cut to [`SLUG_MAX_CHARS`] characters.
///
/// Japanese text collapses almost entirely, so the baked-in keyword yields
/// the same short slug on every run.
pub fn slugify(keyword: &str) -> String {
    let lowered = keyword.to_lowercase();
    let dashed = NON_SLUG_RE.replace_all(&lowered, "-");
    dashed
        .trim_matches('-')
        .chars()
        .take(SLUG_MAX_CHARS)
        .collect()
}

pub fn compact_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Filename of the published page: `{YYYYMMDD}-{slug}.html`.
pub fn article_filename(keyword: &str, date: NaiveDate) -> String {
    format!("{}-{}.html", compact_date(date), slugify(keyword))
}

pub fn page_url(base_url: &str, filename: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), filename)
}

/// Interpolates the draft into the fixed page shell.
///
/// Fields go in verbatim: no HTML escaping, matching the pages already
/// published from this template.
pub fn render_page(draft: &ArticleDraft, body_html: &str, published: &str) -> String {
    format!(
        r#"
<!DOCTYPE html>
<html lang="ja">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <meta name="description" content="{meta_description}">
    {gsc_verification}
    {adsense_code}
    <style>
        body {{ font-family: 'Yu Gothic', 'Meiryo', sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; line-height: 1.6; }}
        h1, h2, h3 {{ color: #333; }}
        p {{ margin-bottom: 1em; }}
    </style>
</head>
<body>
    <h1>{title}</h1>
    <p>公開日: {published}</p>
    {body}
    
    <div style="height: 100px; background-color: #f0f0f0; margin-top: 30px; text-align: center; line-height: 100px;">[広告枠]</div>

</body>
</html>
"#,
        title = draft.title,
        meta_description = draft.meta_description,
        gsc_verification = GSC_VERIFICATION,
        adsense_code = ADSENSE_CODE,
        published = published,
        body = body_html,
    )
}

/// Renders the page and writes it into `out_dir`.
///
/// The filename depends only on keyword and date, so a second run on the
/// same day overwrites the first.
pub fn save_article(
    config: &Config,
    draft: &ArticleDraft,
    body_html: &str,
    date: NaiveDate,
    out_dir: &Path,
) -> Result<PathBuf> {
    let filename = article_filename(&config.target_keyword, date);
    let page = render_page(draft, body_html, &compact_date(date));
    let path = out_dir.join(&filename);

    fs::write(&path, page)
        .with_context(|| format!("Failed to write article page {}", path.display()))?;

    info!(
        target: TARGET_PAGE_WRITE,
        "Saved article page {} ({}).",
        path.display(),
        page_url(&config.base_url, &filename)
    );
    Ok(path)
}
