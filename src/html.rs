// ABOUTME: HTML generation module for the xr-deck application
// ABOUTME: Renders slide records to fragments and wraps them in the page template

use crate::errors::Result;
use crate::slides::{ContentOverrides, Layout, LevelCard, Link, Slide, SplitStyle};
use log::info;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Portrait shown on the profile slides. Resolved relative to the page
/// document; a missing file hides the element instead of breaking the page.
pub const PORTRAIT_IMAGE: &str = "deantrbl-profile.webp";

/// Number of images in the fixed project gallery (project-strategy-N.jpeg).
pub const GALLERY_IMAGE_COUNT: usize = 5;

const CARD_GRADIENTS: [&str; 4] = [
    "background: linear-gradient(135deg, rgba(139,69,19,0.6), rgba(75,0,130,0.6));",
    "background: linear-gradient(135deg, rgba(70,130,180,0.6), rgba(176,196,222,0.6));",
    "background: linear-gradient(135deg, rgba(139,69,19,0.6), rgba(160,82,45,0.6));",
    "background: linear-gradient(135deg, rgba(25,25,112,0.6), rgba(70,130,180,0.6));",
];
const CARD_FALLBACK: &str = "background: #222;";

/// Render one slide record to its HTML fragment.
///
/// Pure and total: every variant produces a fragment, optional fields that
/// are absent leave no markup behind. Text is emitted verbatim; the dataset
/// is build-time content and may carry explicit markup such as `<br>`.
pub fn render_fragment(slide: &Slide) -> String {
    match &slide.layout {
        Layout::Title { title, subtitle } => render_title(title, subtitle),
        Layout::Index { items } => render_index(items),
        Layout::Content {
            title,
            subtitle,
            body,
            items,
            links,
            highlight,
            overrides,
        } => render_content(title, *subtitle, *body, items, links, *highlight, overrides),
        Layout::Profile {
            title,
            subtitle,
            body,
            highlight,
        } => render_profile(title, *subtitle, *body, *highlight),
        Layout::ProfileCombined {
            title,
            subtitle,
            body,
            profile_name,
            items,
            links,
        } => render_profile_combined(title, *subtitle, *body, profile_name, items, links),
        Layout::ProfileDetail {
            title,
            items,
            links,
        } => render_profile_detail(title, items, links),
        Layout::Quote { title, highlight } => render_quote(title, highlight),
        Layout::ImageGrid { title, body, cards } => {
            render_image_grid(title, *body, cards)
        }
    }
}

fn render_title(title: &str, subtitle: &str) -> String {
    format!(
        "<div class=\"title-slide\">\n\
         <h1>{title}</h1>\n\
         <h2 class=\"title-subtitle\">{subtitle}</h2>\n\
         </div>"
    )
}

fn render_index(items: &[&str]) -> String {
    let mut list = String::new();
    for item in items {
        let _ = write!(list, "<li>{item}</li>");
    }
    format!(
        "<div class=\"index-slide glass\">\n<ul>{list}</ul>\n</div>"
    )
}

fn render_content(
    title: &str,
    subtitle: Option<&str>,
    body: Option<&str>,
    items: &[&str],
    links: &[Link],
    highlight: Option<&str>,
    overrides: &ContentOverrides,
) -> String {
    let mut out = String::from("<div class=\"content-slide glass\">\n");
    let _ = writeln!(out, "<h2>{title}</h2>");
    if let Some(subtitle) = subtitle {
        let _ = writeln!(out, "<h3 class=\"slide-subtitle\">{subtitle}</h3>");
    }
    if let Some(body) = body {
        let _ = writeln!(out, "<p>{body}</p>");
    }
    if !items.is_empty() {
        out.push_str("<ul>");
        for item in items {
            let _ = write!(out, "<li>{item}</li>");
        }
        out.push_str("</ul>\n");
    }
    if !links.is_empty() {
        out.push_str(&render_links(links, overrides.stacked_links));
    }
    if overrides.gallery {
        out.push_str(&render_gallery(true));
    }
    if let Some(highlight) = highlight {
        out.push_str(&render_highlight(highlight, overrides));
    }
    out.push_str("</div>");
    out
}

fn render_highlight(highlight: &str, overrides: &ContentOverrides) -> String {
    let split = overrides
        .split_highlight
        .and_then(|split| split_at_marker(highlight, split.marker).map(|parts| (split, parts)));
    match split {
        Some((split, (first, second))) => match split.style {
            SplitStyle::QuestionAnswer => format!(
                "<div class=\"highlight highlight-lead\">{first}</div>\n\
                 <div class=\"highlight\">{second}</div>\n"
            ),
            SplitStyle::TwoTone => format!(
                "<div class=\"highlight\"><span class=\"accent\">{first}</span><br><br>\
                 <span class=\"plain\">{second}</span></div>\n"
            ),
        },
        None => format!("<div class=\"highlight\">{highlight}</div>\n"),
    }
}

fn render_links(links: &[Link], stacked: bool) -> String {
    let mut out = String::from("<div>");
    for link in links {
        let anchor = format!(
            "<a href=\"{}\" target=\"_blank\">{}</a>",
            link.url, link.text
        );
        if stacked {
            let _ = write!(out, "<div class=\"link-row\">{anchor}</div>");
        } else {
            out.push_str(&anchor);
        }
    }
    out.push_str("</div>\n");
    out
}

fn render_profile(
    title: &str,
    subtitle: Option<&str>,
    body: Option<&str>,
    highlight: Option<&str>,
) -> String {
    let mut out = String::from("<div class=\"content-slide glass\">\n");
    let _ = writeln!(out, "<h2>{title}</h2>");
    if let Some(subtitle) = subtitle {
        let _ = writeln!(out, "<h3 class=\"slide-subtitle\">{subtitle}</h3>");
    }
    if let Some(body) = body {
        let _ = writeln!(out, "<p>{body}</p>");
    }
    if let Some(highlight) = highlight {
        let _ = writeln!(out, "<div class=\"profile-note\">{highlight}</div>");
    }
    out.push_str("</div>");
    out
}

fn render_profile_combined(
    title: &str,
    subtitle: Option<&str>,
    body: Option<&str>,
    profile_name: &str,
    items: &[&str],
    links: &[Link],
) -> String {
    let mut out = String::from("<div class=\"content-slide glass tall\">\n");
    let _ = writeln!(out, "<h2>{title}</h2>");
    if let Some(subtitle) = subtitle {
        let _ = writeln!(out, "<h3 class=\"slide-subtitle\">{subtitle}</h3>");
    }
    if let Some(body) = body {
        let _ = writeln!(out, "<p>{body}</p>");
    }
    let _ = writeln!(
        out,
        "<div class=\"portrait-block\">\n\
         <img class=\"portrait\" src=\"{PORTRAIT_IMAGE}\" alt=\"{profile_name} 프로필\" \
         onerror=\"this.style.display='none'\">\n\
         <h3 class=\"portrait-name\">{profile_name}</h3>\n\
         </div>"
    );
    out.push_str("<div class=\"profile-rows\">\n");
    out.push_str(&render_profile_rows(items));
    if !links.is_empty() {
        let _ = write!(out, "<div class=\"link-block\">{}</div>\n", anchors(links));
    }
    out.push_str("</div>\n</div>");
    out
}

fn render_profile_detail(title: &str, items: &[&str], links: &[Link]) -> String {
    let mut out = String::from("<div class=\"profile-detail glass\">\n");
    let _ = writeln!(
        out,
        "<img class=\"portrait\" src=\"{PORTRAIT_IMAGE}\" alt=\"{title} 프로필\" \
         onerror=\"this.style.display='none'\">"
    );
    let _ = writeln!(out, "<h2>{title}</h2>");
    out.push_str(&render_profile_rows(items));
    if !links.is_empty() {
        let _ = write!(out, "<div class=\"link-block\">{}</div>\n", anchors(links));
    }
    out.push_str("</div>");
    out
}

fn render_quote(title: &str, highlight: &str) -> String {
    format!(
        "<div class=\"quote-slide glass\">\n\
         <div class=\"quote-title\">{title}</div>\n\
         <div class=\"quote-text\">{highlight}</div>\n\
         </div>"
    )
}

fn render_image_grid(title: &str, body: Option<&str>, cards: &[LevelCard]) -> String {
    let mut out = String::from("<div class=\"image-grid-slide glass tall\">\n");
    let _ = writeln!(out, "<h2>{title}</h2>");
    if let Some(body) = body {
        let _ = writeln!(out, "<p>{body}</p>");
    }
    out.push_str(&render_gallery(false));
    if !cards.is_empty() {
        out.push_str("<div class=\"level-cards\">\n");
        for (idx, card) in cards.iter().enumerate() {
            let _ = writeln!(
                out,
                "<div class=\"level-card\">\n\
                 <div class=\"level-card-header\" style=\"{}\">{}</div>\n\
                 <div class=\"level-card-body\">{}</div>\n\
                 </div>",
                card_background(idx),
                card.name,
                card.desc
                    .map(|desc| format!("<div class=\"level-card-desc\">{desc}</div>"))
                    .unwrap_or_default(),
            );
        }
        out.push_str("</div>\n");
    }
    out.push_str("</div>");
    out
}

fn anchors(links: &[Link]) -> String {
    links
        .iter()
        .map(|link| {
            format!(
                "<a href=\"{}\" target=\"_blank\">{}</a>",
                link.url, link.text
            )
        })
        .collect()
}

/// The fixed five-image project gallery. `wide_last` stretches the fifth
/// image across both grid columns (used when the gallery is inlined into a
/// content slide).
fn render_gallery(wide_last: bool) -> String {
    let mut out = String::from("<div class=\"image-grid\">");
    for i in 1..=GALLERY_IMAGE_COUNT {
        let class = if wide_last && i == GALLERY_IMAGE_COUNT {
            " class=\"gallery-wide\""
        } else {
            ""
        };
        let _ = write!(
            out,
            "<img{class} src=\"project-strategy-{i}.jpeg\" alt=\"Project Strategy {i}\" \
             onerror=\"this.style.display='none'\">"
        );
    }
    out.push_str("</div>\n");
    out
}

/// Rows of the labeled profile list. An entry must contain `": "` to split
/// into a label and a value; entries without the separator produce no row.
fn render_profile_rows(items: &[&str]) -> String {
    let mut out = String::new();
    for item in items {
        if let Some((label, value)) = split_labeled_item(item) {
            let _ = writeln!(
                out,
                "<div class=\"profile-item\">\n\
                 <div class=\"profile-label\">{label}</div>\n\
                 <div class=\"profile-value\">{value}</div>\n\
                 </div>"
            );
        }
    }
    out
}

/// Split a `"LABEL: VALUE"` entry at the first `": "`.
pub(crate) fn split_labeled_item(item: &str) -> Option<(&str, &str)> {
    item.split_once(": ")
}

/// Split a highlight at a marker phrase; the marker stays with the second
/// part. Returns `None` when the marker does not occur.
pub(crate) fn split_at_marker<'a>(text: &'a str, marker: &str) -> Option<(&'a str, &'a str)> {
    text.find(marker)
        .map(|pos| (text[..pos].trim_end(), &text[pos..]))
}

/// Background treatment for a level card, a pure function of its position.
pub(crate) fn card_background(idx: usize) -> &'static str {
    CARD_GRADIENTS.get(idx).copied().unwrap_or(CARD_FALLBACK)
}

/// Wrap a slide fragment in the complete standalone page document.
///
/// This is the only template definition in the crate; the pipeline and the
/// `export-html` command both go through it.
pub fn page_document(fragment: &str) -> String {
    let mut doc = String::with_capacity(PAGE_HEAD.len() + fragment.len() + PAGE_FOOT.len());
    doc.push_str(PAGE_HEAD);
    doc.push_str(fragment);
    doc.push_str(PAGE_FOOT);
    doc
}

/// Utility function to write a page document to a file.
pub fn write_html_to_file(html_content: &str, output_path: &Path) -> Result<()> {
    info!("Writing HTML to file: {:?}", output_path);

    if let Some(parent) = output_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(output_path, html_content)?;

    Ok(())
}

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="ko">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <meta name="color-scheme" content="dark">
  <title>XR Concert Presentation</title>
  <link rel="preconnect" href="https://fonts.googleapis.com">
  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
  <link href="https://fonts.googleapis.com/css2?family=Archivo+Black&family=Inter:wght@300;500;800&family=Noto+Sans+KR:wght@300;500;700;900&display=swap" rel="stylesheet">
  <style>
    :root {
      --bg-color: #050505;
      --text-main: #ffffff;
      --accent-acid: #CCFF00;
      --accent-red: #ff3b3b;
      --font-head: 'Archivo Black', sans-serif;
      --font-ui: 'Inter', system-ui, -apple-system, 'Segoe UI', Roboto, 'Noto Sans KR', sans-serif;
    }

    * {
      box-sizing: border-box;
      margin: 0;
      padding: 0;
      -webkit-print-color-adjust: exact;
      print-color-adjust: exact;
    }

    body {
      background: var(--bg-color);
      color: var(--text-main);
      font-family: var(--font-ui);
      -webkit-font-smoothing: antialiased;
      width: 100vw;
      height: 100vh;
      overflow: hidden;
    }

    .slide-container {
      width: 100vw;
      height: 100vh;
      display: flex;
      flex-direction: column;
      justify-content: center;
      align-items: center;
      padding: 60px;
      position: relative;
      background: var(--bg-color);
    }

    /* Decorative orbs */
    .orb {
      position: absolute;
      border-radius: 50%;
      filter: blur(80px);
      opacity: 0.55;
      pointer-events: none;
    }

    .orb-1 {
      top: 10%;
      left: 8%;
      width: 360px;
      height: 360px;
      background: radial-gradient(circle, var(--accent-acid), transparent 70%);
    }

    .orb-2 {
      bottom: 8%;
      right: 6%;
      width: 520px;
      height: 520px;
      background: radial-gradient(circle, #4b0082, transparent 70%);
    }

    .orb-3 {
      top: 62%;
      left: 52%;
      width: 220px;
      height: 220px;
      background: radial-gradient(circle, #001f3f, transparent 70%);
    }

    /* Glassmorphism */
    .glass {
      background: rgba(255, 255, 255, 0.02);
      backdrop-filter: blur(20px) saturate(180%);
      -webkit-backdrop-filter: blur(20px) saturate(180%);
      border: 1px solid rgba(255, 255, 255, 0.08);
      box-shadow: 0 8px 32px rgba(0, 0, 0, 0.1), inset 0 1px 0 rgba(255, 255, 255, 0.1);
      border-radius: 24px;
      padding: 48px;
    }

    .tall {
      max-height: 90vh;
      overflow-y: auto;
    }

    h1, h2, h3 {
      font-family: var(--font-head);
    }

    .title-slide {
      text-align: center;
    }

    .title-slide h1 {
      font-size: 6rem;
      font-weight: 900;
      text-transform: uppercase;
      color: var(--text-main);
      position: relative;
      z-index: 3;
    }

    .title-subtitle {
      font-family: var(--font-ui);
      font-size: 1.5rem;
      font-weight: 300;
      color: var(--text-main);
      margin-top: 24px;
      letter-spacing: 0.05em;
    }

    .index-slide {
      text-align: center;
      max-width: 800px;
      width: 100%;
    }

    .index-slide ul {
      list-style: none;
      position: relative;
      z-index: 10;
    }

    .index-slide li {
      font-family: var(--font-head);
      font-size: 3rem;
      font-weight: 900;
      color: var(--text-main);
      margin: 18px 0;
    }

    .content-slide {
      max-width: 900px;
      width: 100%;
    }

    .content-slide h2 {
      font-size: 3rem;
      font-weight: 900;
      color: var(--accent-acid);
      text-transform: uppercase;
      margin-bottom: 24px;
      text-shadow: 0 0 30px rgba(204, 255, 0, 0.4);
    }

    .slide-subtitle {
      font-size: 1.5rem;
      color: var(--text-main);
      margin-bottom: 24px;
    }

    .content-slide p {
      font-size: 1.2rem;
      line-height: 2;
      color: var(--text-main);
      margin-bottom: 24px;
      opacity: 0.95;
    }

    .highlight {
      background: rgba(204, 255, 0, 0.03);
      border-left: 4px solid rgba(204, 255, 0, 0.3);
      padding: 24px 32px;
      margin: 32px 0;
      border-radius: 16px;
      font-size: 1.4rem;
      font-weight: 600;
      color: var(--accent-acid);
      font-style: italic;
      text-align: center;
    }

    .highlight-lead {
      font-size: 1.8rem;
      font-weight: 700;
      margin-bottom: 24px;
    }

    .highlight .accent {
      color: var(--accent-acid);
    }

    .highlight .plain {
      color: var(--text-main);
    }

    .content-slide a {
      color: var(--accent-acid);
      text-decoration: none;
      font-weight: 700;
      display: inline-block;
      margin: 12px 0;
    }

    .link-row {
      margin-bottom: 12px;
    }

    .link-block {
      margin-top: 24px;
    }

    .content-slide ul {
      list-style: none;
      margin: 24px 0;
    }

    .content-slide ul li {
      border-left: 4px solid rgba(255, 255, 255, 0.2);
      padding-left: 16px;
      margin: 16px 0;
      font-size: 1.1rem;
      color: var(--text-main);
    }

    .profile-note {
      font-size: 1.5rem;
      color: var(--accent-acid);
      margin-top: 24px;
    }

    .portrait-block {
      text-align: center;
      margin: 32px 0;
    }

    .portrait {
      width: 200px;
      height: 200px;
      border-radius: 50%;
      object-fit: cover;
      border: 3px solid rgba(204, 255, 0, 0.3);
      margin-bottom: 24px;
      box-shadow: 0 8px 32px rgba(0, 0, 0, 0.4);
    }

    .portrait-name {
      font-size: 2.4rem;
      color: var(--accent-acid);
      font-weight: 700;
      text-shadow: 0 0 20px rgba(204, 255, 0, 0.4);
    }

    .profile-rows {
      margin-top: 32px;
    }

    .profile-detail {
      text-align: center;
      max-width: 600px;
      width: 100%;
    }

    .profile-detail h2 {
      font-size: 2.4rem;
      color: var(--accent-acid);
      margin-bottom: 32px;
    }

    .profile-detail a {
      color: var(--accent-acid);
      text-decoration: none;
      font-weight: 700;
      display: inline-block;
      margin: 12px 0;
    }

    .profile-item {
      border-bottom: 1px solid rgba(255, 255, 255, 0.06);
      padding: 20px 0;
      text-align: left;
    }

    .profile-label {
      font-size: 0.9rem;
      color: rgba(255, 255, 255, 0.5);
      text-transform: uppercase;
      letter-spacing: 1px;
      margin-bottom: 8px;
    }

    .profile-value {
      font-size: 1.2rem;
      color: var(--text-main);
    }

    .quote-slide {
      text-align: center;
      max-width: 800px;
      width: 100%;
    }

    .quote-slide .quote-title {
      font-size: 0.9rem;
      color: rgba(255, 255, 255, 0.5);
      text-transform: uppercase;
      letter-spacing: 2px;
      margin-bottom: 24px;
    }

    .quote-slide .quote-text {
      font-size: 2.5rem;
      font-weight: 600;
      color: var(--accent-acid);
      line-height: 1.4;
    }

    .image-grid-slide {
      max-width: 1000px;
      width: 100%;
    }

    .image-grid-slide h2 {
      font-size: 3rem;
      color: var(--accent-acid);
      margin-bottom: 24px;
    }

    .image-grid-slide p {
      font-size: 1.1rem;
      color: rgba(255, 255, 255, 0.8);
      margin-bottom: 32px;
    }

    .image-grid {
      display: grid;
      grid-template-columns: repeat(2, 1fr);
      gap: 12px;
      margin-bottom: 32px;
    }

    .image-grid img {
      width: 100%;
      height: auto;
      border-radius: 16px;
      object-fit: cover;
    }

    .gallery-wide {
      grid-column: 1 / -1;
      max-width: 50%;
      margin: 16px auto 0;
    }

    .level-cards {
      display: grid;
      grid-template-columns: repeat(2, 1fr);
      gap: 24px;
      margin-top: 32px;
    }

    .level-card {
      border-radius: 20px;
      overflow: hidden;
      background: rgba(255, 255, 255, 0.02);
      border: 1px solid rgba(255, 255, 255, 0.08);
    }

    .level-card-header {
      height: 200px;
      display: flex;
      align-items: center;
      justify-content: center;
      font-family: var(--font-head);
      font-size: 2rem;
      font-weight: 900;
      color: var(--accent-acid);
      text-transform: uppercase;
      text-align: center;
    }

    .level-card-body {
      padding: 24px;
      background: #1a1a1a;
    }

    .level-card-desc {
      font-size: 1rem;
      color: rgba(255, 255, 255, 0.8);
      line-height: 1.6;
      text-align: left;
    }
  </style>
</head>
<body>
  <div class="slide-container">
    <div class="orb orb-1"></div>
    <div class="orb orb-2"></div>
    <div class="orb orb-3"></div>
"#;

const PAGE_FOOT: &str = "
  </div>
</body>
</html>
";
