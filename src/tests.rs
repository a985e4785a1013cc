use super::*;
use crate::html::{card_background, split_at_marker, split_labeled_item};
use crate::slides::{ContentOverrides, LevelCard, Link};
use tempfile::TempDir;

fn deck_slide(id: u32) -> Slide {
    deck()
        .into_iter()
        .find(|slide| slide.id == id)
        .unwrap_or_else(|| panic!("no slide with id {}", id))
}

#[test]
fn test_deck_ids_are_unique_and_monotonic() {
    let slides = deck();
    assert_eq!(slides.len(), 9);

    let ids: Vec<u32> = slides.iter().map(|slide| slide.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(ids, sorted, "ids must be unique and strictly increasing");
}

#[test]
fn test_every_deck_slide_renders_non_empty() {
    for slide in deck() {
        let fragment = render_fragment(&slide);
        assert!(
            !fragment.is_empty(),
            "slide {} rendered an empty fragment",
            slide.id
        );
    }
}

#[test]
fn test_title_fragment() {
    let fragment = render_fragment(&deck_slide(1));
    assert!(fragment.contains("<h1>XR CONCERT</h1>"));
    assert!(fragment.contains("Unreal Engine Project"));
}

#[test]
fn test_index_fragment_has_one_entry_per_item() {
    let fragment = render_fragment(&deck_slide(2));
    assert_eq!(fragment.matches("<li>").count(), 4);
    assert!(fragment.contains("<li>1. Purpose</li>"));
    assert!(fragment.contains("<li>4. Levels</li>"));
}

#[test]
fn test_content_fragment_omits_absent_fields() {
    let slide = Slide {
        id: 99,
        layout: Layout::Content {
            title: "C",
            subtitle: None,
            body: None,
            items: &[],
            links: &[],
            highlight: None,
            overrides: ContentOverrides::default(),
        },
    };
    let fragment = render_fragment(&slide);
    assert!(fragment.contains("<h2>C</h2>"));
    assert!(!fragment.contains("<h3"));
    assert!(!fragment.contains("<p>"));
    assert!(!fragment.contains("<ul>"));
    assert!(!fragment.contains("<a "));
    assert!(!fragment.contains("highlight"));
}

#[test]
fn test_content_fragment_includes_present_fields_verbatim() {
    let fragment = render_fragment(&deck_slide(3));
    assert!(fragment.contains("<h2>PURPOSE</h2>"));
    assert!(fragment.contains("언리얼엔진으로 구현하는 XR콘서트의 목적"));
    assert!(fragment.contains("게임 엔진 프로그램이다."));
}

#[test]
fn test_highlight_split_question_answer() {
    let fragment = render_fragment(&deck_slide(3));
    // Two callouts: the question as an oversized lead, the answer regular.
    assert_eq!(fragment.matches("class=\"highlight").count(), 2);
    assert!(fragment.contains("highlight highlight-lead"));
    let question_pos = fragment
        .find("그렇다면 언리얼 환경에서")
        .expect("question text missing");
    let answer_pos = fragment
        .find("'X'라고 생각한다.")
        .expect("answer text missing");
    assert!(question_pos < answer_pos);
}

#[test]
fn test_highlight_split_two_tone() {
    let fragment = render_fragment(&deck_slide(6));
    assert!(fragment.contains("<span class=\"accent\">"));
    assert!(fragment.contains("<span class=\"plain\">이는 하나의 스튜디오에"));
}

#[test]
fn test_gallery_override_inserts_images_before_highlight() {
    let fragment = render_fragment(&deck_slide(6));
    assert_eq!(fragment.matches("project-strategy-").count(), 5);
    assert!(fragment.contains("project-strategy-5.jpeg"));
    assert!(fragment.contains("gallery-wide"));

    let gallery_pos = fragment.find("image-grid").unwrap();
    let highlight_pos = fragment.find("class=\"highlight\"").unwrap();
    assert!(gallery_pos < highlight_pos);
}

#[test]
fn test_stacked_links_override() {
    let fragment = render_fragment(&deck_slide(6));
    assert_eq!(fragment.matches("link-row").count(), 2);
    assert!(fragment.contains("href=\"https://www.instagram.com/p/DFCkAR1ytkA/\""));
    assert!(fragment.contains("target=\"_blank\""));
}

#[test]
fn test_quote_fragment_keeps_embedded_line_breaks() {
    let fragment = render_fragment(&deck_slide(8));
    assert!(fragment.contains("<div class=\"quote-title\">콘서트 로그라인</div>"));
    assert!(fragment.contains("무너져가는 디스토피아에서<br><br>불안정함을 노래하다."));
}

#[test]
fn test_profile_combined_fragment() {
    let fragment = render_fragment(&deck_slide(7));
    assert!(fragment.contains("<h2>ARTIST</h2>"));
    assert!(fragment.contains("딘(Dean)"));
    assert!(fragment.contains("deantrbl-profile.webp"));
    assert!(fragment.contains("onerror=\"this.style.display='none'\""));
    // Three labeled rows, one link.
    assert_eq!(fragment.matches("profile-item").count(), 3);
    assert!(fragment.contains("<div class=\"profile-label\">GENRE</div>"));
    assert!(fragment.contains("<div class=\"profile-value\">Alternative RnB, Future RnB</div>"));
    assert!(fragment.contains("https://www.instagram.com/deantrbl/"));
}

#[test]
fn test_profile_detail_fragment() {
    let slide = Slide {
        id: 90,
        layout: Layout::ProfileDetail {
            title: "딘(Dean)",
            items: &["GENRE: Alternative RnB", "no separator here"],
            links: &[Link {
                text: "Instagram →",
                url: "https://example.com/",
            }],
        },
    };
    let fragment = render_fragment(&slide);
    assert!(fragment.contains("profile-detail"));
    assert!(fragment.contains("deantrbl-profile.webp"));
    // The entry without a ": " separator produces no row.
    assert_eq!(fragment.matches("profile-item").count(), 1);
    assert!(!fragment.contains("no separator here"));
}

#[test]
fn test_profile_fragment() {
    let slide = Slide {
        id: 91,
        layout: Layout::Profile {
            title: "ARTIST",
            subtitle: Some("sub"),
            body: Some("body text"),
            highlight: Some("note"),
        },
    };
    let fragment = render_fragment(&slide);
    assert!(fragment.contains("<h2>ARTIST</h2>"));
    assert!(fragment.contains("<p>body text</p>"));
    assert!(fragment.contains("<div class=\"profile-note\">note</div>"));
}

#[test]
fn test_image_grid_fragment() {
    let fragment = render_fragment(&deck_slide(10));
    assert!(fragment.contains("<h2>4. Levels</h2>"));
    assert_eq!(fragment.matches("project-strategy-").count(), 5);
    assert_eq!(fragment.matches("level-card-header").count(), 4);
    assert!(fragment.contains("Howlin' 404"));
    assert!(fragment.contains("level-card-desc"));
}

#[test]
fn test_image_grid_card_without_description() {
    let slide = Slide {
        id: 92,
        layout: Layout::ImageGrid {
            title: "Levels",
            body: None,
            cards: &[LevelCard {
                name: "Solo",
                desc: None,
            }],
        },
    };
    let fragment = render_fragment(&slide);
    assert!(fragment.contains("Solo"));
    assert!(!fragment.contains("level-card-desc"));
}

#[test]
fn test_card_background_is_deterministic_with_fallback() {
    let first_four: Vec<&str> = (0..4).map(card_background).collect();
    for (i, background) in first_four.iter().enumerate() {
        assert!(
            background.contains("linear-gradient"),
            "index {} should map to a gradient",
            i
        );
        assert_eq!(*background, card_background(i), "must be repeatable");
    }
    // The four treatments are distinct.
    for i in 0..4 {
        for j in (i + 1)..4 {
            assert_ne!(first_four[i], first_four[j]);
        }
    }
    // Past the palette, a single flat fallback.
    assert_eq!(card_background(4), card_background(17));
    assert!(card_background(4).contains("#222"));
}

#[test]
fn test_split_labeled_item() {
    assert_eq!(
        split_labeled_item("GENRE: Alternative RnB"),
        Some(("GENRE", "Alternative RnB"))
    );
    // Splits at the first separator only.
    assert_eq!(split_labeled_item("A: B: C"), Some(("A", "B: C")));
    assert_eq!(split_labeled_item("no separator"), None);
}

#[test]
fn test_split_at_marker() {
    let (first, second) = split_at_marker("before mark after", "mark").unwrap();
    assert_eq!(first, "before");
    assert_eq!(second, "mark after");
    assert!(split_at_marker("no such phrase", "mark").is_none());
}

#[test]
fn test_page_document_wraps_fragment() {
    let document = page_document("<div>MARKER</div>");
    assert!(document.starts_with("<!DOCTYPE html>"));
    assert!(document.contains("<div>MARKER</div>"));
    assert!(document.contains("--bg-color: #050505"));
    assert!(document.contains("--accent-acid: #CCFF00"));
    assert!(document.contains("fonts.googleapis.com"));
    assert!(document.contains("print-color-adjust: exact"));
    assert_eq!(document.matches("class=\"orb ").count(), 3);
    assert!(document.trim_end().ends_with("</html>"));
}

#[test]
fn test_workspace_lifecycle() {
    let base = TempDir::new().expect("Failed to create temp dir");
    let root = base.path().join("scratch");

    // A stale directory is replaced.
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("stale.txt"), "old").unwrap();

    let workspace = Workspace::create(&root).expect("Failed to create workspace");
    assert!(root.exists());
    assert!(!root.join("stale.txt").exists());
    assert!(workspace.html_path(1).ends_with("slide_1.html"));
    assert!(workspace.pdf_path(3).ends_with("slide_3.pdf"));

    std::fs::write(workspace.html_path(1), "<html></html>").unwrap();
    workspace.cleanup();
    assert!(!root.exists());
}

#[test]
fn test_export_deck_html_writes_one_document_per_slide() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let slides = deck();

    let written = export_deck_html(&slides, dir.path()).expect("export failed");
    assert_eq!(written.len(), slides.len());
    for path in &written {
        assert!(path.exists());
    }

    let first = std::fs::read_to_string(&written[0]).unwrap();
    assert!(first.contains("XR CONCERT"));
    assert!(first.contains("<!DOCTYPE html>"));
}
