//! Integration tests for span-based highlighting.

use msone_dictionary::highlight::{highlight, HighlightedText, Markup};
use msone_dictionary::MatchMode;

#[test]
fn test_missing_text_and_empty_term() {
    assert_eq!(highlight(None, "x", MatchMode::WholeWord), None);

    let unchanged = highlight(Some("abc"), "", MatchMode::WholeWord).unwrap();
    assert_eq!(unchanged, HighlightedText::plain("abc"));
    assert_eq!(unchanged.plain_text(), "abc");
}

#[test]
fn test_exact_span() {
    let text = highlight(Some("The cat sat"), "cat", MatchMode::WholeWord).unwrap();
    assert_eq!(text.spans(), vec![4..7]);

    let segments = text.segments();
    assert_eq!(segments.len(), 3);
    assert_eq!((segments[0].text.as_str(), segments[0].highlighted), ("The ", false));
    assert_eq!((segments[1].text.as_str(), segments[1].highlighted), ("cat", true));
    assert_eq!((segments[2].text.as_str(), segments[2].highlighted), (" sat", false));
}

#[test]
fn test_sequential_overlapping_passes_keep_text_intact() {
    let original = "cats are cats";
    let first = highlight(Some(original), "cat", MatchMode::Substring).unwrap();
    let second = first.highlight("at", MatchMode::Substring);

    assert_eq!(second.plain_text(), original);
    let total: usize = second.segments().iter().map(|s| s.text.len()).sum();
    assert_eq!(total, original.len());
    assert_eq!(second.highlighted_terms(), vec!["cat", "cat"]);
}

#[test]
fn test_second_pass_fills_gaps_only() {
    let first = highlight(Some("cat and a hat"), "cat", MatchMode::Substring).unwrap();
    let second = first.highlight("at", MatchMode::Substring);

    assert_eq!(second.spans(), vec![0..3, 11..13]);
    assert_eq!(second.plain_text(), "cat and a hat");
}

#[test]
fn test_marker_words_cannot_be_matched() {
    // Markers only exist at render time, so "span" and "bold" are never
    // found inside them.
    let first = highlight(Some("bold span"), "bold", MatchMode::WholeWord).unwrap();
    let second = first.highlight("span", MatchMode::WholeWord);

    assert_eq!(second.highlighted_terms(), vec!["bold", "span"]);
    let html = Markup::Html.render(&second);
    assert_eq!(html.matches("<span").count(), 2);
    assert_eq!(html.matches("</span>").count(), 2);
}

#[test]
fn test_regex_metacharacters_are_literal() {
    let text = highlight(Some("a.b* is a.b*"), "a.b*", MatchMode::Substring).unwrap();
    assert_eq!(text.spans(), vec![0..4, 8..12]);

    let text = highlight(Some("axbbb ab"), "a.b*", MatchMode::Substring).unwrap();
    assert!(!text.has_highlights());
}

#[test]
fn test_whole_word_vs_substring() {
    let strict = highlight(Some("cat category"), "cat", MatchMode::WholeWord).unwrap();
    assert_eq!(strict.spans(), vec![0..3]);

    let loose = highlight(Some("cat category"), "cat", MatchMode::Substring).unwrap();
    assert_eq!(loose.spans(), vec![0..3, 4..7]);
}

#[test]
fn test_case_insensitive_keeps_original_case() {
    let text = highlight(Some("Run, Forrest, RUN!"), "run", MatchMode::WholeWord).unwrap();
    assert_eq!(text.highlighted_terms(), vec!["Run", "RUN"]);
}

#[test]
fn test_malayalam_term() {
    let text = highlight(
        Some("പൂച്ചയും പൂച്ചക്കുട്ടിയും."),
        "പൂച്ച",
        MatchMode::Substring,
    )
    .unwrap();
    assert_eq!(text.highlighted_terms(), vec!["പൂച്ച", "പൂച്ച"]);
    assert_eq!(text.plain_text(), "പൂച്ചയും പൂച്ചക്കുട്ടിയും.");
}

#[test]
fn test_markdown_rendering() {
    let text = highlight(Some("Run, Forrest, run!"), "run", MatchMode::WholeWord).unwrap();
    assert_eq!(Markup::Markdown.render(&text), "**Run**, Forrest, **run**!");
    assert_eq!(Markup::Plain.render(&text), "Run, Forrest, run!");
}

#[test]
fn test_html_rendering_escapes_text() {
    let text = highlight(Some("<b>cat</b>"), "cat", MatchMode::WholeWord).unwrap();
    let html = Markup::Html.render(&text);
    assert!(html.starts_with("&lt;b&gt;<span"));
    assert!(html.ends_with("</span>&lt;/b&gt;"));
}
