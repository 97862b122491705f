use pagepress::application::ports::TextExtractor;
use pagepress::domain::FragmentKind;
use pagepress::infrastructure::text_processing::HtmlTextExtractor;

use crate::helpers::SAMPLE_HTML;

fn extract(html: &str) -> Vec<String> {
    HtmlTextExtractor::new()
        .unwrap()
        .extract(html)
        .unwrap()
        .into_iter()
        .map(|f| f.as_str().to_string())
        .collect()
}

#[test]
fn given_heading_paragraph_and_link_when_extracting_then_returns_them_in_order() {
    assert_eq!(
        extract(SAMPLE_HTML),
        vec!["Title", "Hello world", "Link (https://x.com)"]
    );
}

#[test]
fn given_mixed_elements_when_extracting_then_document_order_is_kept() {
    let html = "<h3>c</h3><p>p1</p><h1>a</h1><h2>b</h2><p>p2</p>";
    assert_eq!(extract(html), vec!["c", "p1", "a", "b", "p2"]);
}

#[test]
fn given_link_inside_paragraph_when_extracting_then_paragraph_precedes_link() {
    let html = r#"<p>Visit <a href="https://a.com">A</a> now</p>"#;
    assert_eq!(extract(html), vec!["Visit A now", "A (https://a.com)"]);
}

#[test]
fn given_insecure_link_when_extracting_then_it_is_skipped() {
    let html = r#"<a href="http://plain.com">Plain</a><a href="https://safe.com">Safe</a>"#;
    assert_eq!(extract(html), vec!["Safe (https://safe.com)"]);
}

#[test]
fn given_anchor_without_href_when_extracting_then_it_is_skipped() {
    let html = r#"<a name="top">Top</a><a href="/relative">Relative</a><a href="mailto:a@b.c">Mail</a>"#;
    assert!(extract(html).is_empty());
}

#[test]
fn given_link_label_with_padding_when_extracting_then_label_is_trimmed() {
    let html = r#"<a href="https://x.com">  Go here  </a>"#;
    assert_eq!(extract(html), vec!["Go here (https://x.com)"]);
}

#[test]
fn given_whitespace_runs_in_paragraph_when_extracting_then_they_collapse() {
    let html = "<p>  one \n   two\t\tthree  </p>";
    assert_eq!(extract(html), vec!["one two three"]);
}

#[test]
fn given_empty_elements_when_extracting_then_no_blank_fragment_is_emitted() {
    let html = "<h1>   </h1><p></p><p>\n</p><h2>kept</h2>";
    let fragments = extract(html);
    assert_eq!(fragments, vec!["kept"]);
    assert!(fragments.iter().all(|f| !f.trim().is_empty()));
}

#[test]
fn given_unmatched_elements_when_extracting_then_they_are_ignored() {
    let html = "<h4>small</h4><div>div</div><span>span</span><li>item</li>";
    assert!(extract(html).is_empty());
}

#[test]
fn given_nested_markup_when_extracting_then_all_descendant_text_is_used() {
    let html = "<h2>Big <em>bold</em> <strong>move</strong></h2>";
    assert_eq!(extract(html), vec!["Big bold move"]);
}

#[test]
fn given_empty_input_when_extracting_then_returns_empty_sequence() {
    assert!(extract("").is_empty());
}

#[test]
fn given_link_when_extracting_then_fragment_kind_is_link() {
    let fragments = HtmlTextExtractor::new()
        .unwrap()
        .extract(SAMPLE_HTML)
        .unwrap();
    let kinds: Vec<_> = fragments.iter().map(|f| f.kind()).collect();
    assert_eq!(
        kinds,
        vec![FragmentKind::Text, FragmentKind::Text, FragmentKind::Link]
    );
}
