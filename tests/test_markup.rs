//! Sanitizing and reading model output.

use quotebot_dashboard::insights::markup::{observations, sanitize, strip_code_fences};

#[test]
fn list_tags_survive_sanitizing() {
    let out = sanitize("<ul><li>Grow repairs</li><LI>Raise prices</LI></ul>");
    assert_eq!(out, "<ul><li>Grow repairs</li><li>Raise prices</li></ul>");
}

#[test]
fn other_markup_is_escaped() {
    let out = sanitize(r#"<ul><li onclick="x()">Hi</li><script>alert(1)</script></ul>"#);
    assert!(!out.contains("<script>"));
    assert!(out.contains("&lt;script&gt;"));
    assert!(out.contains("&lt;li onclick=&quot;x()&quot;&gt;"));
}

#[test]
fn code_fences_are_removed() {
    let fenced = "```html\n<ul><li>One</li></ul>\n```";
    assert_eq!(strip_code_fences(fenced), "<ul><li>One</li></ul>");
    assert_eq!(strip_code_fences("plain"), "plain");
    assert_eq!(strip_code_fences("```"), "");
}

#[test]
fn observations_from_list_items() {
    let markup = sanitize("<ul>\n<li>Tom & Jerry's roofs</li>\n<li> </li>\n<li>Second</li></ul>");
    assert_eq!(observations(&markup), vec!["Tom & Jerry's roofs", "Second"]);
}

#[test]
fn observations_fall_back_to_lines() {
    let markup = sanitize("- First point\n* Second point\n\n");
    assert_eq!(observations(&markup), vec!["First point", "Second point"]);
}

#[test]
fn existing_entities_are_not_escaped_twice() {
    let out = sanitize("<ul><li>R&amp;D spend</li><li>Up &#62; 10&#x25;</li></ul>");
    assert_eq!(out, "<ul><li>R&amp;D spend</li><li>Up &gt; 10%</li></ul>");
    assert_eq!(observations(&out), vec!["R&D spend", "Up > 10%"]);
}

#[test]
fn encoded_tags_stay_escaped() {
    let out = sanitize("<ul><li>&lt;script&gt;x&lt;/script&gt;</li></ul>");
    assert!(!out.contains("<script>"));
}

#[test]
fn stray_ampersand_is_kept() {
    let out = sanitize("<ul><li>Tar & gravel; shingles</li></ul>");
    assert_eq!(observations(&out), vec!["Tar & gravel; shingles"]);
}

#[test]
fn items_with_attributes_show_plain_text() {
    let markup = sanitize(r#"<ul><li class="x">Grow repairs</li></ul>"#);
    assert_eq!(observations(&markup), vec!["Grow repairs"]);
}
