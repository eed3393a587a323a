//! Main-content selection over parsed HTML
//!
//! Heterogeneous page templates rarely agree on a content container, so
//! selection runs an ordered fallback chain that prefers the most
//! semantically specific hook first and degrades to the full body text.

use scraper::{Html, Selector};
use tracing::debug;

/// Title used when no candidate element yields non-empty text
const DEFAULT_TITLE: &str = "Article";

/// Title candidates, most specific heading first
const TITLE_SELECTORS: &[&str] = &["h1", "title", ".article-title", ".post-title"];

/// Tags removed wholesale before content selection
const NOISE_TAGS: &[&str] = &[
    "script",
    "style",
    "nav",
    "header",
    "footer",
    "aside",
    "advertisement",
    "ads",
    "comment",
    "iframe",
];

/// Class-attribute substrings that mark an element as noise
const NOISE_CLASS_HINTS: &[&str] = &[
    "advertisement",
    "ads",
    "sidebar",
    "navigation",
    "menu",
    "footer",
    "header",
    "social-share",
    "comments",
];

/// Structural and styling hooks for the main-content landmark
const MAIN_SELECTORS: &[&str] = &[
    "main",
    "[role=\"main\"]",
    ".main-content",
    ".article-content",
    ".post-content",
    ".entry-content",
    ".story-body",
    ".article-body",
];

/// Class-attribute substrings that suggest article body content
const CONTENT_CLASS_HINTS: &[&str] = &[
    "content",
    "article-body",
    "post-body",
    "story-body",
    "entry-text",
    "text",
];

/// One rule of the content fallback chain
enum ContentRule {
    /// First element matching any of these selectors, in order
    Selectors(&'static [&'static str]),
    /// First element whose class attribute contains any of these hints
    ClassContains(&'static [&'static str]),
    /// Full text of the document body
    Body,
    /// Full text of the whole document
    Document,
}

/// Fallback chain, evaluated in order with first-match-wins semantics
const CONTENT_CHAIN: &[ContentRule] = &[
    ContentRule::Selectors(&["article"]),
    ContentRule::Selectors(MAIN_SELECTORS),
    ContentRule::ClassContains(CONTENT_CLASS_HINTS),
    ContentRule::Body,
    ContentRule::Document,
];

/// Select the title and main content text from raw markup
///
/// Deterministic over its input. The title is extracted before noise
/// removal so that a heading inside a site header still wins; the content
/// chain then runs against the scrubbed tree.
pub fn select_main_content(markup: &str) -> (String, String) {
    let mut document = Html::parse_document(markup);

    let title = extract_title(&document);
    remove_noise(&mut document);
    let text = extract_content(&document);

    (title, text)
}

/// First non-empty trimmed text among the title candidates
fn extract_title(document: &Html) -> String {
    for selector_str in TITLE_SELECTORS {
        let selector = parse_selector(selector_str);
        if let Some(element) = document.select(&selector).next() {
            let title = element.text().collect::<String>();
            let title = title.trim();
            if !title.is_empty() {
                return title.to_string();
            }
        }
    }
    DEFAULT_TITLE.to_string()
}

/// Detach noise elements from the working tree
///
/// Runs before content selection so the selected subtree is already
/// scrubbed of scripts, chrome, and ad containers.
fn remove_noise(document: &mut Html) {
    let mut doomed = Vec::new();

    for tag in NOISE_TAGS {
        let selector = parse_selector(tag);
        doomed.extend(document.select(&selector).map(|element| element.id()));
    }

    let with_class = parse_selector("[class]");
    for element in document.select(&with_class) {
        if let Some(class) = element.value().attr("class") {
            let class = class.to_lowercase();
            if NOISE_CLASS_HINTS.iter().any(|hint| class.contains(hint)) {
                doomed.push(element.id());
            }
        }
    }

    debug!(count = doomed.len(), "removing noise elements");
    for id in doomed {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}

/// Walk the fallback chain and return the first matching text
fn extract_content(document: &Html) -> String {
    for rule in CONTENT_CHAIN {
        match rule {
            ContentRule::Selectors(selectors) => {
                for selector_str in *selectors {
                    let selector = parse_selector(selector_str);
                    if let Some(element) = document.select(&selector).next() {
                        return element.text().collect();
                    }
                }
            }
            ContentRule::ClassContains(hints) => {
                let with_class = parse_selector("[class]");
                for element in document.select(&with_class) {
                    if let Some(class) = element.value().attr("class") {
                        let class = class.to_lowercase();
                        if hints.iter().any(|hint| class.contains(hint)) {
                            return element.text().collect();
                        }
                    }
                }
            }
            ContentRule::Body => {
                let body = parse_selector("body");
                if let Some(element) = document.select(&body).next() {
                    return element.text().collect();
                }
            }
            ContentRule::Document => {
                return document.root_element().text().collect();
            }
        }
    }
    String::new()
}

/// Parse a compile-time-constant selector
fn parse_selector(selector: &str) -> Selector {
    Selector::parse(selector).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_h1_wins_over_title_tag() {
        let html = "<html><head><title>Doc Title</title></head>\
                    <body><h1>Heading</h1><p>text</p></body></html>";
        let (title, _) = select_main_content(html);
        assert_eq!(title, "Heading");
    }

    #[test]
    fn test_title_falls_back_to_title_tag() {
        let html = "<html><head><title>Doc Title</title></head><body><p>text</p></body></html>";
        let (title, _) = select_main_content(html);
        assert_eq!(title, "Doc Title");
    }

    #[test]
    fn test_title_class_hook_and_default() {
        let html = r#"<html><body><div class="article-title">Hooked</div></body></html>"#;
        let (title, _) = select_main_content(html);
        assert_eq!(title, "Hooked");

        let (title, _) = select_main_content("<html><body><p>no title here</p></body></html>");
        assert_eq!(title, "Article");
    }

    #[test]
    fn test_title_in_header_survives_noise_removal() {
        // Title extraction runs before the header element is detached
        let html = "<html><body><header><h1>Header Title</h1></header>\
                    <article>Body text</article></body></html>";
        let (title, text) = select_main_content(html);
        assert_eq!(title, "Header Title");
        assert!(text.contains("Body text"));
        assert!(!text.contains("Header Title"));
    }

    #[test]
    fn test_article_wins_over_other_containers() {
        let html = r#"<html><body>
            <main>Main landmark text</main>
            <div class="main-content">Class hook text</div>
            <article>Article text</article>
        </body></html>"#;
        let (_, text) = select_main_content(html);
        assert!(text.contains("Article text"));
        assert!(!text.contains("Main landmark"));
        assert!(!text.contains("Class hook"));
    }

    #[test]
    fn test_main_selectors_before_class_hints() {
        let html = r#"<html><body>
            <div class="entry-text">Hint text</div>
            <div role="main">Role main text</div>
        </body></html>"#;
        let (_, text) = select_main_content(html);
        assert!(text.contains("Role main text"));
        assert!(!text.contains("Hint text"));
    }

    #[test]
    fn test_class_hint_match_is_case_insensitive_substring() {
        let html = r#"<html><body>
            <div class="SiteContentWrapper">Wrapped text</div>
            <p>loose paragraph</p>
        </body></html>"#;
        let (_, text) = select_main_content(html);
        assert!(text.contains("Wrapped text"));
        assert!(!text.contains("loose paragraph"));
    }

    #[test]
    fn test_falls_back_to_body_text() {
        let html = "<html><body><p>Just a paragraph.</p><p>Another.</p></body></html>";
        let (_, text) = select_main_content(html);
        assert!(text.contains("Just a paragraph."));
        assert!(text.contains("Another."));
    }

    #[test]
    fn test_noise_tags_removed() {
        let html = r#"<html><body>
            <nav>navigation links</nav>
            <script>var x = 1;</script>
            <style>.a { color: red }</style>
            <aside>related stories</aside>
            <iframe src="https://ads.example.com"></iframe>
            <p>Real content.</p>
            <footer>copyright</footer>
        </body></html>"#;
        let (_, text) = select_main_content(html);
        assert!(text.contains("Real content."));
        assert!(!text.contains("navigation links"));
        assert!(!text.contains("var x"));
        assert!(!text.contains("color: red"));
        assert!(!text.contains("related stories"));
        assert!(!text.contains("copyright"));
    }

    #[test]
    fn test_noise_classes_removed() {
        let html = r#"<html><body>
            <div class="Sidebar-Widget">sidebar junk</div>
            <div class="social-share">share buttons</div>
            <article>Keep this. <span class="advertisement-inline">buy now</span></article>
        </body></html>"#;
        let (_, text) = select_main_content(html);
        assert!(text.contains("Keep this."));
        assert!(!text.contains("sidebar junk"));
        assert!(!text.contains("share buttons"));
        assert!(!text.contains("buy now"));
    }

    #[test]
    fn test_empty_markup_yields_default_title_and_empty_text() {
        let (title, text) = select_main_content("");
        assert_eq!(title, "Article");
        assert!(text.trim().is_empty());
    }
}
