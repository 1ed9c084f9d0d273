use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

/// Elements dropped with their whole subtree before text is collected.
const EXCLUDED_ELEMENTS: [&str; 6] = ["script", "style", "noscript", "header", "footer", "nav"];

/// Elements that flow inside a line; no word break is inserted around them.
const INLINE_ELEMENTS: [&str; 21] = [
    "a", "abbr", "b", "bdi", "cite", "code", "data", "em", "i", "kbd", "label", "mark", "q", "s",
    "small", "span", "strong", "sub", "sup", "time", "u",
];

/// Reduces an HTML page to the text a reader would see in its body.
pub fn extract_visible_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let body = Selector::parse("body")
        .ok()
        .and_then(|selector| document.select(&selector).next());
    let root = body.unwrap_or_else(|| document.root_element());

    let mut raw = String::with_capacity(html.len() / 2);
    collect_text(root, &mut raw);

    collapse_whitespace(&raw)
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                let name = el.name();
                if EXCLUDED_ELEMENTS.contains(&name) {
                    continue;
                }
                let Some(child_element) = ElementRef::wrap(child) else {
                    continue;
                };

                let is_block = !INLINE_ELEMENTS.contains(&name);
                if is_block {
                    out.push(' ');
                }
                collect_text(child_element, out);
                if is_block {
                    out.push(' ');
                }
            }
            _ => {}
        }
    }
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
