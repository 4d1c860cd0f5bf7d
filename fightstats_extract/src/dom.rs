//! Structural helpers over the parsed document tree.
//!
//! Regions of interest are located by class-attribute substring (class
//! lists concatenate many tokens, so substring matching is deliberate) and
//! text is read with first-child rules: markup either holds text directly
//! or wraps it in a single decoration element.

use std::sync::LazyLock;

use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node, Selector};

static TABLE_TITLE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"div[class*="Table__Title"]"#).expect("table title selector")
});
static TBODY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tbody").expect("tbody selector"));

/// Children that carry content: elements, and text nodes that are more
/// than inter-tag whitespace.
fn content_children<'a>(el: ElementRef<'a>) -> impl Iterator<Item = NodeRef<'a, Node>> {
    el.children().filter(|node| match node.value().as_text() {
        Some(text) => !text.trim().is_empty(),
        None => node.value().as_element().is_some(),
    })
}

/// Trimmed text held directly by the element: its first content child when
/// that child is a text node, `""` otherwise.
pub fn own_text(el: ElementRef<'_>) -> String {
    content_children(el)
        .next()
        .and_then(|node| node.value().as_text().map(|text| text.trim().to_string()))
        .unwrap_or_default()
}

/// Text of a table cell. A cell either holds its text directly or wraps it
/// one level down in a decoration element (typically a link); an empty
/// cell yields `""`.
pub fn cell_text(cell: ElementRef<'_>) -> String {
    match content_children(cell).next() {
        Some(first) => match ElementRef::wrap(first) {
            Some(inner) => own_text(inner),
            None => first
                .value()
                .as_text()
                .map(|text| text.trim().to_string())
                .unwrap_or_default(),
        },
        None => String::new(),
    }
}

/// Text nested one container down: the element's first child element's own
/// text. Bio values render as `<div><div>value</div></div>`.
pub fn nested_text(el: ElementRef<'_>) -> String {
    content_children(el)
        .next()
        .and_then(ElementRef::wrap)
        .map(own_text)
        .unwrap_or_default()
}

/// The next sibling that is an element, skipping intervening text nodes.
pub fn next_sibling_element<'a>(el: ElementRef<'a>) -> Option<ElementRef<'a>> {
    let mut node = el.next_sibling();
    while let Some(candidate) = node {
        if let Some(found) = ElementRef::wrap(candidate) {
            return Some(found);
        }
        node = candidate.next_sibling();
    }
    None
}

/// Pre-order sequence of text-bearing leaf elements under `root`: elements
/// with no element children whose own text is non-empty.
pub fn leaf_texts<'a>(root: ElementRef<'a>) -> impl Iterator<Item = String> + 'a {
    root.descendants()
        .filter_map(ElementRef::wrap)
        .filter_map(|el| {
            if el.children().any(|child| child.value().as_element().is_some()) {
                return None;
            }
            let text = own_text(el);
            (!text.is_empty()).then_some(text)
        })
}

/// True when the document contains a titled panel labeled exactly `label`.
pub fn has_table_titled(doc: &Html, label: &str) -> bool {
    doc.select(&TABLE_TITLE).any(|el| own_text(el) == label)
}

/// Document-order sequence of table bodies, for ordinal-based
/// disambiguation of same-shaped tables.
pub fn tbodies(doc: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    doc.select(&TBODY)
}

/// First table body inside `el`, if any.
pub fn first_tbody_in<'a>(el: ElementRef<'a>) -> Option<ElementRef<'a>> {
    el.select(&TBODY).next()
}

/// Collects the `td` texts of every `tr` child of a table body, in
/// document order.
pub fn body_rows(tbody: ElementRef<'_>) -> Vec<Vec<String>> {
    tbody
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "tr")
        .map(|tr| {
            tr.children()
                .filter_map(ElementRef::wrap)
                .filter(|child| child.value().name() == "td")
                .map(cell_text)
                .collect()
        })
        .collect()
}
