// src/core/html.rs
// Thin helpers over `scraper` so specs read like selectors, not DOM walking.

use scraper::{ElementRef, Html, Selector};

/// Compile a CSS selector; the error carries the offending source text.
pub fn selector(css: &str) -> Result<Selector, String> {
    Selector::parse(css).map_err(|e| format!("bad selector `{css}`: {e}"))
}

/// All elements matching `sel`, in document order.
pub fn select_all<'a>(doc: &'a Html, sel: &'a Selector) -> Vec<ElementRef<'a>> {
    doc.select(sel).collect()
}

/// First descendant of `el` matching `sel` that carries a non-empty `attr`.
pub fn first_attr<'a>(el: ElementRef<'a>, sel: &Selector, attr: &str) -> Option<&'a str> {
    el.select(sel)
        .filter_map(|a| a.value().attr(attr))
        .find(|v| !v.is_empty())
}

/// Concatenated text content of `el`, as-is.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}
