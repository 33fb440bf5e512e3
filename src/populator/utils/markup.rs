//! Markup helpers: escaping and link rows.

use crate::document::present;

/// Escape text for HTML element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// One entry of a link row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link<'a> {
    pub label: &'static str,
    pub href: &'a str,
}

/// Keep the candidates whose target is present, preserving their order.
pub fn present_links<'a, const N: usize>(
    candidates: [(&'static str, &'a Option<String>); N],
) -> Vec<Link<'a>> {
    candidates
        .into_iter()
        .filter_map(|(label, href)| present(href).map(|href| Link { label, href: href.trim() }))
        .collect()
}

/// Render `<a>` tags for a link row, joined by `separator`.
///
/// `extra_attrs` is appended verbatim to every anchor.
pub fn anchors(links: &[Link<'_>], extra_attrs: &str, separator: &str) -> String {
    links
        .iter()
        .map(|link| {
            format!(
                "<a href=\"{}\"{}>{}</a>",
                escape(link.href),
                extra_attrs,
                link.label
            )
        })
        .collect::<Vec<_>>()
        .join(separator)
}
