//! Page skeleton with named target regions.
//!
//! A region is delimited by a pair of marker comments:
//!
//! ```text
//! <div class="news-list"><!--@news-list-->static fallback<!--@/news-list--></div>
//! ```
//!
//! Only region contents are ever replaced. Everything outside the markers,
//! and the markers themselves, is kept byte-for-byte so a rendered page can
//! be parsed and populated again.

use thiserror::Error;

const MARKER_OPEN: &str = "<!--@";
const MARKER_CLOSE: &str = "-->";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("region marker at byte {offset} is not terminated")]
    UnterminatedMarker { offset: usize },

    #[error("region marker at byte {offset} has no name")]
    EmptyName { offset: usize },

    #[error("region '{inner}' opened inside region '{outer}'")]
    NestedRegion { outer: String, inner: String },

    #[error("closing marker for '{name}' has no matching opening marker")]
    UnmatchedClose { name: String },

    #[error("region '{name}' is never closed")]
    UnclosedRegion { name: String },

    #[error("region '{name}' appears more than once")]
    DuplicateRegion { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Region { name: String, content: String },
}

/// Parsed page skeleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    segments: Vec<Segment>,
}

impl Page {
    /// Parse a skeleton, locating all region markers.
    pub fn parse(html: &str) -> Result<Self, PageError> {
        let mut segments = Vec::new();
        let mut open: Option<(String, usize)> = None;
        let mut text_start = 0;
        let mut cursor = 0;

        while let Some(rel) = html[cursor..].find(MARKER_OPEN) {
            let marker_start = cursor + rel;
            let label_start = marker_start + MARKER_OPEN.len();
            let label_end = html[label_start..]
                .find(MARKER_CLOSE)
                .map(|i| label_start + i)
                .ok_or(PageError::UnterminatedMarker { offset: marker_start })?;
            let marker_end = label_end + MARKER_CLOSE.len();
            let label = html[label_start..label_end].trim();

            if let Some(closing) = label.strip_prefix('/') {
                let closing = closing.trim();
                match open.take() {
                    Some((name, content_start)) if name == closing => {
                        segments.push(Segment::Region {
                            name,
                            content: html[content_start..marker_start].to_string(),
                        });
                        text_start = marker_start;
                    }
                    _ => {
                        return Err(PageError::UnmatchedClose {
                            name: closing.to_string(),
                        })
                    }
                }
            } else {
                if label.is_empty() {
                    return Err(PageError::EmptyName { offset: marker_start });
                }
                if let Some((outer, _)) = open {
                    return Err(PageError::NestedRegion {
                        outer,
                        inner: label.to_string(),
                    });
                }
                let duplicate = segments
                    .iter()
                    .any(|s| matches!(s, Segment::Region { name, .. } if name == label));
                if duplicate {
                    return Err(PageError::DuplicateRegion {
                        name: label.to_string(),
                    });
                }
                segments.push(Segment::Text(html[text_start..marker_end].to_string()));
                open = Some((label.to_string(), marker_end));
            }
            cursor = marker_end;
        }

        if let Some((name, _)) = open {
            return Err(PageError::UnclosedRegion { name });
        }
        segments.push(Segment::Text(html[text_start..].to_string()));

        Ok(Self { segments })
    }

    /// Current content of a region.
    pub fn region(&self, name: &str) -> Option<&str> {
        self.segments.iter().find_map(|segment| match segment {
            Segment::Region { name: n, content } if n == name => Some(content.as_str()),
            _ => None,
        })
    }

    /// Names of all regions in document order.
    pub fn region_names(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Region { name, .. } => Some(name.as_str()),
                Segment::Text(_) => None,
            })
            .collect()
    }

    /// Replace a region's content. Returns false if the skeleton has no such region.
    pub fn replace_region(&mut self, name: &str, html: &str) -> bool {
        for segment in &mut self.segments {
            if let Segment::Region { name: n, content } = segment {
                if n == name {
                    *content = html.to_string();
                    return true;
                }
            }
        }
        tracing::debug!("Page has no region '{}'", name);
        false
    }

    /// Serialize the page, markers included.
    pub fn render(&self) -> String {
        let mut html = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => html.push_str(text),
                Segment::Region { content, .. } => html.push_str(content),
            }
        }
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKELETON: &str = "<html><!--@title--><title>Lab</title><!--@/title-->\
<body><div class=\"news-list\"><!--@news-list--><p>No news yet</p><!--@/news-list--></div></body></html>";

    #[test]
    fn test_parse_and_render_roundtrip_is_lossless() {
        let page = Page::parse(SKELETON).unwrap();
        assert_eq!(page.render(), SKELETON);
        assert_eq!(page.region_names(), vec!["title", "news-list"]);
        assert_eq!(page.region("news-list"), Some("<p>No news yet</p>"));
    }

    #[test]
    fn test_replace_region_keeps_markers() {
        let mut page = Page::parse(SKELETON).unwrap();
        assert!(page.replace_region("news-list", "<div>item</div>"));
        let html = page.render();
        assert!(html.contains("<!--@news-list--><div>item</div><!--@/news-list-->"));
        assert!(html.contains("<title>Lab</title>"));

        // Re-parse a rendered page and populate again.
        let mut again = Page::parse(&html).unwrap();
        assert!(again.replace_region("news-list", "<div>other</div>"));
        assert_eq!(again.region("news-list"), Some("<div>other</div>"));
    }

    #[test]
    fn test_replace_missing_region() {
        let mut page = Page::parse(SKELETON).unwrap();
        assert!(!page.replace_region("faq", "x"));
        assert_eq!(page.render(), SKELETON);
    }

    #[test]
    fn test_page_without_regions() {
        let page = Page::parse("<p>plain</p>").unwrap();
        assert!(page.region_names().is_empty());
        assert_eq!(page.render(), "<p>plain</p>");
    }

    #[test]
    fn test_malformed_markers() {
        assert_eq!(
            Page::parse("<!--@a-->x"),
            Err(PageError::UnclosedRegion { name: "a".to_string() })
        );
        assert_eq!(
            Page::parse("x<!--@/a-->"),
            Err(PageError::UnmatchedClose { name: "a".to_string() })
        );
        assert_eq!(
            Page::parse("<!--@a--><!--@b--><!--@/b--><!--@/a-->"),
            Err(PageError::NestedRegion { outer: "a".to_string(), inner: "b".to_string() })
        );
        assert_eq!(
            Page::parse("<!--@a--><!--@/a--><!--@a--><!--@/a-->"),
            Err(PageError::DuplicateRegion { name: "a".to_string() })
        );
        assert_eq!(Page::parse("<!--@-->"), Err(PageError::EmptyName { offset: 0 }));
        assert_eq!(Page::parse("ab<!--@x"), Err(PageError::UnterminatedMarker { offset: 2 }));
    }

    #[test]
    fn test_plain_comments_are_text() {
        let html = "<!-- note --><!--@a-->1<!--@/a-->";
        let page = Page::parse(html).unwrap();
        assert_eq!(page.region("a"), Some("1"));
        assert_eq!(page.render(), html);
    }
}
