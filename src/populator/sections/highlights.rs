//! Highlight cards.

use crate::document::Highlight;
use crate::populator::regions;
use crate::populator::utils::escape;
use crate::populator::Fragment;

pub fn render(highlights: Option<&[Highlight]>) -> Vec<Fragment> {
    let Some(items) = highlights.filter(|items| !items.is_empty()) else {
        return Vec::new();
    };

    let mut html = String::new();
    for item in items {
        html.push_str("<div class=\"highlight-item\">\n");
        html.push_str(&format!("<h3>{}</h3>\n", escape(&item.title)));
        html.push_str(&format!("<p>{}</p>\n", escape(&item.description)));
        html.push_str("</div>\n");
    }
    vec![Fragment::new(regions::HIGHLIGHTS, html)]
}
