//! FAQ entries.

use crate::document::FaqItem;
use crate::populator::regions;
use crate::populator::utils::escape;
use crate::populator::Fragment;

pub fn render(faq: Option<&[FaqItem]>) -> Vec<Fragment> {
    let Some(items) = faq.filter(|items| !items.is_empty()) else {
        return Vec::new();
    };

    let mut html = String::new();
    for item in items {
        html.push_str("<div class=\"faq-item\">\n");
        html.push_str(&format!("<h3>{}</h3>\n", escape(&item.question)));
        html.push_str(&format!("<p>{}</p>\n", escape(&item.answer)));
        html.push_str("</div>\n");
    }
    vec![Fragment::new(regions::FAQ, html)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_items() {
        let items = vec![FaqItem {
            question: "Can I join?".to_string(),
            answer: "Email us <here>".to_string(),
        }];
        let fragments = render(Some(&items));
        assert_eq!(fragments[0].region, regions::FAQ);
        assert!(fragments[0].html.contains("<h3>Can I join?</h3>"));
        assert!(fragments[0].html.contains("<p>Email us &lt;here&gt;</p>"));
    }

    #[test]
    fn test_absent_faq() {
        assert!(render(None).is_empty());
    }
}
