//! Photo gallery cards. Caption and category are optional per photo.

use crate::document::{present, Photo};
use crate::populator::regions;
use crate::populator::utils::escape;
use crate::populator::Fragment;

pub fn render(photos: Option<&[Photo]>) -> Vec<Fragment> {
    let Some(items) = photos.filter(|items| !items.is_empty()) else {
        return Vec::new();
    };

    let mut html = String::new();
    for photo in items {
        let caption = present(&photo.caption);
        match present(&photo.category) {
            Some(category) => html.push_str(&format!(
                "<div class=\"photo-item\" data-category=\"{}\">\n",
                escape(category)
            )),
            None => html.push_str("<div class=\"photo-item\">\n"),
        }
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">\n",
            escape(&photo.url),
            escape(caption.unwrap_or(""))
        ));
        if let Some(caption) = caption {
            html.push_str(&format!("<p class=\"photo-caption\">{}</p>\n", escape(caption)));
        }
        html.push_str("</div>\n");
    }
    vec![Fragment::new(regions::PHOTOS, html)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_caption_and_category() {
        let photos = vec![
            Photo {
                url: "img/retreat.jpg".to_string(),
                caption: Some("Lab retreat".to_string()),
                category: Some("events".to_string()),
            },
            Photo {
                url: "img/bare.jpg".to_string(),
                caption: None,
                category: None,
            },
        ];
        let html = &render(Some(&photos))[0].html;
        assert!(html.contains("data-category=\"events\""));
        assert!(html.contains("<p class=\"photo-caption\">Lab retreat</p>"));
        assert!(html.contains("<img src=\"img/bare.jpg\" alt=\"\""));
        assert_eq!(html.matches("photo-caption").count(), 1);
    }
}
