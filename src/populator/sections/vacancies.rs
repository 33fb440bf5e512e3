//! Open position cards.

use crate::document::{present, Vacancy};
use crate::populator::regions;
use crate::populator::utils::escape;
use crate::populator::Fragment;

pub fn render(vacancies: Option<&[Vacancy]>) -> Vec<Fragment> {
    let Some(items) = vacancies.filter(|items| !items.is_empty()) else {
        return Vec::new();
    };

    let mut html = String::new();
    for vacancy in items {
        html.push_str("<div class=\"vacancy-card\">\n");
        html.push_str(&format!("<h3>{}</h3>\n", escape(&vacancy.title)));
        html.push_str(&format!("<p>{}</p>\n", escape(&vacancy.description)));
        if let Some(link) = present(&vacancy.link) {
            html.push_str(&format!(
                "<a href=\"{}\" class=\"learn-more\" target=\"_blank\" rel=\"noopener\">Learn More</a>\n",
                escape(link.trim())
            ));
        }
        html.push_str("</div>\n");
    }
    vec![Fragment::new(regions::VACANCIES, html)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_learn_more_only_with_link() {
        let items = vec![
            Vacancy {
                title: "PhD position".to_string(),
                description: "Fully funded".to_string(),
                link: Some("https://jobs.example/1".to_string()),
            },
            Vacancy {
                title: "Intern".to_string(),
                description: "Summer".to_string(),
                link: None,
            },
        ];
        let html = &render(Some(&items))[0].html;
        assert_eq!(html.matches("Learn More").count(), 1);
        assert!(html.contains("href=\"https://jobs.example/1\""));
    }
}
