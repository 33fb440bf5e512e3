//! About: mission, research areas and values, each independently optional.

use crate::document::{non_empty, present, About};
use crate::populator::regions;
use crate::populator::utils::escape;
use crate::populator::Fragment;

pub fn render(about: Option<&About>) -> Vec<Fragment> {
    let Some(about) = about else {
        return Vec::new();
    };
    let mut fragments = Vec::new();

    if let Some(mission) = present(&about.mission) {
        fragments.push(Fragment::new(
            regions::ABOUT_MISSION,
            format!("<p class=\"mission\">{}</p>\n", escape(mission)),
        ));
    }

    if let Some(areas) = non_empty(&about.research_areas) {
        let mut html = String::new();
        for area in areas {
            html.push_str("<div class=\"research-area\">\n");
            html.push_str(&format!("<h3>{}</h3>\n", escape(&area.title)));
            html.push_str(&format!("<p>{}</p>\n", escape(&area.description)));
            html.push_str("</div>\n");
        }
        fragments.push(Fragment::new(regions::ABOUT_RESEARCH_AREAS, html));
    }

    if let Some(values) = non_empty(&about.values) {
        let mut html = String::from("<ul class=\"values-list\">\n");
        for value in values {
            html.push_str(&format!("<li>{}</li>\n", escape(value)));
        }
        html.push_str("</ul>\n");
        fragments.push(Fragment::new(regions::ABOUT_VALUES, html));
    }

    fragments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ResearchArea;

    #[test]
    fn test_parts_are_independent() {
        let about = About {
            mission: None,
            research_areas: Some(vec![ResearchArea {
                title: "Perception".to_string(),
                description: "Seeing machines".to_string(),
            }]),
            values: Some(vec!["Openness".to_string(), "Rigor".to_string()]),
        };
        let fragments = render(Some(&about));
        let targets: Vec<&str> = fragments.iter().map(|f| f.region.as_str()).collect();
        assert_eq!(targets, vec![regions::ABOUT_RESEARCH_AREAS, regions::ABOUT_VALUES]);
        assert!(fragments[1].html.contains("<li>Rigor</li>"));
    }

    #[test]
    fn test_mission_only() {
        let about = About {
            mission: Some("Build vision systems".to_string()),
            ..About::default()
        };
        let fragments = render(Some(&about));
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].region, regions::ABOUT_MISSION);
    }

    #[test]
    fn test_empty_about() {
        assert!(render(Some(&About::default())).is_empty());
        assert!(render(None).is_empty());
    }
}
