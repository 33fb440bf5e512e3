//! Projects.
//!
//! Cards: optional image, title linked to `url`, description, link row
//! Website, GitHub, Demo.
//!
//! Grid: the whole entry navigates to `url`; link row Paper, arXiv, Code,
//! Data. Nested links stop click propagation so they never also trigger the
//! entry's navigation.

use crate::config::ProjectLayout;
use crate::document::{present, Project, ProjectLinks};
use crate::populator::regions;
use crate::populator::utils::{anchors, escape, present_links, Link};
use crate::populator::Fragment;

const NESTED_LINK_ATTRS: &str =
    " target=\"_blank\" rel=\"noopener\" onclick=\"event.stopPropagation()\"";

pub fn render(projects: Option<&[Project]>, layout: ProjectLayout) -> Vec<Fragment> {
    let Some(items) = projects.filter(|items| !items.is_empty()) else {
        return Vec::new();
    };

    let html = match layout {
        ProjectLayout::Cards => items.iter().map(project_card).collect::<String>(),
        ProjectLayout::Grid => items.iter().map(grid_entry).collect::<String>(),
    };
    vec![Fragment::new(regions::PROJECTS, html)]
}

pub fn card_links(links: &ProjectLinks) -> Vec<Link<'_>> {
    present_links([
        ("Website", &links.website),
        ("GitHub", &links.github),
        ("Demo", &links.demo),
    ])
}

pub fn grid_links(links: &ProjectLinks) -> Vec<Link<'_>> {
    present_links([
        ("Paper", &links.paper),
        ("arXiv", &links.arxiv),
        ("Code", &links.github),
        ("Data", &links.data),
    ])
}

fn image_block(project: &Project) -> String {
    match present(&project.image) {
        Some(image) => format!(
            "<div class=\"project-image\"><img src=\"{}\" alt=\"{}\"></div>\n",
            escape(image.trim()),
            escape(&project.title)
        ),
        None => String::new(),
    }
}

fn project_card(project: &Project) -> String {
    let mut html = String::from("<div class=\"project-card\">\n");
    html.push_str(&image_block(project));

    match present(&project.url) {
        Some(url) => html.push_str(&format!(
            "<h3><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></h3>\n",
            escape(url.trim()),
            escape(&project.title)
        )),
        None => html.push_str(&format!("<h3>{}</h3>\n", escape(&project.title))),
    }
    html.push_str(&format!("<p>{}</p>\n", escape(&project.description)));

    let links = project.links.as_ref().map(card_links).unwrap_or_default();
    if !links.is_empty() {
        html.push_str(&format!(
            "<div class=\"project-links\">{}</div>\n",
            anchors(&links, " target=\"_blank\" rel=\"noopener\"", "")
        ));
    }
    html.push_str("</div>\n");
    html
}

fn grid_entry(project: &Project) -> String {
    let mut html = match present(&project.url) {
        Some(url) => format!(
            "<div class=\"project-card clickable\" data-href=\"{}\" onclick=\"window.open(this.dataset.href, '_blank')\">\n",
            escape(url.trim())
        ),
        None => String::from("<div class=\"project-card\">\n"),
    };
    html.push_str(&image_block(project));
    html.push_str(&format!("<h3>{}</h3>\n", escape(&project.title)));
    html.push_str(&format!("<p>{}</p>\n", escape(&project.description)));

    let links = project.links.as_ref().map(grid_links).unwrap_or_default();
    if !links.is_empty() {
        html.push_str(&format!(
            "<div class=\"project-links\">{}</div>\n",
            anchors(&links, NESTED_LINK_ATTRS, "")
        ));
    }
    html.push_str("</div>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::SiteDocument;

    fn projects() -> Vec<Project> {
        SiteDocument::from_json(
            r#"{"projects": [
                {"title": "Atlas", "description": "3D maps", "url": "https://atlas.example",
                 "image": "img/atlas.png",
                 "links": {"demo": "https://demo", "github": "https://gh", "paper": "https://paper", "data": "https://data"}},
                {"title": "Plain", "description": "No links"}
            ]}"#,
        )
        .unwrap()
        .projects
        .unwrap()
    }

    #[test]
    fn test_cards_layout() {
        let html = &render(Some(&projects()), ProjectLayout::Cards)[0].html;
        assert!(html.contains("<h3><a href=\"https://atlas.example\""));
        assert!(html.contains("<h3>Plain</h3>"));
        assert!(html.find(">GitHub<").unwrap() < html.find(">Demo<").unwrap());
        assert!(!html.contains(">Paper<"));
        assert_eq!(html.matches("project-links").count(), 1);
        assert_eq!(html.matches("project-image").count(), 1);
    }

    #[test]
    fn test_grid_nested_links_stop_propagation() {
        let html = &render(Some(&projects()), ProjectLayout::Grid)[0].html;
        assert!(html.contains("data-href=\"https://atlas.example\""));

        let labels: Vec<&str> = grid_links(projects()[0].links.as_ref().unwrap())
            .iter()
            .map(|l| l.label)
            .collect();
        assert_eq!(labels, vec!["Paper", "Code", "Data"]);

        let anchors = html.matches("<a href=").count();
        assert_eq!(anchors, 3);
        assert_eq!(html.matches("event.stopPropagation()").count(), anchors);

        // Entry without a url is not clickable
        assert_eq!(html.matches("clickable").count(), 1);
    }

    #[test]
    fn test_absent_projects() {
        assert!(render(None, ProjectLayout::Grid).is_empty());
        assert!(render(Some(&[]), ProjectLayout::Cards).is_empty());
    }
}
