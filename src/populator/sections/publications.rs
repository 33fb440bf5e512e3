//! Publications.
//!
//! Flat layout keeps input order with links Paper, Code, Project, Slides,
//! Demo. Grouped layout buckets by `type` in configured order, sorts each
//! bucket by year (newest first, missing year last, ties in input order)
//! and joins links Project, Paper, arXiv, Code with a separator.

use crate::config::{PopulatorConfig, PublicationGroup, PublicationLayout};
use crate::document::{present, Publication, PublicationLinks};
use crate::populator::regions;
use crate::populator::utils::{anchors, escape, present_links, Link};
use crate::populator::Fragment;

pub const LINK_SEPARATOR: &str = " | ";

pub fn render(publications: Option<&[Publication]>, config: &PopulatorConfig) -> Vec<Fragment> {
    let Some(items) = publications.filter(|items| !items.is_empty()) else {
        return Vec::new();
    };

    let html = match config.publication_layout {
        PublicationLayout::Flat => items.iter().map(flat_entry).collect::<String>(),
        PublicationLayout::Grouped => {
            let mut html = String::new();
            for (group, members) in group_publications(items, &config.publication_groups) {
                html.push_str(&format!(
                    "<h2 class=\"publication-group\">{}</h2>\n",
                    escape(&group.label)
                ));
                for publication in members {
                    html.push_str(&grouped_entry(publication));
                }
            }
            html
        }
    };

    if html.is_empty() {
        tracing::debug!("No publication matched a configured group");
        return Vec::new();
    }
    vec![Fragment::new(regions::PUBLICATIONS, html)]
}

/// Bucket publications by type in `groups` order, each sorted newest first.
///
/// Empty buckets are dropped; publications matching no bucket are left out.
pub fn group_publications<'a, 'g>(
    items: &'a [Publication],
    groups: &'g [PublicationGroup],
) -> Vec<(&'g PublicationGroup, Vec<&'a Publication>)> {
    groups
        .iter()
        .filter_map(|group| {
            let mut members: Vec<&Publication> = items
                .iter()
                .filter(|p| {
                    present(&p.kind)
                        .map(|kind| kind.trim().eq_ignore_ascii_case(group.kind.trim()))
                        .unwrap_or(false)
                })
                .collect();
            if members.is_empty() {
                return None;
            }
            // Stable: equal years keep input order
            members.sort_by(|a, b| b.year.unwrap_or(0).cmp(&a.year.unwrap_or(0)));
            Some((group, members))
        })
        .collect()
}

fn flat_links(links: &PublicationLinks) -> Vec<Link<'_>> {
    present_links([
        ("Paper", &links.paper),
        ("Code", &links.code),
        ("Project", &links.project),
        ("Slides", &links.slides),
        ("Demo", &links.demo),
    ])
}

fn grouped_links(links: &PublicationLinks) -> Vec<Link<'_>> {
    present_links([
        ("Project", &links.project),
        ("Paper", &links.paper),
        ("arXiv", &links.arxiv),
        ("Code", &links.code),
    ])
}

fn entry_head(publication: &Publication) -> String {
    let mut html = String::from("<div class=\"publication\">\n");
    html.push_str(&format!("<h3>{}</h3>\n", escape(&publication.title)));
    html.push_str(&format!("<p class=\"authors\">{}</p>\n", escape(&publication.authors)));
    html
}

fn flat_entry(publication: &Publication) -> String {
    let mut html = entry_head(publication);
    html.push_str(&format!("<p class=\"venue\">{}</p>\n", escape(&publication.venue)));
    let links = publication.links.as_ref().map(flat_links).unwrap_or_default();
    if !links.is_empty() {
        html.push_str(&format!("<div class=\"links\">{}</div>\n", anchors(&links, "", "")));
    }
    html.push_str("</div>\n");
    html
}

fn grouped_entry(publication: &Publication) -> String {
    let mut html = entry_head(publication);
    match publication.year {
        Some(year) => html.push_str(&format!(
            "<p class=\"venue\">{} <span class=\"year\">{}</span></p>\n",
            escape(&publication.venue),
            year
        )),
        None => html.push_str(&format!("<p class=\"venue\">{}</p>\n", escape(&publication.venue))),
    }
    let links = publication.links.as_ref().map(grouped_links).unwrap_or_default();
    if !links.is_empty() {
        html.push_str(&format!(
            "<div class=\"links\">{}</div>\n",
            anchors(&links, " target=\"_blank\" rel=\"noopener\"", LINK_SEPARATOR)
        ));
    }
    html.push_str("</div>\n");
    html
}
