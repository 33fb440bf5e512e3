//! Team roster.
//!
//! Role-groups come from configuration, in order, each with its own target
//! region. Alumni is a derived group: `former_members` followed by `alumni`.
//!
//! Two layouts:
//! - cards: photo or placeholder, name, role, description, school, icon links
//! - table: linked name + one synthesized description cell

use crate::config::{PopulatorConfig, TeamLayout};
use crate::document::{present, Person, Team};
use crate::populator::regions;
use crate::populator::utils::{escape, present_links, Link};
use crate::populator::Fragment;

pub fn render(team: Option<&Team>, config: &PopulatorConfig) -> Vec<Fragment> {
    let Some(team) = team else {
        return Vec::new();
    };
    let mut fragments = Vec::new();

    for group in &config.role_groups {
        let Some(members) = team.group(&group.key) else {
            continue;
        };
        let html = match config.team_layout {
            TeamLayout::Cards => members.iter().map(member_card).collect::<String>(),
            TeamLayout::Table => members.iter().map(member_row).collect::<String>(),
        };
        tracing::debug!("{}: {} members", group.label, members.len());
        fragments.push(Fragment::new(group.region.as_str(), html));
    }

    let alumni = team.all_alumni();
    if !alumni.is_empty() {
        let html = match config.team_layout {
            TeamLayout::Cards => alumni.iter().map(|p| alumni_card(p)).collect::<String>(),
            TeamLayout::Table => alumni.iter().map(|p| alumni_row(p)).collect::<String>(),
        };
        fragments.push(Fragment::new(regions::ALUMNI, html));
    }

    fragments
}

// ============================================================================
// Links
// ============================================================================

/// Icon link row entries, in fixed order.
pub fn member_links(person: &Person) -> Vec<Link<'_>> {
    present_links([
        ("Email", &person.email),
        ("Website", &person.website),
        ("GitHub", &person.github),
        ("LinkedIn", &person.linkedin),
        ("Google Scholar", &person.google_scholar),
    ])
}

/// Profile link for the table layout: website, then LinkedIn, then Scholar.
pub fn profile_link(person: &Person) -> Option<&str> {
    present(&person.website)
        .or_else(|| present(&person.linkedin))
        .or_else(|| present(&person.google_scholar))
        .map(str::trim)
}

fn icon_link(link: &Link<'_>) -> String {
    match link.label {
        "Email" => format!(
            "<a href=\"mailto:{}\" title=\"Email\"><i class=\"fas fa-envelope\"></i></a>",
            escape(link.href)
        ),
        label => {
            let icon = match label {
                "Website" => "fas fa-globe",
                "GitHub" => "fab fa-github",
                "LinkedIn" => "fab fa-linkedin",
                _ => "fas fa-graduation-cap",
            };
            format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener\" title=\"{}\"><i class=\"{}\"></i></a>",
                escape(link.href),
                label,
                icon
            )
        }
    }
}

// ============================================================================
// Cards
// ============================================================================

fn member_card(person: &Person) -> String {
    let mut html = String::from("<div class=\"member\">\n");

    html.push_str("<div class=\"member-photo\">\n");
    match present(&person.image) {
        Some(image) => html.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">\n",
            escape(image.trim()),
            escape(&person.name)
        )),
        None => html.push_str(
            "<div class=\"placeholder-avatar\"><i class=\"fas fa-user\"></i></div>\n",
        ),
    }
    html.push_str("</div>\n");

    html.push_str(&format!("<h3>{}</h3>\n", escape(&person.name)));
    if let Some(role) = present(&person.role) {
        html.push_str(&format!("<p class=\"role\">{}</p>\n", escape(role)));
    }
    if let Some(description) = present(&person.description) {
        html.push_str(&format!("<p>{}</p>\n", escape(description)));
    }
    if let Some(school) = present(&person.school) {
        html.push_str(&format!("<p class=\"school\">{}</p>\n", escape(school)));
    }

    let links = member_links(person);
    if !links.is_empty() {
        html.push_str("<div class=\"member-links\">");
        for link in &links {
            html.push_str(&icon_link(link));
        }
        html.push_str("</div>\n");
    }

    html.push_str("</div>\n");
    html
}

/// One-line alumni descriptor for cards: role, else degree, else description.
pub fn alumni_descriptor(person: &Person) -> Option<&str> {
    present(&person.role)
        .or_else(|| present(&person.degree))
        .or_else(|| present(&person.description))
}

fn alumni_card(person: &Person) -> String {
    let mut html = String::from("<div class=\"alumni-item\">\n");
    html.push_str(&format!("<h3>{}</h3>\n", escape(&person.name)));
    if let Some(descriptor) = alumni_descriptor(person) {
        html.push_str(&format!("<p class=\"degree\">{}</p>\n", escape(descriptor)));
    }
    if let Some(thesis) = present(&person.thesis) {
        html.push_str(&format!(
            "<p class=\"thesis\"><em>\"{}\"</em></p>\n",
            escape(thesis)
        ));
    }
    if let Some(position) = present(&person.current_position) {
        html.push_str(&format!(
            "<p class=\"current-position\">Now: {}</p>\n",
            escape(position)
        ));
    }
    html.push_str("</div>\n");
    html
}

// ============================================================================
// Table
// ============================================================================

fn name_cell(person: &Person) -> String {
    match profile_link(person) {
        Some(href) => format!(
            "<td class=\"member-name\"><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></td>",
            escape(href),
            escape(&person.name)
        ),
        None => format!("<td class=\"member-name\">{}</td>", escape(&person.name)),
    }
}

/// Table description for current members: role, description, school.
pub fn member_summary(person: &Person) -> String {
    [&person.role, &person.description, &person.school]
        .into_iter()
        .filter_map(present)
        .collect::<Vec<_>>()
        .join(", ")
}

fn member_row(person: &Person) -> String {
    format!(
        "<tr class=\"member-row\">{}<td class=\"member-description\">{}</td></tr>\n",
        name_cell(person),
        escape(&member_summary(person))
    )
}

/// Table description for alumni.
///
/// `degree (duration)` and `Now: position` joined by "; "; `description`
/// only when neither is available; thesis appended in quotes.
pub fn alumni_summary(person: &Person) -> String {
    let mut parts = Vec::new();
    if let Some(degree) = present(&person.degree) {
        match present(&person.duration) {
            Some(duration) => parts.push(format!("{} ({})", degree, duration)),
            None => parts.push(degree.to_string()),
        }
    }
    if let Some(position) = present(&person.current_position) {
        parts.push(format!("Now: {}", position));
    }

    let mut summary = if parts.is_empty() {
        present(&person.description).unwrap_or("").to_string()
    } else {
        parts.join("; ")
    };

    if let Some(thesis) = present(&person.thesis) {
        if summary.is_empty() {
            summary = format!("\"{}\"", thesis);
        } else {
            summary.push_str(&format!(", \"{}\"", thesis));
        }
    }
    summary
}

fn alumni_row(person: &Person) -> String {
    format!(
        "<tr class=\"alumni-row\">{}<td class=\"member-description\">{}</td></tr>\n",
        name_cell(person),
        escape(&alumni_summary(person))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::SiteDocument;

    fn person(name: &str) -> Person {
        Person {
            name: name.to_string(),
            ..Person::default()
        }
    }

    fn team_from(json: &str) -> Team {
        SiteDocument::from_json(json).unwrap().team.unwrap()
    }

    #[test]
    fn test_link_row_order_and_presence() {
        let p = Person {
            google_scholar: Some("https://scholar.example/ada".to_string()),
            email: Some("ada@lab.example".to_string()),
            github: Some("https://github.com/ada".to_string()),
            ..person("Ada")
        };
        let labels: Vec<&str> = member_links(&p).iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Email", "GitHub", "Google Scholar"]);

        let card = member_card(&p);
        assert!(card.contains("href=\"mailto:ada@lab.example\""));
        let email_at = card.find("fa-envelope").unwrap();
        let github_at = card.find("fa-github").unwrap();
        let scholar_at = card.find("fa-graduation-cap").unwrap();
        assert!(email_at < github_at && github_at < scholar_at);
    }

    #[test]
    fn test_no_links_omits_row() {
        let card = member_card(&person("Bob"));
        assert!(!card.contains("member-links"));
        assert!(card.contains("placeholder-avatar"));
    }

    #[test]
    fn test_card_field_order() {
        let p = Person {
            role: Some("Professor".to_string()),
            description: Some("Vision".to_string()),
            school: Some("Engineering".to_string()),
            image: Some("img/ada.jpg".to_string()),
            ..person("Ada")
        };
        let card = member_card(&p);
        assert!(card.contains("<img src=\"img/ada.jpg\" alt=\"Ada\">"));
        let role_at = card.find("class=\"role\"").unwrap();
        let school_at = card.find("class=\"school\"").unwrap();
        assert!(card.find("<h3>Ada</h3>").unwrap() < role_at);
        assert!(role_at < card.find("<p>Vision</p>").unwrap());
        assert!(card.find("<p>Vision</p>").unwrap() < school_at);
    }

    #[test]
    fn test_groups_follow_config_and_skip_empty() {
        let team = team_from(
            r#"{"team": {
                "undergraduate_students": [{"name": "Uma"}],
                "faculty": [{"name": "Fay"}],
                "phd_students": []
            }}"#,
        );
        let fragments = render(Some(&team), &PopulatorConfig::default());
        let targets: Vec<&str> = fragments.iter().map(|f| f.region.as_str()).collect();
        assert_eq!(targets, vec![regions::TEAM_FACULTY, regions::TEAM_UNDERGRADUATE]);
    }

    #[test]
    fn test_alumni_merge_and_descriptor() {
        let team = team_from(
            r#"{"team": {
                "alumni": [{"name": "Al", "degree": "PhD 2020", "thesis": "On Seeing", "current_position": "Google"}],
                "former_members": [{"name": "Fo", "role": "Postdoc", "degree": "PhD"}]
            }}"#,
        );
        let fragments = render(Some(&team), &PopulatorConfig::default());
        assert_eq!(fragments.len(), 1);
        let html = &fragments[0].html;
        assert_eq!(fragments[0].region, regions::ALUMNI);
        assert!(html.find("<h3>Fo</h3>").unwrap() < html.find("<h3>Al</h3>").unwrap());
        assert!(html.contains("<p class=\"degree\">Postdoc</p>"));
        assert!(html.contains("<p class=\"degree\">PhD 2020</p>"));
        assert!(html.contains("<p class=\"thesis\"><em>\"On Seeing\"</em></p>"));
        assert!(html.contains("Now: Google"));
    }

    #[test]
    fn test_descriptor_precedence() {
        let with_description = Person {
            description: Some("Visiting".to_string()),
            ..person("V")
        };
        assert_eq!(alumni_descriptor(&with_description), Some("Visiting"));
        let with_degree = Person {
            degree: Some("MSc".to_string()),
            ..with_description.clone()
        };
        assert_eq!(alumni_descriptor(&with_degree), Some("MSc"));
        assert_eq!(alumni_descriptor(&person("N")), None);
    }

    #[test]
    fn test_no_alumni_no_fragment() {
        let team = team_from(r#"{"team": {"alumni": [], "faculty": []}}"#);
        assert!(render(Some(&team), &PopulatorConfig::default()).is_empty());
    }

    #[test]
    fn test_table_profile_link_precedence() {
        let p = Person {
            google_scholar: Some("https://scholar".to_string()),
            linkedin: Some("https://linkedin".to_string()),
            ..person("Ada")
        };
        assert_eq!(profile_link(&p), Some("https://linkedin"));
        let p = Person {
            website: Some("https://ada.dev".to_string()),
            ..p
        };
        assert_eq!(profile_link(&p), Some("https://ada.dev"));
        assert_eq!(profile_link(&person("X")), None);

        let row = member_row(&p);
        assert!(row.contains("<a href=\"https://ada.dev\""));
    }

    #[test]
    fn test_table_summaries() {
        let member = Person {
            role: Some("PhD Student".to_string()),
            school: Some("CS".to_string()),
            ..person("M")
        };
        assert_eq!(member_summary(&member), "PhD Student, CS");

        let alum = Person {
            degree: Some("PhD".to_string()),
            duration: Some("2015-2020".to_string()),
            current_position: Some("Meta".to_string()),
            description: Some("ignored".to_string()),
            ..person("A")
        };
        assert_eq!(alumni_summary(&alum), "PhD (2015-2020); Now: Meta");

        let fallback = Person {
            description: Some("Visiting scholar".to_string()),
            thesis: Some("Depth".to_string()),
            ..person("B")
        };
        assert_eq!(alumni_summary(&fallback), "Visiting scholar, \"Depth\"");

        let degree_only = Person {
            degree: Some("MSc".to_string()),
            ..person("C")
        };
        assert_eq!(alumni_summary(&degree_only), "MSc");
    }

    #[test]
    fn test_table_layout_rows() {
        let config = PopulatorConfig {
            team_layout: TeamLayout::Table,
            ..PopulatorConfig::default()
        };
        let team = team_from(
            r#"{"team": {"faculty": [{"name": "Fay", "role": "PI"}], "alumni": [{"name": "Al", "degree": "PhD"}]}}"#,
        );
        let fragments = render(Some(&team), &config);
        assert_eq!(fragments.len(), 2);
        assert!(fragments[0].html.starts_with("<tr class=\"member-row\">"));
        assert!(fragments[1].html.contains("<td class=\"member-description\">PhD</td>"));
    }
}
