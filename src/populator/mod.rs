//! Content Populator
//!
//! Turns a loaded Site Document into page fragments, one routine per
//! section, and writes them into the page's target regions.
//!
//! ## Sections (render order)
//! 1. Lab - title, logo, intro
//! 2. Highlights
//! 3. Rolling news ticker (optional)
//! 4. News list
//! 5. Team - configured role-groups, then Alumni
//! 6. Publications - flat or grouped by type
//! 7. Projects - cards or grid
//! 8. FAQ
//! 9. Photos
//! 10. About - mission, research areas, values
//! 11. Vacancies
//! 12. Contact - info blocks
//!
//! The contact map is not part of `populate`; it is rendered by
//! [`Populator::render_map`] once the readiness join fires.

pub mod regions;
pub mod sections;
pub mod utils;

use std::fmt;

use crate::config::PopulatorConfig;
use crate::document::SiteDocument;
use crate::page::Page;

/// Generated markup for one target region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub region: String,
    pub html: String,
}

impl Fragment {
    pub fn new(region: impl Into<String>, html: String) -> Self {
        Self {
            region: region.into(),
            html,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Lab,
    Highlights,
    RollingNews,
    News,
    Team,
    Publications,
    Projects,
    Faq,
    Photos,
    About,
    Vacancies,
    Contact,
    Map,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Lab => "lab",
            Section::Highlights => "highlights",
            Section::RollingNews => "rolling_news",
            Section::News => "news",
            Section::Team => "team",
            Section::Publications => "publications",
            Section::Projects => "projects",
            Section::Faq => "faq",
            Section::Photos => "photos",
            Section::About => "about",
            Section::Vacancies => "vacancies",
            Section::Contact => "contact",
            Section::Map => "map",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a populate pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopulateReport {
    /// Sections that produced at least one fragment
    pub rendered: Vec<Section>,
    /// Sections left untouched (absent or empty in the document)
    pub skipped: Vec<Section>,
    /// Regions a fragment targeted that the skeleton does not have
    pub missing_regions: Vec<String>,
}

impl PopulateReport {
    pub fn was_rendered(&self, section: Section) -> bool {
        self.rendered.contains(&section)
    }
}

/// Content populator - stateless apart from its configuration.
#[derive(Debug, Clone, Default)]
pub struct Populator {
    config: PopulatorConfig,
}

impl Populator {
    pub fn new(config: PopulatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PopulatorConfig {
        &self.config
    }

    /// Populate every section of the page from the document.
    pub fn populate(&self, doc: &SiteDocument, page: &mut Page) -> PopulateReport {
        let mut report = PopulateReport::default();
        let config = &self.config;

        // 1. Lab
        apply(Section::Lab, sections::lab::render(doc.lab.as_ref()), page, &mut report);

        // 2. Highlights
        apply(
            Section::Highlights,
            sections::highlights::render(doc.highlights.as_deref()),
            page,
            &mut report,
        );

        // 3-4. News
        if config.news_ticker {
            apply(
                Section::RollingNews,
                sections::news::render_ticker(doc.news.as_deref()),
                page,
                &mut report,
            );
        }
        apply(
            Section::News,
            sections::news::render_list(doc.news.as_deref()),
            page,
            &mut report,
        );

        // 5. Team
        apply(
            Section::Team,
            sections::team::render(doc.team.as_ref(), config),
            page,
            &mut report,
        );

        // 6. Publications
        apply(
            Section::Publications,
            sections::publications::render(doc.publications.as_deref(), config),
            page,
            &mut report,
        );

        // 7. Projects
        apply(
            Section::Projects,
            sections::projects::render(doc.projects.as_deref(), config.project_layout),
            page,
            &mut report,
        );

        // 8. FAQ
        apply(Section::Faq, sections::faq::render(doc.faq.as_deref()), page, &mut report);

        // 9. Photos
        apply(
            Section::Photos,
            sections::photos::render(doc.photos.as_deref()),
            page,
            &mut report,
        );

        // 10. About
        apply(
            Section::About,
            sections::about::render(doc.about.as_ref()),
            page,
            &mut report,
        );

        // 11. Vacancies
        apply(
            Section::Vacancies,
            sections::vacancies::render(doc.vacancies.as_deref()),
            page,
            &mut report,
        );

        // 12. Contact
        apply(
            Section::Contact,
            sections::contact::render(doc.contact.as_ref()),
            page,
            &mut report,
        );

        tracing::debug!(
            "Populated {} sections, skipped {}",
            report.rendered.len(),
            report.skipped.len()
        );
        report
    }

    /// Render the contact map. Returns false when the document has no map.
    pub fn render_map(&self, doc: &SiteDocument, page: &mut Page) -> bool {
        let fragments = sections::map::render(doc, self.config.default_map_zoom);
        if fragments.is_empty() {
            tracing::debug!("No contact map in document");
            return false;
        }
        for fragment in &fragments {
            page.replace_region(&fragment.region, &fragment.html);
        }
        true
    }
}

fn apply(section: Section, fragments: Vec<Fragment>, page: &mut Page, report: &mut PopulateReport) {
    if fragments.is_empty() {
        report.skipped.push(section);
        return;
    }
    for fragment in &fragments {
        if !page.replace_region(&fragment.region, &fragment.html) {
            report.missing_regions.push(fragment.region.clone());
        }
    }
    report.rendered.push(section);
}
