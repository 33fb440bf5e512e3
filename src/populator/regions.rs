//! Default target region names.
//!
//! A skeleton exposes a region by wrapping its placeholder content in
//! `<!--@name-->` ... `<!--@/name-->`. The `title` region wraps the whole
//! `<title>` element since markers inside it would be shown as text.
//! Team role-group regions are configurable; these are their defaults.

pub const TITLE: &str = "title";
pub const LOGO: &str = "logo";
pub const INTRO: &str = "intro";
pub const HIGHLIGHTS: &str = "highlights";
pub const ROLLING_NEWS: &str = "rolling-news";
pub const NEWS_LIST: &str = "news-list";

pub const TEAM_FACULTY: &str = "team-faculty";
pub const TEAM_PHD: &str = "team-phd";
pub const TEAM_MASTERS: &str = "team-masters";
pub const TEAM_UNDERGRADUATE: &str = "team-undergraduate";
pub const ALUMNI: &str = "alumni-list";

pub const PUBLICATIONS: &str = "publications";
pub const PROJECTS: &str = "projects";
pub const FAQ: &str = "faq";
pub const PHOTOS: &str = "photos";

pub const ABOUT_MISSION: &str = "about-mission";
pub const ABOUT_RESEARCH_AREAS: &str = "about-research-areas";
pub const ABOUT_VALUES: &str = "about-values";

pub const VACANCIES: &str = "vacancies";
pub const CONTACT_INFO: &str = "contact-info";
pub const MAP: &str = "map";
