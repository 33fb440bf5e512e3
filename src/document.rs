//! Site Document types.
//!
//! The Site Document is the single JSON payload a page load is built from.
//! Every top-level section is optional and independently renderable, and
//! every optional field of an item is an explicit `Option` so renderers
//! match on presence instead of probing an untyped tree.
//!
//! Decoding is lenient below the root object: a section that does not
//! decode is dropped on its own (with a warning), a list item that does not
//! decode is dropped from its list, and null or scalar values in text
//! fields read as text. Only JSON that is not an object fails the load.
//!
//! Sections:
//! - `lab`: name + description (title, logo, intro)
//! - `highlights`, `news`, `faq`, `photos`, `vacancies`: ordered card lists
//! - `team`: role-group name → people, plus `former_members` / `alumni`
//! - `publications`, `projects`: items with optional link maps
//! - `contact`: info blocks + map location
//! - `about`: mission, research areas, values

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Root of all rendered content. Immutable for the lifetime of a page load.
#[derive(Debug, Clone, Default)]
pub struct SiteDocument {
    pub lab: Option<Lab>,
    pub highlights: Option<Vec<Highlight>>,
    pub news: Option<Vec<NewsItem>>,
    pub team: Option<Team>,
    pub publications: Option<Vec<Publication>>,
    pub projects: Option<Vec<Project>>,
    pub faq: Option<Vec<FaqItem>>,
    pub photos: Option<Vec<Photo>>,
    pub contact: Option<Contact>,
    pub about: Option<About>,
    pub vacancies: Option<Vec<Vacancy>>,
}

impl SiteDocument {
    /// Decode a document from JSON text.
    ///
    /// Fails only when the text is not a JSON object.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let root: Map<String, Value> = serde_json::from_str(raw)?;
        Ok(Self::from_root(root))
    }

    fn from_root(mut root: Map<String, Value>) -> Self {
        Self {
            lab: section(&mut root, "lab"),
            highlights: list_section(&mut root, "highlights"),
            news: list_section(&mut root, "news"),
            team: root.remove("team").and_then(Team::from_value),
            publications: list_section(&mut root, "publications"),
            projects: list_section(&mut root, "projects"),
            faq: list_section(&mut root, "faq"),
            photos: list_section(&mut root, "photos"),
            contact: section(&mut root, "contact"),
            about: section(&mut root, "about"),
            vacancies: list_section(&mut root, "vacancies"),
        }
    }

    /// Names of the top-level sections carrying content, in render order.
    pub fn present_sections(&self) -> Vec<&'static str> {
        let mut present = Vec::new();
        if self.lab.is_some() {
            present.push("lab");
        }
        if non_empty(&self.highlights).is_some() {
            present.push("highlights");
        }
        if non_empty(&self.news).is_some() {
            present.push("news");
        }
        if self.team.as_ref().is_some_and(Team::has_members) {
            present.push("team");
        }
        if non_empty(&self.publications).is_some() {
            present.push("publications");
        }
        if non_empty(&self.projects).is_some() {
            present.push("projects");
        }
        if non_empty(&self.faq).is_some() {
            present.push("faq");
        }
        if non_empty(&self.photos).is_some() {
            present.push("photos");
        }
        if self.about.is_some() {
            present.push("about");
        }
        if non_empty(&self.vacancies).is_some() {
            present.push("vacancies");
        }
        if self.contact.is_some() {
            present.push("contact");
        }
        present
    }
}

// ============================================================================
// Section decoding
// ============================================================================

/// Decode one object section. Null reads as absent; a malformed section is
/// dropped without affecting its siblings.
fn section<T: DeserializeOwned>(root: &mut Map<String, Value>, key: &str) -> Option<T> {
    let value = root.remove(key)?;
    if value.is_null() {
        return None;
    }
    match serde_json::from_value(value) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            tracing::warn!("Ignoring malformed '{}' section: {}", key, e);
            None
        }
    }
}

fn list_section<T: DeserializeOwned>(root: &mut Map<String, Value>, key: &str) -> Option<Vec<T>> {
    items(key, root.remove(key)?)
}

/// Decode a list item by item, dropping items that do not decode.
/// Anything but an array reads as absent.
fn items<T: DeserializeOwned>(key: &str, value: Value) -> Option<Vec<T>> {
    let entries = match value {
        Value::Array(entries) => entries,
        Value::Null => return None,
        other => {
            tracing::warn!("Ignoring '{}': expected a list, found {}", key, kind_of(&other));
            return None;
        }
    };

    let decoded = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!("Ignoring malformed item {} of '{}': {}", index, key, e);
                None
            }
        })
        .collect();
    Some(decoded)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

// ============================================================================
// Sections
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Lab {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Highlight {
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewsItem {
    /// Calendar date, `YYYY-MM-DD` or RFC 3339
    #[serde(deserialize_with = "text")]
    pub date: String,
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
}

/// Team roster.
///
/// Role-groups (`faculty`, `phd_students`, ...) are kept by key; which of
/// them are rendered, and where, is decided by configuration. Keys whose
/// value is not a list (headings, notes, null) are ignored.
#[derive(Debug, Clone, Default)]
pub struct Team {
    pub former_members: Option<Vec<Person>>,
    pub alumni: Option<Vec<Person>>,
    pub groups: HashMap<String, Vec<Person>>,
}

impl Team {
    fn from_value(value: Value) -> Option<Self> {
        let entries = match value {
            Value::Object(entries) => entries,
            Value::Null => return None,
            other => {
                tracing::warn!("Ignoring 'team': expected an object, found {}", kind_of(&other));
                return None;
            }
        };

        let mut team = Team::default();
        for (key, value) in entries {
            if !value.is_array() {
                tracing::debug!("Skipping non-list team entry '{}'", key);
                continue;
            }
            let Some(people) = items::<Person>(&key, value) else {
                continue;
            };
            match key.as_str() {
                "former_members" => team.former_members = Some(people),
                "alumni" => team.alumni = Some(people),
                _ => {
                    team.groups.insert(key, people);
                }
            }
        }
        Some(team)
    }

    /// Members of a role-group, `None` when the group is absent or empty.
    pub fn group(&self, key: &str) -> Option<&[Person]> {
        self.groups
            .get(key)
            .map(Vec::as_slice)
            .filter(|members| !members.is_empty())
    }

    /// `former_members` followed by `alumni`.
    pub fn all_alumni(&self) -> Vec<&Person> {
        self.former_members
            .iter()
            .flatten()
            .chain(self.alumni.iter().flatten())
            .collect()
    }

    /// At least one group or alumni list has someone in it.
    pub fn has_members(&self) -> bool {
        self.groups.values().any(|members| !members.is_empty()) || !self.all_alumni().is_empty()
    }
}

/// A team member or alumnus.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Person {
    #[serde(deserialize_with = "text")]
    pub name: String,
    pub role: Option<String>,
    pub description: Option<String>,
    pub school: Option<String>,
    pub image: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub google_scholar: Option<String>,

    // Alumni-only
    pub degree: Option<String>,
    pub duration: Option<String>,
    pub thesis: Option<String>,
    pub current_position: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Publication {
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "text")]
    pub authors: String,
    #[serde(deserialize_with = "text")]
    pub venue: String,
    #[serde(deserialize_with = "lenient_year")]
    pub year: Option<i32>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub links: Option<PublicationLinks>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PublicationLinks {
    pub paper: Option<String>,
    pub code: Option<String>,
    pub project: Option<String>,
    pub slides: Option<String>,
    pub demo: Option<String>,
    pub arxiv: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
    pub image: Option<String>,
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub links: Option<ProjectLinks>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectLinks {
    pub website: Option<String>,
    pub github: Option<String>,
    pub demo: Option<String>,
    pub paper: Option<String>,
    pub arxiv: Option<String>,
    pub data: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FaqItem {
    #[serde(deserialize_with = "text")]
    pub question: String,
    #[serde(deserialize_with = "text")]
    pub answer: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Photo {
    #[serde(deserialize_with = "text")]
    pub url: String,
    pub caption: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub address: Option<Address>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub map: Option<MapLocation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(deserialize_with = "text")]
    pub department: String,
    #[serde(deserialize_with = "text")]
    pub building: String,
    #[serde(deserialize_with = "text")]
    pub street: String,
    #[serde(deserialize_with = "text")]
    pub city: String,
    pub university: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapLocation {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub zoom: Option<f64>,
}

impl MapLocation {
    /// Document zoom, `None` when missing, zero or not finite.
    pub fn zoom_level(&self) -> Option<f64> {
        self.zoom.filter(|zoom| zoom.is_finite() && *zoom > 0.0)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct About {
    pub mission: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub research_areas: Option<Vec<ResearchArea>>,
    #[serde(deserialize_with = "lenient")]
    pub values: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResearchArea {
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Vacancy {
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
    pub link: Option<String>,
}

// ============================================================================
// Presence helpers
// ============================================================================

/// Optional text field that counts as present only when non-blank.
pub fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

/// Optional list that counts as present only when it has items.
pub fn non_empty<T>(list: &Option<Vec<T>>) -> Option<&[T]> {
    list.as_deref().filter(|items| !items.is_empty())
}

// ============================================================================
// Field deserializers
// ============================================================================

/// Required text: null reads as empty, numbers and booleans as their text.
fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Nested optional value that reads as absent when it does not decode.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value)
        .map_err(|e| tracing::debug!("Ignoring malformed field: {}", e))
        .ok())
}

/// Number or numeric string.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Publication years arrive as numbers or numeric strings.
fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64().and_then(|y| i32::try_from(y).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
