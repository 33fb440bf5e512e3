//! Contact map.
//!
//! Rendered only after the readiness join fires (document loaded and client
//! map library ready). The fragment is a map container carrying the JSON
//! options the client widget reads: center, zoom, one marker with a drop-in
//! animation, and an info popup (opened on marker click) with the lab name
//! and address.

use serde::Serialize;

use crate::document::{present, SiteDocument};
use crate::populator::regions;
use crate::populator::utils::escape;
use crate::populator::Fragment;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerOptions {
    pub position: LatLng,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub animation: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoWindowOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub address_lines: Vec<String>,
    pub open_on: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: f64,
    pub marker: MarkerOptions,
    pub info_window: InfoWindowOptions,
}

/// Build the map options, `None` when the document has no map.
pub fn map_options(doc: &SiteDocument, default_zoom: u8) -> Option<MapOptions> {
    let contact = doc.contact.as_ref()?;
    let location = contact.map.as_ref()?;

    let position = LatLng {
        lat: location.latitude,
        lng: location.longitude,
    };
    let title = doc
        .lab
        .as_ref()
        .map(|lab| lab.name.trim())
        .filter(|name| !name.is_empty())
        .or_else(|| present(&contact.name).map(str::trim))
        .map(str::to_string);

    // Popup shows the street address only (no department)
    let address_lines = contact
        .address
        .as_ref()
        .map(|a| {
            [&a.building, &a.street, &a.city]
                .into_iter()
                .map(|line| line.trim())
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Some(MapOptions {
        center: position,
        zoom: location.zoom_level().unwrap_or(f64::from(default_zoom)),
        marker: MarkerOptions {
            position,
            title: title.clone(),
            animation: "drop",
        },
        info_window: InfoWindowOptions {
            title,
            address_lines,
            open_on: "marker_click",
        },
    })
}

pub fn render(doc: &SiteDocument, default_zoom: u8) -> Vec<Fragment> {
    let Some(options) = map_options(doc, default_zoom) else {
        return Vec::new();
    };
    let json = match serde_json::to_string(&options) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("Failed to encode map options: {}", e);
            return Vec::new();
        }
    };

    vec![Fragment::new(
        regions::MAP,
        format!(
            "<div id=\"map-canvas\" class=\"map-canvas\" data-map-options=\"{}\"></div>",
            escape(&json)
        ),
    )]
}
