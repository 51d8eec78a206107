//! Blocking geocoder backed by the OpenStreetMap Nominatim search API.
//!
//! Each lookup is one `GET /search?q=<name>&format=jsonv2&limit=1`.  The
//! response is a JSON array; an empty array means "no match".  Nominatim's
//! usage policy requires an identifying `User-Agent`, which is taken from
//! [`NominatimConfig::user_agent`].
//!
//! No timeout or retry is configured here: a hung request blocks the
//! session, and any transport or HTTP-status failure is returned as
//! [`LandmarkError::Geocode`].

use log::debug;
use serde::Deserialize;

use cp_core::GeoPoint;

use crate::{Geocoder, LandmarkError, LandmarkResult};

pub const DEFAULT_ENDPOINT:   &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_USER_AGENT: &str = "city-pathfinder";

/// Where and as whom to query Nominatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NominatimConfig {
    /// Full URL of the search endpoint.
    pub endpoint:   String,
    /// Client label sent as `User-Agent`.
    pub user_agent: String,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            endpoint:   DEFAULT_ENDPOINT.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

/// One element of the `jsonv2` search response.  Coordinates arrive as
/// decimal strings.
#[derive(Deserialize)]
struct Place {
    lat:          String,
    lon:          String,
    #[serde(default)]
    display_name: Option<String>,
}

pub struct NominatimGeocoder {
    agent:  ureq::Agent,
    config: NominatimConfig,
}

impl NominatimGeocoder {
    pub fn new(config: NominatimConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(&config.user_agent)
            .build();
        Self { agent, config }
    }

    pub fn config(&self) -> &NominatimConfig {
        &self.config
    }
}

impl Default for NominatimGeocoder {
    fn default() -> Self {
        Self::new(NominatimConfig::default())
    }
}

impl Geocoder for NominatimGeocoder {
    fn geocode(&self, name: &str) -> LandmarkResult<Option<GeoPoint>> {
        // Nominatim rejects an empty query; nothing can match it anyway.
        if name.trim().is_empty() {
            return Ok(None);
        }

        let response = self
            .agent
            .get(&self.config.endpoint)
            .query("q", name)
            .query("format", "jsonv2")
            .query("limit", "1")
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => failure(name, format!("HTTP status {code}")),
                ureq::Error::Transport(err)  => failure(name, err.to_string()),
            })?;

        let body = response
            .into_string()
            .map_err(|e| failure(name, format!("reading response body: {e}")))?;

        parse_search_response(name, &body)
    }
}

/// Decode a `jsonv2` search response body into the best match, if any.
pub(crate) fn parse_search_response(name: &str, body: &str) -> LandmarkResult<Option<GeoPoint>> {
    let places: Vec<Place> = serde_json::from_str(body)
        .map_err(|e| failure(name, format!("malformed response: {e}")))?;

    let Some(best) = places.into_iter().next() else {
        return Ok(None);
    };
    if let Some(display) = &best.display_name {
        debug!("geocoded {name:?} as {display:?}");
    }
    Ok(Some(GeoPoint::parse(&best.lat, &best.lon)?))
}

fn failure(query: &str, reason: String) -> LandmarkError {
    LandmarkError::Geocode { query: query.to_owned(), reason }
}
