//! Unit tests for cp-landmarks.
//!
//! All tests run offline against hand-written geocoders.

use std::cell::RefCell;
use std::collections::HashMap;

use cp_core::{GeoPoint, NodeId};
use cp_nodes::{Node, NodeTable};

use crate::{Geocoder, LandmarkError, LandmarkResult};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Answers from a fixed name → point map and records every query.
#[derive(Default)]
struct FixedGeocoder {
    places:  HashMap<String, GeoPoint>,
    queries: RefCell<Vec<String>>,
}

impl FixedGeocoder {
    fn with(mut self, name: &str, lat: f64, lon: f64) -> Self {
        self.places.insert(name.to_owned(), GeoPoint::new(lat, lon));
        self
    }

    fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

impl Geocoder for FixedGeocoder {
    fn geocode(&self, name: &str) -> LandmarkResult<Option<GeoPoint>> {
        self.queries.borrow_mut().push(name.to_owned());
        Ok(self.places.get(name).copied())
    }
}

/// Fails on one specific name, otherwise defers to a `FixedGeocoder`.
struct FlakyGeocoder {
    inner:   FixedGeocoder,
    fail_on: &'static str,
}

impl Geocoder for FlakyGeocoder {
    fn geocode(&self, name: &str) -> LandmarkResult<Option<GeoPoint>> {
        if name == self.fail_on {
            return Err(LandmarkError::Geocode {
                query:  name.to_owned(),
                reason: "connection reset".to_owned(),
            });
        }
        self.inner.geocode(name)
    }
}

fn node(id: &str, lat: f64, lon: f64) -> Node {
    Node { id: NodeId::from(id), pos: GeoPoint::new(lat, lon) }
}

/// Three nodes around downtown Mobile, AL.
fn nodes() -> NodeTable {
    NodeTable::new(vec![
        node("101", 30.710, -88.070),
        node("102", 30.695, -88.050),
        node("103", 30.670, -88.030),
    ])
}

fn geocoder() -> FixedGeocoder {
    FixedGeocoder::default()
        .with("Cathedral Square", 30.6941, -88.0431)
        .with("USS Alabama",      30.6815, -88.0144)
}

/// Parse the landmark table written to an in-memory sink.
fn rows(bytes: &[u8]) -> Vec<Vec<String>> {
    let mut rdr = csv::Reader::from_reader(bytes);
    let headers: Vec<String> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
    assert_eq!(headers, ["name", "node_id", "lat", "lon"]);
    rdr.records()
        .map(|r| r.unwrap().iter().map(str::to_owned).collect())
        .collect()
}

// ── Sentinel ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sentinel {
    use crate::is_done_sentinel;

    #[test]
    fn any_case_terminates() {
        assert!(is_done_sentinel("done"));
        assert!(is_done_sentinel("Done"));
        assert!(is_done_sentinel("DONE"));
        assert!(is_done_sentinel("dOnE"));
    }

    #[test]
    fn near_misses_do_not_terminate() {
        assert!(!is_done_sentinel("done!"));
        assert!(!is_done_sentinel(" done"));
        assert!(!is_done_sentinel("done "));
        assert!(!is_done_sentinel("finished"));
        assert!(!is_done_sentinel(""));
    }
}

// ── Single steps ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod step {
    use super::*;
    use crate::{LandmarkLocator, LandmarkWriter, LocatorState, Step};

    #[test]
    fn located_row_carries_node_coordinates() {
        let table = nodes();
        let geo = geocoder();
        let writer = LandmarkWriter::from_writer(Vec::<u8>::new()).unwrap();
        let mut loc = LandmarkLocator::new(&table, &geo, writer);

        let Step::Located(lm) = loc.step("Cathedral Square").unwrap() else {
            panic!("expected a located landmark");
        };
        assert_eq!(lm.record.node_id, "102");
        assert_eq!(lm.record.lat, 30.695);
        assert_eq!(lm.record.lon, -88.050);

        let place = GeoPoint::new(30.6941, -88.0431);
        assert_eq!(lm.distance_m, GeoPoint::new(30.695, -88.050).distance_m(place));
        assert_eq!(loc.state(), LocatorState::AwaitingInput);

        let out = loc.into_writer().into_inner().unwrap();
        let rows = rows(&out);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], "Cathedral Square");
        assert_eq!(rows[0][1], "102");
        assert_eq!(rows[0][2].parse::<f64>().unwrap(), 30.695);
        assert_eq!(rows[0][3].parse::<f64>().unwrap(), -88.050);
    }

    #[test]
    fn no_match_writes_nothing_and_keeps_going() {
        let table = nodes();
        let geo = geocoder();
        let writer = LandmarkWriter::from_writer(Vec::<u8>::new()).unwrap();
        let mut loc = LandmarkLocator::new(&table, &geo, writer);

        assert_eq!(loc.step("Atlantis").unwrap(), Step::NotFound);
        assert_eq!(loc.state(), LocatorState::AwaitingInput);
        assert_eq!(loc.summary().not_found, 1);

        assert!(matches!(loc.step("USS Alabama").unwrap(), Step::Located(_)));
        let out = loc.into_writer().into_inner().unwrap();
        assert_eq!(rows(&out).len(), 1);
    }

    #[test]
    fn sentinel_terminates_without_lookup() {
        let table = nodes();
        let geo = geocoder();
        let writer = LandmarkWriter::from_writer(Vec::<u8>::new()).unwrap();
        let mut loc = LandmarkLocator::new(&table, &geo, writer);

        assert_eq!(loc.step("Done").unwrap(), Step::Terminated);
        assert_eq!(loc.state(), LocatorState::Terminated);
        assert!(geo.queries().is_empty());
    }

    #[test]
    fn steps_after_termination_are_inert() {
        let table = nodes();
        let geo = geocoder();
        let writer = LandmarkWriter::from_writer(Vec::<u8>::new()).unwrap();
        let mut loc = LandmarkLocator::new(&table, &geo, writer);

        loc.step("done").unwrap();
        assert_eq!(loc.step("USS Alabama").unwrap(), Step::Terminated);
        assert!(geo.queries().is_empty());
        assert_eq!(loc.into_writer().rows_written(), 0);
    }

    #[test]
    fn equidistant_nodes_snap_to_first_in_table_order() {
        let table = NodeTable::new(vec![
            node("far",    31.000, -88.500),
            node("first",  30.700, -88.040),
            node("second", 30.700, -88.040),
        ]);
        let geo = FixedGeocoder::default().with("Bienville Square", 30.6915, -88.0418);
        let writer = LandmarkWriter::from_writer(Vec::<u8>::new()).unwrap();
        let mut loc = LandmarkLocator::new(&table, &geo, writer);

        let Step::Located(lm) = loc.step("Bienville Square").unwrap() else {
            panic!("expected a located landmark");
        };
        assert_eq!(lm.record.node_id, "first");
    }

    #[test]
    fn geocoder_error_propagates() {
        let table = nodes();
        let geo = FlakyGeocoder { inner: geocoder(), fail_on: "Mardi Gras Park" };
        let writer = LandmarkWriter::from_writer(Vec::<u8>::new()).unwrap();
        let mut loc = LandmarkLocator::new(&table, geo, writer);

        let err = loc.step("Mardi Gras Park").unwrap_err();
        assert!(matches!(err, LandmarkError::Geocode { .. }), "got {err:?}");
    }
}

// ── Interactive runs ──────────────────────────────────────────────────────────

#[cfg(test)]
mod run {
    use std::io::Cursor;

    use super::*;
    use crate::{LandmarkLocator, LandmarkWriter, LocatorState, RunSummary};

    #[test]
    fn session_until_sentinel() {
        let table = nodes();
        let geo = geocoder();
        let writer = LandmarkWriter::from_writer(Vec::<u8>::new()).unwrap();
        let mut loc = LandmarkLocator::new(&table, &geo, writer);

        let input = Cursor::new("Cathedral Square\nAtlantis\nUSS Alabama\nDONE\nnever read\n");
        let mut console = Vec::new();
        let summary = loc.run(input, &mut console).unwrap();

        assert_eq!(summary, RunSummary { located: 2, not_found: 1 });
        assert_eq!(loc.state(), LocatorState::Terminated);
        assert_eq!(geo.queries(), ["Cathedral Square", "Atlantis", "USS Alabama"]);

        let console = String::from_utf8(console).unwrap();
        assert!(console.contains("can't find location: Atlantis"));
        let d = GeoPoint::new(30.695, -88.050).distance_m(GeoPoint::new(30.6941, -88.0431));
        assert!(console.contains(&format!(
            "the closest node to Cathedral Square is 102 ({d:.1} meters away)"
        )));

        let out = loc.into_writer().into_inner().unwrap();
        let names: Vec<String> = rows(&out).into_iter().map(|r| r[0].clone()).collect();
        assert_eq!(names, ["Cathedral Square", "USS Alabama"]);
    }

    #[test]
    fn near_sentinel_is_looked_up() {
        let table = nodes();
        let geo = geocoder();
        let writer = LandmarkWriter::from_writer(Vec::<u8>::new()).unwrap();
        let mut loc = LandmarkLocator::new(&table, &geo, writer);

        let summary = loc.run(Cursor::new("done!\ndone\n"), std::io::sink()).unwrap();
        assert_eq!(summary, RunSummary { located: 0, not_found: 1 });
        assert_eq!(geo.queries(), ["done!"]);
    }

    #[test]
    fn crlf_line_endings_are_stripped() {
        let table = nodes();
        let geo = geocoder();
        let writer = LandmarkWriter::from_writer(Vec::<u8>::new()).unwrap();
        let mut loc = LandmarkLocator::new(&table, &geo, writer);

        let summary = loc.run(Cursor::new("USS Alabama\r\nDone\r\n"), std::io::sink()).unwrap();
        assert_eq!(summary.located, 1);
        assert_eq!(loc.state(), LocatorState::Terminated);
    }

    #[test]
    fn closed_input_is_an_error_and_keeps_rows() {
        let table = nodes();
        let geo = geocoder();
        let writer = LandmarkWriter::from_writer(Vec::<u8>::new()).unwrap();
        let mut loc = LandmarkLocator::new(&table, &geo, writer);

        let err = loc.run(Cursor::new("USS Alabama\n"), std::io::sink()).unwrap_err();
        assert!(matches!(err, LandmarkError::InputClosed));
        assert_eq!(loc.state(), LocatorState::AwaitingInput);

        let out = loc.into_writer().into_inner().unwrap();
        assert_eq!(rows(&out).len(), 1);
    }

    #[test]
    fn geocoder_failure_ends_session_and_keeps_rows() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("landmarks.csv");

        let table = nodes();
        let geo = FlakyGeocoder { inner: geocoder(), fail_on: "Mardi Gras Park" };
        let writer = LandmarkWriter::create(&path).unwrap();
        let mut loc = LandmarkLocator::new(&table, &geo, writer);

        let input = Cursor::new("Cathedral Square\nMardi Gras Park\nUSS Alabama\ndone\n");
        let err = loc.run(input, std::io::sink()).unwrap_err();
        assert!(matches!(err, LandmarkError::Geocode { .. }));
        assert_eq!(geo.inner.queries(), ["Cathedral Square"]);

        // Read the file while the writer is still alive: rows are flushed per write.
        let on_disk = std::fs::read(&path).unwrap();
        let rows = rows(&on_disk);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], "Cathedral Square");
    }
}

// ── Writer ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod writer {
    use std::fs;

    use crate::{LandmarkError, LandmarkRecord, LandmarkWriter};

    #[test]
    fn header_written_without_rows() {
        let w = LandmarkWriter::from_writer(Vec::<u8>::new()).unwrap();
        let out = w.into_inner().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "name,node_id,lat,lon\n");
    }

    #[test]
    fn create_truncates_existing_table() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("landmarks.csv");
        fs::write(&path, "name,node_id,lat,lon\nOld,1,0.0,0.0\n").unwrap();

        let mut w = LandmarkWriter::create(&path).unwrap();
        w.write_landmark(&LandmarkRecord {
            name:    "Fort Conde".to_owned(),
            node_id: "7".to_owned(),
            lat:     30.6889,
            lon:     -88.0399,
        })
        .unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not fail

        let text = fs::read_to_string(&path).unwrap();
        assert!(!text.contains("Old"));
        assert_eq!(text.lines().count(), 2);
        assert_eq!(w.rows_written(), 1);
    }

    #[test]
    fn names_with_commas_are_quoted() {
        let mut w = LandmarkWriter::from_writer(Vec::<u8>::new()).unwrap();
        w.write_landmark(&LandmarkRecord {
            name:    "Mobile, AL".to_owned(),
            node_id: "9".to_owned(),
            lat:     30.0,
            lon:     -88.0,
        })
        .unwrap();
        let out = w.into_inner().unwrap();

        let mut rdr = csv::Reader::from_reader(out.as_slice());
        let rec: LandmarkRecord = rdr.deserialize().next().unwrap().unwrap();
        assert_eq!(rec.name, "Mobile, AL");
        assert_eq!(rec.lat, 30.0);
    }

    #[test]
    fn create_in_missing_dir_fails() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = LandmarkWriter::create(&dir.path().join("no/such/dir.csv")).err().unwrap();
        assert!(matches!(err, LandmarkError::Create { .. }));
    }
}

// ── Nominatim response decoding ───────────────────────────────────────────────

#[cfg(all(test, feature = "nominatim"))]
mod nominatim {
    use cp_core::GeoPoint;

    use crate::nominatim::{NominatimConfig, NominatimGeocoder, parse_search_response};
    use crate::{Geocoder, LandmarkError};

    /// Nothing listens on the discard port, so every request is refused.
    fn dead_endpoint() -> NominatimGeocoder {
        NominatimGeocoder::new(NominatimConfig {
            endpoint: "http://127.0.0.1:9/search".into(),
            ..NominatimConfig::default()
        })
    }

    #[test]
    fn empty_result_is_no_match() {
        assert_eq!(parse_search_response("Atlantis", "[]").unwrap(), None);
    }

    #[test]
    fn first_place_is_used() {
        let body = r#"[
            {"place_id": 1, "lat": "30.6815", "lon": "-88.0144", "display_name": "USS Alabama, Mobile"},
            {"place_id": 2, "lat": "0", "lon": "0"}
        ]"#;
        let p = parse_search_response("USS Alabama", body).unwrap();
        assert_eq!(p, Some(GeoPoint::new(30.6815, -88.0144)));
    }

    #[test]
    fn malformed_body_is_an_error() {
        let err = parse_search_response("x", "<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, LandmarkError::Geocode { .. }));
    }

    #[test]
    fn bad_coordinate_is_an_error() {
        let err = parse_search_response("x", r#"[{"lat": "north", "lon": "0"}]"#).unwrap_err();
        assert!(matches!(err, LandmarkError::Coordinate(_)));
    }

    #[test]
    fn default_identifies_as_city_pathfinder() {
        let geocoder = NominatimGeocoder::default();
        let c = geocoder.config();
        assert_eq!(c, &NominatimConfig::default());
        assert_eq!(c.user_agent, "city-pathfinder");
        assert!(c.endpoint.starts_with("https://nominatim.openstreetmap.org/"));
    }

    #[test]
    fn blank_name_is_no_match_without_request() {
        let geocoder = dead_endpoint();
        assert_eq!(geocoder.geocode("   ").unwrap(), None);
        assert_eq!(geocoder.geocode("").unwrap(), None);
    }

    #[test]
    fn transport_failure_is_a_geocode_error() {
        let err = dead_endpoint().geocode("Mobile").unwrap_err();
        match err {
            LandmarkError::Geocode { query, .. } => assert_eq!(query, "Mobile"),
            other => panic!("expected Geocode error, got {other:?}"),
        }
    }
}
