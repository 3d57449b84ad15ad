use super::*;
use osmgeo_entities::{geo::ViewBox, place::PLACEHOLDER};
use serde_json::json;
use std::cell::RefCell;

#[derive(Default)]
struct StubTransport {
    responses: RefCell<Vec<Result<Value, http::Error>>>,
    requests: RefCell<Vec<String>>,
}

impl StubTransport {
    fn returning(response: Value) -> Self {
        let stub = Self::default();
        stub.push(Ok(response));
        stub
    }

    fn push(&self, response: Result<Value, http::Error>) {
        self.responses.borrow_mut().push(response);
    }

    fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl JsonTransport for StubTransport {
    fn get_json(&self, url: &str) -> Result<Value, http::Error> {
        self.requests.borrow_mut().push(url.to_owned());
        let mut responses = self.responses.borrow_mut();
        if responses.is_empty() {
            return Ok(json!([]));
        }
        responses.remove(0)
    }
}

fn eiffel_tower() -> Value {
    json!([{
        "lon": "2.2945",
        "lat": "48.8584",
        "type": "tourist",
        "class": "tourism",
        "display_name": "Eiffel Tower, Paris, France",
        "address": {
            "tourist": "Eiffel Tower",
            "city": "Paris",
            "country": "France"
        }
    }])
}

fn client(transport: StubTransport) -> Nominatim<StubTransport> {
    Nominatim::new("https://nominatim.example.org/", transport)
}

fn bbox_params() -> GeocodingParams {
    GeocodingParams::default().with_view_box(ViewBox::new(2.25, 48.81, 2.42, 48.9))
}

#[test]
fn search_url_with_defaults() {
    let gw = client(StubTransport::default());
    assert_eq!(
        gw.search_url("Eiffel Tower", &GeocodingParams::default()),
        "https://nominatim.example.org/search?format=json&q=Eiffel+Tower&addressdetails=1&limit=10"
    );
}

#[test]
fn search_url_encodes_query() {
    let gw = client(StubTransport::default());
    let url = gw.search_url("Straße 1/2 & Co?", &GeocodingParams::default());
    assert!(url.contains("&q=Stra%C3%9Fe+1%2F2+%26+Co%3F&"));
}

#[test]
fn search_url_with_limit_and_bounded() {
    let gw = client(StubTransport::default());
    let params = GeocodingParams {
        limit: Some(3),
        bounded: true,
        ..Default::default()
    };
    let url = gw.search_url("Paris", &params);
    assert!(url.ends_with("&limit=3&bounded=1"));
    assert!(!url.contains("viewbox="));
}

#[test]
fn search_url_without_bbox_has_no_viewbox() {
    let gw = client(StubTransport::default());
    let partial = [
        GeocodingParams {
            xmin: Some(1.0),
            ymin: Some(2.0),
            xmax: Some(3.0),
            ..Default::default()
        },
        GeocodingParams {
            ymax: Some(4.0),
            ..Default::default()
        },
        GeocodingParams {
            bounded: true,
            ..Default::default()
        },
    ];
    for params in &partial {
        assert!(!gw.search_url("Paris", params).contains("viewbox="));
    }
}

#[test]
fn search_url_with_viewbox() {
    let gw = client(StubTransport::default());
    let url = gw.search_url("Paris", &bbox_params());
    let viewbox = url
        .split('&')
        .find_map(|part| part.strip_prefix("viewbox="))
        .unwrap();
    // xmin,ymax,xmax,ymin
    assert_eq!(viewbox, "2.25000,48.90000,2.42000,48.81000");
    for number in viewbox.split(',') {
        assert_eq!(number.split('.').nth(1).map(str::len), Some(5));
    }
}

#[test]
fn search_url_rounds_viewbox() {
    let gw = client(StubTransport::default());
    let params = GeocodingParams::default().with_view_box(ViewBox::new(-0.1234567, -1.0, 1.0, 2.0));
    assert!(gw
        .search_url("Paris", &params)
        .contains("&viewbox=-0.12346,2.00000,1.00000,-1.00000"));
}

#[test]
fn geocode_eiffel_tower() {
    let gw = client(StubTransport::returning(eiffel_tower()));
    let places = gw.geocode("Eiffel Tower", &GeocodingParams::default()).unwrap();
    assert_eq!(
        places,
        vec![GeocodedPlace {
            title: "Eiffel Tower".into(),
            description: "Paris, France".into(),
            x: 2.2945,
            y: 48.8584,
        }]
    );
    assert_eq!(
        *gw.transport.requests.borrow(),
        vec![gw.search_url("Eiffel Tower", &GeocodingParams::default())]
    );
}

#[test]
fn repeated_queries_are_served_from_cache() {
    let gw = client(StubTransport::returning(eiffel_tower()));
    let params = bbox_params();
    let mut first = gw.geocode("Eiffel Tower", &params).unwrap();
    let second = gw.geocode("Eiffel Tower", &params).unwrap();
    assert_eq!(gw.transport.request_count(), 1);
    assert_eq!(first, second);
    first[0].title = "Tour Eiffel".into();
    let third = gw.geocode("Eiffel Tower", &params).unwrap();
    assert_eq!(third, second);
    assert_eq!(gw.cache().len(), 1);
}

#[test]
fn different_params_are_different_requests() {
    let gw = client(StubTransport::default());
    gw.transport.push(Ok(eiffel_tower()));
    gw.transport.push(Ok(eiffel_tower()));
    gw.geocode("Eiffel Tower", &GeocodingParams::default()).unwrap();
    gw.geocode("Eiffel Tower", &bbox_params()).unwrap();
    assert_eq!(gw.transport.request_count(), 2);
    assert_eq!(gw.cache().len(), 2);
}

#[test]
fn empty_response_is_not_cached() {
    let gw = client(StubTransport::returning(json!([])));
    let places = gw.geocode("Atlantis", &GeocodingParams::default()).unwrap();
    assert!(places.is_empty());
    assert!(gw.cache().is_empty());
    gw.geocode("Atlantis", &GeocodingParams::default()).unwrap();
    assert_eq!(gw.transport.request_count(), 2);
}

#[test]
fn shared_cache() {
    let cache = Arc::new(ResultCache::new());
    let a = Nominatim::with_cache(
        DEFAULT_BASE_URL,
        StubTransport::returning(eiffel_tower()),
        Arc::clone(&cache),
    );
    let b = Nominatim::with_cache(DEFAULT_BASE_URL, StubTransport::default(), cache);
    let params = GeocodingParams::default();
    let expected = a.geocode("Eiffel Tower", &params).unwrap();
    assert_eq!(b.geocode("Eiffel Tower", &params).unwrap(), expected);
    assert_eq!(b.transport.request_count(), 0);
}

#[test]
fn record_without_names() {
    let gw = client(StubTransport::returning(json!([{
        "lon": 10.0,
        "lat": 53.5,
        "type": "yes",
        "class": "building",
        "address": {}
    }])));
    let places = gw.geocode("Nowhere", &GeocodingParams::default()).unwrap();
    assert_eq!(places.len(), 1);
    assert_eq!(places[0].title, PLACEHOLDER);
    assert_eq!(places[0].description, PLACEHOLDER);
    assert_eq!((places[0].x, places[0].y), (10.0, 53.5));
}

#[test]
fn malformed_address_fields_do_not_fail_the_request() {
    let gw = client(StubTransport::returning(json!([
        {
            "lon": "9.99",
            "lat": "53.55",
            "type": ["city"],
            "display_name": "12, Jungfernstieg, Hamburg",
            "address": { "road": 7, "city": "Hamburg" }
        },
        {
            "lon": "13.4",
            "lat": "52.52",
            "address": "Berlin"
        }
    ])));
    let places = gw.geocode("Somewhere", &GeocodingParams::default()).unwrap();
    assert_eq!(places.len(), 2);
    assert_eq!(places[0].title, "12, Jungfernstieg");
    assert_eq!(places[0].description, "Hamburg");
    assert_eq!(places[1].title, PLACEHOLDER);
}

#[test]
fn missing_coordinates_fail_the_request() {
    let gw = client(StubTransport::returning(json!([
        { "lon": "9.99", "lat": "53.55" },
        { "lon": "13.4" }
    ])));
    let err = gw.geocode("Somewhere", &GeocodingParams::default()).unwrap_err();
    assert!(matches!(err, Error::Record { index: 1, .. }));
    assert!(gw.cache().is_empty());
}

#[test]
fn unexpected_payload() {
    let gw = client(StubTransport::returning(json!({ "error": "Unable to geocode" })));
    let err = gw.geocode("Paris", &GeocodingParams::default()).unwrap_err();
    assert!(matches!(err, Error::NotAnArray));
    let err = geocode::Error::from(err);
    assert!(matches!(err, geocode::Error::Response(_)));
    assert!(std::error::Error::source(&err)
        .and_then(|source| source.downcast_ref::<Error>())
        .is_some_and(|source| matches!(source, Error::NotAnArray)));
}

#[test]
fn transport_errors_are_propagated() {
    let gw = client(StubTransport::default());
    gw.transport.push(Err(http::Error::Status {
        status: 503,
        body: "Service Unavailable".into(),
    }));
    let err = GeoCodingGateway::geocode(&gw, "Paris", &GeocodingParams::default()).unwrap_err();
    assert!(matches!(err, geocode::Error::Transport(ref source) if source.to_string().contains("503")));
    let source = std::error::Error::source(&err).unwrap();
    assert!(matches!(
        source.downcast_ref::<Error>(),
        Some(Error::Transport(http::Error::Status { status: 503, .. }))
    ));
    assert!(gw.cache().is_empty());
}

#[test]
fn base_url_without_trailing_slash() {
    let gw = client(StubTransport::default());
    assert_eq!(gw.base_url(), "https://nominatim.example.org");
}
