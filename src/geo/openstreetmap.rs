//! OpenStreetMap Nominatim geocoder
//!
//! Uses the free public Nominatim instance unless a self-hosted server is
//! configured. No API key is needed.

use crate::error::{Error, Result};
use crate::geo::lookup::{Direction, Lookup};
use crate::geo::provider::{BuildGeocoder, Endpoints, GeocoderBuilder, Provider, ProviderConfig};
use crate::geo::request::{build_geocode_request, build_reverse_request};
use crate::geo::validate::{validate, validate_coordinates};
use crate::geo::{Coordinates, Geocoder, Query};
use crate::http::HttpAdapter;
use std::sync::Arc;
use tracing::warn;

const NAME: &str = "OpenStreetMapGeocoder";

/// OpenStreetMap Nominatim adapter
pub struct OpenStreetMapGeocoder {
    http: Arc<dyn HttpAdapter>,
    config: ProviderConfig,
    endpoints: Endpoints,
}

impl OpenStreetMapGeocoder {
    /// Create an adapter
    ///
    /// Fails with [`Error::MissingDependency`] when `http` is `None`.
    pub fn new(http: Option<Arc<dyn HttpAdapter>>, config: ProviderConfig) -> Result<Self> {
        let http = http.ok_or(Error::MissingDependency { provider: NAME })?;

        if config.api_key().is_some() {
            warn!("{} does not use an API key; ignoring it", NAME);
        }

        let base = config
            .server
            .as_deref()
            .unwrap_or(Provider::OpenStreetMap.base_url());
        let endpoints = Endpoints::for_base(base);

        Ok(Self {
            http,
            config,
            endpoints,
        })
    }

    pub fn builder() -> GeocoderBuilder<Self> {
        GeocoderBuilder::new()
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

impl BuildGeocoder for OpenStreetMapGeocoder {
    fn assemble(http: Option<Arc<dyn HttpAdapter>>, config: ProviderConfig) -> Result<Self> {
        Self::new(http, config)
    }
}

impl Geocoder for OpenStreetMapGeocoder {
    fn name(&self) -> &'static str {
        NAME
    }

    fn geocode(&self, query: Query) -> Result<Lookup> {
        validate(NAME, &query)?;

        let request = build_geocode_request(&self.endpoints.search, &query, &self.config.extra, None);
        Ok(Lookup::new(NAME, Direction::Forward, request, Arc::clone(&self.http)))
    }

    fn reverse(&self, coords: Coordinates) -> Result<Lookup> {
        validate_coordinates(&coords)?;

        let request =
            build_reverse_request(&self.endpoints.reverse, &coords, &self.config.extra, None);
        Ok(Lookup::new(NAME, Direction::Reverse, request, Arc::clone(&self.http)))
    }
}

impl std::fmt::Debug for OpenStreetMapGeocoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(NAME)
            .field("endpoints", &self.endpoints)
            .field("extra", &self.config.extra)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Params;
    use crate::http::{RecordedCall, RecordingAdapter};
    use serde_json::{json, Value};
    use std::future::IntoFuture;

    fn params(value: Value) -> Params {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn geocoder(http: &Arc<RecordingAdapter>) -> OpenStreetMapGeocoder {
        OpenStreetMapGeocoder::builder()
            .http_adapter(http.clone())
            .build()
            .unwrap()
    }

    fn tonkin_palace() -> Value {
        json!({
            "place_id": "371408123",
            "licence": "Data \u{a9} OpenStreetMap contributors, ODbL 1.0. http://www.openstreetmap.org/copyright",
            "osm_type": "way",
            "osm_id": "704153616",
            "boundingbox": ["21.0264368", "21.0268920", "105.8551375", "105.8554352"],
            "lat": "21.02666585",
            "lon": "105.8552602508254",
            "display_name": "Tonkin Palace, 12, Ngo Quyen Street, Phường Tràng Tiền, Hoan Kiem District, Hà Nội, 11022, Vietnam",
            "type": "attraction",
            "importance": 0.39240155039647573,
            "address": {
                "house_number": "12",
                "street": "Phố Ngô Quyền",
                "suburb": "Hoàn Kiếm",
                "city": "Hà Nội",
                "quarter": "Tràng Tiền",
                "province": "Hà Nội",
                "postcode": "11022",
                "country": "Vietnam",
                "country_code": "vn"
            }
        })
    }

    fn co_nhue() -> Value {
        json!({
            "place_id": "207725411",
            "licence": "Data \u{a9} OpenStreetMap contributors, ODbL 1.0. http://www.openstreetmap.org/copyright",
            "osm_type": "way",
            "osm_id": "1115559634",
            "lat": "21.0609975",
            "lon": "105.7779905120694",
            "display_name": "Sân bóng cổ nhuê, Ngõ 145 Cổ Nhuế, Co Nhue 2 Ward, North Tu Liem District, Hà Nội, 12500, Vietnam",
            "address": {
                "house_number": "145",
                "street": "Cổ Nhuế",
                "suburb": "Bắc Từ Liêm",
                "quarter": "Cổ Nhuế",
                "city": "Hà Nội",
                "postcode": "12500",
                "country": "Vietnam",
                "country_code": "vn"
            }
        })
    }

    #[test]
    fn test_requires_http_adapter() {
        let err = OpenStreetMapGeocoder::builder().build().unwrap_err();
        assert!(matches!(err, Error::MissingDependency { .. }));
        assert_eq!(err.to_string(), "OpenStreetMapGeocoder need an httpAdapter");
    }

    #[test]
    fn test_backend_creation() {
        let http = Arc::new(RecordingAdapter::new());
        let osm = geocoder(&http);
        assert_eq!(osm.name(), "OpenStreetMapGeocoder");
        assert!(format!("{:?}", osm).contains("OpenStreetMapGeocoder"));
    }

    #[test]
    fn test_custom_server() {
        let http = Arc::new(RecordingAdapter::new());
        let osm = OpenStreetMapGeocoder::builder()
            .http_adapter(http)
            .server("https://nominatim.example.org")
            .build()
            .unwrap();
        assert_eq!(osm.endpoints().search, "https://nominatim.example.org/search");
    }

    #[test]
    fn test_rejects_ip_literals_without_request() {
        let http = Arc::new(RecordingAdapter::new());
        let osm = geocoder(&http);

        let err = osm.geocode("127.0.0.1".into()).unwrap_err();
        assert_eq!(err.to_string(), "OpenStreetMapGeocoder does not support geocoding IPv4");

        let err = osm
            .geocode("2001:0db8:0000:85a3:0000:0000:ac1f:8001".into())
            .unwrap_err();
        assert_eq!(err.to_string(), "OpenStreetMapGeocoder does not support geocoding IPv6");

        assert!(http.calls().is_empty());
    }

    #[test]
    fn test_reverse_rejects_non_finite_coordinates() {
        let http = Arc::new(RecordingAdapter::new());
        let osm = geocoder(&http);

        let err = osm.reverse(Coordinates::new(f64::NAN, 7.0)).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        let err = osm.reverse(Coordinates::new(12.0, f64::INFINITY)).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        assert!(http.calls().is_empty());
    }

    #[test]
    fn test_request_built_before_sending() {
        let http = Arc::new(RecordingAdapter::new());
        let osm = geocoder(&http);

        let lookup = osm.reverse(Coordinates::new(12.0, 7.0)).unwrap();

        assert_eq!(lookup.direction(), Direction::Reverse);
        assert_eq!(lookup.request().url, "http://nominatim.openstreetmap.org/reverse");
        assert!(http.calls().is_empty());
    }

    #[tokio::test]
    async fn test_geocode_calls_http_adapter() {
        let http = Arc::new(RecordingAdapter::new().respond_with(json!([])));
        let osm = geocoder(&http);

        osm.geocode("1 champs élysée Paris".into()).unwrap().await.unwrap();

        assert_eq!(
            http.calls(),
            vec![RecordedCall {
                url: "http://nominatim.openstreetmap.org/search".to_string(),
                params: params(json!({
                    "format": "json",
                    "addressdetails": 1,
                    "q": "1 champs élysée Paris"
                })),
            }]
        );
    }

    #[tokio::test]
    async fn test_geocode_returns_address() {
        let http = Arc::new(RecordingAdapter::new().respond_with(json!([tonkin_palace()])));
        let osm = geocoder(&http);

        let results = osm.geocode("12 Ngô Quyền, Hà Nội".into()).unwrap().await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(
            serde_json::to_value(&results[0]).unwrap(),
            json!({
                "latitude": 21.02666585,
                "longitude": 105.8552602508254,
                "formattedAddress": "Tonkin Palace, 12, Ngo Quyen Street, Phường Tràng Tiền, Hoan Kiem District, Hà Nội, 11022, Vietnam",
                "country": "Vietnam",
                "province": "Hà Nội",
                "city": "Hà Nội",
                "zipcode": "11022",
                "streetName": "Phố Ngô Quyền",
                "suburb": "Hoàn Kiếm",
                "quarter": "Tràng Tiền",
                "streetNumber": "12",
                "countryCode": "VN"
            })
        );
        assert_eq!(results.raw(), &json!([tonkin_palace()]));
    }

    #[tokio::test]
    async fn test_geocode_structured_query() {
        let http = Arc::new(RecordingAdapter::new().respond_with(json!([{
            "lat": "21.0086146",
            "lon": "105.79827453624539",
            "display_name": "Cục Tần số Vô tuyến Điện, 115, Đường Trần Duy Hưng, Phường Trung Hòa, Cau Giay District, Hà Nội, 10055, Vietnam",
            "address": {
                "house_number": "115",
                "province": "Hà Nội",
                "street": "Đường Trần Duy Hưng",
                "quarter": "Trung Hòa",
                "city": "Hà Nội",
                "suburb": "Cầu Giấy",
                "country": "Vietnam",
                "postcode": "10055",
                "country_code": "vn"
            }
        }])));
        let osm = geocoder(&http);

        let query = Query::structured([
            ("street", json!("115 Đường Trần Duy Hưng")),
            ("city", json!("Hà Nội")),
            ("limit", json!(1)),
        ]);
        let results = osm.geocode(query).unwrap().await.unwrap();

        assert_eq!(
            http.calls()[0].params,
            params(json!({
                "format": "json",
                "addressdetails": 1,
                "city": "Hà Nội",
                "limit": 1,
                "street": "115 Đường Trần Duy Hưng"
            }))
        );
        assert_eq!(results[0].street_name, "Đường Trần Duy Hưng");
        assert_eq!(results[0].suburb, "Cầu Giấy");
        assert_eq!(results[0].zipcode, "10055");
    }

    #[tokio::test]
    async fn test_geocode_ignores_format_and_addressdetails() {
        let http = Arc::new(RecordingAdapter::new().respond_with(json!([])));
        let osm = geocoder(&http);

        let query = Query::structured([
            ("q", json!("Athens")),
            ("format", json!("xml")),
            ("addressdetails", json!(0)),
        ]);
        osm.geocode(query).unwrap().await.unwrap();

        assert_eq!(
            http.calls()[0].params,
            params(json!({"format": "json", "addressdetails": 1, "q": "Athens"}))
        );
    }

    #[tokio::test]
    async fn test_reverse_returns_address() {
        let http = Arc::new(RecordingAdapter::new().respond_with(co_nhue()));
        let osm = geocoder(&http);

        let results = osm
            .reverse(Coordinates::new(21.0609975, 105.7779905120694))
            .unwrap()
            .await
            .unwrap();

        assert_eq!(http.calls()[0].url, "http://nominatim.openstreetmap.org/reverse");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].latitude, 21.0609975);
        assert_eq!(results[0].longitude, 105.7779905120694);
        assert_eq!(results[0].province, "");
        assert_eq!(results[0].suburb, "Bắc Từ Liêm");
        assert_eq!(results[0].quarter, "Cổ Nhuế");
        assert_eq!(results[0].street_number, "145");
        assert_eq!(results[0].country_code, "VN");
        assert_eq!(results.raw(), &co_nhue());
    }

    #[tokio::test]
    async fn test_reverse_extra_arguments() {
        let http = Arc::new(RecordingAdapter::new().respond_with(co_nhue()));
        let osm = geocoder(&http);

        osm.reverse(Coordinates::new(12.0, 7.0).with("zoom", 15))
            .unwrap()
            .await
            .unwrap();

        assert_eq!(
            http.calls()[0].params,
            params(json!({"format": "json", "addressdetails": 1, "lat": 12.0, "lon": 7.0, "zoom": 15}))
        );
    }

    #[tokio::test]
    async fn test_reverse_extra_arguments_from_config() {
        let http = Arc::new(RecordingAdapter::new().respond_with(co_nhue()));
        let osm = OpenStreetMapGeocoder::builder()
            .http_adapter(http.clone())
            .extra("zoom", 9)
            .build()
            .unwrap();

        osm.reverse(Coordinates::new(12.0, 7.0)).unwrap().await.unwrap();

        assert_eq!(
            http.calls()[0].params,
            params(json!({"format": "json", "addressdetails": 1, "lat": 12.0, "lon": 7.0, "zoom": 9}))
        );
    }

    #[tokio::test]
    async fn test_reverse_ignores_format_and_addressdetails() {
        let http = Arc::new(RecordingAdapter::new().respond_with(co_nhue()));
        let osm = geocoder(&http);

        let coords = Coordinates::new(12.0, 7.0)
            .with("format", "xml")
            .with("addressdetails", 0);
        osm.reverse(coords).unwrap().await.unwrap();

        assert_eq!(
            http.calls()[0].params,
            params(json!({"format": "json", "addressdetails": 1, "lat": 12.0, "lon": 7.0}))
        );
    }

    #[tokio::test]
    async fn test_transport_error_reaches_caller() {
        let http = Arc::new(RecordingAdapter::new().fail_with("503 Service Unavailable"));
        let osm = geocoder(&http);

        let err = osm.geocode("Athens".into()).unwrap().await.unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
        assert_eq!(err.to_string(), "503 Service Unavailable");
    }

    #[tokio::test]
    async fn test_shared_adapter_across_calls() {
        let http = Arc::new(
            RecordingAdapter::new()
                .respond_with(json!([]))
                .respond_with(json!([])),
        );
        let osm = geocoder(&http);

        let first = osm.geocode("Athens".into()).unwrap();
        let second = osm.geocode("Sparta".into()).unwrap();
        let (a, b) = tokio::join!(first.into_future(), second.into_future());

        assert!(a.is_ok() && b.is_ok());
        assert_eq!(http.calls().len(), 2);
    }
}
