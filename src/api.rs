//! Open-Meteo API client: city name → coordinates → current weather

use serde::Deserialize;

use crate::state::WeatherReading;

const GEOCODING_BASE: &str = "https://geocoding-api.open-meteo.com";
const FORECAST_BASE: &str = "https://api.open-meteo.com";

/// Shown when the geocoder has no match for the query
pub const NOT_FOUND_MESSAGE: &str = "City not found. Try another name!";
/// Shown for every other failure; the cause stays internal
pub const TRANSIENT_MESSAGE: &str = "Something went wrong. Please try again later.";

// ============================================================================
// Response models
// ============================================================================

/// Geocoding API response from Open-Meteo
#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
}

/// Forecast API response from Open-Meteo
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: CurrentWeather,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    windspeed: f64,
}

/// A geocoded city: coordinates plus the display label
#[derive(Clone, Debug, PartialEq)]
pub struct GeoResult {
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
}

fn geo_result_from(result: GeocodingResult) -> GeoResult {
    let label = match &result.country {
        Some(country) => format!("{}, {}", result.name, country),
        None => result.name,
    };
    GeoResult {
        label,
        latitude: result.latitude,
        longitude: result.longitude,
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Lookup error type
#[derive(Debug)]
pub enum LookupError {
    Request(reqwest::Error),
    NotFound(String),
}

impl LookupError {
    /// The one-line message the UI shows for this failure
    pub fn user_message(&self) -> &'static str {
        match self {
            LookupError::NotFound(_) => NOT_FOUND_MESSAGE,
            LookupError::Request(_) => TRANSIENT_MESSAGE,
        }
    }
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupError::Request(e) => write!(f, "Lookup request failed: {}", e),
            LookupError::NotFound(city) => write!(f, "City not found: {}", city),
        }
    }
}

impl std::error::Error for LookupError {}

// ============================================================================
// Client
// ============================================================================

/// Client for the two Open-Meteo endpoints. Base URLs are overridable so
/// tests can point both calls at a mock server.
#[derive(Clone, Debug)]
pub struct LookupClient {
    http: reqwest::Client,
    geocoding_base: String,
    forecast_base: String,
}

impl Default for LookupClient {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupClient {
    pub fn new() -> Self {
        Self::with_base_urls(GEOCODING_BASE, FORECAST_BASE)
    }

    pub fn with_base_urls(geocoding_base: &str, forecast_base: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            geocoding_base: geocoding_base.trim_end_matches('/').to_string(),
            forecast_base: forecast_base.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve a city name to coordinates. The query goes out untrimmed,
    /// percent-encoded into the `name` parameter.
    pub async fn geocode(&self, query: &str) -> Result<GeoResult, LookupError> {
        let url = format!(
            "{}/v1/search?name={}",
            self.geocoding_base,
            urlencoding::encode(query)
        );

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(LookupError::Request)?;
        let data: GeocodingResponse = response.json().await.map_err(LookupError::Request)?;

        data.results
            .and_then(|results| results.into_iter().next())
            .map(geo_result_from)
            .ok_or_else(|| LookupError::NotFound(query.to_string()))
    }

    /// Fetch current conditions for the coordinates
    pub async fn current_weather(&self, lat: f64, lon: f64) -> Result<CurrentReading, LookupError> {
        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&current_weather=true",
            self.forecast_base, lat, lon
        );

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(LookupError::Request)?;
        let data: ForecastResponse = response.json().await.map_err(LookupError::Request)?;

        Ok(CurrentReading {
            temperature: data.current_weather.temperature,
            windspeed: data.current_weather.windspeed,
        })
    }

    /// The full chain: geocode, then forecast. The forecast call only happens
    /// after a successful geocode.
    pub async fn lookup(&self, query: &str) -> Result<WeatherReading, LookupError> {
        let geo = self.geocode(query).await?;
        let current = self.current_weather(geo.latitude, geo.longitude).await?;

        Ok(WeatherReading {
            city: geo.label,
            temperature: current.temperature,
            windspeed: current.windspeed,
        })
    }
}

/// Temperature and wind as extracted from the forecast response, no further
/// validation or conversion
#[derive(Clone, Debug, PartialEq)]
pub struct CurrentReading {
    pub temperature: f64,
    pub windspeed: f64,
}
