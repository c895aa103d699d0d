//! IP geolocation service using ip-api.com.

use crate::address::Address;
use crate::results::{Geolocation, LookupResult};
use anyhow::{Context, Result};
use log::{debug, info};
use reqwest::Client;
use serde_json::{Map, Value};
use std::fmt;

/// Default endpoint of the geolocation service.
pub const DEFAULT_BASE_URL: &str = "http://ip-api.com";

/// A display label paired with the machine key used by ip-api.com.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
  pub label: &'static str,
  pub key: &'static str,
}

/// The fields rendered by every output format, in display order.
pub const FIELDS: [Field; 14] = [
  Field {
    label: "IP Address",
    key: "query",
  },
  Field {
    label: "Country",
    key: "country",
  },
  Field {
    label: "Country Code",
    key: "countryCode",
  },
  Field {
    label: "Region",
    key: "regionName",
  },
  Field {
    label: "City",
    key: "city",
  },
  Field {
    label: "Latitude",
    key: "lat",
  },
  Field {
    label: "Longitude",
    key: "lon",
  },
  Field {
    label: "ISP",
    key: "isp",
  },
  Field {
    label: "Organization",
    key: "org",
  },
  Field {
    label: "AS",
    key: "as",
  },
  Field {
    label: "Timezone",
    key: "timezone",
  },
  Field {
    label: "Mobile",
    key: "mobile",
  },
  Field {
    label: "Proxy",
    key: "proxy",
  },
  Field {
    label: "Hosting",
    key: "hosting",
  },
];

/// A field value exactly as the service sent it, whatever its JSON type.
///
/// Strings display without quotes; numbers and booleans display as their
/// JSON text, so `-122.0` stays `-122.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue(pub Value);

impl fmt::Display for FieldValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.0 {
      Value::String(s) => f.write_str(s),
      other => write!(f, "{other}"),
    }
  }
}

impl From<&str> for FieldValue {
  fn from(s: &str) -> Self {
    Self(Value::String(s.to_string()))
  }
}

impl From<bool> for FieldValue {
  fn from(b: bool) -> Self {
    Self(Value::Bool(b))
  }
}

impl From<Value> for FieldValue {
  fn from(v: Value) -> Self {
    Self(v)
  }
}

/// Geolocation data from ip-api.com
///
/// Every field is optional: `None` means the service did not send it (or sent
/// `null`), which is distinct from an empty string. Values of an unexpected
/// JSON type are kept as-is rather than rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Info {
  /// Queried IP address
  pub query: Option<FieldValue>,

  /// Country name
  pub country: Option<FieldValue>,

  /// Two-letter country code
  pub country_code: Option<FieldValue>,

  /// Region/State name
  pub region_name: Option<FieldValue>,

  /// City name
  pub city: Option<FieldValue>,

  pub lat: Option<FieldValue>,
  pub lon: Option<FieldValue>,

  /// Internet Service Provider
  pub isp: Option<FieldValue>,

  /// Organization name
  pub org: Option<FieldValue>,

  /// AS number and description, e.g. "AS15169 Google LLC"
  pub as_name: Option<FieldValue>,

  /// IANA timezone name
  pub timezone: Option<FieldValue>,

  pub mobile: Option<FieldValue>,
  pub proxy: Option<FieldValue>,
  pub hosting: Option<FieldValue>,
}

impl Info {
  /// Picks the known fields out of a response object. Missing keys and JSON
  /// `null` become `None`; every other value is kept whatever its type.
  #[must_use]
  pub fn from_raw(raw: &Map<String, Value>) -> Self {
    let field = |key: &str| {
      raw
        .get(key)
        .filter(|v| !v.is_null())
        .cloned()
        .map(FieldValue)
    };
    Self {
      query: field("query"),
      country: field("country"),
      country_code: field("countryCode"),
      region_name: field("regionName"),
      city: field("city"),
      lat: field("lat"),
      lon: field("lon"),
      isp: field("isp"),
      org: field("org"),
      as_name: field("as"),
      timezone: field("timezone"),
      mobile: field("mobile"),
      proxy: field("proxy"),
      hosting: field("hosting"),
    }
  }

  /// Field values as display strings, in [`FIELDS`] order.
  #[must_use]
  pub fn values(&self) -> [Option<String>; 14] {
    [
      &self.query,
      &self.country,
      &self.country_code,
      &self.region_name,
      &self.city,
      &self.lat,
      &self.lon,
      &self.isp,
      &self.org,
      &self.as_name,
      &self.timezone,
      &self.mobile,
      &self.proxy,
      &self.hosting,
    ]
    .map(|v| v.as_ref().map(ToString::to_string))
  }
}

/// Client for the geolocation service.
#[derive(Debug, Clone)]
pub struct GeoClient {
  http: Client,
  base_url: String,
}

impl GeoClient {
  /// Creates a client that queries `base_url` (e.g. `http://ip-api.com`).
  #[must_use]
  pub fn new(http: Client, base_url: &str) -> Self {
    Self {
      http,
      base_url: base_url.trim_end_matches('/').to_string(),
    }
  }

  /// The request URL for `address`.
  #[must_use]
  pub fn url_for(&self, address: &Address) -> String {
    format!("{}/json/{address}", self.base_url)
  }

  /// Looks up `address`.
  ///
  /// Never fails: transport errors, malformed bodies and service-reported
  /// failures all come back as [`LookupResult::Failure`].
  ///
  /// # Example
  /// ```ignore
  /// use ipgeo::{address::Address, providers::geo::{GeoClient, DEFAULT_BASE_URL}};
  /// let client = GeoClient::new(reqwest::Client::new(), DEFAULT_BASE_URL);
  /// let result = client.lookup(&Address::parse("8.8.8.8")?).await;
  /// ```
  pub async fn lookup(&self, address: &Address) -> LookupResult {
    let result = match self.fetch(address).await {
      Ok(body) => interpret(body),
      Err(e) => LookupResult::Failure(format!("Error: {e:#}")),
    };
    match &result {
      LookupResult::Success(_) => info!("Lookup for {address} succeeded"),
      LookupResult::Failure(message) => {
        info!("Lookup for {address} failed: {message}");
      }
    }
    result
  }

  /// Performs the request and parses the body as a JSON object.
  ///
  /// Non-2xx responses are still parsed: ip-api.com reports its own failures
  /// in the body.
  async fn fetch(&self, address: &Address) -> Result<Map<String, Value>> {
    let url = self.url_for(address);
    debug!("GET {url}");

    let response = self
      .http
      .get(&url)
      .send()
      .await
      .with_context(|| format!("Failed to send request to {url}"))?;

    debug!("Geolocation API responded with status {}", response.status());

    let body = response
      .text()
      .await
      .context("Failed to read Geolocation API response body")?;

    let value: Value = serde_json::from_str(&body)
      .context("Failed to parse Geolocation API response as JSON")?;

    match value {
      Value::Object(map) => Ok(map),
      other => anyhow::bail!(
        "Geolocation API response is not a JSON object: {other}"
      ),
    }
  }
}

/// Turns a parsed response object into a lookup result.
fn interpret(body: Map<String, Value>) -> LookupResult {
  if body.get("status").and_then(Value::as_str) == Some("fail") {
    let message = body
      .get("message")
      .and_then(Value::as_str)
      .unwrap_or("Unknown error");
    return LookupResult::Failure(message.to_string());
  }

  LookupResult::Success(Geolocation {
    info: Info::from_raw(&body),
    raw: body,
  })
}
