use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Upstream service computing the prices and profit margins
const PRICING_ENDPOINT: &str = "https://api.poefa.xyz/calculate-prices";

/// One fetched set of pricing figures, valid only for the invocation that
/// fetched it. All fields are required: a payload missing any of them is
/// rejected as malformed instead of being partially displayed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PricingSnapshot {
    pub divine_price: f64,
    pub bulk_price_screaming: f64,
    pub bulk_price_incandescent: f64,
    pub bulk_price_maven: f64,
    pub single_price_screaming: f64,
    pub single_price_incandescent: f64,
    pub single_price_maven: f64,
    pub profit_screaming: f64,
    pub profit_incandescent: f64,
    pub profit_maven: f64,
}

/// Everything that can go wrong while fetching a snapshot
#[derive(Debug, Error)]
pub enum FetchError {
    /// The upstream answered, but not with a success status
    #[error("upstream returned HTTP {0}")]
    UpstreamStatus(StatusCode),
    /// The request never completed (connection, TLS, timeout...)
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(#[from] reqwest::Error),
    /// The body was not a JSON object with the ten expected numeric fields
    #[error("malformed pricing payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),
}

/// Issues the outbound pricing request. Built once at startup and shared with
/// the command handler; `reqwest::Client` is reference counted internally so
/// concurrent invocations can use it without extra synchronization.
#[derive(Debug, Clone)]
pub struct PricingClient {
    http: reqwest::Client,
}

impl PricingClient {
    pub fn new() -> Self {
        PricingClient {
            http: reqwest::Client::new(),
        }
    }

    /// Fetch a fresh snapshot from the upstream
    /// Best-effort single attempt: no retry, no caching, failures are
    /// surfaced to the caller as is.
    pub async fn fetch_snapshot(&self) -> Result<PricingSnapshot, FetchError> {
        let response = self.http.get(PRICING_ENDPOINT).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UpstreamStatus(status));
        }
        let body = response.text().await?;
        decode_snapshot(&body)
    }
}

impl Default for PricingClient {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_snapshot(body: &str) -> Result<PricingSnapshot, FetchError> {
    serde_json::from_str(body).map_err(FetchError::MalformedPayload)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> String {
        serde_json::json!({
            "divine_price": 150,
            "bulk_price_screaming": 2,
            "bulk_price_incandescent": 2.5,
            "bulk_price_maven": 3,
            "single_price_screaming": 320,
            "single_price_incandescent": 410,
            "single_price_maven": 500,
            "profit_screaming": 20,
            "profit_incandescent": 35,
            "profit_maven": 50
        })
        .to_string()
    }

    #[test]
    fn decodes_a_full_payload() {
        let snapshot = decode_snapshot(&full_payload()).unwrap();
        assert_eq!(snapshot.divine_price, 150.0);
        assert_eq!(snapshot.bulk_price_incandescent, 2.5);
        assert_eq!(snapshot.profit_maven, 50.0);
    }

    #[test]
    fn rejects_a_payload_with_a_missing_field() {
        let mut value: serde_json::Value = serde_json::from_str(&full_payload()).unwrap();
        value.as_object_mut().unwrap().remove("profit_screaming");
        let err = decode_snapshot(&value.to_string()).unwrap_err();
        assert!(matches!(err, FetchError::MalformedPayload(_)));
        assert!(err.to_string().contains("profit_screaming"));
    }

    #[test]
    fn rejects_a_body_that_is_not_json() {
        let err = decode_snapshot("not json").unwrap_err();
        assert!(matches!(err, FetchError::MalformedPayload(_)));
    }

    #[test]
    fn status_error_message_contains_the_status_code() {
        let err = FetchError::UpstreamStatus(StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.to_string().contains("503"));
    }
}
