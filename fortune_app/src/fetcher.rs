//! Price fetching over HTTP.
//!
//! `CoinGeckoClient` performs a single blocking GET against the `simple/price`
//! endpoint. `PriceFetcher` runs each request on its own worker thread and
//! reports the result back to the event loop as a `FetchOutcome` through a
//! `crossbeam_channel` sender, tagged with the request id it was issued under.
use std::sync::Arc;
use std::thread;

use crossbeam_channel::Sender;
use fortune_common::quote::VS_CURRENCY;
use fortune_common::{Coin, FortuneError, PriceQuote, Result};
use log::{debug, warn};
use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

/// Source of price quotes for a single coin.
pub trait PriceSource: Send + Sync {
    /// Fetch the current quote for `coin`. No caching, no retries.
    fn fetch(&self, coin: Coin) -> Result<PriceQuote>;
}

/// Blocking client for the CoinGecko `simple/price` endpoint.
pub struct CoinGeckoClient {
    http: Client,
    base_url: String,
}

impl CoinGeckoClient {
    /// Public API root used when no override is configured.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.coingecko.com/api/v3";

    /// Create a client against `base_url` (e.g., a proxy or a mock server).
    pub fn new(base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("crypto_fortune/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FortuneError::Http(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full request URL for `coin`, including the currency and change flag.
    pub fn quote_url(&self, coin: Coin) -> Result<Url> {
        Url::parse_with_params(
            &format!("{}/simple/price", self.base_url),
            &[
                ("ids", coin.id()),
                ("vs_currencies", VS_CURRENCY),
                ("include_24hr_change", "true"),
            ],
        )
        .map_err(|e| FortuneError::Http(format!("invalid price URL: {}", e)))
    }
}

impl PriceSource for CoinGeckoClient {
    fn fetch(&self, coin: Coin) -> Result<PriceQuote> {
        let url = self.quote_url(coin)?;
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| FortuneError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FortuneError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .map_err(|e| FortuneError::Http(e.to_string()))?;
        PriceQuote::from_simple_price(coin, &body)
    }
}

/// A fetch issued by the UI state, identified by a monotonically increasing id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    /// Request id; only the latest issued id is applied.
    pub id: u64,
    /// Coin the request was issued for.
    pub coin: Coin,
}

/// Result of a fetch, delivered back to the event loop.
#[derive(Debug)]
pub struct FetchOutcome {
    /// The request this outcome answers.
    pub request: FetchRequest,
    /// The quote, or why it could not be obtained.
    pub result: Result<PriceQuote>,
}

/// Runs fetches on worker threads and reports outcomes over a channel.
pub struct PriceFetcher {
    source: Arc<dyn PriceSource>,
    outcome_tx: Sender<FetchOutcome>,
}

impl PriceFetcher {
    /// Create a fetcher that reports every outcome to `outcome_tx`.
    pub fn new(source: Arc<dyn PriceSource>, outcome_tx: Sender<FetchOutcome>) -> Self {
        Self { source, outcome_tx }
    }

    /// Start `request` in the background. Never blocks the caller.
    pub fn dispatch(&self, request: FetchRequest) {
        let source = Arc::clone(&self.source);
        let outcome_tx = self.outcome_tx.clone();

        thread::spawn(move || {
            debug!("Fetch #{} started for {}", request.id, request.coin);
            let result = source.fetch(request.coin);
            if let Err(e) = &result {
                warn!("Fetch #{} for {} failed: {}", request.id, request.coin, e);
            }
            if outcome_tx.send(FetchOutcome { request, result }).is_err() {
                debug!("Fetch #{} finished after the event loop stopped", request.id);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn fetch_blocking(base_url: String, coin: Coin) -> Result<PriceQuote> {
        tokio::task::spawn_blocking(move || CoinGeckoClient::new(&base_url)?.fetch(coin))
            .await
            .unwrap()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn fetch_sends_one_request_per_coin_with_its_id() {
        for coin in Coin::all() {
            // Arrange
            let mock_server = MockServer::start().await;
            let body = format!(r#"{{"{}":{{"usd":10.5,"usd_24h_change":1.25}}}}"#, coin.id());
            Mock::given(method("GET"))
                .and(path("/simple/price"))
                .and(query_param("ids", coin.id()))
                .and(query_param("vs_currencies", "usd"))
                .and(query_param("include_24hr_change", "true"))
                .respond_with(ResponseTemplate::new(200).set_body_string(body))
                .expect(1)
                .mount(&mock_server)
                .await;

            // Act
            let quote = fetch_blocking(mock_server.uri(), coin).await.unwrap();

            // Assert
            assert_eq!(quote.coin, coin);
            assert_eq!(quote.usd, 10.5);
            assert_eq!(quote.change_24h, Some(1.25));
            mock_server.verify().await;
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn server_error_is_a_status_failure() {
        let mock_server = MockServer::start().await;
        Mock::given(path("/simple/price"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let err = fetch_blocking(mock_server.uri(), Coin::Bitcoin)
            .await
            .unwrap_err();

        assert!(matches!(err, FortuneError::Status(500)));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn rate_limit_is_just_another_failure() {
        let mock_server = MockServer::start().await;
        Mock::given(path("/simple/price"))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let err = fetch_blocking(mock_server.uri(), Coin::Solana)
            .await
            .unwrap_err();

        assert!(matches!(err, FortuneError::Status(429)));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn body_without_requested_coin_is_malformed() {
        let mock_server = MockServer::start().await;
        Mock::given(path("/simple/price"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&mock_server)
            .await;

        let err = fetch_blocking(mock_server.uri(), Coin::Cardano)
            .await
            .unwrap_err();

        assert!(matches!(err, FortuneError::MalformedQuote { .. }));
    }

    #[test]
    fn unreachable_host_is_an_http_failure() {
        let client = CoinGeckoClient::new("http://127.0.0.1:1").unwrap();
        let err = client.fetch(Coin::Bitcoin).unwrap_err();
        assert!(matches!(err, FortuneError::Http(_)));
    }

    #[test]
    fn quote_url_carries_all_parameters() {
        let client = CoinGeckoClient::new("https://example.test/api/v3/").unwrap();
        let url = client.quote_url(Coin::Dogecoin).unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.test/api/v3/simple/price?ids=dogecoin&vs_currencies=usd&include_24hr_change=true"
        );
    }

    struct FixedSource;

    impl PriceSource for FixedSource {
        fn fetch(&self, coin: Coin) -> Result<PriceQuote> {
            PriceQuote::from_simple_price(coin, br#"{"ethereum":{"usd":3000.0}}"#)
        }
    }

    #[test]
    fn dispatch_reports_outcome_with_request_id() {
        let (tx, rx) = unbounded();
        let fetcher = PriceFetcher::new(Arc::new(FixedSource), tx);
        let request = FetchRequest {
            id: 42,
            coin: Coin::Ethereum,
        };

        fetcher.dispatch(request);
        let outcome = rx.recv_timeout(Duration::from_secs(5)).unwrap();

        assert_eq!(outcome.request, request);
        assert_eq!(outcome.result.unwrap().usd, 3000.0);
    }
}
