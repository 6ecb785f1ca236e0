//! Blocking HTTP fetches against the HSReplay API.
//!
//! Both endpoints are fixed. Bodies are returned exactly as received and
//! never parsed here.

use anyhow::Result;
use std::io::Write;

/// Public HSReplay host.
pub const HSREPLAY_BASE_URL: &str = "https://hsreplay.net";

pub const ARCHETYPES_PATH: &str = "/api/v1/archetypes/";
pub const ARCHETYPES_QUERY: &str = "format=json";

pub const DECK_POPULARITY_STATS_PATH: &str =
    "/analytics/query/archetype_popularity_distribution_stats_v2/";
pub const DECK_POPULARITY_STATS_QUERY: &str =
    "GameType=RANKED_STANDARD&LeagueRankRange=BRONZE_THROUGH_GOLD&Region=ALL&TimeRange=LAST_7_DAYS";

/// Where the two payloads are fetched from.
///
/// Only the host part can vary; paths and query strings are constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(HSREPLAY_BASE_URL)
    }
}

impl Endpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn archetypes_url(&self) -> String {
        format!("{}{}?{}", self.base_url, ARCHETYPES_PATH, ARCHETYPES_QUERY)
    }

    pub fn deck_popularity_stats_url(&self) -> String {
        format!(
            "{}{}?{}",
            self.base_url, DECK_POPULARITY_STATS_PATH, DECK_POPULARITY_STATS_QUERY
        )
    }
}

/// Both raw bodies, in the order they were fetched.
#[derive(Debug, Clone)]
pub struct Payloads {
    pub archetypes: Vec<u8>,
    pub deck_popularity_stats: Vec<u8>,
}

pub struct Fetcher {
    client: reqwest::blocking::Client,
    endpoints: Endpoints,
}

impl Fetcher {
    /// Fetcher bound to the public HSReplay host.
    pub fn new() -> Result<Self> {
        Self::with_endpoints(Endpoints::default())
    }

    pub fn with_endpoints(endpoints: Endpoints) -> Result<Self> {
        Ok(Self {
            client: http_client()?,
            endpoints,
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn fetch_archetypes(&self) -> Result<Vec<u8>> {
        download(&self.client, &self.endpoints.archetypes_url())
    }

    pub fn fetch_deck_popularity_stats(&self) -> Result<Vec<u8>> {
        download(&self.client, &self.endpoints.deck_popularity_stats_url())
    }

    /// Fetches the archetype list, then the deck stats. Stops at the first failure.
    pub fn fetch_all(&self) -> Result<Payloads> {
        let archetypes = self.fetch_archetypes()?;
        let deck_popularity_stats = self.fetch_deck_popularity_stats()?;
        Ok(Payloads {
            archetypes,
            deck_popularity_stats,
        })
    }
}

/// Runs both fetches and writes the deck stats body to `out`.
///
/// The archetype list is fetched but never written. Nothing reaches `out`
/// unless both requests succeed.
pub fn run<W: Write>(fetcher: &Fetcher, out: &mut W) -> Result<()> {
    let payloads = fetcher.fetch_all()?;
    tracing::debug!(
        archetypes_len = payloads.archetypes.len(),
        "archetype list fetched and discarded"
    );
    out.write_all(&payloads.deck_popularity_stats)?;
    out.flush()?;
    Ok(())
}

fn download(client: &reqwest::blocking::Client, url: &str) -> Result<Vec<u8>> {
    tracing::debug!(%url, "GET");
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("failed to download {}: HTTP {}", url, status);
    }
    let body = response.bytes()?.to_vec();
    tracing::debug!(%url, %status, len = body.len(), "downloaded");
    Ok(body)
}

fn http_client() -> Result<reqwest::blocking::Client> {
    Ok(reqwest::blocking::Client::builder().build()?)
}
