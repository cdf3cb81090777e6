//! DNS-history reconnaissance against dnsdumpster.com.
//!
//! The service has no API; results come from scraping the search form's
//! result tables. The page layout is a Django form: fetch the search
//! page, lift the csrf token out of the hidden input, post the form with
//! the token cookie and a matching `Referer`, then pull the four result
//! tables (DNS, MX, TXT, host) out of the response body.
//!
//! Records are returned with provider and country as separate structured
//! fields; callers never do string surgery on the provider text.

use std::sync::LazyLock;
use std::time::Duration;

use anyhow::{Context, ensure};
use regex::Regex;
use reqwest::header::REFERER;
use serde::Serialize;
use tracing::debug;

pub const DNSDUMPSTER_URL: &str = "https://dnsdumpster.com/";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

static CSRF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"name=['"]csrfmiddlewaretoken['"][^>]*value=['"]([^'"]+)['"]"#).unwrap()
});
static TABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<table[^>]*>(.*?)</table>").unwrap());
static ROW_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<tr[^>]*>(.*?)</tr>").unwrap());
static CELL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<td[^>]*>(.*?)</td>").unwrap());
static SPAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<span[^>]*>(.*?)</span>").unwrap());
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static IP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}").unwrap());

/// One host/DNS/MX record from the history service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReconRecord {
    pub domain: String,
    pub ip: String,
    /// Autonomous system, e.g. `AS13335`.
    pub asn: String,
    /// Free-text provider description, already stripped of the country.
    pub provider: String,
    pub country: String,
}

impl ReconRecord {
    /// Does the provider text mention the given CDN marker?
    /// Case-insensitive; a record that does *not* is a bypass candidate.
    pub fn mentions_provider(&self, marker: &str) -> bool {
        self.provider
            .to_lowercase()
            .contains(&marker.to_lowercase())
    }
}

/// Everything one search returns.
#[derive(Clone, Debug, Serialize)]
pub struct ReconReport {
    pub domain: String,
    pub host: Vec<ReconRecord>,
    pub dns: Vec<ReconRecord>,
    pub mx: Vec<ReconRecord>,
    pub txt: Vec<String>,
}

impl ReconReport {
    /// Record sections in presentation order, labeled.
    pub fn sections(&self) -> [(&'static str, &[ReconRecord]); 3] {
        [
            ("HOST", self.host.as_slice()),
            ("DNS", self.dns.as_slice()),
            ("MX", self.mx.as_slice()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.host.is_empty() && self.dns.is_empty() && self.mx.is_empty() && self.txt.is_empty()
    }
}

pub struct DnsDumpster {
    client: reqwest::Client,
}

impl DnsDumpster {
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("cdnmap/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("building HTTP client")?;
        Ok(Self { client })
    }

    /// Runs one search and parses the result tables.
    pub async fn search(&self, domain: &str) -> anyhow::Result<ReconReport> {
        let form_page = self
            .client
            .get(DNSDUMPSTER_URL)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .context("fetching the search form")?
            .text()
            .await
            .context("reading the search form")?;

        let token = csrf_token(&form_page).context("search form carried no csrf token")?;
        debug!("retrieved csrf token");

        let response = self
            .client
            .post(DNSDUMPSTER_URL)
            .header(REFERER, DNSDUMPSTER_URL)
            .form(&[("csrfmiddlewaretoken", token), ("targetip", domain)])
            .send()
            .await
            .context("submitting the search form")?;

        let status = response.status();
        ensure!(
            status.is_success(),
            "unexpected status from {DNSDUMPSTER_URL}: {status}"
        );

        let body = response.text().await.context("reading search results")?;
        ensure!(
            !body.contains("There was an error getting results"),
            "the service reported an error for {domain}"
        );

        parse_report(domain, &body)
    }
}

fn csrf_token(html: &str) -> Option<&str> {
    CSRF_RE
        .captures(html)
        .map(|caps| caps.get(1).unwrap().as_str())
}

/// Parses a results page into a report.
///
/// Table order on the page: DNS servers, MX, TXT, hosts.
pub fn parse_report(domain: &str, html: &str) -> anyhow::Result<ReconReport> {
    let tables: Vec<&str> = TABLE_RE
        .captures_iter(html)
        .map(|caps| caps.get(1).unwrap().as_str())
        .collect();
    ensure!(
        tables.len() >= 4,
        "unexpected page layout: found {} result tables, need 4",
        tables.len()
    );

    Ok(ReconReport {
        domain: domain.to_string(),
        dns: parse_record_rows(tables[0]),
        mx: parse_record_rows(tables[1]),
        txt: parse_txt_cells(tables[2]),
        host: parse_record_rows(tables[3]),
    })
}

/// Extracts structured records from a result table body. Rows without
/// the expected three cells (headers, spacers) or without an IP in the
/// second cell are dropped.
fn parse_record_rows(table: &str) -> Vec<ReconRecord> {
    ROW_RE
        .captures_iter(table)
        .filter_map(|row| parse_record_row(row.get(1).unwrap().as_str()))
        .collect()
}

fn parse_record_row(row: &str) -> Option<ReconRecord> {
    let cells: Vec<&str> = CELL_RE
        .captures_iter(row)
        .map(|caps| caps.get(1).unwrap().as_str())
        .collect();
    if cells.len() < 3 {
        return None;
    }

    let domain = strip_tags(cells[0]);
    let ip = IP_RE.find(&strip_tags(cells[1]))?.as_str().to_string();

    let country = SPAN_RE
        .captures(cells[2])
        .map(|caps| collapse_whitespace(&strip_tags(caps.get(1).unwrap().as_str())))
        .unwrap_or_default();

    let info = strip_tags(cells[2]);
    let mut words = info.split_whitespace();
    let asn = words.next().unwrap_or_default().to_string();
    let mut provider = words.collect::<Vec<_>>().join(" ");
    if !country.is_empty() {
        provider = provider.replace(&country, "");
    }

    Some(ReconRecord {
        domain,
        ip,
        asn,
        provider: collapse_whitespace(&provider),
        country,
    })
}

fn parse_txt_cells(table: &str) -> Vec<String> {
    CELL_RE
        .captures_iter(table)
        .map(|caps| collapse_whitespace(&strip_tags(caps.get(1).unwrap().as_str())))
        .filter(|text| !text.is_empty())
        .collect()
}

fn strip_tags(html: &str) -> String {
    collapse_whitespace(&TAG_RE.replace_all(html, " "))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
