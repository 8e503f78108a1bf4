//! Currency conversion
//!
//! Rates come from a public exchange-rate API and are cached per currency
//! pair. On fetch failure the service degrades in order: stale cache entry,
//! then a hardcoded approximate rate table, then an error.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::config::Settings;
use crate::error::{FintrackError, FintrackResult};
use crate::models::Money;

/// Approximate rates used when both the API and the cache are unavailable
const FALLBACK_RATES: &[(&str, &str, f64)] = &[
    ("EUR", "RON", 4.97),
    ("RON", "EUR", 0.2012),
    ("USD", "RON", 4.60),
    ("RON", "USD", 0.2174),
    ("EUR", "USD", 1.08),
    ("USD", "EUR", 0.9259),
];

const DEFAULT_API_BASE_URL: &str = "https://api.exchangerate-api.com/v4";

/// A source of exchange rates, usually remote
pub trait RateSource: Send + Sync {
    /// Rate to multiply an amount in `from` by to get `to`
    fn fetch_rate(&self, from: &str, to: &str) -> FintrackResult<f64>;
}

#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: HashMap<String, f64>,
}

/// Rate source backed by a `/latest/{BASE}` HTTP endpoint
pub struct HttpRateSource {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpRateSource {
    pub fn new() -> FintrackResult<Self> {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> FintrackResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

impl RateSource for HttpRateSource {
    fn fetch_rate(&self, from: &str, to: &str) -> FintrackResult<f64> {
        let url = format!("{}/latest/{}", self.base_url, from);
        let response = self.client.get(&url).send()?;

        if !response.status().is_success() {
            return Err(FintrackError::Currency(format!(
                "Rate API returned status {}",
                response.status()
            )));
        }

        let body: RatesResponse = response.json()?;
        body.rates.get(to).copied().ok_or_else(|| {
            FintrackError::Currency(format!("Rate API has no rate for {}", to))
        })
    }
}

/// The result of a single conversion
#[derive(Debug, Clone)]
pub struct Conversion {
    pub amount: Money,
    pub from_currency: String,
    pub to_currency: String,
    pub converted_amount: Money,
    pub rate: f64,
    pub timestamp: DateTime<Utc>,
}

struct CachedRate {
    rate: f64,
    fetched_at: Instant,
}

/// Converts amounts between currencies with a per-pair rate cache
pub struct CurrencyService {
    source: Box<dyn RateSource>,
    cache: RwLock<HashMap<String, CachedRate>>,
    ttl: Duration,
}

impl CurrencyService {
    pub fn new(source: Box<dyn RateSource>, settings: &Settings) -> Self {
        Self {
            source,
            cache: RwLock::new(HashMap::new()),
            ttl: Duration::from_secs(settings.rate_cache_ttl_secs),
        }
    }

    /// Convert `amount` from one currency to another
    ///
    /// Currency codes are case-insensitive. Fails for non-positive amounts;
    /// converting a currency to itself always succeeds with rate 1.
    pub fn convert(&self, amount: Money, from: &str, to: &str) -> FintrackResult<Conversion> {
        if !amount.is_positive() {
            return Err(FintrackError::Validation(
                "Conversion amount must be positive".into(),
            ));
        }

        let from = from.to_uppercase();
        let to = to.to_uppercase();

        let rate = if from == to {
            1.0
        } else {
            self.resolve_rate(&from, &to)?
        };

        Ok(Conversion {
            amount,
            converted_amount: amount.apply_rate(rate),
            from_currency: from,
            to_currency: to,
            rate,
            timestamp: Utc::now(),
        })
    }

    /// Resolve a rate through the fallback ladder:
    /// fresh cache, live fetch, stale cache, hardcoded table.
    fn resolve_rate(&self, from: &str, to: &str) -> FintrackResult<f64> {
        let key = format!("{}-{}", from, to);

        {
            let cache = self.cache.read().map_err(lock_err)?;
            if let Some(entry) = cache.get(&key) {
                if entry.fetched_at.elapsed() < self.ttl {
                    return Ok(entry.rate);
                }
            }
        }

        match self.source.fetch_rate(from, to) {
            Ok(rate) => {
                let mut cache = self.cache.write().map_err(lock_err)?;
                cache.insert(
                    key,
                    CachedRate {
                        rate,
                        fetched_at: Instant::now(),
                    },
                );
                Ok(rate)
            }
            Err(_) => {
                // Stale cache beats an approximate table.
                let cache = self.cache.read().map_err(lock_err)?;
                if let Some(entry) = cache.get(&key) {
                    return Ok(entry.rate);
                }
                fallback_rate(from, to).ok_or_else(|| FintrackError::RateUnavailable {
                    from: from.to_string(),
                    to: to.to_string(),
                })
            }
        }
    }
}

fn fallback_rate(from: &str, to: &str) -> Option<f64> {
    FALLBACK_RATES
        .iter()
        .find(|(f, t, _)| *f == from && *t == to)
        .map(|(_, _, rate)| *rate)
}

fn lock_err(e: impl std::fmt::Display) -> FintrackError {
    FintrackError::Currency(format!("Failed to acquire rate cache lock: {}", e))
}
