//! Application service: registry lookup → fetch → score → summary.

use std::path::Path;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use serde::Serialize;

use repute_core::address;
use repute_core::config::ReputeConfig;
use repute_core::errors::{ConfigError, FetchError, RegistryError, ReputeError, ReputeResult};
use repute_core::models::{IdentityProfile, LinkRecord, ReputationScore, SummaryInput};
use repute_core::traits::{IAttestationSource, ILinkRegistry};
use repute_graph::GraphClient;
use repute_observability::score_span;
use repute_observability::tracing_setup::events;
use repute_registry::LinkRegistry;
use repute_scoring::{ScoreCache, ScoreEngine, ScoreRequest};
use repute_summary::{RenderedSummary, SummaryService};

/// Everything `rep` produces for one nickname.
#[derive(Debug, Clone, Serialize)]
pub struct RepReport {
    pub nickname: String,
    pub wallet: String,
    pub score: ReputationScore,
    pub profile: Option<IdentityProfile>,
    /// True when attestations could not be fetched and the score is neutral.
    pub degraded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_error: Option<String>,
}

impl RepReport {
    pub fn summary_input(&self) -> SummaryInput {
        SummaryInput {
            display_name: self.nickname.clone(),
            score: self.score.clone(),
            profile: self.profile.clone(),
        }
    }
}

/// A score for one wallet and whether it is the neutral fallback for a
/// failed fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressScore {
    #[serde(flatten)]
    pub score: ReputationScore,
    pub degraded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_error: Option<String>,
}

impl AddressScore {
    fn fetched(score: ReputationScore) -> Self {
        Self {
            score,
            degraded: false,
            fetch_error: None,
        }
    }

    fn degraded(score: ReputationScore, error: &FetchError) -> Self {
        Self {
            score,
            degraded: true,
            fetch_error: Some(error.to_string()),
        }
    }
}

pub struct App {
    config: ReputeConfig,
    engine: ScoreEngine,
    cache: ScoreCache,
    source: Box<dyn IAttestationSource>,
    registry: OnceLock<Box<dyn ILinkRegistry>>,
    summary: SummaryService,
}

impl App {
    /// Wire the production components. The registry database is opened on
    /// first use so commands that never touch it do not create the file.
    pub fn from_config(config: ReputeConfig) -> ReputeResult<Self> {
        let source = GraphClient::new(&config.graph)?;
        Self::build(config, Box::new(source), OnceLock::new())
    }

    /// Wire explicit collaborators (tests, embedding).
    pub fn with_parts(
        config: ReputeConfig,
        source: Box<dyn IAttestationSource>,
        registry: Box<dyn ILinkRegistry>,
    ) -> ReputeResult<Self> {
        Self::build(config, source, OnceLock::from(registry))
    }

    fn build(
        config: ReputeConfig,
        source: Box<dyn IAttestationSource>,
        registry: OnceLock<Box<dyn ILinkRegistry>>,
    ) -> ReputeResult<Self> {
        let engine = ScoreEngine::with_config(config.scoring.clone())?;
        let cache = ScoreCache::from_config(&config.scoring);
        let summary = SummaryService::from_config(&config.summary);
        Ok(Self {
            config,
            engine,
            cache,
            source,
            registry,
            summary,
        })
    }

    pub fn config(&self) -> &ReputeConfig {
        &self.config
    }

    pub fn engine(&self) -> &ScoreEngine {
        &self.engine
    }

    pub fn summary(&self) -> &SummaryService {
        &self.summary
    }

    fn registry(&self) -> Result<&dyn ILinkRegistry, RegistryError> {
        if let Some(registry) = self.registry.get() {
            return Ok(registry.as_ref());
        }
        let opened = LinkRegistry::open(Path::new(&self.config.registry.db_path))?;
        let registry = self
            .registry
            .get_or_init(|| Box::new(opened) as Box<dyn ILinkRegistry>);
        Ok(registry.as_ref())
    }

    pub fn link(&self, nickname: &str, wallet: &str) -> ReputeResult<LinkRecord> {
        Ok(self.registry()?.link(nickname, wallet)?)
    }

    pub fn unlink(&self, nickname: &str) -> ReputeResult<bool> {
        Ok(self.registry()?.unlink(nickname)?)
    }

    pub fn links(&self) -> ReputeResult<Vec<LinkRecord>> {
        Ok(self.registry()?.list()?)
    }

    /// Score a wallet from the network, reusing a score cached in the same
    /// time bucket. A failed fetch yields the neutral score flagged as
    /// degraded, which is not cached.
    pub fn score_address(&self, wallet: &str, now: DateTime<Utc>) -> AddressScore {
        if let Some(score) = self.cache.get(wallet, now) {
            return AddressScore::fetched(score);
        }
        match self.source.fetch_attestations(wallet) {
            Ok(attestations) => {
                let _span = score_span!(wallet, attestations.len()).entered();
                let score = self.cache.get_or_compute(wallet, now, || {
                    self.engine.score(wallet, &attestations, now)
                });
                events::score_computed(&score.subject, score.total_score, score.attestation_count);
                AddressScore::fetched(score)
            }
            Err(e) => {
                events::fetch_degraded(wallet, &e);
                AddressScore::degraded(self.engine.score(wallet, &[], now), &e)
            }
        }
    }

    /// Score several wallets: fetch sequentially, score in parallel.
    /// Results keep the input order.
    pub fn score_addresses(&self, wallets: &[String], now: DateTime<Utc>) -> Vec<AddressScore> {
        let mut failures: Vec<Option<FetchError>> = Vec::with_capacity(wallets.len());
        let requests: Vec<ScoreRequest> = wallets
            .iter()
            .map(|w| {
                let attestations = match self.source.fetch_attestations(w) {
                    Ok(list) => {
                        failures.push(None);
                        list
                    }
                    Err(e) => {
                        events::fetch_degraded(w, &e);
                        failures.push(Some(e));
                        Vec::new()
                    }
                };
                ScoreRequest::new(w.clone(), attestations)
            })
            .collect();

        self.engine
            .score_batch(&requests, now)
            .into_iter()
            .zip(failures)
            .map(|(score, failure)| match failure {
                Some(e) => AddressScore::degraded(score, &e),
                None => AddressScore::fetched(score),
            })
            .collect()
    }

    /// Score attestations supplied as JSON instead of fetched.
    pub fn score_json(
        &self,
        subject: &str,
        value: &serde_json::Value,
        now: DateTime<Utc>,
    ) -> ReputeResult<ReputationScore> {
        Ok(self.engine.score_value(subject, value, now)?)
    }

    /// Profile lookup that never fails: errors are logged and dropped.
    pub fn profile(&self, wallet: &str) -> Option<IdentityProfile> {
        match self.source.fetch_profile(wallet) {
            Ok(profile) => Some(profile),
            Err(e) => {
                events::profile_unavailable(wallet, &e);
                None
            }
        }
    }

    /// Resolve a nickname and score its wallet.
    pub fn rep(&self, nickname: &str, now: DateTime<Utc>) -> ReputeResult<RepReport> {
        let record = self
            .registry()?
            .resolve(nickname)?
            .ok_or_else(|| ReputeError::NicknameNotFound {
                nickname: nickname.trim().to_lowercase(),
            })?;

        let profile = self.profile(&record.wallet);
        let scored = self.score_address(&record.wallet, now);
        Ok(RepReport {
            nickname: record.nickname,
            wallet: record.wallet,
            score: scored.score,
            profile,
            degraded: scored.degraded,
            fetch_error: scored.fetch_error,
        })
    }

    pub fn summarize(&self, input: &SummaryInput, prefer_llm: bool) -> RenderedSummary {
        self.summary.render(input, prefer_llm)
    }

    /// Summary input for a bare address, titled with its abbreviation.
    pub fn address_summary_input(
        &self,
        score: ReputationScore,
        profile: Option<IdentityProfile>,
    ) -> SummaryInput {
        SummaryInput {
            display_name: address::abbreviate(&score.subject),
            score,
            profile,
        }
    }
}

/// Reject anything that is not a wallet address before going to the network.
pub fn require_address(candidate: &str) -> ReputeResult<String> {
    let trimmed = candidate.trim();
    if address::is_address(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(RegistryError::InvalidAddress {
            address: trimmed.to_string(),
        }
        .into())
    }
}

/// Parse an `--at` timestamp.
pub fn parse_at(raw: &str) -> Result<DateTime<Utc>, ConfigError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ConfigError::ValidationFailed {
            field: "at".into(),
            message: format!("expected an RFC 3339 timestamp: {e}"),
        })
}
