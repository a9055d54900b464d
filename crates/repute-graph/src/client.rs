use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use repute_core::address;
use repute_core::config::GraphConfig;
use repute_core::constants::DEFAULT_IDENTITY_LABEL;
use repute_core::errors::FetchError;
use repute_core::models::{Attestation, IdentityProfile};
use repute_core::traits::IAttestationSource;
use repute_observability::fetch_span;

use crate::mapping;
use crate::queries;
use crate::response::{AccountsData, AtomsData, PositionsData, TriplesData};
use crate::transport::{GraphTransport, HttpTransport};

/// Knowledge-graph attestation source.
///
/// Paged queries stop at the first short page or once the offset passes
/// `max_offset`, whichever comes first.
pub struct GraphClient<T: GraphTransport = HttpTransport> {
    transport: T,
    page_size: u32,
    max_offset: u32,
}

impl GraphClient<HttpTransport> {
    /// Client over HTTP using the graph config.
    pub fn new(config: &GraphConfig) -> Result<Self, FetchError> {
        Ok(Self::with_transport(HttpTransport::new(config)?, config))
    }
}

impl<T: GraphTransport> GraphClient<T> {
    pub fn with_transport(transport: T, config: &GraphConfig) -> Self {
        Self {
            transport,
            page_size: config.page_size.max(1),
            max_offset: config.max_offset,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn query<D: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<D, FetchError> {
        let data = self.transport.execute(query, variables)?;
        serde_json::from_value(data).map_err(|e| FetchError::MalformedResponse {
            reason: e.to_string(),
        })
    }

    /// Run a paged query, collecting rows until a short page or `max_offset`.
    fn paged<D, R, F>(&self, query: &str, address: &str, rows: F) -> Result<Vec<R>, FetchError>
    where
        D: DeserializeOwned,
        F: Fn(D) -> Vec<R>,
    {
        let mut out = Vec::new();
        let mut offset = 0u32;
        loop {
            let page: D = self.query(
                query,
                json!({ "address": address, "limit": self.page_size, "offset": offset }),
            )?;
            let page = rows(page);
            let len = page.len();
            out.extend(page);

            if len < self.page_size as usize {
                break;
            }
            match next_offset(offset, self.page_size, self.max_offset) {
                Some(next) => offset = next,
                None => {
                    tracing::debug!(address, offset, "graph: paging stopped at max offset");
                    break;
                }
            }
        }
        Ok(out)
    }

    /// Label of the address's atom, or the default label when there is none.
    pub fn fetch_label(&self, address: &str) -> Result<String, FetchError> {
        let data: AtomsData = self.query(queries::ATOM_LABEL, json!({ "address": address }))?;
        Ok(data
            .atoms
            .into_iter()
            .find_map(|atom| atom.label.filter(|l| !l.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_IDENTITY_LABEL.to_string()))
    }

    /// Triples created plus deposits sent. Unknown accounts have 0.
    pub fn fetch_activity(&self, address: &str) -> Result<u64, FetchError> {
        let data: AccountsData =
            self.query(queries::ACCOUNT_ACTIVITY, json!({ "address": address }))?;
        Ok(data
            .accounts
            .first()
            .map(|acc| {
                let triples = acc.triples_aggregate.as_ref().map_or(0, |a| a.count());
                let deposits = acc.deposits_sent_aggregate.as_ref().map_or(0, |a| a.count());
                triples.saturating_add(deposits)
            })
            .unwrap_or(0))
    }

    /// Total redeemable assets over every position page, in tokens.
    pub fn fetch_staked(&self, address: &str) -> Result<f64, FetchError> {
        let amounts = self.paged(queries::POSITIONS_FOR_ACCOUNT, address, |d: PositionsData| {
            d.positions
                .into_iter()
                .map(|p| {
                    p.total_redeem_assets_for_receiver
                        .as_ref()
                        .and_then(mapping::wei_to_tokens)
                        .unwrap_or(0.0)
                })
                .collect()
        })?;
        Ok(amounts.iter().sum())
    }
}

/// Offset of the page after `offset`, or `None` once it would pass
/// `max_offset` or overflow.
fn next_offset(offset: u32, page_size: u32, max_offset: u32) -> Option<u32> {
    offset
        .checked_add(page_size)
        .filter(|next| *next <= max_offset)
}

impl<T: GraphTransport> IAttestationSource for GraphClient<T> {
    fn fetch_attestations(&self, address: &str) -> Result<Vec<Attestation>, FetchError> {
        let address = address::normalize(address);
        let _span = fetch_span!(address).entered();

        let rows = self.paged(queries::TRIPLES_FOR_ADDRESS, &address, |d: TriplesData| {
            d.triples
        })?;
        let attestations: Vec<Attestation> = rows
            .iter()
            .map(|row| mapping::triple_to_attestation(row, &address))
            .collect();

        tracing::debug!(count = attestations.len(), "graph: fetched attestations");
        Ok(attestations)
    }

    fn fetch_profile(&self, address: &str) -> Result<IdentityProfile, FetchError> {
        let address = address::normalize(address);
        let _span = fetch_span!(address).entered();

        Ok(IdentityProfile {
            label: self.fetch_label(&address)?,
            activity: self.fetch_activity(&address)?,
            staked: self.fetch_staked(&address)?,
            address,
        })
    }
}
