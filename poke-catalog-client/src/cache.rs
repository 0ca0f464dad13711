use std::collections::HashMap;

use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::error::CatalogError;
use crate::fetch::Fetcher;
use crate::formats;
use crate::stats::UsageStatistics;
use crate::teams::Team;
use crate::types::{FormatDoc, GenDoc, RawAnalysis, SetsByName, TierMap};

/// Lazily populated store for one kind of tiered document ("analyses" or
/// "sets"), holding generation-scoped and format-scoped fetches under
/// separate keys.
///
/// Locks are only held around map access, never across a fetch, so two
/// concurrent misses for the same key will both fetch and the second
/// insert wins. Fetches are idempotent, which makes that benign.
pub(crate) struct Store<T> {
    kind: &'static str,
    r#gen: Mutex<HashMap<u8, GenDoc<T>>>,
    format: Mutex<HashMap<String, FormatDoc<T>>>,
}

impl<T: DeserializeOwned + Clone> Store<T> {
    pub fn new(kind: &'static str) -> Self {
        Self { kind, r#gen: Mutex::new(HashMap::new()), format: Mutex::new(HashMap::new()) }
    }

    /// Tier-keyed data for one species, fetching whichever document the
    /// request calls for on a miss.
    ///
    /// Without a format, or outside minimal mode, the whole generation
    /// document is fetched and cached per generation. With a format in
    /// minimal mode only that format's document is fetched, and the
    /// result is presented in generation shape under its tier id. A
    /// failed generation fetch in minimal mode degrades to whatever
    /// format documents are already cached instead of failing the call.
    pub async fn species_data<F: Fetcher>(
        &self,
        fetcher: &F,
        base_url: &str,
        r#gen: u8,
        format: Option<&str>,
        minimal: bool,
        species: &str,
    ) -> Result<TierMap<T>, CatalogError> {
        if let Some(doc) = self.r#gen.lock().await.get(&r#gen) {
            return Ok(doc.get(species).cloned().unwrap_or_default());
        }

        if minimal {
            if let Some(format) = format {
                return self.format_scoped(fetcher, base_url, format, species).await;
            }
        }

        let url = format!("{base_url}/{}/gen{gen}.json", self.kind);
        let fetched: Result<GenDoc<T>, CatalogError> = match fetcher.fetch(&url).await {
            Ok(value) => serde_json::from_value(value).map_err(Into::into),
            Err(err) => Err(err),
        };
        match fetched {
            Ok(doc) => {
                let data = doc.get(species).cloned().unwrap_or_default();
                self.r#gen.lock().await.insert(r#gen, doc);
                Ok(data)
            }
            Err(err) if minimal => {
                // Degraded view: only formats that were fetched earlier;
                // never trigger new fetches from here.
                log::warn!("{} fetch for gen{gen} failed, serving cached formats: {err}", self.kind);
                let mut data = TierMap::new();
                for (format, doc) in self.format.lock().await.iter() {
                    if let Some(entry) = doc.get(species) {
                        data.insert(formats::tier_id(format).to_string(), entry.clone());
                    }
                }
                Ok(data)
            }
            Err(err) => Err(err),
        }
    }

    async fn format_scoped<F: Fetcher>(
        &self,
        fetcher: &F,
        base_url: &str,
        format: &str,
        species: &str,
    ) -> Result<TierMap<T>, CatalogError> {
        let tier = formats::tier_id(format);

        if let Some(doc) = self.format.lock().await.get(format) {
            let mut data = TierMap::new();
            if let Some(entry) = doc.get(species) {
                data.insert(tier.to_string(), entry.clone());
            }
            return Ok(data);
        }

        let url = format!("{base_url}/{}/{format}.json", self.kind);
        let value = fetcher.fetch(&url).await?;
        let doc: FormatDoc<T> = serde_json::from_value(value)?;
        log::debug!("cached {} document for {format}", self.kind);

        let mut data = TierMap::new();
        if let Some(entry) = doc.get(species) {
            data.insert(tier.to_string(), entry.clone());
        }
        self.format.lock().await.insert(format.to_string(), doc);
        Ok(data)
    }
}

/// All per-client cached state. Populated lazily, never invalidated; a
/// fresh client is a fresh cache.
pub(crate) struct Cache {
    pub analyses: Store<RawAnalysis>,
    pub sets: Store<SetsByName>,
    pub stats: Mutex<HashMap<String, UsageStatistics>>,
    pub teams: Mutex<HashMap<String, Vec<Team>>>,
}

impl Cache {
    pub fn new() -> Self {
        Self {
            analyses: Store::new("analyses"),
            sets: Store::new("sets"),
            stats: Mutex::new(HashMap::new()),
            teams: Mutex::new(HashMap::new()),
        }
    }
}
