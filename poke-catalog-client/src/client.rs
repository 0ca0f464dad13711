use futures::try_join;

use poke_catalog_core::{Generation, Species};

use crate::cache::Cache;
use crate::error::CatalogError;
use crate::fetch::Fetcher;
use crate::formats::{self, FormatFamilies};
use crate::names::{self, NameQuery};
use crate::reconcile;
use crate::stats::MovesetStatistics;
use crate::teams::Team;
use crate::types::{Analysis, AnalysisSet, PokemonSet};

const BASE_URL: &str = "https://data.pkmn.cc";

/// Battle-only formes banned from Balanced Hackmons, per generation.
fn hackmons_bans(r#gen: u8) -> &'static [&'static str] {
    match r#gen {
        6 => &["Groudon-Primal", "Kyogre-Primal"],
        7 => &["Groudon-Primal"],
        8 => &["Cramorant-Gorging", "Darmanitan-Galar-Zen"],
        _ => &[],
    }
}

/// Client for the published analysis/set/stats/teams catalog.
///
/// All retrieval goes through the injected [`Fetcher`]; results are cached
/// in memory for the lifetime of the client. By default a request scoped
/// to a format still fetches the whole generation's document, since one
/// fetch usually beats several targeted round trips. A client built with
/// `minimal` set prefers the format-scoped documents when a format is
/// given, and degrades to whatever it has cached if the generation-wide
/// fetch fails.
pub struct CatalogClient<F> {
    fetcher: F,
    minimal: bool,
    families: FormatFamilies,
    cache: Cache,
}

impl<F: Fetcher> CatalogClient<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher, minimal: false, families: FormatFamilies::default(), cache: Cache::new() }
    }

    /// Prefer format-scoped fetches whenever a format parameter is given.
    pub fn minimal(mut self, minimal: bool) -> Self {
        self.minimal = minimal;
        self
    }

    /// Replace the seasonal-family table used to canonicalize formats.
    pub fn format_families(mut self, families: FormatFamilies) -> Self {
        self.families = families;
        self
    }

    /// The format a species natively plays in for its generation.
    pub fn native_format(r#gen: &Generation, species: &Species) -> String {
        formats::native_format(r#gen, species)
    }

    /// Written analyses for a species, optionally scoped to one format.
    /// Unknown species and formats without data yield an empty list.
    pub async fn analyses(
        &self,
        r#gen: &Generation,
        species: &str,
        format: Option<&str>,
    ) -> Result<Vec<Analysis>, CatalogError> {
        let Some(species) = r#gen.species(species) else {
            return Ok(Vec::new());
        };
        let key = names::resolve(&NameQuery { r#gen, species, specific: false, stats: false });

        let num = r#gen.num();
        let (analyses, sets) = try_join!(
            self.cache.analyses.species_data(&self.fetcher, BASE_URL, num, format, self.minimal, &key),
            self.cache.sets.species_data(&self.fetcher, BASE_URL, num, format, self.minimal, &key),
        )?;
        if analyses.is_empty() || sets.is_empty() {
            return Ok(Vec::new());
        }

        let mut result = Vec::new();
        for (tier_id, raw) in &analyses {
            let tier_format = format!("gen{num}{tier_id}");
            if format.is_some_and(|want| want != tier_format) {
                continue;
            }
            let Some(tier_sets) = sets.get(tier_id) else {
                continue;
            };

            let mut analysis = Analysis {
                format: tier_format,
                overview: raw.overview.clone(),
                comments: raw.comments.clone(),
                credits: raw.credits.clone(),
                sets: Vec::new(),
            };

            for stub in &raw.sets {
                let Some(moveset) = tier_sets.get(&stub.name) else {
                    continue;
                };
                let expanded = reconcile::to_set(species, moveset, None, None);
                if reconcile::matches(species, &expanded) {
                    analysis.sets.push(AnalysisSet {
                        name: stub.name.clone(),
                        description: stub.desc.clone(),
                        moveset: moveset.clone(),
                    });
                }
            }

            if !analysis.sets.is_empty() {
                result.push(analysis);
            }
        }

        Ok(result)
    }

    /// Expanded sets for a species, optionally scoped to one format.
    /// Unknown species and formats without data yield an empty list.
    pub async fn sets(
        &self,
        r#gen: &Generation,
        species: &str,
        format: Option<&str>,
    ) -> Result<Vec<PokemonSet>, CatalogError> {
        let Some(species) = r#gen.species(species) else {
            return Ok(Vec::new());
        };
        let key = names::resolve(&NameQuery { r#gen, species, specific: false, stats: false });

        let num = r#gen.num();
        let data = self
            .cache
            .sets
            .species_data(&self.fetcher, BASE_URL, num, format, self.minimal, &key)
            .await?;
        if data.is_empty() {
            return Ok(Vec::new());
        }

        // Balanced Hackmons allows battle-only states directly, short of
        // its ban list, so the usual legitimacy filter is skipped and the
        // set keeps the specific variant name.
        let hackmons = format.is_some_and(|f| f.ends_with("balancedhackmons"))
            && !hackmons_bans(num).contains(&species.name.as_str());
        let display = if hackmons {
            species.name.clone()
        } else {
            names::resolve(&NameQuery { r#gen, species, specific: true, stats: false })
        };

        let mut result = Vec::new();
        for (tier_id, by_name) in &data {
            if format.is_some_and(|want| want != format!("gen{num}{tier_id}")) {
                continue;
            }
            for (set_name, moveset) in by_name {
                let set = reconcile::to_set(species, moveset, Some(set_name), Some(&display));
                if hackmons || reconcile::matches(species, &set) {
                    result.push(reconcile::fix_ivs(r#gen, &set));
                }
            }
        }

        Ok(result)
    }

    /// Usage statistics for a species in the given format, defaulting to
    /// the species' native format. `None` when the species does not
    /// appear in the format's data.
    pub async fn stats(
        &self,
        r#gen: &Generation,
        species: &str,
        format: Option<&str>,
    ) -> Result<Option<MovesetStatistics>, CatalogError> {
        let Some(species) = r#gen.species(species) else {
            return Ok(None);
        };
        let format = match format {
            Some(format) => self.families.base_format(format),
            None => formats::native_format(r#gen, species),
        };

        if let Some(stats) = self.cache.stats.lock().await.get(&format) {
            let key = names::resolve(&NameQuery { r#gen, species, specific: false, stats: true });
            return Ok(stats.pokemon.get(&key).cloned());
        }

        let value = self.fetcher.fetch(&format!("{BASE_URL}/stats/{format}.json")).await?;
        let stats: crate::stats::UsageStatistics = serde_json::from_value(value)?;
        log::debug!("cached stats document for {format}");

        let key = names::resolve(&NameQuery { r#gen, species, specific: false, stats: true });
        let entry = stats.pokemon.get(&key).cloned();
        self.cache.stats.lock().await.insert(format, stats);
        Ok(entry)
    }

    /// Curated sample teams for a format.
    pub async fn teams(&self, format: &str) -> Result<Vec<Team>, CatalogError> {
        let format = self.families.base_format(format);

        if let Some(teams) = self.cache.teams.lock().await.get(&format) {
            return Ok(teams.clone());
        }

        let value = self.fetcher.fetch(&format!("{BASE_URL}/teams/{format}.json")).await?;
        let teams: Vec<Team> = serde_json::from_value(value)?;
        log::debug!("cached {} sample teams for {format}", teams.len());

        self.cache.teams.lock().await.insert(format, teams.clone());
        Ok(teams)
    }
}
