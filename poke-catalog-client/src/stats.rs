use std::collections::HashMap;

use serde::Deserialize;

/// The shape of `stats/{format}.json`: a battle count plus one usage
/// record per species, produced by the separate aggregation pipeline.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UsageStatistics {
    pub battles: u64,
    pub pokemon: HashMap<String, MovesetStatistics>,
}

/// Weighted usage frequencies for one species in one format.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MovesetStatistics {
    pub usage: UsageFractions,
    pub count: u64,
    pub weight: Option<f64>,
    pub lead: Option<UsageFractions>,
    /// num GXE, max GXE, 1% GXE, 20% GXE.
    pub viability: Vec<u32>,
    pub abilities: HashMap<String, f64>,
    pub items: HashMap<String, f64>,
    pub spreads: HashMap<String, f64>,
    pub moves: HashMap<String, f64>,
    pub teammates: HashMap<String, f64>,
    /// Encounters (n), KO/switch probability (p), and its deviation (d).
    pub counters: HashMap<String, (f64, f64, f64)>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct UsageFractions {
    pub raw: f64,
    pub real: f64,
    pub weighted: f64,
}
