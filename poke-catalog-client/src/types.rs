use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use poke_catalog_core::{PartialStats, Type};

/// A compressed field holding either a single value or a list of
/// interchangeable alternatives. The first alternative is the canonical
/// choice; published documents never contain an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Alt<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Alt<T> {
    /// The canonical (first) alternative, if any.
    pub fn first(&self) -> Option<&T> {
        match self {
            Self::One(value) => Some(value),
            Self::Many(values) => values.first(),
        }
    }
}

/// A compressed moveset template as published in the set documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Moveset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Alt<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ability: Option<Alt<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Alt<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nature: Option<Alt<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ivs: Option<Alt<PartialStats>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evs: Option<Alt<PartialStats>>,
    pub moves: Vec<Alt<String>>,
}

/// A fully expanded, single-valued build bound to a display species name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokemonSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub species: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ability: Option<String>,
    pub moves: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ivs: Option<PartialStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evs: Option<PartialStats>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub gigantamax: bool,
    /// Hidden Power type recorded instead of an explicit IV spread where
    /// the game awards maximal IVs anyway.
    #[serde(rename = "hpType", skip_serializing_if = "Option::is_none")]
    pub hidden_power_type: Option<Type>,
}

/// The analysis stub as published: prose plus named references into the
/// set document, which the client joins back together.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawAnalysis {
    pub overview: Option<String>,
    pub comments: Option<String>,
    pub sets: Vec<SetStub>,
    pub credits: Option<Credits>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetStub {
    pub name: String,
    #[serde(default)]
    pub desc: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credits {
    pub teams: Vec<CreditedTeam>,
    #[serde(rename = "writtenBy")]
    pub written_by: Vec<Member>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditedTeam {
    pub name: String,
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub user_id: u64,
    pub username: String,
}

/// A reconstituted analysis: the stub's prose merged with the movesets it
/// references, keyed by the format it was written for.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub format: String,
    pub overview: Option<String>,
    pub comments: Option<String>,
    pub credits: Option<Credits>,
    pub sets: Vec<AnalysisSet>,
}

/// One named set within an analysis, still in compressed form.
#[derive(Debug, Clone)]
pub struct AnalysisSet {
    pub name: String,
    pub description: Option<String>,
    pub moveset: Moveset,
}

/// Named movesets for one species within one tier, keyed by set name.
/// Ordered so results are deterministic.
pub type SetsByName = BTreeMap<String, Moveset>;

/// Tier-keyed data for a single species out of a generation document.
pub type TierMap<T> = BTreeMap<String, T>;

/// The shape of `{kind}/gen{N}.json`: species -> tier id -> payload.
pub type GenDoc<T> = HashMap<String, TierMap<T>>;

/// The shape of `{kind}/{format}.json`: species -> payload.
pub type FormatDoc<T> = HashMap<String, T>;
