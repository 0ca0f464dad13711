use serde::{Deserialize, Serialize};

/// The six permanent stats. Generations 1-2 have a single Special stat;
/// those generations read and write it through the `Spa` slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    #[serde(rename = "hp")]
    Hp,
    #[serde(rename = "atk")]
    Atk,
    #[serde(rename = "def")]
    Def,
    #[serde(rename = "spa")]
    Spa,
    #[serde(rename = "spd")]
    Spd,
    #[serde(rename = "spe")]
    Spe,
}

impl Stat {
    /// All stats in canonical serialization order.
    pub const ALL: [Stat; 6] = [Stat::Hp, Stat::Atk, Stat::Def, Stat::Spa, Stat::Spd, Stat::Spe];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hp => "hp",
            Self::Atk => "atk",
            Self::Def => "def",
            Self::Spa => "spa",
            Self::Spd => "spd",
            Self::Spe => "spe",
        }
    }
}

/// A fully populated stat spread (IVs, EVs, base stats).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsTable {
    pub hp: u8,
    pub atk: u8,
    pub def: u8,
    pub spa: u8,
    pub spd: u8,
    pub spe: u8,
}

impl StatsTable {
    /// A spread with every stat set to the same value.
    pub fn uniform(value: u8) -> Self {
        Self { hp: value, atk: value, def: value, spa: value, spd: value, spe: value }
    }

    pub fn get(&self, stat: Stat) -> u8 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }

    pub fn set(&mut self, stat: Stat, value: u8) {
        match stat {
            Stat::Hp => self.hp = value,
            Stat::Atk => self.atk = value,
            Stat::Def => self.def = value,
            Stat::Spa => self.spa = value,
            Stat::Spd => self.spd = value,
            Stat::Spe => self.spe = value,
        }
    }
}

/// A stat spread where unset entries fall back to a context-dependent
/// default (31 for IVs, 0 for EVs). This is the shape the published data
/// files use, which only record the stats that deviate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hp: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atk: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub def: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spa: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spd: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spe: Option<u8>,
}

impl PartialStats {
    pub fn get(&self, stat: Stat) -> Option<u8> {
        match stat {
            Stat::Hp => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }

    pub fn set(&mut self, stat: Stat, value: u8) {
        match stat {
            Stat::Hp => self.hp = Some(value),
            Stat::Atk => self.atk = Some(value),
            Stat::Def => self.def = Some(value),
            Stat::Spa => self.spa = Some(value),
            Stat::Spd => self.spd = Some(value),
            Stat::Spe => self.spe = Some(value),
        }
    }

    pub fn is_empty(&self) -> bool {
        Stat::ALL.iter().all(|&s| self.get(s).is_none())
    }

    /// Materialize the spread, substituting `default` for unset stats.
    pub fn fill(&self, default: u8) -> StatsTable {
        StatsTable {
            hp: self.hp.unwrap_or(default),
            atk: self.atk.unwrap_or(default),
            def: self.def.unwrap_or(default),
            spa: self.spa.unwrap_or(default),
            spd: self.spd.unwrap_or(default),
            spe: self.spe.unwrap_or(default),
        }
    }
}

impl From<StatsTable> for PartialStats {
    fn from(full: StatsTable) -> Self {
        Self {
            hp: Some(full.hp),
            atk: Some(full.atk),
            def: Some(full.def),
            spa: Some(full.spa),
            spd: Some(full.spd),
            spe: Some(full.spe),
        }
    }
}

/// Convert a modern 0-31 IV to the 0-15 DV it truncates to in the
/// generation 1-2 encoding.
pub fn to_dv(iv: u8) -> u8 {
    iv / 2
}

/// Convert a 0-15 DV to the canonical 0-31 IV representation (the odd
/// value, so the round trip through `to_dv` is lossless).
pub fn to_iv(dv: u8) -> u8 {
    dv * 2 + 1
}

/// The HP DV implied by the rest of an IV spread under the generation 1-2
/// encoding: one parity bit from each of Attack, Defense, Speed, and
/// Special.
pub fn hp_dv(ivs: &StatsTable) -> u8 {
    ((to_dv(ivs.atk) & 1) << 3)
        | ((to_dv(ivs.def) & 1) << 2)
        | ((to_dv(ivs.spe) & 1) << 1)
        | (to_dv(ivs.spa) & 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dv_iv_round_trip() {
        for dv in 0..16 {
            assert_eq!(to_dv(to_iv(dv)), dv);
        }
        assert_eq!(to_dv(31), 15);
        assert_eq!(to_dv(30), 15);
        assert_eq!(to_iv(15), 31);
    }

    #[test]
    fn fill_defaults_unset_stats() {
        let partial = PartialStats { atk: Some(4), def: Some(3), ..Default::default() };
        let full = partial.fill(31);
        assert_eq!(full, StatsTable { hp: 31, atk: 4, def: 3, spa: 31, spd: 31, spe: 31 });
    }

    #[test]
    fn hp_dv_from_parity_bits() {
        // All DVs 15 (odd parity everywhere) implies HP DV 15.
        assert_eq!(hp_dv(&StatsTable::uniform(31)), 15);
        // Attack DV 13 (odd), Defense DV 12 (even), Speed/Special DV 15.
        let ivs = StatsTable { hp: 31, atk: 27, def: 25, spa: 31, spd: 31, spe: 31 };
        assert_eq!(hp_dv(&ivs), 0b1011);
        assert_eq!(to_iv(hp_dv(&ivs)), 23);
    }

    #[test]
    fn partial_stats_serde_elides_unset() {
        let partial = PartialStats { atk: Some(4), ..Default::default() };
        let json = serde_json::to_string(&partial).unwrap();
        assert_eq!(json, r#"{"atk":4}"#);
        let back: PartialStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, partial);
    }
}
