use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::stats::{self, PartialStats, Stat, StatsTable};

/// Elemental types across all generations. `Unknown` covers the `???`
/// placeholder some historical data uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
    #[serde(rename = "???")]
    Unknown,
}

impl Type {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Fighting => "Fighting",
            Self::Flying => "Flying",
            Self::Poison => "Poison",
            Self::Ground => "Ground",
            Self::Rock => "Rock",
            Self::Bug => "Bug",
            Self::Ghost => "Ghost",
            Self::Steel => "Steel",
            Self::Fire => "Fire",
            Self::Water => "Water",
            Self::Grass => "Grass",
            Self::Electric => "Electric",
            Self::Psychic => "Psychic",
            Self::Ice => "Ice",
            Self::Dragon => "Dragon",
            Self::Dark => "Dark",
            Self::Fairy => "Fairy",
            Self::Unknown => "???",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown type name: {0}")]
pub struct TypeParseError(pub String);

impl FromStr for Type {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for typ in ALL_TYPES {
            if typ.as_str().eq_ignore_ascii_case(s) {
                return Ok(*typ);
            }
        }
        Err(TypeParseError(s.to_string()))
    }
}

const ALL_TYPES: &[Type] = &[
    Type::Normal,
    Type::Fighting,
    Type::Flying,
    Type::Poison,
    Type::Ground,
    Type::Rock,
    Type::Bug,
    Type::Ghost,
    Type::Steel,
    Type::Fire,
    Type::Water,
    Type::Grass,
    Type::Electric,
    Type::Psychic,
    Type::Ice,
    Type::Dragon,
    Type::Dark,
    Type::Fairy,
    Type::Unknown,
];

/// The sixteen types Hidden Power can take, in the order the type index
/// formula produces them.
const HIDDEN_POWER_TYPES: [Type; 16] = [
    Type::Fighting,
    Type::Flying,
    Type::Poison,
    Type::Ground,
    Type::Rock,
    Type::Bug,
    Type::Ghost,
    Type::Steel,
    Type::Fire,
    Type::Water,
    Type::Grass,
    Type::Electric,
    Type::Psychic,
    Type::Ice,
    Type::Dragon,
    Type::Dark,
];

/// The type/power pair a Hidden Power move takes for a given IV spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HiddenPower {
    pub typ: Type,
    pub power: u8,
}

/// Compute the Hidden Power a spread produces in the given generation.
/// Returns `None` for generation 1, which predates the move.
pub fn hidden_power(generation: u8, ivs: &StatsTable) -> Option<HiddenPower> {
    match generation {
        0 | 1 => None,
        2 => Some(hidden_power_gen2(ivs)),
        _ => Some(hidden_power_modern(generation, ivs)),
    }
}

// Generation 2 derives both type and power from DVs: the type from the low
// two bits of Attack and Defense, the power from the high bit of four DVs
// plus the low two bits of Special.
fn hidden_power_gen2(ivs: &StatsTable) -> HiddenPower {
    let atk = stats::to_dv(ivs.atk);
    let def = stats::to_dv(ivs.def);
    let spe = stats::to_dv(ivs.spe);
    let spc = stats::to_dv(ivs.spa);

    let typ = HIDDEN_POWER_TYPES[(4 * (atk & 3) + (def & 3)) as usize];

    let msb = |dv: u8| (dv >> 3) & 1;
    let x = (msb(atk) << 3) | (msb(def) << 2) | (msb(spe) << 1) | msb(spc);
    let power = (5 * u16::from(x) + u16::from(spc & 3)) / 2 + 31;

    HiddenPower { typ, power: power as u8 }
}

// Generations 3+ sum one bit per stat in the fixed hp/atk/def/spe/spa/spd
// order: the low IV bit selects the type, the second bit the power.
// From generation 6 on the power is a flat 60.
fn hidden_power_modern(generation: u8, ivs: &StatsTable) -> HiddenPower {
    let order = [ivs.hp, ivs.atk, ivs.def, ivs.spe, ivs.spa, ivs.spd];

    let mut type_sum: u16 = 0;
    let mut power_sum: u16 = 0;
    for (i, iv) in order.iter().enumerate() {
        type_sum += u16::from(iv & 1) << i;
        power_sum += u16::from((iv >> 1) & 1) << i;
    }

    let typ = HIDDEN_POWER_TYPES[(type_sum * 15 / 63) as usize];
    let power = if generation >= 6 { 60 } else { (power_sum * 40 / 63 + 30) as u8 };

    HiddenPower { typ, power }
}

/// The canonical maximal IV spread producing a Hidden Power of the given
/// type in generations 3+, as overrides over an otherwise-31 spread.
/// Returns `None` for types Hidden Power cannot take.
pub fn hidden_power_ivs(typ: Type) -> Option<PartialStats> {
    let mut ivs = PartialStats::default();
    let overrides: &[(Stat, u8)] = match typ {
        Type::Bug => &[(Stat::Atk, 30), (Stat::Def, 30), (Stat::Spd, 30)],
        Type::Dark => &[],
        Type::Dragon => &[(Stat::Atk, 30)],
        Type::Electric => &[(Stat::Spa, 30)],
        Type::Fighting => &[
            (Stat::Def, 30),
            (Stat::Spa, 30),
            (Stat::Spd, 30),
            (Stat::Spe, 30),
        ],
        Type::Fire => &[(Stat::Atk, 30), (Stat::Spa, 30), (Stat::Spe, 30)],
        Type::Flying => &[
            (Stat::Hp, 30),
            (Stat::Atk, 30),
            (Stat::Def, 30),
            (Stat::Spa, 30),
            (Stat::Spd, 30),
        ],
        Type::Ghost => &[(Stat::Def, 30), (Stat::Spd, 30)],
        Type::Grass => &[(Stat::Atk, 30), (Stat::Spa, 30)],
        Type::Ground => &[(Stat::Spa, 30), (Stat::Spd, 30)],
        Type::Ice => &[(Stat::Atk, 30), (Stat::Def, 30)],
        Type::Poison => &[(Stat::Def, 30), (Stat::Spa, 30), (Stat::Spd, 30)],
        Type::Psychic => &[(Stat::Atk, 30), (Stat::Spe, 30)],
        Type::Rock => &[(Stat::Def, 30), (Stat::Spd, 30), (Stat::Spe, 30)],
        Type::Steel => &[(Stat::Spd, 30)],
        Type::Water => &[(Stat::Atk, 30), (Stat::Def, 30), (Stat::Spa, 30)],
        _ => return None,
    };
    for &(stat, value) in overrides {
        ivs.set(stat, value);
    }
    Some(ivs)
}

/// The minimal DV overrides producing a Hidden Power of the given type in
/// generation 2, expressed in DV units over an otherwise-15 spread.
/// Returns `None` for types Hidden Power cannot take.
pub fn hidden_power_dvs(typ: Type) -> Option<PartialStats> {
    let mut dvs = PartialStats::default();
    let overrides: &[(Stat, u8)] = match typ {
        Type::Bug => &[(Stat::Atk, 13), (Stat::Def, 13)],
        Type::Dark => &[],
        Type::Dragon => &[(Stat::Def, 14)],
        Type::Electric => &[(Stat::Atk, 14)],
        Type::Fighting => &[(Stat::Atk, 12), (Stat::Def, 12)],
        Type::Fire => &[(Stat::Atk, 14), (Stat::Def, 12)],
        Type::Flying => &[(Stat::Atk, 12), (Stat::Def, 13)],
        Type::Ghost => &[(Stat::Atk, 13), (Stat::Def, 14)],
        Type::Grass => &[(Stat::Atk, 14), (Stat::Def, 14)],
        Type::Ground => &[(Stat::Atk, 12)],
        Type::Ice => &[(Stat::Def, 13)],
        Type::Poison => &[(Stat::Atk, 12), (Stat::Def, 14)],
        Type::Psychic => &[(Stat::Def, 12)],
        Type::Rock => &[(Stat::Atk, 13), (Stat::Def, 12)],
        Type::Steel => &[(Stat::Atk, 13)],
        Type::Water => &[(Stat::Atk, 14), (Stat::Def, 13)],
        _ => return None,
    };
    for &(stat, value) in overrides {
        dvs.set(stat, value);
    }
    Some(dvs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_ivs_give_dark() {
        let hp = hidden_power(4, &StatsTable::uniform(31)).unwrap();
        assert_eq!(hp, HiddenPower { typ: Type::Dark, power: 70 });
    }

    #[test]
    fn no_hidden_power_in_gen1() {
        assert!(hidden_power(1, &StatsTable::uniform(31)).is_none());
    }

    #[test]
    fn canonical_spreads_produce_their_type() {
        for &typ in &HIDDEN_POWER_TYPES {
            let ivs = hidden_power_ivs(typ).unwrap().fill(31);
            for generation in 3..=9 {
                let hp = hidden_power(generation, &ivs).unwrap();
                assert_eq!(hp.typ, typ, "gen {generation} spread for {typ}");
                assert_eq!(hp.power, if generation < 6 { 70 } else { 60 });
            }
        }
    }

    #[test]
    fn canonical_dv_spreads_produce_their_type() {
        for &typ in &HIDDEN_POWER_TYPES {
            let dvs = hidden_power_dvs(typ).unwrap();
            let mut ivs = PartialStats::default();
            for stat in Stat::ALL {
                if let Some(dv) = dvs.get(stat) {
                    ivs.set(stat, crate::stats::to_iv(dv));
                }
            }
            let hp = hidden_power(2, &ivs.fill(31)).unwrap();
            assert_eq!(hp.typ, typ, "gen 2 spread for {typ}");
            assert_eq!(hp.power, 70, "gen 2 power for {typ}");
        }
    }

    #[test]
    fn gen6_power_is_flat_60() {
        let ivs = hidden_power_ivs(Type::Ice).unwrap().fill(31);
        assert_eq!(hidden_power(7, &ivs).unwrap().power, 60);
        assert_eq!(hidden_power(5, &ivs).unwrap().power, 70);
    }

    #[test]
    fn normal_and_fairy_have_no_spread() {
        assert!(hidden_power_ivs(Type::Normal).is_none());
        assert!(hidden_power_ivs(Type::Fairy).is_none());
        assert!(hidden_power_dvs(Type::Normal).is_none());
    }

    #[test]
    fn parses_type_names() {
        assert_eq!("Fire".parse::<Type>().unwrap(), Type::Fire);
        assert_eq!("rock".parse::<Type>().unwrap(), Type::Rock);
        assert!("Sound".parse::<Type>().is_err());
    }
}
