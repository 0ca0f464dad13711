use poke_catalog_core::stats::{hp_dv, to_dv, to_iv};
use poke_catalog_core::types::{hidden_power, hidden_power_dvs, hidden_power_ivs};
use poke_catalog_core::{Generation, Nonstandard, PartialStats, Species, Stat, Type};

use crate::types::{Alt, Moveset, PokemonSet};

/// Expand a compressed moveset into a single-valued set, taking the first
/// alternative wherever several are listed. `species_name` overrides the
/// display species (used to restore a specific cosmetic forme).
pub fn to_set(
    species: &Species,
    moveset: &Moveset,
    name: Option<&str>,
    species_name: Option<&str>,
) -> PokemonSet {
    PokemonSet {
        name: name.map(str::to_string),
        species: species_name.unwrap_or(&species.name).to_string(),
        item: moveset.item.as_ref().and_then(Alt::first).cloned(),
        ability: moveset.ability.as_ref().and_then(Alt::first).cloned(),
        moves: moveset.moves.iter().filter_map(Alt::first).cloned().collect(),
        level: moveset.level.as_ref().and_then(Alt::first).copied(),
        nature: moveset.nature.as_ref().and_then(Alt::first).cloned(),
        ivs: moveset.ivs.as_ref().and_then(Alt::first).copied(),
        evs: moveset.evs.as_ref().and_then(Alt::first).copied(),
        gigantamax: species.nonstandard == Some(Nonstandard::Gigantamax),
        hidden_power_type: None,
    }
}

/// Whether a candidate set satisfies every legitimacy constraint the
/// variant carries. A variant with no constraints matches anything.
pub fn matches(species: &Species, set: &PokemonSet) -> bool {
    if let Some(ability) = &species.required_ability {
        if set.ability.as_deref() != Some(ability.as_str()) {
            return false;
        }
    }
    if let Some(item) = &species.required_item {
        if set.item.as_deref() != Some(item.as_str()) {
            return false;
        }
    }
    if !species.required_items.is_empty() {
        let held = set.item.as_ref();
        if !held.is_some_and(|item| species.required_items.contains(item)) {
            return false;
        }
    }
    if let Some(mv) = &species.required_move {
        if !set.moves.iter().any(|m| m == mv) {
            return false;
        }
    }
    true
}

/// Repair a set whose Hidden Power move disagrees with its IV spread,
/// following the conventions of the set's generation. Returns a new set;
/// the input is never modified.
///
/// Generations 7+ record the desired type instead of an explicit spread
/// when IVs are otherwise maximal. Generation 2 derives a DV spread from
/// the per-type table, preferring any stats the set already pins down;
/// later generations do the same against the IV table. In both table
/// cases the blend is kept only if it actually reproduces the move's type
/// at full power. Generations 1-2 additionally re-derive the HP stat from
/// the spread's parity bits whenever the two disagree, Hidden Power or
/// not.
pub fn fix_ivs(r#gen: &Generation, set: &PokemonSet) -> PokemonSet {
    let mut fixed = set.clone();
    let num = r#gen.num();

    if let Some(typ) = declared_hidden_power(set) {
        let current = hidden_power(num, &fixed.ivs.unwrap_or_default().fill(31));
        if current.is_some_and(|hp| hp.typ != typ) {
            if fixed.ivs.is_none() || (num >= 7 && fixed.level.unwrap_or(100) == 100) {
                fixed.hidden_power_type = Some(typ);
            } else if num == 2 {
                if let Some(repaired) = repair_gen2(typ, &fixed.ivs.unwrap_or_default()) {
                    fixed.ivs = Some(repaired);
                }
            } else if let Some(repaired) = repair_modern(num, typ, &fixed.ivs.unwrap_or_default()) {
                fixed.ivs = Some(repaired);
            }
        }
    }

    if num <= 2 {
        if let Some(ivs) = fixed.ivs {
            let expected = hp_dv(&ivs.fill(31));
            if expected != to_dv(ivs.hp.unwrap_or(31)) {
                let mut repaired = ivs;
                repaired.hp = Some(to_iv(expected));
                fixed.ivs = Some(repaired);
            }
        }
    }

    fixed
}

fn declared_hidden_power(set: &PokemonSet) -> Option<Type> {
    let name = set.moves.iter().find_map(|m| m.strip_prefix("Hidden Power"))?;
    name.trim().parse().ok()
}

fn repair_gen2(typ: Type, explicit: &PartialStats) -> Option<PartialStats> {
    let dvs = hidden_power_dvs(typ)?;

    let mut derived = PartialStats::default();
    for stat in Stat::ALL {
        if let Some(dv) = dvs.get(stat) {
            derived.set(stat, to_iv(dv));
        }
    }

    let blended = blend(explicit, &derived);
    let actual = hidden_power(2, &blended.fill(31))?;
    if actual.typ == typ && actual.power == 70 {
        Some(blended)
    } else {
        Some(derived)
    }
}

fn repair_modern(num: u8, typ: Type, explicit: &PartialStats) -> Option<PartialStats> {
    let table = hidden_power_ivs(typ)?;

    let blended = blend(explicit, &table);
    let expected_power = if num < 6 { 70 } else { 60 };
    let actual = hidden_power(num, &blended.fill(31))?;
    if actual.typ == typ && actual.power == expected_power {
        Some(blended)
    } else {
        Some(table)
    }
}

// Keep every stat the set pins down, fill the rest from the derived
// spread.
fn blend(explicit: &PartialStats, derived: &PartialStats) -> PartialStats {
    let mut out = *explicit;
    for stat in Stat::ALL {
        if out.get(stat).is_none() {
            if let Some(value) = derived.get(stat) {
                out.set(stat, value);
            }
        }
    }
    out
}
