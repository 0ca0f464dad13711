use poke_catalog_core::{Generation, Species, Tier};

/// The suffix of the format a tier's species play in by default.
///
/// These suffixes are a publisher convention, so they live here rather
/// than on `Tier` itself. `NFE` has no ladder of its own and maps to the
/// bottom usage tier of the era.
pub fn tier_suffix(r#gen: u8, tier: Tier) -> &'static str {
    match tier {
        Tier::Ag => "anythinggoes",
        Tier::Uber | Tier::UberImplied => "ubers",
        Tier::Ou | Tier::OuImplied | Tier::Uubl => "ou",
        Tier::Uu | Tier::Rubl => "uu",
        Tier::Ru | Tier::Nubl => "ru",
        Tier::Nu | Tier::NuImplied | Tier::Publ => "nu",
        Tier::Pu | Tier::PuImplied | Tier::Zubl => "pu",
        Tier::Zu => "zu",
        Tier::Nfe => {
            if r#gen >= 9 {
                "zu"
            } else {
                "pu"
            }
        }
        Tier::Lc => "lc",
        Tier::Cap | Tier::CapNfe | Tier::CapLc => "cap",
        Tier::Unreleased | Tier::Illegal => "anythinggoes",
    }
}

/// The format a species is natively played in for its generation, derived
/// from its assigned tier.
pub fn native_format(r#gen: &Generation, species: &Species) -> String {
    format!("gen{}{}", r#gen.num(), tier_suffix(r#gen.num(), species.tier))
}

/// The tier id embedded in a format: everything after the `genN` prefix.
/// Strings without that prefix are returned unchanged.
pub fn tier_id(format: &str) -> &str {
    match format.as_bytes() {
        [b'g', b'e', b'n', digit, ..] if digit.is_ascii_digit() => &format[4..],
        _ => format,
    }
}

/// One recognized seasonal format family. A format belongs to the family
/// when, after the `genN` prefix, it starts with `stem` followed by at
/// least `keep_digits` digits; the canonical base format keeps those
/// digits and strips the rest of the qualifier.
#[derive(Debug, Clone, Copy)]
pub struct FormatFamily {
    pub stem: &'static str,
    pub keep_digits: usize,
}

/// The table of seasonal families whose qualifiers `base_format` strips.
///
/// Kept as data rather than a hard-coded pattern: the publisher grows
/// this list over time, and callers with newer data can extend it without
/// touching the mapping logic.
#[derive(Debug, Clone)]
pub struct FormatFamilies {
    families: Vec<FormatFamily>,
}

impl Default for FormatFamilies {
    fn default() -> Self {
        Self {
            families: vec![
                // Yearly seasons: the four-digit year is part of the base
                // format, trailing regulation/series qualifiers are not.
                FormatFamily { stem: "vgc", keep_digits: 4 },
                // Ladder families qualified by numbered series.
                FormatFamily { stem: "battlestadiumsingles", keep_digits: 0 },
                FormatFamily { stem: "battlestadiumdoubles", keep_digits: 0 },
            ],
        }
    }
}

impl FormatFamilies {
    pub fn new(families: Vec<FormatFamily>) -> Self {
        Self { families }
    }

    /// Strip any seasonal/series qualifier from `format`, returning the
    /// family's canonical base format. Formats outside every recognized
    /// family are returned unchanged (treated as already canonical).
    pub fn base_format(&self, format: &str) -> String {
        let tier = tier_id(format);
        let prefix = &format[..format.len() - tier.len()];
        for family in &self.families {
            let Some(qualifier) = tier.strip_prefix(family.stem) else {
                continue;
            };
            if qualifier.len() < family.keep_digits {
                continue;
            }
            let (kept, _) = qualifier.split_at(family.keep_digits);
            if !kept.bytes().all(|b| b.is_ascii_digit()) {
                continue;
            }
            return format!("{prefix}{}{kept}", family.stem);
        }
        format.to_string()
    }
}

/// The singles usage ladder from top to bottom; ranks index into this.
const LADDER: [&str; 7] = ["ubers", "ou", "uu", "ru", "nu", "pu", "zu"];

/// Format ids for the ladder tiers between ranks `begin` and `end`
/// (inclusive, walked in either direction), appended to `acc`. The `ru`
/// tier is skipped before generation 5, which predates it.
pub fn fallback_chain(r#gen: u8, begin: usize, end: usize, mut acc: Vec<String>) -> Vec<String> {
    let ranks: Vec<usize> = if begin <= end {
        (begin..=end).collect()
    } else {
        (end..=begin).rev().collect()
    };
    for rank in ranks {
        let Some(tier) = LADDER.get(rank) else {
            continue;
        };
        if *tier == "ru" && r#gen < 5 {
            continue;
        }
        acc.push(format!("gen{gen}{tier}"));
    }
    acc
}
