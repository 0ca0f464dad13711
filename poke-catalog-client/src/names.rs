use poke_catalog_core::{Generation, Species};

/// Transformation formes the publisher always keys under the base name.
const MERGED_TRANSFORMS: [&str; 1] = ["Greninja-Ash"];

/// Name prefixes whose variants only ever differ cosmetically.
const COSMETIC_PREFIXES: [&str; 6] =
    ["Pichu", "Basculin", "Keldeo", "Genesect", "Vivillon", "Magearna"];

/// Name suffixes denoting cosmetic variants. The stats pipeline only
/// recognizes the first.
const COSMETIC_SUFFIXES: [&str; 2] = ["-Antique", "-Totem"];

/// One resolution request: which variant, and for which key space.
pub struct NameQuery<'a> {
    pub r#gen: &'a Generation,
    pub species: &'a Species,
    /// Keep the specific variant name instead of generalizing cosmetics.
    pub specific: bool,
    /// Resolve the stats pipeline's key rather than the dex key.
    pub stats: bool,
}

struct Rule {
    name: &'static str,
    applies: fn(&NameQuery) -> bool,
    resolve: fn(&NameQuery) -> String,
}

/// The resolution policy, in evaluation order. Each rule encodes one
/// publisher quirk; tests pin exact input/output pairs per rule rather
/// than re-deriving the policy.
const RULES: &[Rule] = &[
    Rule { name: "merged-transform", applies: is_merged_transform, resolve: base_unless_stats },
    Rule { name: "mega-primal", applies: is_mega_or_primal, resolve: base_unless_stats },
    Rule { name: "battle-only", applies: is_battle_only, resolve: first_trigger_base },
    Rule { name: "gigantamax", applies: is_gigantamax, resolve: base_unless_stats },
    Rule { name: "specific", applies: wants_specific, resolve: full_name },
    Rule { name: "cosmetic", applies: is_cosmetic, resolve: base_name },
    Rule { name: "cosmetic-suffix", applies: has_cosmetic_suffix, resolve: base_name },
    Rule { name: "pikachu-costume", applies: is_pikachu_costume, resolve: base_name },
];

/// The lookup key a variant's data is filed under. Resolution is
/// idempotent: a name that is already canonical comes back unchanged via
/// the final fallthrough.
pub fn resolve(query: &NameQuery) -> String {
    for rule in RULES {
        if (rule.applies)(query) {
            let resolved = (rule.resolve)(query);
            if resolved != query.species.name {
                log::debug!("resolved {} -> {resolved} ({})", query.species.name, rule.name);
            }
            return resolved;
        }
    }
    query.species.name.clone()
}

fn is_merged_transform(q: &NameQuery) -> bool {
    MERGED_TRANSFORMS.contains(&q.species.name.as_str())
}

fn is_mega_or_primal(q: &NameQuery) -> bool {
    q.species.is_mega || q.species.is_primal
}

fn is_battle_only(q: &NameQuery) -> bool {
    !q.species.battle_only.is_empty()
}

fn is_gigantamax(q: &NameQuery) -> bool {
    q.species.name.ends_with("-Gmax")
}

fn wants_specific(q: &NameQuery) -> bool {
    q.specific
}

fn is_cosmetic(q: &NameQuery) -> bool {
    let listed = q
        .r#gen
        .species(&q.species.base_species)
        .is_some_and(|base| base.cosmetic_formes.iter().any(|f| f == &q.species.name));
    listed || COSMETIC_PREFIXES.iter().any(|p| q.species.name.starts_with(p))
}

fn has_cosmetic_suffix(q: &NameQuery) -> bool {
    if q.stats {
        q.species.name.ends_with("-Antique")
    } else {
        COSMETIC_SUFFIXES.iter().any(|s| q.species.name.ends_with(s))
    }
}

fn is_pikachu_costume(q: &NameQuery) -> bool {
    q.species.name.starts_with("Pikachu") && q.species.name != "Pikachu-Starter"
}

fn full_name(q: &NameQuery) -> String {
    q.species.name.clone()
}

fn base_name(q: &NameQuery) -> String {
    q.species.base_species.clone()
}

fn base_unless_stats(q: &NameQuery) -> String {
    if q.stats { q.species.name.clone() } else { q.species.base_species.clone() }
}

// Battle-only formes are keyed under the first forme that can transform
// into them.
fn first_trigger_base(q: &NameQuery) -> String {
    q.species.battle_only[0].clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use poke_catalog_core::Tier;

    fn resolve_in(r#gen: &Generation, name: &str, specific: bool, stats: bool) -> String {
        let species = r#gen.species(name).unwrap();
        resolve(&NameQuery { r#gen, species, specific, stats })
    }

    fn fixture_gen() -> Generation {
        Generation::new(
            8,
            [
                Species::new("Garchomp", Tier::Ou),
                Species::new("Greninja", Tier::Ou),
                Species::new("Greninja-Ash", Tier::Ou)
                    .with_base_species("Greninja")
                    .with_required_ability("Battle Bond"),
                Species::new("Kyogre", Tier::Uber),
                Species::new("Kyogre-Primal", Tier::Uber)
                    .with_base_species("Kyogre")
                    .with_primal()
                    .with_required_item("Blue Orb"),
                Species::new("Zygarde-Complete", Tier::Uber)
                    .with_base_species("Zygarde")
                    .with_battle_only(["Zygarde", "Zygarde-10%"]),
                Species::new("Venusaur-Gmax", Tier::Illegal).with_base_species("Venusaur"),
                Species::new("Gastrodon", Tier::Nu).with_cosmetic_formes(["Gastrodon-East"]),
                Species::new("Gastrodon-East", Tier::Nu).with_base_species("Gastrodon"),
                Species::new("Basculin-Blue-Striped", Tier::Pu).with_base_species("Basculin"),
                Species::new("Gumshoos-Totem", Tier::Pu).with_base_species("Gumshoos"),
                Species::new("Pikachu-Original", Tier::Pu).with_base_species("Pikachu"),
                Species::new("Pikachu-Starter", Tier::Illegal).with_base_species("Pikachu"),
            ],
        )
    }

    #[test]
    fn canonical_names_resolve_to_themselves() {
        let r#gen = fixture_gen();
        assert_eq!(resolve_in(&r#gen, "Garchomp", false, false), "Garchomp");
        assert_eq!(resolve_in(&r#gen, "Garchomp", true, true), "Garchomp");
    }

    #[test]
    fn merged_transforms_resolve_to_base_except_for_stats() {
        let r#gen = fixture_gen();
        assert_eq!(resolve_in(&r#gen, "Greninja-Ash", false, false), "Greninja");
        assert_eq!(resolve_in(&r#gen, "Greninja-Ash", false, true), "Greninja-Ash");
    }

    #[test]
    fn mega_and_primal_resolve_to_base_except_for_stats() {
        let r#gen = fixture_gen();
        assert_eq!(resolve_in(&r#gen, "Kyogre-Primal", false, false), "Kyogre");
        assert_eq!(resolve_in(&r#gen, "Kyogre-Primal", false, true), "Kyogre-Primal");
        // The specific flag only matters after the earlier rules passed.
        assert_eq!(resolve_in(&r#gen, "Kyogre-Primal", true, false), "Kyogre");
    }

    #[test]
    fn battle_only_formes_resolve_to_their_first_trigger() {
        let r#gen = fixture_gen();
        assert_eq!(resolve_in(&r#gen, "Zygarde-Complete", false, false), "Zygarde");
        assert_eq!(resolve_in(&r#gen, "Zygarde-Complete", false, true), "Zygarde");
    }

    #[test]
    fn gigantamax_resolves_to_base_except_for_stats() {
        let r#gen = fixture_gen();
        assert_eq!(resolve_in(&r#gen, "Venusaur-Gmax", false, false), "Venusaur");
        assert_eq!(resolve_in(&r#gen, "Venusaur-Gmax", false, true), "Venusaur-Gmax");
    }

    #[test]
    fn cosmetic_formes_generalize_unless_specific() {
        let r#gen = fixture_gen();
        assert_eq!(resolve_in(&r#gen, "Gastrodon-East", false, false), "Gastrodon");
        assert_eq!(resolve_in(&r#gen, "Gastrodon-East", true, false), "Gastrodon-East");
        assert_eq!(resolve_in(&r#gen, "Basculin-Blue-Striped", false, false), "Basculin");
    }

    #[test]
    fn totem_suffix_is_not_merged_for_stats() {
        let r#gen = fixture_gen();
        assert_eq!(resolve_in(&r#gen, "Gumshoos-Totem", false, false), "Gumshoos");
        assert_eq!(resolve_in(&r#gen, "Gumshoos-Totem", false, true), "Gumshoos-Totem");
    }

    #[test]
    fn pikachu_costumes_generalize_except_the_starter_gift() {
        let r#gen = fixture_gen();
        assert_eq!(resolve_in(&r#gen, "Pikachu-Original", false, false), "Pikachu");
        assert_eq!(resolve_in(&r#gen, "Pikachu-Starter", false, false), "Pikachu-Starter");
    }

    #[test]
    fn rule_names_are_unique() {
        for (i, rule) in RULES.iter().enumerate() {
            assert!(RULES[i + 1..].iter().all(|r| r.name != rule.name));
        }
    }
}
