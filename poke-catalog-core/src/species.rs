use serde::{Deserialize, Serialize};

use crate::tier::Tier;

/// Availability classifications for species outside the standard rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nonstandard {
    Gigantamax,
    Unobtainable,
    Past,
    Future,
    #[serde(rename = "LGPE")]
    Lgpe,
    #[serde(rename = "CAP")]
    Cap,
    Custom,
}

/// A species or forme entry in a generation's dex.
///
/// Formes carry their relationship to the base species: whether they are
/// battle-only transformations, purely cosmetic recolors, or legitimate
/// variants gated behind a required ability, item, or move.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Species {
    /// Full display name of the variant (e.g. "Kyogre-Primal").
    pub name: String,
    /// Display name of the base species (equal to `name` for base formes).
    pub base_species: String,
    pub tier: Tier,
    pub is_mega: bool,
    pub is_primal: bool,
    /// Base formes whose in-battle transformation produces this forme;
    /// empty when the forme can be brought to team preview directly.
    pub battle_only: Vec<String>,
    /// Purely cosmetic formes of this (base) species.
    pub cosmetic_formes: Vec<String>,
    /// Ability this forme cannot legally lack.
    pub required_ability: Option<String>,
    /// Item this forme cannot legally lack.
    pub required_item: Option<String>,
    /// Alternative items, any one of which legitimizes this forme.
    pub required_items: Vec<String>,
    /// Move this forme cannot legally lack.
    pub required_move: Option<String>,
    pub nonstandard: Option<Nonstandard>,
}

impl Species {
    /// Create a base-forme species with the given name and tier.
    pub fn new(name: impl Into<String>, tier: Tier) -> Self {
        let name = name.into();
        Self { base_species: name.clone(), name, tier, ..Default::default() }
    }

    pub fn with_base_species(mut self, base: impl Into<String>) -> Self {
        self.base_species = base.into();
        self
    }

    pub fn with_mega(mut self) -> Self {
        self.is_mega = true;
        self
    }

    pub fn with_primal(mut self) -> Self {
        self.is_primal = true;
        self
    }

    pub fn with_battle_only(mut self, bases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.battle_only = bases.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_cosmetic_formes(
        mut self,
        formes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.cosmetic_formes = formes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_required_ability(mut self, ability: impl Into<String>) -> Self {
        self.required_ability = Some(ability.into());
        self
    }

    pub fn with_required_item(mut self, item: impl Into<String>) -> Self {
        self.required_item = Some(item.into());
        self
    }

    pub fn with_required_items(
        mut self,
        items: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.required_items = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_required_move(mut self, mv: impl Into<String>) -> Self {
        self.required_move = Some(mv.into());
        self
    }

    pub fn with_nonstandard(mut self, nonstandard: Nonstandard) -> Self {
        self.nonstandard = Some(nonstandard);
        self
    }

    /// Whether this forme has any legitimacy constraint at all.
    pub fn has_required_constraints(&self) -> bool {
        self.required_ability.is_some()
            || self.required_item.is_some()
            || !self.required_items.is_empty()
            || self.required_move.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_species_defaults_to_name() {
        let species = Species::new("Pikachu", Tier::Pu);
        assert_eq!(species.base_species, "Pikachu");
        assert!(!species.has_required_constraints());
    }

    #[test]
    fn constraints_are_detected() {
        let species = Species::new("Kyogre-Primal", Tier::Uber)
            .with_base_species("Kyogre")
            .with_primal()
            .with_required_item("Blue Orb");
        assert!(species.has_required_constraints());
        assert!(species.is_primal);
    }
}
