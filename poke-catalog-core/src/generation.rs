use std::collections::HashMap;

use crate::id::to_id;
use crate::species::Species;

/// A generation-scoped view of the species dex.
///
/// The catalog client never loads dex data itself; callers assemble a
/// `Generation` from whatever species source they have and pass it to each
/// request. Lookups are keyed by normalized ID, so any display spelling of
/// a name resolves.
#[derive(Debug, Clone)]
pub struct Generation {
    num: u8,
    species: HashMap<String, Species>,
}

impl Generation {
    /// Build a generation dex for `num` (1-9) from a species list.
    pub fn new(num: u8, species: impl IntoIterator<Item = Species>) -> Self {
        let species = species
            .into_iter()
            .map(|s| (to_id(&s.name), s))
            .collect();
        Self { num, species }
    }

    pub fn num(&self) -> u8 {
        self.num
    }

    /// Look up a species or forme by any spelling of its name.
    pub fn species(&self, name: &str) -> Option<&Species> {
        self.species.get(&to_id(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier::Tier;

    #[test]
    fn lookup_ignores_punctuation_and_case() {
        let generation = Generation::new(9, [Species::new("Mr. Mime", Tier::Pu)]);
        assert_eq!(generation.num(), 9);
        assert!(generation.species("mrmime").is_some());
        assert!(generation.species("MR. MIME").is_some());
        assert!(generation.species("Missingno").is_none());
    }
}
