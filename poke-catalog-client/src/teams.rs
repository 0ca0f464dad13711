use serde::Deserialize;

use crate::types::PokemonSet;

/// One curated sample team out of `teams/{format}.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct Team {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    pub data: Vec<PokemonSet>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_team_entry() {
        let json = r#"[{
            "name": "Rain Offense",
            "author": "someone",
            "data": [{"species": "Pelipper", "ability": "Drizzle", "moves": ["Surf", "U-turn"]}]
        }, {
            "data": [{"species": "Garchomp", "moves": ["Earthquake"]}]
        }]"#;
        let teams: Vec<Team> = serde_json::from_str(json).unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].name.as_deref(), Some("Rain Offense"));
        assert!(teams[1].author.is_none());
        assert_eq!(teams[1].data[0].species, "Garchomp");
    }
}
