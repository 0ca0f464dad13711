/// Normalize a display name into the lowercase alphanumeric ID form both
/// systems of record use as lookup keys ("Mr. Mime" -> "mrmime",
/// "gen9ou" -> "gen9ou").
pub fn to_id(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_case() {
        assert_eq!(to_id("Mr. Mime"), "mrmime");
        assert_eq!(to_id("Farfetch'd"), "farfetchd");
        assert_eq!(to_id("Kommo-o"), "kommoo");
        assert_eq!(to_id("gen9ou"), "gen9ou");
    }

    #[test]
    fn already_normalized_is_unchanged() {
        assert_eq!(to_id("pikachu"), "pikachu");
        assert_eq!(to_id(""), "");
    }
}
