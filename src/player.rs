/// One row of the league table.
/// Parsed from the league endpoint's response and held by
/// [`crate::view::LeagueState`].
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq, Hash)]
pub struct Player {
    /// Display name. Not guaranteed unique.
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Wins")]
    pub wins: u64,
}

impl Player {
    pub fn new(name: impl Into<String>, wins: u64) -> Self {
        Self {
            name: name.into(),
            wins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wins_beyond_32_bits() {
        let body = r#"[{"Name":"Alice","Wins":5000000000},{"Name":"Bob","Wins":1}]"#;
        let players: Vec<Player> = serde_json::from_str(body).unwrap();
        assert_eq!(
            players,
            vec![Player::new("Alice", 5_000_000_000), Player::new("Bob", 1)]
        );
    }

    #[test]
    fn extra_fields_are_ignored() {
        let player: Player =
            serde_json::from_str(r#"{"Name":"Jan","Wins":2137,"Rank":1}"#).unwrap();
        assert_eq!(player, Player::new("Jan", 2137));
    }
}
