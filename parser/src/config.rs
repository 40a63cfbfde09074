use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Lookup tables the pipeline consults. The log format is incomplete, so
/// every table has a conservative fallback where it is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Opening-hand size word ("seven", "six", ...) to mulligan count.
    pub mulligans: HashMap<String, u8>,
    /// Quantity word after "draws" to number of cards.
    pub cards_drawn: HashMap<String, u32>,
    pub default_cards_drawn: u32,
    /// Minimum length of the junk appended after every entry but the last.
    pub artifact_len: usize,
    /// Words that never appear in artifact text.
    pub common_words: Vec<String>,
    pub loss_sentences: Vec<String>,
    pub maybe_loss_sentences: Vec<String>,
    pub win_sentences: Vec<String>,
    pub timeout_sentences: Vec<String>,
    /// Half names of split and adventure cards to the full card name.
    pub card_aliases: HashMap<String, String>,
    /// Basic land to colour letter, in WUBRG order.
    pub basic_lands: Vec<(String, String)>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn table<T: Copy>(items: &[(&str, T)]) -> HashMap<String, T> {
    items.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            mulligans: table(&[
                ("seven", 0),
                ("six", 1),
                ("five", 2),
                ("four", 3),
                ("three", 4),
                ("two", 5),
                ("one", 6),
                ("zero", 7),
                ("no", 7),
            ]),
            cards_drawn: table(&[
                ("a", 1),
                ("two", 2),
                ("three", 3),
                ("four", 4),
                ("five", 5),
                ("six", 6),
                ("seven", 7),
            ]),
            default_cards_drawn: 8,
            artifact_len: 10,
            common_words: owned(&["the", "and", "from", "with", "game", "card", "turn"]),
            loss_sentences: owned(&[
                "has lost the game",
                "loses because of drawing a card",
                "has conceded",
                "has run out of time and has lost the match",
                " has lost the game due to disconnection",
            ]),
            maybe_loss_sentences: owned(&["is being attacked"]),
            win_sentences: owned(&[
                "triggered ability from @[Thassa's Oracle@]",
                "casts @[Approach of the Second Sun@]",
            ]),
            timeout_sentences: owned(&[
                " has lost the game due to disconnection",
                " has run out of time and has lost the match",
            ]),
            card_aliases: [
                ("Fire", "Fire // Ice"),
                ("Ice", "Fire // Ice"),
                ("Stomp", "Bonecrusher Giant"),
                ("Petty Theft", "Brazen Borrower"),
                ("Swift End", "Murderous Rider"),
            ]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
            basic_lands: [
                ("Plains", "W"),
                ("Island", "U"),
                ("Swamp", "B"),
                ("Mountain", "R"),
                ("Forest", "G"),
            ]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        }
    }
}

impl ParserConfig {
    /// Reads a YAML document; fields it leaves out keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ParseError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn mulligans_for(&self, hand_word: &str) -> Option<u8> {
        self.mulligans.get(hand_word).copied()
    }

    pub fn cards_drawn_for(&self, quantity_word: Option<&str>) -> u32 {
        quantity_word
            .and_then(|word| self.cards_drawn.get(word))
            .copied()
            .unwrap_or(self.default_cards_drawn)
    }

    pub fn canonical_card<'a>(&'a self, card: &'a str) -> &'a str {
        self.card_aliases
            .get(card)
            .map(String::as_str)
            .unwrap_or(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_overlays_defaults() {
        let config = ParserConfig::from_yaml_str("default_cards_drawn: 3\nartifact_len: 12\n")
            .expect("Valid config yaml");
        assert_eq!(config.default_cards_drawn, 3);
        assert_eq!(config.artifact_len, 12);
        assert_eq!(config.mulligans_for("six"), Some(1));
    }

    #[test]
    fn test_bad_yaml_is_config_error() {
        let err = ParserConfig::from_yaml_str("artifact_len: [1, 2]").unwrap_err();
        assert!(matches!(err, ParseError::Config(_)));
    }

    #[test]
    fn test_unknown_draw_phrase_defaults_to_full_hand() {
        let config = ParserConfig::default();
        assert_eq!(config.cards_drawn_for(Some("a")), 1);
        assert_eq!(config.cards_drawn_for(Some("their")), 8);
        assert_eq!(config.cards_drawn_for(None), 8);
    }

    #[test]
    fn test_canonical_card() {
        let config = ParserConfig::default();
        assert_eq!(config.canonical_card("Stomp"), "Bonecrusher Giant");
        assert_eq!(config.canonical_card("Lightning Bolt"), "Lightning Bolt");
    }
}
