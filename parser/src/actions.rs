use types::NA;

use crate::{match_id, players, ParseError};

/// The ordered action tokens of one match. Token zero is the match id;
/// sequence order is temporal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionLog {
    actions: Vec<String>,
}

impl ActionLog {
    pub fn new(match_id: String) -> Self {
        Self {
            actions: vec![match_id],
        }
    }

    /// Wraps an already tokenized sequence whose first entry is the match id.
    pub fn from_actions(actions: Vec<String>) -> Self {
        Self { actions }
    }

    pub fn match_id(&self) -> &str {
        self.actions.first().map(String::as_str).unwrap_or(NA)
    }

    pub fn set_match_id(&mut self, match_id: String) -> Result<(), ParseError> {
        match_id::validate_match_id(&match_id)?;
        match self.actions.first_mut() {
            Some(first) => *first = match_id,
            None => self.actions.push(match_id),
        }
        Ok(())
    }

    /// Parse-safe player names, longest first.
    pub fn players(&self) -> Vec<String> {
        players::from_actions(&self.actions)
    }

    pub fn push(&mut self, action: impl Into<String>) {
        self.actions.push(action.into());
    }

    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.actions.iter()
    }
}

impl<'a> IntoIterator for &'a ActionLog {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
