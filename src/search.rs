//! Live search state for the dashboard.
//!
//! The search string is owned by the `App` and threaded explicitly into the
//! render and filter paths. Components never reach for a process-wide
//! global; this struct is the single read/write contract for the query.

use crate::models::Candidate;

/// The live search query and its cursor.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    query: String,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// Append a typed character.
    pub fn push(&mut self, c: char) {
        self.query.push(c);
    }

    /// Remove the last character, if any.
    pub fn backspace(&mut self) {
        self.query.pop();
    }

    /// Reset the query.
    pub fn clear(&mut self) {
        self.query.clear();
    }

    /// Case-insensitive match against a candidate's name and role.
    pub fn matches(&self, candidate: &Candidate) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        candidate.candidate_name.to_lowercase().contains(&needle)
            || candidate.role_name.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApplicationStatus;

    fn candidate(name: &str, role: &str) -> Candidate {
        Candidate {
            application_id: 1,
            candidate_name: name.to_string(),
            role_name: role.to_string(),
            rating: 4.0,
            application_date: "2024-01-15".parse().unwrap(),
            attachments: 1,
            status: ApplicationStatus::Pending,
            stage: None,
        }
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let search = SearchState::new();
        assert!(search.matches(&candidate("Ada Lovelace", "Backend Engineer")));
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let mut search = SearchState::new();
        for c in "ADA".chars() {
            search.push(c);
        }
        assert!(search.matches(&candidate("Ada Lovelace", "Backend Engineer")));
        assert!(!search.matches(&candidate("Grace Hopper", "Backend Engineer")));
    }

    #[test]
    fn test_matches_role() {
        let mut search = SearchState::new();
        for c in "backend".chars() {
            search.push(c);
        }
        assert!(search.matches(&candidate("Grace Hopper", "Backend Engineer")));
        assert!(!search.matches(&candidate("Grace Hopper", "Data Scientist")));
    }

    #[test]
    fn test_backspace_and_clear() {
        let mut search = SearchState::new();
        search.push('a');
        search.push('b');
        search.backspace();
        assert_eq!(search.query(), "a");

        search.clear();
        assert!(search.is_empty());
    }
}
