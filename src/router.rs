//! View routing for a single in-memory session.

use crate::model::View;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    current_view: View,
    scanned_ingredients: Vec<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            current_view: View::Landing,
            scanned_ingredients: Vec::new(),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_view(&self) -> View {
        self.current_view
    }

    pub fn scanned_ingredients(&self) -> &[String] {
        &self.scanned_ingredients
    }

    /// Switch to `target` unconditionally.
    pub fn navigate(&mut self, target: View) {
        debug!(from = ?self.current_view, to = ?target, "navigate");
        self.current_view = target;
    }

    /// Store the detected ingredients and jump to the results view.
    pub fn complete_scan(&mut self, ingredients: Vec<String>) {
        debug!(count = ingredients.len(), "scan completed");
        self.scanned_ingredients = ingredients;
        self.current_view = View::Results;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_landing_with_no_ingredients() {
        let s = Session::new();
        assert_eq!(s.current_view(), View::Landing);
        assert!(s.scanned_ingredients().is_empty());
    }

    #[test]
    fn navigate_sets_every_target() {
        let mut s = Session::new();
        for from in View::ALL {
            for to in View::ALL {
                s.navigate(from);
                s.navigate(to);
                assert_eq!(s.current_view(), to);
            }
        }
    }

    #[test]
    fn complete_scan_forces_results_from_any_view() {
        for from in View::ALL {
            let mut s = Session::new();
            s.navigate(from);
            s.complete_scan(vec!["Eggs".into(), "Milk".into()]);
            assert_eq!(s.current_view(), View::Results);
            assert_eq!(s.scanned_ingredients(), ["Eggs", "Milk"]);
        }
    }

    #[test]
    fn navigation_keeps_last_scan() {
        let mut s = Session::new();
        s.complete_scan(vec!["Bread".into()]);
        s.navigate(View::Dashboard);
        s.navigate(View::Landing);
        assert_eq!(s.scanned_ingredients(), ["Bread"]);
    }
}
