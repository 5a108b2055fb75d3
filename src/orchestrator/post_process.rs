//! Post-scan processing utilities.
//!
//! Stamps the scan, works out favorites and suggestions for the recipe on
//! screen, and logs the outcome.

use crate::profile::{ScanRecord, UserProfile};
use crate::recipes::RecipeVariant;
use crate::suggest;
use time::macros::format_description;
use time::OffsetDateTime;
use tracing::info;

/// Result of post-scan processing, ready for presentation layers.
#[derive(Debug, Clone)]
pub(crate) struct ProcessedScan {
    pub record: ScanRecord,
    pub favorites: Vec<String>,
    pub suggestions: Vec<String>,
    pub last_time: Option<String>,
}

/// Timestamp a scan with the local date and time, falling back to UTC.
pub(crate) fn stamp_scan(ingredients: &[String], at: OffsetDateTime) -> ScanRecord {
    let date = at
        .format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default();
    let time = at
        .format(format_description!("[hour]:[minute]"))
        .unwrap_or_default();
    ScanRecord {
        ingredients: ingredients.to_vec(),
        date,
        time,
    }
}

pub(crate) fn now_local() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Process a completed scan against the recipe currently shown.
pub(crate) fn process_scan_completion(
    profile: &UserProfile,
    recipe: &RecipeVariant,
    ingredients: &[String],
    at: OffsetDateTime,
) -> ProcessedScan {
    let record = stamp_scan(ingredients, at);
    let favorites = ingredients
        .iter()
        .filter(|i| profile.is_favorite(i))
        .cloned()
        .collect();
    let suggestions: Vec<String> = suggest::suggestions(profile, recipe, ingredients).collect();
    let last_time = suggest::last_time_note(profile, ingredients);

    info!(
        ingredients = ?record.ingredients,
        recipe = %recipe.title,
        suggestions = suggestions.len(),
        "scan processed"
    );

    ProcessedScan {
        record,
        favorites,
        suggestions,
        last_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::catalog;
    use time::macros::datetime;

    #[test]
    fn stamps_date_and_time() {
        let record = stamp_scan(&["Eggs".to_string()], datetime!(2024-01-17 18:30 UTC));
        assert_eq!(record.date, "2024-01-17");
        assert_eq!(record.time, "18:30");
    }

    #[test]
    fn favorites_keep_scan_order() {
        let profile = UserProfile::demo();
        let recipes = catalog(&profile);
        let scanned: Vec<String> = ["Cheese", "Milk", "Eggs"].iter().map(|s| s.to_string()).collect();
        let out = process_scan_completion(&profile, &recipes[0], &scanned, datetime!(2024-02-01 09:05 UTC));
        assert_eq!(out.favorites, vec!["Cheese".to_string(), "Eggs".to_string()]);
        assert!(out.last_time.is_none());
        assert_eq!(out.suggestions.len(), 2);
    }
}
