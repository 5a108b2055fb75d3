//! Smart suggestions shown next to a recipe.
//!
//! Three independent checks against the static profile, evaluated lazily in a
//! fixed order. The iterator is `Clone`, so callers can restart it.

use crate::profile::{RecipeHistoryEntry, ScanRecord, UserProfile};
use crate::recipes::RecipeVariant;

/// Minutes a recipe may run over the user's average and still "fit".
const COOK_TIME_SLACK_MIN: u32 = 2;

/// Cuisines that count as a match for a favorite cuisine besides the cuisine itself.
const CUISINE_AFFINITY: &[(&str, &[&str])] = &[
    ("Italian", &["Mediterranean"]),
    ("Spanish", &["Mediterranean", "Spanish-Style"]),
    ("Greek", &["Mediterranean"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Check {
    ScannedBefore,
    CuisineMatch,
    CookTimeFit,
}

const CHECKS: [Check; 3] = [Check::ScannedBefore, Check::CuisineMatch, Check::CookTimeFit];

#[derive(Debug, Clone)]
pub struct Suggestions<'a> {
    profile: &'a UserProfile,
    recipe: &'a RecipeVariant,
    ingredients: &'a [String],
    next: usize,
}

impl Iterator for Suggestions<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while self.next < CHECKS.len() {
            let check = CHECKS[self.next];
            self.next += 1;
            let hit = match check {
                Check::ScannedBefore => last_matching_scan(self.profile, self.ingredients).map(|s| {
                    format!(
                        "You scanned these ingredients on {} - want something different this time?",
                        s.date
                    )
                }),
                Check::CuisineMatch => {
                    matches_cuisine(&self.profile.favorite_cuisine, &self.recipe.title).then(|| {
                        format!(
                            "Based on your love for {} cuisine, this recipe is perfect for you!",
                            self.profile.favorite_cuisine
                        )
                    })
                }
                Check::CookTimeFit => fits_cook_time(self.profile, self.recipe)
                    .then(|| "This fits your usual cooking time preference perfectly!".to_string()),
            };
            if hit.is_some() {
                return hit;
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(CHECKS.len() - self.next))
    }
}

/// Suggestions for `recipe` given what was just scanned.
pub fn suggestions<'a>(
    profile: &'a UserProfile,
    recipe: &'a RecipeVariant,
    ingredients: &'a [String],
) -> Suggestions<'a> {
    Suggestions {
        profile,
        recipe,
        ingredients,
        next: 0,
    }
}

/// A past scan counts when every one of its ingredients is in the current set.
pub fn has_scanned_before(profile: &UserProfile, ingredients: &[String]) -> bool {
    last_matching_scan(profile, ingredients).is_some()
}

fn last_matching_scan<'a>(profile: &'a UserProfile, ingredients: &[String]) -> Option<&'a ScanRecord> {
    profile
        .scan_history
        .iter()
        .filter(|scan| scan.ingredients.iter().all(|i| ingredients.contains(i)))
        .max_by(|a, b| (&a.date, &a.time).cmp(&(&b.date, &b.time)))
}

fn matches_cuisine(favorite: &str, title: &str) -> bool {
    if favorite.is_empty() {
        return false;
    }
    if title.contains(favorite) {
        return true;
    }
    CUISINE_AFFINITY
        .iter()
        .filter(|(cuisine, _)| *cuisine == favorite)
        .flat_map(|(_, related)| related.iter())
        .any(|related| title.contains(related))
}

fn fits_cook_time(profile: &UserProfile, recipe: &RecipeVariant) -> bool {
    recipe.time_min <= profile.average_cook_time_min + COOK_TIME_SLACK_MIN
}

/// "Last time" note shown under the suggestions when these ingredients were scanned before.
pub fn last_time_note(profile: &UserProfile, ingredients: &[String]) -> Option<String> {
    if !has_scanned_before(profile, ingredients) {
        return None;
    }
    // First entry wins on ties so the note is stable.
    let best = profile
        .recipe_history
        .iter()
        .filter(|r| r.cooked)
        .fold(None, |best: Option<&RecipeHistoryEntry>, r| match best {
            Some(b) if b.rating >= r.rating => Some(b),
            _ => Some(r),
        })?;
    Some(format!(
        "Last time: You made {} and rated it {} stars!",
        best.recipe, best.rating
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::catalog;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn all_three_checks_fire_for_the_omelette() {
        let profile = UserProfile::demo();
        let recipes = catalog(&profile);
        let scanned = strings(&["Eggs", "Tomatoes", "Cheese", "Milk"]);
        let out: Vec<_> = suggestions(&profile, &recipes[0], &scanned).collect();
        assert_eq!(out.len(), 3);
        assert!(out[0].contains("2024-01-17"));
        assert!(out[1].contains("Italian"));
        assert!(out[2].contains("cooking time"));
    }

    #[test]
    fn no_history_match_and_no_cuisine_match() {
        let profile = UserProfile::demo();
        let recipes = catalog(&profile);
        let scanned = strings(&["Eggs", "Milk", "Bread"]);
        let out: Vec<_> = suggestions(&profile, &recipes[2], &scanned).collect();
        assert_eq!(
            out,
            vec!["This fits your usual cooking time preference perfectly!".to_string()]
        );
    }

    #[test]
    fn can_be_empty() {
        let mut profile = UserProfile::demo();
        profile.average_cook_time_min = 5;
        profile.favorite_cuisine = "Thai".into();
        let recipes = catalog(&profile);
        assert_eq!(suggestions(&profile, &recipes[1], &[]).count(), 0);
    }

    #[test]
    fn deterministic_bounded_and_restartable() {
        let profile = UserProfile::demo();
        let recipes = catalog(&profile);
        let scanned = strings(&["Eggs", "Tomatoes", "Cheese"]);
        for recipe in &recipes {
            let it = suggestions(&profile, recipe, &scanned);
            let first: Vec<_> = it.clone().collect();
            let second: Vec<_> = it.collect();
            let third: Vec<_> = suggestions(&profile, recipe, &scanned).collect();
            assert_eq!(first, second);
            assert_eq!(first, third);
            assert!(first.len() <= 3);
        }
    }

    #[test]
    fn cook_time_slack_is_two_minutes() {
        let mut profile = UserProfile::demo();
        let recipes = catalog(&profile);
        profile.average_cook_time_min = 16;
        assert!(fits_cook_time(&profile, &recipes[1]));
        profile.average_cook_time_min = 15;
        assert!(!fits_cook_time(&profile, &recipes[1]));
    }

    #[test]
    fn cuisine_matches_directly_or_by_affinity() {
        assert!(matches_cuisine("Italian", "Mediterranean Veggie Omelette"));
        assert!(matches_cuisine("Spanish", "Spanish-Style Tortilla"));
        assert!(!matches_cuisine("Italian", "Cheesy Scrambled Eggs"));
        assert!(!matches_cuisine("", "Anything"));
    }

    #[test]
    fn last_time_note_requires_a_matching_scan() {
        let profile = UserProfile::demo();
        assert_eq!(last_time_note(&profile, &strings(&["Eggs"])), None);
        assert_eq!(
            last_time_note(&profile, &strings(&["Cheese", "Eggs", "Tomatoes"])).as_deref(),
            Some("Last time: You made Mediterranean Omelette and rated it 5 stars!")
        );
    }
}
