//! Text summary builder for CLI output.
//!
//! This module formats human-readable lines for text mode.

use crate::orchestrator::ProcessedScan;
use crate::recipes::RecipeVariant;

/// Pre-formatted lines for text output.
pub(crate) struct TextSummary {
    pub lines: Vec<String>,
}

/// Build a text summary for a finished scan and the recipe it produced.
pub(crate) fn build_text_summary(processed: &ProcessedScan, recipe: &RecipeVariant) -> TextSummary {
    let mut lines = Vec::new();

    let detected: Vec<String> = processed
        .record
        .ingredients
        .iter()
        .map(|i| {
            if processed.favorites.contains(i) {
                format!("{i} (most used)")
            } else {
                i.clone()
            }
        })
        .collect();
    lines.push(format!(
        "Detected {} ingredients: {}",
        detected.len(),
        detected.join(", ")
    ));
    lines.push(format!(
        "Scanned: {} {}",
        processed.record.date, processed.record.time
    ));
    lines.push(String::new());

    let badge = if recipe.is_recommended {
        "  [Recommended for you]"
    } else {
        ""
    };
    lines.push(format!("{}{}", recipe.title, badge));
    lines.push(recipe.description.clone());
    lines.push(format!(
        "Time: {}   Serves: {}   Difficulty: {}",
        recipe.time_label(),
        recipe.servings,
        recipe.difficulty
    ));
    lines.push(String::new());
    lines.push("Instructions:".into());
    for (n, step) in recipe.instructions.iter().enumerate() {
        lines.push(format!("  {}. {}", n + 1, step));
    }
    lines.push(format!("Pro tip: {}", recipe.tip));
    lines.push(format!(
        "Nutrition (per serving): {} kcal, protein {}, carbs {}, fat {}",
        recipe.nutrition.calories,
        recipe.nutrition.protein,
        recipe.nutrition.carbs,
        recipe.nutrition.fat
    ));

    if !processed.suggestions.is_empty() || processed.last_time.is_some() {
        lines.push(String::new());
        lines.push("Smart suggestions:".into());
        for s in &processed.suggestions {
            lines.push(format!("  - {s}"));
        }
        if let Some(note) = processed.last_time.as_deref() {
            lines.push(format!("  {note}"));
        }
    }

    TextSummary { lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestrator::process_scan_completion;
    use crate::profile::UserProfile;
    use crate::recipes::catalog;
    use time::macros::datetime;

    #[test]
    fn summary_lists_ingredients_steps_and_suggestions() {
        let profile = UserProfile::demo();
        let recipes = catalog(&profile);
        let scanned: Vec<String> = ["Eggs", "Tomatoes", "Cheese", "Garlic"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let processed =
            process_scan_completion(&profile, &recipes[0], &scanned, datetime!(2024-03-01 12:00 UTC));
        let summary = build_text_summary(&processed, &recipes[0]);

        assert!(summary.lines[0].starts_with("Detected 4 ingredients: Eggs (most used)"));
        assert!(summary
            .lines
            .iter()
            .any(|l| l.contains("[Recommended for you]")));
        assert!(summary.lines.iter().any(|l| l.starts_with("  5. ")));
        assert!(summary.lines.iter().any(|l| l == "Smart suggestions:"));
        assert!(summary
            .lines
            .iter()
            .any(|l| l.contains("Mediterranean Omelette and rated it 5 stars")));
    }
}
