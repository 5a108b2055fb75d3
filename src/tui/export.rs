use crate::recipes::{CookedResponse, RecipeVariant};
use crate::schema::NewRecipe;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::mpsc as std_mpsc;
use std::sync::OnceLock;
use std::time::Duration;
use time::macros::format_description;
use time::OffsetDateTime;
use tracing::info;

use super::state::UiState;

// Global clipboard manager channel - initialized once on first use
static CLIPBOARD_SENDER: OnceLock<std_mpsc::Sender<String>> = OnceLock::new();

/// Recipe plus the session context it was shown in.
#[derive(Debug, Serialize)]
pub struct ExportedRecipe<'a> {
    pub exported_at: String,
    pub ingredients: &'a [String],
    pub recipe: &'a RecipeVariant,
    pub rating: Option<u8>,
    pub cooked: Option<CookedResponse>,
    pub record: NewRecipe,
}

fn slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_matches('-').to_string()
}

fn export_path(dir: Option<&Path>, recipe: &RecipeVariant, at: OffsetDateTime, ext: &str) -> Result<PathBuf> {
    let stamp = at
        .format(format_description!("[year][month][day]-[hour][minute][second]"))
        .unwrap_or_else(|_| "now".into());
    let name = format!("pantrypal-{}-{}.{}", slug(&recipe.title), stamp, ext);
    let dir = match dir {
        Some(d) => d.to_path_buf(),
        None => std::env::current_dir().context("get current directory")?,
    };
    std::fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir.join(name))
}

fn exported<'a>(state: &'a UiState, at: OffsetDateTime) -> ExportedRecipe<'a> {
    let recipe = state.recipes.current();
    ExportedRecipe {
        exported_at: at
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_else(|_| "now".into()),
        ingredients: state.session.scanned_ingredients(),
        recipe,
        rating: state.recipes.rating(),
        cooked: state.recipes.cooked(),
        record: NewRecipe::from_variant(recipe, &state.profile.name.to_lowercase()),
    }
}

/// Export the recipe on screen as JSON. Returns the absolute path of the exported file.
pub fn export_recipe_json(state: &UiState, at: OffsetDateTime) -> Result<PathBuf> {
    let doc = exported(state, at);
    let path = export_path(state.export_dir.as_deref(), doc.recipe, at, "json")?;
    let body = serde_json::to_string_pretty(&doc).context("serialize recipe")?;
    std::fs::write(&path, body).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "exported recipe json");
    Ok(path)
}

pub fn render_markdown(doc: &ExportedRecipe<'_>) -> String {
    let r = doc.recipe;
    let mut out = format!("# {}\n\n{}\n\n", r.title, r.description);
    out.push_str(&format!(
        "- Time: {}\n- Serves: {}\n- Difficulty: {}\n\n",
        r.time_label(),
        r.servings,
        r.difficulty
    ));
    if !doc.ingredients.is_empty() {
        out.push_str("## Your ingredients\n\n");
        for i in doc.ingredients {
            out.push_str(&format!("- {i}\n"));
        }
        out.push('\n');
    }
    out.push_str("## Instructions\n\n");
    for (n, step) in r.instructions.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", n + 1, step));
    }
    out.push_str(&format!("\n> Pro tip: {}\n\n", r.tip));
    out.push_str(&format!(
        "**Nutrition:** {} kcal, protein {}, carbs {}, fat {}\n",
        r.nutrition.calories, r.nutrition.protein, r.nutrition.carbs, r.nutrition.fat
    ));
    if let Some(stars) = doc.rating {
        out.push_str(&format!("\nYour rating: {}\n", "★".repeat(stars as usize)));
    }
    out
}

/// Export the recipe on screen as Markdown.
pub fn export_recipe_markdown(state: &UiState, at: OffsetDateTime) -> Result<PathBuf> {
    let doc = exported(state, at);
    let path = export_path(state.export_dir.as_deref(), doc.recipe, at, "md")?;
    std::fs::write(&path, render_markdown(&doc)).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "exported recipe markdown");
    Ok(path)
}

/// Initialize the clipboard manager thread if not already initialized.
/// This creates a background thread that processes clipboard operations sequentially,
/// keeping each clipboard instance alive for a sufficient duration.
fn init_clipboard_manager() -> Result<&'static std_mpsc::Sender<String>> {
    CLIPBOARD_SENDER.get_or_init(|| {
        let (tx, rx) = std_mpsc::channel::<String>();

        std::thread::spawn(move || {
            use arboard::Clipboard;

            for text in rx {
                if let Ok(mut clipboard) = Clipboard::new() {
                    if clipboard.set_text(&text).is_ok() {
                        // Clipboard managers on Linux read lazily; keep the owner alive.
                        std::thread::sleep(Duration::from_secs(2));
                    }
                }
            }
        });

        tx
    });

    CLIPBOARD_SENDER
        .get()
        .ok_or_else(|| anyhow::anyhow!("Failed to initialize clipboard manager"))
}

/// Copy text to clipboard without blocking the UI thread.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let sender = init_clipboard_manager()?;
    sender
        .send(text.to_string())
        .map_err(|_| anyhow::anyhow!("Clipboard manager channel closed"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AppConfig;
    use time::macros::datetime;

    fn state_in(dir: &Path) -> UiState {
        let cfg = AppConfig {
            export_dir: Some(dir.to_path_buf()),
            ..AppConfig::default()
        };
        let mut state = UiState::new(&cfg);
        state
            .session
            .complete_scan(vec!["Eggs".into(), "Spinach".into()]);
        state
    }

    #[test]
    fn slug_collapses_punctuation() {
        assert_eq!(slug("Spanish-Style Tortilla"), "spanish-style-tortilla");
        assert_eq!(slug("  Cheesy  Eggs! "), "cheesy-eggs");
    }

    #[test]
    fn json_export_writes_recipe_and_ingredients() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut state = state_in(tmp.path());
        state.recipes.rate(4).unwrap();
        let path = export_recipe_json(&state, datetime!(2024-01-17 18:30:05 UTC)).unwrap();

        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("pantrypal-mediterranean-veggie-omelette-20240117-183005.json")
        );
        let v: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(v["ingredients"][1], "Spinach");
        assert_eq!(v["rating"], 4);
        assert_eq!(v["record"]["user_id"], "sarah");
        assert_eq!(v["recipe"]["id"], 1);
    }

    #[test]
    fn markdown_export_numbers_steps() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut state = state_in(tmp.path());
        state.recipes.begin_regenerate();
        state.recipes.finish_regenerate();
        let path = export_recipe_markdown(&state, datetime!(2024-01-17 18:30 UTC)).unwrap();
        let body = std::fs::read_to_string(path).unwrap();
        assert!(body.starts_with("# Spanish-Style Tortilla\n"));
        assert!(body.contains("\n5. Flip carefully"));
        assert!(body.contains("- Spinach\n"));
        assert!(!body.contains("Your rating"));
    }
}
