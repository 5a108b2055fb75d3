//! The three hand-authored recipe variants and the cycling/rating state around them.

use crate::error::RecipeError;
use crate::profile::UserProfile;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: u32,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeVariant {
    pub id: u32,
    pub title: String,
    pub time_min: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub description: String,
    pub instructions: Vec<String>,
    pub tip: String,
    pub nutrition: Nutrition,
    pub is_recommended: bool,
}

impl RecipeVariant {
    pub fn time_label(&self) -> String {
        format!("{} min", self.time_min)
    }
}

/// Build the fixed catalog. The omelette is flagged as recommended when the
/// user has rated a Mediterranean Omelette four stars or more.
pub fn catalog(profile: &UserProfile) -> Vec<RecipeVariant> {
    let steps = |s: &[&str]| s.iter().map(|x| x.to_string()).collect::<Vec<_>>();
    vec![
        RecipeVariant {
            id: 1,
            title: "Mediterranean Veggie Omelette".into(),
            time_min: 12,
            servings: 2,
            difficulty: Difficulty::Easy,
            description: "A fluffy omelette with fresh Mediterranean flavors and herbs".into(),
            instructions: steps(&[
                "Heat 2 tablespoons of olive oil in a non-stick pan over medium heat",
                "Whisk 4 eggs with salt and pepper in a bowl until well combined",
                "Add diced tomatoes and fresh spinach to the pan, cook for 2 minutes until wilted",
                "Pour in the whisked eggs and let them set for 3-4 minutes without stirring",
                "Add crumbled cheese on one half, fold omelette carefully and serve immediately",
            ]),
            tip: "For extra fluffiness, add a splash of milk to the eggs before whisking".into(),
            nutrition: Nutrition {
                calories: 320,
                protein: "24g".into(),
                carbs: "8g".into(),
                fat: "22g".into(),
            },
            is_recommended: profile.rated_at_least("Mediterranean Omelette", 4),
        },
        RecipeVariant {
            id: 2,
            title: "Spanish-Style Tortilla".into(),
            time_min: 18,
            servings: 3,
            difficulty: Difficulty::Medium,
            description: "A thick, hearty egg dish perfect for any meal of the day".into(),
            instructions: steps(&[
                "Slice onions thinly and cook in olive oil until soft and golden",
                "Beat 6 eggs in a large bowl with salt and pepper",
                "Add cooked onions and grated cheese to the eggs, mix well",
                "Cook in the pan for 8 minutes over medium-low heat",
                "Flip carefully using a plate and cook for another 5 minutes until golden",
            ]),
            tip: "Use a plate to help flip the tortilla safely - it takes practice!".into(),
            nutrition: Nutrition {
                calories: 280,
                protein: "18g".into(),
                carbs: "12g".into(),
                fat: "18g".into(),
            },
            is_recommended: false,
        },
        RecipeVariant {
            id: 3,
            title: "Cheesy Scrambled Eggs".into(),
            time_min: 8,
            servings: 2,
            difficulty: Difficulty::Easy,
            description: "Creamy, cheesy scrambled eggs with fresh herbs and vegetables".into(),
            instructions: steps(&[
                "Whisk eggs with a splash of milk in a bowl",
                "Heat butter in a pan over low heat until melted",
                "Add eggs and stir gently as they cook, keeping heat low",
                "Add cheese and spinach in the last minute of cooking",
                "Season with salt, pepper and serve immediately with toast",
            ]),
            tip: "Low heat is the secret to creamy, restaurant-quality scrambled eggs".into(),
            nutrition: Nutrition {
                calories: 290,
                protein: "20g".into(),
                carbs: "4g".into(),
                fat: "22g".into(),
            },
            is_recommended: false,
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CookedResponse {
    MadeIt,
    MaybeLater,
    NoThanks,
}

impl CookedResponse {
    pub fn label(self) -> &'static str {
        match self {
            CookedResponse::MadeIt => "Yes, made it!",
            CookedResponse::MaybeLater => "Maybe later",
            CookedResponse::NoThanks => "No thanks",
        }
    }
}

/// Which variant is on screen, plus the regenerate and rating prompt flags.
#[derive(Debug, Clone)]
pub struct RecipeCycle {
    variants: Vec<RecipeVariant>,
    current: usize,
    generating: bool,
    rating_prompt: bool,
    rating: Option<u8>,
    cooked: Option<CookedResponse>,
}

impl RecipeCycle {
    /// Cycle over the catalog for `profile`, starting at the first variant.
    /// Built from `catalog` only, so there is always something to show.
    pub fn new(profile: &UserProfile) -> Self {
        Self {
            variants: catalog(profile),
            current: 0,
            generating: false,
            rating_prompt: true,
            rating: None,
            cooked: None,
        }
    }

    pub fn current(&self) -> &RecipeVariant {
        &self.variants[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn shows_rating_prompt(&self) -> bool {
        self.rating_prompt && !self.generating
    }

    pub fn rating(&self) -> Option<u8> {
        self.rating
    }

    pub fn cooked(&self) -> Option<CookedResponse> {
        self.cooked
    }

    /// The two variants not currently shown, in catalog order, with their indices.
    pub fn alternatives(&self) -> impl Iterator<Item = (usize, &RecipeVariant)> + '_ {
        self.variants
            .iter()
            .enumerate()
            .filter(move |(i, _)| *i != self.current)
            .take(2)
    }

    pub fn begin_regenerate(&mut self) {
        self.generating = true;
        self.rating_prompt = false;
    }

    pub fn finish_regenerate(&mut self) {
        self.current = (self.current + 1) % self.variants.len();
        self.generating = false;
        self.rating_prompt = true;
        self.rating = None;
        self.cooked = None;
    }

    pub fn select(&mut self, index: usize) -> Result<(), RecipeError> {
        if index >= self.variants.len() {
            return Err(RecipeError::NoSuchVariant(index));
        }
        if index != self.current {
            self.current = index;
            self.rating = None;
            self.cooked = None;
            self.rating_prompt = true;
        }
        Ok(())
    }

    pub fn rate(&mut self, stars: u8) -> Result<(), RecipeError> {
        if !(1..=5).contains(&stars) {
            return Err(RecipeError::InvalidRating(stars));
        }
        self.rating = Some(stars);
        self.rating_prompt = false;
        Ok(())
    }

    pub fn respond_cooked(&mut self, response: CookedResponse) {
        self.cooked = Some(response);
    }

    /// Go back to the first variant with a fresh prompt, e.g. after a new scan.
    pub fn reset(&mut self) {
        self.current = 0;
        self.generating = false;
        self.rating_prompt = true;
        self.rating = None;
        self.cooked = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle() -> RecipeCycle {
        RecipeCycle::new(&UserProfile::demo())
    }

    fn regenerate(c: &mut RecipeCycle) {
        c.begin_regenerate();
        c.finish_regenerate();
    }

    #[test]
    fn cycle_always_holds_the_three_catalog_variants() {
        let mut profile = UserProfile::demo();
        profile.recipe_history.clear();
        let c = RecipeCycle::new(&profile);
        assert_eq!(c.variant_count(), 3);
        assert_eq!(c.current().id, 1);
    }

    #[test]
    fn catalog_has_three_variants_and_recommends_the_omelette() {
        let variants = catalog(&UserProfile::demo());
        assert_eq!(variants.len(), 3);
        let recommended: Vec<_> = variants.iter().filter(|v| v.is_recommended).collect();
        assert_eq!(recommended.len(), 1);
        assert_eq!(recommended[0].id, 1);
    }

    #[test]
    fn nothing_recommended_without_matching_history() {
        let mut profile = UserProfile::demo();
        profile.recipe_history.clear();
        assert!(catalog(&profile).iter().all(|v| !v.is_recommended));
    }

    #[test]
    fn regenerating_a_multiple_of_three_times_returns_to_start() {
        for n in [0usize, 3, 6, 9, 30] {
            let mut c = cycle();
            let start = c.current().id;
            for _ in 0..n {
                regenerate(&mut c);
            }
            assert_eq!(c.current().id, start, "n = {n}");
        }
        let mut c = cycle();
        regenerate(&mut c);
        assert_ne!(c.current().id, 1);
    }

    #[test]
    fn generating_hides_the_rating_prompt() {
        let mut c = cycle();
        assert!(c.shows_rating_prompt());
        c.begin_regenerate();
        assert!(c.is_generating());
        assert!(!c.shows_rating_prompt());
        c.finish_regenerate();
        assert!(!c.is_generating());
        assert!(c.shows_rating_prompt());
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn alternatives_exclude_current() {
        let mut c = cycle();
        c.select(1).unwrap();
        let ids: Vec<_> = c.alternatives().map(|(_, v)| v.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn select_rejects_out_of_range() {
        let mut c = cycle();
        assert_eq!(c.select(3), Err(RecipeError::NoSuchVariant(3)));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn rating_bounds() {
        let mut c = cycle();
        assert_eq!(c.rate(0), Err(RecipeError::InvalidRating(0)));
        assert_eq!(c.rate(6), Err(RecipeError::InvalidRating(6)));
        assert!(c.shows_rating_prompt());
        c.rate(4).unwrap();
        assert_eq!(c.rating(), Some(4));
        assert!(!c.shows_rating_prompt());
    }

    #[test]
    fn regenerate_clears_previous_feedback() {
        let mut c = cycle();
        c.rate(5).unwrap();
        c.respond_cooked(CookedResponse::MadeIt);
        regenerate(&mut c);
        assert_eq!(c.rating(), None);
        assert_eq!(c.cooked(), None);
    }
}
