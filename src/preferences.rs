//! Cooking preferences edited on the preferences screen. Held in memory only.

use serde::{Deserialize, Serialize};

pub const COOK_TIME_OPTIONS: [&str; 4] = ["Under 15 min", "Under 30 min", "Under 60 min", "60+ min"];
pub const DIET_OPTIONS: [&str; 6] = ["Keto", "Paleo", "Vegan", "Vegetarian", "Mediterranean", "Low-Carb"];
pub const ALLERGY_OPTIONS: [&str; 7] = ["Gluten", "Dairy", "Nuts", "Soy", "Fish", "Shellfish", "Eggs"];
pub const GOAL_OPTIONS: [&str; 6] = [
    "Eat Healthy",
    "Budget-Friendly",
    "Plan Better",
    "Learn to Cook",
    "Quick & Easy",
    "Weight Loss",
];
pub const DISH_OPTIONS: [&str; 8] = [
    "Breakfast",
    "Brunch",
    "Lunch",
    "Dinner",
    "Appetizers",
    "Snack",
    "Dessert",
    "Drinks",
];
pub const SKILL_OPTIONS: [&str; 3] = ["Beginner", "Intermediate", "Advanced"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    CookTime,
    Diet,
    Allergy,
    Goal,
    DishType,
    Skill,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::CookTime,
        Category::Diet,
        Category::Allergy,
        Category::Goal,
        Category::DishType,
        Category::Skill,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Category::CookTime => "Max cooking time",
            Category::Diet => "Dietary preferences",
            Category::Allergy => "Allergies",
            Category::Goal => "Cooking goals",
            Category::DishType => "Dish types",
            Category::Skill => "Skill level",
        }
    }

    pub fn options(self) -> &'static [&'static str] {
        match self {
            Category::CookTime => &COOK_TIME_OPTIONS,
            Category::Diet => &DIET_OPTIONS,
            Category::Allergy => &ALLERGY_OPTIONS,
            Category::Goal => &GOAL_OPTIONS,
            Category::DishType => &DISH_OPTIONS,
            Category::Skill => &SKILL_OPTIONS,
        }
    }

    /// Single-select categories replace the value instead of toggling it.
    pub fn is_single_select(self) -> bool {
        matches!(self, Category::CookTime | Category::Skill)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub max_cook_time: String,
    pub skill_level: String,
    pub diets: Vec<String>,
    pub allergies: Vec<String>,
    pub goals: Vec<String>,
    pub dish_types: Vec<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            max_cook_time: "Under 30 min".into(),
            skill_level: "Intermediate".into(),
            diets: vec!["Vegetarian".into()],
            allergies: Vec::new(),
            goals: vec!["Budget-Friendly".into()],
            dish_types: vec!["Brunch".into()],
        }
    }
}

fn toggle_in(list: &mut Vec<String>, item: &str) {
    if let Some(pos) = list.iter().position(|i| i == item) {
        list.remove(pos);
    } else {
        list.push(item.to_string());
    }
}

impl Preferences {
    pub fn is_selected(&self, category: Category, option: &str) -> bool {
        match category {
            Category::CookTime => self.max_cook_time == option,
            Category::Skill => self.skill_level == option,
            Category::Diet => self.diets.iter().any(|d| d == option),
            Category::Allergy => self.allergies.iter().any(|d| d == option),
            Category::Goal => self.goals.iter().any(|d| d == option),
            Category::DishType => self.dish_types.iter().any(|d| d == option),
        }
    }

    /// Add `option` when absent, remove it when present. Single-select
    /// categories just take the new value.
    pub fn toggle(&mut self, category: Category, option: &str) {
        match category {
            Category::CookTime => self.max_cook_time = option.to_string(),
            Category::Skill => self.skill_level = option.to_string(),
            Category::Diet => toggle_in(&mut self.diets, option),
            Category::Allergy => toggle_in(&mut self.allergies, option),
            Category::Goal => toggle_in(&mut self.goals, option),
            Category::DishType => toggle_in(&mut self.dish_types, option),
        }
    }

    /// "Clear all": empty every multi-select list and put cook time back to
    /// its default. Skill level is left alone.
    pub fn clear(&mut self) {
        self.diets.clear();
        self.allergies.clear();
        self.goals.clear();
        self.dish_types.clear();
        self.max_cook_time = Self::default().max_cook_time;
    }
}
