//! Static demo user data: profile, dashboard lists and header notifications.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRecord {
    pub ingredients: Vec<String>,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeHistoryEntry {
    pub recipe: String,
    pub rating: u8,
    pub saved: bool,
    pub cooked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub streak: u32,
    pub recipes_generated: u32,
    pub favorite_ingredients: Vec<String>,
    pub favorite_cuisine: String,
    pub average_cook_time_min: u32,
    pub scan_history: Vec<ScanRecord>,
    pub recipe_history: Vec<RecipeHistoryEntry>,
}

impl UserProfile {
    /// The hardcoded demo user.
    pub fn demo() -> Self {
        let scan = |ingredients: &[&str], date: &str, time: &str| ScanRecord {
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            date: date.into(),
            time: time.into(),
        };
        let cooked = |recipe: &str, rating: u8, saved: bool, cooked: bool| RecipeHistoryEntry {
            recipe: recipe.into(),
            rating,
            saved,
            cooked,
        };
        Self {
            name: "Sarah".into(),
            streak: 7,
            recipes_generated: 12,
            favorite_ingredients: vec!["Eggs".into(), "Tomatoes".into(), "Cheese".into()],
            favorite_cuisine: "Italian".into(),
            average_cook_time_min: 18,
            scan_history: vec![
                scan(&["Eggs", "Tomatoes", "Cheese"], "2024-01-15", "18:00"),
                scan(&["Eggs", "Tomatoes", "Cheese"], "2024-01-17", "18:30"),
                scan(&["Chicken", "Garlic", "Spinach"], "2024-01-16", "19:00"),
            ],
            recipe_history: vec![
                cooked("Mediterranean Omelette", 5, true, true),
                cooked("Spanish Tortilla", 4, false, false),
                cooked("Garlic Chicken", 5, true, true),
            ],
        }
    }

    pub fn is_favorite(&self, ingredient: &str) -> bool {
        self.favorite_ingredients.iter().any(|f| f == ingredient)
    }

    /// Whether `recipe` appears in the history with at least `min_rating` stars.
    pub fn rated_at_least(&self, recipe: &str, min_rating: u8) -> bool {
        self.recipe_history
            .iter()
            .any(|r| r.recipe == recipe && r.rating >= min_rating)
    }

    pub fn cooked_count(&self) -> usize {
        self.recipe_history.iter().filter(|r| r.cooked).count()
    }

    pub fn saved_count(&self) -> usize {
        self.recipe_history.iter().filter(|r| r.saved).count()
    }

    pub fn average_rating(&self) -> Option<f64> {
        if self.recipe_history.is_empty() {
            return None;
        }
        let total: u32 = self.recipe_history.iter().map(|r| r.rating as u32).sum();
        Some(total as f64 / self.recipe_history.len() as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub earned: bool,
    pub icon: String,
}

pub fn achievements() -> Vec<Achievement> {
    [
        (1, "First Recipe", "Generated your first recipe", true, "🎯"),
        (2, "Week Warrior", "7 day cooking streak", true, "🔥"),
        (3, "Ingredient Master", "Used 50+ different ingredients", true, "🌟"),
        (4, "Quick Cook", "Made 10 recipes under 15 minutes", false, "⚡"),
        (5, "Cuisine Explorer", "Tried 5 different cuisines", false, "🌍"),
    ]
    .into_iter()
    .map(|(id, title, description, earned, icon)| Achievement {
        id,
        title: title.into(),
        description: description.into(),
        earned,
        icon: icon.into(),
    })
    .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub when: String,
    pub recipe: String,
    pub rating: u8,
    pub cooked: bool,
}

pub fn recent_activity() -> Vec<Activity> {
    [
        ("Today", "Mediterranean Omelette", 5, true),
        ("Yesterday", "Garlic Chicken", 4, true),
        ("2 days ago", "Spanish Tortilla", 3, false),
        ("3 days ago", "Veggie Stir Fry", 5, true),
    ]
    .into_iter()
    .map(|(when, recipe, rating, cooked)| Activity {
        when: when.into(),
        recipe: recipe.into(),
        rating,
        cooked,
    })
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Reminder,
    Suggestion,
    Achievement,
    Tip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub age: String,
    pub urgent: bool,
}

pub fn notifications() -> Vec<Notification> {
    use NotificationKind::*;
    [
        (
            1,
            Reminder,
            "Haven't cooked in 3 days",
            "Your spinach expires tomorrow - here's a quick recipe!",
            "2h ago",
            true,
        ),
        (
            2,
            Suggestion,
            "Try something new",
            "You've been cooking Italian a lot - explore Asian cuisine?",
            "1d ago",
            false,
        ),
        (
            3,
            Achievement,
            "Cooking streak milestone!",
            "7 days in a row! You're on fire 🔥",
            "2d ago",
            false,
        ),
        (
            4,
            Tip,
            "Ingredient tip",
            "Your eggs work great in Mediterranean dishes",
            "3d ago",
            false,
        ),
    ]
    .into_iter()
    .map(|(id, kind, title, message, age, urgent)| Notification {
        id,
        kind,
        title: title.into(),
        message: message.into(),
        age: age.into(),
        urgent,
    })
    .collect()
}

/// Unread badge count shown in the header: urgent notifications only.
pub fn unread_count(items: &[Notification]) -> usize {
    items.iter().filter(|n| n.urgent).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_profile_matches_dashboard_numbers() {
        let p = UserProfile::demo();
        assert_eq!(p.name, "Sarah");
        assert_eq!(p.streak, 7);
        assert_eq!(p.scan_history.len(), 3);
        assert_eq!(p.cooked_count(), 2);
        assert_eq!(p.saved_count(), 2);
        let avg = p.average_rating().unwrap();
        assert!((avg - 14.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn favorites_are_exact_matches() {
        let p = UserProfile::demo();
        assert!(p.is_favorite("Eggs"));
        assert!(!p.is_favorite("eggs"));
        assert!(!p.is_favorite("Garlic"));
    }

    #[test]
    fn rated_at_least_checks_name_and_threshold() {
        let p = UserProfile::demo();
        assert!(p.rated_at_least("Mediterranean Omelette", 4));
        assert!(p.rated_at_least("Spanish Tortilla", 4));
        assert!(!p.rated_at_least("Spanish Tortilla", 5));
        assert!(!p.rated_at_least("Pancakes", 1));
    }

    #[test]
    fn only_urgent_notifications_count_as_unread() {
        let items = notifications();
        assert_eq!(items.len(), 4);
        assert_eq!(unread_count(&items), 1);
    }

    #[test]
    fn three_of_five_achievements_earned() {
        let all = achievements();
        assert_eq!(all.len(), 5);
        assert_eq!(all.iter().filter(|a| a.earned).count(), 3);
    }
}
