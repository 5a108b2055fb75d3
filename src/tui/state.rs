use crate::model::{AppConfig, View};
use crate::preferences::{Category, Preferences};
use crate::profile::{self, Notification, ScanRecord, UserProfile};
use crate::recipes::RecipeCycle;
use crate::router::Session;
use ratatui::{
    style::Color,
    style::Style,
    text::{Line, Span},
};
use std::path::PathBuf;

pub struct UiState {
    pub session: Session,
    pub profile: UserProfile,
    pub recipes: RecipeCycle,
    pub preferences: Preferences,
    // Preferences screen cursor
    pub pref_category: usize,
    pub pref_option: usize,

    // Camera screen
    pub scanning: bool,
    pub scan_progress: u8,
    pub detected: Vec<String>,

    pub last_scan: Option<ScanRecord>,
    pub notifications: Vec<Notification>,
    pub show_notifications: bool,
    pub show_help: bool,
    pub info: String,
    pub export_dir: Option<PathBuf>,
    pub last_exported_path: Option<String>,
}

impl UiState {
    pub fn new(cfg: &AppConfig) -> Self {
        let user = UserProfile::demo();
        let cycle = RecipeCycle::new(&user);
        Self {
            session: Session::new(),
            profile: user,
            recipes: cycle,
            preferences: Preferences::default(),
            pref_category: 0,
            pref_option: 0,
            scanning: false,
            scan_progress: 0,
            detected: Vec::new(),
            last_scan: None,
            notifications: profile::notifications(),
            show_notifications: false,
            show_help: false,
            info: String::new(),
            export_dir: cfg.export_dir.clone(),
            last_exported_path: None,
        }
    }

    pub fn view(&self) -> View {
        self.session.current_view()
    }

    pub fn unread_notifications(&self) -> usize {
        profile::unread_count(&self.notifications)
    }

    pub fn pref_category(&self) -> Category {
        Category::ALL[self.pref_category.min(Category::ALL.len() - 1)]
    }

    pub fn move_pref_category(&mut self, delta: isize) {
        let n = Category::ALL.len() as isize;
        self.pref_category = (self.pref_category as isize + delta).rem_euclid(n) as usize;
        let options = self.pref_category().options().len();
        self.pref_option = self.pref_option.min(options.saturating_sub(1));
    }

    pub fn move_pref_option(&mut self, delta: isize) {
        let n = self.pref_category().options().len() as isize;
        if n == 0 {
            return;
        }
        self.pref_option = (self.pref_option as isize + delta).rem_euclid(n) as usize;
    }

    pub fn toggle_pref_under_cursor(&mut self) {
        let category = self.pref_category();
        if let Some(option) = category.options().get(self.pref_option) {
            self.preferences.toggle(category, option);
        }
    }

    /// Reset the camera screen to its idle state.
    pub fn reset_camera(&mut self) {
        self.scanning = false;
        self.scan_progress = 0;
        self.detected.clear();
    }
}

pub fn key_hint(key: &str, label: &str) -> Vec<Span<'static>> {
    vec![
        Span::styled(key.to_string(), Style::default().fg(Color::Magenta)),
        Span::raw(format!(" {label}  ")),
    ]
}

pub fn label_value(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::Gray)),
        Span::raw(value.into()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preference_cursor_wraps_and_clamps() {
        let mut s = UiState::new(&AppConfig::default());
        s.move_pref_category(-1);
        assert_eq!(s.pref_category(), Category::Skill);
        s.move_pref_option(-1);
        assert_eq!(s.pref_option, 2);
        // Cook time has 4 options, option index 2 stays valid.
        s.move_pref_category(1);
        assert_eq!(s.pref_category(), Category::CookTime);
        assert_eq!(s.pref_option, 2);
        s.toggle_pref_under_cursor();
        assert_eq!(s.preferences.max_cook_time, "Under 60 min");
    }

    #[test]
    fn starts_on_landing_with_one_unread_notification() {
        let s = UiState::new(&AppConfig::default());
        assert_eq!(s.view(), View::Landing);
        assert_eq!(s.unread_notifications(), 1);
    }
}
