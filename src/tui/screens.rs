//! One draw function per view.

use super::state::{label_value, UiState};
use crate::preferences::Category;
use crate::profile;
use crate::suggest;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

fn stars(n: u8) -> String {
    let n = n.min(5) as usize;
    format!("{}{}", "★".repeat(n), "☆".repeat(5 - n))
}

fn boxed<'a>(title: impl Into<Line<'a>>) -> Block<'a> {
    Block::default().borders(Borders::ALL).title(title)
}

pub fn draw_landing(area: Rect, f: &mut Frame, state: &UiState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Length(5), Constraint::Min(0)].as_ref())
        .split(area);

    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            "✨ AI-Powered Recipe Generation",
            Style::default().fg(Color::Green),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Scan Your Fridge, Cook Amazing",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Transform random ingredients into delicious meals in 30 seconds."),
        Line::from("No more food waste, no more \"what's for dinner?\" stress."),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("enter", Style::default().fg(Color::Magenta)),
            Span::raw(" to start scanning"),
        ]),
    ])
    .block(boxed(format!("Welcome back, {}", state.profile.name)))
    .wrap(Wrap { trim: false });
    f.render_widget(hero, rows[0]);

    let stat_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage(33),
                Constraint::Percentage(33),
                Constraint::Percentage(34),
            ]
            .as_ref(),
        )
        .split(rows[1]);
    for (i, (value, label)) in [
        ("50k+", "Recipes Generated"),
        ("£70", "Avg. Monthly Savings"),
        ("30s", "Scan to Recipe"),
    ]
    .into_iter()
    .enumerate()
    {
        let p = Paragraph::new(vec![
            Line::from(Span::styled(value, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(label),
        ])
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(p, stat_cols[i]);
    }

    let steps = Paragraph::new(vec![
        Line::from(Span::styled("1. Scan Ingredients", Style::default().fg(Color::Green))),
        Line::from("   Point your camera at your fridge or pantry. Ingredients are recognized instantly."),
        Line::from(""),
        Line::from(Span::styled("2. Generate Recipe", Style::default().fg(Color::Yellow))),
        Line::from("   Get a personalized recipe tailored to your preferences and time constraints."),
        Line::from(""),
        Line::from(Span::styled("3. Start Cooking", Style::default().fg(Color::LightRed))),
        Line::from("   Follow step-by-step instructions using what you already have."),
    ])
    .block(boxed("How PantryPal Works"))
    .wrap(Wrap { trim: false });
    f.render_widget(steps, rows[2]);
}

pub fn draw_camera(area: Rect, f: &mut Frame, state: &UiState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(area);

    let gauge = Gauge::default()
        .block(boxed(if state.scanning {
            "Scanning ingredients..."
        } else {
            "Scanner"
        }))
        .gauge_style(Style::default().fg(Color::Green))
        .percent(state.scan_progress.min(100) as u16)
        .label(format!("{}% complete", state.scan_progress));
    f.render_widget(gauge, rows[0]);

    let body = if !state.detected.is_empty() {
        let mut lines = vec![Line::from(Span::styled(
            "⚡ Ingredients Detected",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ))];
        lines.push(Line::from(""));
        for i in &state.detected {
            lines.push(Line::from(vec![
                Span::raw("  • "),
                Span::styled(i.clone(), Style::default().fg(Color::Green)),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("enter", Style::default().fg(Color::Magenta)),
            Span::raw(format!(
                "  Generate Recipe ({} ingredients)",
                state.detected.len()
            )),
        ]));
        lines
    } else if state.scanning {
        vec![Line::from("Hold steady...")]
    } else {
        vec![
            Line::from("Position ingredients within the frame and press space to scan."),
        ]
    };
    f.render_widget(
        Paragraph::new(body).block(boxed("Viewfinder")).wrap(Wrap { trim: false }),
        rows[1],
    );

    let keys = if state.scanning {
        "x cancel | esc back"
    } else {
        "space scan | enter use ingredients | esc back"
    };
    f.render_widget(Paragraph::new(keys).block(Block::default().borders(Borders::ALL)), rows[2]);
}

pub fn draw_preferences(area: Rect, f: &mut Frame, state: &UiState) {
    let constraints: Vec<Constraint> = Category::ALL.iter().map(|_| Constraint::Length(4)).collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let focused = state.pref_category();
    for (row, category) in rows.iter().zip(Category::ALL) {
        let mut spans = Vec::new();
        for (i, option) in category.options().iter().enumerate() {
            let selected = state.preferences.is_selected(category, option);
            let mut style = if selected {
                Style::default().fg(Color::Black).bg(Color::Green)
            } else {
                Style::default().fg(Color::Gray)
            };
            if category == focused && i == state.pref_option {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            let mark = match (category.is_single_select(), selected) {
                (true, true) => "(•)",
                (true, false) => "( )",
                (false, true) => "[x]",
                (false, false) => "[ ]",
            };
            spans.push(Span::styled(format!(" {mark} {option} "), style));
            spans.push(Span::raw(" "));
        }
        let title_style = if category == focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(category.title(), title_style));
        f.render_widget(
            Paragraph::new(Line::from(spans)).block(block).wrap(Wrap { trim: false }),
            *row,
        );
    }
}

pub fn draw_results(area: Rect, f: &mut Frame, state: &UiState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)].as_ref())
        .split(area);
    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(40), Constraint::Percentage(30)].as_ref())
        .split(cols[0]);

    let ingredients = state.session.scanned_ingredients();

    // Your ingredients
    let mut lines = Vec::new();
    if ingredients.is_empty() {
        lines.push(Line::from("Nothing scanned yet. Press c to open the scanner."));
    }
    for i in ingredients {
        let mut spans = vec![Span::raw("• "), Span::raw(i.clone())];
        if state.profile.is_favorite(i) {
            spans.push(Span::styled("  most used", Style::default().fg(Color::Yellow)));
        }
        lines.push(Line::from(spans));
    }
    let title = match &state.last_scan {
        Some(scan) => format!("Your Ingredients ({} {})", scan.date, scan.time),
        None => "Your Ingredients".to_string(),
    };
    f.render_widget(Paragraph::new(lines).block(boxed(title)), side[0]);

    // Smart suggestions for the recipe on screen
    let recipe = state.recipes.current();
    let mut lines: Vec<Line> = suggest::suggestions(&state.profile, recipe, ingredients)
        .map(|s| Line::from(format!("💡 {s}")))
        .collect();
    if let Some(note) = suggest::last_time_note(&state.profile, ingredients) {
        lines.push(Line::from(Span::styled(note, Style::default().fg(Color::Cyan))));
    }
    if lines.is_empty() {
        lines.push(Line::from("No suggestions for this recipe."));
    }
    f.render_widget(
        Paragraph::new(lines).block(boxed("Smart Suggestions")).wrap(Wrap { trim: true }),
        side[1],
    );

    // Alternatives
    let mut lines = Vec::new();
    for (n, (_, v)) in state.recipes.alternatives().enumerate() {
        let key = if n == 0 { "←" } else { "→" };
        let mut spans = vec![
            Span::styled(format!("{key} "), Style::default().fg(Color::Magenta)),
            Span::raw(v.title.clone()),
        ];
        if v.is_recommended {
            spans.push(Span::styled("  Recommended", Style::default().fg(Color::Green)));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(format!("   {} • {}", v.time_label(), v.difficulty)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("g", Style::default().fg(Color::Magenta)),
        Span::raw(if state.recipes.is_generating() {
            "  Generating..."
        } else {
            "  Generate Different Recipe"
        }),
    ]));
    f.render_widget(Paragraph::new(lines).block(boxed("More Recipe Ideas")), side[2]);

    if state.recipes.is_generating() {
        let p = Paragraph::new(vec![
            Line::from(""),
            Line::from("Creating your perfect recipe..."),
            Line::from("Analyzing your ingredients and preferences"),
        ])
        .block(boxed("Generating"));
        f.render_widget(p, cols[1]);
        return;
    }

    draw_recipe_detail(cols[1], f, state);
}

fn draw_recipe_detail(area: Rect, f: &mut Frame, state: &UiState) {
    let recipe = state.recipes.current();
    let mut lines = Vec::new();
    if recipe.is_recommended {
        lines.push(Line::from(Span::styled(
            "⭐ Recommended for you",
            Style::default().fg(Color::Yellow),
        )));
    }
    lines.push(Line::from(Span::styled(
        recipe.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(recipe.description.clone()));
    lines.push(Line::from(vec![
        Span::styled("Time: ", Style::default().fg(Color::Gray)),
        Span::raw(recipe.time_label()),
        Span::styled("   Serves: ", Style::default().fg(Color::Gray)),
        Span::raw(recipe.servings.to_string()),
        Span::styled("   Level: ", Style::default().fg(Color::Gray)),
        Span::raw(recipe.difficulty.to_string()),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Instructions",
        Style::default().add_modifier(Modifier::UNDERLINED),
    )));
    for (n, step) in recipe.instructions.iter().enumerate() {
        lines.push(Line::from(format!("{}. {}", n + 1, step)));
    }
    lines.push(Line::from(""));
    lines.push(label_value("Pro tip", recipe.tip.clone()));
    lines.push(label_value(
        "Nutrition",
        format!(
            "{} kcal | protein {} | carbs {} | fat {}",
            recipe.nutrition.calories,
            recipe.nutrition.protein,
            recipe.nutrition.carbs,
            recipe.nutrition.fat
        ),
    ));
    lines.push(Line::from(""));

    if state.recipes.shows_rating_prompt() {
        lines.push(Line::from(Span::styled(
            "How was this recipe?",
            Style::default().fg(Color::Yellow),
        )));
        lines.push(Line::from("Rate 1-5   |   y Yes, made it!   m Maybe later   n No thanks"));
    } else if let Some(r) = state.recipes.rating() {
        lines.push(label_value("Your rating", stars(r)));
    }
    if let Some(resp) = state.recipes.cooked() {
        lines.push(label_value("Cooked", resp.label()));
    }

    f.render_widget(
        Paragraph::new(lines)
            .block(boxed(format!(
                "Recipe {} of {}",
                state.recipes.current_index() + 1,
                state.recipes.variant_count()
            )))
            .wrap(Wrap { trim: true }),
        area,
    );
}

pub fn draw_dashboard(area: Rect, f: &mut Frame, state: &UiState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)].as_ref())
        .split(area);

    let p = &state.profile;
    let stat_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4].as_ref())
        .split(rows[0]);
    let avg_rating = p
        .average_rating()
        .map(|r| format!("{r:.1}"))
        .unwrap_or_else(|| "-".into());
    let stats = [
        ("Day streak", format!("🔥 {}", p.streak)),
        ("Recipes generated", p.recipes_generated.to_string()),
        ("Avg cook time", format!("{} min", p.average_cook_time_min)),
        ("Avg rating", avg_rating),
    ];
    for (i, (label, value)) in stats.into_iter().enumerate() {
        let para = Paragraph::new(vec![
            Line::from(Span::styled(value, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(label),
        ])
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(para, stat_cols[i]);
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)].as_ref())
        .split(rows[1]);

    let mut lines = Vec::new();
    for a in profile::recent_activity() {
        let mut spans = vec![
            Span::raw(format!("{:<24}", a.recipe)),
            Span::styled(stars(a.rating), Style::default().fg(Color::Yellow)),
            Span::styled(format!("  {}", a.when), Style::default().fg(Color::Gray)),
        ];
        if a.cooked {
            spans.push(Span::styled("  Cooked ✓", Style::default().fg(Color::Green)));
        }
        lines.push(Line::from(spans));
    }
    let title = format!(
        "Recent Activity · {} cooked · {} saved",
        p.cooked_count(),
        p.saved_count()
    );
    f.render_widget(Paragraph::new(lines).block(boxed(title)), cols[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3 + p.favorite_ingredients.len() as u16), Constraint::Min(0)].as_ref())
        .split(cols[1]);

    let favs: Vec<Line> = p
        .favorite_ingredients
        .iter()
        .map(|i| Line::from(format!("♥ {i}")))
        .collect();
    f.render_widget(Paragraph::new(favs).block(boxed("Favorite Ingredients")), side[0]);

    let mut lines: Vec<Line> = profile::achievements()
        .into_iter()
        .take(3)
        .map(|a| {
            let style = if a.earned {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(vec![
                Span::raw(format!("{} ", a.icon)),
                Span::styled(a.title, style),
                Span::styled(format!("  {}", a.description), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("enter", Style::default().fg(Color::Magenta)),
        Span::raw(" Scan new ingredients   "),
        Span::styled("p", Style::default().fg(Color::Magenta)),
        Span::raw(" Update preferences"),
    ]));
    f.render_widget(Paragraph::new(lines).block(boxed("Achievements")), side[1]);
}

pub fn draw_notifications(area: Rect, f: &mut Frame, state: &UiState) {
    let mut lines = Vec::new();
    for n in &state.notifications {
        let title_style = if n.urgent {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Blue)
        };
        lines.push(Line::from(vec![
            Span::styled(n.title.clone(), title_style),
            Span::styled(format!("  {}", n.age), Style::default().fg(Color::Gray)),
        ]));
        lines.push(Line::from(format!("  {}", n.message)));
        lines.push(Line::from(""));
    }
    let title = format!("Notifications ({} new)", state.unread_notifications());
    f.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true }),
        area,
    );
}
