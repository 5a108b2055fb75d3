use ratatui::{
    layout::Rect,
    style::Color,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn bind(key: &'static str, pad: usize, label: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(key, Style::default().fg(Color::Magenta)),
        Span::raw(format!("{}{}", " ".repeat(pad), label)),
    ])
}

pub fn draw_help(area: Rect, f: &mut Frame) {
    let p = Paragraph::new(vec![
        Line::from("Keybinds:"),
        Line::from(vec![
            Span::raw("  "),
            Span::styled("q", Style::default().fg(Color::Magenta)),
            Span::raw(" / "),
            Span::styled("Ctrl-C", Style::default().fg(Color::Magenta)),
            Span::raw("  Quit"),
        ]),
        bind("tab", 9, "Next screen"),
        bind("h c p r d", 3, "Home / Scanner / Preferences / Recipe / Dashboard"),
        bind("esc", 9, "Back to home"),
        bind("N", 11, "Notifications"),
        bind("?", 11, "Show/hide this help"),
        Line::from(""),
        Line::from("Home & Dashboard:"),
        bind("enter", 7, "Start scanning"),
        Line::from(""),
        Line::from("Scanner:"),
        bind("space", 7, "Scan"),
        bind("x", 11, "Cancel scan"),
        bind("enter", 7, "Generate recipe from detected ingredients"),
        Line::from(""),
        Line::from("Recipe:"),
        bind("g", 11, "Generate different recipe"),
        bind("←/→", 9, "Pick an alternative recipe"),
        bind("1-5", 9, "Rate recipe"),
        bind("y/m/n", 7, "Made it / Maybe later / No thanks"),
        bind("e", 11, "Export as JSON"),
        bind("w", 11, "Export as Markdown"),
        bind("Y", 11, "Copy exported path to clipboard"),
        Line::from(""),
        Line::from("Preferences:"),
        bind("↑/↓", 9, "Choose section"),
        bind("←/→", 9, "Choose option"),
        bind("space", 7, "Toggle option"),
        bind("x", 11, "Clear all"),
        bind("s", 11, "Save and return home"),
    ])
    .block(Block::default().borders(Borders::ALL).title("Help"));
    f.render_widget(p, area);
}
