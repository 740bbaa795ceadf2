use ratatui::style::{Color, Modifier, Style};

/// Styling for the splitter UI, built once and passed into rendering
pub struct Theme {
    pub title: Style,
    pub border: Style,
    pub focused_border: Style,
    pub chunk_border: Style,
    pub chunk_header: Style,
    pub normal: Style,
    pub placeholder: Style,
    pub muted: Style,
    pub key_hint: Style,
    pub instruction: Style,
    pub danger: Style,
}

impl Default for Theme {
    fn default() -> Self {
        let purple = Color::Rgb(0x7C, 0x3A, 0xED);
        let green = Color::Rgb(0x05, 0x96, 0x69);
        let gray = Color::Rgb(0x6B, 0x72, 0x80);

        Self {
            title: Style::default().fg(purple).add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::DarkGray),
            focused_border: Style::default().fg(purple),
            chunk_border: Style::default().fg(green),
            chunk_header: Style::default()
                .fg(green)
                .bg(Color::Rgb(0xF0, 0xFD, 0xF4))
                .add_modifier(Modifier::BOLD),
            normal: Style::default().fg(Color::White),
            placeholder: Style::default().fg(gray).add_modifier(Modifier::ITALIC),
            muted: Style::default().fg(gray),
            key_hint: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            instruction: Style::default().fg(green),
            danger: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }
}
