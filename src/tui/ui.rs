use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app::{App, Mode};
use super::theme::Theme;

/// Characters of captured input shown before truncating
const PREVIEW_CHARS: usize = 500;

pub fn render(frame: &mut Frame, app: &App, theme: &Theme) {
    let area = frame.area();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(" 📝 Text Splitter ")
        .title_style(theme.title);
    frame.render_widget(block, area);

    let rows = pane_rows(area);

    render_size_info(frame, app, theme, rows[0]);
    render_capture(frame, app, theme, rows[1]);
    render_results(frame, app, theme, rows[2]);
    render_footer(frame, app, theme, rows[3]);
}

fn render_size_info(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let limits = app.limits();
    let mut spans = vec![
        Span::styled(format!("Chunk Size: {} characters", app.chunk_size), theme.normal),
        Span::styled(
            format!("  (↑/↓ to adjust, {}–{})", limits.min, limits.max),
            theme.muted,
        ),
    ];
    if let Some(err) = &app.last_error {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(err.clone(), theme.danger));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_capture(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let mut title = format!(" Input · {} characters", app.input_chars());
    if !app.input.is_empty() {
        title.push_str(&format!(" | Estimated chunks: {}", app.estimated_chunks()));
    }
    title.push(' ');

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(app, Mode::Capturing, theme))
        .title(title)
        .title_style(theme.title);

    let body = if app.input.is_empty() {
        Paragraph::new(vec![
            Line::styled("Paste your large text here...", theme.placeholder),
            Line::raw(""),
            Line::styled(
                "Most terminals handle paste automatically. Press ENTER to split.",
                theme.instruction,
            ),
        ])
    } else {
        Paragraph::new(preview(&app.input)).style(theme.normal)
    };

    frame.render_widget(body.block(block).wrap(Wrap { trim: false }), area);
}

fn render_results(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let Some(chunk) = app.selected_chunk() else {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(focus_style(app, Mode::Viewing, theme))
            .title(" Results ")
            .title_style(theme.title);
        let p = Paragraph::new("No chunks available")
            .style(theme.muted)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(p, area);
        return;
    };

    let header = format!(
        " 📄 PART {}/{} ({} characters, {}) ",
        app.selected + 1,
        app.chunks.len(),
        chunk.metadata.char_count,
        chunk.metadata.boundary.label()
    );
    let border = if app.mode == Mode::Viewing {
        theme.chunk_border
    } else {
        theme.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(header)
        .title_style(theme.chunk_header);

    let p = Paragraph::new(chunk.text.as_str())
        .style(theme.normal)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0))
        .block(block);

    frame.render_widget(p, area);
}

fn render_footer(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let hints: &[(&str, &str)] = match app.mode {
        Mode::Capturing => &[
            (" Enter ", "Split"),
            (" Tab ", "Results"),
            (" ↑/↓ ", "Size"),
            (" Ctrl+R ", "Reset"),
            (" Esc ", "Quit"),
        ],
        Mode::Viewing => &[
            (" ←/→ ", "Part"),
            (" j/k ", "Scroll"),
            (" ↑/↓ ", "Size"),
            (" Tab ", "Input"),
            (" r ", "Reset"),
            (" q ", "Quit"),
        ],
    };

    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (key, label) in hints {
        spans.push(Span::styled(*key, theme.key_hint));
        spans.push(Span::styled(*label, theme.muted));
        spans.push(Span::raw("  "));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

fn focus_style(app: &App, pane: Mode, theme: &Theme) -> Style {
    if app.mode == pane {
        theme.focused_border
    } else {
        theme.border
    }
}

/// First PREVIEW_CHARS chars of the input, with an ellipsis when cut short
fn preview(input: &str) -> String {
    match input.char_indices().nth(PREVIEW_CHARS - 3) {
        Some((end, _)) if input.chars().count() > PREVIEW_CHARS => {
            format!("{}...", &input[..end])
        }
        _ => input.to_string(),
    }
}

/// Size line, capture pane, results pane and footer inside the outer border
fn pane_rows(area: Rect) -> [Rect; 4] {
    Layout::default()
        .constraints([
            Constraint::Length(1),      // Size info
            Constraint::Percentage(35), // Capture pane
            Constraint::Min(5),         // Results pane
            Constraint::Length(1),      // Footer
        ])
        .areas(inner_rect(area, 1))
}

/// Text area of the results pane (inside its border) for a terminal of `area`
pub(crate) fn results_body(area: Rect) -> Rect {
    inner_rect(pane_rows(area)[2], 1)
}

/// Lines `text` occupies once word-wrapped to `width`, as the results pane draws it
pub(crate) fn wrapped_line_count(text: &str, width: u16) -> usize {
    Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .line_count(width)
}

fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}
