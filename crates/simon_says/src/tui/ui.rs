//! Stateless rendering of the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use simon_core::Pad;

use super::app::App;
use super::view::TerminalView;

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Heading
            Constraint::Min(10),   // Pads
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let heading = Paragraph::new(view.heading().as_str())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(heading, chunks[0]);

    draw_pads(frame, chunks[1], view);

    let status = if *view.status_visible() {
        view.status().clone()
    } else {
        level_line(app)
    };
    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = if *view.start_enabled() {
        "1-4 level · Enter start · q quit"
    } else {
        "g r y b press pads · q quit"
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    if let Some(notice) = view.notice() {
        draw_notice(frame, notice);
    }
}

fn level_line(app: &App) -> String {
    match app.difficulty() {
        Some(difficulty) => format!(
            "Level {} ({}, {} rounds)",
            difficulty.selector(),
            difficulty.label(),
            difficulty.max_rounds()
        ),
        None => format!("Level {} (choose 1-4)", app.level()),
    }
}

fn draw_pads(frame: &mut Frame, area: Rect, view: &TerminalView) {
    let grid = center_rect(area, 44, 12);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(grid);

    for (row, pads) in rows.iter().zip([[Pad::Green, Pad::Red], [Pad::Yellow, Pad::Blue]]) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(*row);
        for (col, pad) in cols.iter().zip(pads) {
            draw_pad(frame, *col, pad, view.is_lit(pad));
        }
    }
}

fn draw_pad(frame: &mut Frame, area: Rect, pad: Pad, lit: bool) {
    let (dim, bright) = pad_colors(pad);
    let style = if lit {
        Style::default().bg(bright).fg(Color::Black).add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(dim).fg(Color::Gray)
    };

    let label = Line::from(vec![
        Span::raw(format!("[{}] ", pad.key())),
        Span::raw(pad.label()),
    ]);
    let paragraph = Paragraph::new(vec![Line::default(), label])
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(paragraph, area);
}

fn pad_colors(pad: Pad) -> (Color, Color) {
    match pad {
        Pad::Green => (Color::Rgb(0, 70, 0), Color::Rgb(80, 255, 80)),
        Pad::Red => (Color::Rgb(80, 0, 0), Color::Rgb(255, 70, 70)),
        Pad::Yellow => (Color::Rgb(80, 70, 0), Color::Rgb(255, 240, 60)),
        Pad::Blue => (Color::Rgb(0, 0, 90), Color::Rgb(80, 140, 255)),
    }
}

fn draw_notice(frame: &mut Frame, notice: &str) {
    let area = center_rect(frame.area(), 50, 7);
    frame.render_widget(Clear, area);

    let text = vec![
        Line::from(notice.to_string()),
        Line::default(),
        Line::from(Span::styled(
            "Press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title("Simon Says")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        );
    frame.render_widget(popup, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameConfig;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).expect("terminal");
        terminal.draw(|frame| draw(frame, app)).expect("draw");
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_idle_screen_shows_title_and_level() {
        let app = App::new(&GameConfig::default(), Some(2), Some(1));
        let screen = render(&app);
        assert!(screen.contains("Simon Says"));
        assert!(screen.contains("Level 2"));
        assert!(screen.contains("[g] Green"));
    }

    #[test]
    fn test_invalid_level_line() {
        let app = App::new(&GameConfig::default(), Some(9), Some(1));
        assert_eq!(level_line(&app), "Level 9 (choose 1-4)");
    }
}
