use crate::game::{Cell, GameSession, GameStatus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    session: &GameSession<Color>,
    selected_column: usize,
    message: &Option<String>,
) {
    let board_height = session.dimensions().height() as u16 + 3;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(board_height),    // Board
            Constraint::Length(3),            // Message
            Constraint::Length(3),            // Controls
        ])
        .split(frame.area());

    render_header(frame, session, chunks[0]);
    render_board(frame, session, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, session: &GameSession<Color>, area: Rect) {
    let (status, color) = match (session.status(), session.active_player()) {
        (GameStatus::InProgress, Some(player)) => (
            format!("Current Player: {}", player.id()),
            *player.attribute(),
        ),
        (GameStatus::Won(id), _) => (
            format!("Game Over  |  {id} won"),
            *session.player(id).attribute(),
        ),
        _ => ("Game Over  |  Tie".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    session: &GameSession<Color>,
    selected_column: usize,
    area: Rect,
) {
    let dims = session.dimensions();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..dims.width() {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(dims.width() * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..dims.height() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..dims.width() {
            let (symbol, color) = match session.cell_at(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Occupied(id) => (" ● ", *session.player(id).attribute()),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Where the next piece would go; hidden once the game is over
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..dims.width() {
        let open = !session.is_terminal() && session.find_landing_row(col).is_some();
        if col == selected_column && open {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter: Drop  |  R: Rematch  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(session: &GameSession<Color>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|f| render(f, session, 0, &Some("hello".to_string())))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_pieces_and_status() {
        let mut session = GameSession::new(Color::Red, Color::Yellow);
        session.apply_move(0);
        let screen = draw(&session);
        assert!(screen.contains("Current Player: Player 2"));
        assert!(screen.contains('●'));
        assert!(screen.contains("hello"));
    }

    #[test]
    fn test_renders_winner() {
        let mut session = GameSession::new(Color::Red, Color::Yellow);
        for col in [0, 1, 0, 1, 0, 1, 0] {
            session.apply_move(col);
        }
        assert!(draw(&session).contains("Player 1 won"));
    }
}
