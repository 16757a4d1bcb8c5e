use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::game::{Board, Cell, Snapshot, HEIGHT, WIDTH};

pub fn render(
    frame: &mut Frame,
    snapshot: &Snapshot,
    show_registers: bool,
    message: &Option<String>,
) {
    let mut constraints = vec![
        Constraint::Length(3),  // Header
        Constraint::Min(14),    // Board
        Constraint::Length(3),  // Message
        Constraint::Length(3),  // Controls
    ];
    if show_registers {
        constraints.insert(2, Constraint::Length(3)); // CPU registers
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    render_header(frame, snapshot, chunks[0]);
    render_board(frame, snapshot, chunks[1]);
    if show_registers {
        render_registers(frame, snapshot, chunks[2]);
    }
    let offset = usize::from(show_registers);
    render_message(frame, message, chunks[2 + offset]);
    render_controls(frame, chunks[3 + offset]);
}

fn render_header(frame: &mut Frame, snapshot: &Snapshot, area: ratatui::layout::Rect) {
    let factor = snapshot
        .current_factor
        .map(|f| f.to_string())
        .unwrap_or_else(|| "-".to_string());

    let header = Line::from(vec![
        Span::styled(
            format!("Player {}", snapshot.player_score),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  vs  "),
        Span::styled(
            format!("Computer {}", snapshot.computer_score),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  |  Last factor: {factor}")),
    ]);

    let widget = Paragraph::new(header).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Multiplication Game"),
    );

    frame.render_widget(widget, area);
}

fn render_board(frame: &mut Frame, snapshot: &Snapshot, area: ratatui::layout::Rect) {
    let mut lines = Vec::new();

    lines.push(Line::from("╔════════════════════════╗"));
    for row in 0..HEIGHT {
        let mut spans = vec![Span::raw("║")];
        for col in 0..WIDTH {
            let pos = row * WIDTH + col;
            let span = match snapshot.cells[pos] {
                Cell::Empty => Span::styled(
                    format!("{:>3} ", Board::value_at(pos)),
                    Style::default().fg(Color::DarkGray),
                ),
                Cell::Player => Span::styled(
                    "  P ",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Cell::Computer => Span::styled(
                    "  C ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
            };
            spans.push(span);
        }
        spans.push(Span::raw("║"));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from("╚════════════════════════╝"));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_registers(frame: &mut Frame, snapshot: &Snapshot, area: ratatui::layout::Rect) {
    let regs = snapshot.registers;
    let text = format!(
        "regA: {}   regB: {}   acc: {}",
        regs.reg_a, regs.reg_b, regs.acc
    );
    let widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("CPU State"));

    frame.render_widget(widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line = Line::from("1-9: Play factor  |  N: New game  |  S: Save  |  L: Load  |  C: CPU state  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
