//! UI rendering

use crate::directory::Directory;
use crate::specialties::visible_specialties;
use advocates_store::Advocate;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

const COLUMN_WIDTHS: [Constraint; 6] = [
    Constraint::Length(20), // Name
    Constraint::Length(16), // City
    Constraint::Length(8),  // Degree
    Constraint::Min(30),    // Specialties
    Constraint::Length(6),  // Years
    Constraint::Length(12), // Phone
];

pub fn render(frame: &mut Frame, directory: &Directory) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Search input
            Constraint::Length(1), // Spacer
            Constraint::Min(3),    // Table
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_search_input(frame, directory, chunks[0]);
    render_table(frame, directory, chunks[2]);
    render_status_bar(frame, directory, chunks[3]);
}

fn render_search_input(frame: &mut Frame, directory: &Directory, area: Rect) {
    let input = directory.search();
    let text_style = Style::default().fg(Color::White);
    let (before, after) = input.text().split_at(input.cursor());

    let mut spans = vec![
        Span::styled("▌ ", Style::default().fg(Color::Yellow)),
        Span::styled(before, text_style),
    ];
    let mut rest = after.chars();
    match rest.next() {
        Some(c) => {
            spans.push(Span::styled(
                c.to_string(),
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ));
            spans.push(Span::styled(rest.as_str(), text_style));
        }
        None => spans.push(Span::styled("█", text_style)),
    }
    if input.text().is_empty() {
        spans.push(Span::styled(
            " Search by name, city, degree, specialty or years",
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_table(frame: &mut Frame, directory: &Directory, area: Rect) {
    let header = Row::new(["Name", "City", "Degree", "Specialties", "Years", "Phone"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    if directory.advocates().is_empty() {
        let message = if directory.is_loaded() {
            "No advocates found"
        } else {
            "Loading…"
        };
        let table = Table::new(Vec::<Row>::new(), COLUMN_WIDTHS).header(header);
        frame.render_widget(table, area);

        let body = Rect {
            y: area.y.saturating_add(2),
            height: area.height.saturating_sub(2),
            ..area
        };
        let placeholder = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(placeholder, body);
        return;
    }

    let focused_tag = directory.focused_tag();
    let rows: Vec<Row> = directory
        .advocates()
        .iter()
        .enumerate()
        .map(|(i, advocate)| {
            let focus = if directory.selected() == Some(i) {
                focused_tag
            } else {
                None
            };
            advocate_row(advocate, focus)
        })
        .collect();

    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .row_highlight_style(Style::default().bg(Color::Rgb(40, 40, 40)))
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(directory.selected());
    frame.render_stateful_widget(table, area, &mut state);
}

fn advocate_row(advocate: &Advocate, focused_tag: Option<usize>) -> Row<'_> {
    let display = visible_specialties(&advocate.specialties);

    let mut tags: Vec<Span> = Vec::new();
    for (i, tag) in display.visible.iter().enumerate() {
        let style = if focused_tag == Some(i) {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default().fg(Color::Cyan)
        };
        tags.push(Span::styled(format!("[{tag}]"), style));
        tags.push(Span::raw(" "));
    }
    if let Some(label) = display.overflow_label() {
        tags.push(Span::styled(label, Style::default().fg(Color::DarkGray)));
    }

    Row::new([
        Cell::from(advocate.full_name()),
        Cell::from(advocate.city.as_str()),
        Cell::from(advocate.degree.as_str()),
        Cell::from(Line::from(tags)),
        Cell::from(advocate.years_of_experience.to_string()),
        Cell::from(advocate.phone_number.to_string()),
    ])
}

fn render_status_bar(frame: &mut Frame, directory: &Directory, area: Rect) {
    let count = directory.advocates().len();
    let noun = if count == 1 { "advocate" } else { "advocates" };
    let state = match directory.last_error() {
        Some(e) => format!(" │ {e}"),
        None if directory.is_search_pending() => " │ Searching…".to_string(),
        None => String::new(),
    };
    let status = format!(
        " {count} {noun}{state} │ ↑↓: row │ Tab: tags │ Enter: pick tag │ Esc: quit"
    );

    frame.render_widget(
        Paragraph::new(status).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::FetchResponse;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(directory: &Directory) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(120, 12)).unwrap();
        terminal.draw(|f| render(f, directory)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    fn loaded(advocates: Vec<Advocate>) -> Directory {
        let mut directory = Directory::new();
        let request = directory.mount();
        directory.apply(FetchResponse {
            seq: request.seq,
            result: Ok(advocates),
        });
        directory
    }

    #[test]
    fn test_row_shows_three_tags_and_overflow() {
        let advocate = Advocate::new("Ana", "Ruiz", "San Antonio", "MSW")
            .with_specialties(["Anxiety", "Grief", "Couples", "Insomnia", "Phobias"])
            .with_years_of_experience(9);
        let text = screen(&loaded(vec![advocate])).join("\n");

        assert!(text.contains("Ana Ruiz"));
        assert!(text.contains("[Anxiety] [Grief] [Couples] +2 more"));
        assert!(!text.contains("Insomnia"));
        assert!(!text.contains("Phobias"));
    }

    #[test]
    fn test_no_overflow_label_for_short_lists() {
        let advocate = Advocate::new("Jane", "Doe", "Austin", "MD").with_specialties(["anxiety"]);
        let text = screen(&loaded(vec![advocate])).join("\n");

        assert!(text.contains("[anxiety]"));
        assert!(!text.contains("more"));
    }

    #[test]
    fn test_empty_results_show_placeholder() {
        let text = screen(&loaded(vec![])).join("\n");
        assert!(text.contains("No advocates found"));
        assert!(text.contains(" 0 advocates"));
    }

    #[test]
    fn test_search_box_reflects_text() {
        let mut directory = loaded(vec![]);
        directory.set_search_term("ADHD", std::time::Instant::now());
        let lines = screen(&directory);

        assert!(lines[0].starts_with("▌ ADHD█"));
        assert!(lines.last().unwrap().contains("Searching…"));
    }
}
