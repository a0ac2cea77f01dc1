use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;
use webbrowser::Browser;

use crate::{
    app::App,
    clock::Clock,
    highlight::{mark_passage, LetterState, WordState},
    random::RandomSource,
    scoring::Score,
    session::{Phase, Snapshot},
};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

const RULES: [&str; 4] = [
    "Type the highlighted word in the input field.",
    "Finish a word with a space (or a period) to move on.",
    "Correct letters turn green.",
    "Incorrect letters turn red.",
];

impl<C: Clock, R: RandomSource> Widget for &App<C, R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let snapshot = self.session.snapshot();

        match snapshot.phase {
            Phase::NotStarted => render_welcome(area, buf),
            Phase::InProgress => render_typing(&snapshot, area, buf),
            Phase::Completed => render_results(&snapshot, area, buf),
        }
    }
}

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn render_welcome(area: Rect, buf: &mut Buffer) {
    let mut lines = vec![
        Line::from(Span::styled("Welcome to typerush", bold().fg(Color::Cyan))),
        Line::from(""),
        Line::from(Span::styled("Rules:", bold())),
    ];
    lines.extend(RULES.iter().map(|r| Line::from(*r)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "(enter) start / (esc)ape",
        Style::default().add_modifier(Modifier::ITALIC),
    )));

    let height = lines.len() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(chunks[1], buf);
}

fn render_typing(snapshot: &Snapshot<'_>, area: Rect, buf: &mut Buffer) {
    let green_bold_style = bold().fg(Color::Green);
    let red_bold_style = bold().fg(Color::Red);
    let dim_bold_style = bold().add_modifier(Modifier::DIM);

    let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
    let passage_width = snapshot.passage.iter().join(" ").width();
    let passage_lines = if passage_width <= max_chars_per_line as usize {
        1
    } else {
        ((passage_width as f64 / max_chars_per_line as f64).ceil() + 1.0) as u16
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(1), // wpm / time
            Constraint::Length(1),
            Constraint::Length(1), // progress
            Constraint::Length(1),
            Constraint::Length(passage_lines),
            Constraint::Length(1),
            Constraint::Length(1), // input field
            Constraint::Min(0),
            Constraint::Length(1), // legend
        ])
        .split(area);

    let score = Score {
        elapsed_minutes: snapshot.elapsed_minutes,
        words_per_minute: snapshot.words_per_minute,
    };
    Paragraph::new(Line::from(vec![
        Span::styled("WPM: ", bold()),
        Span::raw(score.words_per_minute.to_string()),
        Span::raw("   "),
        Span::styled("Time: ", bold()),
        Span::raw(format!("{}s", score.elapsed_secs())),
    ]))
    .render(chunks[0], buf);

    Gauge::default()
        .gauge_style(Style::default().fg(Color::Green))
        .ratio((snapshot.progress_percent / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.0}%", snapshot.progress_percent))
        .render(chunks[2], buf);

    let mut spans: Vec<Span> = Vec::new();
    for (idx, marked) in mark_passage(snapshot).into_iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        match marked.state {
            WordState::Completed => spans.push(Span::styled(marked.word, green_bold_style)),
            WordState::Upcoming => spans.push(Span::styled(marked.word, dim_bold_style)),
            WordState::Current => {
                spans.extend(marked.letters.iter().map(|(c, state)| {
                    let style = match state {
                        LetterState::Correct => green_bold_style,
                        LetterState::Incorrect => red_bold_style,
                        LetterState::Untyped => bold(),
                    };
                    Span::styled(c.to_string(), style.add_modifier(Modifier::UNDERLINED))
                }));
            }
        }
    }

    Paragraph::new(Line::from(spans))
        .alignment(if passage_lines == 1 {
            Alignment::Center
        } else {
            Alignment::Left
        })
        .wrap(Wrap { trim: true })
        .render(chunks[4], buf);

    Paragraph::new(Line::from(vec![
        Span::styled("> ", dim_bold_style),
        Span::styled(snapshot.current_input.to_string(), bold()),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]))
    .render(chunks[6], buf);

    Paragraph::new(Span::styled(
        "(ctrl+u) clear / (esc)ape",
        Style::default().add_modifier(Modifier::ITALIC),
    ))
    .render(chunks[8], buf);
}

fn render_results(snapshot: &Snapshot<'_>, area: Rect, buf: &mut Buffer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1), // headline
            Constraint::Length(1),
            Constraint::Length(1), // details
            Constraint::Min(0),
            Constraint::Length(1), // legend
        ])
        .split(area);

    Paragraph::new(Line::from(vec![
        Span::styled("Your WPM is ", bold()),
        Span::styled(
            snapshot.words_per_minute.to_string(),
            bold().fg(Color::Magenta),
        ),
    ]))
    .alignment(Alignment::Center)
    .render(chunks[1], buf);

    Paragraph::new(Span::styled(
        format!(
            "{} words in {:.1}s",
            snapshot.completed.len(),
            snapshot.elapsed_minutes * 60.0
        ),
        Style::default().add_modifier(Modifier::DIM),
    ))
    .alignment(Alignment::Center)
    .render(chunks[3], buf);

    let legend = if Browser::is_available() {
        "(r)etry / (t)weet / (esc)ape"
    } else {
        "(r)etry / (esc)ape"
    };
    Paragraph::new(Span::styled(
        legend,
        Style::default().add_modifier(Modifier::ITALIC),
    ))
    .render(chunks[5], buf);
}
