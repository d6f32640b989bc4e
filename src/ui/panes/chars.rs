//! Input string pane: one boxed cell per character with the current step highlighted

use super::{pane_block, visible_char, CELL_WIDTH};
use crate::trace::StepStatus;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the checked input as a row of cells
///
/// `current` is the char index and status of the step being shown. The
/// trailing unclosed-bracket step points one past the last character, so
/// nothing is highlighted for it. Inputs wider than the pane scroll so the
/// current character stays in view.
pub fn render_chars_pane(
    frame: &mut Frame,
    area: Rect,
    input: &str,
    current: Option<(usize, StepStatus)>,
) {
    let block = pane_block(" Input String ", false);

    if input.is_empty() {
        let paragraph = Paragraph::new("(nothing checked)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let len = input.chars().count();
    let visible_cells = (area.width.saturating_sub(2) as usize / CELL_WIDTH).max(1);
    let start = match current {
        Some((index, _)) => index.min(len - 1).saturating_sub(visible_cells - 1),
        None => 0,
    };

    let mut spans = Vec::new();
    for (idx, c) in input.chars().enumerate().skip(start).take(visible_cells) {
        let style = match current {
            Some((index, status)) if index == idx => Style::default()
                .bg(if status.is_error() {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.success
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            _ if matches!(c, '(' | ')' | '{' | '}' | '[' | ']') => {
                Style::default().fg(DEFAULT_THEME.bracket)
            }
            _ => Style::default().fg(DEFAULT_THEME.comment),
        };
        spans.push(Span::styled(format!(" {} ", visible_char(c)), style));
        spans.push(Span::raw(" "));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    /// Cells on the text row of a pane drawn at the top of an 80x3 screen
    fn render_row(input: &str, current: Option<(usize, StepStatus)>) -> Vec<(String, Color)> {
        let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();
        terminal
            .draw(|f| render_chars_pane(f, f.area(), input, current))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content()[80..160]
            .iter()
            .map(|cell| (cell.symbol().to_string(), cell.bg))
            .collect()
    }

    #[test]
    fn test_current_char_visible_on_long_input() {
        let input = format!("{}{}", "(".repeat(15), ")".repeat(15));
        let row = render_row(&input, Some((29, StepStatus::Valid)));
        let highlighted = row
            .iter()
            .filter(|(_, bg)| *bg == DEFAULT_THEME.success)
            .count();
        assert_eq!(highlighted, CELL_WIDTH - 1);
    }

    #[test]
    fn test_short_input_starts_at_first_char() {
        let row = render_row("[x]", Some((0, StepStatus::Valid)));
        assert_eq!(row[2].0, "[");
        assert_eq!(row[2].1, DEFAULT_THEME.success);
    }

    #[test]
    fn test_trailing_step_shows_input_end() {
        let input = "(".repeat(40);
        let row = render_row(&input, Some((40, StepStatus::Error)));
        assert!(row.iter().all(|(_, bg)| *bg != DEFAULT_THEME.error));
        assert!(row.iter().any(|(symbol, _)| symbol == "("));
    }
}
