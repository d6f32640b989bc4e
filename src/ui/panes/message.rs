//! Status message pane for the current step

use super::pane_block;
use crate::trace::{Step, StepKind, StepStatus};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

fn kind_label(kind: StepKind) -> &'static str {
    match kind {
        StepKind::Push => "PUSH",
        StepKind::Pop { .. } => "POP",
        StepKind::Skip => "SKIP",
        StepKind::UnmatchedCloser => "UNMATCHED",
        StepKind::Mismatch { .. } => "MISMATCH",
        StepKind::Unclosed => "UNCLOSED",
    }
}

/// Render the message of the current step, colored by its status
pub fn render_message_pane(frame: &mut Frame, area: Rect, step: Option<&Step>) {
    let block = pane_block(" Status ", false);

    let Some(step) = step else {
        let paragraph = Paragraph::new("Waiting for the first step")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let color = match step.status {
        StepStatus::Error => DEFAULT_THEME.error,
        StepStatus::Valid => DEFAULT_THEME.success,
        StepStatus::Unset => DEFAULT_THEME.comment,
    };

    let message = if step.message.is_empty() {
        match step.ch {
            Some(c) => format!("'{}' is not a bracket; stack unchanged", c),
            None => String::new(),
        }
    } else if step.status.is_error() {
        format!("Error: {}", step.message)
    } else {
        step.message.clone()
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", kind_label(step.kind)),
            Style::default()
                .bg(color)
                .fg(ratatui::style::Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(message, Style::default().fg(color)),
    ]);

    let paragraph = Paragraph::new(line)
        .block(block.border_style(Style::default().fg(color)))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
