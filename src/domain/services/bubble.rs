#[cfg(test)]
#[path = "bubble_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::domain::models::Message;
use crate::domain::models::Role;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum BubbleAlignment {
    Left,
    Right,
}

pub struct BubbleConfig {
    /// left border + left padding + right padding + right border + scrollbar.
    pub border_elements_length: usize,
    pub outer_padding_percentage: f32,
}

/// A chat message drawn as a bordered box labelled with its author. Teacher
/// messages sit on the right, simulated replies on the left.
pub struct Bubble<'a> {
    alignment: BubbleAlignment,
    message: &'a Message,
    window_max_width: usize,
}

impl<'a> Bubble<'a> {
    pub fn new(message: &'a Message, window_max_width: usize) -> Bubble<'a> {
        let mut alignment = BubbleAlignment::Left;
        if message.role == Role::User {
            alignment = BubbleAlignment::Right;
        }

        return Bubble {
            alignment,
            message,
            window_max_width,
        };
    }

    pub fn style_config() -> BubbleConfig {
        return BubbleConfig {
            border_elements_length: 5,
            outer_padding_percentage: 0.04,
        };
    }

    fn text_width(&self) -> usize {
        let config = Bubble::style_config();
        let outer_padding =
            ((self.window_max_width as f32) * config.outer_padding_percentage).ceil() as usize;

        return self
            .window_max_width
            .saturating_sub(config.border_elements_length + outer_padding)
            .max(1);
    }

    pub fn as_lines(&self) -> Vec<Line<'static>> {
        let username = self.message.role.to_string();
        let message_lines = self.message.as_string_lines(self.text_width());
        let max_line_length = message_lines
            .iter()
            .map(|line| return line.chars().count())
            .chain([username.chars().count()])
            .max()
            .unwrap_or(0);

        // Borders and inner padding add four columns around the text.
        let bubble_width = max_line_length + 4;
        let outer_fill = " ".repeat(self.window_max_width.saturating_sub(bubble_width));

        let top_bar = format!(
            "╭{username}{}╮",
            "─".repeat(max_line_length + 2 - username.chars().count())
        );
        let bottom_bar = format!("╰{}╯", "─".repeat(max_line_length + 2));

        let mut lines = vec![self.pad(vec![self.highlight_span(top_bar)], &outer_fill)];
        for line in message_lines {
            let fill = " ".repeat(max_line_length - line.chars().count());
            let spans = vec![
                self.highlight_span("│ ".to_string()),
                Span::from(line),
                self.highlight_span(format!("{fill} │")),
            ];
            lines.push(self.pad(spans, &outer_fill));
        }
        lines.push(self.pad(vec![self.highlight_span(bottom_bar)], &outer_fill));

        return lines;
    }

    fn pad(&self, mut spans: Vec<Span<'static>>, outer_fill: &str) -> Line<'static> {
        if self.alignment == BubbleAlignment::Left {
            spans.push(Span::from(outer_fill.to_string()));
            return Line::from(spans);
        }

        let mut res = vec![Span::from(outer_fill.to_string())];
        res.extend(spans);
        return Line::from(res);
    }

    fn highlight_span(&self, text: String) -> Span<'static> {
        if self.message.role == Role::Assistant {
            return Span::styled(
                text,
                Style {
                    fg: Some(Color::Rgb(86, 156, 214)),
                    ..Style::default()
                },
            );
        }

        return Span::from(text);
    }
}
