#[cfg(test)]
#[path = "bubble_list_test.rs"]
mod tests;

use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::Bubble;
use crate::domain::models::Message;

/// Rendered bubbles for the whole chat log. Messages never change once
/// appended, so lines are cached per message and only rebuilt when the width
/// changes or the log is cleared.
#[derive(Default)]
pub struct BubbleList {
    cache: Vec<Vec<Line<'static>>>,
    line_width: usize,
}

impl BubbleList {
    pub fn set_messages(&mut self, messages: &[Message], line_width: usize) {
        if self.line_width != line_width || messages.len() < self.cache.len() {
            self.cache.clear();
            self.line_width = line_width;
        }

        for message in messages.iter().skip(self.cache.len()) {
            self.cache
                .push(Bubble::new(message, line_width).as_lines());
        }
    }

    pub fn len(&self) -> usize {
        return self.cache.iter().map(|lines| return lines.len()).sum();
    }

    pub fn is_empty(&self) -> bool {
        return self.cache.is_empty();
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect, scroll: u16) {
        let lines = self
            .cache
            .iter()
            .flat_map(|lines| return lines.to_owned())
            .collect::<Vec<Line>>();

        frame.render_widget(
            Paragraph::new(lines)
                .block(Block::default())
                .scroll((scroll, 0)),
            rect,
        );
    }
}
