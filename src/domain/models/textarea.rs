use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;

pub struct TextArea {}

impl<'a> TextArea {
    pub fn new(title: &str) -> tui_textarea::TextArea<'a> {
        let mut textarea = tui_textarea::TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        TextArea::set_focus(&mut textarea, title, true);

        return textarea;
    }

    /// Focused inputs get a double border and a visible cursor.
    pub fn set_focus(textarea: &mut tui_textarea::TextArea<'a>, title: &str, focused: bool) {
        let mut border_type = BorderType::Plain;
        let mut cursor_style = Style::default();
        if focused {
            border_type = BorderType::Double;
            cursor_style = cursor_style.add_modifier(Modifier::REVERSED);
        }

        textarea.set_cursor_style(cursor_style);
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .title(title.to_string())
                .padding(Padding::new(1, 1, 0, 0)),
        );
    }

    pub fn text(textarea: &tui_textarea::TextArea<'a>) -> String {
        return textarea.lines().join("\n");
    }
}
