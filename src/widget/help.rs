use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::text::Spans;
use tui::widgets::{Paragraph, Widget};

use super::block;
use crate::draw::{add_padding, PaddingDirection};
use crate::theme::style;
use crate::THEME;

const TEXT: &str = r#"
Quit: q or <Ctrl+c>
Calculator:
  - 0-9 and '.': edit the selected field
  - <Tab> / <Down>: next field
  - <Shift+Tab> / <Up>: previous field
  - <Enter>: run the calculation
  - <Backspace>: delete
  - <Escape>: dismiss the notice
  - c: open the consultation form
Consultation:
  - type to fill the selected field
  - <Tab> / <Down>: next field
  - <Shift+Tab> / <Up>: previous field
  - <Enter>: submit the request
  - <Escape>: back to the calculator
"#;

pub const HELP_WIDTH: u16 = 42;
pub const HELP_HEIGHT: u16 = 20;

#[derive(Copy, Clone)]
pub struct HelpWidget {}

impl HelpWidget {
    pub fn get_rect(self, area: Rect) -> Rect {
        Rect {
            x: (area.width - HELP_WIDTH) / 2,
            y: (area.height - HELP_HEIGHT) / 2,
            width: HELP_WIDTH,
            height: HELP_HEIGHT,
        }
    }
}

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        block::new(" Help - <ESC> to go back ").render(area, buf);

        let text: Vec<_> = TEXT.lines().map(Spans::from).collect();

        let mut help_area = area;
        help_area = add_padding(help_area, 2, PaddingDirection::Left);
        help_area = add_padding(help_area, 1, PaddingDirection::Top);

        Paragraph::new(text)
            .style(style().fg(THEME.text_normal()))
            .render(help_area, buf);
    }
}
