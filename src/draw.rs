use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use tui::text::{Span, Spans};
use tui::widgets::{Paragraph, Tabs};
use tui::Terminal;

use crate::app::{App, Mode};
use crate::theme::style;
use crate::widget::{self, CalculatorWidget, ContactWidget, HELP_HEIGHT, HELP_WIDTH};
use crate::THEME;

pub fn draw<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) {
    terminal
        .draw(|frame| {
            // chunks[0] - Header
            // chunks[1] - Main widget
            let chunks = Layout::default()
                .constraints([Constraint::Length(3), Constraint::Min(0)].as_ref())
                .split(frame.size());

            frame.render_widget(widget::block::new(" Tabs "), chunks[0]);

            // header[0] - Mode tabs
            // header[1] - (Optional) help icon
            let mut header = if app.hide_help {
                vec![chunks[0]]
            } else {
                Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Min(0), Constraint::Length(10)].as_ref())
                    .split(chunks[0])
            };

            // Draw tabs
            {
                header[0] = add_padding(header[0], 1, PaddingDirection::Top);
                header[0] = add_padding(header[0], 1, PaddingDirection::Left);

                let tabs = vec![Spans::from("Calculator"), Spans::from("Contact")];

                frame.render_widget(
                    Tabs::new(tabs)
                        .select(if app.mode == Mode::Contact { 1 } else { 0 })
                        .style(style().fg(THEME.text_secondary()))
                        .highlight_style(style().fg(THEME.text_primary())),
                    header[0],
                );
            }

            // Draw help icon
            if !app.hide_help {
                header[1] = add_padding(header[1], 1, PaddingDirection::Top);
                header[1] = add_padding(header[1], 2, PaddingDirection::Right);

                frame.render_widget(
                    Paragraph::new(Spans::from(Span::styled(
                        "Help '?'",
                        style().fg(THEME.text_normal()),
                    )))
                    .style(style())
                    .alignment(Alignment::Center),
                    header[1],
                );
            }

            match app.mode {
                Mode::Contact => {
                    frame.render_stateful_widget(ContactWidget {}, chunks[1], &mut app.contact)
                }
                _ => frame.render_stateful_widget(
                    CalculatorWidget {},
                    chunks[1],
                    &mut app.calculator,
                ),
            }
        })
        .unwrap();
}

pub fn draw_help<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) {
    terminal
        .draw(|frame| {
            let mut rect = frame.size();

            if rect.width < HELP_WIDTH || rect.height < HELP_HEIGHT {
                frame.render_widget(
                    Paragraph::new(Spans::from("Increase screen size to display help")),
                    rect,
                );
            } else {
                rect = app.help.get_rect(frame.size());

                frame.render_widget(app.help, rect);
            }
        })
        .unwrap();
}

pub fn add_padding(mut rect: Rect, n: u16, direction: PaddingDirection) -> Rect {
    match direction {
        PaddingDirection::Top => {
            rect.y += n;
            rect.height -= n;
            rect
        }
        PaddingDirection::Bottom => {
            rect.height -= n;
            rect
        }
        PaddingDirection::Left => {
            rect.x += n;
            rect.width -= n;
            rect
        }
        PaddingDirection::Right => {
            rect.width -= n;
            rect
        }
    }
}

#[allow(dead_code)]
pub enum PaddingDirection {
    Top,
    Bottom,
    Left,
    Right,
}
