use tui::buffer::Buffer;
use tui::layout::{Constraint, Direction, Layout, Rect};
use tui::style::Modifier;
use tui::text::{Span, Spans};
use tui::widgets::{Paragraph, StatefulWidget, Widget, Wrap};

use super::block;
use crate::averaging::{self, CalculationResult, CalculatorInput};
use crate::theme::style;
use crate::THEME;

const FIELD_LABELS: [&str; 4] = [
    "initial buy price",
    "quantity held",
    "current price",
    "target price",
];

pub struct CalculatorState {
    fields: [String; 4],
    selected: usize,
    result: Option<CalculationResult>,
    error_msg: Option<String>,
}

impl CalculatorState {
    pub fn new() -> CalculatorState {
        CalculatorState {
            fields: Default::default(),
            selected: 0,
            result: None,
            error_msg: None,
        }
    }

    pub fn add_char(&mut self, c: char) {
        self.fields[self.selected].push(c);
        self.error_msg = None;
    }

    pub fn del_char(&mut self) {
        self.fields[self.selected].pop();
        self.error_msg = None;
    }

    pub fn next_field(&mut self) {
        self.selected = (self.selected + 1) % self.fields.len();
    }

    pub fn prev_field(&mut self) {
        self.selected = (self.selected + self.fields.len() - 1) % self.fields.len();
    }

    pub fn dismiss_notice(&mut self) {
        self.error_msg = None;
    }

    /// Runs the calculation. A rejected input leaves the previous result in
    /// place and raises a notice instead.
    pub fn enter(&mut self) {
        match CalculatorInput::from_fields(
            &self.fields[0],
            &self.fields[1],
            &self.fields[2],
            &self.fields[3],
        ) {
            Ok(input) => {
                self.result = Some(averaging::compute(&input));
                self.error_msg = None;
            }
            Err(e) => {
                self.error_msg = Some(e.to_string());
            }
        }
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }
}

pub struct CalculatorWidget {}

impl StatefulWidget for CalculatorWidget {
    type State = CalculatorState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        // chunks[0] - input form
        // chunks[1] - result pane
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(44), Constraint::Min(0)].as_ref())
            .split(area);

        let mut form = vec![Spans::default()];

        for (idx, label) in FIELD_LABELS.iter().enumerate() {
            let focused = idx == state.selected;

            form.push(Spans::from(vec![
                Span::styled(
                    if focused { " > " } else { "   " },
                    style().fg(THEME.text_primary()),
                ),
                Span::styled(format!("{:<18}", label), style().fg(THEME.text_normal())),
                Span::styled(
                    state.fields[idx].clone(),
                    style()
                        .add_modifier(Modifier::BOLD)
                        .fg(if focused {
                            THEME.highlight_focused()
                        } else {
                            THEME.highlight_unfocused()
                        }),
                ),
            ]));
        }

        form.push(Spans::default());

        if let Some(error_msg) = state.error_msg.as_ref() {
            form.push(Spans::from(Span::styled(
                format!("   {}", error_msg),
                style().add_modifier(Modifier::BOLD).fg(THEME.loss()),
            )));
        } else {
            form.push(Spans::from(Span::styled(
                "   <Enter> to calculate",
                style().fg(THEME.gray()),
            )));
        }

        Paragraph::new(form)
            .block(block::new(" Averaging Calculator "))
            .style(style())
            .wrap(Wrap { trim: false })
            .render(chunks[0], buf);

        let result = match state.result() {
            Some(result) => {
                let labeled = |label: &str, value: String| {
                    Spans::from(vec![
                        Span::styled(format!(" {:<17}", label), style().fg(THEME.text_normal())),
                        Span::styled(
                            value,
                            style()
                                .add_modifier(Modifier::BOLD)
                                .fg(THEME.text_secondary()),
                        ),
                    ])
                };

                vec![
                    Spans::default(),
                    labeled(
                        "add-on to buy",
                        format!("{} units", result.recommended_quantity),
                    ),
                    labeled("add-on cost", format!("{:.0}", result.additional_amount)),
                    labeled(
                        "total investment",
                        format!("{:.0}", result.total_investment),
                    ),
                    labeled("average price", format!("{:.0}", result.average_price)),
                    Spans::from(vec![
                        Span::styled(" expected return  ", style().fg(THEME.text_normal())),
                        Span::styled(
                            format!("{:+.2}%", result.expected_return),
                            style().add_modifier(Modifier::BOLD).fg(
                                if result.expected_return >= 0.0 {
                                    THEME.profit()
                                } else {
                                    THEME.loss()
                                },
                            ),
                        ),
                    ]),
                ]
            }
            None => vec![
                Spans::default(),
                Spans::from(Span::styled(
                    " fill the fields and press <Enter>",
                    style().fg(THEME.gray()),
                )),
            ],
        };

        Paragraph::new(result)
            .block(block::new(" Plan "))
            .style(style())
            .render(chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> CalculatorState {
        let mut state = CalculatorState::new();
        state.fields = [
            "50000".to_string(),
            "10".to_string(),
            "45000".to_string(),
            "48000".to_string(),
        ];
        state
    }

    #[test]
    fn enter_produces_result() {
        let mut state = filled_state();

        state.enter();

        let result = state.result().unwrap();
        assert_eq!(result.recommended_quantity, 11);
        assert!(state.error_msg.is_none());
    }

    #[test]
    fn rejected_input_keeps_previous_result() {
        let mut state = filled_state();
        state.enter();
        let previous = *state.result().unwrap();

        state.fields[2] = "0".to_string();
        state.enter();

        assert!(state.error_msg.is_some());
        assert_eq!(state.result(), Some(&previous));
    }

    #[test]
    fn empty_form_produces_notice_and_no_result() {
        let mut state = CalculatorState::new();

        state.enter();

        assert!(state.result().is_none());
        assert_eq!(
            state.error_msg.as_deref(),
            Some("enter a value for initial buy price")
        );
    }

    #[test]
    fn typing_dismisses_notice() {
        let mut state = CalculatorState::new();
        state.enter();
        assert!(state.error_msg.is_some());

        state.add_char('5');

        assert!(state.error_msg.is_none());
    }

    #[test]
    fn focus_wraps_both_directions() {
        let mut state = CalculatorState::new();

        state.prev_field();
        assert_eq!(state.selected, 3);

        state.next_field();
        assert_eq!(state.selected, 0);
    }
}
