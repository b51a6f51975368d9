use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::Modifier;
use tui::text::{Span, Spans};
use tui::widgets::{Paragraph, StatefulWidget, Widget, Wrap};

use tracing::debug;

use super::block;
use crate::contact::ContactSubmission;
use crate::service::contact::{ContactService, Update};
use crate::service::Service;
use crate::task::SendOutcome;
use crate::theme::style;
use crate::THEME;

const FIELD_LABELS: [&str; 3] = ["name", "email", "message"];

const NUM_LOADING_TICKS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub enum SendStatus {
    Idle,
    Sending,
    Delivered,
    Failed(String),
}

pub struct ContactState {
    fields: [String; 3],
    selected: usize,
    service: Option<ContactService>,
    status: SendStatus,
    error_msg: Option<String>,
    loading_tick: usize,
}

impl ContactState {
    pub fn new() -> ContactState {
        ContactState {
            fields: Default::default(),
            selected: 0,
            service: None,
            status: SendStatus::Idle,
            error_msg: None,
            loading_tick: 0,
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

    pub fn in_flight(&self) -> bool {
        self.service.is_some()
    }

    /// Submits the form. Ignored while a delivery is in flight, so at most
    /// one request is ever on the wire.
    pub fn enter(&mut self) {
        if self.in_flight() {
            return;
        }

        let submission =
            match ContactSubmission::new(&self.fields[0], &self.fields[1], &self.fields[2]) {
                Ok(submission) => submission,
                Err(e) => {
                    debug!("consultation request rejected: {}", e);
                    self.error_msg = Some(e.to_string());

                    return;
                }
            };

        let credentials = match crate::OPTS.email_credentials() {
            Some(credentials) => credentials,
            None => {
                self.error_msg = Some(String::from(
                    "email delivery is not configured (service id, template id, public key)",
                ));

                return;
            }
        };

        self.error_msg = None;
        self.status = SendStatus::Sending;
        self.loading_tick = 0;
        self.service = Some(ContactService::new(credentials, submission));
    }

    /// Drains the outcome of an in-flight delivery, if any has arrived.
    /// Success clears the form; failure keeps it so the user can resubmit.
    pub fn update(&mut self) {
        let updates = match self.service.as_ref() {
            Some(service) => service.updates(),
            None => return,
        };

        for update in updates {
            match update {
                Update::Outcome(SendOutcome::Delivered) => {
                    self.fields = Default::default();
                    self.selected = 0;
                    self.status = SendStatus::Delivered;
                    self.service = None;
                }
                Update::Outcome(SendOutcome::Failed(reason)) => {
                    self.status = SendStatus::Failed(reason);
                    self.service = None;
                }
            }
        }
    }

    pub fn loading_tick(&mut self) {
        self.loading_tick = (self.loading_tick + 1) % (NUM_LOADING_TICKS + 1);
    }
}

pub struct ContactWidget {}

impl StatefulWidget for ContactWidget {
    type State = ContactState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let mut lines = vec![Spans::default()];

        for (idx, label) in FIELD_LABELS.iter().enumerate() {
            let focused = idx == state.selected;

            lines.push(Spans::from(vec![
                Span::styled(
                    if focused { " > " } else { "   " },
                    style().fg(THEME.text_primary()),
                ),
                Span::styled(format!("{:<9}", label), style().fg(THEME.text_normal())),
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

        lines.push(Spans::default());

        let status_line = if let Some(error_msg) = state.error_msg.as_ref() {
            Span::styled(
                format!("   {}", error_msg),
                style().add_modifier(Modifier::BOLD).fg(THEME.loss()),
            )
        } else {
            match &state.status {
                SendStatus::Idle => Span::styled(
                    "   <Enter> to request a consultation, <Esc> for the calculator",
                    style().fg(THEME.gray()),
                ),
                SendStatus::Sending => Span::styled(
                    format!("   sending{:<4}", ".".repeat(state.loading_tick)),
                    style().fg(THEME.text_primary()),
                ),
                SendStatus::Delivered => Span::styled(
                    "   request sent - the desk will reach out shortly",
                    style().add_modifier(Modifier::BOLD).fg(THEME.profit()),
                ),
                SendStatus::Failed(reason) => Span::styled(
                    format!("   send failed: {} (<Enter> to retry)", reason),
                    style().add_modifier(Modifier::BOLD).fg(THEME.loss()),
                ),
            }
        };

        lines.push(Spans::from(status_line));

        Paragraph::new(lines)
            .block(block::new(" Request a Consultation "))
            .style(style())
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
