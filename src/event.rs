use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{self, Mode};
use crate::cleanup_terminal;

fn handle_keys_calculator(keycode: KeyCode, app: &mut app::App) {
    match keycode {
        KeyCode::Enter => {
            app.calculator.enter();
        }
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
            app.calculator.add_char(c);
        }
        KeyCode::Char('c') => {
            app.previous_mode = app.mode;
            app.mode = Mode::Contact;
        }
        KeyCode::Backspace => {
            app.calculator.del_char();
        }
        KeyCode::Tab | KeyCode::Down => {
            app.calculator.next_field();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.calculator.prev_field();
        }
        KeyCode::Esc => {
            app.calculator.dismiss_notice();
        }
        _ => {}
    }
}

fn handle_keys_contact(keycode: KeyCode, app: &mut app::App) {
    match keycode {
        KeyCode::Enter => {
            app.contact.enter();
        }
        KeyCode::Esc => {
            app.mode = Mode::Calculator;
        }
        KeyCode::Backspace => {
            app.contact.del_char();
        }
        KeyCode::Tab | KeyCode::Down => {
            app.contact.next_field();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.contact.prev_field();
        }
        KeyCode::Char(c) => {
            app.contact.add_char(c);
        }
        _ => {}
    }
}

pub fn handle_key_bindings(mode: Mode, key_event: KeyEvent, app: &mut app::App) {
    match (mode, key_event.modifiers, key_event.code) {
        (_, KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            cleanup_terminal();
            std::process::exit(0);
        }
        (Mode::Help, modifiers, keycode) => {
            if modifiers.is_empty()
                && (matches!(
                    keycode,
                    KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
                ))
            {
                app.mode = app.previous_mode;
            }
        }
        (Mode::Calculator, KeyModifiers::NONE, KeyCode::Char('q')) => {
            cleanup_terminal();
            std::process::exit(0);
        }
        (Mode::Calculator, KeyModifiers::NONE, KeyCode::Char('?')) => {
            app.previous_mode = app.mode;
            app.mode = Mode::Help;
        }
        (Mode::Calculator, modifiers, keycode) => {
            if modifiers.is_empty() || modifiers == KeyModifiers::SHIFT {
                handle_keys_calculator(keycode, app)
            }
        }
        (Mode::Contact, modifiers, keycode) => {
            if modifiers.is_empty() || modifiers == KeyModifiers::SHIFT {
                handle_keys_contact(keycode, app)
            }
        }
    }
}
