pub mod block;
mod calculator;
mod contact;
mod help;

pub use calculator::{CalculatorState, CalculatorWidget};
pub use contact::{ContactState, ContactWidget};
pub use help::{HelpWidget, HELP_HEIGHT, HELP_WIDTH};
