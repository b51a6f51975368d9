use crate::widget::{CalculatorState, ContactState, HelpWidget};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Mode {
    Calculator,
    Contact,
    Help,
}

pub struct App {
    pub mode: Mode,
    pub previous_mode: Mode,
    pub calculator: CalculatorState,
    pub contact: ContactState,
    pub help: HelpWidget,
    pub hide_help: bool,
}
