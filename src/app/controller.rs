use log::info;

use crate::app::{commands::ActiveRates, state::CalculatorState};
use crate::catalog::Section;
use crate::error::Result;
use crate::ui::{run_calculator, run_catalog, run_main_menu, MenuAction};

/// Coordinates the main menu, the calculator and the catalog screens.
///
/// The calculator state lives here so selections survive leaving and
/// re-entering the calculator.
pub struct AppController {
    rates_label: String,
    calculator: CalculatorState,
}

impl AppController {
    pub fn new(rates: ActiveRates) -> Self {
        Self {
            rates_label: rates.label,
            calculator: CalculatorState::new(rates.card),
        }
    }

    pub fn run(mut self) -> Result<()> {
        loop {
            match run_main_menu(&self.rates_label)? {
                MenuAction::Estimate => self.open_calculator()?,
                MenuAction::Services => run_catalog(Section::Services)?,
                MenuAction::Technologies => run_catalog(Section::Technologies)?,
                MenuAction::CaseStudies => run_catalog(Section::CaseStudies)?,
                MenuAction::Clients => run_catalog(Section::Clients)?,
                MenuAction::Exit => return Ok(()),
            }
        }
    }

    fn open_calculator(&mut self) -> Result<()> {
        // Errors leave the stored state untouched.
        let state = run_calculator(self.calculator.clone())?;
        let result = state.result();
        info!(
            "Calculator closed at {} {} over {} weeks",
            result.budget,
            state.rate_card().currency,
            result.duration_weeks
        );
        self.calculator = state;
        Ok(())
    }
}
