//! Terminal chart view
//!
//! Full-screen ratatui rendering of a report's transactions as income and
//! expense series. Callers go through [`ChartRenderer`] so the interactive
//! menu can run without a real terminal.

pub mod chart;
pub mod terminal;

pub use chart::{run_chart, ChartSeries};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;

/// Something that can display transactions as a chart
pub trait ChartRenderer {
    fn render(&mut self, transactions: &[Transaction]) -> LedgerResult<()>;
}

/// Draws the chart on the current terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalChart;

impl ChartRenderer for TerminalChart {
    fn render(&mut self, transactions: &[Transaction]) -> LedgerResult<()> {
        run_chart(transactions).map_err(|e| LedgerError::Tui(e.to_string()))
    }
}
