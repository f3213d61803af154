//! Income/expense chart
//!
//! Plots the transactions of a report as two series against date: income on
//! the upper chart, expense on the lower one. Both share the same date range
//! on the x axis and scale their y axis independently.

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::models::{format_date, Category, Transaction};

use super::terminal::{ChartSession, Tui};

/// Points of both series, one per transaction and keyed by day number
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub income: Vec<(f64, f64)>,
    pub expense: Vec<(f64, f64)>,
    first_date: Option<NaiveDate>,
    last_date: Option<NaiveDate>,
}

impl ChartSeries {
    /// Every transaction contributes a point to both series: its amount to the
    /// series of its own category and zero to the other.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut series = Self::default();

        for txn in transactions {
            let x = day_number(txn.date);
            let amount = txn.amount.as_f64();
            let (income, expense) = match txn.category {
                Category::Income => (amount, 0.0),
                Category::Expense => (0.0, amount),
            };
            series.income.push((x, income));
            series.expense.push((x, expense));

            series.first_date = Some(series.first_date.map_or(txn.date, |d| d.min(txn.date)));
            series.last_date = Some(series.last_date.map_or(txn.date, |d| d.max(txn.date)));
        }

        series
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_empty()
    }

    /// Shared x range; a single day is widened so the axis never collapses
    pub fn x_bounds(&self) -> [f64; 2] {
        match (self.first_date, self.last_date) {
            (Some(first), Some(last)) if first < last => [day_number(first), day_number(last)],
            (Some(first), _) => [day_number(first) - 1.0, day_number(first) + 1.0],
            _ => [0.0, 1.0],
        }
    }

    /// Date labels at the start, middle and end of the x range
    pub fn x_labels(&self) -> Vec<String> {
        let [start, end] = self.x_bounds();
        if self.first_date.is_none() {
            return Vec::new();
        }

        let mid = ((start + end) / 2.0).round();
        [start, mid, end]
            .iter()
            .filter_map(|&x| NaiveDate::from_num_days_from_ce_opt(x as i32))
            .map(format_date)
            .collect()
    }
}

/// Upper y bound for a series, leaving some headroom above the largest value
pub fn y_upper_bound(points: &[(f64, f64)]) -> f64 {
    let max = points.iter().map(|&(_, y)| y).fold(0.0_f64, f64::max);
    if max > 0.0 {
        max * 1.1
    } else {
        1.0
    }
}

fn day_number(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// Draw both charts into the frame
pub fn render(frame: &mut Frame, series: &ChartSeries) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(frame.area());

    let title = Paragraph::new("Income and Expense Over Time  (q to close)")
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(title, rows[0]);

    frame.render_widget(
        series_chart("Income ($)", &series.income, Color::Blue, series),
        rows[1],
    );
    frame.render_widget(
        series_chart("Expense ($)", &series.expense, Color::Red, series),
        rows[2],
    );
}

fn series_chart<'a>(
    name: &'a str,
    points: &'a [(f64, f64)],
    color: Color,
    series: &ChartSeries,
) -> Chart<'a> {
    let dataset = Dataset::default()
        .name(name)
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(points);

    let y_max = y_upper_bound(points);
    let y_labels: Vec<Span<'static>> = [0.0, y_max / 2.0, y_max]
        .iter()
        .map(|v| Span::raw(format!("{:.2}", v)))
        .collect();
    let x_labels: Vec<Span<'static>> = series.x_labels().into_iter().map(Span::raw).collect();

    Chart::new(vec![dataset])
        .block(Block::default().title(name).borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .title("Date")
                .style(Style::default().fg(Color::Gray))
                .bounds(series.x_bounds())
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled(name, Style::default().fg(color)))
                .style(Style::default().fg(color))
                .bounds([0.0, y_max])
                .labels(y_labels),
        )
}

/// Show the chart full-screen until `q` or `Esc` is pressed
pub fn run_chart(transactions: &[Transaction]) -> Result<()> {
    let series = ChartSeries::from_transactions(transactions);

    let mut session = ChartSession::enter()?;
    event_loop(session.terminal(), &series)
}

fn event_loop(terminal: &mut Tui, series: &ChartSeries) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, series))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press
                && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
            {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse_date, Money};
    use ratatui::{backend::TestBackend, Terminal};

    fn txn(d: &str, cents: i64, category: Category) -> Transaction {
        Transaction::new(parse_date(d).unwrap(), Money::from_cents(cents), category, "")
    }

    #[test]
    fn test_series_have_a_point_per_transaction() {
        let series = ChartSeries::from_transactions(&[
            txn("01-01-2024", 10000, Category::Income),
            txn("15-01-2024", 3000, Category::Expense),
        ]);

        let first = day_number(parse_date("01-01-2024").unwrap());
        let second = day_number(parse_date("15-01-2024").unwrap());
        assert_eq!(series.income, vec![(first, 100.0), (second, 0.0)]);
        assert_eq!(series.expense, vec![(first, 0.0), (second, 30.0)]);
        assert_eq!(series.x_bounds(), [first, second]);
    }

    #[test]
    fn test_x_labels() {
        let series = ChartSeries::from_transactions(&[
            txn("01-01-2024", 100, Category::Income),
            txn("31-01-2024", 100, Category::Expense),
        ]);
        assert_eq!(
            series.x_labels(),
            vec!["01-01-2024", "16-01-2024", "31-01-2024"]
        );
    }

    #[test]
    fn test_single_day_range_is_widened() {
        let series = ChartSeries::from_transactions(&[txn("10-01-2024", 100, Category::Income)]);
        let [start, end] = series.x_bounds();
        assert!(start < end);
    }

    #[test]
    fn test_empty_series() {
        let series = ChartSeries::from_transactions(&[]);
        assert!(series.is_empty());
        assert_eq!(series.x_bounds(), [0.0, 1.0]);
        assert!(series.x_labels().is_empty());
    }

    #[test]
    fn test_y_upper_bound() {
        assert_eq!(y_upper_bound(&[]), 1.0);
        assert_eq!(y_upper_bound(&[(0.0, 0.0)]), 1.0);
        assert!((y_upper_bound(&[(0.0, 50.0), (1.0, 100.0)]) - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_render_draws_both_charts() {
        let series = ChartSeries::from_transactions(&[
            txn("01-01-2024", 10000, Category::Income),
            txn("15-01-2024", 3000, Category::Expense),
        ]);

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| render(frame, &series)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Income ($)"));
        assert!(text.contains("Expense ($)"));
    }
}
