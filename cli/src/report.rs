use compound_core::{format_amount, format_percent, InvestmentParameters, MonthlyRecord, ProjectionResult};
use tabled::settings::object::{Columns, Rows};
use tabled::settings::{Alignment, Color, Modify, Style};
use tabled::{Table, Tabled};

const CHART_WIDTH: usize = 40;

// Helper struct for Table Row
#[derive(Tabled)]
struct LedgerRow {
    #[tabled(rename = "Month")]
    month: u32,
    #[tabled(rename = "Interest")]
    interest: String,
    #[tabled(rename = "Total Invested")]
    invested: String,
    #[tabled(rename = "Total Interest")]
    total_interest: String,
    #[tabled(rename = "Total Balance")]
    balance: String,
}

impl From<&MonthlyRecord> for LedgerRow {
    fn from(record: &MonthlyRecord) -> Self {
        LedgerRow {
            month: record.month,
            interest: format_amount(record.interest_this_month),
            invested: format_amount(record.cumulative_contributions),
            total_interest: format_amount(record.cumulative_interest),
            balance: format_amount(record.total_balance),
        }
    }
}

pub fn ledger_table<'a>(records: impl IntoIterator<Item = &'a MonthlyRecord>) -> String {
    let rows: Vec<LedgerRow> = records.into_iter().map(LedgerRow::from).collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN)); // Header color

    table.to_string()
}

pub fn headline(result: &ProjectionResult) -> String {
    format!("Final Amount: {}", format_amount(result.final_balance()))
}

pub fn parameters_line(params: &InvestmentParameters, result: &ProjectionResult) -> String {
    format!(
        "Initial {} | Monthly {} | {} per year ({:.4}% per month) | {} years",
        format_amount(params.initial_principal),
        format_amount(params.monthly_contribution),
        format_percent(params.annual_rate),
        result.monthly_rate * 100.0,
        params.years,
    )
}

/// Horizontal bars of the year-end balances; the `●` at each bar's tip
/// traces the growth line.
pub fn year_end_chart(result: &ProjectionResult) -> String {
    let summaries = result.year_summaries();
    let max = summaries.iter().map(|(_, b)| *b).fold(0.0_f64, f64::max);
    let label_width = summaries.len().to_string().len();

    let mut out = String::from("Investment Growth\n");
    for (year, balance) in summaries {
        let len = if max > 0.0 {
            ((balance / max) * CHART_WIDTH as f64).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "Year {:>width$} │{}●{} {}\n",
            year,
            "█".repeat(len),
            " ".repeat(CHART_WIDTH - len.min(CHART_WIDTH)),
            format_amount(balance),
            width = label_width,
        ));
    }
    out
}

pub fn print_report(params: &InvestmentParameters, result: &ProjectionResult, yearly_only: bool, show_chart: bool) {
    println!("\x1b[1;36m{}\x1b[0m", headline(result));
    println!("{}", parameters_line(params, result));
    println!(
        "Invested {} | Interest {}",
        format_amount(result.total_contributions()),
        format_amount(result.total_interest())
    );
    println!();

    if yearly_only {
        println!("{}", ledger_table(result.year_end_records()));
    } else {
        println!("{}", ledger_table(&result.ledger));
    }

    if show_chart {
        println!();
        print!("{}", year_end_chart(result));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compound_core::project;

    fn sample() -> (InvestmentParameters, ProjectionResult) {
        let params = InvestmentParameters::with_rate_percent(1000.0, 200.0, 10.0, 2);
        let result = project(&params).unwrap();
        (params, result)
    }

    #[test]
    fn test_headline_uses_final_year_end_balance() {
        let (_, result) = sample();
        assert_eq!(headline(&result), format!("Final Amount: {}", format_amount(result.year_end_balances[1])));
    }

    #[test]
    fn test_ledger_table_has_a_row_per_month() {
        let (_, result) = sample();
        let table = ledger_table(&result.ledger);
        assert!(table.contains("Total Balance"));
        assert!(table.contains("1,200.00"));
        assert_eq!(table.lines().filter(|l| l.contains("│ 24 ")).count(), 1);
    }

    #[test]
    fn test_yearly_table_only_has_year_ends() {
        let (_, result) = sample();
        let table = ledger_table(result.year_end_records());
        assert!(table.contains("│ 12 "));
        assert!(table.contains("│ 24 "));
        assert!(!table.contains("│ 13 "));
    }

    #[test]
    fn test_chart_has_a_line_per_year() {
        let (_, result) = sample();
        let chart = year_end_chart(&result);
        assert_eq!(chart.lines().filter(|l| l.starts_with("Year")).count(), 2);
        assert!(chart.contains(&format_amount(result.final_balance())));
    }

    #[test]
    fn test_chart_handles_all_zero_balances() {
        let result = project(&InvestmentParameters::new(0.0, 0.0, 0.1, 1)).unwrap();
        let chart = year_end_chart(&result);
        assert!(chart.contains("Year 1 │●"));
    }
}
