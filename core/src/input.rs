use std::collections::HashMap;

use crate::error::ProjectionError;
use crate::model::{InvestmentParameters, MAX_YEARS};

/// The four values a user supplies, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Principal,
    Contribution,
    RatePercent,
    Years,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Principal, Field::Contribution, Field::RatePercent, Field::Years];

    /// Key accepted in `key:value` arguments.
    pub fn key(self) -> &'static str {
        match self {
            Field::Principal => "principal",
            Field::Contribution => "contribution",
            Field::RatePercent => "rate",
            Field::Years => "years",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Principal => "Initial Amount",
            Field::Contribution => "Monthly Contribution",
            Field::RatePercent => "Interest Rate (% per year)",
            Field::Years => "Period (years)",
        }
    }

    /// Increment used when stepping the value with the keyboard.
    pub fn step(self) -> f64 {
        match self {
            Field::Principal => 100.0,
            Field::Contribution => 50.0,
            Field::RatePercent => 0.1,
            Field::Years => 1.0,
        }
    }

    pub fn min(self) -> f64 {
        match self {
            Field::Years => 1.0,
            _ => 0.0,
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Current value of this field in `params`, in the unit the user types.
    pub fn value_of(self, params: &InvestmentParameters) -> f64 {
        match self {
            Field::Principal => params.initial_principal,
            Field::Contribution => params.monthly_contribution,
            Field::RatePercent => params.rate_percent(),
            Field::Years => params.years as f64,
        }
    }

    /// Render a value the way the form shows it.
    pub fn display(self, value: f64) -> String {
        match self {
            Field::Years => format!("{}", value.round() as u64),
            _ => format!("{:.2}", value),
        }
    }

    /// Parse `text` for this field and store it into `params`.
    pub fn apply(self, params: &mut InvestmentParameters, text: &str) -> Result<(), ProjectionError> {
        match self {
            Field::Principal => params.initial_principal = parse_amount(self, text)?,
            Field::Contribution => params.monthly_contribution = parse_amount(self, text)?,
            Field::RatePercent => params.annual_rate = parse_amount(self, text)? / 100.0,
            Field::Years => params.years = parse_years(text)?,
        }
        Ok(())
    }

    /// Step the value up or down by [`Field::step`], never going below [`Field::min`].
    pub fn stepped(self, value: f64, up: bool) -> f64 {
        let next = if up { value + self.step() } else { value - self.step() };
        // keep 0.1 steps from drifting into 10.299999
        let next = (next * 100.0).round() / 100.0;
        next.max(self.min())
    }
}

#[derive(Debug, PartialEq)]
pub struct ParsedInput {
    pub metadata: HashMap<String, String>,
    pub rest: Vec<String>,
}

pub fn parse_args(args: &[String]) -> ParsedInput {
    let mut rest = Vec::new();
    let mut metadata = HashMap::new();

    for arg in args {
        if let Some((key, value)) = arg.split_once(':') {
            if !key.is_empty() {
                metadata.insert(key.to_string(), value.to_string());
                continue;
            }
        }
        rest.push(arg.clone());
    }

    ParsedInput { metadata, rest }
}

pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String, ProjectionError> {
    // 1. Exact match
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    // 2. Prefix match
    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(ProjectionError::invalid("key", format!("Unknown key: '{}'", key))),
        _ => Err(ProjectionError::invalid(
            "key",
            format!("Ambiguous key: '{}' matches {:?}", key, matches),
        )),
    }
}

/// Apply `key:value` tokens on top of `base`. Keys may be abbreviated to any
/// unambiguous prefix (`p:1000 c:200 r:10 y:5`). The rate is given in percent.
pub fn parse_parameters(args: &[String], base: InvestmentParameters) -> Result<InvestmentParameters, ProjectionError> {
    let parsed = parse_args(args);
    if let Some(stray) = parsed.rest.first() {
        return Err(ProjectionError::invalid(
            "argument",
            format!("expected key:value, got '{}'", stray),
        ));
    }

    let known_keys: Vec<&str> = Field::ALL.iter().map(|f| f.key()).collect();
    let mut params = base;

    for (key, value) in parsed.metadata {
        let full_key = expand_key(&key, &known_keys)?;
        if let Some(field) = Field::from_key(&full_key) {
            field.apply(&mut params, &value)?;
        }
    }

    Ok(params)
}

fn parse_amount(field: Field, text: &str) -> Result<f64, ProjectionError> {
    let not_a_number = || ProjectionError::invalid(field.key(), format!("'{}' is not a number", text.trim()));

    let cleaned = strip_thousands(text.trim().trim_end_matches('%')).ok_or_else(not_a_number)?;
    let value: f64 = cleaned.parse().map_err(|_| not_a_number())?;

    if !value.is_finite() {
        return Err(ProjectionError::invalid(field.key(), format!("'{}' is not a finite number", text.trim())));
    }
    if value < field.min() {
        return Err(ProjectionError::invalid(
            field.key(),
            format!("must be at least {}", field.display(field.min())),
        ));
    }
    Ok(value)
}

/// Remove thousands separators, accepting them only where `format_amount`
/// would place them (`1,234,567.89`). Returns `None` for misplaced commas.
fn strip_thousands(text: &str) -> Option<String> {
    if !text.contains(',') {
        return Some(text.to_string());
    }

    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text, None),
    };
    if frac_part.is_some_and(|f| f.contains(',')) {
        return None;
    }

    let digits = int_part.strip_prefix(['+', '-']).unwrap_or(int_part);
    let mut groups = digits.split(',');
    let lead = groups.next()?;
    if lead.is_empty() || lead.len() > 3 || !lead.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if !groups.all(|g| g.len() == 3 && g.chars().all(|c| c.is_ascii_digit())) {
        return None;
    }

    Some(text.replace(',', ""))
}

fn parse_years(text: &str) -> Result<u32, ProjectionError> {
    let years: u32 = text
        .trim()
        .parse()
        .map_err(|_| ProjectionError::invalid("years", format!("'{}' is not a whole number of years", text.trim())))?;
    if years < 1 {
        return Err(ProjectionError::invalid("years", "must be at least 1"));
    }
    if years > MAX_YEARS {
        return Err(ProjectionError::invalid("years", format!("must be at most {}", MAX_YEARS)));
    }
    Ok(years)
}
