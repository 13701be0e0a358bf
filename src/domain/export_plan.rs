use chrono::NaiveDate;
use thiserror::Error;

/// Precondition violations caught before any fetching starts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("country list is empty; at least one country is required")]
    EmptyCountryList,
}

/// Validated input for one export run: an inclusive date range and the
/// countries queried for each date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPlan {
    start: NaiveDate,
    end: NaiveDate,
    countries: Vec<String>,
}

impl ExportPlan {
    /// Build a plan, failing fast on preconditions no amount of iteration
    /// can recover from. A start date after the end date is not one of
    /// them: such a plan simply covers zero dates.
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        countries: Vec<String>,
    ) -> Result<Self, PlanError> {
        if countries.is_empty() {
            return Err(PlanError::EmptyCountryList);
        }

        Ok(Self {
            start,
            end,
            countries,
        })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// Calendar days from start to end, ascending, both endpoints included.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let end = self.end;
        self.start.iter_days().take_while(move |date| *date <= end)
    }

    /// Number of (date, country) pairs the plan covers.
    pub fn pair_count(&self) -> usize {
        self.dates().count() * self.countries.len()
    }
}
