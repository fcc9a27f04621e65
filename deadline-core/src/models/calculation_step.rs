use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a visited day advanced the count or was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepAction {
    Counted,
    Excluded,
}

/// The rule that disqualified a day from being counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExclusionReason {
    Weekend,
    FederalHoliday,
}

impl ExclusionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekend => "Weekend",
            Self::FederalHoliday => "Federal Holiday",
        }
    }
}

/// One day visited by the walker.
///
/// Steps are recorded in visit order: chronological for a forward walk,
/// reverse-chronological for a backward walk. `days_remaining` is the
/// counted-days-remaining value after this step was processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationStep {
    pub date: NaiveDate,
    pub action: StepAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<ExclusionReason>,
    pub days_remaining: u32,
}

/// A day skipped during the main walk, paired with the rule that excluded it.
///
/// Days skipped by the rollover adjustment are deliberately not reported
/// here; only the walk itself contributes entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludedDate {
    pub date: NaiveDate,
    pub reason: ExclusionReason,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn exclusion_reason_display_strings() {
        assert_eq!(ExclusionReason::Weekend.as_str(), "Weekend");
        assert_eq!(ExclusionReason::FederalHoliday.as_str(), "Federal Holiday");
    }
}
