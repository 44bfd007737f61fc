//! Finish-date projection
//!
//! Maps a start month and a funding plan to the month in which the plan
//! reaches its target. Pure: no clock, no state.

use crate::models::{Money, MonthYear, SavingsPlan};

/// Project the finish month from the two legacy plan fields.
///
/// A positive `months_to_save` is authoritative. Otherwise a positive
/// `monthly_savings` yields `ceil(target / monthly_savings)` months. With
/// neither, there is no projection.
pub fn compute_finish_date(
    start: MonthYear,
    months_to_save: u32,
    monthly_savings: Money,
    target_amount: Money,
) -> Option<MonthYear> {
    let duration = if months_to_save > 0 {
        months_to_save
    } else if monthly_savings.is_positive() {
        target_amount.installments_of(monthly_savings)?
    } else {
        return None;
    };

    start.finish_after(duration)
}

/// Project the finish month for a resolved plan
pub fn project_finish(start: MonthYear, plan: &SavingsPlan, target_amount: Money) -> Option<MonthYear> {
    compute_finish_date(
        start,
        plan.months_to_save(),
        plan.monthly_savings(),
        target_amount,
    )
}

/// Number of months a plan runs for, counting the start month
pub fn planned_duration(plan: &SavingsPlan, target_amount: Money) -> Option<u32> {
    match plan {
        SavingsPlan::Duration(0) => None,
        SavingsPlan::Duration(months) => Some(*months),
        SavingsPlan::Rate(rate) => target_amount.installments_of(*rate),
    }
}
