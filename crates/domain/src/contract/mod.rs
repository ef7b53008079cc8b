//! Contract test model.
//!
//! Declarative cases describing what the remote API promises for a given
//! query, plus the outcome types produced when a case is checked.

mod case;
mod ordering;
mod outcome;

pub use case::{
    CaseGroup, ComparisonOperator, FilterCase, FilterValue, InvalidFilterCase, InvalidSortingCase,
    Selector, SortingCase,
};
pub use ordering::first_order_violation;
pub use outcome::{CaseOutcome, CaseStatus, RunReport};
