//! Contract checks and the case tables they run over.

mod catalog;
mod concurrency;
mod runner;

pub use catalog::CaseCatalog;
pub use concurrency::{ConcurrencyProbe, concurrency_case_name};
pub use runner::{
    BODY_PARAM_CASE, ContractRunner, DEFAULT_MAX_DIST_AU, DEFAULT_WINDOW_DAYS, DefaultCheck,
    EXPECTED_SOURCE, EXPECTED_VERSION, FULLNAME_CASE, IDEMPOTENCE_CASE, LIMIT_CASE,
};
