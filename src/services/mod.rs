//! The analytics engines.
//!
//! Both engines are deterministic pure functions over a canonical record
//! slice: [`audit::run_audit`] produces the per-route profitability and
//! market-position table for a hub, [`forecast::get_forecast`] the combined
//! historical + projected monthly passenger series for one route. Neither
//! holds state between invocations; expected no-data conditions are values,
//! never errors.

pub mod audit;
pub mod forecast;

pub use audit::{hub_summary, run_audit};
pub use forecast::get_forecast;
