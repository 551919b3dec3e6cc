//! # Tally Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The rate resolution engine (which configured rate applies to an entry)
//! - The time-range statistics aggregator (day/month/year rollups)
//! - Port/adapter interfaces (traits) for the external query layer
//!
//! ## Architecture Principles
//! - Only depends on `tally-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod rates;
pub mod statistics;

// Re-export specific items to avoid ambiguity
pub use rates::calculator::{amount_for, internal_amount_for};
pub use rates::ports::RateRepository;
pub use rates::resolver::{PrecedencePolicy, RateResolver};
pub use rates::RateService;
pub use statistics::aggregator::{aggregate_daily, aggregate_monthly};
pub use statistics::ports::TimesheetRepository;
pub use statistics::splitter::{split, split_entry};
pub use statistics::StatisticsService;
