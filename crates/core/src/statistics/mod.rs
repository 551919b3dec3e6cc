//! Time-range statistics domain

pub mod aggregator;
pub mod ports;
pub mod service;
pub mod splitter;

pub use ports::TimesheetRepository;
pub use service::StatisticsService;
