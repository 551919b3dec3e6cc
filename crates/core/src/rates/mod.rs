//! Rate resolution domain

pub mod calculator;
pub mod ports;
pub mod resolver;
pub mod service;

pub use ports::RateRepository;
pub use resolver::{PrecedencePolicy, RateResolver};
pub use service::RateService;
