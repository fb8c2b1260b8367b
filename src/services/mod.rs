pub mod aggregator;
pub mod fetcher;
pub mod habr_fetcher;
pub mod hh_fetcher;
pub mod normalizer;
pub mod salary;
pub mod sink;
