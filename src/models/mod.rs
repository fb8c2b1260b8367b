pub mod raw_vacancy;
pub mod vacancy;
