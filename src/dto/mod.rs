pub mod hh_dto;
pub mod search_dto;
