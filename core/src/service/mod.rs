pub mod bonus_service;
pub mod dto;
pub mod stats_service;
