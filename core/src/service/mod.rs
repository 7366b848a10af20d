pub mod calendar_service;
pub mod dto;
