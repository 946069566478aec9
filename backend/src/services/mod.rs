pub mod checker_service;
pub mod youtube_service;
