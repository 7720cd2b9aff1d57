pub mod page_content;
pub mod registration_service;
