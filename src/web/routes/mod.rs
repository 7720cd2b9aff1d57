pub mod modal;
pub mod pages;
pub mod participants;
