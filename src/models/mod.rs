pub mod participants;

pub use participants::ParticipantsRow;
