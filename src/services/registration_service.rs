use serde::Deserialize;
use sqlx::SqlitePool;

use crate::database::participant_repo::{self, NewParticipant};
use crate::error::RegistrationError;
use crate::models::ParticipantsRow;

/// Fields posted by the join-online modal. `name`, `email` and `phone`
/// are required by the form extractor; `address` may be absent.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    pub email: String,
    pub phone: String,
}

pub async fn register_participant(
    pool: &SqlitePool,
    form: &RegistrationForm,
) -> Result<ParticipantsRow, RegistrationError> {
    let row = participant_repo::insert_participant(
        pool,
        NewParticipant {
            name: &form.name,
            address: normalize_address(form.address.as_deref()),
            email: &form.email,
            phone: &form.phone,
        },
    )
    .await?;
    Ok(row)
}

fn normalize_address(raw: Option<&str>) -> Option<&str> {
    raw.filter(|a| !a.trim().is_empty())
}
