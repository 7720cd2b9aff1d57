#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ParticipantsRow {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub email: String,
    pub phone: String,
    /// SQLite `CURRENT_TIMESTAMP` text, UTC, e.g. "2025-06-21 08:06:12".
    pub created_at: String,
}
