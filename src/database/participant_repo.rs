use sqlx::SqlitePool;

use crate::models::ParticipantsRow;

pub const SQL_CREATE_PARTICIPANTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS participants (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    address TEXT,
    email TEXT NOT NULL UNIQUE,
    phone TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

const SQL_INSERT_PARTICIPANT: &str = r#"
INSERT INTO participants (
    name,
    address,
    email,
    phone
) VALUES (?1, ?2, ?3, ?4)
RETURNING id, name, address, email, phone, created_at
"#;

pub const SQL_LOAD_PARTICIPANT_BY_EMAIL: &str = r#"
SELECT id, name, address, email, phone, created_at
FROM participants
WHERE email = ?1
LIMIT 1
"#;

pub const SQL_COUNT_PARTICIPANTS_WITH_EMAIL: &str = r#"
SELECT COUNT(*)
FROM participants
WHERE email = ?1
"#;

pub const SQL_LIST_PARTICIPANTS: &str = r#"
SELECT id, name, address, email, phone, created_at
FROM participants
ORDER BY created_at DESC, id DESC
"#;

pub struct NewParticipant<'a> {
    pub name: &'a str,
    pub address: Option<&'a str>,
    pub email: &'a str,
    pub phone: &'a str,
}

pub async fn ensure_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::query(SQL_CREATE_PARTICIPANTS_TABLE)
        .execute(pool)
        .await?;
    Ok(())
}

/// Inserts one row. A second insert for the same email fails with the
/// store's unique-constraint error.
pub async fn insert_participant(
    pool: &SqlitePool,
    participant: NewParticipant<'_>,
) -> sqlx::Result<ParticipantsRow> {
    sqlx::query_as::<_, ParticipantsRow>(SQL_INSERT_PARTICIPANT)
        .bind(participant.name)
        .bind(participant.address)
        .bind(participant.email)
        .bind(participant.phone)
        .fetch_one(pool)
        .await
}

pub async fn load_participant_by_email(
    pool: &SqlitePool,
    email: &str,
) -> sqlx::Result<Option<ParticipantsRow>> {
    sqlx::query_as::<_, ParticipantsRow>(SQL_LOAD_PARTICIPANT_BY_EMAIL)
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn count_participants_with_email(pool: &SqlitePool, email: &str) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>(SQL_COUNT_PARTICIPANTS_WITH_EMAIL)
        .bind(email)
        .fetch_one(pool)
        .await
}

pub async fn list_participants(pool: &SqlitePool) -> sqlx::Result<Vec<ParticipantsRow>> {
    sqlx::query_as::<_, ParticipantsRow>(SQL_LIST_PARTICIPANTS)
        .fetch_all(pool)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn memory_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        ensure_schema(&pool).await.unwrap();
        pool
    }

    fn alice() -> NewParticipant<'static> {
        NewParticipant {
            name: "Alice",
            address: Some("12 MG Road, Bengaluru"),
            email: "alice@example.com",
            phone: "+91 98450 00000",
        }
    }

    #[tokio::test]
    async fn ensure_schema_is_idempotent() {
        let pool = memory_pool().await;
        ensure_schema(&pool).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        assert!(list_participants(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn insert_returns_stored_row() {
        let pool = memory_pool().await;
        let row = insert_participant(&pool, alice()).await.unwrap();

        assert!(row.id > 0);
        assert_eq!(row.name, "Alice");
        assert_eq!(row.address.as_deref(), Some("12 MG Road, Bengaluru"));
        assert_eq!(row.email, "alice@example.com");
        assert_eq!(row.phone, "+91 98450 00000");
        assert!(!row.created_at.is_empty());

        let loaded = load_participant_by_email(&pool, "alice@example.com")
            .await
            .unwrap();
        assert_eq!(loaded, Some(row));
    }

    #[tokio::test]
    async fn address_may_be_null() {
        let pool = memory_pool().await;
        let row = insert_participant(
            &pool,
            NewParticipant {
                address: None,
                ..alice()
            },
        )
        .await
        .unwrap();
        assert_eq!(row.address, None);
    }

    #[tokio::test]
    async fn duplicate_email_violates_unique_constraint() {
        let pool = memory_pool().await;
        insert_participant(&pool, alice()).await.unwrap();

        let err = insert_participant(
            &pool,
            NewParticipant {
                name: "Another Alice",
                ..alice()
            },
        )
        .await
        .unwrap_err();

        match err {
            sqlx::Error::Database(db) => assert!(db.is_unique_violation()),
            other => panic!("expected database error, got {other:?}"),
        }
        assert_eq!(
            count_participants_with_email(&pool, "alice@example.com")
                .await
                .unwrap(),
            1
        );
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let pool = memory_pool().await;
        insert_participant(&pool, alice()).await.unwrap();
        insert_participant(
            &pool,
            NewParticipant {
                name: "Bob",
                address: None,
                email: "bob@example.com",
                phone: "555",
            },
        )
        .await
        .unwrap();

        let names: Vec<String> = list_participants(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Bob".to_string(), "Alice".to_string()]);
    }

    #[tokio::test]
    async fn unknown_email_loads_nothing() {
        let pool = memory_pool().await;
        assert_eq!(
            load_participant_by_email(&pool, "nobody@example.com")
                .await
                .unwrap(),
            None
        );
    }
}
