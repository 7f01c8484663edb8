//! PostgreSQL Repository Implementations
//!
//! Timestamps are stored as `TIMESTAMP` without time zone and are UTC by
//! convention; rows are normalised to `DateTime<Utc>` on read.
//!
//! Every query borrows a pooled connection for its own duration only, so the
//! connection goes back to the pool on every exit path.

use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::PgPool;

use crate::domain::entity::{session::Session, user::User};
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::{SessionId, UserId, email::Email};
use crate::error::AuthResult;

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Round-trip to the database, for readiness checks
    pub async fn ping(&self) -> AuthResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl SessionRepository for PgAuthRepository {
    async fn find_session_by_token(&self, token: &str) -> AuthResult<Option<Session>> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT
                id,
                token,
                user_id,
                expires_at,
                ip_address,
                user_agent,
                created_at,
                updated_at
            FROM sessions
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SessionRow::into_session))
    }

    async fn find_user_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                name,
                email,
                email_verified,
                image,
                created_at,
                updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }
}

// ============================================================================
// Row types
// ============================================================================

fn utc(naive: NaiveDateTime) -> DateTime<Utc> {
    naive.and_utc()
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    id: String,
    token: String,
    user_id: String,
    expires_at: NaiveDateTime,
    ip_address: Option<String>,
    user_agent: Option<String>,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl SessionRow {
    fn into_session(self) -> Session {
        Session {
            id: SessionId::new(self.id),
            token: self.token,
            user_id: UserId::new(self.user_id),
            expires_at: utc(self.expires_at),
            ip_address: self.ip_address,
            user_agent: self.user_agent,
            created_at: utc(self.created_at),
            updated_at: utc(self.updated_at),
        }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    email_verified: bool,
    image: Option<String>,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: UserId::new(self.id),
            name: self.name,
            email: Email::from_db(self.email),
            email_verified: self.email_verified,
            image: self.image,
            created_at: utc(self.created_at),
            updated_at: utc(self.updated_at),
        }
    }
}
