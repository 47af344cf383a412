use serde::Serialize;
use serde_json::Value;
use sqlx::SqlitePool;

#[derive(Debug)]
pub enum AuditError {
    Db(sqlx::Error),
    Json(serde_json::Error),
}

impl From<sqlx::Error> for AuditError {
    fn from(err: sqlx::Error) -> Self {
        AuditError::Db(err)
    }
}

impl From<serde_json::Error> for AuditError {
    fn from(err: serde_json::Error) -> Self {
        AuditError::Json(err)
    }
}

impl std::fmt::Display for AuditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditError::Db(e) => write!(f, "Database error: {}", e),
            AuditError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AuditEntry {
    pub id: i64,
    pub user_id: i64,
    pub action: String,
    pub target_type: String,
    pub target_id: i64,
    pub details: String,
    pub created_at: String,
}

impl AuditEntry {
    /// The human-readable `summary` from the details, or the action code.
    pub fn summary(&self) -> String {
        serde_json::from_str::<Value>(&self.details)
            .ok()
            .and_then(|v| v.get("summary").and_then(Value::as_str).map(String::from))
            .unwrap_or_else(|| self.action.clone())
    }
}

/// Record a mutation. Callers ignore the result; failures are logged here.
pub async fn log(
    pool: &SqlitePool,
    user_id: i64,
    action: &str,
    target_type: &str,
    target_id: i64,
    details: Value,
) -> Result<(), AuditError> {
    let result = insert(pool, user_id, action, target_type, target_id, &details).await;
    if let Err(e) = &result {
        log::warn!("Failed to write audit entry {action} for {target_type} {target_id}: {e}");
    }
    result
}

async fn insert(
    pool: &SqlitePool,
    user_id: i64,
    action: &str,
    target_type: &str,
    target_id: i64,
    details: &Value,
) -> Result<(), AuditError> {
    let details = serde_json::to_string(details)?;
    sqlx::query(
        "INSERT INTO audit_entries (user_id, action, target_type, target_id, details) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(user_id)
    .bind(action)
    .bind(target_type)
    .bind(target_id)
    .bind(details)
    .execute(pool)
    .await?;
    Ok(())
}

/// Most recent entries for a target, newest first.
pub async fn find_for_target(
    pool: &SqlitePool,
    target_type: &str,
    target_id: i64,
) -> Result<Vec<AuditEntry>, sqlx::Error> {
    sqlx::query_as::<_, AuditEntry>(
        "SELECT id, user_id, action, target_type, target_id, details, created_at \
         FROM audit_entries WHERE target_type = ?1 AND target_id = ?2 \
         ORDER BY id DESC",
    )
    .bind(target_type)
    .bind(target_id)
    .fetch_all(pool)
    .await
}
