use sqlx::SqlitePool;

pub const ROLE_EDITOR: &str = "editor";
pub const ROLE_VIEWER: &str = "viewer";

/// Permission codes carried in the session.
pub const SLIDER_MANAGE: &str = "slider.manage";
pub const MEDIA_MANAGE: &str = "media.manage";
pub const PAGE_MANAGE: &str = "page.manage";

/// Full user row, including the password hash. Only used by login.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub display_name: String,
    pub role: String,
}

pub struct NewUser {
    pub username: String,
    /// Already hashed.
    pub password: String,
    pub display_name: String,
    pub role: String,
}

pub async fn create(pool: &SqlitePool, new_user: &NewUser) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO users (username, password_hash, display_name, role) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(&new_user.username)
    .bind(&new_user.password)
    .bind(&new_user.display_name)
    .bind(&new_user.role)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, username, password_hash AS password, display_name, role \
         FROM users WHERE username = ?1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

/// Permission codes granted by a role.
pub fn permissions_for_role(role: &str) -> Vec<&'static str> {
    match role {
        ROLE_EDITOR => vec![SLIDER_MANAGE, MEDIA_MANAGE, PAGE_MANAGE],
        _ => vec![],
    }
}
