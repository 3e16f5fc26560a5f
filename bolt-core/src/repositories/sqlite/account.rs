// src/repositories/sqlite/account.rs

use async_trait::async_trait;
use sqlx::{Pool, Sqlite};
use crate::models::TwitchAccount;
use crate::repositories::AccountRepository;
use crate::Error;

pub struct SqliteAccountRepository {
    pool: Pool<Sqlite>,
}

impl SqliteAccountRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }
}

#[async_trait]
impl AccountRepository for SqliteAccountRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<TwitchAccount>, Error> {
        let account = sqlx::query_as::<_, TwitchAccount>(
            r#"
            SELECT name,
                   user_id,
                   display_name,
                   profile_image_url,
                   bio,
                   account_type,
                   created_at,
                   api_updated_at,
                   last_refreshed
            FROM twitch_users
            WHERE name = ?
            "#,
        )
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(account)
    }

    async fn insert(&self, account: &TwitchAccount) -> Result<(), Error> {
        // Two racing first lookups for a name both insert; the later one wins.
        sqlx::query(
            r#"
            INSERT INTO twitch_users (
                name, user_id, display_name, profile_image_url, bio,
                account_type, created_at, api_updated_at, last_refreshed
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(name) DO UPDATE SET
                user_id = excluded.user_id,
                display_name = excluded.display_name,
                profile_image_url = excluded.profile_image_url,
                bio = excluded.bio,
                account_type = excluded.account_type,
                created_at = excluded.created_at,
                api_updated_at = excluded.api_updated_at,
                last_refreshed = MAX(last_refreshed, excluded.last_refreshed)
            "#,
        )
            .bind(&account.name)
            .bind(&account.user_id)
            .bind(&account.display_name)
            .bind(&account.profile_image_url)
            .bind(&account.bio)
            .bind(&account.account_type)
            .bind(account.created_at)
            .bind(account.api_updated_at)
            .bind(account.last_refreshed)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update_by_name(&self, account: &TwitchAccount, name: &str) -> Result<(), Error> {
        // last_refreshed never moves backwards, even if an older write lands last.
        let result = sqlx::query(
            r#"
            UPDATE twitch_users
            SET user_id = ?,
                display_name = ?,
                profile_image_url = ?,
                bio = ?,
                account_type = ?,
                created_at = ?,
                api_updated_at = ?,
                last_refreshed = MAX(last_refreshed, ?)
            WHERE name = ?
            "#,
        )
            .bind(&account.user_id)
            .bind(&account.display_name)
            .bind(&account.profile_image_url)
            .bind(&account.bio)
            .bind(&account.account_type)
            .bind(account.created_at)
            .bind(account.api_updated_at)
            .bind(account.last_refreshed)
            .bind(name)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::Database(sqlx::Error::RowNotFound));
        }
        Ok(())
    }
}
