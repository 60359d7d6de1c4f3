use crate::domain::error::DomainError;
use crate::domain::news::News;
use crate::presentation::dto::NewsPayload;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{error, info};

#[async_trait]
pub trait NewsRepository: Send + Sync {
    async fn create(&self, payload: NewsPayload) -> Result<News, DomainError>;
    async fn find_all(&self) -> Result<Vec<News>, DomainError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<News>, DomainError>;
    async fn update(&self, id: i32, payload: NewsPayload) -> Result<Option<News>, DomainError>;
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

#[derive(Clone)]
pub struct PostgresNewsRepository {
    pool: PgPool,
}

impl PostgresNewsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NewsRepository for PostgresNewsRepository {
    async fn create(&self, payload: NewsPayload) -> Result<News, DomainError> {
        let news = sqlx::query_as::<_, News>(
            r#"
            INSERT INTO news (author, title, text, first_hand)
            VALUES ($1, $2, $3, $4)
            RETURNING id, author, title, text, first_hand, create_at
            "#,
        )
        .bind(&payload.author)
        .bind(&payload.title)
        .bind(&payload.text)
        .bind(payload.first_hand)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to create news: {}", e);
            DomainError::Internal(format!("database error: {}", e))
        })?;

        info!(news_id = %news.id, author = %news.author, "news created");
        Ok(news)
    }

    async fn find_all(&self) -> Result<Vec<News>, DomainError> {
        sqlx::query_as::<_, News>(
            r#"
            SELECT id, author, title, text, first_hand, create_at
            FROM news ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("db error while fetching news: {}", e);
            DomainError::Internal(e.to_string())
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<News>, DomainError> {
        sqlx::query_as::<_, News>(
            r#"
            SELECT id, author, title, text, first_hand, create_at
            FROM news WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("db error find_by_id {}: {}", id, e);
            DomainError::Internal(e.to_string())
        })
    }

    async fn update(&self, id: i32, payload: NewsPayload) -> Result<Option<News>, DomainError> {
        // id and create_at stay out of the SET list.
        let news = sqlx::query_as::<_, News>(
            r#"
            UPDATE news
            SET author = $1, title = $2, text = $3, first_hand = $4
            WHERE id = $5
            RETURNING id, author, title, text, first_hand, create_at
            "#,
        )
        .bind(&payload.author)
        .bind(&payload.title)
        .bind(&payload.text)
        .bind(payload.first_hand)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to update news {}: {}", id, e);
            DomainError::Internal(e.to_string())
        })?;

        if news.is_some() {
            info!(news_id = %id, "news updated");
        }

        Ok(news)
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        // Deleting an id that does not exist is still a success.
        sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        info!(news_id = %id, "news deleted");
        Ok(())
    }
}
