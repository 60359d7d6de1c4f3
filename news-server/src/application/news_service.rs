use std::sync::Arc;

use crate::data::news_repository::NewsRepository;
use crate::domain::{error::DomainError, news::News};
use crate::presentation::dto::NewsPayload;
use tracing::instrument;

#[derive(Clone)]
pub struct NewsService<R: NewsRepository + 'static> {
    repo: Arc<R>,
}

impl<R> NewsService<R>
where
    R: NewsRepository + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn get_news(&self, id: i32) -> Result<News, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NewsNotFound(id))
    }

    pub async fn list_news(&self) -> Result<Vec<News>, DomainError> {
        self.repo.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn create_news(&self, payload: NewsPayload) -> Result<News, DomainError> {
        self.repo.create(payload).await
    }

    #[instrument(skip(self))]
    pub async fn update_news(&self, id: i32, payload: NewsPayload) -> Result<News, DomainError> {
        match self.repo.update(id, payload).await {
            Ok(Some(news)) => Ok(news),
            Ok(None) => Err(DomainError::NewsNotFound(id)),
            Err(e) => Err(e),
        }
    }

    // Unlike update, delete of a missing id is not an error.
    #[instrument(skip(self))]
    pub async fn delete_news(&self, id: i32) -> Result<(), DomainError> {
        self.repo.delete(id).await
    }
}
