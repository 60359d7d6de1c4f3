use crate::application::news_service::NewsService;
use crate::data::news_repository::NewsRepository;
use crate::domain::error::DomainError;
use crate::presentation::dto::NewsPayload;
use crate::presentation::middleware::RequestId;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, Scope, web};
use tracing::info;

/// Mounts the /news resource. Generic over the repository so tests can
/// plug in a non-Postgres one.
pub fn scope<R: NewsRepository + 'static>() -> Scope {
    web::scope("/news")
        .route("", web::get().to(list_news::<R>))
        .route("", web::post().to(create_news::<R>))
        .route("/{id}", web::get().to(get_news::<R>))
        .route("/{id}", web::put().to(update_news::<R>))
        .route("/{id}", web::delete().to(delete_news::<R>))
}

async fn list_news<R: NewsRepository + 'static>(
    req: HttpRequest,
    service: web::Data<NewsService<R>>,
) -> Result<HttpResponse, DomainError> {
    let news = service.list_news().await?;

    info!(
        request_id = %request_id(&req),
        total = news.len(),
        "news listed"
    );

    Ok(HttpResponse::Ok().json(news))
}

async fn get_news<R: NewsRepository + 'static>(
    req: HttpRequest,
    service: web::Data<NewsService<R>>,
    path: web::Path<i32>,
) -> Result<HttpResponse, DomainError> {
    let id = path.into_inner();
    let news = service.get_news(id).await?;

    info!(
        request_id = %request_id(&req),
        news_id = %id,
        "news fetched"
    );

    Ok(HttpResponse::Ok().json(news))
}

async fn create_news<R: NewsRepository + 'static>(
    req: HttpRequest,
    service: web::Data<NewsService<R>>,
    payload: web::Json<NewsPayload>,
) -> Result<HttpResponse, DomainError> {
    let news = service.create_news(payload.into_inner()).await?;

    info!(
        request_id = %request_id(&req),
        news_id = %news.id,
        "news created"
    );

    Ok(HttpResponse::Created().json(news))
}

async fn update_news<R: NewsRepository + 'static>(
    req: HttpRequest,
    service: web::Data<NewsService<R>>,
    payload: web::Json<NewsPayload>,
    path: web::Path<i32>,
) -> Result<HttpResponse, DomainError> {
    let id = path.into_inner();
    let news = service.update_news(id, payload.into_inner()).await?;

    info!(
        request_id = %request_id(&req),
        news_id = %id,
        "news updated"
    );

    Ok(HttpResponse::Ok().json(news))
}

async fn delete_news<R: NewsRepository + 'static>(
    req: HttpRequest,
    service: web::Data<NewsService<R>>,
    path: web::Path<i32>,
) -> Result<HttpResponse, DomainError> {
    let id = path.into_inner();
    service.delete_news(id).await?;

    info!(
        request_id = %request_id(&req),
        news_id = %id,
        "news deleted"
    );

    Ok(HttpResponse::Ok().finish())
}

fn request_id(req: &HttpRequest) -> String {
    req.extensions()
        .get::<RequestId>()
        .map(|rid| rid.0.clone())
        .unwrap_or_else(|| "unknown".into())
}
