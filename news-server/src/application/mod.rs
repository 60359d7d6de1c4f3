pub mod news_service;
