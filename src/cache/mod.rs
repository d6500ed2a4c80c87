use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

/// Сколько живет отрисованная страница
pub const CACHE_WINDOW: Duration = Duration::from_millis(500);

/// Источник страницы: полный опрос устройства и отрисовка
#[async_trait]
pub trait PageSource: Send {
    async fn render_page(&mut self) -> Result<String>;
}

/// Последняя отрисованная страница
#[derive(Debug, Clone)]
pub struct CachedPage {
    pub content: Arc<str>,
    pub timestamp: Instant,
}

struct CacheState<S> {
    source: S,
    page: Option<CachedPage>,
}

/// Кэш страницы перед опросом модема.
///
/// Блокировка держится и во время опроса: одновременно к устройству идет
/// не больше одного запроса, остальные ждут и получают его результат.
/// Источник лежит под той же блокировкой, так что SNMP сессию без кэша
/// не достать.
pub struct ResponseCache<S> {
    window: Duration,
    state: Arc<Mutex<CacheState<S>>>,
}

impl<S: PageSource + 'static> ResponseCache<S> {
    pub fn new(source: S, window: Duration) -> Self {
        Self {
            window,
            state: Arc::new(Mutex::new(CacheState { source, page: None })),
        }
    }

    /// Свежая страница из кэша или новый опрос.
    /// Фатальная ошибка опроса не кэшируется.
    ///
    /// Опрос идет в отдельной задаче вместе с блокировкой: если клиент
    /// отключился, опрос все равно доходит до конца и страница сохраняется.
    pub async fn get(&self) -> Result<Arc<str>> {
        let mut state = self.state.clone().lock_owned().await;

        if let Some(page) = &state.page {
            if page.timestamp.elapsed() < self.window {
                debug!("Страница из кэша");
                return Ok(page.content.clone());
            }
        }

        let poll = tokio::spawn(async move {
            let content: Arc<str> = state.source.render_page().await?.into();
            state.page = Some(CachedPage {
                content: content.clone(),
                timestamp: Instant::now(),
            });
            Ok::<_, anyhow::Error>(content)
        });

        poll.await.context("Задача опроса линии завершилась аварийно")?
    }
}
