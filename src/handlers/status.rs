use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Html};
use tokio::sync::mpsc;
use tracing::error;

use crate::cache::{PageSource, ResponseCache};

/// Общее состояние обработчиков
pub struct AppState<S> {
    pub cache: Arc<ResponseCache<S>>,
    /// Фатальные ошибки опроса уходят в main, который завершает процесс
    pub fatal: mpsc::Sender<anyhow::Error>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
            fatal: self.fatal.clone(),
        }
    }
}

pub async fn status_page<S: PageSource + 'static>(
    State(state): State<AppState<S>>,
) -> Result<Html<String>, (StatusCode, String)> {
    match state.cache.get().await {
        Ok(page) => Ok(Html(page.to_string())),
        Err(e) => {
            error!("Не удалось определить VDSL линию: {:#}", e);
            let message = format!("{:#}", e);
            // main уже завершается, если канал полон
            let _ = state.fatal.try_send(e);
            Err((StatusCode::SERVICE_UNAVAILABLE, message))
        }
    }
}
