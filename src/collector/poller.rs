use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use super::MetricFetcher;
use crate::cache::PageSource;
use crate::catalog::MetricDescriptor;
use crate::discovery::IndexResolver;
use crate::formatter::{HtmlRenderer, MetricFormatter, PageEntry};
use crate::snmp::SnmpTransport;

/// Полный цикл опроса: идентификация линии, пакетный GET, форматирование,
/// HTML.
pub struct LinePoller<T> {
    client: T,
    catalog: &'static [MetricDescriptor],
}

impl<T: SnmpTransport> LinePoller<T> {
    pub fn new(client: T, catalog: &'static [MetricDescriptor]) -> Self {
        Self { client, catalog }
    }

    /// Строки страницы. Ошибка только если не удалось определить линию.
    pub async fn collect_entries(&mut self) -> Result<Vec<PageEntry>> {
        let identity = IndexResolver::resolve_line_identity(&mut self.client).await?;

        let mut entries = Vec::with_capacity(self.catalog.len() + 2);
        entries.push(PageEntry::new("PPP IP Address", identity.ppp_address.as_str()));

        let fetched = MetricFetcher::fetch(&mut self.client, self.catalog, &identity).await;
        if fetched.is_failed() {
            entries.push(PageEntry::new("Status", "SNMP Error"));
        }

        for (desc, oids) in self.catalog.iter().zip(&fetched.oids_by_metric) {
            entries.push(PageEntry::new(
                desc.description,
                MetricFormatter::format_metric(desc, oids, &fetched),
            ));
        }

        Ok(entries)
    }
}

#[async_trait]
impl<T: SnmpTransport> PageSource for LinePoller<T> {
    async fn render_page(&mut self) -> Result<String> {
        let entries = self.collect_entries().await?;
        info!(rows = entries.len(), "Статистика линии обновлена");
        Ok(HtmlRenderer::render(&entries))
    }
}
