use std::collections::HashMap;

use tracing::warn;

pub mod poller;
pub mod types;

pub use poller::LinePoller;
pub use types::FetchedMetrics;

use crate::catalog::{
    MetricDescriptor, TEMPLATE_DOWNSTREAM_UNIT, TEMPLATE_IF_INDEX, TEMPLATE_PREFIX,
    TEMPLATE_UPSTREAM_UNIT,
};
use crate::discovery::LineIdentity;
use crate::snmp::{RawValue, SnmpTransport};

/// Сбор значений метрик каталога одним GET запросом
pub struct MetricFetcher;

impl MetricFetcher {
    /// Подставляет идентификаторы линии в шаблоны метрики
    pub fn expand(desc: &MetricDescriptor, identity: &LineIdentity) -> Vec<String> {
        desc.templates()
            .iter()
            .map(|template| {
                template
                    .replacen(TEMPLATE_PREFIX, desc.oid_prefix, 1)
                    .replacen(TEMPLATE_IF_INDEX, &identity.if_index, 1)
                    .replacen(TEMPLATE_DOWNSTREAM_UNIT, &identity.downstream_unit_id, 1)
                    .replacen(TEMPLATE_UPSTREAM_UNIT, &identity.upstream_unit_id, 1)
            })
            .collect()
    }

    /// Запрашивает все OID каталога разом.
    /// Ошибка запроса не прерывает работу, а сохраняется в результате.
    pub async fn fetch<T: SnmpTransport + ?Sized>(
        client: &mut T,
        catalog: &[MetricDescriptor],
        identity: &LineIdentity,
    ) -> FetchedMetrics {
        let oids_by_metric: Vec<Vec<String>> = catalog
            .iter()
            .map(|desc| Self::expand(desc, identity))
            .collect();

        let query: Vec<String> = oids_by_metric.iter().flatten().cloned().collect();

        // Агент может пропустить OID, у каждого должен быть ключ
        let mut values: HashMap<String, RawValue> = query
            .iter()
            .map(|oid| (oid.clone(), RawValue::Absent))
            .collect();

        let batch_failed = match client.get_many(&query).await {
            Ok(results) => {
                values.extend(results);
                false
            }
            Err(e) => {
                warn!("Ошибка получения OID метрик: {:#}", e);
                true
            }
        };

        FetchedMetrics {
            oids_by_metric,
            values,
            batch_failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::catalog::{CATALOG, MetricShape, oids};
    use crate::snmp::fake::FakeTransport;

    fn identity() -> LineIdentity {
        LineIdentity {
            if_index: "12".to_string(),
            downstream_unit_id: "2".to_string(),
            upstream_unit_id: "1".to_string(),
            ppp_address: "(not found)".to_string(),
        }
    }

    #[test]
    fn test_directional_expands_downstream_first() {
        let desc = MetricDescriptor::integer(oids::FECS, "FECS", MetricShape::Directional, "");
        assert_eq!(
            MetricFetcher::expand(&desc, &identity()),
            vec![
                ".1.3.6.1.2.1.10.251.1.2.2.1.7.12.2".to_string(),
                ".1.3.6.1.2.1.10.251.1.2.2.1.7.12.1".to_string(),
            ]
        );
    }

    #[test]
    fn test_single_expands_to_prefix_and_if_index() {
        let desc = MetricDescriptor::text(oids::DSL_STATUS, "Sync status");
        assert_eq!(
            MetricFetcher::expand(&desc, &identity()),
            vec![".1.3.6.1.2.1.10.94.1.1.2.1.6.12".to_string()]
        );
    }

    #[test]
    fn test_split_column_expansion() {
        let desc = CATALOG
            .iter()
            .find(|d| d.oid_prefix == oids::SNR_MARGIN_DB)
            .unwrap();
        assert_eq!(
            MetricFetcher::expand(desc, &identity()),
            vec![
                ".1.3.6.1.2.1.10.94.1.1.2.1.4.12".to_string(),
                ".1.3.6.1.2.1.10.94.1.1.3.1.4.12".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_issues_one_query_and_keeps_missing_oids() {
        let mut agent = FakeTransport::new()
            .with(".1.3.6.1.2.1.10.251.1.2.2.1.2.12.2", RawValue::Unsigned(48_000_000))
            .with(".1.3.6.1.2.1.10.251.1.2.2.1.2.12.1", RawValue::Unsigned(9_000_000));
        let calls = agent.get_calls.clone();

        let fetched = MetricFetcher::fetch(&mut agent, &CATALOG, &identity()).await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!fetched.is_failed());
        assert_eq!(fetched.oids_by_metric.len(), CATALOG.len());
        assert_eq!(
            fetched.value(".1.3.6.1.2.1.10.251.1.2.2.1.2.12.2"),
            &RawValue::Unsigned(48_000_000)
        );
        // Не вернулся от агента, но ключ есть
        assert_eq!(
            fetched.values.get(".1.3.6.1.2.1.10.251.1.2.2.1.7.12.2"),
            Some(&RawValue::Absent)
        );
        let expected: usize = CATALOG.iter().map(|d| d.templates().len()).sum();
        assert_eq!(fetched.values.len(), expected);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_recorded() {
        let mut agent = FakeTransport::new();
        agent.fail_get = true;

        let fetched = MetricFetcher::fetch(&mut agent, &CATALOG, &identity()).await;

        assert!(fetched.is_failed());
        assert!(fetched.values.values().all(|v| *v == RawValue::Absent));
    }

    #[tokio::test]
    async fn test_next_fetch_after_failure_is_clean() {
        let mut agent = FakeTransport::new()
            .with(".1.3.6.1.2.1.10.94.1.1.2.1.6.12", RawValue::ByteString(b"Showtime".to_vec()));
        agent.fail_get = true;
        let failed = MetricFetcher::fetch(&mut agent, &CATALOG, &identity()).await;

        agent.fail_get = false;
        let fetched = MetricFetcher::fetch(&mut agent, &CATALOG, &identity()).await;

        assert!(failed.batch_failed);
        assert!(!fetched.batch_failed);
        assert_eq!(
            fetched.value(".1.3.6.1.2.1.10.94.1.1.2.1.6.12"),
            &RawValue::ByteString(b"Showtime".to_vec())
        );
    }
}
