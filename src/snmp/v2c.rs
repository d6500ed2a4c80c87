use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use snmp2::{AsyncSession, Oid};
use tokio::time::timeout;

use super::oid::{format_oid, oid_arcs, parse_oid};
use super::walk::scan_batch;
use super::{RawValue, SnmpTransport};

/// Сколько строк просим в одном GETBULK
const BULK_MAX_REPETITIONS: u32 = 10;

/// SNMPv2c клиент поверх snmp2::AsyncSession.
///
/// Одна сессия на весь процесс. Каждый запрос ограничен таймаутом,
/// повторов нет.
pub struct SnmpClientV2c {
    session: AsyncSession,
    timeout: Duration,
}

impl SnmpClientV2c {
    pub async fn new(target: &str, community: &[u8], request_timeout: Duration) -> Result<Self> {
        let session = AsyncSession::new_v2c(target, community, 2)
            .await
            .context(format!("Не удалось создать SNMP сессию с {}", target))?;

        Ok(Self {
            session,
            timeout: request_timeout,
        })
    }

    /// Один GETNEXT или GETBULK запрос от `start`
    async fn request_batch(&mut self, start: &Oid<'_>, bulk: bool) -> Result<Vec<(String, RawValue)>> {
        let limit = self.timeout;
        let request = async {
            if bulk {
                self.session
                    .getbulk(&[start], 0, BULK_MAX_REPETITIONS)
                    .await
                    .context("SNMP GETBULK запрос не удался")
            } else {
                self.session
                    .getnext(start)
                    .await
                    .context("SNMP GETNEXT запрос не удался")
            }
        };
        let resp = timeout(limit, request)
            .await
            .context("Таймаут SNMP запроса")??;

        Ok(resp
            .varbinds
            .into_iter()
            .map(|(oid, value)| (format_oid(&oid), RawValue::from(value)))
            .collect())
    }

    async fn walk_subtree(&mut self, prefix: &str, bulk: bool) -> Result<Vec<(String, RawValue)>> {
        let root = oid_arcs(prefix)?;
        let mut current = root.clone();
        let mut results = Vec::new();

        loop {
            let start = Oid::from(&current)
                .map_err(|e| anyhow::anyhow!("Не удалось создать Oid для обхода {}: {:?}", prefix, e))?;
            let batch = self.request_batch(&start, bulk).await?;
            let step = scan_batch(&root, &current, batch)?;

            results.extend(step.items);
            match step.last {
                Some(last) if !step.finished => current = last,
                _ => break,
            }
        }

        Ok(results)
    }
}

#[async_trait]
impl SnmpTransport for SnmpClientV2c {
    async fn get_many(&mut self, oids: &[String]) -> Result<Vec<(String, RawValue)>> {
        let parsed = oids
            .iter()
            .map(|s| parse_oid(s))
            .collect::<Result<Vec<_>>>()?;
        let refs: Vec<&Oid<'_>> = parsed.iter().collect();

        let resp = timeout(self.timeout, self.session.get_many(&refs))
            .await
            .context("Таймаут SNMP GET запроса")?
            .context("SNMP GET запрос не удался")?;

        Ok(resp
            .varbinds
            .into_iter()
            .map(|(oid, value)| (format_oid(&oid), RawValue::from(value)))
            .collect())
    }

    async fn walk(&mut self, prefix: &str) -> Result<Vec<(String, RawValue)>> {
        self.walk_subtree(prefix, false).await
    }

    async fn bulk_walk(&mut self, prefix: &str) -> Result<Vec<(String, RawValue)>> {
        self.walk_subtree(prefix, true).await
    }
}
