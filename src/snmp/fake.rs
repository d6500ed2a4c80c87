//! Скриптованный агент для тестов.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, bail};
use async_trait::async_trait;

use super::{RawValue, SnmpTransport};

#[derive(Default)]
pub struct FakeTransport {
    entries: Vec<(String, RawValue)>,
    pub fail_get: bool,
    /// Номер вызова get_many (с 1), начиная с которого запросы падают
    pub fail_get_from_call: Option<usize>,
    pub fail_walk: bool,
    pub fail_bulk_walk: bool,
    /// Сколько раз вызывали get_many, счетчик общий с клонами Arc
    pub get_calls: Arc<AtomicUsize>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, oid: &str, value: RawValue) -> Self {
        self.set(oid, value);
        self
    }

    pub fn set(&mut self, oid: &str, value: RawValue) {
        match self.entries.iter_mut().find(|(o, _)| o == oid) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((oid.to_string(), value)),
        }
    }

    fn subtree(&self, prefix: &str) -> Vec<(String, RawValue)> {
        let stem = format!("{}.", prefix);
        self.entries
            .iter()
            .filter(|(oid, _)| oid.starts_with(&stem))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl SnmpTransport for FakeTransport {
    async fn get_many(&mut self, oids: &[String]) -> Result<Vec<(String, RawValue)>> {
        let call = self.get_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_get || self.fail_get_from_call.is_some_and(|from| call >= from) {
            bail!("request timeout");
        }

        // Неизвестные OID просто не попадают в ответ
        Ok(oids
            .iter()
            .filter_map(|oid| {
                self.entries
                    .iter()
                    .find(|(o, _)| o == oid)
                    .cloned()
            })
            .collect())
    }

    async fn walk(&mut self, prefix: &str) -> Result<Vec<(String, RawValue)>> {
        if self.fail_walk {
            bail!("walk failed");
        }
        Ok(self.subtree(prefix))
    }

    async fn bulk_walk(&mut self, prefix: &str) -> Result<Vec<(String, RawValue)>> {
        if self.fail_bulk_walk {
            bail!("bulk walk failed");
        }
        Ok(self.subtree(prefix))
    }
}
