use std::collections::HashMap;

use crate::snmp::RawValue;

static ABSENT: RawValue = RawValue::Absent;

/// Результат одного пакетного GET по всему каталогу
#[derive(Debug, Clone, Default)]
pub struct FetchedMetrics {
    /// Конкретные OID каждой метрики, в порядке каталога
    pub oids_by_metric: Vec<Vec<String>>,
    /// Значения по OID. Каждый запрошенный OID присутствует, хотя бы как Absent
    pub values: HashMap<String, RawValue>,
    /// Пакетный запрос не удался целиком, причина уже в логе
    pub batch_failed: bool,
}

impl FetchedMetrics {
    pub fn value(&self, oid: &str) -> &RawValue {
        self.values.get(oid).unwrap_or(&ABSENT)
    }

    pub fn is_failed(&self) -> bool {
        self.batch_failed
    }
}
