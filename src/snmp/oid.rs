use anyhow::{Context, Result};
use snmp2::Oid;

/// Компоненты OID в текстовом виде, ведущая точка допускается.
pub fn oid_arcs(s: &str) -> Result<Vec<u64>> {
    let parts: Result<Vec<u64>, _> = s
        .trim()
        .split('.')
        .filter(|p| !p.is_empty())
        .map(|p| p.parse::<u64>())
        .collect();

    parts.context(format!("Невалидный OID: {}", s))
}

/// Парсит OID в текстовом виде, ведущая точка допускается.
pub fn parse_oid(s: &str) -> Result<Oid<'static>> {
    let parts = oid_arcs(s)?;
    Oid::from(&parts).map_err(|e| anyhow::anyhow!("Не удалось создать Oid из '{}': {:?}", s, e))
}

/// Текстовый вид OID с ведущей точкой, в таком виде OID хранятся в каталоге.
pub fn format_oid(oid: &Oid<'_>) -> String {
    format!(".{}", oid)
}

/// Последний компонент OID (индекс строки таблицы).
pub fn last_arc(oid: &str) -> Option<&str> {
    oid.rsplit('.').next().filter(|s| !s.is_empty())
}
