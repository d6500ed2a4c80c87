use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
pub mod fake;
pub mod oid;
pub mod v2c;
pub mod value;
pub mod walk;

pub use oid::last_arc;
pub use v2c::SnmpClientV2c;
pub use value::RawValue;

/// Транспорт до SNMP агента модема.
///
/// OID передаются и возвращаются в текстовом виде с ведущей точкой.
#[async_trait]
pub trait SnmpTransport: Send {
    /// Один GET запрос на весь список OID.
    /// Агент может не вернуть часть OID, вызывающий код это учитывает.
    async fn get_many(&mut self, oids: &[String]) -> Result<Vec<(String, RawValue)>>;

    /// Обход поддерева через GETNEXT
    async fn walk(&mut self, prefix: &str) -> Result<Vec<(String, RawValue)>>;

    /// Обход поддерева через GETBULK
    async fn bulk_walk(&mut self, prefix: &str) -> Result<Vec<(String, RawValue)>>;
}

pub async fn create_v2c_client(
    target: &str,
    community: &[u8],
    request_timeout: std::time::Duration,
) -> Result<SnmpClientV2c> {
    SnmpClientV2c::new(target, community, request_timeout).await
}
