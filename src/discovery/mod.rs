use anyhow::{Context, Result, anyhow, bail};
use tracing::debug;

use crate::catalog::oids::{
    DOWNSTREAM_TERMINATION_UNIT, IF_TYPE, IP_ADDRESS_IF_INDEX, TERMINATION_UNIT,
    UPSTREAM_TERMINATION_UNIT, VDSL2_CHANNEL_TYPE,
};
use crate::snmp::{SnmpTransport, last_arc};

/// Идентификаторы линии, заново определяются в каждом цикле опроса
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIdentity {
    pub if_index: String,
    pub downstream_unit_id: String,
    pub upstream_unit_id: String,
    /// IP адрес PPP или "(not found)" / "(error: ...)"
    pub ppp_address: String,
}

/// Номера терминальных блоков для обоих направлений
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminationUnits {
    pub upstream: String,
    pub downstream: String,
}

/// Поиск индексов VDSL линии на устройстве
pub struct IndexResolver;

impl IndexResolver {
    /// ifIndex первого интерфейса с ifType = vdsl2.
    /// Без него опрос невозможен, поэтому ошибка здесь фатальна.
    pub async fn resolve_if_index<T: SnmpTransport + ?Sized>(client: &mut T) -> Result<String> {
        let if_types = client
            .bulk_walk(IF_TYPE)
            .await
            .context("Не удалось обойти таблицу ifType")?;

        if_types
            .iter()
            .find(|(_, value)| value.as_i64() == Some(VDSL2_CHANNEL_TYPE))
            .and_then(|(oid, _)| last_arc(oid))
            .map(str::to_string)
            .ok_or_else(|| anyhow!("Не найден интерфейс vdsl2 (ifType {})", VDSL2_CHANNEL_TYPE))
    }

    /// Номера терминальных блоков upstream/downstream одним GET запросом
    pub async fn resolve_termination_units<T: SnmpTransport + ?Sized>(
        client: &mut T,
        if_index: &str,
    ) -> Result<TerminationUnits> {
        let upstream_oid = format!("{}.{}.{}", TERMINATION_UNIT, if_index, UPSTREAM_TERMINATION_UNIT);
        let downstream_oid = format!(
            "{}.{}.{}",
            TERMINATION_UNIT, if_index, DOWNSTREAM_TERMINATION_UNIT
        );

        let results = client
            .get_many(&[upstream_oid.clone(), downstream_oid.clone()])
            .await
            .context("Не удалось получить терминальные блоки downstream/upstream")?;

        let mut upstream = None;
        let mut downstream = None;

        for (oid, value) in &results {
            let unit = value.as_i64().ok_or_else(|| {
                anyhow!(
                    "Терминальный блок {}: неожиданный тип {}",
                    oid,
                    value.type_name()
                )
            })?;

            if *oid == upstream_oid {
                upstream = Some(unit.to_string());
            } else if *oid == downstream_oid {
                downstream = Some(unit.to_string());
            }
        }

        match (upstream, downstream) {
            (Some(upstream), Some(downstream)) => Ok(TerminationUnits {
                upstream,
                downstream,
            }),
            _ => bail!("Агент не вернул оба терминальных блока для ifIndex {}", if_index),
        }
    }

    /// IP адрес, привязанный к ifIndex линии.
    /// Адрес только для отображения, поэтому ошибки не фатальны.
    pub async fn resolve_ppp_address<T: SnmpTransport + ?Sized>(client: &mut T, if_index: &str) -> String {
        let entries = match client.walk(IP_ADDRESS_IF_INDEX).await {
            Ok(entries) => entries,
            Err(e) => return format!("(error: {:#})", e),
        };

        let stem = format!("{}.", IP_ADDRESS_IF_INDEX);
        for (oid, value) in &entries {
            let Some(found) = value.as_i64() else {
                continue;
            };

            if found.to_string() == if_index {
                return oid.strip_prefix(&stem).unwrap_or(oid).to_string();
            }
        }

        "(not found)".to_string()
    }

    /// Полная идентификация линии: ifIndex, блоки, PPP адрес
    pub async fn resolve_line_identity<T: SnmpTransport + ?Sized>(client: &mut T) -> Result<LineIdentity> {
        let if_index = Self::resolve_if_index(client).await?;
        let units = Self::resolve_termination_units(client, &if_index).await?;
        let ppp_address = Self::resolve_ppp_address(client, &if_index).await;

        debug!(
            if_index = %if_index,
            downstream = %units.downstream,
            upstream = %units.upstream,
            ppp = %ppp_address,
            "Линия определена"
        );

        Ok(LineIdentity {
            if_index,
            downstream_unit_id: units.downstream,
            upstream_unit_id: units.upstream,
            ppp_address,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snmp::RawValue;
    use crate::snmp::fake::FakeTransport;

    fn vdsl_agent() -> FakeTransport {
        FakeTransport::new()
            .with(".1.3.6.1.2.1.2.2.1.3.1", RawValue::Integer(24))
            .with(".1.3.6.1.2.1.2.2.1.3.4", RawValue::Integer(6))
            .with(".1.3.6.1.2.1.2.2.1.3.12", RawValue::Integer(251))
            .with(".1.3.6.1.2.1.2.2.1.3.13", RawValue::Integer(251))
            .with(".1.3.6.1.2.1.10.251.1.2.2.1.1.12.1", RawValue::Integer(1))
            .with(".1.3.6.1.2.1.10.251.1.2.2.1.1.12.2", RawValue::Integer(2))
            .with(".1.3.6.1.2.1.4.20.1.2.127.0.0.1", RawValue::Integer(1))
            .with(".1.3.6.1.2.1.4.20.1.2.93.184.216.34", RawValue::Integer(12))
    }

    #[tokio::test]
    async fn test_if_index_is_first_vdsl2_entry() {
        let mut agent = vdsl_agent();
        let if_index = IndexResolver::resolve_if_index(&mut agent).await.unwrap();
        assert_eq!(if_index, "12");
    }

    #[tokio::test]
    async fn test_if_index_missing_is_error() {
        let mut agent = FakeTransport::new().with(".1.3.6.1.2.1.2.2.1.3.1", RawValue::Integer(6));
        assert!(IndexResolver::resolve_if_index(&mut agent).await.is_err());
    }

    #[tokio::test]
    async fn test_if_index_walk_failure_is_error() {
        let mut agent = vdsl_agent();
        agent.fail_bulk_walk = true;
        assert!(IndexResolver::resolve_if_index(&mut agent).await.is_err());
    }

    #[tokio::test]
    async fn test_termination_units() {
        let mut agent = vdsl_agent();
        let units = IndexResolver::resolve_termination_units(&mut agent, "12")
            .await
            .unwrap();
        assert_eq!(units.upstream, "1");
        assert_eq!(units.downstream, "2");
    }

    #[tokio::test]
    async fn test_termination_unit_wrong_type_is_error() {
        let mut agent = vdsl_agent().with(
            ".1.3.6.1.2.1.10.251.1.2.2.1.1.12.2",
            RawValue::ByteString(b"xtur".to_vec()),
        );
        let err = IndexResolver::resolve_termination_units(&mut agent, "12")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("octet string"));
    }

    #[tokio::test]
    async fn test_termination_unit_missing_is_error() {
        let mut agent = vdsl_agent();
        assert!(IndexResolver::resolve_termination_units(&mut agent, "13").await.is_err());
    }

    #[tokio::test]
    async fn test_termination_unit_query_failure_is_error() {
        let mut agent = vdsl_agent();
        agent.fail_get = true;
        assert!(IndexResolver::resolve_termination_units(&mut agent, "12").await.is_err());
    }

    #[tokio::test]
    async fn test_ppp_address_found() {
        let mut agent = vdsl_agent();
        let address = IndexResolver::resolve_ppp_address(&mut agent, "12").await;
        assert_eq!(address, "93.184.216.34");
    }

    #[tokio::test]
    async fn test_ppp_address_not_found() {
        let mut agent = vdsl_agent();
        let address = IndexResolver::resolve_ppp_address(&mut agent, "7").await;
        assert_eq!(address, "(not found)");
    }

    #[tokio::test]
    async fn test_ppp_address_walk_error_is_sentinel() {
        let mut agent = vdsl_agent();
        agent.fail_walk = true;
        let address = IndexResolver::resolve_ppp_address(&mut agent, "12").await;
        assert!(address.starts_with("(error: "));
        assert!(address.contains("walk failed"));
    }

    #[tokio::test]
    async fn test_line_identity() {
        let mut agent = vdsl_agent();
        let identity = IndexResolver::resolve_line_identity(&mut agent).await.unwrap();
        assert_eq!(
            identity,
            LineIdentity {
                if_index: "12".to_string(),
                downstream_unit_id: "2".to_string(),
                upstream_unit_id: "1".to_string(),
                ppp_address: "93.184.216.34".to_string(),
            }
        );
    }
}
