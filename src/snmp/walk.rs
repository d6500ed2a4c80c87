use anyhow::{Result, bail};

use super::RawValue;
use super::oid::oid_arcs;

/// Разбор одного ответа GETNEXT/GETBULK при обходе поддерева
#[derive(Debug, Default)]
pub struct WalkStep {
    /// Строки внутри поддерева, в порядке ответа
    pub items: Vec<(String, RawValue)>,
    /// С этого OID начинается следующий запрос
    pub last: Option<Vec<u64>>,
    pub finished: bool,
}

/// Отбирает строки ответа, лежащие внутри `root`.
///
/// Обход заканчивается на первом OID вне поддерева, на endOfMibView
/// или на пустом ответе. OID должны строго возрастать начиная с `current`,
/// иначе агент зациклит обход, и это ошибка.
pub fn scan_batch(root: &[u64], current: &[u64], batch: Vec<(String, RawValue)>) -> Result<WalkStep> {
    let mut step = WalkStep {
        finished: batch.is_empty(),
        ..Default::default()
    };
    let mut previous = current.to_vec();

    for (oid, value) in batch {
        let arcs = oid_arcs(&oid)?;
        if !arcs.starts_with(root) || value == RawValue::END_OF_MIB_VIEW {
            step.finished = true;
            break;
        }
        if arcs <= previous {
            bail!("Агент вернул невозрастающий OID {} при обходе {}", oid, dotted(root));
        }

        previous.clone_from(&arcs);
        step.last = Some(arcs);
        step.items.push((oid, value));
    }

    Ok(step)
}

fn dotted(arcs: &[u64]) -> String {
    arcs.iter().map(|a| format!(".{a}")).collect()
}
