use crate::catalog::{MetricDescriptor, ValueFormat};
use crate::collector::FetchedMetrics;
use crate::snmp::RawValue;

impl ValueFormat {
    /// Текст для одного значения. Никогда не паникует: несовпадение типа
    /// дает "(wrong type: ...)" только в этой строке страницы.
    pub fn apply(&self, raw: &RawValue) -> String {
        match self {
            ValueFormat::RawText => match raw {
                RawValue::ByteString(bytes) => String::from_utf8_lossy(bytes).into_owned(),
                other => wrong_type(other),
            },
            ValueFormat::Identity => with_integer(raw, |v| v.to_string()),
            ValueFormat::DivideBy1000 => with_integer(raw, |v| (v / 1000).to_string()),
            ValueFormat::InterleaveLabel => with_integer(raw, |v| {
                if v == 1 {
                    "Fast (1)".to_string()
                } else {
                    format!("Interleaved ({})", v)
                }
            }),
        }
    }
}

fn with_integer(raw: &RawValue, transform: impl FnOnce(i64) -> String) -> String {
    match raw.as_i64() {
        Some(v) => transform(v),
        None => wrong_type(raw),
    }
}

fn wrong_type(raw: &RawValue) -> String {
    format!("(wrong type: {})", raw.type_name())
}

/// Текст строки метрики из полученных значений
pub struct MetricFormatter;

impl MetricFormatter {
    pub fn format_metric(desc: &MetricDescriptor, oids: &[String], fetched: &FetchedMetrics) -> String {
        let text = match oids {
            [down, up] => format!(
                "{} / {}",
                desc.format.apply(fetched.value(down)),
                desc.format.apply(fetched.value(up))
            ),
            [single] => desc.format.apply(fetched.value(single)),
            _ => return "(error: unexpected oid count)".to_string(),
        };

        if desc.unit.is_empty() {
            text
        } else {
            format!("{} {}", text, desc.unit)
        }
    }
}
