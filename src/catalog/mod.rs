use std::sync::LazyLock;

pub mod oids;

use oids::*;

pub const TEMPLATE_PREFIX: &str = "{Prefix}";
pub const TEMPLATE_IF_INDEX: &str = "{IfIndex}";
pub const TEMPLATE_DOWNSTREAM_UNIT: &str = "{DownstreamUnitId}";
pub const TEMPLATE_UPSTREAM_UNIT: &str = "{UpstreamUnitId}";

/// Как превратить сырое значение в текст
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// Целое как есть
    Identity,
    /// бит/с -> Кбит/с, с отбрасыванием дробной части
    DivideBy1000,
    /// "Fast (1)" или "Interleaved (n)"
    InterleaveLabel,
    /// Строка байт как текст
    RawText,
}

/// Одна величина или пара downstream/upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricShape {
    Single,
    Directional,
}

/// Описание метрики линии.
///
/// Шаблонов всегда 1 или 2 (downstream, затем upstream), это
/// гарантируют конструкторы ниже.
#[derive(Debug, Clone)]
pub struct MetricDescriptor {
    pub oid_prefix: &'static str,
    pub description: &'static str,
    pub unit: &'static str,
    templates: Vec<String>,
    pub format: ValueFormat,
}

impl MetricDescriptor {
    /// Метрика, целое значение выводится как есть
    pub fn integer(
        prefix: &'static str,
        description: &'static str,
        shape: MetricShape,
        unit: &'static str,
    ) -> Self {
        Self::formatted_integer(prefix, description, shape, unit, ValueFormat::Identity)
    }

    /// Метрика с преобразованием целого значения
    pub fn formatted_integer(
        prefix: &'static str,
        description: &'static str,
        shape: MetricShape,
        unit: &'static str,
        format: ValueFormat,
    ) -> Self {
        let templates = match shape {
            MetricShape::Directional => vec![
                format!("{TEMPLATE_PREFIX}.{TEMPLATE_IF_INDEX}.{TEMPLATE_DOWNSTREAM_UNIT}"),
                format!("{TEMPLATE_PREFIX}.{TEMPLATE_IF_INDEX}.{TEMPLATE_UPSTREAM_UNIT}"),
            ],
            MetricShape::Single => vec![format!("{TEMPLATE_PREFIX}.{TEMPLATE_IF_INDEX}")],
        };

        Self {
            oid_prefix: prefix,
            description,
            unit,
            templates,
            format,
        }
    }

    /// Текстовая метрика без направления
    pub fn text(prefix: &'static str, description: &'static str) -> Self {
        Self {
            oid_prefix: prefix,
            description,
            unit: "",
            templates: vec![format!("{TEMPLATE_PREFIX}.{TEMPLATE_IF_INDEX}")],
            format: ValueFormat::RawText,
        }
    }

    /// Для таблиц, где downstream и upstream лежат в разных колонках,
    /// а не под общим префиксом с номером блока в конце.
    pub fn with_templates(mut self, downstream: impl Into<String>, upstream: impl Into<String>) -> Self {
        self.templates = vec![downstream.into(), upstream.into()];
        self
    }

    pub fn templates(&self) -> &[String] {
        &self.templates
    }
}

/// Шаблон для второй колонки пары из adslAturPhysTable
fn upstream_column(prefix: &str) -> String {
    format!("{prefix}.{TEMPLATE_IF_INDEX}")
}

fn own_column() -> String {
    format!("{TEMPLATE_PREFIX}.{TEMPLATE_IF_INDEX}")
}

/// Все метрики страницы, в порядке вывода
pub static CATALOG: LazyLock<Vec<MetricDescriptor>> = LazyLock::new(|| {
    use MetricShape::Directional;

    vec![
        MetricDescriptor::text(DSL_STATUS, "Sync status"),
        MetricDescriptor::integer(ATTENUATION_DB, "Attenuation (down/up)", Directional, "dB")
            .with_templates(own_column(), upstream_column(ATTENUATION_DB_UP)),
        MetricDescriptor::integer(OUTPUT_POWER_DBM, "Output power (down/up)", Directional, "dBm")
            .with_templates(own_column(), upstream_column(OUTPUT_POWER_DBM_UP)),
        MetricDescriptor::formatted_integer(
            CURRENT_SYNC_RATE_BPS,
            "Current rate (down/up)",
            Directional,
            "Kbps",
            ValueFormat::DivideBy1000,
        ),
        MetricDescriptor::formatted_integer(
            MAX_SYNC_RATE_BPS,
            "Max rate (down/up)",
            Directional,
            "Kbps",
            ValueFormat::DivideBy1000,
        )
        .with_templates(own_column(), upstream_column(MAX_SYNC_RATE_BPS_UP)),
        MetricDescriptor::integer(SNR_MARGIN_DB, "SNR margin (down/up)", Directional, "dB")
            .with_templates(own_column(), upstream_column(SNR_MARGIN_DB_UP)),
        MetricDescriptor::formatted_integer(
            INTERLEAVE_DEPTH,
            "Interleave depth (down/up)",
            Directional,
            "",
            ValueFormat::InterleaveLabel,
        ),
        MetricDescriptor::integer(INTERLEAVE_DELAY_MS, "Interleave delay (down/up)", Directional, "ms"),
        MetricDescriptor::integer(
            ACTUAL_IMPULSE_PROTECTION,
            "Impulse Protection (down/up)",
            Directional,
            "units",
        ),
        MetricDescriptor::integer(FECS, "FECS (down/up)", Directional, ""),
    ]
});
