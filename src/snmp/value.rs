use snmp2::Value;

/// Значение, полученное от агента для одного OID.
///
/// Живет только в пределах одного цикла опроса, поэтому не заимствует
/// буфер ответа snmp2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    Integer(i64),
    /// Counter32 / Gauge32 / TimeTicks / Counter64
    Unsigned(u64),
    ByteString(Vec<u8>),
    /// OID запрашивали, но в ответе его нет
    Absent,
    /// Любой другой тип SNMP, сохраняем только имя типа
    Other(&'static str),
}

impl RawValue {
    /// Агент сообщил, что MIB кончилась
    pub const END_OF_MIB_VIEW: RawValue = RawValue::Other("end of mib view");

    /// Имя типа для сообщений вида "(wrong type: ...)"
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::Integer(_) => "integer",
            RawValue::Unsigned(_) => "unsigned",
            RawValue::ByteString(_) => "octet string",
            RawValue::Absent => "absent",
            RawValue::Other(name) => name,
        }
    }

    /// Приводит знаковое и беззнаковое представление к одному числу.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            RawValue::Integer(v) => Some(*v),
            RawValue::Unsigned(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }
}

impl From<Value<'_>> for RawValue {
    fn from(value: Value<'_>) -> Self {
        match value {
            Value::Integer(v) => RawValue::Integer(v),
            Value::Counter32(v) | Value::Unsigned32(v) | Value::Timeticks(v) => {
                RawValue::Unsigned(u64::from(v))
            }
            Value::Counter64(v) => RawValue::Unsigned(v),
            Value::OctetString(bytes) => RawValue::ByteString(bytes.to_vec()),
            Value::Null => RawValue::Other("null"),
            Value::Boolean(_) => RawValue::Other("boolean"),
            Value::ObjectIdentifier(_) => RawValue::Other("object identifier"),
            Value::IpAddress(_) => RawValue::Other("ip address"),
            Value::Opaque(_) => RawValue::Other("opaque"),
            Value::NoSuchObject => RawValue::Other("no such object"),
            Value::NoSuchInstance => RawValue::Other("no such instance"),
            Value::EndOfMibView => RawValue::END_OF_MIB_VIEW,
            _ => RawValue::Other("unsupported"),
        }
    }
}
