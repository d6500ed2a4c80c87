//! OID константы VDSL линии.
//!
//! ADSL-LINE-MIB (.1.3.6.1.2.1.10.94) и VDSL2-LINE-MIB (.1.3.6.1.2.1.10.251).

// -- adslAtucPhysTable (.94.1.1.2.1.*), первая колонка пары --

pub const SNR_MARGIN_DB: &str = ".1.3.6.1.2.1.10.94.1.1.2.1.4";
pub const ATTENUATION_DB: &str = ".1.3.6.1.2.1.10.94.1.1.2.1.5";
pub const DSL_STATUS: &str = ".1.3.6.1.2.1.10.94.1.1.2.1.6";
pub const OUTPUT_POWER_DBM: &str = ".1.3.6.1.2.1.10.94.1.1.2.1.7";
pub const MAX_SYNC_RATE_BPS: &str = ".1.3.6.1.2.1.10.94.1.1.2.1.8";

// -- adslAturPhysTable (.94.1.1.3.1.*), вторая колонка пары --

pub const SNR_MARGIN_DB_UP: &str = ".1.3.6.1.2.1.10.94.1.1.3.1.4";
pub const ATTENUATION_DB_UP: &str = ".1.3.6.1.2.1.10.94.1.1.3.1.5";
pub const OUTPUT_POWER_DBM_UP: &str = ".1.3.6.1.2.1.10.94.1.1.3.1.7";
pub const MAX_SYNC_RATE_BPS_UP: &str = ".1.3.6.1.2.1.10.94.1.1.3.1.8";

// -- xdsl2ChStatusTable (.251.1.2.2.1.*), индекс {ifIndex}.{unit} --

pub const TERMINATION_UNIT: &str = ".1.3.6.1.2.1.10.251.1.2.2.1.1";
pub const CURRENT_SYNC_RATE_BPS: &str = ".1.3.6.1.2.1.10.251.1.2.2.1.2";
pub const INTERLEAVE_DELAY_MS: &str = ".1.3.6.1.2.1.10.251.1.2.2.1.4";
pub const ACTUAL_IMPULSE_PROTECTION: &str = ".1.3.6.1.2.1.10.251.1.2.2.1.5";
pub const FECS: &str = ".1.3.6.1.2.1.10.251.1.2.2.1.7";
pub const INTERLEAVE_DEPTH: &str = ".1.3.6.1.2.1.10.251.1.2.2.1.10";

// -- IF-MIB / IP-MIB --

/// ifType колонка ifTable
pub const IF_TYPE: &str = ".1.3.6.1.2.1.2.2.1.3";
/// ipAdEntIfIndex, индекс строки = IP адрес
pub const IP_ADDRESS_IF_INDEX: &str = ".1.3.6.1.2.1.4.20.1.2";

/// ifType для vdsl2 канала
pub const VDSL2_CHANNEL_TYPE: i64 = 251;

/// xtuc, роль терминального блока со стороны станции
pub const UPSTREAM_TERMINATION_UNIT: u32 = 1;
/// xtur, роль терминального блока со стороны абонента
pub const DOWNSTREAM_TERMINATION_UNIT: u32 = 2;
