//! Аргументы командной строки.
//!
//! Все поля необязательны: что не задано здесь, берется из YAML файла
//! (`--config`), а затем из значений по умолчанию.

use clap::Parser;

/// VDSL статистика модема по SNMP
#[derive(Parser, Debug, Default)]
#[command(name = "vdsl-stats")]
#[command(about = "Self-refreshing VDSL2 line statistics page", long_about = None)]
#[command(version)]
pub struct Cli {
    /// HTTP port
    #[arg(short = 'p', long = "http-port", env = "HTTP_PORT")]
    pub http_port: Option<u32>,

    /// SNMP IP address
    #[arg(long, env = "SNMP_IP")]
    pub ip: Option<String>,

    /// SNMP port
    #[arg(long, env = "SNMP_PORT")]
    pub port: Option<u16>,

    /// SNMP community name
    #[arg(long, env = "SNMP_COMMUNITY")]
    pub community: Option<String>,

    /// YAML file with settings
    #[arg(long)]
    pub config: Option<String>,
}
