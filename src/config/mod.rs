use std::time::Duration;

use anyhow::{Result, bail};

pub mod settings;

pub use settings::Settings;

use crate::cli::Cli;

/// Главная конфигурация приложения
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_port: u16,
    pub snmp_ip: String,
    pub snmp_port: u16,
    pub community: String,
    pub timeout: Duration,
}

impl AppConfig {
    /// Собирает конфигурацию: аргументы и окружение, затем YAML, затем умолчания
    pub fn load(cli: &Cli) -> Result<Self> {
        let settings = match &cli.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        Self::merge(cli, settings)
    }

    fn merge(cli: &Cli, settings: Settings) -> Result<Self> {
        let http_port = cli.http_port.unwrap_or(settings.http.port);
        if http_port == 0 || http_port > 65535 {
            bail!("Invalid HTTP port: {}", http_port);
        }

        if settings.connection.timeout == 0 {
            bail!("Таймаут SNMP должен быть больше нуля");
        }

        Ok(Self {
            http_port: http_port as u16,
            snmp_ip: cli.ip.clone().unwrap_or(settings.connection.ip),
            snmp_port: cli.port.unwrap_or(settings.connection.port),
            community: cli
                .community
                .clone()
                .unwrap_or(settings.auth.v2c.community),
            timeout: Duration::from_secs(settings.connection.timeout),
        })
    }

    /// Адрес агента для SNMP сессии
    pub fn get_target(&self) -> String {
        format!("{}:{}", self.snmp_ip, self.snmp_port)
    }

    pub fn get_community(&self) -> Vec<u8> {
        self.community.clone().into_bytes()
    }
}
