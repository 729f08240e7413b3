//! Dashboard configuration

use dashboard_core::{Theme, DEFAULT_MAX_ROWS};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub server: ServerSection,
    pub data: DataSection,
    pub table: TableSection,
    pub theme: Theme,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8050,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSection {
    pub dir: PathBuf,
    pub gdp_file: String,
    pub exports_file: String,
}

impl Default for DataSection {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./data_resources"),
            gdp_file: "gdp-life-exp-2007.csv".to_string(),
            exports_file: "usa-agricultural-exports-2011.csv".to_string(),
        }
    }
}

impl DataSection {
    pub fn gdp_path(&self) -> PathBuf {
        self.dir.join(&self.gdp_file)
    }

    pub fn exports_path(&self) -> PathBuf {
        self.dir.join(&self.exports_file)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSection {
    pub max_rows: usize,
}

impl Default for TableSection {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: DashboardConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Resolve the configured host, which may be a name such as `localhost`.
    pub async fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        tokio::net::lookup_host((self.server.host.as_str(), self.server.port))
            .await?
            .next()
            .ok_or_else(|| anyhow::anyhow!("Host did not resolve: {}", self.server.host))
    }
}
