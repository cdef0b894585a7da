use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// 静态配置（从 TOML 加载，启动时使用）
///
/// 包含：
/// - server: 监听地址、端口、worker 数量
/// - database: 数据库连接配置
/// - shortener: 短码生成与重定向策略
/// - frontend: 前端静态资源目录
/// - cors: 跨域配置
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub shortener: ShortenerConfig,
    #[serde(default)]
    pub frontend: FrontendConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：DATABASE_URL / PORT > SHORTENER__* > config.toml > 默认值
    /// 示例：SHORTENER__SERVER__PORT=9999
    pub fn load() -> Result<Self, config::ConfigError> {
        use config::{Config, Environment, File};

        let path = "config.toml";

        let builder = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("SHORTENER")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins"),
            )
            // 与原服务保持一致的两个裸环境变量
            .set_override_option("database.database_url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("server.port", std::env::var("PORT").ok())?;

        let config = builder.build()?.try_deserialize::<StaticConfig>()?;
        if std::path::Path::new(path).exists() {
            eprintln!("[INFO] Configuration loaded from: {}", path);
        }
        Ok(config)
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|e| format!("# Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
}

/// 数据库连接配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_database_pool_size")]
    pub pool_size: u32,
    /// 连接 / 获取连接超时（秒）
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
}

/// 短码与重定向配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortenerConfig {
    #[serde(default = "default_code_length")]
    pub code_length: usize,
    /// 生成唯一短码的最大尝试次数
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// true => 301, false => 302
    #[serde(default)]
    pub permanent_redirect: bool,
}

/// 前端静态资源配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontendConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,
}

/// CORS 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_true")]
    pub enable_rotation: bool,
}

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    3000
}

fn default_workers() -> usize {
    num_cpus::get()
}

fn default_database_url() -> String {
    "sqlite://shortener.db".to_string()
}

fn default_database_pool_size() -> u32 {
    10
}

fn default_connect_timeout() -> u64 {
    8
}

fn default_code_length() -> usize {
    8
}

fn default_max_attempts() -> u32 {
    16
}

fn default_true() -> bool {
    true
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("client/dist")
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            workers: default_workers(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            pool_size: default_database_pool_size(),
            connect_timeout: default_connect_timeout(),
        }
    }
}

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self {
            code_length: default_code_length(),
            max_attempts: default_max_attempts(),
            permanent_redirect: false,
        }
    }
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dist_dir: default_dist_dir(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: true,
        }
    }
}
