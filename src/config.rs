use std::path::PathBuf;
use std::{env, fs};

use serde::Deserialize;

use crate::util::dates;

#[derive(Debug, Deserialize, Clone)]
struct FileConfig {
    pub results_path: String,
    pub token_var: String,
    pub test_guild: Option<u64>,
    pub clear_commands_on_startup: bool,
    pub max_message_length: usize,
    pub log: FileLogConfig,
    pub scheduler: SchedulerConfig,
}

#[derive(Debug, Deserialize, Clone)]
struct FileLogConfig {
    pub level: String,
    pub path: String,
    pub json_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SchedulerConfig {
    pub enabled: bool,
    pub heartbeat_interval_minutes: u64,
}

#[derive(Clone, Debug)]
pub struct LogConfig {
    pub level: String,
    pub path: PathBuf,
    pub json_path: PathBuf,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub results_path: PathBuf,
    pub token_var: String,
    pub test_guild: Option<u64>,
    pub clear_commands_on_startup: bool,
    pub max_message_length: usize,
    pub log: LogConfig,
    pub scheduler: SchedulerConfig,
}

fn expand_tilde(path: &str) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
    if path.starts_with("~/") {
        let home = env::var("HOME")?;
        Ok(PathBuf::from(path.replacen("~", &home, 1)))
    } else {
        Ok(PathBuf::from(path))
    }
}

pub fn load_config() -> Result<AppConfig, Box<dyn std::error::Error + Send + Sync>> {
    let exe_path = env::current_exe()?;
    let config_path = match exe_path.parent() {
        Some(dir) => dir.join("umacord.toml"),
        _ => return Err("failed to determine executable directory".into()),
    };

    if !config_path.exists() || !config_path.is_file() {
        return Err(format!(
            "Config file does not exist or is not a file: {}",
            config_path.display()
        )
        .into());
    }
    let s = fs::read_to_string(&config_path)?;
    let cfg: FileConfig = toml::from_str(&s)?;

    // The results file may be absent; the store creates it on startup.
    let results_path = expand_tilde(&cfg.results_path)?;
    if results_path.exists() && !results_path.is_file() {
        return Err(format!("Results path exists but is not a file: {}", &cfg.results_path).into());
    }

    Ok(AppConfig {
        results_path,
        token_var: cfg.token_var,
        test_guild: cfg.test_guild,
        clear_commands_on_startup: cfg.clear_commands_on_startup,
        max_message_length: cfg.max_message_length,
        log: build_log_config(cfg.log)?,
        scheduler: cfg.scheduler,
    })
}

fn build_log_config(
    file_log: FileLogConfig,
) -> Result<LogConfig, Box<dyn std::error::Error + Send + Sync>> {
    let path = log_file_replacements(&file_log.path)?;
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            return Err(format!("Log file directory does not exist: {}", parent.display()).into());
        }
    }
    if path.exists() && !path.is_file() {
        return Err(format!("Log path exists but is not a file: {}", &file_log.path).into());
    }

    let json_path = log_file_replacements(&file_log.json_path)?;
    if let Some(parent) = json_path.parent() {
        if !parent.exists() {
            return Err(format!("Log file directory does not exist: {}", parent.display()).into());
        }
    }
    if json_path.exists() && !json_path.is_file() {
        return Err(format!("Log path exists but is not a file: {}", &file_log.json_path).into());
    }

    Ok(LogConfig {
        level: file_log.level,
        path,
        json_path,
    })
}

fn log_file_replacements(cfg_path: &str) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
    let date_str = dates::local_date_yyyy_mm_dd();
    let replaced = cfg_path.replace("{DATE}", &date_str);
    expand_tilde(&replaced)
}
