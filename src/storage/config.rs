//! 应用配置持久化

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{ensure_todo_dir, load_toml, save_toml, todo_dir};
use crate::error::Result;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// 任务文件路径（缺省时为 ~/.todo/tasks.txt）
    #[serde(default)]
    pub tasks_file: Option<PathBuf>,
}

impl Config {
    /// 解析生效的任务文件路径
    pub fn tasks_path(&self) -> PathBuf {
        self.tasks_file
            .clone()
            .unwrap_or_else(|| todo_dir().join("tasks.txt"))
    }
}

/// 获取配置文件路径
fn config_path() -> PathBuf {
    todo_dir().join("config.toml")
}

/// 配置文件是否已存在
pub fn config_exists() -> bool {
    config_path().exists()
}

/// 加载配置（不存在或解析失败则返回默认值）
pub fn load_config() -> Config {
    let path = config_path();
    if !path.exists() {
        return Config::default();
    }
    load_toml(&path).unwrap_or_default()
}

/// 保存配置
pub fn save_config(config: &Config) -> Result<()> {
    ensure_todo_dir()?;
    save_toml(&config_path(), config)
}
