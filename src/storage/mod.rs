pub mod config;
pub mod tasks;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// 获取 ~/.todo/ 目录路径
pub fn todo_dir() -> PathBuf {
    dirs::home_dir()
        .expect("Cannot find home directory")
        .join(".todo")
}

/// 确保 ~/.todo/ 目录存在
pub fn ensure_todo_dir() -> Result<PathBuf> {
    let path = todo_dir();
    fs::create_dir_all(&path)?;
    Ok(path)
}

/// 从 TOML 文件加载反序列化数据
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// 将数据序列化后保存到 TOML 文件
pub fn save_toml<T: serde::Serialize>(path: &Path, data: &T) -> Result<()> {
    let content = toml::to_string_pretty(data)?;
    fs::write(path, content)?;
    Ok(())
}
