//! 任务列表的 flat-file 持久化
//!
//! 每行一个任务，换行结尾；无表头、无转义。任务文本不可包含换行，
//! 否则会破坏行式格式（交互输入按行读取，天然满足该约束）。

use std::fs;
use std::path::Path;

use crate::error::Result;

/// 加载任务列表（文件不存在则返回空列表）
///
/// 文件存在但不可读时返回 `Err`，由调用方决定如何收场。
pub fn load_tasks(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_string).collect())
}

/// 保存任务列表（整体覆盖写入，每行一个任务）
///
/// 覆盖而非追加；不保证原子性。父目录不存在时自动创建。
pub fn save_tasks(path: &Path, tasks: &[String]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut content = String::with_capacity(tasks.iter().map(|t| t.len() + 1).sum());
    for task in tasks {
        content.push_str(task);
        content.push('\n');
    }

    fs::write(path, content)?;
    Ok(())
}
