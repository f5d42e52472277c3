mod app;
mod error;
mod operations;
mod prompt;
mod storage;

use clap::Parser;

use app::App;

/// 命令行入口（无参数，启动即进入交互菜单）
#[derive(Parser)]
#[command(name = "todo")]
#[command(version)]
#[command(about = "Flat-file to-do list with an interactive menu")]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    // 首次运行：落盘默认配置，方便用户修改 tasks_file
    let config = storage::config::load_config();
    if !storage::config::config_exists() {
        let _ = storage::config::save_config(&config);
    }
    let tasks_path = config.tasks_path();

    let tasks = match storage::tasks::load_tasks(&tasks_path) {
        Ok(tasks) => tasks,
        Err(e) => {
            eprintln!("Failed to load tasks from {}: {}", tasks_path.display(), e);
            std::process::exit(1);
        }
    };

    let mut app = App::new(tasks, tasks_path);
    if let Err(e) = app.run() {
        eprintln!("todo: {}", e);
        std::process::exit(1);
    }
}
