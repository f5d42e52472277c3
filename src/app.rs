//! 应用状态与交互式菜单主循环

use std::io::{self, BufRead};
use std::path::PathBuf;

use crate::error::Result;
use crate::operations::tasks::{add_task, remove_task, render_task_list, AddOutcome, RemoveOutcome};
use crate::prompt;
use crate::storage;

/// 应用运行状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppMode {
    Running,
    Exiting,
}

/// 菜单选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    View,
    Add,
    Remove,
    Exit,
}

impl MenuChoice {
    /// 解析用户输入（"1"-"4"，其余返回 None）
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::View),
            "2" => Some(Self::Add),
            "3" => Some(Self::Remove),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// 应用状态：内存中的任务列表 + 持久化文件路径
pub struct App {
    tasks: Vec<String>,
    tasks_path: PathBuf,
    mode: AppMode,
}

impl App {
    pub fn new(tasks: Vec<String>, tasks_path: PathBuf) -> Self {
        Self {
            tasks,
            tasks_path,
            mode: AppMode::Running,
        }
    }

    /// 运行交互式主循环（阻塞直到用户选择退出）
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut reader = stdin.lock();
        self.run_loop(&mut reader)
    }

    /// 主循环本体，reader 可注入便于测试
    fn run_loop<R: BufRead>(&mut self, reader: &mut R) -> Result<()> {
        while self.mode == AppMode::Running {
            print_menu();
            let input = prompt::read_line(reader, "Choose an option (1-4): ")?;

            match MenuChoice::parse(&input) {
                Some(MenuChoice::View) => self.view(),
                Some(MenuChoice::Add) => self.add(reader)?,
                Some(MenuChoice::Remove) => self.remove(reader)?,
                Some(MenuChoice::Exit) => self.exit()?,
                None => println!("Invalid choice. Please choose 1-4.\n"),
            }
        }
        Ok(())
    }

    /// 1: 查看任务列表（只读）
    fn view(&self) {
        if self.tasks.is_empty() {
            println!("\nNo tasks yet. Add some!\n");
        } else {
            println!("\nYour Tasks:");
            println!("{}", render_task_list(&self.tasks));
            println!();
        }
    }

    /// 2: 添加任务
    fn add<R: BufRead>(&mut self, reader: &mut R) -> Result<()> {
        let input = prompt::read_line(reader, "Enter the new task: ")?;
        match add_task(&mut self.tasks, &input) {
            AddOutcome::Added(text) => println!("Task '{}' added successfully!\n", text),
            AddOutcome::EmptyInput => println!("Empty task not added.\n"),
        }
        Ok(())
    }

    /// 3: 按编号删除任务
    fn remove<R: BufRead>(&mut self, reader: &mut R) -> Result<()> {
        if self.tasks.is_empty() {
            println!("No tasks to remove.\n");
            return Ok(());
        }

        self.view();
        let input = prompt::read_line(reader, "Enter the task number to remove: ")?;
        match remove_task(&mut self.tasks, &input) {
            RemoveOutcome::Removed { text } => {
                println!("Task '{}' removed successfully!\n", text)
            }
            RemoveOutcome::OutOfRange => println!("Invalid task number.\n"),
            RemoveOutcome::NotANumber => println!("Please enter a valid number.\n"),
        }
        Ok(())
    }

    /// 4: 保存并退出
    fn exit(&mut self) -> Result<()> {
        storage::tasks::save_tasks(&self.tasks_path, &self.tasks)?;
        println!("Goodbye! Your tasks are saved.");
        self.mode = AppMode::Exiting;
        Ok(())
    }
}

/// 打印四项主菜单
fn print_menu() {
    println!("=== TO-DO LIST MENU ===");
    println!("1. View tasks");
    println!("2. Add task");
    println!("3. Remove task");
    println!("4. Exit");
}
