//! # tbcalc - tbmodels 计算适配器
//!
//! 为紧束缚模型工具 `tbmodels` 提供参数预检、命令行生成、
//! 运行和输出解析，并把多个计算串成工作流。
//!
//! ## 子命令
//! - `dos` - 态密度计算
//! - `eigenvals` - 本征值计算
//! - `symmetrize` - 模型对称化
//! - `parse` - Wannier90 输出转换为模型文件
//! - `export` - 解析已有 DOS 输出并导出 CSV
//! - `bandevaluation` - 模型能带与参考能带比较
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/          (命令行参数定义)
//!   ├── commands/     (命令执行逻辑)
//!   │     ├── calculations/ (预检、命令行生成、运行)
//!   │     ├── workflows/    (多步计算)
//!   │     ├── parsers/      (输出与参数解析)
//!   │     ├── export/       (CSV/XY/图像导出)
//!   │     ├── batch/        (批量解析)
//!   │     └── models/       (数据模型)
//!   ├── utils/        (工具函数)
//!   └── error.rs      (错误处理)
//! ```

mod batch;
mod calculations;
mod cli;
mod commands;
mod error;
mod export;
mod models;
mod parsers;
mod utils;
mod workflows;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        let msg = match e.exit_code() {
            Some(code) => format!("[{}] {}", code, e),
            None => e.to_string(),
        };
        utils::output::print_error(&msg);
        std::process::exit(e.process_status());
    }
}
