//! 命令调度模块：
//! - 接收解析好的 CLI 参数，映射到核心操作
//! - 两个开关都给出时先初始化、再生成组件
//! - 什么都没给时打印用法说明，不触碰文件系统

use anyhow::Result;
use clap::CommandFactory;
use std::env;

use crate::{cli::Cli, scaffold};

/// 运行解析后的命令
pub fn run(cli: Cli) -> Result<()> {
    if !cli.init && cli.component.is_none() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let dir = env::current_dir()?;
    if cli.init {
        scaffold::init_project(&dir)?;
    }
    if let Some(name) = cli.component.as_deref() {
        scaffold::component(&dir, name)?;
    }
    Ok(())
}
