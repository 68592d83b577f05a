//! CLI 定义模块：仅负责命令行参数结构体与解析
//! 将 clap 的声明与业务逻辑解耦，便于在其它模块中复用参数。

use clap::Parser;

/// 顶层 CLI 入口：两个互相独立的开关，可同时给出（先 init 后 component）
#[derive(Parser, Debug)]
#[command(name = "finch", about = "AppRun 单页项目脚手架生成器", version)]
pub struct Cli {
    /// 初始化 AppRun 项目（安装依赖并写出构建配置与入口文件）
    #[arg(short, long)]
    pub init: bool,

    /// 生成 AppRun 组件（写出 <NAME>.tsx）
    #[arg(short, long, value_name = "NAME")]
    pub component: Option<String>,
}
