//! 脚手架编排模块：
//! - `--init`：npm 初始化/装包 → 写出五份项目文件 → 补 npm scripts → git init
//! - `--component <NAME>`：渲染组件模板并写出 `<NAME>.tsx`
//! 任一步失败立即中止，已写出的文件不回滚。

use anyhow::{Context, Result};
use std::path::Path;
use xshell::{cmd, Shell};

use crate::{pkg, render::render, template, write::materialize};

/// 五份项目级模板的写出顺序（只影响输出可读性，互相没有依赖）
const PROJECT_TEMPLATES: [&str; 5] = [
    "webpack-config",
    "tsconfig",
    "index-html",
    "main-tsx",
    "gitignore",
];

/// 写出五份项目文件。`--init` 中纯文件系统的部分，不触发外部命令。
/// 这五份正文不含占位符，渲染结果与模板逐字节一致。
pub fn init_files(dir: &Path) -> Result<()> {
    for name in PROJECT_TEMPLATES {
        let t = template::get(name)?;
        let target = t.target.context("项目级模板缺少固定目标名")?;
        let text = render(t.body, "");
        materialize(&dir.join(target), &text, "Creating")?;
    }
    Ok(())
}

/// 完整的项目初始化序列（对应 `--init`）。
/// 外部命令为阻塞调用，非零退出即失败上抛，不重试、不超时。
pub fn init_project(dir: &Path) -> Result<()> {
    let sh = Shell::new()?;
    sh.change_dir(dir);

    // 包清单缺失时先初始化
    if !dir.join("package.json").exists() {
        println!("Initializing package.json");
        cmd!(sh, "npm init -y").run().context("npm init 失败")?;
    }

    println!("Installing packages. This might take a couple minutes.");
    cmd!(
        sh,
        "npm install webpack webpack-dev-server ts-loader typescript --save-dev"
    )
    .run()
    .context("安装开发依赖失败")?;
    cmd!(sh, "npm install apprun --save")
        .run()
        .context("安装 apprun 失败")?;

    init_files(dir)?;

    println!("Adding npm scripts");
    pkg::ensure_scripts(&dir.join("package.json"))?;

    println!("Initializing git");
    cmd!(sh, "git init").run().context("git init 失败")?;
    Ok(())
}

/// 生成组件：以组件名渲染骨架并写出 `<name>.tsx`。
/// 名字原样接受，是否构成合法文件名/标识符由调用者负责。
pub fn component(dir: &Path, name: &str) -> Result<()> {
    let t = template::get("component")?;
    let text = render(t.body, name);
    let label = format!("Creating component {name}");
    materialize(&dir.join(format!("{name}.tsx")), &text, &label)?;
    Ok(())
}
