//! 模板注册表：六份内置文本蓝图（构建配置、类型检查配置、忽略清单、
//! 页面入口、应用入口、组件骨架）。纯数据，进程期常量，永不可变。

use thiserror::Error;

// 内置模板正文（与写出文件逐字节一致）
const WEBPACK_CONFIG: &str = include_str!("assets/webpack.config.js");
const TSCONFIG: &str = include_str!("assets/tsconfig.json");
const GIT_IGNORE: &str = include_str!("assets/gitignore");
const INDEX_HTML: &str = include_str!("assets/index.html");
const MAIN_TSX: &str = include_str!("assets/main.tsx");
const COMPONENT_TSX: &str = include_str!("assets/component.tsx");

/// 查表失败：给出的模板名不在注册表中。
/// 表内调用集合是封闭的，正常流程中不会出现。
#[derive(Debug, Error)]
#[error("未知模板: {0}")]
pub struct UnknownTemplate(pub String);

/// 不可变命名模板
#[derive(Debug)]
pub struct Template {
    /// 注册表内的标识符
    pub name: &'static str,
    /// 模板正文，可含零或多个 `#name` 占位符
    pub body: &'static str,
    /// 相对工作目录的目标文件名；组件模板的目标由调用方按组件名推导，此处为 None
    pub target: Option<&'static str>,
}

/// 固定目录表：进程启动即成立，不接受外部配置
static TEMPLATES: &[Template] = &[
    Template {
        name: "webpack-config",
        body: WEBPACK_CONFIG,
        target: Some("webpack.config.js"),
    },
    Template {
        name: "tsconfig",
        body: TSCONFIG,
        target: Some("tsconfig.json"),
    },
    Template {
        name: "gitignore",
        body: GIT_IGNORE,
        target: Some(".gitignore"),
    },
    Template {
        name: "index-html",
        body: INDEX_HTML,
        target: Some("index.html"),
    },
    Template {
        name: "main-tsx",
        body: MAIN_TSX,
        target: Some("main.tsx"),
    },
    Template {
        name: "component",
        body: COMPONENT_TSX,
        target: None,
    },
];

/// 按名字取模板
pub fn get(name: &str) -> Result<&'static Template, UnknownTemplate> {
    TEMPLATES
        .iter()
        .find(|t| t.name == name)
        .ok_or_else(|| UnknownTemplate(name.to_string()))
}
