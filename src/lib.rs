//! finch 库入口：脚手架核心与命令编排
//! - 核心三件套：模板注册表（template）、占位符替换（render）、幂等写出（write）
//! - 编排：项目初始化与组件生成（scaffold）、package.json 处理（pkg）
//! - bin 与集成测试共用同一套实现

pub mod cli;
pub mod commands;
pub mod pkg;
pub mod render;
pub mod scaffold;
pub mod template;
pub mod write;
