//! package.json 处理模块：向既有清单补写 start/build 两个运行脚本。
//! 只在缺失时插入，已有值一律保留；回写为两空格缩进。

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::{fs, path::Path};

/// 需要保证存在的运行脚本
const SCRIPTS: [(&str, &str); 2] = [("start", "webpack-dev-server"), ("build", "webpack -p")];

/// 确保 `scripts.start` / `scripts.build` 存在
pub fn ensure_scripts(path: &Path) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("读取清单失败: {}", path.display()))?;
    let mut manifest: Value = serde_json::from_str(&text)
        .with_context(|| format!("解析清单失败: {}", path.display()))?;

    let root = manifest
        .as_object_mut()
        .with_context(|| format!("清单顶层不是 JSON 对象: {}", path.display()))?;
    let scripts = root
        .entry("scripts")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .with_context(|| format!("scripts 字段不是对象: {}", path.display()))?;
    for (key, value) in SCRIPTS {
        if !scripts.contains_key(key) {
            scripts.insert(key.to_string(), Value::String(value.to_string()));
        }
    }

    fs::write(path, serde_json::to_string_pretty(&manifest)?)
        .with_context(|| format!("回写清单失败: {}", path.display()))?;
    Ok(())
}
