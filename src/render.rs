//! 占位符替换引擎：把模板正文里的 `#name` 替换为给定值。
//! 单遍左到右扫描；不是转义语法，也不做递归展开。

/// 占位符字面量：五个字符，区分大小写
const PLACEHOLDER: &str = "#name";

/// 渲染模板正文，替换每一处 `#name`。
///
/// 约定行为（对外可观察，不得“修正”）：
/// - `##name` 输出 `#<value>`：扫描器从第二个 `#` 起命中 `#name`，
///   首个 `#` 原样保留；不存在输出字面 `#name` 的转义写法。
/// - `#nameComponent` 这类更长标识符只在 `#name` 边界替换，
///   后缀与替换值直接拼接。
/// - `value` 自身含 `#name` 时不会被二次展开（只扫原始正文一遍）。
pub fn render(body: &str, value: &str) -> String {
    body.replace(PLACEHOLDER, value)
}
