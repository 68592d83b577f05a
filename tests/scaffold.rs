//! 端到端：项目文件写出与组件生成（不触发 npm/git 外部命令）

use std::fs;

use finch::{scaffold, template};
use tempfile::tempdir;

const PROJECT_FILES: [&str; 5] = [
    "webpack.config.js",
    "tsconfig.json",
    "index.html",
    "main.tsx",
    ".gitignore",
];

#[test]
fn init_writes_five_files_with_verbatim_template_bodies() {
    let dir = tempdir().unwrap();

    scaffold::init_files(dir.path()).unwrap();

    for name in PROJECT_FILES {
        assert!(dir.path().join(name).is_file(), "{name} 应已写出");
    }
    // 这些模板不含占位符，落盘内容与注册表正文逐字节一致
    assert_eq!(
        fs::read_to_string(dir.path().join("tsconfig.json")).unwrap(),
        template::get("tsconfig").unwrap().body
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("webpack.config.js")).unwrap(),
        template::get("webpack-config").unwrap().body
    );
    assert_eq!(
        fs::read_to_string(dir.path().join(".gitignore")).unwrap(),
        template::get("gitignore").unwrap().body
    );
}

#[test]
fn second_init_skips_everything_and_keeps_user_edits() {
    let dir = tempdir().unwrap();
    scaffold::init_files(dir.path()).unwrap();

    let untouched: Vec<String> = PROJECT_FILES
        .iter()
        .map(|n| fs::read_to_string(dir.path().join(n)).unwrap())
        .collect();

    // 用户改过的入口文件在重跑后必须原样保留
    fs::write(dir.path().join("main.tsx"), "// edited by user\n").unwrap();
    scaffold::init_files(dir.path()).unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("main.tsx")).unwrap(),
        "// edited by user\n"
    );
    for (name, before) in PROJECT_FILES.iter().zip(untouched) {
        if *name != "main.tsx" {
            assert_eq!(
                fs::read_to_string(dir.path().join(name)).unwrap(),
                before,
                "{name} 的内容不得变化"
            );
        }
    }
}

#[test]
fn component_generation_substitutes_the_name() {
    let dir = tempdir().unwrap();

    scaffold::component(dir.path(), "Todo").unwrap();

    let text = fs::read_to_string(dir.path().join("Todo.tsx")).unwrap();
    assert!(text.contains("export default class TodoComponent extends Component"));
    // 双井号写法只保留首个 `#`，不是转义
    assert!(text.contains("'#Todo': state => state,"));
    assert!(!text.contains("##Todo"));
    assert!(!text.contains("#name"));
    // 末尾的用法说明同样完成了替换
    assert!(text.contains("// import Todo from './Todo';"));
    assert!(text.contains("// new Todo().mount(element);"));
}

#[test]
fn existing_component_file_is_never_overwritten() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Todo.tsx");
    fs::write(&path, "user content").unwrap();

    scaffold::component(dir.path(), "Todo").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "user content");
}
