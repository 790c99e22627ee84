use anyhow::Result;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn quizconv(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_quizconv"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("QUIZ_DATA_DIR")
        .args(args)
        .output()
        .expect("无法启动 quizconv")
}

fn read_json(path: &Path) -> Result<Value> {
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

fn source_document() -> Value {
    json!({
        "title": "Kriptografiyaning matematik asosi",
        "questions": [
            {
                "question": "What is 2 + 2?",
                "answers": [
                    {"text": "3", "correct": false},
                    {"text": "4", "correct": true},
                    {"text": "5"}
                ]
            },
            {
                "question": "Qaysi algoritm simmetrik?",
                "answers": [
                    {"text": "AES", "correct": true},
                    {"text": "DES", "correct": true},
                    {"text": "RSA"}
                ]
            },
            {
                "question": "Javobsiz savol",
                "answers": [{"text": "x"}, {"correct": false}]
            }
        ]
    })
}

#[test]
fn test_convert_in_place() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("kma.json");
    fs::write(&path, serde_json::to_string(&source_document())?)?;

    let output = quizconv(dir.path(), &["convert", "kma.json"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("3"));

    let written = read_json(&path)?;
    assert_eq!(written["title"], "Kriptografiyaning matematik asosi");
    assert_eq!(written["totalQuestions"], 3);

    let questions = written["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 3);
    for (i, q) in questions.iter().enumerate() {
        assert_eq!(q["id"], json!(i + 1));
    }
    assert_eq!(questions[0]["options"], json!(["3", "4", "5"]));
    assert_eq!(questions[0]["correct_answer"], "4");
    assert_eq!(questions[1]["correct_answer"], "AES");
    assert_eq!(questions[2]["options"], json!(["x", null]));
    assert_eq!(questions[2]["correct_answer"], Value::Null);

    // 输出为 2 空格缩进的多行 JSON
    let text = fs::read_to_string(&path)?;
    assert!(text.starts_with("{\n  \"title\""));
    Ok(())
}

#[test]
fn test_convert_to_output_keeps_source() -> Result<()> {
    let dir = tempdir()?;
    let src = dir.path().join("zku.json");
    let original = serde_json::to_string(&source_document())?;
    fs::write(&src, &original)?;

    let output = quizconv(dir.path(), &["convert", "zku.json", "--output", "zku_new.json"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(fs::read_to_string(&src)?, original);
    assert_eq!(read_json(&dir.path().join("zku_new.json"))?["totalQuestions"], 3);
    Ok(())
}

#[test]
fn test_convert_without_path_is_usage_error() -> Result<()> {
    let dir = tempdir()?;
    let output = quizconv(dir.path(), &["convert"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!output.stderr.is_empty());
    Ok(())
}

#[test]
fn test_convert_missing_file() -> Result<()> {
    let dir = tempdir()?;
    let output = quizconv(dir.path(), &["convert", "missing.json"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(!dir.path().join("missing.json").exists());
    Ok(())
}

#[test]
fn test_convert_invalid_json_leaves_file() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"questions\": [")?;

    let output = quizconv(dir.path(), &["convert", "broken.json"]);
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(fs::read_to_string(&path)?, "{\"questions\": [");
    Ok(())
}

#[test]
fn test_refresh_uses_configured_file() -> Result<()> {
    let dir = tempdir()?;
    fs::create_dir(dir.path().join("data"))?;
    let data_file = dir.path().join("data").join("kma2.json");
    fs::write(&data_file, serde_json::to_string(&source_document())?)?;

    let output = quizconv(dir.path(), &["refresh"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(read_json(&data_file)?["totalQuestions"], 3);
    Ok(())
}

#[test]
fn test_refresh_with_toml_config() -> Result<()> {
    let dir = tempdir()?;
    let root = dir.path().join("quiz");
    fs::create_dir_all(root.join("banks"))?;
    let data_file = root.join("banks").join("zku.json");
    fs::write(&data_file, serde_json::to_string(&source_document())?)?;

    let config = format!(
        "data_root = {:?}\nfixed_file = \"banks/zku.json\"\n",
        root.display().to_string()
    );
    fs::write(dir.path().join("quizconv.toml"), config)?;

    let output = quizconv(dir.path(), &["refresh", "--config", "quizconv.toml"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(read_json(&data_file)?["questions"][1]["correct_answer"], "AES");
    Ok(())
}

#[test]
fn test_initials_then_lookup() -> Result<()> {
    let dir = tempdir()?;
    fs::create_dir(dir.path().join("data"))?;
    let bank = dir.path().join("data").join("cryptotest.json");
    fs::write(&bank, serde_json::to_string(&source_document())?)?;

    assert_eq!(
        quizconv(dir.path(), &["convert", "data/cryptotest.json"]).status.code(),
        Some(0)
    );
    let normalized = fs::read_to_string(&bank)?;

    let output = quizconv(dir.path(), &["initials"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(fs::read_to_string(&bank)?, normalized);

    let initials = read_json(&dir.path().join("data").join("cryptotest_initials.json"))?;
    assert_eq!(
        initials,
        json!({"questions": [
            {"Xquestion": "wi", "correct_answer": "4"},
            {"Xquestion": "qas", "correct_answer": "AES"},
            {"Xquestion": "js", "correct_answer": null}
        ]})
    );

    let output = quizconv(dir.path(), &["lookup", "WI"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "4");

    let output = quizconv(dir.path(), &["lookup", "as"]);
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "AES");
    Ok(())
}

#[test]
fn test_initials_missing_source() -> Result<()> {
    let dir = tempdir()?;
    let output = quizconv(dir.path(), &["initials"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(!dir.path().join("data").join("cryptotest_initials.json").exists());
    Ok(())
}

#[test]
fn test_bad_arguments_are_usage_errors() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("a.json"), "{}")?;

    for args in [
        &["convert", "--bogus"][..],
        &["convert", "a.json", "b.json"][..],
        &["frobnicate"][..],
        &[][..],
    ] {
        let output = quizconv(dir.path(), args);
        assert_eq!(output.status.code(), Some(1), "参数: {:?}", args);
    }

    // 参数错误不会改写文件
    assert_eq!(fs::read_to_string(dir.path().join("a.json"))?, "{}");
    Ok(())
}

#[test]
fn test_help_and_version_exit_zero() -> Result<()> {
    let dir = tempdir()?;
    assert_eq!(quizconv(dir.path(), &["--help"]).status.code(), Some(0));
    assert_eq!(quizconv(dir.path(), &["--version"]).status.code(), Some(0));
    Ok(())
}

#[test]
fn test_refresh_missing_configured_file() -> Result<()> {
    let dir = tempdir()?;
    let output = quizconv(dir.path(), &["refresh"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(!dir.path().join("data").join("kma2.json").exists());
    Ok(())
}

#[test]
fn test_lookup_all_lists_every_match() -> Result<()> {
    let dir = tempdir()?;
    let index = dir.path().join("initials.json");
    fs::write(
        &index,
        serde_json::to_string(&json!({"questions": [
            {"Xquestion": "dhka", "correct_answer": "Diffie-Hellman"},
            {"Xquestion": "rsaq", "correct_answer": "RSA"},
            {"Xquestion": "dhkb", "correct_answer": "ElGamal"}
        ]}))?,
    )?;

    let output = quizconv(dir.path(), &["lookup", "dhk", "--all", "--index", "initials.json"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["[1/2] dhka → Diffie-Hellman", "[2/2] dhkb → ElGamal"]);

    // 签名没有命中时按答案文本匹配
    let output = quizconv(dir.path(), &["lookup", "gamal", "--all", "--index", "initials.json"]);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "[1/1] dhkb → ElGamal"
    );

    let output = quizconv(dir.path(), &["lookup", "zzz", "--all", "--index", "initials.json"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "未找到匹配");
    Ok(())
}
