use anyhow::Result;
use label_commands::{
    run_command, BuildConfig, Command, CommandRecord, CommandsError, DedupeConfig, ExpandConfig,
    LocalStorage,
};
use serde_json::json;
use std::path::Path;
use tempfile::TempDir;

fn write_json(dir: &Path, relative: &str, value: &serde_json::Value) -> Result<()> {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

fn read_commands(dir: &Path, relative: &str) -> Result<Vec<CommandRecord>> {
    let raw = std::fs::read_to_string(dir.join(relative))?;
    Ok(serde_json::from_str(&raw)?)
}

fn pairs(commands: &[CommandRecord]) -> Vec<(String, String)> {
    commands
        .iter()
        .map(|c| {
            (
                c.name().and_then(|v| v.as_str()).unwrap_or_default().to_string(),
                c.target_url().and_then(|v| v.as_str()).unwrap_or_default().to_string(),
            )
        })
        .collect()
}

fn pair(name: &str, url: &str) -> (String, String) {
    (name.to_string(), url.to_string())
}

#[tokio::test]
async fn test_round_trip_scenario() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_json(
        temp_dir.path(),
        "labels.json",
        &json!([
            {"label": "bug", "projects": ["http://x/1"]},
            {"label": "bug", "projects": ["http://x/1", "http://x/2"]}
        ]),
    )?;
    let storage = LocalStorage::new(temp_dir.path());

    let outputs = run_command(&Command::Build(BuildConfig::default()), storage).await?;

    assert_eq!(outputs, vec!["out/commands.json", "out/commands-deduped.json"]);

    let expanded = read_commands(temp_dir.path(), "out/commands.json")?;
    assert_eq!(
        pairs(&expanded),
        vec![
            pair("bug", "http://x/1"),
            pair("bug", "http://x/1"),
            pair("bug", "http://x/2"),
        ]
    );

    let deduped = read_commands(temp_dir.path(), "out/commands-deduped.json")?;
    assert_eq!(
        pairs(&deduped),
        vec![pair("bug", "http://x/1"), pair("bug", "http://x/2")]
    );
    Ok(())
}

#[tokio::test]
async fn test_expand_output_format() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_json(
        temp_dir.path(),
        "labels.json",
        &json!([{"label": "area/alerting", "projects": ["https://github.com/orgs/acme/projects/69"]}]),
    )?;

    run_command(
        &Command::Expand(ExpandConfig::default()),
        LocalStorage::new(temp_dir.path()),
    )
    .await?;

    let written = std::fs::read_to_string(temp_dir.path().join("out/commands.json"))?;
    let expected = r#"[
  {
    "type": "label",
    "name": "area/alerting",
    "action": "addToProject",
    "addToProject": {
      "url": "https://github.com/orgs/acme/projects/69"
    }
  }
]"#;
    assert_eq!(written, expected);
    Ok(())
}

#[tokio::test]
async fn test_empty_inputs_produce_empty_outputs() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_json(temp_dir.path(), "labels.json", &json!([]))?;
    write_json(temp_dir.path(), "in/commands.json", &json!([]))?;
    let storage = LocalStorage::new(temp_dir.path());

    run_command(&Command::Expand(ExpandConfig::default()), storage.clone()).await?;
    run_command(
        &Command::Dedupe(DedupeConfig {
            input: "in/commands.json".to_string(),
            output: "in/deduped.json".to_string(),
        }),
        storage,
    )
    .await?;

    assert_eq!(std::fs::read_to_string(temp_dir.path().join("out/commands.json"))?, "[]");
    assert_eq!(std::fs::read_to_string(temp_dir.path().join("in/deduped.json"))?, "[]");
    Ok(())
}

#[tokio::test]
async fn test_dedupe_keeps_hand_written_commands() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let manual = json!({"type": "label", "name": "needs-triage", "action": "comment", "comment": "Thanks!"});
    write_json(
        temp_dir.path(),
        "out/commands.json",
        &json!([
            manual,
            {"type": "label", "name": "bug", "action": "addToProject", "addToProject": {"url": "http://x/1"}},
            manual,
            {"type": "issue", "name": "bug", "action": "other", "addToProject": {"url": "http://x/1"}}
        ]),
    )?;

    run_command(
        &Command::Dedupe(DedupeConfig::default()),
        LocalStorage::new(temp_dir.path()),
    )
    .await?;

    let raw = std::fs::read_to_string(temp_dir.path().join("out/commands-deduped.json"))?;
    let output: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(
        output,
        json!([
            manual,
            {"type": "label", "name": "bug", "action": "addToProject", "addToProject": {"url": "http://x/1"}},
            manual
        ])
    );
    Ok(())
}

#[tokio::test]
async fn test_dedupe_malformed_input_writes_no_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::create_dir_all(temp_dir.path().join("out"))?;
    std::fs::write(temp_dir.path().join("out/commands.json"), "[{\"name\": ")?;

    let result = run_command(
        &Command::Dedupe(DedupeConfig::default()),
        LocalStorage::new(temp_dir.path()),
    )
    .await;

    let err = result.unwrap_err();
    assert!(matches!(err, CommandsError::ParseError { .. }));
    assert_ne!(err.exit_code(), 0);
    assert!(!temp_dir.path().join("out/commands-deduped.json").exists());
    Ok(())
}

#[tokio::test]
async fn test_failed_expand_keeps_previous_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_json(temp_dir.path(), "labels.json", &json!([{"label": "bug"}]))?;
    write_json(temp_dir.path(), "out/commands.json", &json!(["previous"]))?;

    let err = run_command(
        &Command::Build(BuildConfig::default()),
        LocalStorage::new(temp_dir.path()),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CommandsError::ParseError { .. }));
    let kept: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(
        temp_dir.path().join("out/commands.json"),
    )?)?;
    assert_eq!(kept, json!(["previous"]));
    assert!(!temp_dir.path().join("out/commands-deduped.json").exists());
    Ok(())
}

#[tokio::test]
async fn test_missing_input_is_io_error() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let err = run_command(
        &Command::Expand(ExpandConfig::default()),
        LocalStorage::new(temp_dir.path()),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CommandsError::IoError { .. }));
    assert_eq!(err.exit_code(), 3);
    assert!(!temp_dir.path().join("out").exists());
    Ok(())
}

#[tokio::test]
async fn test_same_input_and_output_is_rejected_before_io() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_json(temp_dir.path(), "commands.json", &json!([]))?;

    let err = run_command(
        &Command::Dedupe(DedupeConfig {
            input: "commands.json".to_string(),
            output: "./commands.json".to_string(),
        }),
        LocalStorage::new(temp_dir.path()),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CommandsError::InvalidConfigValueError { .. }));
    assert_eq!(err.exit_code(), 2);
    Ok(())
}

#[tokio::test]
async fn test_dedupe_is_idempotent_on_disk() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_json(
        temp_dir.path(),
        "labels.json",
        &json!([
            {"label": "bug", "projects": ["http://x/1", "http://x/2", "http://x/1"]},
            {"label": "docs", "projects": ["http://x/2"]},
            {"label": "bug", "projects": ["http://x/2"]}
        ]),
    )?;
    let storage = LocalStorage::new(temp_dir.path());

    run_command(&Command::Build(BuildConfig::default()), storage.clone()).await?;
    run_command(
        &Command::Dedupe(DedupeConfig {
            input: "out/commands-deduped.json".to_string(),
            output: "out/commands-deduped-again.json".to_string(),
        }),
        storage,
    )
    .await?;

    let once = std::fs::read_to_string(temp_dir.path().join("out/commands-deduped.json"))?;
    let twice = std::fs::read_to_string(temp_dir.path().join("out/commands-deduped-again.json"))?;
    assert_eq!(once, twice);
    assert_eq!(read_commands(temp_dir.path(), "out/commands-deduped.json")?.len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_dedupe_writes_hand_written_records_byte_for_byte() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = r#"[
  {
    "name": "needs-triage",
    "comment": "Thanks!",
    "type": "label",
    "action": "comment"
  },
  {
    "action": "addToProject",
    "name": 7,
    "addToProject": {
      "url": "http://x/1",
      "column": "Todo"
    },
    "type": "label"
  }
]"#;
    std::fs::create_dir_all(temp_dir.path().join("out"))?;
    std::fs::write(temp_dir.path().join("out/commands.json"), input)?;

    run_command(
        &Command::Dedupe(DedupeConfig::default()),
        LocalStorage::new(temp_dir.path()),
    )
    .await?;

    let written = std::fs::read_to_string(temp_dir.path().join("out/commands-deduped.json"))?;
    assert_eq!(written, input);
    Ok(())
}
