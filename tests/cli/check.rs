use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_missing_dependency_fails_the_run() -> Result<()> {
    let test = CliTest::with_file(
        "src/components/Counter.tsx",
        r#"
  export function Counter() {
      const count = 0;
      useEffect(() => { console.log(count); }, []);
      return <span>{count}</span>;
  }
  "#,
    )?;

    let output = test.run(&[])?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("components/Counter.tsx"));
    assert!(out.contains("useEffect"));
    assert!(out.contains("count"));
    Ok(())
}

#[test]
fn test_clean_project_succeeds() -> Result<()> {
    let test = CliTest::with_file(
        "src/Button.tsx",
        r#"
  export function Button({ onClick }) {
      const handle = useCallback(() => onClick(), [onClick]);
      return <button onClick={handle}>Go</button>;
  }
  "#,
    )?;

    let output = test.run(&[])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("no missing dependencies found"));
    Ok(())
}

#[test]
fn test_state_setters_and_refs_are_exempt() -> Result<()> {
    let test = CliTest::with_file(
        "src/Canvas.tsx",
        r#"
  export function Canvas() {
      const [ready, setReady] = useState(false);
      const canvasRef = useRef(null);
      useEffect(() => {
          setReady(true);
          const ctx = canvasRef.current;
      }, []);
      return <canvas ref={canvasRef} />;
  }
  "#,
    )?;

    let output = test.run(&[])?;

    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_explicit_target_directory() -> Result<()> {
    let test = CliTest::with_file(
        "app/Panel.tsx",
        "useMemo(() => total * rate, [total]);",
    )?;

    let output = test.run(&["app"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("rate"));
    Ok(())
}

#[test]
fn test_nonexistent_target_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["missing-dir"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("does not exist"));
    assert!(!stdout(&output).contains("Files scanned"));
    Ok(())
}

#[test]
fn test_json_report_is_written() -> Result<()> {
    let test = CliTest::with_file(
        "src/App.tsx",
        r#"
  const count = 0;
  useEffect(() => { console.log(count); }, []);
  "#,
    )?;

    let output = test.run(&["--json=report.json"])?;
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(test.project_dir().join("report.json"))?)?;

    assert!(report["timestamp"].is_u64());
    assert_eq!(report["summary"]["filesScanned"], 1);
    assert_eq!(report["summary"]["filesWithIssues"], 1);
    assert_eq!(report["summary"]["totalMissingDependencies"], 1);
    assert_eq!(report["files"][0]["path"], "App.tsx");
    let hook = &report["files"][0]["hooks"][0];
    assert_eq!(hook["hookName"], "useEffect");
    assert_eq!(hook["line"], 3);
    assert_eq!(hook["missingDependencies"][0], "count");
    Ok(())
}

#[test]
fn test_json_reports_are_idempotent_modulo_timestamp() -> Result<()> {
    let test = CliTest::with_file(
        "src/App.tsx",
        "useEffect(() => run(task), []);",
    )?;

    test.run(&["--json=first.json"])?;
    test.run(&["--json=second.json"])?;

    let mut first: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(test.project_dir().join("first.json"))?)?;
    let mut second: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(test.project_dir().join("second.json"))?)?;
    first["timestamp"] = serde_json::Value::from(0);
    second["timestamp"] = serde_json::Value::from(0);

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_node_modules_is_skipped() -> Result<()> {
    let test = CliTest::with_file(
        "src/node_modules/lib/Widget.tsx",
        "useEffect(() => run(task), []);",
    )?;
    test.write_file("src/Page.tsx", "export const Page = () => <div />;")?;

    let output = test.run(&[])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Files scanned:        1"));
    Ok(())
}

#[test]
fn test_parse_error_does_not_abort_the_run() -> Result<()> {
    let test = CliTest::with_file("src/broken.tsx", "const = <<<")?;
    test.write_file(
        "src/App.tsx",
        "useEffect(() => { console.log(count); }, []);",
    )?;

    let output = test.run(&[])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("could not be parsed"));
    assert!(stdout(&output).contains("count"));
    Ok(())
}

#[test]
fn test_config_source_root() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".hookcheckrc.json", r#"{ "sourceRoot": "ui" }"#)?;
    test.write_file("ui/Panel.tsx", "useMemo(() => total * rate, [total]);")?;

    let output = test.run(&[])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("rate"));
    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".hookcheckrc.json",
        r#"{ "ignores": ["**/generated/**"] }"#,
    )?;
    test.write_file(
        "src/generated/Client.tsx",
        "useEffect(() => run(task), []);",
    )?;
    test.write_file("src/Page.tsx", "export const Page = () => <div />;")?;

    let output = test.run(&[])?;

    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_test_files_are_ignored_by_default() -> Result<()> {
    let test = CliTest::with_file(
        "src/App.test.tsx",
        "useEffect(() => run(task), []);",
    )?;
    test.write_file("src/App.tsx", "export const App = () => <div />;")?;

    let output = test.run(&[])?;

    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["--help"])?;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("--json"));
    assert!(out.contains("--verbose"));
    Ok(())
}
