use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_tongdok"))
}

/// Isolated HOME / XDG directories for one test.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir_all(dir.path().join("config")).expect("create config dir");
        std::fs::create_dir_all(dir.path().join("data")).expect("create data dir");
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn config_file(&self) -> PathBuf {
        self.path().join("config").join("tongdok").join("config.toml")
    }

    fn default_db(&self) -> PathBuf {
        self.path().join("data").join("tongdok").join("tongdok.db")
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(bin());
        cmd.args(args)
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join("config"))
            .env("XDG_DATA_HOME", self.path().join("data"))
            .env("NO_COLOR", "1")
            .env_remove("TONGDOK_DB")
            .env_remove("TONGDOK_CONFIG")
            .env_remove("TONGDOK_LOG")
            .env_remove("TONGDOK_LOG_FORMAT")
            .env_remove("RUST_LOG");
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command(args).output().expect("run tongdok")
    }

    fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "tongdok {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("utf-8 stdout")
    }

    fn run_json(&self, args: &[&str]) -> serde_json::Value {
        serde_json::from_str(&self.run_ok(args)).expect("valid JSON on stdout")
    }

    /// Plan starting 2025-01-01: 창세기 1장 at 3/day, 마태복음 1장 at 1/day.
    fn init_default_plan(&self) {
        self.run_ok(&["init", "--start", "2025-01-01", "--timezone", "UTC"]);
    }
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_no_command_prints_help() {
    let sandbox = Sandbox::new();
    let stdout = sandbox.run_ok(&[]);
    assert!(stdout.contains("Usage"));
    assert!(stdout.contains("today"));
}

#[test]
fn test_init_writes_config_and_database() {
    let sandbox = Sandbox::new();
    let stdout = sandbox.run_ok(&["init", "--start", "2025-01-01", "--timezone", "Asia/Seoul"]);

    assert!(stdout.contains("status=ok"));
    assert!(stdout.contains("start=2025-01-01"));
    assert!(sandbox.default_db().exists());

    let config = std::fs::read_to_string(sandbox.config_file()).expect("config written");
    assert!(config.contains("Asia/Seoul"));
    assert!(config.contains("tongdok.db"));
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let sandbox = Sandbox::new();
    sandbox.init_default_plan();

    let output = sandbox.run(&["init", "--start", "2025-02-01"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("--force"));

    sandbox.run_ok(&["init", "--start", "2025-02-01", "--force"]);
    let plan = sandbox.run_json(&["plan", "--json"]);
    assert_eq!(plan["plan"]["start_date"], "2025-02-01");
}

#[test]
fn test_init_rejects_bad_input() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["init", "--ot-book", "마태복음"]);
    assert_eq!(output.status.code(), Some(4));

    let output = sandbox.run(&["init", "--ot-book", "시편", "--ot-chapter", "151"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("1-150"));

    let output = sandbox.run(&["init", "--ot-per-day", "11"]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_today_without_plan_is_not_found() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["today"]);
    assert_eq!(output.status.code(), Some(3));
    let err = stderr(&output);
    assert!(err.contains("error=No reading plan found"));
    assert!(err.contains("hint=Run `tongdok init`"));
}

#[test]
fn test_today_plain_output() {
    let sandbox = Sandbox::new();
    sandbox.init_default_plan();

    let stdout = sandbox.run_ok(&["today", "--date", "2025-01-02"]);
    assert!(stdout.contains("date=2025-01-02"));
    assert!(stdout.contains("day=2"));
    assert!(stdout.contains("old_testament=창세기 4-6장"));
    assert!(stdout.contains("new_testament=마태복음 2장"));
    assert!(stdout.contains("paused=false"));
}

#[test]
fn test_failed_day_repeats_portion() {
    let sandbox = Sandbox::new();
    sandbox.init_default_plan();

    sandbox.run_ok(&["mark", "fail", "--date", "2025-01-02"]);
    let today = sandbox.run_json(&["today", "--date", "2025-01-03", "--json"]);
    assert_eq!(today["portion"]["day_offset"], 1);
    assert_eq!(today["portion"]["old_testament"], "창세기 4-6장");
    assert_eq!(today["portion"]["new_testament"], "마태복음 2장");

    let marked = sandbox.run_json(&["today", "--date", "2025-01-02", "--json"]);
    assert_eq!(marked["status"], "fail");

    sandbox.run_ok(&["unmark", "--date", "2025-01-02"]);
    let today = sandbox.run_json(&["today", "--date", "2025-01-03", "--json"]);
    assert_eq!(today["portion"]["old_testament"], "창세기 7-9장");
}

#[test]
fn test_unmark_missing_day_is_not_found() {
    let sandbox = Sandbox::new();
    sandbox.init_default_plan();
    let output = sandbox.run(&["unmark", "--date", "2025-01-05"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_before_start_is_not_started() {
    let sandbox = Sandbox::new();
    sandbox.init_default_plan();
    let today = sandbox.run_json(&["today", "--date", "2024-12-29", "--json"]);
    assert_eq!(today["portion"]["started"], false);
    assert_eq!(today["portion"]["days_until"], 3);
}

#[test]
fn test_stats_by_month() {
    let sandbox = Sandbox::new();
    sandbox.init_default_plan();
    sandbox.run_ok(&["mark", "success", "--date", "2025-01-01"]);
    sandbox.run_ok(&["mark", "fail", "--date", "2025-01-02"]);
    sandbox.run_ok(&["mark", "success", "--date", "2025-01-03"]);
    sandbox.run_ok(&["mark", "success", "--date", "2025-02-01"]);
    // Re-marking replaces the earlier record.
    sandbox.run_ok(&["mark", "success", "--date", "2025-01-02"]);

    let stats = sandbox.run_json(&["stats", "--month", "2025-03", "--json"]);
    assert_eq!(stats["month"], "2025-03");
    let months = stats["months"].as_array().expect("months array");
    assert_eq!(months.len(), 3);
    assert_eq!(months[0]["month"], "2025-01");
    assert_eq!(months[0]["success"], 3);
    assert_eq!(months[0]["fail"], 0);
    assert_eq!(months[0]["rate"], 100);
    assert_eq!(months[2]["month"], "2025-03");
    assert_eq!(months[2]["total"], 0);
    assert_eq!(months[2]["rate"], 0);

    let plain = sandbox.run_ok(&["stats", "--month", "2025-01"]);
    assert!(plain.contains("2025-01 3 0 3 100"));
    assert!(plain.contains("day=2025-01-02 success"));
}

#[test]
fn test_stats_rejects_bad_month() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["stats", "--month", "2025-13"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("YYYY-MM"));
}

#[test]
fn test_pause_and_resume() {
    let sandbox = Sandbox::new();
    sandbox.init_default_plan();

    sandbox.run_ok(&["pause"]);
    let output = sandbox.run(&["pause"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("already paused"));

    let plan = sandbox.run_json(&["plan", "--json"]);
    assert_eq!(plan["plan"]["is_paused"], true);

    // A failed day inside the pause would move the portion backward.
    let frozen = plan["today"]["day_offset"].clone();
    let output = sandbox.run(&["mark", "fail"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("hint=Run `tongdok resume` first"));
    sandbox.run_ok(&["mark", "success"]);
    let plan = sandbox.run_json(&["plan", "--json"]);
    assert_eq!(plan["today"]["day_offset"], frozen);

    let stdout = sandbox.run_ok(&["resume"]);
    assert!(stdout.contains("paused_days=0"));
    let output = sandbox.run(&["resume"]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_bookmarks_flow() {
    let sandbox = Sandbox::new();

    let stdout = sandbox.run_ok(&["bookmark", "add", "시편", "23", "--note", "목자"]);
    assert!(stdout.contains("chapter=시편 23장"));

    let list = sandbox.run_json(&["bookmark", "list", "--json"]);
    let items = list.as_array().expect("bookmark array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["note"], "목자");
    let id = items[0]["id"].as_str().expect("id").to_string();

    let output = sandbox.run(&["bookmark", "add", "시편", "151"]);
    assert_eq!(output.status.code(), Some(4));

    sandbox.run_ok(&["bookmark", "remove", &id[..8]]);
    let list = sandbox.run_json(&["bookmark", "list", "--json"]);
    assert_eq!(list.as_array().map(Vec::len), Some(0));

    let output = sandbox.run(&["bookmark", "remove", &id]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_highlights_flow() {
    let sandbox = Sandbox::new();
    sandbox.run_ok(&[
        "highlight",
        "add",
        "요한복음",
        "3",
        "16",
        "--text",
        "하나님이 세상을 이처럼 사랑하사",
        "--color",
        "green",
    ]);
    sandbox.run_ok(&["highlight", "add", "시편", "1", "1", "--text", "복 있는 사람은"]);

    let all = sandbox.run_json(&["highlight", "list", "--json"]);
    assert_eq!(all.as_array().map(Vec::len), Some(2));

    let john = sandbox.run_json(&["highlight", "list", "--book", "요한복음", "--json"]);
    let items = john.as_array().expect("highlight array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["color"], "green");
    assert_eq!(items[0]["verse"], 16);

    let output = sandbox.run(&["highlight", "add", "시편", "1", "0", "--text", "x"]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_journal_uses_day_portion_as_passage() {
    let sandbox = Sandbox::new();
    sandbox.init_default_plan();

    sandbox.run_ok(&["journal", "add", "빛이 있으라", "--date", "2025-01-01"]);
    sandbox.run_ok(&[
        "journal",
        "add",
        "두 번째 날",
        "--date",
        "2025-01-02",
        "--passage",
        "시편 1장",
    ]);

    let entries = sandbox.run_json(&["journal", "list", "--json"]);
    let items = entries.as_array().expect("journal array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["date"], "2025-01-02");
    assert_eq!(items[0]["passage"], "시편 1장");
    assert_eq!(items[1]["passage"], "창세기 1-3장 / 마태복음 1장");

    let limited = sandbox.run_json(&["journal", "list", "--until", "2025-01-01", "--json"]);
    assert_eq!(limited.as_array().map(Vec::len), Some(1));
}

#[test]
fn test_journal_body_from_stdin() {
    use std::io::Write;
    use std::process::Stdio;

    let sandbox = Sandbox::new();
    let mut child = sandbox
        .command(&["journal", "add", "--date", "2025-03-01"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn tongdok");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all("파이프로 쓴 묵상".as_bytes())
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait");
    assert!(output.status.success(), "{}", stderr(&output));

    let entries = sandbox.run_json(&["journal", "list", "--json"]);
    assert_eq!(entries[0]["body"], "파이프로 쓴 묵상");
    assert!(entries[0]["passage"].is_null());
}

const REFLECTION: &str = r#"```json
{
  "title": "빛이 있으라",
  "summary": "하나님이 말씀으로 세상을 창조하셨다.",
  "meditation": "질서는 말씀에서 나온다.",
  "prayer": "오늘도 말씀으로 시작하게 하소서.",
  "questions": ["무엇을 새롭게 보았는가?"]
}
```"#;

#[test]
fn test_reflection_import_and_show() {
    let sandbox = Sandbox::new();
    sandbox.init_default_plan();

    let file = sandbox.path().join("reflection.json");
    std::fs::write(&file, REFLECTION).expect("write payload");
    let file = file.to_string_lossy().to_string();

    sandbox.run_ok(&["reflection", "import", &file, "--date", "2025-01-01"]);

    let shown = sandbox.run_json(&["reflection", "show", "--date", "2025-01-01", "--json"]);
    assert_eq!(shown["passage"], "창세기 1-3장 / 마태복음 1장");
    assert_eq!(shown["reflection"]["title"], "빛이 있으라");
    assert_eq!(shown["reflection"]["questions"][0], "무엇을 새롭게 보았는가?");

    let plain = sandbox.run_ok(&["reflection", "show", "--date", "2025-01-01"]);
    assert!(plain.contains("title=빛이 있으라"));
    assert!(plain.contains("question=무엇을 새롭게 보았는가?"));

    sandbox.run_ok(&["reflection", "clear", "--date", "2025-01-01"]);
    let output = sandbox.run(&["reflection", "show", "--date", "2025-01-01"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_reflection_rejects_invalid_payload() {
    let sandbox = Sandbox::new();
    let file = sandbox.path().join("bad.json");
    std::fs::write(&file, r#"{"title": "제목", "questions": []}"#).expect("write payload");
    let file = file.to_string_lossy().to_string();

    let output = sandbox.run(&[
        "reflection",
        "import",
        &file,
        "--date",
        "2025-01-01",
        "--passage",
        "창세기 1장",
    ]);
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("missing field: summary"));
}

#[test]
fn test_settings_round_trip() {
    let sandbox = Sandbox::new();

    let defaults = sandbox.run_json(&["settings", "show", "--json"]);
    assert_eq!(defaults["theme"], "light");
    assert_eq!(defaults["font_size"], 18);

    sandbox.run_ok(&["settings", "theme", "sepia"]);
    let stdout = sandbox.run_ok(&["settings", "font-size", "99"]);
    assert!(stdout.contains("font_size=32"));

    let prefs = sandbox.run_json(&["settings", "show", "--json"]);
    assert_eq!(prefs["theme"], "sepia");
    assert_eq!(prefs["font_size"], 32);
}

#[test]
fn test_db_flag_overrides_default_location() {
    let sandbox = Sandbox::new();
    let db = sandbox.path().join("elsewhere.db");
    let db = db.to_string_lossy().to_string();

    sandbox.run_ok(&["--db", &db, "bookmark", "add", "룻기", "1"]);
    assert!(Path::new(&db).exists());
    assert!(!sandbox.default_db().exists());

    let list = sandbox.run_json(&["bookmark", "list", "--db", &db, "--json"]);
    assert_eq!(list.as_array().map(Vec::len), Some(1));
}

#[test]
fn test_books_and_check() {
    let sandbox = Sandbox::new();

    let books = sandbox.run_json(&["books", "--json"]);
    let items = books.as_array().expect("book array");
    assert_eq!(items.len(), 66);
    assert_eq!(items[0]["name"], "창세기");
    assert_eq!(items[65]["name"], "요한계시록");

    let nt = sandbox.run_json(&["books", "--testament", "new", "--json"]);
    assert_eq!(nt.as_array().map(Vec::len), Some(27));

    let stdout = sandbox.run_ok(&["check"]);
    assert!(stdout.contains("Integrity check: OK"));
}

#[test]
fn test_completions() {
    let sandbox = Sandbox::new();
    let stdout = sandbox.run_ok(&["completions", "bash"]);
    assert!(stdout.contains("tongdok"));
}
