use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn cli() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cover-letter-pdf"));
    cmd.env_remove("COVER_LETTER_CONFIG");
    cmd
}

fn pdf_text(path: &Path) -> String {
    let bytes = fs::read(path).expect("read generated pdf");
    assert!(bytes.starts_with(b"%PDF-"), "{} is not a PDF", path.display());
    String::from_utf8_lossy(&bytes).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn render_defaults_output_next_to_input() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("letter.txt");
    fs::write(&input, "Dear Hiring Team,\n\nI would love to join.").expect("write input");

    let output = cli().arg("render").arg(&input).output().expect("run cli");
    assert!(output.status.success(), "{}", stderr(&output));

    let pdf = pdf_text(&dir.path().join("letter.pdf"));
    assert!(pdf.contains("(Dear Hiring Team,) Tj"));
    assert!(pdf.contains("(I would love to join.) Tj"));
}

#[test]
fn render_applies_width_and_title_flags() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("letter.txt");
    let output_path = dir.path().join("out.pdf");
    fs::write(&input, "This is paragraph two.").expect("write input");

    let output = cli()
        .args(["render", "--width", "20", "--title", "Cover Letter - Ada - Acme"])
        .arg(&input)
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(output.status.success(), "{}", stderr(&output));

    let pdf = pdf_text(&output_path);
    assert!(pdf.contains("(This is paragraph) Tj"));
    assert!(pdf.contains("(two.) Tj"));
    assert!(pdf.contains("(Cover Letter - Ada - Acme) Tj"));
}

#[test]
fn render_reads_stdin() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output_path = dir.path().join("stdin.pdf");

    let mut child = cli()
        .args(["render", "-"])
        .arg(&output_path)
        .stdin(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn cli");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"From standard input.")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait");
    assert!(output.status.success(), "{}", stderr(&output));

    assert!(pdf_text(&output_path).contains("(From standard input.) Tj"));
}

#[test]
fn render_uses_config_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("letter.txt");
    let config = dir.path().join("layout.json");
    fs::write(&input, "Plain letter.").expect("write input");
    fs::write(&config, r#"{"title": null, "header": null, "body_font": {"builtin": "Times-Roman"}}"#)
        .expect("write config");

    let output = cli()
        .arg("render")
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .output()
        .expect("run cli");
    assert!(output.status.success(), "{}", stderr(&output));

    let pdf = pdf_text(&dir.path().join("letter.pdf"));
    assert!(pdf.contains("/BaseFont /Times-Roman"));
    assert!(!pdf.contains("Helvetica-Bold"));
}

#[test]
fn render_refuses_to_overwrite_pdf_input() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("letter.pdf");
    fs::write(&input, "Letter text saved with a .pdf name.").expect("write input");

    let output = cli().arg("render").arg(&input).output().expect("run cli");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("overwrite"), "{}", stderr(&output));
    assert_eq!(
        fs::read_to_string(&input).expect("read input"),
        "Letter text saved with a .pdf name."
    );
}

#[test]
fn invalid_config_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("letter.txt");
    let config = dir.path().join("layout.json");
    fs::write(&input, "Plain letter.").expect("write input");
    fs::write(&config, r#"{"line_pitch": -3}"#).expect("write config");

    let output = cli()
        .arg("render")
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .output()
        .expect("run cli");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("invalid configuration"));
}

#[test]
fn missing_input_fails() {
    let output = cli()
        .args(["render", "/no/such/letter.txt"])
        .output()
        .expect("run cli");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("file not found"));
}

#[test]
fn chat_renders_latest_letter_and_transcript() {
    let dir = tempfile::tempdir().expect("temp dir");
    let log = dir.path().join("session.json");
    fs::write(
        &log,
        r#"[
            {"role": "assistant", "message": "First draft."},
            {"role": "user", "message": "Shorter please."},
            {"role": "assistant", "message": "Short draft."}
        ]"#,
    )
    .expect("write log");

    let output = cli()
        .args(["chat", "--transcript"])
        .arg(&log)
        .output()
        .expect("run cli");
    assert!(output.status.success(), "{}", stderr(&output));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim_end(),
        "**You:** Shorter please.\n**Assistant:** Short draft."
    );
    let pdf = pdf_text(&dir.path().join("session.pdf"));
    assert!(pdf.contains("(Short draft.) Tj"));
}

#[test]
fn chat_without_letter_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let log = dir.path().join("session.json");
    fs::write(&log, r#"[{"role": "user", "message": "Hi"}]"#).expect("write log");

    let output = cli().arg("chat").arg(&log).output().expect("run cli");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("no letter"));
}

#[test]
fn prompt_embeds_resume_and_job() {
    let dir = tempfile::tempdir().expect("temp dir");
    let resume = dir.path().join("resume.txt");
    let job = dir.path().join("job.txt");
    fs::write(&resume, "Systems programmer, Rust and C.").expect("write resume");
    fs::write(&job, "Storage engineer at Acme.").expect("write job");

    let output = cli()
        .arg("prompt")
        .arg("--resume")
        .arg(&resume)
        .arg("--job")
        .arg(&job)
        .output()
        .expect("run cli");
    assert!(output.status.success(), "{}", stderr(&output));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("You are an AI assistant"));
    assert!(stdout.contains("Systems programmer, Rust and C."));
    assert!(stdout.contains("Storage engineer at Acme."));
}

#[test]
fn prompt_rejects_blank_job() {
    let dir = tempfile::tempdir().expect("temp dir");
    let resume = dir.path().join("resume.txt");
    let job = dir.path().join("job.txt");
    fs::write(&resume, "Systems programmer.").expect("write resume");
    fs::write(&job, "  \n").expect("write job");

    let output = cli()
        .arg("prompt")
        .arg("--resume")
        .arg(&resume)
        .arg("--job")
        .arg(&job)
        .output()
        .expect("run cli");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("job description must not be empty"));
}
