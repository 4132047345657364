use std::process::Command;

use assert_cmd::prelude::*;

/// Every demo with a line its output must contain when run on the fixtures.
const DEMOS: &[(&str, &str)] = &[
    ("00_tracing", ""),
    ("01_sentiment_correlation", "AAPL daily: r ="),
    ("02_headline_statistics", "27 headlines"),
    ("03_multi_ticker_panel", "NOPE   skipped:"),
];

fn run_demo(name: &str) -> String {
    let mut cmd = Command::new(env!("CARGO"));
    cmd.args(["run", "--quiet", "-p", "tidings-demos", "--example", name])
        .env_remove("TIDINGS_NEWS_CSV");
    let out = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(out).expect("demo output is UTF-8")
}

#[test]
fn demos_run_on_fixtures() {
    for (name, expected) in DEMOS {
        let stdout = run_demo(name);
        assert!(
            stdout.contains(expected),
            "{name} printed:\n{stdout}"
        );
    }
}

#[test]
fn every_demo_is_listed() {
    let mut on_disk: Vec<String> = std::fs::read_dir("examples")
        .expect("read examples dir")
        .flatten()
        .filter_map(|e| {
            let name = e.file_name().into_string().ok()?;
            name.strip_suffix(".rs").map(str::to_string)
        })
        .collect();
    on_disk.sort();
    let listed: Vec<&str> = DEMOS.iter().map(|(n, _)| *n).collect();
    assert_eq!(on_disk, listed);
}
