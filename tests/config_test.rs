mod common;

use assert2::{check, let_assert};
use common::{TempFiles, temp_dir};
use rstest::rstest;
use site_search::{
    Index, IndexError, JsonLinesSink, SearchConfig, SearchEngine, SearchOutcome, SiteSearch,
};

#[rstest]
fn config_file_overrides_limits_and_markers(temp_dir: TempFiles) {
    let path = temp_dir.write(
        "search.toml",
        r#"
max_results = 2

[highlight]
open = "["
close = "]"
"#,
    );

    let_assert!(Ok(config) = SearchConfig::load(&path));
    let site = SiteSearch::new(SearchEngine::portfolio().with_config(config));

    let outcome = site.query("AWS");
    let_assert!(SearchOutcome::Found { results, .. } = outcome);
    check!(results.len() == 2);
    check!(results[0].highlighted_title == "Experiencia en [AWS]");
}

#[rstest]
fn missing_config_file_is_an_error(temp_dir: TempFiles) {
    let result = SearchConfig::load(&temp_dir.path().join("absent.toml"));
    let_assert!(Err(e) = result);
    check!(format!("{:#}", e).contains("absent.toml"));
}

#[rstest]
fn invalid_config_file_reports_path(temp_dir: TempFiles) {
    let path = temp_dir.write("bad.toml", "max_results = 0\n");
    let_assert!(Err(e) = SearchConfig::load(&path));
    check!(format!("{:#}", e).contains("max_results must be at least 1"));
}

#[rstest]
fn corpus_loads_from_toml_and_json(temp_dir: TempFiles) {
    let toml_path = temp_dir.write(
        "corpus.toml",
        r#"
[[record]]
title = "Rust search"
content = "tokenizer scorer ranking"
url = "rust.html"
type = "project"
section = "projects"
"#,
    );
    let json_path = temp_dir.write(
        "corpus.json",
        r#"[{"title":"Rust search","content":"tokenizer scorer ranking","url":"rust.html","type":"proyecto","section":"projects"}]"#,
    );

    let_assert!(Ok(from_toml) = Index::load(&toml_path));
    let_assert!(Ok(from_json) = Index::load(&json_path));
    check!(from_toml == from_json);

    let engine = SearchEngine::new(from_toml);
    let results = engine.search("ranking");
    check!(results.len() == 1);
    check!(results[0].record.url == "rust.html");
}

#[rstest]
fn corpus_with_blank_url_is_rejected(temp_dir: TempFiles) {
    let path = temp_dir.write(
        "corpus.toml",
        r#"
[[record]]
title = "Untitled"
content = "body"
url = ""
type = "page"
section = "home"
"#,
    );
    let_assert!(Err(IndexError::EmptyField { position: 0, field: "url" }) = Index::load(&path));
}

#[rstest]
fn missing_corpus_file_is_io_error(temp_dir: TempFiles) {
    let_assert!(Err(IndexError::Io(_)) = Index::load(&temp_dir.path().join("none.toml")));
}

#[rstest]
fn analytics_log_records_each_search(temp_dir: TempFiles) {
    let log = temp_dir.path().join("searches.jsonl");
    let_assert!(Ok(sink) = JsonLinesSink::append_to(&log));
    let engine = SearchEngine::portfolio().with_sink(sink);

    let found = engine.search("docker").len();
    let missing = engine.search("kotlin").len();
    check!(found == 1);
    check!(missing == 0);
    drop(engine);

    let content = std::fs::read_to_string(&log).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    check!(
        lines
            == vec![
                r#"{"query":"docker","result_count":1}"#,
                r#"{"query":"kotlin","result_count":0}"#,
            ]
    );
}
