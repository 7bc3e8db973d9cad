#![allow(clippy::unwrap_used)]
//! End-to-end translation tests against a mock chat completion server.

use std::process::Output;

use assert_cmd::Command;
use assert_cmd::assert::OutputAssertExt;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Fixture {
    server: MockServer,
    home: TempDir,
}

impl Fixture {
    async fn new() -> Self {
        let server = MockServer::start().await;
        let home = TempDir::new().unwrap();
        Self { server, home }
    }

    /// Writes a config pointing at the mock server.
    fn configure(&self) {
        let dir = self.home.path().join("tzh");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("config.toml"),
            format!(
                "endpoint = \"{}/v1\"\nmodel = \"test-model\"\n\
                 api_key = \"sk-test\"\ntimeout = 5\n",
                self.server.uri()
            ),
        )
        .unwrap();
    }

    async fn reply(&self, needle: &str, content: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_string_contains(needle))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl-test",
                "object": "chat.completion",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": content},
                    "finish_reason": "stop"
                }]
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    #[allow(deprecated)]
    async fn run(&self, args: &[&str], stdin: &str) -> Output {
        let mut cmd = Command::cargo_bin("tzh").unwrap();
        cmd.env("XDG_CONFIG_HOME", self.home.path())
            .env("NO_COLOR", "1")
            .env_remove("TZH_LOG")
            .args(args)
            .write_stdin(stdin.to_string());
        tokio::task::spawn_blocking(move || cmd.output().unwrap())
            .await
            .unwrap()
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_plain_translation_prints_only_the_result() {
    let fx = Fixture::new().await;
    fx.configure();
    fx.reply("Hello World", "你好，世界").await;

    let output = fx.run(&["t", "-p", "Hello", "World"], "").await;

    output.assert().success().stdout("你好，世界\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_decorated_translation_shows_original_and_result() {
    let fx = Fixture::new().await;
    fx.configure();
    fx.reply("Good morning", "早上好").await;

    let output = fx.run(&["t", "Good morning"], "").await;

    output
        .assert()
        .success()
        .stdout(predicate::str::contains("Original:"))
        .stdout(predicate::str::contains("Good morning"))
        .stdout(predicate::str::contains("Translation (zh):"))
        .stdout(predicate::str::contains("早上好"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_stdin_is_translated_when_no_text_given() {
    let fx = Fixture::new().await;
    fx.configure();
    fx.reply("piped in text", "管道文本").await;

    let output = fx.run(&["t", "-p"], "piped in text\n").await;

    output.assert().success().stdout("管道文本\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_stream_translates_lines_in_order() {
    let fx = Fixture::new().await;
    fx.configure();
    fx.reply("first line here", "第一行").await;
    fx.reply("second line here", "第二行").await;
    fx.reply("third line here", "第三行").await;

    let output = fx
        .run(
            &["t", "-s", "-p"],
            "first line here\nsecond line here\nthird line here\n",
        )
        .await;

    output.assert().success().stdout("第一行\n第二行\n第三行\n");

    let requests = fx.server.received_requests().await.unwrap();
    let bodies: Vec<String> = requests
        .iter()
        .map(|r| String::from_utf8_lossy(&r.body).into_owned())
        .collect();
    assert_eq!(bodies.len(), 3);
    assert!(bodies[0].contains("first line here"));
    assert!(bodies[1].contains("second line here"));
    assert!(bodies[2].contains("third line here"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_target_language_reaches_the_prompt() {
    let fx = Fixture::new().await;
    fx.configure();
    fx.reply("to Japanese", "こんにちは").await;

    let output = fx.run(&["t", "-p", "--to", "ja", "Hello there"], "").await;

    output.assert().success().stdout("こんにちは\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_api_error_exits_with_protocol_code() {
    let fx = Fixture::new().await;
    fx.configure();
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&fx.server)
        .await;

    let output = fx.run(&["t", "-p", "Hello World"], "").await;

    output
        .assert()
        .failure()
        .code(exitcode::PROTOCOL)
        .stdout("")
        .stderr(predicate::str::contains("500"))
        .stderr(predicate::str::contains("upstream exploded"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_stream_stops_at_first_failure() {
    let fx = Fixture::new().await;
    fx.configure();
    fx.reply("first line here", "第一行").await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_string_contains("second line here"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&fx.server)
        .await;

    let output = fx
        .run(
            &["t", "-s", "-p"],
            "first line here\nsecond line here\nthird line here\n",
        )
        .await;

    output
        .assert()
        .failure()
        .code(exitcode::PROTOCOL)
        .stdout("第一行\n");
    assert_eq!(fx.server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_config_sends_no_request() {
    let fx = Fixture::new().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&fx.server)
        .await;

    let output = fx.run(&["t", "Hello"], "").await;

    output.assert().failure().code(exitcode::CONFIG);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_empty_stdin_is_rejected() {
    let fx = Fixture::new().await;
    fx.configure();
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&fx.server)
        .await;

    let output = fx.run(&["t"], "  \n\n").await;

    output
        .assert()
        .failure()
        .code(exitcode::NOINPUT)
        .stderr(predicate::str::contains("No text provided"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_streamed_single_words_are_translated_not_defined() {
    let fx = Fixture::new().await;
    fx.configure();
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_string_contains("bilingual dictionary"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&fx.server)
        .await;
    fx.reply("Hello", "你好").await;
    fx.reply("Goodbye", "再见").await;

    let output = fx.run(&["t", "-s", "-p"], "Hello\nGoodbye\n").await;

    output.assert().success().stdout("你好\n再见\n");
}
