use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use warp::http::StatusCode;

use crate::support::{analyzer, api, dir, file, get, post_analyze, FakeGithub, ScriptedProvider};

fn repo_with_sources() -> FakeGithub {
    FakeGithub::new("hello")
        .dir("", vec![file("README.md"), dir("src")])
        .dir("src", vec![file("src/a.rb"), file("src/b.php")])
        .file("src/a.rb", "puts 1")
        .file("src/b.php", "<?php echo 1;")
}

#[tokio::test]
async fn latest_report_is_served_after_analysis() {
    let github = Arc::new(repo_with_sources());
    let api = api(analyzer(&github, None));

    let (status, body) = get(&api, "/api/analyze/octo/hello").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "No analysis recorded for octo/hello." }));

    let (_, posted) = post_analyze(&api, json!({ "repoUrl": "https://github.com/octo/hello" })).await;
    let (status, stored) = get(&api, "/api/analyze/octo/hello").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(stored, posted);
}

#[tokio::test]
async fn deferred_analysis_returns_pending_then_completes() {
    let github = Arc::new(repo_with_sources());
    let provider = Arc::new(ScriptedProvider::answering(r#"{"good":["ok"],"bad":[],"improvements":[]}"#));
    let api = api(analyzer(&github, Some(&provider)));

    let (status, body) = post_analyze(
        &api,
        json!({ "repoUrl": "https://github.com/octo/hello", "deferred": true }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["fileAnalyses"], json!([]));
    assert_eq!(body["suggestions"].as_array().unwrap().len(), 2);

    let stored = wait_for_settled(&api, "/api/analyze/octo/hello").await;

    assert_eq!(stored["status"], "completed");
    assert_eq!(stored["basicInfo"], body["basicInfo"]);
    assert_eq!(stored["suggestions"], body["suggestions"]);
    let paths: Vec<&str> = stored["fileAnalyses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, vec!["src/a.rb", "src/b.php"]);
    assert_eq!(provider.call_count(), 2);
}

#[tokio::test]
async fn deferred_flag_without_provider_completes_immediately() {
    let github = Arc::new(repo_with_sources());
    let api = api(analyzer(&github, None));

    let (_, body) = post_analyze(
        &api,
        json!({ "repoUrl": "https://github.com/octo/hello", "deferred": true }),
    )
    .await;

    assert_eq!(body["status"], "completed");
    assert_eq!(body["fileAnalyses"], json!([]));
}

#[tokio::test]
async fn health_and_unknown_routes() {
    let github = Arc::new(repo_with_sources());
    let api = api(analyzer(&github, None));

    let (status, body) = get(&api, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));

    let (status, body) = get(&api, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

async fn wait_for_settled<F>(api: &F, path: &str) -> Value
where
    F: warp::Filter + 'static,
    F::Extract: warp::Reply + Send,
{
    for _ in 0..200 {
        let (status, body) = get(api, path).await;
        if status == StatusCode::OK && body["status"] != "pending" {
            return body;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("analysis at {} never settled", path);
}
