use std::sync::Arc;
use std::time::Duration;

use repolyzer::server::api_server::ApiServer;
use repolyzer::structs::repo_ref::RepoRef;
use serde_json::{json, Value};

use crate::support::{analyzer, file, FakeGithub, ScriptedProvider};

#[tokio::test]
async fn serves_analysis_over_tcp_until_shutdown() {
    let github = Arc::new(FakeGithub::new("hello").dir("", vec![file("README.md"), file("LICENSE")]));
    let mut server = ApiServer::new(analyzer(&github, None));

    let addr = server.start(([127, 0, 0, 1], 0).into()).await.unwrap();
    assert_eq!(server.local_addr(), Some(addr));

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{}/api/analyze", addr))
        .json(&json!({ "repoUrl": "https://github.com/octo/hello" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["basicInfo"]["name"], "hello");
    assert_eq!(body["vulnerabilities"].as_array().unwrap().len(), 1);

    server.shutdown().await.unwrap();
    assert!(server.local_addr().is_none());
}

#[tokio::test]
async fn review_outlives_a_disconnected_client() {
    let github = Arc::new(
        FakeGithub::new("hello")
            .dir("", vec![file("main.py")])
            .file("main.py", "print('hi')"),
    );
    let provider = Arc::new(
        ScriptedProvider::answering(r#"{"good":["short"],"bad":[],"improvements":[]}"#)
            .delayed(Duration::from_millis(300)),
    );
    let analyzer = analyzer(&github, Some(&provider));
    let mut server = ApiServer::new(Arc::clone(&analyzer));
    let addr = server.start(([127, 0, 0, 1], 0).into()).await.unwrap();

    let impatient = reqwest::Client::builder()
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let result = impatient
        .post(format!("http://{}/api/analyze", addr))
        .json(&json!({ "repoUrl": "https://github.com/octo/hello" }))
        .send()
        .await;
    assert!(result.is_err());

    let repo = RepoRef::new("octo", "hello");
    let mut stored = None;
    for _ in 0..100 {
        stored = analyzer.latest_report(&repo);
        if stored.is_some() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    let stored = stored.expect("report recorded after the client went away");
    assert_eq!(provider.finished_count(), 1);
    assert_eq!(stored.file_analyses.len(), 1);
    assert_eq!(stored.file_analyses[0].good, vec!["short"]);

    server.shutdown().await.unwrap();
}
