//! End-to-end reconciliation pass against a mocked qBittorrent WebUI.

use httpmock::prelude::*;
use spacewarden_app::{PassSettings, run_pass};
use spacewarden_engine::ReconcilePolicy;
use spacewarden_torrent_qbit::QbitClient;

#[tokio::test]
async fn a_pass_pauses_over_budget_torrents_through_the_webui() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v2/auth/login");
            then.status(200).body("Ok.");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v2/torrents/info");
            then.status(200).json_body(serde_json::json!([
                {
                    "hash": "aa11",
                    "name": "linux.iso",
                    "category": "iso",
                    "size": 4096,
                    "progress": 0.5,
                    "state": "downloading",
                    "force_start": false,
                    "completion_on": 0
                },
                {
                    "hash": "dd44",
                    "name": "album.flac",
                    "category": "music",
                    "size": 2048,
                    "progress": 1.0,
                    "state": "uploading",
                    "force_start": false,
                    "completion_on": 1700000000
                }
            ]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v2/torrents/trackers")
                .query_param("hash", "aa11");
            then.status(200).json_body(serde_json::json!([
                { "url": "udp://tracker.example/announce", "status": 2, "msg": "" }
            ]));
        })
        .await;
    let pause = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v2/torrents/pause")
                .form_urlencoded_tuple("hashes", "aa11");
            then.status(200);
        })
        .await;
    let logout = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v2/auth/logout");
            then.status(200);
        })
        .await;

    let client = QbitClient::new(&server.base_url())?;
    client.login("admin", "adminadmin").await?;

    let dir = tempfile::tempdir()?;
    let settings = PassSettings {
        download_dir: dir.path().to_path_buf(),
        // A margin no volume satisfies forces the pause branch.
        margin_bytes: u64::MAX,
        policy: ReconcilePolicy::default(),
    };
    let summary = run_pass(&client, &settings).await?;
    client.logout().await;

    assert_eq!(summary.processed, 2);
    assert_eq!(summary.paused, 0);
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.report.paused, 1);
    assert!(summary.shortfall.is_some());
    pause.assert_async().await;
    logout.assert_async().await;
    Ok(())
}
