//! End-to-end tests for the `lm` command against a mocked relay

use pmolmbot::handler::{
    MSG_LIST_FAILED, MSG_PARSE_FAILED, MSG_RANDOM_FAILED, MSG_STATUS_FAILED, MSG_STATUS_TIMEOUT,
    MSG_STATUS_UNKNOWN, MSG_TRACK_FAILED,
};
use pmolmbot::{BotConfig, LmHandler, Reply};
use pmospotify::SpotifyStatusClient;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn handler_for(mock_server: &MockServer) -> LmHandler {
    let config = BotConfig {
        status_url: format!("{}/get", mock_server.uri()),
        playlist_url: format!("{}/playlist", mock_server.uri()),
        ..BotConfig::default()
    };
    LmHandler::new(config).unwrap()
}

/// Playlist document with tracks named after `names`; every album has a cover
fn playlist_json(names: &[&str], total: Option<usize>) -> serde_json::Value {
    let tracks: Vec<_> = names
        .iter()
        .map(|name| {
            json!({
                "track": {
                    "name": name,
                    "album": {
                        "name": format!("Album {name}"),
                        "images": [
                            { "url": format!("https://i.scdn.co/image/{name}-640") },
                            { "url": format!("https://i.scdn.co/image/{name}-300") }
                        ]
                    },
                    "artists": [{ "name": format!("Artist {name}") }, { "name": "Guest" }]
                }
            })
        })
        .collect();

    let mut document = json!({ "tracks": tracks });
    if let Some(total) = total {
        document["total_tracks_retrieved"] = json!(total);
    }
    document
}

async fn mount_playlist(mock_server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/playlist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(mock_server)
        .await;
}

/// Server that fails the test if any request reaches it
async fn untouched_server() -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;
    mock_server
}

// ============================================================================
// Now playing
// ============================================================================

#[tokio::test]
async fn test_now_playing_with_cover() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Teardrop",
            "artist": "Massive Attack",
            "album_art_url": "https://i.scdn.co/image/mezzanine"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let replies = handler_for(&mock_server).replies("lm").await;

    assert_eq!(
        replies,
        vec![
            Reply::text("Now playing | Teardrop - Massive Attack"),
            Reply::image("https://i.scdn.co/image/mezzanine"),
        ]
    );
}

#[tokio::test]
async fn test_now_playing_without_cover_and_fields() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "album_art_url": "" })))
        .mount(&mock_server)
        .await;

    let replies = handler_for(&mock_server).replies("lm").await;

    assert_eq!(
        replies,
        vec![Reply::text("Now playing | unknown track - unknown artist")]
    );
}

#[tokio::test]
async fn test_now_playing_error_status() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let replies = handler_for(&mock_server).replies("lm").await;
    assert_eq!(replies, vec![Reply::text(MSG_STATUS_FAILED)]);
}

#[tokio::test]
async fn test_now_playing_malformed_json() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"title\": "))
        .mount(&mock_server)
        .await;

    let replies = handler_for(&mock_server).replies("lm").await;
    assert_eq!(replies, vec![Reply::text(MSG_PARSE_FAILED)]);
}

#[tokio::test]
async fn test_now_playing_timeout() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "title": "late" }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let config = BotConfig::from_yaml_str(&format!(
        "status_url: {}/get\nrequest_timeout_secs: 1\n",
        mock_server.uri()
    ))
    .unwrap();
    let handler = LmHandler::new(config).unwrap();

    let replies = handler.replies("lm").await;
    assert_eq!(replies, vec![Reply::text(MSG_STATUS_TIMEOUT)]);
}

#[tokio::test]
async fn test_now_playing_unreachable() {
    let config = BotConfig {
        status_url: "http://127.0.0.1:9/get".to_string(),
        ..BotConfig::default()
    };
    let handler = LmHandler::new(config).unwrap();

    let replies = handler.replies("lm").await;
    assert_eq!(replies, vec![Reply::text(MSG_STATUS_UNKNOWN)]);
}

// ============================================================================
// list
// ============================================================================

#[tokio::test]
async fn test_list_three_of_four() {
    let mock_server = MockServer::start().await;
    mount_playlist(&mock_server, playlist_json(&["A", "B", "C", "D"], None)).await;

    let replies = handler_for(&mock_server).replies("lm list 3").await;

    assert_eq!(
        replies,
        vec![Reply::text(
            "1 | A | Album A | Artist A & Guest\n\
             2 | B | Album B | Artist B & Guest\n\
             3 | C | Album C | Artist C & Guest"
        )]
    );
}

#[tokio::test]
async fn test_list_default_and_clamped_counts() {
    let names: Vec<String> = (1..=60).map(|i| format!("T{i}")).collect();
    let names: Vec<&str> = names.iter().map(String::as_str).collect();

    let mock_server = MockServer::start().await;
    mount_playlist(&mock_server, playlist_json(&names, None)).await;
    let handler = handler_for(&mock_server);

    for (line, expected) in [
        ("lm list", 5),
        ("lm list 0", 1),
        ("lm list -7", 1),
        ("lm list 50", 50),
        ("lm list 51", 50),
        ("lm list 9999", 50),
    ] {
        let replies = handler.replies(line).await;
        assert_eq!(replies.len(), 1, "{line}");
        let text = replies[0].as_text().unwrap();
        assert_eq!(text.lines().count(), expected, "{line}");
        assert!(text.starts_with("1 | T1 |"), "{line}");
    }
}

#[tokio::test]
async fn test_list_oversized_count_is_clamped() {
    let names: Vec<String> = (1..=60).map(|i| format!("T{i}")).collect();
    let names: Vec<&str> = names.iter().map(String::as_str).collect();

    let mock_server = MockServer::start().await;
    mount_playlist(&mock_server, playlist_json(&names, None)).await;

    let replies = handler_for(&mock_server)
        .replies("lm list 99999999999999999999")
        .await;

    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].as_text().unwrap().lines().count(), 50);
}

#[tokio::test]
async fn test_list_not_numeric_makes_no_request() {
    let mock_server = untouched_server().await;

    let replies = handler_for(&mock_server).replies("lm list lots").await;
    assert_eq!(replies, vec![Reply::text("count must be a number, got 'lots'")]);
}

#[tokio::test]
async fn test_list_fetch_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let replies = handler_for(&mock_server).replies("lm list").await;
    assert_eq!(replies, vec![Reply::text(MSG_LIST_FAILED)]);
}

// ============================================================================
// Empty playlist
// ============================================================================

#[tokio::test]
async fn test_empty_playlist_for_every_subcommand() {
    let mock_server = MockServer::start().await;
    mount_playlist(&mock_server, json!({ "tracks": [], "total_tracks_retrieved": 12 })).await;
    let handler = handler_for(&mock_server);

    for line in ["lm list", "lm random", "lm id 1"] {
        let replies = handler.replies(line).await;
        assert_eq!(replies, vec![Reply::text("playlist is empty")], "{line}");
    }
}

// ============================================================================
// random
// ============================================================================

#[tokio::test]
async fn test_random_track() {
    let mock_server = MockServer::start().await;
    mount_playlist(&mock_server, playlist_json(&["A", "B", "C"], None)).await;

    let replies = handler_for(&mock_server).replies("lm random").await;

    assert_eq!(replies.len(), 2);
    let text = replies[0].as_text().unwrap();
    let name = text.split(" | ").next().unwrap();
    assert!(["A", "B", "C"].contains(&name), "unexpected track {name}");
    assert_eq!(
        text,
        format!("{name} | Album {name} | Artist {name} & Guest")
    );
    assert_eq!(
        replies[1],
        Reply::image(format!("https://i.scdn.co/image/{name}-640"))
    );
}

#[tokio::test]
async fn test_random_without_cover() {
    let mock_server = MockServer::start().await;
    mount_playlist(
        &mock_server,
        json!({ "tracks": [{ "track": { "name": "Solo", "album": { "images": [] } } }] }),
    )
    .await;

    let replies = handler_for(&mock_server).replies("lm random").await;
    assert_eq!(replies, vec![Reply::text("Solo | unknown album | ")]);
}

#[tokio::test]
async fn test_random_fetch_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("nope"))
        .mount(&mock_server)
        .await;

    let replies = handler_for(&mock_server).replies("lm random").await;
    assert_eq!(replies, vec![Reply::text(MSG_RANDOM_FAILED)]);
}

// ============================================================================
// id
// ============================================================================

#[tokio::test]
async fn test_track_by_id() {
    let mock_server = MockServer::start().await;
    mount_playlist(&mock_server, playlist_json(&["A", "B", "C", "D"], Some(10))).await;

    let replies = handler_for(&mock_server).replies("lm id 2").await;

    assert_eq!(
        replies,
        vec![
            Reply::text("B | Album B | Artist B & Guest"),
            Reply::image("https://i.scdn.co/image/B-640"),
        ]
    );
}

#[tokio::test]
async fn test_track_by_id_out_of_declared_range() {
    let mock_server = MockServer::start().await;
    mount_playlist(&mock_server, playlist_json(&["A", "B", "C", "D"], Some(10))).await;
    let handler = handler_for(&mock_server);

    for line in ["lm id 0", "lm id 11", "lm id -5"] {
        let replies = handler.replies(line).await;
        assert_eq!(
            replies,
            vec![Reply::text("track id must be between 1 and 10")],
            "{line}"
        );
    }
}

#[tokio::test]
async fn test_track_by_id_oversized_is_out_of_range() {
    let mock_server = MockServer::start().await;
    mount_playlist(&mock_server, playlist_json(&["A", "B", "C", "D"], Some(10))).await;
    let handler = handler_for(&mock_server);

    for line in ["lm id 99999999999999999999", "lm id -99999999999999999999"] {
        let replies = handler.replies(line).await;
        assert_eq!(
            replies,
            vec![Reply::text("track id must be between 1 and 10")],
            "{line}"
        );
    }
}

#[tokio::test]
async fn test_track_by_id_beyond_loaded_tracks() {
    let mock_server = MockServer::start().await;
    mount_playlist(&mock_server, playlist_json(&["A", "B", "C", "D"], Some(10))).await;

    let replies = handler_for(&mock_server).replies("lm id 5").await;
    assert_eq!(
        replies,
        vec![Reply::text("track id 5 exceeds the 4 tracks currently loaded")]
    );
}

#[tokio::test]
async fn test_track_by_id_total_defaults_to_loaded() {
    let mock_server = MockServer::start().await;
    mount_playlist(&mock_server, playlist_json(&["A", "B"], None)).await;

    let replies = handler_for(&mock_server).replies("lm id 3").await;
    assert_eq!(replies, vec![Reply::text("track id must be between 1 and 2")]);
}

#[tokio::test]
async fn test_track_by_id_input_errors_make_no_request() {
    let mock_server = untouched_server().await;
    let handler = handler_for(&mock_server);

    assert_eq!(
        handler.replies("lm id two").await,
        vec![Reply::text("track id must be a number, got 'two'")]
    );
    assert_eq!(
        handler.replies("lm id").await,
        vec![Reply::text("usage: lm id <track_id>")]
    );
}

#[tokio::test]
async fn test_track_fetch_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let replies = handler_for(&mock_server).replies("lm id 1").await;
    assert_eq!(replies, vec![Reply::text(MSG_TRACK_FAILED)]);
}

// ============================================================================
// Dispatch
// ============================================================================

#[tokio::test]
async fn test_unknown_subcommand() {
    let mock_server = untouched_server().await;

    let replies = handler_for(&mock_server).replies("lm skip").await;
    assert_eq!(
        replies,
        vec![Reply::text(
            "unknown command 'skip', valid subcommands: \
             lm list [count], lm random, lm id <track_id>"
        )]
    );
}

#[tokio::test]
async fn test_each_command_fetches_a_fresh_snapshot() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/playlist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(playlist_json(&["A"], None)))
        .expect(3)
        .mount(&mock_server)
        .await;
    let handler = handler_for(&mock_server);

    handler.replies("lm list").await;
    handler.replies("lm random").await;
    handler.replies("lm id 1").await;
}

#[tokio::test]
async fn test_handler_with_shared_client() {
    let mock_server = MockServer::start().await;
    mount_playlist(&mock_server, playlist_json(&["A", "B"], None)).await;

    let client = SpotifyStatusClient::builder()
        .playlist_url(format!("{}/playlist", mock_server.uri()))
        .build()
        .unwrap();
    let config = BotConfig {
        trigger: "np".to_string(),
        ..BotConfig::default()
    };
    let handler = LmHandler::with_client(config, client);

    assert_eq!(handler.config().trigger, "np");
    assert_eq!(
        handler.replies("np id 2").await[0],
        Reply::text("B | Album B | Artist B & Guest")
    );
    assert_eq!(
        handler.replies("np id").await,
        vec![Reply::text("usage: np id <track_id>")]
    );
}

#[tokio::test]
async fn test_concurrent_invocations_are_independent() {
    let mock_server = MockServer::start().await;
    mount_playlist(&mock_server, playlist_json(&["A", "B", "C"], Some(3))).await;
    let handler = handler_for(&mock_server);

    let (first, second, third) = tokio::join!(
        handler.replies("lm id 1"),
        handler.replies("lm id 3"),
        handler.replies("lm list 2"),
    );

    assert_eq!(first[0], Reply::text("A | Album A | Artist A & Guest"));
    assert_eq!(second[0], Reply::text("C | Album C | Artist C & Guest"));
    assert_eq!(third[0].as_text().unwrap().lines().count(), 2);
}
