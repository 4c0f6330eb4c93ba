use spotdup::types::{AccessToken, PlaylistId, Username};
use spotdup::utils::*;

#[test]
fn test_escape_html() {
    assert_eq!(escape_html("plain"), "plain");
    assert_eq!(
        escape_html("<a href=\"x\">Tom & Jerry's</a>"),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
    );
    assert_eq!(escape_html(""), "");
}

#[test]
fn test_escape_html_keeps_unicode() {
    assert_eq!(escape_html("Björk – Jóga"), "Björk – Jóga");
}

#[test]
fn test_session_paths() {
    let owner = Username::new("alice");
    let creator = Username::new("bob");
    let token = AccessToken::new("tok");
    let playlist = PlaylistId::new("p1");

    assert_eq!(playlists_path(&owner, &token), "/listplaylists/alice/tok");
    assert_eq!(tracks_path(&owner, &token, &playlist), "/tracks/alice/tok/p1");
    assert_eq!(
        duplicate_path(&owner, &creator, &token, &playlist),
        "/duplicate/alice/bob/tok/p1"
    );
}

#[test]
fn test_session_paths_encode_each_segment() {
    let owner = Username::new("alice/../bob");
    let token = AccessToken::new("tok");
    let playlist = PlaylistId::new("mix?market=US#top");

    assert_eq!(
        playlists_path(&owner, &token),
        "/listplaylists/alice%2F..%2Fbob/tok"
    );
    assert_eq!(
        tracks_path(&owner, &token, &playlist),
        "/tracks/alice%2F..%2Fbob/tok/mix%3Fmarket%3DUS%23top"
    );
}
