// Video id extraction from user input.

use anyhow::Result;
use reqwest::Url;

/// Length of a YouTube video id.
const VIDEO_ID_LEN: usize = 11;

/// Resolve a bare video id or a YouTube URL to a video id.
///
/// Accepts `youtube.com/watch?v=ID` on any youtube.com subdomain and
/// `youtu.be/ID` short links.
pub fn parse_video_id(input: &str) -> Result<String> {
    let input = input.trim();

    if is_video_id(input) {
        return Ok(input.to_string());
    }

    let url = match Url::parse(input) {
        Ok(url) => url,
        Err(_) => anyhow::bail!("Not a YouTube video page: {input}"),
    };
    let host = url.host_str().unwrap_or_default();

    if host == "youtu.be" {
        let id = url
            .path_segments()
            .and_then(|mut segments| segments.next())
            .unwrap_or_default();
        if is_video_id(id) {
            return Ok(id.to_string());
        }
        anyhow::bail!("Could not find video ID in {input}");
    }

    let is_youtube = host == "youtube.com" || host.ends_with(".youtube.com");
    if !is_youtube || url.path() != "/watch" {
        anyhow::bail!("Not a YouTube video page: {input}");
    }

    match url.query_pairs().find(|(key, _)| key == "v") {
        Some((_, id)) if !id.is_empty() => Ok(id.into_owned()),
        _ => anyhow::bail!("Could not find video ID in {input}"),
    }
}

fn is_video_id(candidate: &str) -> bool {
    candidate.len() == VIDEO_ID_LEN
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
