// HTTP client for YouTube's timed-text and oEmbed endpoints.
//
// Timed-text returns captions as XML: a <transcript> of <text> elements,
// one per caption fragment, with XML-escaped content. We pull the fragment
// text out with a small regex rather than a full XML parser, since nothing
// but the element content is used.
//
// oEmbed returns a JSON document whose `title` is the only field we need.

use anyhow::{Context, Result};
use async_trait::async_trait;
use regex_lite::Regex;
use serde::Deserialize;
use tracing::debug;

use super::traits::TranscriptSource;

/// Response from the oEmbed endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct OEmbedResponse {
    pub title: String,
}

/// Client for YouTube's public caption and metadata endpoints.
pub struct YouTubeClient {
    client: reqwest::Client,
    captions: CaptionParser,
    timedtext_url: String,
    oembed_url: String,
}

impl YouTubeClient {
    pub fn new(timedtext_url: &str, oembed_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("skimmer/0.1 (transcript-summaries)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            captions: CaptionParser::new()?,
            timedtext_url: timedtext_url.trim_end_matches('/').to_string(),
            oembed_url: oembed_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the English caption track and flatten it to plain text.
    pub async fn fetch_timedtext(&self, video_id: &str) -> Result<String> {
        let response = self
            .client
            .get(&self.timedtext_url)
            .query(&[("lang", "en"), ("v", video_id)])
            .send()
            .await
            .context("Timed-text request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            anyhow::bail!("Timed-text endpoint returned {status}");
        }

        let body = response
            .text()
            .await
            .context("Failed to read timed-text response")?;
        if body.trim().is_empty() {
            anyhow::bail!("No caption track available for {video_id}");
        }

        let transcript = self.captions.parse(&body);
        if transcript.is_empty() {
            anyhow::bail!("Caption track for {video_id} contains no text elements");
        }

        debug!(video_id, chars = transcript.len(), "Fetched timed-text transcript");
        Ok(transcript)
    }

    /// Look up the video's title. Returns an error if the lookup fails;
    /// callers treat that as "no title".
    pub async fn fetch_title(&self, video_id: &str) -> Result<String> {
        let watch_url = format!("https://www.youtube.com/watch?v={video_id}");
        let response = self
            .client
            .get(&self.oembed_url)
            .query(&[("url", watch_url.as_str()), ("format", "json")])
            .send()
            .await
            .context("oEmbed request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            anyhow::bail!("oEmbed endpoint returned {status}");
        }

        let oembed: OEmbedResponse = response
            .json()
            .await
            .context("Failed to parse oEmbed response")?;
        Ok(oembed.title)
    }
}

#[async_trait]
impl TranscriptSource for YouTubeClient {
    fn name(&self) -> &str {
        "timedtext"
    }

    async fn fetch(&self, video_id: &str) -> Result<String> {
        self.fetch_timedtext(video_id).await
    }
}

/// Flattens timed-text XML into plain transcript text.
pub struct CaptionParser {
    text_element: Regex,
    entity: Regex,
}

impl CaptionParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            text_element: Regex::new(r"(?s)<text\b[^>]*>(.*?)</text>")
                .context("Invalid timed-text element pattern")?,
            entity: Regex::new(r"&(#x[0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);")
                .context("Invalid entity pattern")?,
        })
    }

    /// Concatenate the decoded content of every `<text>` element.
    ///
    /// Each fragment is followed by a single space, so the result carries the
    /// same irregular spacing the captions had. Returns an empty string when
    /// the document has no text elements.
    pub fn parse(&self, xml: &str) -> String {
        let mut transcript = String::new();
        for caps in self.text_element.captures_iter(xml) {
            let fragment = caps.get(1).map_or("", |m| m.as_str());
            transcript.push_str(&self.decode_entities(fragment));
            transcript.push(' ');
        }
        transcript
    }

    /// Decode the XML entities in caption text.
    ///
    /// Entities are decoded in a single pass, so `&amp;#60;` becomes the
    /// literal text `&#60;`. Captions double-escape apostrophes and double
    /// quotes (`&amp;#39;`, `&amp;quot;`), and only those two are unescaped a
    /// second time.
    pub fn decode_entities(&self, text: &str) -> String {
        let once = self
            .entity
            .replace_all(text, |caps: &regex_lite::Captures| {
                decode_entity(&caps[1]).unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned();

        once.replace("&#39;", "'").replace("&quot;", "\"")
    }
}

/// Decode one entity body (the part between `&` and `;`).
fn decode_entity(body: &str) -> Option<String> {
    let decoded = match body {
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "amp" => '&',
        _ => {
            let numeric = body.strip_prefix('#')?;
            let code = match numeric.strip_prefix('x') {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => numeric.parse::<u32>().ok()?,
            };
            char::from_u32(code)?
        }
    };
    Some(decoded.to_string())
}
