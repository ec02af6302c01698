use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static YOUTUBE_WATCH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"youtube\.com/watch\?v=([^&#\s]+)").expect("YOUTUBE_WATCH is a valid regex pattern")
});

static YOUTUBE_SHORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:https?://)?youtu\.be/([^?&#/\s]+)")
        .expect("YOUTUBE_SHORT is a valid regex pattern")
});

const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Rewrites a recognized YouTube watch link into its embeddable player form,
/// dropping any trailing query parameters. Other URLs are returned unchanged.
pub fn normalize_video_url(url: &str) -> Cow<'_, str> {
    let video_id = YOUTUBE_WATCH
        .captures(url)
        .or_else(|| YOUTUBE_SHORT.captures(url))
        .and_then(|captures| captures.get(1));

    match video_id {
        Some(id) => Cow::Owned(format!("{YOUTUBE_EMBED_BASE}{}", id.as_str())),
        None => Cow::Borrowed(url),
    }
}
