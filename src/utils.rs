use crate::YouTubeError;

pub fn video_url(id: &str) -> String {
    format!("https://youtube.com/watch?v={}", id)
}

pub fn video_short_url(id: &str) -> String {
    format!("https://youtu.be/{}", id)
}

pub fn channel_url(id: &str) -> String {
    format!("https://youtube.com/channel/{}", id)
}

pub fn playlist_url(id: &str) -> String {
    format!("https://youtube.com/playlist?list={}", id)
}

// parseInt semantics: leading decimal digits, anything after is ignored.
fn leading_int(s: &str) -> Option<u64> {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    s[..end].parse().ok()
}

/// Splits an ISO-8601-style duration into (minutes, seconds) by the literal
/// marker contract: minutes sit between `PT` and the first `M`, seconds
/// between that `M` and the final character.
///
/// Durations without an `M` marker (`PT45S`) are rejected, and an hours
/// component is misread (`PT1H2M3S` parses as 1 minute 3 seconds, because
/// only the digits before the first non-digit count). Both quirks are kept
/// for compatibility with the existing wire contract; see DESIGN.md.
pub fn parse_duration(length: &str) -> Result<(u64, u64), YouTubeError> {
    let invalid = || YouTubeError::ParseError(format!("Invalid duration: {}", length));

    let pt = length.find("PT").ok_or_else(invalid)?;
    let m = length.find('M').ok_or_else(invalid)?;

    let minutes = length
        .get(pt + 2..m)
        .and_then(leading_int)
        .ok_or_else(invalid)?;
    let seconds = length
        .get(m + 1..length.len().saturating_sub(1))
        .and_then(leading_int)
        .ok_or_else(invalid)?;

    Ok((minutes, seconds))
}
