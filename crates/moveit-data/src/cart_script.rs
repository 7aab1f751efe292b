//! Helpers for TIC-80 Lua cartridge scripts.
//!
//! A cartridge keeps its graphics and sound as comment lines at the end of
//! the script, starting at the line that begins with [`MEDIA_MARKER`].

pub const MEDIA_MARKER: &str = "-- <TILES>";

/// Header comments TIC-80 needs to load the cartridge.
const HEADER_TAGS: [&str; 4] = ["-- title:", "-- author:", "-- desc:", "-- script:"];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("source script has no `-- <TILES>` media section")]
    MissingMediaSection,
}

fn is_header(line: &str) -> bool {
    HEADER_TAGS.iter().any(|tag| line.starts_with(tag))
}

fn is_comment_line(line: &str) -> bool {
    line.trim_start().starts_with("--")
}

/// Remove comments from a script, keeping the cartridge header and the media
/// section intact.
///
/// Inline comments are cut at the last `--` on the line, so a `--` inside a
/// string earlier on the same line survives.
pub fn strip_comments(script: &str) -> String {
    let mut out = String::with_capacity(script.len());
    let mut in_media = false;

    for line in script.split_inclusive('\n') {
        if is_comment_line(line) {
            if line.starts_with(MEDIA_MARKER) {
                in_media = true;
            }
            if in_media || is_header(line) {
                out.push_str(line);
            }
        } else if let Some((code, _)) = line.rsplit_once("--") {
            out.push_str(code);
            out.push('\n');
        } else {
            out.push_str(line);
        }
    }

    out
}

/// Byte offset of the first media marker line.
fn media_offset(script: &str) -> Option<usize> {
    let mut offset = 0;
    for line in script.split_inclusive('\n') {
        if line.starts_with(MEDIA_MARKER) {
            return Some(offset);
        }
        offset += line.len();
    }
    None
}

/// Replace the media section of `destination` with the one from `source`.
///
/// Everything in `destination` before its media marker is kept; if it has
/// no media section yet, the source media is appended.
pub fn import_media(source: &str, destination: &str) -> Result<String, ScriptError> {
    let media_start = media_offset(source).ok_or(ScriptError::MissingMediaSection)?;
    let code_end = media_offset(destination).unwrap_or(destination.len());

    let code = &destination[..code_end];
    let media = &source[media_start..];

    let mut out = String::with_capacity(code.len() + media.len() + 1);
    out.push_str(code);
    if !code.is_empty() && !code.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(media);
    Ok(out)
}
