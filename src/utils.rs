use serde::Deserialize;

pub const AMBIGUOUS_INPUT_MSG: &str = "Provide either text or file, not both.";
pub const MISSING_INPUT_MSG: &str = "Provide text or file.";
pub const MISSING_FILE_MSG: &str = "Provide a WAV file.";
pub const SERVER_ERROR_MSG: &str = "Server error";
pub const NETWORK_ERROR_MSG: &str = "Network error";
pub const COPY_FAILED_MSG: &str = "Copy failed";

pub const DEFAULT_DOWNLOAD_NAME: &str = "output.wav";

/// Which of the two encode inputs the user filled in. Recomputed from the
/// live control values on every submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    None,
    TextOnly,
    FileOnly,
    Both,
}

impl InputMode {
    pub fn classify(text: &str, has_file: bool) -> Self {
        match (!text.trim().is_empty(), has_file) {
            (true, true) => Self::Both,
            (true, false) => Self::TextOnly,
            (false, true) => Self::FileOnly,
            (false, false) => Self::None,
        }
    }

    /// User-facing message when the mode is not submittable.
    pub fn rejection(self) -> Option<&'static str> {
        match self {
            Self::Both => Some(AMBIGUOUS_INPUT_MSG),
            Self::None => Some(MISSING_INPUT_MSG),
            Self::TextOnly | Self::FileOnly => Option::None,
        }
    }

    /// Name of the multipart field this submission does not use. The
    /// service rejects payloads carrying both, so the caller deletes it.
    pub fn unused_field(self) -> Option<&'static str> {
        match self {
            Self::TextOnly => Some("file"),
            Self::FileOnly => Some("text"),
            Self::None | Self::Both => Option::None,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Extracts the human-readable reason from a structured failure body.
/// Anything unparseable (or an empty detail) falls back to the generic
/// server-error message.
pub fn detail_message(body: Option<&str>) -> String {
    body.and_then(|raw| serde_json::from_str::<ErrorBody>(raw).ok())
        .map(|body| body.detail)
        .filter(|detail| !detail.is_empty())
        .unwrap_or_else(|| SERVER_ERROR_MSG.to_string())
}

/// Pulls the `filename` attribute out of a `Content-Disposition` value,
/// e.g. `attachment; filename="song.wav"`. Quotes are optional.
pub fn filename_from_disposition(header: &str) -> Option<String> {
    let (_, rest) = header.split_once("filename=")?;
    let rest = rest.trim_start();
    let name = match rest.strip_prefix('"') {
        Some(quoted) => quoted.split('"').next()?,
        Option::None => rest.split(';').next()?.trim_end(),
    };
    (!name.is_empty()).then(|| name.to_string())
}

/// Filename to hand to the browser's save action for an encoded artifact.
pub fn download_filename(disposition: Option<&str>) -> String {
    disposition
        .and_then(filename_from_disposition)
        .unwrap_or_else(|| DEFAULT_DOWNLOAD_NAME.to_string())
}
