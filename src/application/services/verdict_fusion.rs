use crate::domain::{DocumentVerdict, FinalDecision, MediaPresence, SafetyStatus};

/// Prefix of the decision message when the document carries embedded media.
pub const MEDIA_DETECTED_MARKER: &str = "【本檔案被偵測出含有圖片】";

/// Combines the model and lexical verdicts with the media flag.
///
/// The message is the media marker (if any), then the lexical summary, then
/// the model summary, concatenated in that order.
pub fn fuse(
    model: &DocumentVerdict,
    lexical: &DocumentVerdict,
    media: MediaPresence,
) -> FinalDecision {
    let status = decide(model.safe, lexical.safe, media);

    let mut message = String::new();
    if media.is_present() {
        message.push_str(MEDIA_DETECTED_MARKER);
    }
    message.push_str(&lexical.summary());
    message.push_str(&model.summary());

    FinalDecision::new(status, message)
}

/// Decision table, first matching row wins:
///
/// | model | lexical | media   | status |
/// |-------|---------|---------|--------|
/// | safe  | safe    | present | UNSURE |
/// | a     | b, b≠a  | any     | UNSURE |
/// | safe  | safe    | other   | SAFE   |
/// | unsafe| unsafe  | any     | UNSAFE |
///
/// Media only matters when both classifiers pass the text.
pub fn decide(model_safe: bool, lexical_safe: bool, media: MediaPresence) -> SafetyStatus {
    match (model_safe, lexical_safe) {
        (true, true) if media.is_present() => SafetyStatus::Unsure,
        (model, lexical) if model != lexical => SafetyStatus::Unsure,
        (true, _) | (_, true) => SafetyStatus::Safe,
        _ => SafetyStatus::Unsafe,
    }
}
