pub const FALLBACK_LABEL: &str = "image";

/// Caption shown in place of a photo whose image fails to load: the last
/// path segment of its `src`.
pub fn photo_label(src: Option<&str>) -> String {
    src.and_then(|s| s.rsplit('/').next())
        .filter(|seg| !seg.is_empty())
        .unwrap_or(FALLBACK_LABEL)
        .to_string()
}
