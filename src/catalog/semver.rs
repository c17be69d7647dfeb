use semver::Version;
use tracing::warn;

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Handles partial versions like "1" or "1.2" by padding with zeros.
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "1.2" -> Version(1, 2, 0)
/// - "1.2.3" -> Version(1, 2, 3)
pub fn parse_version(version: &str) -> Option<Version> {
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

/// Sort version names newest first, dropping names that are not versions
pub fn sort_newest_first(versions: Vec<String>) -> Vec<String> {
    let mut parsed: Vec<(String, Version)> = versions
        .into_iter()
        .filter_map(|v| match parse_version(&v) {
            Some(parsed) => Some((v, parsed)),
            None => {
                warn!("Skipping {:?}: not a version", v);
                None
            }
        })
        .collect();

    parsed.sort_by(|(_, a), (_, b)| b.cmp(a));

    parsed.into_iter().map(|(v, _)| v).collect()
}
