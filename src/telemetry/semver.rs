use semver::Version;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareResult {
    /// The running version is ahead of the published one
    LocalNewer,
    /// A newer version has been published
    RemoteNewer,
    Equal,
    /// One of the versions could not be parsed
    Invalid,
}

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// A leading `v` is stripped and partial versions are padded with zeros.
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "v1.2" -> Version(1, 2, 0)
/// - "1.2.3" -> Version(1, 2, 3)
pub fn parse_version(version: &str) -> Option<Version> {
    let version = version.trim();
    let version = version.strip_prefix('v').unwrap_or(version);
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

/// Compare the running version against the latest published one
pub fn compare_versions(local: &str, remote: &str) -> CompareResult {
    let (Some(local), Some(remote)) = (parse_version(local), parse_version(remote)) else {
        return CompareResult::Invalid;
    };

    match local.cmp(&remote) {
        std::cmp::Ordering::Less => CompareResult::RemoteNewer,
        std::cmp::Ordering::Greater => CompareResult::LocalNewer,
        std::cmp::Ordering::Equal => CompareResult::Equal,
    }
}

/// Returns true when `local` equals any parseable entry of `bad_versions`.
///
/// Unparseable entries never match.
pub fn is_bad_version(local: &str, bad_versions: &[String]) -> bool {
    let Some(local) = parse_version(local) else {
        return false;
    };

    bad_versions
        .iter()
        .filter_map(|v| parse_version(v))
        .any(|bad| bad == local)
}
