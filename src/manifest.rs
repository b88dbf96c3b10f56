//! The `"icons"` block of an extension's `manifest.json`.

use crate::icon_file_name;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct IconsManifest {
    pub icons: IconPaths,
}

/// Icon paths keyed by pixel size, in the order browsers list them.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct IconPaths {
    #[serde(rename = "16")]
    pub small: String,

    #[serde(rename = "48")]
    pub medium: String,

    #[serde(rename = "128")]
    pub large: String,
}

/// Build the manifest block for icons stored under `prefix`, e.g.
/// `"docs/assets/"`. An empty prefix means the manifest's own directory.
pub fn icons_manifest(prefix: &str) -> IconsManifest {
    let prefix = match prefix {
        "" | "." | "./" => String::new(),
        p if p.ends_with('/') => p.to_string(),
        p => format!("{p}/"),
    };
    let path = |size| format!("{prefix}{}", icon_file_name(size));

    IconsManifest {
        icons: IconPaths {
            small: path(16),
            medium: path(48),
            large: path(128),
        },
    }
}

pub fn to_pretty_json(manifest: &IconsManifest) -> serde_json::Result<String> {
    serde_json::to_string_pretty(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_icons() {
        let json = to_pretty_json(&icons_manifest("")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["icons"]["16"], "icon16.png");
        assert_eq!(parsed["icons"]["48"], "icon48.png");
        assert_eq!(parsed["icons"]["128"], "icon128.png");
    }

    #[test]
    fn prefixed_icons_keep_size_order() {
        let json = to_pretty_json(&icons_manifest("docs/assets")).unwrap();

        let p16 = json.find("\"16\"").unwrap();
        let p48 = json.find("\"48\"").unwrap();
        let p128 = json.find("\"128\"").unwrap();
        assert!(p16 < p48 && p48 < p128);
        assert!(json.contains("\"docs/assets/icon48.png\""));
    }

    #[test]
    fn dot_prefix_is_dropped() {
        assert_eq!(icons_manifest("./"), icons_manifest(""));
        assert_eq!(icons_manifest("."), icons_manifest(""));
    }
}
