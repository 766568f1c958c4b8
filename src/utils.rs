use std::path::{Component, PathBuf};

pub fn normalize_path(source: &str) -> PathBuf {
    let input = PathBuf::from(source);

    let mut new_path = PathBuf::new();

    for component in input.components() {
        match component {
            // Skip the current-dir marker "."
            Component::CurDir => {}

            // For "..", pop the last component if possible
            Component::ParentDir => {
                new_path.pop();
            }

            // For normal components, push them
            other => new_path.push(other.as_os_str()),
        }
    }

    new_path
}

/// Final segment of the normalized project path, e.g. `./demo-app` -> `demo-app`.
///
/// Returns `None` when no segment survives normalization (`""`, `"."`, `".."`).
pub fn module_name(project_path: &str) -> Option<String> {
    let normalized = normalize_path(project_path);

    normalized
        .file_name()
        .map(|segment| segment.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_name_is_the_last_segment() {
        assert_eq!(module_name("build/sample").as_deref(), Some("sample"));
        assert_eq!(module_name("demo-app").as_deref(), Some("demo-app"));
    }

    #[test]
    fn module_name_ignores_leading_current_dir() {
        assert_eq!(module_name("./demo-app").as_deref(), Some("demo-app"));
    }

    #[test]
    fn module_name_ignores_trailing_slash() {
        assert_eq!(module_name("build/sample/").as_deref(), Some("sample"));
    }

    #[test]
    fn module_name_resolves_parent_segments() {
        assert_eq!(module_name("build/tmp/../sample").as_deref(), Some("sample"));
    }

    #[test]
    fn degenerate_paths_have_no_module_name() {
        assert_eq!(module_name(""), None);
        assert_eq!(module_name("."), None);
        assert_eq!(module_name("./.."), None);
    }

    #[test]
    fn normalize_path_drops_dot_segments() {
        assert_eq!(normalize_path("./a/./b"), PathBuf::from("a/b"));
        assert_eq!(normalize_path("a/b/../c"), PathBuf::from("a/c"));
    }
}
