//! Path utilities

use std::cmp::Ordering;
use std::path::Path;

/// Mod key for a unit directory: its path relative to `base`, using the
/// platform separator. A unit sitting directly at `base` becomes `"."`.
pub fn relative_key<P: AsRef<Path>>(path: P, base: P) -> Option<String> {
    let relative = path.as_ref().strip_prefix(base.as_ref()).ok()?;
    if relative.as_os_str().is_empty() {
        Some(".".to_string())
    } else {
        Some(relative.to_string_lossy().into_owned())
    }
}

/// Final path component, or the whole path when there is none (`/`, `..`)
pub fn base_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.to_string_lossy().into_owned(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Order paths by their full string form rather than component-wise
pub fn cmp_path_str<P: AsRef<Path>>(a: &P, b: &P) -> Ordering {
    a.as_ref().as_os_str().cmp(b.as_ref().as_os_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_relative_key_nested() {
        let key = relative_key(Path::new("/mods/Workshop/123/Foo"), Path::new("/mods")).unwrap();
        assert_eq!(PathBuf::from(key), PathBuf::from("Workshop/123/Foo"));
    }

    #[test]
    fn test_relative_key_at_root() {
        assert_eq!(
            relative_key(Path::new("/mods"), Path::new("/mods")),
            Some(".".to_string())
        );
    }

    #[test]
    fn test_relative_key_outside_base() {
        assert_eq!(relative_key(Path::new("/other"), Path::new("/mods")), None);
    }

    #[test]
    fn test_base_name_fallback() {
        assert_eq!(base_name(Path::new("/mods/Foo")), "Foo");
        assert_eq!(base_name(Path::new("..")), "..");
    }

    #[test]
    fn test_string_order_differs_from_component_order() {
        // '-' (0x2d) sorts before '/' (0x2f) as a string, but component-wise
        // "a" < "a-b" puts "a/z" first.
        let mut paths = vec![PathBuf::from("a/z.lua"), PathBuf::from("a-b.lua")];
        paths.sort_by(cmp_path_str);
        assert_eq!(paths, vec![PathBuf::from("a-b.lua"), PathBuf::from("a/z.lua")]);
    }
}
