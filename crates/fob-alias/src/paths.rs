//! Lexical path arithmetic.
//!
//! Nothing here touches the file system. Paths are anchored at an explicit
//! working directory, cleaned with `path-clean`, and compared component by
//! component. Results always use `/` separators.

use std::path::{Component, Path, PathBuf};

use path_clean::PathClean;

/// Anchor `path` at `cwd` (unless already absolute) and collapse `.`/`..`.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.clean()
    } else {
        cwd.join(path).clean()
    }
}

/// Relative path leading from directory `from` to `to`.
///
/// Both inputs are expected to be absolute and clean. Returns an empty
/// string when they are equal. Paths without a common root (different
/// Windows drives) yield `to` itself.
pub fn relative_path(from: &Path, to: &Path) -> String {
    let from: Vec<Component<'_>> = from.components().collect();
    let to: Vec<Component<'_>> = to.components().collect();

    let common = from
        .iter()
        .zip(&to)
        .take_while(|(a, b)| a == b)
        .count();

    if common == 0 {
        return to_slash(&to.iter().collect::<PathBuf>());
    }

    std::iter::repeat_n("..".to_string(), from.len() - common)
        .chain(
            to[common..]
                .iter()
                .map(|component| component.as_os_str().to_string_lossy().into_owned()),
        )
        .collect::<Vec<_>>()
        .join("/")
}

/// Render a path with forward slashes regardless of platform.
pub fn to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolutize_anchors_relative_paths() {
        let cwd = Path::new("/workspace/project");
        assert_eq!(
            absolutize(Path::new("src/../lib/./a.ts"), cwd),
            PathBuf::from("/workspace/project/lib/a.ts")
        );
        assert_eq!(
            absolutize(Path::new("/abs/x/../y"), cwd),
            PathBuf::from("/abs/y")
        );
        assert_eq!(absolutize(Path::new("./"), cwd), PathBuf::from(cwd));
    }

    #[test]
    fn relative_path_walks_up_and_down() {
        assert_eq!(
            relative_path(
                Path::new("/p/src/pages"),
                Path::new("/p/app/components/button")
            ),
            "../../app/components/button"
        );
    }

    #[test]
    fn relative_path_descends() {
        assert_eq!(
            relative_path(Path::new("/p/src"), Path::new("/p/src/lib/util")),
            "lib/util"
        );
    }

    #[test]
    fn relative_path_of_same_directory_is_empty() {
        assert_eq!(relative_path(Path::new("/p/src"), Path::new("/p/src")), "");
    }

    #[test]
    fn relative_path_to_ancestor() {
        assert_eq!(relative_path(Path::new("/p/a/b/c"), Path::new("/p")), "../../..");
    }
}
