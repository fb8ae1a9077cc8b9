//! Script kinds and expected command names.
//!
//! This module provides the path classifier: given a script's path, it
//! derives the command name the script's documentation title must carry,
//! and identifies which scripting variant the file is (which determines
//! the line-comment marker).

use std::path::Path;

/// Token opening a documentation block.
pub const DOC_BEGIN: &str = "=begin";

/// Token closing a documentation block.
pub const DOC_END: &str = "=end";

/// Directories whose scripts are invoked with a namespace prefix.
const NAMESPACES: [&str; 4] = ["devel", "fix", "gui", "modtools"];

/// The scripting variant of a file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    /// Lua script (`.lua`), line comments start with `--`.
    Lua,
    /// Ruby script (`.rb`), line comments start with `#`.
    Ruby,
}

impl ScriptKind {
    /// Map a file extension to a script kind, if it is a recognized
    /// scripting extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "lua" => Some(ScriptKind::Lua),
            "rb" => Some(ScriptKind::Ruby),
            _ => None,
        }
    }

    /// Classify a path by its extension. Unrecognized extensions fall back
    /// to Ruby, whose `#` marker is the generic scripting default.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
            .unwrap_or(ScriptKind::Ruby)
    }

    /// The line-comment marker for this script kind.
    pub fn comment_marker(&self) -> &'static str {
        match self {
            ScriptKind::Lua => "--",
            ScriptKind::Ruby => "#",
        }
    }
}

/// Derive the expected command name for a script from its path.
///
/// Scripts under one of the namespace directories (`devel`, `fix`, `gui`,
/// `modtools`) are invoked as `namespace/name`; everything else is invoked
/// by its bare file stem. Pure string manipulation, no file-system access.
pub fn expected_command(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let dname = path
        .parent()
        .and_then(|p| p.file_name())
        .map(|d| d.to_string_lossy().into_owned())
        .unwrap_or_default();

    if NAMESPACES.contains(&dname.as_str()) {
        format!("{}/{}", dname, stem)
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn namespaced_directories_prefix_the_command() {
        for ns in ["devel", "fix", "gui", "modtools"] {
            let path = PathBuf::from(format!("scripts/{}/foo.lua", ns));
            assert_eq!(expected_command(&path), format!("{}/foo", ns));
        }
    }

    #[test]
    fn plain_directories_use_the_bare_stem() {
        assert_eq!(expected_command(Path::new("scripts/bar.rb")), "bar");
        assert_eq!(expected_command(Path::new("scripts/util/baz.lua")), "baz");
    }

    #[test]
    fn namespace_must_be_the_immediate_parent() {
        // A namespace further up the tree does not count.
        let path = Path::new("scripts/gui/sub/thing.lua");
        assert_eq!(expected_command(path), "thing");
    }

    #[test]
    fn extension_is_stripped_from_the_stem() {
        assert_eq!(expected_command(Path::new("devel/dump-all.rb")), "devel/dump-all");
    }

    #[test]
    fn kind_from_extension() {
        assert_eq!(ScriptKind::from_extension("lua"), Some(ScriptKind::Lua));
        assert_eq!(ScriptKind::from_extension("rb"), Some(ScriptKind::Ruby));
        assert_eq!(ScriptKind::from_extension("py"), None);
    }

    #[test]
    fn kind_from_path_defaults_to_ruby() {
        assert_eq!(ScriptKind::from_path(Path::new("a/b.lua")), ScriptKind::Lua);
        assert_eq!(ScriptKind::from_path(Path::new("a/b.rb")), ScriptKind::Ruby);
        assert_eq!(ScriptKind::from_path(Path::new("a/b.txt")), ScriptKind::Ruby);
        assert_eq!(ScriptKind::from_path(Path::new("a/b")), ScriptKind::Ruby);
    }

    #[test]
    fn comment_markers() {
        assert_eq!(ScriptKind::Lua.comment_marker(), "--");
        assert_eq!(ScriptKind::Ruby.comment_marker(), "#");
    }
}
