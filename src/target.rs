// Conversion target resolution: input path → output path + array identifier

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Fully resolved conversion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertJob {
    /// Binary file to read
    pub input: PathBuf,
    /// Header file to create or truncate
    pub output: PathBuf,
    /// Name of the emitted array
    pub identifier: String,
}

impl ConvertJob {
    /// Apply defaults for whatever the caller left out.
    ///
    /// - output: `<input>.h`
    /// - identifier: input file name with `.` replaced by `_`
    pub fn resolve(
        input: impl Into<PathBuf>,
        output: Option<PathBuf>,
        identifier: Option<String>,
    ) -> Self {
        let input = input.into();
        let output = output.unwrap_or_else(|| default_output_path(&input));
        let identifier = identifier.unwrap_or_else(|| default_identifier(&input));
        Self {
            input,
            output,
            identifier,
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// `input` with `.h` appended verbatim (`a.spv` → `a.spv.h`, `a` → `a.h`).
///
/// Works on the OS string, so non-UTF-8 paths survive unchanged.
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut out: OsString = input.as_os_str().to_owned();
    out.push(".h");
    PathBuf::from(out)
}

/// Final path component with every `.` replaced by `_`.
///
/// `dir/shader.frag.spv` → `shader_frag_spv`. A trailing `..` becomes `__`,
/// a path with no name at all (`/`, `.`) gives an empty string.
/// Nothing else is escaped: `my-shader.spv` → `my-shader_spv`.
pub fn default_identifier(input: &Path) -> String {
    let name = match input.components().next_back() {
        Some(Component::Normal(name)) => name.to_string_lossy().into_owned(),
        Some(Component::ParentDir) => "..".to_string(),
        _ => String::new(),
    };
    name.replace('.', "_")
}

/// Whether `name` is usable as a C/C++ identifier.
///
/// ASCII only: a letter or `_`, then letters, digits or `_`. Keywords are not checked.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_appends_suffix() {
        assert_eq!(
            default_output_path(Path::new("foo.spv")),
            PathBuf::from("foo.spv.h")
        );
        assert_eq!(default_output_path(Path::new("foo")), PathBuf::from("foo.h"));
        assert_eq!(
            default_output_path(Path::new("shaders/fusion.comp.spv")),
            PathBuf::from("shaders/fusion.comp.spv.h")
        );
    }

    #[test]
    fn test_default_identifier_uses_base_name() {
        assert_eq!(default_identifier(Path::new("a.spv")), "a_spv");
        assert_eq!(
            default_identifier(Path::new("dir/shader.frag.spv")),
            "shader_frag_spv"
        );
        assert_eq!(default_identifier(Path::new("noext")), "noext");
    }

    #[test]
    fn test_default_identifier_is_not_sanitized() {
        // Hyphens, spaces and leading digits pass through untouched
        assert_eq!(default_identifier(Path::new("my-shader.spv")), "my-shader_spv");
        assert_eq!(default_identifier(Path::new("2 pass.spv")), "2 pass_spv");
    }

    #[test]
    fn test_default_identifier_degenerate_paths() {
        assert_eq!(default_identifier(Path::new("dir/..")), "__");
        assert_eq!(default_identifier(Path::new("/")), "");
        assert_eq!(default_identifier(Path::new("dir/shader.spv/")), "shader_spv");
    }

    #[test]
    fn test_resolve_keeps_explicit_values() {
        let job = ConvertJob::resolve(
            "in/a.spv",
            Some(PathBuf::from("gen/a.h")),
            Some("kShader".to_string()),
        );
        assert_eq!(job.output, PathBuf::from("gen/a.h"));
        assert_eq!(job.identifier, "kShader");

        let job = ConvertJob::resolve("in/a.spv", None, None);
        assert_eq!(job.output, PathBuf::from("in/a.spv.h"));
        assert_eq!(job.identifier, "a_spv");
    }

    #[test]
    fn test_is_valid_identifier() {
        assert!(is_valid_identifier("initVolume_comp_spv"));
        assert!(is_valid_identifier("_x1"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("2pass"));
        assert!(!is_valid_identifier("my-shader_spv"));
        assert!(!is_valid_identifier("a b"));
    }
}
