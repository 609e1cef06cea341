//! Path canonicalization, namespace/class-name assignment, and import-source
//! resolution (spec §4.2 steps 2-3).

/// The source language's file extension. Appended to an import specifier
/// only when the literal path doesn't already carry one.
pub const SOURCE_EXT: &str = "sl";

/// Where an import specifier ends up pointing, before the target has
/// necessarily been parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImportSource {
    /// Resolves to another module in this graph, by canonical path.
    Local(String),
    /// Doesn't start with `./`, `../`, or `/` — a Binding Catalog name.
    External,
}

/// Forward-slash-normalize, strip a trailing source extension, and resolve
/// `.`/`..` segments. The result never has a leading `./`, never ends in
/// `/`, and never contains a `.`/`..` segment.
#[must_use]
pub fn canonicalize_path(raw: &str) -> String {
    let slashed = raw.replace('\\', "/");
    let stripped = slashed.strip_suffix(&format!(".{SOURCE_EXT}")).unwrap_or(&slashed);

    let mut out: Vec<&str> = Vec::new();
    for segment in stripped.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out.join("/")
}

/// `rootNamespace + directory-relative-to-sourceRoot`, dot-separated.
#[must_use]
pub fn compute_namespace(root_namespace: &str, canonical_path: &str, source_root: &str) -> String {
    let canonical_root = canonicalize_path(source_root);
    let relative = canonical_path.strip_prefix(&canonical_root).unwrap_or(canonical_path).trim_start_matches('/');

    let dir = match relative.rsplit_once('/') {
        Some((dir, _)) => dir,
        None => "",
    };

    if dir.is_empty() {
        root_namespace.to_string()
    } else {
        let suffix = dir.split('/').collect::<Vec<_>>().join(".");
        if root_namespace.is_empty() {
            suffix
        } else {
            format!("{root_namespace}.{suffix}")
        }
    }
}

/// Normalize the file basename into a valid target-language identifier:
/// strip non-identifier characters, prefix with `_` if the result would
/// otherwise start with a digit.
#[must_use]
pub fn compute_class_name(canonical_path: &str) -> String {
    let basename = canonical_path.rsplit('/').next().unwrap_or(canonical_path);
    // Non-identifier characters are dropped rather than substituted, so
    // `api-client` and `apiclient` normalize to the same class name and
    // collide (spec §8 scenario 5).
    let mut name: String = basename.chars().filter(|c| c.is_ascii_alphanumeric() || *c == '_').collect();
    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    if name.is_empty() {
        name.push('_');
    }
    name
}

/// Resolve one import's source string to either a local canonical path or
/// an external (catalog) reference (spec §4.2 step 3).
#[must_use]
pub fn resolve_import_source(current_module_dir: &str, specifier: &str, source_root: &str) -> ImportSource {
    let joined = if let Some(rest) = specifier.strip_prefix("./") {
        format!("{current_module_dir}/{rest}")
    } else if let Some(rest) = specifier.strip_prefix("../") {
        format!("{current_module_dir}/../{rest}")
    } else if let Some(rest) = specifier.strip_prefix('/') {
        format!("{source_root}/{rest}")
    } else {
        return ImportSource::External;
    };
    ImportSource::Local(canonicalize_path(&joined))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn canonicalizes_dot_segments_and_extension() {
        assert_eq!(canonicalize_path("./src/../src/foo.sl"), "src/foo");
    }

    #[test]
    fn namespace_is_root_plus_relative_dir() {
        let ns = compute_namespace("App", "src/services/user", "src");
        assert_eq!(ns, "App.services");
    }

    #[test]
    fn namespace_at_source_root_is_just_root() {
        let ns = compute_namespace("App", "src/main", "src");
        assert_eq!(ns, "App");
    }

    #[test]
    fn class_name_strips_non_identifier_chars() {
        assert_eq!(compute_class_name("src/api-client"), "apiclient");
    }

    #[test]
    fn class_name_prefixes_leading_digit() {
        assert_eq!(compute_class_name("src/123widget"), "_123widget");
    }

    #[test]
    fn relative_import_resolves_against_current_dir() {
        let resolved = resolve_import_source("src/services", "./user", "src");
        assert_eq!(resolved, ImportSource::Local("src/services/user".to_string()));
    }

    #[test]
    fn parent_relative_import_walks_up() {
        let resolved = resolve_import_source("src/services", "../shared/util", "src");
        assert_eq!(resolved, ImportSource::Local("src/shared/util".to_string()));
    }

    #[test]
    fn bare_specifier_is_external() {
        assert_eq!(resolve_import_source("src/services", "System.Linq", "src"), ImportSource::External);
    }

    #[test]
    fn absolute_import_resolves_from_source_root() {
        let resolved = resolve_import_source("src/services", "/shared/util", "src");
        assert_eq!(resolved, ImportSource::Local("src/shared/util".to_string()));
    }
}
