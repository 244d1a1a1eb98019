use crate::domain::model::ImplementorMap;
use crate::utils::error::{RegistryError, Result};
use regex::Regex;
use std::sync::OnceLock;

// The generator wraps the mapping in an IIFE:
//   (function() {var implementors = {...};if (window.register_implementors)
//   {window.register_implementors(implementors);} else
//   {window.pending_implementors = implementors;}})()
// The object literal is valid JSON, so we locate the assignment and let a
// stream deserializer read exactly one value, ignoring the dispatch tail.
fn marker_regex() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| Regex::new(r"var\s+implementors\s*=\s*").expect("static regex"))
}

pub fn parse_implementors_js(path: &str, source: &str) -> Result<ImplementorMap> {
    let marker = marker_regex().find(source).ok_or_else(|| RegistryError::ParseError {
        file: path.to_string(),
        reason: "missing 'var implementors =' marker".to_string(),
    })?;

    let rest = &source[marker.end()..];
    let mut stream = serde_json::Deserializer::from_str(rest).into_iter::<ImplementorMap>();

    match stream.next() {
        Some(Ok(map)) => Ok(map),
        Some(Err(e)) => Err(RegistryError::ParseError {
            file: path.to_string(),
            reason: format!("malformed mapping object: {}", e),
        }),
        None => Err(RegistryError::ParseError {
            file: path.to_string(),
            reason: "no mapping object after marker".to_string(),
        }),
    }
}

/// Whether the file carries the standard registrar dispatch tail. Its
/// absence does not affect parsing but indicates generator drift.
pub fn has_dispatch_tail(source: &str) -> bool {
    source.contains("register_implementors")
}

#[cfg(test)]
mod tests {
    use super::*;

    // Shaped like rustdoc's implementors/core/ops/drop/trait.Drop.js.
    const SAMPLE: &str = r#"(function() {var implementors = {
"cranelift_filetests":[["impl <a class=\"trait\" href=\"https://doc.rust-lang.org/nightly/core/ops/drop/trait.Drop.html\" title=\"trait core::ops::drop::Drop\">Drop</a> for CompiledTestFile"]],
"wasmtime":[["impl Drop for Exports&lt;'_&gt;"],["impl&lt;T&gt; Drop for Store&lt;T&gt;"]],
"wasmtime_environ":[]
};if (window.register_implementors) {window.register_implementors(implementors);} else {window.pending_implementors = implementors;}})()"#;

    #[test]
    fn parses_generated_file_shape() {
        let map = parse_implementors_js("trait.Drop.js", SAMPLE).unwrap();

        let names: Vec<&str> = map.crate_names().collect();
        assert_eq!(names, vec!["cranelift_filetests", "wasmtime", "wasmtime_environ"]);
        assert_eq!(map.get("wasmtime").unwrap().len(), 2);
        assert_eq!(map.get("wasmtime_environ").unwrap().len(), 0);
        // Descriptor HTML passes through verbatim, escapes intact.
        assert!(map.get("cranelift_filetests").unwrap()[0].contains("class=\"trait\""));
    }

    #[test]
    fn dispatch_tail_is_ignored_by_the_parser() {
        let map = parse_implementors_js("trait.Drop.js", SAMPLE).unwrap();
        assert_eq!(map.len(), 3);
        assert!(has_dispatch_tail(SAMPLE));
    }

    #[test]
    fn detects_missing_dispatch_tail() {
        let bare = r#"(function() {var implementors = {"a":[]};})()"#;
        assert!(!has_dispatch_tail(bare));
        let map = parse_implementors_js("bare.js", bare).unwrap();
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn missing_marker_is_a_parse_error() {
        let err = parse_implementors_js("empty.js", "(function() {})()").unwrap_err();
        match err {
            RegistryError::ParseError { file, reason } => {
                assert_eq!(file, "empty.js");
                assert!(reason.contains("marker"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let bad = r#"var implementors = {"a": [unquoted]};"#;
        let err = parse_implementors_js("bad.js", bad).unwrap_err();
        assert!(matches!(err, RegistryError::ParseError { .. }));
    }

    #[test]
    fn whitespace_variants_around_assignment_parse() {
        let spaced = "var  implementors\n=\n{\"only\":[]};";
        let map = parse_implementors_js("spaced.js", spaced).unwrap();
        assert!(map.contains("only"));
    }
}
