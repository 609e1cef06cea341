//! Signature-key computation (spec §4.1): the key overload resolution
//! matches on is `<types>|mods=<pairs>`, where `<types>` is the comma-joined
//! canonical parameter-type list pulled out of a method's
//! `canonicalSignature`, and `<pairs>` lists only the non-default
//! `by-ref` parameter modifiers, each as `<index>:<modifier>`.

use crate::descriptor::ParamModifier;

/// Split a `canonicalSignature` string of the form `(p1,p2,...):ret` into
/// its parenthesized parameter list and return-type tail. Returns `None`
/// if the string does not open with a balanced parameter group.
#[must_use]
pub fn split_params_and_return(signature: &str) -> Option<(&str, &str)> {
    let signature = signature.trim();
    if !signature.starts_with('(') {
        return None;
    }
    let bytes = signature.as_bytes();
    let mut depth = 0i32;
    let mut close = None;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(i);
                    break;
                }
            }
            _ => {}
        }
    }
    let close = close?;
    let params = &signature[1..close];
    let rest = signature[close + 1..].trim_start_matches(':');
    Some((params, rest))
}

/// Split a comma-separated list at top-level commas only, treating `[`/`]`
/// and `(`/`)` as nesting so generic argument lists (`Func\`2[T,Boolean]`)
/// are not torn apart.
#[must_use]
pub fn split_top_level(list: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut depth = 0i32;
    let mut start = 0usize;
    for (i, c) in list.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth -= 1,
            ',' if depth == 0 => {
                let piece = list[start..i].trim();
                if !piece.is_empty() {
                    out.push(piece.to_string());
                }
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    let tail = list[start..].trim();
    if !tail.is_empty() {
        out.push(tail.to_string());
    }
    out
}

/// Extract the canonical parameter-type list from a `canonicalSignature`.
#[must_use]
pub fn parameter_types(canonical_signature: &str) -> Vec<String> {
    match split_params_and_return(canonical_signature) {
        Some((params, _ret)) => split_top_level(params),
        None => Vec::new(),
    }
}

/// Build the overload-matching signature key from a parameter-type list
/// and the method's by-ref modifiers.
#[must_use]
pub fn signature_key(param_types: &[String], modifiers: &[ParamModifier]) -> String {
    let mods: Vec<String> = modifiers
        .iter()
        .enumerate()
        .filter(|(_, m)| !matches!(m, ParamModifier::None))
        .map(|(i, m)| format!("{i}:{m:?}"))
        .collect();
    format!("{}|mods={}", param_types.join(","), mods.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_simple_signature() {
        let (params, ret) = split_params_and_return("(String,Int32):Boolean").unwrap();
        assert_eq!(params, "String,Int32");
        assert_eq!(ret, "Boolean");
    }

    #[test]
    fn respects_nested_generic_brackets() {
        let (params, _) = split_params_and_return("(IEnumerable`1[T],Func`2[T,Boolean]):IEnumerable`1[T]").unwrap();
        let parts = split_top_level(params);
        assert_eq!(parts, vec!["IEnumerable`1[T]", "Func`2[T,Boolean]"]);
    }

    #[test]
    fn signature_key_omits_none_modifiers() {
        let types = vec!["String".to_string(), "Int32".to_string()];
        let mods = vec![ParamModifier::None, ParamModifier::Out];
        assert_eq!(signature_key(&types, &mods), "String,Int32|mods=1:Out");
    }

    #[test]
    fn signature_key_with_no_modifiers_has_empty_pairs() {
        let types = vec!["String".to_string()];
        assert_eq!(signature_key(&types, &[ParamModifier::None]), "String|mods=");
    }
}
