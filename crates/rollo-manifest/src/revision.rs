//! Revision token extraction from dependency specifications

use crate::value::Value;
use regex::Regex;

/// Extract the comparable revision token from a dependency specification.
///
/// CIPD-style records report the `version` of their first package entry
/// that has one. Everything else falls back to the `url` field (or the
/// value itself when it is a plain string) and captures from the first
/// `@` to the end of the string. The capture deliberately runs past any
/// later `@`; generated roll commands depend on that exact output. A
/// trailing lone `@` yields nothing, as the capture needs at least one
/// character.
pub fn extract_revision(spec: &Value) -> Option<String> {
    let url = match spec {
        Value::Dict(_) => {
            if let Some(packages) = spec.get("packages").and_then(Value::as_list) {
                for package in packages {
                    if let Some(version) = package.get("version").and_then(Value::as_str) {
                        return Some(version.to_string());
                    }
                }
            }
            spec.get("url").and_then(Value::as_str)?
        }
        Value::String(s) => s.as_str(),
        _ => return None,
    };

    let Ok(re) = Regex::new(r"@(.+)") else {
        return None;
    };
    re.captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
