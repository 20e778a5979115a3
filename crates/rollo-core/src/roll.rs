//! Roll decision for a single entry and roll-all orchestration

use crate::entries::{is_unsupported, ALL_ENTRIES, FREETYPE_ENTRY};
use crate::error::{Result, RollError};
use crate::resolver::find_path_for_revision;
use rollo_manifest::{extract_revision, Manifest, Value};
use serde::Serialize;

/// Outcome of a successful roll decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "command")]
pub enum RollOutcome {
    /// Upstream and downstream revisions match; nothing to do
    UpToDate,
    /// An advisory command line that would perform the roll
    Action(String),
}

impl RollOutcome {
    /// The single-line message for this outcome
    pub fn message(&self) -> &str {
        match self {
            RollOutcome::UpToDate => "Revisions are the same.",
            RollOutcome::Action(command) => command,
        }
    }
}

/// Decide how to roll a single entry.
///
/// The downstream manifest is consulted only through its `vars`; the
/// upstream manifest through its `vars` first, then through
/// `deps["src/" + downstream_path]` with revision extraction. Expected
/// outcomes (unsupported, unknown, unresolvable entries) come back as
/// [`RollError`] values whose `Display` strings are the report lines.
pub fn roll_entry(upstream: &Manifest, downstream: &Manifest, entry: &str) -> Result<RollOutcome> {
    if is_unsupported(entry) {
        return Err(RollError::Unsupported(entry.to_string()));
    }

    let Some(downstream_revision) = downstream.var(entry) else {
        return Err(RollError::EntryNotFound(entry.to_string()));
    };

    let Some(path) = find_path_for_revision(&downstream.deps, downstream_revision) else {
        return Err(RollError::PathNotFound(entry.to_string()));
    };

    let is_package_style = downstream
        .dep(path)
        .and_then(|spec| spec.get("dep_type"))
        .and_then(Value::as_str)
        == Some("cipd");

    tracing::debug!(entry, path, is_package_style, "resolved downstream entry");

    // Upstream: vars first, then the prefixed deps path.
    let upstream_revision = match upstream.var(entry) {
        Some(revision) => Some(revision.to_string()),
        None => upstream
            .dep(&format!("src/{}", path))
            .and_then(extract_revision),
    };

    let Some(upstream_revision) = upstream_revision else {
        if is_package_style {
            return Err(RollError::UpstreamNotFound(entry.to_string()));
        }
        // Nothing pinned upstream: suggest rolling to tip of tree.
        return Ok(RollOutcome::Action(format!(
            "roll-dep {} --ignore-dirty-tree --no-log",
            path
        )));
    };

    if upstream_revision == downstream_revision {
        return Ok(RollOutcome::UpToDate);
    }

    if is_package_style {
        return Ok(RollOutcome::Action(format!(
            "CIPD {}: {}",
            entry, upstream_revision
        )));
    }

    if entry == FREETYPE_ENTRY {
        return Ok(RollOutcome::Action(format!(
            "third_party/freetype/roll-freetype.sh --roll-to {} --ignore-dirty-tree --no-log",
            upstream_revision
        )));
    }

    Ok(RollOutcome::Action(format!(
        "roll-dep {} --roll-to {} --ignore-dirty-tree --no-log",
        path, upstream_revision
    )))
}

/// Roll every known entry, in allow-list order.
///
/// Fails fast: the first entry that cannot be resolved aborts the run and
/// only that failure surfaces, so a misleading partial advisory list is
/// never emitted. On success, returns the advisory messages for entries
/// that need action, preserving allow-list order.
pub fn roll_all(upstream: &Manifest, downstream: &Manifest) -> Result<Vec<String>> {
    let mut messages = Vec::new();
    for entry in ALL_ENTRIES {
        match roll_entry(upstream, downstream, entry)? {
            RollOutcome::UpToDate => {}
            RollOutcome::Action(command) => messages.push(command),
        }
    }
    Ok(messages)
}
