//! Polymorphic value model for parsed manifest documents

use indexmap::IndexMap;
use std::fmt;

/// A value appearing in a manifest document.
///
/// Dependency specifications are polymorphic: a plain URL string, a
/// structured record with a `url` field, or a CIPD-style record with a
/// `packages` list. Dicts preserve declaration order because path
/// resolution walks `deps` in that order.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// String literal (after `Str(..)`/`Var(..)` resolution and concatenation)
    String(String),
    /// Integer literal
    Int(i64),
    /// `True` / `False`
    Bool(bool),
    /// `None`
    None,
    /// `[...]` list
    List(Vec<Value>),
    /// `{...}` dict, in declaration order
    Dict(IndexMap<String, Value>),
}

impl Value {
    /// The string content, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The entries, if this is a dict value
    pub fn as_dict(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Dict(entries) => Some(entries),
            _ => None,
        }
    }

    /// The elements, if this is a list value
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Dict field lookup; `None` for non-dicts and missing keys
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_dict().and_then(|entries| entries.get(key))
    }

    /// Short type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Int(_) => "integer",
            Value::Bool(_) => "boolean",
            Value::None => "none",
            Value::List(_) => "list",
            Value::Dict(_) => "dict",
        }
    }

    // Nested rendering quotes strings; top-level Display does not, so a
    // bare string value stringifies to its verbatim content.
    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "'{}'", s),
            other => other.fmt_toplevel(f),
        }
    }

    fn fmt_toplevel(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Int(n) => write!(f, "{}", n),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::None => write!(f, "None"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    item.fmt_nested(f)?;
                }
                write!(f, "]")
            }
            Value::Dict(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "'{}': ", key)?;
                    value.fmt_nested(f)?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// Renders the value the way the source dialect's `str()` would: bare
/// strings verbatim, strings inside containers quoted. Revision lookup
/// substring-matches against this rendering.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_toplevel(f)
    }
}

/// A parsed manifest: the `vars` and `deps` mappings.
///
/// Both mappings keep declaration order. Other top-level bindings in the
/// source text (hooks, per-OS deps, ...) are parsed and discarded.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    /// Variable name to string value
    pub vars: IndexMap<String, String>,
    /// Dependency path to dependency specification
    pub deps: IndexMap<String, Value>,
}

impl Manifest {
    /// Look up a variable by name
    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Look up a dependency specification by path
    pub fn dep(&self, path: &str) -> Option<&Value> {
        self.deps.get(path)
    }
}
