//! Recursive-descent parser and evaluator for manifest documents
//!
//! The manifest dialect writes a document as top-level assignments of
//! nested literals, with two helper calls available inside values:
//! `Str('..')` wraps a plain string and `Var('name')` resolves a variable
//! against the `vars` mapping of the same document. The original format
//! evaluated this text as code; here the grammar is explicit and nothing
//! is executed.
//!
//! Evaluation runs in document order, so `Var` references resolve against
//! the bindings as they stood when the referencing assignment is reached.
//! By convention the format defines `vars` before `deps`; a reference to a
//! variable that is not (yet) known evaluates to the literal placeholder
//! `Var('name')` rather than failing.

use crate::error::{Error, Result};
use crate::lexer::{tokenize, SpannedToken, Token};
use crate::value::{Manifest, Value};
use indexmap::IndexMap;

/// Parse manifest text into its `vars` and `deps` mappings.
///
/// # Errors
/// Returns a positioned error if the text is not in the expected dialect.
/// No partial manifest is produced.
pub fn parse(text: &str) -> Result<Manifest> {
    let tokens = tokenize(text)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        manifest: Manifest::default(),
    };
    parser.document()?;
    tracing::debug!(
        vars = parser.manifest.vars.len(),
        deps = parser.manifest.deps.len(),
        "parsed manifest"
    );
    Ok(parser.manifest)
}

struct Parser {
    tokens: Vec<SpannedToken>,
    pos: usize,
    manifest: Manifest,
}

impl Parser {
    fn peek(&self) -> &SpannedToken {
        // The token stream always ends with Eof, so pos stays in bounds.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> SpannedToken {
        let spanned = self.peek().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        spanned
    }

    fn unexpected(&self, expected: &str) -> Error {
        let spanned = self.peek();
        Error::UnexpectedToken {
            expected: expected.to_string(),
            found: spanned.token.describe(),
            line: spanned.line,
            column: spanned.column,
        }
    }

    fn expect(&mut self, token: Token, expected: &str) -> Result<()> {
        if self.peek().token == token {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn document(&mut self) -> Result<()> {
        loop {
            let name = match &self.peek().token {
                Token::Eof => return Ok(()),
                Token::Ident(name) => name.clone(),
                _ => return Err(self.unexpected("a top-level assignment")),
            };
            self.advance();
            self.expect(Token::Equals, "'='")?;
            let value = self.value()?;
            self.bind(name, value)?;
        }
    }

    // Last write wins on repeated bindings. Only `vars` and `deps` are
    // kept; hooks, per-OS deps and the like are parsed and discarded.
    fn bind(&mut self, name: String, value: Value) -> Result<()> {
        match name.as_str() {
            "vars" => {
                let entries = match value {
                    Value::Dict(entries) => entries,
                    other => {
                        return Err(Error::InvalidBinding {
                            binding: name,
                            found: other.type_name().to_string(),
                        })
                    }
                };
                self.manifest.vars = entries
                    .into_iter()
                    .map(|(key, value)| match value {
                        Value::String(s) => (key, s),
                        other => (key, other.to_string()),
                    })
                    .collect();
            }
            "deps" => {
                let entries = match value {
                    Value::Dict(entries) => entries,
                    other => {
                        return Err(Error::InvalidBinding {
                            binding: name,
                            found: other.type_name().to_string(),
                        })
                    }
                };
                self.manifest.deps = entries;
            }
            _ => {}
        }
        Ok(())
    }

    fn value(&mut self) -> Result<Value> {
        match &self.peek().token {
            Token::LBrace => self.dict(),
            Token::LBracket => self.list(),
            Token::Str(_) => self.string_expr(),
            Token::Int(n) => {
                let n = *n;
                self.advance();
                Ok(Value::Int(n))
            }
            Token::Ident(name) => match name.as_str() {
                "True" => {
                    self.advance();
                    Ok(Value::Bool(true))
                }
                "False" => {
                    self.advance();
                    Ok(Value::Bool(false))
                }
                "None" => {
                    self.advance();
                    Ok(Value::None)
                }
                "Str" | "Var" => self.string_expr(),
                _ => Err(self.unexpected("a value")),
            },
            _ => Err(self.unexpected("a value")),
        }
    }

    // string-expr := term (('+')? term)*
    //
    // Covers explicit '+' concatenation and adjacent string literals; a
    // dependency URL is typically written as
    //   'https://host/repo.git' + '@' + Var('repo_revision')
    fn string_expr(&mut self) -> Result<Value> {
        let mut out = self.string_term()?;
        loop {
            match &self.peek().token {
                Token::Plus => {
                    self.advance();
                    out.push_str(&self.string_term()?);
                }
                Token::Str(_) => {
                    out.push_str(&self.string_term()?);
                }
                _ => return Ok(Value::String(out)),
            }
        }
    }

    // term := STRING | Str '(' STRING ')' | Var '(' STRING ')'
    fn string_term(&mut self) -> Result<String> {
        match &self.peek().token {
            Token::Str(s) => {
                let s = s.clone();
                self.advance();
                Ok(s)
            }
            Token::Ident(name) if name == "Str" => {
                self.advance();
                self.expect(Token::LParen, "'('")?;
                let inner = self.literal_string()?;
                self.expect(Token::RParen, "')'")?;
                Ok(inner)
            }
            Token::Ident(name) if name == "Var" => {
                self.advance();
                self.expect(Token::LParen, "'('")?;
                let name = self.literal_string()?;
                self.expect(Token::RParen, "')'")?;
                Ok(self.resolve_var(&name))
            }
            _ => Err(self.unexpected("a string term")),
        }
    }

    fn literal_string(&mut self) -> Result<String> {
        match &self.peek().token {
            Token::Str(s) => {
                let s = s.clone();
                self.advance();
                Ok(s)
            }
            _ => Err(self.unexpected("a string literal")),
        }
    }

    // Lookup-or-placeholder: an unknown variable renders as the literal
    // reference text instead of aborting the parse.
    fn resolve_var(&self, name: &str) -> String {
        match self.manifest.vars.get(name) {
            Some(value) => value.clone(),
            None => {
                tracing::debug!(var = name, "unresolved variable reference");
                format!("Var('{}')", name)
            }
        }
    }

    fn dict(&mut self) -> Result<Value> {
        self.expect(Token::LBrace, "'{'")?;
        let mut entries: IndexMap<String, Value> = IndexMap::new();
        loop {
            if self.peek().token == Token::RBrace {
                self.advance();
                return Ok(Value::Dict(entries));
            }
            let key = self.literal_string()?;
            self.expect(Token::Colon, "':'")?;
            let value = self.value()?;
            entries.insert(key, value);
            match &self.peek().token {
                Token::Comma => {
                    self.advance();
                }
                Token::RBrace => {}
                _ => return Err(self.unexpected("',' or '}'")),
            }
        }
    }

    fn list(&mut self) -> Result<Value> {
        self.expect(Token::LBracket, "'['")?;
        let mut items = Vec::new();
        loop {
            if self.peek().token == Token::RBracket {
                self.advance();
                return Ok(Value::List(items));
            }
            items.push(self.value()?);
            match &self.peek().token {
                Token::Comma => {
                    self.advance();
                }
                Token::RBracket => {}
                _ => return Err(self.unexpected("',' or ']'")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vars_and_deps() {
        let manifest = parse(
            r#"
vars = {
  'x_revision': 'abc',
}
deps = {
  'third_party/x': 'https://example/x.git' + '@' + Var('x_revision'),
}
"#,
        )
        .unwrap();

        assert_eq!(manifest.var("x_revision"), Some("abc"));
        assert_eq!(
            manifest.dep("third_party/x").and_then(Value::as_str),
            Some("https://example/x.git@abc")
        );
    }

    #[test]
    fn test_str_helper_and_adjacent_literals() {
        let manifest = parse(
            r#"
deps = {
  'a': Str('plain'),
  'b': 'one' 'two',
}
"#,
        )
        .unwrap();
        assert_eq!(manifest.dep("a").and_then(Value::as_str), Some("plain"));
        assert_eq!(manifest.dep("b").and_then(Value::as_str), Some("onetwo"));
    }

    #[test]
    fn test_unknown_var_yields_placeholder() {
        let manifest = parse("deps = { 'a': Var('missing') }").unwrap();
        assert_eq!(
            manifest.dep("a").and_then(Value::as_str),
            Some("Var('missing')")
        );
    }

    #[test]
    fn test_cipd_dependency_shape() {
        let manifest = parse(
            r#"
deps = {
  'buildtools/linux64': {
    'packages': [
      {
        'package': 'gn/gn/linux-amd64',
        'version': 'git_revision:feedface',
      },
    ],
    'dep_type': 'cipd',
    'condition': 'host_os == "linux"',
  },
}
"#,
        )
        .unwrap();

        let dep = manifest.dep("buildtools/linux64").unwrap();
        assert_eq!(
            dep.get("dep_type").and_then(Value::as_str),
            Some("cipd")
        );
        let packages = dep.get("packages").and_then(Value::as_list).unwrap();
        assert_eq!(
            packages[0].get("version").and_then(Value::as_str),
            Some("git_revision:feedface")
        );
    }

    #[test]
    fn test_unrelated_bindings_are_discarded() {
        let manifest = parse(
            r#"
gclient_gn_args_file = 'build/config/gclient_args.gni'
vars = { 'v': '1' }
hooks = [
  { 'name': 'sysroot', 'pattern': '.' },
]
"#,
        )
        .unwrap();
        assert_eq!(manifest.var("v"), Some("1"));
        assert!(manifest.deps.is_empty());
    }

    #[test]
    fn test_deps_preserve_declaration_order() {
        let manifest = parse(
            r#"
deps = {
  'z/first': 'u@1',
  'a/second': 'u@2',
  'm/third': 'u@3',
}
"#,
        )
        .unwrap();
        let paths: Vec<&String> = manifest.deps.keys().collect();
        assert_eq!(paths, ["z/first", "a/second", "m/third"]);
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let manifest = parse("vars = { 'x': 'old', 'x': 'new' }").unwrap();
        assert_eq!(manifest.var("x"), Some("new"));
    }

    #[test]
    fn test_var_defined_in_later_binding_is_not_visible_earlier() {
        // deps assigned before vars: the reference resolves against the
        // bindings as they stood at that point, so it stays a placeholder.
        let manifest = parse(
            r#"
deps = { 'a': Var('late') }
vars = { 'late': 'abc' }
"#,
        )
        .unwrap();
        assert_eq!(
            manifest.dep("a").and_then(Value::as_str),
            Some("Var('late')")
        );
        assert_eq!(manifest.var("late"), Some("abc"));
    }

    #[test]
    fn test_malformed_text_is_rejected() {
        let err = parse("deps = { 'a' 'b' }").unwrap_err();
        assert!(matches!(err, Error::UnexpectedToken { .. }));

        let err = parse("deps = { 'a': }").unwrap_err();
        assert!(matches!(err, Error::UnexpectedToken { .. }));

        assert!(parse("deps = [ 'not', 'a', 'dict' ]").is_err());
    }

    #[test]
    fn test_non_string_var_values_are_rendered() {
        let manifest = parse("vars = { 'checkout_foo': False, 'n': 3 }").unwrap();
        assert_eq!(manifest.var("checkout_foo"), Some("False"));
        assert_eq!(manifest.var("n"), Some("3"));
    }
}
