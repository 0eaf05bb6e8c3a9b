//! Recursive-descent parser for path expressions.
//!
//! Precedence, loosest first:
//! - `|` pipe
//! - `||` default-or
//! - `.field`, `[index]` postfix access
//!
//! Both binary operators are left-associative, so
//! ``a || [`x`] | sort(@) | join(`, `, @)`` parses as
//! `((a || [x]) | sort(@)) | join(", ", @)`.

use std::collections::HashSet;
use std::ops::Range;

use serde_json::Value;

use super::ast::Node;
use super::error::CompileError;
use super::functions::FunctionRegistry;
use super::lexer::{Lexer, Spanned, Token};

/// One `key: expression` entry of a multiselect hash, with the source span
/// of its expression
pub(crate) struct ObjectEntry {
    pub key: String,
    pub node: Node,
    pub span: Range<usize>,
}

pub(crate) struct Parser<'r> {
    tokens: Vec<Spanned>,
    position: usize,
    eof: Spanned,
    functions: &'r FunctionRegistry,
}

impl<'r> Parser<'r> {
    pub fn new(source: &str, functions: &'r FunctionRegistry) -> Result<Self, CompileError> {
        let tokens = Lexer::new(source).tokenize()?;
        Ok(Self {
            tokens,
            position: 0,
            eof: Spanned {
                token: Token::Eof,
                position: source.len(),
            },
            functions,
        })
    }

    fn current(&self) -> &Spanned {
        self.tokens.get(self.position).unwrap_or(&self.eof)
    }

    fn current_token(&self) -> &Token {
        &self.current().token
    }

    fn peek_token(&self, offset: usize) -> &Token {
        self.tokens
            .get(self.position + offset)
            .map(|s| &s.token)
            .unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    /// Error describing the current token
    fn unexpected(&self, expected: &'static str) -> CompileError {
        let current = self.current();
        match &current.token {
            Token::Eof => CompileError::UnexpectedEnd {
                expected,
                position: current.position,
            },
            token => CompileError::UnexpectedToken {
                found: token.to_string(),
                expected,
                position: current.position,
            },
        }
    }

    fn expect(&mut self, token: Token, expected: &'static str) -> Result<(), CompileError> {
        if self.current_token() == &token {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Parse a whole expression; trailing tokens are an error
    pub fn parse(&mut self) -> Result<Node, CompileError> {
        let node = self.parse_pipe()?;
        self.expect(Token::Eof, "end of expression")?;
        Ok(node)
    }

    /// Parse a whole `{ key: expression, ... }` projection
    pub fn parse_projection(&mut self) -> Result<Vec<ObjectEntry>, CompileError> {
        if self.current_token() != &Token::LeftBrace {
            let current = self.current();
            return Err(CompileError::NotAProjection {
                found: current.token.to_string(),
                position: current.position,
            });
        }
        let entries = self.parse_object_entries()?;
        self.expect(Token::Eof, "end of projection")?;
        Ok(entries)
    }

    fn parse_pipe(&mut self) -> Result<Node, CompileError> {
        let mut left = self.parse_or()?;
        while self.current_token() == &Token::Pipe {
            self.advance();
            let right = self.parse_or()?;
            left = Node::Pipe(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_or(&mut self) -> Result<Node, CompileError> {
        let mut left = self.parse_postfix()?;
        while self.current_token() == &Token::Or {
            self.advance();
            let right = self.parse_postfix()?;
            left = Node::DefaultOr(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_postfix(&mut self) -> Result<Node, CompileError> {
        let mut node = self.parse_primary()?;

        loop {
            match self.current_token() {
                Token::Dot => {
                    self.advance();
                    node = self.parse_selector(node)?;
                }
                Token::LeftBracket => {
                    self.advance();
                    let index = self.parse_index()?;
                    node = Node::IndexAccess(Box::new(node), index);
                }
                _ => break,
            }
        }

        Ok(node)
    }

    /// What may follow a `.`: a name, or a multiselect applied to the base
    fn parse_selector(&mut self, base: Node) -> Result<Node, CompileError> {
        match self.current_token().clone() {
            Token::Identifier(name) | Token::QuotedIdentifier(name) => {
                self.advance();
                Ok(Node::FieldAccess(Box::new(base), name))
            }
            Token::LeftBrace => {
                let object = self.parse_object()?;
                Ok(Node::Pipe(Box::new(base), Box::new(object)))
            }
            Token::LeftBracket => {
                let list = self.parse_list()?;
                Ok(Node::Pipe(Box::new(base), Box::new(list)))
            }
            _ => Err(self.unexpected("field name after '.'")),
        }
    }

    /// `<integer> ]`, the opening bracket already consumed
    fn parse_index(&mut self) -> Result<i64, CompileError> {
        let index = match self.current_token() {
            Token::Integer(index) => *index,
            _ => return Err(self.unexpected("array index")),
        };
        self.advance();
        self.expect(Token::RightBracket, "']'")?;
        Ok(index)
    }

    fn parse_primary(&mut self) -> Result<Node, CompileError> {
        match self.current_token().clone() {
            Token::Identifier(name) => {
                if self.peek_token(1) == &Token::LeftParen {
                    return self.parse_call(name);
                }
                self.advance();
                Ok(Node::field(&name))
            }
            Token::QuotedIdentifier(name) => {
                self.advance();
                Ok(Node::field(&name))
            }
            Token::At => {
                self.advance();
                Ok(Node::Current)
            }
            Token::Literal(value) => {
                self.advance();
                Ok(Node::Literal(value))
            }
            Token::RawString(s) => {
                self.advance();
                Ok(Node::Literal(Value::String(s)))
            }
            Token::LeftBracket => {
                if matches!(self.peek_token(1), Token::Integer(_)) {
                    self.advance(); // consume '['
                    let index = self.parse_index()?;
                    return Ok(Node::IndexAccess(Box::new(Node::Current), index));
                }
                self.parse_list()
            }
            Token::LeftBrace => self.parse_object(),
            Token::LeftParen => {
                self.advance();
                let inner = self.parse_pipe()?;
                self.expect(Token::RightParen, "')'")?;
                Ok(inner)
            }
            _ => Err(self.unexpected("expression")),
        }
    }

    /// `name(arg, ...)` with the function resolved against the registry
    fn parse_call(&mut self, name: String) -> Result<Node, CompileError> {
        let position = self.current().position;
        self.advance(); // consume name
        self.advance(); // consume '('

        let mut args = Vec::new();
        if self.current_token() != &Token::RightParen {
            loop {
                args.push(self.parse_pipe()?);
                if self.current_token() == &Token::Comma {
                    self.advance();
                } else {
                    break;
                }
            }
        }
        self.expect(Token::RightParen, "',' or ')'")?;

        let function = self
            .functions
            .resolve(&name)
            .ok_or_else(|| CompileError::UnknownFunction {
                name: name.clone(),
                position,
            })?;
        if function.arity() != args.len() {
            return Err(CompileError::Arity {
                name,
                expected: function.arity(),
                found: args.len(),
                position,
            });
        }

        Ok(Node::Call(function, args))
    }

    /// `[expr, ...]`
    fn parse_list(&mut self) -> Result<Node, CompileError> {
        self.advance(); // consume '['
        let mut items = Vec::new();
        loop {
            items.push(self.parse_pipe()?);
            if self.current_token() == &Token::Comma {
                self.advance();
            } else {
                break;
            }
        }
        self.expect(Token::RightBracket, "',' or ']'")?;
        Ok(Node::List(items))
    }

    /// `{key: expr, ...}`
    fn parse_object(&mut self) -> Result<Node, CompileError> {
        let entries = self.parse_object_entries()?;
        Ok(Node::Object(
            entries.into_iter().map(|e| (e.key, e.node)).collect(),
        ))
    }

    fn parse_object_entries(&mut self) -> Result<Vec<ObjectEntry>, CompileError> {
        self.advance(); // consume '{'
        let mut entries = Vec::new();
        let mut seen = HashSet::new();

        loop {
            let key_position = self.current().position;
            let key = match self.current_token().clone() {
                Token::Identifier(key) | Token::QuotedIdentifier(key) => key,
                _ => return Err(self.unexpected("key")),
            };
            if !seen.insert(key.clone()) {
                return Err(CompileError::DuplicateKey {
                    key,
                    position: key_position,
                });
            }
            self.advance();
            self.expect(Token::Colon, "':'")?;

            let start = self.current().position;
            let node = self.parse_pipe()?;
            let end = self.current().position;
            entries.push(ObjectEntry {
                key,
                node,
                span: start..end,
            });

            if self.current_token() == &Token::Comma {
                self.advance();
            } else {
                break;
            }
        }

        self.expect(Token::RightBrace, "',' or '}'")?;
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(source: &str) -> Result<Node, CompileError> {
        let functions = FunctionRegistry::builtin();
        Parser::new(source, &functions)?.parse()
    }

    fn field(base: Node, name: &str) -> Node {
        Node::FieldAccess(Box::new(base), name.to_string())
    }

    #[test]
    fn test_parse_bare_field() {
        assert_eq!(parse("name").unwrap(), Node::field("name"));
    }

    #[test]
    fn test_parse_nested_fields() {
        let node = parse("properties.controlPlaneProfile.kubernetesVersion").unwrap();
        let expected = field(
            field(Node::field("properties"), "controlPlaneProfile"),
            "kubernetesVersion",
        );
        assert_eq!(node, expected);
    }

    #[test]
    fn test_parse_index_then_field() {
        let node = parse("properties.agentPoolProfiles[0].upgrades").unwrap();
        let expected = field(
            Node::IndexAccess(
                Box::new(field(Node::field("properties"), "agentPoolProfiles")),
                0,
            ),
            "upgrades",
        );
        assert_eq!(node, expected);
    }

    #[test]
    fn test_parse_leading_index() {
        assert_eq!(
            parse("[1]").unwrap(),
            Node::IndexAccess(Box::new(Node::Current), 1)
        );
    }

    #[test]
    fn test_parse_default_or_literal() {
        let node = parse("version || `unknown`").unwrap();
        assert_eq!(
            node,
            Node::DefaultOr(
                Box::new(Node::field("version")),
                Box::new(Node::Literal(json!("unknown")))
            )
        );
    }

    #[test]
    fn test_or_binds_tighter_than_pipe() {
        let node = parse("a || [`None available`] | sort(@) | join(`, `, @)").unwrap();
        let Node::Pipe(left, join) = node else {
            panic!("expected pipe at top level");
        };
        assert!(matches!(*join, Node::Call(ref f, _) if f.name() == "join"));
        let Node::Pipe(or, sort) = *left else {
            panic!("expected nested pipe");
        };
        assert!(matches!(*sort, Node::Call(ref f, _) if f.name() == "sort"));
        assert_eq!(
            *or,
            Node::DefaultOr(
                Box::new(Node::field("a")),
                Box::new(Node::List(vec![Node::Literal(json!("None available"))]))
            )
        );
    }

    #[test]
    fn test_parse_parenthesized() {
        let node = parse("(a || b) | c").unwrap();
        assert!(matches!(node, Node::Pipe(ref l, _) if matches!(**l, Node::DefaultOr(_, _))));
    }

    #[test]
    fn test_parse_call_arguments() {
        let node = parse("join(', ', @)").unwrap();
        let Node::Call(function, args) = node else {
            panic!("expected call");
        };
        assert_eq!(function.name(), "join");
        assert_eq!(args, vec![Node::Literal(json!(", ")), Node::Current]);
    }

    #[test]
    fn test_parse_object() {
        let node = parse("{name: name, \"rg\": resourceGroup}").unwrap();
        assert_eq!(
            node,
            Node::Object(vec![
                ("name".to_string(), Node::field("name")),
                ("rg".to_string(), Node::field("resourceGroup")),
            ])
        );
    }

    #[test]
    fn test_parse_dot_multiselect() {
        let node = parse("properties.{v: kubernetesVersion}").unwrap();
        assert!(matches!(node, Node::Pipe(_, ref r) if matches!(**r, Node::Object(_))));
        let node = parse("properties.[fqdn, provisioningState]").unwrap();
        assert!(matches!(node, Node::Pipe(_, ref r) if matches!(**r, Node::List(_))));
    }

    #[test]
    fn test_unknown_function() {
        let err = parse("name | reverse(@)").unwrap_err();
        assert_eq!(
            err,
            CompileError::UnknownFunction {
                name: "reverse".to_string(),
                position: 7
            }
        );
    }

    #[test]
    fn test_wrong_arity() {
        let err = parse("join(@)").unwrap_err();
        assert!(matches!(
            err,
            CompileError::Arity {
                expected: 2,
                found: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_trailing_tokens() {
        let err = parse("name location").unwrap_err();
        assert_eq!(
            err,
            CompileError::UnexpectedToken {
                found: "identifier 'location'".to_string(),
                expected: "end of expression",
                position: 5
            }
        );
    }

    #[test]
    fn test_dangling_operator() {
        let err = parse("name ||").unwrap_err();
        assert_eq!(
            err,
            CompileError::UnexpectedEnd {
                expected: "expression",
                position: 7
            }
        );
    }

    #[test]
    fn test_non_integer_index() {
        let err = parse("a[b]").unwrap_err();
        assert!(matches!(err, CompileError::UnexpectedToken { position: 2, .. }));
    }

    #[test]
    fn test_empty_expression() {
        assert!(matches!(
            parse("").unwrap_err(),
            CompileError::UnexpectedEnd { position: 0, .. }
        ));
    }

    #[test]
    fn test_duplicate_key() {
        let err = parse("{a: x, a: y}").unwrap_err();
        assert_eq!(
            err,
            CompileError::DuplicateKey {
                key: "a".to_string(),
                position: 7
            }
        );
    }

    #[test]
    fn test_projection_requires_object() {
        let functions = FunctionRegistry::builtin();
        let err = Parser::new("name", &functions)
            .unwrap()
            .parse_projection()
            .err()
            .unwrap();
        assert!(matches!(err, CompileError::NotAProjection { position: 0, .. }));
    }

    #[test]
    fn test_projection_entry_spans() {
        let source = "{ name: name, v: a || `x` }";
        let functions = FunctionRegistry::builtin();
        let entries = Parser::new(source, &functions)
            .unwrap()
            .parse_projection()
            .unwrap();
        let texts: Vec<&str> = entries.iter().map(|e| source[e.span.clone()].trim()).collect();
        assert_eq!(texts, vec!["name", "a || `x`"]);
    }
}
