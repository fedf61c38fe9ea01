//! Environment variable interpolation for configuration text.
//!
//! Configuration files may reference environment variables using `${VAR}`
//! syntax. Interpolation runs over the raw text before JSON parsing, so the
//! bytes the linter validates are the bytes the gateway would actually load.
//!
//! # Syntax
//!
//! - `${VAR_NAME}` - replaced with the variable's value
//! - `$${escaped}` - produces literal `${escaped}` in output

use crate::error::{CheckError, Result};

/// A segment of an interpolated string.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text
    Literal(String),
    /// Variable reference: ${NAME}
    Variable(String),
}

/// Parse a string containing `${VAR}` interpolations into segments.
pub fn parse_interpolation(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut chars = input.chars().peekable();
    let mut current_literal = String::new();

    while let Some(c) = chars.next() {
        if c == '$' {
            match chars.peek() {
                Some('$') => {
                    chars.next();
                    if chars.peek() == Some(&'{') {
                        // $${...} -> literal ${...}
                        chars.next();
                        current_literal.push('$');
                        current_literal.push('{');
                        while let Some(&c) = chars.peek() {
                            chars.next();
                            current_literal.push(c);
                            if c == '}' {
                                break;
                            }
                        }
                    } else {
                        current_literal.push('$');
                    }
                }
                Some('{') => {
                    chars.next();

                    if !current_literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut current_literal)));
                    }

                    let mut var_name = String::new();
                    let mut closed = false;
                    while let Some(c) = chars.next() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        var_name.push(c);
                    }

                    if closed {
                        segments.push(Segment::Variable(var_name));
                    } else {
                        // Unterminated reference stays literal
                        current_literal.push_str("${");
                        current_literal.push_str(&var_name);
                    }
                }
                _ => {
                    current_literal.push(c);
                }
            }
        } else {
            current_literal.push(c);
        }
    }

    if !current_literal.is_empty() {
        segments.push(Segment::Literal(current_literal));
    }

    segments
}

/// Resolve every `${VAR}` reference in `input` from the process environment.
///
/// Fails when a referenced variable is not set; substituting silently would
/// mask typos in variable names.
pub fn resolve_env(input: &str) -> Result<String> {
    let segments = parse_interpolation(input);
    let mut resolved = String::with_capacity(input.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => resolved.push_str(&text),
            Segment::Variable(name) => match std::env::var(&name) {
                Ok(value) => resolved.push_str(&value),
                Err(_) => {
                    return Err(CheckError::RawContentUnavailable {
                        message: format!("environment variable '{}' is not set", name),
                    })
                }
            },
        }
    }

    Ok(resolved)
}
