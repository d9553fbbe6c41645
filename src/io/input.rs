use crate::prelude::*;
use log::debug;
use memmap::Mmap;
use std::fs::File;
use std::io;
use std::path::Path;
use std::str::{self, Utf8Error};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read knowledge base: {0}")]
    Io(#[from] io::Error),
    #[error("knowledge base is not valid UTF-8: {0}")]
    Encoding(#[from] Utf8Error),
    #[error("knowledge base must have at least one line")]
    Empty,
    #[error("line {line}: no literals")]
    EmptyClause { line: usize },
    #[error("line {line}: malformed literal '{token}'")]
    MalformedLiteral { line: usize, token: String },
    #[error("line {line}: '{name}' occurs with both polarities")]
    Tautology { line: usize, name: String },
}

fn literal(line: usize, token: &str) -> Result<(&str, bool), InputError> {
    let (name, polarity) = match token.strip_prefix('~') {
        Some(name) => (name, false),
        None => (token, true),
    };
    if name.is_empty() || name.starts_with('~') {
        let token = token.to_string();
        return Err(InputError::MalformedLiteral { line, token });
    }
    Ok((name, polarity))
}

fn tokens(line: usize, text: &str) -> Result<Vec<(&str, bool)>, InputError> {
    let tokens = text
        .split_whitespace()
        .map(|token| literal(line, token))
        .collect::<Result<Vec<_>, _>>()?;
    if tokens.is_empty() {
        return Err(InputError::EmptyClause { line });
    }
    Ok(tokens)
}

/// Build a knowledge base from its textual form.
///
/// Every line but the last is a premise clause; the last line is the query,
/// whose literals are negated into unit clauses.
pub fn parse(text: &str) -> Result<KnowledgeBase, InputError> {
    let lines = text.lines().collect::<Vec<_>>();
    let (query, premises) = lines.split_last().ok_or(InputError::Empty)?;

    let mut builder = KnowledgeBuilder::default();
    for (index, text) in premises.iter().enumerate() {
        let line = index + 1;
        for (name, polarity) in tokens(line, text)? {
            if builder.literal(name, polarity).is_err() {
                let name = name.to_string();
                return Err(InputError::Tautology { line, name });
            }
        }
        builder.premise();
    }
    for (name, polarity) in tokens(lines.len(), query)? {
        builder.query(name, polarity);
    }
    Ok(builder.finish())
}

pub fn load(path: &Path) -> Result<KnowledgeBase, InputError> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Err(InputError::Empty);
    }
    let map = unsafe { Mmap::map(&file)? };
    let text = str::from_utf8(&map)?;
    debug!("read {} bytes from {}", map.len(), path.display());
    parse(text)
}
