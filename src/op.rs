//! Command-line pipelines: parsing flags into operations, and applying them.
//!
//! A pipeline is a series of programs. `--list DIR` starts a program, and
//! every op after it, up to the next `--list`, transforms that program's
//! bundle.

use crate::bundle::Bundle;
use crate::definition::Metadata;
use crate::error::{Error, Result};
use regex::Regex;
use serde_json::Value;
use std::path::{Path, PathBuf};
use strum_macros::EnumIter;

#[derive(Debug, PartialEq)]
pub enum ParseError {
    MissingArg { oc: OpCode, name: &'static str },
    TooManyArgs { oc: OpCode, excess: usize },
    ArgBeforeFirstOp(String),
    OpBeforeList(OpCode),
    InvalidJson { oc: OpCode, text: String },
    InvalidPattern(String),
}

impl From<ParseError> for Error {
    fn from(pe: ParseError) -> Self {
        Self::Message(match pe {
            ParseError::MissingArg { oc, name } => format!("Op {:?} missing arg {}", oc, name),
            ParseError::TooManyArgs { oc, excess } => {
                format!("Op {:?} given {} too many arguments", oc, excess)
            }
            ParseError::ArgBeforeFirstOp(arg) => {
                format!("Arg {:?} given before any operations", arg)
            }
            ParseError::OpBeforeList(oc) => {
                format!("Op {:?} given before any --list", oc)
            }
            ParseError::InvalidJson { oc, text } => {
                format!("Op {:?} given invalid JSON: {}", oc, text)
            }
            ParseError::InvalidPattern(pattern) => format!("Invalid pattern: {:?}", pattern),
        })
    }
}

#[derive(Debug, PartialEq, Clone, Copy, EnumIter)]
pub enum OpCode {
    List,
    Read,
    Write,
    Rename,
    RenameExtension,
    Permalink,
    Enclose,
    Clone,
    Exclude,
    WithBaseName,
    WithDirectory,
    WithExtension,
    WithMetadata,
    Matching,
    InsertMetadata,
    ReplaceMetadata,
    ClearMetadata,
    CopyProps,
    SetContent,
}

/// A path regex, compiled once when the pipeline is parsed.
///
/// Two patterns are equal when their source text is.
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(source: &str) -> std::result::Result<Self, ParseError> {
        Regex::new(source)
            .map(Self)
            .map_err(|_| ParseError::InvalidPattern(source.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Op {
    List(String),
    Read,
    Write(PathBuf),
    Rename(String, String),
    RenameExtension(String, String),
    Permalink(String),
    Enclose(String),
    Clone(String, String),
    Exclude(String),
    WithBaseName(String),
    WithDirectory(String),
    WithExtension(String),
    WithMetadata(String, Value),
    Matching(Pattern),
    InsertMetadata(Metadata),
    ReplaceMetadata(Metadata),
    ClearMetadata,
    CopyProps,
    SetContent(String),
}

impl OpCode {
    pub fn to_op(&self, args: Vec<String>) -> std::result::Result<Op, ParseError> {
        let mut it = args.into_iter();
        let op = match self {
            Self::List => Op::List(consume_param(self, "dir", &mut it)?),
            Self::Read => Op::Read,
            Self::Write => Op::Write(consume_param(self, "dest", &mut it)?),
            Self::Rename => Op::Rename(
                consume_param(self, "old", &mut it)?,
                consume_param(self, "new", &mut it)?,
            ),
            Self::RenameExtension => Op::RenameExtension(
                consume_param(self, "old", &mut it)?,
                consume_param(self, "new", &mut it)?,
            ),
            Self::Permalink => Op::Permalink(consume_param(self, "name", &mut it)?),
            Self::Enclose => Op::Enclose(consume_param(self, "dir", &mut it)?),
            Self::Clone => Op::Clone(
                consume_param(self, "existing", &mut it)?,
                consume_param(self, "new", &mut it)?,
            ),
            Self::Exclude => Op::Exclude(consume_param(self, "path", &mut it)?),
            Self::WithBaseName => Op::WithBaseName(consume_param(self, "name", &mut it)?),
            Self::WithDirectory => Op::WithDirectory(consume_param(self, "dir", &mut it)?),
            Self::WithExtension => Op::WithExtension(consume_param(self, "ext", &mut it)?),
            Self::WithMetadata => {
                let key = consume_param(self, "key", &mut it)?;
                let text: String = consume_param(self, "json", &mut it)?;
                Op::WithMetadata(key, parse_json(self, text)?)
            }
            Self::Matching => {
                let pattern: String = consume_param(self, "pattern", &mut it)?;
                Op::Matching(Pattern::new(&pattern)?)
            }
            Self::InsertMetadata => {
                let text = consume_param(self, "json", &mut it)?;
                Op::InsertMetadata(parse_json(self, text)?)
            }
            Self::ReplaceMetadata => {
                let text = consume_param(self, "json", &mut it)?;
                Op::ReplaceMetadata(parse_json(self, text)?)
            }
            Self::ClearMetadata => Op::ClearMetadata,
            Self::CopyProps => Op::CopyProps,
            Self::SetContent => Op::SetContent(consume_param(self, "text", &mut it)?),
        };
        no_further_params(self, &mut it)?;
        Ok(op)
    }

    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "--list" => Some(Self::List),
            "--read" => Some(Self::Read),
            "--write" => Some(Self::Write),
            "--rename" => Some(Self::Rename),
            "--rename-extension" => Some(Self::RenameExtension),
            "--permalink" => Some(Self::Permalink),
            "--enclose" => Some(Self::Enclose),
            "--clone" => Some(Self::Clone),
            "--exclude" => Some(Self::Exclude),
            "--with-base-name" => Some(Self::WithBaseName),
            "--with-directory" => Some(Self::WithDirectory),
            "--with-extension" => Some(Self::WithExtension),
            "--with-metadata" => Some(Self::WithMetadata),
            "--matching" => Some(Self::Matching),
            "--insert-metadata" => Some(Self::InsertMetadata),
            "--replace-metadata" => Some(Self::ReplaceMetadata),
            "--clear-metadata" => Some(Self::ClearMetadata),
            "--copy-props" => Some(Self::CopyProps),
            "--set-content" => Some(Self::SetContent),
            _ => None,
        }
    }
}

impl Op {
    pub fn to_code(&self) -> OpCode {
        match self {
            Self::List(_) => OpCode::List,
            Self::Read => OpCode::Read,
            Self::Write(_) => OpCode::Write,
            Self::Rename(_, _) => OpCode::Rename,
            Self::RenameExtension(_, _) => OpCode::RenameExtension,
            Self::Permalink(_) => OpCode::Permalink,
            Self::Enclose(_) => OpCode::Enclose,
            Self::Clone(_, _) => OpCode::Clone,
            Self::Exclude(_) => OpCode::Exclude,
            Self::WithBaseName(_) => OpCode::WithBaseName,
            Self::WithDirectory(_) => OpCode::WithDirectory,
            Self::WithExtension(_) => OpCode::WithExtension,
            Self::WithMetadata(_, _) => OpCode::WithMetadata,
            Self::Matching(_) => OpCode::Matching,
            Self::InsertMetadata(_) => OpCode::InsertMetadata,
            Self::ReplaceMetadata(_) => OpCode::ReplaceMetadata,
            Self::ClearMetadata => OpCode::ClearMetadata,
            Self::CopyProps => OpCode::CopyProps,
            Self::SetContent(_) => OpCode::SetContent,
        }
    }

    /// Make a relative `--write` destination absolute.
    pub fn resolved_against(self, cwd: &Path) -> Self {
        match self {
            Self::Write(dest) => Self::Write(cwd.join(dest)),
            other => other,
        }
    }

    /// Run this op on a bundle.
    ///
    /// `List` isn't a transformation; programs handle it before any op runs,
    /// so here it's a no-op.
    pub async fn apply(self, bundle: Bundle) -> Result<Bundle> {
        Ok(match self {
            Self::List(_) => bundle,
            Self::Read => crate::engine::read(bundle).await?,
            Self::Write(dest) => crate::engine::write(dest, bundle).await?,
            Self::Rename(old, new) => bundle.rename(old, new),
            Self::RenameExtension(old, new) => bundle.rename_extension(&old, &new),
            Self::Permalink(name) => bundle.permalink(&name),
            Self::Enclose(dir) => bundle.enclose(dir),
            Self::Clone(existing, new) => bundle.clone_path(existing, new),
            Self::Exclude(path) => bundle.exclude(path),
            Self::WithBaseName(name) => bundle.with_base_name(&name),
            Self::WithDirectory(dir) => bundle.with_directory(dir),
            Self::WithExtension(ext) => bundle.with_extension(&ext),
            Self::WithMetadata(key, value) => bundle.with_metadata(&key, &value),
            Self::Matching(pattern) => bundle.matching(&pattern.0),
            Self::InsertMetadata(extra) => bundle.insert_metadata(&extra),
            Self::ReplaceMetadata(metadata) => bundle.replace_metadata(&metadata),
            Self::ClearMetadata => bundle.clear_metadata(),
            Self::CopyProps => bundle.copy_props_to_metadata(),
            Self::SetContent(text) => bundle.set_content(text),
        })
    }
}

/// Flat list of ops, in the order given.
pub fn parse_pipeline<T>(args: impl IntoIterator<Item = T>) -> std::result::Result<Vec<Op>, ParseError>
where
    T: AsRef<str>,
{
    let mut ops = Vec::<(OpCode, Vec<String>)>::new();
    for arg in args {
        if let Some(oc) = OpCode::from_arg(arg.as_ref()) {
            ops.push((oc, vec![]))
        } else {
            let latest = ops
                .last_mut()
                .ok_or_else(|| ParseError::ArgBeforeFirstOp(arg.as_ref().into()))?;
            latest.1.push(arg.as_ref().into());
        }
    }
    ops.into_iter().map(|(oc, args)| oc.to_op(args)).collect()
}

/// Split a flat list of ops into (root, ops) programs, one per `--list`.
pub fn group_programs(ops: Vec<Op>) -> std::result::Result<Vec<(String, Vec<Op>)>, ParseError> {
    let mut programs = Vec::<(String, Vec<Op>)>::new();
    for op in ops {
        match op {
            Op::List(root) => programs.push((root, vec![])),
            other => {
                let latest = programs
                    .last_mut()
                    .ok_or(ParseError::OpBeforeList(other.to_code()))?;
                latest.1.push(other);
            }
        }
    }
    Ok(programs)
}

fn consume_param<T>(
    oc: &OpCode,
    name: &'static str,
    args: &mut impl Iterator<Item = String>,
) -> std::result::Result<T, ParseError>
where
    T: From<String>,
{
    let arg = args
        .next()
        .ok_or(ParseError::MissingArg { oc: *oc, name })?;
    Ok(arg.into())
}

fn no_further_params(
    oc: &OpCode,
    args: &mut impl Iterator<Item = String>,
) -> std::result::Result<(), ParseError> {
    let c = args.count();
    if c == 0 {
        Ok(())
    } else {
        Err(ParseError::TooManyArgs { oc: *oc, excess: c })
    }
}

fn parse_json<T>(oc: &OpCode, text: String) -> std::result::Result<T, ParseError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(&text).map_err(|_| ParseError::InvalidJson { oc: *oc, text })
}
