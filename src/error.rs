//! Error types for deploy-keys.
//!
//! Each concern gets its own enum; [`Error`] wraps them so `?` works across
//! module boundaries. Nothing is retried or rolled back: the first error
//! aborts the current phase and is reported by `main`.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("missing parameter: {0}")]
    MissingParameter(String),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Fs(#[from] FsError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Malformed dependency list.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("dependencies have invalid format: expected repository/key line pairs, got {0} lines")]
    OddLineCount(usize),

    #[error("dependencies have invalid format: line {line} is not valid base64: {reason}")]
    InvalidEncoding { line: usize, reason: String },

    #[error("dependencies have invalid format: line {line} is not valid UTF-8")]
    InvalidUtf8 { line: usize },

    #[error("dependencies have invalid format: line {line} decodes to an empty repository")]
    EmptyRepository { line: usize },
}

/// A child process could not be run or exited unsuccessfully.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("{0} not found in PATH")]
    NotFound(String),

    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },
}

/// A filesystem operation failed.
#[derive(Error, Debug)]
pub enum FsError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to set permissions on {path}: {source}")]
    Permissions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Settings or configuration store problems.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unable to determine home directory")]
    NoHome,

    #[error("failed to read settings file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{scope} configuration could not be read: {reason}")]
    Unreadable { scope: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
