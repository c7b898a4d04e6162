//! Problem-instance loader.
//!
//! Reads whitespace-tokenized lines into one [`Registry`] per problem
//! instance:
//!
//! ```text
//! service <provider> <category>+
//! request <name> <category> <day>|<first>-<last>
//! ```
//!
//! A blank line (or the end of input) closes the current instance. An
//! instance is only emitted once it is schedulable; until then its
//! declarations stay buffered and keep accumulating across blank lines.
//! Lines of any other shape are dropped.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{DaySpec, Registry};
use crate::scheduler::DEFAULT_HORIZON_DAYS;
use crate::validation::{is_valid_service_line, REQUEST_TOKENS};

/// Errors raised while reading input.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input file could not be opened.
    #[error("cannot open {}", path.display())]
    Open {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The underlying reader failed.
    #[error("read failed at line {line}")]
    Read {
        /// 1-based line number.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// One classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A provider declaration.
    Service {
        /// Provider name.
        provider: String,
        /// Offered categories, in declaration order.
        categories: Vec<String>,
    },
    /// A request declaration.
    Request {
        /// Request name.
        name: String,
        /// Needed category.
        category: String,
        /// Eligible days.
        days: DaySpec,
    },
    /// An empty or whitespace-only line.
    Blank,
    /// Anything else; dropped.
    Ignored,
}

/// Loads problem instances from text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceLoader {
    horizon_days: u32,
}

impl Default for InstanceLoader {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }
}

impl InstanceLoader {
    /// Creates a loader with the default horizon.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the horizon used to validate day specifications.
    #[inline]
    pub fn horizon_days(mut self, horizon_days: u32) -> Self {
        self.horizon_days = horizon_days;
        self
    }

    /// Classifies one line.
    pub fn parse_line(&self, line: &str) -> Line {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.first() {
            None => Line::Blank,
            Some(&"service") if is_valid_service_line(&tokens) => Line::Service {
                provider: tokens[1].to_string(),
                categories: tokens[2..].iter().map(|c| c.to_string()).collect(),
            },
            Some(&"request") if tokens.len() == REQUEST_TOKENS => {
                match DaySpec::parse(tokens[3], self.horizon_days) {
                    Ok(days) => Line::Request {
                        name: tokens[1].to_string(),
                        category: tokens[2].to_string(),
                        days,
                    },
                    Err(_) => Line::Ignored,
                }
            }
            Some(_) => Line::Ignored,
        }
    }

    /// Reads every instance from a buffered reader.
    ///
    /// Lines that are not valid UTF-8 are dropped like any other
    /// unrecognized line; only reader failures are errors.
    pub fn from_bufread<R: BufRead>(&self, mut reader: R) -> Result<Vec<Registry>, InputError> {
        let mut instances = Vec::new();
        let mut current = Registry::new();
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| InputError::Read {
                    line: line_no + 1,
                    source,
                })?;
            if read == 0 {
                break;
            }
            line_no += 1;

            let Ok(line) = std::str::from_utf8(&buf) else {
                tracing::debug!(line = line_no, "dropping line that is not valid UTF-8");
                continue;
            };

            match self.parse_line(line) {
                Line::Service {
                    provider,
                    categories,
                } => current.add_service(&provider, categories),
                Line::Request {
                    name,
                    category,
                    days,
                } => current.add_request(&name, &category, days),
                Line::Blank => close_instance(&mut current, &mut instances),
                Line::Ignored => {
                    tracing::debug!(line = line_no, text = %line.trim(), "dropping line");
                }
            }
        }
        close_instance(&mut current, &mut instances);

        if current.request_count() > 0 || current.provider_count() > 0 {
            tracing::debug!(
                providers = current.provider_count(),
                requests = current.request_count(),
                "discarding unschedulable trailing declarations"
            );
        }

        tracing::debug!(instances = instances.len(), "input loaded");
        Ok(instances)
    }

    /// Reads every instance from a file.
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Registry>, InputError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| InputError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.from_bufread(BufReader::new(file))
    }

    /// Reads every instance from an in-memory string.
    pub fn parse_str(&self, input: &str) -> Vec<Registry> {
        // Reading from a byte slice cannot fail.
        self.from_bufread(input.as_bytes()).unwrap_or_default()
    }
}

fn close_instance(current: &mut Registry, instances: &mut Vec<Registry>) {
    if current.is_schedulable() {
        instances.push(std::mem::take(current));
    }
}
