/*
Copyright (c) 2021 VMware, Inc.
SPDX-License-Identifier: MIT
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! Error types reported by the schema index, the entry codec and device
//! sessions.

use crate::schema::MatchKind;

use grpcio::RpcStatusCode;

use std::fmt::{self, Display};

use thiserror::Error;

/// Category of a schema symbol, used to say what kind of name was not found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolKind {
    Table,
    Action,
    MatchField,
    ActionParam,
    Counter,
    DirectCounter,
}

impl Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SymbolKind::*;
        let s = match self {
            Table => "table",
            Action => "action",
            MatchField => "match field",
            ActionParam => "action parameter",
            Counter => "counter",
            DirectCounter => "direct counter",
        };
        write!(f, "{}", s)
    }
}

/// The schema source could not be read or is not a valid P4Info.  `line` is
/// 1-based, or 0 when the problem is not tied to a line.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{file}:{line}: {message}")]
pub struct SchemaParseError {
    pub file: String,
    pub line: usize,
    pub message: String,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown {kind} {symbol}")]
pub struct NotFoundError {
    pub kind: SymbolKind,
    pub symbol: String,
}

impl NotFoundError {
    pub fn new<S: Into<String>>(kind: SymbolKind, symbol: S) -> Self {
        NotFoundError {
            kind,
            symbol: symbol.into(),
        }
    }
}

/// A symbolic value could not be turned into its wire form.  `expected` is
/// set when the problem is a mismatch between the supplied value shape and
/// the field's declared match kind.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{field}: {reason}")]
pub struct EncodingError {
    pub field: String,
    pub expected: Option<MatchKind>,
    pub reason: String,
}

impl EncodingError {
    pub fn new<F: Into<String>, R: Into<String>>(field: F, reason: R) -> Self {
        EncodingError {
            field: field.into(),
            expected: None,
            reason: reason.into(),
        }
    }

    pub fn kind_mismatch<F: Into<String>>(
        field: F,
        expected: MatchKind,
        supplied: &MatchKind,
    ) -> Self {
        EncodingError {
            field: field.into(),
            reason: format!("expected {}-match value, got {}-match value", expected, supplied),
            expected: Some(expected),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteErrorKind {
    /// Insert of a key that is already installed.
    Duplicate,
    /// Modify or delete of a key that is not installed.
    NotFound,
    /// The session does not hold mastership for the device.
    NotMaster,
    /// The agent refused the entry itself.
    Malformed,
}

impl Display for WriteErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use WriteErrorKind::*;
        let s = match self {
            Duplicate => "duplicate entry",
            NotFound => "entry not found",
            NotMaster => "not master",
            Malformed => "malformed entry",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{target}: failed to write ({kind}): {message}")]
pub struct WriteError {
    pub target: String,
    pub kind: WriteErrorKind,
    pub message: String,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Channel-level failure.  Once reported, the session stays unusable.
    #[error("{target}: transport failure ({message})")]
    Transport { target: String, message: String },

    #[error("{target}: arbitration failed ({message})")]
    Arbitration { target: String, message: String },

    #[error(
        "{target}: device {device_id} has a primary controller \
         with an election id higher than {election_id}"
    )]
    NotMaster {
        target: String,
        device_id: u64,
        election_id: u128,
    },

    #[error("{target}: forwarding pipeline rejected ({message})")]
    Rejected { target: String, message: String },

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The agent refused a read or query.
    #[error("{target}: request refused ({message})")]
    Refused {
        target: String,
        code: RpcStatusCode,
        message: String,
    },

    /// The operation is not allowed in the session's current state.
    #[error("{target}: {message}")]
    State { target: String, message: String },
}

impl SessionError {
    pub fn is_transport(&self) -> bool {
        matches!(self, SessionError::Transport { .. })
    }

    pub fn write_kind(&self) -> Option<WriteErrorKind> {
        match self {
            SessionError::Write(e) => Some(e.kind),
            _ => None,
        }
    }
}
