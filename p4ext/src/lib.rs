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

//! Client-side support for programming P4 devices over P4Runtime.
//!
//! [`Schema`] indexes a pipeline's P4Info, [`codec`] turns symbolic table
//! entries into their wire form and back, and [`Session`] talks to one
//! device's P4Runtime agent.

pub mod codec;
pub mod error;
pub mod schema;
pub mod session;

mod text;

pub use codec::{build_match_key, build_table_entry, decode_table_entry, DecodedEntry, MatchValue};
pub use error::{
    CodecError,
    EncodingError,
    NotFoundError,
    SchemaParseError,
    SessionError,
    SymbolKind,
    WriteError,
    WriteErrorKind,
};
pub use schema::{MatchKind, Schema};
pub use session::{CounterValue, Session, SessionOptions, SessionState, WriteOp};
