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

//! Reader for P4Info in protobuf text format, as written by `p4c
//! --p4runtime-files foo.p4info.txt`.
//!
//! The input is tokenized and parsed into a generic tree of fields first.
//! The tree is then encoded to binary protobuf, guided by the descriptors
//! generated from `p4info.proto` and `p4types.proto`, and decoded into
//! [`p4info::P4Info`].  Fields the schema does not know are skipped with a
//! warning, so P4Info written by newer compilers still loads.

use crate::error::SchemaParseError;

use proto::p4info;
use proto::p4types;

use protobuf::descriptor::{
    DescriptorProto, EnumDescriptorProto, FieldDescriptorProto, FieldDescriptorProto_Type,
};
use protobuf::{CodedOutputStream, Message, ProtobufError};

use std::collections::HashMap;
use std::convert::TryFrom;

use tracing::warn;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    Ident(String),
    Number(String),
    Str(Vec<u8>),
    Punct(char),
}

#[derive(Debug)]
struct TextError {
    line: usize,
    message: String,
}

impl TextError {
    fn new<S: Into<String>>(line: usize, message: S) -> Self {
        TextError {
            line,
            message: message.into(),
        }
    }
}

type Result<T> = std::result::Result<T, TextError>;

struct Lexer<'a> {
    input: &'a [u8],
    pos: usize,
    line: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Lexer {
            input: input.as_bytes(),
            pos: 0,
            line: 1,
        }
    }

    fn peek_byte(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn skip_space_and_comments(&mut self) {
        while let Some(c) = self.peek_byte() {
            match c {
                b'\n' => {
                    self.line += 1;
                    self.pos += 1;
                }
                b'#' => {
                    while let Some(c) = self.peek_byte() {
                        if c == b'\n' {
                            break;
                        }
                        self.pos += 1;
                    }
                }
                c if c.is_ascii_whitespace() => self.pos += 1,
                _ => break,
            }
        }
    }

    fn word(&mut self) -> String {
        let start = self.pos;
        while let Some(c) = self.peek_byte() {
            if c.is_ascii_alphanumeric() || matches!(c, b'_' | b'.' | b'-' | b'+') {
                self.pos += 1;
            } else {
                break;
            }
        }
        String::from_utf8_lossy(&self.input[start..self.pos]).into_owned()
    }

    fn hex_digit(&self, c: u8) -> Result<u8> {
        (c as char)
            .to_digit(16)
            .map(|d| d as u8)
            .ok_or_else(|| {
                TextError::new(self.line, format!("bad hex digit {:?} in string", c as char))
            })
    }

    fn string(&mut self, quote: u8) -> Result<Vec<u8>> {
        let line = self.line;
        let mut s = Vec::new();
        self.pos += 1;
        loop {
            let c = self
                .peek_byte()
                .ok_or_else(|| TextError::new(line, "unterminated string"))?;
            self.pos += 1;
            match c {
                b'\n' => return Err(TextError::new(line, "newline in string")),
                c if c == quote => return Ok(s),
                b'\\' => {
                    let e = self
                        .peek_byte()
                        .ok_or_else(|| TextError::new(line, "unterminated string"))?;
                    self.pos += 1;
                    match e {
                        b'n' => s.push(b'\n'),
                        b'r' => s.push(b'\r'),
                        b't' => s.push(b'\t'),
                        b'a' => s.push(0x07),
                        b'b' => s.push(0x08),
                        b'f' => s.push(0x0c),
                        b'v' => s.push(0x0b),
                        b'\\' | b'\'' | b'"' | b'?' => s.push(e),
                        b'x' => {
                            let mut v = 0u8;
                            let mut digits = 0;
                            while digits < 2 {
                                match self.peek_byte() {
                                    Some(h) if h.is_ascii_hexdigit() => {
                                        v = v * 16 + self.hex_digit(h)?;
                                        self.pos += 1;
                                        digits += 1;
                                    }
                                    _ => break,
                                }
                            }
                            if digits == 0 {
                                return Err(TextError::new(line, "\\x escape without hex digits"));
                            }
                            s.push(v);
                        }
                        b'0'..=b'7' => {
                            let mut v = u32::from(e - b'0');
                            for _ in 0..2 {
                                match self.peek_byte() {
                                    Some(o @ b'0'..=b'7') => {
                                        v = v * 8 + u32::from(o - b'0');
                                        self.pos += 1;
                                    }
                                    _ => break,
                                }
                            }
                            let v = u8::try_from(v)
                                .map_err(|_| TextError::new(line, "octal escape out of range"))?;
                            s.push(v);
                        }
                        _ => {
                            return Err(TextError::new(
                                line,
                                format!("unknown escape \\{} in string", e as char),
                            ))
                        }
                    }
                }
                _ => s.push(c),
            }
        }
    }

    fn tokenize(mut self) -> Result<Vec<(Token, usize)>> {
        let mut tokens = Vec::new();
        loop {
            self.skip_space_and_comments();
            let line = self.line;
            let c = match self.peek_byte() {
                None => return Ok(tokens),
                Some(c) => c,
            };
            let token = match c {
                b'{' | b'}' | b'<' | b'>' | b':' | b';' | b',' | b'[' | b']' | b'/' => {
                    self.pos += 1;
                    Token::Punct(c as char)
                }
                b'"' | b'\'' => Token::Str(self.string(c)?),
                b'-' | b'+' | b'.' | b'0'..=b'9' => Token::Number(self.word()),
                c if c.is_ascii_alphabetic() || c == b'_' => Token::Ident(self.word()),
                _ => {
                    return Err(TextError::new(
                        line,
                        format!("unexpected character {:?}", c as char),
                    ))
                }
            };
            tokens.push((token, line));
        }
    }
}

#[derive(Clone, Debug)]
enum Value {
    Scalar(Token),
    Message(Vec<Field>),
}

/// One `name: value` or `name { ... }` occurrence.  Repeated fields appear
/// once per element, including elements written in `[a, b]` list syntax.
#[derive(Clone, Debug)]
struct Field {
    name: String,
    line: usize,
    value: Value,
}

struct Parser {
    tokens: Vec<(Token, usize)>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn line(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|(_, l)| *l)
            .unwrap_or(1)
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(&Token::Punct(c)) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn fields(&mut self, close: Option<char>) -> Result<Vec<Field>> {
        let mut fields = Vec::new();
        loop {
            match self.peek() {
                None => {
                    return match close {
                        Some(c) => Err(TextError::new(self.line(), format!("missing '{}'", c))),
                        None => Ok(fields),
                    }
                }
                Some(Token::Punct(c)) if Some(*c) == close => {
                    self.pos += 1;
                    return Ok(fields);
                }
                Some(Token::Ident(_)) | Some(Token::Punct('[')) => self.field(&mut fields)?,
                Some(t) => {
                    return Err(TextError::new(
                        self.line(),
                        format!("expected field name, found {:?}", t),
                    ))
                }
            }
        }
    }

    fn block(&mut self) -> Result<Option<Value>> {
        let close = match self.peek() {
            Some(Token::Punct('{')) => '}',
            Some(Token::Punct('<')) => '>',
            _ => return Ok(None),
        };
        self.pos += 1;
        Ok(Some(Value::Message(self.fields(Some(close))?)))
    }

    fn scalar(&mut self) -> Result<Token> {
        let line = self.line();
        match self.tokens.get(self.pos).cloned() {
            Some((Token::Str(mut s), _)) => {
                self.pos += 1;
                // Adjacent string literals concatenate.
                while let Some(Token::Str(more)) = self.peek() {
                    s.extend_from_slice(more);
                    self.pos += 1;
                }
                Ok(Token::Str(s))
            }
            Some((t @ Token::Ident(_), _)) | Some((t @ Token::Number(_), _)) => {
                self.pos += 1;
                Ok(t)
            }
            Some((t, _)) => Err(TextError::new(line, format!("expected a value, found {:?}", t))),
            None => Err(TextError::new(line, "expected a value, found end of input")),
        }
    }

    fn value(&mut self) -> Result<Value> {
        match self.block()? {
            Some(v) => Ok(v),
            None => Ok(Value::Scalar(self.scalar()?)),
        }
    }

    // Extension or `Any` type URL, e.g. `[type.googleapis.com/p4.Foo]`.
    // The opening bracket is already consumed.
    fn bracketed_name(&mut self) -> Result<String> {
        let mut name = String::from("[");
        loop {
            match self.tokens.get(self.pos).cloned() {
                Some((Token::Punct(']'), _)) => {
                    self.pos += 1;
                    name.push(']');
                    return Ok(name);
                }
                Some((Token::Ident(part), _)) | Some((Token::Number(part), _)) => {
                    name.push_str(&part)
                }
                Some((Token::Punct('/'), _)) => name.push('/'),
                _ => return Err(TextError::new(self.line(), "bad name in '[...]'")),
            }
            self.pos += 1;
        }
    }

    fn field(&mut self, out: &mut Vec<Field>) -> Result<()> {
        let (name, line) = match self.tokens.get(self.pos).cloned() {
            Some((Token::Ident(name), line)) => {
                self.pos += 1;
                (name, line)
            }
            Some((Token::Punct('['), line)) => {
                self.pos += 1;
                (self.bracketed_name()?, line)
            }
            _ => return Err(TextError::new(self.line(), "expected field name")),
        };

        let colon = self.eat(':');
        if let Some(value) = self.block()? {
            out.push(Field { name, line, value });
        } else if !colon {
            return Err(TextError::new(line, format!("expected ':' or '{{' after {}", name)));
        } else if self.eat('[') {
            if !self.eat(']') {
                loop {
                    let value = self.value()?;
                    out.push(Field {
                        name: name.clone(),
                        line,
                        value,
                    });
                    if self.eat(']') {
                        break;
                    }
                    if !self.eat(',') {
                        return Err(TextError::new(self.line(), "expected ',' or ']' in list"));
                    }
                }
            }
        } else {
            let value = Value::Scalar(self.scalar()?);
            out.push(Field { name, line, value });
        }

        if !self.eat(';') {
            self.eat(',');
        }
        Ok(())
    }
}

fn parse_tree(text: &str) -> Result<Vec<Field>> {
    let tokens = Lexer::new(text).tokenize()?;
    Parser { tokens, pos: 0 }.fields(None)
}

impl Field {
    fn error<S: Into<String>>(&self, message: S) -> TextError {
        TextError::new(self.line, format!("{}: {}", self.name, message.into()))
    }

    fn fields(&self) -> Result<&[Field]> {
        match &self.value {
            Value::Message(fields) => Ok(fields),
            Value::Scalar(_) => Err(self.error("expected a message")),
        }
    }

    fn scalar(&self) -> Result<&Token> {
        match &self.value {
            Value::Scalar(t) => Ok(t),
            Value::Message(_) => Err(self.error("expected a scalar value")),
        }
    }

    fn bytes(&self) -> Result<&[u8]> {
        match self.scalar()? {
            Token::Str(s) => Ok(s),
            _ => Err(self.error("expected a string")),
        }
    }

    fn string(&self) -> Result<&str> {
        std::str::from_utf8(self.bytes()?).map_err(|_| self.error("string is not valid UTF-8"))
    }

    fn int<T: TryFrom<i128>>(&self) -> Result<T> {
        let text = match self.scalar()? {
            Token::Number(n) => n.as_str(),
            _ => return Err(self.error("expected an integer")),
        };
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.trim_start_matches('+')),
        };
        let magnitude = if let Some(hex) = digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
        {
            i128::from_str_radix(hex, 16)
        } else {
            digits.parse::<i128>()
        }
        .map_err(|_| self.error(format!("bad integer {:?}", text)))?;
        let value = if negative { -magnitude } else { magnitude };
        T::try_from(value).map_err(|_| self.error(format!("integer {} out of range", text)))
    }

    fn float(&self) -> Result<f64> {
        let text = match self.scalar()? {
            Token::Number(n) | Token::Ident(n) => n.as_str(),
            _ => return Err(self.error("expected a number")),
        };
        text.trim_end_matches(|c| c == 'f' || c == 'F')
            .parse::<f64>()
            .or_else(|_| text.parse::<f64>())
            .map_err(|_| self.error(format!("bad number {:?}", text)))
    }

    fn boolean(&self) -> Result<bool> {
        match self.scalar()? {
            Token::Ident(s) if s == "true" || s == "True" || s == "t" => Ok(true),
            Token::Ident(s) if s == "false" || s == "False" || s == "f" => Ok(false),
            Token::Number(n) if n == "1" => Ok(true),
            Token::Number(n) if n == "0" => Ok(false),
            _ => Err(self.error("expected a boolean")),
        }
    }

    // `[type.googleapis.com/pkg.Message]` names an expanded `Any`.
    fn any_type_url(&self) -> Option<&str> {
        self.name.strip_prefix('[').and_then(|n| n.strip_suffix(']'))
    }
}

const P4INFO: &str = ".p4.config.v1.P4Info";
const ANY: &str = ".google.protobuf.Any";

/// Message and enum descriptors of the P4Info schema, keyed by full name
/// (`.p4.config.v1.Action.Param`).
///
/// The field tree is encoded to binary protobuf through these and then
/// decoded into the generated types, so every field the schema declares is
/// kept, whatever message it sits in.
struct Descriptors {
    messages: HashMap<String, &'static DescriptorProto>,
    enums: HashMap<String, &'static EnumDescriptorProto>,
}

fn encode_error(f: &Field, e: ProtobufError) -> TextError {
    f.error(format!("could not encode ({})", e))
}

impl Descriptors {
    fn p4info() -> Descriptors {
        let mut d = Descriptors {
            messages: HashMap::new(),
            enums: HashMap::new(),
        };
        for file in [p4info::file_descriptor_proto(), p4types::file_descriptor_proto()] {
            let scope = format!(".{}", file.get_package());
            d.add(&scope, file.get_message_type(), file.get_enum_type());
        }
        d
    }

    fn add(
        &mut self,
        scope: &str,
        messages: &'static [DescriptorProto],
        enums: &'static [EnumDescriptorProto],
    ) {
        for e in enums {
            self.enums.insert(format!("{}.{}", scope, e.get_name()), e);
        }
        for m in messages {
            let name = format!("{}.{}", scope, m.get_name());
            self.add(&name, m.get_nested_type(), m.get_enum_type());
            self.messages.insert(name, m);
        }
    }

    /// Encodes `fields` as a message of type `type_name`.  `line` is where
    /// the message starts.
    fn encode(&self, type_name: &str, fields: &[Field], line: usize) -> Result<Vec<u8>> {
        if type_name == ANY {
            return self.encode_any(fields);
        }
        let message = self
            .messages
            .get(type_name)
            .ok_or_else(|| TextError::new(line, format!("unknown message type {}", type_name)))?;

        let mut bytes = Vec::new();
        let mut os = CodedOutputStream::vec(&mut bytes);
        for f in fields {
            match message.get_field().iter().find(|d| d.get_name() == f.name) {
                Some(d) => self.encode_field(&mut os, d, f)?,
                None => warn!(
                    line = f.line,
                    "skipping unknown field {} in {}",
                    f.name,
                    message.get_name()
                ),
            }
        }
        os.flush().map_err(|e| TextError::new(line, format!("could not encode ({})", e)))?;
        drop(os);
        Ok(bytes)
    }

    fn encode_field(
        &self,
        os: &mut CodedOutputStream,
        d: &FieldDescriptorProto,
        f: &Field,
    ) -> Result<()> {
        use FieldDescriptorProto_Type::*;

        let n = d.get_number() as u32;
        let written = match d.get_field_type() {
            TYPE_MESSAGE => {
                let value = self.encode(d.get_type_name(), f.fields()?, f.line)?;
                os.write_bytes(n, &value)
            }
            TYPE_GROUP => return Err(f.error("groups are not supported")),
            TYPE_ENUM => os.write_enum(n, self.enum_value(d.get_type_name(), f)?),
            TYPE_STRING => os.write_string(n, f.string()?),
            TYPE_BYTES => os.write_bytes(n, f.bytes()?),
            TYPE_BOOL => os.write_bool(n, f.boolean()?),
            TYPE_INT32 => os.write_int32(n, f.int()?),
            TYPE_SINT32 => os.write_sint32(n, f.int()?),
            TYPE_SFIXED32 => os.write_sfixed32(n, f.int()?),
            TYPE_INT64 => os.write_int64(n, f.int()?),
            TYPE_SINT64 => os.write_sint64(n, f.int()?),
            TYPE_SFIXED64 => os.write_sfixed64(n, f.int()?),
            TYPE_UINT32 => os.write_uint32(n, f.int()?),
            TYPE_FIXED32 => os.write_fixed32(n, f.int()?),
            TYPE_UINT64 => os.write_uint64(n, f.int()?),
            TYPE_FIXED64 => os.write_fixed64(n, f.int()?),
            TYPE_FLOAT => os.write_float(n, f.float()? as f32),
            TYPE_DOUBLE => os.write_double(n, f.float()?),
        };
        written.map_err(|e| encode_error(f, e))
    }

    fn enum_value(&self, type_name: &str, f: &Field) -> Result<i32> {
        let values = self
            .enums
            .get(type_name)
            .map(|e| e.get_value())
            .ok_or_else(|| f.error(format!("unknown enum type {}", type_name)))?;
        match f.scalar()? {
            Token::Ident(name) => values
                .iter()
                .find(|v| v.get_name() == name)
                .map(|v| v.get_number())
                .ok_or_else(|| f.error(format!("unknown enum value {}", name))),
            Token::Number(_) => f.int(),
            _ => Err(f.error("expected an enum value")),
        }
    }

    // `google.protobuf.Any`, either as `type_url`/`value` or in expanded
    // form.  Expanded payloads of types outside P4Info are skipped.
    fn encode_any(&self, fields: &[Field]) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        let mut os = CodedOutputStream::vec(&mut bytes);
        for f in fields {
            let written = match (f.any_type_url(), f.name.as_str()) {
                (Some(url), _) => {
                    let type_name = format!(".{}", url.rsplit('/').next().unwrap_or(url));
                    if !self.messages.contains_key(&type_name) {
                        warn!(line = f.line, "skipping Any payload of unknown type {}", url);
                        continue;
                    }
                    let value = self.encode(&type_name, f.fields()?, f.line)?;
                    os.write_string(1, url).and_then(|()| os.write_bytes(2, &value))
                }
                (None, "type_url") => os.write_string(1, f.string()?),
                (None, "value") => os.write_bytes(2, f.bytes()?),
                _ => {
                    warn!(line = f.line, "skipping unknown field {} in Any", f.name);
                    continue;
                }
            };
            written.map_err(|e| encode_error(f, e))?;
        }
        os.flush().map_err(|e| TextError::new(0, format!("could not encode Any ({})", e)))?;
        drop(os);
        Ok(bytes)
    }
}

/// Parses `text` as a text-format P4Info.  `file` names the source in error
/// messages.
pub fn parse_p4info(
    file: &str,
    text: &str,
) -> std::result::Result<p4info::P4Info, SchemaParseError> {
    let to_schema_error = |e: TextError| SchemaParseError {
        file: file.into(),
        line: e.line,
        message: e.message,
    };
    let fields = parse_tree(text).map_err(to_schema_error)?;
    let bytes = Descriptors::p4info()
        .encode(P4INFO, &fields, 1)
        .map_err(to_schema_error)?;
    p4info::P4Info::parse_from_bytes(&bytes).map_err(|e| SchemaParseError {
        file: file.into(),
        line: 0,
        message: format!("could not decode P4Info ({})", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use proto::p4info::{ActionRef_Scope, MatchField_MatchType};
    use proto::p4types::P4NamedType;

    use tracing_test::traced_test;

    const TABLE: &str = r#"
pkg_info {
  arch: "v1model"
}
tables {
  preamble {
    id: 37375156
    name: "MyIngress.ipv4_lpm"
    alias: "ipv4_lpm"
  }
  match_fields {
    id: 1
    name: "hdr.ipv4.dstAddr"
    bitwidth: 32
    match_type: LPM
  }
  action_refs { id: 28792405 }
  action_refs: {
    id: 21257015
    annotations: "@defaultonly"
    scope: DEFAULT_ONLY
  }
  size: 0x400
}
# trailing comment
type_info {
}
"#;

    #[test]
    fn parses_nested_messages() {
        let p4info = parse_p4info("test.p4info.txt", TABLE).unwrap();
        assert_eq!(p4info.get_pkg_info().get_arch(), "v1model");
        assert_eq!(p4info.get_tables().len(), 1);

        let table = &p4info.get_tables()[0];
        assert_eq!(table.get_preamble().get_id(), 37375156);
        assert_eq!(table.get_preamble().get_alias(), "ipv4_lpm");
        assert_eq!(table.get_size(), 1024);

        let mf = &table.get_match_fields()[0];
        assert_eq!(mf.get_name(), "hdr.ipv4.dstAddr");
        assert_eq!(mf.get_bitwidth(), 32);
        assert_eq!(mf.get_match_type(), MatchField_MatchType::LPM);

        let refs = table.get_action_refs();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].get_scope(), ActionRef_Scope::TABLE_AND_DEFAULT);
        assert_eq!(refs[1].get_scope(), ActionRef_Scope::DEFAULT_ONLY);
        assert_eq!(refs[1].get_annotations(), &["@defaultonly".to_string()][..]);
    }

    #[test]
    fn string_escapes_and_lists() {
        let text = r#"
actions {
  preamble { id: 1 name: "a\x41\101\"" annotations: ["@one", "@two"] }
  params { id: 1; name: 'p' 'q'; bitwidth: 9 }
}
"#;
        let p4info = parse_p4info("t", text).unwrap();
        let action = &p4info.get_actions()[0];
        assert_eq!(action.get_preamble().get_name(), "aAA\"");
        assert_eq!(action.get_preamble().get_annotations().len(), 2);
        assert_eq!(action.get_params()[0].get_name(), "pq");
        assert_eq!(action.get_params()[0].get_bitwidth(), 9);
    }

    #[test]
    fn reads_back_printed_text() {
        let original = parse_p4info("t", TABLE).unwrap();
        let printed = protobuf::text_format::print_to_string(&original);
        let reparsed = parse_p4info("printed", &printed).unwrap();
        assert_eq!(original, reparsed);
    }

    #[test]
    fn reports_line_of_syntax_error() {
        let text = "tables {\n  preamble {\n    id 5\n  }\n}\n";
        let err = parse_p4info("bad.txt", text).unwrap_err();
        assert_eq!(err.file, "bad.txt");
        assert_eq!(err.line, 3);

        let err = parse_p4info("bad.txt", "tables {\n  preamble { id: 1 }\n").unwrap_err();
        assert!(err.message.contains("missing '}'"), "{}", err);
    }

    #[test]
    fn rejects_bad_enum_value() {
        let text = "tables { match_fields { match_type: FUZZY } }";
        let err = parse_p4info("t", text).unwrap_err();
        assert!(err.message.contains("FUZZY"), "{}", err);
    }

    #[test]
    #[traced_test]
    fn warns_about_skipped_fields() {
        let text = "future_section { id: 1 }\ntables { preamble { id: 9 } }";
        let p4info = parse_p4info("t", text).unwrap();
        assert_eq!(p4info.get_tables().len(), 1);
        assert!(logs_contain("skipping unknown field future_section in P4Info"));
    }

    const EVERYTHING: &str = r#"
tables {
  preamble {
    id: 1
    name: "t"
    structured_annotations {
      name: "hint"
      kv_pair_list { kv_pairs { key: "k" value { int64_value: 7 } } }
    }
  }
  match_fields { id: 3 name: "hdr.ipv4.protocol" bitwidth: 8 match_type: OPTIONAL }
  implementation_id: 285
  direct_resource_ids: 318
  idle_timeout_behavior: NOTIFY_CONTROL
  has_initial_entries: true
}
action_profiles {
  preamble { id: 285 name: "sel" }
  table_ids: 1
  with_selector: true
  size: 64
  max_group_size: 8
}
direct_counters { preamble { id: 318 name: "dc" } spec { unit: BOTH } direct_table_id: 1 }
meters { preamble { id: 335 name: "m" } spec { unit: PACKETS } size: 16 }
direct_meters { preamble { id: 361 name: "dm" } spec { unit: BYTES } direct_table_id: 1 }
controller_packet_metadata {
  preamble { id: 67 name: "packet_in" }
  metadata { id: 1 name: "ingress_port" bitwidth: 9 type_name { name: "PortId_t" } }
}
value_sets {
  preamble { id: 56 name: "pvs" }
  match { id: 1 name: "f" bitwidth: 16 match_type: EXACT }
  size: 4
}
registers {
  preamble { id: 369 name: "r" }
  type_spec { bitstring { bit { bitwidth: 32 } } }
  size: 128
}
digests { preamble { id: 385 name: "learn" } type_spec { struct { name: "learn_t" } } }
externs {
  extern_type_id: 129
  extern_type_name: "Checksum"
  instances {
    preamble { id: 2164260865 name: "ck" }
    info { [type.googleapis.com/p4.config.v1.P4NamedType] { name: "inner" } }
  }
  instances {
    preamble { id: 2164260866 name: "opaque" }
    info { type_url: "type.googleapis.com/vendor.Thing" value: "\001\002" }
  }
}
type_info {
  headers {
    key: "ipv4_t"
    value {
      members { name: "dstAddr" type_spec { bit { bitwidth: 32 } } }
      members { name: "ttl" type_spec { bit { bitwidth: 8 } } }
    }
  }
  serializable_enums {
    key: "Color"
    value { underlying_type { bitwidth: 2 } members { name: "RED" value: "\000" } }
  }
  new_types {
    key: "PortId_t"
    value { translated_type { uri: "p4.org/psa/v1/PortId_t" sdn_bitwidth: 32 } }
  }
}
"#;

    #[test]
    fn keeps_every_section() {
        let p4info = parse_p4info("t", EVERYTHING).unwrap();

        let table = &p4info.get_tables()[0];
        assert_eq!(table.get_match_fields()[0].get_match_type(), MatchField_MatchType::OPTIONAL);
        assert!(table.get_has_initial_entries());
        let annotation = &table.get_preamble().get_structured_annotations()[0];
        assert_eq!(annotation.get_name(), "hint");
        let kv = &annotation.get_kv_pair_list().get_kv_pairs()[0];
        assert_eq!(kv.get_value().get_int64_value(), 7);

        assert_eq!(p4info.get_action_profiles()[0].get_table_ids(), &[1]);
        assert_eq!(p4info.get_direct_counters()[0].get_direct_table_id(), 1);
        assert_eq!(p4info.get_meters()[0].get_size(), 16);
        assert_eq!(p4info.get_direct_meters().len(), 1);
        let packet_in = &p4info.get_controller_packet_metadata()[0];
        assert_eq!(packet_in.get_metadata()[0].get_type_name().get_name(), "PortId_t");
        assert_eq!(p4info.get_value_sets()[0].get_field_match()[0].get_bitwidth(), 16);
        assert_eq!(
            p4info.get_registers()[0].get_type_spec().get_bitstring().get_bit().get_bitwidth(),
            32
        );
        let digest = p4info.get_digests()[0].get_type_spec();
        assert_eq!(digest.get_field_struct().get_name(), "learn_t");

        let instances = p4info.get_externs()[0].get_instances();
        let info = instances[0].get_info();
        assert_eq!(info.get_type_url(), "type.googleapis.com/p4.config.v1.P4NamedType");
        let named = P4NamedType::parse_from_bytes(info.get_value()).unwrap();
        assert_eq!(named.get_name(), "inner");
        assert_eq!(instances[1].get_info().get_value(), &[1, 2]);

        let types = p4info.get_type_info();
        let ipv4 = &types.get_headers()["ipv4_t"];
        assert_eq!(ipv4.get_members().len(), 2);
        assert_eq!(ipv4.get_members()[1].get_type_spec().get_bit().get_bitwidth(), 8);
        assert_eq!(types.get_serializable_enums()["Color"].get_members()[0].get_value(), &[0]);
        assert_eq!(
            types.get_new_types()["PortId_t"].get_translated_type().get_sdn_bitwidth(),
            32
        );

        let printed = protobuf::text_format::print_to_string(&p4info);
        assert_eq!(parse_p4info("printed", &printed).unwrap(), p4info);
    }
}
