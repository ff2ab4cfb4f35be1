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

//! Translation between symbolic table entries and P4Runtime `TableEntry`
//! messages.
//!
//! Values are given as text: decimal or `0x` hexadecimal integers, dotted
//! IPv4 addresses, IPv6 addresses and colon-separated MAC addresses.  Each is
//! encoded big-endian into exactly `(bitwidth + 7) / 8` bytes.  Encodings
//! follow P4Runtime's canonical form, so wildcard matches (LPM prefix 0,
//! ternary mask 0, full ranges) are left out of the entry altogether.

use crate::error::{CodecError, EncodingError};
use crate::schema::{MatchField, MatchKind, Schema, Table};

use byteorder::{BigEndian, ByteOrder};

use itertools::Itertools;

use proto::p4runtime::{
    Action,
    Action_Param,
    FieldMatch,
    FieldMatch_Exact,
    FieldMatch_LPM,
    FieldMatch_Optional,
    FieldMatch_Range,
    FieldMatch_Ternary,
    FieldMatch_oneof_field_match_type,
    TableAction,
    TableEntry,
};

use protobuf::RepeatedField;

use std::collections::HashSet;
use std::convert::TryFrom;
use std::fmt::{self, Display};
use std::net::{Ipv4Addr, Ipv6Addr};

/// A match value for one field.  The variant must agree with the field's
/// declared match kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchValue {
    Exact(String),
    Ternary(String, String),
    Lpm(String, u32),
    Range(String, String),
    Optional(String),
}

impl MatchValue {
    pub fn exact<S: Into<String>>(value: S) -> Self {
        MatchValue::Exact(value.into())
    }

    pub fn lpm<S: Into<String>>(value: S, prefix_len: u32) -> Self {
        MatchValue::Lpm(value.into(), prefix_len)
    }

    pub fn ternary<S: Into<String>, M: Into<String>>(value: S, mask: M) -> Self {
        MatchValue::Ternary(value.into(), mask.into())
    }

    pub fn range<L: Into<String>, H: Into<String>>(low: L, high: H) -> Self {
        MatchValue::Range(low.into(), high.into())
    }

    pub fn optional<S: Into<String>>(value: S) -> Self {
        MatchValue::Optional(value.into())
    }

    /// Parses `address/prefix-length`, e.g. `10.0.2.0/24`.
    pub fn from_cidr(cidr: &str) -> Result<Self, EncodingError> {
        let (address, prefix_len) = cidr
            .split_once('/')
            .ok_or_else(|| EncodingError::new(cidr, "expected address/prefix-length"))?;
        let prefix_len = prefix_len
            .parse::<u32>()
            .map_err(|_| EncodingError::new(cidr, format!("bad prefix length {:?}", prefix_len)))?;
        if parse_value(address).is_none() {
            let reason = format!("cannot parse {:?} as an address", address);
            return Err(EncodingError::new(cidr, reason));
        }
        Ok(MatchValue::lpm(address, prefix_len))
    }

    /// The match kind this value's shape corresponds to.
    pub fn kind(&self) -> MatchKind {
        match self {
            MatchValue::Exact(_) => MatchKind::Exact,
            MatchValue::Ternary(..) => MatchKind::Ternary,
            MatchValue::Lpm(..) => MatchKind::Lpm,
            MatchValue::Range(..) => MatchKind::Range,
            MatchValue::Optional(_) => MatchKind::Optional,
        }
    }
}

fn parse_mac(text: &str) -> Option<u128> {
    let octets: Vec<&str> = text.split(|c| c == ':' || c == '-').collect();
    if octets.len() != 6 || octets.iter().any(|o| o.is_empty() || o.len() > 2) {
        return None;
    }
    octets.iter().try_fold(0u128, |acc, o| {
        u8::from_str_radix(o, 16)
            .ok()
            .map(|b| acc << 8 | u128::from(b))
    })
}

/// Parses any of the accepted textual value forms into an integer.
pub fn parse_value(text: &str) -> Option<u128> {
    let text = text.trim();
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        return u128::from_str_radix(hex, 16).ok();
    }
    if let Some(mac) = parse_mac(text) {
        return Some(mac);
    }
    if text.contains(':') {
        return text.parse::<Ipv6Addr>().ok().map(u128::from);
    }
    if text.contains('.') {
        return text
            .parse::<Ipv4Addr>()
            .ok()
            .map(|a| u128::from(u32::from(a)));
    }
    text.parse::<u128>().ok()
}

fn width_mask(bits: u32) -> u128 {
    if bits >= 128 {
        u128::MAX
    } else {
        (1u128 << bits) - 1
    }
}

fn byte_len(bit_width: u32) -> usize {
    ((bit_width + 7) / 8) as usize
}

// P4Runtime expects a big-endian byte string of exactly (bit_width + 7) / 8
// bytes.  Callers have already checked that the value fits.
fn encode_value(value: u128, bit_width: u32) -> Vec<u8> {
    let mut buf = [0u8; 16];
    BigEndian::write_u128(&mut buf, value);
    buf[16 - byte_len(bit_width)..].to_vec()
}

fn decode_value(bytes: &[u8]) -> Option<u128> {
    if bytes.len() > 16 {
        return None;
    }
    let mut buf = [0u8; 16];
    buf[16 - bytes.len()..].copy_from_slice(bytes);
    Some(BigEndian::read_u128(&buf))
}

fn lpm_mask(bit_width: u32, prefix_len: u32) -> u128 {
    if prefix_len == 0 {
        0
    } else {
        width_mask(bit_width) & !width_mask(bit_width - prefix_len)
    }
}

/// Mask covering the top `prefix_len` bits of a `bit_width`-bit field, in
/// the field's wire width.  `None` if the prefix is longer than the field or
/// the field is wider than 128 bits.
pub fn prefix_mask(bit_width: u32, prefix_len: u32) -> Option<Vec<u8>> {
    if bit_width > 128 || prefix_len > bit_width {
        return None;
    }
    Some(encode_value(lpm_mask(bit_width, prefix_len), bit_width))
}

fn parse_for_width(field: &str, text: &str, bit_width: u32) -> Result<u128, EncodingError> {
    if bit_width > 128 {
        return Err(EncodingError::new(
            field,
            format!("bit<{}> fields are not supported", bit_width),
        ));
    }
    let value = parse_value(text)
        .ok_or_else(|| EncodingError::new(field, format!("cannot parse {:?} as a value", text)))?;
    if value & !width_mask(bit_width) != 0 {
        return Err(EncodingError::new(
            field,
            format!("{} does not fit in bit<{}>", text, bit_width),
        ));
    }
    Ok(value)
}

/// Encodes one match field, or returns `None` for a wildcard that must be
/// left out of the entry.
fn encode_field_match(
    mf: &MatchField,
    value: &MatchValue,
) -> Result<Option<FieldMatch>, EncodingError> {
    let shape = value.kind();
    let compatible =
        shape == mf.kind || (mf.kind == MatchKind::Optional && shape == MatchKind::Exact);
    if !compatible {
        return Err(EncodingError::kind_mismatch(&mf.name, mf.kind.clone(), &shape));
    }

    let name = mf.name.as_str();
    let w = mf.bit_width;
    let mut field_match = FieldMatch::new();
    field_match.set_field_id(mf.id);
    match value {
        MatchValue::Exact(v) | MatchValue::Optional(v) => {
            let v = encode_value(parse_for_width(name, v, w)?, w);
            if mf.kind == MatchKind::Optional {
                let mut optional_match = FieldMatch_Optional::new();
                optional_match.set_value(v);
                field_match.set_optional(optional_match);
            } else {
                let mut exact_match = FieldMatch_Exact::new();
                exact_match.set_value(v);
                field_match.set_exact(exact_match);
            }
        }
        MatchValue::Lpm(v, prefix_len) => {
            let prefix_len = *prefix_len;
            if prefix_len > w {
                return Err(EncodingError::new(
                    name,
                    format!("prefix length {} exceeds bit<{}>", prefix_len, w),
                ));
            }
            let value = parse_for_width(name, v, w)?;
            if value & !lpm_mask(w, prefix_len) != 0 {
                return Err(EncodingError::new(
                    name,
                    format!("{}/{} has bits set beyond the prefix", v, prefix_len),
                ));
            }
            if prefix_len == 0 {
                return Ok(None);
            }
            let mut lpm_match = FieldMatch_LPM::new();
            lpm_match.set_value(encode_value(value, w));
            lpm_match.set_prefix_len(
                i32::try_from(prefix_len)
                    .map_err(|_| EncodingError::new(name, "prefix length out of range"))?,
            );
            field_match.set_lpm(lpm_match);
        }
        MatchValue::Ternary(v, m) => {
            let value = parse_for_width(name, v, w)?;
            let mask = parse_for_width(name, m, w)?;
            if value & !mask != 0 {
                return Err(EncodingError::new(
                    name,
                    format!("{} has bits set outside mask {}", v, m),
                ));
            }
            if mask == 0 {
                return Ok(None);
            }
            let mut ternary_match = FieldMatch_Ternary::new();
            ternary_match.set_value(encode_value(value, w));
            ternary_match.set_mask(encode_value(mask, w));
            field_match.set_ternary(ternary_match);
        }
        MatchValue::Range(lo, hi) => {
            let low = parse_for_width(name, lo, w)?;
            let high = parse_for_width(name, hi, w)?;
            if low > high {
                return Err(EncodingError::new(
                    name,
                    format!("range {}..{} is empty", lo, hi),
                ));
            }
            if low == 0 && high == width_mask(w) {
                return Ok(None);
            }
            let mut range_match = FieldMatch_Range::new();
            range_match.set_low(encode_value(low, w));
            range_match.set_high(encode_value(high, w));
            field_match.set_range(range_match);
        }
    }
    Ok(Some(field_match))
}

fn check_unique<'a, I: IntoIterator<Item = &'a str>>(
    names: I,
    what: &str,
) -> Result<(), EncodingError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(EncodingError::new(name, format!("{} given more than once", what)));
        }
    }
    Ok(())
}

fn encode_match_key(
    table: &Table,
    matches: &[(&str, MatchValue)],
) -> Result<RepeatedField<FieldMatch>, CodecError> {
    for (name, _) in matches {
        table.match_field(name)?;
    }
    check_unique(matches.iter().map(|(n, _)| *n), "match field")?;

    let mut field_matches = RepeatedField::new();
    for mf in &table.match_fields {
        match matches.iter().find(|(n, _)| *n == mf.name) {
            Some((_, value)) => {
                if let Some(field_match) = encode_field_match(mf, value)? {
                    field_matches.push(field_match);
                }
            }
            None if mf.kind == MatchKind::Exact => {
                return Err(EncodingError::new(
                    &mf.name,
                    format!("exact match field of table {} is required", table.preamble.name),
                )
                .into())
            }
            None => (),
        }
    }
    Ok(field_matches)
}

fn check_priority(table: &Table, priority: i32) -> Result<(), EncodingError> {
    match (table.requires_priority(), priority) {
        (true, p) if p <= 0 => Err(EncodingError::new(
            "priority",
            format!(
                "table {} has ternary, range or optional fields and needs a positive priority",
                table.preamble.name
            ),
        )),
        (false, p) if p != 0 => Err(EncodingError::new(
            "priority",
            format!("table {} does not take a priority", table.preamble.name),
        )),
        _ => Ok(()),
    }
}

fn encode_action(
    schema: &Schema,
    table: &Table,
    action_name: &str,
    params: &[(&str, &str)],
) -> Result<TableAction, CodecError> {
    let action = schema.action(action_name)?;
    match table.action_ref(action.preamble.id) {
        Some(ar) if ar.may_be_entry => (),
        Some(_) => {
            return Err(EncodingError::new(
                action_name,
                format!("action is default-only in table {}", table.preamble.name),
            )
            .into())
        }
        None => {
            return Err(EncodingError::new(
                action_name,
                format!("action is not permitted in table {}", table.preamble.name),
            )
            .into())
        }
    }
    for (name, _) in params {
        action.param(name)?;
    }
    check_unique(params.iter().map(|(n, _)| *n), "action parameter")?;

    let mut runtime_action = Action::new();
    runtime_action.set_action_id(action.preamble.id);
    for param in &action.params {
        let (_, text) = params
            .iter()
            .find(|(n, _)| *n == param.name)
            .ok_or_else(|| {
                EncodingError::new(
                    &param.name,
                    format!("missing parameter of action {}", action.preamble.name),
                )
            })?;
        let value = parse_for_width(&param.name, text, param.bit_width)?;
        let mut runtime_param = Action_Param::new();
        runtime_param.set_param_id(param.id);
        runtime_param.set_value(encode_value(value, param.bit_width));
        runtime_action.mut_params().push(runtime_param);
    }

    let mut table_action = TableAction::new();
    table_action.set_action(runtime_action);
    Ok(table_action)
}

/// Builds a complete entry for `table_name`.  Match fields are emitted in the
/// table's declared order and action parameters in the action's declared
/// order, whatever order they are given in.
pub fn build_table_entry(
    schema: &Schema,
    table_name: &str,
    matches: &[(&str, MatchValue)],
    action_name: &str,
    params: &[(&str, &str)],
    priority: i32,
) -> Result<TableEntry, CodecError> {
    let mut entry = build_match_key(schema, table_name, matches, priority)?;
    let table = schema.table(table_name)?;
    entry.set_action(encode_action(schema, table, action_name, params)?);
    Ok(entry)
}

/// Builds an entry with only its key (table, matches and priority), as used
/// to delete an entry or to name it in a read.
pub fn build_match_key(
    schema: &Schema,
    table_name: &str,
    matches: &[(&str, MatchValue)],
    priority: i32,
) -> Result<TableEntry, CodecError> {
    let table = schema.table(table_name)?;
    check_priority(table, priority)?;

    let mut entry = TableEntry::new();
    entry.set_table_id(table.preamble.id);
    entry.set_field_match(encode_match_key(table, matches)?);
    entry.set_priority(priority);
    Ok(entry)
}

/// A table entry with ids resolved to names and values rendered as text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedEntry {
    pub table: String,
    pub matches: Vec<(String, String)>,
    pub priority: i32,
    pub action: Option<String>,
    pub params: Vec<(String, String)>,
}

impl Display for DecodedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.table)?;
        for (name, value) in &self.matches {
            write!(f, " {} {}", name, value)?;
        }
        if self.priority != 0 {
            write!(f, " priority {}", self.priority)?;
        }
        if let Some(ref action) = self.action {
            write!(f, " -> {}", action)?;
            for (name, value) in &self.params {
                write!(f, " {} {}", name, value)?;
            }
        }
        Ok(())
    }
}

/// Renders `bytes` for display: bit<32> as IPv4, bit<48> as MAC, bit<128> as
/// IPv6 and everything else in decimal.
fn format_value(field: &str, bytes: &[u8], bit_width: u32) -> Result<String, EncodingError> {
    let value = decode_value(bytes)
        .filter(|v| v & !width_mask(bit_width) == 0)
        .ok_or_else(|| {
            EncodingError::new(field, format!("value does not fit in bit<{}>", bit_width))
        })?;
    Ok(match bit_width {
        32 => Ipv4Addr::from(value as u32).to_string(),
        48 => (0..6)
            .rev()
            .map(|i| format!("{:02x}", (value >> (8 * i)) & 0xff))
            .join(":"),
        128 => Ipv6Addr::from(value).to_string(),
        _ => value.to_string(),
    })
}

fn decode_field_match(mf: &MatchField, fm: &FieldMatch) -> Result<String, EncodingError> {
    use FieldMatch_oneof_field_match_type::*;
    let show = |bytes: &[u8]| format_value(&mf.name, bytes, mf.bit_width);
    match &fm.field_match_type {
        Some(exact(m)) => show(m.get_value()),
        Some(optional(m)) => show(m.get_value()),
        Some(lpm(m)) => Ok(format!("{}/{}", show(m.get_value())?, m.get_prefix_len())),
        Some(ternary(m)) => Ok(format!("{} &&& {}", show(m.get_value())?, show(m.get_mask())?)),
        Some(range(m)) => Ok(format!("{}..{}", show(m.get_low())?, show(m.get_high())?)),
        Some(other(_)) | None => Err(EncodingError::new(&mf.name, "unsupported match encoding")),
    }
}

/// Inverse of [`build_table_entry`], for presentation.
pub fn decode_table_entry(schema: &Schema, entry: &TableEntry) -> Result<DecodedEntry, CodecError> {
    let table = schema.table_by_id(entry.get_table_id())?;
    let matches = entry
        .get_field_match()
        .iter()
        .map(|fm| {
            let mf = table.match_field_by_id(fm.get_field_id())?;
            Ok((mf.name.clone(), decode_field_match(mf, fm)?))
        })
        .collect::<Result<Vec<_>, CodecError>>()?;

    let (action, params) = if entry.get_action().has_action() {
        let runtime_action = entry.get_action().get_action();
        let action = schema.action_by_id(runtime_action.get_action_id())?;
        let params = runtime_action
            .get_params()
            .iter()
            .map(|p| {
                let param = action.param_by_id(p.get_param_id())?;
                Ok((
                    param.name.clone(),
                    format_value(&param.name, p.get_value(), param.bit_width)?,
                ))
            })
            .collect::<Result<Vec<_>, CodecError>>()?;
        (Some(action.preamble.name.clone()), params)
    } else {
        (None, Vec::new())
    };

    Ok(DecodedEntry {
        table: table.preamble.name.clone(),
        matches,
        priority: entry.get_priority(),
        action,
        params,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::SymbolKind;

    const ROUTER: &str = include_str!("../tests/data/router.p4info.txt");

    fn schema() -> Schema {
        Schema::from_text("router.p4info.txt", ROUTER).unwrap()
    }

    fn route(prefix: &str, len: u32) -> Result<TableEntry, CodecError> {
        build_table_entry(
            &schema(),
            "MyIngress.ipv4_lpm",
            &[("hdr.ipv4.dstAddr", MatchValue::lpm(prefix, len))],
            "MyIngress.ipv4_fwd",
            &[("port", "2"), ("nxt_hop", "10.0.4.2")],
            0,
        )
    }

    #[test]
    fn parses_value_forms() {
        assert_eq!(parse_value("42"), Some(42));
        assert_eq!(parse_value("0x1F"), Some(31));
        assert_eq!(parse_value("10.0.2.0"), Some(0x0a000200));
        assert_eq!(parse_value("00:bb:bb:00:01:02"), Some(0x00bbbb000102));
        assert_eq!(parse_value("::1"), Some(1));
        assert_eq!(parse_value("ten"), None);
        assert_eq!(parse_value("10.0.0.256"), None);
    }

    #[test]
    fn prefix_masks() {
        assert_eq!(prefix_mask(32, 24).unwrap(), vec![0xff, 0xff, 0xff, 0x00]);
        assert_eq!(prefix_mask(32, 0).unwrap(), vec![0, 0, 0, 0]);
        assert_eq!(prefix_mask(32, 32).unwrap(), vec![0xff; 4]);
        assert_eq!(prefix_mask(9, 1).unwrap(), vec![0x01, 0x00]);
        assert_eq!(prefix_mask(128, 128).unwrap(), vec![0xff; 16]);
        assert_eq!(prefix_mask(32, 33), None);
    }

    #[test]
    fn ipv4_lpm_entry() {
        let entry = route("10.0.2.0", 24).unwrap();
        assert_eq!(entry.get_table_id(), 37375156);
        assert_eq!(entry.get_priority(), 0);

        let matches = entry.get_field_match();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].get_field_id(), 1);
        let lpm = matches[0].get_lpm();
        assert_eq!(lpm.get_value(), &[10, 0, 2, 0][..]);
        assert_eq!(lpm.get_prefix_len(), 24);

        let action = entry.get_action().get_action();
        assert_eq!(action.get_action_id(), 28792405);
        let params = action.get_params();
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].get_param_id(), 1);
        assert_eq!(params[0].get_value(), &[10, 0, 4, 2][..]);
        assert_eq!(params[1].get_param_id(), 2);
        assert_eq!(params[1].get_value(), &[0, 2][..]);
    }

    #[test]
    fn lpm_edge_prefixes() {
        let entry = route("0.0.0.0", 0).unwrap();
        assert!(entry.get_field_match().is_empty());

        let entry = route("10.0.1.10", 32).unwrap();
        let lpm = entry.get_field_match()[0].get_lpm();
        assert_eq!(lpm.get_value(), &[10, 0, 1, 10][..]);
        assert_eq!(lpm.get_prefix_len(), 32);

        let err = route("10.0.2.1", 24).unwrap_err();
        assert!(
            matches!(err, CodecError::Encoding(ref e) if e.field == "hdr.ipv4.dstAddr"),
            "{}",
            err
        );
        let err = route("10.0.2.0", 33).unwrap_err();
        assert!(err.to_string().contains("exceeds bit<32>"), "{}", err);
    }

    #[test]
    fn shape_must_match_kind() {
        let err = build_table_entry(
            &schema(),
            "MyIngress.ipv4_lpm",
            &[("hdr.ipv4.dstAddr", MatchValue::exact("10.0.2.0"))],
            "MyIngress.drop",
            &[],
            0,
        )
        .unwrap_err();
        match err {
            CodecError::Encoding(e) => {
                assert_eq!(e.field, "hdr.ipv4.dstAddr");
                assert_eq!(e.expected, Some(MatchKind::Lpm));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn exact_fields_are_required() {
        let s = schema();
        let err = build_table_entry(&s, "MyIngress.dst_mac", &[], "MyIngress.drop", &[], 0)
            .unwrap_err();
        assert!(matches!(err, CodecError::Encoding(ref e) if e.field == "meta.next_hop_ipv4"));

        let err = build_table_entry(
            &s,
            "MyIngress.dst_mac",
            &[("meta.next_hop", MatchValue::exact("10.0.4.2"))],
            "MyIngress.drop",
            &[],
            0,
        )
        .unwrap_err();
        assert!(matches!(err, CodecError::NotFound(ref e) if e.kind == SymbolKind::MatchField));
    }

    #[test]
    fn values_must_fit() {
        let s = schema();
        let err = build_table_entry(
            &s,
            "MyIngress.src_mac",
            &[("standard_metadata.egress_spec", MatchValue::exact("512"))],
            "MyIngress.rewrite_src_mac",
            &[("src_mac", "00:bb:bb:00:01:01")],
            0,
        )
        .unwrap_err();
        assert!(err.to_string().contains("does not fit in bit<9>"), "{}", err);

        let entry = build_table_entry(
            &s,
            "MyIngress.src_mac",
            &[("standard_metadata.egress_spec", MatchValue::exact("511"))],
            "MyIngress.rewrite_src_mac",
            &[("src_mac", "00:bb:bb:00:01:01")],
            0,
        )
        .unwrap();
        assert_eq!(entry.get_field_match()[0].get_exact().get_value(), &[0x01, 0xff][..]);
        assert_eq!(
            entry.get_action().get_action().get_params()[0].get_value(),
            &[0x00, 0xbb, 0xbb, 0x00, 0x01, 0x01][..]
        );
    }

    #[test]
    fn actions_and_params_are_checked() {
        let s = schema();
        let lpm = [("hdr.ipv4.dstAddr", MatchValue::lpm("10.0.2.0", 24))];

        let err = build_table_entry(&s, "MyIngress.ipv4_lpm", &lpm, "NoAction", &[], 0)
            .unwrap_err();
        assert!(err.to_string().contains("default-only"), "{}", err);

        let err = build_table_entry(
            &s,
            "MyIngress.ipv4_lpm",
            &lpm,
            "MyIngress.rewrite_dst_mac",
            &[("dst_mac", "00:aa:00:00:01:01")],
            0,
        )
        .unwrap_err();
        assert!(err.to_string().contains("not permitted"), "{}", err);

        let err = build_table_entry(
            &s,
            "MyIngress.ipv4_lpm",
            &lpm,
            "MyIngress.ipv4_fwd",
            &[("port", "2")],
            0,
        )
        .unwrap_err();
        assert!(matches!(err, CodecError::Encoding(ref e) if e.field == "nxt_hop"));

        let err = build_table_entry(
            &s,
            "MyIngress.ipv4_lpm",
            &lpm,
            "MyIngress.ipv4_fwd",
            &[("port", "2"), ("nxt_hop", "10.0.4.2"), ("ttl", "3")],
            0,
        )
        .unwrap_err();
        assert!(matches!(err, CodecError::NotFound(ref e) if e.kind == SymbolKind::ActionParam));
    }

    #[test]
    fn ternary_and_range_entries() {
        let s = schema();
        let acl = |src: MatchValue, ports: MatchValue, priority| {
            build_table_entry(
                &s,
                "MyIngress.acl",
                &[("hdr.ipv4.srcAddr", src), ("hdr.tcp.dstPort", ports)],
                "MyIngress.drop",
                &[],
                priority,
            )
        };

        let entry = acl(
            MatchValue::ternary("10.0.1.0", "255.255.255.0"),
            MatchValue::range("0", "1023"),
            10,
        )
        .unwrap();
        let matches = entry.get_field_match();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].get_ternary().get_mask(), &[255, 255, 255, 0][..]);
        assert_eq!(matches[1].get_range().get_high(), &[0x03, 0xff][..]);
        assert_eq!(entry.get_priority(), 10);

        // Zero mask and full range are wildcards and are left out.
        let entry = acl(
            MatchValue::ternary("0", "0"),
            MatchValue::range("0", "65535"),
            1,
        )
        .unwrap();
        assert!(entry.get_field_match().is_empty());

        let err = acl(
            MatchValue::ternary("10.0.1.1", "255.255.255.0"),
            MatchValue::range("0", "1"),
            1,
        )
        .unwrap_err();
        assert!(err.to_string().contains("outside mask"), "{}", err);
        let err = acl(MatchValue::ternary("0", "0"), MatchValue::range("9", "1"), 1).unwrap_err();
        assert!(err.to_string().contains("is empty"), "{}", err);
        let err = acl(MatchValue::ternary("0", "0"), MatchValue::range("0", "1"), 0).unwrap_err();
        assert!(matches!(err, CodecError::Encoding(ref e) if e.field == "priority"));
        assert!(matches!(route("10.0.2.0", 24), Ok(_)));
    }

    #[test]
    fn optional_entries() {
        let s = schema();
        let acl = |protocol: MatchValue| {
            build_table_entry(
                &s,
                "MyIngress.acl",
                &[("hdr.ipv4.protocol", protocol)],
                "MyIngress.drop",
                &[],
                5,
            )
        };

        let entry = acl(MatchValue::optional("17")).unwrap();
        let matches = entry.get_field_match();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].get_field_id(), 3);
        assert_eq!(matches[0].get_optional().get_value(), &[17][..]);

        // An exact-shaped value is accepted for an optional field.
        let entry = acl(MatchValue::exact("6")).unwrap();
        assert!(entry.get_field_match()[0].has_optional());

        let err = acl(MatchValue::optional("256")).unwrap_err();
        assert!(err.to_string().contains("does not fit in bit<8>"), "{}", err);
        let err = acl(MatchValue::lpm("6", 8)).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Encoding(ref e) if e.expected == Some(MatchKind::Optional)
        ));
    }

    #[test]
    fn decode_reverses_build() {
        let s = schema();
        let inputs: Vec<(&str, Vec<(&str, MatchValue)>, &str, Vec<(&str, &str)>, i32)> = vec![
            (
                "MyIngress.ipv4_lpm",
                vec![("hdr.ipv4.dstAddr", MatchValue::lpm("10.0.2.0", 24))],
                "MyIngress.ipv4_fwd",
                vec![("nxt_hop", "10.0.4.2"), ("port", "2")],
                0,
            ),
            (
                "MyIngress.dst_mac",
                vec![("meta.next_hop_ipv4", MatchValue::exact("10.0.1.10"))],
                "MyIngress.rewrite_dst_mac",
                vec![("dst_mac", "00:aa:00:00:01:01")],
                0,
            ),
            (
                "MyIngress.src_mac",
                vec![("standard_metadata.egress_spec", MatchValue::exact("0x2"))],
                "MyIngress.rewrite_src_mac",
                vec![("src_mac", "00:BB:BB:00:01:02")],
                0,
            ),
            (
                "MyIngress.acl",
                vec![
                    ("hdr.ipv4.srcAddr", MatchValue::ternary("10.0.1.0", "255.255.255.0")),
                    ("hdr.tcp.dstPort", MatchValue::range("80", "443")),
                    ("hdr.ipv4.protocol", MatchValue::optional("6")),
                ],
                "MyIngress.drop",
                vec![],
                20,
            ),
        ];

        for (table, matches, action, params, priority) in inputs {
            let entry = build_table_entry(&s, table, &matches, action, &params, priority).unwrap();
            let decoded = decode_table_entry(&s, &entry).unwrap();
            assert_eq!(decoded.table, table);
            assert_eq!(decoded.priority, priority);
            assert_eq!(decoded.action.as_deref(), Some(action));
            assert_eq!(decoded.matches.len(), matches.len());
            for ((name, value), (dname, dvalue)) in matches.iter().zip(&decoded.matches) {
                assert_eq!(name, dname);
                match value {
                    MatchValue::Lpm(v, len) => {
                        assert_eq!(dvalue, &format!("{}/{}", v, len));
                    }
                    MatchValue::Exact(v) | MatchValue::Optional(v) => {
                        assert_eq!(parse_value(dvalue), parse_value(v))
                    }
                    MatchValue::Ternary(v, mask) => {
                        assert_eq!(dvalue, &format!("{} &&& {}", v, mask));
                    }
                    MatchValue::Range(low, high) => {
                        assert_eq!(dvalue, &format!("{}..{}", low, high));
                    }
                }
            }
            for ((name, value), (dname, dvalue)) in params.iter().zip(&decoded.params) {
                assert_eq!(name, dname);
                assert_eq!(parse_value(dvalue), parse_value(value));
            }
        }
    }

    #[test]
    fn decoded_entry_display() {
        let s = schema();
        let entry = route("10.0.2.0", 24).unwrap();
        let decoded = decode_table_entry(&s, &entry).unwrap();
        assert_eq!(
            decoded.to_string(),
            concat!(
                "MyIngress.ipv4_lpm: hdr.ipv4.dstAddr 10.0.2.0/24 -> ",
                "MyIngress.ipv4_fwd nxt_hop 10.0.4.2 port 2"
            )
        );

        let mut unknown = entry.clone();
        unknown.set_table_id(1);
        assert!(matches!(
            decode_table_entry(&s, &unknown),
            Err(CodecError::NotFound(ref e)) if e.kind == SymbolKind::Table
        ));
    }

    #[test]
    fn cidr_parsing() {
        assert_eq!(MatchValue::from_cidr("10.0.1.0/24").unwrap(), MatchValue::lpm("10.0.1.0", 24));
        assert!(MatchValue::from_cidr("10.0.1.0").is_err());
        assert!(MatchValue::from_cidr("10.0.1.0/x").is_err());
        assert!(MatchValue::from_cidr("ten/8").is_err());
    }
}
