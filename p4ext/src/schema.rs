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

//! Name/id index over a P4Info schema.
//!
//! A [`Schema`] is built once from a P4Info and never changes afterward.
//! Every lookup is total in the sense that an unknown name or id yields a
//! [`NotFoundError`] instead of a default value.

use crate::error::{NotFoundError, SchemaParseError, SymbolKind};
use crate::text;

use itertools::Itertools;

use proto::p4info::{self, P4Info};

use protobuf::Message;

use std::collections::{BTreeMap, HashMap};
use std::convert::TryFrom;
use std::fmt::{self, Display};
use std::fs;
use std::path::Path;

use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MatchKind {
    Exact,
    Lpm,
    Ternary,
    Range,
    Optional,
    Other(String),
}

impl Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use MatchKind::*;
        let s = match self {
            Exact => "exact",
            Lpm => "LPM",
            Ternary => "ternary",
            Range => "range",
            Optional => "optional",
            Other(s) => s,
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Preamble {
    pub id: u32,
    pub name: String,
    pub alias: String,
    pub annotations: Vec<String>,
    pub brief: String,
}

impl From<&p4info::Preamble> for Preamble {
    fn from(p: &p4info::Preamble) -> Self {
        Preamble {
            id: p.get_id(),
            name: p.get_name().into(),
            alias: p.get_alias().into(),
            annotations: p.get_annotations().to_vec(),
            brief: p.get_doc().get_brief().into(),
        }
    }
}

fn bit_width(what: &str, bitwidth: i32) -> Result<u32, String> {
    match u32::try_from(bitwidth) {
        Ok(w) if w > 0 => Ok(w),
        _ => Err(format!("{} has invalid bitwidth {}", what, bitwidth)),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchField {
    pub id: u32,
    pub name: String,
    pub bit_width: u32,
    pub kind: MatchKind,
    pub type_name: Option<String>,
    pub annotations: Vec<String>,
}

impl TryFrom<&p4info::MatchField> for MatchField {
    type Error = String;

    fn try_from(mf: &p4info::MatchField) -> Result<Self, String> {
        use p4info::MatchField_MatchType::*;
        let kind = if mf.has_other_match_type() {
            MatchKind::Other(mf.get_other_match_type().into())
        } else {
            match mf.get_match_type() {
                EXACT => MatchKind::Exact,
                LPM => MatchKind::Lpm,
                TERNARY => MatchKind::Ternary,
                RANGE => MatchKind::Range,
                OPTIONAL => MatchKind::Optional,
                UNSPECIFIED => {
                    return Err(format!("match field {} has no match type", mf.get_name()))
                }
            }
        };
        Ok(MatchField {
            id: mf.get_id(),
            name: mf.get_name().into(),
            bit_width: bit_width(&format!("match field {}", mf.get_name()), mf.get_bitwidth())?,
            kind,
            type_name: if mf.has_type_name() {
                Some(mf.get_type_name().get_name().into())
            } else {
                None
            },
            annotations: mf.get_annotations().to_vec(),
        })
    }
}

impl Display for MatchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field {}: bit<{}>", self.name, self.bit_width)?;
        if let Some(ref type_name) = self.type_name {
            write!(f, " ({})", type_name.escape_debug())?;
        }
        write!(f, " {}-match", self.kind)?;
        if !self.annotations.is_empty() {
            write!(f, " {}", self.annotations.iter().join(" "))?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub id: u32,
    pub name: String,
    pub bit_width: u32,
}

impl TryFrom<&p4info::Action_Param> for Param {
    type Error = String;

    fn try_from(ap: &p4info::Action_Param) -> Result<Self, String> {
        Ok(Param {
            id: ap.get_id(),
            name: ap.get_name().into(),
            bit_width: bit_width(&format!("parameter {}", ap.get_name()), ap.get_bitwidth())?,
        })
    }
}

impl Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: bit<{}>", self.name, self.bit_width)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Action {
    pub preamble: Preamble,
    pub params: Vec<Param>,
}

impl Action {
    pub fn param(&self, name: &str) -> Result<&Param, NotFoundError> {
        self.params
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| {
                NotFoundError::new(
                    SymbolKind::ActionParam,
                    format!("{} of action {}", name, self.preamble.name),
                )
            })
    }

    pub fn param_by_id(&self, id: u32) -> Result<&Param, NotFoundError> {
        self.params.iter().find(|p| p.id == id).ok_or_else(|| {
            NotFoundError::new(
                SymbolKind::ActionParam,
                format!("id {} of action {}", id, self.preamble.name),
            )
        })
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "action {}({})", self.preamble.name, self.params.iter().join(", "))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionRef {
    pub id: u32,
    pub may_be_default: bool, // Allowed as the default action?
    pub may_be_entry: bool,   // Allowed as an entry's action?
    pub annotations: Vec<String>,
}

impl From<&p4info::ActionRef> for ActionRef {
    fn from(ar: &p4info::ActionRef) -> Self {
        ActionRef {
            id: ar.get_id(),
            may_be_default: ar.get_scope() != p4info::ActionRef_Scope::TABLE_ONLY,
            may_be_entry: ar.get_scope() != p4info::ActionRef_Scope::DEFAULT_ONLY,
            annotations: ar.get_annotations().to_vec(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    pub preamble: Preamble,
    pub match_fields: Vec<MatchField>,
    pub action_refs: Vec<ActionRef>,
    pub const_default_action: Option<u32>,
    pub direct_resources: Vec<u32>,
    pub max_entries: Option<u64>,
    pub idle_notify: bool,
    pub is_const_table: bool,
}

impl TryFrom<&p4info::Table> for Table {
    type Error = String;

    fn try_from(t: &p4info::Table) -> Result<Self, String> {
        Ok(Table {
            preamble: t.get_preamble().into(),
            match_fields: t
                .get_match_fields()
                .iter()
                .map(MatchField::try_from)
                .collect::<Result<_, _>>()?,
            action_refs: t.get_action_refs().iter().map(|x| x.into()).collect(),
            const_default_action: match t.get_const_default_action_id() {
                0 => None,
                id => Some(id),
            },
            direct_resources: t.get_direct_resource_ids().to_vec(),
            max_entries: u64::try_from(t.get_size()).ok().filter(|&n| n > 0),
            idle_notify: t.get_idle_timeout_behavior()
                == p4info::Table_IdleTimeoutBehavior::NOTIFY_CONTROL,
            is_const_table: t.get_is_const_table(),
        })
    }
}

impl Table {
    pub fn match_field(&self, name: &str) -> Result<&MatchField, NotFoundError> {
        self.match_fields
            .iter()
            .find(|mf| mf.name == name)
            .ok_or_else(|| {
                NotFoundError::new(
                    SymbolKind::MatchField,
                    format!("{} in table {}", name, self.preamble.name),
                )
            })
    }

    pub fn match_field_by_id(&self, id: u32) -> Result<&MatchField, NotFoundError> {
        self.match_fields.iter().find(|mf| mf.id == id).ok_or_else(|| {
            NotFoundError::new(
                SymbolKind::MatchField,
                format!("id {} in table {}", id, self.preamble.name),
            )
        })
    }

    pub fn action_ref(&self, action_id: u32) -> Option<&ActionRef> {
        self.action_refs.iter().find(|ar| ar.id == action_id)
    }

    /// Entries for tables with ternary, range or optional fields need a
    /// nonzero priority; entries for all other tables must have none.
    pub fn requires_priority(&self) -> bool {
        self.match_fields.iter().any(|mf| {
            matches!(
                mf.kind,
                MatchKind::Ternary | MatchKind::Range | MatchKind::Optional
            )
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterUnit {
    Unspecified,
    Bytes,
    Packets,
    Both,
}

impl From<p4info::CounterSpec_Unit> for CounterUnit {
    fn from(unit: p4info::CounterSpec_Unit) -> Self {
        use p4info::CounterSpec_Unit::*;
        match unit {
            UNSPECIFIED => CounterUnit::Unspecified,
            BYTES => CounterUnit::Bytes,
            PACKETS => CounterUnit::Packets,
            BOTH => CounterUnit::Both,
        }
    }
}

impl Display for CounterUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CounterUnit::*;
        let s = match self {
            Unspecified => "unspecified",
            Bytes => "bytes",
            Packets => "packets",
            Both => "packets and bytes",
        };
        write!(f, "{}", s)
    }
}

/// An indexed counter array, or a direct counter attached to `direct_table`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Counter {
    pub preamble: Preamble,
    pub unit: CounterUnit,
    pub size: Option<u64>,
    pub direct_table: Option<u32>,
}

impl From<&p4info::Counter> for Counter {
    fn from(c: &p4info::Counter) -> Self {
        Counter {
            preamble: c.get_preamble().into(),
            unit: c.get_spec().get_unit().into(),
            size: u64::try_from(c.get_size()).ok(),
            direct_table: None,
        }
    }
}

impl From<&p4info::DirectCounter> for Counter {
    fn from(c: &p4info::DirectCounter) -> Self {
        Counter {
            preamble: c.get_preamble().into(),
            unit: c.get_spec().get_unit().into(),
            size: None,
            direct_table: Some(c.get_direct_table_id()),
        }
    }
}

trait Symbol {
    fn preamble(&self) -> &Preamble;
}

impl Symbol for Table {
    fn preamble(&self) -> &Preamble {
        &self.preamble
    }
}

impl Symbol for Action {
    fn preamble(&self) -> &Preamble {
        &self.preamble
    }
}

impl Symbol for Counter {
    fn preamble(&self) -> &Preamble {
        &self.preamble
    }
}

/// Two-way index for one kind of symbol.  Aliases resolve too, but only
/// when no other symbol of the same kind claims the same alias or name.
#[derive(Clone, Debug)]
struct Category<T> {
    kind: SymbolKind,
    by_id: BTreeMap<u32, T>,
    by_name: HashMap<String, u32>,
}

impl<T: Symbol> Category<T> {
    fn new(kind: SymbolKind, file: &str, items: Vec<T>) -> Result<Self, SchemaParseError> {
        let mut by_id = BTreeMap::new();
        let mut by_name = HashMap::new();
        for item in items {
            let p = item.preamble();
            let (id, name) = (p.id, p.name.clone());
            if id == 0 || name.is_empty() {
                return Err(schema_error(file, format!("{} without id or name", kind)));
            }
            if by_name.insert(name.clone(), id).is_some() {
                return Err(schema_error(file, format!("duplicate {} name {}", kind, name)));
            }
            if by_id.insert(id, item).is_some() {
                return Err(schema_error(file, format!("duplicate {} id {}", kind, id)));
            }
        }

        let alias_counts = by_id
            .values()
            .map(|item| item.preamble().alias.as_str())
            .filter(|alias| !alias.is_empty())
            .counts();
        for item in by_id.values() {
            let p = item.preamble();
            if alias_counts.get(p.alias.as_str()) == Some(&1) && !by_name.contains_key(&p.alias) {
                by_name.insert(p.alias.clone(), p.id);
            }
        }

        Ok(Category {
            kind,
            by_id,
            by_name,
        })
    }

    fn get(&self, id: u32) -> Result<&T, NotFoundError> {
        self.by_id
            .get(&id)
            .ok_or_else(|| NotFoundError::new(self.kind, format!("id {}", id)))
    }

    fn lookup(&self, name: &str) -> Result<&T, NotFoundError> {
        self.by_name
            .get(name)
            .and_then(|id| self.by_id.get(id))
            .ok_or_else(|| NotFoundError::new(self.kind, name))
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.by_id.values()
    }
}

fn schema_error<S: Into<String>>(file: &str, message: S) -> SchemaParseError {
    SchemaParseError {
        file: file.into(),
        line: 0,
        message: message.into(),
    }
}

#[derive(Clone, Debug)]
pub struct Schema {
    p4info: P4Info,
    tables: Category<Table>,
    actions: Category<Action>,
    counters: Category<Counter>,
    direct_counters: Category<Counter>,
}

impl Schema {
    /// Loads a P4Info file.  Files named `*.bin` or `*.pb`, and files that are
    /// not UTF-8, are read as binary protobuf; anything else as text format.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Schema, SchemaParseError> {
        let path = path.as_ref();
        let file = path.display().to_string();
        let bytes = fs::read(path)
            .map_err(|e| schema_error(&file, format!("could not read P4Info ({})", e)))?;

        let binary = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("bin") | Some("pb")
        );
        let p4info = match (binary, std::str::from_utf8(&bytes)) {
            (false, Ok(text)) => text::parse_p4info(&file, text)?,
            _ => P4Info::parse_from_bytes(&bytes)
                .map_err(|e| schema_error(&file, format!("could not parse P4Info ({})", e)))?,
        };
        Schema::build(&file, p4info)
    }

    pub fn from_text(file: &str, text: &str) -> Result<Schema, SchemaParseError> {
        Schema::build(file, text::parse_p4info(file, text)?)
    }

    /// Indexes an already-decoded P4Info, e.g. one returned by a device.
    pub fn from_p4info(p4info: &P4Info) -> Result<Schema, SchemaParseError> {
        Schema::build("<p4info>", p4info.clone())
    }

    fn build(file: &str, p4info: P4Info) -> Result<Schema, SchemaParseError> {
        let tables = p4info
            .get_tables()
            .iter()
            .map(Table::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| schema_error(file, e))?;
        let actions = p4info
            .get_actions()
            .iter()
            .map(|a| -> Result<Action, String> {
                Ok(Action {
                    preamble: a.get_preamble().into(),
                    params: a
                        .get_params()
                        .iter()
                        .map(Param::try_from)
                        .collect::<Result<_, _>>()?,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| schema_error(file, e))?;
        let counters: Vec<Counter> = p4info.get_counters().iter().map(|c| c.into()).collect();
        let direct_counters: Vec<Counter> =
            p4info.get_direct_counters().iter().map(|c| c.into()).collect();

        let schema = Schema {
            tables: Category::new(SymbolKind::Table, file, tables)?,
            actions: Category::new(SymbolKind::Action, file, actions)?,
            counters: Category::new(SymbolKind::Counter, file, counters)?,
            direct_counters: Category::new(SymbolKind::DirectCounter, file, direct_counters)?,
            p4info,
        };
        schema.check(file)?;
        debug!(
            "{}: loaded {} tables, {} actions, {} counters",
            file,
            schema.tables.by_id.len(),
            schema.actions.by_id.len(),
            schema.counters.by_id.len() + schema.direct_counters.by_id.len()
        );
        Ok(schema)
    }

    /// Cross-reference checks that the per-category indexes cannot do alone.
    fn check(&self, file: &str) -> Result<(), SchemaParseError> {
        for t in self.tables.iter() {
            let name = &t.preamble.name;
            if !t.match_fields.iter().map(|mf| mf.id).all_unique()
                || !t.match_fields.iter().map(|mf| &mf.name).all_unique()
            {
                let message = format!("table {} has duplicate match fields", name);
                return Err(schema_error(file, message));
            }
            for ar in &t.action_refs {
                if self.actions.get(ar.id).is_err() {
                    return Err(schema_error(
                        file,
                        format!("table {} refers to unknown action id {}", name, ar.id),
                    ));
                }
            }
        }
        for a in self.actions.iter() {
            if !a.params.iter().map(|p| p.id).all_unique()
                || !a.params.iter().map(|p| &p.name).all_unique()
            {
                return Err(schema_error(
                    file,
                    format!("action {} has duplicate parameters", a.preamble.name),
                ));
            }
        }
        for c in self.direct_counters.iter() {
            if let Some(table_id) = c.direct_table {
                if self.tables.get(table_id).is_err() {
                    return Err(schema_error(
                        file,
                        format!(
                            "direct counter {} refers to unknown table id {}",
                            c.preamble.name, table_id
                        ),
                    ));
                }
            }
        }
        Ok(())
    }

    pub fn p4info(&self) -> &P4Info {
        &self.p4info
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }

    pub fn table(&self, name: &str) -> Result<&Table, NotFoundError> {
        self.tables.lookup(name)
    }

    pub fn table_by_id(&self, id: u32) -> Result<&Table, NotFoundError> {
        self.tables.get(id)
    }

    pub fn table_id(&self, name: &str) -> Result<u32, NotFoundError> {
        Ok(self.table(name)?.preamble.id)
    }

    pub fn table_name(&self, id: u32) -> Result<&str, NotFoundError> {
        Ok(&self.table_by_id(id)?.preamble.name)
    }

    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }

    pub fn action(&self, name: &str) -> Result<&Action, NotFoundError> {
        self.actions.lookup(name)
    }

    pub fn action_by_id(&self, id: u32) -> Result<&Action, NotFoundError> {
        self.actions.get(id)
    }

    pub fn action_id(&self, name: &str) -> Result<u32, NotFoundError> {
        Ok(self.action(name)?.preamble.id)
    }

    pub fn action_name(&self, id: u32) -> Result<&str, NotFoundError> {
        Ok(&self.action_by_id(id)?.preamble.name)
    }

    /// Actions that may appear in entries of `table` (not default-only ones).
    pub fn permitted_actions(&self, table: &str) -> Result<Vec<&Action>, NotFoundError> {
        self.table(table)?
            .action_refs
            .iter()
            .filter(|ar| ar.may_be_entry)
            .map(|ar| self.action_by_id(ar.id))
            .collect()
    }

    pub fn match_field_id(&self, table: &str, field: &str) -> Result<u32, NotFoundError> {
        Ok(self.table(table)?.match_field(field)?.id)
    }

    pub fn match_field_name(&self, table: &str, id: u32) -> Result<&str, NotFoundError> {
        Ok(&self.table(table)?.match_field_by_id(id)?.name)
    }

    pub fn action_param_id(&self, action: &str, param: &str) -> Result<u32, NotFoundError> {
        Ok(self.action(action)?.param(param)?.id)
    }

    pub fn action_param_name(&self, action_id: u32, param_id: u32) -> Result<&str, NotFoundError> {
        Ok(&self.action_by_id(action_id)?.param_by_id(param_id)?.name)
    }

    pub fn counters(&self) -> impl Iterator<Item = &Counter> {
        self.counters.iter().chain(self.direct_counters.iter())
    }

    pub fn counter(&self, name: &str) -> Result<&Counter, NotFoundError> {
        self.counters.lookup(name)
    }

    pub fn counter_id(&self, name: &str) -> Result<u32, NotFoundError> {
        Ok(self.counter(name)?.preamble.id)
    }

    pub fn counter_name(&self, id: u32) -> Result<&str, NotFoundError> {
        Ok(&self.counters.get(id)?.preamble.name)
    }

    pub fn direct_counter_id(&self, name: &str) -> Result<u32, NotFoundError> {
        Ok(self.direct_counters.lookup(name)?.preamble.id)
    }

    pub fn direct_counter_name(&self, id: u32) -> Result<&str, NotFoundError> {
        Ok(&self.direct_counters.get(id)?.preamble.name)
    }

    pub fn direct_counter_for_table(&self, table_id: u32) -> Option<&Counter> {
        self.direct_counters
            .iter()
            .find(|c| c.direct_table == Some(table_id))
    }
}

impl Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in self.tables.iter() {
            writeln!(f, "table {} (id {}):", t.preamble.name, t.preamble.id)?;
            for mf in &t.match_fields {
                writeln!(f, "\t{}", mf)?;
            }
            for ar in &t.action_refs {
                write!(f, "\t")?;
                if !ar.may_be_entry {
                    write!(f, "default-only ")?;
                } else if !ar.may_be_default {
                    write!(f, "not-default ")?;
                }
                match self.actions.get(ar.id) {
                    Ok(a) => writeln!(f, "{}", a)?,
                    Err(_) => writeln!(f, "action id {}", ar.id)?,
                }
            }
            if let Some(max_entries) = t.max_entries {
                writeln!(f, "\tsize: {}", max_entries)?;
            }
            if let Some(a) = t.const_default_action.and_then(|id| self.actions.get(id).ok()) {
                writeln!(f, "\tconst default {}", a)?;
            }
            if t.is_const_table {
                writeln!(f, "\tconst table")?;
            }
            if t.idle_notify {
                writeln!(f, "\tidle notify")?;
            }
        }
        for c in self.counters() {
            write!(f, "counter {} (id {}): {}", c.preamble.name, c.preamble.id, c.unit)?;
            match c.direct_table {
                Some(table_id) => writeln!(
                    f,
                    ", direct on {}",
                    self.table_name(table_id).unwrap_or("unknown table")
                )?,
                None => writeln!(f, ", size {}", c.size.unwrap_or(0))?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUTER: &str = include_str!("../tests/data/router.p4info.txt");

    fn schema() -> Schema {
        Schema::from_text("router.p4info.txt", ROUTER).unwrap()
    }

    #[test]
    fn ids_and_names_are_inverse() {
        let s = schema();
        for t in s.tables() {
            let id = s.table_id(&t.preamble.name).unwrap();
            assert_eq!(s.table_name(id).unwrap(), t.preamble.name);
            for mf in &t.match_fields {
                let fid = s.match_field_id(&t.preamble.name, &mf.name).unwrap();
                assert_eq!(s.match_field_name(&t.preamble.name, fid).unwrap(), mf.name);
            }
        }
        for a in s.actions() {
            let id = s.action_id(&a.preamble.name).unwrap();
            assert_eq!(s.action_name(id).unwrap(), a.preamble.name);
            for p in &a.params {
                let pid = s.action_param_id(&a.preamble.name, &p.name).unwrap();
                assert_eq!(s.action_param_name(id, pid).unwrap(), p.name);
            }
        }
        let id = s.counter_id("MyIngress.c").unwrap();
        assert_eq!(id, 302003092);
        assert_eq!(s.counter_name(id).unwrap(), "MyIngress.c");
        let id = s.direct_counter_id("MyIngress.ipv4_lpm_hits").unwrap();
        assert_eq!(s.direct_counter_name(id).unwrap(), "MyIngress.ipv4_lpm_hits");
    }

    #[test]
    fn unknown_symbols_are_errors() {
        let s = schema();
        assert_eq!(
            s.table_id("MyIngress.nope").unwrap_err(),
            NotFoundError::new(SymbolKind::Table, "MyIngress.nope")
        );
        assert_eq!(s.table_name(0).unwrap_err().kind, SymbolKind::Table);
        assert_eq!(s.action_name(37375156).unwrap_err().kind, SymbolKind::Action);
        assert_eq!(
            s.match_field_id("MyIngress.ipv4_lpm", "hdr.ipv4.srcAddr").unwrap_err().kind,
            SymbolKind::MatchField
        );
        assert_eq!(
            s.action_param_name(28792405, 3).unwrap_err().kind,
            SymbolKind::ActionParam
        );
        assert_eq!(s.counter_id("MyIngress.ipv4_lpm_hits").unwrap_err().kind, SymbolKind::Counter);
    }

    #[test]
    fn unique_aliases_resolve() {
        let s = schema();
        assert_eq!(s.table_id("ipv4_lpm").unwrap(), 37375156);
        assert_eq!(s.action_id("ipv4_fwd").unwrap(), 28792405);
        assert_eq!(s.counter_id("c").unwrap(), 302003092);
        // Lookups by alias still report the full name.
        assert_eq!(s.table_name(s.table_id("src_mac").unwrap()).unwrap(), "MyIngress.src_mac");
    }

    #[test]
    fn describes_tables() {
        let s = schema();
        let lpm = s.table("MyIngress.ipv4_lpm").unwrap();
        assert_eq!(lpm.match_fields[0].kind, MatchKind::Lpm);
        assert_eq!(lpm.max_entries, Some(1024));
        assert!(!lpm.requires_priority());
        assert!(s.table("MyIngress.acl").unwrap().requires_priority());

        let permitted: Vec<_> = s
            .permitted_actions("MyIngress.ipv4_lpm")
            .unwrap()
            .into_iter()
            .map(|a| a.preamble.name.as_str())
            .collect();
        assert_eq!(permitted, vec!["MyIngress.ipv4_fwd", "MyIngress.drop"]);

        assert_eq!(
            s.direct_counter_for_table(37375156).map(|c| c.preamble.id),
            Some(318781522)
        );

        let text = s.to_string();
        assert!(text.contains("field hdr.ipv4.dstAddr: bit<32> LPM-match"), "{}", text);
        assert!(text.contains("default-only action NoAction()"), "{}", text);
        let action = "action MyIngress.ipv4_fwd(nxt_hop: bit<32>, port: bit<9>)";
        assert!(text.contains(action), "{}", text);
    }

    #[test]
    fn keeps_sections_it_does_not_index() {
        let s = schema();
        let ipv4 = &s.p4info().get_type_info().get_headers()["ipv4_t"];
        assert_eq!(ipv4.get_members()[1].get_name(), "dstAddr");
        assert_eq!(ipv4.get_members()[1].get_type_spec().get_bit().get_bitwidth(), 32);

        let acl = s.table("MyIngress.acl").unwrap();
        assert_eq!(acl.match_fields[2].kind, MatchKind::Optional);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let text = r#"
actions { preamble { id: 1 name: "a" } }
actions { preamble { id: 2 name: "a" } }
"#;
        let err = Schema::from_text("dup.txt", text).unwrap_err();
        assert!(err.message.contains("duplicate action name a"), "{}", err);

        let text = r#"
tables { preamble { id: 1 name: "t" } action_refs { id: 99 } }
"#;
        let err = Schema::from_text("dangling.txt", text).unwrap_err();
        assert!(err.message.contains("unknown action id 99"), "{}", err);
    }

    #[test]
    fn loads_binary_p4info() {
        let text_schema = schema();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("router.p4info.bin");
        fs::write(&path, text_schema.p4info().write_to_bytes().unwrap()).unwrap();

        let bin_schema = Schema::load(&path).unwrap();
        assert_eq!(bin_schema.p4info(), text_schema.p4info());
        assert_eq!(bin_schema.table_id("MyIngress.dst_mac").unwrap(), 49463297);
    }

    #[test]
    fn missing_file_is_a_parse_error() {
        let err = Schema::load("/nonexistent/router.p4info.txt").unwrap_err();
        assert_eq!(err.line, 0);
        assert!(err.message.contains("could not read P4Info"), "{}", err);
    }
}
