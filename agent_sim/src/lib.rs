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

//! `agent_sim` is a P4Runtime agent that keeps its table state in memory.  It
//! implements the parts of the protocol a controller needs for bring-up:
//! mastership arbitration across concurrent stream channels, pipeline push,
//! table writes with P4Runtime's per-update error reporting, and reads of
//! table entries and counters.  Tests start one per simulated device on a
//! loopback port.

use futures::{
    channel::mpsc,
    future::{self, FutureExt, TryFutureExt},
    stream::{self, StreamExt},
    SinkExt,
};

use grpcio::{
    DuplexSink,
    Environment,
    RequestStream,
    RpcContext,
    RpcStatus,
    RpcStatusCode,
    Server,
    ServerBuilder,
    ServerStreamingSink,
    UnarySink,
    WriteFlags,
};

use proto::p4runtime::{
    CapabilitiesRequest,
    CapabilitiesResponse,
    CounterData,
    Entity,
    ForwardingPipelineConfig,
    GetForwardingPipelineConfigRequest,
    GetForwardingPipelineConfigResponse,
    MasterArbitrationUpdate,
    ReadRequest,
    ReadResponse,
    SetForwardingPipelineConfigRequest,
    SetForwardingPipelineConfigRequest_Action,
    SetForwardingPipelineConfigResponse,
    StreamMessageRequest,
    StreamMessageResponse,
    TableEntry,
    Uint128,
    Update_Type,
    WriteRequest,
    WriteResponse,
};

use proto::p4runtime_grpc::{create_p4_runtime, P4Runtime};

use protobuf::{well_known_types::Any, Message, RepeatedField};

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

fn from_uint128(x: &Uint128) -> u128 {
    u128::from(x.get_high()) << 64 | u128::from(x.get_low())
}

fn to_uint128(x: u128) -> Uint128 {
    let mut uint128 = Uint128::new();
    uint128.set_high((x >> 64) as u64);
    uint128.set_low(x as u64);
    uint128
}

/// A request the agent refuses, with the canonical code to report.
#[derive(Clone, Debug)]
struct Refusal {
    code: RpcStatusCode,
    message: String,
}

impl Refusal {
    fn new<S: Into<String>>(code: RpcStatusCode, message: S) -> Refusal {
        Refusal {
            code,
            message: message.into(),
        }
    }

    fn status(&self) -> RpcStatus {
        RpcStatus::with_message(self.code, self.message.clone())
    }
}

fn unknown_device() -> RpcStatus {
    Refusal::new(RpcStatusCode::NOT_FOUND, "unknown device").status()
}

// Table entries are identified by table, priority and match key.  Field
// matches are compared in wire form, ordered by field id.
type EntryKey = (u32, i32, Vec<(u32, Vec<u8>)>);

fn entry_key(te: &TableEntry) -> EntryKey {
    let mut matches: Vec<(u32, Vec<u8>)> = te
        .get_field_match()
        .iter()
        .map(|fm| (fm.get_field_id(), fm.write_to_bytes().unwrap_or_default()))
        .collect();
    matches.sort();
    (te.get_table_id(), te.get_priority(), matches)
}

struct Controller {
    sender: mpsc::UnboundedSender<StreamMessageResponse>,
    election_id: Option<u128>,
}

struct State {
    device_id: u64,
    pipeline: Option<ForwardingPipelineConfig>,

    // Stream channels currently open, by an id local to the agent.
    controllers: BTreeMap<u64, Controller>,
    next_stream_id: u64,

    table_entries: BTreeMap<EntryKey, TableEntry>,
    counters: HashMap<(u32, i64), CounterData>,
    direct_counters: HashMap<EntryKey, CounterData>,

    // While set, unary calls that change the device are held unanswered.
    unresponsive: bool,
    held: Vec<Box<dyn Send>>,
}

impl State {
    fn new(device_id: u64) -> State {
        State {
            device_id,
            pipeline: None,
            controllers: BTreeMap::new(),
            next_stream_id: 1,
            table_entries: BTreeMap::new(),
            counters: HashMap::new(),
            direct_counters: HashMap::new(),
            unresponsive: false,
            held: Vec::new(),
        }
    }

    /// The stream and election id of the primary controller: the highest
    /// election id among open streams.
    fn primary(&self) -> Option<(u64, u128)> {
        self.controllers
            .iter()
            .filter_map(|(&stream_id, c)| c.election_id.map(|e| (stream_id, e)))
            .max_by_key(|&(_, e)| e)
    }

    fn check_primary(&self, election_id: &Uint128) -> Result<(), Refusal> {
        let election_id = from_uint128(election_id);
        match self.primary() {
            Some((_, primary)) if primary == election_id => Ok(()),
            _ => Err(Refusal::new(
                RpcStatusCode::PERMISSION_DENIED,
                format!("election id {} is not the primary's", election_id),
            )),
        }
    }

    fn open_stream(&mut self, sender: mpsc::UnboundedSender<StreamMessageResponse>) -> u64 {
        let stream_id = self.next_stream_id;
        self.next_stream_id += 1;
        self.controllers.insert(
            stream_id,
            Controller {
                sender,
                election_id: None,
            },
        );
        stream_id
    }

    fn close_stream(&mut self, stream_id: u64) {
        if let Some(c) = self.controllers.remove(&stream_id) {
            debug!("stream {} closed (election id {:?})", stream_id, c.election_id);
        }
    }

    fn notify(&self, stream_id: u64, code: RpcStatusCode, message: String) {
        let mut update = MasterArbitrationUpdate::new();
        update.set_device_id(self.device_id);
        if let Some((_, primary)) = self.primary() {
            update.set_election_id(to_uint128(primary));
        }
        update.mut_status().set_code(code.into());
        update.mut_status().set_message(message);
        let mut response = StreamMessageResponse::new();
        response.set_arbitration(update);
        if let Some(c) = self.controllers.get(&stream_id) {
            if c.sender.unbounded_send(response).is_err() {
                debug!("stream {} is gone", stream_id);
            }
        }
    }

    fn arbitrate(&mut self, stream_id: u64, update: &MasterArbitrationUpdate) {
        if update.get_device_id() != self.device_id {
            let message = format!("unknown device {}", update.get_device_id());
            self.notify(stream_id, RpcStatusCode::NOT_FOUND, message);
            return;
        }
        let election_id = from_uint128(update.get_election_id());
        if self
            .controllers
            .iter()
            .any(|(&s, c)| s != stream_id && c.election_id == Some(election_id))
        {
            let message = format!("election id {} is already in use", election_id);
            self.notify(stream_id, RpcStatusCode::INVALID_ARGUMENT, message);
            return;
        }

        let old_primary = self.primary().map(|(s, _)| s);
        if let Some(c) = self.controllers.get_mut(&stream_id) {
            c.election_id = Some(election_id);
        }
        let new_primary = self.primary().map(|(s, _)| s);

        if new_primary == Some(stream_id) {
            info!("election id {} is primary for device {}", election_id, self.device_id);
            self.notify(stream_id, RpcStatusCode::OK, "primary".to_string());
            if let Some(old) = old_primary.filter(|&old| old != stream_id) {
                self.notify(
                    old,
                    RpcStatusCode::ALREADY_EXISTS,
                    format!("preempted by election id {}", election_id),
                );
            }
        } else {
            self.notify(
                stream_id,
                RpcStatusCode::ALREADY_EXISTS,
                "a primary with a higher election id exists".to_string(),
            );
        }
    }

    fn validate_write(op: Update_Type, entity_exists: bool) -> Result<(), Refusal> {
        match (op, entity_exists) {
            (Update_Type::UNSPECIFIED, _) => {
                Err(Refusal::new(RpcStatusCode::INVALID_ARGUMENT, "unspecified update"))
            }
            (Update_Type::INSERT, true) => {
                Err(Refusal::new(RpcStatusCode::ALREADY_EXISTS, "entry already exists"))
            }
            (Update_Type::MODIFY, false) | (Update_Type::DELETE, false) => {
                Err(Refusal::new(RpcStatusCode::NOT_FOUND, "entry does not exist"))
            }
            _ => Ok(()),
        }
    }

    // Checks `te` against the pipeline's P4Info.
    fn check_entry(&self, op: Update_Type, te: &TableEntry) -> Result<(), Refusal> {
        let p4info = self
            .pipeline
            .as_ref()
            .map(|p| p.get_p4info())
            .ok_or_else(|| {
                Refusal::new(RpcStatusCode::FAILED_PRECONDITION, "no forwarding pipeline")
            })?;
        let table = p4info
            .get_tables()
            .iter()
            .find(|t| t.get_preamble().get_id() == te.get_table_id())
            .ok_or_else(|| {
                Refusal::new(
                    RpcStatusCode::INVALID_ARGUMENT,
                    format!("unknown table {}", te.get_table_id()),
                )
            })?;
        for fm in te.get_field_match() {
            if !table.get_match_fields().iter().any(|mf| mf.get_id() == fm.get_field_id()) {
                return Err(Refusal::new(
                    RpcStatusCode::INVALID_ARGUMENT,
                    format!("unknown match field {}", fm.get_field_id()),
                ));
            }
        }
        if op != Update_Type::DELETE {
            let action_id = te.get_action().get_action().get_action_id();
            if !table.get_action_refs().iter().any(|ar| ar.get_id() == action_id) {
                return Err(Refusal::new(
                    RpcStatusCode::INVALID_ARGUMENT,
                    format!("action {} is not valid for table {}", action_id, te.get_table_id()),
                ));
            }
        }
        Ok(())
    }

    fn write_entity(&mut self, op: Update_Type, entity: &Entity) -> Result<(), Refusal> {
        if !entity.has_table_entry() {
            let message = "only table entries are writable";
            return Err(Refusal::new(RpcStatusCode::UNIMPLEMENTED, message));
        }
        let te = entity.get_table_entry();
        self.check_entry(op, te)?;

        let key = entry_key(te);
        Self::validate_write(op, self.table_entries.contains_key(&key))?;
        if op == Update_Type::DELETE {
            self.table_entries.remove(&key);
            self.direct_counters.remove(&key);
        } else {
            self.table_entries.insert(key, te.clone());
        }
        Ok(())
    }

    fn read_entity(&self, entity: &Entity) -> Result<Vec<Entity>, Refusal> {
        if entity.has_table_entry() {
            let table_id = entity.get_table_entry().get_table_id();
            return Ok(self
                .table_entries
                .values()
                .filter(|te| table_id == 0 || te.get_table_id() == table_id)
                .map(|te| {
                    let mut e = Entity::new();
                    e.set_table_entry(te.clone());
                    e
                })
                .collect());
        }
        if entity.has_counter_entry() {
            let request = entity.get_counter_entry();
            let counter_id = request.get_counter_id();
            let counter = self
                .pipeline
                .as_ref()
                .and_then(|p| {
                    p.get_p4info()
                        .get_counters()
                        .iter()
                        .find(|c| c.get_preamble().get_id() == counter_id)
                })
                .ok_or_else(|| {
                    let message = format!("unknown counter {}", counter_id);
                    Refusal::new(RpcStatusCode::NOT_FOUND, message)
                })?;
            let index = request.get_index().get_index();
            if index < 0 || index >= counter.get_size() {
                return Err(Refusal::new(
                    RpcStatusCode::NOT_FOUND,
                    format!("counter {} has no index {}", counter_id, index),
                ));
            }
            let mut reply = request.clone();
            reply.set_data(self.counters.get(&(counter_id, index)).cloned().unwrap_or_default());
            let mut e = Entity::new();
            e.set_counter_entry(reply);
            return Ok(vec![e]);
        }
        if entity.has_direct_counter_entry() {
            let request = entity.get_direct_counter_entry();
            let key = entry_key(request.get_table_entry());
            if !self.table_entries.contains_key(&key) {
                return Err(Refusal::new(RpcStatusCode::NOT_FOUND, "entry does not exist"));
            }
            let mut reply = request.clone();
            reply.set_data(self.direct_counters.get(&key).cloned().unwrap_or_default());
            let mut e = Entity::new();
            e.set_direct_counter_entry(reply);
            return Ok(vec![e]);
        }
        Err(Refusal::new(RpcStatusCode::UNIMPLEMENTED, "unsupported entity"))
    }
}

fn lock(state: &Mutex<State>) -> MutexGuard<'_, State> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Clone)]
struct P4RuntimeService {
    state: Arc<Mutex<State>>,
}

fn unary_fail<T>(ctx: &RpcContext, sink: UnarySink<T>, status: RpcStatus) {
    let f = sink
        .fail(status)
        .map_err(|e| warn!("failed to send error: {:?}", e))
        .map(|_| ());
    ctx.spawn(f);
}

fn unary_success<T>(ctx: &RpcContext, sink: UnarySink<T>, reply: T) {
    let f = sink
        .success(reply)
        .map_err(|e: grpcio::Error| warn!("failed to send reply: {:?}", e))
        .map(|_| ());
    ctx.spawn(f);
}

fn server_streaming_fail<T>(ctx: &RpcContext, sink: ServerStreamingSink<T>, status: RpcStatus) {
    let f = sink
        .fail(status)
        .map_err(|e| warn!("failed to send error: {:?}", e))
        .map(|_| ());
    ctx.spawn(f);
}

fn server_streaming_success<T: Send + 'static>(
    ctx: &RpcContext,
    mut sink: ServerStreamingSink<T>,
    reply: Vec<T>,
) {
    let f = async move {
        for msg in reply {
            sink.send((msg, WriteFlags::default())).await?;
        }
        sink.close().await?;
        Ok(())
    }
    .map_err(|e: grpcio::Error| warn!("failed to stream response: {:?}", e))
    .map(|_| ());
    ctx.spawn(f);
}

enum Event {
    Request(grpcio::Result<StreamMessageRequest>),
    Notify(StreamMessageResponse),
    Closed,
}

impl P4Runtime for P4RuntimeService {
    fn write(&mut self, ctx: RpcContext, req: WriteRequest, sink: UnarySink<WriteResponse>) {
        let mut state = lock(&self.state);
        if state.unresponsive {
            debug!("holding write of {} updates", req.get_updates().len());
            state.held.push(Box::new(sink));
            return;
        }
        if req.get_device_id() != state.device_id {
            unary_fail(&ctx, sink, unknown_device());
            return;
        }
        if let Err(refusal) = state.check_primary(req.get_election_id()) {
            unary_fail(&ctx, sink, refusal.status());
            return;
        }
        if state.pipeline.is_none() {
            unary_fail(
                &ctx,
                sink,
                Refusal::new(RpcStatusCode::FAILED_PRECONDITION, "no forwarding pipeline").status(),
            );
            return;
        }

        let results: Vec<Result<(), Refusal>> = req
            .get_updates()
            .iter()
            .map(|u| state.write_entity(u.get_field_type(), u.get_entity()))
            .collect();
        if results.iter().all(Result::is_ok) {
            debug!("applied {} updates", results.len());
            unary_success(&ctx, sink, WriteResponse::new());
            return;
        }

        // One p4.v1.Error per update, in order, as P4Runtime requires.
        let mut details = proto::status::Status::new();
        details.set_code(RpcStatusCode::UNKNOWN.into());
        let packed: Vec<Any> = results
            .iter()
            .filter_map(|r| {
                let mut error = proto::p4runtime::Error::new();
                if let Err(refusal) = r {
                    debug!("refused update: {}", refusal.message);
                    error.set_canonical_code(refusal.code.into());
                    error.set_message(refusal.message.clone());
                }
                Any::pack(&error).ok()
            })
            .collect();
        details.set_details(RepeatedField::from_vec(packed));
        let status = match details.write_to_bytes() {
            Ok(bytes) => {
                RpcStatus::with_details(RpcStatusCode::UNKNOWN, "write failed".to_string(), bytes)
            }
            Err(e) => RpcStatus::with_message(RpcStatusCode::INTERNAL, e.to_string()),
        };
        unary_fail(&ctx, sink, status);
    }

    fn read(&mut self, ctx: RpcContext, req: ReadRequest, sink: ServerStreamingSink<ReadResponse>) {
        let state = lock(&self.state);
        if req.get_device_id() != state.device_id {
            server_streaming_fail(&ctx, sink, unknown_device());
            return;
        }
        let mut responses = Vec::new();
        for entity in req.get_entities() {
            match state.read_entity(entity) {
                Ok(entities) => {
                    let mut response = ReadResponse::new();
                    response.set_entities(RepeatedField::from_vec(entities));
                    responses.push(response);
                }
                Err(refusal) => {
                    server_streaming_fail(&ctx, sink, refusal.status());
                    return;
                }
            }
        }
        server_streaming_success(&ctx, sink, responses);
    }

    fn set_forwarding_pipeline_config(
        &mut self,
        ctx: RpcContext,
        req: SetForwardingPipelineConfigRequest,
        sink: UnarySink<SetForwardingPipelineConfigResponse>,
    ) {
        let mut state = lock(&self.state);
        if state.unresponsive {
            debug!("holding forwarding pipeline for device {}", req.get_device_id());
            state.held.push(Box::new(sink));
            return;
        }
        let result = if req.get_device_id() != state.device_id {
            Err(Refusal::new(RpcStatusCode::NOT_FOUND, "unknown device"))
        } else if let Err(refusal) = state.check_primary(req.get_election_id()) {
            Err(refusal)
        } else if !req.get_config().has_p4info() {
            Err(Refusal::new(RpcStatusCode::INVALID_ARGUMENT, "config has no P4Info"))
        } else if req.get_config().get_p4_device_config().is_empty() {
            Err(Refusal::new(RpcStatusCode::INVALID_ARGUMENT, "device config is empty"))
        } else {
            Ok(())
        };
        if let Err(refusal) = result {
            unary_fail(&ctx, sink, refusal.status());
            return;
        }

        if req.get_action() != SetForwardingPipelineConfigRequest_Action::VERIFY {
            info!(
                "device {}: new forwarding pipeline with {} tables",
                state.device_id,
                req.get_config().get_p4info().get_tables().len()
            );
            state.pipeline = Some(req.get_config().clone());
            state.table_entries.clear();
            state.direct_counters.clear();
            state.counters.clear();
        }
        unary_success(&ctx, sink, SetForwardingPipelineConfigResponse::new());
    }

    fn get_forwarding_pipeline_config(
        &mut self,
        ctx: RpcContext,
        req: GetForwardingPipelineConfigRequest,
        sink: UnarySink<GetForwardingPipelineConfigResponse>,
    ) {
        let state = lock(&self.state);
        if req.get_device_id() != state.device_id {
            unary_fail(&ctx, sink, unknown_device());
            return;
        }
        match state.pipeline {
            Some(ref pipeline) => {
                let mut reply = GetForwardingPipelineConfigResponse::new();
                reply.mut_config().set_p4info(pipeline.get_p4info().clone());
                reply.mut_config().set_cookie(pipeline.get_cookie().clone());
                unary_success(&ctx, sink, reply);
            }
            None => unary_fail(
                &ctx,
                sink,
                Refusal::new(RpcStatusCode::FAILED_PRECONDITION, "no forwarding pipeline").status(),
            ),
        }
    }

    fn stream_channel(
        &mut self,
        ctx: RpcContext,
        requests: RequestStream<StreamMessageRequest>,
        mut sink: DuplexSink<StreamMessageResponse>,
    ) {
        let (sender, receiver) = mpsc::unbounded();
        let stream_id = lock(&self.state).open_stream(sender);
        let state = self.state.clone();
        let f = async move {
            let events = stream::select(
                requests
                    .map(Event::Request)
                    .chain(stream::once(future::ready(Event::Closed))),
                receiver.map(Event::Notify),
            );
            futures::pin_mut!(events);
            while let Some(event) = events.next().await {
                match event {
                    Event::Request(Ok(request)) => {
                        if request.has_arbitration() {
                            lock(&state).arbitrate(stream_id, request.get_arbitration());
                        } else {
                            debug!("stream {}: ignoring {:?}", stream_id, request);
                        }
                    }
                    Event::Request(Err(e)) => {
                        debug!("stream {}: {}", stream_id, e);
                        break;
                    }
                    Event::Notify(response) => {
                        if let Err(e) = sink.send((response, WriteFlags::default())).await {
                            debug!("stream {}: {}", stream_id, e);
                            break;
                        }
                    }
                    Event::Closed => break,
                }
            }
            lock(&state).close_stream(stream_id);
            if let Err(e) = sink.close().await {
                debug!("stream {}: close failed ({})", stream_id, e);
            }
        };
        ctx.spawn(f);
    }

    fn capabilities(
        &mut self,
        ctx: RpcContext,
        _req: CapabilitiesRequest,
        sink: UnarySink<CapabilitiesResponse>,
    ) {
        let mut reply = CapabilitiesResponse::new();
        reply.set_p4runtime_api_version("1.3.0".to_string());
        unary_success(&ctx, sink, reply);
    }
}

/// A running agent for one device, listening on a loopback port.
pub struct AgentSim {
    server: Server,
    port: u16,
    state: Arc<Mutex<State>>,
}

impl AgentSim {
    pub fn start(device_id: u64) -> grpcio::Result<AgentSim> {
        let state = Arc::new(Mutex::new(State::new(device_id)));
        let service = create_p4_runtime(P4RuntimeService { state: state.clone() });
        let env = Arc::new(Environment::new(1));
        let mut server = ServerBuilder::new(env)
            .register_service(service)
            .bind("127.0.0.1", 0)
            .build()?;
        server.start();
        let port = server
            .bind_addrs()
            .next()
            .map(|(_, port)| port)
            .ok_or(grpcio::Error::BindFail("127.0.0.1".to_string(), 0))?;
        info!("device {}: P4Runtime agent listening on port {}", device_id, port);
        Ok(AgentSim { server, port, state })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn address(&self) -> String {
        format!("127.0.0.1:{}", self.port)
    }

    /// Election id of the current primary controller, if any.
    pub fn primary_election_id(&self) -> Option<u128> {
        lock(&self.state).primary().map(|(_, e)| e)
    }

    pub fn pipeline(&self) -> Option<ForwardingPipelineConfig> {
        lock(&self.state).pipeline.clone()
    }

    /// Installed entries, ordered by table id.
    pub fn table_entries(&self) -> Vec<TableEntry> {
        lock(&self.state).table_entries.values().cloned().collect()
    }

    pub fn set_counter(&self, counter_id: u32, index: i64, packet_count: i64, byte_count: i64) {
        let mut data = CounterData::new();
        data.set_packet_count(packet_count);
        data.set_byte_count(byte_count);
        lock(&self.state).counters.insert((counter_id, index), data);
    }

    /// Sets the direct counter of the installed entry with `entry`'s key.
    pub fn set_direct_counter(&self, entry: &TableEntry, packet_count: i64, byte_count: i64) {
        let mut data = CounterData::new();
        data.set_packet_count(packet_count);
        data.set_byte_count(byte_count);
        lock(&self.state).direct_counters.insert(entry_key(entry), data);
    }

    /// While `unresponsive`, Write and SetForwardingPipelineConfig calls
    /// get no answer.  Turning it off cancels the calls held so far.
    pub fn set_unresponsive(&self, unresponsive: bool) {
        let mut state = lock(&self.state);
        state.unresponsive = unresponsive;
        if !unresponsive {
            state.held.clear();
        }
    }

    /// Stops serving.  Open streams are cancelled, so connected controllers
    /// see a transport failure.
    pub async fn shutdown(mut self) {
        let f = self.server.shutdown();
        self.server.cancel_all_calls();
        if let Err(e) = f.await {
            warn!("agent shutdown failed ({})", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(table_id: u32, value: u8) -> TableEntry {
        let mut te = TableEntry::new();
        te.set_table_id(table_id);
        let fm = te.mut_field_match().push_default();
        fm.set_field_id(1);
        fm.mut_exact().set_value(vec![value]);
        te
    }

    #[test]
    fn entry_keys_ignore_action() {
        let a = entry(5, 1);
        let mut b = entry(5, 1);
        b.mut_action().mut_action().set_action_id(7);
        assert_eq!(entry_key(&a), entry_key(&b));
        assert_ne!(entry_key(&a), entry_key(&entry(5, 2)));
        assert_ne!(entry_key(&a), entry_key(&entry(6, 1)));
    }

    #[test]
    fn write_validation() {
        assert!(State::validate_write(Update_Type::INSERT, false).is_ok());
        assert_eq!(
            State::validate_write(Update_Type::INSERT, true).unwrap_err().code,
            RpcStatusCode::ALREADY_EXISTS
        );
        assert_eq!(
            State::validate_write(Update_Type::DELETE, false).unwrap_err().code,
            RpcStatusCode::NOT_FOUND
        );
        assert!(State::validate_write(Update_Type::MODIFY, true).is_ok());
    }

    #[test]
    fn highest_election_id_is_primary() {
        let mut state = State::new(1);
        let (tx1, mut rx1) = mpsc::unbounded();
        let (tx2, mut rx2) = mpsc::unbounded();
        let s1 = state.open_stream(tx1);
        let s2 = state.open_stream(tx2);

        let mut update = MasterArbitrationUpdate::new();
        update.set_device_id(1);
        update.set_election_id(to_uint128(10));
        state.arbitrate(s1, &update);
        assert_eq!(state.primary(), Some((s1, 10)));
        let reply = rx1.try_next().unwrap().unwrap();
        assert_eq!(reply.get_arbitration().get_status().get_code(), 0);

        update.set_election_id(to_uint128(20));
        state.arbitrate(s2, &update);
        assert_eq!(state.primary(), Some((s2, 20)));
        assert_eq!(rx2.try_next().unwrap().unwrap().get_arbitration().get_status().get_code(), 0);
        let preempted = rx1.try_next().unwrap().unwrap();
        assert_eq!(
            preempted.get_arbitration().get_status().get_code(),
            i32::from(RpcStatusCode::ALREADY_EXISTS)
        );

        state.close_stream(s2);
        assert_eq!(state.primary(), Some((s1, 10)));
    }
}
