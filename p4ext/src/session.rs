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

//! A control session with one P4Runtime agent.
//!
//! A [`Session`] owns one gRPC channel and, once [`Session::arbitrate`] has
//! been called, the bidirectional stream that carries mastership updates.
//! The agent drops all arbitration state when that stream goes away, so a
//! session is never reconnected in place: after a transport failure every
//! operation reports [`SessionError::Transport`] and the caller opens a new
//! session.

use crate::error::{NotFoundError, SessionError, SymbolKind, WriteError, WriteErrorKind};

use futures::{
    future::FutureExt,
    stream::{self, Stream, StreamExt, TryStreamExt},
    SinkExt,
};

use grpcio::{
    CallOption,
    Channel,
    ChannelBuilder,
    ClientDuplexReceiver,
    EnvBuilder,
    RpcStatus,
    RpcStatusCode,
    StreamingCallSink,
    WriteFlags,
};

use proto::p4info::P4Info;

use proto::p4runtime::{
    CapabilitiesRequest,
    CounterData,
    CounterEntry,
    DirectCounterEntry,
    Entity,
    ForwardingPipelineConfig,
    GetForwardingPipelineConfigRequest,
    GetForwardingPipelineConfigRequest_ResponseType,
    Index,
    MasterArbitrationUpdate,
    ReadRequest,
    SetForwardingPipelineConfigRequest,
    SetForwardingPipelineConfigRequest_Action,
    StreamMessageRequest,
    StreamMessageResponse,
    TableEntry,
    Uint128,
    Update,
    Update_Type,
    WriteRequest,
    WriteRequest_Atomicity,
};

use proto::p4runtime_grpc::P4RuntimeClient;
use proto::status;

use protobuf::{Message, RepeatedField};

use std::fmt::{self, Display};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

// Election ids handed out by `Session::arbitrate`.  Each run owns its devices
// exclusively, so a process-local counter is enough.
static NEXT_ELECTION_ID: AtomicU64 = AtomicU64::new(1);

pub fn to_uint128(x: u128) -> Uint128 {
    let mut uint128 = Uint128::new();
    uint128.set_high((x >> 64) as u64);
    uint128.set_low(x as u64);
    uint128
}

pub fn from_uint128(x: &Uint128) -> u128 {
    u128::from(x.get_high()) << 64 | u128::from(x.get_low())
}

#[derive(Clone, Debug)]
pub struct SessionOptions {
    /// How long `open` waits for the channel to become ready.
    pub connect_timeout: Duration,
    /// How long `arbitrate` waits for the agent's mastership reply.
    pub arbitration_timeout: Duration,
    /// Deadline for each unary call and for each read as a whole.  A call
    /// that misses it fails the session with `Transport`.
    pub rpc_timeout: Duration,
    /// If set, every request sent is appended to this file in protobuf text
    /// format.
    pub dump_path: Option<PathBuf>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            connect_timeout: Duration::from_secs(5),
            arbitration_timeout: Duration::from_secs(5),
            rpc_timeout: Duration::from_secs(30),
            dump_path: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Channel open, mastership not held.
    ChannelOpen,
    /// Mastership held, no pipeline pushed yet.
    Master,
    /// Mastership held and pipeline pushed.  Writes are accepted.
    Configured,
    /// Shut down or disconnected.
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteOp {
    Insert,
    Modify,
    Delete,
}

impl From<WriteOp> for Update_Type {
    fn from(op: WriteOp) -> Self {
        match op {
            WriteOp::Insert => Update_Type::INSERT,
            WriteOp::Modify => Update_Type::MODIFY,
            WriteOp::Delete => Update_Type::DELETE,
        }
    }
}

impl Display for WriteOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WriteOp::Insert => "insert",
            WriteOp::Modify => "modify",
            WriteOp::Delete => "delete",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CounterValue {
    pub packet_count: i64,
    pub byte_count: i64,
}

impl From<&CounterData> for CounterValue {
    fn from(data: &CounterData) -> Self {
        CounterValue {
            packet_count: data.get_packet_count(),
            byte_count: data.get_byte_count(),
        }
    }
}

impl Display for CounterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} packets ({} bytes)", self.packet_count, self.byte_count)
    }
}

// Status codes meaning the channel itself is gone rather than the request
// being refused.
fn is_transport_code(code: RpcStatusCode) -> bool {
    matches!(
        code,
        RpcStatusCode::UNAVAILABLE | RpcStatusCode::CANCELLED | RpcStatusCode::DEADLINE_EXCEEDED
    )
}

fn describe(status: &RpcStatus) -> String {
    if status.message().is_empty() {
        status.code().to_string()
    } else {
        format!("{} {}", status.code(), status.message())
    }
}

/// For a failed batch write, the agent reports UNKNOWN and attaches one
/// `p4.v1.Error` per update.  Returns the first one that is not OK.
fn first_update_error(status: &RpcStatus) -> Option<(RpcStatusCode, String)> {
    let details = status::Status::parse_from_bytes(status.details()).ok()?;
    details
        .get_details()
        .iter()
        .filter_map(|any| any.unpack::<proto::p4runtime::Error>().ok().flatten())
        .find(|e| e.get_canonical_code() != 0)
        .map(|e| (RpcStatusCode::from(e.get_canonical_code()), e.get_message().to_string()))
}

// The agent has no such entity.
fn is_not_found(e: &SessionError) -> bool {
    matches!(e, SessionError::Refused { code, .. } if *code == RpcStatusCode::NOT_FOUND)
}

/// Whether `update` answers a request for mastership with `election_id`.
/// The agent reports the primary's election id, which is at least the one
/// requested.  Lower ones belong to mastership changes that happened before
/// the request.  Codes other than the three mastership outcomes are errors
/// and always answer.
fn answers(update: &MasterArbitrationUpdate, election_id: u128) -> bool {
    match RpcStatusCode::from(update.get_status().get_code()) {
        RpcStatusCode::OK | RpcStatusCode::ALREADY_EXISTS | RpcStatusCode::NOT_FOUND => {
            from_uint128(update.get_election_id()) >= election_id
        }
        _ => true,
    }
}

pub struct Session {
    target: String,
    device_id: u64,
    options: SessionOptions,
    channel: Channel,
    client: P4RuntimeClient,
    stream: Option<(
        StreamingCallSink<StreamMessageRequest>,
        ClientDuplexReceiver<StreamMessageResponse>,
    )>,
    election_id: Option<u128>,
    is_master: bool,
    configured: bool,
    closed: bool,
    disconnected: Arc<AtomicBool>,
    dump: Option<File>,
}

impl Session {
    pub async fn open(address: &str, device_id: u64) -> Result<Session, SessionError> {
        Session::open_with(address, device_id, SessionOptions::default()).await
    }

    /// Opens a channel to the agent at `address` and waits for it to become
    /// ready.  Mastership is not requested yet.
    pub async fn open_with(
        address: &str,
        device_id: u64,
        options: SessionOptions,
    ) -> Result<Session, SessionError> {
        let env = Arc::new(
            EnvBuilder::new()
                .cq_count(1)
                .name_prefix(format!("p4rt-{}", device_id))
                .build(),
        );
        let channel = ChannelBuilder::new(env).connect(address);
        if !channel.wait_for_connected(options.connect_timeout).await {
            return Err(SessionError::Transport {
                target: address.to_string(),
                message: format!("could not connect within {:?}", options.connect_timeout),
            });
        }

        let dump = match &options.dump_path {
            Some(path) => match File::create(path) {
                Ok(file) => Some(file),
                Err(e) => {
                    warn!("{}: could not create {} ({})", address, path.display(), e);
                    None
                }
            },
            None => None,
        };

        info!("{}: connected to device {}", address, device_id);
        Ok(Session {
            target: address.to_string(),
            device_id,
            options,
            client: P4RuntimeClient::new(channel.clone()),
            channel,
            stream: None,
            election_id: None,
            is_master: false,
            configured: false,
            closed: false,
            disconnected: Arc::new(AtomicBool::new(false)),
            dump,
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn device_id(&self) -> u64 {
        self.device_id
    }

    pub fn election_id(&self) -> Option<u128> {
        self.election_id
    }

    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    pub fn state(&self) -> SessionState {
        if self.closed || self.disconnected.load(Ordering::SeqCst) {
            SessionState::Closed
        } else if !self.is_master {
            SessionState::ChannelOpen
        } else if self.configured {
            SessionState::Configured
        } else {
            SessionState::Master
        }
    }

    fn dump<M: Message>(&mut self, header: &str, message: &M) {
        if let Some(ref mut file) = self.dump {
            let text = protobuf::text_format::print_to_string(message);
            if let Err(e) = writeln!(file, "[ {} ]\n{}", header, text) {
                warn!("{}: could not write request dump ({})", self.target, e);
                self.dump = None;
            }
        }
    }

    fn disconnect<M: Into<String>>(&mut self, message: M) -> SessionError {
        let message = message.into();
        if !self.disconnected.swap(true, Ordering::SeqCst) {
            warn!("{}: connection lost ({})", self.target, message);
        }
        self.is_master = false;
        SessionError::Transport {
            target: self.target.clone(),
            message,
        }
    }

    fn call_option(&self) -> CallOption {
        CallOption::default().timeout(self.options.rpc_timeout)
    }

    fn state_error<M: Into<String>>(&self, message: M) -> SessionError {
        SessionError::State {
            target: self.target.clone(),
            message: message.into(),
        }
    }

    fn check_usable(&self) -> Result<(), SessionError> {
        if self.closed {
            return Err(SessionError::Transport {
                target: self.target.clone(),
                message: "session is shut down".to_string(),
            });
        }
        if self.disconnected.load(Ordering::SeqCst) {
            return Err(SessionError::Transport {
                target: self.target.clone(),
                message: "session is disconnected".to_string(),
            });
        }
        Ok(())
    }

    // Error for a failed read or query.
    fn read_error(&mut self, e: grpcio::Error) -> SessionError {
        match e {
            grpcio::Error::RpcFailure(ref status) if !is_transport_code(status.code()) => {
                SessionError::Refused {
                    target: self.target.clone(),
                    code: status.code(),
                    message: describe(status),
                }
            }
            e => self.disconnect(e.to_string()),
        }
    }

    /// Requests mastership with a fresh election id, higher than any this
    /// process handed out before.
    pub async fn arbitrate(&mut self) -> Result<u128, SessionError> {
        let election_id = u128::from(NEXT_ELECTION_ID.fetch_add(1, Ordering::SeqCst));
        self.arbitrate_as(election_id).await
    }

    /// Requests mastership with `election_id` and waits for the agent's
    /// answer.  Fails with `NotMaster` if another controller holds a higher
    /// election id for the device.
    pub async fn arbitrate_as(&mut self, election_id: u128) -> Result<u128, SessionError> {
        self.check_usable()?;
        if self.stream.is_none() {
            let stream = match self.client.stream_channel() {
                Ok(stream) => stream,
                Err(e) => return Err(self.disconnect(e.to_string())),
            };
            self.stream = Some(stream);
        }
        // Earlier notifications, e.g. of being preempted, must not be taken
        // for the answer to this request.
        self.poll_notifications();
        self.check_usable()?;

        let mut update = MasterArbitrationUpdate::new();
        update.set_device_id(self.device_id);
        update.set_election_id(to_uint128(election_id));
        let mut request = StreamMessageRequest::new();
        request.set_arbitration(update);
        self.dump("MasterArbitrationUpdate", &request);
        debug!(
            "{}: requesting mastership of device {} with election id {}",
            self.target, self.device_id, election_id
        );

        let timeout = self.options.arbitration_timeout;
        let reply = match self.stream {
            Some((ref mut sink, ref mut receiver)) => {
                tokio::time::timeout(timeout, async {
                    if let Err(e) = sink.send((request, WriteFlags::default())).await {
                        return Err(format!("could not send arbitration request ({})", e));
                    }
                    while let Some(response) = receiver.next().await {
                        let r = match response {
                            Ok(r) => r,
                            Err(e) => return Err(format!("stream failed ({})", e)),
                        };
                        if r.has_arbitration() && answers(r.get_arbitration(), election_id) {
                            return Ok(r.get_arbitration().clone());
                        }
                        debug!("ignoring stream message {:?} during arbitration", r);
                    }
                    Err("agent closed the stream".to_string())
                })
                .await
            }
            None => Ok(Err("no stream".to_string())),
        };

        let reply = match reply {
            Ok(Ok(reply)) => reply,
            Ok(Err(message)) => {
                // The agent forgets us along with the stream; start over on
                // the next attempt.
                self.stream = None;
                self.is_master = false;
                return Err(SessionError::Arbitration {
                    target: self.target.clone(),
                    message,
                });
            }
            Err(_) => {
                self.stream = None;
                self.is_master = false;
                return Err(SessionError::Arbitration {
                    target: self.target.clone(),
                    message: format!("no arbitration response within {:?}", timeout),
                });
            }
        };

        self.election_id = Some(election_id);
        if reply.get_status().get_code() == 0 {
            info!(
                "{}: primary for device {} with election id {}",
                self.target, self.device_id, election_id
            );
            self.is_master = true;
            Ok(election_id)
        } else {
            warn!(
                "{}: not primary for device {} ({}, current election id {})",
                self.target,
                self.device_id,
                reply.get_status().get_message(),
                from_uint128(reply.get_election_id())
            );
            self.is_master = false;
            Err(SessionError::NotMaster {
                target: self.target.clone(),
                device_id: self.device_id,
                election_id,
            })
        }
    }

    /// Applies mastership notifications the agent has sent since the last
    /// call, without waiting for new ones.  A notification with a non-OK
    /// status means another controller took over.
    fn poll_notifications(&mut self) {
        let mut lost = false;
        let mut failure = None;
        if let Some((_, ref mut receiver)) = self.stream {
            while let Some(next) = receiver.next().now_or_never() {
                match next {
                    Some(Ok(r)) if r.has_arbitration() => {
                        let status = r.get_arbitration().get_status();
                        if status.get_code() != 0 {
                            lost = true;
                        }
                    }
                    Some(Ok(r)) if r.has_error() => {
                        warn!("{}: stream error {:?}", self.target, r.get_error())
                    }
                    Some(Ok(r)) => debug!("{}: ignoring stream message {:?}", self.target, r),
                    Some(Err(e)) => {
                        failure = Some(format!("stream failed ({})", e));
                        break;
                    }
                    None => {
                        failure = Some("agent closed the stream".to_string());
                        break;
                    }
                }
            }
        }
        if lost && self.is_master {
            warn!(
                "{}: another controller took over device {}",
                self.target, self.device_id
            );
            self.is_master = false;
        }
        if let Some(message) = failure {
            self.stream = None;
            self.disconnect(message);
        }
    }

    /// Pushes `p4info` together with the compiled target artifact as one
    /// VERIFY_AND_COMMIT request.  Allowed once, after arbitration.
    pub async fn set_forwarding_pipeline_config(
        &mut self,
        p4info: &P4Info,
        device_config: Vec<u8>,
    ) -> Result<(), SessionError> {
        self.check_usable()?;
        let election_id = match (self.is_master, self.election_id) {
            (true, Some(id)) => id,
            _ => {
                let message = "mastership is required to push the forwarding pipeline";
                return Err(self.state_error(message));
            }
        };
        if self.configured {
            return Err(self.state_error("forwarding pipeline is already set"));
        }

        let mut config = ForwardingPipelineConfig::new();
        config.set_p4info(p4info.clone());
        config.set_p4_device_config(device_config);

        let mut request = SetForwardingPipelineConfigRequest::new();
        request.set_action(SetForwardingPipelineConfigRequest_Action::VERIFY_AND_COMMIT);
        request.set_device_id(self.device_id);
        request.set_election_id(to_uint128(election_id));
        request.set_config(config);
        self.dump("SetForwardingPipelineConfig", &request);

        let result = match self
            .client
            .set_forwarding_pipeline_config_async_opt(&request, self.call_option())
        {
            Ok(call) => call.await,
            Err(e) => Err(e),
        };
        match result {
            Ok(_) => {
                info!("{}: forwarding pipeline set on device {}", self.target, self.device_id);
                self.configured = true;
                Ok(())
            }
            Err(grpcio::Error::RpcFailure(ref status))
                if status.code() == RpcStatusCode::PERMISSION_DENIED =>
            {
                self.is_master = false;
                Err(SessionError::NotMaster {
                    target: self.target.clone(),
                    device_id: self.device_id,
                    election_id,
                })
            }
            Err(grpcio::Error::RpcFailure(ref status)) if !is_transport_code(status.code()) => {
                Err(SessionError::Rejected {
                    target: self.target.clone(),
                    message: describe(status),
                })
            }
            Err(e) => Err(self.disconnect(e.to_string())),
        }
    }

    /// Returns the P4Info the device is running.
    pub async fn get_forwarding_pipeline_config(&mut self) -> Result<P4Info, SessionError> {
        self.check_usable()?;
        let mut request = GetForwardingPipelineConfigRequest::new();
        request.set_device_id(self.device_id);
        request.set_response_type(
            GetForwardingPipelineConfigRequest_ResponseType::P4INFO_AND_COOKIE,
        );
        self.dump("GetForwardingPipelineConfig", &request);

        let result = match self
            .client
            .get_forwarding_pipeline_config_async_opt(&request, self.call_option())
        {
            Ok(call) => call.await,
            Err(e) => Err(e),
        };
        let response = result.map_err(|e| self.read_error(e))?;
        let pipeline = response.get_config();
        if !pipeline.has_p4info() {
            return Err(SessionError::Refused {
                target: self.target.clone(),
                code: RpcStatusCode::FAILED_PRECONDITION,
                message: "device did not return P4Info".to_string(),
            });
        }
        Ok(pipeline.get_p4info().clone())
    }

    /// Returns the P4Runtime API version the agent implements.
    pub async fn capabilities(&mut self) -> Result<String, SessionError> {
        self.check_usable()?;
        let request = CapabilitiesRequest::new();
        let result = match self.client.capabilities_async_opt(&request, self.call_option()) {
            Ok(call) => call.await,
            Err(e) => Err(e),
        };
        let response = result.map_err(|e| self.read_error(e))?;
        Ok(response.get_p4runtime_api_version().to_string())
    }

    // Local checks shared by `write` and `write_batch`.  Returns the election
    // id to send.
    fn prepare_write(&mut self) -> Result<u128, SessionError> {
        self.check_usable()?;
        self.poll_notifications();
        self.check_usable()?;
        match (self.is_master, self.election_id) {
            (true, Some(election_id)) if self.configured => Ok(election_id),
            (true, Some(_)) => {
                Err(self.state_error("forwarding pipeline must be set before writing"))
            }
            _ => Err(WriteError {
                target: self.target.clone(),
                kind: WriteErrorKind::NotMaster,
                message: format!("session is not primary for device {}", self.device_id),
            }
            .into()),
        }
    }

    fn write_error(&mut self, e: grpcio::Error) -> SessionError {
        let status = match e {
            grpcio::Error::RpcFailure(status) if !is_transport_code(status.code()) => status,
            e => return self.disconnect(e.to_string()),
        };
        let (code, message) = match status.code() {
            RpcStatusCode::UNKNOWN => {
                first_update_error(&status).unwrap_or_else(|| (status.code(), describe(&status)))
            }
            code => (code, describe(&status)),
        };
        let kind = match code {
            RpcStatusCode::ALREADY_EXISTS => WriteErrorKind::Duplicate,
            RpcStatusCode::NOT_FOUND => WriteErrorKind::NotFound,
            RpcStatusCode::PERMISSION_DENIED => {
                self.is_master = false;
                WriteErrorKind::NotMaster
            }
            _ => WriteErrorKind::Malformed,
        };
        WriteError {
            target: self.target.clone(),
            kind,
            message,
        }
        .into()
    }

    async fn send_updates(&mut self, updates: Vec<Update>) -> Result<(), SessionError> {
        let election_id = self.prepare_write()?;
        let mut request = WriteRequest::new();
        request.set_device_id(self.device_id);
        request.set_election_id(to_uint128(election_id));
        request.set_atomicity(WriteRequest_Atomicity::CONTINUE_ON_ERROR);
        request.set_updates(RepeatedField::from_vec(updates));
        self.dump("Write", &request);

        let result = match self.client.write_async_opt(&request, self.call_option()) {
            Ok(call) => call.await,
            Err(e) => Err(e),
        };
        result.map(|_| ()).map_err(|e| self.write_error(e))
    }

    pub async fn write(&mut self, entry: &TableEntry, op: WriteOp) -> Result<(), SessionError> {
        self.write_batch(vec![(entry.clone(), op)]).await
    }

    /// Sends several updates in one non-atomic request.  On failure, reports
    /// the first update the agent refused.
    pub async fn write_batch(
        &mut self,
        entries: Vec<(TableEntry, WriteOp)>,
    ) -> Result<(), SessionError> {
        let updates = entries
            .into_iter()
            .map(|(entry, op)| {
                let mut entity = Entity::new();
                entity.set_table_entry(entry);
                let mut update = Update::new();
                update.set_field_type(op.into());
                update.set_entity(entity);
                update
            })
            .collect::<Vec<_>>();
        debug!("{}: writing {} updates", self.target, updates.len());
        self.send_updates(updates).await
    }

    fn read_request(&self, entities: Vec<Entity>) -> ReadRequest {
        let mut request = ReadRequest::new();
        request.set_device_id(self.device_id);
        request.set_entities(RepeatedField::from_vec(entities));
        request
    }

    async fn read_entities(&mut self, entities: Vec<Entity>) -> Result<Vec<Entity>, SessionError> {
        self.check_usable()?;
        let request = self.read_request(entities);
        debug!("{}: reading {} entities", self.target, request.get_entities().len());
        self.dump("Read", &request);
        let receiver = match self.client.read_opt(&request, self.call_option()) {
            Ok(receiver) => receiver,
            Err(e) => return Err(self.read_error(e)),
        };
        let responses = match receiver.try_collect::<Vec<_>>().await {
            Ok(responses) => responses,
            Err(e) => return Err(self.read_error(e)),
        };
        Ok(responses
            .iter()
            .flat_map(|r| r.get_entities().iter().cloned())
            .collect())
    }

    /// Streams the entries installed in table `table_id`, or in every table
    /// if `None`.  Each call issues a new read.
    pub fn read_table_entries(
        &mut self,
        table_id: Option<u32>,
    ) -> Result<impl Stream<Item = Result<TableEntry, SessionError>>, SessionError> {
        self.check_usable()?;
        let mut filter = TableEntry::new();
        filter.set_table_id(table_id.unwrap_or(0));
        let mut entity = Entity::new();
        entity.set_table_entry(filter);
        let request = self.read_request(vec![entity]);
        debug!("{}: reading entries of table {}", self.target, table_id.unwrap_or(0));
        self.dump("Read", &request);

        let receiver = match self.client.read_opt(&request, self.call_option()) {
            Ok(receiver) => receiver,
            Err(e) => return Err(self.read_error(e)),
        };
        let target = self.target.clone();
        let disconnected = self.disconnected.clone();
        Ok(receiver
            .map(move |response| {
                let items: Vec<Result<TableEntry, SessionError>> = match response {
                    Ok(r) => r
                        .get_entities()
                        .iter()
                        .filter(|e| e.has_table_entry())
                        .map(|e| Ok(e.get_table_entry().clone()))
                        .collect(),
                    Err(grpcio::Error::RpcFailure(ref status))
                        if !is_transport_code(status.code()) =>
                    {
                        vec![Err(SessionError::Refused {
                            target: target.clone(),
                            code: status.code(),
                            message: describe(status),
                        })]
                    }
                    Err(e) => {
                        disconnected.store(true, Ordering::SeqCst);
                        vec![Err(SessionError::Transport {
                            target: target.clone(),
                            message: e.to_string(),
                        })]
                    }
                };
                stream::iter(items)
            })
            .flatten())
    }

    pub async fn collect_table_entries(
        &mut self,
        table_id: Option<u32>,
    ) -> Result<Vec<TableEntry>, SessionError> {
        self.read_table_entries(table_id)?.try_collect().await
    }

    pub async fn read_counter(
        &mut self,
        counter_id: u32,
        index: i64,
    ) -> Result<CounterValue, SessionError> {
        let mut counter_entry = CounterEntry::new();
        counter_entry.set_counter_id(counter_id);
        let mut i = Index::new();
        i.set_index(index);
        counter_entry.set_index(i);
        let mut entity = Entity::new();
        entity.set_counter_entry(counter_entry);

        let not_found =
            || NotFoundError::new(SymbolKind::Counter, format!("{}[{}]", counter_id, index));
        let entities = match self.read_entities(vec![entity]).await {
            Err(e) if is_not_found(&e) => return Err(not_found().into()),
            result => result?,
        };
        entities
            .iter()
            .find(|e| e.has_counter_entry() && e.get_counter_entry().get_counter_id() == counter_id)
            .map(|e| CounterValue::from(e.get_counter_entry().get_data()))
            .ok_or_else(|| not_found().into())
    }

    /// Reads the direct counter cell of the installed entry with `entry`'s
    /// key.
    pub async fn read_direct_counter(
        &mut self,
        entry: &TableEntry,
    ) -> Result<CounterValue, SessionError> {
        let mut direct = DirectCounterEntry::new();
        direct.set_table_entry(entry.clone());
        let mut entity = Entity::new();
        entity.set_direct_counter_entry(direct);

        let not_found = || {
            NotFoundError::new(
                SymbolKind::DirectCounter,
                format!("for entry in table {}", entry.get_table_id()),
            )
        };
        let entities = match self.read_entities(vec![entity]).await {
            Err(e) if is_not_found(&e) => return Err(not_found().into()),
            result => result?,
        };
        entities
            .iter()
            .find(|e| e.has_direct_counter_entry())
            .map(|e| CounterValue::from(e.get_direct_counter_entry().get_data()))
            .ok_or_else(|| not_found().into())
    }

    /// Closes the stream channel, which releases mastership.  Further
    /// operations fail with `Transport`.
    pub async fn shutdown(&mut self) {
        if self.closed {
            return;
        }
        if let Some((mut sink, _receiver)) = self.stream.take() {
            if let Err(e) = sink.close().await {
                debug!("{}: closing stream failed ({})", self.target, e);
            }
        }
        self.closed = true;
        self.is_master = false;
        info!("{}: session closed", self.target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uint128_halves() {
        let x = (7u128 << 64) | 9;
        let u = to_uint128(x);
        assert_eq!(u.get_high(), 7);
        assert_eq!(u.get_low(), 9);
        assert_eq!(from_uint128(&u), x);
    }

    #[test]
    fn update_errors_from_details() {
        let mut ok = proto::p4runtime::Error::new();
        ok.set_canonical_code(0);
        let mut dup = proto::p4runtime::Error::new();
        dup.set_canonical_code(i32::from(RpcStatusCode::ALREADY_EXISTS));
        dup.set_message("entry exists".to_string());

        let mut details = status::Status::new();
        details.set_code(i32::from(RpcStatusCode::UNKNOWN));
        details.mut_details().push(protobuf::well_known_types::Any::pack(&ok).unwrap());
        details.mut_details().push(protobuf::well_known_types::Any::pack(&dup).unwrap());
        let status = RpcStatus::with_details(
            RpcStatusCode::UNKNOWN,
            String::new(),
            details.write_to_bytes().unwrap(),
        );

        let (code, message) = first_update_error(&status).unwrap();
        assert_eq!(code, RpcStatusCode::ALREADY_EXISTS);
        assert_eq!(message, "entry exists");
        assert!(first_update_error(&RpcStatus::new(RpcStatusCode::UNKNOWN)).is_none());
    }

    #[test]
    fn stale_arbitration_updates_are_not_answers() {
        let update = |code: RpcStatusCode, primary: u128| {
            let mut u = MasterArbitrationUpdate::new();
            u.set_election_id(to_uint128(primary));
            u.mut_status().set_code(code.into());
            u
        };
        assert!(answers(&update(RpcStatusCode::OK, 30), 30));
        assert!(answers(&update(RpcStatusCode::ALREADY_EXISTS, 40), 30));
        // Preempted by 20 before asking again with 30.
        assert!(!answers(&update(RpcStatusCode::ALREADY_EXISTS, 20), 30));
        assert!(answers(&update(RpcStatusCode::INVALID_ARGUMENT, 0), 30));
    }

    #[test]
    fn not_found_is_decided_by_status_code() {
        let refused = |code: RpcStatusCode, message: &str| SessionError::Refused {
            target: "s1".to_string(),
            code,
            message: message.to_string(),
        };
        assert!(is_not_found(&refused(RpcStatusCode::NOT_FOUND, "no such counter")));
        assert!(!is_not_found(&refused(RpcStatusCode::INVALID_ARGUMENT, "NOT_FOUND in text")));
        let transport = SessionError::Transport {
            target: "s1".to_string(),
            message: "NOT_FOUND".to_string(),
        };
        assert!(!is_not_found(&transport));
    }

    #[test]
    fn counter_value_display() {
        let v = CounterValue {
            packet_count: 3,
            byte_count: 294,
        };
        assert_eq!(v.to_string(), "3 packets (294 bytes)");
    }
}
