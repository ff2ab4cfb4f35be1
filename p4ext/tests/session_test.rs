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

//! Sessions against an in-process P4Runtime agent.

use agent_sim::AgentSim;

use p4ext::{
    build_match_key,
    build_table_entry,
    decode_table_entry,
    MatchValue,
    Schema,
    Session,
    SessionError,
    SessionOptions,
    SessionState,
    WriteErrorKind,
    WriteOp,
};

use grpcio::RpcStatusCode;

use proto::p4runtime::TableEntry;

use std::time::Duration;

use tracing_test::traced_test;

const ROUTER: &str = include_str!("data/router.p4info.txt");
const DEVICE_ID: u64 = 1;
const COUNTER_ID: u32 = 302003092;

fn schema() -> Schema {
    Schema::from_text("router.p4info.txt", ROUTER).unwrap()
}

fn route(schema: &Schema, prefix: &str, prefix_len: u32, nxt_hop: &str, port: &str) -> TableEntry {
    build_table_entry(
        schema,
        "MyIngress.ipv4_lpm",
        &[("hdr.ipv4.dstAddr", MatchValue::lpm(prefix, prefix_len))],
        "MyIngress.ipv4_fwd",
        &[("nxt_hop", nxt_hop), ("port", port)],
        0,
    )
    .unwrap()
}

async fn configured_session(agent: &AgentSim, schema: &Schema) -> Session {
    let mut session = Session::open(&agent.address(), DEVICE_ID).await.unwrap();
    session.arbitrate().await.unwrap();
    session
        .set_forwarding_pipeline_config(schema.p4info(), b"{}".to_vec())
        .await
        .unwrap();
    session
}

#[tokio::test]
#[traced_test]
async fn arbitration_then_pipeline_push() {
    let agent = AgentSim::start(DEVICE_ID).unwrap();
    let schema = schema();

    let mut session = Session::open(&agent.address(), DEVICE_ID).await.unwrap();
    assert_eq!(session.state(), SessionState::ChannelOpen);

    let election_id = session.arbitrate().await.unwrap();
    assert_eq!(session.state(), SessionState::Master);
    assert_eq!(agent.primary_election_id(), Some(election_id));

    session
        .set_forwarding_pipeline_config(schema.p4info(), b"{}".to_vec())
        .await
        .unwrap();
    assert_eq!(session.state(), SessionState::Configured);
    assert_eq!(agent.pipeline().unwrap().get_p4_device_config(), b"{}");
    let pushed = agent.pipeline().unwrap();
    assert!(pushed.get_p4info().get_type_info().get_headers().contains_key("ipv4_t"));

    let p4info = session.get_forwarding_pipeline_config().await.unwrap();
    assert_eq!(&p4info, schema.p4info());
    assert!(Schema::from_p4info(&p4info).is_ok());

    // The pipeline goes once per session.
    let err = session
        .set_forwarding_pipeline_config(schema.p4info(), b"{}".to_vec())
        .await
        .unwrap_err();
    assert!(matches!(err, SessionError::State { .. }), "{}", err);

    assert_eq!(session.capabilities().await.unwrap(), "1.3.0");
}

#[tokio::test]
async fn lower_election_id_is_not_master() {
    let agent = AgentSim::start(DEVICE_ID).unwrap();
    let schema = schema();

    let mut primary = Session::open(&agent.address(), DEVICE_ID).await.unwrap();
    primary.arbitrate_as(100).await.unwrap();

    let mut backup = Session::open(&agent.address(), DEVICE_ID).await.unwrap();
    let err = backup.arbitrate_as(50).await.unwrap_err();
    match err {
        SessionError::NotMaster { election_id, device_id, .. } => {
            assert_eq!(election_id, 50);
            assert_eq!(device_id, DEVICE_ID);
        }
        other => panic!("unexpected error {}", other),
    }
    assert_eq!(agent.primary_election_id(), Some(100));

    let err = backup
        .set_forwarding_pipeline_config(schema.p4info(), b"{}".to_vec())
        .await
        .unwrap_err();
    assert!(matches!(err, SessionError::State { .. }), "{}", err);

    let entry = route(&schema, "10.0.2.0", 24, "10.0.4.2", "2");
    let err = backup.write(&entry, WriteOp::Insert).await.unwrap_err();
    assert_eq!(err.write_kind(), Some(WriteErrorKind::NotMaster));
}

#[tokio::test]
async fn write_requires_arbitration() {
    let agent = AgentSim::start(DEVICE_ID).unwrap();
    let schema = schema();
    let entry = route(&schema, "10.0.2.0", 24, "10.0.4.2", "2");

    let mut session = Session::open(&agent.address(), DEVICE_ID).await.unwrap();
    let err = session.write(&entry, WriteOp::Insert).await.unwrap_err();
    assert_eq!(err.write_kind(), Some(WriteErrorKind::NotMaster));

    session.arbitrate().await.unwrap();
    let err = session.write(&entry, WriteOp::Insert).await.unwrap_err();
    assert!(matches!(err, SessionError::State { .. }), "{}", err);
    assert!(agent.table_entries().is_empty());
}

#[tokio::test]
async fn preempted_master_cannot_write() {
    let agent = AgentSim::start(DEVICE_ID).unwrap();
    let schema = schema();

    let mut first = Session::open(&agent.address(), DEVICE_ID).await.unwrap();
    first.arbitrate_as(10).await.unwrap();
    first
        .set_forwarding_pipeline_config(schema.p4info(), b"{}".to_vec())
        .await
        .unwrap();

    let mut second = Session::open(&agent.address(), DEVICE_ID).await.unwrap();
    second.arbitrate_as(20).await.unwrap();

    let entry = route(&schema, "10.0.2.0", 24, "10.0.4.2", "2");
    let err = first.write(&entry, WriteOp::Insert).await.unwrap_err();
    assert_eq!(err.write_kind(), Some(WriteErrorKind::NotMaster));
    assert_ne!(first.state(), SessionState::Configured);
    assert!(agent.table_entries().is_empty());
}

#[tokio::test]
async fn preempted_master_can_take_over_again() {
    let agent = AgentSim::start(DEVICE_ID).unwrap();
    let schema = schema();

    let mut first = Session::open(&agent.address(), DEVICE_ID).await.unwrap();
    first.arbitrate_as(10).await.unwrap();
    first
        .set_forwarding_pipeline_config(schema.p4info(), b"{}".to_vec())
        .await
        .unwrap();

    let mut second = Session::open(&agent.address(), DEVICE_ID).await.unwrap();
    second.arbitrate_as(20).await.unwrap();

    // The notice of being preempted by 20 is still queued on the first
    // session's stream.
    assert_eq!(first.arbitrate_as(30).await.unwrap(), 30);
    assert_eq!(first.state(), SessionState::Configured);
    assert_eq!(agent.primary_election_id(), Some(30));

    let entry = route(&schema, "10.0.2.0", 24, "10.0.4.2", "2");
    first.write(&entry, WriteOp::Insert).await.unwrap();
    assert_eq!(agent.table_entries(), vec![entry]);
}

#[tokio::test]
async fn unanswered_write_hits_deadline() {
    let agent = AgentSim::start(DEVICE_ID).unwrap();
    let schema = schema();
    let options = SessionOptions {
        rpc_timeout: Duration::from_millis(300),
        ..Default::default()
    };
    let mut session = Session::open_with(&agent.address(), DEVICE_ID, options).await.unwrap();
    session.arbitrate().await.unwrap();
    session
        .set_forwarding_pipeline_config(schema.p4info(), b"{}".to_vec())
        .await
        .unwrap();

    agent.set_unresponsive(true);
    let entry = route(&schema, "10.0.2.0", 24, "10.0.4.2", "2");
    let err = tokio::time::timeout(Duration::from_secs(5), session.write(&entry, WriteOp::Insert))
        .await
        .expect("write outlived its deadline")
        .unwrap_err();
    assert!(err.is_transport(), "{}", err);
    assert_eq!(session.state(), SessionState::Closed);
    agent.set_unresponsive(false);
}

#[tokio::test]
async fn query_before_pipeline_push_is_refused() {
    let agent = AgentSim::start(DEVICE_ID).unwrap();
    let mut session = Session::open(&agent.address(), DEVICE_ID).await.unwrap();

    let err = session.get_forwarding_pipeline_config().await.unwrap_err();
    match err {
        SessionError::Refused { code, .. } => assert_eq!(code, RpcStatusCode::FAILED_PRECONDITION),
        other => panic!("unexpected error {}", other),
    }
    // A refusal leaves the session usable.
    assert_eq!(session.state(), SessionState::ChannelOpen);
}

#[tokio::test]
async fn duplicate_insert_and_missing_delete() {
    let agent = AgentSim::start(DEVICE_ID).unwrap();
    let schema = schema();
    let mut session = configured_session(&agent, &schema).await;

    let entry = route(&schema, "10.0.2.0", 24, "10.0.4.2", "2");
    session.write(&entry, WriteOp::Insert).await.unwrap();

    let err = session.write(&entry, WriteOp::Insert).await.unwrap_err();
    assert_eq!(err.write_kind(), Some(WriteErrorKind::Duplicate));

    let other = route(&schema, "10.0.3.0", 24, "10.0.4.2", "2");
    let err = session.write(&other, WriteOp::Delete).await.unwrap_err();
    assert_eq!(err.write_kind(), Some(WriteErrorKind::NotFound));
    let err = session.write(&other, WriteOp::Modify).await.unwrap_err();
    assert_eq!(err.write_kind(), Some(WriteErrorKind::NotFound));

    let moved = route(&schema, "10.0.2.0", 24, "10.0.3.2", "3");
    session.write(&moved, WriteOp::Modify).await.unwrap();
    assert_eq!(agent.table_entries(), vec![moved]);

    let key = build_match_key(
        &schema,
        "MyIngress.ipv4_lpm",
        &[("hdr.ipv4.dstAddr", MatchValue::lpm("10.0.2.0", 24))],
        0,
    )
    .unwrap();
    session.write(&key, WriteOp::Delete).await.unwrap();
    assert!(agent.table_entries().is_empty());
}

#[tokio::test]
async fn agent_rejects_malformed_entries() {
    let agent = AgentSim::start(DEVICE_ID).unwrap();
    let schema = schema();
    let mut session = configured_session(&agent, &schema).await;

    let mut entry = route(&schema, "10.0.2.0", 24, "10.0.4.2", "2");
    entry.set_table_id(12345);
    let err = session.write(&entry, WriteOp::Insert).await.unwrap_err();
    assert_eq!(err.write_kind(), Some(WriteErrorKind::Malformed));
    assert!(err.to_string().contains("unknown table 12345"), "{}", err);
}

#[tokio::test]
async fn batch_reports_first_failure() {
    let agent = AgentSim::start(DEVICE_ID).unwrap();
    let schema = schema();
    let mut session = configured_session(&agent, &schema).await;

    let a = route(&schema, "10.0.1.0", 24, "10.0.1.10", "1");
    let b = route(&schema, "10.0.2.0", 24, "10.0.4.2", "2");
    session.write(&b, WriteOp::Insert).await.unwrap();

    let err = session
        .write_batch(vec![(a.clone(), WriteOp::Insert), (b.clone(), WriteOp::Insert)])
        .await
        .unwrap_err();
    assert_eq!(err.write_kind(), Some(WriteErrorKind::Duplicate));
    // Updates are applied independently.
    assert_eq!(agent.table_entries().len(), 2);
}

#[tokio::test]
async fn read_back_installed_entries() {
    let agent = AgentSim::start(DEVICE_ID).unwrap();
    let schema = schema();
    let mut session = configured_session(&agent, &schema).await;

    let src_mac = build_table_entry(
        &schema,
        "MyIngress.src_mac",
        &[("standard_metadata.egress_spec", MatchValue::exact("1"))],
        "MyIngress.rewrite_src_mac",
        &[("src_mac", "00:aa:bb:00:00:01")],
        0,
    )
    .unwrap();
    let entries = vec![
        src_mac,
        route(&schema, "10.0.1.0", 24, "10.0.1.10", "1"),
        route(&schema, "10.0.2.0", 24, "10.0.4.2", "2"),
    ];
    for entry in &entries {
        session.write(entry, WriteOp::Insert).await.unwrap();
    }

    let all = session.collect_table_entries(None).await.unwrap();
    assert_eq!(all.len(), 3);
    for entry in &entries {
        assert!(all.contains(entry));
    }

    let lpm_id = schema.table_id("MyIngress.ipv4_lpm").unwrap();
    let routes = session.collect_table_entries(Some(lpm_id)).await.unwrap();
    assert_eq!(routes.len(), 2);
    let decoded: Vec<String> = routes
        .iter()
        .map(|e| decode_table_entry(&schema, e).unwrap().to_string())
        .collect();
    let expected = concat!(
        "MyIngress.ipv4_lpm: hdr.ipv4.dstAddr 10.0.2.0/24 -> ",
        "MyIngress.ipv4_fwd nxt_hop 10.0.4.2 port 2"
    );
    assert!(decoded.contains(&expected.to_string()));

    // Each call reads afresh.
    let again = session.collect_table_entries(Some(lpm_id)).await.unwrap();
    assert_eq!(again, routes);
}

#[tokio::test]
async fn counters_read_back() {
    let agent = AgentSim::start(DEVICE_ID).unwrap();
    let schema = schema();
    let mut session = configured_session(&agent, &schema).await;

    agent.set_counter(COUNTER_ID, 2, 5, 490);
    let value = session.read_counter(COUNTER_ID, 2).await.unwrap();
    assert_eq!((value.packet_count, value.byte_count), (5, 490));
    assert_eq!(value.to_string(), "5 packets (490 bytes)");

    let untouched = session.read_counter(COUNTER_ID, 3).await.unwrap();
    assert_eq!((untouched.packet_count, untouched.byte_count), (0, 0));

    let err = session.read_counter(1, 0).await.unwrap_err();
    assert!(matches!(err, SessionError::NotFound(_)), "{}", err);
    let err = session.read_counter(COUNTER_ID, 64).await.unwrap_err();
    assert!(matches!(err, SessionError::NotFound(_)), "{}", err);

    let entry = route(&schema, "10.0.2.0", 24, "10.0.4.2", "2");
    let err = session.read_direct_counter(&entry).await.unwrap_err();
    assert!(matches!(err, SessionError::NotFound(_)), "{}", err);
    session.write(&entry, WriteOp::Insert).await.unwrap();
    agent.set_direct_counter(&entry, 7, 700);
    let value = session.read_direct_counter(&entry).await.unwrap();
    assert_eq!((value.packet_count, value.byte_count), (7, 700));
}

#[tokio::test]
async fn pipeline_rejected() {
    let agent = AgentSim::start(DEVICE_ID).unwrap();
    let schema = schema();
    let mut session = Session::open(&agent.address(), DEVICE_ID).await.unwrap();
    session.arbitrate().await.unwrap();

    let err = session
        .set_forwarding_pipeline_config(schema.p4info(), Vec::new())
        .await
        .unwrap_err();
    assert!(matches!(err, SessionError::Rejected { .. }), "{}", err);
    assert_eq!(session.state(), SessionState::Master);
}

#[tokio::test]
#[traced_test]
async fn transport_failure_is_permanent() {
    let agent = AgentSim::start(DEVICE_ID).unwrap();
    let schema = schema();
    let mut session = configured_session(&agent, &schema).await;

    agent.shutdown().await;

    let entry = route(&schema, "10.0.2.0", 24, "10.0.4.2", "2");
    let err = session.write(&entry, WriteOp::Insert).await.unwrap_err();
    assert!(err.is_transport(), "{}", err);
    assert_eq!(session.state(), SessionState::Closed);

    let err = session.read_counter(COUNTER_ID, 0).await.unwrap_err();
    assert!(err.is_transport(), "{}", err);
    let err = session.arbitrate().await.unwrap_err();
    assert!(err.is_transport(), "{}", err);
}

#[tokio::test]
async fn open_fails_without_agent() {
    let options = SessionOptions {
        connect_timeout: Duration::from_millis(200),
        ..Default::default()
    };
    let err = Session::open_with("127.0.0.1:1", DEVICE_ID, options)
        .await
        .err()
        .unwrap();
    assert!(err.is_transport(), "{}", err);
}

#[tokio::test]
async fn shutdown_releases_mastership() {
    let agent = AgentSim::start(DEVICE_ID).unwrap();
    let schema = schema();
    let mut session = configured_session(&agent, &schema).await;

    session.shutdown().await;
    assert_eq!(session.state(), SessionState::Closed);
    let entry = route(&schema, "10.0.2.0", 24, "10.0.4.2", "2");
    assert!(session.write(&entry, WriteOp::Insert).await.unwrap_err().is_transport());

    for _ in 0..50 {
        if agent.primary_election_id().is_none() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert_eq!(agent.primary_election_id(), None);
}

#[tokio::test]
async fn requests_are_dumped() {
    let agent = AgentSim::start(DEVICE_ID).unwrap();
    let schema = schema();
    let dir = tempfile::tempdir().unwrap();
    let dump_path = dir.path().join("r1-p4runtime-requests.txt");
    let options = SessionOptions {
        dump_path: Some(dump_path.clone()),
        ..Default::default()
    };

    let mut session = Session::open_with(&agent.address(), DEVICE_ID, options).await.unwrap();
    session.arbitrate().await.unwrap();
    session
        .set_forwarding_pipeline_config(schema.p4info(), b"{}".to_vec())
        .await
        .unwrap();
    let entry = route(&schema, "10.0.2.0", 24, "10.0.4.2", "2");
    session.write(&entry, WriteOp::Insert).await.unwrap();

    let dump = std::fs::read_to_string(&dump_path).unwrap();
    assert!(dump.contains("[ MasterArbitrationUpdate ]"));
    assert!(dump.contains("[ SetForwardingPipelineConfig ]"));
    assert!(dump.contains("[ Write ]"));
    assert!(dump.contains("table_id: 37375156"));
}
