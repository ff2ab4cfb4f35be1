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

//! Drives the controller against in-process agents.

use agent_sim::AgentSim;

use futures::future::{self, LocalBoxFuture};

use p4ext::{CounterValue, Schema, Session, SessionError};

use router_controller::config::{ControllerConfig, CounterWatch};
use router_controller::{poll_counters, run, CounterSource};

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::sleep;

const ROUTER: &str = include_str!("../../p4ext/tests/data/router.p4info.txt");
const COUNTER: &str = "MyIngress.c";

fn schema() -> Schema {
    Schema::from_text("router.p4info.txt", ROUTER).unwrap()
}

/// Counts up on every read and breaks on read number `fail_at`.
struct Scripted {
    reads: i64,
    fail_at: i64,
}

impl CounterSource for Scripted {
    fn read_counter(
        &mut self,
        _counter_id: u32,
        _index: i64,
    ) -> LocalBoxFuture<'_, Result<CounterValue, SessionError>> {
        self.reads += 1;
        let result = if self.reads == self.fail_at {
            Err(SessionError::Transport {
                target: "scripted".to_string(),
                message: "connection reset".to_string(),
            })
        } else {
            Ok(CounterValue {
                packet_count: self.reads * 10,
                byte_count: self.reads * 640,
            })
        };
        Box::pin(future::ready(result))
    }
}

fn watch_r1() -> Vec<CounterWatch> {
    vec![CounterWatch {
        device: "r1".to_string(),
        counter: COUNTER.to_string(),
        index: 1,
    }]
}

#[tokio::test]
async fn polling_stops_on_transport_failure() {
    let schema = schema();
    let mut sources = vec![("r1".to_string(), Scripted { reads: 0, fail_at: 3 })];
    let (_tx, rx) = watch::channel(false);
    let mut out = Vec::new();

    let period = Duration::from_millis(20);
    let err = poll_counters(&mut sources, &watch_r1(), &schema, period, rx, &mut out)
        .await
        .unwrap_err();
    assert!(err.downcast_ref::<SessionError>().unwrap().is_transport());
    assert!(format!("{:#}", err).contains("r1: reading counter MyIngress.c[1]"));

    let out = String::from_utf8(out).unwrap();
    assert_eq!(
        out,
        "\n----- Reading counters -----\n\
         r1 MyIngress.c 1: 10 packets (640 bytes)\n\
         \n----- Reading counters -----\n\
         r1 MyIngress.c 1: 20 packets (1280 bytes)\n\
         \n----- Reading counters -----\n"
    );
}

#[tokio::test]
async fn polling_ends_on_shutdown() {
    let schema = schema();
    let mut sources = vec![("r1".to_string(), Scripted { reads: 0, fail_at: i64::MAX })];
    let (tx, rx) = watch::channel(false);
    tokio::spawn(async move {
        sleep(Duration::from_millis(100)).await;
        tx.send_replace(true);
    });

    let mut out = Vec::new();
    poll_counters(&mut sources, &watch_r1(), &schema, Duration::from_millis(20), rx, &mut out)
        .await
        .unwrap();
    assert!(sources[0].1.reads >= 1);
}

#[tokio::test]
async fn polling_rejects_unknown_counter() {
    let schema = schema();
    let mut sources = vec![("r1".to_string(), Scripted { reads: 0, fail_at: 1 })];
    let mut watches = watch_r1();
    watches[0].counter = "MyIngress.missing".to_string();
    let (_tx, rx) = watch::channel(false);

    let period = Duration::from_millis(20);
    let err = poll_counters(&mut sources, &watches, &schema, period, rx, &mut Vec::new())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("MyIngress.missing"), "{}", err);
    assert_eq!(sources[0].1.reads, 0);
}

fn lab(r1: &AgentSim, r2: &AgentSim) -> ControllerConfig {
    let mut config = ControllerConfig::default();
    config.devices[0].address = r1.address();
    config.devices[1].address = r2.address();
    config.poll_interval_secs = 1;
    config
}

fn stop_after(delay: Duration) -> watch::Receiver<bool> {
    let (tx, rx) = watch::channel(false);
    tokio::spawn(async move {
        sleep(delay).await;
        tx.send_replace(true);
    });
    rx
}

/// Sets counter index 1 once the controller has pushed the pipeline, which
/// resets all counters.
async fn seed_counter(agent: &AgentSim, counter_id: u32, packets: i64, bytes: i64) {
    while agent.pipeline().is_none() {
        sleep(Duration::from_millis(10)).await;
    }
    agent.set_counter(counter_id, 1, packets, bytes);
}

fn position(out: &str, needle: &str) -> usize {
    out.find(needle).unwrap_or_else(|| panic!("{:?} not in output:\n{}", needle, out))
}

#[tokio::test]
async fn programs_both_routers_then_polls() {
    let r1 = AgentSim::start(1).unwrap();
    let r2 = AgentSim::start(2).unwrap();
    let schema = schema();
    let counter_id = schema.counter_id(COUNTER).unwrap();

    let config = lab(&r1, &r2);
    let dumps = tempfile::tempdir().unwrap();
    let shutdown = stop_after(Duration::from_millis(1500));

    let mut out = Vec::new();
    let (result, (), ()) = tokio::join!(
        run(&config, &schema, b"{}", Some(dumps.path()), shutdown, &mut out),
        seed_counter(&r1, counter_id, 5, 320),
        seed_counter(&r2, counter_id, 7, 448),
    );
    result.unwrap();
    let out = String::from_utf8(out).unwrap();

    for name in ["r1", "r2"] {
        let installed = "Installed P4 Program using SetForwardingPipelineConfig on";
        position(&out, &format!("{} {}", installed, name));
        assert_eq!(out.matches(&format!("{}: installed ", name)).count(), 8);
        let rule = |table: &str, action: &str| {
            let line = format!("{}: installed MyIngress.{} -> MyIngress.{}", name, table, action);
            position(&out, &line)
        };
        let src = rule("src_mac", "rewrite_src_mac");
        let dst = rule("dst_mac", "rewrite_dst_mac");
        let fwd = rule("ipv4_lpm", "ipv4_fwd");
        assert!(src < dst && dst < fwd);
        position(&out, &format!("\n----- Reading tables rules for {} -----\n", name));
        assert!(dumps.path().join(format!("{}-p4runtime-requests.txt", name)).exists());
    }
    position(
        &out,
        concat!(
            "MyIngress.ipv4_lpm: hdr.ipv4.dstAddr 10.0.1.0/24 -> ",
            "MyIngress.ipv4_fwd nxt_hop 10.0.4.3 port 2"
        ),
    );
    position(&out, "\n----- Reading counters -----\n");
    position(&out, "r1 MyIngress.c 1: 5 packets (320 bytes)\n");
    position(&out, "r2 MyIngress.c 1: 7 packets (448 bytes)\n");
    assert!(out.ends_with(" Shutting down.\n"));

    assert_eq!(r1.table_entries().len(), 8);
    assert_eq!(r2.table_entries().len(), 8);
    // Sessions are closed on the way out.
    for _ in 0..50 {
        if r1.primary_election_id().is_none() {
            break;
        }
        sleep(Duration::from_millis(20)).await;
    }
    assert_eq!(r1.primary_election_id(), None);

    r1.shutdown().await;
    r2.shutdown().await;
}

#[tokio::test]
async fn failed_device_does_not_block_the_other() {
    let r1 = AgentSim::start(1).unwrap();
    let r2 = AgentSim::start(2).unwrap();
    let schema = schema();
    let counter_id = schema.counter_id(COUNTER).unwrap();

    let mut squatter = Session::open(&r2.address(), 2).await.unwrap();
    squatter.arbitrate_as(u128::MAX).await.unwrap();

    let config = lab(&r1, &r2);
    let mut out = Vec::new();
    let shutdown = stop_after(Duration::from_millis(1500));
    let (result, ()) = tokio::join!(
        run(&config, &schema, b"{}", None, shutdown, &mut out),
        seed_counter(&r1, counter_id, 3, 192),
    );
    let err = result.unwrap_err();
    assert!(err.to_string().contains("could not start r2"), "{}", err);

    let out = String::from_utf8(out).unwrap();
    position(&out, "Installed P4 Program using SetForwardingPipelineConfig on r1");
    assert!(!out.contains("on r2"));
    assert!(!out.contains("r2: installed"));
    // r1 is still polled; r2's counters are left out.
    position(&out, "r1 MyIngress.c 1: 3 packets (192 bytes)\n");
    assert!(!out.contains("r2 MyIngress.c"));
    assert!(out.ends_with(" Shutting down.\n"));
    assert_eq!(r1.table_entries().len(), 8);
    assert!(r2.table_entries().is_empty());

    squatter.shutdown().await;
    r1.shutdown().await;
    r2.shutdown().await;
}

#[tokio::test]
async fn unanswered_device_times_out() {
    let r1 = AgentSim::start(1).unwrap();
    let r2 = AgentSim::start(2).unwrap();
    let schema = schema();
    r2.set_unresponsive(true);

    let mut config = lab(&r1, &r2);
    config.rpc_timeout_secs = 1;
    let mut out = Vec::new();
    let err = run(&config, &schema, b"{}", None, stop_after(Duration::from_millis(3000)), &mut out)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("could not start r2"), "{}", err);

    let out = String::from_utf8(out).unwrap();
    assert_eq!(out.matches("r1: installed ").count(), 8);
    position(&out, "r1 MyIngress.c 1: 0 packets (0 bytes)\n");
    assert!(r2.pipeline().is_none());

    r2.set_unresponsive(false);
    r1.shutdown().await;
    r2.shutdown().await;
}

#[tokio::test]
async fn shutdown_interrupts_startup() {
    let r1 = AgentSim::start(1).unwrap();
    let r2 = AgentSim::start(2).unwrap();
    let schema = schema();
    r1.set_unresponsive(true);
    r2.set_unresponsive(true);

    // The RPC deadline stays at its default, far beyond the test timeout.
    let config = lab(&r1, &r2);
    let mut out = Vec::new();
    let shutdown = stop_after(Duration::from_millis(300));
    tokio::time::timeout(
        Duration::from_secs(5),
        run(&config, &schema, b"{}", None, shutdown, &mut out),
    )
    .await
    .expect("run ignored shutdown")
    .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), " Shutting down.\n");
    assert!(r1.table_entries().is_empty());

    r1.set_unresponsive(false);
    r2.set_unresponsive(false);
    r1.shutdown().await;
    r2.shutdown().await;
}
