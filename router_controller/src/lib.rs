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

//! Brings up a set of P4Runtime devices running the static router pipeline:
//! claims mastership, pushes the pipeline, installs the configured routes,
//! reads the tables back and then polls counters until told to stop.

pub mod config;

use anyhow::{anyhow, bail, Context, Result};

use config::{ControllerConfig, CounterWatch, DeviceConfig};

use futures::future::{join_all, LocalBoxFuture};
use futures::Future;

use itertools::Itertools;

use p4ext::{
    build_table_entry,
    decode_table_entry,
    CodecError,
    CounterValue,
    MatchValue,
    Schema,
    Session,
    SessionError,
    SessionOptions,
    WriteOp,
};

use proto::p4info::P4Info;
use proto::p4runtime::TableEntry;

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use tracing::{debug, error, info};

const SRC_MAC_TABLE: &str = "MyIngress.src_mac";
const DST_MAC_TABLE: &str = "MyIngress.dst_mac";
const IPV4_LPM_TABLE: &str = "MyIngress.ipv4_lpm";
const REWRITE_SRC_MAC: &str = "MyIngress.rewrite_src_mac";
const REWRITE_DST_MAC: &str = "MyIngress.rewrite_dst_mac";
const IPV4_FWD: &str = "MyIngress.ipv4_fwd";

/// A table entry together with the names used to report it.
#[derive(Clone, Debug)]
pub struct Rule {
    pub table: &'static str,
    pub action: &'static str,
    pub entry: TableEntry,
}

impl Rule {
    fn new(
        schema: &Schema,
        table: &'static str,
        matches: &[(&str, MatchValue)],
        action: &'static str,
        params: &[(&str, &str)],
    ) -> Result<Rule, CodecError> {
        Ok(Rule {
            table,
            action,
            entry: build_table_entry(schema, table, matches, action, params, 0)?,
        })
    }
}

/// Returns the rules for `device` in installation order: source MAC
/// rewrites, then one destination MAC rewrite per distinct next hop, then
/// the routes themselves.
pub fn device_rules(schema: &Schema, device: &DeviceConfig) -> Result<Vec<Rule>, CodecError> {
    let mut rules = Vec::new();
    for s in &device.src_macs {
        let port = s.port.to_string();
        rules.push(Rule::new(
            schema,
            SRC_MAC_TABLE,
            &[("standard_metadata.egress_spec", MatchValue::exact(port))],
            REWRITE_SRC_MAC,
            &[("src_mac", s.mac.as_str())],
        )?);
    }
    for r in device.routes.iter().unique_by(|r| &r.next_hop) {
        rules.push(Rule::new(
            schema,
            DST_MAC_TABLE,
            &[("meta.next_hop_ipv4", MatchValue::exact(r.next_hop.as_str()))],
            REWRITE_DST_MAC,
            &[("dst_mac", r.dst_mac.as_str())],
        )?);
    }
    for r in &device.routes {
        let port = r.port.to_string();
        rules.push(Rule::new(
            schema,
            IPV4_LPM_TABLE,
            &[("hdr.ipv4.dstAddr", MatchValue::from_cidr(&r.prefix)?)],
            IPV4_FWD,
            &[("nxt_hop", r.next_hop.as_str()), ("port", port.as_str())],
        )?);
    }
    Ok(rules)
}

/// Opens a session to `device`, becomes primary and pushes the pipeline.
/// Each RPC gets `rpc_timeout`.
pub async fn start_device(
    device: &DeviceConfig,
    p4info: &P4Info,
    device_config: &[u8],
    dump_dir: Option<&Path>,
    rpc_timeout: Duration,
) -> Result<Session, SessionError> {
    let dump_path = device.proto_dump.clone().or_else(|| {
        dump_dir.map(|dir| dir.join(format!("{}-p4runtime-requests.txt", device.name)))
    });
    let options = SessionOptions {
        dump_path,
        rpc_timeout,
        ..Default::default()
    };

    let mut session = Session::open_with(&device.address, device.device_id, options).await?;
    let election_id = session.arbitrate().await?;
    debug!("{}: primary with election id {}", device.name, election_id);
    session
        .set_forwarding_pipeline_config(p4info, device_config.to_vec())
        .await?;
    Ok(session)
}

/// Starts every configured device concurrently.  Each device's outcome is
/// reported separately, in configuration order.
pub async fn start_devices(
    config: &ControllerConfig,
    p4info: &P4Info,
    device_config: &[u8],
    dump_dir: Option<&Path>,
) -> Vec<(String, Result<Session, SessionError>)> {
    let rpc_timeout = Duration::from_secs(config.rpc_timeout_secs);
    join_all(config.devices.iter().map(|device| async move {
        let result = start_device(device, p4info, device_config, dump_dir, rpc_timeout).await;
        (device.name.clone(), result)
    }))
    .await
}

pub async fn install_rules<W: Write>(
    name: &str,
    session: &mut Session,
    rules: &[Rule],
    out: &mut W,
) -> Result<()> {
    for rule in rules {
        session
            .write(&rule.entry, WriteOp::Insert)
            .await
            .with_context(|| format!("{}: installing {} -> {}", name, rule.table, rule.action))?;
        writeln!(out, "{}: installed {} -> {}", name, rule.table, rule.action)?;
    }
    info!("{}: installed {} rules", name, rules.len());
    Ok(())
}

/// Prints every table entry currently installed on the device.
pub async fn read_back<W: Write>(
    name: &str,
    session: &mut Session,
    schema: &Schema,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "\n----- Reading tables rules for {} -----", name)?;
    let entries = session
        .collect_table_entries(None)
        .await
        .with_context(|| format!("{}: reading table entries", name))?;
    for entry in &entries {
        writeln!(out, "{}", decode_table_entry(schema, entry)?)?;
    }
    Ok(())
}

/// Something counters can be read from.
pub trait CounterSource {
    fn read_counter(
        &mut self,
        counter_id: u32,
        index: i64,
    ) -> LocalBoxFuture<'_, Result<CounterValue, SessionError>>;
}

impl CounterSource for Session {
    fn read_counter(
        &mut self,
        counter_id: u32,
        index: i64,
    ) -> LocalBoxFuture<'_, Result<CounterValue, SessionError>> {
        Box::pin(Session::read_counter(self, counter_id, index))
    }
}

/// Waits until `shutdown` turns true or its sender goes away.
async fn stopped(shutdown: &mut watch::Receiver<bool>) {
    while !*shutdown.borrow() {
        if shutdown.changed().await.is_err() {
            return;
        }
    }
}

/// Runs `step` unless `shutdown` fires first, in which case `step` is
/// dropped and `None` returned.
async fn unless_stopped<T, F: Future<Output = T>>(
    shutdown: &mut watch::Receiver<bool>,
    step: F,
) -> Option<T> {
    tokio::select! {
        result = step => Some(result),
        _ = stopped(shutdown) => None,
    }
}

/// Reads every watched counter once per `period` and prints it.  Returns
/// `Ok` once `shutdown` fires and an error as soon as any read fails.
pub async fn poll_counters<S: CounterSource, W: Write>(
    sources: &mut [(String, S)],
    watches: &[CounterWatch],
    schema: &Schema,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
    out: &mut W,
) -> Result<()> {
    let watches = watches
        .iter()
        .map(|w| -> Result<(usize, u32, &CounterWatch)> {
            let source = sources
                .iter()
                .position(|(name, _)| *name == w.device)
                .ok_or_else(|| anyhow!("counter {} names unknown device {}", w.counter, w.device))?;
            let counter_id = schema.counter_id(&w.counter)?;
            Ok((source, counter_id, w))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        tokio::select! {
            _ = ticker.tick() => (),
            _ = stopped(&mut shutdown) => return Ok(()),
        }

        writeln!(out, "\n----- Reading counters -----")?;
        for (source, counter_id, w) in &watches {
            let (name, source) = &mut sources[*source];
            let value = tokio::select! {
                value = source.read_counter(*counter_id, w.index) => value,
                _ = stopped(&mut shutdown) => return Ok(()),
            };
            let value = value
                .with_context(|| format!("{}: reading counter {}[{}]", name, w.counter, w.index))?;
            writeln!(out, "{} {} {}: {}", name, w.counter, w.index, value)?;
        }
    }
}

/// Installs the rules on every started device, reads them back and polls
/// counters.  `Ok` means `shutdown` fired.
async fn program_devices<W: Write>(
    config: &ControllerConfig,
    schema: &Schema,
    devices: &mut [(String, Session)],
    failed: &[String],
    mut shutdown: watch::Receiver<bool>,
    out: &mut W,
) -> Result<()> {
    if devices.is_empty() {
        bail!("could not start {}", failed.join(", "));
    }

    for (name, session) in devices.iter_mut() {
        let device = config
            .device(name)
            .ok_or_else(|| anyhow!("{}: not in configuration", name))?;
        let rules = device_rules(schema, device)
            .with_context(|| format!("{}: building rules", name))?;
        match unless_stopped(&mut shutdown, install_rules(name, session, &rules, out)).await {
            Some(result) => result?,
            None => return Ok(()),
        }
    }

    if config.read_back {
        for (name, session) in devices.iter_mut() {
            match unless_stopped(&mut shutdown, read_back(name, session, schema, out)).await {
                Some(result) => result?,
                None => return Ok(()),
            }
        }
    }

    // Counters of devices that never started are not polled.
    let watches: Vec<CounterWatch> = config
        .counters
        .iter()
        .filter(|w| !failed.contains(&w.device))
        .cloned()
        .collect();
    poll_counters(
        devices,
        &watches,
        schema,
        Duration::from_secs(config.poll_interval_secs),
        shutdown,
        out,
    )
    .await
}

/// Runs the controller until `shutdown` fires or something fails.  Progress
/// goes to `out`.
///
/// A device that cannot be started does not hold up the others; the run
/// still fails once it ends, naming every such device.
pub async fn run<W: Write>(
    config: &ControllerConfig,
    schema: &Schema,
    device_config: &[u8],
    dump_dir: Option<&Path>,
    mut shutdown: watch::Receiver<bool>,
    out: &mut W,
) -> Result<()> {
    config.validate()?;

    let started = start_devices(config, schema.p4info(), device_config, dump_dir);
    let started = match unless_stopped(&mut shutdown, started).await {
        Some(started) => started,
        None => {
            info!("stopped during startup");
            writeln!(out, " Shutting down.")?;
            return Ok(());
        }
    };

    let mut devices = Vec::new();
    let mut failed = Vec::new();
    for (name, result) in started {
        match result {
            Ok(session) => {
                writeln!(
                    out,
                    "Installed P4 Program using SetForwardingPipelineConfig on {}",
                    name
                )?;
                devices.push((name, session));
            }
            Err(e) => {
                error!("{}: startup failed: {}", name, e);
                failed.push(name);
            }
        }
    }

    let result = program_devices(config, schema, &mut devices, &failed, shutdown, out).await;
    for (_, session) in devices.iter_mut() {
        session.shutdown().await;
    }
    result?;
    writeln!(out, " Shutting down.")?;
    if !failed.is_empty() {
        bail!("could not start {}", failed.join(", "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use agent_sim::AgentSim;

    use tracing_test::traced_test;

    const ROUTER: &str = include_str!("../../p4ext/tests/data/router.p4info.txt");

    fn schema() -> Schema {
        Schema::from_text("router.p4info.txt", ROUTER).unwrap()
    }

    fn summary(rules: &[Rule], schema: &Schema) -> Vec<String> {
        rules
            .iter()
            .map(|r| decode_table_entry(schema, &r.entry).unwrap().to_string())
            .collect()
    }

    #[test]
    fn rules_in_install_order() {
        let schema = schema();
        let config = ControllerConfig::default();
        let rules = device_rules(&schema, config.device("r1").unwrap()).unwrap();

        let tables: Vec<&str> = rules.iter().map(|r| r.table).collect();
        assert_eq!(
            tables,
            vec![
                SRC_MAC_TABLE,
                SRC_MAC_TABLE,
                DST_MAC_TABLE,
                DST_MAC_TABLE,
                DST_MAC_TABLE,
                IPV4_LPM_TABLE,
                IPV4_LPM_TABLE,
                IPV4_LPM_TABLE
            ]
        );

        let summary = summary(&rules, &schema);
        assert_eq!(
            summary[0],
            concat!(
                "MyIngress.src_mac: standard_metadata.egress_spec 1 -> ",
                "MyIngress.rewrite_src_mac src_mac 00:bb:bb:00:01:01"
            )
        );
        assert_eq!(
            summary[7],
            concat!(
                "MyIngress.ipv4_lpm: hdr.ipv4.dstAddr 10.0.2.0/24 -> ",
                "MyIngress.ipv4_fwd nxt_hop 10.0.4.2 port 2"
            )
        );
    }

    #[test]
    fn one_dst_mac_rule_per_next_hop() {
        let schema = schema();
        let mut config = ControllerConfig::default();
        let r1 = &mut config.devices[0];
        let mut extra = r1.routes[2].clone();
        extra.prefix = "10.0.3.0/24".to_string();
        r1.routes.push(extra);
        config.validate().unwrap();

        let rules = device_rules(&schema, config.device("r1").unwrap()).unwrap();
        assert_eq!(rules.iter().filter(|r| r.table == DST_MAC_TABLE).count(), 3);
        assert_eq!(rules.iter().filter(|r| r.table == IPV4_LPM_TABLE).count(), 4);
    }

    #[test]
    fn bad_route_is_a_codec_error() {
        let schema = schema();
        let mut config = ControllerConfig::default();
        config.devices[0].routes[0].prefix = "10.0.1.300/32".to_string();
        assert!(device_rules(&schema, &config.devices[0]).is_err());
    }

    #[tokio::test]
    #[traced_test]
    async fn start_and_install_one_device() {
        let agent = AgentSim::start(1).unwrap();
        let schema = schema();
        let mut config = ControllerConfig::default();
        config.devices[0].address = agent.address();
        let device = config.device("r1").unwrap();

        let timeout = Duration::from_secs(config.rpc_timeout_secs);
        let mut session = start_device(device, schema.p4info(), b"{}", None, timeout)
            .await
            .unwrap();
        let rules = device_rules(&schema, device).unwrap();
        let mut out = Vec::new();
        install_rules("r1", &mut session, &rules, &mut out).await.unwrap();
        assert!(logs_contain("r1: installed 8 rules"));
        assert_eq!(agent.table_entries().len(), 8);

        // Installing the same rules again trips over the first duplicate.
        let err = install_rules("r1", &mut session, &rules, &mut out)
            .await
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("r1: installing MyIngress.src_mac -> MyIngress.rewrite_src_mac"));
        assert_eq!(
            err.downcast_ref::<SessionError>().unwrap().write_kind(),
            Some(p4ext::WriteErrorKind::Duplicate)
        );

        session.shutdown().await;
        agent.shutdown().await;
    }
}
