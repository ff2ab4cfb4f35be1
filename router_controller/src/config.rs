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

//! Controller configuration: the devices to program, the rules each one gets
//! and the counters to poll.  Read from JSON; the default is the two-router
//! lab.

use anyhow::{anyhow, bail, Context, Result};

use serde::{Deserialize, Serialize};

use std::collections::{HashMap, HashSet};
use std::fs;
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SrcMac {
    /// Egress port.
    pub port: u16,
    pub mac: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Route {
    /// Destination prefix, `a.b.c.d/len`.
    pub prefix: String,
    pub next_hop: String,
    pub port: u16,
    /// MAC address of `next_hop`.
    pub dst_mac: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct DeviceConfig {
    pub name: String,
    /// P4Runtime agent, `host:port`.
    pub address: String,
    pub device_id: u64,
    /// Where to dump the requests sent to this device.  Overrides the
    /// command line's dump directory.
    #[serde(default)]
    pub proto_dump: Option<PathBuf>,
    #[serde(default)]
    pub src_macs: Vec<SrcMac>,
    #[serde(default)]
    pub routes: Vec<Route>,
}

/// One counter cell to report on every poll.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct CounterWatch {
    pub device: String,
    pub counter: String,
    pub index: i64,
}

fn default_poll_interval() -> u64 {
    10
}

fn default_read_back() -> bool {
    true
}

fn default_rpc_timeout() -> u64 {
    30
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ControllerConfig {
    pub devices: Vec<DeviceConfig>,
    #[serde(default)]
    pub counters: Vec<CounterWatch>,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
    #[serde(default = "default_read_back")]
    pub read_back: bool,
    /// Deadline for each pipeline push, write and read.
    #[serde(default = "default_rpc_timeout")]
    pub rpc_timeout_secs: u64,
}

fn src_mac(port: u16, mac: &str) -> SrcMac {
    SrcMac {
        port,
        mac: mac.to_string(),
    }
}

fn route(prefix: &str, next_hop: &str, port: u16, dst_mac: &str) -> Route {
    Route {
        prefix: prefix.to_string(),
        next_hop: next_hop.to_string(),
        port,
        dst_mac: dst_mac.to_string(),
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        let r1 = DeviceConfig {
            name: "r1".to_string(),
            address: "127.0.0.1:50051".to_string(),
            device_id: 1,
            proto_dump: None,
            src_macs: vec![src_mac(1, "00:bb:bb:00:01:01"), src_mac(2, "00:bb:bb:00:01:02")],
            routes: vec![
                route("10.0.1.10/32", "10.0.1.10", 1, "00:aa:00:00:01:01"),
                route("10.0.1.20/32", "10.0.1.20", 1, "00:aa:00:00:01:02"),
                route("10.0.2.0/24", "10.0.4.2", 2, "00:bb:bb:00:02:02"),
            ],
        };
        let r2 = DeviceConfig {
            name: "r2".to_string(),
            address: "127.0.0.1:50052".to_string(),
            device_id: 2,
            proto_dump: None,
            src_macs: vec![src_mac(1, "00:bb:bb:00:02:01"), src_mac(2, "00:bb:bb:00:02:02")],
            routes: vec![
                route("10.0.2.10/32", "10.0.2.10", 1, "00:aa:00:00:02:01"),
                route("10.0.2.20/32", "10.0.2.20", 1, "00:aa:00:00:02:02"),
                route("10.0.1.0/24", "10.0.4.3", 2, "00:bb:bb:00:01:02"),
            ],
        };
        let counters = ["r1", "r2"]
            .iter()
            .map(|device| CounterWatch {
                device: device.to_string(),
                counter: "MyIngress.c".to_string(),
                index: 1,
            })
            .collect();
        ControllerConfig {
            devices: vec![r1, r2],
            counters,
            poll_interval_secs: default_poll_interval(),
            read_back: default_read_back(),
            rpc_timeout_secs: default_rpc_timeout(),
        }
    }
}

fn check_mac(mac: &str) -> Result<()> {
    let octets: Vec<&str> = mac.split(':').collect();
    let bad_octet = |o: &&str| o.len() != 2 || u8::from_str_radix(o, 16).is_err();
    if octets.len() != 6 || octets.iter().any(bad_octet) {
        bail!("{:?} is not a MAC address", mac);
    }
    Ok(())
}

fn check_prefix(prefix: &str) -> Result<()> {
    let (address, len) = prefix
        .split_once('/')
        .ok_or_else(|| anyhow!("{:?} is not an a.b.c.d/len prefix", prefix))?;
    address
        .parse::<Ipv4Addr>()
        .with_context(|| format!("bad address in prefix {:?}", prefix))?;
    match len.parse::<u32>() {
        Ok(len) if len <= 32 => Ok(()),
        _ => bail!("bad prefix length in {:?}", prefix),
    }
}

impl ControllerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<ControllerConfig> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("{}: could not read configuration", path.display()))?;
        let config: ControllerConfig = serde_json::from_str(&text)
            .with_context(|| format!("{}: could not parse configuration", path.display()))?;
        config
            .validate()
            .with_context(|| format!("{}: invalid configuration", path.display()))?;
        Ok(config)
    }

    pub fn device(&self, name: &str) -> Option<&DeviceConfig> {
        self.devices.iter().find(|d| d.name == name)
    }

    /// Checks the configuration for problems that would otherwise only show
    /// up halfway through programming a device.
    pub fn validate(&self) -> Result<()> {
        if self.poll_interval_secs == 0 {
            bail!("poll interval must be at least one second");
        }
        if self.rpc_timeout_secs == 0 {
            bail!("RPC timeout must be at least one second");
        }

        let mut names = HashSet::new();
        let mut ids = HashSet::new();
        for d in &self.devices {
            if !names.insert(d.name.as_str()) {
                bail!("device name {} is used more than once", d.name);
            }
            if !ids.insert(d.device_id) {
                bail!("device id {} is used more than once", d.device_id);
            }
            if d.address.is_empty() {
                bail!("{}: missing address", d.name);
            }

            for s in &d.src_macs {
                check_mac(&s.mac)
                    .with_context(|| format!("{}: source MAC for port {}", d.name, s.port))?;
            }

            let mut next_hops: HashMap<&str, &str> = HashMap::new();
            for r in &d.routes {
                check_prefix(&r.prefix).with_context(|| format!("{}: route {}", d.name, r.prefix))?;
                r.next_hop.parse::<Ipv4Addr>().with_context(|| {
                    format!("{}: route {}: bad next hop {:?}", d.name, r.prefix, r.next_hop)
                })?;
                check_mac(&r.dst_mac).with_context(|| format!("{}: route {}", d.name, r.prefix))?;
                if let Some(other) = next_hops.insert(&r.next_hop, &r.dst_mac) {
                    if other != r.dst_mac {
                        bail!(
                            "{}: next hop {} has conflicting MAC addresses {} and {}",
                            d.name,
                            r.next_hop,
                            other,
                            r.dst_mac
                        );
                    }
                }
            }
        }

        for c in &self.counters {
            if !names.contains(c.device.as_str()) {
                bail!("counter {} names unknown device {}", c.counter, c.device);
            }
            if c.index < 0 {
                bail!("counter {} has negative index {}", c.counter, c.index);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_lab() {
        let config = ControllerConfig::default();
        config.validate().unwrap();
        assert_eq!(config.devices.len(), 2);
        assert_eq!(config.device("r2").unwrap().address, "127.0.0.1:50052");
        assert_eq!(config.device("r1").unwrap().routes[2].next_hop, "10.0.4.2");
        assert_eq!(config.counters.len(), 2);
        assert_eq!(config.poll_interval_secs, 10);
        assert!(config.read_back);
    }

    #[test]
    fn loads_json_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lab.json");
        fs::write(
            &path,
            r#"{
                "devices": [{
                    "name": "edge",
                    "address": "10.1.1.1:9559",
                    "device_id": 7,
                    "routes": [{"prefix": "0.0.0.0/0", "next_hop": "10.1.1.254", "port": 3,
                                "dst_mac": "00:11:22:33:44:55"}]
                }]
            }"#,
        )
        .unwrap();

        let config = ControllerConfig::load(&path).unwrap();
        assert_eq!(config.devices[0].device_id, 7);
        assert!(config.devices[0].src_macs.is_empty());
        assert!(config.counters.is_empty());
        assert_eq!(config.poll_interval_secs, 10);
        assert!(config.read_back);
        assert_eq!(config.rpc_timeout_secs, 30);

        let err = ControllerConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("could not read"), "{}", err);
    }

    #[test]
    fn rejects_bad_configurations() {
        let check = |edit: &dyn Fn(&mut ControllerConfig), needle: &str| {
            let mut config = ControllerConfig::default();
            edit(&mut config);
            let err = config.validate().unwrap_err();
            assert!(format!("{:#}", err).contains(needle), "{:#}", err);
        };

        check(&|c| c.devices[1].name = "r1".to_string(), "name r1 is used more than once");
        check(&|c| c.devices[1].device_id = 1, "device id 1");
        check(&|c| c.counters[0].device = "r3".to_string(), "unknown device r3");
        check(&|c| c.devices[0].routes[0].prefix = "10.0.1.10".to_string(), "not an a.b.c.d/len");
        check(&|c| c.devices[0].routes[0].prefix = "10.0.1.10/33".to_string(), "bad prefix length");
        check(&|c| c.devices[0].routes[0].next_hop = "r2".to_string(), "bad next hop");
        check(&|c| c.devices[0].src_macs[0].mac = "00:bb:bb:00:01".to_string(), "not a MAC");
        check(
            &|c| {
                let mut r = c.devices[0].routes[0].clone();
                r.prefix = "10.0.9.0/24".to_string();
                r.dst_mac = "00:aa:00:00:09:09".to_string();
                c.devices[0].routes.push(r);
            },
            "conflicting MAC addresses",
        );
        check(&|c| c.poll_interval_secs = 0, "poll interval");
        check(&|c| c.rpc_timeout_secs = 0, "RPC timeout");
    }
}
