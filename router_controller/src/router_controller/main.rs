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

use anyhow::{Context, Result};

use clap::{CommandFactory, Parser};

use p4ext::Schema;

use router_controller::config::ControllerConfig;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::watch;

use tracing::{debug, Level};

#[derive(Parser, Debug)]
#[clap(version, about = "Programs P4Runtime routers and reports their counters")]
struct Args {
    /// P4Info file produced by p4c, in text or binary form
    #[clap(long, default_value = "build/s-router.p4.p4info.txt")]
    p4info: PathBuf,

    /// BMv2 JSON file produced by p4c
    #[clap(long, default_value = "build/s-router.json")]
    bmv2_json: PathBuf,

    /// JSON device configuration; the built-in two-router lab if omitted
    #[clap(long)]
    config: Option<PathBuf>,

    /// Directory for per-device request dumps
    #[clap(long)]
    proto_dump_dir: Option<PathBuf>,

    /// Seconds between counter reads
    #[clap(long)]
    poll_interval: Option<u64>,

    /// Deadline in seconds for each P4Runtime call
    #[clap(long)]
    rpc_timeout: Option<u64>,

    /// Skip reading the tables back after installing rules
    #[clap(long)]
    no_read_back: bool,

    #[clap(short, long)]
    verbose: bool,
}

fn require_file(path: &Path, what: &str) {
    if !path.exists() {
        if let Err(e) = Args::command().write_help(&mut io::stderr()) {
            debug!("could not print usage: {}", e);
        }
        eprintln!("\n{} not found: {}", what, path.display());
        process::exit(1);
    }
}

async fn shutdown_signal() -> io::Result<()> {
    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => result,
        _ = terminate.recv() => Ok(()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    require_file(&args.p4info, "p4info file");
    require_file(&args.bmv2_json, "BMv2 JSON file");

    let mut config = match &args.config {
        Some(path) => ControllerConfig::load(path)?,
        None => ControllerConfig::default(),
    };
    if let Some(secs) = args.poll_interval {
        config.poll_interval_secs = secs;
    }
    if let Some(secs) = args.rpc_timeout {
        config.rpc_timeout_secs = secs;
    }
    if args.no_read_back {
        config.read_back = false;
    }

    let schema = Schema::load(&args.p4info)?;
    let device_config = fs::read(&args.bmv2_json)
        .with_context(|| format!("{}: could not read BMv2 JSON", args.bmv2_json.display()))?;
    if let Some(dir) = &args.proto_dump_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("{}: could not create dump directory", dir.display()))?;
    }

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if let Err(e) = shutdown_signal().await {
            debug!("signal handling unavailable: {}", e);
            shutdown_tx.closed().await;
            return;
        }
        shutdown_tx.send_replace(true);
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();
    router_controller::run(
        &config,
        &schema,
        &device_config,
        args.proto_dump_dir.as_deref(),
        shutdown_rx,
        &mut out,
    )
    .await
}
