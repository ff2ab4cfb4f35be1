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

//! Generates the P4Runtime message and service bindings into `src/`.
//!
//! The `.proto` files are parsed in-process so that building does not need a
//! `protoc` binary on the host.

use protobuf_codegen::Customize;

use std::fs;
use std::io;
use std::path::Path;

const OUT_DIR: &str = "src";

fn main() -> io::Result<()> {
    let protos = [
        ("p4runtime/proto", "p4/v1/p4runtime.proto"),
        ("p4runtime/proto", "p4/config/v1/p4info.proto"),
        ("p4runtime/proto", "p4/config/v1/p4types.proto"),
        ("googleapis", "google/rpc/status.proto"),
    ];
    for proto in &protos {
        println!("cargo:rerun-if-changed={}/{}", proto.0, proto.1);
    }

    let includes = [Path::new("p4runtime/proto"), Path::new("googleapis")];
    let inputs: Vec<_> = protos
        .iter()
        .map(|x| Path::new(x.0).join(x.1))
        .collect();
    let inputs: Vec<&Path> = inputs.iter().map(|p| p.as_path()).collect();

    let parsed = protobuf_codegen_pure::parse_and_typecheck(&includes, &inputs)?;

    // Service stubs first; files without a service produce nothing here.
    for result in grpcio_compiler::codegen::gen(&parsed.file_descriptors, &parsed.relative_paths) {
        fs::write(Path::new(OUT_DIR).join(&result.name), &result.content)?;
    }

    protobuf_codegen::gen_and_write(
        &parsed.file_descriptors,
        &parsed.relative_paths,
        Path::new(OUT_DIR),
        &Customize::default(),
    )
}
