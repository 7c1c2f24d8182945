// tests/common/mod.rs
//! 共通テストユーティリティ

pub mod fixtures;

#[allow(unused_imports)]
pub use fixtures::*;

use assert_cmd::Command;

/// `anhinga` with region variables cleared so the host environment cannot
/// leak into a test.
#[allow(dead_code)]
pub fn anhinga() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_anhinga"));
    cmd.env_remove("AWS_REGION").env_remove("AWS_DEFAULT_REGION").env_remove("RUST_LOG");
    cmd
}
