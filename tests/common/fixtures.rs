//! テストフィクスチャ

use std::{fs, path::PathBuf};

use tempfile::TempDir;

/// The two-volume document every golden output is built from.
#[allow(dead_code)]
pub const GOLDEN_VOLUMES: &str = r#"[
  {"volumeId": "vol-123", "volumeType": "gp2", "size": 100, "state": "available"},
  {"volumeId": "vol-456", "volumeType": "io1", "size": 70, "state": "available"}
]"#;

#[allow(dead_code)]
pub const GOLDEN_CSV: &str = "\
Volume ID,Type,Size (GB),State,Monthly Cost ($)
vol-123,gp2,100,available,10.00
vol-456,io1,70,available,8.75
Total,,,,18.75
";

/// Trimmed output of `aws ec2 describe-volumes`.
#[allow(dead_code)]
pub const DESCRIBE_VOLUMES: &str = r#"{
  "Volumes": [
    {
      "Attachments": [{"AttachTime": "2024-01-01T00:00:00.000Z", "Device": "/dev/xvda",
                       "InstanceId": "i-0123456789abcdef0", "State": "attached",
                       "VolumeId": "vol-0a1b2c3d", "DeleteOnTermination": true}],
      "AvailabilityZone": "us-east-1a",
      "CreateTime": "2024-01-01T00:00:00.000Z",
      "Encrypted": false,
      "Size": 8,
      "SnapshotId": "snap-0123",
      "State": "in-use",
      "VolumeId": "vol-0a1b2c3d",
      "Iops": 3000,
      "VolumeType": "gp3",
      "MultiAttachEnabled": false,
      "Throughput": 125
    },
    {
      "Attachments": [],
      "AvailabilityZone": "us-east-1b",
      "Encrypted": true,
      "Size": 500,
      "State": "available",
      "VolumeId": "vol-9f8e7d6c",
      "VolumeType": "st1"
    }
  ]
}"#;

/// Scratch directory for input and output files, removed on drop.
#[allow(dead_code)]
pub struct Workspace {
    dir: TempDir,
}

#[allow(dead_code)]
impl Workspace {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().expect("temp dir") }
    }

    pub fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
