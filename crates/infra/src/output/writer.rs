// crates/infra/src/output/writer.rs
use std::{
    io::{self, Write},
    path::Path,
};

use anhinga_shared_kernel::InfraResult;

use crate::persistence::FileWriter;

/// Report sink: a file when a path is given, buffered stdout otherwise.
pub struct OutputWriter(Box<dyn Write>);

impl OutputWriter {
    pub fn create(path: Option<&Path>) -> InfraResult<Self> {
        let writer: Box<dyn Write> = if let Some(path) = path {
            Box::new(FileWriter::create(path)?)
        } else {
            Box::new(io::BufWriter::new(io::stdout()))
        };
        Ok(Self(writer))
    }
}

impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}
