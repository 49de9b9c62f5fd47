use std::io::Write;

use super::{OutputWriter, RoiReport};
use crate::errors::Result;
use crate::sweep::SweepReport;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: serde::Serialize>(&mut self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &RoiReport) -> Result<()> {
        self.write_json(report)
    }

    fn write_sweep(&mut self, sweep: &SweepReport) -> Result<()> {
        self.write_json(sweep)
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
