use std::io::Write;

use crate::domain::errors::OutputError;
use crate::domain::models::AddressRecord;

/// Renders collected records as tab-separated lines or a single JSON array
pub struct OutputService {
    json: bool,
}

impl OutputService {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn render<W: Write>(&self, records: &[AddressRecord], out: &mut W) -> Result<(), OutputError> {
        if self.json {
            let line = serde_json::to_string(records)?;
            writeln!(out, "{}", line)?;
        } else {
            for record in records {
                writeln!(out, "{}", record)?;
            }
        }
        out.flush()?;
        Ok(())
    }
}
