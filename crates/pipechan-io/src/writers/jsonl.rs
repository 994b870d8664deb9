//! `Channel` -> JSON lines, one JSON array per row.

use std::io::Write;

use pipechan_core::Channel;

use crate::error::Result;

pub fn write_jsonl<W: Write>(chan: &Channel, mut writer: W) -> Result<()> {
    for row in chan {
        serde_json::to_writer(&mut writer, row)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}
