//! Execute a `Recipe`: build the source channel, apply each operator in
//! order, then write the sink (if any) and report what came out.

use std::fs::File;
use std::io::BufWriter;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use pipechan_core::config::{unescape_delimiter, ChannelConfig};
use pipechan_core::{Channel, Row};
use pipechan_io::writers::delimited::DelimitedWriter;
use pipechan_io::writers::jsonl::write_jsonl;
use pipechan_io::{from_args_with, from_file, from_pairs_with, from_path_with, ExpandExt};

use crate::error::{RecipeError, Result};
use crate::recipe::{Op, Recipe, Sink, SinkFormat, Source};

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub channel: Channel,
    pub width: usize,
    pub length: usize,
    pub digest: String,
    pub sink: Option<String>,
    pub started_ms: u64,
    pub finished_ms: u64,
}

impl RunReport {
    /// Wall-clock run time; 0 if the clock stepped backwards.
    pub fn duration_ms(&self) -> u64 {
        self.finished_ms.saturating_sub(self.started_ms)
    }
}

/// Build the channel described by `recipe` without writing the sink.
pub fn evaluate(recipe: &Recipe, cfg: &ChannelConfig) -> Result<Channel> {
    cfg.validate().map_err(pipechan_io::Error::from)?;
    let mut chan = build_source(&recipe.source, cfg)?;
    tracing::debug!(
        source = %recipe.source,
        rows = chan.length(),
        width = chan.width(),
        "source ready"
    );

    for (i, op) in recipe.ops.iter().enumerate() {
        chan = apply(chan, op, cfg).map_err(|e| RecipeError::step(i + 1, op.name(), e))?;
        tracing::trace!(step = i + 1, op = %op, rows = chan.length(), width = chan.width(), "applied");
    }
    Ok(chan)
}

/// Evaluate `recipe`, write its sink, and summarize the result.
pub fn run(recipe: &Recipe, cfg: &ChannelConfig) -> Result<RunReport> {
    let started_ms = now_millis();
    let channel = evaluate(recipe, cfg)?;

    if let Some(sink) = &recipe.sink {
        write_sink(&channel, sink, cfg)
            .map_err(|e| RecipeError::step(recipe.ops.len() + 1, "sink", e))?;
        tracing::debug!(sink = %sink, rows = channel.length(), "sink written");
    }

    let digest = channel.digest().map_err(pipechan_io::Error::from)?;
    Ok(RunReport {
        width: channel.width(),
        length: channel.length(),
        digest: digest.to_string(),
        sink: recipe.sink.as_ref().map(|s| s.destination.clone()),
        channel,
        started_ms,
        finished_ms: now_millis(),
    })
}

fn build_source(source: &Source, cfg: &ChannelConfig) -> Result<Channel> {
    let built = match source {
        Source::Create { values, rows } if values.is_empty() => {
            Channel::create(rows.iter().cloned().map(Row::new)).map_err(pipechan_io::Error::from)
        }
        Source::Create { values, .. } => {
            Channel::create(values.iter().cloned()).map_err(pipechan_io::Error::from)
        }
        Source::FromFile { path, delimiter } => {
            let delimiter = delimiter
                .as_deref()
                .map(unescape_delimiter)
                .unwrap_or_else(|| cfg.delimiter.clone());
            from_file(path, &delimiter)
        }
        Source::FromPath { pattern, kind } => from_path_with(pattern, *kind, cfg),
        Source::FromPairs { pattern } => from_pairs_with(pattern, cfg),
        Source::FromArgs { args } => from_args_with(args, cfg),
    };
    built.map_err(|e| RecipeError::step(0, source_name(source), e))
}

fn source_name(source: &Source) -> &'static str {
    match source {
        Source::Create { .. } => "create",
        Source::FromFile { .. } => "from_file",
        Source::FromPath { .. } => "from_path",
        Source::FromPairs { .. } => "from_pairs",
        Source::FromArgs { .. } => "from_args",
    }
}

fn apply(mut chan: Channel, op: &Op, cfg: &ChannelConfig) -> pipechan_io::Result<Channel> {
    match op {
        Op::Rbind { row } => {
            chan.rbind(row.clone())?;
        }
        Op::Cbind { values } => {
            chan.cbind(values.clone())?;
        }
        Op::Insert { index, values } => {
            chan.insert(*index, values.clone())?;
        }
        Op::Slice { start, len } => chan = chan.slice(*start, *len),
        Op::ColAt { index } => chan = chan.col_at(*index),
        Op::Fold { n } => chan = chan.fold(*n)?,
        Op::Unfold { n } => chan = chan.unfold(*n)?,
        Op::Expand { col, pattern } => {
            chan.expand_with(*col, pattern, cfg)?;
        }
        Op::Collapse { col } => chan = chan.collapse(*col)?,
        Op::FilterNonempty { col } => {
            chan = chan.filter(|r| r.get(*col).is_some_and(|c| !c.to_string().is_empty()))
        }
    }
    Ok(chan)
}

fn write_sink(chan: &Channel, sink: &Sink, cfg: &ChannelConfig) -> pipechan_io::Result<()> {
    match sink.format {
        SinkFormat::Tsv => {
            let delimiter = sink
                .delimiter
                .as_deref()
                .map(unescape_delimiter)
                .unwrap_or_else(|| cfg.delimiter.clone());
            let mut w = DelimitedWriter::to_path(&sink.destination, &delimiter)?;
            w.write_channel(chan)
        }
        SinkFormat::Jsonl => {
            let file = File::create(&sink.destination)?;
            write_jsonl(chan, BufWriter::new(file))
        }
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
