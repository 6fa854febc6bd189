use std::io::Write;

use anyhow::{Context, Result};
use log::info;
use orfkit_seq::{AnalyzedSequence, Strand};
use serde::Serialize;

use crate::cli::OutputFormat;

fn load_records(fasta: &str) -> Result<Vec<AnalyzedSequence>> {
    let records = orfkit_seq::load(fasta).with_context(|| format!("failed to load {}", fasta))?;
    info!("{}: {} records", fasta, records.len());
    Ok(records.into_iter().map(AnalyzedSequence::new).collect())
}

pub fn revcomp(fasta: &str, out: &mut impl Write) -> Result<()> {
    for seq in load_records(fasta)? {
        writeln!(out, "{}", seq.reverse_complement())?;
    }
    out.flush()?;
    Ok(())
}

pub fn orf(fasta: &str, out: &mut impl Write) -> Result<()> {
    for mut seq in load_records(fasta)? {
        writeln!(out, "{}", seq.longest_orf())?;
    }
    out.flush()?;
    Ok(())
}

pub fn translate(fasta: &str, out: &mut impl Write) -> Result<()> {
    for mut seq in load_records(fasta)? {
        writeln!(out, "{}", seq.translate())?;
    }
    out.flush()?;
    Ok(())
}

/// One row of `analyze` output.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct Report {
    record: usize,
    length: usize,
    strand: Option<Strand>,
    start: Option<usize>,
    end: Option<usize>,
    orf: String,
    protein: String,
}

fn report(record: usize, mut seq: AnalyzedSequence) -> Report {
    let protein = seq.translate().to_owned();
    let hit = seq.longest_orf_hit().cloned();
    Report {
        record,
        length: seq.char_len(),
        strand: hit.as_ref().map(|h| h.strand),
        start: hit.as_ref().map(|h| h.start),
        end: hit.as_ref().map(|h| h.end),
        orf: seq.longest_orf().to_owned(),
        protein,
    }
}

fn write_tsv(reports: &[Report], out: &mut impl Write) -> Result<()> {
    writeln!(out, "record\tlength\tstrand\tstart\tend\torf_length\torf\tprotein")?;
    for r in reports {
        let strand = match r.strand {
            Some(Strand::Forward) => "+",
            Some(Strand::Reverse) => "-",
            None => ".",
        };
        let coord = |c: Option<usize>| c.map_or_else(|| ".".to_string(), |c| c.to_string());
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            r.record,
            r.length,
            strand,
            coord(r.start),
            coord(r.end),
            r.orf.chars().count(),
            r.orf,
            r.protein
        )?;
    }
    Ok(())
}

pub fn analyze(fasta: &str, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    let reports: Vec<Report> = load_records(fasta)?
        .into_iter()
        .enumerate()
        .map(|(i, seq)| report(i + 1, seq))
        .collect();

    match format {
        OutputFormat::Tsv => write_tsv(&reports, out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &reports)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
