//! Extraction driver: normalizes raw copy-number records into output rows.

use serde::Serialize;

use crate::classify;
use crate::diagnostics::DiagnosticSink;
use crate::error::Error;
use crate::report::record::{RawCopyNumber, VariantReport};
use crate::sample;

/// Auxiliary attributes preserved verbatim from the source record.
///
/// Serializes as a JSON object; an absent field produces no key at all.
/// The `status` key carries the type tag and the `interpretation` key
/// the interpretation-status tag — distinct from the derived top-level
/// fields of the same names on [`CnvRecord`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CnvAttributes {
    #[serde(rename = "number-of-exons", skip_serializing_if = "Option::is_none")]
    pub number_of_exons: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<String>,
}

/// One normalized copy-number record.
///
/// Start and end positions stay verbatim strings from the position
/// split; only the copy number itself is numeric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CnvRecord {
    pub sample_id: Option<String>,
    pub gene: String,
    pub copy_number: f64,
    pub status: String,
    pub chromosome: String,
    pub start_position: String,
    pub end_position: String,
    pub interpretation: String,
    pub attributes: CnvAttributes,
}

/// The assembled output list, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CopyNumberList {
    #[serde(rename = "CopyNumbers")]
    pub copy_numbers: Vec<CnvRecord>,
}

/// Copy the optional source fields into the attributes bag.
#[must_use]
pub fn gather_attributes(record: &RawCopyNumber) -> CnvAttributes {
    CnvAttributes {
        number_of_exons: record.number_of_exons.clone(),
        status: record.copy_type.clone(),
        ratio: record.ratio,
        interpretation: record.status.clone(),
    }
}

/// Normalize every copy-number alteration in the report, in input order.
///
/// The fallback sample id is resolved once and applied to every record
/// that lacks its own dna-evidence sample. A record missing a required
/// field aborts the run; unrecognized enum tags only produce
/// diagnostics.
pub fn extract_copy_numbers(
    report: &VariantReport,
    sink: &mut dyn DiagnosticSink,
) -> Result<CopyNumberList, Error> {
    let fallback = sample::default_sample_id(&report.samples);

    let mut copy_numbers = Vec::with_capacity(report.copy_number_alterations.len());
    for (index, raw) in report.copy_number_alterations.iter().enumerate() {
        copy_numbers.push(normalize_record(raw, fallback, index, sink)?);
    }

    Ok(CopyNumberList { copy_numbers })
}

fn normalize_record(
    raw: &RawCopyNumber,
    fallback_sample: Option<&str>,
    index: usize,
    sink: &mut dyn DiagnosticSink,
) -> Result<CnvRecord, Error> {
    let sample_id = raw
        .dna_evidence_sample
        .clone()
        .or_else(|| fallback_sample.map(str::to_string));

    let gene = raw.gene.clone().ok_or_else(|| {
        Error::MalformedRecord(format!("copy-number-alteration {index} has no gene"))
    })?;

    let copy_number_text = raw.copy_number.as_deref().ok_or_else(|| {
        Error::MalformedRecord(format!(
            "copy-number-alteration {index} ({gene}) has no copy-number"
        ))
    })?;
    let copy_number: f64 = copy_number_text.parse().map_err(|e| {
        Error::Format(format!(
            "invalid copy-number '{copy_number_text}' for {gene}: {e}"
        ))
    })?;

    let position = raw.position.as_deref().ok_or_else(|| {
        Error::MalformedRecord(format!(
            "copy-number-alteration {index} ({gene}) has no position"
        ))
    })?;
    let (chromosome, start_position, end_position) = split_position(position, &gene)?;

    Ok(CnvRecord {
        sample_id,
        gene,
        copy_number,
        status: classify::copy_number_status(raw.copy_type.as_deref(), raw.equivocal, sink),
        chromosome,
        start_position,
        end_position,
        interpretation: classify::interpretation_label(raw.status.as_deref(), sink),
        attributes: gather_attributes(raw),
    })
}

/// Split a `chromosome:start-end` position into its three parts,
/// preserved as strings.
fn split_position(position: &str, gene: &str) -> Result<(String, String, String), Error> {
    let (chromosome, range) = position.split_once(':').ok_or_else(|| {
        Error::Format(format!(
            "position '{position}' for {gene} has no ':' separator"
        ))
    })?;
    let (start, end) = range.split_once('-').ok_or_else(|| {
        Error::Format(format!(
            "position '{position}' for {gene} has no '-' separator"
        ))
    })?;
    Ok((chromosome.to_string(), start.to_string(), end.to_string()))
}
