//! Data structures for the parsed variant report.

/// A sample declared in the report's `samples` section.
#[derive(Debug, Clone, Default)]
pub struct Sample {
    pub name: Option<String>,
    pub nucleic_acid_type: Option<String>,
}

/// One `copy-number-alteration` element, attribute values kept verbatim.
///
/// Optional source attributes stay `None` when absent; downstream code
/// checks field presence instead of re-reading the document.
#[derive(Debug, Clone, Default)]
pub struct RawCopyNumber {
    pub gene: Option<String>,
    /// `chromosome:start-end`, split by the extraction driver.
    pub position: Option<String>,
    pub copy_number: Option<String>,
    /// True iff the `equivocal` attribute is the string "true".
    pub equivocal: bool,
    /// The `type` attribute (amplification, loss, partial amplification).
    pub copy_type: Option<String>,
    pub number_of_exons: Option<String>,
    pub ratio: Option<f64>,
    /// The `status` attribute: the interpretation-status tag.
    pub status: Option<String>,
    /// The `sample` attribute of the `dna-evidence` child element.
    pub dna_evidence_sample: Option<String>,
}

/// The report's `variant-report` section, reduced to what extraction needs.
///
/// Repeated child elements accumulate into `Vec`s here, once; a
/// one-element vector is the source format's single-child case.
#[derive(Debug, Clone, Default)]
pub struct VariantReport {
    pub samples: Vec<Sample>,
    pub copy_number_alterations: Vec<RawCopyNumber>,
}
