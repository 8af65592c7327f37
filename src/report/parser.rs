//! XML element parsers for the FoundationOne variant report.

use roxmltree::Node;

use crate::error::Error;

use super::record::{RawCopyNumber, Sample, VariantReport};

/// Find the first descendant element with the given local name.
///
/// The report wraps its payload in namespaced envelope elements
/// (`rr:ResultsReport`, `rr:ResultsPayload`); matching on local names
/// sidesteps the namespace tables entirely.
pub(super) fn find_descendant<'a, 'input>(
    node: Node<'a, 'input>,
    local_name: &str,
) -> Option<Node<'a, 'input>> {
    node.descendants()
        .find(|n| n.is_element() && n.tag_name().name() == local_name)
}

fn child_elements<'a, 'input>(
    node: Node<'a, 'input>,
    local_name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |n| n.is_element() && n.tag_name().name() == local_name)
}

/// Parse the `variant-report` element into typed records.
///
/// Absent or empty `samples` / `copy-number-alterations` sections are
/// not errors; they produce empty vectors.
pub(super) fn parse_variant_report(node: Node<'_, '_>) -> Result<VariantReport, Error> {
    let samples = match child_elements(node, "samples").next() {
        Some(samples_node) => child_elements(samples_node, "sample")
            .map(parse_sample)
            .collect(),
        None => Vec::new(),
    };

    let copy_number_alterations = match child_elements(node, "copy-number-alterations").next() {
        Some(alterations_node) => child_elements(alterations_node, "copy-number-alteration")
            .map(parse_copy_number)
            .collect::<Result<Vec<_>, Error>>()?,
        None => Vec::new(),
    };

    Ok(VariantReport {
        samples,
        copy_number_alterations,
    })
}

fn parse_sample(node: Node<'_, '_>) -> Sample {
    Sample {
        name: node.attribute("name").map(str::to_string),
        nucleic_acid_type: node.attribute("nucleic-acid-type").map(str::to_string),
    }
}

/// Parse one `copy-number-alteration` element.
///
/// Attributes outside the known set are ignored; required-field checks
/// happen downstream in the extraction driver.
fn parse_copy_number(node: Node<'_, '_>) -> Result<RawCopyNumber, Error> {
    let ratio = match node.attribute("ratio") {
        Some(value) => Some(
            value
                .parse::<f64>()
                .map_err(|e| Error::Format(format!("invalid ratio '{value}': {e}")))?,
        ),
        None => None,
    };

    let dna_evidence_sample = child_elements(node, "dna-evidence")
        .next()
        .and_then(|n| n.attribute("sample"))
        .map(str::to_string);

    Ok(RawCopyNumber {
        gene: node.attribute("gene").map(str::to_string),
        position: node.attribute("position").map(str::to_string),
        copy_number: node.attribute("copy-number").map(str::to_string),
        equivocal: node.attribute("equivocal") == Some("true"),
        copy_type: node.attribute("type").map(str::to_string),
        number_of_exons: node.attribute("number-of-exons").map(str::to_string),
        ratio,
        status: node.attribute("status").map(str::to_string),
        dna_evidence_sample,
    })
}
