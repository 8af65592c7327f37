//! FoundationOne XML report parser: reduces a report to typed CNV records.

pub mod parser;
pub mod record;

use crate::error::Error;

use record::VariantReport;

/// Parse a FoundationOne XML report down to its `variant-report` section.
///
/// The `variant-report` element is located by local name anywhere under
/// the `ResultsReport`/`ResultsPayload` envelope; a report without one
/// is malformed.
pub fn parse_report(text: &str) -> Result<VariantReport, Error> {
    let document = roxmltree::Document::parse(text)
        .map_err(|e| Error::Parse(format!("malformed XML document: {e}")))?;

    let variant_report = parser::find_descendant(document.root_element(), "variant-report")
        .ok_or_else(|| Error::Parse("report has no variant-report section".to_string()))?;

    parser::parse_variant_report(variant_report)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORKED_EXAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<rr:ResultsReport xmlns:rr="http://integration.foundationmedicine.com/reporting">
  <rr:ResultsPayload>
    <FinalReport>
      <Sample>
        <TestType>Test 1</TestType>
      </Sample>
    </FinalReport>
    <variant-report xmlns="http://foundationmedicine.com/compbio/variant-report-external"
        disease="Sarcoma" gender="female">
      <samples>
        <sample name="SA-1612348" nucleic-acid-type="DNA"/>
      </samples>
      <short-variants>
        <short-variant gene="gene1" status="known" position="chr1:100"/>
      </short-variants>
      <copy-number-alterations>
        <copy-number-alteration gene="CDK4" position="chr12:58093932-58188144"
            copy-number="44" equivocal="false" ratio="11.63" status="known"
            type="amplification" number-of-exons="7 of 7">
          <dna-evidence sample="SA-1612348"/>
        </copy-number-alteration>
        <copy-number-alteration gene="CCND3" position="chr6:41853880-41956362"
            copy-number="6" equivocal="true" ratio="2.17" status="known"
            type="amplification" number-of-exons="5 of 5">
          <dna-evidence sample="SA-1612348"/>
        </copy-number-alteration>
      </copy-number-alterations>
      <rearrangements>
        <rearrangement status="known" targeted-gene="CDK4" type="truncation"/>
      </rearrangements>
    </variant-report>
  </rr:ResultsPayload>
</rr:ResultsReport>"#;

    #[test]
    fn parse_worked_example() {
        let report = parse_report(WORKED_EXAMPLE).unwrap();

        assert_eq!(report.samples.len(), 1);
        assert_eq!(report.samples[0].name.as_deref(), Some("SA-1612348"));
        assert_eq!(report.samples[0].nucleic_acid_type.as_deref(), Some("DNA"));

        assert_eq!(report.copy_number_alterations.len(), 2);
        let first = &report.copy_number_alterations[0];
        assert_eq!(first.gene.as_deref(), Some("CDK4"));
        assert_eq!(first.ratio, Some(11.63));
        assert!(!first.equivocal);
        let second = &report.copy_number_alterations[1];
        assert_eq!(second.gene.as_deref(), Some("CCND3"));
        assert!(second.equivocal);
    }

    #[test]
    fn singleton_alteration_still_parses_as_list() {
        let report = parse_report(
            r#"<rr:ResultsReport xmlns:rr="http://integration.foundationmedicine.com/reporting">
                 <rr:ResultsPayload>
                   <variant-report>
                     <copy-number-alterations>
                       <copy-number-alteration gene="MYC" position="chr8:1-2" copy-number="3"
                           equivocal="false" type="loss"/>
                     </copy-number-alterations>
                   </variant-report>
                 </rr:ResultsPayload>
               </rr:ResultsReport>"#,
        )
        .unwrap();
        assert_eq!(report.copy_number_alterations.len(), 1);
    }

    #[test]
    fn report_without_alterations_section_is_empty() {
        let report = parse_report(
            r#"<rr:ResultsReport xmlns:rr="http://integration.foundationmedicine.com/reporting">
                 <rr:ResultsPayload>
                   <variant-report/>
                 </rr:ResultsPayload>
               </rr:ResultsReport>"#,
        )
        .unwrap();
        assert!(report.samples.is_empty());
        assert!(report.copy_number_alterations.is_empty());
    }

    #[test]
    fn malformed_xml_is_parse_error() {
        let err = parse_report("<rr:ResultsReport><unclosed>").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn missing_variant_report_is_parse_error() {
        let err = parse_report("<report><other-section/></report>").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        assert!(err.to_string().contains("variant-report"));
    }
}
