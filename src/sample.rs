//! Default-sample resolution for records without their own evidence sample.

use crate::report::record::Sample;

/// Resolve the report-wide fallback sample identifier.
///
/// A lone sample wins unconditionally, whatever its nucleic-acid-type.
/// Among several samples only the first DNA-typed one may serve as the
/// default; a report with no DNA sample has no default at all.
#[must_use]
pub fn default_sample_id(samples: &[Sample]) -> Option<&str> {
    match samples {
        [] => None,
        [only] => only.name.as_deref(),
        many => many
            .iter()
            .find(|s| s.nucleic_acid_type.as_deref() == Some("DNA"))
            .and_then(|s| s.name.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str, nucleic_acid_type: Option<&str>) -> Sample {
        Sample {
            name: Some(name.to_string()),
            nucleic_acid_type: nucleic_acid_type.map(str::to_string),
        }
    }

    #[test]
    fn no_samples_no_default() {
        assert_eq!(default_sample_id(&[]), None);
    }

    #[test]
    fn lone_sample_wins_without_type() {
        let samples = [sample("sample1", None)];
        assert_eq!(default_sample_id(&samples), Some("sample1"));
    }

    #[test]
    fn lone_rna_sample_still_wins() {
        let samples = [sample("sample1", Some("RNA"))];
        assert_eq!(default_sample_id(&samples), Some("sample1"));
    }

    #[test]
    fn first_dna_sample_among_several() {
        let samples = [
            sample("rna-sample", Some("RNA")),
            sample("dna-sample", Some("DNA")),
            sample("other-dna", Some("DNA")),
        ];
        assert_eq!(default_sample_id(&samples), Some("dna-sample"));
    }

    #[test]
    fn several_samples_without_dna_have_no_default() {
        let samples = [
            sample("rna-sample", Some("RNA")),
            sample("untyped-sample", None),
        ];
        assert_eq!(default_sample_id(&samples), None);
    }

    #[test]
    fn lone_unnamed_sample_has_no_default() {
        let samples = [Sample::default()];
        assert_eq!(default_sample_id(&samples), None);
    }
}
