//! Comparison classification: decide how two identified documents relate.

use regdiff_types::{ComparisonMode, IncompatibleReason, StandardIdentity};

/// Classify a pair of (possibly unidentified) documents.
///
/// Precedence, first rule that applies wins:
///
/// 1. either identity missing: `Incompatible(Unidentified)`
/// 2. same series, same part, different year: `VersionDiff`
/// 3. same series, different part: `CrossReference`, regardless of year
/// 4. same series, part and year: `Incompatible(DuplicateUpload)`
/// 5. different series: `Incompatible(DifferentSeries)`
pub fn classify(old: Option<&StandardIdentity>, new: Option<&StandardIdentity>) -> ComparisonMode {
    let (Some(old), Some(new)) = (old, new) else {
        return ComparisonMode::Incompatible(IncompatibleReason::Unidentified);
    };

    if !old.same_series(new) {
        ComparisonMode::Incompatible(IncompatibleReason::DifferentSeries)
    } else if old.part() != new.part() {
        ComparisonMode::CrossReference
    } else if old.year() != new.year() {
        ComparisonMode::VersionDiff
    } else {
        ComparisonMode::Incompatible(IncompatibleReason::DuplicateUpload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn iso(series: &str, part: &str, year: &str) -> StandardIdentity {
        StandardIdentity::new(series, part, year).unwrap()
    }

    #[test]
    fn two_editions_of_one_part() {
        let old = iso("10993", "18", "2005");
        let new = iso("10993", "18", "2020");
        assert_eq!(classify(Some(&old), Some(&new)), ComparisonMode::VersionDiff);
        assert_eq!(classify(Some(&new), Some(&old)), ComparisonMode::VersionDiff);
    }

    #[test]
    fn companion_parts() {
        let a = iso("10993", "17", "2023");
        let b = iso("10993", "18", "2020");
        assert_eq!(classify(Some(&a), Some(&b)), ComparisonMode::CrossReference);

        let same_year = iso("10993", "18", "2023");
        assert_eq!(classify(Some(&a), Some(&same_year)), ComparisonMode::CrossReference);
    }

    #[test]
    fn duplicate_upload() {
        let a = iso("10993", "18", "2020");
        assert_eq!(
            classify(Some(&a), Some(&a.clone())),
            ComparisonMode::Incompatible(IncompatibleReason::DuplicateUpload)
        );
    }

    #[test]
    fn different_series() {
        let a = iso("10993", "18", "2020");
        let b = iso("11135", "18", "2014");
        assert_eq!(
            classify(Some(&a), Some(&b)),
            ComparisonMode::Incompatible(IncompatibleReason::DifferentSeries)
        );
    }

    #[test]
    fn missing_identity() {
        let a = iso("10993", "18", "2020");
        let unidentified = ComparisonMode::Incompatible(IncompatibleReason::Unidentified);
        assert_eq!(classify(None, Some(&a)), unidentified);
        assert_eq!(classify(Some(&a), None), unidentified);
        assert_eq!(classify(None, None), unidentified);
    }

    fn arb_identity() -> impl Strategy<Value = StandardIdentity> {
        ("[1-3]", "[1-3]", "20[0-2][0-9]")
            .prop_map(|(series, part, year)| StandardIdentity::new(series, part, year).unwrap())
    }

    proptest! {
        #[test]
        fn classification_truth_table(a in arb_identity(), b in arb_identity()) {
            let mode = classify(Some(&a), Some(&b));
            let expected = match (a.series() == b.series(), a.part() == b.part(), a.year() == b.year()) {
                (false, _, _) => ComparisonMode::Incompatible(IncompatibleReason::DifferentSeries),
                (true, false, _) => ComparisonMode::CrossReference,
                (true, true, false) => ComparisonMode::VersionDiff,
                (true, true, true) => ComparisonMode::Incompatible(IncompatibleReason::DuplicateUpload),
            };
            prop_assert_eq!(mode, expected);
        }

        #[test]
        fn classification_is_symmetric(a in arb_identity(), b in arb_identity()) {
            prop_assert_eq!(classify(Some(&a), Some(&b)), classify(Some(&b), Some(&a)));
        }

        #[test]
        fn identity_with_itself_is_duplicate(a in arb_identity()) {
            prop_assert_eq!(
                classify(Some(&a), Some(&a)),
                ComparisonMode::Incompatible(IncompatibleReason::DuplicateUpload)
            );
        }

        #[test]
        fn any_missing_side_is_unidentified(a in arb_identity()) {
            let unidentified = ComparisonMode::Incompatible(IncompatibleReason::Unidentified);
            prop_assert_eq!(classify(None, Some(&a)), unidentified);
            prop_assert_eq!(classify(Some(&a), None), unidentified);
        }
    }
}
