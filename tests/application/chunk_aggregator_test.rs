use docguard::application::services::aggregate;
use docguard::domain::{ChunkVerdict, Finding, Label, LabelEntry};
use proptest::prelude::*;

fn entry(label: &str, detail: Option<&str>) -> LabelEntry {
    LabelEntry {
        label: label.to_string(),
        detail: detail.map(str::to_string),
    }
}

#[test]
fn given_no_chunks_when_aggregating_then_document_is_safe_without_labels() {
    let verdict = aggregate(&[]);

    assert!(verdict.safe);
    assert!(verdict.labels.is_empty());
}

#[test]
fn given_all_safe_chunks_when_aggregating_then_document_is_safe() {
    let verdict = aggregate(&[ChunkVerdict::safe(), ChunkVerdict::safe()]);

    assert!(verdict.safe);
    assert_eq!(verdict.summary(), "");
}

#[test]
fn given_one_unsafe_chunk_when_aggregating_then_document_is_unsafe() {
    let verdict = aggregate(&[
        ChunkVerdict::safe(),
        ChunkVerdict::flagged(Some(Label::category("S1"))),
        ChunkVerdict::safe(),
    ]);

    assert!(!verdict.safe);
    assert_eq!(verdict.labels, vec![entry("S1", None)]);
}

#[test]
fn given_unsafe_chunk_without_label_when_aggregating_then_unsafe_with_no_labels() {
    let verdict = aggregate(&[ChunkVerdict::flagged(None)]);

    assert!(!verdict.safe);
    assert!(verdict.labels.is_empty());
}

#[test]
fn given_repeated_category_when_aggregating_then_label_appears_once_in_first_seen_position() {
    let verdict = aggregate(&[
        ChunkVerdict::flagged(Some(Label::category("S2"))),
        ChunkVerdict::flagged(Some(Label::category("S1"))),
        ChunkVerdict::flagged(Some(Label::category("S2"))),
    ]);

    assert_eq!(verdict.summary(), "S2<br>S1");
}

#[test]
fn given_findings_for_same_label_in_two_chunks_when_aggregating_then_later_detail_wins() {
    let verdict = aggregate(&[
        ChunkVerdict::flagged(Some(Label::Findings(vec![
            Finding::new("weapons", "gun"),
            Finding::new("drugs", "heroin"),
        ]))),
        ChunkVerdict::flagged(Some(Label::Findings(vec![Finding::new(
            "weapons",
            "knife",
        )]))),
    ]);

    assert_eq!(
        verdict.labels,
        vec![entry("weapons", Some("knife")), entry("drugs", Some("heroin"))]
    );
    assert_eq!(verdict.summary(), "weapons: knife<br>drugs: heroin");
}

#[test]
fn given_safe_chunk_carrying_label_when_aggregating_then_label_is_ignored() {
    let verdict = aggregate(&[ChunkVerdict {
        safe: true,
        label: Some(Label::category("S5")),
    }]);

    assert!(verdict.safe);
    assert!(verdict.labels.is_empty());
}

#[test]
fn given_classifier_error_chunk_when_aggregating_then_error_label_is_reported() {
    let verdict = aggregate(&[ChunkVerdict::safe(), ChunkVerdict::classifier_error()]);

    assert!(!verdict.safe);
    assert_eq!(verdict.summary(), "error");
}

fn chunk_verdict() -> impl Strategy<Value = ChunkVerdict> {
    prop_oneof![
        Just(ChunkVerdict::safe()),
        Just(ChunkVerdict::flagged(None)),
        "S[0-9]{1,2}".prop_map(|c| ChunkVerdict::flagged(Some(Label::category(c)))),
    ]
}

proptest! {
    #[test]
    fn given_any_verdicts_when_adding_unsafe_chunk_then_document_never_becomes_safe(
        verdicts in prop::collection::vec(chunk_verdict(), 0..20),
        extra in chunk_verdict(),
    ) {
        let before = aggregate(&verdicts);
        let mut extended = verdicts.clone();
        extended.push(extra.clone());
        let after = aggregate(&extended);

        prop_assert_eq!(after.safe, before.safe && extra.safe);
    }

    #[test]
    fn given_any_verdicts_when_aggregating_then_labels_are_unique(
        verdicts in prop::collection::vec(chunk_verdict(), 0..20),
    ) {
        let aggregated = aggregate(&verdicts);
        let mut names: Vec<&str> = aggregated.labels.iter().map(|l| l.label.as_str()).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();

        prop_assert_eq!(names.len(), total);
        prop_assert_eq!(aggregated.safe, verdicts.iter().all(|v| v.safe));
    }
}
