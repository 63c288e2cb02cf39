use docguard::application::services::classify_chunks;
use docguard::domain::{Chunk, DocumentId, Label};

use super::mocks::{ReverseOrderClassifier, TriggerClassifier};

fn chunks(texts: &[&str]) -> Vec<Chunk> {
    let document_id = DocumentId::new();
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| Chunk::new(i, text.to_string(), document_id, i * 10))
        .collect()
}

#[tokio::test]
async fn given_chunks_finishing_out_of_order_when_classifying_then_verdicts_follow_chunk_order() {
    let input = chunks(&["0 first", "1 second", "2 third", "3 fourth"]);

    let verdicts = classify_chunks(&ReverseOrderClassifier, &input, 4).await;

    let labels: Vec<String> = verdicts
        .iter()
        .map(|v| match &v.label {
            Some(Label::Category(name)) => name.clone(),
            _ => String::new(),
        })
        .collect();
    assert_eq!(labels, vec!["0 first", "1 second", "2 third", "3 fourth"]);
}

#[tokio::test]
async fn given_failing_middle_chunk_when_classifying_then_only_that_chunk_is_error() {
    let classifier = TriggerClassifier::always_safe("model").failing_on("boom");
    let input = chunks(&["fine", "boom", "also fine"]);

    let verdicts = classify_chunks(&classifier, &input, 2).await;

    assert_eq!(verdicts.len(), 3);
    assert!(verdicts[0].safe);
    assert!(!verdicts[1].safe);
    assert_eq!(verdicts[1].label, Some(Label::category("error")));
    assert!(verdicts[2].safe);
}

#[tokio::test]
async fn given_zero_concurrency_when_classifying_then_still_classifies_every_chunk() {
    let classifier = TriggerClassifier::new("lexical", vec!["bad"]);
    let input = chunks(&["good", "bad", "good"]);

    let verdicts = classify_chunks(&classifier, &input, 0).await;

    assert_eq!(verdicts.len(), 3);
    assert_eq!(
        classifier.calls.load(std::sync::atomic::Ordering::SeqCst),
        3
    );
}

#[tokio::test]
async fn given_no_chunks_when_classifying_then_makes_no_calls() {
    let classifier = TriggerClassifier::always_safe("model");

    let verdicts = classify_chunks(&classifier, &[], 4).await;

    assert!(verdicts.is_empty());
    assert_eq!(
        classifier.calls.load(std::sync::atomic::Ordering::SeqCst),
        0
    );
}
