use crate::domain::{ChunkVerdict, DocumentVerdict, Label, LabelEntry};

/// Folds one classifier's chunk verdicts into a document verdict.
///
/// The document is safe only if every chunk is. Labels of unsafe chunks are
/// collected in first-seen order; a label seen again keeps its position and
/// takes the newer detail.
pub fn aggregate(verdicts: &[ChunkVerdict]) -> DocumentVerdict {
    let mut verdict = DocumentVerdict::safe();

    for chunk in verdicts.iter().filter(|v| !v.safe) {
        verdict.safe = false;

        match &chunk.label {
            Some(Label::Category(name)) => upsert(&mut verdict.labels, name, None),
            Some(Label::Findings(findings)) => {
                for finding in findings {
                    upsert(
                        &mut verdict.labels,
                        &finding.category,
                        Some(finding.detail.clone()),
                    );
                }
            }
            None => {}
        }
    }

    verdict
}

fn upsert(labels: &mut Vec<LabelEntry>, label: &str, detail: Option<String>) {
    match labels.iter_mut().find(|entry| entry.label == label) {
        Some(entry) => entry.detail = detail,
        None => labels.push(LabelEntry {
            label: label.to_string(),
            detail,
        }),
    }
}
