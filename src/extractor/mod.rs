//! Proposition extraction from free text
//!
//! Splits input into sentences on `.`, `!` and `?` boundaries, then
//! classifies each sentence with an ordered list of leading
//! discourse-marker rules (first match wins). Sentences that open with a
//! premise or rebuttal marker and carry a comma-separated continuation
//! are split into two propositions, so "Because X, Y" yields a premise
//! and a candidate claim.
//!
//! Segmentation is deliberately naive about quotes and abbreviations.
//! It is pure and deterministic, which is what downstream scoring needs.

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::graph::{Proposition, PropositionId, Role, Span};

/// Confidence assigned to roles classified by an explicit marker.
pub const MARKER_CONFIDENCE: f64 = 0.9;
/// Confidence assigned to sentences with no recognized marker.
pub const UNKNOWN_CONFIDENCE: f64 = 0.5;
/// Confidence assigned to an unknown promoted to claim because the text
/// contains no explicit claim marker anywhere.
pub const PROMOTED_CLAIM_CONFIDENCE: f64 = 0.6;

/// Ordered marker rules. First match wins, so earlier entries shadow
/// later ones when a sentence could satisfy both.
const MARKER_RULES: &[(&str, Role)] = &[
    ("because", Role::Premise),
    ("since", Role::Premise),
    ("given that", Role::Premise),
    ("therefore", Role::Claim),
    ("thus", Role::Claim),
    ("so", Role::Claim),
    ("hence", Role::Claim),
    ("consequently", Role::Claim),
    ("in conclusion", Role::Claim),
    ("as a result", Role::Claim),
    ("however", Role::Rebuttal),
    ("but", Role::Rebuttal),
    ("although", Role::Rebuttal),
    ("yet", Role::Rebuttal),
    ("on the other hand", Role::Rebuttal),
    ("that said", Role::Rebuttal),
];

/// A trimmed sentence or clause with its byte range in the input.
#[derive(Debug, Clone)]
struct Segment {
    text: String,
    span: Span,
}

/// Extract an ordered list of propositions from raw text.
///
/// Returns [`EngineError::EmptyInput`] when the input is empty or
/// whitespace-only. Ids are dense ordinals in encounter order. If no
/// sentence carries an explicit claim marker, the first unknown segment
/// is promoted to claim so downstream stages always have a claim
/// candidate to anchor on.
pub fn extract(text: &str) -> EngineResult<Vec<Proposition>> {
    if text.trim().is_empty() {
        return Err(EngineError::EmptyInput);
    }

    let mut propositions: Vec<Proposition> = Vec::new();
    for segment in segment_sentences(text) {
        let next_id = PropositionId(propositions.len() as u32);
        match leading_marker(&segment.text) {
            Some((marker, role)) if matches!(role, Role::Premise | Role::Rebuttal) => {
                if let Some((head, tail)) = split_marker_clause(&segment, marker) {
                    propositions.push(Proposition::new(
                        next_id,
                        head.text,
                        head.span,
                        role,
                        MARKER_CONFIDENCE,
                    ));
                    let tail_id = PropositionId(propositions.len() as u32);
                    let (tail_role, tail_confidence) = match leading_marker(&tail.text) {
                        Some((_, r)) => (r, MARKER_CONFIDENCE),
                        None => (Role::Unknown, UNKNOWN_CONFIDENCE),
                    };
                    propositions.push(Proposition::new(
                        tail_id,
                        tail.text,
                        tail.span,
                        tail_role,
                        tail_confidence,
                    ));
                } else {
                    propositions.push(Proposition::new(
                        next_id,
                        segment.text,
                        segment.span,
                        role,
                        MARKER_CONFIDENCE,
                    ));
                }
            }
            Some((_, role)) => {
                propositions.push(Proposition::new(
                    next_id,
                    segment.text,
                    segment.span,
                    role,
                    MARKER_CONFIDENCE,
                ));
            }
            None => {
                propositions.push(Proposition::new(
                    next_id,
                    segment.text,
                    segment.span,
                    Role::Unknown,
                    UNKNOWN_CONFIDENCE,
                ));
            }
        }
    }

    promote_first_unknown(&mut propositions);

    debug!(
        "extracted {} propositions from {} bytes of input",
        propositions.len(),
        text.len()
    );
    Ok(propositions)
}

/// If no explicit claim exists, promote the first unknown to claim.
fn promote_first_unknown(propositions: &mut [Proposition]) {
    let has_claim = propositions.iter().any(|p| p.role == Role::Claim);
    if has_claim {
        return;
    }
    if let Some(first_unknown) = propositions.iter_mut().find(|p| p.role == Role::Unknown) {
        first_unknown.role = Role::Claim;
        first_unknown.confidence = PROMOTED_CLAIM_CONFIDENCE;
    }
}

fn segment_sentences(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut start = 0usize;
    for (idx, ch) in text.char_indices() {
        if matches!(ch, '.' | '!' | '?') {
            push_trimmed(text, start, idx, &mut segments);
            start = idx + ch.len_utf8();
        }
    }
    push_trimmed(text, start, text.len(), &mut segments);
    segments
}

fn push_trimmed(text: &str, start: usize, end: usize, out: &mut Vec<Segment>) {
    let raw = &text[start..end];
    let leading = raw.len() - raw.trim_start().len();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }
    out.push(Segment {
        text: trimmed.to_string(),
        span: Span::new(start + leading, start + leading + trimmed.len()),
    });
}

/// First marker rule matching the start of the segment, if any.
///
/// The marker must be boundary-terminated so "social" never matches
/// the claim marker "so".
fn leading_marker(text: &str) -> Option<(&'static str, Role)> {
    let lower = text.to_lowercase();
    for &(marker, role) in MARKER_RULES {
        if !lower.starts_with(marker) {
            continue;
        }
        match lower[marker.len()..].chars().next() {
            None => return Some((marker, role)),
            Some(c) if !c.is_alphanumeric() => return Some((marker, role)),
            Some(_) => {}
        }
    }
    None
}

/// Split "Marker clause, continuation" into two segments.
///
/// Requires content between the marker and the comma, so "However, X"
/// stays one rebuttal while "Although X, Y" splits.
fn split_marker_clause(segment: &Segment, marker: &str) -> Option<(Segment, Segment)> {
    let comma = segment.text.find(',')?;
    let head = segment.text[..comma].trim_end();
    if head.chars().count() <= marker.chars().count() {
        return None;
    }

    let tail_raw = &segment.text[comma + 1..];
    let tail_leading = tail_raw.len() - tail_raw.trim_start().len();
    let tail = tail_raw.trim();
    if tail.is_empty() {
        return None;
    }

    let head_start = segment.span.start;
    let tail_start = segment.span.start + comma + 1 + tail_leading;
    Some((
        Segment {
            text: head.to_string(),
            span: Span::new(head_start, head_start + head.len()),
        },
        Segment {
            text: tail.to_string(),
            span: Span::new(tail_start, tail_start + tail.len()),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(matches!(extract(""), Err(EngineError::EmptyInput)));
        assert!(matches!(extract("   \n\t  "), Err(EngineError::EmptyInput)));
    }

    #[test]
    fn test_punctuation_only_yields_no_propositions() {
        let props = extract("...!?").unwrap();
        assert!(props.is_empty());
    }

    #[test]
    fn test_premise_comma_split() {
        let props = extract("Because all politicians lie, you cannot trust any of them.").unwrap();
        assert_eq!(props.len(), 2);
        assert_eq!(props[0].role, Role::Premise);
        assert_eq!(props[0].text, "Because all politicians lie");
        assert_eq!(props[0].confidence, MARKER_CONFIDENCE);
        assert_eq!(props[1].role, Role::Claim);
        assert_eq!(props[1].text, "you cannot trust any of them");
        assert_eq!(props[1].confidence, PROMOTED_CLAIM_CONFIDENCE);
    }

    #[test]
    fn test_explicit_claim_marker() {
        let props = extract("Therefore we should ban it.").unwrap();
        assert_eq!(props.len(), 1);
        assert_eq!(props[0].role, Role::Claim);
        assert_eq!(props[0].confidence, MARKER_CONFIDENCE);
    }

    #[test]
    fn test_unknown_promoted_only_without_explicit_claim() {
        let props = extract("Crime is rising. Therefore we need a response.").unwrap();
        assert_eq!(props.len(), 2);
        assert_eq!(props[0].role, Role::Unknown);
        assert_eq!(props[0].confidence, UNKNOWN_CONFIDENCE);
        assert_eq!(props[1].role, Role::Claim);
    }

    #[test]
    fn test_lone_statement_promoted_to_claim() {
        let props = extract("Remote work improves productivity.").unwrap();
        assert_eq!(props.len(), 1);
        assert_eq!(props[0].role, Role::Claim);
        assert_eq!(props[0].confidence, PROMOTED_CLAIM_CONFIDENCE);
    }

    #[test]
    fn test_rebuttal_comma_directly_after_marker_does_not_split() {
        let props = extract("However, that ignores the costs. We should wait.").unwrap();
        assert_eq!(props.len(), 2);
        assert_eq!(props[0].role, Role::Rebuttal);
        assert_eq!(props[0].text, "However, that ignores the costs");
    }

    #[test]
    fn test_rebuttal_clause_splits() {
        let props = extract("Although the data is old, it still points the same way.").unwrap();
        assert_eq!(props.len(), 2);
        assert_eq!(props[0].role, Role::Rebuttal);
        assert_eq!(props[0].text, "Although the data is old");
        assert_eq!(props[1].role, Role::Claim);
    }

    #[test]
    fn test_marker_requires_word_boundary() {
        let props = extract("Social media is everywhere.").unwrap();
        assert_eq!(props.len(), 1);
        // "Social" must not match the claim marker "so".
        assert_eq!(props[0].role, Role::Claim);
        assert_eq!(props[0].confidence, PROMOTED_CLAIM_CONFIDENCE);
    }

    #[test]
    fn test_markers_are_case_insensitive() {
        let props = extract("BECAUSE taxes fund roads, we should pay them.").unwrap();
        assert_eq!(props[0].role, Role::Premise);
    }

    #[test]
    fn test_ids_are_dense_ordinals() {
        let props =
            extract("Because it rained, the ground is wet. Therefore the match is off.").unwrap();
        for (idx, prop) in props.iter().enumerate() {
            assert_eq!(prop.id, PropositionId(idx as u32));
        }
    }

    #[test]
    fn test_spans_slice_the_original_text() {
        let text = "  Because it rained, the ground is wet. Therefore the match is off.  ";
        let props = extract(text).unwrap();
        for prop in &props {
            assert_eq!(&text[prop.span.start..prop.span.end], prop.text);
        }
    }

    #[test]
    fn test_multiple_terminators_collapse() {
        let props = extract("Is that true?! No one checked.").unwrap();
        assert_eq!(props.len(), 2);
        assert_eq!(props[0].text, "Is that true");
    }
}
