//! Submission summary — answered questions rendered for the completion
//! screen. Structural steps and unanswered questions are skipped.

use crate::catalog::Catalog;
use crate::response::{ResponseStore, ResponseValue};

/// One answered question, rendered for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryItem {
    pub id: String,
    pub title: String,
    pub answer: String,
}

/// Collect the answered questions in catalog order.
pub fn summarize(catalog: &Catalog, responses: &ResponseStore) -> Vec<SummaryItem> {
    catalog
        .iter()
        .filter(|q| !q.kind.is_structural())
        .filter_map(|q| {
            let value = responses.get(&q.id)?;
            if value.is_blank() {
                return None;
            }
            let answer = match value {
                ResponseValue::Text(s) => s.clone(),
                ResponseValue::Rating(n) => format!("{}/{}", n, q.rating_max()),
                ResponseValue::Selection(items) => items.join(", "),
            };
            Some(SummaryItem {
                id: q.id.clone(),
                title: q.title.clone(),
                answer,
            })
        })
        .collect()
}
