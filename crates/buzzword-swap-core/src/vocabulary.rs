//! The curated buzzword vocabulary.
//!
//! A [`Vocabulary`] is an ordered, immutable list of terms. Order matters: the
//! locator reports the first term in vocabulary order, and the selector's
//! fallback path breaks score ties by vocabulary position.
//!
//! Duplicate entries are kept as-is. A term listed twice occupies two
//! candidate slots during substitute selection, which doubles its odds of
//! being picked. [`Vocabulary::duplicates`] reports these so callers can see
//! the skew.

use std::sync::Arc;

use crate::error::VocabularyError;

/// Built-in buzzwords and phrases, in precedence order.
///
/// `alignment`, `resilience` and `scalability` appear twice.
pub const BUILTIN_TERMS: &[&str] = &[
    "impact",
    "innovation",
    "synergy",
    "excellence",
    "sustainability",
    "leadership",
    "transformation",
    "empowerment",
    "collaboration",
    "alignment",
    "resilience",
    "efficiency",
    "scalability",
    "optimization",
    "strategy",
    "engagement",
    "disruption",
    "enablement",
    "transparency",
    "accountability",
    "agility",
    "visibility",
    "ideation",
    "benchmarking",
    "integration",
    "streamlining",
    "modernization",
    "reinvention",
    "analytics",
    "deliverables",
    "capabilities",
    "competencies",
    "methodologies",
    "platforms",
    "ecosystem",
    "framework",
    "governance",
    "stakeholders",
    "paradigm",
    "milestones",
    "metrics",
    "insights",
    "workflow",
    "pipeline",
    "holistic approach",
    "proactive resilience building",
    "strategic mission",
    "operational priorities",
    "solutions",
    "outcomes",
    "alignment",
    "curation",
    "synthesis",
    "orchestration",
    "acceleration",
    "granularity",
    "elasticity",
    "responsiveness",
    "differentiation",
    "convergence",
    "expansion",
    "growth",
    "scaling",
    "replication",
    "stewardship",
    "facilitation",
    "redeployment",
    "monetization",
    "digitalization",
    "iteration",
    "activation",
    "implementation",
    "evaluation",
    "capacity",
    "enhancement",
    "stability",
    "quality",
    "inclusivity",
    "accessibility",
    "participation",
    "coherence",
    "blueprint",
    "architecture",
    "platform",
    "openness",
    "resilience",
    "scalability",
    "open science",
    "responsible research",
    "artificial intelligence",
    "green transition",
    "knowledge exchange",
    "responsible research and innovation",
];

/// An ordered, immutable list of terms shared read-only by every component.
///
/// Cloning is cheap; clones share the same backing storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Arc<[String]>,
}

/// A term that appears more than once in a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DuplicateTerm {
    /// The repeated term, as authored.
    pub term: String,
    /// Every zero-based position the term occupies.
    pub positions: Vec<usize>,
}

impl Vocabulary {
    /// Build a vocabulary from terms, preserving their order.
    ///
    /// Rejects an empty list and blank terms. Duplicates are allowed.
    pub fn new<I, S>(terms: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms: Vec<String> = terms.into_iter().map(Into::into).collect();
        if terms.is_empty() {
            return Err(VocabularyError::Empty);
        }
        if let Some(index) = terms.iter().position(|t| t.trim().is_empty()) {
            return Err(VocabularyError::BlankTerm { index });
        }
        Ok(Self {
            terms: terms.into(),
        })
    }

    /// The built-in buzzword list.
    pub fn builtin() -> Self {
        Self {
            terms: BUILTIN_TERMS.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    /// Terms in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    /// Terms as a slice, in vocabulary order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of entries, counting duplicates.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Always `false` for a successfully built vocabulary.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether `term` occurs anywhere in `text`, ignoring case.
    pub fn occurs_in(term: &str, text: &str) -> bool {
        text.to_lowercase().contains(&term.to_lowercase())
    }

    /// Terms listed more than once, in order of first appearance.
    pub fn duplicates(&self) -> Vec<DuplicateTerm> {
        let mut found: Vec<DuplicateTerm> = Vec::new();
        for (idx, term) in self.terms.iter().enumerate() {
            if let Some(dup) = found.iter_mut().find(|d| &d.term == term) {
                dup.positions.push(idx);
                continue;
            }
            let positions: Vec<usize> = self
                .terms
                .iter()
                .enumerate()
                .filter(|(_, t)| *t == term)
                .map(|(i, _)| i)
                .collect();
            if positions.len() > 1 {
                found.push(DuplicateTerm {
                    term: term.clone(),
                    positions: vec![idx],
                });
            }
        }
        found
    }

    /// Return a new vocabulary with `extra` appended after the current terms.
    pub fn extended<I, S>(&self, extra: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            self.terms
                .iter()
                .cloned()
                .chain(extra.into_iter().map(Into::into)),
        )
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&String) -> &str>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter().map(String::as_str as fn(&String) -> &str)
    }
}
