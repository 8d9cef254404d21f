//! TF-IDF vectorization.
//!
//! Fits a vocabulary over the feature documents and turns each document
//! into a sparse, L2-normalized vector of `count * idf` weights.

use crate::config::TfidfConfig;
use crate::tokenizer::Tokenizer;
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::debug;

/// Sparse TF-IDF vector for one movie
///
/// `indices` are strictly increasing vocabulary positions; `values` holds the
/// weight at each position. Vectors with at least one term have unit norm.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureVector {
    pub(crate) dim: usize,
    pub(crate) indices: Vec<usize>,
    pub(crate) values: Vec<f32>,
}

impl FeatureVector {
    /// Build a vector from parallel index and weight lists.
    ///
    /// Returns `None` unless both lists have the same length and the indices
    /// are strictly increasing and below `dim`.
    pub fn new(dim: usize, indices: Vec<usize>, values: Vec<f32>) -> Option<Self> {
        let sorted = indices.windows(2).all(|w| w[0] < w[1]);
        let in_range = indices.last().is_none_or(|&last| last < dim);
        if indices.len() != values.len() || !sorted || !in_range {
            return None;
        }
        Some(Self {
            dim,
            indices,
            values,
        })
    }

    /// Vocabulary size the vector was built against
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Number of non-zero entries
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Weight at a vocabulary position (0.0 when absent)
    pub fn get(&self, term: usize) -> f32 {
        self.indices
            .binary_search(&term)
            .map(|pos| self.values[pos])
            .unwrap_or(0.0)
    }

    pub fn norm(&self) -> f32 {
        self.values.iter().map(|v| v * v).sum::<f32>().sqrt()
    }

    /// Sparse dot product
    ///
    /// Walks both index lists in vocabulary order, so `a.dot(b)` and
    /// `b.dot(a)` add the same products in the same order and agree bitwise.
    pub fn dot(&self, other: &FeatureVector) -> f32 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0f32;

        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += self.values[i] * other.values[j];
                    i += 1;
                    j += 1;
                }
            }
        }

        sum
    }
}

/// Vocabulary and IDF weights fitted on a document collection
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    tokenizer: Tokenizer,
    smooth_idf: bool,
    /// Term -> column, assigned in lexicographic order
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    pub fn new(config: &TfidfConfig) -> Self {
        Self {
            tokenizer: Tokenizer::new(config),
            smooth_idf: config.smooth_idf,
            vocabulary: BTreeMap::new(),
            idf: Vec::new(),
        }
    }

    /// Learn the vocabulary and document frequencies
    pub fn fit<S: AsRef<str> + Sync>(&mut self, documents: &[S]) {
        let tokenized: Vec<Vec<String>> = documents
            .par_iter()
            .map(|doc| self.tokenizer.tokenize(doc.as_ref()))
            .collect();
        self.fit_tokens(&tokenized);
    }

    /// Fit, then vectorize the same documents
    pub fn fit_transform<S: AsRef<str> + Sync>(&mut self, documents: &[S]) -> Vec<FeatureVector> {
        let tokenized: Vec<Vec<String>> = documents
            .par_iter()
            .map(|doc| self.tokenizer.tokenize(doc.as_ref()))
            .collect();
        self.fit_tokens(&tokenized);

        tokenized
            .par_iter()
            .map(|tokens| self.vectorize(tokens))
            .collect()
    }

    /// Vectorize a document against the fitted vocabulary
    ///
    /// Terms unseen during `fit` are ignored.
    pub fn transform(&self, document: &str) -> FeatureVector {
        self.vectorize(&self.tokenizer.tokenize(document))
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Column of a term, if it is in the vocabulary
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// IDF weight of a term, if it is in the vocabulary
    pub fn idf(&self, term: &str) -> Option<f32> {
        self.term_index(term).map(|idx| self.idf[idx])
    }

    fn fit_tokens(&mut self, tokenized: &[Vec<String>]) {
        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in tokenized {
            let distinct: BTreeSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in distinct {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let n = tokenized.len() as f64;
        self.vocabulary.clear();
        self.idf.clear();

        // BTreeMap iteration is lexicographic, which fixes the column order
        for (column, (term, df)) in document_frequency.into_iter().enumerate() {
            let df = df as f64;
            let idf = if self.smooth_idf {
                ((1.0 + n) / (1.0 + df)).ln() + 1.0
            } else {
                (n / df).ln() + 1.0
            };
            self.vocabulary.insert(term.to_string(), column);
            self.idf.push(idf as f32);
        }

        debug!(
            "Fitted TF-IDF vocabulary: {} terms over {} documents",
            self.vocabulary.len(),
            tokenized.len()
        );
    }

    fn vectorize(&self, tokens: &[String]) -> FeatureVector {
        let mut counts: HashMap<usize, u32> = HashMap::new();
        for token in tokens {
            if let Some(&column) = self.vocabulary.get(token) {
                *counts.entry(column).or_insert(0) += 1;
            }
        }

        let mut weighted: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(column, count)| (column, count as f64 * self.idf[column] as f64))
            .collect();
        weighted.sort_unstable_by_key(|&(column, _)| column);

        let norm = weighted.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        let (indices, values): (Vec<usize>, Vec<f32>) = if norm > 0.0 {
            weighted
                .into_iter()
                .map(|(column, w)| (column, (w / norm) as f32))
                .unzip()
        } else {
            (Vec::new(), Vec::new())
        };

        FeatureVector {
            dim: self.vocabulary.len(),
            indices,
            values,
        }
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new(&TfidfConfig::default())
    }
}
