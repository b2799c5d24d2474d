// ============================================================
// Layer 5 — TF-IDF Featurizer
// ============================================================
// Turns raw email text into sparse TF-IDF vectors.
//
// Analysis (tokenizers crate):
//   BertNormalizer  → clean control chars, lowercase, strip accents
//   Whitespace      → split into words and punctuation runs
//   + word n-grams  → "buy one", "one ,", ... up to `word_ngrams`
//
// Vocabulary (fitted on the training texts only):
//   keep terms with document frequency ≥ min_df, most frequent
//   first (ties alphabetical), at most max_vocab of them
//
// Weighting:
//   idf(t)   = ln((N + 1) / (df(t) + 1)) + 1
//   w(t, d)  = count(t, d) * idf(t), then L2-normalised per text
//
// Why smoothed IDF?
//   Words like "the" appear in almost every email and say little
//   about spam; IDF shrinks their weight. The +1 inside the log
//   acts as if one extra document contained every term, so no
//   division by zero. The +1 outside keeps a term that appears in
//   every text at weight 1 instead of dropping it to 0.
//
// Why L2-normalise?
//   A long newsletter would otherwise have much larger feature
//   values than a one-line message, and the model would confuse
//   length with spamminess.

use std::collections::{BTreeMap, HashMap, HashSet};

use tokenizers::normalizers::bert::BertNormalizer;
use tokenizers::pre_tokenizers::whitespace::Whitespace;
use tokenizers::{Normalizer, OffsetReferential, OffsetType, PreTokenizedString, PreTokenizer};

use crate::data::dataset::SparseFeatures;
use crate::domain::error::ModelError;

/// Splits text into normalised word n-gram terms.
#[derive(Debug, Clone)]
pub struct Analyzer {
    normalizer: BertNormalizer,
    pre_tokenizer: Whitespace,
    word_ngrams: usize,
}

impl Analyzer {
    pub fn new(word_ngrams: usize) -> Self {
        Self {
            normalizer: BertNormalizer::new(true, true, None, true),
            pre_tokenizer: Whitespace {},
            word_ngrams: word_ngrams.max(1),
        }
    }

    /// Normalised words of `text`, in order.
    pub fn words(&self, text: &str) -> Result<Vec<String>, ModelError> {
        let mut pretokenized = PreTokenizedString::from(text);
        pretokenized
            .normalize(|s| self.normalizer.normalize(s))
            .map_err(|e| ModelError::Tokenizer(e.to_string()))?;
        self.pre_tokenizer
            .pre_tokenize(&mut pretokenized)
            .map_err(|e| ModelError::Tokenizer(e.to_string()))?;

        Ok(pretokenized
            .get_splits(OffsetReferential::Normalized, OffsetType::Byte)
            .into_iter()
            .map(|(word, _, _)| word.to_string())
            .collect())
    }

    /// Words followed by every n-gram from 2 up to `word_ngrams`.
    pub fn terms(&self, text: &str) -> Result<Vec<String>, ModelError> {
        let words = self.words(text)?;
        let mut terms = words.clone();
        for n in 2..=self.word_ngrams {
            terms.extend(words.windows(n).map(|w| w.join(" ")));
        }
        Ok(terms)
    }
}

/// A vocabulary with IDF weights, fitted on training texts.
#[derive(Debug, Clone)]
pub struct TfIdfFeaturizer {
    analyzer: Analyzer,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl TfIdfFeaturizer {
    pub fn fit<T: AsRef<str>>(
        analyzer: Analyzer,
        texts: &[T],
        max_vocab: usize,
        min_df: usize,
    ) -> Result<Self, ModelError> {
        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        for text in texts {
            let unique: HashSet<String> = analyzer.terms(text.as_ref())?.into_iter().collect();
            for term in unique {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let mut terms: Vec<(String, usize)> = document_frequency
            .into_iter()
            .filter(|(_, df)| *df >= min_df)
            .collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        terms.truncate(max_vocab);

        if terms.is_empty() {
            return Err(ModelError::EmptyVocabulary);
        }

        let n_documents = texts.len() as f32;
        let mut vocabulary = HashMap::with_capacity(terms.len());
        let mut idf = Vec::with_capacity(terms.len());
        for (idx, (term, df)) in terms.into_iter().enumerate() {
            idf.push(((n_documents + 1.0) / (df as f32 + 1.0)).ln() + 1.0);
            vocabulary.insert(term, idx);
        }

        tracing::debug!("Vocabulary fitted: {} terms from {} texts", idf.len(), texts.len());

        Ok(Self { analyzer, vocabulary, idf })
    }

    /// Width of the feature vectors.
    pub fn num_features(&self) -> usize {
        self.idf.len()
    }

    /// Index of `term` in the vocabulary, if kept.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Sparse L2-normalised TF-IDF vector of `text`, sorted by index.
    /// Texts with no known terms give an empty vector.
    pub fn transform(&self, text: &str) -> Result<SparseFeatures, ModelError> {
        let mut counts: BTreeMap<usize, f32> = BTreeMap::new();
        for term in self.analyzer.terms(text)? {
            if let Some(idx) = self.index_of(&term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut features: SparseFeatures = counts
            .into_iter()
            .map(|(idx, tf)| (idx, tf * self.idf[idx]))
            .collect();

        let norm = features.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut features {
                *w /= norm;
            }
        }
        Ok(features)
    }
}
