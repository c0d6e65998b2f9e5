use crate::analysis::aggregate::{compound_score, mean_score, neutral_divisor};
use crate::analysis::chunking::split_text;
use crate::config::SentimentConfig;
use crate::data::SentimentClassifier;
use crate::domain::{AnnotatedArticle, Article, SentimentScore};
use crate::error::SentimentError;

/// Scores article text through an external classifier, chunking any input
/// that exceeds the model's window.
pub struct ArticleAnnotator<C: SentimentClassifier> {
    classifier: C,
    config: SentimentConfig,
}

impl<C: SentimentClassifier> ArticleAnnotator<C> {
    pub fn new(classifier: C, config: SentimentConfig) -> Self {
        log::debug!("ArticleAnnotator using backend: {}", classifier.signature());
        Self { classifier, config }
    }

    pub fn config(&self) -> &SentimentConfig {
        &self.config
    }

    /// Score one piece of text with the configured default neutral weight.
    pub fn score_text(&self, text: &str) -> Result<SentimentScore, SentimentError> {
        self.score_text_weighted(text, self.config.default_neutral_weight)
    }

    /// Score one piece of text.
    ///
    /// Text longer than the classifier window is chunked; each chunk is
    /// classified in order and the chunk vectors averaged. The
    /// single-vs-chunked branch is decided once, from the segment count.
    pub fn score_text_weighted(
        &self,
        text: &str,
        neutral_weight: u8,
    ) -> Result<SentimentScore, SentimentError> {
        // Reject a bad weight before spending any classifier calls.
        neutral_divisor(neutral_weight)?;

        let segments = split_text(text, self.config.max_segment_length);
        let vector = if segments.len() == 1 {
            self.classifier.classify(segments[0])?
        } else {
            // One blocking call per chunk, strictly sequential. No batching:
            // a mid-sequence failure must abort before later chunks run.
            let mut chunk_scores = Vec::with_capacity(segments.len());
            for segment in &segments {
                chunk_scores.push(self.classifier.classify(segment)?);
            }
            mean_score(&chunk_scores)?
        };

        let compound = compound_score(&vector, neutral_weight)?;
        Ok(SentimentScore::new(vector, compound))
    }

    /// Attach title and body sentiment to an article.
    ///
    /// Title and body are scored independently. If either classification
    /// fails the whole article is abandoned — never partially annotated.
    pub fn annotate(
        &self,
        article: &Article,
        neutral_weight: u8,
    ) -> Result<AnnotatedArticle, SentimentError> {
        let title_score = self.score_text_weighted(&article.title, neutral_weight)?;
        let body_score = self.score_text_weighted(&article.body, neutral_weight)?;
        Ok(AnnotatedArticle::from_scores(article, title_score, body_score))
    }

    /// Annotate a batch of articles strictly sequentially, using the
    /// configured default weight. The first failure aborts the batch.
    pub fn annotate_all(
        &self,
        articles: &[Article],
    ) -> Result<Vec<AnnotatedArticle>, SentimentError> {
        let weight = self.config.default_neutral_weight;
        let mut annotated = Vec::with_capacity(articles.len());
        for article in articles {
            annotated.push(self.annotate(article, weight)?);
        }
        Ok(annotated)
    }
}
