use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::score::SentimentScore;

/// A news article as returned by the external news source. Read-only input
/// to the scoring pipeline.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Article {
    pub title: String,
    pub body: String,
    pub summary: String,
    #[serde(rename = "publishDate")]
    pub published_at: DateTime<Utc>,
    pub url: String,
}

impl Article {
    /// Calendar date used as the fusion join key. Time of day is discarded.
    pub fn publish_date(&self) -> NaiveDate {
        self.published_at.date_naive()
    }
}

/// An article with title and body sentiment attached.
///
/// Fields are kept flat (titleNeg, titleComp, bodyNeg, ...) because this is
/// the exact column layout the charting subsystem consumes. Built once per
/// article via [`AnnotatedArticle::from_scores`], never mutated afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedArticle {
    #[serde(rename = "publishDate")]
    pub published_at: DateTime<Utc>,
    pub title: String,
    pub title_neg: f64,
    pub title_neu: f64,
    pub title_pos: f64,
    pub title_comp: f64,
    pub body: String,
    pub body_neg: f64,
    pub body_neu: f64,
    pub body_pos: f64,
    pub body_comp: f64,
    pub url: String,
}

impl AnnotatedArticle {
    pub fn from_scores(article: &Article, title: SentimentScore, body: SentimentScore) -> Self {
        Self {
            published_at: article.published_at,
            title: article.title.clone(),
            title_neg: title.neg,
            title_neu: title.neu,
            title_pos: title.pos,
            title_comp: title.compound,
            body: article.body.clone(),
            body_neg: body.neg,
            body_neu: body.neu,
            body_pos: body.pos,
            body_comp: body.compound,
            url: article.url.clone(),
        }
    }

    /// Calendar date used as the fusion join key.
    pub fn publish_date(&self) -> NaiveDate {
        self.published_at.date_naive()
    }

    pub fn title_score(&self) -> SentimentScore {
        SentimentScore {
            neg: self.title_neg,
            neu: self.title_neu,
            pos: self.title_pos,
            compound: self.title_comp,
        }
    }

    pub fn body_score(&self) -> SentimentScore {
        SentimentScore {
            neg: self.body_neg,
            neu: self.body_neu,
            pos: self.body_pos,
            compound: self.body_comp,
        }
    }
}
