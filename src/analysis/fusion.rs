use chrono::NaiveDate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::domain::{AnnotatedArticle, DailyPrice};

/// Natural join of one annotated article and the price row for its publish
/// date. What the charting subsystem receives.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FusedRecord {
    pub date: NaiveDate,
    pub article: AnnotatedArticle,
    pub price: DailyPrice,
}

/// Inner-joins annotated articles with daily prices on exact calendar date.
///
/// Publish timestamps are truncated to their date for the key, so time of
/// day never affects matching. Articles with no matching trading day
/// (weekends, holidays) are dropped rather than padded with nulls. Several
/// articles on one date each produce their own record, as does each
/// duplicate price row.
///
/// Output follows article iteration order; no sort is guaranteed. Callers
/// wanting a particular order sort afterwards, typically after running the
/// sequence through [`crate::utils::normalize_ascending`].
pub fn fuse(articles: &[AnnotatedArticle], prices: &[DailyPrice]) -> Vec<FusedRecord> {
    let prices_by_date = prices.iter().map(|price| (price.date, price)).into_group_map();

    let mut fused = Vec::new();
    for article in articles {
        let date = article.publish_date();
        let Some(rows) = prices_by_date.get(&date) else {
            log::debug!("No trading day for article dated {}, dropping", date);
            continue;
        };
        for price in rows {
            fused.push(FusedRecord {
                date,
                article: article.clone(),
                price: (*price).clone(),
            });
        }
    }
    fused
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Article, ScoreVector, SentimentScore};
    use chrono::{TimeZone, Utc};

    fn annotated_on(y: i32, m: u32, d: u32, hour: u32) -> AnnotatedArticle {
        let article = Article {
            title: "headline".to_string(),
            body: "body".to_string(),
            summary: String::new(),
            published_at: Utc.with_ymd_and_hms(y, m, d, hour, 30, 0).unwrap(),
            url: "https://example.com".to_string(),
        };
        let score = SentimentScore::new(ScoreVector::new(0.1, 0.6, 0.3), 0.5);
        AnnotatedArticle::from_scores(&article, score, score)
    }

    fn price_on(y: i32, m: u32, d: u32) -> DailyPrice {
        DailyPrice::new(
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            10.0,
            11.0,
            9.0,
            10.5,
            1_000,
        )
    }

    #[test]
    fn test_unmatched_articles_are_dropped() {
        let articles = vec![annotated_on(2024, 1, 5, 9), annotated_on(2024, 1, 6, 9)];
        let prices = vec![price_on(2024, 1, 5)];

        let fused = fuse(&articles, &prices);
        assert_eq!(fused.len(), 1);
        assert_eq!(fused[0].date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn test_every_record_has_matching_dates() {
        let articles = vec![
            annotated_on(2024, 1, 3, 8),
            annotated_on(2024, 1, 4, 12),
            annotated_on(2024, 1, 5, 18),
        ];
        let prices = vec![price_on(2024, 1, 3), price_on(2024, 1, 5)];

        let fused = fuse(&articles, &prices);
        assert_eq!(fused.len(), 2);
        for record in &fused {
            assert_eq!(record.article.publish_date(), record.price.date);
            assert_eq!(record.date, record.price.date);
        }
    }

    #[test]
    fn test_same_day_articles_each_get_a_record() {
        let articles = vec![
            annotated_on(2024, 1, 5, 9),
            annotated_on(2024, 1, 5, 13),
            annotated_on(2024, 1, 5, 17),
        ];
        let prices = vec![price_on(2024, 1, 5)];

        let fused = fuse(&articles, &prices);
        assert_eq!(fused.len(), 3);
    }

    #[test]
    fn test_time_of_day_is_ignored_for_the_join() {
        // Published at 23:30 UTC still joins against that calendar date.
        let articles = vec![annotated_on(2024, 1, 5, 23)];
        let prices = vec![price_on(2024, 1, 5)];
        assert_eq!(fuse(&articles, &prices).len(), 1);
    }

    #[test]
    fn test_empty_inputs_fuse_to_nothing() {
        assert!(fuse(&[], &[price_on(2024, 1, 5)]).is_empty());
        assert!(fuse(&[annotated_on(2024, 1, 5, 9)], &[]).is_empty());
    }
}
