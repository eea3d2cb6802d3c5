use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use tekrar_srs::{Difficulty, ReviewItem, Subject};

use crate::error::ApiError;

/// Longest accepted prompt, in characters.
const MAX_PROMPT_LEN: usize = 2000;

/// Payload for creating a review item.
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub prompt: String,
    pub subject: Subject,
    pub difficulty: Difficulty,
    pub explanation: Option<String>,
}

impl CreateItemRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.prompt.trim().is_empty() {
            return Err(ApiError::Validation("Prompt cannot be empty".to_string()));
        }

        if self.prompt.chars().count() > MAX_PROMPT_LEN {
            return Err(ApiError::Validation(format!(
                "Prompt is longer than {MAX_PROMPT_LEN} characters"
            )));
        }

        Ok(())
    }

    /// Build the item this request describes, due immediately.
    pub fn into_item(self, now: DateTime<Utc>) -> ReviewItem {
        let mut item = ReviewItem::new(self.prompt, self.subject, self.difficulty, now);
        item.explanation = self.explanation;
        item
    }
}

/// Sample review items for the demo learner.
///
/// The three mid-lifecycle items from the original coaching product: each
/// has some review history behind it and is due at `now`, so a fresh
/// development server has something to grade right away.
pub fn sample_items(now: DateTime<Utc>) -> Vec<ReviewItem> {
    let math = ReviewItem::new(
        "Fenerbahçe'nin 11 oyuncusu var. Her oyuncu 2 gol atarsa toplam kaç gol olur?",
        Subject::Matematik,
        Difficulty::Easy,
        now - Duration::days(3),
    )
    .with_explanation("11 × 2 = 22 gol! Matematik formülü: oyuncu sayısı × gol = toplam gol");

    let turkish = ReviewItem::new(
        "Aşağıdaki paragrafta ana fikir nedir? \"Fenerbahçe, Türk futbolunun en köklü \
         kulüplerinden biridir...\"",
        Subject::Turkce,
        Difficulty::Medium,
        now - Duration::days(1),
    )
    .with_explanation(
        "Ana fikir: Fenerbahçe'nin köklü bir kulüp olması. Paragrafın ilk cümlesi genelde \
         ana fikri verir.",
    );

    let science = ReviewItem::new(
        "Futbol topunun basıncı neden önemlidir?",
        Subject::FenBilimleri,
        Difficulty::Hard,
        now - Duration::days(7),
    )
    .with_explanation(
        "Basınç, topun sıçrama yüksekliğini ve oyun kalitesini etkiler. Fizik kuralları \
         sporda çok önemli!",
    );

    vec![
        ReviewItem {
            last_reviewed_at: Some(now - Duration::days(3)),
            next_due_at: now,
            interval_days: 3,
            ease_factor: 2.5,
            review_count: 2,
            ..math
        },
        ReviewItem {
            last_reviewed_at: Some(now - Duration::days(1)),
            next_due_at: now,
            interval_days: 1,
            ease_factor: 2.3,
            review_count: 1,
            ..turkish
        },
        ReviewItem {
            last_reviewed_at: Some(now - Duration::days(7)),
            next_due_at: now,
            interval_days: 7,
            ease_factor: 2.1,
            review_count: 3,
            ..science
        },
    ]
}
