use serde::{Deserialize, Serialize};

/// Bestseller-list performance, accumulated across every list appearance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BestsellerStats {
    #[serde(default)]
    pub bestseller_appearances: u32,
    #[serde(default)]
    pub total_weeks_on_bestseller: u32,
    /// Best (numerically lowest) rank seen.
    pub highest_rank: Option<u32>,
    #[serde(default)]
    pub bestseller_dates: Vec<String>,
}

impl BestsellerStats {
    pub fn record_appearance(&mut self, rank: Option<u32>, weeks_on_list: u32, date: Option<&str>) {
        self.bestseller_appearances = self.bestseller_appearances.saturating_add(1);
        self.total_weeks_on_bestseller =
            self.total_weeks_on_bestseller.saturating_add(weeks_on_list);

        if let Some(rank) = rank.filter(|r| *r > 0)
            && self.highest_rank.is_none_or(|best| rank < best)
        {
            self.highest_rank = Some(rank);
        }

        if let Some(date) = date.filter(|d| !d.is_empty())
            && !self.bestseller_dates.iter().any(|known| known == date)
        {
            self.bestseller_dates.push(date.to_string());
        }
    }

    pub fn is_bestseller(&self) -> bool {
        self.bestseller_appearances > 0
    }
}
