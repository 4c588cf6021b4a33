//! Promotional flight deals shown on the home screen.

use crate::picker::Picker;
use crate::recommend::Recommendation;

/// One row in the deals list.
#[derive(Debug, Clone)]
pub struct FlightDeal {
    pub destination: String,
    /// Display label, e.g. "11月24日 周一去" or "下个周末".
    pub date_label: String,
    /// Lowest fare in whole yuan.
    pub price: u32,
    /// TOP1..TOP3 badge position, if ranked.
    pub rank: Option<u8>,
}

impl FlightDeal {
    fn new(destination: &str, date_label: &str, price: u32, rank: u8) -> Self {
        Self {
            destination: destination.to_string(),
            date_label: date_label.to_string(),
            price,
            rank: Some(rank),
        }
    }
}

/// The deals the storefront opens with.
pub fn seed_deals() -> Vec<FlightDeal> {
    vec![
        FlightDeal::new("温州", "11月24日 周一去", 210, 1),
        FlightDeal::new("南京", "11月24日 周一去", 230, 2),
        FlightDeal::new("合肥", "11月24日 周一去", 232, 3),
    ]
}

/// Deals list with cursor state for j/k navigation.
#[derive(Debug, Clone)]
pub struct DealsState {
    pub deals: Vec<FlightDeal>,
    pub selected: usize,
}

impl DealsState {
    pub fn new(deals: Vec<FlightDeal>) -> Self {
        Self { deals, selected: 0 }
    }

    /// Replace the list with AI recommendations, ranked in response order.
    /// An empty result keeps the current deals.
    pub fn apply_recommendations(&mut self, recs: Vec<Recommendation>) {
        if recs.is_empty() {
            return;
        }
        self.deals = recs
            .into_iter()
            .enumerate()
            .map(|(i, rec)| FlightDeal {
                destination: rec.city,
                date_label: format!("下个周末 · {}", rec.reason),
                price: rec.estimated_price,
                rank: Some(i as u8 + 1),
            })
            .collect();
        self.selected = 0;
    }
}

impl Picker for DealsState {
    type Item = FlightDeal;

    fn items(&self) -> &[FlightDeal] {
        &self.deals
    }

    fn selected_index(&self) -> usize {
        self.selected
    }

    fn set_selected_index(&mut self, index: usize) {
        self.selected = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(city: &str, reason: &str, price: u32) -> Recommendation {
        Recommendation {
            city: city.to_string(),
            reason: reason.to_string(),
            estimated_price: price,
        }
    }

    #[test]
    fn test_seed_deals_are_ranked() {
        let deals = seed_deals();
        assert_eq!(deals.len(), 3);
        assert_eq!(deals[0].rank, Some(1));
        assert_eq!(deals[2].destination, "合肥");
    }

    #[test]
    fn test_apply_recommendations_replaces_and_ranks() {
        let mut state = DealsState::new(seed_deals());
        state.selected = 2;
        state.apply_recommendations(vec![rec("杭州", "西湖很近", 310), rec("青岛", "海鲜便宜", 450)]);
        assert_eq!(state.deals.len(), 2);
        assert_eq!(state.deals[0].destination, "杭州");
        assert_eq!(state.deals[1].rank, Some(2));
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_empty_recommendations_keep_deals() {
        let mut state = DealsState::new(seed_deals());
        state.apply_recommendations(vec![]);
        assert_eq!(state.deals.len(), 3);
        assert_eq!(state.deals[0].destination, "温州");
    }

    #[test]
    fn test_picker_navigation_wraps() {
        let mut state = DealsState::new(seed_deals());
        state.select_prev();
        assert_eq!(state.selected, 2);
        state.select_next();
        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_item().unwrap().destination, "温州");
    }
}
