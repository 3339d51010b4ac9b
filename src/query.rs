// 🔎 House Query - location + price ceiling filter
//
// Linear scan. Location must match exactly (case-sensitive, untrimmed).
// Result order follows the input order; an empty result is not an error.

use crate::entities::House;

#[derive(Debug, Clone, PartialEq)]
pub struct HouseQuery {
    /// Exact location to match
    pub location: String,

    /// Inclusive upper bound on price
    pub max_price: f64,
}

impl HouseQuery {
    pub fn new(location: impl Into<String>, max_price: f64) -> Self {
        HouseQuery {
            location: location.into(),
            max_price,
        }
    }

    /// Check if a single house passes the filter
    pub fn matches(&self, house: &House) -> bool {
        house.location() == self.location && house.price() <= self.max_price
    }

    /// Every matching house, in input order
    pub fn apply<'a>(&self, houses: &'a [House]) -> Vec<&'a House> {
        houses.iter().filter(|house| self.matches(house)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_houses() -> Vec<House> {
        vec![
            House::new("H3", "Chennai", 40000.0, 2, "KUMUTHA"),
            House::new("H4", "Chennai", 30000.0, 2, "KUMAR"),
            House::new("H5", "Mumbai", 20000.0, 1, "RAJ"),
        ]
    }

    #[test]
    fn test_location_and_price_filter() {
        let houses = sample_houses();
        let found = HouseQuery::new("Chennai", 50000.0).apply(&houses);

        let ids: Vec<&str> = found.iter().map(|h| h.id()).collect();
        assert_eq!(ids, vec!["H3", "H4"]);
    }

    #[test]
    fn test_price_ceiling_excludes_everything() {
        let houses = sample_houses();
        assert!(HouseQuery::new("Chennai", 25000.0).apply(&houses).is_empty());
    }

    #[test]
    fn test_price_ceiling_is_inclusive() {
        let houses = sample_houses();
        let found = HouseQuery::new("Chennai", 30000.0).apply(&houses);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), "H4");
    }

    #[test]
    fn test_location_is_case_sensitive() {
        let houses = sample_houses();
        assert!(HouseQuery::new("chennai", 50000.0).apply(&houses).is_empty());
        assert!(HouseQuery::new("Chennai ", 50000.0).apply(&houses).is_empty());
    }
}
