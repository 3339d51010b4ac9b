// 🏠 House Entity - a rental listing
//
// Immutable once built: fields are private and only exposed through getters.

use std::fmt;

use crate::records::{format_price, parse_bedrooms, parse_price, FlatRecord};

/// A rental listing
///
/// `id` is unique by convention only; nothing enforces it.
#[derive(Debug, Clone, PartialEq)]
pub struct House {
    id: String,
    location: String,
    price: f64,
    bedrooms: i32,
    owner: String,
}

impl House {
    pub fn new(
        id: impl Into<String>,
        location: impl Into<String>,
        price: f64,
        bedrooms: i32,
        owner: impl Into<String>,
    ) -> Self {
        House {
            id: id.into(),
            location: location.into(),
            price,
            bedrooms,
            owner: owner.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn bedrooms(&self) -> i32 {
        self.bedrooms
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

impl fmt::Display for House {
    /// `[H3, Chennai, 40000.0, 2, KUMUTHA]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}, {}]",
            self.id,
            self.location,
            format_price(self.price),
            self.bedrooms,
            self.owner
        )
    }
}

// Line layout: id,location,price,bedrooms,owner
impl FlatRecord for House {
    const FIELD_COUNT: usize = 5;
    const KIND: &'static str = "house";

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.location.clone(),
            format_price(self.price),
            self.bedrooms.to_string(),
            self.owner.clone(),
        ]
    }

    fn from_fields(fields: &[&str]) -> Option<Self> {
        let [id, location, price, bedrooms, owner] = fields else {
            return None;
        };
        let price = parse_price(price)?;
        let bedrooms = parse_bedrooms(bedrooms)?;
        Some(House::new(*id, *location, price, bedrooms, *owner))
    }
}
