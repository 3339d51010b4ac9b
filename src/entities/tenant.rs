// 🧑 Tenant Entity - a prospective renter

use crate::records::FlatRecord;

/// A prospective renter. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tenant {
    id: String,
    name: String,
    contact: String,
    preferred_location: String,
}

impl Tenant {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        contact: impl Into<String>,
        preferred_location: impl Into<String>,
    ) -> Self {
        Tenant {
            id: id.into(),
            name: name.into(),
            contact: contact.into(),
            preferred_location: preferred_location.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn preferred_location(&self) -> &str {
        &self.preferred_location
    }
}

// Line layout: id,name,contact,preferredLocation
impl FlatRecord for Tenant {
    const FIELD_COUNT: usize = 4;
    const KIND: &'static str = "tenant";

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.contact.clone(),
            self.preferred_location.clone(),
        ]
    }

    fn from_fields(fields: &[&str]) -> Option<Self> {
        let [id, name, contact, preferred_location] = fields else {
            return None;
        };
        Some(Tenant::new(*id, *name, *contact, *preferred_location))
    }
}
