// 📝 Rental Agreement - links one tenant to one house
//
// Borrows both parties: the agreement never owns the tenant or the house.
// Dates are not validated against each other. Agreements are not persisted.

use chrono::NaiveDate;
use std::fmt;

use super::{House, Tenant};
use crate::records::format_price;

#[derive(Debug, Clone, Copy)]
pub struct RentalAgreement<'a> {
    tenant: &'a Tenant,
    house: &'a House,
    deposit: f64,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl<'a> RentalAgreement<'a> {
    pub fn new(
        tenant: &'a Tenant,
        house: &'a House,
        deposit: f64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        RentalAgreement {
            tenant,
            house,
            deposit,
            start_date,
            end_date,
        }
    }

    pub fn tenant(&self) -> &'a Tenant {
        self.tenant
    }

    pub fn house(&self) -> &'a House {
        self.house
    }

    pub fn deposit(&self) -> f64 {
        self.deposit
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Signed length of the agreement in days. Negative when the end date
    /// precedes the start date.
    pub fn term_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

impl fmt::Display for RentalAgreement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RentalAgreement [tenant={}, house={}, deposit={}, startDate={}, endDate={}]",
            self.tenant.name(),
            self.house.id(),
            format_price(self.deposit),
            self.start_date,
            self.end_date
        )
    }
}
