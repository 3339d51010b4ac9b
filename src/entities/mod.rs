// Entity Models
//
// Each entity is an immutable value:
// - House and Tenant map to one line of their flat file
// - RentalAgreement borrows a Tenant and a House and is never persisted

pub mod house;
pub mod tenant;
pub mod agreement;

pub use house::House;
pub use tenant::Tenant;
pub use agreement::RentalAgreement;
