//! Record models mirrored from the upstream store API

pub mod customer;
pub mod payment;
pub mod product;
pub mod purchase;
pub mod sale;
pub mod vendor;

pub use customer::*;
pub use payment::*;
pub use product::*;
pub use purchase::*;
pub use sale::*;
pub use vendor::*;
