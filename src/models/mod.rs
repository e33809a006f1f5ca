pub mod lead;
pub mod qualification;

pub use lead::{Budget, CompanySize, LeadSubmission, Timeline};
pub use qualification::{Category, QualificationResult};
