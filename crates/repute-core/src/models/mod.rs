mod attestation;
mod contribution;
mod link_record;
mod profile;
mod reputation_score;
mod summary_input;
mod weight_class;

pub use attestation::{Attestation, AttestationDirection};
pub use contribution::{AttestationContribution, ScoreBreakdown};
pub use link_record::LinkRecord;
pub use profile::IdentityProfile;
pub use reputation_score::{ReputationScore, Standing};
pub use summary_input::SummaryInput;
pub use weight_class::PredicateWeightClass;
