use repute_core::models::AttestationDirection;

/// Direction multiplier.
///
/// Given (the subject made the claim) and received (the claim is about the
/// subject) use their configured weights; undirected claims use 1.0.
pub fn calculate(direction: AttestationDirection, given_weight: f64, received_weight: f64) -> f64 {
    match direction {
        AttestationDirection::Given => given_weight,
        AttestationDirection::Received => received_weight,
        AttestationDirection::Undirected => 1.0,
    }
}
