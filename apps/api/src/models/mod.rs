pub mod assessment;
pub mod therapist;
