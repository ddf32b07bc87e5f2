pub mod planet;
pub mod profile;

pub use planet::{Planet, PlanetReport};
pub use profile::{field_text, Profile, ProfileSubmission};
