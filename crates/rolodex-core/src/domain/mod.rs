pub mod contact;
pub mod ids;
pub mod interaction;
pub mod seed;

pub use contact::{Contact, Priority};
pub use ids::{ContactId, InteractionId};
pub use interaction::{Interaction, InteractionKind};
pub use seed::{sample_contacts, sample_interactions};
