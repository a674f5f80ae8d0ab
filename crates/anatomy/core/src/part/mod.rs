//! Body parts: limbs with mechanism capacity, surgical state and properties.
mod body_part;
mod error;
mod kinds;
mod properties;

pub use body_part::BodyPart;
pub use error::{InstallError, InstallRejection, PartError};
pub use kinds::{BodyPartCompatibility, BodyPartType};
pub use properties::{BodyPartProperty, PropertyKind, PropertySet};
