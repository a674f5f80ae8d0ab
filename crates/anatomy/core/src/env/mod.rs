//! Traits describing read-only prototype data.
//!
//! Oracles resolve prototype ids into templates. Nothing in this crate reaches
//! for a global registry: every loader takes the oracle it needs as a
//! parameter, and the [`Env`] aggregate bundles them for callers that need
//! several at once.
mod catalog;
mod error;
mod prototypes;

pub use catalog::PrototypeCatalog;
pub use error::{LoadError, OracleError};
pub use prototypes::{BodyPartPrototype, MechanismPrototype};

use crate::body::{BodyPreset, BodyTemplate};

/// Resolves body part prototypes by id.
pub trait BodyPartOracle: Send + Sync {
    fn part(&self, id: &str) -> Option<BodyPartPrototype>;
}

/// Resolves mechanism prototypes by id.
pub trait MechanismOracle: Send + Sync {
    fn mechanism(&self, id: &str) -> Option<MechanismPrototype>;
}

/// Resolves body templates and presets by id.
pub trait BodyOracle: Send + Sync {
    fn template(&self, id: &str) -> Option<BodyTemplate>;

    fn preset(&self, id: &str) -> Option<BodyPreset>;
}

/// Aggregates the oracles needed to spawn bodies.
pub struct Env<'a, P, M, B>
where
    P: BodyPartOracle + ?Sized,
    M: MechanismOracle + ?Sized,
    B: BodyOracle + ?Sized,
{
    parts: Option<&'a P>,
    mechanisms: Option<&'a M>,
    bodies: Option<&'a B>,
}

impl<P, M, B> Clone for Env<'_, P, M, B>
where
    P: BodyPartOracle + ?Sized,
    M: MechanismOracle + ?Sized,
    B: BodyOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<P, M, B> Copy for Env<'_, P, M, B>
where
    P: BodyPartOracle + ?Sized,
    M: MechanismOracle + ?Sized,
    B: BodyOracle + ?Sized,
{
}

pub type AnatomyEnv<'a> =
    Env<'a, dyn BodyPartOracle + 'a, dyn MechanismOracle + 'a, dyn BodyOracle + 'a>;

impl<'a, P, M, B> Env<'a, P, M, B>
where
    P: BodyPartOracle + ?Sized,
    M: MechanismOracle + ?Sized,
    B: BodyOracle + ?Sized,
{
    pub fn new(parts: Option<&'a P>, mechanisms: Option<&'a M>, bodies: Option<&'a B>) -> Self {
        Self {
            parts,
            mechanisms,
            bodies,
        }
    }

    pub fn with_all(parts: &'a P, mechanisms: &'a M, bodies: &'a B) -> Self {
        Self::new(Some(parts), Some(mechanisms), Some(bodies))
    }

    /// Returns the BodyPartOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::PartsNotAvailable` if no part oracle was provided.
    pub fn parts(&self) -> Result<&'a P, OracleError> {
        self.parts.ok_or(OracleError::PartsNotAvailable)
    }

    /// Returns the MechanismOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::MechanismsNotAvailable` if no mechanism oracle was provided.
    pub fn mechanisms(&self) -> Result<&'a M, OracleError> {
        self.mechanisms.ok_or(OracleError::MechanismsNotAvailable)
    }

    /// Returns the BodyOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::BodiesNotAvailable` if no body oracle was provided.
    pub fn bodies(&self) -> Result<&'a B, OracleError> {
        self.bodies.ok_or(OracleError::BodiesNotAvailable)
    }
}

impl<'a> AnatomyEnv<'a> {
    /// Bundles a single catalog that provides every oracle.
    pub fn from_catalog(catalog: &'a PrototypeCatalog) -> Self {
        Env::with_all(
            catalog as &dyn BodyPartOracle,
            catalog as &dyn MechanismOracle,
            catalog as &dyn BodyOracle,
        )
    }
}
