//! Imported keys.

use crate::{CurveParams, ProjectivePoint};
use core::fmt;
use zeroize::{Zeroize, Zeroizing};

/// Kind of an imported key.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum KeyType {
    /// Private scalar together with its public point.
    Private,

    /// Public point only.
    Public,
}

/// Elliptic curve key produced by [`import_raw`](crate::import_raw).
///
/// The public point is always an affine point on [`Key::curve`] with
/// coordinates in `[0, p)`. A private key additionally holds a nonzero scalar
/// which is zeroized when the key is dropped.
#[derive(Clone)]
pub struct Key<'c, U: Zeroize> {
    curve: &'c CurveParams<'c>,
    public: ProjectivePoint<U>,
    secret: Option<Zeroizing<U>>,
    index: Option<usize>,
}

impl<'c, U: Zeroize> Key<'c, U> {
    pub(crate) fn new(
        curve: &'c CurveParams<'c>,
        public: ProjectivePoint<U>,
        secret: Option<Zeroizing<U>>,
    ) -> Self {
        Self {
            curve,
            public,
            secret,
            index: None,
        }
    }

    /// Kind of this key.
    pub fn key_type(&self) -> KeyType {
        if self.secret.is_some() {
            KeyType::Private
        } else {
            KeyType::Public
        }
    }

    /// Is this a private key?
    pub fn is_private(&self) -> bool {
        self.key_type() == KeyType::Private
    }

    /// Curve parameters this key was validated against.
    pub fn curve(&self) -> &'c CurveParams<'c> {
        self.curve
    }

    /// Public point, with `z = 1`.
    pub fn public_point(&self) -> &ProjectivePoint<U> {
        &self.public
    }

    /// Private scalar `k`, if this is a private key.
    pub fn secret_scalar(&self) -> Option<&U> {
        self.secret.as_deref()
    }

    /// Drop the private scalar, keeping only the public point.
    pub fn into_public(mut self) -> Self {
        self.secret = None;
        self
    }

    /// Slot index assigned by higher level key management, if any.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Assign a slot index.
    pub fn set_index(&mut self, index: Option<usize>) {
        self.index = index;
    }
}

impl<U: Zeroize + fmt::Debug> fmt::Debug for Key<'_, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("curve", &self.curve.name)
            .field("key_type", &self.key_type())
            .field("public", &self.public)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}
