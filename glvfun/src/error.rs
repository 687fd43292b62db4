use crate::hex::HexError;
use core::fmt;

/// The ways arithmetic and curve setup can fail.
///
/// Every variant is a deterministic function of the inputs so none of them are worth retrying.
/// They indicate a malformed point or inconsistent curve constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Tried to invert zero modulo a prime.
    DivisionByZero,
    /// The value is a quadratic non-residue so has no square root.
    NoSquareRoot,
    /// Neither eigenvalue candidate maps the generator onto its endomorphism image.
    NoMatchingEigenvalue,
    /// The coordinates do not satisfy the curve equation.
    NotOnCurve,
    /// A curve parameter invariant does not hold. The message names the invariant.
    InvalidParameters(&'static str),
    /// A hex encoded constant failed to decode.
    Hex(HexError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Error::*;
        match self {
            DivisionByZero => write!(f, "attempted to invert zero"),
            NoSquareRoot => write!(f, "value has no square root modulo the prime"),
            NoMatchingEigenvalue => write!(
                f,
                "no eigenvalue candidate satisfies [λ]G = φ(G), the curve constants are inconsistent"
            ),
            NotOnCurve => write!(f, "point is not on the curve"),
            InvalidParameters(reason) => write!(f, "invalid curve parameters: {}", reason),
            Hex(e) => write!(f, "invalid hex constant: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<HexError> for Error {
    fn from(e: HexError) -> Self {
        Error::Hex(e)
    }
}
