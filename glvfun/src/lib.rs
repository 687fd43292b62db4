#![no_std]
#![doc = include_str!("../README.md")]
#![allow(non_snake_case)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[cfg(feature = "std")]
#[macro_use]
extern crate std;

pub mod decompose;
pub mod endo;
pub mod field;
pub mod hex;
pub mod op;

mod error;
mod params;
mod point;

#[cfg(any(test, feature = "proptest"))]
#[cfg_attr(docsrs, doc(cfg(feature = "proptest")))]
pub mod proptest;

pub use decompose::Decomposition;
pub use error::Error;
pub use num_bigint;
pub use params::{Curve, CurveParams};
pub use point::Point;
pub use rand_core;

#[cfg(test)]
lazy_static::lazy_static! {
    pub(crate) static ref BN254: CurveParams = CurveParams::bn254().unwrap();
}
