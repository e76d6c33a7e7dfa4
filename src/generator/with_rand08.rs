//! Integration with `rand` (v0.8) crate.

use super::RandSource;
use crate::GenerateError;
use rand::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), GenerateError> {
        self.0.try_fill_bytes(dest).map_err(|err| {
            tracing::warn!(code = ?err.code(), "random number generator failed");
            GenerateError::RandomSource(err.code())
        })
    }
}
