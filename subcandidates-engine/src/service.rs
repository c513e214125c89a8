//! The conversion service boundary

use tracing::trace;

use crate::error::Result;

/// Maps raw input to an ordered list of candidate strings, best first.
///
/// One instance is shared read-only by every controller, so implementations
/// must not keep per-session state. An empty list is a valid answer.
pub trait ConversionService: Send + Sync {
    fn convert(&self, raw: &str) -> Result<Vec<String>>;
}

/// A service that offers the raw input back as its only candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityConversion;

impl ConversionService for IdentityConversion {
    fn convert(&self, raw: &str) -> Result<Vec<String>> {
        trace!("identity conversion: {:?}", raw);
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![raw.to_string()])
    }
}
