//! Entropy-backed random source.

use platform_host::RandomSource;

#[derive(Debug, Clone, Copy, Default)]
/// Random source backed by the platform entropy pool (`crypto.getRandomValues` in browsers).
pub struct HostRandomSource;

impl RandomSource for HostRandomSource {
    fn next_below(&mut self, bound: u32) -> Result<u32, String> {
        if bound == 0 {
            return Err("random bound must be non-zero".to_string());
        }
        // Rejection zone keeps the draw uniform for bounds that do not divide 2^32.
        let zone = u32::MAX - (u32::MAX % bound);
        loop {
            let mut bytes = [0u8; 4];
            getrandom::getrandom(&mut bytes).map_err(|err| format!("entropy unavailable: {err}"))?;
            let value = u32::from_le_bytes(bytes);
            if value < zone {
                return Ok(value % bound);
            }
        }
    }
}
