//! Producer configuration.

/// Knobs fixed when the producer is opened.
///
/// The process-wide pieces (optimization level, trace flags, strict
/// block ends) cross the boundary once at initialization; the limits
/// are defaults that each [`crate::LiftRequest`] may override.
#[derive(Clone, Copy, Debug)]
pub struct LiftConfig {
    /// IR optimization level. Zero lifts without transformation, which
    /// keeps one guest instruction recognizable as one IMark group.
    pub opt_level: i32,
    /// Instructions lifted per block unless the request overrides it.
    pub max_insns: u32,
    /// Input bytes consumed per block; zero keeps the producer's cap.
    pub max_bytes: u32,
    /// Producer-side debug print flags, forwarded verbatim.
    pub traceflags: i32,
    /// Refuse blocks whose last instruction is cut off by the byte
    /// limit instead of ending the block early.
    pub strict_block_end: bool,
}

impl Default for LiftConfig {
    fn default() -> Self {
        Self {
            opt_level: 0,
            max_insns: 1,
            max_bytes: 0,
            traceflags: 0,
            strict_block_end: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_lift_one_unoptimized_instruction() {
        let config = LiftConfig::default();
        assert_eq!(config.opt_level, 0);
        assert_eq!(config.max_insns, 1);
        assert_eq!(config.max_bytes, 0);
        assert_eq!(config.traceflags, 0);
        assert!(!config.strict_block_end);
    }
}
