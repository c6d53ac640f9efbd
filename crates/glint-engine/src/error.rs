//! Failure kinds for the bootstrap core.
//!
//! Startup errors (`Init`, `WindowCreation`, `FunctionLoad`) are fatal and
//! meant to propagate to the process boundary; `Compile` and `Link` are
//! recoverable in principle (the caller may substitute fallback source);
//! `GpuAllocation` is fatal in this scope.

use thiserror::Error;

use crate::shader::StageKind;

/// Upper bound on captured driver diagnostic text.
///
/// Driver logs are practically unbounded; anything past this limit is cut
/// at a char boundary and marked as truncated.
pub const MAX_DIAG_LEN: usize = 8 * 1024;

/// Errors surfaced by the engine.
///
/// Each variant maps to a distinct process exit code via [`Error::exit_code`].
#[derive(Debug, Error)]
pub enum Error {
    /// The windowing subsystem (event loop) failed to start.
    #[error("windowing subsystem failed to start: {reason}")]
    Init { reason: String },

    /// No window or rendering surface could be obtained.
    #[error("no window or surface obtained: {reason}")]
    WindowCreation { reason: String },

    /// GPU entry points unavailable: adapter or device acquisition failed
    /// after the surface existed.
    #[error("GPU entry points unavailable: {reason}")]
    FunctionLoad { reason: String },

    /// A shader stage failed to compile. `log` holds the verbatim driver
    /// diagnostic (clipped at [`MAX_DIAG_LEN`]).
    #[error("{stage} shader compilation failed:\n{log}")]
    Compile { stage: StageKind, log: String },

    /// Program (pipeline) linking failed. `log` holds the verbatim driver
    /// diagnostic (clipped at [`MAX_DIAG_LEN`]).
    #[error("program link failed:\n{log}")]
    Link { log: String },

    /// GPU-resident buffer creation failed, or the surface was lost with no
    /// recovery path.
    #[error("GPU allocation failed: {reason}")]
    GpuAllocation { reason: String },
}

impl Error {
    /// Stable, distinct non-zero exit code for each failure kind.
    ///
    /// 0 is reserved for a normal window close. The mapping:
    ///
    /// | kind            | code |
    /// |-----------------|------|
    /// | `Init`          | 2    |
    /// | `WindowCreation`| 3    |
    /// | `FunctionLoad`  | 4    |
    /// | `Compile`       | 5    |
    /// | `Link`          | 6    |
    /// | `GpuAllocation` | 7    |
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Init { .. } => 2,
            Error::WindowCreation { .. } => 3,
            Error::FunctionLoad { .. } => 4,
            Error::Compile { .. } => 5,
            Error::Link { .. } => 6,
            Error::GpuAllocation { .. } => 7,
        }
    }
}

/// Clips a driver diagnostic to [`MAX_DIAG_LEN`], marking the cut.
///
/// The cut never lands inside a multi-byte character.
pub(crate) fn clip_diagnostic(text: &str) -> String {
    if text.len() <= MAX_DIAG_LEN {
        return text.to_string();
    }

    let mut end = MAX_DIAG_LEN;
    while !text.is_char_boundary(end) {
        end -= 1;
    }

    let mut clipped = text[..end].to_string();
    clipped.push_str("\n[diagnostic truncated]");
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_codes_are_nonzero_and_distinct() {
        let errors = [
            Error::Init { reason: String::new() },
            Error::WindowCreation { reason: String::new() },
            Error::FunctionLoad { reason: String::new() },
            Error::Compile { stage: StageKind::Vertex, log: String::new() },
            Error::Link { log: String::new() },
            Error::GpuAllocation { reason: String::new() },
        ];

        let codes: Vec<u8> = errors.iter().map(Error::exit_code).collect();
        for (i, code) in codes.iter().enumerate() {
            assert_ne!(*code, 0);
            for other in &codes[i + 1..] {
                assert_ne!(code, other);
            }
        }
    }

    // ── display ──────────────────────────────────────────────────────────

    #[test]
    fn compile_display_carries_stage_and_log_verbatim() {
        let err = Error::Compile {
            stage: StageKind::Fragment,
            log: "error: unknown identifier 'fragColor'".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("fragment"));
        assert!(text.contains("error: unknown identifier 'fragColor'"));
    }

    #[test]
    fn link_display_names_the_program() {
        let err = Error::Link { log: "entry point mismatch".to_string() };
        assert!(err.to_string().contains("program"));
        assert!(err.to_string().contains("entry point mismatch"));
    }

    // ── diagnostic clipping ───────────────────────────────────────────────

    #[test]
    fn short_diagnostics_pass_through_unchanged() {
        assert_eq!(clip_diagnostic("oops"), "oops");
    }

    #[test]
    fn long_diagnostics_are_clipped_and_marked() {
        let long = "x".repeat(MAX_DIAG_LEN + 100);
        let clipped = clip_diagnostic(&long);
        assert!(clipped.len() < long.len());
        assert!(clipped.ends_with("[diagnostic truncated]"));
    }

    #[test]
    fn clipping_respects_char_boundaries() {
        // 'é' is two bytes; an odd limit would otherwise split it.
        let long = "é".repeat(MAX_DIAG_LEN);
        let clipped = clip_diagnostic(&long);
        assert!(clipped.ends_with("[diagnostic truncated]"));
        assert!(clipped.is_char_boundary(clipped.len() - "\n[diagnostic truncated]".len()));
    }
}
