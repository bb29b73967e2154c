/// Failures of the cooling-model computations.
///
/// These are local, deterministic failures: nothing is retried and no
/// partial result is produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// Inputs outside the mathematical domain of the model (zero amplitude,
    /// non-positive log ratio, zero reference time, non-finite values).
    #[error("Domain error: {0}")]
    Domain(String),

    /// An index that does not address the series it was paired with.
    #[error("Range error: {0}")]
    Range(String),

    /// The equilibrium search ran out of iterations.
    #[error("Equilibrium search did not converge within {iterations} iterations (t={time:.2})")]
    Timeout { iterations: u64, time: f64 },
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        AppError::new(4, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_errors_map_to_exit_code_4() {
        let err: AppError = ModelError::Range("index 9 >= 3".to_string()).into();
        assert_eq!(err.exit_code(), 4);
        assert_eq!(err.to_string(), "Range error: index 9 >= 3");
    }
}
