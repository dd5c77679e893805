use thiserror::Error;

use super::code::ResultCode;

/// Structured decode failure, reported back to the card as a TERMINAL RESPONSE.
///
/// Every decoder in this crate fails with this type and nothing else. The
/// result code decides the general result byte; `additional_info` and
/// `explanation` are optional details.
///
/// # Examples
/// ```
/// use stk_core::{ResultCode, ResultException};
///
/// let err = ResultException::new(ResultCode::CmdDataNotUnderstood)
///     .with_explanation("bad length modifier");
/// assert_eq!(err.code(), ResultCode::CmdDataNotUnderstood);
/// assert_eq!(err.additional_info(), None);
/// assert!(err.to_string().contains("bad length modifier"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}{}", render_details(.additional_info, .explanation))]
pub struct ResultException {
    code: ResultCode,
    additional_info: Option<u32>,
    explanation: Option<String>,
}

/// Misuse of the [`ResultException`] constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidResultException {
    #[error("result {code} requires additional information")]
    MissingAdditionalInfo { code: ResultCode },
    #[error("additional information must be non-negative and fit in 32 bits, got {value}")]
    NegativeAdditionalInfo { value: i64 },
}

impl ResultException {
    /// Builds a result without additional information.
    ///
    /// # Panics
    /// Panics when `code` is one of the results that mandate additional
    /// information; use [`ResultException::try_new`] to check instead.
    pub fn new(code: ResultCode) -> Self {
        match Self::try_new(code) {
            Ok(result) => result,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_new(code: ResultCode) -> Result<Self, InvalidResultException> {
        if code.requires_additional_info() {
            return Err(InvalidResultException::MissingAdditionalInfo { code });
        }
        Ok(Self {
            code,
            additional_info: None,
            explanation: None,
        })
    }

    /// Builds a result carrying a cause value.
    ///
    /// # Panics
    /// Panics when `additional_info` is negative or does not fit in `u32`.
    pub fn with_additional_info(code: ResultCode, additional_info: i64) -> Self {
        match Self::try_with_additional_info(code, additional_info) {
            Ok(result) => result,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_with_additional_info(
        code: ResultCode,
        additional_info: i64,
    ) -> Result<Self, InvalidResultException> {
        let value = u32::try_from(additional_info).map_err(|_| {
            InvalidResultException::NegativeAdditionalInfo {
                value: additional_info,
            }
        })?;
        Ok(Self {
            code,
            additional_info: Some(value),
            explanation: None,
        })
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn code(&self) -> ResultCode {
        self.code
    }

    pub fn additional_info(&self) -> Option<u32> {
        self.additional_info
    }

    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    pub(crate) fn cmd_data_not_understood(explanation: impl Into<String>) -> Self {
        Self::new(ResultCode::CmdDataNotUnderstood).with_explanation(explanation)
    }

    pub(crate) fn required_values_missing(explanation: impl Into<String>) -> Self {
        Self::new(ResultCode::RequiredValuesMissing).with_explanation(explanation)
    }
}

fn render_details(additional_info: &Option<u32>, explanation: &Option<String>) -> String {
    let mut out = String::new();
    if let Some(info) = additional_info {
        out.push_str(&format!(", additional info 0x{info:02X}"));
    }
    if let Some(text) = explanation {
        out.push_str(": ");
        out.push_str(text);
    }
    out
}
