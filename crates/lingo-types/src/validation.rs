use crate::message::Message;

/// Outcome of checking a transformed document against its source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationResult {
    /// The transformed document has the expected shape.
    Valid,
    /// The transformed document is missing or adding paths.
    Invalid {
        /// Human-readable description of the mismatch.
        reason: String,
        /// Follow-up messages asking the generator to fix its previous reply.
        correction_request: Option<Vec<Message>>,
    },
}

impl ValidationResult {
    /// An invalid result without a correction request.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
            correction_request: None,
        }
    }

    /// Returns `true` if the result is `Valid`.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The mismatch description, if invalid.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid { reason, .. } => Some(reason),
        }
    }

    /// The correction messages, if any were produced.
    pub fn correction_request(&self) -> Option<&[Message]> {
        match self {
            Self::Invalid {
                correction_request: Some(messages),
                ..
            } => Some(messages),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_has_no_reason() {
        assert!(ValidationResult::Valid.is_valid());
        assert!(ValidationResult::Valid.reason().is_none());
    }

    #[test]
    fn invalid_carries_reason_and_correction() {
        let plain = ValidationResult::invalid("missing a.b");
        assert_eq!(plain.reason(), Some("missing a.b"));
        assert!(plain.correction_request().is_none());

        let corrective = ValidationResult::Invalid {
            reason: "missing".into(),
            correction_request: Some(vec![Message::user("fix it")]),
        };
        assert!(!corrective.is_valid());
        assert_eq!(corrective.correction_request().unwrap().len(), 1);
    }
}
