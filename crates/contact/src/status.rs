/// UI feedback for a single submit attempt.
///
/// Three states with one-way transitions: idle, submitting, done (either
/// submitted or failed). There is no cancellation and no retry; a new page
/// render starts over from idle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionStatus {
    pub submitted: bool,
    pub submitting: bool,
    pub info: StatusInfo,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub error: bool,
    pub message: Option<String>,
}

impl SubmissionStatus {
    pub fn idle() -> Self {
        Self {
            submitted: false,
            submitting: false,
            info: StatusInfo::default(),
        }
    }

    pub fn submitting() -> Self {
        Self {
            submitted: false,
            submitting: true,
            info: StatusInfo::default(),
        }
    }

    pub fn submitted(self, message: impl Into<String>) -> Self {
        Self {
            submitted: true,
            submitting: false,
            info: StatusInfo {
                error: false,
                message: Some(message.into()),
            },
        }
    }

    pub fn failed(self, message: impl Into<String>) -> Self {
        Self {
            submitted: false,
            submitting: false,
            info: StatusInfo {
                error: true,
                message: Some(message.into()),
            },
        }
    }

    pub fn has_banner(&self) -> bool {
        self.info.message.is_some()
    }

    pub fn banner(&self) -> &str {
        self.info.message.as_deref().unwrap_or_default()
    }
}

impl Default for SubmissionStatus {
    fn default() -> Self {
        Self::idle()
    }
}
