use serde::Serialize;

/// Body of every successful submission.
#[derive(Serialize)]
pub struct Acknowledgement {
    pub success: bool,
    pub message: &'static str,
}

impl Acknowledgement {
    pub fn new(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}
