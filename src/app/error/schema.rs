#[derive(serde::Serialize)]
pub struct Error {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorDetails>>,
}

#[derive(serde::Serialize)]
pub struct ErrorDetails {
    pub field: String,
    pub message: String,
}
