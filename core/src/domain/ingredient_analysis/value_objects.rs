#[derive(Debug, Clone)]
pub struct ScanImageInput {
    pub image_data: Vec<u8>,
    pub allergies: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AnalyzeTextInput {
    pub text: String,
    pub allergies: Vec<String>,
}
