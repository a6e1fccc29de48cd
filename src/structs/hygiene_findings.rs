#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HygieneFindings {
    pub suggestions: Vec<String>,
    pub vulnerabilities: Vec<String>,
}
