use crate::structs::github::repo_metadata::RepoMetadata;
use crate::structs::hygiene_findings::HygieneFindings;

pub const ADD_DESCRIPTION: &str = "Add a repository description to help others understand your project.";
pub const ADD_README: &str = "Add a README.md file to document your project.";
pub const ADD_LICENSE: &str = "Consider adding a license file to specify usage terms.";
pub const ADD_GITIGNORE: &str = "Add a .gitignore file to keep build output and local files out of version control.";
pub const GITIGNORE_VULNERABILITY: &str = "Add a .gitignore file to prevent sensitive information from being committed.";

/// Presence checks for conventional repository files.
///
/// These are plain substring tests on paths, so a nested `docs/license-faq.md`
/// satisfies the license check just as a top-level `LICENSE` does.
pub fn check_hygiene<S: AsRef<str>>(metadata: &RepoMetadata, paths: &[S]) -> HygieneFindings {
    let lowered: Vec<String> = paths.iter().map(|p| p.as_ref().to_lowercase()).collect();
    let mut findings = HygieneFindings::default();

    let has_description = metadata
        .description
        .as_deref()
        .is_some_and(|d| !d.trim().is_empty());
    if !has_description {
        findings.suggestions.push(ADD_DESCRIPTION.to_string());
    }

    if !lowered.iter().any(|p| p.ends_with("readme.md")) {
        findings.suggestions.push(ADD_README.to_string());
    }

    if !lowered.iter().any(|p| p.contains("license")) {
        findings.suggestions.push(ADD_LICENSE.to_string());
    }

    if !lowered.iter().any(|p| p.contains(".gitignore")) {
        findings.suggestions.push(ADD_GITIGNORE.to_string());
        findings.vulnerabilities.push(GITIGNORE_VULNERABILITY.to_string());
    }

    findings
}
