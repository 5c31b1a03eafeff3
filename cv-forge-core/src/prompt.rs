//! Prompt assembly: turns the structured wizard fields into the text prompts
//! sent to the rewriting collaborator.
//!
//! The resume prompt fixes the wire contract with the classifier: the model
//! is instructed to emit the name on line one, the pipe-joined contact line
//! on line two, upper-case section headers and `Role | Company | Dates`
//! sub-headers below. Swapping the collaborator must preserve this shape.

use serde::{Deserialize, Serialize};

/// Structured resume fields collected by the wizard, validated at the UI
/// boundary before reaching the pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeFields {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub portfolio: String,
    pub target_title: String,
    #[serde(default)]
    pub university: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub grad_year: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub languages: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub projects: String,
    #[serde(default)]
    pub certifications: String,
    #[serde(default)]
    pub volunteering: String,
    /// Job description the resume keywords are tailored against. Optional.
    #[serde(default)]
    pub target_job: String,
}

impl ResumeFields {
    /// The pipe-delimited contact line the model is asked to echo as line
    /// two of the resume. Field order is fixed; empty fields are skipped.
    pub fn contact_line(&self) -> String {
        [
            &self.phone,
            &self.city,
            &self.email,
            &self.linkedin,
            &self.github,
            &self.portfolio,
        ]
        .iter()
        .filter(|part| !part.trim().is_empty())
        .map(|part| part.trim())
        .collect::<Vec<_>>()
        .join(" | ")
    }
}

/// System instruction for resume rewriting. Bans markdown bold and section
/// numbers so the classifier sees clean text.
pub const RESUME_SYSTEM_PROMPT: &str = "You are a Senior HR Recruiter. Output strict, clean text. \
     Do NOT use markdown bold (**). Do NOT number the sections.";

/// Builds the resume rewriting prompt from the collected fields.
pub fn resume_prompt(fields: &ResumeFields) -> String {
    let mut optional_sections = String::new();
    if !fields.projects.trim().is_empty() {
        optional_sections.push_str(&format!(
            "\nPROJECTS\n- Projects: {}\n- Rule: Include ALL projects. Format: Name | Stack\n- Description: Concise bullet with impact.\n",
            fields.projects.trim()
        ));
    }
    if !fields.certifications.trim().is_empty() {
        optional_sections.push_str(&format!(
            "\nCERTIFICATIONS\n- {}\n",
            fields.certifications.trim()
        ));
    }
    if !fields.volunteering.trim().is_empty() {
        optional_sections.push_str(&format!(
            "\nVOLUNTEERING\n- {}\n",
            fields.volunteering.trim()
        ));
    }

    let mut tailoring = String::new();
    if !fields.target_job.trim().is_empty() {
        tailoring = format!(
            "\nTARGET JOB DESCRIPTION (tailor keywords to match):\n{}\n",
            fields.target_job.trim()
        );
    }

    format!(
        "Act as a Senior Resume Expert. Write a professional CV based on this data.\n\
         \n\
         RULES:\n\
         1. Clean Text Only (No markdown bold like **).\n\
         2. No Section Numbers (Just \"PROFESSIONAL EXPERIENCE\").\n\
         3. Metrics: Add numbers (%, $) to experience bullets.\n\
         4. Dates: Use \"Mon YYYY\" format.\n\
         \n\
         HEADER:\n\
         {name}\n\
         {contact}\n\
         \n\
         SECTIONS:\n\
         PROFESSIONAL SUMMARY (3 lines, tailored to {target_title})\n\
         \n\
         TECHNICAL SKILLS (Grouped: Languages, Tools, etc. Include ALL user skills: {skills})\n\
         \n\
         PROFESSIONAL EXPERIENCE (Role | Company | Dates)\n\
         User Data: {experience}\n\
         \n\
         EDUCATION ({degree}, {university}, {grad_year})\n\
         {optional_sections}\n\
         LANGUAGES ({languages})\n\
         {tailoring}",
        name = fields.name.trim().to_uppercase(),
        contact = fields.contact_line(),
        target_title = fields.target_title.trim(),
        skills = fields.skills.trim(),
        experience = fields.experience.trim(),
        degree = fields.degree.trim(),
        university = fields.university.trim(),
        grad_year = fields.grad_year.trim(),
        optional_sections = optional_sections,
        languages = fields.languages.trim(),
        tailoring = tailoring,
    )
}

/// Builds the cover-letter prompt for the candidate and target role.
pub fn cover_letter_prompt(fields: &ResumeFields) -> String {
    format!(
        "Write a cover letter for {} for the {} role. Plain text only, no markdown.",
        fields.name.trim(),
        fields.target_title.trim()
    )
}

/// Builds the ATS scoring prompt for a generated resume against a job
/// description.
pub fn ats_prompt(resume_text: &str, job_description: &str) -> String {
    format!(
        "Analyze this CV against this Job Description: {job_description}\n\n\
         CV:\n{resume_text}\n\n\
         Give a Score out of 100 and list missing keywords."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_fields() -> ResumeFields {
        ResumeFields {
            name: "John Smith".to_string(),
            email: "john@x.com".to_string(),
            phone: "+1 555".to_string(),
            target_title: "Data Scientist".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn contact_line_skips_empty_fields_in_order() {
        let mut fields = minimal_fields();
        fields.city = "New York".to_string();
        assert_eq!(fields.contact_line(), "+1 555 | New York | john@x.com");
    }

    #[test]
    fn optional_sections_appear_only_when_present() {
        let mut fields = minimal_fields();
        let without = resume_prompt(&fields);
        assert!(!without.contains("PROJECTS"));
        assert!(!without.contains("VOLUNTEERING"));

        fields.projects = "cv-forge | Rust".to_string();
        fields.volunteering = "Food bank".to_string();
        let with = resume_prompt(&fields);
        assert!(with.contains("PROJECTS"));
        assert!(with.contains("VOLUNTEERING"));
    }

    #[test]
    fn header_name_is_upper_cased() {
        let prompt = resume_prompt(&minimal_fields());
        assert!(prompt.contains("JOHN SMITH"));
    }

    #[test]
    fn job_description_tailoring_is_optional() {
        let mut fields = minimal_fields();
        assert!(!resume_prompt(&fields).contains("TARGET JOB DESCRIPTION"));
        fields.target_job = "Looking for a Rust engineer".to_string();
        assert!(resume_prompt(&fields).contains("TARGET JOB DESCRIPTION"));
    }
}
