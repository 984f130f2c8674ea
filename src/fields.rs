use crate::models::PersonalInfo;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});

static LINKEDIN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)linkedin\.com/in/[\w-]+").unwrap());

static GITHUB_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)github\.com/[\w-]+").unwrap());

/// First non-blank line, trimmed. Headers and other noise come back as-is.
pub fn extract_name(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

pub fn extract_email(text: &str) -> Option<String> {
    first_match(&EMAIL_REGEX, text)
}

pub fn extract_phone(text: &str) -> Option<String> {
    first_match(&PHONE_REGEX, text)
}

pub fn extract_linkedin(text: &str) -> Option<String> {
    first_match(&LINKEDIN_REGEX, text)
}

pub fn extract_github(text: &str) -> Option<String> {
    first_match(&GITHUB_REGEX, text)
}

/// Runs every contact extractor independently over the full text.
pub fn extract_personal_info(text: &str) -> PersonalInfo {
    PersonalInfo {
        name: extract_name(text),
        email: extract_email(text),
        phone: extract_phone(text),
        linkedin: extract_linkedin(text),
        github: extract_github(text),
        ..Default::default()
    }
}

fn first_match(re: &Regex, text: &str) -> Option<String> {
    re.find(text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_first_non_blank_line() {
        let text = "\n   \n  Jane Doe  \nSoftware Engineer";
        assert_eq!(extract_name(text).as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn name_keeps_header_noise() {
        let text = "CURRICULUM VITAE\nJane Doe";
        assert_eq!(extract_name(text).as_deref(), Some("CURRICULUM VITAE"));
    }

    #[test]
    fn name_none_for_blank_text() {
        assert_eq!(extract_name("  \n\t\n"), None);
    }

    #[test]
    fn email_basic() {
        let text = "Contact: jane.doe+jobs@mail.example.co.uk or later";
        assert_eq!(
            extract_email(text).as_deref(),
            Some("jane.doe+jobs@mail.example.co.uk")
        );
    }

    #[test]
    fn email_first_wins() {
        let text = "a@first.io then b@second.io";
        assert_eq!(extract_email(text).as_deref(), Some("a@first.io"));
    }

    #[test]
    fn email_requires_letter_tld() {
        assert_eq!(extract_email("user@host.1"), None);
    }

    #[test]
    fn phone_plain_dashes() {
        assert_eq!(
            extract_phone("Phone: 555-123-4567").as_deref(),
            Some("555-123-4567")
        );
    }

    #[test]
    fn phone_with_country_code_and_parens() {
        assert_eq!(
            extract_phone("Call +1 (555) 123-4567 today").as_deref(),
            Some("+1 (555) 123-4567")
        );
    }

    #[test]
    fn phone_dotted() {
        assert_eq!(
            extract_phone("tel 555.123.4567").as_deref(),
            Some("555.123.4567")
        );
    }

    #[test]
    fn phone_none_without_enough_digits() {
        assert_eq!(extract_phone("Call 555-1234"), None);
    }

    #[test]
    fn linkedin_case_insensitive() {
        let text = "Profile: https://www.LinkedIn.com/in/jane-doe_42";
        assert_eq!(
            extract_linkedin(text).as_deref(),
            Some("LinkedIn.com/in/jane-doe_42")
        );
    }

    #[test]
    fn github_handle() {
        let text = "Code at github.com/janedoe/resmerge";
        assert_eq!(extract_github(text).as_deref(), Some("github.com/janedoe"));
    }

    #[test]
    fn personal_info_on_empty_text_is_all_none() {
        let info = extract_personal_info("");
        assert!(info.is_empty());
    }

    #[test]
    fn personal_info_full_header() {
        let text = "Jane Doe\njane@doe.dev | 555-123-4567\nlinkedin.com/in/janedoe | github.com/janedoe";
        let info = extract_personal_info(text);
        assert_eq!(info.name.as_deref(), Some("Jane Doe"));
        assert_eq!(info.email.as_deref(), Some("jane@doe.dev"));
        assert_eq!(info.phone.as_deref(), Some("555-123-4567"));
        assert_eq!(info.linkedin.as_deref(), Some("linkedin.com/in/janedoe"));
        assert_eq!(info.github.as_deref(), Some("github.com/janedoe"));
        assert_eq!(info.location, None);
        assert_eq!(info.website, None);
    }
}
