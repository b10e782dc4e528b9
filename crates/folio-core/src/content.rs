//! Canned portfolio content, expressed as transcript segments.

use crate::command_registry::CommandRegistry;
use crate::projects::ProjectCatalog;
use crate::projects::ProjectRecord;
use crate::state::UiTheme;
use crate::transcript::Content;
use crate::transcript::Segment;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub email: &'static str,
    pub handle: &'static str,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Vikash Kumar",
            email: "rajvikash18113@gmail.com",
            handle: "rajvikash18113",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSummary {
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub updated: Option<String>,
}

const CERTIFICATES: [(&str, &str); 10] = [
    ("Learn C++ (CodeChef)", "doc/certificate/learn-c++-codechef.pdf"),
    (
        "Problem Solver (HackerRank)",
        "doc/certificate/problem-solving-hackerrank.pdf",
    ),
    ("Web Development", "doc/certificate/web-dev-internship.pdf"),
    (
        "Introduction to MongoDB",
        "doc/certificate/introduction-to-mongodb.pdf",
    ),
    (
        "Data Science (Accenture)",
        "doc/certificate/data-science-accenture.pdf",
    ),
    ("Summer Workshop (GFG)", "doc/certificate/summer-workshop-gfg.pdf"),
    ("Ethical Hacker (Cisco)", "doc/certificate/ethical-hacker-cisco.pdf"),
    ("Cyber Security (Cisco)", "doc/certificate/cybersecurity-cisco.pdf"),
    ("IT Essential (Cisco)", "doc/certificate/it-essential-cisco.pdf"),
    ("IOT (Cisco)", "doc/certificate/iot-cisco.pdf"),
];

const BANNER: &str = r" __   __  _   _   ___    _    _   _
 \ \ / / | | | | / __|  /_\  | | | |
  \ V /  | |_| | \__ \ / _ \ | |_| |
   \_/    \___/  |___//_/ \_\ \___/";

pub fn help_listing() -> Vec<Segment> {
    let mut content = Content::new().text("Available commands:");
    for spec in CommandRegistry::listed() {
        content = content
            .line_break()
            .text("- ")
            .strong(spec.usage())
            .text(format!(": {}", spec.summary));
    }
    content.build()
}

pub fn about(profile: &Profile) -> Vec<Segment> {
    Content::new()
        .text(format!(
            "Hello! I'm {}, a passionate Computer Science undergraduate with a love for solving \
             complex problems and building efficient solutions. I have a strong interest in \
             software development and enjoy bringing ideas to life using technologies like C++ \
             and JavaScript. This passion isn't just academic; I have solved over 500 coding \
             problems on CodeChef, LeetCode and various platforms. I'm always eager to learn and \
             currently seeking opportunities to apply my problem-solving skills to real-world \
             challenges. Feel free to explore my work or get in touch!",
            profile.name
        ))
        .build()
}

pub fn skills() -> Vec<Segment> {
    Content::new()
        .strong("Languages:")
        .text(" C++, Java, JavaScript, HTML/CSS")
        .line_break()
        .strong("Tools:")
        .text(" Git, Github, VS Code")
        .line_break()
        .strong("Databases:")
        .text(" MySQL, MongoDB")
        .build()
}

pub fn projects_list(catalog: &ProjectCatalog) -> Vec<Segment> {
    let mut content = Content::new().text("Here are some of my projects:");
    for record in catalog.iter() {
        content = content
            .line_break()
            .text(format!("{}. ", record.id))
            .link(record.title, record.source_url)
            .text(format!(" - {}", record.description));
    }
    content
        .line_break()
        .text("Type 'project <id>' for details.")
        .build()
}

pub fn project_detail(record: &ProjectRecord) -> Vec<Segment> {
    Content::new()
        .strong(record.title)
        .line_break()
        .text(record.description)
        .line_break()
        .strong("Tech:")
        .text(format!(" {}", record.tech.join(", ")))
        .line_break()
        .strong("Live demo:")
        .text(" ")
        .link(record.demo_url, record.demo_url)
        .line_break()
        .strong("Source:")
        .text(" ")
        .link(record.source_url, record.source_url)
        .build()
}

pub fn project_not_found(arg: Option<&str>) -> Vec<Segment> {
    let text = match arg {
        Some(arg) => format!("Project not found: {arg}. Type 'projects' to see the list."),
        None => "Project not found. Usage: project <id>. Type 'projects' to see the list."
            .to_string(),
    };
    Content::new().text(text).build()
}

pub fn coding(profile: &Profile) -> Vec<Segment> {
    let handle = profile.handle;
    Content::new()
        .text("Here are my Coding Profiles:")
        .line_break()
        .text("1. ")
        .link("Leetcode", format!("https://leetcode.com/{handle}/"))
        .line_break()
        .text("2. ")
        .link("CodeChef", format!("https://www.codechef.com/users/{handle}"))
        .line_break()
        .text("3. ")
        .link(
            "GeeksForGeeks",
            format!("https://www.geeksforgeeks.org/user/{handle}/"),
        )
        .line_break()
        .text("4. ")
        .link("GitHub", format!("https://github.com/{handle}"))
        .build()
}

pub fn resume() -> Vec<Segment> {
    Content::new()
        .text("You can download my resume here:")
        .line_break()
        .link("Download Resume", "doc/resume.pdf")
        .build()
}

pub fn certificates() -> Vec<Segment> {
    let mut content = Content::new().text("Here are my Certificates:");
    for (label, target) in CERTIFICATES {
        content = content.line_break().link(label, target);
    }
    content.build()
}

pub fn contact(profile: &Profile) -> Vec<Segment> {
    let handle = profile.handle;
    Content::new()
        .text("You can reach me via:")
        .line_break()
        .text("- ")
        .strong("Email:")
        .text(" ")
        .link(profile.email, format!("mailto:{}", profile.email))
        .line_break()
        .text("- ")
        .strong("LinkedIn:")
        .text(" ")
        .link(
            format!("linkedin.com/in/{handle}"),
            format!("https://linkedin.com/in/{handle}"),
        )
        .line_break()
        .text("- ")
        .strong("GitHub:")
        .text(" ")
        .link(
            format!("github.com/{handle}"),
            format!("https://github.com/{handle}"),
        )
        .build()
}

pub fn banner() -> Vec<Segment> {
    Content::new().preformatted(BANNER).build()
}

pub fn theme_usage() -> Vec<Segment> {
    let names: Vec<String> = UiTheme::ALL
        .iter()
        .map(|theme| format!("'{}'", theme.label()))
        .collect();
    Content::new()
        .text(format!(
            "Usage: Type {} to change the theme directly.",
            names.join(", ")
        ))
        .build()
}

pub fn theme_set(theme: UiTheme) -> Vec<Segment> {
    Content::new()
        .text(format!("Theme set to: {}", theme.label()))
        .build()
}

pub fn command_not_found(line: &str) -> Vec<Segment> {
    Content::new()
        .text(format!(
            "Command not found: {line}. Type 'command' for a list of commands."
        ))
        .build()
}

pub fn fetching_repos() -> Vec<Segment> {
    Content::new().text("Fetching GitHub repositories...").build()
}

pub fn repo_list(repos: &[RepoSummary]) -> Vec<Segment> {
    if repos.is_empty() {
        return Content::new().text("No public repositories found.").build();
    }
    let mut content = Content::new();
    for (idx, repo) in repos.iter().enumerate() {
        if idx > 0 {
            content = content.line_break();
        }
        content = content.link(repo.name.as_str(), repo.html_url.as_str()).text(format!(
            " - {}",
            repo.description.as_deref().unwrap_or("No description")
        ));
        if let Some(updated) = &repo.updated {
            content = content.text(format!(" (updated {updated})"));
        }
    }
    content.build()
}

pub fn repo_error() -> Vec<Segment> {
    Content::new()
        .text(
            "Error fetching GitHub repositories. Please check the username and your connection.",
        )
        .build()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::transcript::Block;
    use crate::transcript::BlockId;
    use crate::transcript::BlockKind;

    fn text(segments: Vec<Segment>) -> String {
        Block {
            id: BlockId(0),
            kind: BlockKind::Output,
            segments,
        }
        .plain_text()
    }

    #[test]
    fn help_lists_listed_commands_only() {
        let help = text(help_listing());
        assert!(help.starts_with("Available commands:"));
        assert!(help.contains("- project <id>: "));
        assert!(help.contains("- clear: Clear the terminal."));
        assert!(!help.contains("- help:"));
        assert!(!help.contains("- light:"));
    }

    #[test]
    fn repo_list_falls_back_to_no_description() {
        let repos = vec![
            RepoSummary {
                name: "folio".to_string(),
                html_url: "https://github.com/u/folio".to_string(),
                description: None,
                updated: None,
            },
            RepoSummary {
                name: "tracker".to_string(),
                html_url: "https://github.com/u/tracker".to_string(),
                description: Some("Tasks".to_string()),
                updated: Some("2026-10-01".to_string()),
            },
        ];
        assert_eq!(
            text(repo_list(&repos)),
            "folio - No description\ntracker - Tasks (updated 2026-10-01)"
        );
        assert_eq!(text(repo_list(&[])), "No public repositories found.");
    }

    #[test]
    fn theme_usage_names_every_theme() {
        assert_eq!(
            text(theme_usage()),
            "Usage: Type 'dark', 'light', 'matrix' to change the theme directly."
        );
    }

    #[test]
    fn banner_is_preformatted() {
        assert!(matches!(banner().as_slice(), [Segment::Preformatted(_)]));
    }
}
