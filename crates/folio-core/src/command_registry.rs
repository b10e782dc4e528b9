use crate::state::UiTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandId {
    Help,
    About,
    Skills,
    Projects,
    Project,
    Coding,
    Resume,
    Certificate,
    Contact,
    ThemeUsage,
    SetTheme(UiTheme),
    Github,
    Banner,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    None,
    One { name: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub token: &'static str,
    pub id: CommandId,
    pub arity: Arity,
    pub summary: &'static str,
    pub listed: bool,
}

impl CommandSpec {
    pub fn usage(&self) -> String {
        match self.arity {
            Arity::None => self.token.to_string(),
            Arity::One { name } => format!("{} <{}>", self.token, name),
        }
    }
}

pub struct CommandRegistry;

const fn spec(token: &'static str, id: CommandId, summary: &'static str) -> CommandSpec {
    CommandSpec {
        token,
        id,
        arity: Arity::None,
        summary,
        listed: true,
    }
}

// Enumeration order is also the Tab-completion order.
const COMMAND_SPECS: [CommandSpec; 17] = [
    spec("command", CommandId::Help, "List available commands."),
    CommandSpec {
        listed: false,
        ..spec("help", CommandId::Help, "List available commands.")
    },
    spec("about", CommandId::About, "Who am I?"),
    spec("skills", CommandId::Skills, "What I can do."),
    spec("projects", CommandId::Projects, "See my work."),
    CommandSpec {
        arity: Arity::One { name: "id" },
        ..spec("project", CommandId::Project, "Details of one project.")
    },
    spec("coding", CommandId::Coding, "Analyze my coding profiles."),
    spec("resume", CommandId::Resume, "Get my resume."),
    spec("certificate", CommandId::Certificate, "See my certifications."),
    spec("contact", CommandId::Contact, "Let's connect."),
    spec("theme", CommandId::ThemeUsage, "Show the theme options."),
    CommandSpec {
        listed: false,
        ..spec("light", CommandId::SetTheme(UiTheme::Light), "Light theme.")
    },
    CommandSpec {
        listed: false,
        ..spec("dark", CommandId::SetTheme(UiTheme::Dark), "Dark theme.")
    },
    CommandSpec {
        listed: false,
        ..spec("matrix", CommandId::SetTheme(UiTheme::Matrix), "Matrix theme.")
    },
    spec("github", CommandId::Github, "See my recent work on GitHub."),
    spec("banner", CommandId::Banner, "Print the name banner."),
    spec("clear", CommandId::Clear, "Clear the terminal."),
];

impl CommandRegistry {
    pub fn list() -> &'static [CommandSpec] {
        &COMMAND_SPECS
    }

    pub fn tokens() -> impl Iterator<Item = &'static str> {
        COMMAND_SPECS.iter().map(|spec| spec.token)
    }

    /// Case-insensitive exact lookup.
    pub fn lookup(token: &str) -> Option<&'static CommandSpec> {
        let token = token.to_ascii_lowercase();
        COMMAND_SPECS.iter().find(|spec| spec.token == token)
    }

    /// First token, in enumeration order, that starts with `partial`.
    pub fn complete(partial: &str) -> Option<&'static str> {
        let partial = partial.trim().to_ascii_lowercase();
        if partial.is_empty() {
            return None;
        }
        Self::tokens().find(|token| token.starts_with(&partial))
    }

    pub fn listed() -> impl Iterator<Item = &'static CommandSpec> {
        COMMAND_SPECS.iter().filter(|spec| spec.listed)
    }
}
