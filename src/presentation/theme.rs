use colored::Colorize;

pub struct Theme {
    pub title: fn(&str) -> String,
    pub lang: fn(&str) -> String,
    pub line: fn(&str) -> String,
    pub para: fn(&str) -> String,
    pub error: fn(&str) -> String,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name {
            "plain" | "" => Self::plain(),
            "vivid" => Self::vivid(),
            _ => {
                eprintln!("{}", format!("✘ Unknown theme: {}", name).red());
                Self::plain()
            }
        }
    }

    fn plain() -> Self {
        Self {
            title: |s| s.bold().to_string(),
            lang: |s| s.cyan().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            para: |s| s.normal().to_string(),
            error: |s| s.red().to_string(),
        }
    }

    fn vivid() -> Self {
        Self {
            title: |s| s.bright_magenta().italic().bold().underline().to_string(),
            lang: |s| s.green().italic().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            para: |s| s.bright_white().to_string(),
            error: |s| s.bright_red().bold().to_string(),
        }
    }
}
