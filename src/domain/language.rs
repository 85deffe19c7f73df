//! Language identifiers and their print statement templates

use std::fmt;
use std::str::FromStr;

/// Languages with a known print statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Java,
    Python,
    JavaScript,
    TypeScript,
    C,
    Cpp,
    CSharp,
    Php,
    Ruby,
    Swift,
    Go,
    Rust,
}

/// How to wrap a divider so that running the snippet prints it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementTemplate {
    pub prefix: &'static str,
    pub suffix: &'static str,
    /// Append an escaped `\n` inside the string literal
    pub newline_escape: bool,
}

impl StatementTemplate {
    const fn new(prefix: &'static str, suffix: &'static str) -> Self {
        StatementTemplate {
            prefix,
            suffix,
            newline_escape: false,
        }
    }

    const fn with_newline(prefix: &'static str, suffix: &'static str) -> Self {
        StatementTemplate {
            prefix,
            suffix,
            newline_escape: true,
        }
    }

    /// Wrap `divider` in this template
    pub fn render(&self, divider: &str) -> String {
        let newline = if self.newline_escape { "\\n" } else { "" };
        format!("{}{}{}{}", self.prefix, divider, newline, self.suffix)
    }
}

impl Language {
    pub const ALL: [Language; 12] = [
        Language::Java,
        Language::Python,
        Language::JavaScript,
        Language::TypeScript,
        Language::C,
        Language::Cpp,
        Language::CSharp,
        Language::Php,
        Language::Ruby,
        Language::Swift,
        Language::Go,
        Language::Rust,
    ];

    /// The editor language identifier for this language
    pub fn id(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::CSharp => "csharp",
            Language::Php => "php",
            Language::Ruby => "ruby",
            Language::Swift => "swift",
            Language::Go => "go",
            Language::Rust => "rust",
        }
    }

    /// Look up a language by its exact identifier
    pub fn from_id(id: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|lang| lang.id() == id)
    }

    /// Guess the language of a file from its extension (without the dot)
    pub fn from_extension(ext: &str) -> Option<Language> {
        match ext.to_lowercase().as_str() {
            "java" => Some(Language::Java),
            "py" | "pyw" => Some(Language::Python),
            "js" | "mjs" | "cjs" => Some(Language::JavaScript),
            "ts" | "mts" | "cts" => Some(Language::TypeScript),
            "c" | "h" => Some(Language::C),
            "cpp" | "cc" | "cxx" | "hpp" | "hh" | "hxx" => Some(Language::Cpp),
            "cs" => Some(Language::CSharp),
            "php" => Some(Language::Php),
            "rb" => Some(Language::Ruby),
            "swift" => Some(Language::Swift),
            "go" => Some(Language::Go),
            "rs" => Some(Language::Rust),
            _ => None,
        }
    }

    pub fn template(&self) -> StatementTemplate {
        match self {
            Language::Java => StatementTemplate::new("System.out.println(\"", "\");"),
            Language::Python | Language::Swift => StatementTemplate::new("print(\"", "\")"),
            Language::JavaScript | Language::TypeScript => {
                StatementTemplate::new("console.log(\"", "\");")
            }
            Language::C | Language::Cpp => StatementTemplate::with_newline("printf(\"", "\");"),
            Language::CSharp => StatementTemplate::new("Console.WriteLine(\"", "\");"),
            Language::Php => StatementTemplate::with_newline("echo \"", "\";"),
            Language::Ruby => StatementTemplate::new("puts \"", "\""),
            Language::Go => StatementTemplate::new("fmt.Println(\"", "\")"),
            Language::Rust => StatementTemplate::new("println!(\"", "\");"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_id(s).ok_or_else(|| {
            let valid: Vec<&str> = Language::ALL.iter().map(|lang| lang.id()).collect();
            format!(
                "Unknown language: '{}'. Valid languages are: {}",
                s,
                valid.join(", ")
            )
        })
    }
}

/// Produce the snippet that prints `divider` in the language named by
/// `language_id`. Unknown identifiers get the bare divider.
pub fn print_statement(language_id: &str, divider: &str) -> String {
    match Language::from_id(language_id) {
        Some(language) => language.template().render(divider),
        None => divider.to_string(),
    }
}
