use clap::Parser;
use print_divider::application::{Command, CommandService};
use print_divider::cli::{format_config, format_language_list, Cli, Commands, EditorArgs};
use print_divider::domain::Language;
use print_divider::error::{PrintDividerError, Result};
use print_divider::infrastructure::{
    init_logging, ConfigStore, FileConfigStore, FileEditor, Position, TerminalHost,
};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(Failure::Reported(e)) => std::process::exit(e.exit_code()),
        Err(Failure::Unreported(e)) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Errors from command dispatch have already been shown to the user
enum Failure {
    Reported(PrintDividerError),
    Unreported(PrintDividerError),
}

impl From<PrintDividerError> for Failure {
    fn from(e: PrintDividerError) -> Self {
        Failure::Unreported(e)
    }
}

fn run(cli: Cli) -> std::result::Result<(), Failure> {
    let store = match cli.config {
        Some(path) => FileConfigStore::new(path),
        None => FileConfigStore::default_location()?,
    };

    match cli.command {
        Commands::Configure { editor, token } => {
            let host = TerminalHost::stdio(open_editor(editor)?).with_answer(token);
            let mut service = CommandService::new(store, host);
            service
                .run(Command::ConfigureDivider)
                .map_err(Failure::Reported)
        }
        Commands::Insert { editor } => {
            let host = TerminalHost::stdio(open_editor(editor)?);
            let mut service = CommandService::new(store, host);
            service.run(Command::InsertDivider).map_err(Failure::Reported)
        }
        Commands::Preview { language } => {
            let service = CommandService::new(store, TerminalHost::stdio(None));
            println!("{}", service.preview(&language)?);
            Ok(())
        }
        Commands::Show => {
            print!("{}", format_config(&store.load()?));
            Ok(())
        }
        Commands::Languages => {
            print!("{}", format_language_list(&Language::ALL));
            Ok(())
        }
    }
}

/// Open the file named on the command line, if any, as the active editor
fn open_editor(args: EditorArgs) -> Result<Option<FileEditor>> {
    let cursor = Position::from_args(args.line, args.column)?;
    args.file
        .map(|path| FileEditor::open(&path, args.language, cursor))
        .transpose()
}
