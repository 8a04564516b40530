use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

use cover_letter_pdf::{Conversation, Error, LetterConfig, Title, prompt};

const STDIN_OUTPUT: &str = "cover_letter.pdf";

#[derive(Parser)]
#[command(
    name = "cover-letter-pdf",
    version,
    about = "Render cover letter text as a paginated PDF"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct Style {
    /// JSON layout configuration file
    #[arg(long, env = "COVER_LETTER_CONFIG")]
    config: Option<PathBuf>,
    /// Maximum characters per line
    #[arg(long)]
    width: Option<usize>,
    /// Title printed in the header bar
    #[arg(long)]
    title: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Render a plain-text letter, one paragraph per line
    Render {
        /// Letter text file, or `-` for stdin
        input: PathBuf,
        /// Output PDF file (defaults to input with .pdf extension)
        output: Option<PathBuf>,
        #[command(flatten)]
        style: Style,
    },
    /// Render the latest letter of a JSON conversation log
    Chat {
        /// Conversation log: [{"role": "assistant", "message": "..."}, ...]
        log: PathBuf,
        /// Output PDF file (defaults to log with .pdf extension)
        output: Option<PathBuf>,
        /// Also print the follow-up exchange
        #[arg(long)]
        transcript: bool,
        #[command(flatten)]
        style: Style,
    },
    /// Print the prompt that asks for a first draft
    Prompt {
        /// Résumé as plain text
        #[arg(long)]
        resume: PathBuf,
        /// Job posting as plain text
        #[arg(long)]
        job: PathBuf,
    },
}

fn require_file(path: &Path) {
    if !path.exists() {
        eprintln!("Error: file not found: {}", path.display());
        std::process::exit(1);
    }
    if !path.is_file() {
        eprintln!("Error: not a file: {}", path.display());
        std::process::exit(1);
    }
}

fn load_config(style: Style) -> Result<LetterConfig, Error> {
    let mut config = match &style.config {
        Some(path) => {
            require_file(path);
            LetterConfig::from_file(path)?
        }
        None => LetterConfig::default(),
    };
    if let Some(width) = style.width {
        config.wrap_width = width;
    }
    if let Some(text) = style.title {
        config.title.get_or_insert_with(Title::default).text = text;
    }
    Ok(config)
}

fn read_input(input: &Path) -> Result<String, Error> {
    if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    require_file(input);
    Ok(std::fs::read_to_string(input)?)
}

/// Resolve the PDF path for `source`, refusing to write over the source file.
fn output_path(source: &Path, output: Option<PathBuf>) -> Result<PathBuf, Error> {
    let output = output.unwrap_or_else(|| {
        if source == Path::new("-") {
            PathBuf::from(STDIN_OUTPUT)
        } else {
            source.with_extension("pdf")
        }
    });
    if output == source {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!(
                "output would overwrite input {}; pass an output path",
                source.display()
            ),
        )
        .into());
    }
    Ok(output)
}

fn run(cli: Cli) -> Result<(), Error> {
    match cli.command {
        Command::Render {
            input,
            output,
            style,
        } => {
            let text = read_input(&input)?;
            let config = load_config(style)?;
            let output = output_path(&input, output)?;
            cover_letter_pdf::write_letter_pdf(&text, &output, &config)
        }
        Command::Chat {
            log,
            output,
            transcript,
            style,
        } => {
            require_file(&log);
            let conversation = Conversation::from_json(&std::fs::read_to_string(&log)?)?;
            let config = load_config(style)?;
            let bytes = cover_letter_pdf::render_conversation(&conversation, &config)?;
            let output = output_path(&log, output)?;
            std::fs::write(&output, bytes)?;
            if transcript {
                println!("{}", conversation.transcript());
            }
            Ok(())
        }
        Command::Prompt { resume, job } => {
            require_file(&resume);
            require_file(&job);
            let resume = std::fs::read_to_string(&resume)?;
            let job = std::fs::read_to_string(&job)?;
            println!("{}", prompt::letter_request(&resume, &job)?);
            Ok(())
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
