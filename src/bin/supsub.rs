//! Command-line front end for converting text to Unicode superscript and subscript.
//!
//! # Usage
//!
//! Convert arguments:
//! ```sh
//! supsub "E = mc2"
//! ```
//!
//! Read from stdin, drop anything without a superscript form:
//! ```sh
//! echo "x2 + y2" | supsub --style superscript --unmapped omit
//! ```
//!
//! Machine-readable output with options from a file:
//! ```sh
//! supsub --config supsub.toml --json "H2O"
//! ```

use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use supsub::script::{
    ConversionOptions, ScriptStyle, UnmappedPolicy, convert, convert_style, unmapped_chars,
};
use tracing::{Level, debug, info, subscriber};
use tracing_subscriber::FmtSubscriber;

/// Convert text to Unicode superscript and subscript
#[derive(Parser, Debug)]
#[command(
    name = "supsub",
    about = "Convert text to Unicode superscript and subscript",
    long_about = "Maps every character of the input through a fixed superscript or subscript table.\n\
                  Characters without an entry are kept, omitted, or replaced with a placeholder.",
    version
)]
struct Args {
    /// Text to convert; reads stdin when empty or `-`
    #[arg(value_name = "TEXT")]
    text: Vec<String>,

    /// How to handle characters without a styled form
    #[arg(short, long, value_enum)]
    unmapped: Option<PolicyArg>,

    /// Glyph emitted for unmapped characters under `--unmapped placeholder`
    #[arg(short, long)]
    placeholder: Option<String>,

    /// Which rendering to print
    #[arg(short, long, value_enum, default_value = "both")]
    style: StyleArg,

    /// Load conversion options from a TOML file; flags override it
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print JSON instead of plain text
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Unmapped-character policy options for CLI
#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Keep as is
    Keep,
    /// Omit
    Omit,
    /// Replace with placeholder
    Placeholder,
}

impl From<PolicyArg> for UnmappedPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Keep => UnmappedPolicy::Keep,
            PolicyArg::Omit => UnmappedPolicy::Omit,
            PolicyArg::Placeholder => UnmappedPolicy::Placeholder,
        }
    }
}

/// Output style options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StyleArg {
    /// Both renderings, one labelled line each
    Both,
    #[value(alias = "sup")]
    Superscript,
    #[value(alias = "sub")]
    Subscript,
}

impl StyleArg {
    fn styles(self) -> &'static [ScriptStyle] {
        match self {
            StyleArg::Both => &ScriptStyle::ALL,
            StyleArg::Superscript => &[ScriptStyle::Superscript],
            StyleArg::Subscript => &[ScriptStyle::Subscript],
        }
    }
}

fn setup_logging(verbose: u8) -> Result<(), Box<dyn std::error::Error>> {
    let max_level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(max_level)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .finish();
    subscriber::set_global_default(subscriber)?;

    debug!(?max_level, "logging initialized");
    Ok(())
}

fn read_input(text: &[String]) -> io::Result<String> {
    match text {
        [] => read_stdin(),
        [only] if only == "-" => read_stdin(),
        words => Ok(words.join(" ")),
    }
}

fn read_stdin() -> io::Result<String> {
    let mut buf = String::new();
    io::stdin().lock().read_to_string(&mut buf)?;
    Ok(buf)
}

fn build_options(args: &Args) -> supsub::Result<ConversionOptions> {
    let mut options = match &args.config {
        Some(path) => ConversionOptions::from_toml_file(path)?,
        None => ConversionOptions::default(),
    };
    if let Some(policy) = args.unmapped {
        options = options.with_policy(policy.into());
    }
    if let Some(placeholder) = &args.placeholder {
        options = options.with_placeholder(placeholder.as_str());
    }
    Ok(options)
}

/// Write `line`, adding a newline only when the converted text lacks one.
fn emit(out: &mut impl Write, line: &str) -> io::Result<()> {
    if line.ends_with('\n') {
        out.write_all(line.as_bytes())
    } else {
        writeln!(out, "{line}")
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    setup_logging(args.verbose)?;

    let options = build_options(&args)?;
    let text = read_input(&args.text)?;
    info!(
        policy = %options.policy,
        chars = text.chars().count(),
        "converting input"
    );

    for style in args.style.styles() {
        let missing = unmapped_chars(&text, style.map()).count();
        if missing > 0 {
            info!(%style, missing, "input has characters without a styled form");
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.style == StyleArg::Both {
        let conversion = convert(&text, &options);
        if args.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&conversion)?)?;
        } else {
            emit(&mut out, &format!("superscript: {}", conversion.superscript))?;
            emit(&mut out, &format!("subscript: {}", conversion.subscript))?;
        }
        return Ok(());
    }

    let style = args.style.styles()[0];
    let rendered = convert_style(&text, style, &options);
    if args.json {
        let mut object = serde_json::Map::new();
        object.insert(style.to_string(), serde_json::Value::String(rendered));
        writeln!(out, "{}", serde_json::to_string_pretty(&object)?)?;
    } else {
        emit(&mut out, &rendered)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("supsub").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_args_defaults() {
        let args = parse(&["a", "b"]);
        assert_eq!(args.text, ["a", "b"]);
        assert_eq!(args.style, StyleArg::Both);
        assert!(args.unmapped.is_none());
        assert!(!args.json);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = parse(&["-u", "placeholder", "-p", "#", "-s", "sub", "-vv", "x"]);
        assert_eq!(args.style, StyleArg::Subscript);
        assert_eq!(args.verbose, 2);

        let options = build_options(&args).unwrap();
        assert_eq!(options.policy, UnmappedPolicy::Placeholder);
        assert_eq!(options.placeholder(), "#");
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "policy = \"placeholder\"\nplaceholder = \"*\"").unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let options = build_options(&parse(&["-c", &path, "x"])).unwrap();
        assert_eq!(options.policy, UnmappedPolicy::Placeholder);
        assert_eq!(options.placeholder(), "*");

        let options = build_options(&parse(&["-c", &path, "-u", "omit", "x"])).unwrap();
        assert_eq!(options.policy, UnmappedPolicy::Omit);
        assert_eq!(options.placeholder(), "*");
    }

    #[test]
    fn test_rejects_unknown_policy() {
        let argv = ["supsub", "--unmapped", "drop", "x"];
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_read_input_joins_words() {
        let words = vec!["a".to_string(), "b".to_string()];
        assert_eq!(read_input(&words).unwrap(), "a b");
    }

    #[test]
    fn test_emit_does_not_double_newlines() {
        let mut buf = Vec::new();
        emit(&mut buf, "ᵃ").unwrap();
        emit(&mut buf, "ᵇ\n").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "ᵃ\nᵇ\n");
    }
}
