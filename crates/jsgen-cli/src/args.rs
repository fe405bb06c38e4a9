use clap::Parser;
use std::path::{Path, PathBuf};

/// CLI arguments for the jsgen binary.
#[derive(Parser, Debug)]
#[command(
    name = "jsgen",
    version,
    about = "Render ESTree JSON back into JavaScript source"
)]
pub struct CliArgs {
    /// ESTree JSON document to render. Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// JSON file with generator options.
    #[arg(short = 'c', long = "options")]
    pub options: Option<PathBuf>,

    /// Write the generated source here instead of stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Color error output. Defaults to whether stderr is a terminal.
    #[arg(long)]
    pub pretty: Option<bool>,
}

impl CliArgs {
    /// The input path, or `None` for stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|path| path.as_os_str() != "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_stdin() {
        let args = CliArgs::parse_from(["jsgen"]);
        assert!(args.input_path().is_none());
        assert!(args.options.is_none());
        assert!(args.output.is_none());
        assert!(args.pretty.is_none());

        let args = CliArgs::parse_from(["jsgen", "-"]);
        assert!(args.input_path().is_none());
    }

    #[test]
    fn test_parses_all_flags() {
        let args = CliArgs::parse_from([
            "jsgen",
            "ast.json",
            "--options",
            "opts.json",
            "-o",
            "out.js",
            "--pretty",
            "false",
        ]);
        assert_eq!(args.input_path(), Some(Path::new("ast.json")));
        assert_eq!(args.options, Some(PathBuf::from("opts.json")));
        assert_eq!(args.output, Some(PathBuf::from("out.js")));
        assert_eq!(args.pretty, Some(false));
    }
}
