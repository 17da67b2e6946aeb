//! Command-line arguments and commands.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sprig_codegen::{CodeGenerator, ParseData, PreviewOptions, ReactNativeGenerator, Settings};

#[derive(Debug, Parser)]
#[command(name = "sprig", version, about = "Generate React Native components from design trees")]
pub struct Cli {
    /// Log filter, e.g. `debug` or `sprig_codegen=trace` (overrides RUST_LOG)
    #[arg(long, global = true, env = "SPRIG_LOG_LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a component source file from parser output
    Generate {
        /// Parser output JSON
        input: PathBuf,

        /// Generator settings JSON
        #[arg(short, long, env = "SPRIG_SETTINGS")]
        settings: Option<PathBuf>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Wrap the component in a mountable preview entry
        #[arg(long)]
        preview: bool,

        /// DOM element id the preview mounts on [default: component]
        #[arg(long, requires = "preview")]
        root_tag: Option<String>,
    },

    /// Decode parser output and summarize it
    Check {
        /// Parser output JSON
        input: PathBuf,
    },
}

impl Cli {
    /// Run the selected command, writing its primary output to `out`.
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        match &self.command {
            Command::Generate {
                input,
                settings,
                output,
                preview,
                root_tag,
            } => {
                let data = read_parse_data(input)?;
                let settings = match settings {
                    Some(path) => read_settings(path)?,
                    None => Settings::default(),
                };
                let generator = ReactNativeGenerator::new(settings);

                let code = if *preview {
                    let mut options = PreviewOptions::default();
                    if let Some(tag) = root_tag {
                        options.root_tag = tag.clone();
                    }
                    generator.generate_preview(&data, &options)?.content
                } else {
                    generator.generate(&data)?
                };

                match output {
                    Some(path) => {
                        fs::write(path, &code)
                            .with_context(|| format!("failed to write {}", path.display()))?;
                        tracing::info!(path = %path.display(), bytes = code.len(), "wrote component");
                    }
                    None => out.write_all(code.as_bytes())?,
                }
            }
            Command::Check { input } => {
                let data = read_parse_data(input)?;
                writeln!(out, "{}", summarize(&data))?;
            }
        }
        Ok(())
    }
}

fn read_parse_data(path: &Path) -> Result<ParseData> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    ParseData::from_json(&json).with_context(|| format!("failed to decode {}", path.display()))
}

fn read_settings(path: &Path) -> Result<Settings> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings {}", path.display()))?;
    Settings::from_json(&json)
        .with_context(|| format!("failed to decode settings {}", path.display()))
}

/// One-line summary of a parse tree.
pub fn summarize(data: &ParseData) -> String {
    let root = &data.root.node;
    let page = root.page_name().unwrap_or("<none>");
    let state = root
        .page_name()
        .and_then(|page| data.state_for(page, &root.name))
        .map_or(0, <[_]>::len);
    format!(
        "component '{}' on page '{}': {} nodes, {} state entries",
        root.name,
        page,
        data.node_count(),
        state
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    const CARD: &str = r#"{
        "root": {"node": {"type": "FRAME", "name": "Card", "page": {"name": "P"},
            "children": [{"type": "TEXT", "name": "Title"}]}},
        "localState": {"P": {"Card": [["count", 0]]}}
    }"#;

    fn temp_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn run(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut out = Vec::new();
        cli.run(&mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_parse_generate_args() {
        let cli = Cli::try_parse_from(["sprig", "generate", "in.json", "--preview", "--root-tag", "app"])
            .unwrap();
        match cli.command {
            Command::Generate {
                input,
                preview,
                root_tag,
                output,
                ..
            } => {
                assert_eq!(input, PathBuf::from("in.json"));
                assert!(preview);
                assert_eq!(root_tag.as_deref(), Some("app"));
                assert!(output.is_none());
            }
            Command::Check { .. } => panic!("expected generate"),
        }
    }

    #[test]
    fn test_root_tag_requires_preview() {
        assert!(Cli::try_parse_from(["sprig", "generate", "in.json", "--root-tag", "app"]).is_err());
    }

    #[test]
    fn test_generate_to_stdout() {
        let input = temp_file(CARD);
        let code = run(&["sprig", "generate", input.path().to_str().unwrap()]).unwrap();
        assert!(code.starts_with("import {useState} from 'react';\n"));
        assert!(code.contains("export function Card() {"));
    }

    #[test]
    fn test_generate_with_settings_file() {
        let input = temp_file(CARD);
        let settings = temp_file(r#"{"writer": {"quoteStyle": "double"}, "component": {"exportStyle": "default"}}"#);
        let code = run(&[
            "sprig",
            "generate",
            input.path().to_str().unwrap(),
            "--settings",
            settings.path().to_str().unwrap(),
        ])
        .unwrap();
        assert!(code.starts_with("import {useState} from \"react\";\n"));
        assert!(code.contains("export default function Card() {"));
    }

    #[test]
    fn test_generate_to_file() {
        let input = temp_file(CARD);
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("Card.tsx");

        let printed = run(&[
            "sprig",
            "generate",
            input.path().to_str().unwrap(),
            "--output",
            target.to_str().unwrap(),
        ])
        .unwrap();
        assert!(printed.is_empty());
        assert!(fs::read_to_string(&target).unwrap().contains("<Text>{'Title'}</Text>"));
    }

    #[test]
    fn test_generate_preview() {
        let input = temp_file(CARD);
        let entry = run(&["sprig", "generate", input.path().to_str().unwrap(), "--preview"]).unwrap();
        assert!(entry.contains("AppRegistry.registerComponent"));
        assert!(entry.contains("<Card />"));
    }

    #[test]
    fn test_check_summary() {
        let input = temp_file(CARD);
        let summary = run(&["sprig", "check", input.path().to_str().unwrap()]).unwrap();
        assert_eq!(summary, "component 'Card' on page 'P': 2 nodes, 1 state entries\n");
    }

    #[test]
    fn test_missing_input_names_the_file() {
        let err = run(&["sprig", "check", "/nonexistent/sprig.json"]).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/sprig.json"));
    }

    #[test]
    fn test_invalid_input_is_reported() {
        let input = temp_file(r#"{"root": {"node": {"type": "ELLIPSE", "name": "Dot"}}}"#);
        let err = run(&["sprig", "check", input.path().to_str().unwrap()]).unwrap_err();
        assert!(format!("{:#}", err).contains("Unknown node type: ELLIPSE"));
    }
}
