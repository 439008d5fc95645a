//! Minimal CLI: schema JSON in → `.d.ts` text out.
//!
//! Thin shell around [`crate::compile`]: read the document, parse it, compile
//! once, print or write the result. Any error propagates out and exits
//! non-zero with the message on stderr.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use colored::Colorize;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// compile a moddle schema document into TypeScript ambient declarations
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    /// path to the schema JSON document
    schema: PathBuf,

    /// output .d.ts file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let schema_path = self.schema.display();
        let source = std::fs::read_to_string(&self.schema)
            .with_context(|| format!("failed to read schema file ({schema_path})"))?;
        let schema: crate::schema::Schema = crate::schema::from_str_with_path(&source)
            .with_context(|| format!("failed to parse schema file ({schema_path})"))?;

        let declarations = crate::compile::compile(&schema, crate::moddle::is_simple_type)
            .with_context(|| format!("failed to compile schema ({schema_path})"))?;

        match self.out.as_ref() {
            Some(out) => {
                if let Some(parent) = out.parent() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("failed to create {}", parent.display()))?;
                }
                std::fs::write(out, &declarations)
                    .with_context(|| format!("failed to write {}", out.display()))?;
                eprintln!("{}", "Done.".green());
            }
            None => {
                print!("{declarations}");
            }
        }

        Ok(())
    }
}
