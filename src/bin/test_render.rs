use std::fs;
use std::io::Read;
use std::path::PathBuf;

use calliope::render::markdown_to_html;
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(about = "Run the markdown substitution chain on a file or stdin")]
struct Args {
    /// Markdown file to render (stdin when omitted)
    input: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let markdown = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    println!("{}", markdown_to_html(&markdown));
    Ok(())
}
