//! md2page CLI - Markdown page layout tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use md2page::{
    classify_lines, JsonFormat, LineKind, Md2Page, ParseOptions, ScriptHost, TemplateRegistry,
};

#[derive(Parser)]
#[command(name = "md2page")]
#[command(version)]
#[command(about = "Lay out Markdown as paginated, absolutely positioned documents", long_about = None)]
struct Cli {
    /// Input Markdown file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Template id or display name
    #[arg(short, long, global = true, default_value = "classic", env = "MD2PAGE_TEMPLATE")]
    template: String,

    /// Extra TOML templates layered over the built-in ones
    #[arg(long, global = true, value_name = "FILE", env = "MD2PAGE_TEMPLATES")]
    templates: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out a file and write the document and host script
    Convert {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Lay out a file and print the document as JSON
    Layout {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Record the host commands of a full run as JSON
    Script {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show how each line is classified
    Classify {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show layout information
    Info {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// List available templates
    Templates,

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match load_registry(cli.templates.as_deref()) {
        Ok(registry) => {
            let builder = Md2Page::new()
                .with_registry(registry.clone())
                .with_template(cli.template.as_str());

            match cli.command {
                Some(Commands::Convert { input, output }) => {
                    cmd_convert(&builder, &input, output.as_deref())
                }
                Some(Commands::Layout {
                    input,
                    output,
                    compact,
                }) => cmd_layout(&builder, &input, output.as_deref(), compact),
                Some(Commands::Script {
                    input,
                    output,
                    compact,
                }) => cmd_script(&builder, &input, output.as_deref(), compact),
                Some(Commands::Classify { input }) => cmd_classify(&input),
                Some(Commands::Info { input, json }) => cmd_info(&builder, &input, json),
                Some(Commands::Templates) => {
                    cmd_templates(&registry);
                    Ok(())
                }
                Some(Commands::Version) => {
                    cmd_version();
                    Ok(())
                }
                None => {
                    // Default behavior: convert if input is provided
                    if let Some(input) = cli.input {
                        cmd_convert(&builder, &input, cli.output.as_deref())
                    } else {
                        println!("{}", "Usage: md2page <FILE> [OUTPUT]".yellow());
                        println!("       md2page --help for more information");
                        Ok(())
                    }
                }
            }
        }
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_registry(path: Option<&Path>) -> Result<TemplateRegistry, Box<dyn std::error::Error>> {
    let mut registry = TemplateRegistry::builtin()?;
    if let Some(path) = path {
        let extra = TemplateRegistry::from_file(path)?;
        log::info!("Loaded {} template(s) from {}", extra.len(), path.display());
        registry.merge(extra);
    }
    Ok(registry)
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn cmd_convert(
    builder: &Md2Page,
    input: &Path,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_pages", stem))
    });

    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Reading Markdown...");
    let markdown = fs::read_to_string(input)?;
    pb.inc(1);

    pb.set_message("Laying out pages...");
    let mut host = ScriptHost::new();
    let result = builder.convert(&markdown, &mut host)?;
    pb.inc(1);

    pb.set_message("Writing output...");
    fs::write(
        output_dir.join("document.json"),
        result.to_json(JsonFormat::Pretty)?,
    )?;
    fs::write(
        output_dir.join("script.json"),
        host.to_json(JsonFormat::Pretty)?,
    )?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    println!("  {} document.json", "├─".dimmed());
    println!("  {} script.json", "└─".dimmed());
    println!(
        "\n{} page(s) with template {}",
        result.document().page_count(),
        result.document().template.id.cyan()
    );

    Ok(())
}

fn cmd_layout(
    builder: &Md2Page,
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let markdown = fs::read_to_string(input)?;
    let json = builder.layout(&markdown)?.to_json(json_format(compact))?;
    write_or_print(output, &json)
}

fn cmd_script(
    builder: &Md2Page,
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let markdown = fs::read_to_string(input)?;
    let mut host = ScriptHost::new();
    builder.convert(&markdown, &mut host)?;
    write_or_print(output, &host.to_json(json_format(compact))?)
}

fn cmd_classify(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let markdown = fs::read_to_string(input)?;

    for (i, line) in classify_lines(&markdown, &ParseOptions::default())
        .iter()
        .enumerate()
    {
        let kind = format!("{:<11}", line.kind.as_str());
        let kind = match line.kind {
            LineKind::H1 | LineKind::H2 | LineKind::H3 | LineKind::H4 => kind.cyan().bold(),
            LineKind::List | LineKind::NestedList => kind.green(),
            LineKind::Divider | LineKind::Empty => kind.dimmed(),
            LineKind::Body => kind.normal(),
        };
        println!("{:>4} {} {}", (i + 1).to_string().dimmed(), kind, line.content);
    }

    Ok(())
}

fn cmd_info(builder: &Md2Page, input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let markdown = fs::read_to_string(input)?;
    let result = builder.layout(&markdown)?;
    let doc = result.document();
    let stats = result.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {} ({})", "Template".bold(), doc.template.name, doc.template.id);
    println!("{}: {}", "Pages".bold(), doc.metadata.page_count);
    if let Some(ref title) = doc.metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }

    println!();
    println!("{}", "Layout Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Lines".bold(), stats.line_count);
    println!("{}: {}", "Text elements".bold(), stats.text_element_count);
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "List items".bold(), stats.list_item_count);
    println!("{}: {}", "Dividers".bold(), stats.divider_count);
    println!("{}: {}", "Empty lines".bold(), stats.empty_line_count);
    println!("{}: {}", "Links".bold(), stats.link_count);
    println!("{}: {}", "Wrapped".bold(), stats.wrapped_count);
    println!("{}: {}", "Words".bold(), stats.word_count);

    Ok(())
}

fn cmd_templates(registry: &TemplateRegistry) {
    println!("{}", "Templates".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for (i, template) in registry.iter().enumerate() {
        let marker = if i == 0 { " (default)".dimmed().to_string() } else { String::new() };
        println!(
            "  {:<10} {} - {} {}px, margin {}px{}",
            template.id.bold(),
            template.name,
            template.font,
            template.sizes.body,
            template.margin,
            marker
        );
    }
}

fn cmd_version() {
    println!("{} {}", "md2page".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Markdown page layout tool");
    println!();
    println!("License: MIT");
}
