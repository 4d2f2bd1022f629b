//! Vellum CLI
//!
//! Renders sample documents and inspects the per-variant tag registry,
//! for debugging the schema composition and the builder output.

use std::str::FromStr;

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use strum::IntoEnumIterator;
use vellum_builder::{Builder, attrs};
use vellum_schema::{Variant, resolve};

#[derive(Parser)]
#[command(name = "vellum", about = "HTML/XHTML document builder playground")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a sample document for a variant to stdout.
    Demo {
        /// Document variant (xhtml-strict, xhtml-transitional,
        /// xhtml-frameset, html5).
        #[arg(long, default_value = "html5")]
        variant: String,
        /// Skip the automatic meta tag inside head.
        #[arg(long)]
        no_meta: bool,
        /// Disable markup validation.
        #[arg(long)]
        no_validate: bool,
    },
    /// List a variant's tags from the schema registry.
    Tags {
        /// Document variant (xhtml-strict, xhtml-transitional,
        /// xhtml-frameset, html5).
        variant: String,
        /// Only self-closing tags.
        #[arg(long)]
        self_closing: bool,
        /// Only form tags.
        #[arg(long)]
        forms: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Demo {
            variant,
            no_meta,
            no_validate,
        } => {
            let variant = parse_variant(&variant)?;
            println!("{}", render_demo(variant, no_meta, no_validate)?);
        }
        Command::Tags {
            variant,
            self_closing,
            forms,
        } => {
            let variant = parse_variant(&variant)?;
            print_tags(variant, self_closing, forms);
        }
    }
    Ok(())
}

fn parse_variant(name: &str) -> Result<Variant> {
    Variant::from_str(name).map_err(|_| {
        let valid = Variant::iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        anyhow!("unknown variant `{name}` (expected one of: {valid})")
    })
}

fn render_demo(variant: Variant, no_meta: bool, no_validate: bool) -> Result<String> {
    let mut b = Builder::new()
        .with_output_meta_tag(!no_meta)
        .with_auto_validation(!no_validate);

    let page = |b: &mut Builder| {
        b.head(|b| b.text_element("title", "vellum demo"))?;
        b.element("body", attrs![], |b| {
            b.text_element("h1", "Vellum")?;
            b.element("p", attrs!["class" => "intro"], |b| {
                b.text("Documents as nested function calls, checked against a ");
                b.text_element("em", "per-variant")?;
                b.text(" schema.");
                Ok(())
            })?;
            b.selector("hr").empty()?;
            b.selector("p").class("footnote").text("generated sample")
        })
    };

    match variant {
        Variant::XhtmlStrict => b.xhtml_strict(attrs![], &["vellum demo"], page)?,
        Variant::XhtmlTransitional => b.xhtml_transitional(attrs![], &["vellum demo"], page)?,
        Variant::XhtmlFrameset => b.xhtml_frameset(attrs![], &["vellum demo"], page)?,
        Variant::Html5 => b.html_five(attrs![], &["vellum demo"], page)?,
    }
    Ok(b.into_string())
}

fn print_tags(variant: Variant, only_self_closing: bool, only_forms: bool) {
    let tagset = resolve(variant);
    let mut tags: Vec<&str> = tagset.tags().iter().copied().collect();
    tags.sort_unstable();

    println!("{} ({} tags)", variant.bold(), tags.len());
    for tag in tags {
        if only_self_closing && !tagset.is_self_closing(tag) {
            continue;
        }
        if only_forms && !tagset.is_form_tag(tag) {
            continue;
        }
        if tagset.is_self_closing(tag) {
            println!("  {} {}", tag.yellow(), "(self-closing)".dimmed());
        } else if tagset.is_form_tag(tag) {
            println!("  {} {}", tag.green(), "(form)".dimmed());
        } else {
            println!("  {tag}");
        }
    }
}
