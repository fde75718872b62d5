use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hs_core::embedding::{create_embedder, EmbedderConfig, DEFAULT_EMBEDDING_DIMENSION};
use hs_core::logging;
use hs_core::matching::DEFAULT_SUITABILITY_THRESHOLD;
use hs_core::{AnalyzerConfig, MatchAnalyzer, MatchResult, SimilarityScorer, SkillExtractor, SkillVocabulary};

#[derive(Debug, Parser)]
#[command(name = "hs", about = "Resume vs job-description match analysis")]
struct Cli {
    /// Resume text file
    #[arg(long)]
    resume: PathBuf,

    /// Job description text file
    #[arg(long)]
    jd: PathBuf,

    /// Suitability threshold in percent
    #[arg(long, env = "HS_SUITABILITY_THRESHOLD", default_value_t = DEFAULT_SUITABILITY_THRESHOLD)]
    threshold: f64,

    /// Embedder implementation name
    #[arg(long, env = "HS_EMBEDDER", default_value = "hash")]
    embedder: String,

    /// Embedding dimension
    #[arg(long, env = "HS_EMBEDDER_DIMENSION", default_value_t = DEFAULT_EMBEDDING_DIMENSION)]
    dimension: usize,

    /// Print the full result as JSON instead of the plain report
    #[arg(long)]
    json: bool,
}

fn run(cli: Cli) -> Result<()> {
    let resume_text = fs::read_to_string(&cli.resume)
        .with_context(|| format!("failed to read resume file {}", cli.resume.display()))?;
    let jd_text = fs::read_to_string(&cli.jd)
        .with_context(|| format!("failed to read job description file {}", cli.jd.display()))?;

    let analyzer = MatchAnalyzer::new(
        SkillExtractor::new(SkillVocabulary::builtin().clone()),
        SimilarityScorer::new(create_embedder(
            &cli.embedder,
            EmbedderConfig {
                dimension: cli.dimension,
            },
        )),
        AnalyzerConfig {
            suitability_threshold: cli.threshold,
        },
    );

    let result = analyzer.analyze(&resume_text, &jd_text)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&result);
    }
    Ok(())
}

fn print_report(result: &MatchResult) {
    println!("Match score:    {:.2}%", result.score);
    println!("Suitable:       {}", if result.suitable { "yes" } else { "no" });
    println!("Matched skills: {}", join_or_none(&result.matched_skills));
    println!("Missing skills: {}", join_or_none(&result.missing_skills));
}

fn join_or_none(skills: &[String]) -> String {
    if skills.is_empty() {
        "none".to_string()
    } else {
        skills.join(", ")
    }
}

fn main() {
    logging::init("hs-cli");

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        tracing::error!(error = %err, "analysis failed");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_or_none_handles_both_shapes() {
        assert_eq!(join_or_none(&[]), "none");
        assert_eq!(
            join_or_none(&["python".to_string(), "aws".to_string()]),
            "python, aws"
        );
    }
}
