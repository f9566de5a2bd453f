use anyhow::Context;
use chatmine_report::{build_report, render_json, render_text};
use chatmine_transcript::{load_transcript, BraceScan};
use std::path::Path;

/// `--brace-scan` values.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum BraceScanArg {
    #[value(name = "naive")]
    Naive,
    #[value(name = "string_aware")]
    StringAware,
}

impl From<BraceScanArg> for BraceScan {
    fn from(arg: BraceScanArg) -> Self {
        match arg {
            BraceScanArg::Naive => BraceScan::Naive,
            BraceScanArg::StringAware => BraceScan::StringAware,
        }
    }
}

pub struct MineParams<'a> {
    pub path: &'a Path,
    pub config: Option<&'a Path>,
    pub brace_scan: Option<BraceScan>,
    pub json: bool,
}

/// `chatmine mine <PATH>`
pub fn execute(params: &MineParams<'_>) -> anyhow::Result<()> {
    let output = render(params)?;
    print!("{output}");
    Ok(())
}

/// Run the whole pipeline and return the report exactly as printed.
pub fn render(params: &MineParams<'_>) -> anyhow::Result<String> {
    let mut config = crate::cmd_keywords::resolve(params.config)?;
    if let Some(scan) = params.brace_scan {
        config.brace_scan = scan;
    }
    tracing::debug!(
        path = %params.path.display(),
        config = ?params.config,
        brace_scan = ?config.brace_scan,
        literal_filter = %config.literal_filter,
        json = params.json,
        "mining transcript"
    );

    let transcript = load_transcript(params.path)
        .with_context(|| format!("loading transcript {}", params.path.display()))?;
    let report = build_report(&transcript, &config);

    if params.json {
        let mut out = render_json(&report)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(render_text(&report))
    }
}
