// src/main.rs
use clap::{Parser, Subcommand, ValueEnum};
use modelyaml_builder::api::start_api_server;
use modelyaml_builder::config::ApiConfig;
use modelyaml_builder::monitoring::{MonitoringConfig, MonitoringContext};
use modelyaml_builder::{render, AppResult, FieldUpdate, FormState, RenderedFiles};

#[derive(Parser, Debug)]
#[command(about = "Build LM Studio model.yaml and manifest.json files for Hugging Face models")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the editor page and form API (default)
    Serve,

    /// Print generated files for the default form with overrides applied
    Render {
        /// Which file to print
        #[arg(short = 'a', long = "artifact", value_enum, default_value_t = Artifact::Both)]
        artifact: Artifact,

        /// Field override such as `temperature=0.6` or `vision=false`; repeatable
        #[arg(short = 's', long = "set", value_name = "FIELD=VALUE")]
        overrides: Vec<FieldUpdate>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Artifact {
    Yaml,
    Json,
    Both,
}

#[actix_web::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve().await,
        Command::Render {
            artifact,
            overrides,
        } => {
            print_render(artifact, overrides);
            Ok(())
        }
    }
}

async fn serve() -> AppResult<()> {
    let config = ApiConfig::from_env()?;
    let monitoring = MonitoringContext::new(MonitoringConfig::from_env()?);

    tracing::info!(addr = %config.bind_addr(), "Starting model.yaml builder");
    start_api_server(&config, monitoring)?.await?;
    Ok(())
}

fn print_render(artifact: Artifact, overrides: Vec<FieldUpdate>) {
    let files = render(&apply_overrides(overrides));
    println!("{}", render_output(artifact, &files));
}

/// Fold `--set` overrides over the default form; a later override of the same
/// field wins.
fn apply_overrides(overrides: Vec<FieldUpdate>) -> FormState {
    overrides
        .into_iter()
        .fold(FormState::default(), |state, update| state.with_update(update))
}

fn render_output(artifact: Artifact, files: &RenderedFiles) -> String {
    match artifact {
        Artifact::Yaml => files.model_yaml.clone(),
        Artifact::Json => files.manifest_json.clone(),
        Artifact::Both => format!(
            "# ---- model.yaml ----\n{}\n\n# ---- manifest.json ----\n{}",
            files.model_yaml, files.manifest_json
        ),
    }
}
