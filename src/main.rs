mod cli;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::{debug, info};
use serde_json::Value;
use wowza_rest::{CallOptions, RecorderParameters, WowzaClient};

use crate::cli::{Cli, Commands};

fn recorder_parameters(
    params_json: Option<&str>,
    params: Vec<(String, wowza_rest::ParamValue)>,
) -> Result<RecorderParameters> {
    let mut recorder = match params_json {
        Some(raw) => serde_json::from_str::<RecorderParameters>(raw)
            .context("--params-json must be a flat JSON object of strings, numbers, booleans or null")?,
        None => RecorderParameters::new(),
    };
    recorder.extend(params);

    if recorder.is_empty() {
        return Err(anyhow!(
            "create-recorder needs recorder settings (--param key=value or --params-json)"
        ));
    }
    Ok(recorder)
}

async fn run_command(client: &WowzaClient, command: Commands) -> Result<Value> {
    let result = match command {
        Commands::ListStreamFiles { overrides } => {
            client.list_stream_files(&CallOptions::from(&overrides)).await
        }
        Commands::StreamConfig { overrides } => {
            client
                .get_stream_configuration(&CallOptions::from(&overrides))
                .await
        }
        Commands::CreateRecorder {
            params,
            params_json,
            overrides,
        } => {
            let recorder = recorder_parameters(params_json.as_deref(), params)?;
            debug!("Recorder settings: {recorder:?}");
            client
                .create_recorder(&recorder, &CallOptions::from(&overrides))
                .await
        }
        Commands::StopRecording { overrides } => {
            client.stop_recording(&CallOptions::from(&overrides)).await
        }
        Commands::ListRecorders { overrides } => {
            client.list_recorders(&CallOptions::from(&overrides)).await
        }
        Commands::Connect { overrides } => {
            client
                .connect_stream_file(&CallOptions::from(&overrides))
                .await
        }
        Commands::Disconnect { overrides } => {
            client
                .disconnect_stream_file(&CallOptions::from(&overrides))
                .await
        }
    };

    Ok(result?)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.client_config();
    let client = WowzaClient::new(config)?;

    info!("Using management API at {}", client.base_url());

    match run_command(&client, cli.command).await {
        Ok(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Err(e) => {
            eprintln!("❌ Request failed: {e}");
            return Err(e);
        }
    }

    Ok(())
}
