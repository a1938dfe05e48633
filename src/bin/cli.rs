use anyhow::Context;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use webcam_bootstrap::{BootstrapConfig, CameraBootstrap, Document, Navigator, Window};

struct Args {
    config_path: PathBuf,
    device: Option<u32>,
    hold: bool,
    json: bool,
}

fn parse_args(args: &[String]) -> anyhow::Result<Args> {
    let mut parsed = Args {
        config_path: BootstrapConfig::default_path(),
        device: None,
        hold: false,
        json: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let path = args.get(i).context("--config requires a path")?;
                parsed.config_path = PathBuf::from(path);
            }
            "--device" => {
                i += 1;
                let index = args.get(i).context("--device requires an index")?;
                parsed.device = Some(index.parse().context("invalid device index")?);
            }
            "--hold" => parsed.hold = true,
            "--json" => parsed.json = true,
            "-h" | "--help" => {
                println!("Usage: webcam-bootstrap [--config <path>] [--device <index>] [--hold] [--json]");
                std::process::exit(0);
            }
            other => anyhow::bail!("Unknown argument: {}", other),
        }
        i += 1;
    }

    Ok(parsed)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let args = parse_args(&args)?;

    let mut config = BootstrapConfig::load_from_file(&args.config_path)
        .with_context(|| format!("loading {}", args.config_path.display()))?;
    if let Some(device) = args.device {
        config.camera.device_index = device;
    }
    webcam_bootstrap::init_logging_with(&config.logging.level);

    let window = Window::with_console(
        Arc::new(Document::with_video(config.surface_id.clone())),
        Navigator::native(config.camera.device_index),
    );
    window.set_onload(Arc::new(CameraBootstrap::from_config(&config)));

    let outcome = window
        .dispatch_load()
        .await
        .context("load handler did not run")?;

    if args.json {
        println!("{}", serde_json::to_string(&outcome)?);
    } else {
        println!("Camera bootstrap: {}", outcome);
    }

    if args.hold && outcome.is_bound() {
        hold_until_interrupted(&window, &config.surface_id).await?;
    }

    Ok(())
}

async fn hold_until_interrupted(window: &Window, surface_id: &str) -> anyhow::Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    ctrlc::set_handler(move || {
        let _ = tx.send(());
    })
    .context("installing Ctrl+C handler")?;

    log::info!("Holding stream on #{}, press Ctrl+C to exit", surface_id);
    rx.recv().await;

    if let Some(surface) = window.document().get_element_by_id(surface_id) {
        if let Some(stream) = surface.src_object() {
            log::info!("Stream {} live at exit: {}", stream.id(), stream.active());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("webcam-bootstrap")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_defaults_without_flags() {
        let parsed = parse_args(&args(&[])).unwrap();
        assert_eq!(parsed.config_path, BootstrapConfig::default_path());
        assert_eq!(parsed.device, None);
        assert!(!parsed.hold);
        assert!(!parsed.json);
    }

    #[test]
    fn test_all_flags() {
        let parsed = parse_args(&args(&[
            "--config", "cam.toml", "--device", "2", "--hold", "--json",
        ]))
        .unwrap();
        assert_eq!(parsed.config_path, PathBuf::from("cam.toml"));
        assert_eq!(parsed.device, Some(2));
        assert!(parsed.hold);
        assert!(parsed.json);
    }

    #[test]
    fn test_device_requires_value() {
        assert!(parse_args(&args(&["--device"])).is_err());
        assert!(parse_args(&args(&["--config"])).is_err());
    }

    #[test]
    fn test_device_must_be_index() {
        assert!(parse_args(&args(&["--device", "front"])).is_err());
        assert!(parse_args(&args(&["--device", "-1"])).is_err());
    }

    #[test]
    fn test_unknown_argument_is_rejected() {
        let err = parse_args(&args(&["--audio"])).err().unwrap();
        assert!(err.to_string().contains("--audio"));
    }
}
