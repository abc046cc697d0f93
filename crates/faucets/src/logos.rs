use crate::prelude::{eprintln, println, *};
use faucets_core::logos::{fallbacks_for, FallbackStep, LogoFallback, LogoKind};
use serde::Serialize;

#[derive(Debug, clap::Args, Clone)]
pub struct LogosOptions {
    /// What the key names: chain or asset
    pub kind: String,

    /// Chain name or asset symbol (e.g. "Ethereum", "USDC")
    pub key: String,

    /// Number of failed image loads to replay before picking a logo
    #[arg(long, default_value = "0")]
    pub failures: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct LogosOutput {
    pub kind: LogoKind,
    pub key: String,
    pub sources: Vec<&'static str>,
    /// Logo shown after the replayed failures, `None` when the image is hidden
    pub current: Option<&'static str>,
}

pub fn parse_kind(kind: &str) -> Result<LogoKind> {
    match kind.trim().to_lowercase().as_str() {
        "chain" => Ok(LogoKind::Chain),
        "asset" => Ok(LogoKind::Asset),
        other => Err(Error::UnknownLogoKind(other.to_string()).into()),
    }
}

pub fn logos_data(kind: LogoKind, key: &str, failures: usize) -> LogosOutput {
    let mut cursor = LogoFallback::for_key(kind, key);

    for _ in 0..failures {
        if let FallbackStep::Exhausted = cursor.on_error() {
            log::warn!(
                "All logo sources failed for {key:?}, primary was {}",
                cursor.primary().unwrap_or("<none>")
            );
            break;
        }
    }

    LogosOutput {
        kind,
        key: key.to_string(),
        sources: fallbacks_for(kind, key).to_vec(),
        current: cursor.current(),
    }
}

pub async fn run(options: LogosOptions, global: crate::Global) -> Result<()> {
    let kind = parse_kind(&options.kind)?;
    let data = logos_data(kind, &options.key, options.failures);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    if data.sources.is_empty() {
        log::warn!("No logo known for {} {:?}", options.kind, options.key);
        return Ok(());
    }

    if global.verbose {
        for (idx, source) in data.sources.iter().enumerate() {
            eprintln!("{idx}\t{source}");
        }
    }

    match data.current {
        Some(current) => println!("{current}"),
        None => println!("(hidden)"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!(parse_kind("Chain").unwrap(), LogoKind::Chain);
        assert_eq!(parse_kind("asset").unwrap(), LogoKind::Asset);
        assert!(parse_kind("token").is_err());
    }

    #[test]
    fn test_logos_data_unknown_key() {
        let data = logos_data(LogoKind::Chain, "Nowhere", 0);

        assert!(data.sources.is_empty());
        assert_eq!(data.current, None);
    }

    #[test]
    fn test_logos_data_advances_on_failures() {
        let data = logos_data(LogoKind::Chain, "Ethereum", 1);

        assert_eq!(data.sources.len(), 3);
        assert_eq!(data.current, Some(data.sources[1]));

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["kind"], "chain");
    }

    #[test]
    fn test_logos_data_exhausted_hides_image() {
        let data = logos_data(LogoKind::Chain, "Ethereum", 3);
        assert_eq!(data.current, None);
    }
}
