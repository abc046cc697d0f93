use crate::prelude::{eprintln, *};
use faucets_core::catalog::Catalog;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

pub async fn run_stdio(catalog: &Catalog, global: &crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Starting MCP server with stdio transport...");
        eprintln!();
    }

    let reader = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    serve(reader, &mut stdout, catalog, global).await
}

/// Answer one JSON-RPC request per line until `reader` reaches EOF.
pub async fn serve<R, W>(
    mut reader: R,
    writer: &mut W,
    catalog: &Catalog,
    global: &crate::Global,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;

        if bytes_read == 0 {
            break; // EOF
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if global.verbose {
            eprintln!("Received: {trimmed}");
        }

        let Some(response) = super::handle_request(trimmed, catalog, global) else {
            continue;
        };
        let response_json = serde_json::to_string(&response)?;

        if global.verbose {
            eprintln!("Sending: {response_json}");
        }

        writer.write_all(response_json.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    Ok(())
}
