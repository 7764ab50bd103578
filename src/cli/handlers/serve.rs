use super::CommandContext;
use crate::graphql::{build_schema, run_server};
use anyhow::Result;
use colored::Colorize;

pub fn handle_serve(ctx: &CommandContext, port: u16) -> Result<()> {
    let schema = build_schema(ctx.config.clone())?;

    println!(
        "{} http://localhost:{}/",
        "GraphQL endpoint:".green().bold(),
        port
    );
    println!(
        "{} http://localhost:{}/ (open in a browser)",
        "Playground:".green().bold(),
        port
    );
    println!("Press Ctrl+C to stop\n");

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_server(schema, port))?;
    Ok(())
}
