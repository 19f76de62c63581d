use anyhow::Result;
use folio::handle;

#[tokio::main]
async fn main() -> Result<()> {
    handle(std::env::args()).await?;
    Ok(())
}
