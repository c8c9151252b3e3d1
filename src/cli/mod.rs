use anyhow::Result;

use crate::delivery::{
    CacheSlot, ConsoleSink, DeliveryController, FeedConfig, HttpTransport,
};
use crate::ingest::Ingestor;

/// Run one ingestion pass and write the feed document to disk. Used by
/// the site's sync job to regenerate the static `matches.json`.
pub async fn ingest_to_file(output: &str) -> Result<()> {
    let ingestor = Ingestor::from_env();

    println!("📥 Fetching spreadsheet export...");
    match ingestor.run().await {
        Ok(doc) => {
            tokio::fs::write(output, serde_json::to_string_pretty(&doc)?).await?;
            println!("✅ Wrote {} matches to {}", doc.matches.len(), output);
            Ok(())
        }
        Err(e) => {
            // Keep the static feed well-formed even on total failure.
            let failure = e.to_document();
            tokio::fs::write(output, serde_json::to_string_pretty(&failure)?).await?;
            println!("❌ Ingestion failed: {}", e);
            Err(e.into())
        }
    }
}

/// Run the normal tiered load path once, rendering to the console.
pub async fn load_feed() -> Result<()> {
    let mut controller = DeliveryController::new(
        FeedConfig::from_env(),
        HttpTransport::new(),
        CacheSlot::from_env(),
        ConsoleSink,
    );

    let state = controller.load().await;
    if state.failed {
        println!("❌ No data available from any source");
    } else {
        println!("✅ {} matches shown", state.matches.len());
    }
    Ok(())
}

/// Run the manual-refresh entry point once, rendering to the console.
pub async fn refresh_feed() -> Result<()> {
    let mut controller = DeliveryController::new(
        FeedConfig::from_env(),
        HttpTransport::new(),
        CacheSlot::from_env(),
        ConsoleSink,
    );

    let state = controller.refresh().await;
    if state.failed {
        println!("❌ No data available from any source");
    } else {
        println!("✅ {} matches shown", state.matches.len());
    }
    Ok(())
}
