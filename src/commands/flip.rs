use anyhow::{Context, Result};
use async_trait::async_trait;
use serenity::builder::CreateApplicationCommand;
use serenity::model::prelude::interaction::application_command::ApplicationCommandInteraction;
use tracing::error;

use crate::pricing::PricingClient;
use crate::report::Report;

use super::Command;

pub struct Flip;

impl Flip {
    pub const NAME: &'static str = "flip";
}

#[async_trait]
impl Command for Flip {
    /// Fetch a pricing snapshot and edit the deferred reply with the report,
    /// or with the error text when the fetch failed
    async fn run(
        ctx: &serenity::prelude::Context,
        command: &ApplicationCommandInteraction,
        pricing: &PricingClient,
    ) -> Result<()> {
        // The upstream call can outlast the initial response deadline, so
        // acknowledge before any network I/O
        command
            .defer(&ctx.http)
            .await
            .context("Failed to defer the reply")?;

        match pricing.fetch_snapshot().await {
            Ok(snapshot) => {
                let report = Report::from_snapshot(&snapshot);
                command
                    .edit_original_interaction_response(&ctx.http, |r| {
                        r.embed(|e| report.apply(e))
                    })
                    .await
                    .context("Failed to edit the deferred reply with the report")?;
            }
            Err(e) => {
                error!("Could not build a pricing report: {e}");
                command
                    .edit_original_interaction_response(&ctx.http, |r| {
                        r.content(format!("Error: {e}"))
                    })
                    .await
                    .context("Failed to edit the deferred reply with the error")?;
            }
        }
        Ok(())
    }

    fn register(command: &mut CreateApplicationCommand) -> &mut CreateApplicationCommand {
        command
            .name(Self::NAME)
            .description("Fetches and displays price calculations.")
    }
}
