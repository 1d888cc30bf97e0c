use anyhow::Result;
use async_trait::async_trait;
use serenity::builder::CreateApplicationCommand;
use serenity::model::prelude::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::Context;

use crate::pricing::PricingClient;

pub mod flip;

/// A slash command exposed by the bot
#[async_trait]
pub trait Command {
    /// Execute the command in response to an interaction
    async fn run(
        ctx: &Context,
        command: &ApplicationCommandInteraction,
        pricing: &PricingClient,
    ) -> Result<()>;

    /// Describe the command for registration with the Discord API
    fn register(command: &mut CreateApplicationCommand) -> &mut CreateApplicationCommand;
}
