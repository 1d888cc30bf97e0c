use std::env;
use std::process::exit;

use poe_flip_bot::commands::flip::Flip;
use poe_flip_bot::commands::Command;
use poe_flip_bot::health;
use poe_flip_bot::pricing::PricingClient;
use serenity::client::{Context, EventHandler};
use serenity::http::Http;
use serenity::model::prelude::command::Command as ApplicationCommand;
use serenity::model::prelude::interaction::Interaction;
use serenity::model::prelude::Ready;
use serenity::prelude::GatewayIntents;
use serenity::{async_trait, Client};
use tracing::{error, info};

struct Handler {
    pricing: PricingClient,
}

#[async_trait]
impl EventHandler for Handler {
    /// Handler for the `ready` event
    /// Called when the bot joins the server
    async fn ready(&self, _: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);
    }

    /// Handler for the `interaction_create` event
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::ApplicationCommand(command) = interaction {
            let name = command.data.name.as_str();
            info!("Received '{name}' command from {}", command.user.name);
            match name {
                Flip::NAME => {
                    if let Err(e) = Flip::run(&ctx, &command, &self.pricing).await {
                        error!("Failed to execute {name} command: {e}");
                    } else {
                        info!("Executed {name} command successfully");
                    }
                }
                _ => error!("Received an unknown command: {name}"),
            }
        }
    }
}

/// Register the command list globally before logging in
/// Re-registering an unchanged list is a no-op on the Discord side, and a
/// failure here is not fatal: commands registered by a previous run keep
/// working, so we log and let the bot log in anyway.
async fn register_commands(token: &str, application_id: u64) {
    let http = Http::new_with_application_id(token, application_id);
    match ApplicationCommand::set_global_application_commands(&http, |commands| {
        commands.create_application_command(Flip::register)
    })
    .await
    {
        Ok(commands) => info!("Registered {} application command(s)", commands.len()),
        Err(e) => error!("Failed to register application commands: {e}"),
    }
}

#[tokio::main]
async fn main() {
    // Setup tracing
    let subscriber = tracing_subscriber::FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| eprintln!("Unable to set global default subscriber: {e}"))
        .ok();

    // Get the discord credentials from a .env file
    dotenv::dotenv().ok();
    let token = env::var("DISCORD_TOKEN").unwrap_or_else(|e| {
        error!("Expected a discord token in the .env file: {e}");
        exit(1);
    });
    let application_id: u64 = env::var("CLIENT_ID")
        .unwrap_or_else(|e| {
            error!("Expected an application id in the .env file: {e}");
            exit(1);
        })
        .parse()
        .unwrap_or_else(|e| {
            error!("CLIENT_ID must be a numeric application id: {e}");
            exit(1);
        });
    info!("Found discord credentials in .env file");

    register_commands(&token, application_id).await;

    // Liveness endpoint for the hosting platform, independent from the bot
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(health::DEFAULT_PORT);
    tokio::spawn(async move {
        if let Err(e) = health::serve(port).await {
            error!("Health responder error: {e}");
        }
    });

    // The bot only reacts to slash commands, no privileged intent is needed
    let intents = GatewayIntents::GUILDS;

    // Create a new instance of the Client, logging in as a bot.
    let mut client = Client::builder(&token, intents)
        .application_id(application_id)
        .event_handler(Handler {
            pricing: PricingClient::new(),
        })
        .await
        .unwrap_or_else(|e| {
            error!("Error creating client: {e}");
            exit(1);
        });
    info!("Client is setup");

    // Finally, start a single shard, and start listening to events.
    if let Err(err) = client.start().await {
        error!("Client error: {:?}", err);
        exit(1);
    }
}
