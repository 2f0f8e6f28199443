use std::io::Write;

use clap::{Parser, Subcommand};
use env_logger::Env;
use rpassword::read_password;

use uorcon_tokio::{UoRconClient, UoRconConfig, UoRconError};

mod configs;
use crate::configs::{ServerConfig, load_config_from_env};

#[derive(Parser)]
#[command(about = "Admin console for UO-style UDP RCON game servers")]
struct Args {
    /// Server host (eg: 127.0.0.1)
    #[arg(long)]
    host: Option<String>,

    /// Server UDP port
    #[arg(long, default_value_t = 27030)]
    port: u16,

    /// Server password. Prompted for interactively when omitted.
    #[arg(short, long)]
    password: Option<String>,

    /// Config name to load from UORCON_CONFIG_PATH
    #[arg(long)]
    config_name: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Unauthenticated liveness probe
    KeepAlive,
    /// Query server status
    Status,
    /// Trigger a world save and wait for it to complete
    Save,
    /// Shut the server down
    Shutdown {
        /// Skip the world save before shutting down
        #[arg(long)]
        no_save: bool,
        #[arg(long)]
        restart: bool,
    },
    /// Broadcast a message to everyone online
    Broadcast {
        message: String,
        #[arg(long, default_value_t = 1)]
        hue: i32,
        #[arg(long)]
        ascii: bool,
        #[arg(long, default_value_t = 0)]
        staff_level: i32,
    },
    /// Send a message to a chat channel
    Chat {
        channel: String,
        message: String,
        #[arg(long, default_value_t = 0)]
        hue: i32,
        #[arg(long)]
        ascii: bool,
    },
    /// Issue an account-verification code and announce it to the server
    Verify {
        account: String,
        /// Use this code instead of a random one
        #[arg(long)]
        code: Option<u32>,
    },
    /// Kick and/or ban a character or account
    Kickban {
        name: String,
        /// Treat the name as an account name
        #[arg(long)]
        account: bool,
        #[arg(long)]
        kick: bool,
        #[arg(long)]
        ban: bool,
    },
    /// Lift a ban
    Unban { name: String },
    /// Page through the online-user list
    Online {
        #[arg(long, default_value_t = 0)]
        start: i32,
        #[arg(long, default_value_t = 20)]
        max: i32,
    },
    /// Register a remote log sink
    AddLogTarget { ip: String, port: i32 },
    /// Unregister a remote log sink
    RemoveLogTarget { ip: String, port: i32 },
    /// Register a chat bridge gateway
    AddGateway { gateway: String },
    /// Unregister a chat bridge gateway
    RemoveGateway { gateway: String },
}

fn get_host(provided: &Option<String>) -> String {
    if let Some(host) = provided {
        return host.clone();
    }
    print!("Enter host: ");
    std::io::stdout().flush().unwrap();
    let mut input = String::new();
    std::io::stdin().read_line(&mut input).unwrap();
    input.trim().to_string()
}

fn get_password(provided: &Option<String>) -> String {
    if let Some(pw) = provided {
        return pw.clone();
    }
    print!("Enter password: ");
    std::io::stdout().flush().unwrap();
    read_password().unwrap()
}

async fn dispatch(client: &UoRconClient, command: Command) -> Result<Vec<u8>, UoRconError> {
    match command {
        Command::KeepAlive => client.keep_alive().await,
        Command::Status => client.server_status().await,
        Command::Save => client.server_save().await,
        Command::Shutdown { no_save, restart } => client.server_shutdown(!no_save, restart).await,
        Command::Broadcast {
            message,
            hue,
            ascii,
            staff_level,
        } => client.broadcast(&message, hue, ascii, staff_level).await,
        Command::Chat {
            channel,
            message,
            hue,
            ascii,
        } => client.send_channel_chat(&channel, &message, hue, ascii).await,
        Command::Verify { account, code } => {
            let (code, reply) = client.verify(&account, code).await?;
            log::info!("Verification code for {}: {}", account, code);
            Ok(reply)
        }
        Command::Kickban {
            name,
            account,
            kick,
            ban,
        } => client.kickban(&name, account, kick, ban).await,
        Command::Unban { name } => client.unban(&name).await,
        Command::Online { start, max } => client.online_users(start, max).await,
        Command::AddLogTarget { ip, port } => client.add_log_target(&ip, port).await,
        Command::RemoveLogTarget { ip, port } => client.remove_log_target(&ip, port).await,
        Command::AddGateway { gateway } => client.add_bridge_gateway(&gateway).await,
        Command::RemoveGateway { gateway } => client.remove_bridge_gateway(&gateway).await,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().filter_or("RUST_LOG", "info")).init();

    let searched_cfg = if args.config_name.is_some() {
        load_config_from_env(args.config_name.clone())
    } else {
        None
    };

    let server_config = match searched_cfg {
        Some(cfg) => cfg,
        None => ServerConfig {
            host: get_host(&args.host),
            port: args.port,
            password: get_password(&args.password),
        },
    };

    let client = UoRconClient::new(UoRconConfig::new(
        server_config.host,
        server_config.port,
        server_config.password,
    ));

    let reply = dispatch(&client, args.command).await?;
    println!("{}", String::from_utf8_lossy(&reply));
    Ok(())
}
