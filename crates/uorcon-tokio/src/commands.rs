use std::time::Duration;

use crate::client::UoRconClient;
use crate::errors::UoRconError;
use crate::packet::{self, Arg, CHALLENGE_SIZE};

const CMD_SERVER_STATUS: u8 = 0x1B;
const CMD_BROADCAST: u8 = 0x1C;
const CMD_CHANNEL_CHAT: u8 = 0x1D;
const CMD_SERVER_SAVE: u8 = 0x1E;
const CMD_SERVER_SHUTDOWN: u8 = 0x1F;
const CMD_KEEP_ALIVE: u8 = 0x20;
const CMD_ACCOUNT_VERIFY: u8 = 0x21;
const CMD_KICKBAN: u8 = 0x22;
const CMD_UNBAN: u8 = 0x23;
const CMD_ONLINE_USERS: u8 = 0x24;
const CMD_ADD_LOG_TARGET: u8 = 0x25;
const CMD_REMOVE_LOG_TARGET: u8 = 0x26;
const CMD_ADD_BRIDGE_GATEWAY: u8 = 0x50;
const CMD_REMOVE_BRIDGE_GATEWAY: u8 = 0x51;

/// World saves can take a while; the server only answers once it is done.
const SAVE_DEADLINE: Duration = Duration::from_secs(15);

impl UoRconClient {
    /// One challenge round trip: ask the server for a fresh 8-byte token.
    /// The server only honors an authenticated command whose token it just
    /// handed out, so this runs before every such command and the token is
    /// never cached.
    async fn challenge(&self) -> Result<[u8; CHALLENGE_SIZE], UoRconError> {
        log::debug!("requesting challenge token");
        let reply = self
            .send_and_await_reply(&packet::build_challenge_request(), self.config.reply_timeout)
            .await?;
        packet::extract_challenge(&reply)
    }

    /// Sends an unauthenticated command and returns the raw reply bytes.
    pub async fn rcon_no_auth(&self, cmd: u8, args: &[Arg]) -> Result<Vec<u8>, UoRconError> {
        let frame = packet::build_unauthenticated(cmd, args);
        self.send_and_await_reply(&frame, self.config.reply_timeout)
            .await
    }

    /// Runs the full authenticated exchange: challenge round trip, then the
    /// command frame carrying the token and the password.
    pub async fn rcon(&self, cmd: u8, args: &[Arg]) -> Result<Vec<u8>, UoRconError> {
        self.rcon_with_deadline(cmd, args, self.config.reply_timeout)
            .await
    }

    /// [`rcon`](Self::rcon) with a per-call reply deadline for commands the
    /// server is slow to answer. The challenge round trip still uses the
    /// configured default.
    pub async fn rcon_with_deadline(
        &self,
        cmd: u8,
        args: &[Arg],
        deadline: Duration,
    ) -> Result<Vec<u8>, UoRconError> {
        let challenge = self.challenge().await?;
        let frame = packet::build_authenticated(cmd, &challenge, &self.config.password, args);
        log::debug!("sending authenticated command {cmd:#04x}");
        self.send_and_await_reply(&frame, deadline).await
    }

    pub async fn send_channel_chat(
        &self,
        channel: &str,
        message: &str,
        hue: i32,
        ascii_text: bool,
    ) -> Result<Vec<u8>, UoRconError> {
        self.rcon(
            CMD_CHANNEL_CHAT,
            &[
                channel.into(),
                message.into(),
                hue.into(),
                ascii_text.into(),
            ],
        )
        .await
    }

    pub async fn broadcast(
        &self,
        message: &str,
        hue: i32,
        ascii_text: bool,
        staff_level: i32,
    ) -> Result<Vec<u8>, UoRconError> {
        self.rcon(
            CMD_BROADCAST,
            &[
                message.into(),
                hue.into(),
                staff_level.into(),
                ascii_text.into(),
            ],
        )
        .await
    }

    /// The only unauthenticated catalogue entry.
    pub async fn keep_alive(&self) -> Result<Vec<u8>, UoRconError> {
        self.rcon_no_auth(CMD_KEEP_ALIVE, &[]).await
    }

    pub async fn server_save(&self) -> Result<Vec<u8>, UoRconError> {
        self.rcon_with_deadline(CMD_SERVER_SAVE, &[], SAVE_DEADLINE)
            .await
    }

    pub async fn server_shutdown(
        &self,
        save: bool,
        restart: bool,
    ) -> Result<Vec<u8>, UoRconError> {
        self.rcon(CMD_SERVER_SHUTDOWN, &[save.into(), restart.into()])
            .await
    }

    pub async fn server_status(&self) -> Result<Vec<u8>, UoRconError> {
        self.rcon(CMD_SERVER_STATUS, &[]).await
    }

    /// Starts an account-verification handshake: records a pending code for
    /// `account` (drawing a random 5-digit one when `code` is `None`) and
    /// tells the server about it. Returns the code, to be communicated to the
    /// account holder out of band, along with the raw reply.
    ///
    /// The code the server sees and the code [`verify_check`](Self::verify_check)
    /// will later match against are always the same value.
    pub async fn verify(
        &self,
        account: &str,
        code: Option<u32>,
    ) -> Result<(u32, Vec<u8>), UoRconError> {
        let code = self.verify_store.issue(account, code);
        let reply = self
            .rcon(CMD_ACCOUNT_VERIFY, &[Arg::Int(code as i32), account.into()])
            .await?;
        Ok((code, reply))
    }

    /// Redeems a verification code previously issued by [`verify`](Self::verify).
    /// True consumes the pending entry; false (wrong code, unknown account,
    /// expired entry) is a normal outcome, not an error.
    pub fn verify_check(&self, account: &str, code: u32) -> bool {
        self.verify_store.verify(account, code)
    }

    pub async fn kickban(
        &self,
        name: &str,
        is_account: bool,
        kick: bool,
        ban: bool,
    ) -> Result<Vec<u8>, UoRconError> {
        self.rcon(
            CMD_KICKBAN,
            &[ban.into(), kick.into(), is_account.into(), name.into()],
        )
        .await
    }

    pub async fn unban(&self, name: &str) -> Result<Vec<u8>, UoRconError> {
        self.rcon(CMD_UNBAN, &[name.into()]).await
    }

    pub async fn online_users(
        &self,
        start_index: i32,
        max_entries: i32,
    ) -> Result<Vec<u8>, UoRconError> {
        self.rcon(CMD_ONLINE_USERS, &[start_index.into(), max_entries.into()])
            .await
    }

    pub async fn add_log_target(&self, ip: &str, port: i32) -> Result<Vec<u8>, UoRconError> {
        self.rcon(CMD_ADD_LOG_TARGET, &[ip.into(), port.into()])
            .await
    }

    pub async fn remove_log_target(&self, ip: &str, port: i32) -> Result<Vec<u8>, UoRconError> {
        self.rcon(CMD_REMOVE_LOG_TARGET, &[ip.into(), port.into()])
            .await
    }

    pub async fn add_bridge_gateway(&self, gateway: &str) -> Result<Vec<u8>, UoRconError> {
        self.rcon(CMD_ADD_BRIDGE_GATEWAY, &[gateway.into()]).await
    }

    pub async fn remove_bridge_gateway(&self, gateway: &str) -> Result<Vec<u8>, UoRconError> {
        self.rcon(CMD_REMOVE_BRIDGE_GATEWAY, &[gateway.into()]).await
    }
}
