use std::time::Duration;

use tokio::net::UdpSocket;
use tokio::time::timeout;

use crate::client::UoRconClient;
use crate::errors::UoRconError;

/// Largest reply datagram the server emits.
const DATAGRAM_SIZE: usize = 1024;

impl UoRconClient {
    async fn open_socket(&self) -> Result<UdpSocket, UoRconError> {
        let socket = UdpSocket::bind("0.0.0.0:0").await?;
        socket
            .connect((self.config.host.as_str(), self.config.port))
            .await?;
        Ok(socket)
    }

    /// Sends one frame on a fresh socket and waits for exactly one reply
    /// datagram. The socket lives only for the scope of this call, so it is
    /// closed on success, timeout and transport error alike.
    pub(crate) async fn send_and_await_reply(
        &self,
        frame: &[u8],
        deadline: Duration,
    ) -> Result<Vec<u8>, UoRconError> {
        let socket = self.open_socket().await?;
        socket.send(frame).await?;
        log::debug!(
            "sent {}-byte frame to {}:{}, awaiting reply",
            frame.len(),
            self.config.host,
            self.config.port
        );

        let mut buf = [0u8; DATAGRAM_SIZE];
        let received = timeout(deadline, socket.recv(&mut buf))
            .await
            .map_err(|_| UoRconError::Timeout)??;

        log::debug!("received {received}-byte reply");
        Ok(buf[..received].to_vec())
    }

    /// Fire-and-forget send on a fresh socket. UDP gives no delivery
    /// guarantee and no reply is awaited.
    pub async fn send_only(&self, frame: &[u8]) -> Result<(), UoRconError> {
        let socket = self.open_socket().await?;
        socket.send(frame).await?;
        log::debug!(
            "sent {}-byte frame to {}:{} without awaiting reply",
            frame.len(),
            self.config.host,
            self.config.port
        );
        Ok(())
    }
}
