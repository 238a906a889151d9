//! Fire-and-forget UDP sender.

use std::net::SocketAddr;

use iris_core::FaceSnapshot;
use rosc::{encoder, OscMessage, OscPacket, OscType};
use tokio::net::UdpSocket;

use crate::params::snapshot_messages;

/// Errors surfaced while opening the socket, encoding, or sending.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("UDP socket error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode OSC message: {0}")]
    Encode(#[from] rosc::OscError),
}

/// Publishes snapshots as OSC float messages over UDP.
pub struct OscPublisher {
    socket: UdpSocket,
    target: SocketAddr,
}

impl OscPublisher {
    /// Bind an ephemeral local socket aimed at `target`.
    pub async fn bind(target: SocketAddr) -> Result<Self, PublishError> {
        let socket = UdpSocket::bind("0.0.0.0:0").await?;
        Ok(Self { socket, target })
    }

    /// Send one named float parameter. The error is returned, not retried.
    pub async fn send_float(&self, addr: &str, value: f32) -> Result<(), PublishError> {
        let packet = OscPacket::Message(OscMessage {
            addr: addr.to_string(),
            args: vec![OscType::Float(value)],
        });
        let bytes = encoder::encode(&packet)?;
        self.socket.send_to(&bytes, self.target).await?;
        Ok(())
    }

    /// Publish a full snapshot. Failed sends are logged at warn level and
    /// dropped; the simulation loop is never interrupted.
    pub async fn publish(&self, snap: &FaceSnapshot, send_mood: bool) {
        for (addr, value) in snapshot_messages(snap, send_mood) {
            if let Err(e) = self.send_float(addr, value).await {
                tracing::warn!("dropped OSC update {}: {}", addr, e);
            }
        }
    }

    pub fn target(&self) -> SocketAddr {
        self.target
    }
}
