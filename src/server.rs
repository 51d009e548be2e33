// Copyright 2025 Dustin McAfee
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The bridge server: connection loop and command dispatch.
//!
//! [`BridgeServer`] owns the two host capabilities (screen capture and
//! input injection) and drives the whole bridge on a single task. Clients
//! are accepted strictly one at a time: the accept call is only reached after
//! the previous session's read loop has exited, so a second client queues in
//! the listen backlog until the first disconnects. There are no read or write
//! timeouts; a stalled client blocks the server, including the accept of any
//! future connection.
//!
//! Each session is a cycle of exact 8-byte frame reads. A clean EOF or an
//! I/O error ends the session and the loop re-accepts; a failed accept is
//! fatal and propagates out of [`BridgeServer::serve`].

use std::io::ErrorKind;
use std::net::{Ipv4Addr, SocketAddr};

use log::{debug, info, warn};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::{TcpListener, TcpSocket};

use crate::capture::ScreenCapture;
use crate::error::{BridgeError, Result};
use crate::inject::InputInjector;
use crate::protocol::{Command, FRAME_LEN};
use crate::translate;

/// Listen backlog for queued clients waiting on the active session.
const LISTEN_BACKLOG: u32 = 5;

/// A single-client framebuffer bridge server.
///
/// Construct it with the host capture and injection capabilities, then call
/// [`listen`](Self::listen) (loopback convenience) or
/// [`serve`](Self::serve) with an externally bound listener.
pub struct BridgeServer<C, I> {
    capture: C,
    injector: I,
}

impl<C, I> BridgeServer<C, I>
where
    C: ScreenCapture,
    I: InputInjector,
{
    /// Creates a server from the two host capabilities.
    ///
    /// Adapters that need a live display connection should have acquired it
    /// already; by the time a `BridgeServer` exists, an unusable display has
    /// been reported as a constructor failure, not deferred to the first
    /// snapshot.
    pub fn new(capture: C, injector: I) -> Self {
        Self { capture, injector }
    }

    /// Binds the loopback interface on `port` and serves forever.
    ///
    /// The listener sets `SO_REUSEADDR` so the bridge can restart right
    /// after a crash without waiting out `TIME_WAIT`.
    ///
    /// # Errors
    ///
    /// Returns an error if the bind fails or when an accept fails; accept
    /// failures are fatal to the serve loop.
    pub async fn listen(&mut self, port: u16) -> Result<()> {
        let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, port));
        let socket = TcpSocket::new_v4()?;
        socket.set_reuseaddr(true)?;
        socket.bind(addr)?;
        let listener = socket.listen(LISTEN_BACKLOG)?;
        info!("listening on {addr}");
        self.serve(listener).await
    }

    /// Serves clients from an already bound listener, one session at a time,
    /// forever.
    ///
    /// A session that ends, cleanly or with an I/O or capture error, is
    /// logged and the loop goes back to accepting.
    ///
    /// # Errors
    ///
    /// Returns an error only when an accept fails.
    pub async fn serve(&mut self, listener: TcpListener) -> Result<()> {
        loop {
            let (stream, peer) = listener.accept().await?;
            info!("client connected: {peer}");
            match self.serve_stream(stream).await {
                Ok(()) => info!("client disconnected: {peer}"),
                Err(e) => warn!("session with {peer} ended: {e}"),
            }
        }
    }

    /// Drives one session over an established transport.
    ///
    /// Reads exact 8-byte command frames until EOF and dispatches each one.
    /// Exposed so embedders can run the bridge over something other than a
    /// freshly accepted TCP socket.
    ///
    /// # Errors
    ///
    /// Returns an error if a read or write fails mid-session or a snapshot
    /// capture fails. A clean EOF at a frame boundary is not an error.
    pub async fn serve_stream<S>(&mut self, mut stream: S) -> Result<()>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let mut frame = [0u8; FRAME_LEN];
        loop {
            match stream.read_exact(&mut frame).await {
                Ok(_) => {}
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(()),
                Err(e) => return Err(e.into()),
            }
            self.dispatch(&frame, &mut stream).await?;
        }
    }

    /// Decodes one frame and performs its action: a snapshot write back to
    /// the client, or one call into the injection capability.
    async fn dispatch<S>(&mut self, frame: &[u8; FRAME_LEN], stream: &mut S) -> Result<()>
    where
        S: AsyncWrite + Unpin,
    {
        match Command::decode(frame) {
            Command::Snapshot => {
                let mut shot = self.capture.capture()?;
                if !shot.is_consistent() {
                    return Err(BridgeError::Capture(format!(
                        "{} byte buffer does not cover {} rows of stride {}",
                        shot.data.len(),
                        shot.height,
                        shot.stride
                    )));
                }
                translate::translate_frame(&mut shot.data);
                stream.write_all(&shot.data).await?;
                debug!("snapshot: {} bytes written", shot.data.len());
            }
            Command::Key { down, keysym } => match self.injector.map_keysym(keysym) {
                Some(keycode) => {
                    debug!("key: keysym {keysym:#06x} -> keycode {keycode:#04x}, down={down}");
                    self.injector.key_event(keycode, down);
                }
                None => warn!("invalid keysym {keysym:#06x}, key event dropped"),
            },
            Command::Button { down, button } => {
                debug!("button: {button}, down={down}");
                self.injector.button_event(button, down);
            }
            Command::Motion { x, y } => self.injector.motion_event(x, y),
            Command::Ignored(op) => {
                debug!("ignoring unknown opcode {op:#04x}: {frame:02x?}");
            }
        }
        Ok(())
    }
}
