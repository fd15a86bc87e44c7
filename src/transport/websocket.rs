//! A blocking WebSocket client source.

use crate::error::TransportError;
use crate::ingest::{MessageSource, Received};
use log::{debug, info};
use std::io::ErrorKind;
use std::net::TcpStream;
use std::time::Duration;
use tungstenite::stream::MaybeTlsStream;
use tungstenite::{Message, WebSocket};

/// Receives sensor messages from a WebSocket server, e.g. an Android sensor streaming app.
pub struct WebSocketSource {
    endpoint: String,
    socket: WebSocket<MaybeTlsStream<TcpStream>>,
}

impl WebSocketSource {
    /// Connects to `url`.
    ///
    /// Receiving waits at most `poll_interval` before reporting [`Received::Idle`], so that
    /// the ingestor can observe its stop signal.
    pub fn connect(url: &str, poll_interval: Duration) -> Result<Self, TransportError> {
        let (socket, response) =
            tungstenite::connect(url).map_err(|e| TransportError::Connect {
                endpoint: url.to_owned(),
                reason: e.to_string(),
            })?;

        if let MaybeTlsStream::Plain(stream) = socket.get_ref() {
            stream.set_read_timeout(Some(poll_interval))?;
        }

        info!("connected to {url} ({})", response.status());
        Ok(Self {
            endpoint: url.to_owned(),
            socket,
        })
    }

    /// The URL this source is connected to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl MessageSource for WebSocketSource {
    fn receive(&mut self) -> Result<Received, TransportError> {
        match self.socket.read() {
            Ok(Message::Text(text)) => Ok(Received::Message(text)),
            Ok(Message::Binary(data)) => Ok(Received::Message(
                String::from_utf8_lossy(&data).into_owned(),
            )),
            Ok(Message::Ping(_) | Message::Pong(_) | Message::Frame(_)) => Ok(Received::Idle),
            Ok(Message::Close(frame)) => {
                debug!("{} sent close frame: {frame:?}", self.endpoint);
                Ok(Received::Closed)
            }
            Err(tungstenite::Error::ConnectionClosed | tungstenite::Error::AlreadyClosed) => {
                Ok(Received::Closed)
            }
            Err(tungstenite::Error::Io(e))
                if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) =>
            {
                Ok(Received::Idle)
            }
            Err(tungstenite::Error::Io(e)) => Err(TransportError::Io(e)),
            Err(e) => Err(TransportError::Protocol(e.to_string())),
        }
    }

    fn close(&mut self) {
        // The peer may already be gone.
        let _ = self.socket.close(None);
        let _ = self.socket.flush();
        debug!("closed connection to {}", self.endpoint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::sensor_url;
    use crate::types::SensorChannel;
    use std::net::TcpListener;
    use std::thread;

    fn collect_until_closed(source: &mut WebSocketSource) -> (Vec<Received>, usize) {
        let mut received = Vec::new();
        let mut idle = 0;
        for _ in 0..1_000 {
            match source.receive().expect("no transport error") {
                Received::Idle => idle += 1,
                Received::Closed => {
                    received.push(Received::Closed);
                    break;
                }
                message => received.push(message),
            }
        }
        (received, idle)
    }

    #[test]
    fn test_receive_from_server() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("local address");

        let server = thread::spawn(move || {
            let (stream, _) = listener.accept().expect("accept");
            let mut socket = tungstenite::accept(stream).expect("handshake");

            thread::sleep(Duration::from_millis(100));
            socket
                .send(Message::Text(r#"{"values": [0.1, 0.2, 9.8]}"#.into()))
                .expect("send text");
            socket
                .send(Message::Ping(Vec::new()))
                .expect("send ping");
            socket
                .send(Message::Binary(br#"{"values": [1, 2, 3]}"#.to_vec()))
                .expect("send binary");
            socket.close(None).expect("close");

            // Drain until the client's close reply or disconnect.
            while socket.read().is_ok() {}
        });

        let url = sensor_url(&addr.to_string(), SensorChannel::Accelerometer);
        let mut source =
            WebSocketSource::connect(&url, Duration::from_millis(10)).expect("connect");
        assert_eq!(source.endpoint(), url);

        let (received, idle) = collect_until_closed(&mut source);
        source.close();
        drop(source);
        server.join().expect("server thread");

        assert!(idle > 0, "read timeouts are reported as idle");
        assert_eq!(
            received,
            vec![
                Received::Message(r#"{"values": [0.1, 0.2, 9.8]}"#.into()),
                Received::Message(r#"{"values": [1, 2, 3]}"#.into()),
                Received::Closed,
            ]
        );
    }

    #[test]
    fn test_dropped_connection_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("local address");

        let server = thread::spawn(move || {
            let (stream, _) = listener.accept().expect("accept");
            let socket = tungstenite::accept(stream).expect("handshake");
            // Gone without a close frame.
            drop(socket);
        });

        let url = sensor_url(&addr.to_string(), SensorChannel::Accelerometer);
        let mut source =
            WebSocketSource::connect(&url, Duration::from_millis(10)).expect("connect");
        server.join().expect("server thread");

        let mut outcome = source.receive();
        for _ in 0..1_000 {
            if !matches!(outcome, Ok(Received::Idle)) {
                break;
            }
            outcome = source.receive();
        }

        match outcome {
            Err(TransportError::Protocol(_) | TransportError::Io(_)) => {}
            other => panic!("expected a transport error, got {other:?}"),
        }
        source.close();
    }

    #[test]
    fn test_connect_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("local address");
        drop(listener);

        let url = sensor_url(&addr.to_string(), SensorChannel::Magnetometer);
        let result = WebSocketSource::connect(&url, Duration::from_millis(10));
        match result {
            Err(TransportError::Connect { endpoint, .. }) => assert_eq!(endpoint, url),
            Err(e) => panic!("unexpected error: {e}"),
            Ok(_) => panic!("connected to a closed port"),
        }
    }
}
