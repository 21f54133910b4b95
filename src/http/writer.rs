use bytes::{Buf, BufMut, BytesMut};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Headers the writer always emits itself.
const FRAMING_HEADERS: [&str; 3] = ["Content-Type", "Content-Length", "Connection"];

/// Frames a response: status line, `Content-Type`, `Content-Length`,
/// `Connection: close`, any extra headers, blank line, body.
pub fn serialize_response(resp: &Response) -> BytesMut {
    let mut buf = BytesMut::with_capacity(128 + resp.body.len());

    // Status line
    buf.put_slice(
        format!(
            "{} {} {}\r\n",
            HTTP_VERSION,
            resp.status.as_u16(),
            resp.status.reason_phrase()
        )
        .as_bytes(),
    );

    put_header(&mut buf, "Content-Type", &resp.content_type);
    put_header(&mut buf, "Content-Length", &resp.body.len().to_string());
    put_header(&mut buf, "Connection", "close");

    for (k, v) in &resp.headers {
        if FRAMING_HEADERS.iter().any(|h| h.eq_ignore_ascii_case(k)) {
            continue;
        }
        put_header(&mut buf, k, v);
    }

    // Header/body separator
    buf.put_slice(b"\r\n");
    buf.put_slice(&resp.body);

    buf
}

fn put_header(buf: &mut BytesMut, key: &str, value: &str) {
    buf.put_slice(key.as_bytes());
    buf.put_slice(b": ");
    buf.put_slice(value.as_bytes());
    buf.put_slice(b"\r\n");
}

/// Owns the serialized bytes of one response until they are flushed.
pub struct ResponseWriter {
    buffer: BytesMut,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
        }
    }

    /// Bytes still waiting to be written.
    pub fn remaining(&self) -> usize {
        self.buffer.remaining()
    }

    pub async fn write_to<S>(&mut self, stream: &mut S) -> anyhow::Result<()>
    where
        S: AsyncWrite + Unpin,
    {
        while self.buffer.has_remaining() {
            let n = stream.write(self.buffer.chunk()).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.buffer.advance(n);
        }

        stream.flush().await?;
        Ok(())
    }
}
