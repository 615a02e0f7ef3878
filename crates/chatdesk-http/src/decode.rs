//! Turns the endpoint's raw byte stream into text increments.
//!
//! The endpoint writes plain UTF-8 text with no framing of its own, and the
//! network is free to cut a multi-byte character in half. Incomplete trailing
//! sequences are therefore carried over to the next chunk; anything that can
//! never become valid UTF-8 is a format error.

use async_stream::try_stream;
use bytes::Bytes;
use futures_core::Stream;
use futures_util::StreamExt;

use crate::error::HttpChatError;

#[derive(Debug, Default)]
pub(crate) struct Utf8Decoder {
    pending: Vec<u8>,
}

impl Utf8Decoder {
    /// Feed one network chunk; returns the text that became complete, if any.
    pub(crate) fn push(&mut self, chunk: &[u8]) -> Result<Option<String>, HttpChatError> {
        self.pending.extend_from_slice(chunk);

        let complete = match std::str::from_utf8(&self.pending) {
            Ok(_) => self.pending.len(),
            Err(e) if e.error_len().is_none() => e.valid_up_to(),
            Err(e) => {
                return Err(HttpChatError::Format(format!(
                    "invalid UTF-8 in response body: {e}"
                )));
            }
        };

        if complete == 0 {
            return Ok(None);
        }

        let head: Vec<u8> = self.pending.drain(..complete).collect();
        let text = String::from_utf8(head).map_err(|e| HttpChatError::Format(e.to_string()))?;
        Ok(Some(text))
    }

    /// Called once the body ended.
    pub(crate) fn finish(self) -> Result<(), HttpChatError> {
        if self.pending.is_empty() {
            Ok(())
        } else {
            Err(HttpChatError::Format(format!(
                "response body ended inside a UTF-8 sequence ({} dangling bytes)",
                self.pending.len()
            )))
        }
    }
}

/// Decode `body` into non-empty text increments, in arrival order.
pub(crate) fn decode_increments<S, E>(
    body: S,
) -> impl Stream<Item = Result<String, HttpChatError>>
where
    S: Stream<Item = Result<Bytes, E>>,
    E: Into<HttpChatError>,
{
    try_stream! {
        let mut decoder = Utf8Decoder::default();
        futures_util::pin_mut!(body);

        while let Some(chunk) = body.next().await {
            let chunk: Bytes = chunk.map_err(Into::<HttpChatError>::into)?;
            if let Some(text) = decoder.push(&chunk)? {
                yield text;
            }
        }

        decoder.finish()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;

    async fn collect(chunks: &[&'static [u8]]) -> Vec<Result<String, HttpChatError>> {
        let source = stream::iter(
            chunks
                .iter()
                .map(|c| Ok::<_, HttpChatError>(Bytes::from_static(*c))),
        );
        decode_increments(source).collect().await
    }

    #[tokio::test]
    async fn passes_ascii_chunks_through() {
        let out = collect(&[b"Pizza", b" is", b" ready"]).await;
        let texts: Vec<String> = out.into_iter().map(Result::unwrap).collect();
        assert_eq!(texts, vec!["Pizza", " is", " ready"]);
    }

    #[tokio::test]
    async fn joins_characters_split_across_chunks() {
        // 🍕 is F0 9F 8D 95
        let out = collect(&[b"Hot \xF0\x9F", b"\x8D", b"\x95!"]).await;
        let texts: Vec<String> = out.into_iter().map(Result::unwrap).collect();
        assert_eq!(texts, vec!["Hot ", "🍕!"]);
    }

    #[tokio::test]
    async fn skips_empty_chunks() {
        let out = collect(&[b"", b"a", b""]).await;
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].as_deref().unwrap(), "a");
    }

    #[tokio::test]
    async fn invalid_bytes_are_a_format_error() {
        let out = collect(&[b"ok", b"\xFF\xFE"]).await;
        assert_eq!(out[0].as_deref().unwrap(), "ok");
        assert!(matches!(out[1], Err(HttpChatError::Format(_))));
        assert_eq!(out.len(), 2);
    }

    #[tokio::test]
    async fn truncated_tail_is_a_format_error() {
        let out = collect(&[b"ok\xE2\x82"]).await;
        assert_eq!(out[0].as_deref().unwrap(), "ok");
        assert!(matches!(out.last(), Some(Err(HttpChatError::Format(_)))));
    }

    #[test]
    fn decoder_holds_back_partial_sequence() {
        let mut decoder = Utf8Decoder::default();
        assert_eq!(decoder.push(b"\xC3").unwrap(), None);
        assert_eq!(decoder.push(b"\xA9t\xC3").unwrap().as_deref(), Some("ét"));
        assert!(Utf8Decoder::default().finish().is_ok());
        assert!(decoder.finish().is_err());
    }
}
