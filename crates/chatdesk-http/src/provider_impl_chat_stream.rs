use futures_util::StreamExt;

use crate::{HttpChatBackend, api_v1::ChatRequest};
use chatdesk_core::error::ChatDeskError;
use chatdesk_core::provider::{BoxFuture, ChatBackend, ChatParameters, IncrementStream};

impl ChatBackend for HttpChatBackend {
    fn open_stream<'s>(
        &'s self,
        params: ChatParameters,
    ) -> BoxFuture<'s, chatdesk_core::error::Result<IncrementStream<'s>>> {
        let client = self.client.clone();

        Box::pin(async move {
            let request = ChatRequest::from(params);
            let stream = client.chat_stream(&request).await?;
            let stream = stream.map(|item| item.map_err(ChatDeskError::from));

            Ok(Box::pin(stream) as IncrementStream<'s>)
        })
    }
}
