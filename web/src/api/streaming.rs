//! Streaming fetch client for the chat endpoint.
//!
//! Requests go out through `gloo-net`; the response body is read chunk by
//! chunk through a `ReadableStreamDefaultReader`.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use js_sys::{Object, Reflect, Uint8Array};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, ReadableStreamDefaultReader};

use chatpage_core::{BodyReader, ChatResponse, FormFields, PageError, Transport};

fn js_error(e: JsValue) -> PageError {
    PageError::Transport(format!("{:?}", e))
}

/// Transport over the browser's fetch API, relative to the page origin.
#[derive(Debug, Default)]
pub struct FetchTransport;

impl FetchTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn get(&self, path: &str) -> Result<ChatResponse, PageError> {
        let response = Request::get(path)
            .send()
            .await
            .map_err(|e| PageError::Transport(e.to_string()))?;
        into_chat_response(response)
    }

    async fn post_form(&self, path: &str, form: &FormFields) -> Result<ChatResponse, PageError> {
        let body = FormData::new().map_err(js_error)?;
        for (name, value) in form.iter() {
            body.append_with_str(name, value).map_err(js_error)?;
        }

        let response = Request::post(path)
            .body(body)
            .map_err(|e| PageError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| PageError::Transport(e.to_string()))?;
        into_chat_response(response)
    }
}

fn into_chat_response(response: Response) -> Result<ChatResponse, PageError> {
    let status = response.status();

    let Some(stream) = response.body() else {
        return Ok(ChatResponse::without_body(status));
    };

    let reader = stream
        .get_reader()
        .dyn_into::<ReadableStreamDefaultReader>()
        .map_err(|_| PageError::Transport("Failed to get reader".to_string()))?;

    Ok(ChatResponse::new(status, FetchBody { reader }))
}

/// Body of a fetch response, read through its default reader.
pub struct FetchBody {
    reader: ReadableStreamDefaultReader,
}

#[async_trait(?Send)]
impl BodyReader for FetchBody {
    async fn read_chunk(&mut self) -> Result<Option<Vec<u8>>, PageError> {
        loop {
            let result = JsFuture::from(self.reader.read()).await.map_err(js_error)?;
            let result_obj: Object = result
                .dyn_into()
                .map_err(|_| PageError::Transport("Result not an object".to_string()))?;

            let done = Reflect::get(&result_obj, &JsValue::from_str("done"))
                .map_err(js_error)?
                .as_bool()
                .unwrap_or(false);
            if done {
                return Ok(None);
            }

            let value = Reflect::get(&result_obj, &JsValue::from_str("value")).map_err(js_error)?;
            if value.is_undefined() {
                continue;
            }

            let bytes: Uint8Array = value
                .dyn_into()
                .map_err(|_| PageError::Transport("Not a Uint8Array".to_string()))?;
            return Ok(Some(bytes.to_vec()));
        }
    }
}
