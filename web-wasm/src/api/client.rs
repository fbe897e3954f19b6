//! 採点API呼び出し（fetch + FormData）

use async_trait::async_trait;
use image_compare_common::api::{self, CompareResponse, ErrorResponse, GENERIC_API_ERROR};
use image_compare_common::{Candidate, CompareError, ComparisonRequest, ScoringService};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, Response};

/// ブラウザのfetchで採点APIを呼ぶ
#[derive(Debug, Clone)]
pub struct FetchScoringService {
    url: String,
}

impl FetchScoringService {
    /// 同一オリジンのAPIを使う
    pub fn same_origin() -> Self {
        Self {
            url: api::compare_url(""),
        }
    }
}

/// JSの例外からメッセージを取り出す
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_default()
}

fn append_image(form: &FormData, name: &str, candidate: &Candidate<File>) -> Result<(), JsValue> {
    form.append_with_blob_and_filename(name, &candidate.payload, &candidate.meta.name)
}

fn build_request(url: &str, request: &ComparisonRequest<File>) -> Result<Request, JsValue> {
    let form = FormData::new()?;
    append_image(&form, "image1", &request.image1)?;
    append_image(&form, "image2", &request.image2)?;

    // Content-Typeはブラウザがboundary付きで設定する
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&form);

    Request::new_with_str_and_init(url, &opts)
}

async fn send(url: &str, request: &ComparisonRequest<File>) -> Result<Response, JsValue> {
    let request = build_request(url, request)?;
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    resp_value.dyn_into()
}

async fn read_json(resp: &Response) -> Result<JsValue, JsValue> {
    JsFuture::from(resp.json()?).await
}

#[async_trait(?Send)]
impl ScoringService<File> for FetchScoringService {
    async fn compare(&self, request: &ComparisonRequest<File>) -> Result<f64, CompareError> {
        let resp = send(&self.url, request)
            .await
            .map_err(|e| api::transport_error(&js_error_message(&e)))?;

        if !resp.ok() {
            let body = match read_json(&resp).await {
                Ok(json) => serde_wasm_bindgen::from_value::<ErrorResponse>(json).unwrap_or_default(),
                Err(_) => ErrorResponse::default(),
            };
            return Err(api::service_error(&body));
        }

        let json = read_json(&resp)
            .await
            .map_err(|_| CompareError::Service(GENERIC_API_ERROR.to_string()))?;
        let body: CompareResponse = serde_wasm_bindgen::from_value(json).map_err(|e| {
            gloo::console::warn!(format!("similarity_score missing: {}", e));
            CompareError::Service(GENERIC_API_ERROR.to_string())
        })?;
        api::score_from(body)
    }
}
