use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use volunteer_hub_api_structs::ErrorResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum APIErrorVariant {
    Network,
    MalformedResponse,
    BadClientData,
    Unauthorized,
    NotFound,
    Conflict,
    InternalError,
    UnexpectedStatusCode,
}

#[derive(Debug)]
pub struct APIError {
    pub variant: APIErrorVariant,
    pub message: String,
}

pub type APIResponse<T> = Result<T, APIError>;

pub(crate) struct BaseClient {
    client: Client,
    address: String,
}

impl BaseClient {
    pub fn new(address: String) -> Self {
        let address = format!("{}/api/v1", address.trim_end_matches('/'));
        Self {
            client: Client::new(),
            address,
        }
    }

    fn url(&self, path: &str) -> String {
        if path.is_empty() {
            format!("{}/", self.address)
        } else {
            format!("{}/{}", self.address, path)
        }
    }

    async fn handle_api_response<T: DeserializeOwned>(
        &self,
        res: Response,
        expected_status_codes: &[StatusCode],
    ) -> APIResponse<T> {
        let status = res.status();
        if !expected_status_codes.contains(&status) {
            let variant = match status {
                StatusCode::BAD_REQUEST => APIErrorVariant::BadClientData,
                StatusCode::UNAUTHORIZED => APIErrorVariant::Unauthorized,
                StatusCode::NOT_FOUND => APIErrorVariant::NotFound,
                StatusCode::CONFLICT => APIErrorVariant::Conflict,
                StatusCode::INTERNAL_SERVER_ERROR => APIErrorVariant::InternalError,
                _ => APIErrorVariant::UnexpectedStatusCode,
            };
            let message = match res.json::<ErrorResponse>().await {
                Ok(body) => body.message,
                Err(_) => format!("Unexpected status code: {}", status),
            };
            return Err(APIError { variant, message });
        }

        res.json::<T>().await.map_err(|e| APIError {
            variant: APIErrorVariant::MalformedResponse,
            message: e.to_string(),
        })
    }

    async fn send<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        expected_status_codes: &[StatusCode],
    ) -> APIResponse<T> {
        let res = req.send().await.map_err(|e| APIError {
            variant: APIErrorVariant::Network,
            message: e.to_string(),
        })?;
        self.handle_api_response(res, expected_status_codes).await
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(self.client.get(self.url(&path)), &[expected_status_code])
            .await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(self.client.delete(self.url(&path)), &[expected_status_code])
            .await
    }

    pub async fn post<T: DeserializeOwned, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(
            self.client.post(self.url(&path)).json(&body),
            &[expected_status_code],
        )
        .await
    }

    pub async fn put<T: DeserializeOwned, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(
            self.client.put(self.url(&path)).json(&body),
            &[expected_status_code],
        )
        .await
    }

    /// Like `post` for endpoints answering with one of several success codes
    pub async fn post_expecting_any<T: DeserializeOwned, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_codes: &[StatusCode],
    ) -> APIResponse<T> {
        self.send(
            self.client.post(self.url(&path)).json(&body),
            expected_status_codes,
        )
        .await
    }
}
