use super::{
    config::{HttpMethod, LookupConfig},
    HolidayLookup, LookupError, LookupRequest, LookupResult,
};
use async_trait::async_trait;
use reqwest::Client;

/// Holiday lookup over HTTP, configured by a [LookupConfig].
pub struct HttpHolidayLookup {
    config: LookupConfig,
    client: Client,
}

impl HttpHolidayLookup {
    pub fn new(config: LookupConfig) -> Self {
        HttpHolidayLookup {
            config,
            client: Client::new(),
        }
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }
}

#[async_trait]
impl HolidayLookup for HttpHolidayLookup {
    async fn lookup(&self, request: &LookupRequest) -> Result<LookupResult, LookupError> {
        let mut request_builder = match self.config.method {
            HttpMethod::Get => self.client.get(&self.config.endpoint).query(request),
            HttpMethod::Post => self.client.post(&self.config.endpoint).json(request),
        };
        request_builder = request_builder.timeout(self.config.timeout);

        for (key, value) in &self.config.request_headers {
            request_builder = request_builder.header(
                key,
                LookupConfig::header_value(value, &request.id_number),
            );
        }

        let response = request_builder.send().await?;
        let status = response.status().as_u16();
        if !self.config.is_valid_status(status) {
            return Err(LookupError::UnexpectedStatus(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
